//! 题号-选项识别规则级联 - 业务能力层
//!
//! 规则按优先级全部执行，后处理的候选覆盖先处理的同题号候选。
//! 只有结构化规则一个结果都没有时，才使用宽松的连写规则兜底。

use crate::config::{EngineConfig, RuleSpec};
use crate::error::{AppError, AppResult, ConfigError};
use crate::models::{AnswerLetter, AnswerMap};
use regex::Regex;
use std::ops::RangeInclusive;
use tracing::debug;

/// 编译后的单条规则
#[derive(Debug, Clone)]
struct PairRule {
    name: String,
    regex: Regex,
}

impl PairRule {
    fn compile(rule: &RuleSpec) -> AppResult<Self> {
        let regex =
            Regex::new(&rule.pattern).map_err(|e| AppError::invalid_rule(&rule.name, e))?;
        // captures_len 包含整体匹配的第 0 组
        let groups = regex.captures_len() - 1;
        if groups < 2 {
            return Err(ConfigError::MissingCaptureGroup {
                name: rule.name.clone(),
                expected: 2,
                actual: groups,
            }
            .into());
        }
        Ok(Self {
            name: rule.name.clone(),
            regex,
        })
    }
}

/// 规则级联
#[derive(Debug, Clone)]
pub struct PatternCascade {
    rules: Vec<PairRule>,
    fallback: PairRule,
    questions: RangeInclusive<u32>,
}

impl PatternCascade {
    pub fn new(config: &EngineConfig) -> AppResult<Self> {
        let rules = config
            .pair_rules
            .iter()
            .map(PairRule::compile)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            rules,
            fallback: PairRule::compile(&config.fallback_rule)?,
            questions: config.min_question..=config.max_question,
        })
    }

    /// 在单行搜索文本中识别所有题号-选项对
    pub fn match_pairs(&self, search_text: &str) -> AnswerMap {
        let mut answers = AnswerMap::new();

        for rule in &self.rules {
            self.apply(rule, search_text, &mut answers);
        }

        if answers.is_empty() {
            self.apply(&self.fallback, search_text, &mut answers);
            if !answers.is_empty() {
                debug!("结构化规则无结果，连写规则识别到 {} 个答案", answers.len());
            }
        }

        answers
    }

    fn apply(&self, rule: &PairRule, text: &str, answers: &mut AnswerMap) {
        let mut accepted = 0usize;
        for caps in rule.regex.captures_iter(text) {
            let (Some(number), Some(letter)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            if let Some((question, letter)) = self.validate(number.as_str(), letter.as_str()) {
                answers.insert(question, letter);
                accepted += 1;
            }
        }
        if accepted > 0 {
            debug!("规则 '{}' 命中 {} 次", rule.name, accepted);
        }
    }

    /// 题号超出范围或选项不在 A-E 的候选直接丢弃
    fn validate(&self, number: &str, letter: &str) -> Option<(u32, AnswerLetter)> {
        let question = number.parse::<u32>().ok()?;
        if !self.questions.contains(&question) {
            return None;
        }
        Some((question, AnswerLetter::parse(letter)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AnswerLetter::*;

    fn cascade() -> PatternCascade {
        PatternCascade::new(&EngineConfig::default()).unwrap()
    }

    fn map(pairs: &[(u32, AnswerLetter)]) -> AnswerMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_each_separator_recognized() {
        let c = cascade();
        assert_eq!(c.match_pairs("1. A"), map(&[(1, A)]));
        assert_eq!(c.match_pairs("2) B"), map(&[(2, B)]));
        assert_eq!(c.match_pairs("3: C"), map(&[(3, C)]));
        assert_eq!(c.match_pairs("4 D"), map(&[(4, D)]));
        assert_eq!(c.match_pairs("Q5: E"), map(&[(5, E)]));
        assert_eq!(c.match_pairs("6º: A"), map(&[(6, A)]));
        assert_eq!(c.match_pairs("7°- B"), map(&[(7, B)]));
        assert_eq!(c.match_pairs("8 - C"), map(&[(8, C)]));
    }

    #[test]
    fn test_mixed_conventions_in_one_text() {
        let text = "1. A 2) B 3: C 4 D q5 - e 6º: A";
        assert_eq!(
            cascade().match_pairs(text),
            map(&[(1, A), (2, B), (3, C), (4, D), (5, E), (6, A)])
        );
    }

    #[test]
    fn test_later_rule_overrides_earlier_rule() {
        // 序数规则排在分隔符规则之后，即使它的匹配在文本中更靠前
        assert_eq!(cascade().match_pairs("1º: B 1. A"), map(&[(1, B)]));
    }

    #[test]
    fn test_separator_forms_across_question_range() {
        let c = cascade();
        for n in [1u32, 50, 100] {
            for letter in [A, B, C, D, E] {
                let forms = [
                    format!("{}. {}", n, letter),
                    format!("{}) {}", n, letter),
                    format!("{}: {}", n, letter),
                    format!("{} - {}", n, letter),
                    format!("{} {}", n, letter),
                    format!("Q{}: {}", n, letter),
                    format!("{}º: {}", n, letter),
                ];
                for text in &forms {
                    assert_eq!(c.match_pairs(text), map(&[(n, letter)]), "文本: {}", text);
                }
            }
        }
    }

    #[test]
    fn test_lowercase_letters_uppercased() {
        assert_eq!(cascade().match_pairs("1. a 2. c"), map(&[(1, A), (2, C)]));
    }

    #[test]
    fn test_last_write_wins() {
        assert_eq!(cascade().match_pairs("1. A 1. B"), map(&[(1, B)]));
    }

    #[test]
    fn test_out_of_range_and_bad_letters_dropped() {
        let c = cascade();
        assert!(c.match_pairs("101. A").is_empty());
        assert!(c.match_pairs("0. A").is_empty());
        assert!(c.match_pairs("1. F").is_empty());
        assert_eq!(c.match_pairs("101. A 100. E"), map(&[(100, E)]));
    }

    #[test]
    fn test_huge_number_is_dropped_not_panicking() {
        assert!(cascade().match_pairs("99999999999999999999. A").is_empty());
    }

    #[test]
    fn test_fallback_only_when_structured_empty() {
        let c = cascade();
        assert_eq!(c.match_pairs("1A2B3C"), map(&[(1, A), (2, B), (3, C)]));
        // 结构化规则有结果时不合并连写规则
        assert_eq!(c.match_pairs("1A2B 3. C"), map(&[(3, C)]));
    }

    #[test]
    fn test_matching_is_idempotent() {
        let c = cascade();
        let text = "Q1: A 2) B 3 C 4º- D 5E";
        assert_eq!(c.match_pairs(text), c.match_pairs(text));
    }

    #[test]
    fn test_empty_text() {
        assert!(cascade().match_pairs("").is_empty());
    }

    #[test]
    fn test_rule_without_groups_rejected() {
        let mut config = EngineConfig::default();
        config.pair_rules[0] = RuleSpec::new("broken", r"\d+[A-E]");
        let err = PatternCascade::new(&config).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::MissingCaptureGroup { actual: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let mut config = EngineConfig::default();
        config.fallback_rule = RuleSpec::new("broken", r"(\d+");
        assert!(matches!(
            PatternCascade::new(&config),
            Err(AppError::Config(ConfigError::InvalidRule { .. }))
        ));
    }
}
