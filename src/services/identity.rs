//! 学生身份识别 - 业务能力层
//!
//! 只在文档开头的若干行里寻找姓名和学号，找不到时给出占位值，不返回错误。

use crate::config::{EngineConfig, RuleSpec};
use crate::error::{AppError, AppResult, ConfigError};
use crate::models::Identity;
use regex::Regex;

/// 身份识别器
#[derive(Debug, Clone)]
pub struct IdentityExtractor {
    name_rules: Vec<Regex>,
    id_rules: Vec<Regex>,
    name_line_limit: usize,
    id_line_limit: usize,
    unidentified_name: String,
}

fn compile_labeled(rule: &RuleSpec) -> AppResult<Regex> {
    let regex = Regex::new(&rule.pattern).map_err(|e| AppError::invalid_rule(&rule.name, e))?;
    if regex.captures_len() < 2 {
        return Err(ConfigError::MissingCaptureGroup {
            name: rule.name.clone(),
            expected: 1,
            actual: 0,
        }
        .into());
    }
    Ok(regex)
}

impl IdentityExtractor {
    pub fn new(config: &EngineConfig) -> AppResult<Self> {
        Ok(Self {
            name_rules: config
                .name_rules
                .iter()
                .map(compile_labeled)
                .collect::<AppResult<_>>()?,
            id_rules: config
                .id_rules
                .iter()
                .map(compile_labeled)
                .collect::<AppResult<_>>()?,
            name_line_limit: config.name_line_limit,
            id_line_limit: config.id_line_limit,
            unidentified_name: config.unidentified_name.clone(),
        })
    }

    /// 从身份搜索行中提取姓名和学号
    pub fn extract_identity(&self, lines: &[String]) -> Identity {
        Identity {
            name: self
                .extract_name(lines)
                .unwrap_or_else(|| self.unidentified_name.clone()),
            id: self.extract_id(lines),
        }
    }

    /// 逐行、逐规则匹配，第一个像样的候选即为姓名
    fn extract_name(&self, lines: &[String]) -> Option<String> {
        lines
            .iter()
            .take(self.name_line_limit)
            .flat_map(|line| self.name_rules.iter().map(move |rule| (rule, line)))
            .filter_map(|(rule, line)| rule.captures(line))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
            .find(|name| is_plausible_name(name))
    }

    fn extract_id(&self, lines: &[String]) -> Option<String> {
        lines
            .iter()
            .take(self.id_line_limit)
            .flat_map(|line| self.id_rules.iter().map(move |rule| (rule, line)))
            .find_map(|(rule, line)| {
                rule.captures(line)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string())
            })
    }
}

/// 长度大于 3 且不是纯数字
fn is_plausible_name(name: &str) -> bool {
    name.chars().count() > 3 && !name.chars().all(|c| c.is_ascii_digit())
}
