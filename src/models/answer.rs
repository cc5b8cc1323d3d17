use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 选项字母
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
    E,
}

impl AnswerLetter {
    /// 从单个字符解析（不区分大小写），非 A-E 返回 None
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(AnswerLetter::A),
            'B' => Some(AnswerLetter::B),
            'C' => Some(AnswerLetter::C),
            'D' => Some(AnswerLetter::D),
            'E' => Some(AnswerLetter::E),
            _ => None,
        }
    }

    /// 从匹配到的文本解析，要求恰好一个字符
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            AnswerLetter::A => 'A',
            AnswerLetter::B => 'B',
            AnswerLetter::C => 'C',
            AnswerLetter::D => 'D',
            AnswerLetter::E => 'E',
        }
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// 题号 → 选项（按题号升序迭代）
pub type AnswerMap = BTreeMap<u32, AnswerLetter>;

/// 答案卡
///
/// 每批评分只提取一次，提取后不再修改。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey(AnswerMap);

impl AnswerKey {
    pub fn new(answers: AnswerMap) -> Self {
        Self(answers)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, question: u32) -> Option<AnswerLetter> {
        self.0.get(&question).copied()
    }

    /// 按题号升序遍历
    pub fn iter(&self) -> impl Iterator<Item = (u32, AnswerLetter)> + '_ {
        self.0.iter().map(|(q, l)| (*q, *l))
    }
}

impl FromIterator<(u32, AnswerLetter)> for AnswerKey {
    fn from_iter<T: IntoIterator<Item = (u32, AnswerLetter)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_parse() {
        assert_eq!(AnswerLetter::parse("a"), Some(AnswerLetter::A));
        assert_eq!(AnswerLetter::parse("E"), Some(AnswerLetter::E));
        assert_eq!(AnswerLetter::parse("F"), None);
        assert_eq!(AnswerLetter::parse("AB"), None);
        assert_eq!(AnswerLetter::parse(""), None);
    }

    #[test]
    fn test_key_serializes_as_plain_map() {
        let key: AnswerKey = [(2, AnswerLetter::B), (1, AnswerLetter::A)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#"{"1":"A","2":"B"}"#);
    }
}
