use super::answer::AnswerMap;
use serde::{Deserialize, Serialize};

/// 学生身份信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// 一份学生答卷的提取结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSubmission {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub answers: AnswerMap,
    /// 原始文本，仅用于审计和排查
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_text: String,
    /// 文本质量估计，范围 [0, 1]
    pub confidence: f64,
}

impl StudentSubmission {
    /// 去掉原始文本，用于下游输出
    pub fn without_raw_text(&self) -> Self {
        Self {
            raw_text: String::new(),
            ..self.clone()
        }
    }
}
