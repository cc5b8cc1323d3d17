use serde::{Deserialize, Serialize};

/// 单个学生的得分结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub student_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    pub correct: u32,
    pub wrong: u32,
    /// 正确率，范围 [0, 100]
    pub percentage: f64,
    pub total_questions: u32,
}

/// 单道题目的难度
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDifficulty {
    pub question_number: u32,
    pub error_count: u32,
    pub error_percentage: f64,
}

/// 班级统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClassStatistics {
    pub average: f64,
    pub max: f64,
    pub min: f64,
    pub student_count: usize,
    pub total_questions: usize,
    /// 按正确率降序
    pub ranking: Vec<ScoreResult>,
    /// 按错误次数降序
    pub difficulty: Vec<QuestionDifficulty>,
}

impl ClassStatistics {
    /// 最难的前 n 道题
    pub fn hardest(&self, n: usize) -> &[QuestionDifficulty] {
        &self.difficulty[..n.min(self.difficulty.len())]
    }
}
