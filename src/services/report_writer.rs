//! 评分报告输出 - 业务能力层
//!
//! 把结构化结果写成 JSON，交给下游的 AI 总结和 PDF 渲染使用。

use crate::error::{AppError, AppResult};
use crate::models::{AnswerKey, ClassStatistics, QuestionDifficulty, StudentSubmission};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// 报告中列出的最难题目数量
pub const HARDEST_QUESTIONS: usize = 5;

/// 完整评分报告
#[derive(Debug, Clone, Serialize)]
pub struct GradingReport {
    pub generated_at: DateTime<Local>,
    pub students_count: usize,
    pub total_questions: usize,
    pub answer_key: AnswerKey,
    pub students: Vec<StudentSubmission>,
    pub statistics: ClassStatistics,
    pub hardest_questions: Vec<QuestionDifficulty>,
}

impl GradingReport {
    /// # 参数
    /// - `include_raw_text`: 是否保留学生答卷的原始文本
    pub fn new(
        answer_key: AnswerKey,
        students: &[StudentSubmission],
        statistics: ClassStatistics,
        include_raw_text: bool,
    ) -> Self {
        let students = if include_raw_text {
            students.to_vec()
        } else {
            students.iter().map(StudentSubmission::without_raw_text).collect()
        };

        Self {
            generated_at: Local::now(),
            students_count: statistics.student_count,
            total_questions: statistics.total_questions,
            hardest_questions: statistics.hardest(HARDEST_QUESTIONS).to_vec(),
            answer_key,
            students,
            statistics,
        }
    }
}

/// 报告写入服务
#[derive(Debug, Clone)]
pub struct ReportWriter {
    report_path: PathBuf,
}

impl ReportWriter {
    pub fn new(report_path: impl AsRef<Path>) -> Self {
        Self {
            report_path: report_path.as_ref().to_path_buf(),
        }
    }

    /// 以格式化 JSON 写出报告
    pub async fn write(&self, report: &GradingReport) -> AppResult<()> {
        let json = serde_json::to_string_pretty(report)?;
        tokio::fs::write(&self.report_path, json)
            .await
            .map_err(|e| AppError::file_write_failed(self.report_path.display().to_string(), e))?;

        info!("📝 评分报告已写入: {}", self.report_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerLetter::*;
    use crate::services::statistics::aggregate;

    #[tokio::test]
    async fn test_report_written_without_raw_text() {
        let key: AnswerKey = [(1, A), (2, B)].into_iter().collect();
        let students = vec![StudentSubmission {
            name: "Ana Souza".to_string(),
            id: Some("12".to_string()),
            answers: [(1, A)].into_iter().collect(),
            raw_text: "Nome: Ana Souza\n1. A".to_string(),
            confidence: 1.0,
        }];
        let stats = aggregate(&key, &students);
        let report = GradingReport::new(key, &students, stats, false);
        assert_eq!(report.hardest_questions.len(), 2);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        ReportWriter::new(&path).write(&report).await.unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["students_count"], 1);
        assert_eq!(value["answer_key"]["2"], "B");
        assert!(value["students"][0].get("raw_text").is_none());
        assert_eq!(value["statistics"]["ranking"][0]["percentage"], 50.0);
        assert_eq!(value["hardest_questions"][0]["question_number"], 2);
    }
}
