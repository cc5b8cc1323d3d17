//! 评分引擎
//!
//! 构造时接收不可变的 `EngineConfig` 并编译全部规则，之后所有操作都是纯函数，
//! 可以在多个任务之间克隆共享。

use crate::config::EngineConfig;
use crate::error::AppResult;
use crate::models::{AnswerKey, ClassStatistics, ScoreResult, StudentSubmission};
use crate::services::extractor::DocumentExtractor;
use crate::services::{scoring, statistics};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GradingEngine {
    extractor: Arc<DocumentExtractor>,
}

impl GradingEngine {
    pub fn new(config: &EngineConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            extractor: Arc::new(DocumentExtractor::new(config)?),
        })
    }

    pub fn extract_key(&self, raw_text: &str) -> AnswerKey {
        self.extractor.extract_key(raw_text)
    }

    pub fn extract_submission(&self, raw_text: &str) -> StudentSubmission {
        self.extractor.extract_submission(raw_text)
    }

    pub fn score(&self, key: &AnswerKey, submission: &StudentSubmission) -> ScoreResult {
        scoring::score(key, submission)
    }

    pub fn aggregate(&self, key: &AnswerKey, submissions: &[StudentSubmission]) -> ClassStatistics {
        statistics::aggregate(key, submissions)
    }

    pub fn grade_batch(
        &self,
        key: Option<&AnswerKey>,
        submissions: &[StudentSubmission],
    ) -> AppResult<ClassStatistics> {
        statistics::grade_batch(key, submissions)
    }
}
