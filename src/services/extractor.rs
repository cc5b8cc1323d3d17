//! 答案卡 / 学生答卷提取 - 业务能力层
//!
//! 图片 OCR 文本和 PDF 提取文本共用同一套规则，来源只由上游决定。

use crate::config::EngineConfig;
use crate::error::AppResult;
use crate::models::{AnswerKey, StudentSubmission};
use crate::services::identity::IdentityExtractor;
use crate::services::normalizer::TextNormalizer;
use crate::services::pattern_cascade::PatternCascade;
use crate::services::quality::QualityEstimator;

/// 文档提取器
#[derive(Debug, Clone)]
pub struct DocumentExtractor {
    normalizer: TextNormalizer,
    cascade: PatternCascade,
    identity: IdentityExtractor,
    quality: QualityEstimator,
}

impl DocumentExtractor {
    /// 编译全部规则；规则无效时返回配置错误
    pub fn new(config: &EngineConfig) -> AppResult<Self> {
        Ok(Self {
            normalizer: TextNormalizer::new(config),
            cascade: PatternCascade::new(config)?,
            identity: IdentityExtractor::new(config)?,
            quality: QualityEstimator::new(config),
        })
    }

    /// 提取答案卡
    pub fn extract_key(&self, raw_text: &str) -> AnswerKey {
        let cleaned = self.normalizer.normalize(raw_text);
        AnswerKey::new(self.cascade.match_pairs(&cleaned.search_text))
    }

    /// 提取学生答卷，原始文本原样保留
    pub fn extract_submission(&self, raw_text: &str) -> StudentSubmission {
        let cleaned = self.normalizer.normalize(raw_text);
        let identity = self.identity.extract_identity(&cleaned.lines);

        StudentSubmission {
            name: identity.name,
            id: identity.id,
            answers: self.cascade.match_pairs(&cleaned.search_text),
            raw_text: raw_text.to_string(),
            confidence: self.quality.estimate(raw_text),
        }
    }
}
