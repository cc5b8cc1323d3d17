//! 文档处理流程 - 流程层
//!
//! 核心职责：定义"一份文档"的完整处理流程
//!
//! 流程顺序：
//! 1. 按标记词判断是答案卡还是学生答卷
//! 2. 调用引擎提取
//! 3. 结果可疑时写入 warn.txt（兜底，供人工复核）

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{AnswerKey, DocumentKind, RawDocument, StudentSubmission};
use crate::services::{GradingEngine, WarnWriter};
use crate::utils::logging::truncate_text;
use crate::workflow::document_ctx::DocumentCtx;

/// 置信度低于该值时提示人工复核
const LOW_CONFIDENCE: f64 = 0.5;

/// 文档处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedDocument {
    /// 答案卡
    Key(AnswerKey),
    /// 学生答卷
    Submission(StudentSubmission),
}

/// 文档处理流程
///
/// - 编排单份文档的处理流程
/// - 决定是答案卡还是答卷、何时写警告
/// - 只依赖业务能力（services）
#[derive(Debug, Clone)]
pub struct DocumentFlow {
    engine: GradingEngine,
    warn_writer: WarnWriter,
    key_marker: String,
    unidentified_name: String,
    verbose_logging: bool,
}

impl DocumentFlow {
    /// 创建新的文档处理流程
    pub fn new(config: &Config, engine: GradingEngine) -> Self {
        Self {
            engine,
            warn_writer: WarnWriter::with_path(&config.warn_file),
            key_marker: config.key_marker.clone(),
            unidentified_name: config.engine.unidentified_name.clone(),
            verbose_logging: config.verbose_logging,
        }
    }

    pub async fn run(&self, document: &RawDocument, ctx: &DocumentCtx) -> Result<ExtractedDocument> {
        if self.verbose_logging {
            info!("{} 文本: {}", ctx, truncate_text(&document.text, 80));
        }

        match DocumentKind::classify(&document.text, &self.key_marker) {
            DocumentKind::AnswerKey => {
                info!("{} 🔑 检测到答案卡", ctx);
                let key = self.engine.extract_key(&document.text);
                info!("{} ✓ 答案卡共 {} 题", ctx, key.len());

                if key.is_empty() {
                    warn!("{} ⚠️ 答案卡中未识别到任何答案", ctx);
                    self.write_warn(ctx, "答案卡未识别到答案").await?;
                }
                Ok(ExtractedDocument::Key(key))
            }
            DocumentKind::Submission => {
                let submission = self.engine.extract_submission(&document.text);
                info!(
                    "{} 📄 学生答卷: {} | 作答 {} 题 | 置信度 {:.2}",
                    ctx,
                    submission.name,
                    submission.answers.len(),
                    submission.confidence
                );

                self.check_submission(&submission, ctx).await?;
                Ok(ExtractedDocument::Submission(submission))
            }
        }
    }

    /// 检查答卷是否需要人工复核
    async fn check_submission(&self, submission: &StudentSubmission, ctx: &DocumentCtx) -> Result<()> {
        if submission.answers.is_empty() {
            warn!("{} ⚠️ 未识别到任何答案", ctx);
            self.write_warn(ctx, "未识别到答案").await?;
        }
        if submission.name == self.unidentified_name {
            warn!("{} ⚠️ 未识别到学生姓名", ctx);
            self.write_warn(ctx, "未识别到姓名").await?;
        }
        if submission.confidence < LOW_CONFIDENCE {
            warn!("{} ⚠️ 文本质量较低 ({:.2})", ctx, submission.confidence);
            self.write_warn(ctx, &format!("文本质量较低 ({:.2})", submission.confidence))
                .await?;
        }
        Ok(())
    }

    async fn write_warn(&self, ctx: &DocumentCtx, reason: &str) -> Result<()> {
        self.warn_writer.write(&ctx.file_name, reason).await?;
        warn!("{} ⚠️ 已写入 {}: {}", ctx, self.warn_writer.path().display(), reason);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow_in(dir: &std::path::Path) -> DocumentFlow {
        let config = Config {
            warn_file: dir.join("warn.txt").to_string_lossy().to_string(),
            ..Config::default()
        };
        let engine = GradingEngine::new(&config.engine).unwrap();
        DocumentFlow::new(&config, engine)
    }

    #[tokio::test]
    async fn test_key_document() {
        let dir = tempfile::tempdir().unwrap();
        let flow = flow_in(dir.path());
        let document = RawDocument::new("gabarito.pdf.txt", "Gabarito\n1. A\n2. B");
        let ctx = DocumentCtx::new(1, document.file_name.clone(), document.origin);

        match flow.run(&document, &ctx).await.unwrap() {
            ExtractedDocument::Key(key) => assert_eq!(key.len(), 2),
            other => panic!("期望答案卡, 实际 {:?}", other),
        }
        assert!(!dir.path().join("warn.txt").exists());
    }

    #[tokio::test]
    async fn test_unreadable_submission_is_warned() {
        let dir = tempfile::tempdir().unwrap();
        let flow = flow_in(dir.path());
        let document = RawDocument::new("borrado.jpg.txt", "### ??? @@@");
        let ctx = DocumentCtx::new(2, document.file_name.clone(), document.origin);

        let result = flow.run(&document, &ctx).await.unwrap();
        assert!(matches!(result, ExtractedDocument::Submission(_)));

        let warnings = std::fs::read_to_string(dir.path().join("warn.txt")).unwrap();
        assert!(warnings.contains("未识别到答案"));
        assert!(warnings.contains("未识别到姓名"));
        assert!(warnings.contains("文本质量较低"));
    }
}
