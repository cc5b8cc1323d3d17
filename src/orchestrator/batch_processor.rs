//! 批量评分处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量文档的处理和结果汇总。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：初始化日志文件、编译识别规则
//! 2. **批量加载**：扫描并加载所有待处理的文本文档（`Vec<RawDocument>`）
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：将文档分批次处理，每批完成后再开始下一批
//! 5. **统一汇总**：按加载顺序合并结果，选出答案卡，计算班级统计并写出报告

use crate::config::Config;
use crate::models::{AnswerKey, RawDocument, StudentSubmission};
use crate::services::{GradingEngine, GradingReport, ReportWriter};
use crate::utils::logging::{
    init_log_file, log_batch_complete, log_batch_start, log_documents_loaded, log_startup,
    print_final_stats,
};
use crate::workflow::{DocumentCtx, DocumentFlow, ExtractedDocument};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    engine: GradingEngine,
    flow: DocumentFlow,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        // 初始化日志文件
        init_log_file(&config.output_log_file)
            .with_context(|| format!("无法初始化日志文件: {}", config.output_log_file))?;

        log_startup(config.max_concurrent_documents);

        // 规则只编译一次，之后在所有任务间共享
        let engine = GradingEngine::new(&config.engine)?;
        let flow = DocumentFlow::new(&config, engine.clone());

        Ok(Self {
            config,
            engine,
            flow,
        })
    }

    /// 运行应用主逻辑
    ///
    /// 没有待处理文档时返回 `None`；有答卷但没有答案卡时返回错误。
    pub async fn run(&self) -> Result<Option<GradingReport>> {
        let documents = self.load_documents().await?;

        if documents.is_empty() {
            warn!("⚠️ 没有找到待处理的文本文件，程序结束");
            return Ok(None);
        }

        log_documents_loaded(documents.len(), self.config.max_concurrent_documents);

        let outcome = self.process_all_documents(documents).await?;
        let key = select_answer_key(outcome.keys);

        let statistics = self
            .engine
            .grade_batch(key.as_ref(), &outcome.submissions)
            .context("评分失败")?;

        let report = GradingReport::new(
            key.unwrap_or_default(),
            &outcome.submissions,
            statistics,
            self.config.include_raw_text,
        );
        ReportWriter::new(&self.config.report_path)
            .write(&report)
            .await?;

        print_final_stats(&report.statistics, outcome.failed, &self.config.report_path);

        Ok(Some(report))
    }

    /// 加载文档
    async fn load_documents(&self) -> Result<Vec<RawDocument>> {
        info!("\n📁 正在扫描待处理的文档...");
        crate::models::load_all_documents(&self.config.documents_folder).await
    }

    /// 处理所有文档
    async fn process_all_documents(&self, documents: Vec<RawDocument>) -> Result<BatchOutcome> {
        let batch_size = self.config.max_concurrent_documents;
        let semaphore = Arc::new(Semaphore::new(batch_size));
        let total = documents.len();
        let total_batches = total.div_ceil(batch_size);
        let mut outcome = BatchOutcome::default();

        for (batch_idx, batch) in documents.chunks(batch_size).enumerate() {
            let batch_start = batch_idx * batch_size;
            log_batch_start(
                batch_idx + 1,
                total_batches,
                batch_start + 1,
                batch_start + batch.len(),
                total,
            );

            let success = self
                .process_batch(batch, batch_start, semaphore.clone(), &mut outcome)
                .await?;

            log_batch_complete(batch_idx + 1, success, batch.len());
        }

        Ok(outcome)
    }

    /// 处理单个批次，结果按文档顺序合并
    async fn process_batch(
        &self,
        batch: &[RawDocument],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
        outcome: &mut BatchOutcome,
    ) -> Result<usize> {
        let mut handles = Vec::with_capacity(batch.len());

        for (idx, document) in batch.iter().enumerate() {
            let ctx = DocumentCtx::new(
                batch_start + idx + 1,
                document.file_name.clone(),
                document.origin,
            );
            let permit = semaphore.clone().acquire_owned().await?;
            let flow = self.flow.clone();
            let document = document.clone();
            let task_ctx = ctx.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                flow.run(&document, &task_ctx).await
            });
            handles.push((ctx, handle));
        }

        let mut success = 0;
        for (ctx, handle) in handles {
            match handle.await {
                Ok(Ok(ExtractedDocument::Key(key))) => {
                    outcome.keys.push((ctx.file_name, key));
                    success += 1;
                }
                Ok(Ok(ExtractedDocument::Submission(submission))) => {
                    outcome.submissions.push(submission);
                    success += 1;
                }
                Ok(Err(e)) => {
                    error!("{} ❌ 处理过程中发生错误: {}", ctx, e);
                    outcome.failed += 1;
                }
                Err(e) => {
                    error!("{} 任务执行失败: {}", ctx, e);
                    outcome.failed += 1;
                }
            }
        }

        Ok(success)
    }
}

/// 多份答案卡时以加载顺序中的最后一份为准
fn select_answer_key(mut keys: Vec<(String, AnswerKey)>) -> Option<AnswerKey> {
    if keys.len() > 1 {
        let names: Vec<&str> = keys.iter().map(|(name, _)| name.as_str()).collect();
        warn!(
            "⚠️ 发现 {} 份答案卡 ({})，使用最后一份",
            keys.len(),
            names.join(", ")
        );
    }
    keys.pop().map(|(name, key)| {
        info!("🔑 使用答案卡: {} ({} 题)", name, key.len());
        key
    })
}

/// 批量处理结果
#[derive(Debug, Default)]
struct BatchOutcome {
    keys: Vec<(String, AnswerKey)>,
    submissions: Vec<StudentSubmission>,
    failed: usize,
}
