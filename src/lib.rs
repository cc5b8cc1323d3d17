//! # Exam Grading
//!
//! 一个根据外部 OCR / PDF 提取文本批改选择题试卷的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用三层架构，外加纯函数的识别与统计引擎：
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个能力都是纯函数或只读共享
//! - `TextNormalizer` - 原始文本清洗
//! - `PatternCascade` - 题号-选项识别规则级联
//! - `IdentityExtractor` - 学生姓名 / 学号识别
//! - `DocumentExtractor` - 答案卡与学生答卷提取
//! - `scoring` / `statistics` - 单人评分与班级统计
//! - `WarnWriter` / `ReportWriter` - 写 warn.txt 与 JSON 报告
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一份文档"的完整处理流程
//! - `DocumentCtx` - 上下文封装（文档序号 + 文件名 + 来源）
//! - `DocumentFlow` - 流程编排（分类 → 提取 → 警告）
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量评分处理器，管理并发与汇总
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, EngineConfig};
pub use error::{AppError, AppResult};
pub use models::{
    AnswerKey, AnswerLetter, ClassStatistics, QuestionDifficulty, ScoreResult, StudentSubmission,
};
pub use orchestrator::App;
pub use services::GradingEngine;
pub use workflow::{DocumentCtx, DocumentFlow, ExtractedDocument};
