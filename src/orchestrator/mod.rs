//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ### `batch_processor` - 批量评分处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载文档（Vec<RawDocument>）
//! - 控制并发数量（Semaphore）
//! - 汇总答案卡与学生答卷，输出班级统计
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<RawDocument>)
//!     ↓
//! workflow::DocumentFlow (处理单份文档)
//!     ↓
//! services (能力层：extract / score / aggregate / warn / report)
//! ```
//!
//! ## 设计原则
//!
//! 1. **向下依赖**：编排层 → workflow → services
//! 2. **无业务逻辑**：只做调度和汇总，识别和评分规则都在 services

pub mod batch_processor;

pub use batch_processor::App;
