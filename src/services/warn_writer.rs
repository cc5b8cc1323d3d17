//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，不关心流程

use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// 警告写入服务
///
/// 职责：
/// - 记录需要人工复核的文档（没有识别到答案、没有识别到姓名等）
/// - 只处理单个文档的警告
/// - 不关心流程顺序
#[derive(Debug, Clone)]
pub struct WarnWriter {
    warn_file_path: PathBuf,
}

impl WarnWriter {
    /// 使用指定的文件路径创建
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            warn_file_path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.warn_file_path
    }

    /// 写入警告信息
    ///
    /// # 参数
    /// - `file_name`: 文档文件名
    /// - `reason`: 需要复核的原因
    pub async fn write(&self, file_name: &str, reason: &str) -> Result<()> {
        debug!("写入警告: 文档 {} | 原因: {}", file_name, reason);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .await?;

        let warn_msg = format!("文档 {} | 原因: {}\n", file_name, reason);

        file.write_all(warn_msg.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
