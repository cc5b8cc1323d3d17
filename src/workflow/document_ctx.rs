//! 文档处理上下文
//!
//! 封装"我正在处理第几份文档、它叫什么"这一信息

use crate::models::DocumentOrigin;
use std::fmt::Display;

/// 文档处理上下文
#[derive(Debug, Clone)]
pub struct DocumentCtx {
    /// 文档索引（从1开始，仅用于日志显示）
    pub document_index: usize,

    /// 文件名
    pub file_name: String,

    /// 文本来源
    pub origin: DocumentOrigin,
}

impl DocumentCtx {
    pub fn new(document_index: usize, file_name: String, origin: DocumentOrigin) -> Self {
        Self {
            document_index,
            file_name,
            origin,
        }
    }
}

impl Display for DocumentCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文档 #{} {} 来源#{}]",
            self.document_index, self.file_name, self.origin
        )
    }
}
