//! 文本清洗 - 业务能力层
//!
//! 把外部提取的原始文本整理成两种视图：单行搜索文本和身份搜索行。

use crate::config::EngineConfig;

/// 清洗后的文本
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedText {
    /// 换行折叠为空格后的单行文本，用于题号-选项匹配
    pub search_text: String,
    /// 开头若干条有效行（已去除首尾空白），用于身份识别
    pub lines: Vec<String>,
}

/// 文本清洗器
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    line_limit: usize,
    min_line_len: usize,
}

impl TextNormalizer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            line_limit: config.name_line_limit.max(config.id_line_limit),
            min_line_len: config.min_line_len,
        }
    }

    /// 清洗原始文本，任何输入都有结果
    pub fn normalize(&self, raw: &str) -> CleanedText {
        let search_text = raw
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect::<Vec<_>>()
            .join(" ");

        let lines = raw
            .lines()
            .map(str::trim)
            .filter(|line| line.chars().count() > self.min_line_len)
            .take(self.line_limit)
            .map(str::to_string)
            .collect();

        CleanedText { search_text, lines }
    }
}
