use serde::{Deserialize, Serialize};
use std::fmt;

/// 文本来源（由上游的提取服务决定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentOrigin {
    /// 图片经 OCR 得到
    Image,
    /// PDF 文本提取得到
    Pdf,
    /// 纯文本
    Text,
}

impl DocumentOrigin {
    /// 根据文件名推断来源，例如 `prova1.pdf.txt`、`aluno.jpg.txt`
    pub fn from_file_name(file_name: &str) -> Self {
        let lower = file_name.to_lowercase();
        let stem = lower.strip_suffix(".txt").unwrap_or(&lower);
        match stem.rsplit_once('.').map(|(_, ext)| ext) {
            Some("pdf") => DocumentOrigin::Pdf,
            Some("png" | "jpg" | "jpeg" | "tif" | "tiff" | "bmp" | "webp") => DocumentOrigin::Image,
            _ => DocumentOrigin::Text,
        }
    }
}

impl fmt::Display for DocumentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentOrigin::Image => write!(f, "图片"),
            DocumentOrigin::Pdf => write!(f, "PDF"),
            DocumentOrigin::Text => write!(f, "文本"),
        }
    }
}

/// 文档类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    AnswerKey,
    Submission,
}

impl DocumentKind {
    /// 文本中包含标记词（不区分大小写）即视为答案卡
    pub fn classify(text: &str, marker: &str) -> Self {
        if !marker.is_empty() && text.to_uppercase().contains(&marker.to_uppercase()) {
            DocumentKind::AnswerKey
        } else {
            DocumentKind::Submission
        }
    }
}

/// 待处理的原始文档
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub file_name: String,
    pub origin: DocumentOrigin,
    pub text: String,
}

impl RawDocument {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        let file_name = file_name.into();
        Self {
            origin: DocumentOrigin::from_file_name(&file_name),
            file_name,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_from_file_name() {
        assert_eq!(DocumentOrigin::from_file_name("prova.pdf.txt"), DocumentOrigin::Pdf);
        assert_eq!(DocumentOrigin::from_file_name("Foto.JPG.txt"), DocumentOrigin::Image);
        assert_eq!(DocumentOrigin::from_file_name("aluno.txt"), DocumentOrigin::Text);
    }

    #[test]
    fn test_classify_by_marker() {
        assert_eq!(
            DocumentKind::classify("Gabarito oficial\n1. A", "GABARITO"),
            DocumentKind::AnswerKey
        );
        assert_eq!(
            DocumentKind::classify("Nome: Ana Souza\n1. A", "GABARITO"),
            DocumentKind::Submission
        );
        assert_eq!(DocumentKind::classify("GABARITO", ""), DocumentKind::Submission);
    }
}
