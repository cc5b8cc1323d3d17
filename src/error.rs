use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 评分调用错误
    #[error("评分错误: {0}")]
    Grading(#[from] GradingError),
    /// 报告输出错误
    #[error("报告错误: {0}")]
    Report(#[from] ReportError),
    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 识别规则无法编译
    #[error("规则 '{name}' 编译失败: {source}")]
    InvalidRule {
        name: String,
        #[source]
        source: regex::Error,
    },
    /// 识别规则缺少捕获组
    #[error("规则 '{name}' 需要至少 {expected} 个捕获组, 实际 {actual} 个")]
    MissingCaptureGroup {
        name: String,
        expected: usize,
        actual: usize,
    },
    /// 题号范围无效
    #[error("题号范围无效: {min}..={max}")]
    InvalidQuestionRange { min: u32, max: u32 },
    /// 噪声阈值不在 [0, 1] 内
    #[error("噪声阈值必须在 0 到 1 之间, 实际 {value}")]
    InvalidNoiseThreshold { value: f64 },
    /// 搜索行数为 0
    #[error("{field} 必须大于 0")]
    ZeroLineLimit { field: &'static str },
    /// 并发数无效
    #[error("并发数必须大于 0")]
    ZeroConcurrency,
}

/// 评分调用错误（调用方误用）
#[derive(Debug, Error)]
pub enum GradingError {
    /// 没有答案卡就开始评分
    #[error("缺少答案卡 (GABARITO)，无法评分")]
    MissingAnswerKey,
}

/// 报告输出错误
#[derive(Debug, Error)]
pub enum ReportError {
    /// JSON 序列化失败
    #[error("报告序列化失败: {0}")]
    SerializeFailed(#[source] serde_json::Error),
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Report(ReportError::SerializeFailed(err))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: String::new(), // TOML错误通常不包含路径信息
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建规则编译错误
    pub fn invalid_rule(name: impl Into<String>, source: regex::Error) -> Self {
        AppError::Config(ConfigError::InvalidRule {
            name: name.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        let err: AppError = GradingError::MissingAnswerKey.into();
        assert!(err.to_string().contains("答案卡"));
        assert!(matches!(
            err,
            AppError::Grading(GradingError::MissingAnswerKey)
        ));
    }

    #[test]
    fn test_invalid_rule_keeps_source() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let err = AppError::invalid_rule("pair_rule_1", regex_err);
        assert!(err.to_string().contains("pair_rule_1"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
