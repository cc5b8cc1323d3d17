use crate::error::{AppError, AppResult, ConfigError, FileError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 待评分文本文件所在目录（由外部 OCR / PDF 提取生成）
    pub documents_folder: String,
    /// 评分报告输出路径
    pub report_path: String,
    /// 警告文件路径
    pub warn_file: String,
    /// 输出日志文件
    pub output_log_file: String,
    /// 同时处理的文档数量
    pub max_concurrent_documents: usize,
    /// 答案卡标记词
    pub key_marker: String,
    /// 报告中是否保留原始文本
    pub include_raw_text: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 识别引擎配置
    pub engine: EngineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            documents_folder: "input_texts".to_string(),
            report_path: "class_report.json".to_string(),
            warn_file: "warn.txt".to_string(),
            output_log_file: "output.txt".to_string(),
            max_concurrent_documents: 16,
            key_marker: "GABARITO".to_string(),
            include_raw_text: false,
            verbose_logging: false,
            engine: EngineConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();
        let engine = match std::env::var("GRADING_CONFIG") {
            Ok(path) => EngineConfig::from_toml_file(Path::new(&path))?,
            Err(_) => default.engine,
        };

        let config = Self {
            documents_folder: std::env::var("DOCUMENTS_FOLDER").unwrap_or(default.documents_folder),
            report_path: std::env::var("REPORT_PATH").unwrap_or(default.report_path),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            max_concurrent_documents: std::env::var("MAX_CONCURRENT_DOCUMENTS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_documents),
            key_marker: std::env::var("KEY_MARKER").unwrap_or(default.key_marker),
            include_raw_text: std::env::var("INCLUDE_RAW_TEXT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.include_raw_text),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            engine,
        };
        config.validate()?;
        Ok(config)
    }

    /// 校验配置的基本约束
    pub fn validate(&self) -> AppResult<()> {
        if self.max_concurrent_documents == 0 {
            return Err(ConfigError::ZeroConcurrency.into());
        }
        self.engine.validate()
    }
}

/// 一条命名的识别规则
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RuleSpec {
    pub name: String,
    pub pattern: String,
}

impl RuleSpec {
    pub fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

/// 识别引擎配置
///
/// 引擎构造时一次性编译，之后只读共享。TOML 文件中的 `[engine]` 表可整体替换默认值。
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// 结构化题号-选项规则，按优先级排列（后处理的覆盖先处理的）
    pub pair_rules: Vec<RuleSpec>,
    /// 结构化规则全部落空时才使用的宽松规则
    pub fallback_rule: RuleSpec,
    /// 姓名标签规则，第 1 个捕获组为姓名
    pub name_rules: Vec<RuleSpec>,
    /// 学号标签规则，第 1 个捕获组为学号
    pub id_rules: Vec<RuleSpec>,
    /// 姓名搜索行数
    pub name_line_limit: usize,
    /// 学号搜索行数
    pub id_line_limit: usize,
    /// 行保留的最小长度（不含）
    pub min_line_len: usize,
    pub min_question: u32,
    pub max_question: u32,
    /// 未识别姓名时的占位值
    pub unidentified_name: String,
    /// 质量评估时允许的标点
    pub allowed_punctuation: String,
    /// 噪声字符比例阈值，超过则置信度减半
    pub noise_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pair_rules: vec![
                RuleSpec::new("separator", r"(?i)(\d+)[.)\-\s:]+([A-E])"),
                RuleSpec::new("colon_dash", r"(?i)(\d+)\s*[:\-]\s*([A-E])"),
                RuleSpec::new("whitespace", r"(?i)(\d+)\s+([A-E])"),
                RuleSpec::new("q_prefix", r"(?i)Q\s*(\d+)\s*[:\-]\s*([A-E])"),
                RuleSpec::new("ordinal", r"(?i)(\d+)[°º]?\s*[:\-]\s*([A-E])"),
            ],
            fallback_rule: RuleSpec::new("sequence", r"(?i)(\d+)([A-E])"),
            name_rules: vec![
                RuleSpec::new("nome", r"(?i)Nome[:\s]+(.+)"),
                RuleSpec::new("aluno", r"(?i)Aluno[:\s]+(.+)"),
                RuleSpec::new("estudante", r"(?i)Estudante[:\s]+(.+)"),
                RuleSpec::new("capitalized", r"(\p{Lu}\p{Ll}+ \p{Lu}\p{Ll}+ \p{Lu}\p{Ll}+)"),
            ],
            id_rules: vec![
                RuleSpec::new("matricula", r"(?i)Matr[íi]cula[:\s]+(\d+)"),
                RuleSpec::new("id", r"(?i)\bID[:\s]+(\d+)"),
                RuleSpec::new("numero", r"(?i)N[úu]mero[:\s]+(\d+)"),
                RuleSpec::new("ra", r"(?i)\bRA[:\s]+(\d+)"),
            ],
            name_line_limit: 15,
            id_line_limit: 10,
            min_line_len: 2,
            min_question: 1,
            max_question: 100,
            unidentified_name: "Aluno não identificado".to_string(),
            allowed_punctuation: ".,:;()-".to_string(),
            noise_threshold: 0.1,
        }
    }
}

impl EngineConfig {
    /// 从 TOML 文件加载引擎配置（读取其中的 `[engine]` 表）
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            AppError::File(FileError::TomlParseFailed { source, .. }) => {
                AppError::File(FileError::TomlParseFailed {
                    path: path.display().to_string(),
                    source,
                })
            }
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        #[derive(Deserialize)]
        struct EngineFile {
            #[serde(default)]
            engine: EngineConfig,
        }

        let file: EngineFile = toml::from_str(content)?;
        file.engine.validate()?;
        Ok(file.engine)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.min_question == 0 || self.min_question > self.max_question {
            return Err(ConfigError::InvalidQuestionRange {
                min: self.min_question,
                max: self.max_question,
            }
            .into());
        }
        if !(0.0..=1.0).contains(&self.noise_threshold) {
            return Err(ConfigError::InvalidNoiseThreshold {
                value: self.noise_threshold,
            }
            .into());
        }
        if self.name_line_limit == 0 {
            return Err(ConfigError::ZeroLineLimit {
                field: "name_line_limit",
            }
            .into());
        }
        if self.id_line_limit == 0 {
            return Err(ConfigError::ZeroLineLimit {
                field: "id_line_limit",
            }
            .into());
        }
        Ok(())
    }
}
