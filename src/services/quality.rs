//! 文本质量估计

use crate::config::EngineConfig;

/// 根据字符构成估计提取文本的可信度
#[derive(Debug, Clone)]
pub struct QualityEstimator {
    punctuation: Vec<char>,
    noise_threshold: f64,
}

impl QualityEstimator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            punctuation: config.allowed_punctuation.chars().collect(),
            noise_threshold: config.noise_threshold,
        }
    }

    /// 有效字符占比；噪声字符超过阈值时减半；空文本为 0
    pub fn estimate(&self, text: &str) -> f64 {
        let mut total = 0usize;
        let mut valid = 0usize;
        let mut strange = 0usize;

        for c in text.chars() {
            total += 1;
            let allowed_punct = self.punctuation.contains(&c);
            if c.is_ascii_alphanumeric() || c.is_whitespace() || allowed_punct {
                valid += 1;
            }
            if !(c.is_alphanumeric() || c == '_' || c.is_whitespace() || allowed_punct) {
                strange += 1;
            }
        }

        if total == 0 {
            return 0.0;
        }

        let mut score = valid as f64 / total as f64;
        if strange as f64 > total as f64 * self.noise_threshold {
            score *= 0.5;
        }
        score.clamp(0.0, 1.0)
    }
}
