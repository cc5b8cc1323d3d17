pub mod engine;
pub mod extractor;
pub mod identity;
pub mod normalizer;
pub mod pattern_cascade;
pub mod quality;
pub mod report_writer;
pub mod scoring;
pub mod statistics;
pub mod warn_writer;

pub use engine::GradingEngine;
pub use extractor::DocumentExtractor;
pub use identity::IdentityExtractor;
pub use normalizer::{CleanedText, TextNormalizer};
pub use pattern_cascade::PatternCascade;
pub use quality::QualityEstimator;
pub use report_writer::{GradingReport, ReportWriter};
pub use statistics::{aggregate, grade_batch};
pub use warn_writer::WarnWriter;
