pub mod answer;
pub mod document;
pub mod loaders;
pub mod statistics;
pub mod submission;

pub use answer::{AnswerKey, AnswerLetter, AnswerMap};
pub use document::{DocumentKind, DocumentOrigin, RawDocument};
pub use loaders::{load_all_documents, load_document};
pub use statistics::{ClassStatistics, QuestionDifficulty, ScoreResult};
pub use submission::{Identity, StudentSubmission};
