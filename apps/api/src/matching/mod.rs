//! Career-match scoring engine.
//!
//! Answers → per-trait scores (`aggregator`) → weighted career sums
//! (`weights`) → clamped, sorted percentages (`ranker`). Everything here is
//! pure; the validated `QuizRegistry` is built once at startup and shared.

pub mod aggregator;
pub mod answers;
pub mod catalog;
pub mod ranker;
pub mod variants;
pub mod weights;

pub use answers::QuizAnswer;
pub use ranker::CareerMatch;
pub use variants::{QuizRegistry, QuizVariant, ScoringConfig};
pub use weights::ConfigurationError;
