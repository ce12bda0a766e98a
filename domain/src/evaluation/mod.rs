//! Evaluation domain
//!
//! Randomized arithmetic problems, per-trial scoring and the accuracy
//! statistics used to compare debate against the zero-shot baseline.

pub mod problem;
pub mod settings;
pub mod statistics;
pub mod trial;

pub use problem::ArithmeticProblem;
pub use settings::EvaluationSettings;
pub use statistics::RunStatistics;
pub use trial::{EvaluationReport, EvaluationTrial, TrialScore};
