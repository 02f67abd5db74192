//! Tour cost computation and feasibility checking.

mod evaluator;

pub use evaluator::{TourEvaluator, Violation};
