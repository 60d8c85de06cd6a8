pub mod evaluator;
pub mod policy;

pub use evaluator::{FailoverModeEvaluator, FailoverStatus};
pub use policy::FailoverPolicy;
