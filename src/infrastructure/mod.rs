pub mod clock;
pub mod failure_log;
pub mod learner_store;
pub mod settings;

pub use clock::{FixedClock, SystemClock};
pub use failure_log::InMemoryFailureLog;
pub use learner_store::{InMemoryLearnerStore, LearnerDataFile, LearnerStores};
pub use settings::{EnvSettings, StaticSettings, parse_bool};
