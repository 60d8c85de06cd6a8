pub mod learner_service;

pub use learner_service::LearnerService;
