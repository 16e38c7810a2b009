//! Client modules for the external services the detector depends on

pub mod classifier;
pub mod mailer;
pub mod storage;

pub use classifier::{Classifier, SageMakerClassifier};
pub use mailer::{Mailer, SesMailer};
pub use storage::{ObjectStore, S3ObjectStore};
