//! Classifier Adapters

mod fake_classifier;
mod http_classifier;

pub use fake_classifier::{FakeClassifier, FakeClassifierConfig};
pub use http_classifier::{HttpClassifier, HttpClassifierConfig};
