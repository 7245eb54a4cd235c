//! Infrastructure Adapters - 外部服务适配器

mod classifier;

pub use classifier::{FakeClassifier, FakeClassifierConfig, HttpClassifier, HttpClassifierConfig};
