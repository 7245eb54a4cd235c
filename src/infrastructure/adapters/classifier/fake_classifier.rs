//! Fake Classifier - 用于测试与离线运行的分类器
//!
//! 不调用外部模型服务，始终返回固定的分类结果

use async_trait::async_trait;
use std::time::Duration;

use crate::application::ports::{ClassifierError, ClassifierPort};
use crate::domain::order::Classification;

/// Fake 分类器配置
#[derive(Debug, Clone)]
pub struct FakeClassifierConfig {
    /// 固定返回的标签
    pub label: String,
    /// 固定返回的置信度
    pub score: f32,
    /// 模拟推理延迟（毫秒）
    pub latency_ms: u64,
}

impl Default for FakeClassifierConfig {
    fn default() -> Self {
        Self {
            label: "tabby_cat".to_string(),
            score: 0.97,
            latency_ms: 50,
        }
    }
}

/// Fake 分类器
pub struct FakeClassifier {
    config: FakeClassifierConfig,
}

impl FakeClassifier {
    pub fn new(config: FakeClassifierConfig) -> Self {
        Self { config }
    }
}

impl Default for FakeClassifier {
    fn default() -> Self {
        Self::new(FakeClassifierConfig::default())
    }
}

#[async_trait]
impl ClassifierPort for FakeClassifier {
    async fn classify(&self, image: &[u8]) -> Result<Vec<Classification>, ClassifierError> {
        tracing::debug!(
            image_size = image.len(),
            label = %self.config.label,
            "FakeClassifier: returning fixed result"
        );

        // 模拟推理延迟
        tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;

        Ok(vec![Classification {
            label: self.config.label.clone(),
            score: self.config.score,
        }])
    }

    async fn health_check(&self) -> bool {
        true
    }
}
