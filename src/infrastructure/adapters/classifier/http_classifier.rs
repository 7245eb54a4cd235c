//! HTTP Classifier - 调用外部图像分类 HTTP 服务
//!
//! 实现 ClassifierPort trait，通过 HTTP 调用外部模型服务
//!
//! 外部分类 API:
//! POST {base_url}/classify
//! Request: 图像原始字节 (application/octet-stream)
//! Response: [{"label": "...", "score": 0.97}, ...]  (JSON)

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{ClassifierError, ClassifierPort};
use crate::domain::order::Classification;

/// HTTP 分类器配置
#[derive(Debug, Clone)]
pub struct HttpClassifierConfig {
    /// 模型服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpClassifierConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 分类器客户端
pub struct HttpClassifier {
    client: Client,
    config: HttpClassifierConfig,
}

impl HttpClassifier {
    pub fn new(config: HttpClassifierConfig) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClassifierError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn classify_url(&self) -> String {
        format!("{}/classify", self.config.base_url)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url)
    }
}

#[async_trait]
impl ClassifierPort for HttpClassifier {
    async fn classify(&self, image: &[u8]) -> Result<Vec<Classification>, ClassifierError> {
        tracing::debug!(
            url = %self.classify_url(),
            image_size = image.len(),
            "Sending classify request"
        );

        let response = self
            .client
            .post(self.classify_url())
            .header(http::header::CONTENT_TYPE, "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassifierError::Timeout
                } else if e.is_connect() {
                    ClassifierError::NetworkError(format!(
                        "Cannot connect to model service: {}",
                        e
                    ))
                } else {
                    ClassifierError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClassifierError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let results: Vec<Classification> = response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;

        tracing::info!(results = results.len(), "Classification completed");
        Ok(results)
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
