//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 分类器配置
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// 后台预测 worker 配置
    #[serde(default)]
    pub worker: WorkerConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 分类器后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierBackend {
    /// 内置假分类器，固定结果，无外部依赖
    Fake,
    /// 外部推理服务
    Http,
}

impl Default for ClassifierBackend {
    fn default() -> Self {
        ClassifierBackend::Fake
    }
}

/// 分类器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// 后端类型: fake 或 http
    #[serde(default)]
    pub backend: ClassifierBackend,

    /// 推理服务基础 URL（backend = http 时使用）
    #[serde(default = "default_classifier_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_classifier_timeout")]
    pub timeout_secs: u64,
}

fn default_classifier_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_classifier_timeout() -> u64 {
    30
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend: ClassifierBackend::default(),
            url: default_classifier_url(),
            timeout_secs: default_classifier_timeout(),
        }
    }
}

/// 后台预测 worker 配置
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerConfig {
    /// 预测开始前的排队延迟（秒）
    #[serde(default = "default_queue_delay")]
    pub queue_delay_secs: u64,

    /// 最大并发预测数
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// 预测队列容量
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

fn default_queue_delay() -> u64 {
    3
}

fn default_max_concurrent() -> usize {
    1
}

fn default_queue_capacity() -> usize {
    64
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            queue_delay_secs: default_queue_delay(),
            max_concurrent: default_max_concurrent(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
