//! Order Context - Product Entities
//!
//! 商品为封闭变体集合（tagged union）:
//! - Basic: 普通商品，输出字段为不透明 JSON
//! - InferenceImage: 携带图像载荷的推理商品，输出为分类结果列表
//!
//! 只有图像变体的 `update_output` 有实际行为

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::OrderError;

/// 单条图像分类结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// 类别标签
    pub label: String,
    /// 置信度
    pub score: f32,
}

/// 基础商品
///
/// 不变量:
/// - price 非负
#[derive(Debug, Clone)]
pub struct BasicProduct {
    id: Uuid,
    name: String,
    price: f64,
    output: Option<serde_json::Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BasicProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self, OrderError> {
        let now = Utc::now();
        Self::from_record(Uuid::new_v4(), name.into(), price, None, now, now)
    }

    /// 从已有字段重建商品（用于反序列化路径）
    pub fn from_record(
        id: Uuid,
        name: String,
        price: f64,
        output: Option<serde_json::Value>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        if price < 0.0 {
            return Err(OrderError::NegativePrice(price));
        }
        Ok(Self {
            id,
            name,
            price,
            output,
            created_at,
            updated_at,
        })
    }

    pub fn output(&self) -> Option<&serde_json::Value> {
        self.output.as_ref()
    }
}

/// 图像推理商品
///
/// 携带输入图像字节，推理完成后输出分类结果列表
#[derive(Debug, Clone)]
pub struct InferenceImageProduct {
    id: Uuid,
    name: String,
    price: f64,
    image: Vec<u8>,
    output: Option<Vec<Classification>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl InferenceImageProduct {
    /// 默认商品名
    pub const DEFAULT_NAME: &'static str = "inference_image_product";
    /// 默认单价
    pub const DEFAULT_PRICE: f64 = 100.0;

    pub fn new(image: Vec<u8>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: Self::DEFAULT_NAME.to_string(),
            price: Self::DEFAULT_PRICE,
            image,
            output: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn output(&self) -> Option<&[Classification]> {
        self.output.as_deref()
    }

    /// 记录推理结果并刷新更新时间
    pub fn update_output(&mut self, output: Vec<Classification>) {
        self.output = Some(output);
        self.updated_at = Utc::now();
    }
}

/// 商品变体
#[derive(Debug, Clone)]
pub enum Product {
    Basic(BasicProduct),
    InferenceImage(InferenceImageProduct),
}

impl Product {
    pub fn id(&self) -> Uuid {
        match self {
            Product::Basic(p) => p.id,
            Product::InferenceImage(p) => p.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Product::Basic(p) => &p.name,
            Product::InferenceImage(p) => &p.name,
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            Product::Basic(p) => p.price,
            Product::InferenceImage(p) => p.price,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Product::Basic(p) => p.created_at,
            Product::InferenceImage(p) => p.created_at,
        }
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        match self {
            Product::Basic(p) => p.updated_at,
            Product::InferenceImage(p) => p.updated_at,
        }
    }

    /// 图像载荷，基础商品无图像
    pub fn image(&self) -> Option<&[u8]> {
        match self {
            Product::Basic(_) => None,
            Product::InferenceImage(p) => Some(p.image()),
        }
    }

    /// 记录推理结果
    ///
    /// 基础商品无推理输出，调用为 no-op
    pub fn update_output(&mut self, output: Vec<Classification>) {
        match self {
            Product::Basic(_) => {}
            Product::InferenceImage(p) => p.update_output(output),
        }
    }

    /// 输出字段的 JSON 视图（用于对外序列化）
    pub fn output_json(&self) -> Option<serde_json::Value> {
        match self {
            Product::Basic(p) => p.output().cloned(),
            Product::InferenceImage(p) => p
                .output()
                .map(|results| serde_json::to_value(results).unwrap_or(serde_json::Value::Null)),
        }
    }
}
