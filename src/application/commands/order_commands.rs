//! Order Commands

use uuid::Uuid;

use crate::domain::order::Product;

/// 上传的图像文件
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// 原始文件名（multipart 中可能缺失）
    pub filename: Option<String>,
    /// 文件内容
    pub bytes: Vec<u8>,
}

/// 创建订单命令
///
/// 每个文件生成一个图像推理商品，订单创建后进入后台预测队列
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub files: Vec<UploadedImage>,
}

/// 更新订单命令
///
/// 将给定商品逐个追加到订单（按 id 幂等）
#[derive(Debug)]
pub struct UpdateOrder {
    pub order_id: Uuid,
    pub products: Vec<Product>,
}

/// 执行订单预测命令（由后台 worker 发起）
#[derive(Debug, Clone)]
pub struct RunPrediction {
    pub order_id: Uuid,
}
