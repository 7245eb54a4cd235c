//! Order Context - Value Objects

use serde::{Deserialize, Serialize};

/// 订单状态
///
/// 不变量:
/// - 状态只能向前推进（Pending → InProgress → Done）
/// - 线上序列化为整数码（0/1/2），与既有客户端兼容
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OrderStatus {
    /// 等待处理
    Pending,
    /// 推理进行中
    InProgress,
    /// 处理完成
    Done,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Done => "done",
        }
    }
}

impl From<OrderStatus> for u8 {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => 0,
            OrderStatus::InProgress => 1,
            OrderStatus::Done => 2,
        }
    }
}

impl TryFrom<u8> for OrderStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(OrderStatus::Pending),
            1 => Ok(OrderStatus::InProgress),
            2 => Ok(OrderStatus::Done),
            other => Err(format!("invalid order status code: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ordering_is_forward() {
        assert!(OrderStatus::Pending < OrderStatus::InProgress);
        assert!(OrderStatus::InProgress < OrderStatus::Done);
    }

    #[test]
    fn test_status_serializes_as_integer_code() {
        assert_eq!(serde_json::to_string(&OrderStatus::Pending).unwrap(), "0");
        assert_eq!(serde_json::to_string(&OrderStatus::InProgress).unwrap(), "1");
        assert_eq!(serde_json::to_string(&OrderStatus::Done).unwrap(), "2");
    }

    #[test]
    fn test_status_deserializes_from_integer_code() {
        let status: OrderStatus = serde_json::from_str("2").unwrap();
        assert_eq!(status, OrderStatus::Done);
        assert!(serde_json::from_str::<OrderStatus>("3").is_err());
    }
}
