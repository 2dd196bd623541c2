//! Order Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status
///
/// The values form a total order: `Placed < Received < Preparing < Ready <
/// Served`. Transition legality and queue ordering both use this ordinal,
/// never string comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Placed,
    Received,
    Preparing,
    Ready,
    Served,
}

impl OrderStatus {
    /// All statuses in lifecycle order
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Placed,
        OrderStatus::Received,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Served,
    ];

    /// Position of this status in the lifecycle
    #[inline]
    pub const fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// The immediate successor in the lifecycle, `None` for the terminal state
    pub const fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Placed => Some(OrderStatus::Received),
            OrderStatus::Received => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Served),
            OrderStatus::Served => None,
        }
    }

    /// Whether this status ends the lifecycle
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Served)
    }

    /// Lowercase human-readable name, used in error messages
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Received => "received",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Served => "served",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Accepted payment instruments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    MobileMoney,
    Card,
}

/// Single line of an order
///
/// Owned exclusively by the order it belongs to; never shared across orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Menu item reference (String ID)
    pub menu_item_id: String,
    pub name: String,
    /// Unit price in currency unit
    pub unit_price: f64,
    pub quantity: i32,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

/// Customer order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub table_id: String,
    pub items: Vec<LineItem>,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub payment_collected: bool,
    /// Total amount in currency unit
    pub total_price: f64,
    pub special_instructions: Option<String>,
    pub created_at: Timestamp,
    /// Kitchen estimate in minutes, recorded when the order enters PREPARING
    pub estimated_prep_minutes: Option<u32>,
}

impl Order {
    /// Whether line items and instructions may still be changed
    pub fn is_editable(&self) -> bool {
        matches!(self.status, OrderStatus::Placed | OrderStatus::Received)
    }

    /// Whether the order still belongs in the live queue
    pub fn is_active(&self) -> bool {
        self.status != OrderStatus::Served
    }
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub table_id: String,
    pub items: Vec<LineItem>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

/// Edit order payload
///
/// `special_instructions = None` keeps the current value; a blank string
/// clears it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEdit {
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

/// Advance order status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChange {
    pub target: OrderStatus,
    /// Required when `target` is PREPARING, ignored otherwise
    #[serde(default)]
    pub estimated_prep_minutes: Option<u32>,
}

/// Set payment-collected flag payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentChange {
    pub collected: bool,
}

/// Order listing filter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderFilter {
    #[serde(default)]
    pub status: Option<OrderStatus>,
    /// Case-insensitive substring match over order id and table id
    #[serde(default)]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_total_order() {
        assert!(OrderStatus::Placed < OrderStatus::Received);
        assert!(OrderStatus::Received < OrderStatus::Preparing);
        assert!(OrderStatus::Preparing < OrderStatus::Ready);
        assert!(OrderStatus::Ready < OrderStatus::Served);

        assert_eq!(OrderStatus::Placed.ordinal(), 0);
        assert_eq!(OrderStatus::Served.ordinal(), 4);
    }

    #[test]
    fn test_status_next_walks_the_lifecycle() {
        assert_eq!(OrderStatus::Placed.next(), Some(OrderStatus::Received));
        assert_eq!(OrderStatus::Received.next(), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::Preparing.next(), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::Ready.next(), Some(OrderStatus::Served));
        assert_eq!(OrderStatus::Served.next(), None);
    }

    #[test]
    fn test_status_terminal() {
        assert!(OrderStatus::Served.is_terminal());
        for status in [
            OrderStatus::Placed,
            OrderStatus::Received,
            OrderStatus::Preparing,
            OrderStatus::Ready,
        ] {
            assert!(!status.is_terminal());
        }
    }

    #[test]
    fn test_status_serde_names() {
        let json = serde_json::to_string(&OrderStatus::Preparing).unwrap();
        assert_eq!(json, "\"PREPARING\"");

        let status: OrderStatus = serde_json::from_str("\"PLACED\"").unwrap();
        assert_eq!(status, OrderStatus::Placed);

        // Unknown values are rejected, not defaulted
        let result: Result<OrderStatus, _> = serde_json::from_str("\"CANCELLED\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_payment_method_serde_names() {
        let json = serde_json::to_string(&PaymentMethod::MobileMoney).unwrap();
        assert_eq!(json, "\"MOBILE_MONEY\"");

        let method: PaymentMethod = serde_json::from_str("\"CASH\"").unwrap();
        assert_eq!(method, PaymentMethod::Cash);
    }

    #[test]
    fn test_order_editable_window() {
        let mut order = Order {
            id: "order-1".to_string(),
            table_id: "T1".to_string(),
            items: vec![],
            status: OrderStatus::Placed,
            payment_method: PaymentMethod::Cash,
            payment_collected: false,
            total_price: 0.0,
            special_instructions: None,
            created_at: 0,
            estimated_prep_minutes: None,
        };

        assert!(order.is_editable());
        order.status = OrderStatus::Received;
        assert!(order.is_editable());
        order.status = OrderStatus::Preparing;
        assert!(!order.is_editable());
        order.status = OrderStatus::Served;
        assert!(!order.is_editable());
        assert!(!order.is_active());
    }
}
