//! Active-orders queue views
//!
//! Pure functions over an order snapshot; nothing here touches the store.
//! The queue never shows SERVED orders. Two shapes are offered: a
//! grouped-by-stage view for the kitchen board and a flat combined view
//! where stage outranks age (a PLACED order always precedes a RECEIVED one,
//! however old the latter is).

use crate::utils::time;
use serde::Serialize;
use shared::models::{Order, OrderStatus};
use shared::Timestamp;

/// One order, annotated with how long the table has been waiting
#[derive(Debug, Clone, Serialize)]
pub struct QueueEntry {
    #[serde(flatten)]
    pub order: Order,
    pub wait_minutes: i64,
}

/// One stage bucket of the active queue
#[derive(Debug, Clone, Serialize)]
pub struct QueueGroup {
    pub status: OrderStatus,
    pub entries: Vec<QueueEntry>,
}

fn annotate(order: Order, now: Timestamp) -> QueueEntry {
    QueueEntry {
        wait_minutes: time::minutes_since(order.created_at, now),
        order,
    }
}

/// Group active orders by stage
///
/// Groups appear in pipeline order and a stage with no orders yields no
/// group. Within a group, oldest first; the kitchen works top-down.
pub fn active_queue(orders: &[Order], now: Timestamp) -> Vec<QueueGroup> {
    let mut groups = Vec::new();
    for status in OrderStatus::ALL {
        if status.is_terminal() {
            continue;
        }
        let mut entries: Vec<QueueEntry> = orders
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .map(|order| annotate(order, now))
            .collect();
        if entries.is_empty() {
            continue;
        }
        entries.sort_by(|a, b| {
            a.order
                .created_at
                .cmp(&b.order.created_at)
                .then_with(|| a.order.id.cmp(&b.order.id))
        });
        groups.push(QueueGroup { status, entries });
    }
    groups
}

/// Flat view of the active queue: stage ordinal first, then age
pub fn combined(orders: &[Order], now: Timestamp) -> Vec<QueueEntry> {
    let mut entries: Vec<QueueEntry> = orders
        .iter()
        .filter(|o| o.is_active())
        .cloned()
        .map(|order| annotate(order, now))
        .collect();
    entries.sort_by(|a, b| {
        a.order
            .status
            .cmp(&b.order.status)
            .then_with(|| a.order.created_at.cmp(&b.order.created_at))
            .then_with(|| a.order.id.cmp(&b.order.id))
    });
    entries
}
