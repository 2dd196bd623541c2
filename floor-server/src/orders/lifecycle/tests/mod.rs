use super::*;

use shared::models::{LineItem, PaymentMethod};
use shared::ErrorCode;

fn create_test_manager() -> LifecycleManager {
    LifecycleManager::new(FloorStore::open_in_memory().unwrap())
}

fn line_item(name: &str, unit_price: f64, quantity: i32) -> LineItem {
    LineItem {
        menu_item_id: format!("menu-{}", name),
        name: name.to_string(),
        unit_price,
        quantity,
        special_instructions: None,
    }
}

/// Standard two-line draft: 2 x 10.00 + 1 x 5.00 = 25.00
fn draft_for(table_id: &str) -> OrderDraft {
    OrderDraft {
        table_id: table_id.to_string(),
        items: vec![line_item("burger", 10.0, 2), line_item("soda", 5.0, 1)],
        payment_method: PaymentMethod::Cash,
        special_instructions: None,
    }
}

// ========================================================================
// Helper: advance with an estimate supplied where required
// ========================================================================

fn advance(manager: &LifecycleManager, order_id: &str, target: OrderStatus) -> AppResult<Order> {
    let estimate = (target == OrderStatus::Preparing).then_some(15);
    manager.advance_status(
        order_id,
        StatusChange {
            target,
            estimated_prep_minutes: estimate,
        },
    )
}

/// Walk an order forward until it reaches `stop`
fn advance_to(manager: &LifecycleManager, order_id: &str, stop: OrderStatus) -> Order {
    let mut order = manager.get_order(order_id).unwrap();
    while order.status < stop {
        let target = order.status.next().unwrap();
        order = advance(manager, order_id, target).unwrap();
    }
    order
}

fn assert_close(actual: f64, expected: f64, msg: &str) {
    assert!(
        (actual - expected).abs() < 0.02,
        "{}: expected {:.2}, got {:.2}",
        msg,
        expected,
        actual
    );
}

mod test_core;
