//! Order lifecycle management
//!
//! Orders walk a fixed five-stage pipeline:
//!
//! ```text
//! PLACED → RECEIVED → PREPARING → READY → SERVED
//! ```
//!
//! Every transition moves exactly one stage forward; nothing skips a stage,
//! nothing moves backward, and SERVED is terminal. Line items may only change
//! while the order sits in the first two stages. Payment collection is an
//! independent flag with no stage restriction.
//!
//! # Update Flow
//!
//! ```text
//! advance_status(id, change)
//!     ├─ 1. Begin write transaction
//!     ├─ 2. Load order inside the transaction
//!     ├─ 3. Check the transition (single step forward)
//!     ├─ 4. Record the prep estimate when entering PREPARING
//!     ├─ 5. Persist and commit
//!     └─ 6. Return the updated order
//! ```
//!
//! redb allows one write transaction at a time, so two staff members hitting
//! the same order race on the transaction, not on the order state.

use crate::orders::money;
use crate::store::FloorStore;
use crate::utils::time;
use shared::models::{Order, OrderDraft, OrderEdit, OrderFilter, OrderStatus, StatusChange};
use shared::{AppError, AppResult};

/// Blank instructions are stored as absent
fn normalize_instructions(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Order state machine over the floor store
///
/// Cheap to clone; all clones share one database handle.
#[derive(Clone)]
pub struct LifecycleManager {
    store: FloorStore,
}

impl LifecycleManager {
    pub fn new(store: FloorStore) -> Self {
        Self { store }
    }

    /// Create a new order in PLACED
    ///
    /// The id is minted from the store counter inside the same transaction
    /// that inserts the order, and the total is computed server-side from the
    /// validated line items.
    pub fn place_order(&self, draft: OrderDraft) -> AppResult<Order> {
        if draft.table_id.trim().is_empty() {
            return Err(AppError::invalid_argument("table_id must not be blank"));
        }
        money::validate_items(&draft.items)?;

        let total_price = money::order_total(&draft.items);
        let txn = self.store.begin_write()?;
        let id = self.store.next_order_id(&txn)?;
        let order = Order {
            id,
            table_id: draft.table_id,
            items: draft.items,
            status: OrderStatus::Placed,
            payment_method: draft.payment_method,
            payment_collected: false,
            total_price,
            special_instructions: normalize_instructions(draft.special_instructions),
            created_at: time::now_millis(),
            estimated_prep_minutes: None,
        };
        self.store.save_order(&txn, &order)?;
        self.store.commit(txn)?;

        tracing::info!(
            order_id = %order.id,
            table_id = %order.table_id,
            total = order.total_price,
            "Order placed"
        );
        Ok(order)
    }

    /// Move an order exactly one stage forward
    ///
    /// `change.target` must name the immediate successor of the current
    /// stage; anything else is rejected without touching the order. Entering
    /// PREPARING additionally requires a kitchen estimate.
    pub fn advance_status(&self, order_id: &str, change: StatusChange) -> AppResult<Order> {
        let txn = self.store.begin_write()?;
        let mut order = self
            .store
            .get_order_txn(&txn, order_id)?
            .ok_or_else(|| AppError::order_not_found(order_id))?;

        let expected = order.status.next().ok_or_else(|| {
            AppError::invalid_transition(format!("order {} is already served", order.id))
        })?;
        if change.target != expected {
            return Err(AppError::invalid_transition(format!(
                "cannot move from {} to {}; the next stage is {}",
                order.status, change.target, expected
            ))
            .with_detail("current", order.status.label())
            .with_detail("requested", change.target.label()));
        }

        if expected == OrderStatus::Preparing {
            let minutes = change.estimated_prep_minutes.ok_or_else(|| {
                AppError::invalid_argument(
                    "estimated_prep_minutes is required when moving to preparing",
                )
            })?;
            if minutes == 0 {
                return Err(AppError::invalid_argument(
                    "estimated_prep_minutes must be at least 1",
                ));
            }
            order.estimated_prep_minutes = Some(minutes);
        }

        order.status = expected;
        self.store.save_order(&txn, &order)?;
        self.store.commit(txn)?;

        tracing::info!(order_id = %order.id, status = %order.status, "Order advanced");
        Ok(order)
    }

    /// Set the payment-collected flag
    ///
    /// Allowed in every stage; cash changes hands whenever it changes hands.
    pub fn set_payment_collected(&self, order_id: &str, collected: bool) -> AppResult<Order> {
        let txn = self.store.begin_write()?;
        let mut order = self
            .store
            .get_order_txn(&txn, order_id)?
            .ok_or_else(|| AppError::order_not_found(order_id))?;

        order.payment_collected = collected;
        self.store.save_order(&txn, &order)?;
        self.store.commit(txn)?;

        tracing::info!(order_id = %order.id, collected, "Payment flag updated");
        Ok(order)
    }

    /// Replace an order's line items and instructions
    ///
    /// Only allowed while the kitchen has not started (PLACED or RECEIVED).
    /// The total is recomputed from the new items. `special_instructions`
    /// follows the payload convention: absent keeps, blank clears.
    pub fn edit_order(&self, order_id: &str, edit: OrderEdit) -> AppResult<Order> {
        money::validate_items(&edit.items)?;

        let txn = self.store.begin_write()?;
        let mut order = self
            .store
            .get_order_txn(&txn, order_id)?
            .ok_or_else(|| AppError::order_not_found(order_id))?;

        if !order.is_editable() {
            return Err(AppError::invalid_transition(format!(
                "order {} can no longer be edited in stage {}",
                order.id, order.status
            )));
        }

        order.total_price = money::order_total(&edit.items);
        order.items = edit.items;
        if let Some(instructions) = edit.special_instructions {
            order.special_instructions = normalize_instructions(Some(instructions));
        }

        self.store.save_order(&txn, &order)?;
        self.store.commit(txn)?;

        tracing::info!(
            order_id = %order.id,
            total = order.total_price,
            "Order items edited"
        );
        Ok(order)
    }

    /// Get one order
    pub fn get_order(&self, order_id: &str) -> AppResult<Order> {
        self.store
            .get_order(order_id)?
            .ok_or_else(|| AppError::order_not_found(order_id))
    }

    /// List orders, newest first
    ///
    /// `status` narrows to one stage; `search` is a case-insensitive
    /// substring match over order id and table id. Same-millisecond orders
    /// tie-break on id so the listing stays stable between polls.
    pub fn list_orders(&self, filter: &OrderFilter) -> AppResult<Vec<Order>> {
        let mut orders = self.store.get_all_orders()?;

        if let Some(status) = filter.status {
            orders.retain(|o| o.status == status);
        }
        if let Some(search) = filter.search.as_deref() {
            let needle = search.to_lowercase();
            if !needle.is_empty() {
                orders.retain(|o| {
                    o.id.to_lowercase().contains(&needle)
                        || o.table_id.to_lowercase().contains(&needle)
                });
            }
        }

        orders.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(orders)
    }

    /// Orders still in the pipeline (everything not yet served)
    pub fn active_orders(&self) -> AppResult<Vec<Order>> {
        let mut orders = self.store.get_all_orders()?;
        orders.retain(Order::is_active);
        Ok(orders)
    }
}

#[cfg(test)]
mod tests;
