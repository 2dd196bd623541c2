use super::*;

#[test]
fn test_place_order() {
    let manager = create_test_manager();

    let order = manager.place_order(draft_for("T1")).unwrap();

    assert_eq!(order.id, "order-1");
    assert_eq!(order.table_id, "T1");
    assert_eq!(order.status, OrderStatus::Placed);
    assert!(!order.payment_collected);
    assert!(order.estimated_prep_minutes.is_none());
    assert_close(order.total_price, 25.0, "order total");

    let loaded = manager.get_order("order-1").unwrap();
    assert_eq!(loaded.items.len(), 2);
}

#[test]
fn test_place_order_ids_are_sequential() {
    let manager = create_test_manager();

    assert_eq!(manager.place_order(draft_for("T1")).unwrap().id, "order-1");
    assert_eq!(manager.place_order(draft_for("T2")).unwrap().id, "order-2");
    assert_eq!(manager.place_order(draft_for("T1")).unwrap().id, "order-3");
}

#[test]
fn test_place_order_rejects_blank_table() {
    let manager = create_test_manager();

    let mut draft = draft_for("T1");
    draft.table_id = "   ".to_string();

    let err = manager.place_order(draft).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidArgument);
}

#[test]
fn test_place_order_rejects_invalid_items() {
    let manager = create_test_manager();

    let mut draft = draft_for("T1");
    draft.items = vec![];
    let err = manager.place_order(draft).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidOrder);

    let mut draft = draft_for("T1");
    draft.items = vec![line_item("burger", -1.0, 1)];
    let err = manager.place_order(draft).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidOrder);

    let mut draft = draft_for("T1");
    draft.items = vec![line_item("burger", 10.0, 0)];
    let err = manager.place_order(draft).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidOrder);

    // Nothing was persisted
    let orders = manager.list_orders(&OrderFilter::default()).unwrap();
    assert!(orders.is_empty());
}

#[test]
fn test_place_order_normalizes_blank_instructions() {
    let manager = create_test_manager();

    let mut draft = draft_for("T1");
    draft.special_instructions = Some("   ".to_string());
    let order = manager.place_order(draft).unwrap();
    assert!(order.special_instructions.is_none());

    let mut draft = draft_for("T1");
    draft.special_instructions = Some("no onions".to_string());
    let order = manager.place_order(draft).unwrap();
    assert_eq!(order.special_instructions.as_deref(), Some("no onions"));
}

#[test]
fn test_get_order_not_found() {
    let manager = create_test_manager();

    let err = manager.get_order("order-404").unwrap_err();
    assert_eq!(err.code, ErrorCode::OrderNotFound);
}

#[test]
fn test_list_orders_newest_first() {
    let manager = create_test_manager();

    manager.place_order(draft_for("T1")).unwrap();
    manager.place_order(draft_for("T2")).unwrap();
    manager.place_order(draft_for("T3")).unwrap();

    let orders = manager.list_orders(&OrderFilter::default()).unwrap();
    let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["order-3", "order-2", "order-1"]);
}

#[test]
fn test_list_orders_filters_by_status() {
    let manager = create_test_manager();

    manager.place_order(draft_for("T1")).unwrap();
    manager.place_order(draft_for("T2")).unwrap();
    advance(&manager, "order-2", OrderStatus::Received).unwrap();

    let placed = manager
        .list_orders(&OrderFilter {
            status: Some(OrderStatus::Placed),
            search: None,
        })
        .unwrap();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].id, "order-1");

    let received = manager
        .list_orders(&OrderFilter {
            status: Some(OrderStatus::Received),
            search: None,
        })
        .unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].id, "order-2");
}

#[test]
fn test_list_orders_search_is_case_insensitive() {
    let manager = create_test_manager();

    manager.place_order(draft_for("Window-5")).unwrap();
    manager.place_order(draft_for("Patio-2")).unwrap();

    let hits = manager
        .list_orders(&OrderFilter {
            status: None,
            search: Some("window".to_string()),
        })
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].table_id, "Window-5");

    // Matches over the order id too
    let hits = manager
        .list_orders(&OrderFilter {
            status: None,
            search: Some("ORDER-2".to_string()),
        })
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].table_id, "Patio-2");
}

#[test]
fn test_active_orders_excludes_served() {
    let manager = create_test_manager();

    manager.place_order(draft_for("T1")).unwrap();
    manager.place_order(draft_for("T2")).unwrap();
    advance_to(&manager, "order-1", OrderStatus::Served);

    let active = manager.active_orders().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, "order-2");
}
