use std::fs;

use freight_scheduler::{error::Error, loader::orders_file::load_orders};
use tempfile::tempdir;

#[test]
fn test_orders_keep_file_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.json");
    fs::write(
        &path,
        r#"{
            "order-003": {"destination": "YYZ", "service": "24hr"},
            "order-001": {"destination": "YYC"},
            "order-002": {"destination": "YYZ"}
        }"#,
    )
    .unwrap();

    let orders = load_orders(&path).unwrap();
    let numbers: Vec<&str> = orders.iter().map(|o| o.order_number.as_str()).collect();
    assert_eq!(numbers, vec!["order-003", "order-001", "order-002"]);
    assert_eq!(orders[1].destination, "YYC");
    assert!(orders.iter().all(|o| o.assigned_flight.is_none()));
}

#[test]
fn test_missing_orders_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.json");

    assert!(matches!(load_orders(&path), Err(Error::FileNotFound(p)) if p == path));
}

#[test]
fn test_malformed_orders_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.json");

    fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(matches!(load_orders(&path), Err(Error::FileUnreadable { .. })));

    fs::write(&path, r#"{"order-001": {"dest": "YYZ"}}"#).unwrap();
    assert!(matches!(load_orders(&path), Err(Error::FileUnreadable { .. })));
}

#[test]
fn test_empty_orders_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.json");
    fs::write(&path, "{}").unwrap();

    assert!(matches!(load_orders(&path), Err(Error::FileUnreadable { .. })));
}
