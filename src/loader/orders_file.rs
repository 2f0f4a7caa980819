use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::api::order_dto::OrderDto;
use crate::domain::order::Order;
use crate::error::{Error, Result};

/// Reads the orders file: a JSON object from order number to an object with
/// at least a `destination`. Orders come back in the key order of the file.
pub fn load_orders(path: &Path) -> Result<Vec<Order>> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let unreadable = |reason: String| Error::FileUnreadable { path: path.to_path_buf(), reason };

    let data = fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
    let entries: Map<String, Value> = serde_json::from_str(&data).map_err(|e| unreadable(e.to_string()))?;

    let mut orders = Vec::with_capacity(entries.len());
    for (order_number, value) in entries {
        let dto: OrderDto =
            serde_json::from_value(value).map_err(|e| unreadable(format!("order '{}': {}", order_number, e)))?;
        orders.push(Order::from_dto(order_number, dto));
    }

    if orders.is_empty() {
        return Err(unreadable("the file contains no orders".to_string()));
    }

    log::info!("Loaded {} orders from '{}'.", orders.len(), path.display());
    Ok(orders)
}
