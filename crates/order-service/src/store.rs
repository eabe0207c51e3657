//! In-memory order store.
//!
//! Orders live for the lifetime of the process; restarting the service loses
//! them all. The store accepts arbitrary JSON bodies and merges them into the
//! stored order without validating their shape, matching the service's wire
//! contract.
//!
//! ID assignment (`orders.len() + 1`) happens under the store mutex, so ids
//! are strictly increasing and unique within one process even when orders are
//! created concurrently. The assigned `id`, `status` and `createdAt` fields
//! always win over anything the client put in the body.

use std::sync::Mutex;

use chrono::Utc;
use serde_json::{Map, Value, json};

/// Process-lifetime order storage.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Mutex<Vec<Value>>,
}

impl OrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an order from an arbitrary JSON body and store it.
    ///
    /// Non-object bodies are treated as empty objects; object bodies are
    /// copied field-for-field into the stored order.
    ///
    /// # Panics
    ///
    /// Panics if the store mutex is poisoned.
    #[allow(clippy::unwrap_used)]
    pub fn create(&self, body: Value) -> Value {
        let mut fields = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let mut orders = self.orders.lock().unwrap();

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let id = orders.len() as i64 + 1;
        fields.insert("id".to_string(), json!(id));
        fields.insert("status".to_string(), json!("pending"));
        fields.insert("createdAt".to_string(), json!(Utc::now()));

        let order = Value::Object(fields);
        orders.push(order.clone());
        order
    }

    /// Number of orders accepted so far.
    ///
    /// # Panics
    ///
    /// Panics if the store mutex is poisoned.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn len(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    /// Whether no orders have been accepted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_create_assigns_sequential_ids_and_pending_status() {
        let store = OrderStore::new();

        let first = store.create(json!({"total": 9599}));
        let second = store.create(json!({"total": 8099}));

        assert_eq!(first["id"], 1);
        assert_eq!(second["id"], 2);
        assert_eq!(first["status"], "pending");
        assert_eq!(second["status"], "pending");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_merges_arbitrary_body() {
        let store = OrderStore::new();
        let order = store.create(json!({"size": "M", "note": "gift wrap"}));

        assert_eq!(order["size"], "M");
        assert_eq!(order["note"], "gift wrap");
        assert!(order["createdAt"].is_string());
    }

    #[test]
    fn test_create_overrides_client_supplied_fields() {
        let store = OrderStore::new();
        let order = store.create(json!({"id": 999, "status": "shipped"}));

        assert_eq!(order["id"], 1);
        assert_eq!(order["status"], "pending");
    }

    #[test]
    fn test_create_tolerates_non_object_body() {
        let store = OrderStore::new();
        let order = store.create(json!("not an object"));

        assert_eq!(order["id"], 1);
        assert_eq!(order["status"], "pending");
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(OrderStore::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.create(json!({"total": 1}))["id"].clone())
            })
            .collect();

        let mut ids: Vec<i64> = handles
            .into_iter()
            .map(|h| h.join().unwrap().as_i64().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 16);
    }
}
