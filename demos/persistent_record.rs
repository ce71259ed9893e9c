//! Persistence-Backed Record
//!
//! This example demonstrates a subject whose state lives in a storage layer.
//!
//! Key concepts:
//! - `Persistent` subjects are saved only when fired through `fire_persisted*`
//! - `fire_persisted` reports save failures through a hook and carries on
//! - `fire_persisted_strict` returns save failures to the caller
//! - Machine definitions can be loaded from JSON configuration
//!
//! Run with: cargo run --example persistent_record

use simple_state_machine::{Persistent, StateMachine, Subject};
use std::collections::HashMap;

const DEFINITION: &str = r#"{
    "version": 1,
    "events": {
        "pay": { "created": "paid" },
        "ship": { "paid": "shipped" },
        "cancel": { "created": "cancelled", "paid": "cancelled" }
    }
}"#;

#[derive(Debug, thiserror::Error)]
#[error("storage offline")]
struct StorageOffline;

/// Stand-in for a table of order rows.
#[derive(Default)]
struct Storage {
    rows: HashMap<u64, String>,
    online: bool,
}

struct Order<'a> {
    id: u64,
    status: Option<String>,
    storage: &'a mut Storage,
    errors: Vec<String>,
}

impl Subject for Order<'_> {
    fn state(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn set_state(&mut self, state: &str) {
        self.status = Some(state.to_string());
    }
}

impl Persistent for Order<'_> {
    type Error = StorageOffline;

    fn persist(&mut self) -> Result<(), StorageOffline> {
        if !self.storage.online {
            return Err(StorageOffline);
        }
        let status = self.status.clone().unwrap_or_default();
        self.storage.rows.insert(self.id, status);
        Ok(())
    }

    fn on_persist_failed(&mut self, error: &StorageOffline) {
        self.errors.push(error.to_string());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let machine = StateMachine::from_json(DEFINITION)?;
    println!("Loaded states: {:?}", machine.states());

    let mut storage = Storage {
        online: true,
        ..Storage::default()
    };

    {
        let mut order = Order {
            id: 1,
            status: Some("created".to_string()),
            storage: &mut storage,
            errors: Vec::new(),
        };

        machine.fire_persisted_strict(&mut order, "pay", |_, _| Ok::<_, StorageOffline>(()))?;
        println!("Order 1 paid, stored as {:?}", order.storage.rows.get(&1));

        order.storage.online = false;
        machine.fire_persisted(&mut order, "ship", |_, _| Ok::<_, StorageOffline>(()))?;
        println!(
            "Order 1 shipped in memory ({:?}), save errors: {:?}",
            order.state(),
            order.errors
        );
    }

    let mut order = Order {
        id: 2,
        status: Some("created".to_string()),
        storage: &mut storage,
        errors: Vec::new(),
    };
    match machine.fire_persisted_strict(&mut order, "cancel", |_, _| Ok::<_, StorageOffline>(())) {
        Ok(_) => println!("Order 2 cancelled"),
        Err(error) => println!("Order 2 cancel failed: {error} [{}]", error.error_code()),
    }

    Ok(())
}
