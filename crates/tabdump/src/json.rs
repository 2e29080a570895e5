//! Building Value trees from JSON
//!
//! For hosts that already hold `serde_json` data and want it rendered.
//! One-way: JSON comes in, table values come out. Arrays become tables
//! keyed `1..=n` (so they render in sequence form), objects become
//! text-keyed tables.

use crate::value::{Table, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // u64 beyond i64 range; precision loss is acceptable for
                // inspection output
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Table(Table::from_values(items.into_iter().map(Value::from)))
            }
            serde_json::Value::Object(fields) => {
                let table = Table::new();
                for (key, value) in fields {
                    table.set(key, Value::from(value));
                }
                Value::Table(table)
            }
        }
    }
}
