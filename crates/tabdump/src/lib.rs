//! tabdump: deterministic, human-readable rendering of nested table values
//!
//! Renders a [`Value`] tree as indented text for debugging and inspection.
//! Cyclic structures are safe (they degrade to `<cycle to path>` markers),
//! map keys come out in a fixed order, and recursion can be depth-capped.
//! One-way by design: there is no parser for the output, and no promise
//! the text is machine-readable.
//!
//! ```
//! use tabdump::{RenderConfig, Table, Value, render};
//!
//! let parts = Table::from_values(["bolt", "nut"]);
//! let root = Table::new();
//! root.set("name", "widget");
//! root.set("parts", parts);
//!
//! let text = render(&Value::Table(root), &RenderConfig::default());
//! assert_eq!(
//!     text,
//!     "{\n  name = \"widget\",\n  parts = {\n    \"bolt\",\n    \"nut\"\n  }\n}"
//! );
//! ```
//!
//! Key design points:
//! - `Table` is a shared handle with reference identity; cycle detection
//!   tracks the identities currently open on the render stack, so a table
//!   reused under two siblings renders twice in full while a true cycle
//!   stops at a marker naming the first-entry path.
//! - Rendering is total: every value has a defined text form and the walk
//!   always terminates. The one caller responsibility is capping
//!   [`RenderConfig::max_depth`] for untrusted, deeply nested input.

pub mod config;
pub mod path;
pub mod render;
pub mod value;

#[cfg(feature = "json")]
pub mod json;

pub use config::RenderConfig;
pub use render::{dump, render};
pub use value::{Key, KeyError, Table, Value};
