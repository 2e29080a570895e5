//! Table rendering
//!
//! Renders a Value tree as indented, structurally faithful text for
//! debugging and inspection. Cycles degrade to `<cycle to path>` markers,
//! tables at or beyond the depth ceiling collapse to `{...}`, and map keys render
//! in a fixed order when sorting is on - so the same tree always produces
//! the same text.
//!
//! # Format Examples
//!
//! - Nil: `nil`
//! - Int: `42`
//! - Float: `3.5` (whole floats keep a decimal point: `2.0`)
//! - String: `"hello"` (with proper escaping)
//! - Opaque: `<function: 0x55e1c2a41b80>`
//! - Sequence table (keys exactly 1..=n):
//!   ```text
//!   {
//!     "bolt",
//!     "nut"
//!   }
//!   ```
//! - Map table:
//!   ```text
//!   {
//!     [2] = "two",
//!     name = "widget",
//!     ["two words"] = true
//!   }
//!   ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::Write;

use tracing::{debug, trace};

use crate::config::RenderConfig;
use crate::path::{Path, Step, is_identifier};
use crate::value::{Key, Table, Value};

/// Marker substituted for a table at or beyond the depth ceiling
const DEPTH_MARKER: &str = "{...}";

/// Label for the synthetic side-table entry
const META_LABEL: &str = "<metatable>";

/// Render `value` as indented text.
///
/// Total over all inputs: every value has a defined rendering, cyclic
/// structures terminate at cycle markers, and nothing here can fail.
pub fn render(value: &Value, config: &RenderConfig) -> String {
    trace!(
        sort_keys = config.sort_keys,
        max_depth = ?config.max_depth,
        "rendering value tree"
    );
    let mut renderer = Renderer {
        config,
        visited: HashMap::new(),
        path: Path::new(),
    };
    renderer.value(value, 0)
}

/// Render `value`, write the text plus a trailing newline to stdout in a
/// single write, and return the text.
///
/// Write errors are ignored; the rendered text comes back either way.
pub fn dump(value: &Value, config: &RenderConfig) -> String {
    let text = render(value, config);
    let mut line = String::with_capacity(text.len() + 1);
    line.push_str(&text);
    line.push('\n');
    let _ = std::io::stdout().lock().write_all(line.as_bytes());
    debug!(bytes = line.len(), "wrote rendered value to stdout");
    text
}

/// Call-scoped rendering state. Built fresh per top-level [`render`], never
/// shared across calls, so concurrent renders cannot observe each other.
struct Renderer<'a> {
    config: &'a RenderConfig,
    /// Table identity -> display path at first entry. Membership mirrors
    /// exactly the set of table ancestors on the active call stack:
    /// inserted on entry, removed on exit.
    visited: HashMap<usize, String>,
    path: Path,
}

impl Renderer<'_> {
    fn value(&mut self, value: &Value, depth: usize) -> String {
        match value {
            Value::Nil => "nil".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => float_text(*f),
            Value::Str(s) => quoted(s),
            Value::Opaque { kind, identity } => format!("<{}: {}>", kind, identity),
            Value::Table(t) => self.table(t, depth),
        }
    }

    fn table(&mut self, table: &Table, depth: usize) -> String {
        if let Some(first_entry) = self.visited.get(&table.identity()) {
            return format!("<cycle to {}>", first_entry);
        }
        if let Some(limit) = self.config.max_depth
            && depth >= limit
        {
            return DEPTH_MARKER.to_string();
        }

        self.visited.insert(table.identity(), self.path.to_string());

        // Snapshot under a brief lock, released before any recursion, so a
        // cyclic descent never re-locks an ancestor.
        let mut entries = table.entries();
        let meta = table.meta();

        let pad = self.config.indent_unit.repeat(depth + 1);
        let mut lines = Vec::with_capacity(entries.len());

        if sequence_len(&entries).is_some() {
            entries.sort_by(|(a, _), (b, _)| key_order(a, b));
            // Sorted integer keys are exactly 1..=n, so the position
            // encodes the key.
            for (index, (_, value)) in entries.iter().enumerate() {
                self.path.push(Step::Index(index as i64 + 1));
                let rendered = self.value(value, depth + 1);
                self.path.pop();
                lines.push(format!("{}{}", pad, rendered));
            }
        } else {
            if self.config.sort_keys {
                entries.sort_by(|(a, _), (b, _)| key_order(a, b));
            }
            for (key, value) in &entries {
                self.path.push(Step::Key(key.clone()));
                let rendered = self.value(value, depth + 1);
                self.path.pop();
                lines.push(format!("{}{} = {}", pad, key_text(key), rendered));
            }
        }

        if self.config.show_metatables
            && let Some(meta) = meta
        {
            self.path.push(Step::Meta);
            let rendered = self.table(&meta, depth + 1);
            self.path.pop();
            lines.push(format!("{}{} = {}", pad, META_LABEL, rendered));
        }

        self.visited.remove(&table.identity());

        if lines.is_empty() {
            "{}".to_string()
        } else {
            let closing = self.config.indent_unit.repeat(depth);
            format!("{{\n{}\n{}}}", lines.join(",\n"), closing)
        }
    }
}

/// Sequence test: every key a positive integer, the largest equal to the
/// entry count - keys exactly `1..=n`. One counting pass, evaluated fresh
/// for every table at every depth; classification is local, not inherited.
fn sequence_len(entries: &[(Key, Value)]) -> Option<usize> {
    let mut max: i64 = 0;
    for (key, _) in entries {
        match key {
            Key::Int(n) if *n >= 1 => max = max.max(*n),
            _ => return None,
        }
    }
    (max as usize == entries.len()).then_some(entries.len())
}

/// Fixed total order for map keys: integer keys ascending before text keys
/// lexicographic. Applied identically everywhere so repeated renders of an
/// unmodified table agree.
fn key_order(a: &Key, b: &Key) -> Ordering {
    match (a, b) {
        (Key::Int(x), Key::Int(y)) => x.cmp(y),
        (Key::Str(x), Key::Str(y)) => x.cmp(y),
        (Key::Int(_), Key::Str(_)) => Ordering::Less,
        (Key::Str(_), Key::Int(_)) => Ordering::Greater,
    }
}

/// Key as it appears left of `=`: bare for identifier-like text,
/// bracketed otherwise.
fn key_text(key: &Key) -> String {
    match key {
        Key::Int(n) => format!("[{}]", n),
        Key::Str(s) if is_identifier(s) => s.clone(),
        Key::Str(s) => format!("[{}]", quoted(s)),
    }
}

fn float_text(f: f64) -> String {
    let s = f.to_string();
    // Whole floats keep a decimal point so 2.0 stays distinct from 2
    if !s.contains('.') && f.is_finite() {
        format!("{}.0", s)
    } else {
        s
    }
}

/// Quote and escape text. Exactly backslash, double quote, newline,
/// carriage return, and tab become two-character escapes; every other
/// character passes through untouched.
pub(crate) fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
