//! Renderer configuration

/// Configuration for rendered output
///
/// Unspecified fields keep their defaults; struct-update syntax over
/// [`RenderConfig::default()`] is the partial-override surface:
///
/// ```
/// use tabdump::RenderConfig;
///
/// let config = RenderConfig {
///     max_depth: Some(4),
///     ..RenderConfig::default()
/// };
/// assert!(config.sort_keys);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Text prepended once per nesting level (default: two spaces)
    pub indent_unit: String,

    /// Recursion ceiling; `None` leaves depth unbounded, in which case
    /// recursion tracks the structural depth of the input and bounding
    /// untrusted input is the caller's job
    pub max_depth: Option<usize>,

    /// Order map keys deterministically: integer keys ascending, then text
    /// keys lexicographic (default: true)
    pub sort_keys: bool,

    /// Render each table's associated side-table as a synthetic
    /// `<metatable>` entry (default: false)
    pub show_metatables: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_unit: "  ".to_string(),
            max_depth: None,
            sort_keys: true,
            show_metatables: false,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the per-level indent text
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Cap recursion at `depth` levels
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Enable or disable deterministic key ordering
    pub fn with_sort_keys(mut self, sort: bool) -> Self {
        self.sort_keys = sort;
        self
    }

    /// Enable or disable side-table rendering
    pub fn with_show_metatables(mut self, show: bool) -> Self {
        self.show_metatables = show;
        self
    }
}
