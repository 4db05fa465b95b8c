//! Logging facilities for Horizon Menu.
//!
//! Horizon Menu uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the host installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_menu=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_menu_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_menu_core::signal";
    /// List selector widget target.
    pub const LIST_SELECTOR: &str = "horizon_menu::list_selector";
    /// Theme loading and color resolution target.
    pub const THEME: &str = "horizon_menu::theme";
    /// Performance spans.
    pub const PERF: &str = "horizon_menu::perf";
}

/// A guard for a performance tracing span.
///
/// The span stays entered until the guard is dropped.
///
/// ```ignore
/// fn relayout(&mut self) {
///     let _span = PerfSpan::new("relayout");
///     // ... layout work ...
/// }
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
