//! Core systems for Horizon Menu.
//!
//! This crate provides the foundational pieces shared by menu items and the
//! menus that host them:
//!
//! - **Signal/Slot System**: Type-safe notifications from items to hosts
//! - **Geometry**: Points, sizes, rectangles and colors used for layout
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_menu_core::Signal;
//!
//! let difficulty_changed = Signal::<String>::new();
//!
//! let conn_id = difficulty_changed.connect(|name| {
//!     println!("Difficulty is now {}", name);
//! });
//!
//! difficulty_changed.emit("Hard".to_string());
//! difficulty_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;
mod types;

pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use types::{Color, Point, Rect, Size};
