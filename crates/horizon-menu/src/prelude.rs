//! Prelude module for Horizon Menu.
//!
//! ```ignore
//! use horizon_menu::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use crate::signal::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Menu Items
// ============================================================================

pub use crate::item::{ItemBase, MenuInput, MenuItem};
pub use crate::list_selector::{
    CursorState, Direction, ItemAddedEvent, ItemChangedEvent, ItemRemovedEvent, ListSelector,
};

// ============================================================================
// Rendering and Theming
// ============================================================================

pub use crate::painter::{ArrowDirection, MenuPainter, RecordingPainter, TextMetrics};
pub use crate::theme::{ColorState, MenuTheme};

// ============================================================================
// Geometry Types
// ============================================================================

pub use crate::{Color, Point, Rect, Size};
