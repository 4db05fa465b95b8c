//! Horizon Menu - menu items for in-game menus.
//!
//! The crate provides the item side of a menu: the [`MenuItem`] contract a host
//! menu drives every frame, the [`ListSelector`] item that cycles through a
//! list of values, theming through [`MenuTheme`], and the [`MenuPainter`] seam
//! to the host's renderer.
//!
//! # Example
//!
//! ```
//! use horizon_menu::prelude::*;
//!
//! let mut quality = ListSelector::new("Texture Quality", "", vec!["Low", "Medium", "High"]);
//! quality.changed.connect(|event| println!("Quality: {}", event.item));
//!
//! quality.recalculate(Point::new(0.0, 0.0), Size::new(430.0, 38.0), true);
//! quality.handle_input(MenuInput::Right);
//!
//! let mut painter = RecordingPainter::new();
//! quality.draw(&mut painter);
//! assert_eq!(painter.texts(), vec!["Medium"]);
//! ```

pub use horizon_menu_core::*;

mod error;
pub mod item;
pub mod list_selector;
pub mod painter;
pub mod prelude;
pub mod theme;

pub use error::{ListSelectorError, Result, ThemeError};
pub use item::{ItemBase, MenuInput, MenuItem};
pub use list_selector::{
    CursorState, Direction, ItemAddedEvent, ItemChangedEvent, ItemRemovedEvent, ListSelector,
    SelectorLayout,
};
pub use painter::{
    ArrowDirection, MenuPainter, MonospaceMetrics, PaintCommand, RecordingPainter, TextMetrics,
};
pub use theme::{ColorState, ItemColors, MenuTheme};
