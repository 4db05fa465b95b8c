//! The contract between menu items and the menu that hosts them.
//!
//! A host menu owns a list of items. Every frame it forwards input to the
//! selected item through [`MenuItem::handle_input`], lays items out with
//! [`MenuItem::recalculate`] when the menu moves or the selection changes, and
//! paints them with [`MenuItem::draw`].
//!
//! Items keep their shared state in an [`ItemBase`] and expose it through
//! `item_base`/`item_base_mut`, the same split widgets use.

use std::sync::Arc;

use horizon_menu_core::{Point, Rect, Size};

use crate::painter::MenuPainter;
use crate::theme::{ColorState, ItemColors, MenuTheme};

/// Input the host routes to the selected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuInput {
    Left,
    Right,
    Accept,
    Back,
}

/// State shared by every kind of menu item.
#[derive(Debug, Clone)]
pub struct ItemBase {
    title: String,
    subtitle: String,
    enabled: bool,
    selected: bool,
    geometry: Rect,
    theme: Arc<MenuTheme>,
    colors: ItemColors,
}

impl ItemBase {
    /// Create an enabled, unselected item using the default theme.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        let theme = Arc::new(MenuTheme::default());
        let colors = theme.normal;
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            enabled: true,
            selected: false,
            geometry: Rect::ZERO,
            theme,
            colors,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled_flag(&mut self, enabled: bool) -> bool {
        let changed = self.enabled != enabled;
        self.enabled = enabled;
        changed
    }

    /// Whether the host last laid this item out as the selected row.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// The row rectangle assigned by the last [`MenuItem::recalculate`].
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Store the geometry and selection passed in by the host.
    pub fn set_layout(&mut self, pos: Point, size: Size, selected: bool) {
        self.geometry = Rect::from_origin_size(pos, size);
        self.selected = selected;
    }

    pub fn theme(&self) -> &Arc<MenuTheme> {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Arc<MenuTheme>) {
        self.theme = theme;
    }

    /// The state the item should currently be drawn in.
    pub fn color_state(&self) -> ColorState {
        ColorState::resolve(self.enabled, self.selected)
    }

    /// Colors resolved by the last [`MenuItem::update_colors`].
    pub fn colors(&self) -> ItemColors {
        self.colors
    }

    /// Resolve the colors for the current state from the theme.
    pub fn resolve_colors(&mut self) -> ItemColors {
        self.colors = self.theme.colors(self.color_state());
        self.colors
    }
}

/// A single row of an in-game menu.
pub trait MenuItem {
    /// Get a reference to the item base.
    fn item_base(&self) -> &ItemBase;

    /// Get a mutable reference to the item base.
    fn item_base_mut(&mut self) -> &mut ItemBase;

    /// Lay the item out at `pos` with the row `size` given by the host.
    fn recalculate(&mut self, pos: Point, size: Size, selected: bool);

    /// Paint the item.
    fn draw(&self, painter: &mut dyn MenuPainter);

    /// Re-resolve colors after the enabled or selected state changed.
    fn update_colors(&mut self);

    /// Handle input routed by the host. Returns `true` if the input was used.
    fn handle_input(&mut self, _input: MenuInput) -> bool {
        false
    }

    fn title(&self) -> &str {
        self.item_base().title()
    }

    fn subtitle(&self) -> &str {
        self.item_base().subtitle()
    }

    fn is_enabled(&self) -> bool {
        self.item_base().is_enabled()
    }

    /// Enable or disable the item, refreshing its colors on change.
    fn set_enabled(&mut self, enabled: bool) {
        if self.item_base_mut().set_enabled_flag(enabled) {
            self.update_colors();
        }
    }
}
