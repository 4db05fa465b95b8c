//! ListSelector menu item.
//!
//! A `ListSelector<T>` shows one value out of an ordered list and lets the
//! player cycle through the list with left/right input. The list wraps around
//! in both directions.
//!
//! # Example
//!
//! ```
//! use horizon_menu::{Direction, ListSelector};
//!
//! let mut difficulty = ListSelector::new("Difficulty", "", vec!["Easy", "Normal", "Hard"]);
//!
//! difficulty.changed.connect(|event| {
//!     println!("{} selected ({:?})", event.item, event.direction);
//! });
//!
//! difficulty.go_right();
//! assert_eq!(difficulty.selected_item(), Some(&"Normal"));
//! ```
//!
//! # Signals
//!
//! - `changed(ItemChangedEvent<T>)`: the selection was moved by navigation or
//!   by assigning the selected index/item. Structural changes that only shift
//!   or clamp the cursor do not emit it.
//! - `added(ItemAddedEvent<T>)`: emitted by [`ListSelector::add`] and
//!   [`ListSelector::add_at`].
//! - `removed(ItemRemovedEvent<T>)`: emitted by [`ListSelector::remove`] and
//!   [`ListSelector::remove_at`].
//!
//! [`ListSelector::set_items`], [`ListSelector::remove_where`] and
//! [`ListSelector::clear`] are bulk operations and emit nothing.

use std::fmt;
use std::sync::Arc;

use horizon_menu_core::logging::targets;
use horizon_menu_core::{PerfSpan, Point, Rect, Signal, Size};

use crate::error::{ListSelectorError, Result};
use crate::item::{ItemBase, MenuInput, MenuItem};
use crate::painter::{ArrowDirection, MenuPainter, MonospaceMetrics, TextMetrics};
use crate::theme::MenuTheme;

/// What caused a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// The selection was assigned programmatically.
    #[default]
    Unknown,
    Left,
    Right,
}

/// Arguments of the `changed` signal.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemChangedEvent<T> {
    pub item: T,
    pub index: usize,
    pub direction: Direction,
}

/// Arguments of the `added` signal.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemAddedEvent<T> {
    pub item: T,
    pub position: usize,
}

/// Arguments of the `removed` signal.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRemovedEvent<T> {
    pub item: T,
    pub position: usize,
}

/// State of the selection cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// No items, nothing selected.
    Empty,
    /// The cursor points at a valid index.
    Bounded(usize),
}

/// Positions of the label and arrows computed by the last relayout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectorLayout {
    /// Top-left corner of the label.
    pub text_origin: Point,
    /// Measured size of the label.
    pub text_size: Size,
    pub left_arrow: Rect,
    pub right_arrow: Rect,
    /// Arrows are only shown on the selected, enabled row.
    pub arrows_visible: bool,
}

type Formatter<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// A menu item that cycles through a list of values.
///
/// The selector always has a valid selection while it holds at least one item.
/// When empty, [`selected_index`](Self::selected_index) reads as `-1` and
/// [`selected_item`](Self::selected_item) as `None`.
pub struct ListSelector<T> {
    base: ItemBase,
    items: Vec<T>,
    /// Meaningful only while `items` is non-empty.
    index: usize,
    formatter: Formatter<T>,
    metrics: Arc<dyn TextMetrics>,
    layout: SelectorLayout,
    layout_revision: u64,

    /// Signal emitted when the selection is moved.
    pub changed: Signal<ItemChangedEvent<T>>,
    /// Signal emitted when a single item is inserted.
    pub added: Signal<ItemAddedEvent<T>>,
    /// Signal emitted when a single item is removed.
    pub removed: Signal<ItemRemovedEvent<T>>,
}

impl<T> ListSelector<T>
where
    T: Clone + Send + 'static,
{
    /// Create a selector labelling its values with their `Display` output.
    ///
    /// The first item, if any, starts out selected.
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        items: impl IntoIterator<Item = T>,
    ) -> Self
    where
        T: fmt::Display,
    {
        Self::new_with_formatter(title, subtitle, items, |item: &T| item.to_string())
    }

    /// Create a selector with a custom label formatter.
    pub fn new_with_formatter<F>(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        items: impl IntoIterator<Item = T>,
        formatter: F,
    ) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let mut selector = Self {
            base: ItemBase::new(title, subtitle),
            items: items.into_iter().collect(),
            index: 0,
            formatter: Box::new(formatter),
            metrics: Arc::new(MonospaceMetrics::default()),
            layout: SelectorLayout::default(),
            layout_revision: 0,
            changed: Signal::new(),
            added: Signal::new(),
            removed: Signal::new(),
        };
        selector.relayout();
        selector
    }

    /// Use a shared theme for colors and arrow metrics.
    pub fn with_theme(mut self, theme: Arc<MenuTheme>) -> Self {
        self.base.set_theme(theme);
        self.update_colors();
        self.relayout();
        self
    }

    /// Use the host's text metrics for layout.
    pub fn with_metrics(mut self, metrics: Arc<dyn TextMetrics>) -> Self {
        self.metrics = metrics;
        self.relayout();
        self
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// The backing list, in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the whole list.
    ///
    /// This is a silent swap: no `added`/`removed` signals are emitted. The
    /// cursor is kept when still in range and clamped otherwise.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = T>) {
        self.items = items.into_iter().collect();
        tracing::debug!(
            target: targets::LIST_SELECTOR,
            count = self.items.len(),
            "replaced items"
        );
        self.repair_cursor();
        self.relayout();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the first item equal to `item`.
    pub fn position_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|candidate| candidate == item)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.position_of(item).is_some()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Index of the selected item, or `-1` when the list is empty.
    ///
    /// Saturates at `i32::MAX` for longer lists.
    pub fn selected_index(&self) -> i32 {
        match self.cursor_state() {
            CursorState::Empty => -1,
            CursorState::Bounded(index) => i32::try_from(index).unwrap_or(i32::MAX),
        }
    }

    /// Select the item at `index`.
    ///
    /// Emits `changed` with [`Direction::Unknown`] unless `index` is already
    /// selected.
    ///
    /// # Errors
    ///
    /// - [`ListSelectorError::InvalidState`] if the list is empty.
    /// - [`ListSelectorError::OutOfRange`] if `index` is negative or past the end.
    pub fn set_selected_index(&mut self, index: i32) -> Result<()> {
        let len = self.items.len();
        if len == 0 {
            tracing::debug!(target: targets::LIST_SELECTOR, index, "cannot select in an empty list");
            return Err(ListSelectorError::InvalidState);
        }
        if index < 0 || index as usize >= len {
            tracing::debug!(target: targets::LIST_SELECTOR, index, len, "selected index out of range");
            return Err(ListSelectorError::out_of_range(index, len));
        }
        self.select(index as usize);
        Ok(())
    }

    /// The selected item, or `None` when the list is empty.
    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Select the first item equal to `item`.
    ///
    /// Does nothing on an empty list.
    ///
    /// # Errors
    ///
    /// [`ListSelectorError::NotFound`] if no item equals `item`.
    pub fn set_selected_item(&mut self, item: &T) -> Result<()>
    where
        T: PartialEq,
    {
        if self.items.is_empty() {
            tracing::trace!(target: targets::LIST_SELECTOR, "ignoring item selection on an empty list");
            return Ok(());
        }
        let Some(position) = self.position_of(item) else {
            tracing::debug!(target: targets::LIST_SELECTOR, "item to select is not in the list");
            return Err(ListSelectorError::NotFound);
        };
        self.select(position);
        Ok(())
    }

    /// The label of the selected item.
    pub fn selected_label(&self) -> Option<String> {
        self.selected_item().map(|item| (self.formatter)(item))
    }

    pub fn cursor_state(&self) -> CursorState {
        if self.items.is_empty() {
            CursorState::Empty
        } else {
            CursorState::Bounded(self.index)
        }
    }

    // =========================================================================
    // Insertion and Removal
    // =========================================================================

    /// Append an item. See [`add_at`](Self::add_at).
    pub fn add(&mut self, item: impl Into<Option<T>>) -> Result<()> {
        self.add_at(self.items.len(), item)
    }

    /// Insert an item at `position`, shifting later items back.
    ///
    /// The selected index is left as is, so inserting before the cursor
    /// changes which item it points at without emitting `changed`. Always
    /// emits `added`.
    ///
    /// # Errors
    ///
    /// - [`ListSelectorError::InvalidArgument`] if `item` is `None`.
    /// - [`ListSelectorError::OutOfRange`] if `position` is past the end.
    pub fn add_at(&mut self, position: usize, item: impl Into<Option<T>>) -> Result<()> {
        let Some(item) = item.into() else {
            tracing::debug!(target: targets::LIST_SELECTOR, position, "refusing to add a missing item");
            return Err(ListSelectorError::InvalidArgument);
        };
        let len = self.items.len();
        if position > len {
            tracing::debug!(target: targets::LIST_SELECTOR, position, len, "insert position out of range");
            return Err(ListSelectorError::out_of_range(position as i64, len));
        }

        self.items.insert(position, item.clone());
        self.repair_cursor();
        if self.items.len() == 1 {
            self.relayout();
        }

        tracing::trace!(target: targets::LIST_SELECTOR, position, "item added");
        self.added.emit(ItemAddedEvent { item, position });
        Ok(())
    }

    /// Remove the first item equal to `item`.
    ///
    /// Returns `false`, without emitting anything, if no item matched.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.position_of(item) {
            Some(position) => self.remove_at(position).is_some(),
            None => {
                tracing::trace!(target: targets::LIST_SELECTOR, "item to remove is not in the list");
                false
            }
        }
    }

    /// Remove and return the item at `position`.
    ///
    /// An out-of-range position is ignored and returns `None`.
    pub fn remove_at(&mut self, position: usize) -> Option<T> {
        if position >= self.items.len() {
            tracing::trace!(
                target: targets::LIST_SELECTOR,
                position,
                len = self.items.len(),
                "ignoring out-of-range removal"
            );
            return None;
        }

        let item = self.items.remove(position);
        self.repair_cursor();
        self.relayout();

        tracing::trace!(target: targets::LIST_SELECTOR, position, "item removed");
        self.removed.emit(ItemRemovedEvent {
            item: item.clone(),
            position,
        });
        Some(item)
    }

    /// Remove every item matching `predicate`, returning how many were removed.
    ///
    /// Emits no `removed` signals.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        let removed = before - self.items.len();

        if removed > 0 {
            tracing::debug!(target: targets::LIST_SELECTOR, removed, "removed matching items");
            self.repair_cursor();
            // The cursor may now sit on a different item.
            self.relayout();
        }
        removed
    }

    /// Remove all items. Emits no signals.
    pub fn clear(&mut self) {
        self.items.clear();
        self.index = 0;
        tracing::debug!(target: targets::LIST_SELECTOR, "cleared items");
        self.relayout();
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Select the previous item, wrapping from the first to the last.
    pub fn go_left(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.index = if self.index == 0 { len - 1 } else { self.index - 1 };
        self.emit_changed(Direction::Left);
        self.relayout();
    }

    /// Select the next item, wrapping from the last to the first.
    pub fn go_right(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.index = if self.index + 1 >= len { 0 } else { self.index + 1 };
        self.emit_changed(Direction::Right);
        self.relayout();
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Positions computed by the last relayout.
    pub fn layout(&self) -> SelectorLayout {
        self.layout
    }

    /// Incremented every time the layout is recomputed.
    pub fn layout_revision(&self) -> u64 {
        self.layout_revision
    }

    fn select(&mut self, index: usize) {
        if index == self.index {
            return;
        }
        self.index = index;
        self.emit_changed(Direction::Unknown);
        self.relayout();
    }

    fn emit_changed(&self, direction: Direction) {
        let Some(item) = self.items.get(self.index) else {
            return;
        };
        tracing::debug!(
            target: targets::LIST_SELECTOR,
            index = self.index,
            ?direction,
            "selection changed"
        );
        self.changed.emit(ItemChangedEvent {
            item: item.clone(),
            index: self.index,
            direction,
        });
    }

    /// Bring the cursor back in range after a structural change.
    ///
    /// Never emits `changed`.
    fn repair_cursor(&mut self) {
        let len = self.items.len();
        if len == 0 {
            self.index = 0;
            self.relayout();
        } else if self.index >= len {
            self.index = len - 1;
            self.relayout();
        }
    }

    fn relayout(&mut self) {
        let _span = PerfSpan::new("list_selector_relayout");

        let theme = Arc::clone(self.base.theme());
        let row = self.base.geometry();
        let center_y = row.top() + row.height() / 2.0;
        let arrow = theme.arrow_size;

        let text_size = self
            .selected_label()
            .map(|label| self.metrics.text_size(&label))
            .unwrap_or(Size::ZERO);
        let arrows_visible =
            self.base.is_selected() && self.base.is_enabled() && !self.items.is_empty();

        let right_arrow_x = row.right() - theme.padding - arrow.width;
        let right_arrow = Rect::new(
            right_arrow_x,
            center_y - arrow.height / 2.0,
            arrow.width,
            arrow.height,
        );

        // Without arrows the label takes the right arrow's slot.
        let text_right = if arrows_visible {
            right_arrow_x - theme.arrow_spacing
        } else {
            row.right() - theme.padding
        };
        let text_origin = Point::new(
            text_right - text_size.width,
            center_y - text_size.height / 2.0,
        );

        let left_arrow = Rect::new(
            text_origin.x - theme.arrow_spacing - arrow.width,
            right_arrow.top(),
            arrow.width,
            arrow.height,
        );

        self.layout = SelectorLayout {
            text_origin,
            text_size,
            left_arrow,
            right_arrow,
            arrows_visible,
        };
        self.layout_revision += 1;
    }
}

impl<T> MenuItem for ListSelector<T>
where
    T: Clone + Send + 'static,
{
    fn item_base(&self) -> &ItemBase {
        &self.base
    }

    fn item_base_mut(&mut self) -> &mut ItemBase {
        &mut self.base
    }

    fn recalculate(&mut self, pos: Point, size: Size, selected: bool) {
        self.base.set_layout(pos, size, selected);
        self.update_colors();
        self.relayout();
    }

    fn draw(&self, painter: &mut dyn MenuPainter) {
        let colors = self.base.colors();
        if let Some(label) = self.selected_label() {
            painter.draw_text(&label, self.layout.text_origin, colors.text);
        }
        if self.layout.arrows_visible {
            painter.draw_arrow(ArrowDirection::Left, self.layout.left_arrow, colors.arrow);
            painter.draw_arrow(ArrowDirection::Right, self.layout.right_arrow, colors.arrow);
        }
    }

    fn update_colors(&mut self) {
        self.base.resolve_colors();
    }

    fn handle_input(&mut self, input: MenuInput) -> bool {
        if !self.base.is_enabled() || self.items.is_empty() {
            return false;
        }
        match input {
            MenuInput::Left => {
                self.go_left();
                true
            }
            MenuInput::Right => {
                self.go_right();
                true
            }
            MenuInput::Accept | MenuInput::Back => false,
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        if self.base.set_enabled_flag(enabled) {
            self.update_colors();
            self.relayout();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ListSelector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSelector")
            .field("title", &self.base.title())
            .field("items", &self.items)
            .field("index", &self.index)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn selector(items: &[&'static str]) -> ListSelector<&'static str> {
        ListSelector::new("Difficulty", "", items.iter().copied())
    }

    fn record<A: Clone + Send + 'static>(signal: &Signal<A>) -> Arc<Mutex<Vec<A>>> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        signal.connect(move |args: &A| received_clone.lock().push(args.clone()));
        received
    }

    #[test]
    fn test_new_selects_first_item() {
        let list = selector(&["A", "B", "C"]);
        assert_eq!(list.selected_index(), 0);
        assert_eq!(list.selected_item(), Some(&"A"));
        assert_eq!(list.cursor_state(), CursorState::Bounded(0));
        assert_eq!(list.title(), "Difficulty");
    }

    #[test]
    fn test_new_empty() {
        let list = selector(&[]);
        assert_eq!(list.selected_index(), -1);
        assert_eq!(list.selected_item(), None);
        assert_eq!(list.selected_label(), None);
        assert_eq!(list.cursor_state(), CursorState::Empty);
    }

    #[test]
    fn test_set_selected_index() {
        let mut list = selector(&["A", "B", "C"]);
        let changes = record(&list.changed);

        list.set_selected_index(2).unwrap();
        assert_eq!(list.selected_item(), Some(&"C"));
        assert_eq!(
            *changes.lock(),
            vec![ItemChangedEvent {
                item: "C",
                index: 2,
                direction: Direction::Unknown
            }]
        );
    }

    #[test]
    fn test_set_selected_index_same_value_is_noop() {
        let mut list = selector(&["A", "B"]);
        let changes = record(&list.changed);
        let revision = list.layout_revision();

        list.set_selected_index(0).unwrap();
        assert!(changes.lock().is_empty());
        assert_eq!(list.layout_revision(), revision);
    }

    #[test]
    fn test_set_selected_index_errors() {
        let mut list = selector(&["A", "B"]);
        assert_eq!(
            list.set_selected_index(-1),
            Err(ListSelectorError::OutOfRange { index: -1, len: 2 })
        );
        assert_eq!(
            list.set_selected_index(2),
            Err(ListSelectorError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(list.selected_index(), 0);

        let mut empty = selector(&[]);
        assert_eq!(empty.set_selected_index(0), Err(ListSelectorError::InvalidState));
    }

    #[test]
    fn test_set_selected_item() {
        let mut list = selector(&["A", "B", "C", "B"]);
        list.set_selected_item(&"B").unwrap();
        assert_eq!(list.selected_index(), 1);

        assert_eq!(list.set_selected_item(&"Z"), Err(ListSelectorError::NotFound));
        assert_eq!(list.selected_index(), 1);
    }

    #[test]
    fn test_set_selected_item_already_selected_is_noop() {
        let mut list = selector(&["A", "B", "C"]);
        list.set_selected_index(1).unwrap();
        let changes = record(&list.changed);
        let revision = list.layout_revision();

        assert_eq!(list.set_selected_item(&"B"), Ok(()));
        assert_eq!(list.selected_index(), 1);
        assert!(changes.lock().is_empty());
        assert_eq!(list.layout_revision(), revision);
    }

    #[test]
    fn test_set_selected_item_on_empty_is_noop() {
        let mut list = selector(&[]);
        assert_eq!(list.set_selected_item(&"A"), Ok(()));
        assert_eq!(list.cursor_state(), CursorState::Empty);
    }

    #[test]
    fn test_go_right_wraps() {
        let mut list = selector(&["A", "B", "C"]);
        let changes = record(&list.changed);

        list.go_right();
        list.go_right();
        list.go_right();

        let indices: Vec<usize> = changes.lock().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![1, 2, 0]);
        assert!(
            changes
                .lock()
                .iter()
                .all(|e| e.direction == Direction::Right)
        );
    }

    #[test]
    fn test_go_left_wraps() {
        let mut list = selector(&["A", "B", "C"]);
        let changes = record(&list.changed);

        list.go_left();
        assert_eq!(list.selected_index(), 2);
        assert_eq!(
            changes.lock()[0],
            ItemChangedEvent {
                item: "C",
                index: 2,
                direction: Direction::Left
            }
        );
    }

    #[test]
    fn test_navigation_on_empty_is_noop() {
        let mut list = selector(&[]);
        let changes = record(&list.changed);
        list.go_left();
        list.go_right();
        assert!(changes.lock().is_empty());
        assert_eq!(list.selected_index(), -1);
    }

    #[test]
    fn test_add_at_keeps_index() {
        let mut list = selector(&["A", "B", "C"]);
        let added = record(&list.added);
        let changes = record(&list.changed);

        list.add_at(1, "X").unwrap();
        assert_eq!(list.items(), &["A", "X", "B", "C"]);
        assert_eq!(list.selected_index(), 0);
        assert_eq!(
            *added.lock(),
            vec![ItemAddedEvent {
                item: "X",
                position: 1
            }]
        );
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_add_before_cursor_shifts_item_silently() {
        let mut list = selector(&["A", "B", "C"]);
        list.set_selected_index(1).unwrap();
        let changes = record(&list.changed);

        list.add_at(0, "X").unwrap();
        assert_eq!(list.selected_index(), 1);
        assert_eq!(list.selected_item(), Some(&"A"));
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_add_errors() {
        let mut list = selector(&["A"]);
        let added = record(&list.added);

        assert_eq!(
            list.add_at(2, "X"),
            Err(ListSelectorError::OutOfRange { index: 2, len: 1 })
        );
        assert_eq!(list.add(None::<&str>), Err(ListSelectorError::InvalidArgument));
        assert_eq!(list.items(), &["A"]);
        assert!(added.lock().is_empty());
    }

    #[test]
    fn test_add_relayouts_only_on_first_item() {
        let mut list = selector(&[]);
        let revision = list.layout_revision();

        list.add("A").unwrap();
        assert_eq!(list.layout_revision(), revision + 1);
        assert_eq!(list.cursor_state(), CursorState::Bounded(0));

        list.add("B").unwrap();
        assert_eq!(list.layout_revision(), revision + 1);
    }

    #[test]
    fn test_remove_missing_item_is_silent() {
        let mut list = selector(&["A", "B"]);
        list.go_right();
        let removed = record(&list.removed);

        assert!(!list.remove(&"Z"));
        assert_eq!(list.items(), &["A", "B"]);
        assert_eq!(list.selected_index(), 1);
        assert!(removed.lock().is_empty());
    }

    #[test]
    fn test_remove_before_cursor_keeps_index() {
        let mut list = selector(&["A", "B", "C", "D"]);
        list.set_selected_index(2).unwrap();
        let changes = record(&list.changed);

        assert!(list.remove(&"A"));
        assert_eq!(list.selected_index(), 2);
        assert_eq!(list.selected_item(), Some(&"D"));
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_remove_clamps_cursor() {
        let mut list = selector(&["A", "B", "C"]);
        list.set_selected_index(2).unwrap();
        let changes = record(&list.changed);
        let removed = record(&list.removed);

        assert!(list.remove(&"C"));
        assert_eq!(list.selected_index(), 1);
        assert_eq!(list.selected_item(), Some(&"B"));
        assert!(changes.lock().is_empty());
        assert_eq!(
            *removed.lock(),
            vec![ItemRemovedEvent {
                item: "C",
                position: 2
            }]
        );
    }

    #[test]
    fn test_remove_at_out_of_range_is_silent() {
        let mut list = selector(&["A"]);
        let removed = record(&list.removed);
        let revision = list.layout_revision();

        assert_eq!(list.remove_at(1), None);
        assert_eq!(list.items(), &["A"]);
        assert!(removed.lock().is_empty());
        assert_eq!(list.layout_revision(), revision);
    }

    #[test]
    fn test_remove_at_always_relayouts() {
        let mut list = selector(&["A", "B", "C"]);
        let revision = list.layout_revision();

        assert_eq!(list.remove_at(2), Some("C"));
        assert!(list.layout_revision() > revision);
    }

    #[test]
    fn test_remove_where() {
        let mut list = ListSelector::new("Volume", "", 0..10);
        list.set_selected_index(9).unwrap();
        let removed = record(&list.removed);

        assert_eq!(list.remove_where(|n| n % 2 == 1), 5);
        assert_eq!(list.items(), &[0, 2, 4, 6, 8]);
        assert_eq!(list.selected_index(), 4);
        assert!(removed.lock().is_empty());

        let revision = list.layout_revision();
        assert_eq!(list.remove_where(|n| *n > 100), 0);
        assert_eq!(list.layout_revision(), revision);
    }

    #[test]
    fn test_remove_where_relayouts_shifted_selection() {
        let mut list = selector(&["A", "Longer", "B"])
            .with_metrics(Arc::new(MonospaceMetrics::new(8.0, 16.0)));
        list.set_selected_index(1).unwrap();
        assert_eq!(list.layout().text_size.width, 48.0);

        assert_eq!(list.remove_where(|label| *label == "A"), 1);
        assert_eq!(list.selected_item(), Some(&"B"));
        assert_eq!(list.layout().text_size.width, 8.0);
    }

    #[test]
    fn test_clear() {
        let mut list = selector(&["A", "B"]);
        list.go_right();
        let added = record(&list.added);
        let removed = record(&list.removed);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.cursor_state(), CursorState::Empty);
        assert!(added.lock().is_empty());
        assert!(removed.lock().is_empty());
    }

    #[test]
    fn test_set_items_is_silent_and_clamps() {
        let mut list = selector(&["A", "B", "C"]);
        list.set_selected_index(2).unwrap();
        let added = record(&list.added);
        let removed = record(&list.removed);
        let changes = record(&list.changed);

        list.set_items(["X", "Y"]);
        assert_eq!(list.selected_index(), 1);
        assert_eq!(list.selected_item(), Some(&"Y"));
        assert!(added.lock().is_empty());
        assert!(removed.lock().is_empty());
        assert!(changes.lock().is_empty());

        list.set_items([]);
        assert_eq!(list.cursor_state(), CursorState::Empty);
    }

    #[test]
    fn test_add_after_set_items_empty_selects_new_item() {
        let mut list = selector(&["A", "B"]);
        list.go_right();
        list.set_items([]);
        let changes = record(&list.changed);
        let revision = list.layout_revision();

        list.add("X").unwrap();
        assert_eq!(list.cursor_state(), CursorState::Bounded(0));
        assert_eq!(list.selected_index(), 0);
        assert_eq!(list.selected_item(), Some(&"X"));
        assert_eq!(list.layout_revision(), revision + 1);
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_custom_formatter() {
        let list = ListSelector::new_with_formatter("Volume", "", vec![25u8, 50, 75], |v| {
            format!("{v}%")
        });
        assert_eq!(list.selected_label().as_deref(), Some("25%"));
    }

    #[test]
    fn test_layout_arrows_on_selected_row() {
        let theme = Arc::new(MenuTheme {
            arrow_size: Size::new(10.0, 10.0),
            arrow_spacing: 2.0,
            padding: 5.0,
            ..MenuTheme::light()
        });
        let mut list = selector(&["Hard"])
            .with_theme(theme)
            .with_metrics(Arc::new(MonospaceMetrics::new(8.0, 16.0)));

        list.recalculate(Point::new(0.0, 0.0), Size::new(200.0, 40.0), true);
        let layout = list.layout();
        assert!(layout.arrows_visible);
        assert_eq!(layout.right_arrow, Rect::new(185.0, 15.0, 10.0, 10.0));
        assert_eq!(layout.text_size, Size::new(32.0, 16.0));
        assert_eq!(layout.text_origin, Point::new(151.0, 12.0));
        assert_eq!(layout.left_arrow, Rect::new(139.0, 15.0, 10.0, 10.0));

        list.recalculate(Point::new(0.0, 0.0), Size::new(200.0, 40.0), false);
        let layout = list.layout();
        assert!(!layout.arrows_visible);
        assert_eq!(layout.text_origin, Point::new(163.0, 12.0));
    }

    #[test]
    fn test_handle_input() {
        let mut list = selector(&["A", "B"]);
        assert!(list.handle_input(MenuInput::Right));
        assert_eq!(list.selected_index(), 1);
        assert!(list.handle_input(MenuInput::Left));
        assert_eq!(list.selected_index(), 0);
        assert!(!list.handle_input(MenuInput::Accept));

        list.set_enabled(false);
        assert!(!list.handle_input(MenuInput::Right));
        assert_eq!(list.selected_index(), 0);
    }
}
