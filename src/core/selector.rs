//! Scrollable selection list
//!
//! A keyboard-driven picker shared by the folder browser, the action menu
//! and confirmation prompts. It owns nothing but its indices: callers get
//! back the signal and the highlighted item and decide what to do.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a list row stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Synthetic "go to parent" row
    Parent,
    /// A real listing entry; `traversable` for directories
    Entry { traversable: bool },
    /// Synthetic "leave" row
    Exit,
    /// A labeled choice in a menu or prompt
    Choice,
}

/// One selectable row
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem<T> {
    pub label: String,
    pub kind: ItemKind,
    pub value: T,
}

impl<T> SelectItem<T> {
    pub fn new(label: impl Into<String>, kind: ItemKind, value: T) -> Self {
        Self {
            label: label.into(),
            kind,
            value,
        }
    }

    pub fn choice(label: impl Into<String>, value: T) -> Self {
        Self::new(label, ItemKind::Choice, value)
    }

    pub fn is_traversable(&self) -> bool {
        matches!(self.kind, ItemKind::Entry { traversable: true })
    }
}

/// Signal raised by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Left: go back, with the highlighted item as context
    Back,
    /// Right on a traversable entry
    Enter,
    /// Enter
    Select,
    /// Escape
    Exit,
}

/// Selection state over a list of items
#[derive(Debug, Clone)]
pub struct Selector<T> {
    items: Vec<SelectItem<T>>,
    selected: usize,
    top: usize,
    page_size: usize,
}

impl<T> Selector<T> {
    pub fn new(items: Vec<SelectItem<T>>, page_size: usize) -> Self {
        Self {
            items,
            selected: 0,
            top: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn items(&self) -> &[SelectItem<T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// First visible row
    pub fn top_index(&self) -> usize {
        self.top
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current(&self) -> Option<&SelectItem<T>> {
        self.items.get(self.selected)
    }

    /// Rows currently in view, with their absolute index
    pub fn visible(&self) -> impl Iterator<Item = (usize, &SelectItem<T>)> {
        self.items
            .iter()
            .enumerate()
            .skip(self.top)
            .take(self.page_size)
    }

    /// Change the page size (terminal resize) and keep the selection visible
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.adjust_viewport();
    }

    /// Move the selection to `index`, clamped into the list
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.items.len().saturating_sub(1));
        self.adjust_viewport();
    }

    /// Select the first item matching `pred`; returns whether one was found
    pub fn select_where(&mut self, pred: impl Fn(&SelectItem<T>) -> bool) -> bool {
        match self.items.iter().position(pred) {
            Some(index) => {
                self.select(index);
                true
            }
            None => false,
        }
    }

    /// Keep `top <= selected < top + page_size`
    fn adjust_viewport(&mut self) {
        if self.selected < self.top {
            self.top = self.selected;
        } else if self.selected >= self.top + self.page_size {
            self.top = self.selected + 1 - self.page_size;
        }
        let max_top = self.items.len().saturating_sub(self.page_size);
        self.top = self.top.min(max_top);
    }

    /// Handle a key; returns the raised signal with the item it applies to
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<(Signal, &SelectItem<T>)> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;

        let signal = match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select((self.selected + 1).min(last));
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.select(0);
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.select(last);
                None
            }
            KeyCode::PageUp => {
                self.select(self.selected.saturating_sub(self.page_size));
                None
            }
            KeyCode::PageDown => {
                self.select((self.selected + self.page_size).min(last));
                None
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(Signal::Back),
            KeyCode::Right | KeyCode::Char('l') => self
                .current()
                .filter(|item| item.is_traversable())
                .map(|_| Signal::Enter),
            KeyCode::Enter => Some(Signal::Select),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Signal::Exit)
            }
            KeyCode::Esc | KeyCode::Char('q') => Some(Signal::Exit),
            _ => None,
        }?;

        if signal == Signal::Exit {
            // Resolve to the exit row when the list has one
            if let Some(index) = self.items.iter().position(|i| i.kind == ItemKind::Exit) {
                self.select(index);
            }
        }

        self.current().map(|item| (signal, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn numbered(count: usize, page: usize) -> Selector<usize> {
        let items = (0..count)
            .map(|i| SelectItem::new(format!("item{i}"), ItemKind::Entry { traversable: i % 2 == 0 }, i))
            .collect();
        Selector::new(items, page)
    }

    fn assert_visible(sel: &Selector<usize>) {
        assert!(sel.top_index() <= sel.selected_index());
        assert!(sel.selected_index() < sel.top_index() + sel.page_size());
    }

    #[test]
    fn test_down_clamps_at_end() {
        let mut sel = numbered(3, 10);
        for _ in 0..5 {
            assert!(sel.handle_key(key(KeyCode::Down)).is_none());
        }
        assert_eq!(sel.selected_index(), 2);
    }

    #[test]
    fn test_up_clamps_at_start() {
        let mut sel = numbered(3, 10);
        sel.handle_key(key(KeyCode::Up));
        assert_eq!(sel.selected_index(), 0);
    }

    #[test]
    fn test_viewport_follows_selection() {
        let mut sel = numbered(20, 5);
        for _ in 0..12 {
            sel.handle_key(key(KeyCode::Down));
            assert_visible(&sel);
        }
        assert_eq!(sel.selected_index(), 12);
        assert_eq!(sel.top_index(), 8);

        for _ in 0..10 {
            sel.handle_key(key(KeyCode::Up));
            assert_visible(&sel);
        }
        assert_eq!(sel.top_index(), 2);
    }

    #[test]
    fn test_page_keys() {
        let mut sel = numbered(20, 5);
        sel.handle_key(key(KeyCode::PageDown));
        assert_eq!(sel.selected_index(), 5);
        sel.handle_key(key(KeyCode::End));
        assert_eq!(sel.selected_index(), 19);
        assert_visible(&sel);
        sel.handle_key(key(KeyCode::PageUp));
        assert_eq!(sel.selected_index(), 14);
        sel.handle_key(key(KeyCode::Home));
        assert_eq!((sel.selected_index(), sel.top_index()), (0, 0));
    }

    #[test]
    fn test_shrinking_page_keeps_selection_visible() {
        let mut sel = numbered(20, 10);
        sel.select(9);
        sel.set_page_size(3);
        assert_visible(&sel);
        assert_eq!(sel.visible().count(), 3);
    }

    #[test]
    fn test_right_only_on_traversable() {
        let mut sel = numbered(3, 10);
        let (signal, item) = sel.handle_key(key(KeyCode::Right)).unwrap();
        assert_eq!((signal, item.value), (Signal::Enter, 0));

        sel.handle_key(key(KeyCode::Down));
        assert!(sel.handle_key(key(KeyCode::Right)).is_none());
    }

    #[test]
    fn test_left_and_enter_signals() {
        let mut sel = numbered(3, 10);
        sel.handle_key(key(KeyCode::Down));
        let (signal, item) = sel.handle_key(key(KeyCode::Left)).unwrap();
        assert_eq!((signal, item.value), (Signal::Back, 1));
        let (signal, item) = sel.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!((signal, item.value), (Signal::Select, 1));
    }

    #[test]
    fn test_escape_resolves_to_exit_item() {
        let items = vec![
            SelectItem::new("..", ItemKind::Parent, "parent"),
            SelectItem::new("docs", ItemKind::Entry { traversable: true }, "docs"),
            SelectItem::new("[exit]", ItemKind::Exit, "exit"),
        ];
        let mut sel = Selector::new(items, 10);
        sel.handle_key(key(KeyCode::Down));
        let (signal, item) = sel.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!((signal, item.value), (Signal::Exit, "exit"));
    }

    #[test]
    fn test_escape_without_exit_item_uses_current() {
        let mut sel = numbered(3, 10);
        sel.handle_key(key(KeyCode::Down));
        let (signal, item) = sel.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!((signal, item.value), (Signal::Exit, 1));
    }

    #[test]
    fn test_select_where() {
        let mut sel = numbered(30, 5);
        assert!(sel.select_where(|i| i.label == "item17"));
        assert_eq!(sel.selected_index(), 17);
        assert_visible(&sel);
        assert!(!sel.select_where(|i| i.label == "missing"));
        assert_eq!(sel.selected_index(), 17);
    }

    #[test]
    fn test_empty_list_ignores_keys() {
        let mut sel: Selector<()> = Selector::new(Vec::new(), 5);
        assert!(sel.handle_key(key(KeyCode::Enter)).is_none());
        assert!(sel.current().is_none());
    }
}
