//! Keyboard handling for the rename editor

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::EditorBuffer;

/// Which part of the rename editor receives keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    PatternField,
    ReplacementField,
    PreviewList,
}

impl FocusState {
    pub fn is_input(&self) -> bool {
        !matches!(self, FocusState::PreviewList)
    }

    fn next(self) -> Self {
        match self {
            FocusState::PatternField => FocusState::ReplacementField,
            FocusState::ReplacementField => FocusState::PreviewList,
            FocusState::PreviewList => FocusState::PatternField,
        }
    }

    fn prev(self) -> Self {
        match self {
            FocusState::PatternField => FocusState::PreviewList,
            FocusState::ReplacementField => FocusState::PatternField,
            FocusState::PreviewList => FocusState::ReplacementField,
        }
    }
}

/// Actions that can result from a key in the rename editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// No action needed
    None,
    /// Forward the key to the focused input buffer
    HandleInInput,
    /// Apply the previewed renames
    Apply,
    /// Leave the editor
    Cancel,
    /// Show the key help
    ShowHelp,
    /// Switch between regex and literal matching
    ToggleMode,
}

/// Result of resolving one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: EditorAction,
    pub focus: FocusState,
    /// Change to apply to the preview scroll offset
    pub scroll_delta: isize,
}

impl Transition {
    fn new(action: EditorAction, focus: FocusState, scroll_delta: isize) -> Self {
        Self {
            action,
            focus,
            scroll_delta,
        }
    }

    fn focus(focus: FocusState) -> Self {
        Self::new(EditorAction::None, focus, 0)
    }
}

/// Largest scroll offset that still shows a full last page
pub fn max_scroll(preview_count: usize, page_size: usize) -> usize {
    preview_count.saturating_sub(page_size)
}

/// Apply a delta to a scroll offset, clamped to `[0, max]`
pub fn apply_scroll(offset: usize, delta: isize, max: usize) -> usize {
    offset.saturating_add_signed(delta).min(max)
}

/// Map a key and the current editor state to an action and focus change
pub fn resolve(
    key: KeyEvent,
    focus: FocusState,
    preview_count: usize,
    page_size: usize,
    scroll: usize,
) -> Transition {
    let max = max_scroll(preview_count, page_size);
    let to = |target: usize| target as isize - scroll as isize;

    match key.code {
        KeyCode::Enter => Transition::new(EditorAction::Apply, focus, 0),
        KeyCode::Esc => Transition::new(EditorAction::Cancel, focus, 0),
        KeyCode::F(1) => Transition::new(EditorAction::ShowHelp, focus, 0),
        KeyCode::F(2) => Transition::new(EditorAction::ToggleMode, focus, 0),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Transition::new(EditorAction::ToggleMode, focus, 0)
        }
        KeyCode::Tab => Transition::focus(focus.next()),
        KeyCode::BackTab => Transition::focus(focus.prev()),

        KeyCode::Up => match focus {
            // Wrap around to the bottom of the preview
            FocusState::PatternField => {
                Transition::new(EditorAction::None, FocusState::PreviewList, to(max))
            }
            FocusState::ReplacementField => Transition::focus(FocusState::PatternField),
            FocusState::PreviewList if scroll == 0 => {
                Transition::focus(FocusState::ReplacementField)
            }
            FocusState::PreviewList => Transition::new(EditorAction::None, focus, -1),
        },
        KeyCode::Down => match focus {
            FocusState::PatternField => Transition::focus(FocusState::ReplacementField),
            FocusState::ReplacementField => {
                Transition::new(EditorAction::None, FocusState::PreviewList, to(0))
            }
            FocusState::PreviewList => {
                let delta = if scroll < max { 1 } else { to(max.min(scroll)) };
                Transition::new(EditorAction::None, focus, delta)
            }
        },
        KeyCode::PageUp if focus == FocusState::PreviewList => Transition::new(
            EditorAction::None,
            focus,
            to(scroll.saturating_sub(page_size.max(1))),
        ),
        KeyCode::PageDown if focus == FocusState::PreviewList => Transition::new(
            EditorAction::None,
            focus,
            to((scroll + page_size.max(1)).min(max)),
        ),

        _ if focus.is_input() => Transition::new(EditorAction::HandleInInput, focus, 0),
        _ => Transition::focus(focus),
    }
}

/// Update an input buffer based on a key event
///
/// Returns whether the text changed.
pub fn update_buffer(buffer: &mut EditorBuffer, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => buffer.clear(),
        KeyCode::Char('a') if ctrl => buffer.move_home(),
        KeyCode::Char('e') if ctrl => buffer.move_end(),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => false,
        KeyCode::Char(c) => buffer.insert(c),
        KeyCode::Backspace => buffer.delete_before_cursor(),
        KeyCode::Delete => buffer.delete_at_cursor(),
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        KeyCode::Home => buffer.move_home(),
        KeyCode::End => buffer.move_end(),
        _ => false,
    }
}
