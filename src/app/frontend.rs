//! Terminal abstraction and the screens the controllers draw
//!
//! Controllers never talk to ratatui directly. They build a [`Screen`]
//! describing what to show, hand it to a [`Frontend`] and read keys back.

use std::path::Path;
use std::time::Duration;

use crossterm::event::KeyEvent;

use crate::core::{EditorBuffer, ItemKind, SelectItem, Selector};
use crate::handler::FocusState;
use crate::rename::{MatchMode, PreviewSummary, RenamePreview};

/// How long prompts wait for a key before redrawing
pub const IDLE_WAIT: Duration = Duration::from_millis(250);

/// Rows taken by borders, status and notice lines around the listing
const LIST_CHROME: u16 = 4;

/// Rows taken by the two input fields, table borders, header and summary
const EDITOR_CHROME: u16 = 10;

/// Rows taken by a popup's borders and margin
const POPUP_CHROME: u16 = 4;

/// Key source and drawing surface
pub trait Frontend {
    /// Wait up to `idle` for a key press; `None` when the wait elapsed
    fn next_key(&mut self, idle: Duration) -> anyhow::Result<Option<KeyEvent>>;

    fn draw(&mut self, screen: &Screen<'_>) -> anyhow::Result<()>;

    /// Terminal size as (width, height)
    fn size(&self) -> (u16, u16);

    /// Hand the terminal to `run` (a shell, an editor) and take it back after
    fn suspend(&mut self, run: &mut dyn FnMut() -> anyhow::Result<()>) -> anyhow::Result<()>;

    /// Drop keys typed while the UI was busy
    fn flush_input(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// One row of a list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub label: String,
    pub kind: ItemKind,
    /// Right-hand column (size for files)
    pub detail: String,
    pub selected: bool,
}

/// Visible window of a [`Selector`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub title: String,
    pub rows: Vec<ListRow>,
    /// Number of items in the whole list
    pub total: usize,
    /// Absolute index of the first row
    pub top: usize,
}

impl ListView {
    pub fn of<T>(
        title: impl Into<String>,
        selector: &Selector<T>,
        detail: impl Fn(&SelectItem<T>) -> String,
    ) -> Self {
        let selected = selector.selected_index();
        let rows = selector
            .visible()
            .map(|(index, item)| ListRow {
                label: item.label.clone(),
                kind: item.kind,
                detail: detail(item),
                selected: index == selected,
            })
            .collect();
        Self {
            title: title.into(),
            rows,
            total: selector.len(),
            top: selector.top_index(),
        }
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.selected)
            .map(|r| r.label.as_str())
    }
}

/// Everything the rename editor shows
#[derive(Debug, Clone)]
pub struct EditorView<'a> {
    pub dir: &'a Path,
    pub pattern: &'a EditorBuffer,
    pub replacement: &'a EditorBuffer,
    pub focus: FocusState,
    pub mode: MatchMode,
    pub previews: &'a [RenamePreview],
    pub scroll: usize,
    pub summary: PreviewSummary,
    /// Why the pattern does not compile
    pub pattern_error: Option<&'a str>,
    pub notice: Option<&'a str>,
    /// Typed text not yet reflected in the preview
    pub stale: bool,
}

/// A full frame
#[derive(Debug, Clone)]
pub enum Screen<'a> {
    Browser {
        list: ListView,
        notice: Option<&'a str>,
        status: Option<&'a str>,
    },
    Menu {
        list: ListView,
    },
    Editor(EditorView<'a>),
    Message {
        title: &'a str,
        lines: &'a [String],
    },
    Progress {
        label: &'a str,
        tick: usize,
    },
}

impl Screen<'_> {
    /// Short text identifying the screen (title, question, label)
    pub fn headline(&self) -> String {
        match self {
            Screen::Browser { list, .. } | Screen::Menu { list } => list.title.clone(),
            Screen::Editor(view) => format!("Rename in {}", view.dir.display()),
            Screen::Message { title, .. } => (*title).to_string(),
            Screen::Progress { label, .. } => (*label).to_string(),
        }
    }
}

/// Listing rows that fit a terminal of `height`
pub fn list_page_size(height: u16) -> usize {
    height.saturating_sub(LIST_CHROME).max(1) as usize
}

/// Preview rows that fit a terminal of `height`
pub fn editor_page_size(height: u16) -> usize {
    height.saturating_sub(EDITOR_CHROME).max(1) as usize
}

/// Rows for a popup list of `count` items
pub fn menu_page_size(height: u16, count: usize) -> usize {
    (height.saturating_sub(POPUP_CHROME).max(1) as usize).min(count.max(1))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use anyhow::anyhow;
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    /// Frontend replaying a fixed key script
    ///
    /// `None` entries stand for an idle timeout. Running out of script is an
    /// error so a controller stuck in a loop fails the test instead of
    /// hanging it.
    pub(crate) struct ScriptedFrontend {
        script: VecDeque<Option<KeyEvent>>,
        pub drawn: Vec<String>,
        /// Highlighted row of every drawn listing
        pub selections: Vec<String>,
        pub messages: Vec<Vec<String>>,
        pub suspended: usize,
        pub size: (u16, u16),
        in_message: bool,
    }

    impl ScriptedFrontend {
        pub fn new(script: Vec<Option<KeyEvent>>) -> Self {
            Self {
                script: script.into(),
                drawn: Vec::new(),
                selections: Vec::new(),
                messages: Vec::new(),
                suspended: 0,
                size: (80, 24),
                in_message: false,
            }
        }

        pub fn remaining(&self) -> usize {
            self.script.len()
        }
    }

    impl Frontend for ScriptedFrontend {
        fn next_key(&mut self, _idle: Duration) -> anyhow::Result<Option<KeyEvent>> {
            self.script
                .pop_front()
                .ok_or_else(|| anyhow!("key script exhausted"))
        }

        fn draw(&mut self, screen: &Screen<'_>) -> anyhow::Result<()> {
            match screen {
                Screen::Message { lines, .. } if !self.in_message => {
                    self.messages.push(lines.to_vec());
                    self.in_message = true;
                }
                Screen::Message { .. } => {}
                _ => self.in_message = false,
            }
            if let Screen::Browser { list, .. } = screen {
                self.selections
                    .push(list.selected_label().unwrap_or_default().to_string());
            }
            self.drawn.push(screen.headline());
            Ok(())
        }

        fn size(&self) -> (u16, u16) {
            self.size
        }

        fn suspend(&mut self, run: &mut dyn FnMut() -> anyhow::Result<()>) -> anyhow::Result<()> {
            self.suspended += 1;
            run()
        }
    }

    pub(crate) fn key(code: KeyCode) -> Option<KeyEvent> {
        Some(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub(crate) fn chars(text: &str) -> Vec<Option<KeyEvent>> {
        text.chars().map(|c| key(KeyCode::Char(c))).collect()
    }
}
