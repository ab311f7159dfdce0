//! Dual-field rename editor
//!
//! Pattern and replacement fields over a live before/after preview of the
//! child folders of one directory. Typing updates the fields at once; the
//! preview follows, at most once per debounce interval.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::config::RenameSettings;
use super::frontend::{editor_page_size, EditorView, Frontend, Screen, IDLE_WAIT};
use super::offload::run_with_progress;
use super::prompt::{confirm, show_message};
use crate::action::FsMutator;
use crate::core::EditorBuffer;
use crate::handler::{apply_scroll, max_scroll, resolve, update_buffer, EditorAction, FocusState};
use crate::rename::{
    apply_renames, generate_preview, Debouncer, MatchMode, Matcher, PreviewSummary, RenameOutcome,
    RenamePreview, RenameRequest,
};
use crate::tree::DirectoryLister;

/// State of the rename editor
#[derive(Debug)]
pub struct RenameEditor {
    dir: PathBuf,
    pattern: EditorBuffer,
    replacement: EditorBuffer,
    focus: FocusState,
    mode: MatchMode,
    scroll: usize,
    page_size: usize,
    previews: Vec<RenamePreview>,
    summary: PreviewSummary,
    pattern_error: Option<String>,
    notice: Option<String>,
    debouncer: Debouncer,
    /// Fields changed since the last regeneration
    dirty: bool,
}

impl RenameEditor {
    pub fn new(dir: &Path, settings: &RenameSettings) -> Self {
        Self {
            dir: dir.to_path_buf(),
            pattern: EditorBuffer::new(settings.max_input_len),
            replacement: EditorBuffer::new(settings.max_input_len),
            focus: FocusState::default(),
            mode: settings.mode,
            scroll: 0,
            page_size: 1,
            previews: Vec::new(),
            summary: PreviewSummary::default(),
            pattern_error: None,
            notice: None,
            debouncer: Debouncer::new(settings.debounce),
            dirty: false,
        }
    }

    pub fn request(&self) -> RenameRequest {
        RenameRequest::new(self.pattern.text(), self.replacement.text(), self.mode)
    }

    pub fn previews(&self) -> &[RenamePreview] {
        &self.previews
    }

    pub fn summary(&self) -> PreviewSummary {
        self.summary
    }

    pub fn focus(&self) -> FocusState {
        self.focus
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Preview rows that fit on screen
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self
            .scroll
            .min(max_scroll(self.previews.len(), self.page_size));
    }

    /// Rebuild the preview from the current fields
    pub fn regenerate(&mut self, lister: &impl DirectoryLister, fs: &impl FsMutator) {
        let request = self.request();
        self.pattern_error = Matcher::compile(&request.pattern, &request.replacement, request.mode)
            .error()
            .map(str::to_string);
        self.previews = generate_preview(lister, fs, &self.dir, &request);
        self.summary = PreviewSummary::of(&self.previews);
        self.dirty = false;
        self.clamp_scroll();
        tracing::debug!(
            pattern = %request.pattern,
            mode = request.mode.display_name(),
            changing = self.summary.changing,
            conflicts = self.summary.conflicts,
            "preview regenerated"
        );
    }

    /// Regenerate now, ignoring the debounce gate
    pub fn force_refresh(
        &mut self,
        lister: &impl DirectoryLister,
        fs: &impl FsMutator,
        now: Instant,
    ) {
        self.debouncer.force(now);
        self.regenerate(lister, fs);
    }

    /// Regenerate a stale preview if the debounce gate allows
    ///
    /// Returns whether the preview was rebuilt.
    pub fn tick(&mut self, lister: &impl DirectoryLister, fs: &impl FsMutator, now: Instant) -> bool {
        if self.dirty && self.debouncer.try_fire(now) {
            self.regenerate(lister, fs);
            true
        } else {
            false
        }
    }

    /// Handle one key; returns the action the caller must carry out
    ///
    /// Focus, scrolling, field edits and the mode toggle are handled here.
    /// `Apply`, `Cancel` and `ShowHelp` are returned to the caller.
    pub fn handle_key(
        &mut self,
        key: crossterm::event::KeyEvent,
        lister: &impl DirectoryLister,
        fs: &impl FsMutator,
        now: Instant,
    ) -> EditorAction {
        let transition = resolve(
            key,
            self.focus,
            self.previews.len(),
            self.page_size,
            self.scroll,
        );
        self.notice = None;
        self.focus = transition.focus;
        self.scroll = apply_scroll(
            self.scroll,
            transition.scroll_delta,
            max_scroll(self.previews.len(), self.page_size),
        );

        match transition.action {
            EditorAction::HandleInInput => {
                let buffer = match self.focus {
                    FocusState::PatternField => &mut self.pattern,
                    FocusState::ReplacementField => &mut self.replacement,
                    FocusState::PreviewList => return EditorAction::None,
                };
                if update_buffer(buffer, key) {
                    self.dirty = true;
                    self.tick(lister, fs, now);
                }
                EditorAction::None
            }
            EditorAction::ToggleMode => {
                self.mode = self.mode.toggle();
                self.force_refresh(lister, fs, now);
                EditorAction::None
            }
            other => other,
        }
    }

    /// Whether leaving now would discard renames
    pub fn has_pending(&self) -> bool {
        self.previews.iter().any(RenamePreview::will_change)
    }

    /// How long to wait for a key before the next tick
    pub fn idle_timeout(&self) -> Duration {
        if self.dirty {
            self.debouncer.interval()
        } else {
            IDLE_WAIT
        }
    }

    pub fn view(&self) -> EditorView<'_> {
        EditorView {
            dir: &self.dir,
            pattern: &self.pattern,
            replacement: &self.replacement,
            focus: self.focus,
            mode: self.mode,
            previews: &self.previews,
            scroll: self.scroll,
            summary: self.summary,
            pattern_error: self.pattern_error.as_deref(),
            notice: self.notice.as_deref(),
            stale: self.dirty,
        }
    }
}

/// Run the editor on the child folders of `dir`
///
/// Returns the outcome of the applied batch, or `None` when the user left
/// without applying.
pub fn run_rename_editor<F, L, M>(
    frontend: &mut F,
    dir: &Path,
    lister: &L,
    fs: &M,
    settings: &RenameSettings,
) -> anyhow::Result<Option<RenameOutcome>>
where
    F: Frontend + ?Sized,
    L: DirectoryLister,
    M: FsMutator + Clone + Send + 'static,
{
    tracing::info!(dir = %dir.display(), "rename editor opened");
    let mut editor = RenameEditor::new(dir, settings);
    editor.set_page_size(editor_page_size(frontend.size().1));
    editor.force_refresh(lister, fs, Instant::now());

    loop {
        editor.set_page_size(editor_page_size(frontend.size().1));
        frontend.draw(&Screen::Editor(editor.view()))?;

        let Some(key) = frontend.next_key(editor.idle_timeout())? else {
            editor.tick(lister, fs, Instant::now());
            continue;
        };

        match editor.handle_key(key, lister, fs, Instant::now()) {
            EditorAction::Apply => {
                editor.force_refresh(lister, fs, Instant::now());
                let summary = editor.summary();
                if summary.changing == 0 {
                    editor.set_notice("Nothing to rename");
                    continue;
                }
                let question = if summary.conflicts > 0 {
                    format!(
                        "Rename {} folders? ({} conflicts will fail)",
                        summary.changing, summary.conflicts
                    )
                } else {
                    format!("Rename {} folders?", summary.changing)
                };
                if !confirm(frontend, &question, true)? {
                    continue;
                }

                let previews = editor.previews().to_vec();
                let worker_fs = fs.clone();
                let outcome = run_with_progress(frontend, "Renaming folders", move || {
                    apply_renames(&worker_fs, &previews)
                })?;
                tracing::info!(
                    dir = %dir.display(),
                    successful = outcome.successful,
                    failed = outcome.failed,
                    skipped = outcome.skipped,
                    "rename batch applied"
                );
                show_message(frontend, "Rename finished", &outcome_lines(&outcome))?;
                return Ok(Some(outcome));
            }
            EditorAction::Cancel => {
                editor.force_refresh(lister, fs, Instant::now());
                if !editor.has_pending()
                    || confirm(frontend, "Discard the pending renames?", false)?
                {
                    tracing::info!(dir = %dir.display(), "rename editor cancelled");
                    return Ok(None);
                }
            }
            EditorAction::ShowHelp => show_message(frontend, "Rename editor keys", &help_lines())?,
            EditorAction::None | EditorAction::HandleInInput | EditorAction::ToggleMode => {}
        }
    }
}

/// Most per-item errors listed in the outcome popup
const MAX_LISTED_ERRORS: usize = 8;

/// Lines of the outcome popup
pub fn outcome_lines(outcome: &RenameOutcome) -> Vec<String> {
    let mut lines = vec![
        outcome.summary(),
        format!(
            "Renamed {}, failed {}, skipped {}",
            outcome.successful, outcome.failed, outcome.skipped
        ),
    ];
    if !outcome.errors.is_empty() {
        lines.push(String::new());
        lines.extend(outcome.errors.iter().take(MAX_LISTED_ERRORS).cloned());
        let hidden = outcome.errors.len().saturating_sub(MAX_LISTED_ERRORS);
        if hidden > 0 {
            lines.push(format!("... and {} more", hidden));
        }
    }
    lines
}

fn help_lines() -> Vec<String> {
    [
        "Tab / Shift+Tab   switch pattern, replacement, preview",
        "Up / Down         move between fields, scroll the preview",
        "PgUp / PgDn       scroll the preview by a page",
        "F2, Ctrl+R        toggle regex / literal matching",
        "Ctrl+U            clear the field",
        "Ctrl+A / Ctrl+E   start / end of the field",
        "Enter             apply the renames",
        "Esc               leave the editor",
        "",
        "Regex replacements may use $1, ${name} and $$.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
