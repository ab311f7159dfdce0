//! Folder browser
//!
//! Lists the current folder, moves through the tree below the session root
//! and opens the action menu for a folder. All state lives in the
//! [`BrowseSession`], which is handed back when the user quits.

use std::process::Command;

use anyhow::Context;

use super::config::Settings;
use super::frontend::{list_page_size, Frontend, ListView, Screen, IDLE_WAIT};
use super::offload::run_with_progress;
use super::prompt::{pick, show_message};
use super::rename_editor::run_rename_editor;
use crate::action::{editor_command, folder_stats, shell_command, FsMutator};
use crate::core::{BrowseSession, ItemKind, SelectItem, Selector, Signal};
use crate::handler::DirAction;
use crate::render::format::{format_relative_time, format_size};
use crate::tree::{DirectoryEntry, DirectoryLister};

const EMPTY_NOTICE: &str = "This folder is empty";

/// Value behind a browser row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserItem {
    Parent,
    Entry(DirectoryEntry),
    Exit,
}

/// Rows for one visit: `..` (not at the root), the entries, `[exit]`
pub fn browser_items(
    session: &BrowseSession,
    entries: Vec<DirectoryEntry>,
) -> Vec<SelectItem<BrowserItem>> {
    let mut items = Vec::with_capacity(entries.len() + 2);
    if !session.is_at_root() {
        items.push(SelectItem::new("..", ItemKind::Parent, BrowserItem::Parent));
    }
    items.extend(entries.into_iter().map(|entry| {
        let label = if entry.is_dir {
            format!("{}/", entry.name)
        } else {
            entry.name.clone()
        };
        let kind = ItemKind::Entry {
            traversable: entry.is_dir,
        };
        SelectItem::new(label, kind, BrowserItem::Entry(entry))
    }));
    items.push(SelectItem::new("[exit]", ItemKind::Exit, BrowserItem::Exit));
    items
}

fn entry_detail(item: &SelectItem<BrowserItem>) -> String {
    match &item.value {
        BrowserItem::Entry(entry) if !entry.is_dir => format_size(entry.size),
        _ => String::new(),
    }
}

/// Run the browser until the user quits
pub fn run_browser<F, L, M>(
    frontend: &mut F,
    mut session: BrowseSession,
    lister: &L,
    fs: &M,
    settings: &Settings,
) -> anyhow::Result<BrowseSession>
where
    F: Frontend + ?Sized,
    L: DirectoryLister,
    M: FsMutator + Clone + Send + 'static,
{
    tracing::info!(root = %session.root().display(), "browse session started");
    let mut status: Option<String> = None;

    loop {
        let entries = lister.list_children(session.current());
        let notice = entries.is_empty().then_some(EMPTY_NOTICE);
        let mut selector = Selector::new(
            browser_items(&session, entries),
            list_page_size(frontend.size().1),
        );
        let found = session.take_highlight().is_some_and(|name| {
            selector.select_where(|i| matches!(&i.value, BrowserItem::Entry(e) if e.name == name))
        });
        if !found {
            selector.select_where(|i| matches!(i.value, BrowserItem::Entry(_)));
        }

        let title = session.current().display().to_string();
        let (signal, value) = loop {
            selector.set_page_size(list_page_size(frontend.size().1));
            frontend.draw(&Screen::Browser {
                list: ListView::of(title.as_str(), &selector, entry_detail),
                notice,
                status: status.as_deref(),
            })?;
            let Some(key) = frontend.next_key(IDLE_WAIT)? else {
                continue;
            };
            if let Some((signal, item)) = selector.handle_key(key) {
                break (signal, item.value.clone());
            }
        };
        status = None;

        match (signal, value) {
            (Signal::Exit, _) => break,
            (Signal::Back, _) | (_, BrowserItem::Parent) => {
                session.ascend();
            }
            (_, BrowserItem::Exit) => break,
            (Signal::Enter, BrowserItem::Entry(entry)) => {
                session.descend(&entry.name);
            }
            (_, BrowserItem::Entry(entry)) if entry.is_dir => {
                session.set_highlight(entry.name.as_str());
                status = folder_menu(frontend, &mut session, &entry, lister, fs, settings)?;
            }
            (_, BrowserItem::Entry(entry)) => {
                session.set_highlight(entry.name.as_str());
                show_message(frontend, "File", &file_info_lines(&entry))?;
            }
        }
    }

    tracing::info!(
        batches = session.renamed.len(),
        renamed = session.renamed.iter().map(|o| o.successful).sum::<usize>(),
        "browse session ended"
    );
    Ok(session)
}

/// Show the action menu for `entry` and carry out the choice
///
/// Returns a status line for the listing.
fn folder_menu<F, L, M>(
    frontend: &mut F,
    session: &mut BrowseSession,
    entry: &DirectoryEntry,
    lister: &L,
    fs: &M,
    settings: &Settings,
) -> anyhow::Result<Option<String>>
where
    F: Frontend + ?Sized,
    L: DirectoryLister,
    M: FsMutator + Clone + Send + 'static,
{
    let items = DirAction::iter()
        .map(|action| SelectItem::choice(action.label(), action))
        .collect();
    let action = pick(frontend, &entry.name, items, 0)?.unwrap_or(DirAction::GoBack);
    tracing::debug!(?action, folder = %entry.name, "menu action");

    let status = match action {
        DirAction::NavigateIn => {
            session.descend(&entry.name);
            None
        }
        DirAction::RenameChildren => {
            run_rename_editor(frontend, &entry.path, lister, fs, &settings.rename)?.map(
                |outcome| {
                    let summary = outcome.summary();
                    session.record(outcome);
                    summary
                },
            )
        }
        DirAction::Properties => {
            let dir = entry.path.clone();
            let stats = run_with_progress(frontend, "Scanning folder", move || folder_stats(&dir))?;
            let lines = vec![
                format!("Path:    {}", entry.path.display()),
                format!("Size:    {}", format_size(stats.total_size)),
                format!("Files:   {}", stats.files),
                format!("Folders: {}", stats.folders),
            ];
            show_message(frontend, &entry.name, &lines)?;
            None
        }
        DirAction::OpenInTerminal => {
            let cmd = shell_command(&entry.path, &settings.shell);
            launch(frontend, cmd)?
        }
        DirAction::OpenInEditor => {
            let cmd = editor_command(&entry.path, &settings.editor);
            launch(frontend, cmd)?
        }
        DirAction::GoBack => None,
    };
    Ok(status)
}

/// Run an external program with the terminal handed over to it
fn launch<F>(frontend: &mut F, mut cmd: Command) -> anyhow::Result<Option<String>>
where
    F: Frontend + ?Sized,
{
    let program = cmd.get_program().to_string_lossy().into_owned();
    let result = frontend.suspend(&mut || -> anyhow::Result<()> {
        let status = cmd
            .status()
            .with_context(|| format!("failed to launch {program}"))?;
        if !status.success() {
            tracing::warn!(%program, %status, "program exited with failure");
        }
        Ok(())
    });
    match result {
        Ok(()) => Ok(None),
        Err(e) => {
            tracing::warn!("{e:#}");
            Ok(Some(format!("{e:#}")))
        }
    }
}

fn file_info_lines(entry: &DirectoryEntry) -> Vec<String> {
    vec![
        format!("Name:     {}", entry.name),
        format!("Size:     {}", format_size(entry.size)),
        format!(
            "Modified: {}",
            entry
                .modified
                .map(format_relative_time)
                .unwrap_or_else(|| "--".to_string())
        ),
    ]
}
