//! Folder listing rendering

use std::path::Path;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::app::frontend::{ListRow, ListView};
use crate::core::ItemKind;

/// Render the listing with its notice and status lines
pub fn render_browser(
    frame: &mut Frame,
    area: Rect,
    list: &ListView,
    notice: Option<&str>,
    status: Option<&str>,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Listing
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Status / key hints
        ])
        .split(area);

    let inner_width = chunks[0].width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = list
        .rows
        .iter()
        .map(|row| render_row(row, inner_width, theme))
        .collect();

    let position = list
        .rows
        .iter()
        .position(|r| r.selected)
        .map(|i| format!(" {}/{} ", list.top + i + 1, list.total))
        .unwrap_or_default();
    let title = format!(
        " {} ",
        abbreviate_path(Path::new(&list.title), inner_width.saturating_sub(12))
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(true))
        .title(title)
        .title_bottom(Line::from(position).right_aligned());
    frame.render_widget(List::new(items).block(block), chunks[0]);

    if let Some(notice) = notice {
        let widget =
            Paragraph::new(format!(" {}", notice)).style(Style::default().fg(theme.highlight));
        frame.render_widget(widget, chunks[1]);
    }

    let status_line = match status {
        Some(msg) => Line::from(Span::raw(format!(" {}", msg))),
        None => Line::from(vec![
            Span::styled(" l/→", Style::default().fg(theme.accent)),
            Span::raw(" open  "),
            Span::styled("h/←", Style::default().fg(theme.accent)),
            Span::raw(" back  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" actions  "),
            Span::styled("q", Style::default().fg(theme.accent)),
            Span::raw(" quit"),
        ]),
    };
    frame.render_widget(
        Paragraph::new(status_line).style(Style::default().fg(theme.muted)),
        chunks[2],
    );
}

/// Render a single row as a ListItem
fn render_row(row: &ListRow, width: usize, theme: &Theme) -> ListItem<'static> {
    let mut style = match row.kind {
        ItemKind::Parent | ItemKind::Exit => Style::default().fg(theme.muted),
        ItemKind::Entry { traversable: true } => Style::default().fg(theme.directory),
        ItemKind::Entry { traversable: false } | ItemKind::Choice => Style::default(),
    };
    if row.selected {
        style = theme.selection();
    }

    let marker = if row.selected { "> " } else { "  " };
    let used = marker.chars().count() + row.label.chars().count();
    let detail_width = row.detail.chars().count();
    let padding = width.saturating_sub(used + detail_width + 1);

    let line = Line::from(vec![
        Span::styled(marker, style),
        Span::styled(row.label.clone(), style),
        Span::raw(" ".repeat(padding)),
        Span::styled(
            row.detail.clone(),
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::DIM),
        ),
    ]);
    ListItem::new(line)
}

/// Abbreviate a path to fit within max_width
///
/// Leading components shrink to their first character; when even that is
/// too long, only the tail of the last component is kept.
pub fn abbreviate_path(path: &Path, max_width: usize) -> String {
    let full_path = path.display().to_string();

    if full_path.chars().count() <= max_width {
        return full_path;
    }

    let components: Vec<&str> = full_path.split('/').collect();
    let Some((last, leading)) = components.split_last() else {
        return full_path;
    };

    let mut abbreviated: Vec<String> = leading
        .iter()
        .map(|c| c.chars().next().map(String::from).unwrap_or_default())
        .collect();
    abbreviated.push((*last).to_string());

    let result = abbreviated.join("/");
    let last_len = last.chars().count();

    if result.chars().count() <= max_width {
        result
    } else if last_len > max_width {
        let keep = max_width.saturating_sub(3);
        let tail: String = last.chars().skip(last_len - keep).collect();
        format!("...{}", tail)
    } else {
        (*last).to_string()
    }
}
