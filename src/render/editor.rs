//! Rename editor rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use super::browser::abbreviate_path;
use super::theme::Theme;
use crate::app::frontend::EditorView;
use crate::core::EditorBuffer;
use crate::handler::FocusState;
use crate::rename::{MatchSpan, RenamePreview};

/// Render the two fields, the preview table and the summary line
pub fn render_editor(frame: &mut Frame, area: Rect, view: &EditorView<'_>, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Pattern
            Constraint::Length(3), // Replacement
            Constraint::Min(3),    // Preview
            Constraint::Length(1), // Summary
        ])
        .split(area);

    let pattern_title = format!(" Pattern ({}) ", view.mode.display_name());
    let mut pattern_block = field_block(
        &pattern_title,
        view.focus == FocusState::PatternField,
        theme,
    );
    if let Some(error) = view.pattern_error {
        pattern_block = pattern_block.title_bottom(Line::from(Span::styled(
            format!(" {} ", first_line(error)),
            Style::default().fg(theme.conflict),
        )));
    }
    render_input_field(
        frame,
        chunks[0],
        view.pattern,
        view.focus == FocusState::PatternField,
        pattern_block,
    );

    let replacement_block = field_block(
        " Replacement ",
        view.focus == FocusState::ReplacementField,
        theme,
    );
    render_input_field(
        frame,
        chunks[1],
        view.replacement,
        view.focus == FocusState::ReplacementField,
        replacement_block,
    );

    render_preview_table(frame, chunks[2], view, theme);
    render_summary(frame, chunks[3], view, theme);
}

fn field_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.border(focused))
}

/// Render an input field with a REVERSED cursor cell
///
/// Long text scrolls so the cursor stays in view.
fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    buffer: &EditorBuffer,
    is_active: bool,
    block: Block<'_>,
) {
    let width = area.width.saturating_sub(2).max(1) as usize;
    let chars: Vec<char> = buffer.text().chars().collect();
    let cursor = buffer.cursor();
    let start = if is_active {
        (cursor + 1).saturating_sub(width)
    } else {
        0
    };

    let style = if is_active {
        Style::default()
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let line = if is_active {
        let before: String = chars[start..cursor].iter().collect();
        let cursor_char = chars.get(cursor).copied().unwrap_or(' ');
        let after: String = chars.iter().skip(cursor + 1).collect();
        Line::from(vec![
            Span::styled(before, style),
            Span::styled(
                cursor_char.to_string(),
                style.add_modifier(Modifier::REVERSED),
            ),
            Span::styled(after, style),
        ])
    } else {
        Line::from(Span::styled(buffer.text().to_string(), style))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_preview_table(frame: &mut Frame, area: Rect, view: &EditorView<'_>, theme: &Theme) {
    let page = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = view
        .previews
        .iter()
        .skip(view.scroll)
        .take(page)
        .map(|preview| {
            Row::new(vec![
                highlighted_name(&preview.original_name, &preview.match_spans, theme),
                after_cell(preview, theme),
            ])
        })
        .collect();

    let header = Row::new(vec!["Before", "After"]).style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let range = if view.previews.is_empty() {
        String::new()
    } else {
        format!(
            " {}-{} of {} ",
            view.scroll + 1,
            (view.scroll + page).min(view.previews.len()),
            view.previews.len()
        )
    };
    let title = format!(
        " Preview: {} ",
        abbreviate_path(view.dir, area.width.saturating_sub(16) as usize)
    );
    let block = Block::default()
        .title(title)
        .title_bottom(Line::from(range).right_aligned())
        .borders(Borders::ALL)
        .border_style(theme.border(view.focus == FocusState::PreviewList));

    let table = Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(50)])
        .header(header)
        .column_spacing(2)
        .block(block);
    frame.render_widget(table, area);
}

fn after_cell(preview: &RenamePreview, theme: &Theme) -> Line<'static> {
    if preview.is_empty_result() {
        Line::from(Span::styled(
            format!("{} (empty, skipped)", preview.new_name),
            Style::default().fg(theme.muted),
        ))
    } else if !preview.will_change() {
        Line::from(Span::styled(
            preview.new_name.clone(),
            Style::default().fg(theme.muted),
        ))
    } else if preview.has_conflict {
        Line::from(Span::styled(
            format!("{} (exists)", preview.new_name),
            Style::default()
                .fg(theme.conflict)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            preview.new_name.clone(),
            Style::default().fg(theme.accent),
        ))
    }
}

/// Split `name` into plain and highlighted spans
///
/// Spans that do not fall on character boundaries are ignored.
pub fn highlighted_name(name: &str, spans: &[MatchSpan], theme: &Theme) -> Line<'static> {
    let mark = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let mut out = Vec::with_capacity(spans.len() * 2 + 1);
    let mut pos = 0;

    for span in spans {
        if span.start < pos {
            continue;
        }
        let (Some(plain), Some(matched)) = (name.get(pos..span.start), name.get(span.start..span.end()))
        else {
            continue;
        };
        if !plain.is_empty() {
            out.push(Span::raw(plain.to_string()));
        }
        if !matched.is_empty() {
            out.push(Span::styled(matched.to_string(), mark));
        }
        pos = span.end();
    }
    if let Some(rest) = name.get(pos..) {
        if !rest.is_empty() {
            out.push(Span::raw(rest.to_string()));
        }
    }
    Line::from(out)
}

fn render_summary(frame: &mut Frame, area: Rect, view: &EditorView<'_>, theme: &Theme) {
    let s = view.summary;
    let mut spans = vec![
        Span::raw(format!(" {} folders · ", s.total)),
        Span::styled(
            format!("{} to rename", s.changing),
            Style::default().fg(theme.accent),
        ),
    ];
    if s.conflicts > 0 {
        spans.push(Span::raw(" · "));
        spans.push(Span::styled(
            format!("{} conflicts", s.conflicts),
            Style::default().fg(theme.conflict),
        ));
    }
    if s.empty > 0 {
        spans.push(Span::raw(format!(" · {} empty", s.empty)));
    }
    if view.stale {
        spans.push(Span::styled(" · updating", Style::default().fg(theme.muted)));
    }
    if let Some(notice) = view.notice {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            notice.to_string(),
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(
        "  F1 help",
        Style::default().fg(theme.muted),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn first_line(text: &str) -> &str {
    text.lines().find(|l| !l.trim().is_empty()).unwrap_or(text)
}
