//! Popup rendering (menus, messages, progress)

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::theme::Theme;
use crate::app::frontend::ListView;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for `tick`
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

/// Render a list of choices in a centered popup
pub fn render_menu(frame: &mut Frame, area: Rect, list: &ListView, theme: &Theme) {
    let widest = list
        .rows
        .iter()
        .map(|r| r.label.chars().count())
        .chain(std::iter::once(list.title.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    let popup = centered_rect(widest + 8, list.rows.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = list
        .rows
        .iter()
        .map(|row| {
            let style = if row.selected {
                theme.selection()
            } else {
                Style::default()
            };
            let marker = if row.selected { "> " } else { "  " };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", marker, row.label),
                style,
            )))
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ", list.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));
    frame.render_widget(List::new(items).block(block), popup);
}

/// Render a message popup with a dismiss hint
pub fn render_message(frame: &mut Frame, area: Rect, title: &str, lines: &[String], theme: &Theme) {
    let widest = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count()) as u16;
    let popup = centered_rect(widest + 6, lines.len() as u16 + 4, area);
    frame.render_widget(Clear, popup);

    let mut text: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();
    text.push(Line::from(""));
    text.push(
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(theme.muted),
        ))
        .alignment(Alignment::Center),
    );

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));
    let widget = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, popup);
}

/// Render a spinner with a label
pub fn render_progress(frame: &mut Frame, area: Rect, label: &str, tick: usize, theme: &Theme) {
    let popup = centered_rect(label.chars().count() as u16 + 10, 3, area);
    frame.render_widget(Clear, popup);

    let line = Line::from(vec![
        Span::styled(
            spinner_frame(tick),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {}…", label)),
    ]);
    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, popup);
}

/// Create a centered rectangle of at most `width` x `height`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.max(30).min(area.width);
    let popup_height = height.min(area.height);

    let x = (area.width.saturating_sub(popup_width)) / 2;
    let y = (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(area.x + x, area.y + y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));

        let small = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(40, 10, small);
        assert_eq!(rect, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_centered_rect_minimum_width() {
        let rect = centered_rect(4, 3, Rect::new(0, 0, 80, 24));
        assert_eq!(rect.width, 30);
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), spinner_frame(SPINNER.len()));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }
}
