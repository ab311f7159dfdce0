//! Menus, confirmations and message popups

use super::frontend::{menu_page_size, Frontend, ListView, Screen, IDLE_WAIT};
use crate::core::{SelectItem, Selector, Signal};

/// Let the user pick one of `items`; `None` when the popup was dismissed
pub fn pick<F, T>(
    frontend: &mut F,
    title: &str,
    items: Vec<SelectItem<T>>,
    initial: usize,
) -> anyhow::Result<Option<T>>
where
    F: Frontend + ?Sized,
    T: Clone,
{
    let count = items.len();
    let mut selector = Selector::new(items, menu_page_size(frontend.size().1, count));
    selector.select(initial);

    loop {
        selector.set_page_size(menu_page_size(frontend.size().1, count));
        frontend.draw(&Screen::Menu {
            list: ListView::of(title, &selector, |_| String::new()),
        })?;

        let Some(key) = frontend.next_key(IDLE_WAIT)? else {
            continue;
        };
        match selector.handle_key(key) {
            Some((Signal::Select, item)) => return Ok(Some(item.value.clone())),
            Some((Signal::Exit | Signal::Back, _)) => return Ok(None),
            Some((Signal::Enter, _)) | None => {}
        }
    }
}

/// Yes/No question; dismissing the popup answers No
pub fn confirm<F>(frontend: &mut F, question: &str, default: bool) -> anyhow::Result<bool>
where
    F: Frontend + ?Sized,
{
    let items = vec![SelectItem::choice("Yes", true), SelectItem::choice("No", false)];
    let initial = if default { 0 } else { 1 };
    let answer = pick(frontend, question, items, initial)?.unwrap_or(false);
    tracing::debug!(question, answer, "confirm");
    Ok(answer)
}

/// Show `lines` until any key is pressed
pub fn show_message<F>(frontend: &mut F, title: &str, lines: &[String]) -> anyhow::Result<()>
where
    F: Frontend + ?Sized,
{
    loop {
        frontend.draw(&Screen::Message { title, lines })?;
        if frontend.next_key(IDLE_WAIT)?.is_some() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::frontend::testing::{key, ScriptedFrontend};
    use crossterm::event::KeyCode;

    #[test]
    fn test_confirm_default_yes() {
        let mut fe = ScriptedFrontend::new(vec![key(KeyCode::Enter)]);
        assert!(confirm(&mut fe, "Rename 3 folders?", true).unwrap());
        assert_eq!(fe.drawn, vec!["Rename 3 folders?"]);
    }

    #[test]
    fn test_confirm_move_to_no() {
        let mut fe = ScriptedFrontend::new(vec![key(KeyCode::Down), key(KeyCode::Enter)]);
        assert!(!confirm(&mut fe, "Rename?", true).unwrap());
    }

    #[test]
    fn test_confirm_escape_is_no() {
        let mut fe = ScriptedFrontend::new(vec![None, key(KeyCode::Esc)]);
        assert!(!confirm(&mut fe, "Discard?", true).unwrap());
        assert_eq!(fe.remaining(), 0);
    }

    #[test]
    fn test_pick_returns_value() {
        let items = vec![
            SelectItem::choice("a", 'a'),
            SelectItem::choice("b", 'b'),
            SelectItem::choice("c", 'c'),
        ];
        let mut fe = ScriptedFrontend::new(vec![key(KeyCode::End), key(KeyCode::Enter)]);
        assert_eq!(pick(&mut fe, "menu", items, 0).unwrap(), Some('c'));
    }

    #[test]
    fn test_show_message_waits_for_key() {
        let mut fe = ScriptedFrontend::new(vec![None, None, key(KeyCode::Char('x'))]);
        show_message(&mut fe, "Done", &["Renamed 2 folders".to_string()]).unwrap();
        assert_eq!(fe.drawn.len(), 3);
        assert_eq!(fe.messages, vec![vec!["Renamed 2 folders".to_string()]]);
    }
}
