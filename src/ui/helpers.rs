use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::Entry;

/// Scroll offset that keeps the cursor visible with a little context above
/// it, capped so short lists never scroll past their end.
pub(crate) fn list_scroll(cursor: usize, len: usize) -> u16 {
    let desired = cursor.saturating_sub(3);
    let max_scroll = len.saturating_sub(1);
    desired.min(max_scroll) as u16
}

/// One selectable row in the sidebar: a pointer when the cursor is on it, a
/// radio or checkbox marker, and the label.
pub(crate) fn choice_row(pointed: bool, marker: &str, label: &str) -> Line<'static> {
    let pointer = if pointed { "▶ " } else { "  " };
    let text = format!("{pointer}{marker} {label}");
    if pointed {
        Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(text)
    }
}

/// Build the three text lines of an entry card: the headword, the badge row
/// (category, id, one badge per part-of-speech tag), and the definition.
pub(crate) fn build_entry_card_lines(entry: &Entry, selected: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(3);

    let word = if selected {
        format!("▶ {}", entry.word)
    } else {
        entry.word.clone()
    };
    lines.push(Line::from(Span::styled(
        word,
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let mut badges = Vec::new();
    match &entry.category {
        Some(category) => badges.push(Span::styled(
            format!("[{category}]"),
            Style::default().fg(Color::Cyan),
        )),
        None => badges.push(Span::styled(
            "[no category]",
            Style::default().fg(Color::DarkGray),
        )),
    }
    badges.push(Span::raw(" "));
    badges.push(Span::styled(
        format!("#{}", entry.id),
        Style::default().fg(Color::DarkGray),
    ));
    for tag in &entry.parts_of_speech {
        badges.push(Span::raw(" "));
        badges.push(Span::styled(
            format!("({tag})"),
            Style::default().fg(Color::Green),
        ));
    }
    lines.push(Line::from(badges));

    lines.push(Line::from(Span::styled(
        entry.definition.clone(),
        Style::default().fg(Color::Gray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keeps_short_lists_pinned() {
        assert_eq!(list_scroll(0, 5), 0);
        assert_eq!(list_scroll(2, 5), 0);
        assert_eq!(list_scroll(4, 5), 1);
        assert_eq!(list_scroll(10, 40), 7);
        assert_eq!(list_scroll(10, 4), 3);
    }
}
