//! Application state and rendering for the glossary browser. This file
//! records not just *what* each interaction does but also *why* the page and
//! cursor behave the way they do, so the keyboard model stays predictable
//! when the code is revisited.

use std::cmp::min;
use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::models::Entry;
use crate::pipeline::{
    derive_options, visible_page, BrowseState, CategoryFilter, FilterOptions, PageView,
};

use super::helpers::{build_entry_card_lines, choice_row, list_scroll};

/// Height of the search bar at the top of the screen.
const SEARCH_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and the pagination controls.
const FOOTER_HEIGHT: u16 = 3;
/// Width of the filter sidebar. Wide enough for category names and tag
/// labels while leaving the bulk of the terminal to the entry cards.
const SIDEBAR_WIDTH: u16 = 26;
/// Height allocation per entry card: headword, badge row, and definition,
/// plus the border.
const ENTRY_CARD_HEIGHT: u16 = 5;

/// Panes the keyboard focus cycles through. Cursor movement keys act on the
/// focused pane; everything else (search, sort, paging) is global.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Pane {
    Entries,
    Categories,
    Tags,
}

impl Pane {
    fn next(self) -> Self {
        match self {
            Pane::Entries => Pane::Categories,
            Pane::Categories => Pane::Tags,
            Pane::Tags => Pane::Entries,
        }
    }

    fn prev(self) -> Self {
        match self {
            Pane::Entries => Pane::Tags,
            Pane::Categories => Pane::Entries,
            Pane::Tags => Pane::Categories,
        }
    }
}

/// Interaction modes. `Searching` overlays the normal keyboard model: typing
/// edits the query and live-filters the list on every keystroke.
enum Mode {
    Normal,
    Searching(SearchState),
}

/// State for an active search. `query` is the text shown in the search bar;
/// it is mirrored into `BrowseState::search` on every edit.
struct SearchState {
    query: String,
}

/// Optional status line surfaced in the footer.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI. The struct combines the
/// read-only dataset, the derived filter options, the one mutable
/// `BrowseState`, and the purely visual cursor/focus bookkeeping.
pub struct App {
    /// The full entry collection, loaded once and never mutated.
    entries: Vec<Entry>,
    /// Distinct categories and tags, derived once from `entries` to populate
    /// the sidebar controls.
    options: FilterOptions,
    /// The session state driving the filter → sort → paginate pipeline.
    state: BrowseState,
    /// Pane that receives cursor movement keys.
    focus: Pane,
    /// Highlighted card on the current page (zero-based, page-local).
    entry_cursor: usize,
    /// Cursor in the category radio list. Index 0 is the `all` row.
    category_cursor: usize,
    /// Cursor in the tag checkbox list.
    tag_cursor: usize,
    /// Current interaction mode.
    mode: Mode,
    /// Optional status line surfaced in the footer.
    status: Option<StatusMessage>,
}

impl App {
    /// Construct the app around a loaded dataset. Filter options are derived
    /// here, once; the sidebar never rescans the collection afterwards.
    pub fn new(entries: Vec<Entry>) -> Self {
        let options = derive_options(&entries);
        Self {
            entries,
            options,
            state: BrowseState::default(),
            focus: Pane::Entries,
            entry_cursor: 0,
            category_cursor: 0,
            tag_cursor: 0,
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Top-level key dispatcher. Every key funnels through the active
    /// `Mode`, which returns the next mode to run. The boolean result tells
    /// the outer loop whether the user requested an exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Searching(search) => self.handle_search(code, search)?,
        };

        self.mode = mode;
        Ok(exit)
    }

    /// Handle keys while in `Mode::Normal`: pane focus, cursor movement,
    /// control activation, sorting, page size, and page navigation.
    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Char('/') | KeyCode::Char('f') => {
                self.clear_status();
                return Ok(Mode::Searching(SearchState {
                    query: self.state.search.clone(),
                }));
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-5),
            KeyCode::PageDown => self.move_cursor(5),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_selection(),
            KeyCode::Char('s') | KeyCode::Char('S') => {
                // Reordering the same result set, so the page stays put.
                self.state.cycle_sort();
                self.set_status(
                    format!("Sorted by {}.", self.state.sort.label()),
                    StatusKind::Info,
                );
            }
            KeyCode::Char(']') => self.change_page_size(true),
            KeyCode::Char('[') => self.change_page_size(false),
            KeyCode::Left => self.turn_page(-1),
            KeyCode::Right => self.turn_page(1),
            _ => {}
        }
        Ok(Mode::Normal)
    }

    /// Handle keys while the search bar is active. Typing updates the query
    /// and re-filters immediately; Enter keeps the term, Esc clears it. The
    /// arrow keys keep working against the (already filtered) entry list so
    /// the user can inspect results without leaving the search.
    fn handle_search(&mut self, code: KeyCode, mut search: SearchState) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.state.set_search("");
                self.entry_cursor = 0;
                self.set_status("Search cleared.", StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::Enter => return Ok(Mode::Normal),
            KeyCode::Up => {
                self.move_entry_cursor(-1);
                return Ok(Mode::Searching(search));
            }
            KeyCode::Down => {
                self.move_entry_cursor(1);
                return Ok(Mode::Searching(search));
            }
            KeyCode::PageUp => {
                self.move_entry_cursor(-5);
                return Ok(Mode::Searching(search));
            }
            KeyCode::PageDown => {
                self.move_entry_cursor(5);
                return Ok(Mode::Searching(search));
            }
            KeyCode::Left => {
                self.turn_page(-1);
                return Ok(Mode::Searching(search));
            }
            KeyCode::Right => {
                self.turn_page(1);
                return Ok(Mode::Searching(search));
            }
            KeyCode::Backspace => {
                search.query.pop();
            }
            KeyCode::Char(ch) => {
                if !ch.is_control() {
                    search.query.push(ch);
                }
            }
            _ => return Ok(Mode::Searching(search)),
        }

        // Every edit re-filters from page 1, matching the reset rule for
        // filter changes.
        self.state.set_search(&search.query);
        self.entry_cursor = 0;
        Ok(Mode::Searching(search))
    }

    /// Activate the control under the cursor: select a category radio or
    /// toggle a tag checkbox. Both are filter changes, so both reset the
    /// page (inside the state methods) and the card cursor.
    fn activate_selection(&mut self) {
        match self.focus {
            Pane::Entries => {}
            Pane::Categories => {
                let filter = if self.category_cursor == 0 {
                    CategoryFilter::All
                } else {
                    match self.options.categories.get(self.category_cursor - 1) {
                        Some(name) => CategoryFilter::Only(name.clone()),
                        None => return,
                    }
                };
                let label = filter.label().to_string();
                self.state.select_category(filter);
                self.entry_cursor = 0;
                self.set_status(format!("Category: {label}."), StatusKind::Info);
            }
            Pane::Tags => {
                let tag = match self.options.tags.get(self.tag_cursor) {
                    Some(tag) => tag.clone(),
                    None => {
                        self.set_status("No tags to select.", StatusKind::Error);
                        return;
                    }
                };
                let selected = self.state.toggle_tag(&tag);
                self.entry_cursor = 0;
                let message = if selected {
                    format!("Tag '{tag}' selected.")
                } else {
                    format!("Tag '{tag}' cleared.")
                };
                self.set_status(message, StatusKind::Info);
            }
        }
    }

    /// Step the page size through the fixed choices.
    fn change_page_size(&mut self, forward: bool) {
        self.state.cycle_page_size(forward);
        self.entry_cursor = 0;
        self.set_status(
            format!("{} entries per page.", self.state.page_size),
            StatusKind::Info,
        );
    }

    /// Move to the previous or next page. Requests past either boundary are
    /// rejected here, mirroring the disabled arrows in the footer; there is
    /// no wraparound.
    fn turn_page(&mut self, direction: isize) {
        let total = visible_page(&self.entries, &self.state).total_pages;
        let moved = if direction < 0 {
            self.state.prev_page()
        } else {
            self.state.next_page(total)
        };
        if moved {
            self.entry_cursor = 0;
            self.clear_status();
        }
    }

    /// Move the cursor of whichever pane has focus.
    fn move_cursor(&mut self, offset: isize) {
        match self.focus {
            Pane::Entries => self.move_entry_cursor(offset),
            Pane::Categories => {
                let len = self.options.categories.len() + 1;
                Self::step(&mut self.category_cursor, offset, len);
            }
            Pane::Tags => {
                let len = self.options.tags.len();
                Self::step(&mut self.tag_cursor, offset, len);
            }
        }
    }

    fn move_entry_cursor(&mut self, offset: isize) {
        let len = visible_page(&self.entries, &self.state).entries.len();
        Self::step(&mut self.entry_cursor, offset, len);
    }

    /// Clamp-style cursor stepping shared by every pane.
    fn step(cursor: &mut usize, offset: isize, len: usize) {
        if len == 0 {
            *cursor = 0;
            return;
        }
        let max = len as isize - 1;
        let mut new = *cursor as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new > max {
            new = max;
        }
        *cursor = new as usize;
    }

    fn select_first(&mut self) {
        match self.focus {
            Pane::Entries => self.entry_cursor = 0,
            Pane::Categories => self.category_cursor = 0,
            Pane::Tags => self.tag_cursor = 0,
        }
    }

    fn select_last(&mut self) {
        match self.focus {
            Pane::Entries => {
                let len = visible_page(&self.entries, &self.state).entries.len();
                self.entry_cursor = len.saturating_sub(1);
            }
            Pane::Categories => self.category_cursor = self.options.categories.len(),
            Pane::Tags => self.tag_cursor = self.options.tags.len().saturating_sub(1),
        }
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    /// Main render routine invoked each tick. Recomputes the visible page
    /// from scratch so the drawing always reflects the most recent state;
    /// the pipeline is cheap enough that caching would only add staleness
    /// bugs.
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let view = visible_page(&self.entries, &self.state);

        self.draw_search_bar(frame, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(chunks[1]);
        self.draw_sidebar(frame, body[0]);
        self.draw_entry_list(frame, body[1], &view);

        self.draw_footer(frame, chunks[2], &view);
    }

    /// Search bar pinned to the top. While the search mode is active the
    /// terminal cursor sits at the end of the typed text.
    fn draw_search_bar(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Search");
        let text = match &self.mode {
            Mode::Searching(search) => search.query.as_str(),
            Mode::Normal => self.state.search.as_str(),
        };
        let paragraph = Paragraph::new(Span::raw(format!("Search: {text}")))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);

        if let Mode::Searching(search) = &self.mode {
            let inner = block.inner(area);
            let cursor_x = inner.x + "Search: ".len() as u16 + search.query.chars().count() as u16;
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }

    fn draw_sidebar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Percentage(35),
                Constraint::Length(4),
            ])
            .split(area);
        self.draw_category_pane(frame, chunks[0]);
        self.draw_tag_pane(frame, chunks[1]);
        self.draw_view_pane(frame, chunks[2]);
    }

    /// Block wrapper for a pane, highlighted when it has keyboard focus.
    fn pane_block(&self, title: &'static str, pane: Pane) -> Block<'static> {
        let mut block = Block::default().borders(Borders::ALL).title(title);
        if self.focus == pane && matches!(self.mode, Mode::Normal) {
            block = block.style(Style::default().fg(Color::Yellow));
        }
        block
    }

    /// Single-select category list. The `all` sentinel is always the first
    /// row; exactly one row carries the filled radio marker.
    fn draw_category_pane(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Pane::Categories && matches!(self.mode, Mode::Normal);
        let len = self.options.categories.len() + 1;

        let mut lines = Vec::with_capacity(len);
        for (idx, label) in std::iter::once("all")
            .chain(self.options.categories.iter().map(String::as_str))
            .enumerate()
        {
            let is_selected = match &self.state.category {
                CategoryFilter::All => idx == 0,
                CategoryFilter::Only(name) => idx > 0 && name == label,
            };
            let marker = if is_selected { "(•)" } else { "( )" };
            lines.push(choice_row(focused && idx == self.category_cursor, marker, label));
        }

        let scroll = if focused {
            list_scroll(self.category_cursor, len)
        } else {
            0
        };
        let paragraph = Paragraph::new(lines)
            .block(self.pane_block("Category", Pane::Categories))
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }

    /// Multi-select tag list. Any number of rows may be checked; an empty
    /// selection means the tag filter is off.
    fn draw_tag_pane(&self, frame: &mut Frame, area: Rect) {
        let block = self.pane_block("Tags", Pane::Tags);

        if self.options.tags.is_empty() {
            let message = Paragraph::new("No tags in dataset.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(message, area);
            return;
        }

        let focused = self.focus == Pane::Tags && matches!(self.mode, Mode::Normal);
        let mut lines = Vec::with_capacity(self.options.tags.len());
        for (idx, tag) in self.options.tags.iter().enumerate() {
            let marker = if self.state.tags.contains(tag) {
                "[x]"
            } else {
                "[ ]"
            };
            lines.push(choice_row(focused && idx == self.tag_cursor, marker, tag));
        }

        let scroll = if focused {
            list_scroll(self.tag_cursor, self.options.tags.len())
        } else {
            0
        };
        let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }

    /// Read-only readout of the sort key and page size, with their keys.
    fn draw_view_pane(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(format!("Sort: {}  [s]", self.state.sort.label())),
            Line::from(format!("Per page: {}  [[ ]]", self.state.page_size)),
        ];
        let paragraph =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("View"));
        frame.render_widget(paragraph, area);
    }

    /// Render the visible slice as a column of entry cards, keeping the
    /// highlighted card inside the window.
    fn draw_entry_list(&self, frame: &mut Frame, area: Rect, view: &PageView<'_>) {
        let block = self.pane_block("Entries", Pane::Entries);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);
        if inner.height == 0 {
            return;
        }

        if self.entries.is_empty() {
            let message = Paragraph::new("No entries loaded.").alignment(Alignment::Center);
            frame.render_widget(message, inner);
            return;
        }

        if view.entries.is_empty() {
            let message_text = if self.state.search.is_empty() {
                "No entries match the current filters."
            } else {
                "No entries match the current search."
            };
            let message = Paragraph::new(message_text).alignment(Alignment::Center);
            frame.render_widget(message, inner);
            return;
        }

        let card_height = ENTRY_CARD_HEIGHT as usize;
        let capacity = ((inner.height as usize) / card_height).max(1);
        let len = view.entries.len();
        let selected = self.entry_cursor.min(len - 1);
        let entries_active =
            self.focus == Pane::Entries || matches!(self.mode, Mode::Searching(_));

        let mut start = if selected >= capacity {
            selected + 1 - capacity
        } else {
            0
        };
        if start + capacity > len {
            start = len.saturating_sub(capacity);
        }
        let end = min(start + capacity, len);
        let visible_len = end.saturating_sub(start);
        if visible_len == 0 {
            return;
        }

        let constraints: Vec<Constraint> = (0..visible_len)
            .map(|_| Constraint::Length(ENTRY_CARD_HEIGHT))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (idx, chunk) in rows.iter().enumerate() {
            if chunk.height == 0 {
                continue;
            }

            let entry_index = start + idx;
            if entry_index >= len {
                break;
            }

            let entry = view.entries[entry_index];
            let highlighted = entries_active && entry_index == selected;
            let mut card_block = Block::default().borders(Borders::ALL);
            if highlighted {
                card_block = card_block.style(Style::default().fg(Color::Yellow));
            }

            let paragraph = Paragraph::new(build_entry_card_lines(entry, highlighted))
                .block(card_block)
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Left);
            frame.render_widget(paragraph, *chunk);
        }
    }

    /// Footer with the status line and the pagination/shortcut row. The page
    /// arrows render dimmed when the corresponding move would be rejected.
    fn draw_footer(&self, frame: &mut Frame, area: Rect, view: &PageView<'_>) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_controls(view)])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_controls(&self, view: &PageView<'_>) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let disabled_style = Style::default().fg(Color::DarkGray);

        let mut spans = vec![
            Span::styled("[←]", if view.has_prev() { key_style } else { disabled_style }),
            Span::raw(format!(" Page {} of {} ", view.page, view.total_pages)),
            Span::styled("[→]", if view.has_next() { key_style } else { disabled_style }),
            Span::raw(format!("  •  {} matches   ", view.matches)),
        ];

        match self.mode {
            Mode::Searching(_) => spans.extend([
                Span::styled("[Enter]", key_style),
                Span::raw(" Keep   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Clear"),
            ]),
            Mode::Normal => spans.extend([
                Span::styled("[Tab]", key_style),
                Span::raw(" Pane   "),
                Span::styled("[Space]", key_style),
                Span::raw(" Toggle   "),
                Span::styled("[/]", key_style),
                Span::raw(" Search   "),
                Span::styled("[s]", key_style),
                Span::raw(" Sort   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }

        Line::from(spans)
    }
}
