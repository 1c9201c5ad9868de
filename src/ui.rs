use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs},
    Frame, Terminal,
};
use std::io;

use crate::input::InputField;
use crate::models::{Category, ProgressTier};
use crate::store::TaskStore;

// Chip order: "All" first, then one chip per category.
const FILTER_CHOICES: [Option<Category>; 4] = [
    None,
    Some(Category::School),
    Some(Category::Health),
    Some(Category::Personal),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    EditTitle,
    EditCategory,
    EditMinutes,
}

pub struct App {
    pub store: TaskStore,
    pub list_state: ListState,
    pub input_mode: InputMode,
    pub title_input: InputField,
    pub minutes_input: InputField,
    pub form_category: Category,
    pub should_quit: bool,
    minutes_preset: String,
}

impl App {
    pub fn new(store: TaskStore, minutes_preset: u32) -> Self {
        let preset = minutes_preset.to_string();
        let minutes_input = InputField::new(&preset);
        let mut app = App {
            store,
            list_state: ListState::default(),
            input_mode: InputMode::Browse,
            title_input: InputField::default(),
            minutes_input,
            form_category: Category::School,
            should_quit: false,
            minutes_preset: preset,
        };
        if !app.store.visible_tasks().is_empty() {
            app.list_state.select(Some(0));
        }
        app
    }

    pub fn next_item(&mut self) {
        let len = self.store.visible_tasks().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous_item(&mut self) {
        let len = self.store.visible_tasks().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn next_filter(&mut self) {
        let i = filter_index(self.store.active_filter());
        self.store
            .set_filter(FILTER_CHOICES[(i + 1) % FILTER_CHOICES.len()]);
        self.clamp_selection();
    }

    pub fn previous_filter(&mut self) {
        let i = filter_index(self.store.active_filter());
        let n = FILTER_CHOICES.len();
        self.store.set_filter(FILTER_CHOICES[(i + n - 1) % n]);
        self.clamp_selection();
    }

    // The selection is an index into the visible list, so it has to be
    // rechecked whenever the filter changes.
    fn clamp_selection(&mut self) {
        let len = self.store.visible_tasks().len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            match self.list_state.selected() {
                Some(i) if i < len => {}
                _ => self.list_state.select(Some(0)),
            }
        }
    }

    pub fn toggle_selected(&mut self) {
        let id = match self.list_state.selected() {
            Some(i) => match self.store.visible_tasks().get(i) {
                Some(task) => task.id,
                None => return,
            },
            None => return,
        };
        self.store.toggle_task(id);
    }

    pub fn open_form(&mut self) {
        self.input_mode = InputMode::EditTitle;
    }

    pub fn close_form(&mut self) {
        self.input_mode = InputMode::Browse;
    }

    pub fn next_form_field(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::EditTitle => InputMode::EditCategory,
            InputMode::EditCategory => InputMode::EditMinutes,
            InputMode::EditMinutes => InputMode::EditTitle,
            InputMode::Browse => InputMode::Browse,
        };
    }

    pub fn previous_form_field(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::EditTitle => InputMode::EditMinutes,
            InputMode::EditCategory => InputMode::EditTitle,
            InputMode::EditMinutes => InputMode::EditCategory,
            InputMode::Browse => InputMode::Browse,
        };
    }

    pub fn cycle_form_category(&mut self, forward: bool) {
        let i = Category::ALL
            .iter()
            .position(|c| *c == self.form_category)
            .unwrap_or(0);
        let n = Category::ALL.len();
        let i = if forward { (i + 1) % n } else { (i + n - 1) % n };
        self.form_category = Category::ALL[i];
    }

    pub fn submit_form(&mut self) {
        let before = self.store.len();
        self.store.add_task(
            self.title_input.text(),
            self.form_category,
            self.minutes_input.text(),
        );
        if self.store.len() == before {
            // Rejected input stays in the form so it can be fixed.
            return;
        }
        self.title_input.clear();
        self.minutes_input.set_text(&self.minutes_preset);
        self.input_mode = InputMode::Browse;
        // The add cleared the filter, so the new task is last in the list.
        self.list_state.select(Some(self.store.len() - 1));
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match self.input_mode {
            InputMode::Browse => self.handle_browse_key(code, modifiers),
            _ => self.handle_form_key(code, modifiers),
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }
        match code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.next_filter();
            }
            KeyCode::BackTab => {
                self.previous_filter();
            }
            KeyCode::Down => {
                self.next_item();
            }
            KeyCode::Up => {
                self.previous_item();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_selected();
            }
            KeyCode::Char('a') => {
                self.open_form();
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }
        match code {
            KeyCode::Esc => {
                self.close_form();
            }
            KeyCode::Enter => {
                self.submit_form();
            }
            KeyCode::Tab => {
                self.next_form_field();
            }
            KeyCode::BackTab => {
                self.previous_form_field();
            }
            _ => match self.input_mode {
                InputMode::EditTitle => self.handle_title_key(code),
                InputMode::EditCategory => self.handle_category_key(code),
                InputMode::EditMinutes => self.handle_minutes_key(code),
                InputMode::Browse => {}
            },
        }
    }

    fn handle_title_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.title_input.insert_char(c),
            KeyCode::Backspace => self.title_input.backspace(),
            KeyCode::Left => self.title_input.move_left(),
            KeyCode::Right => self.title_input.move_right(),
            KeyCode::Home => self.title_input.move_home(),
            KeyCode::End => self.title_input.move_end(),
            _ => {}
        }
    }

    fn handle_category_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.cycle_form_category(false),
            KeyCode::Right => self.cycle_form_category(true),
            _ => {}
        }
    }

    fn handle_minutes_key(&mut self, code: KeyCode) {
        match code {
            // Only digits reach the field, so the store never sees signs,
            // spaces or decimal points here.
            KeyCode::Char(c) if c.is_ascii_digit() => self.minutes_input.insert_char(c),
            KeyCode::Backspace => self.minutes_input.backspace(),
            KeyCode::Left => self.minutes_input.move_left(),
            KeyCode::Right => self.minutes_input.move_right(),
            KeyCode::Home => self.minutes_input.move_home(),
            KeyCode::End => self.minutes_input.move_end(),
            _ => {}
        }
    }
}

fn filter_index(filter: Option<Category>) -> usize {
    FILTER_CHOICES
        .iter()
        .position(|f| *f == filter)
        .unwrap_or(0)
}

pub fn run_tui(store: TaskStore, minutes_preset: u32) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store, minutes_preset);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code, key.modifiers);
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(5),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    render_header(f, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_filter_chips(f, app, chunks[2]);
    render_task_list(f, app, chunks[3]);
    render_add_form(f, app, chunks[4]);
    render_key_hints(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let today = chrono::Local::now().format("%-d %B %Y").to_string();
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "sprout",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(today, Style::default().fg(Color::DarkGray))),
    ]);
    f.render_widget(header, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.store.progress_summary();
    let block = Block::default().borders(Borders::ALL).title("Today's flow");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(inner);

    let message =
        Paragraph::new(tier_message(summary.tier())).style(Style::default().fg(Color::Gray));
    f.render_widget(message, rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::LightBlue).bg(Color::DarkGray))
        .ratio(summary.ratio.clamp(0.0, 1.0));
    f.render_widget(gauge, rows[1]);

    let counts = Paragraph::new(format!("{} / {} tasks done", summary.done, summary.total))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(counts, rows[2]);
}

fn render_filter_chips(f: &mut Frame, app: &App, area: Rect) {
    let mut titles = vec![Line::from("All")];
    titles.extend(Category::ALL.iter().map(|c| {
        Line::from(Span::styled(
            c.label(),
            Style::default().fg(category_color(*c)),
        ))
    }));

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Filter"))
        .select(filter_index(app.store.active_filter()))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::Black),
        );
    f.render_widget(tabs, area);
}

fn render_task_list(f: &mut Frame, app: &mut App, area: Rect) {
    let visible = app.store.visible_tasks();
    if visible.is_empty() {
        let empty = Paragraph::new("No tasks in this filter. Add a new one below.")
            .block(Block::default().borders(Borders::ALL).title("Tasks"))
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|task| {
            let color = category_color(task.category);
            let marker = if task.done {
                Span::styled("✓ ", Style::default().fg(color))
            } else {
                Span::styled("· ", Style::default().fg(Color::DarkGray))
            };
            let title_style = if task.done {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(vec![Line::from(vec![
                marker,
                Span::styled(task.title.clone(), title_style),
                Span::styled(
                    format!("  {} min · {}", task.focus_minutes, task.category.label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Tasks"))
        .highlight_style(
            Style::default()
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_add_form(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.input_mode != InputMode::Browse;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add a task")
        .border_style(if focused {
            Style::default().fg(Color::LightBlue)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(inner);

    let mut title_spans = vec![field_label("Title", app.input_mode == InputMode::EditTitle)];
    title_spans.extend(input_spans(
        &app.title_input,
        app.input_mode == InputMode::EditTitle,
        "Task title (e.g. two essay paragraphs)",
    ));
    f.render_widget(Paragraph::new(Line::from(title_spans)), rows[0]);

    let mut category_spans = vec![field_label(
        "Category",
        app.input_mode == InputMode::EditCategory,
    )];
    for category in Category::ALL {
        let style = if category == app.form_category {
            Style::default()
                .fg(Color::Black)
                .bg(category_color(category))
        } else {
            Style::default().fg(Color::DarkGray)
        };
        category_spans.push(Span::styled(format!(" {} ", category.label()), style));
        category_spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(category_spans)), rows[1]);

    let mut minutes_spans = vec![field_label(
        "Minutes",
        app.input_mode == InputMode::EditMinutes,
    )];
    minutes_spans.extend(input_spans(
        &app.minutes_input,
        app.input_mode == InputMode::EditMinutes,
        "",
    ));
    minutes_spans.push(Span::styled(" min", Style::default().fg(Color::DarkGray)));
    f.render_widget(Paragraph::new(Line::from(minutes_spans)), rows[2]);
}

fn render_key_hints(f: &mut Frame, app: &App, area: Rect) {
    let hints = if app.input_mode == InputMode::Browse {
        "↑/↓ select · Enter toggle · Tab filter · a add task · q quit"
    } else {
        "Tab next field · ←/→ move · Enter save · Esc back"
    };
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn tier_message(tier: ProgressTier) -> &'static str {
    match tier {
        ProgressTier::Empty => "No tasks planned yet.",
        ProgressTier::Complete => "All done! You earned the break.",
        ProgressTier::MostlyDone => "Most of the way there, keep going!",
        ProgressTier::JustStarted => "Good start. Small steps add up.",
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::School => Color::LightBlue,
        Category::Health => Color::Green,
        Category::Personal => Color::LightMagenta,
    }
}

fn field_label(name: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!("{name:9} "), style)
}

fn input_spans<'a>(field: &'a InputField, focused: bool, placeholder: &'a str) -> Vec<Span<'a>> {
    if !focused {
        if field.text().is_empty() {
            return vec![Span::styled(
                placeholder,
                Style::default().fg(Color::DarkGray),
            )];
        }
        return vec![Span::styled(
            field.text(),
            Style::default().fg(Color::White),
        )];
    }

    let chars: Vec<char> = field.text().chars().collect();
    let cursor = field.cursor();
    let before: String = chars[..cursor].iter().collect();
    let cursor_char = chars.get(cursor).map_or(' ', |c| *c);
    let after: String = if cursor < chars.len() {
        chars[cursor + 1..].iter().collect()
    } else {
        String::new()
    };

    vec![
        Span::styled(before, Style::default().fg(Color::White)),
        Span::styled(
            cursor_char.to_string(),
            Style::default().bg(Color::Cyan).fg(Color::Black),
        ),
        Span::styled(after, Style::default().fg(Color::White)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn test_app() -> App {
        App::new(TaskStore::with_sample_tasks(), 25)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[allow(deprecated)]
    fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buf = terminal.backend().buffer();
        let mut lines = Vec::new();
        for y in 0..buf.area.height {
            let mut line = String::new();
            for x in 0..buf.area.width {
                line.push_str(buf.get(x, y).symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn tab_cycles_the_filter_through_the_store() {
        let mut app = test_app();
        assert_eq!(app.store.active_filter(), None);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.store.active_filter(), Some(Category::School));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.store.active_filter(), Some(Category::Health));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.store.active_filter(), Some(Category::Personal));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.store.active_filter(), None);
    }

    #[test]
    fn back_tab_cycles_the_filter_the_other_way() {
        let mut app = test_app();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.store.active_filter(), Some(Category::Personal));
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.store.active_filter(), Some(Category::Health));
    }

    #[test]
    fn arrow_keys_wrap_around_the_visible_list() {
        let mut app = test_app();
        assert_eq!(app.list_state.selected(), Some(0));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.list_state.selected(), Some(2));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.list_state.selected(), Some(0));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn navigation_on_an_empty_board_selects_nothing() {
        let mut app = App::new(TaskStore::new(), 25);
        assert_eq!(app.list_state.selected(), None);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.list_state.selected(), None);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.list_state.selected(), None);
        press(&mut app, KeyCode::Enter);
        assert!(app.store.is_empty());
    }

    #[test]
    fn toggle_targets_the_task_under_the_filtered_cursor() {
        let mut app = test_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.store.active_filter(), Some(Category::Health));

        press(&mut app, KeyCode::Enter);

        app.store.set_filter(None);
        let walk = app
            .store
            .visible_tasks()
            .into_iter()
            .find(|t| t.id == 2)
            .cloned()
            .unwrap();
        assert!(walk.done);
    }

    #[test]
    fn switching_to_an_empty_filter_drops_the_selection() {
        let mut app = App::new(TaskStore::new(), 25);
        app.store.add_task("Revise notes", Category::School, "20");
        app.list_state.select(Some(0));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.store.active_filter(), Some(Category::Health));
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn tab_cycles_the_form_fields() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.input_mode, InputMode::EditTitle);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::EditCategory);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::EditMinutes);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::EditTitle);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.input_mode, InputMode::EditMinutes);
    }

    #[test]
    fn arrows_cycle_the_category_pills() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.form_category, Category::School);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.form_category, Category::Health);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.form_category, Category::School);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.form_category, Category::Personal);
    }

    #[test]
    fn minutes_field_accepts_digits_only() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::EditMinutes);

        type_str(&mut app, "1x2!");
        assert_eq!(app.minutes_input.text(), "2512");
    }

    #[test]
    fn submitting_the_form_adds_a_task_and_resets_the_inputs() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Stretch for a bit");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.len(), 4);
        assert_eq!(app.input_mode, InputMode::Browse);
        assert_eq!(app.title_input.text(), "");
        assert_eq!(app.minutes_input.text(), "25");
        assert_eq!(app.list_state.selected(), Some(3));

        let added = app.store.visible_tasks()[3].clone();
        assert_eq!(added.title, "Stretch for a bit");
        assert_eq!(added.category, Category::Health);
        assert_eq!(added.focus_minutes, 25);
        assert!(!added.done);
    }

    #[test]
    fn rejected_submit_keeps_the_form_for_another_try() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.len(), 3);
        assert_eq!(app.input_mode, InputMode::EditTitle);
        assert_eq!(app.title_input.text(), "   ");
    }

    #[test]
    fn esc_leaves_the_form_without_adding() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Half typed");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.input_mode, InputMode::Browse);
        assert_eq!(app.store.len(), 3);
        // The draft stays around for the next visit.
        assert_eq!(app.title_input.text(), "Half typed");
    }

    #[test]
    fn q_quits_only_in_browse_mode() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.title_input.text(), "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn the_board_renders_tasks_chips_and_progress() {
        let mut app = test_app();
        let screen = render_to_string(&mut app, 80, 24);
        assert!(screen.contains("sprout"));
        assert!(screen.contains("All"));
        assert!(screen.contains("School"));
        assert!(screen.contains("30 minute walk"));
        assert!(screen.contains("1 / 3 tasks done"));
        assert!(screen.contains("Add a task"));
    }

    #[test]
    fn progress_card_follows_the_active_filter() {
        let mut app = test_app();
        app.store.set_filter(Some(Category::Personal));
        let screen = render_to_string(&mut app, 80, 24);
        assert!(screen.contains("1 / 1 tasks done"));
        assert!(screen.contains("All done! You earned the break."));
    }

    #[test]
    fn empty_board_renders_the_invitation_message() {
        let mut app = App::new(TaskStore::new(), 25);
        let screen = render_to_string(&mut app, 80, 24);
        assert!(screen.contains("No tasks planned yet."));
        assert!(screen.contains("No tasks in this filter. Add a new one below."));
        assert!(screen.contains("0 / 0 tasks done"));
    }
}
