use crate::application::{App, AppMode, ERROR_MARKER};
use crate::domain::HISTORY_CAPACITY;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_display(f, app, chunks[1]);
    render_keypad_legend(f, chunks[2]);
    render_status_bar(f, app, chunks[3]);

    match app.mode {
        AppMode::History => render_history_panel(f, app),
        AppMode::Help => render_help_popup(f, app.help_scroll),
        AppMode::Normal => {}
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("tcalc - Terminal Calculator").style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_display(f: &mut Frame, app: &App, area: Rect) {
    let display_style = if app.display == ERROR_MARKER {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if app.should_reset {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let expression_line = if app.expression_line.is_empty() {
        " ".to_string()
    } else {
        app.expression_line.clone()
    };

    let lines = vec![
        ratatui::text::Line::styled(expression_line, Style::default().fg(Color::DarkGray)),
        ratatui::text::Line::raw(""),
        ratatui::text::Line::styled(app.display.clone(), display_style),
    ];

    let display = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL).title("Display"));
    f.render_widget(display, area);
}

fn render_keypad_legend(f: &mut Frame, area: Rect) {
    let legend = "\
 0-9 .  digits          + -      add, subtract
 *  /   ×  ÷            ^  %     power, percent
 ( )    grouping        p  e     π, e
 s c t  sin cos tan     l  n  r  log ln √

 Enter/=  evaluate      Backspace  delete      Esc  clear
 h  history             Ctrl+Y  copy           Ctrl+A  select
 F1/?  help             q  quit";

    let keypad = Paragraph::new(legend)
        .block(Block::default().borders(Borders::ALL).title("Keys"))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(keypad, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.mode {
        AppMode::Normal => app
            .status_message
            .clone()
            .unwrap_or_else(|| "Type an expression and press Enter | h: history | F1/?: help | q: quit".to_string()),
        AppMode::History => {
            "↑↓/jk: select | Enter: use result | d/Del: clear history | Esc/h: close".to_string()
        }
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let style = match app.mode {
        AppMode::Normal if app.display == ERROR_MARKER => Style::default().fg(Color::Red),
        AppMode::Normal => Style::default(),
        AppMode::History => Style::default().fg(Color::Yellow),
        AppMode::Help => Style::default().fg(Color::Cyan),
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn render_history_panel(f: &mut Frame, app: &App) {
    let area = f.area();
    let width = (area.width / 2).max(30).min(area.width);
    let panel_area = Rect {
        x: area.width - width,
        y: 0,
        width,
        height: area.height,
    };

    f.render_widget(Clear, panel_area);

    let title = format!("History ({}/{})", app.history.len(), HISTORY_CAPACITY);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(Color::Yellow));

    if app.history.is_empty() {
        let empty = Paragraph::new("No history")
            .alignment(Alignment::Center)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, panel_area);
        return;
    }

    let items: Vec<ListItem> = app
        .history
        .iter()
        .map(|entry| ListItem::new(format!("{} = {}", entry.expression, entry.result)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.history_selected));
    f.render_stateful_widget(list, panel_area, &mut state);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("tcalc Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> &'static str {
    r#"TCALC EXPRESSION REFERENCE

=== NUMBERS ===
42, 3.14, .5     Decimal numbers
π (key p)        3.14159...
e                2.71828...

=== OPERATORS (lowest to highest precedence) ===
+  -             Addition, subtraction          7-10 → -3
×  ÷             Multiplication, division       9÷4 → 2.25
-x               Negation                       -2^2 → -4
^                Power (right-associative)      2^3^2 → 512
%                Percent of the value before it 50% → 0.5
                                                200×50% → 100
( )              Grouping                       (2+3)×4 → 20

=== FUNCTIONS ===
sin( cos( tan(   Trigonometry in radians        sin(π÷2) → 1
log(             Base-10 logarithm              log(1000) → 3
ln(              Natural logarithm              ln(e) → 1
√(               Square root                    √(16) → 4

=== RESULTS ===
Results are rounded to 10 decimal places.
Whole numbers are shown without a decimal point.
Errors show "Error" with the cause in the status bar:
  division by zero, logarithm of a non-positive number,
  square root of a negative number, malformed input,
  or names outside this reference.

=== HISTORY ===
The last 20 successful calculations are kept, newest first,
until the program exits.
h                Open the history panel
↑↓ or j/k        Select an entry
Enter            Put the selected result back on the display
d or Delete      Clear all history
Esc or h         Close the panel

=== KEYS ===
Enter or =       Evaluate
Backspace        Delete last character (clears after a result)
Esc              Clear the display
Ctrl+A           Select the display; the next key replaces it
Ctrl+Y           Copy the display to the clipboard
F1 or ?          Show this help
q or Ctrl+C      Quit"#
}
