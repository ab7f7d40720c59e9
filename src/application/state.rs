//! Application state management for the terminal calculator.
//!
//! This module contains the keypad display state and mode management for the
//! terminal user interface. The behaviour mirrors a pocket calculator: the
//! display starts at `0`, the first key after a result starts a new
//! expression, and past results can be recalled from the history panel.

use crate::application::{CalculationResponse, CalculatorService};
use crate::domain::LedgerEntry;

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Keypad mode - keys edit the expression
    Normal,
    /// History panel is open
    History,
    /// Help screen is displayed
    Help,
}

/// Main application state containing the display and UI state.
///
/// # Examples
///
/// ```
/// use tcalc::application::App;
///
/// let mut app = App::default();
/// app.append("2");
/// app.append("×");
/// app.append("21");
/// app.evaluate();
/// assert_eq!(app.display, "42");
/// assert_eq!(app.expression_line, "2×21 =");
/// ```
#[derive(Debug)]
pub struct App {
    /// Service used for calculations and history
    pub service: CalculatorService,
    /// Main display: the expression being typed, or the last result
    pub display: String,
    /// Secondary display showing the last evaluated expression
    pub expression_line: String,
    /// Whether the next keypress replaces the display instead of extending it
    pub should_reset: bool,
    /// Current application mode
    pub mode: AppMode,
    /// History snapshot shown in the history panel
    pub history: Vec<LedgerEntry>,
    /// Selected row in the history panel
    pub history_selected: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(CalculatorService::default())
    }
}

impl App {
    pub fn new(service: CalculatorService) -> Self {
        Self {
            service,
            display: "0".to_string(),
            expression_line: String::new(),
            should_reset: false,
            mode: AppMode::Normal,
            history: Vec::new(),
            history_selected: 0,
            help_scroll: 0,
            status_message: None,
        }
    }

    /// Resets the display to `0` (the AC key).
    pub fn clear_all(&mut self) {
        self.display = "0".to_string();
        self.expression_line.clear();
        self.should_reset = false;
        self.status_message = None;
    }

    /// Removes the last character (the DEL key).
    ///
    /// Right after a result or a select-all, the whole display is cleared.
    pub fn delete_last(&mut self) {
        if self.should_reset {
            self.clear_all();
            return;
        }

        if self.display.chars().count() <= 1 {
            self.display = "0".to_string();
        } else {
            self.display.pop();
        }
    }

    /// Appends keypad text such as a digit, operator glyph or `sin(`.
    pub fn append(&mut self, value: &str) {
        if self.display == "0" || self.should_reset {
            self.display.clear();
            self.should_reset = false;
        }
        self.display.push_str(value);
        self.status_message = None;
    }

    /// Evaluates the display through the calculator service.
    ///
    /// The expression moves to the secondary line and the display shows the
    /// result, or the error marker with the cause in the status bar.
    pub fn evaluate(&mut self) -> CalculationResponse {
        let expression = self.display.clone();
        let response = self.service.calculate(&expression);

        self.expression_line = format!("{} =", expression);
        self.display = response.result.clone();
        self.should_reset = true;
        self.status_message = response.error.clone();
        if let Some(history) = &response.history {
            self.history = history.clone();
        }

        response
    }

    /// Marks the whole display as selected so the next key overwrites it.
    pub fn select_all(&mut self) {
        self.should_reset = true;
        self.status_message = Some("Display selected".to_string());
    }

    pub fn open_history(&mut self) {
        self.history = self.service.history().history;
        self.history_selected = 0;
        self.mode = AppMode::History;
    }

    pub fn close_history(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn next_history_entry(&mut self) {
        if self.history_selected + 1 < self.history.len() {
            self.history_selected += 1;
        }
    }

    pub fn previous_history_entry(&mut self) {
        self.history_selected = self.history_selected.saturating_sub(1);
    }

    /// Loads the selected history result into the display for further editing.
    pub fn load_history_entry(&mut self) {
        if let Some(entry) = self.history.get(self.history_selected) {
            self.display = entry.result.clone();
            self.should_reset = false;
            self.mode = AppMode::Normal;
        }
    }

    pub fn clear_history(&mut self) {
        self.history = self.service.clear_history().history;
        self.history_selected = 0;
        self.status_message = Some("History cleared".to_string());
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Reports the outcome of copying the display to the clipboard.
    pub fn set_copy_result(&mut self, result: Result<(), String>) {
        self.status_message = Some(match result {
            Ok(()) => format!("Copied {}", self.display),
            Err(e) => format!("Copy failed: {}", e),
        });
    }
}
