//! TUI application state and logic

use super::rendering::{self, AppLayout};
use crate::core::{CandidateWord, FilteredResult, SearchConstraints};
use crate::error::SearchError;
use crate::search::{LookupService, SearchSession, SearchState};
use anyhow::Result;
use crossterm::{
    clipboard::CopyToClipboard,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// How long the clipboard confirmation stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Event poll interval; also how often a finished fetch is picked up
const TICK: Duration = Duration::from_millis(50);

/// Longest value accepted in the length field
const LENGTH_FIELD_MAX: usize = 2;

/// Keyboard focus target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Include,
    Exclude,
    Length,
    Pattern,
    Results,
}

impl Field {
    pub const INPUTS: [Self; 4] = [Self::Include, Self::Exclude, Self::Length, Self::Pattern];

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Include => Self::Exclude,
            Self::Exclude => Self::Length,
            Self::Length => Self::Pattern,
            Self::Pattern => Self::Results,
            Self::Results => Self::Include,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Include => Self::Results,
            Self::Exclude => Self::Include,
            Self::Length => Self::Exclude,
            Self::Pattern => Self::Length,
            Self::Results => Self::Pattern,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Include => " Letters to include ",
            Self::Exclude => " Letters to exclude ",
            Self::Length => " Length (1-15) ",
            Self::Pattern => " Pattern (? = any letter) ",
            Self::Results => " Results ",
        }
    }

    /// Whether a typed character is legal in this field
    #[must_use]
    pub const fn accepts(self, c: char) -> bool {
        match self {
            Self::Include | Self::Exclude => c.is_ascii_alphabetic(),
            Self::Length => c.is_ascii_digit(),
            Self::Pattern => c.is_ascii_alphabetic() || c == crate::core::WILDCARD,
            Self::Results => false,
        }
    }
}

/// Raw text of the four form inputs
#[derive(Debug, Clone, Default)]
pub struct FormInputs {
    pub include: String,
    pub exclude: String,
    pub length: String,
    pub pattern: String,
}

impl FormInputs {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Include => &self.include,
            Field::Exclude => &self.exclude,
            Field::Length => &self.length,
            Field::Pattern => &self.pattern,
            Field::Results => "",
        }
    }

    fn get_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Include => Some(&mut self.include),
            Field::Exclude => Some(&mut self.exclude),
            Field::Length => Some(&mut self.length),
            Field::Pattern => Some(&mut self.pattern),
            Field::Results => None,
        }
    }

    /// Parse into search constraints
    ///
    /// # Errors
    /// Returns the first malformed field.
    pub fn constraints(&self) -> Result<SearchConstraints, crate::core::ConstraintError> {
        SearchConstraints::from_fields(&self.include, &self.exclude, &self.length, &self.pattern)
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Transient notice, e.g. clipboard confirmation
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub expires_at: Instant,
}

type FetchResponse = Result<Vec<CandidateWord>, SearchError>;

/// Application state
pub struct App {
    lookup: Arc<dyn LookupService>,
    pub session: SearchSession,
    pub inputs: FormInputs,
    pub focus: Field,
    pub selected: usize,
    pub messages: Vec<Message>,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    pending: Option<Receiver<FetchResponse>>,
}

impl App {
    #[must_use]
    pub fn new(lookup: Arc<dyn LookupService>) -> Self {
        Self {
            lookup,
            session: SearchSession::new(),
            inputs: FormInputs::default(),
            focus: Field::Include,
            selected: 0,
            messages: vec![
                Message {
                    text: "Fill in any of the fields and press Enter to search.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Use ? in the pattern for unknown letters (e.g. ??RA?).".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            toast: None,
            should_quit: false,
            pending: None,
        }
    }

    /// Results of the last successful search
    #[must_use]
    pub const fn results(&self) -> Option<&FilteredResult> {
        self.session.results()
    }

    #[must_use]
    pub fn result_count(&self) -> usize {
        self.results().map_or(0, FilteredResult::len)
    }

    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.session.is_fetching()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused input, if legal there
    pub fn input_char(&mut self, c: char) {
        let field = self.focus;
        if !field.accepts(c) {
            return;
        }
        if let Some(buffer) = self.inputs.get_mut(field) {
            if field == Field::Length && buffer.len() >= LENGTH_FIELD_MAX {
                return;
            }
            buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buffer) = self.inputs.get_mut(self.focus) {
            buffer.pop();
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(buffer) = self.inputs.get_mut(self.focus) {
            buffer.clear();
        }
    }

    /// Validate the form and start a background fetch
    ///
    /// Disabled while a fetch is outstanding.
    pub fn submit(&mut self) {
        if self.is_fetching() {
            self.add_message("Search in progress, please wait.", MessageStyle::Info);
            return;
        }

        let constraints = match self.inputs.constraints() {
            Ok(constraints) => constraints,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self.session.submit(constraints) {
            Ok(request) => {
                let (tx, rx) = mpsc::channel();
                let lookup = Arc::clone(&self.lookup);
                thread::spawn(move || {
                    // The receiver is gone if the app quit mid-fetch
                    let _ = tx.send(lookup.fetch(&request));
                });
                self.pending = Some(rx);
                self.selected = 0;
                self.add_message("Searching...", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Pick up a finished fetch, waiting at most `wait`
    ///
    /// Returns `true` if a response was applied.
    pub fn poll_fetch(&mut self, wait: Duration) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };

        let response = match rx.recv_timeout(wait) {
            Ok(response) => response,
            Err(RecvTimeoutError::Timeout) => return false,
            Err(RecvTimeoutError::Disconnected) => {
                error!("lookup worker exited without a response");
                Err(SearchError::fetch_failed("lookup worker exited"))
            }
        };
        self.pending = None;

        let state = self.session.complete(response).clone();
        match &state {
            SearchState::Success(result) if result.is_empty() => {
                let notice = state.notice().unwrap_or_default();
                self.add_message(&notice, MessageStyle::Info);
            }
            SearchState::Success(result) => {
                let text = format!(
                    "Found {} {}. Enter or click a word to copy it.",
                    result.len(),
                    if result.len() == 1 { "word" } else { "words" }
                );
                self.add_message(&text, MessageStyle::Success);
            }
            SearchState::Failed(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            _ => {}
        }
        self.selected = 0;
        true
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.result_count() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Copy the result at `index` to the clipboard and show a toast
    ///
    /// The copy is an OSC 52 escape written to `out`, so it works over SSH in
    /// terminals that support it.
    ///
    /// # Errors
    /// Returns an error if writing the escape sequence fails.
    pub fn copy_result<W: Write>(&mut self, index: usize, out: &mut W) -> io::Result<()> {
        let Some(word) = self.results().and_then(|r| r.get(index)).map(str::to_string) else {
            return Ok(());
        };

        self.selected = index;
        execute!(out, CopyToClipboard::to_clipboard_from(word.clone()))?;
        debug!(%word, "copied to clipboard");

        self.toast = Some(Toast {
            text: format!("Copied {word} to clipboard"),
            expires_at: Instant::now() + TOAST_DURATION,
        });
        Ok(())
    }

    /// Drop the toast once it has expired
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn handle_key<W: Write>(&mut self, key: KeyEvent, out: &mut W) -> io::Result<()> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_field();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Down if self.focus == Field::Results => self.select_next(),
            KeyCode::Up if self.focus == Field::Results => self.select_prev(),
            KeyCode::Down => self.focus_next(),
            KeyCode::Up => self.focus_prev(),
            KeyCode::Enter if self.focus == Field::Results => {
                self.copy_result(self.selected, out)?;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) => self.input_char(c),
            _ => {}
        }
        Ok(())
    }

    fn handle_mouse<W: Write>(
        &mut self,
        mouse: MouseEvent,
        layout: &AppLayout,
        out: &mut W,
    ) -> io::Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }

        let hit = rendering::result_index_at(
            layout,
            self.selected,
            self.result_count(),
            mouse.column,
            mouse.row,
        );
        if let Some(index) = hit {
            self.focus = Field::Results;
            self.copy_result(index, out)?;
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        app.expire_toast(Instant::now());
        app.poll_fetch(Duration::ZERO);

        terminal.draw(|f| rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            let size = terminal.size()?;
            let layout = rendering::layout(Rect::new(0, 0, size.width, size.height));

            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, terminal.backend_mut())?;
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse, &layout, terminal.backend_mut())?;
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
