//! Terminal driver: raw-mode setup, key classification, rendering.

use std::io::{self, Stdout};

use askfile::{
    Answer, EditOp, Form, FormError, FormInput, NavKey, Outcome, PromptSpec, TextField,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use thiserror::Error;

/// Error type for the form runner.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// User cancelled the form (esc or ctrl+c).
    #[error("form cancelled by user")]
    Cancelled,

    /// The prompt sequence could not be turned into a form.
    #[error(transparent)]
    Form(#[from] FormError),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Color theme for the form.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Marker and text of the focused field, and the submit highlight.
    pub focused: Color,
    /// Markers of blurred fields and the idle submit control.
    pub blurred: Color,
    /// Placeholder text of empty fields.
    pub placeholder: Color,
    /// Entered text of blurred fields.
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focused: Color::Magenta,
            blurred: Color::DarkGray,
            placeholder: Color::DarkGray,
            text: Color::White,
        }
    }
}

/// Terminal driver that renders a [`Form`] and feeds it key events.
///
/// Events are read one at a time and handled to completion; all blocking
/// happens in [`crossterm::event::read`], never in the form itself.
#[derive(Debug, Clone)]
pub struct FormRunner {
    /// Title shown at the top of the form.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for FormRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl FormRunner {
    /// Create a new runner with default settings.
    pub fn new() -> Self {
        Self {
            title: "Prompts".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the form.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the interactive session to completion.
    ///
    /// Returns the answers in question order on submit, or
    /// [`RunnerError::Cancelled`] if the user aborted.
    pub fn run(&self, prompts: Vec<PromptSpec>) -> Result<Vec<Answer>, RunnerError> {
        let mut form = Form::new(prompts)?;

        let mut terminal = self.setup_terminal()?;
        let outcome = self.event_loop(&mut terminal, &mut form);
        self.restore_terminal(&mut terminal)?;

        match outcome? {
            Outcome::Submit => Ok(form.into_answers()),
            _ => Err(RunnerError::Cancelled),
        }
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        form: &mut Form,
    ) -> Result<Outcome, RunnerError> {
        loop {
            terminal.draw(|frame| draw_form(frame, form, &self.theme, &self.title))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let Some(input) = classify(key) else {
                    continue;
                };
                match form.handle_input(input) {
                    Outcome::Continue => {}
                    done => return Ok(done),
                }
            }
        }
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RunnerError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RunnerError> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Map one crossterm key event onto the form's input union.
///
/// Returns `None` for keys the form has no meaning for.
pub fn classify(key: KeyEvent) -> Option<FormInput> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(FormInput::Cancel);
    }

    let input = match key.code {
        KeyCode::Esc => FormInput::Cancel,
        KeyCode::BackTab => FormInput::Nav(NavKey::Previous),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            FormInput::Nav(NavKey::Previous)
        }
        KeyCode::Tab => FormInput::Nav(NavKey::Next),
        KeyCode::Up => FormInput::Nav(NavKey::Previous),
        KeyCode::Down => FormInput::Nav(NavKey::Next),
        KeyCode::Enter => FormInput::Nav(NavKey::Confirm),
        KeyCode::Char(c) => FormInput::Edit(EditOp::Insert(c)),
        KeyCode::Backspace => FormInput::Edit(EditOp::Backspace),
        KeyCode::Delete => FormInput::Edit(EditOp::Delete),
        KeyCode::Left => FormInput::Edit(EditOp::CursorLeft),
        KeyCode::Right => FormInput::Edit(EditOp::CursorRight),
        KeyCode::Home => FormInput::Edit(EditOp::CursorStart),
        KeyCode::End => FormInput::Edit(EditOp::CursorEnd),
        _ => return None,
    };
    Some(input)
}

const FIELD_MARKER: &str = "> ";

fn draw_form(frame: &mut Frame, form: &Form, theme: &Theme, title: &str) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                         // Title
            Constraint::Length(form.field_count() as u16), // One line per field
            Constraint::Length(2),                         // Submit control
            Constraint::Length(1),                         // Help bar
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new(title.to_string()).style(
        Style::default()
            .fg(theme.focused)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(heading, chunks[0]);

    let lines: Vec<Line> = form
        .fields()
        .iter()
        .map(|field| field_line(field, theme))
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    // Terminal cursor sits in the focused field, after its entered text.
    if !form.submit_focused() {
        let field = &form.fields()[form.focus()];
        let x = chunks[1].x + (FIELD_MARKER.len() + field.cursor()) as u16;
        let y = chunks[1].y + form.focus() as u16;
        if x < chunks[1].x + chunks[1].width {
            frame.set_cursor_position((x, y));
        }
    }

    let submit_style = if form.submit_focused() {
        Style::default()
            .fg(theme.text)
            .bg(theme.focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.blurred)
    };
    let submit_text = if form.submit_focused() {
        "[ Submit ]"
    } else {
        "  Submit  "
    };
    let submit = Paragraph::new(vec![Line::raw(""), Line::styled(submit_text, submit_style)]);
    frame.render_widget(submit, chunks[2]);

    let help_text = "tab: next  shift+tab: previous  enter: submit  esc: cancel";
    let help = Paragraph::new(help_text).style(Style::default().fg(theme.blurred));
    frame.render_widget(help, chunks[3]);
}

fn field_line<'a>(field: &'a TextField, theme: &Theme) -> Line<'a> {
    let marker_style = if field.is_focused() {
        Style::default().fg(theme.focused)
    } else {
        Style::default().fg(theme.blurred)
    };

    let content = if field.value().is_empty() {
        Span::styled(field.placeholder(), Style::default().fg(theme.placeholder))
    } else {
        let value_style = if field.is_focused() {
            Style::default().fg(theme.focused)
        } else {
            Style::default().fg(theme.text)
        };
        Span::styled(field.value(), value_style)
    };

    Line::from(vec![Span::styled(FIELD_MARKER, marker_style), content])
}
