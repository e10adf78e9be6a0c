//! # riasec-quiz
//!
//! A terminal client for a RIASEC interest assessment. Questions come from a
//! remote assessment service, answers are collected one statement at a time,
//! and the service's study-programme recommendations are shown at the end.
//! When the service cannot produce recommendations a fixed sample is shown
//! instead, together with a warning.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use riasec_quiz::{Quiz, QuizError, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let settings = Settings::load(None)?;
//!     let quiz = Quiz::from_settings(&settings)?;
//!
//!     // Run the assessment in the terminal
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The flow itself lives in [`App`]. It can be driven without a terminal by
//! feeding it [`Event`]s and running the [`Command`]s it returns through
//! [`runtime::execute`].

mod app;
pub mod config;
mod data;
mod models;
pub mod protocol;
pub mod runtime;
pub mod service;
pub mod terminal;
mod ui;

use std::io;
use std::sync::Arc;

use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::info;

pub use app::{progress_percent, App, Command, Event, Session, SessionId, LOAD_FAILED_MESSAGE};
pub use config::{ConfigError, Settings};
pub use data::{sample_result, Dimension, FALLBACK_MESSAGE, UNREACHABLE_MESSAGE};
pub use models::{
    display_percent, Answer, AnswerLedger, Assessment, Choice, DimensionScore,
    MajorRecommendation, Question, RecommendationResult, ResultSource, Screen, StepState,
};
pub use runtime::SharedService;
pub use service::{AssessmentService, HttpAssessmentService, ServiceError};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid settings: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to set up the service client: {0}")]
    Service(#[from] ServiceError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// An assessment session that can be run in the terminal.
pub struct Quiz {
    app: App,
    service: SharedService,
}

impl Quiz {
    pub fn new(service: SharedService) -> Self {
        Self {
            app: App::new(),
            service,
        }
    }

    /// Builds a quiz backed by the HTTP service described in `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, QuizError> {
        let service = HttpAssessmentService::from_settings(settings)?;
        info!(base_url = service.base_url(), "using assessment service");
        Ok(Self::new(Arc::new(service)))
    }

    /// Run the assessment in the terminal.
    ///
    /// This loads the questions, takes over the terminal, and returns when
    /// the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        runtime::spawn_startup(&self.service, &tx);

        let mut guard = terminal::TerminalGuard::enter()?;
        let mut input = EventStream::new();

        loop {
            guard.terminal().draw(|frame| ui::render(frame, &self.app))?;

            tokio::select! {
                maybe_event = input.next() => {
                    let Some(term_event) = maybe_event else { break };
                    let TermEvent::Key(key) = term_event? else { continue };
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match handle_input(&mut self.app, key.code) {
                        Input::Quit => break,
                        Input::Dispatch(event) => self.dispatch(event, &tx),
                        Input::Reload => {
                            if let Some(command) = self.app.reload() {
                                runtime::execute(command, &self.service, &tx);
                            }
                        }
                        Input::Handled => {}
                    }
                }
                Some(event) = rx.recv() => self.dispatch(event, &tx),
            }
        }

        info!("quiz closed");
        Ok(())
    }

    fn dispatch(&mut self, event: Event, tx: &UnboundedSender<Event>) {
        if let Some(command) = self.app.update(event) {
            runtime::execute(command, &self.service, tx);
        }
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

/// What a key press amounts to.
#[derive(Debug, PartialEq)]
enum Input {
    Handled,
    Quit,
    Reload,
    Dispatch(Event),
}

fn handle_input(app: &mut App, key: KeyCode) -> Input {
    if app.show_help() {
        if matches!(key, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter) {
            app.toggle_help();
        }
        return Input::Handled;
    }

    match app.screen() {
        Screen::Start => handle_start_input(app, key),
        Screen::Question => handle_question_input(app, key),
        Screen::Loading => handle_loading_input(key),
        Screen::Results => handle_results_input(app, key),
    }
}

fn handle_start_input(app: &mut App, key: KeyCode) -> Input {
    match key {
        KeyCode::Enter => Input::Dispatch(Event::Begin),
        KeyCode::Char('r') | KeyCode::Char('R') => Input::Reload,
        KeyCode::Char('?') => {
            app.toggle_help();
            Input::Handled
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Input::Quit,
        _ => Input::Handled,
    }
}

fn handle_question_input(app: &mut App, key: KeyCode) -> Input {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            Input::Handled
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            Input::Handled
        }
        KeyCode::Enter | KeyCode::Char(' ') => Input::Dispatch(Event::Select(app.selected_option())),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Input::Dispatch(Event::Select(index))
        }
        KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Left => Input::Dispatch(Event::Back),
        KeyCode::Esc if app.current_question().is_none() => Input::Dispatch(Event::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') => Input::Quit,
        _ => Input::Handled,
    }
}

fn handle_loading_input(key: KeyCode) -> Input {
    match key {
        KeyCode::Esc => Input::Dispatch(Event::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') => Input::Quit,
        _ => Input::Handled,
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) -> Input {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            Input::Handled
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            Input::Handled
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Input::Dispatch(Event::Restart),
        KeyCode::Char('?') => {
            app.toggle_help();
            Input::Handled
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Input::Quit,
        _ => Input::Handled,
    }
}
