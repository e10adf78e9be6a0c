//! Assessment flow controller.
//!
//! [`App::update`] is the only place session state changes. User actions and
//! completions of background tasks both arrive as [`Event`]s; any follow-up
//! work the controller needs is handed back as a [`Command`].

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::data::{sample_result, FALLBACK_MESSAGE, UNREACHABLE_MESSAGE};
use crate::models::{
    Answer, AnswerLedger, Assessment, Question, RecommendationResult, Screen, StepState,
};

/// The results screen lists at most this many recommendations.
pub const MAX_LISTED_RECOMMENDATIONS: usize = 10;

pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load questions. Please check that the assessment service is running.";

/// Identifies one quiz attempt. A restart mints a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything that can change the flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Begin,
    /// Picks the option at this index of the current question.
    Select(usize),
    Back,
    Restart,
    QuestionsLoaded(Vec<Question>),
    QuestionsFailed(String),
    ConnectivityChecked(bool),
    RecommendationResolved {
        session: SessionId,
        result: RecommendationResult,
    },
    RecommendationFailed {
        session: SessionId,
        reason: String,
    },
}

/// Work the caller must start on behalf of the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the question loader and the connectivity check.
    Reload,
    /// Submit a complete ledger for the given session.
    Submit {
        session: SessionId,
        answers: Vec<Answer>,
    },
}

/// State of one quiz attempt.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub screen: Screen,
    pub current_index: usize,
    pub answers: AnswerLedger,
    pub error: Option<String>,
    pub connected: bool,
    pub assessment: Option<Assessment>,
}

impl Session {
    fn new(connected: bool) -> Self {
        Self {
            id: SessionId::new(),
            screen: Screen::Start,
            current_index: 0,
            answers: AnswerLedger::new(),
            error: None,
            connected,
            assessment: None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(false)
    }
}

pub struct App {
    questions: Vec<Question>,
    session: Session,
    selected_option: usize,
    results_scroll: usize,
    show_help: bool,
}

impl App {
    pub fn new() -> Self {
        Self::with_questions(Vec::new())
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            session: Session::default(),
            selected_option: 0,
            results_scroll: 0,
            show_help: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.session.screen
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn answers(&self) -> &[Answer] {
        self.session.answers.as_slice()
    }

    pub fn error(&self) -> Option<&str> {
        self.session.error.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.session.connected
    }

    pub fn assessment(&self) -> Option<&Assessment> {
        self.session.assessment.as_ref()
    }

    /// The question on screen, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.session.screen {
            Screen::Question => self.questions.get(self.session.current_index),
            _ => None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.session.current_index
    }

    pub fn question_number(&self) -> usize {
        self.session.current_index + 1
    }

    pub fn is_last_question(&self) -> bool {
        self.session.current_index + 1 >= self.questions.len()
    }

    /// Rounded share of the quiz reached, counting the question on screen.
    pub fn progress_percent(&self) -> u16 {
        progress_percent(self.session.current_index, self.questions.len())
    }

    pub fn step_states(&self) -> Vec<StepState> {
        let current = self.session.current_index;
        (0..self.questions.len())
            .map(|index| match index.cmp(&current) {
                std::cmp::Ordering::Less => StepState::Done,
                std::cmp::Ordering::Equal => StepState::Current,
                std::cmp::Ordering::Greater => StepState::Pending,
            })
            .collect()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn select_next_option(&mut self) {
        let count = self.current_option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.current_option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    fn current_option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn results_scroll(&self) -> usize {
        self.results_scroll
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self
            .assessment()
            .map_or(0, |a| {
                let listed = a.result.recommendations.len().min(MAX_LISTED_RECOMMENDATIONS);
                listed.saturating_sub(1)
            });
        self.results_scroll = (self.results_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.results_scroll = self.results_scroll.saturating_sub(1);
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Applies one event and returns the work it triggers.
    pub fn update(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::Begin => self.begin(),
            Event::Select(option) => return self.select(option),
            Event::Back => self.back(),
            Event::Restart => self.restart(),
            Event::QuestionsLoaded(questions) => self.questions_loaded(questions),
            Event::QuestionsFailed(reason) => self.questions_failed(reason),
            Event::ConnectivityChecked(connected) => {
                info!(connected, "connectivity checked");
                self.session.connected = connected;
            }
            Event::RecommendationResolved { session, result } => {
                if self.accepts_completion(session) {
                    info!(%session, dominant = %result.dominant_type, "showing results");
                    self.session.error = None;
                    self.finish(Assessment::remote(result));
                }
            }
            Event::RecommendationFailed { session, reason } => {
                if self.accepts_completion(session) {
                    warn!(%session, %reason, "recommendation failed, using fallback");
                    let message = if self.session.connected {
                        FALLBACK_MESSAGE
                    } else {
                        UNREACHABLE_MESSAGE
                    };
                    self.session.error = Some(message.to_string());
                    self.finish(Assessment::fallback(sample_result()));
                }
            }
        }
        None
    }

    /// Asks the caller to re-run the loader and the health check.
    pub fn reload(&mut self) -> Option<Command> {
        if self.session.screen == Screen::Start {
            self.session.error = None;
            Some(Command::Reload)
        } else {
            None
        }
    }

    fn begin(&mut self) {
        if self.session.screen != Screen::Start {
            return;
        }
        info!(questions = self.questions.len(), "assessment started");
        self.session.screen = Screen::Question;
        self.session.current_index = 0;
        self.selected_option = 0;
    }

    fn select(&mut self, option: usize) -> Option<Command> {
        let question = self.current_question()?;
        let Some(choice) = question.choice(option) else {
            debug!(option, "option out of range");
            return None;
        };
        let Some(score) = choice.score() else {
            warn!(question = question.id, value = %choice.value, "option value is not a score");
            let message = format!("Option \"{}\" has no numeric score", choice.label);
            self.session.error = Some(message);
            return None;
        };

        let answer = Answer::new(question.id, score);
        self.session.answers.record(answer);
        self.selected_option = 0;

        if self.is_last_question() {
            self.session.screen = Screen::Loading;
            info!(
                session = %self.session.id,
                answers = self.session.answers.len(),
                "submitting answers"
            );
            Some(Command::Submit {
                session: self.session.id,
                answers: self.session.answers.to_vec(),
            })
        } else {
            self.session.current_index += 1;
            None
        }
    }

    fn back(&mut self) {
        if self.session.screen != Screen::Question || self.session.current_index == 0 {
            return;
        }
        self.session.current_index -= 1;
        self.session.answers.undo();
        self.selected_option = 0;
    }

    fn restart(&mut self) {
        if self.session.screen == Screen::Loading {
            info!(session = %self.session.id, "abandoning pending recommendation");
        }
        self.session = Session::new(self.session.connected);
        self.selected_option = 0;
        self.results_scroll = 0;
    }

    fn questions_loaded(&mut self, questions: Vec<Question>) {
        let in_attempt = self.session.screen != Screen::Start;
        if in_attempt && !self.questions.is_empty() {
            debug!("ignoring question set delivered mid-attempt");
            return;
        }
        info!(count = questions.len(), "question set loaded");
        self.questions = questions;
        if self.session.error.as_deref() == Some(LOAD_FAILED_MESSAGE) {
            self.session.error = None;
        }
    }

    fn questions_failed(&mut self, reason: String) {
        let in_attempt = self.session.screen != Screen::Start;
        if in_attempt && !self.questions.is_empty() {
            debug!(%reason, "ignoring question load failure mid-attempt");
            return;
        }
        warn!(%reason, "question load failed");
        self.session.error = Some(LOAD_FAILED_MESSAGE.to_string());
    }

    fn accepts_completion(&self, session: SessionId) -> bool {
        if session != self.session.id || self.session.screen != Screen::Loading {
            debug!(%session, current = %self.session.id, "dropping stale recommendation");
            return false;
        }
        true
    }

    fn finish(&mut self, assessment: Assessment) {
        self.session.assessment = Some(assessment);
        self.session.screen = Screen::Results;
        self.results_scroll = 0;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// `round(100 * (index + 1) / total)`, or 0 for an empty quiz.
pub fn progress_percent(index: usize, total: usize) -> u16 {
    if total == 0 {
        return 0;
    }
    let percent = (100.0 * (index + 1) as f64 / total as f64).round();
    percent.min(u16::MAX as f64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Choice, ResultSource};

    fn likert(id: i64) -> Question {
        Question {
            id,
            prompt: format!("Statement {id}"),
            dimension: "R".to_string(),
            kind: None,
            options: (1..=5)
                .map(|v| Choice {
                    value: v.to_string(),
                    label: format!("Level {v}"),
                })
                .collect(),
        }
    }

    fn app_with(count: i64) -> App {
        App::with_questions((0..count).map(|id| likert(id + 100)).collect())
    }

    fn remote_result() -> RecommendationResult {
        RecommendationResult {
            success: true,
            answered_questions: 5,
            dominant_type: "S".to_string(),
            assessment_summary: Default::default(),
            riasec_scores: Default::default(),
            riasec_percentages: Default::default(),
            recommendations: Vec::new(),
        }
    }

    fn submitted(command: Option<Command>) -> (SessionId, Vec<Answer>) {
        match command {
            Some(Command::Submit { session, answers }) => (session, answers),
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn test_full_run_visits_every_screen() {
        let mut app = app_with(3);
        assert_eq!(app.screen(), Screen::Start);

        app.update(Event::Begin);
        assert_eq!(app.screen(), Screen::Question);

        for index in 0..2 {
            assert_eq!(app.current_index(), index);
            assert_eq!(app.update(Event::Select(1)), None);
            assert_eq!(app.answers().len(), index + 1);
        }

        let (session, answers) = submitted(app.update(Event::Select(4)));
        assert_eq!(app.screen(), Screen::Loading);
        assert_eq!(session, app.session().id);
        assert_eq!(
            answers,
            vec![Answer::new(100, 2), Answer::new(101, 2), Answer::new(102, 5)]
        );

        app.update(Event::RecommendationResolved {
            session,
            result: remote_result(),
        });
        assert_eq!(app.screen(), Screen::Results);
        assert_eq!(app.error(), None);
        let assessment = app.assessment().expect("assessment");
        assert_eq!(assessment.source, ResultSource::Remote);
        assert_eq!(assessment.result.dominant_type, "S");
    }

    #[test]
    fn test_five_threes_scenario() {
        let mut app = app_with(5);
        app.update(Event::Begin);

        let mut command = None;
        for _ in 0..5 {
            command = app.update(Event::Select(2));
        }

        let (_, answers) = submitted(command);
        let expected: Vec<Answer> = (100..105).map(|id| Answer::new(id, 3)).collect();
        assert_eq!(answers, expected);
        assert_eq!(app.answers(), expected.as_slice());
    }

    #[test]
    fn test_back_removes_one_answer() {
        let mut app = app_with(4);
        app.update(Event::Begin);
        app.update(Event::Select(0));
        app.update(Event::Select(3));
        assert_eq!(app.current_index(), 2);

        app.update(Event::Back);
        assert_eq!(app.current_index(), 1);
        assert_eq!(app.answers(), &[Answer::new(100, 1)]);

        app.update(Event::Select(4));
        assert_eq!(app.answers(), &[Answer::new(100, 1), Answer::new(101, 5)]);
    }

    #[test]
    fn test_back_on_first_question_is_noop() {
        let mut app = app_with(2);
        app.update(Event::Begin);
        app.update(Event::Back);

        assert_eq!(app.screen(), Screen::Question);
        assert_eq!(app.current_index(), 0);
        assert!(app.answers().is_empty());
    }

    #[test]
    fn test_progress_rounds() {
        assert_eq!(progress_percent(0, 5), 20);
        assert_eq!(progress_percent(4, 5), 100);
        assert_eq!(progress_percent(0, 3), 33);
        assert_eq!(progress_percent(1, 3), 67);
        assert_eq!(progress_percent(0, 0), 0);

        let mut app = app_with(5);
        app.update(Event::Begin);
        app.update(Event::Select(0));
        assert_eq!(app.progress_percent(), 40);
    }

    #[test]
    fn test_step_states_track_position() {
        let mut app = app_with(3);
        app.update(Event::Begin);
        app.update(Event::Select(0));

        assert_eq!(
            app.step_states(),
            vec![StepState::Done, StepState::Current, StepState::Pending]
        );
    }

    #[test]
    fn test_failure_falls_back_with_message() {
        let mut app = app_with(1);
        app.update(Event::ConnectivityChecked(true));
        app.update(Event::Begin);
        let (session, _) = submitted(app.update(Event::Select(0)));

        app.update(Event::RecommendationFailed {
            session,
            reason: "status 500".to_string(),
        });

        assert_eq!(app.screen(), Screen::Results);
        assert_eq!(app.error(), Some(FALLBACK_MESSAGE));
        let assessment = app.assessment().expect("fallback assessment");
        assert!(assessment.is_fallback());
        assert_eq!(assessment.result, sample_result());
    }

    #[test]
    fn test_failure_message_depends_on_connectivity() {
        let mut app = app_with(1);
        app.update(Event::Begin);
        let (session, _) = submitted(app.update(Event::Select(0)));

        app.update(Event::RecommendationFailed {
            session,
            reason: "connection refused".to_string(),
        });
        assert_eq!(app.error(), Some(UNREACHABLE_MESSAGE));
    }

    #[test]
    fn test_restart_resets_and_ignores_stale_completion() {
        let mut app = app_with(2);
        app.update(Event::ConnectivityChecked(true));
        app.update(Event::Begin);
        app.update(Event::Select(0));
        let (stale, _) = submitted(app.update(Event::Select(0)));

        app.update(Event::Restart);
        assert_eq!(app.screen(), Screen::Start);
        assert_eq!(app.current_index(), 0);
        assert!(app.answers().is_empty());
        assert!(app.is_connected());
        assert_ne!(app.session().id, stale);

        app.update(Event::RecommendationResolved {
            session: stale,
            result: remote_result(),
        });
        app.update(Event::RecommendationFailed {
            session: stale,
            reason: "late".to_string(),
        });
        assert_eq!(app.screen(), Screen::Start);
        assert!(app.assessment().is_none());
        assert_eq!(app.error(), None);

        // A fresh attempt still completes normally.
        app.update(Event::Begin);
        app.update(Event::Select(1));
        let (session, _) = submitted(app.update(Event::Select(1)));
        app.update(Event::RecommendationResolved {
            session,
            result: remote_result(),
        });
        assert_eq!(app.screen(), Screen::Results);
    }

    #[test]
    fn test_restart_from_results_clears_everything() {
        let mut app = app_with(1);
        app.update(Event::Begin);
        let (session, _) = submitted(app.update(Event::Select(0)));
        app.update(Event::RecommendationFailed {
            session,
            reason: "down".to_string(),
        });

        app.update(Event::Restart);
        assert_eq!(app.screen(), Screen::Start);
        assert!(app.answers().is_empty());
        assert!(app.assessment().is_none());
        assert_eq!(app.error(), None);
        assert_eq!(app.total_questions(), 1);
    }

    #[test]
    fn test_loading_ignores_answer_input() {
        let mut app = app_with(1);
        app.update(Event::Begin);
        submitted(app.update(Event::Select(0)));

        assert_eq!(app.update(Event::Select(0)), None);
        app.update(Event::Back);
        assert_eq!(app.screen(), Screen::Loading);
        assert_eq!(app.answers().len(), 1);
    }

    #[test]
    fn test_load_failure_then_begin_shows_nothing() {
        let mut app = App::new();
        app.update(Event::QuestionsFailed("connection refused".to_string()));
        assert_eq!(app.error(), Some(LOAD_FAILED_MESSAGE));
        assert_eq!(app.total_questions(), 0);

        app.update(Event::Begin);
        assert_eq!(app.screen(), Screen::Question);
        assert!(app.current_question().is_none());
        assert_eq!(app.progress_percent(), 0);
        assert_eq!(app.update(Event::Select(0)), None);
        app.update(Event::Back);
        assert_eq!(app.screen(), Screen::Question);
    }

    #[test]
    fn test_late_questions_fill_empty_question_screen() {
        let mut app = App::new();
        app.update(Event::Begin);
        app.update(Event::QuestionsLoaded(vec![likert(1)]));

        assert_eq!(app.current_question().map(|q| q.id), Some(1));
    }

    #[test]
    fn test_questions_are_fixed_during_attempt() {
        let mut app = app_with(2);
        app.update(Event::Begin);
        app.update(Event::QuestionsLoaded(vec![likert(9)]));

        assert_eq!(app.total_questions(), 2);
        assert_eq!(app.current_question().map(|q| q.id), Some(100));
    }

    #[test]
    fn test_successful_load_clears_load_error() {
        let mut app = App::new();
        app.update(Event::QuestionsFailed("timeout".to_string()));
        app.update(Event::QuestionsLoaded(vec![likert(1), likert(1)]));

        assert_eq!(app.error(), None);
        assert_eq!(app.total_questions(), 2);
    }

    #[test]
    fn test_connectivity_does_not_gate_flow() {
        let mut app = app_with(1);
        app.update(Event::ConnectivityChecked(false));
        app.update(Event::Begin);
        assert_eq!(app.screen(), Screen::Question);
        assert!(matches!(
            app.update(Event::Select(0)),
            Some(Command::Submit { .. })
        ));
    }

    #[test]
    fn test_non_numeric_option_is_rejected() {
        let mut question = likert(1);
        question.options[0].value = "always".to_string();
        let mut app = App::with_questions(vec![question]);
        app.update(Event::Begin);

        assert_eq!(app.update(Event::Select(0)), None);
        assert!(app.answers().is_empty());
        assert!(app.error().is_some());
        assert_eq!(app.update(Event::Select(9)), None);
        assert_eq!(app.screen(), Screen::Question);
    }

    #[test]
    fn test_reload_only_from_start() {
        let mut app = App::new();
        app.update(Event::QuestionsFailed("down".to_string()));
        assert_eq!(app.reload(), Some(Command::Reload));
        assert_eq!(app.error(), None);

        app.update(Event::Begin);
        assert_eq!(app.reload(), None);
    }

    #[test]
    fn test_results_scroll_stops_at_last_listed() {
        let mut app = app_with(1);
        app.update(Event::Begin);
        let (session, _) = submitted(app.update(Event::Select(0)));
        app.update(Event::RecommendationFailed {
            session,
            reason: "down".to_string(),
        });

        for _ in 0..5 {
            app.scroll_results_down();
        }
        assert_eq!(app.results_scroll(), 1);
        app.scroll_results_up();
        app.scroll_results_up();
        assert_eq!(app.results_scroll(), 0);
    }

    #[test]
    fn test_remote_result_clears_earlier_warning() {
        let mut odd = likert(1);
        odd.options[0].value = "often".to_string();
        let mut app = App::with_questions(vec![odd, likert(2)]);
        app.update(Event::Begin);

        app.update(Event::Select(0));
        assert!(app.error().is_some());

        app.update(Event::Select(3));
        let (session, answers) = submitted(app.update(Event::Select(3)));
        assert_eq!(answers, vec![Answer::new(1, 4), Answer::new(2, 4)]);

        app.update(Event::RecommendationResolved {
            session,
            result: remote_result(),
        });
        assert_eq!(app.screen(), Screen::Results);
        assert_eq!(app.assessment().map(|a| a.source), Some(ResultSource::Remote));
        assert_eq!(app.error(), None);
    }

    #[test]
    fn test_reload_failure_during_attempt_is_ignored() {
        let mut app = app_with(1);
        assert_eq!(app.reload(), Some(Command::Reload));
        app.update(Event::Begin);
        app.update(Event::QuestionsFailed("timeout".to_string()));

        assert_eq!(app.error(), None);
        assert_eq!(app.total_questions(), 1);

        let (session, _) = submitted(app.update(Event::Select(0)));
        app.update(Event::RecommendationResolved {
            session,
            result: remote_result(),
        });
        assert_eq!(app.error(), None);
    }

    #[test]
    fn test_load_failure_with_no_questions_still_reported_mid_attempt() {
        let mut app = App::new();
        app.update(Event::Begin);
        app.update(Event::QuestionsFailed("refused".to_string()));
        assert_eq!(app.error(), Some(LOAD_FAILED_MESSAGE));
    }

    #[test]
    fn test_option_cursor_wraps() {
        let mut app = app_with(1);
        app.update(Event::Begin);
        app.select_previous_option();
        assert_eq!(app.selected_option(), 4);
        app.select_next_option();
        assert_eq!(app.selected_option(), 0);
    }
}
