//! Application state and core logic

use crate::config::FormConfig;
use crate::error::SubmissionError;
use crate::state::{
    AppState, FieldId, Focus, FormEvent, ProgressAnimation, RegistrationFormController,
    SubmissionFailure, SubmissionState, SubmitStart, SuccessInfo, NETWORK_FAILURE_MESSAGE,
};
use crate::submission::RegistrationSubmitter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

type SubmissionResult = Result<SuccessInfo, SubmissionError>;

/// Main application struct
pub struct App {
    /// UI state (focus, toasts, timers)
    pub state: AppState,
    /// Registration form controller
    pub form: RegistrationFormController,
    /// Animated progress gauge
    pub progress: ProgressAnimation,
    config: FormConfig,
    /// Results of submissions running on background tasks
    results_tx: mpsc::UnboundedSender<SubmissionResult>,
    results_rx: mpsc::UnboundedReceiver<SubmissionResult>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: FormConfig, submitter: Arc<dyn RegistrationSubmitter>) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            form: RegistrationFormController::new(submitter),
            progress: ProgressAnimation::new(),
            config,
            results_tx,
            results_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Whether something on screen is moving (the event loop polls faster)
    pub fn is_animating(&self) -> bool {
        self.progress.is_animating() || self.form.submission_state().is_submitting()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let focus = self.state.focus;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER);

        match key.code {
            // Submit shortcuts (work from anywhere)
            KeyCode::Enter if ctrl => self.submit(),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.move_focus(focus.next()),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(focus.prev()),
            KeyCode::Esc => {
                if let Some(field) = focus.field() {
                    self.state.cancel_revalidation(field);
                    self.form.clear_field(field);
                }
            }
            _ => match focus {
                Focus::Field(field) => self.handle_field_key(field, key, ctrl),
                Focus::Interest => self.handle_interest_key(key),
                Focus::Submit => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit();
                    }
                }
            },
        }
        self.apply_form_events();
    }

    fn handle_field_key(&mut self, field: FieldId, key: KeyEvent, ctrl: bool) {
        match key.code {
            KeyCode::Char(c) if !ctrl => {
                let mut text = self.form.field(field).value().to_string();
                text.push(c);
                self.change_field(field, text);
            }
            KeyCode::Backspace => {
                let mut text = self.form.field(field).value().to_string();
                if text.pop().is_some() {
                    self.change_field(field, text);
                }
            }
            KeyCode::Enter => self.move_focus(self.state.focus.next()),
            _ => {}
        }
    }

    fn handle_interest_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.move_interest_cursor(false),
            KeyCode::Right | KeyCode::Char('l') => self.state.move_interest_cursor(true),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let interest = self.state.highlighted_interest();
                self.form.on_interest_selected(interest);
            }
            _ => {}
        }
    }

    fn change_field(&mut self, field: FieldId, text: String) {
        if self.form.on_field_changed(field, text) {
            self.state
                .schedule_revalidation(field, self.config.revalidate_delay(), Instant::now());
        } else {
            self.state.cancel_revalidation(field);
        }
    }

    /// Move focus, validating the text field being left
    fn move_focus(&mut self, next: Focus) {
        if let Some(field) = self.state.focus.field() {
            self.state.cancel_revalidation(field);
            // The verdict is shown inline by the renderer
            let _ = self.form.on_field_blurred(field);
        }
        if next == Focus::Interest && self.state.interest_cursor.is_none() {
            self.state.interest_cursor = self.form.interest();
        }
        self.state.focus = next;
    }

    /// Start a submission on a background task
    fn submit(&mut self) {
        let SubmitStart::Ready(request) = self.form.begin_submit() else {
            return;
        };

        let submitter = self.form.submitter();
        let tx = self.results_tx.clone();
        tokio::spawn(async move {
            let result = submitter.submit_registration(&request).await;
            // Receiver only goes away when the app shuts down
            let _ = tx.send(result);
        });
    }

    /// Apply a finished submission to the form
    fn finish_submission(&mut self, result: SubmissionResult) {
        self.form.complete_submit(result);
        self.apply_form_events();
    }

    /// Advance timers: debounced revalidation, submission results,
    /// toast expiry and the post-success reset
    pub fn tick(&mut self, now: Instant) {
        if let Some(field) = self.state.take_due_revalidation(now) {
            let _ = self.form.on_field_blurred(field);
        }

        while let Ok(result) = self.results_rx.try_recv() {
            self.finish_submission(result);
        }

        self.state
            .expire_notification(self.config.notification_duration(), now);

        if self.state.reset_due(self.config.reset_delay(), now) {
            self.form.reset();
            self.state.focus = Focus::default();
            self.state.interest_cursor = None;
            self.state.pending_revalidation = None;
        }

        self.apply_form_events();
    }

    /// Translate controller notifications into presentation state
    fn apply_form_events(&mut self) {
        for event in self.form.take_events() {
            match event {
                FormEvent::CompletionChanged { percentage } => self.progress.retarget(percentage),
                FormEvent::FieldValidated { .. } => {}
                FormEvent::SubmissionChanged(state) => match state {
                    SubmissionState::Idle => self.state.succeeded_at = None,
                    SubmissionState::Submitting => {}
                    SubmissionState::Succeeded(info) => {
                        self.state.succeeded_at = Some(Instant::now());
                        self.state.push_success(info.message);
                    }
                    SubmissionState::Failed(SubmissionFailure::Validation(message)) => {
                        self.state.push_error(message);
                    }
                    SubmissionState::Failed(SubmissionFailure::Network(_)) => {
                        self.state.push_error(NETWORK_FAILURE_MESSAGE);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldStatus, Interest, NotificationKind};
    use crate::submission::MockRegistrationSubmitter;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app_with(mock: MockRegistrationSubmitter) -> App {
        App::new(FormConfig::default(), Arc::new(mock))
    }

    fn idle_mock() -> MockRegistrationSubmitter {
        let mut mock = MockRegistrationSubmitter::new();
        mock.expect_submit_registration().times(0);
        mock
    }

    /// Fill every input through the keyboard, leaving focus on Submit
    fn fill_form(app: &mut App) {
        type_text(app, "Jo");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "a@b.co");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "+15551234567");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "Acme");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Left)); // Sales
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Tab));
    }

    #[test]
    fn test_should_quit_initially_false() {
        let mut app = app_with(idle_mock());
        assert!(!app.should_quit());
        app.request_quit();
        assert!(app.should_quit());
    }

    #[test]
    fn test_typing_updates_field_and_progress_target() {
        let mut app = app_with(idle_mock());
        type_text(&mut app, "Jo");

        assert_eq!(app.form.field(FieldId::Name).value(), "Jo");
        assert_eq!(app.progress.target(), 20);
        assert_eq!(
            app.state.pending_revalidation.map(|p| p.field),
            Some(FieldId::Name)
        );
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut app = app_with(idle_mock());
        type_text(&mut app, "Jon");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.form.field(FieldId::Name).value(), "Jo");
    }

    #[test]
    fn test_tab_validates_field_being_left() {
        let mut app = app_with(idle_mock());
        app.handle_key(key(KeyCode::Tab));

        assert_eq!(app.state.focus, Focus::Field(FieldId::Email));
        assert_eq!(
            app.form.field(FieldId::Name).error_message(),
            Some("Full name is required")
        );
    }

    #[test]
    fn test_escape_clears_focused_field() {
        let mut app = app_with(idle_mock());
        type_text(&mut app, "Jo");
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.form.field(FieldId::Name).value(), "");
        assert_eq!(app.progress.target(), 0);
        assert!(app.state.pending_revalidation.is_none());
    }

    #[test]
    fn test_debounced_revalidation_runs_on_tick() {
        let mut app = app_with(idle_mock());
        app.handle_key(key(KeyCode::Down));
        type_text(&mut app, "not-an-email");

        app.tick(Instant::now());
        assert_eq!(app.form.field(FieldId::Email).status(), &FieldStatus::Untouched);

        app.tick(Instant::now() + Duration::from_millis(500));
        assert_eq!(
            app.form.field(FieldId::Email).error_message(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_interest_selection_by_keys() {
        let mut app = app_with(idle_mock());
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(app.state.focus, Focus::Interest);

        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.form.interest(), Some(Interest::Design));
    }

    #[test]
    fn test_invalid_submit_shows_first_error_without_calling_service() {
        let mut app = app_with(idle_mock());
        app.handle_key(ctrl('s'));

        let toast = app.state.notification.as_ref().unwrap();
        assert_eq!(toast.message, "Full name is required");
        assert_eq!(toast.kind, NotificationKind::Error);
    }

    #[tokio::test]
    async fn test_successful_submit_then_auto_reset() {
        let mut mock = MockRegistrationSubmitter::new();
        mock.expect_submit_registration()
            .times(1)
            .returning(|_| Ok(SuccessInfo::default()));
        let mut app = app_with(mock);

        fill_form(&mut app);
        assert_eq!(app.state.focus, Focus::Submit);
        app.handle_key(key(KeyCode::Enter));
        assert!(app.form.submission_state().is_submitting());

        // A second press while in flight is ignored
        app.handle_key(key(KeyCode::Enter));

        let result = app.results_rx.recv().await.unwrap();
        app.finish_submission(result);

        assert!(matches!(
            app.form.submission_state(),
            SubmissionState::Succeeded(_)
        ));
        let toast = app.state.notification.as_ref().unwrap();
        assert_eq!(toast.message, "Registration successful!");

        app.tick(Instant::now() + Duration::from_secs(6));
        assert_eq!(app.form.submission_state(), &SubmissionState::Idle);
        assert_eq!(app.form.completion_percentage(), 0);
        assert_eq!(app.state.focus, Focus::Field(FieldId::Name));
        assert!(app.state.succeeded_at.is_none());
    }

    #[tokio::test]
    async fn test_network_failure_shows_retry_message() {
        let mut mock = MockRegistrationSubmitter::new();
        mock.expect_submit_registration()
            .times(1)
            .returning(|_| Err(SubmissionError::Network("Network error".to_string())));
        let mut app = app_with(mock);

        fill_form(&mut app);
        app.handle_key(ctrl('s'));

        let result = app.results_rx.recv().await.unwrap();
        app.finish_submission(result);

        let toast = app.state.notification.as_ref().unwrap();
        assert_eq!(toast.message, "Something went wrong. Please try again.");
        assert!(app.form.submission_state().accepts_submit());
        assert_eq!(app.form.completion_percentage(), 100);
    }
}
