//! Application state definitions
//!
//! UI-side state around the form controller: which control has focus,
//! pending debounced revalidation, toast notifications and the success
//! auto-reset timer. None of this affects the registration outcome.

use super::forms::{FieldId, Interest};
use std::time::{Duration, Instant};

/// Focusable control, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    Interest,
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldId::Name)
    }
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Field(FieldId::Name),
        Focus::Field(FieldId::Email),
        Focus::Field(FieldId::Phone),
        Focus::Field(FieldId::Organization),
        Focus::Interest,
        Focus::Submit,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Next control, wrapping around
    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous control, wrapping around
    pub fn prev(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// The text field under focus, if any
    pub fn field(&self) -> Option<FieldId> {
        match self {
            Focus::Field(id) => Some(*id),
            _ => None,
        }
    }
}

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

/// Toast shown above the form until it expires
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= ttl
    }
}

/// Revalidation scheduled after typing in a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRevalidation {
    pub field: FieldId,
    pub due: Instant,
}

/// UI state wrapped around the form controller
#[derive(Debug, Default)]
pub struct AppState {
    /// Control receiving key input
    pub focus: Focus,
    /// Highlighted interest option (selected with Space/Enter)
    pub interest_cursor: Option<Interest>,
    /// Currently visible toast
    pub notification: Option<Notification>,
    /// Latest pending debounced revalidation; a newer edit replaces it
    pub pending_revalidation: Option<PendingRevalidation>,
    /// When the last registration succeeded, for the auto-reset
    pub succeeded_at: Option<Instant>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interest option under the cursor, defaulting to the first one
    pub fn highlighted_interest(&self) -> Interest {
        self.interest_cursor.unwrap_or(Interest::ALL[0])
    }

    pub fn move_interest_cursor(&mut self, forward: bool) {
        let current = self.highlighted_interest();
        self.interest_cursor = Some(if forward {
            current.next()
        } else {
            current.prev()
        });
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::new(message, NotificationKind::Error));
    }

    pub fn push_success(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::new(message, NotificationKind::Success));
    }

    /// Drop the toast once it has been visible for `ttl`
    pub fn expire_notification(&mut self, ttl: Duration, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(ttl, now))
        {
            self.notification = None;
        }
    }

    /// Schedule `field` for revalidation after `delay`, replacing any pending one
    pub fn schedule_revalidation(&mut self, field: FieldId, delay: Duration, now: Instant) {
        self.pending_revalidation = Some(PendingRevalidation {
            field,
            due: now + delay,
        });
    }

    /// Cancel the pending revalidation if it targets `field`
    pub fn cancel_revalidation(&mut self, field: FieldId) {
        if self
            .pending_revalidation
            .is_some_and(|pending| pending.field == field)
        {
            self.pending_revalidation = None;
        }
    }

    /// Take the pending revalidation if it is due
    pub fn take_due_revalidation(&mut self, now: Instant) -> Option<FieldId> {
        match self.pending_revalidation {
            Some(pending) if now >= pending.due => {
                self.pending_revalidation = None;
                Some(pending.field)
            }
            _ => None,
        }
    }

    /// Whether the success message has been shown for `delay`
    pub fn reset_due(&self, delay: Duration, now: Instant) -> bool {
        self.succeeded_at
            .is_some_and(|at| now.saturating_duration_since(at) >= delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod focus {
        use super::*;

        #[test]
        fn test_default_is_name_field() {
            assert_eq!(Focus::default(), Focus::Field(FieldId::Name));
        }

        #[test]
        fn test_next_walks_tab_order_and_wraps() {
            let mut focus = Focus::default();
            let mut seen = vec![focus];
            for _ in 0..5 {
                focus = focus.next();
                seen.push(focus);
            }
            assert_eq!(seen[4], Focus::Interest);
            assert_eq!(seen[5], Focus::Submit);
            assert_eq!(focus.next(), Focus::Field(FieldId::Name));
        }

        #[test]
        fn test_prev_wraps_to_submit() {
            assert_eq!(Focus::default().prev(), Focus::Submit);
            assert_eq!(Focus::Interest.prev(), Focus::Field(FieldId::Organization));
        }

        #[test]
        fn test_field_accessor() {
            assert_eq!(Focus::Field(FieldId::Phone).field(), Some(FieldId::Phone));
            assert_eq!(Focus::Submit.field(), None);
        }
    }

    mod revalidation {
        use super::*;

        #[test]
        fn test_not_due_before_delay() {
            let now = Instant::now();
            let mut state = AppState::new();
            state.schedule_revalidation(FieldId::Email, Duration::from_millis(500), now);
            assert_eq!(state.take_due_revalidation(now), None);
            assert!(state.pending_revalidation.is_some());
        }

        #[test]
        fn test_due_after_delay_and_taken_once() {
            let now = Instant::now();
            let mut state = AppState::new();
            state.schedule_revalidation(FieldId::Email, Duration::from_millis(500), now);

            let later = now + Duration::from_millis(500);
            assert_eq!(state.take_due_revalidation(later), Some(FieldId::Email));
            assert_eq!(state.take_due_revalidation(later), None);
        }

        #[test]
        fn test_newer_edit_replaces_pending() {
            let now = Instant::now();
            let mut state = AppState::new();
            state.schedule_revalidation(FieldId::Name, Duration::from_millis(500), now);
            let later = now + Duration::from_millis(300);
            state.schedule_revalidation(FieldId::Name, Duration::from_millis(500), later);

            assert_eq!(
                state.take_due_revalidation(now + Duration::from_millis(600)),
                None
            );
            assert_eq!(
                state.take_due_revalidation(later + Duration::from_millis(500)),
                Some(FieldId::Name)
            );
        }

        #[test]
        fn test_cancel_only_matching_field() {
            let now = Instant::now();
            let mut state = AppState::new();
            state.schedule_revalidation(FieldId::Phone, Duration::ZERO, now);

            state.cancel_revalidation(FieldId::Name);
            assert!(state.pending_revalidation.is_some());

            state.cancel_revalidation(FieldId::Phone);
            assert!(state.pending_revalidation.is_none());
        }
    }

    mod notifications {
        use super::*;

        #[test]
        fn test_error_replaces_previous_toast() {
            let mut state = AppState::new();
            state.push_success("Registration successful!");
            state.push_error("Email is required");

            let toast = state.notification.as_ref().unwrap();
            assert_eq!(toast.message, "Email is required");
            assert_eq!(toast.kind, NotificationKind::Error);
        }

        #[test]
        fn test_expires_after_ttl() {
            let mut state = AppState::new();
            state.push_error("boom");
            let ttl = Duration::from_secs(5);

            state.expire_notification(ttl, Instant::now());
            assert!(state.notification.is_some());

            state.expire_notification(ttl, Instant::now() + ttl);
            assert!(state.notification.is_none());
        }
    }

    #[test]
    fn test_interest_cursor_moves_and_wraps() {
        let mut state = AppState::new();
        assert_eq!(state.highlighted_interest(), Interest::Development);
        state.move_interest_cursor(false);
        assert_eq!(state.highlighted_interest(), Interest::Sales);
        state.move_interest_cursor(true);
        assert_eq!(state.highlighted_interest(), Interest::Development);
    }

    #[test]
    fn test_reset_due_after_delay() {
        let now = Instant::now();
        let mut state = AppState::new();
        let delay = Duration::from_secs(5);
        assert!(!state.reset_due(delay, now));

        state.succeeded_at = Some(now);
        assert!(!state.reset_due(delay, now));
        assert!(state.reset_due(delay, now + delay));
    }
}
