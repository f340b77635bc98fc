// ABOUTME: Application state: the navigation stack of onboarding screens
// and the modal alert slot

use crate::components::otp::OtpState;
use crate::components::phone_form::PhoneFormState;
use tracing::info;

/// Parameters carried by a forward transition into the OTP screen.
/// Written once at transition time, read-only at the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpParams {
    pub phone_number: String,
    pub is_signup: bool,
}

/// One onboarding screen together with its local form state. A screen's
/// state lives and dies with its stack entry; nothing is shared across
/// screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login(PhoneFormState),
    Signup(PhoneFormState),
    Otp(OtpState),
}

impl Screen {
    pub fn login() -> Self {
        Self::Login(PhoneFormState::new())
    }

    pub fn signup() -> Self {
        Self::Signup(PhoneFormState::new())
    }

    pub fn otp(params: OtpParams) -> Self {
        Self::Otp(OtpState::new(params))
    }

    /// Screen name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login(_) => "login",
            Self::Signup(_) => "signup",
            Self::Otp(_) => "otp",
        }
    }

    /// A freshly initialized screen of the same kind. Screens revealed by a
    /// backwards transition come back re-initialized; the OTP screen keeps
    /// its navigation parameters since those outlive any edit.
    fn reinitialized(&self) -> Self {
        match self {
            Self::Login(_) => Self::login(),
            Self::Signup(_) => Self::signup(),
            Self::Otp(state) => Self::otp(state.params.clone()),
        }
    }
}

/// What happens when an alert is dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    /// Unwind the whole stack to a fresh login screen
    ReturnToLogin,
}

/// A modal alert with a title, a body, and an optional follow-up action
/// that runs on dismissal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub body: String,
    pub then: Option<AlertAction>,
}

impl Alert {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            then: None,
        }
    }

    /// An alert titled "Error"
    pub fn error(body: impl Into<String>) -> Self {
        Self::new("Error", body)
    }

    pub fn with_action(mut self, action: AlertAction) -> Self {
        self.then = Some(action);
        self
    }
}

/// Top-level application state. The stack is never empty; the bottom entry
/// is always the login screen.
#[derive(Debug, Clone)]
pub struct AppState {
    stack: Vec<Screen>,
    pub alert: Option<Alert>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::login()],
            alert: None,
            should_quit: false,
        }
    }

    /// The screen currently on top of the stack
    pub fn active(&self) -> &Screen {
        // The stack is never empty: go_back refuses to pop the root
        self.stack.last().expect("navigation stack is never empty")
    }

    pub fn active_mut(&mut self) -> &mut Screen {
        self.stack.last_mut().expect("navigation stack is never empty")
    }

    /// Forward transition to a freshly initialized screen
    pub fn push(&mut self, screen: Screen) {
        info!(from = self.active().name(), to = screen.name(), "navigate");
        self.stack.push(screen);
    }

    /// Unwind one step. The revealed screen comes back re-initialized.
    /// Returns false (and does nothing) at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() < 2 {
            return false;
        }
        self.stack.pop();
        let fresh = self.active().reinitialized();
        *self.active_mut() = fresh;
        info!(to = self.active().name(), "navigate back");
        true
    }

    /// Unwind everything down to a fresh login screen
    pub fn reset_to_login(&mut self) {
        info!(from = self.active().name(), "reset to login");
        self.stack.clear();
        self.stack.push(Screen::login());
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn show_alert(&mut self, alert: Alert) {
        info!(title = %alert.title, body = %alert.body, "alert");
        self.alert = Some(alert);
    }

    /// Dismiss the current alert and run its follow-up action, if any
    pub fn dismiss_alert(&mut self) {
        if let Some(alert) = self.alert.take() {
            if let Some(AlertAction::ReturnToLogin) = alert.then {
                self.reset_to_login();
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
