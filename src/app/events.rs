// ABOUTME: Event handling: maps keyboard input to app events per screen and
// applies them to the application state

use crate::app::state::{Alert, AlertAction, AppState, OtpParams, Screen};
use crate::components::otp::OtpState;
use crate::components::phone_form::PhoneFormState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

/// Every user-triggerable operation in the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    // Phone form events (login and signup)
    PhoneInputChar(char),
    PhoneBackspace,
    PhoneDelete,
    PhoneCursorLeft,
    PhoneCursorRight,
    PhoneCursorHome,
    PhoneCursorEnd,
    PhoneSubmit,
    // Cross-links between the two forms
    SwitchToSignup,
    SwitchToLogin,
    GoBack,
    // OTP screen events
    OtpInputChar(char),
    OtpBackspace,
    OtpSubmit,
    OtpResend,
    // Alert dismissal
    AlertDismiss,
}

pub struct EventHandler;

impl EventHandler {
    /// Map a raw key event to an app event for the current state. An open
    /// alert captures all input before the screen below sees any of it.
    pub fn handle_key_event(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(AppEvent::Quit),
                KeyCode::Char('r')
                    if state.alert.is_none() && matches!(state.active(), Screen::Otp(_)) =>
                {
                    Some(AppEvent::OtpResend)
                }
                _ => None,
            };
        }

        if state.alert.is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ' | 'o' | 'O') => {
                    Some(AppEvent::AlertDismiss)
                }
                _ => None,
            };
        }

        match state.active() {
            Screen::Login(_) => match key.code {
                KeyCode::Esc => Some(AppEvent::Quit),
                KeyCode::Tab => Some(AppEvent::SwitchToSignup),
                code => Self::phone_form_key(code),
            },
            Screen::Signup(_) => match key.code {
                KeyCode::Esc => Some(AppEvent::GoBack),
                KeyCode::Tab => Some(AppEvent::SwitchToLogin),
                code => Self::phone_form_key(code),
            },
            Screen::Otp(_) => match key.code {
                KeyCode::Enter => Some(AppEvent::OtpSubmit),
                KeyCode::Backspace => Some(AppEvent::OtpBackspace),
                KeyCode::Char(c) => Some(AppEvent::OtpInputChar(c)),
                _ => None,
            },
        }
    }

    /// Keys shared by the login and signup forms
    fn phone_form_key(code: KeyCode) -> Option<AppEvent> {
        match code {
            KeyCode::Enter => Some(AppEvent::PhoneSubmit),
            KeyCode::Backspace => Some(AppEvent::PhoneBackspace),
            KeyCode::Delete => Some(AppEvent::PhoneDelete),
            KeyCode::Left => Some(AppEvent::PhoneCursorLeft),
            KeyCode::Right => Some(AppEvent::PhoneCursorRight),
            KeyCode::Home => Some(AppEvent::PhoneCursorHome),
            KeyCode::End => Some(AppEvent::PhoneCursorEnd),
            KeyCode::Char(c) => Some(AppEvent::PhoneInputChar(c)),
            _ => None,
        }
    }

    /// Apply an event to the state. Everything completes synchronously
    /// within the triggering input event.
    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => {
                state.should_quit = true;
            }

            AppEvent::PhoneInputChar(c) => Self::with_phone_form(state, |form| form.input_char(c)),
            AppEvent::PhoneBackspace => Self::with_phone_form(state, PhoneFormState::backspace),
            AppEvent::PhoneDelete => Self::with_phone_form(state, PhoneFormState::delete),
            AppEvent::PhoneCursorLeft => Self::with_phone_form(state, PhoneFormState::cursor_left),
            AppEvent::PhoneCursorRight => Self::with_phone_form(state, PhoneFormState::cursor_right),
            AppEvent::PhoneCursorHome => Self::with_phone_form(state, PhoneFormState::cursor_home),
            AppEvent::PhoneCursorEnd => Self::with_phone_form(state, PhoneFormState::cursor_end),

            AppEvent::PhoneSubmit => Self::submit_phone(state),

            AppEvent::SwitchToSignup => {
                // The login draft is discarded; a later return shows a
                // fresh login form
                state.push(Screen::signup());
            }
            AppEvent::SwitchToLogin => {
                state.reset_to_login();
            }
            AppEvent::GoBack => {
                state.go_back();
            }

            AppEvent::OtpInputChar(c) => Self::with_otp(state, |otp| otp.input_char(c)),
            AppEvent::OtpBackspace => Self::with_otp(state, OtpState::backspace),
            AppEvent::OtpSubmit => Self::submit_otp(state),
            AppEvent::OtpResend => Self::resend_otp(state),

            AppEvent::AlertDismiss => {
                state.dismiss_alert();
            }
        }
    }

    fn with_phone_form(state: &mut AppState, f: impl FnOnce(&mut PhoneFormState)) {
        if let Screen::Login(form) | Screen::Signup(form) = state.active_mut() {
            f(form);
        }
    }

    fn with_otp(state: &mut AppState, f: impl FnOnce(&mut OtpState)) {
        if let Screen::Otp(otp) = state.active_mut() {
            f(otp);
        }
    }

    /// Continue from the login or signup form: validate the draft, then
    /// carry the literal (untrimmed) input forward to the OTP screen
    fn submit_phone(state: &mut AppState) {
        let (validation, phone_number, is_signup) = match state.active() {
            Screen::Login(form) => (form.validate(), form.input.clone(), false),
            Screen::Signup(form) => (form.validate(), form.input.clone(), true),
            Screen::Otp(_) => return,
        };

        match validation {
            Ok(()) => {
                info!(is_signup, "phone accepted, requesting code");
                state.push(Screen::otp(OtpParams {
                    phone_number,
                    is_signup,
                }));
            }
            Err(e) => {
                warn!(is_signup, error = %e, "phone validation failed");
                state.show_alert(Alert::error(e.to_string()));
            }
        }
    }

    /// Verify the entered code. Success surfaces a confirmation whose
    /// dismissal unwinds to the login screen; failures leave the screen and
    /// its cells in place.
    fn submit_otp(state: &mut AppState) {
        let (result, is_signup) = match state.active() {
            Screen::Otp(otp) => (otp.submit(), otp.params.is_signup),
            _ => return,
        };

        match result {
            Ok(()) => {
                let body = if is_signup {
                    "Account created successfully!"
                } else {
                    "Login successful!"
                };
                info!(is_signup, "code verified");
                state.show_alert(
                    Alert::new("Success", body).with_action(AlertAction::ReturnToLogin),
                );
            }
            Err(e) => {
                warn!(error = %e, "code rejected");
                state.show_alert(Alert::error(e.to_string()));
            }
        }
    }

    /// Simulated resend: confirm, clear all cells, refocus the first one
    fn resend_otp(state: &mut AppState) {
        if let Screen::Otp(otp) = state.active_mut() {
            otp.resend();
        } else {
            return;
        }
        info!("resend requested");
        state.show_alert(Alert::new(
            "Code Sent",
            "A new verification code has been sent to your phone.",
        ));
    }
}
