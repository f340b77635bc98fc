// ABOUTME: Event-level tests driving the onboarding flow end to end through
// the event handler

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use phoneflow::app::{AppEvent, AppState, EventHandler, Screen};
use pretty_assertions::assert_eq;

fn process(state: &mut AppState, event: AppEvent) {
    EventHandler::process_event(event, state);
}

fn type_phone(state: &mut AppState, digits: &str) {
    for c in digits.chars() {
        process(state, AppEvent::PhoneInputChar(c));
    }
}

/// Drive the flow up to the OTP screen with a valid number
fn state_at_otp(is_signup: bool) -> AppState {
    let mut state = AppState::new();
    if is_signup {
        process(&mut state, AppEvent::SwitchToSignup);
    }
    type_phone(&mut state, "5551234567");
    process(&mut state, AppEvent::PhoneSubmit);
    assert!(matches!(state.active(), Screen::Otp(_)));
    state
}

#[test]
fn test_empty_phone_rejected() {
    let mut state = AppState::new();
    process(&mut state, AppEvent::PhoneSubmit);

    let alert = state.alert.as_ref().expect("expected validation alert");
    assert_eq!(alert.title, "Error");
    assert_eq!(alert.body, "Please enter your phone number");
    assert_eq!(state.depth(), 1);
}

#[test]
fn test_short_phone_rejected_stays_put() {
    let mut state = AppState::new();
    type_phone(&mut state, "555123456");
    process(&mut state, AppEvent::PhoneSubmit);

    let alert = state.alert.as_ref().expect("expected validation alert");
    assert_eq!(alert.body, "Please enter a valid phone number");
    assert!(matches!(state.active(), Screen::Login(_)));
    assert_eq!(state.depth(), 1);
}

#[test]
fn test_valid_phone_carries_literal_value() {
    let mut state = AppState::new();
    // Untrimmed input is forwarded exactly as typed
    type_phone(&mut state, " 5551234567");
    process(&mut state, AppEvent::PhoneSubmit);

    match state.active() {
        Screen::Otp(otp) => {
            assert_eq!(otp.params.phone_number, " 5551234567");
            assert!(!otp.params.is_signup);
        }
        other => panic!("expected OTP screen, got {}", other.name()),
    }
}

#[test]
fn test_signup_flag_carried() {
    let state = state_at_otp(true);
    match state.active() {
        Screen::Otp(otp) => assert!(otp.params.is_signup),
        other => panic!("expected OTP screen, got {}", other.name()),
    }
}

#[test]
fn test_full_code_entry_then_success_routes_to_login() {
    for is_signup in [false, true] {
        let mut state = state_at_otp(is_signup);

        for c in "12345".chars() {
            process(&mut state, AppEvent::OtpInputChar(c));
        }
        process(&mut state, AppEvent::OtpSubmit);

        let alert = state.alert.as_ref().expect("expected success alert");
        assert_eq!(alert.title, "Success");
        let expected = if is_signup {
            "Account created successfully!"
        } else {
            "Login successful!"
        };
        assert_eq!(alert.body, expected);

        process(&mut state, AppEvent::AlertDismiss);
        assert_eq!(state.depth(), 1);
        assert!(matches!(state.active(), Screen::Login(_)));
    }
}

#[test]
fn test_wrong_code_preserves_digits() {
    let mut state = state_at_otp(false);
    for c in "54321".chars() {
        process(&mut state, AppEvent::OtpInputChar(c));
    }
    process(&mut state, AppEvent::OtpSubmit);

    let alert = state.alert.as_ref().expect("expected error alert");
    assert_eq!(alert.body, "Invalid OTP. Please try again.");

    match state.active() {
        Screen::Otp(otp) => {
            assert_eq!(otp.code(), "54321");
            assert_eq!(otp.focus, 4);
        }
        other => panic!("expected OTP screen, got {}", other.name()),
    }
}

#[test]
fn test_incomplete_code_surfaces_incomplete_message() {
    let mut state = state_at_otp(false);

    // "1,2,_,4,5" with a hole in the middle
    if let Screen::Otp(otp) = state.active_mut() {
        otp.edit(0, "1");
        otp.edit(1, "2");
        otp.edit(3, "4");
        otp.edit(4, "5");
    }
    process(&mut state, AppEvent::OtpSubmit);

    let alert = state.alert.as_ref().expect("expected error alert");
    assert_eq!(alert.body, "Please enter the complete 5-digit code");
    assert!(matches!(state.active(), Screen::Otp(_)));
}

#[test]
fn test_resend_clears_cells_and_confirms() {
    let mut state = state_at_otp(false);
    for c in "987".chars() {
        process(&mut state, AppEvent::OtpInputChar(c));
    }
    process(&mut state, AppEvent::OtpResend);

    let alert = state.alert.as_ref().expect("expected resend alert");
    assert_eq!(alert.title, "Code Sent");
    assert_eq!(
        alert.body,
        "A new verification code has been sent to your phone."
    );

    match state.active() {
        Screen::Otp(otp) => {
            assert_eq!(otp.code(), "");
            assert_eq!(otp.focus, 0);
        }
        other => panic!("expected OTP screen, got {}", other.name()),
    }
}

#[test]
fn test_backspace_retreats_without_clearing() {
    let mut state = state_at_otp(false);
    process(&mut state, AppEvent::OtpInputChar('7'));

    // Focused cell 1 is empty: retreat only
    process(&mut state, AppEvent::OtpBackspace);
    match state.active() {
        Screen::Otp(otp) => {
            assert_eq!(otp.focus, 0);
            assert_eq!(otp.digits[0], "7");
        }
        other => panic!("expected OTP screen, got {}", other.name()),
    }
}

#[test]
fn test_cross_links_discard_input() {
    let mut state = AppState::new();
    type_phone(&mut state, "12345");
    process(&mut state, AppEvent::SwitchToSignup);
    assert!(matches!(state.active(), Screen::Signup(_)));

    type_phone(&mut state, "999");
    process(&mut state, AppEvent::SwitchToLogin);

    match state.active() {
        Screen::Login(form) => assert_eq!(form.input, ""),
        other => panic!("expected login screen, got {}", other.name()),
    }
    assert_eq!(state.depth(), 1);
}

#[test]
fn test_signup_back_unwinds_one_step() {
    let mut state = AppState::new();
    process(&mut state, AppEvent::SwitchToSignup);
    process(&mut state, AppEvent::GoBack);

    assert!(matches!(state.active(), Screen::Login(_)));
    assert_eq!(state.depth(), 1);
}

#[test]
fn test_key_mapping_per_screen() {
    let state = AppState::new();

    let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
    assert_eq!(
        EventHandler::handle_key_event(tab, &state),
        Some(AppEvent::SwitchToSignup)
    );

    let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    assert_eq!(EventHandler::handle_key_event(esc, &state), Some(AppEvent::Quit));

    let mut state = AppState::new();
    process(&mut state, AppEvent::SwitchToSignup);
    assert_eq!(
        EventHandler::handle_key_event(esc, &state),
        Some(AppEvent::GoBack)
    );
    assert_eq!(
        EventHandler::handle_key_event(tab, &state),
        Some(AppEvent::SwitchToLogin)
    );
}

#[test]
fn test_otp_key_mapping() {
    let state = state_at_otp(false);

    let digit = KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE);
    assert_eq!(
        EventHandler::handle_key_event(digit, &state),
        Some(AppEvent::OtpInputChar('3'))
    );

    let resend = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
    assert_eq!(
        EventHandler::handle_key_event(resend, &state),
        Some(AppEvent::OtpResend)
    );

    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(
        EventHandler::handle_key_event(enter, &state),
        Some(AppEvent::OtpSubmit)
    );
}

#[test]
fn test_alert_captures_all_input() {
    let mut state = AppState::new();
    process(&mut state, AppEvent::PhoneSubmit);
    assert!(state.alert.is_some());

    // Characters no longer reach the form below
    let ch = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
    assert_eq!(EventHandler::handle_key_event(ch, &state), None);

    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(
        EventHandler::handle_key_event(enter, &state),
        Some(AppEvent::AlertDismiss)
    );
}

#[test]
fn test_ctrl_c_quits_everywhere() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

    let login = AppState::new();
    assert_eq!(
        EventHandler::handle_key_event(ctrl_c, &login),
        Some(AppEvent::Quit)
    );

    let otp = state_at_otp(true);
    assert_eq!(
        EventHandler::handle_key_event(ctrl_c, &otp),
        Some(AppEvent::Quit)
    );
}
