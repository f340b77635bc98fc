// ABOUTME: UI components for the onboarding flow: screens, form state, and
// shared presentational widgets

pub mod alert_dialog;
pub mod back_button;
pub mod gradient_text;
pub mod layout;
pub mod login;
pub mod otp;
pub mod phone_form;
pub mod signup;

pub use alert_dialog::AlertDialogComponent;
pub use back_button::BackButton;
pub use layout::LayoutComponent;
pub use login::LoginComponent;
pub use otp::{OtpComponent, OtpState};
pub use phone_form::PhoneFormState;
pub use signup::SignupComponent;
