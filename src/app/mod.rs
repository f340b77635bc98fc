// ABOUTME: Application structure: navigation state and event handling

pub mod events;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use state::{Alert, AlertAction, AppState, OtpParams, Screen};
