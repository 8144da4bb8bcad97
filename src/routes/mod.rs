use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use hickup_notification::Mailer;

mod contact;
mod health;

pub use contact::{SubmitResponse, options, submit};
pub use health::health;

#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn Mailer>,
    /// Sender mailbox, e.g. `Hickup Intake <onboarding@resend.dev>`
    pub from: String,
    /// Operator inbox
    pub to: String,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/contact", post(submit))
        .route("/api/contact/options", get(options))
        .with_state(app_state)
}
