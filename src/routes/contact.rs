use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    response::IntoResponse,
};
use hickup_intake::{AgentCount, SubmitFormInput, Submission, UseCase};
use hickup_notification::OutboundEmail;
use serde::Serialize;
use serde_json::json;

use crate::{error::AppError, routes::AppState};

#[derive(Serialize, Debug)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// POST /api/contact - Relay an intake form submission to the operator inbox
///
/// The body is decoded as JSON whatever the declared content type. Bodies
/// that cannot be buffered (over the 2 MiB default limit) or decoded end as
/// the JSON server error rather than an extractor rejection.
#[tracing::instrument(skip_all)]
pub async fn submit(
    State(app_state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let input = SubmitFormInput::from_slice(&body?)?;
    let submission = Submission::try_from(input)?;
    submission.log_unrecognised_labels();

    let inquiry = submission.render()?;

    let delivery = app_state
        .mailer
        .send(OutboundEmail {
            from: app_state.from.to_owned(),
            to: vec![app_state.to.to_owned()],
            subject: inquiry.subject,
            html: inquiry.html,
            text: inquiry.text,
        })
        .await?;

    tracing::info!(id = ?delivery.id, "Intake inquiry forwarded");

    Ok(Json(SubmitResponse {
        success: true,
        id: delivery.id,
    }))
}

/// GET /api/contact/options - Labels offered by the intake form selects
pub async fn options() -> impl IntoResponse {
    Json(json!({
        "agentCounts": AgentCount::labels(),
        "useCases": UseCase::labels(),
    }))
}
