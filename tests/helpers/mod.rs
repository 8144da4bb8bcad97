//! Shared router setup and a recording mailer for integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use hickup::{AppState, router};
use hickup_notification::{Delivery, Mailer, OutboundEmail, SendError};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const FROM: &str = "Hickup Intake <onboarding@resend.dev>";
pub const TO: &str = "ops@example.com";

#[derive(Clone, Copy)]
pub enum Outcome {
    Delivered(Option<&'static str>),
    Rejected,
}

/// Records every message and answers with a fixed outcome
#[derive(Clone)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    outcome: Outcome,
}

impl RecordingMailer {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            outcome,
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutboundEmail) -> Result<Delivery, SendError> {
        self.sent.lock().unwrap().push(email);

        match self.outcome {
            Outcome::Delivered(id) => Ok(Delivery {
                id: id.map(str::to_string),
            }),
            Outcome::Rejected => Err(SendError::Provider {
                status: 403,
                name: "validation_error".to_string(),
                message: "You can only send testing emails to your own email address".to_string(),
            }),
        }
    }
}

pub fn app(mailer: &RecordingMailer) -> Router {
    router(AppState {
        mailer: Arc::new(mailer.clone()),
        from: FROM.to_string(),
        to: TO.to_string(),
    })
}

/// Sends a request and returns the status with the decoded JSON body
pub async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap();

    (status, json)
}

pub async fn post_contact(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    call(app, request).await
}
