use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;
use validator::Validate;

use crate::{AgentCount, IntakeError, UseCase};

/// Raw intake form payload as posted by the landing page
///
/// Every field goes through [`truthy_text`], so falsy JSON values read as absent.
#[derive(Deserialize, Validate, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFormInput {
    #[serde(default, deserialize_with = "truthy_text")]
    #[validate(required)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    #[validate(required)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub agent_count: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub use_case: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    #[validate(required)]
    pub message: Option<String>,
}

/// Reads a form value with JavaScript truthiness
///
/// `null`, `false`, `0` and `""` become `None`; `true` and other numbers are
/// kept as their text. Arrays and objects are not form values and fail.
fn truthy_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some("true".to_string())),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(D::Error::custom(format!(
            "expected a text field, found {other}"
        ))),
    }
}

impl SubmitFormInput {
    /// Decodes a request body
    ///
    /// Non-object bodies carry no fields and decode to an empty input, except
    /// `null`, which has nothing to read fields from and is rejected.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => Err(serde_json::Error::custom("request body is null")),
            value @ Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }
}

/// A submission whose required fields are present and truthy
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub agent_count: Option<String>,
    pub use_case: Option<String>,
    pub message: String,
}

impl TryFrom<SubmitFormInput> for Submission {
    type Error = IntakeError;

    fn try_from(input: SubmitFormInput) -> Result<Self, Self::Error> {
        input
            .validate()
            .map_err(|_| IntakeError::MissingRequired)?;

        let (Some(name), Some(email), Some(message)) = (input.name, input.email, input.message)
        else {
            return Err(IntakeError::MissingRequired);
        };

        Ok(Self {
            name,
            email,
            company: input.company,
            agent_count: input.agent_count,
            use_case: input.use_case,
            message,
        })
    }
}

impl Submission {
    /// Free-text answers are relayed as-is, only noted here
    pub fn log_unrecognised_labels(&self) {
        if let Some(agent_count) = self
            .agent_count
            .as_deref()
            .filter(|v| !AgentCount::is_known(v))
        {
            tracing::debug!(agent_count, "Unrecognised agent count label");
        }

        if let Some(use_case) = self.use_case.as_deref().filter(|v| !UseCase::is_known(v)) {
            tracing::debug!(use_case, "Unrecognised use case label");
        }
    }
}
