use crate::client::SurveillanceClient;
use crate::errors::{ClientError, ValidationError};
use crate::models::{Rainfall, SubmitRequest};
use serde::Deserialize;
use tracing::{info, warn};

/// Raw values of the data-entry inputs, exactly as posted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EntryForm {
    pub village: String,
    pub diarrhea: String,
    pub fever: String,
    pub rainfall: String,
}

impl EntryForm {
    /// A cleared form: empty inputs, rainfall back on `Low`.
    pub fn cleared() -> Self {
        Self {
            rainfall: Rainfall::default().as_str().to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<SubmitRequest, ValidationError> {
        let village = self.village.trim();
        let diarrhea = self.diarrhea.trim();
        let fever = self.fever.trim();
        if village.is_empty() || diarrhea.is_empty() || fever.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let rainfall = match self.rainfall.trim() {
            "" => Rainfall::default(),
            value => Rainfall::parse(value).ok_or(ValidationError::UnknownRainfall)?,
        };

        Ok(SubmitRequest {
            village: village.to_string(),
            diarrhea: parse_count(diarrhea, "Diarrhea")?,
            fever: parse_count(fever, "Fever")?,
            rainfall,
        })
    }
}

fn parse_count(value: &str, field: &'static str) -> Result<u32, ValidationError> {
    value
        .parse::<u32>()
        .map_err(|_| ValidationError::NotACount(field))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Transient message shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// What the entry page shows after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub form: EntryForm,
    pub notification: Notification,
}

pub async fn submit_entry(client: &SurveillanceClient, form: EntryForm) -> SubmissionOutcome {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(err) => {
            return SubmissionOutcome {
                form,
                notification: Notification::error(err.to_string()),
            };
        }
    };

    match client.submit(&payload).await {
        Ok(response) => {
            info!(village = %payload.village, risk = %response.risk, "observation submitted");
            SubmissionOutcome {
                form: EntryForm::cleared(),
                notification: Notification::success(format!("Submitted! Risk: {}", response.risk)),
            }
        }
        Err(err) => {
            warn!(village = %payload.village, "submission failed: {err}");
            SubmissionOutcome {
                form,
                notification: Notification::error(failure_message(&err)),
            }
        }
    }
}

fn failure_message(err: &ClientError) -> &'static str {
    match err {
        ClientError::Status(_) => "Submission failed",
        ClientError::Transport(_) | ClientError::Decode(_) => "Server not reachable",
    }
}
