use crate::client::SurveillanceClient;
use crate::errors::ClientError;
use crate::models::{Record, RiskLevel, Summary};
use tracing::{error, info};

pub fn summarize(records: &[Record]) -> Summary {
    let mut summary = Summary {
        total: records.len(),
        ..Summary::default()
    };

    for record in records {
        match RiskLevel::classify(&record.risk) {
            Some(RiskLevel::Safe) => summary.safe += 1,
            Some(RiskLevel::Medium) => summary.medium += 1,
            Some(RiskLevel::High) => summary.high += 1,
            None => {}
        }
    }

    summary
}

/// CSS class for a risk cell; unexpected labels fall back to `safe`.
pub fn risk_class(risk: &str) -> &'static str {
    match RiskLevel::classify(risk) {
        Some(RiskLevel::High) => "high",
        Some(RiskLevel::Medium) => "medium",
        Some(RiskLevel::Safe) | None => "safe",
    }
}

#[derive(Debug)]
pub enum Dashboard {
    Loaded {
        summary: Summary,
        records: Vec<Record>,
    },
    Unavailable,
}

impl Dashboard {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self::Loaded {
            summary: summarize(&records),
            records,
        }
    }

    pub fn show_high_risk_alert(&self) -> bool {
        matches!(self, Self::Loaded { summary, .. } if summary.high > 0)
    }
}

pub async fn load_dashboard(client: &SurveillanceClient) -> Dashboard {
    match client.fetch_records().await {
        Ok(records) => {
            info!(records = records.len(), "dashboard data loaded");
            Dashboard::from_records(records)
        }
        Err(err) => {
            error!("dashboard load error: {err}");
            Dashboard::Unavailable
        }
    }
}

pub async fn load_summary(client: &SurveillanceClient) -> Result<Summary, ClientError> {
    let records = client.fetch_records().await?;
    Ok(summarize(&records))
}
