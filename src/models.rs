use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::warn;

pub const SAFE: &str = "Safe";
pub const MEDIUM_RISK: &str = "Medium Risk";
pub const HIGH_RISK: &str = "High Risk";

/// Server-computed risk category. Only exact labels classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Safe,
    Medium,
    High,
}

impl RiskLevel {
    pub fn classify(label: &str) -> Option<Self> {
        match label {
            SAFE => Some(Self::Safe),
            MEDIUM_RISK => Some(Self::Medium),
            HIGH_RISK => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rainfall {
    #[default]
    Low,
    Medium,
    High,
}

impl Rainfall {
    pub const ALL: [Rainfall; 3] = [Rainfall::Low, Rainfall::Medium, Rainfall::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }
}

/// A count that older servers sometimes echo back as text or a float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One stored observation. Missing or null fields decode to empty values so a
/// sloppy row still renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_empty")]
    pub village: String,
    pub diarrhea: Option<Scalar>,
    pub fever: Option<Scalar>,
    #[serde(deserialize_with = "null_as_empty")]
    pub rainfall: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub risk: String,
    pub date: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes rows one at a time; a row that still does not fit is logged and
/// skipped instead of failing the whole list.
pub fn decode_records(rows: Vec<Value>) -> Vec<Record> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(index, "skipping malformed record: {err}");
                None
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitRequest {
    pub village: String,
    pub diarrhea: u32,
    pub fever: u32,
    pub rainfall: Rainfall,
}

#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    pub risk: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub safe: usize,
    pub medium: usize,
    pub high: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accepts_text_counts_and_missing_optionals() {
        let record: Record = serde_json::from_str(
            r#"{"village":"Riverside","diarrhea":"3","rainfall":"Low","risk":"Safe"}"#,
        )
        .unwrap();
        assert_eq!(record.diarrhea, Some(Scalar::Text("3".into())));
        assert!(record.fever.is_none());
        assert!(record.date.is_none());
    }

    #[test]
    fn record_tolerates_null_float_and_missing_fields() {
        let record: Record = serde_json::from_str(
            r#"{"village":"Hill","diarrhea":null,"fever":2.5,"risk":"Safe"}"#,
        )
        .unwrap();
        assert!(record.diarrhea.is_none());
        assert_eq!(record.fever.map(|f| f.to_string()).as_deref(), Some("2.5"));
        assert_eq!(record.rainfall, "");

        let record: Record = serde_json::from_str(r#"{"village":null,"risk":null}"#).unwrap();
        assert_eq!(record.village, "");
        assert_eq!(record.risk, "");
    }

    #[test]
    fn decode_records_skips_only_unusable_rows() {
        let rows = vec![
            serde_json::json!({"village": "A", "diarrhea": 1, "rainfall": "Low", "risk": "Safe"}),
            serde_json::json!("not a record"),
            serde_json::json!({"village": 42, "risk": "Safe"}),
            serde_json::json!({"village": "B", "diarrhea": 3.0, "risk": "High Risk"}),
        ];
        let records = decode_records(rows);
        let villages: Vec<&str> = records.iter().map(|r| r.village.as_str()).collect();
        assert_eq!(villages, ["A", "B"]);
    }

    #[test]
    fn submit_request_serializes_integer_counts() {
        let payload = SubmitRequest {
            village: "Greenfield".into(),
            diarrhea: 12,
            fever: 5,
            rainfall: Rainfall::High,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"village": "Greenfield", "diarrhea": 12, "fever": 5, "rainfall": "High"})
        );
    }

    #[test]
    fn classify_requires_exact_label() {
        assert_eq!(RiskLevel::classify("High Risk"), Some(RiskLevel::High));
        assert_eq!(RiskLevel::classify("high risk"), None);
        assert_eq!(RiskLevel::classify("Unknown"), None);
    }
}
