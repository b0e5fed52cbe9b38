//! Gate-pass request model and the request bodies that act on it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Lifecycle state of a gate pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatePassStatus {
    Pending,
    Approved,
    Rejected,
}

impl GatePassStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GatePassStatus::Pending => "pending",
            GatePassStatus::Approved => "approved",
            GatePassStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(GatePassStatus::Pending),
            "approved" => Some(GatePassStatus::Approved),
            "rejected" => Some(GatePassStatus::Rejected),
            _ => None,
        }
    }

    /// Whether an approver may set this status through an update.
    pub fn is_decision(&self) -> bool {
        matches!(self, GatePassStatus::Approved | GatePassStatus::Rejected)
    }
}

impl std::fmt::Display for GatePassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single gate-pass request as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatePassRequest {
    pub id: String,
    pub student_name: String,
    pub roll_number: String,
    pub reason: String,
    /// Caller-supplied, kept verbatim.
    pub date_time: String,
    pub status: GatePassStatus,
    #[serde(default)]
    pub remarks: String,
    pub created_at: DateTime<Utc>,
    /// Stamped on every status decision, rejections included.
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scanned_at: Option<DateTime<Utc>>,
}

impl GatePassRequest {
    /// Build a fresh pending request from validated input.
    pub fn new(id: String, input: NewGatePass, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            student_name: input.student_name,
            roll_number: input.roll_number,
            reason: input.reason,
            date_time: input.date_time,
            status: GatePassStatus::Pending,
            remarks: String::new(),
            created_at,
            approved_at: None,
            scanned_at: None,
        }
    }
}

/// Request body for creating a gate pass.
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a validation failure instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateGatePassRequest {
    pub student_name: Option<String>,
    pub roll_number: Option<String>,
    pub reason: Option<String>,
    pub date_time: Option<String>,
}

/// Create input after validation: all four fields present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGatePass {
    pub student_name: String,
    pub roll_number: String,
    pub reason: String,
    pub date_time: String,
}

impl CreateGatePassRequest {
    pub fn validate(self) -> Result<NewGatePass, AppError> {
        let missing = || AppError::Validation("All fields are required".to_string());

        Ok(NewGatePass {
            student_name: non_empty(self.student_name).ok_or_else(missing)?,
            roll_number: non_empty(self.roll_number).ok_or_else(missing)?,
            reason: non_empty(self.reason).ok_or_else(missing)?,
            date_time: non_empty(self.date_time).ok_or_else(missing)?,
        })
    }
}

/// Request body for an approver decision.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStatusRequest {
    /// Kept untyped so a non-string status is a validation failure.
    pub status: Option<Value>,
    pub remarks: Option<String>,
}

impl UpdateStatusRequest {
    /// The requested decision; only `approved` and `rejected` are accepted.
    pub fn decision(&self) -> Result<GatePassStatus, AppError> {
        let status = match &self.status {
            Some(Value::String(s)) => GatePassStatus::from_str(s),
            _ => None,
        };

        status
            .filter(GatePassStatus::is_decision)
            .ok_or_else(|| {
                AppError::Validation("Valid status (approved/rejected) is required".to_string())
            })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
