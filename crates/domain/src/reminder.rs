use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A `ReminderRecord` tracks one scheduled notification for a booking. It is
/// created when a `WorkflowStep` is dispatched and only ever mutated to set
/// `cancelled`. The actual delivery happens in the external task runner,
/// which re-loads this record at `remind_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderRecord {
    pub id: ID,
    /// Absent for mandatory system reminders that are not tied to a step
    pub workflow_step_id: Option<ID>,
    pub booking_uid: String,
    pub method: ReminderMethod,
    /// Delivery timestamp in UTC epoch millis
    pub remind_at: i64,
    pub scheduled: bool,
    pub cancelled: bool,
    /// Correlation id of the pending delivery task, used solely to cancel it
    pub task_uid: Option<String>,
    pub seat_reference: Option<String>,
}

impl Entity for ReminderRecord {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderMethod {
    Email,
    Sms,
}

impl ReminderMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Sms => "SMS",
        }
    }
}

#[derive(Error, Debug)]
pub enum InvalidReminderMethodError {
    #[error("Unknown reminder method: {0}")]
    Unknown(String),
}

impl FromStr for ReminderMethod {
    type Err = InvalidReminderMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMAIL" => Ok(Self::Email),
            "SMS" => Ok(Self::Sms),
            _ => Err(InvalidReminderMethodError::Unknown(s.to_string())),
        }
    }
}
