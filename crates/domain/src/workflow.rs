use crate::shared::entity::{Entity, ID};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvalidEnumValueError {
    #[error("Unknown workflow trigger: {0}")]
    Trigger(String),
    #[error("Unknown workflow action: {0}")]
    Action(String),
    #[error("Unknown time unit: {0}")]
    TimeUnit(String),
}

/// A `Workflow` connects a booking lifecycle trigger to an ordered list of
/// notification `WorkflowStep`s. It is owned by exactly one `User` or one
/// `Team`, never both.
#[derive(Debug, Clone)]
pub struct Workflow {
    pub id: ID,
    /// Display name chosen by the owner, e.g. "24h reminder"
    pub name: String,
    pub owner: WorkflowOwner,
    pub trigger: WorkflowTrigger,
    /// Offset count for relative triggers. Must be set together with
    /// `time_unit` or not at all.
    pub time: Option<i64>,
    pub time_unit: Option<TimeUnit>,
    pub steps: Vec<WorkflowStep>,
}

impl Workflow {
    /// `time` and `time_unit` are only meaningful as a pair, and relative
    /// triggers cannot be scheduled without them.
    pub fn has_valid_time_offset(&self) -> bool {
        match (self.time, self.time_unit) {
            (Some(_), Some(_)) => true,
            (None, None) => !self.trigger.is_timed(),
            _ => false,
        }
    }
}

impl Entity for Workflow {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// The single owning scope of a `Workflow`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkflowOwner {
    User(ID),
    Team(ID),
}

/// One notification of a `Workflow`. The action decides the channel and the
/// recipient kind.
#[derive(Debug, Clone)]
pub struct WorkflowStep {
    pub id: ID,
    pub workflow_id: ID,
    /// Position within the workflow, starting at 1
    pub step_number: i64,
    pub action: WorkflowAction,
    /// Custom recipient. Required for the address/number actions, optional
    /// override for the attendee actions.
    pub send_to: Option<String>,
    pub email_subject: Option<String>,
    pub reminder_body: Option<String>,
    /// Sender identity displayed to the recipient
    pub sender: Option<String>,
    /// Set while the custom phone number still awaits verification. A step
    /// in this state must not dispatch SMS.
    pub number_verification_pending: bool,
    pub number_required: bool,
}

impl Entity for WorkflowStep {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowTrigger {
    BeforeEvent,
    AfterEvent,
    NewEvent,
    RescheduleEvent,
    EventCancelled,
    /// Recognized in stored data but never dispatched
    BookingRequested,
    /// Recognized in stored data but never dispatched
    BookingRejected,
}

impl WorkflowTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeEvent => "BEFORE_EVENT",
            Self::AfterEvent => "AFTER_EVENT",
            Self::NewEvent => "NEW_EVENT",
            Self::RescheduleEvent => "RESCHEDULE_EVENT",
            Self::EventCancelled => "EVENT_CANCELLED",
            Self::BookingRequested => "BOOKING_REQUESTED",
            Self::BookingRejected => "BOOKING_REJECTED",
        }
    }

    pub fn is_supported(&self) -> bool {
        match self {
            Self::BeforeEvent
            | Self::AfterEvent
            | Self::NewEvent
            | Self::RescheduleEvent
            | Self::EventCancelled => true,
            Self::BookingRequested | Self::BookingRejected => false,
        }
    }

    /// Immediate triggers dispatch at the current time without an offset
    pub fn is_immediate(&self) -> bool {
        match self {
            Self::NewEvent | Self::RescheduleEvent | Self::EventCancelled => true,
            Self::BeforeEvent
            | Self::AfterEvent
            | Self::BookingRequested
            | Self::BookingRejected => false,
        }
    }

    /// Timed triggers need `time` + `time_unit` to compute a delivery time
    pub fn is_timed(&self) -> bool {
        match self {
            Self::BeforeEvent | Self::AfterEvent => true,
            Self::NewEvent
            | Self::RescheduleEvent
            | Self::EventCancelled
            | Self::BookingRequested
            | Self::BookingRejected => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowAction {
    EmailHost,
    EmailAttendee,
    EmailAddress,
    SmsAttendee,
    SmsNumber,
    /// Recognized in stored data but never dispatched
    WhatsappAttendee,
    /// Recognized in stored data but never dispatched
    WhatsappNumber,
}

impl FromStr for WorkflowTrigger {
    type Err = InvalidEnumValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEFORE_EVENT" => Ok(Self::BeforeEvent),
            "AFTER_EVENT" => Ok(Self::AfterEvent),
            "NEW_EVENT" => Ok(Self::NewEvent),
            "RESCHEDULE_EVENT" => Ok(Self::RescheduleEvent),
            "EVENT_CANCELLED" => Ok(Self::EventCancelled),
            "BOOKING_REQUESTED" => Ok(Self::BookingRequested),
            "BOOKING_REJECTED" => Ok(Self::BookingRejected),
            _ => Err(InvalidEnumValueError::Trigger(s.to_string())),
        }
    }
}

impl WorkflowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmailHost => "EMAIL_HOST",
            Self::EmailAttendee => "EMAIL_ATTENDEE",
            Self::EmailAddress => "EMAIL_ADDRESS",
            Self::SmsAttendee => "SMS_ATTENDEE",
            Self::SmsNumber => "SMS_NUMBER",
            Self::WhatsappAttendee => "WHATSAPP_ATTENDEE",
            Self::WhatsappNumber => "WHATSAPP_NUMBER",
        }
    }

    pub fn is_supported(&self) -> bool {
        match self {
            Self::EmailHost
            | Self::EmailAttendee
            | Self::EmailAddress
            | Self::SmsAttendee
            | Self::SmsNumber => true,
            Self::WhatsappAttendee | Self::WhatsappNumber => false,
        }
    }

    pub fn is_email_action(&self) -> bool {
        match self {
            Self::EmailHost | Self::EmailAttendee | Self::EmailAddress => true,
            Self::SmsAttendee
            | Self::SmsNumber
            | Self::WhatsappAttendee
            | Self::WhatsappNumber => false,
        }
    }

    pub fn is_sms_action(&self) -> bool {
        match self {
            Self::SmsAttendee | Self::SmsNumber => true,
            Self::EmailHost
            | Self::EmailAttendee
            | Self::EmailAddress
            | Self::WhatsappAttendee
            | Self::WhatsappNumber => false,
        }
    }

    /// Actions that target the booking attendee rather than the host or a
    /// configured address
    pub fn is_attendee_action(&self) -> bool {
        match self {
            Self::EmailAttendee | Self::SmsAttendee | Self::WhatsappAttendee => true,
            Self::EmailHost | Self::EmailAddress | Self::SmsNumber | Self::WhatsappNumber => false,
        }
    }

    /// Actions that are meaningless without a configured `send_to`
    pub fn requires_custom_recipient(&self) -> bool {
        match self {
            Self::EmailAddress | Self::SmsNumber | Self::WhatsappNumber => true,
            Self::EmailHost | Self::EmailAttendee | Self::SmsAttendee | Self::WhatsappAttendee => {
                false
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
}

impl FromStr for WorkflowAction {
    type Err = InvalidEnumValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMAIL_HOST" => Ok(Self::EmailHost),
            "EMAIL_ATTENDEE" => Ok(Self::EmailAttendee),
            "EMAIL_ADDRESS" => Ok(Self::EmailAddress),
            "SMS_ATTENDEE" => Ok(Self::SmsAttendee),
            "SMS_NUMBER" => Ok(Self::SmsNumber),
            "WHATSAPP_ATTENDEE" => Ok(Self::WhatsappAttendee),
            "WHATSAPP_NUMBER" => Ok(Self::WhatsappNumber),
            _ => Err(InvalidEnumValueError::Action(s.to_string())),
        }
    }
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "MINUTE",
            Self::Hour => "HOUR",
            Self::Day => "DAY",
        }
    }

    pub fn to_duration(self, count: i64) -> Duration {
        match self {
            Self::Minute => Duration::minutes(count),
            Self::Hour => Duration::hours(count),
            Self::Day => Duration::days(count),
        }
    }
}

impl FromStr for TimeUnit {
    type Err = InvalidEnumValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MINUTE" => Ok(Self::Minute),
            "HOUR" => Ok(Self::Hour),
            "DAY" => Ok(Self::Day),
            _ => Err(InvalidEnumValueError::TimeUnit(s.to_string())),
        }
    }
}
