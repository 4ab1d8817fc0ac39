use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a booking as seen by the notification subsystem.
/// Produced by the booking lifecycle handlers and never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Identifier of the booking this snapshot was taken from. Reminders
    /// reference the booking through this value only.
    pub booking_uid: String,
    pub title: String,
    /// Event start in UTC epoch millis
    pub start_ts: i64,
    /// Event end in UTC epoch millis
    pub end_ts: i64,
    pub organizer: Organizer,
    /// Ordered, first entry is the primary attendee
    pub attendees: Vec<Attendee>,
    pub location: Option<String>,
    pub additional_notes: Option<String>,
    pub meeting_url: Option<String>,
    pub cancel_url: Option<String>,
    pub reschedule_url: Option<String>,
    /// Present when the booking occupies a seat of a multi-seat event
    pub seat_reference: Option<String>,
}

impl CalendarEvent {
    pub fn primary_attendee(&self) -> Option<&Attendee> {
        self.attendees.first()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    pub name: String,
    pub email: String,
    pub timezone: Tz,
    /// BCP 47 style language tag, e.g. "en" or "de-AT"
    pub locale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub timezone: Tz,
    pub locale: String,
}
