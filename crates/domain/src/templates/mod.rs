mod defaults;
mod format;

pub use defaults::{template_set, TemplateSet};
pub use format::{format_long_date, format_time};

use crate::event::CalendarEvent;
use crate::workflow::WorkflowTrigger;
use chrono_tz::Tz;

/// Locales with bundled default templates. Anything else falls back to
/// English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateLocale {
    En,
    De,
    Es,
    Fr,
    Pt,
}

impl TemplateLocale {
    /// Maps a BCP 47 style tag ("de", "de-AT", "pt_BR") onto a bundled
    /// locale. Unknown tags resolve to English.
    pub fn resolve(tag: &str) -> Self {
        let primary = tag
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or("")
            .to_lowercase();
        match primary.as_str() {
            "de" => Self::De,
            "es" => Self::Es,
            "fr" => Self::Fr,
            "pt" => Self::Pt,
            _ => Self::En,
        }
    }
}

/// The template families shipped with default content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateCategory {
    Reminder,
    NewBooking,
    Cancellation,
    Reschedule,
}

impl TemplateCategory {
    pub fn from_trigger(trigger: WorkflowTrigger) -> Self {
        match trigger {
            WorkflowTrigger::BeforeEvent | WorkflowTrigger::AfterEvent => Self::Reminder,
            WorkflowTrigger::NewEvent | WorkflowTrigger::BookingRequested => Self::NewBooking,
            WorkflowTrigger::EventCancelled | WorkflowTrigger::BookingRejected => {
                Self::Cancellation
            }
            WorkflowTrigger::RescheduleEvent => Self::Reschedule,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailContent {
    pub subject: String,
    pub body: String,
}

/// Renders subject and body for an email reminder. Overrides from the
/// workflow step replace the default template but still go through the same
/// substitution pass.
pub fn render_email(
    trigger: WorkflowTrigger,
    event: &CalendarEvent,
    subject_override: Option<&str>,
    body_override: Option<&str>,
    locale: TemplateLocale,
    timezone: &Tz,
) -> EmailContent {
    let category = TemplateCategory::from_trigger(trigger);
    let set = template_set(locale);
    let subject = subject_override.unwrap_or_else(|| set.email_subject(category));
    let body = body_override.unwrap_or_else(|| set.email_body(category));
    EmailContent {
        subject: substitute(subject, event, timezone, locale),
        body: substitute(body, event, timezone, locale),
    }
}

/// Renders the message text for an SMS reminder
pub fn render_sms(
    trigger: WorkflowTrigger,
    event: &CalendarEvent,
    body_override: Option<&str>,
    locale: TemplateLocale,
    timezone: &Tz,
) -> String {
    let category = TemplateCategory::from_trigger(trigger);
    let set = template_set(locale);
    let body = body_override.unwrap_or_else(|| set.sms_body(category));
    substitute(body, event, timezone, locale)
}

/// Literal replace-all substitution of the variable vocabulary. Not a
/// templating language: unknown tokens are left untouched, absent event
/// data degrades to a neutral label or an empty string.
pub fn substitute(
    text: &str,
    event: &CalendarEvent,
    timezone: &Tz,
    locale: TemplateLocale,
) -> String {
    let start = format::to_zoned(event.start_ts, timezone);
    let end = format::to_zoned(event.end_ts, timezone);

    let attendee_name = event
        .primary_attendee()
        .map(|a| a.name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("Guest");
    let organizer_name = if event.organizer.name.is_empty() {
        "Organizer"
    } else {
        event.organizer.name.as_str()
    };
    let title = if event.title.is_empty() {
        "Event"
    } else {
        event.title.as_str()
    };
    let location = event.location.as_deref().filter(|l| !l.is_empty());

    text.replace("{ATTENDEE_NAME}", attendee_name)
        .replace("{ORGANIZER_NAME}", organizer_name)
        .replace("{EVENT_TITLE}", title)
        .replace("{EVENT_DATE}", &format_long_date(&start, locale))
        .replace("{EVENT_TIME}", &format_time(&start))
        .replace("{EVENT_END_TIME}", &format_time(&end))
        .replace("{EVENT_TIMEZONE}", timezone.name())
        .replace("{LOCATION}", location.unwrap_or("TBD"))
        .replace(
            "{ADDITIONAL_NOTES}",
            event.additional_notes.as_deref().unwrap_or(""),
        )
        .replace("{MEETING_URL}", event.meeting_url.as_deref().unwrap_or(""))
        .replace("{CANCEL_URL}", event.cancel_url.as_deref().unwrap_or(""))
        .replace(
            "{RESCHEDULE_URL}",
            event.reschedule_url.as_deref().unwrap_or(""),
        )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::{Attendee, Organizer};
    use chrono_tz::UTC;

    const ALL_VARIABLES: [&str; 12] = [
        "{ATTENDEE_NAME}",
        "{ORGANIZER_NAME}",
        "{EVENT_TITLE}",
        "{EVENT_DATE}",
        "{EVENT_TIME}",
        "{EVENT_END_TIME}",
        "{EVENT_TIMEZONE}",
        "{LOCATION}",
        "{ADDITIONAL_NOTES}",
        "{MEETING_URL}",
        "{CANCEL_URL}",
        "{RESCHEDULE_URL}",
    ];

    fn full_event() -> CalendarEvent {
        CalendarEvent {
            booking_uid: "bkng_8f3a".into(),
            title: "Architecture review".into(),
            start_ts: 1754553600000,
            end_ts: 1754553600000 + 1000 * 60 * 45,
            organizer: Organizer {
                name: "Jamie Fox".into(),
                email: "jamie@example.org".into(),
                timezone: UTC,
                locale: "en".into(),
            },
            attendees: vec![Attendee {
                name: "Alex Doe".into(),
                email: "alex@example.org".into(),
                phone_number: Some("+4712345678".into()),
                timezone: UTC,
                locale: "en".into(),
            }],
            location: Some("Room 4".into()),
            additional_notes: Some("Bring the diagrams".into()),
            meeting_url: Some("https://meet.example.org/r/8f3a".into()),
            cancel_url: Some("https://book.example.org/cancel/8f3a".into()),
            reschedule_url: Some("https://book.example.org/reschedule/8f3a".into()),
            seat_reference: None,
        }
    }

    #[test]
    fn substitution_leaves_no_variable_tokens() {
        let template = ALL_VARIABLES.join(" / ");
        let rendered = substitute(&template, &full_event(), &UTC, TemplateLocale::En);
        for variable in &ALL_VARIABLES {
            assert!(
                !rendered.contains(variable),
                "{} was not substituted",
                variable
            );
        }
        assert!(rendered.contains("Alex Doe"));
        assert!(rendered.contains("Jamie Fox"));
        assert!(rendered.contains("Architecture review"));
    }

    #[test]
    fn default_templates_leave_no_variable_tokens() {
        let event = full_event();
        for trigger in &[
            WorkflowTrigger::BeforeEvent,
            WorkflowTrigger::NewEvent,
            WorkflowTrigger::RescheduleEvent,
            WorkflowTrigger::EventCancelled,
        ] {
            let content = render_email(*trigger, &event, None, None, TemplateLocale::De, &UTC);
            for variable in &ALL_VARIABLES {
                assert!(!content.subject.contains(variable));
                assert!(!content.body.contains(variable));
            }
            let sms = render_sms(*trigger, &event, None, TemplateLocale::De, &UTC);
            for variable in &ALL_VARIABLES {
                assert!(!sms.contains(variable));
            }
        }
    }

    #[test]
    fn absent_data_degrades_to_defaults() {
        let mut event = full_event();
        event.attendees.clear();
        event.organizer.name = "".into();
        event.title = "".into();
        event.location = None;
        event.additional_notes = None;

        let rendered = substitute(
            "{ATTENDEE_NAME}|{ORGANIZER_NAME}|{EVENT_TITLE}|{LOCATION}|{ADDITIONAL_NOTES}",
            &event,
            &UTC,
            TemplateLocale::En,
        );
        assert_eq!(rendered, "Guest|Organizer|Event|TBD|");
    }

    #[test]
    fn overrides_go_through_the_same_substitution() {
        let content = render_email(
            WorkflowTrigger::NewEvent,
            &full_event(),
            Some("Custom: {EVENT_TITLE}"),
            Some("See you at {EVENT_TIME}, {ATTENDEE_NAME}"),
            TemplateLocale::En,
            &UTC,
        );
        assert_eq!(content.subject, "Custom: Architecture review");
        assert_eq!(content.body, "See you at 8:00 AM, Alex Doe");
    }

    #[test]
    fn unknown_locales_fall_back_to_english() {
        assert_eq!(TemplateLocale::resolve("nb-NO"), TemplateLocale::En);
        assert_eq!(TemplateLocale::resolve(""), TemplateLocale::En);
        assert_eq!(TemplateLocale::resolve("de-AT"), TemplateLocale::De);
        assert_eq!(TemplateLocale::resolve("pt_BR"), TemplateLocale::Pt);
        assert_eq!(TemplateLocale::resolve("ES"), TemplateLocale::Es);
    }

    #[test]
    fn renders_in_the_recipients_timezone() {
        let sms = render_sms(
            WorkflowTrigger::BeforeEvent,
            &full_event(),
            None,
            TemplateLocale::En,
            &chrono_tz::America::New_York,
        );
        assert!(sms.contains("4:00 AM"));
        assert!(sms.contains("America/New_York"));
    }
}
