use bookwell_workflows_domain::{
    Attendee, CalendarEvent, Organizer, TimeUnit, Workflow, WorkflowAction, WorkflowOwner,
    WorkflowStep, WorkflowTrigger, ID,
};
use bookwell_workflows_infra::{Config, Context, ISys, InMemoryDeliveryTaskClient, Repos};
use chrono_tz::UTC;
use std::sync::Arc;

pub const STATIC_NOW: i64 = 1754553600000; // 2025-08-07T08:00:00Z

pub struct StaticTimeSys(pub i64);
impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.0
    }
}

/// Inmemory context plus a handle onto the recording task client
pub fn test_context(now: i64) -> (Context, Arc<InMemoryDeliveryTaskClient>) {
    let delivery = Arc::new(InMemoryDeliveryTaskClient::new());
    let ctx = Context {
        repos: Repos::create_inmemory(),
        config: Config::new(),
        sys: Arc::new(StaticTimeSys(now)),
        delivery: delivery.clone(),
    };
    (ctx, delivery)
}

pub fn workflow_factory(
    trigger: WorkflowTrigger,
    time: Option<i64>,
    time_unit: Option<TimeUnit>,
) -> Workflow {
    Workflow {
        id: Default::default(),
        name: "Test workflow".into(),
        owner: WorkflowOwner::User(Default::default()),
        trigger,
        time,
        time_unit,
        steps: Vec::new(),
    }
}

pub fn step_factory(workflow_id: &ID, action: WorkflowAction) -> WorkflowStep {
    WorkflowStep {
        id: Default::default(),
        workflow_id: workflow_id.clone(),
        step_number: 1,
        action,
        send_to: None,
        email_subject: None,
        reminder_body: None,
        sender: None,
        number_verification_pending: false,
        number_required: false,
    }
}

pub fn event_factory() -> CalendarEvent {
    CalendarEvent {
        booking_uid: "bkng_q7pl3v".into(),
        title: "Intro call".into(),
        start_ts: STATIC_NOW + 1000 * 60 * 60 * 48,
        end_ts: STATIC_NOW + 1000 * 60 * 60 * 48 + 1000 * 60 * 30,
        organizer: Organizer {
            name: "Jamie Host".into(),
            email: "jamie@example.org".into(),
            timezone: UTC,
            locale: "en".into(),
        },
        attendees: vec![Attendee {
            name: "Alex Guest".into(),
            email: "alex@example.org".into(),
            phone_number: Some("+4712345678".into()),
            timezone: UTC,
            locale: "en".into(),
        }],
        location: Some("Zoom".into()),
        additional_notes: None,
        meeting_url: Some("https://meet.example.org/q7pl3v".into()),
        cancel_url: Some("https://book.example.org/cancel/q7pl3v".into()),
        reschedule_url: Some("https://book.example.org/reschedule/q7pl3v".into()),
        seat_reference: None,
    }
}

pub fn set_sms_credentials() {
    std::env::set_var("TWILIO_ACCOUNT_SID", "ACtest");
    std::env::set_var("TWILIO_AUTH_TOKEN", "token");
    std::env::set_var("TWILIO_MESSAGING_SERVICE_SID", "MGtest");
}

pub fn clear_sms_credentials() {
    std::env::remove_var("TWILIO_ACCOUNT_SID");
    std::env::remove_var("TWILIO_AUTH_TOKEN");
    std::env::remove_var("TWILIO_MESSAGING_SERVICE_SID");
}
