use super::rendering_context;
use bookwell_workflows_domain::{
    scheduled_date,
    templates::{render_email, TemplateLocale},
    CalendarEvent, ReminderMethod, ReminderRecord, ScheduleOutcome, SkipReason, Workflow,
    WorkflowAction, WorkflowStep,
};
use bookwell_workflows_infra::{Context, DeliveryPayload, DeliveryTask};
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum DispatchError {
    #[error("No recipient could be resolved for the step")]
    NoRecipient,
    #[error("Could not calculate a delivery time for the reminder")]
    NoScheduledDate,
    #[error("{0}")]
    Infra(anyhow::Error),
}

impl From<anyhow::Error> for DispatchError {
    fn from(e: anyhow::Error) -> Self {
        Self::Infra(e)
    }
}

/// Schedules one email reminder for a (workflow, step) pair. Failures never
/// propagate to the caller, they are folded into the returned outcome.
pub async fn schedule_reminder(
    workflow: &Workflow,
    step: &WorkflowStep,
    event: &CalendarEvent,
    ctx: &Context,
) -> ScheduleOutcome {
    if !step.action.is_email_action() {
        return ScheduleOutcome::Skipped {
            reason: SkipReason::WrongChannel,
        };
    }

    match try_schedule(workflow, step, event, ctx).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(
                "Unable to schedule email reminder for workflow: {} step: {}. Err: {:?}",
                workflow.id, step.id, e
            );
            ScheduleOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

async fn try_schedule(
    workflow: &Workflow,
    step: &WorkflowStep,
    event: &CalendarEvent,
    ctx: &Context,
) -> Result<ScheduleOutcome, DispatchError> {
    let recipient = resolve_recipient(step, event).ok_or(DispatchError::NoRecipient)?;

    let (locale_tag, timezone) = rendering_context(event);
    let content = render_email(
        workflow.trigger,
        event,
        step.email_subject.as_deref(),
        step.reminder_body.as_deref(),
        TemplateLocale::resolve(locale_tag),
        &timezone,
    );

    let remind_at = scheduled_date(
        workflow.trigger,
        workflow.time,
        workflow.time_unit,
        event.start_ts,
        event.end_ts,
        ctx.sys.get_timestamp_millis(),
    )
    .ok_or(DispatchError::NoScheduledDate)?;

    let reference_uid = Uuid::new_v4().to_string();
    let reminder = ReminderRecord {
        id: Default::default(),
        workflow_step_id: Some(step.id.clone()),
        booking_uid: event.booking_uid.clone(),
        method: ReminderMethod::Email,
        remind_at,
        scheduled: true,
        cancelled: false,
        task_uid: Some(reference_uid.clone()),
        seat_reference: event.seat_reference.clone(),
    };
    ctx.repos.reminders.insert(&reminder).await?;

    // Immediate triggers take the same path, the task runner just fires
    // right away
    ctx.delivery
        .create(&DeliveryTask {
            reminder_id: reminder.id.clone(),
            payload: DeliveryPayload::SendEmailReminder {
                recipient,
                subject: content.subject,
                body: content.body,
            },
            scheduled_at: remind_at,
            reference_uid,
        })
        .await?;

    Ok(ScheduleOutcome::Scheduled {
        reminder_id: reminder.id,
    })
}

fn resolve_recipient(step: &WorkflowStep, event: &CalendarEvent) -> Option<String> {
    let send_to = step.send_to.clone().filter(|s| !s.is_empty());
    match step.action {
        WorkflowAction::EmailHost => Some(event.organizer.email.clone()),
        WorkflowAction::EmailAttendee => {
            send_to.or_else(|| event.primary_attendee().map(|a| a.email.clone()))
        }
        WorkflowAction::EmailAddress => send_to,
        WorkflowAction::SmsAttendee
        | WorkflowAction::SmsNumber
        | WorkflowAction::WhatsappAttendee
        | WorkflowAction::WhatsappNumber => None,
    }
}

/// Cancels all active email reminders for a booking
pub async fn cancel_reminders_for_booking(
    booking_uid: &str,
    ctx: &Context,
) -> anyhow::Result<usize> {
    super::cancel_reminders_for_booking(booking_uid, ReminderMethod::Email, ctx).await
}
