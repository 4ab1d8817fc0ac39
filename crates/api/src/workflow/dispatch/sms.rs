use super::rendering_context;
use bookwell_workflows_domain::{
    scheduled_date,
    templates::{render_sms, TemplateLocale},
    CalendarEvent, ReminderMethod, ReminderRecord, ScheduleOutcome, SkipReason, Workflow,
    WorkflowAction, WorkflowStep,
};
use bookwell_workflows_infra::{Context, DeliveryPayload, DeliveryTask, SmsCredentials};
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum DispatchError {
    #[error("No recipient could be resolved for the step")]
    NoRecipient,
    #[error("The custom phone number is still pending verification")]
    VerificationPending,
    #[error("SMS channel is not configured, provider credentials are missing")]
    NotConfigured,
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

/// Schedules one SMS reminder for a (workflow, step) pair. Failures never
/// propagate to the caller, they are folded into the returned outcome.
pub async fn schedule_reminder(
    workflow: &Workflow,
    step: &WorkflowStep,
    event: &CalendarEvent,
    ctx: &Context,
) -> ScheduleOutcome {
    if !step.action.is_sms_action() {
        return ScheduleOutcome::Skipped {
            reason: SkipReason::WrongChannel,
        };
    }

    match try_schedule(workflow, step, event, ctx).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(
                "Unable to schedule SMS reminder for workflow: {} step: {}. Err: {:?}",
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
    let recipient = resolve_recipient(step, event)?;

    // Looked up on every call on purpose, see `SmsCredentials::from_env`
    if SmsCredentials::from_env().is_none() {
        return Err(DispatchError::NotConfigured);
    }

    let (locale_tag, timezone) = rendering_context(event);
    let message = render_sms(
        workflow.trigger,
        event,
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
        method: ReminderMethod::Sms,
        remind_at,
        scheduled: true,
        cancelled: false,
        task_uid: Some(reference_uid.clone()),
        seat_reference: event.seat_reference.clone(),
    };
    ctx.repos.reminders.insert(&reminder).await?;

    ctx.delivery
        .create(&DeliveryTask {
            reminder_id: reminder.id.clone(),
            payload: DeliveryPayload::SendSmsReminder {
                recipient,
                message,
                sender: step.sender.clone(),
            },
            scheduled_at: remind_at,
            reference_uid,
        })
        .await?;

    Ok(ScheduleOutcome::Scheduled {
        reminder_id: reminder.id,
    })
}

fn resolve_recipient(
    step: &WorkflowStep,
    event: &CalendarEvent,
) -> Result<String, DispatchError> {
    let send_to = step.send_to.clone().filter(|s| !s.is_empty());
    match step.action {
        WorkflowAction::SmsAttendee => {
            if step.number_verification_pending {
                return Err(DispatchError::VerificationPending);
            }
            send_to
                .or_else(|| {
                    event
                        .primary_attendee()
                        .and_then(|a| a.phone_number.clone())
                })
                .ok_or(DispatchError::NoRecipient)
        }
        WorkflowAction::SmsNumber => send_to.ok_or(DispatchError::NoRecipient),
        WorkflowAction::EmailHost
        | WorkflowAction::EmailAttendee
        | WorkflowAction::EmailAddress
        | WorkflowAction::WhatsappAttendee
        | WorkflowAction::WhatsappNumber => Err(DispatchError::NoRecipient),
    }
}

/// Cancels all active SMS reminders for a booking
pub async fn cancel_reminders_for_booking(
    booking_uid: &str,
    ctx: &Context,
) -> anyhow::Result<usize> {
    super::cancel_reminders_for_booking(booking_uid, ReminderMethod::Sms, ctx).await
}
