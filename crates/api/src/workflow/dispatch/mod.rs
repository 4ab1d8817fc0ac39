pub mod email;
pub mod sms;

use bookwell_workflows_domain::{CalendarEvent, ReminderMethod};
use bookwell_workflows_infra::Context;
use chrono_tz::Tz;

/// Locale and timezone used for rendering default to the primary attendee,
/// with the organizer as last resort for events without attendees.
fn rendering_context(event: &CalendarEvent) -> (&str, Tz) {
    match event.primary_attendee() {
        Some(attendee) => (attendee.locale.as_str(), attendee.timezone),
        None => (event.organizer.locale.as_str(), event.organizer.timezone),
    }
}

/// Cancels every active reminder of one channel for a booking. For each
/// record the pending delivery task is cancelled first (an error here aborts
/// the loop and is handled by the caller), then the record is marked
/// cancelled. Safe to call repeatedly: already cancelled records are not
/// returned by the lookup.
pub(crate) async fn cancel_reminders_for_booking(
    booking_uid: &str,
    method: ReminderMethod,
    ctx: &Context,
) -> anyhow::Result<usize> {
    let reminders = ctx
        .repos
        .reminders
        .find_active_by_booking(booking_uid, method)
        .await;

    let mut cancelled = 0;
    for reminder in reminders {
        if let Some(reference_uid) = &reminder.task_uid {
            ctx.delivery.cancel(reference_uid).await?;
        }
        ctx.repos.reminders.mark_cancelled(&reminder.id).await?;
        cancelled += 1;
    }
    Ok(cancelled)
}
