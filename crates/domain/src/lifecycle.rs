use crate::workflow::WorkflowTrigger;

/// The booking lifecycle states the notification subsystem reacts to.
/// Evaluated once per lifecycle event; nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BookingLifecycle {
    /// New booking that still awaits host confirmation
    NewUnconfirmed,
    /// New booking that is confirmed. `first_in_series` is true for an
    /// ordinary booking and for the first slot of a recurring series.
    NewConfirmed { first_in_series: bool },
    Rescheduled,
    Cancelled,
}

/// Which workflow triggers should fire for a lifecycle state.
///
/// Unconfirmed bookings fire nothing: new-event notifications are deferred
/// until confirmation. A reschedule re-anchors the timed reminders to the
/// new event times, so before/after workflows fire again. Subsequent slots
/// of a recurring series get their timed reminders but no duplicate
/// new-event notification.
pub fn triggers_for(lifecycle: BookingLifecycle) -> Vec<WorkflowTrigger> {
    match lifecycle {
        BookingLifecycle::NewUnconfirmed => Vec::new(),
        BookingLifecycle::NewConfirmed { first_in_series } => {
            let mut triggers = vec![WorkflowTrigger::BeforeEvent, WorkflowTrigger::AfterEvent];
            if first_in_series {
                triggers.push(WorkflowTrigger::NewEvent);
            }
            triggers
        }
        BookingLifecycle::Rescheduled => vec![
            WorkflowTrigger::RescheduleEvent,
            WorkflowTrigger::BeforeEvent,
            WorkflowTrigger::AfterEvent,
        ],
        BookingLifecycle::Cancelled => vec![WorkflowTrigger::EventCancelled],
    }
}
