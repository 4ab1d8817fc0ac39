use crate::workflow::{TimeUnit, WorkflowTrigger};

/// Computes the absolute delivery timestamp (UTC epoch millis) for a
/// reminder.
///
/// Immediate triggers resolve to `now`. `BeforeEvent` subtracts the offset
/// from the event start, `AfterEvent` adds it to the event end. Returns
/// `None` when the trigger cannot be scheduled or a relative trigger is
/// missing its offset.
///
/// All inputs are assumed to share one reference frame; the offset is raw
/// duration arithmetic without DST normalization.
pub fn scheduled_date(
    trigger: WorkflowTrigger,
    time: Option<i64>,
    time_unit: Option<TimeUnit>,
    start_ts: i64,
    end_ts: i64,
    now: i64,
) -> Option<i64> {
    match trigger {
        WorkflowTrigger::NewEvent
        | WorkflowTrigger::RescheduleEvent
        | WorkflowTrigger::EventCancelled => Some(now),
        WorkflowTrigger::BeforeEvent => offset_millis(time, time_unit).map(|o| start_ts - o),
        WorkflowTrigger::AfterEvent => offset_millis(time, time_unit).map(|o| end_ts + o),
        WorkflowTrigger::BookingRequested | WorkflowTrigger::BookingRejected => None,
    }
}

fn offset_millis(time: Option<i64>, time_unit: Option<TimeUnit>) -> Option<i64> {
    Some(time_unit?.to_duration(time?).num_milliseconds())
}

#[cfg(test)]
mod test {
    use super::*;

    const START: i64 = 1754553600000; // 2025-08-07T08:00:00Z
    const END: i64 = START + 1000 * 60 * 60;
    const NOW: i64 = START - 1000 * 60 * 60 * 48;

    #[test]
    fn before_event_subtracts_offset_from_start() {
        let res = scheduled_date(
            WorkflowTrigger::BeforeEvent,
            Some(30),
            Some(TimeUnit::Minute),
            START,
            END,
            NOW,
        );
        assert_eq!(res, Some(START - 30 * 60 * 1000));
    }

    #[test]
    fn after_event_adds_offset_to_end() {
        let res = scheduled_date(
            WorkflowTrigger::AfterEvent,
            Some(2),
            Some(TimeUnit::Hour),
            START,
            END,
            NOW,
        );
        assert_eq!(res, Some(END + 2 * 60 * 60 * 1000));
    }

    #[test]
    fn day_offsets_are_calendar_safe() {
        let res = scheduled_date(
            WorkflowTrigger::BeforeEvent,
            Some(1),
            Some(TimeUnit::Day),
            START,
            END,
            NOW,
        );
        assert_eq!(res, Some(START - 24 * 60 * 60 * 1000));
    }

    #[test]
    fn immediate_triggers_resolve_to_now() {
        for trigger in &[
            WorkflowTrigger::NewEvent,
            WorkflowTrigger::RescheduleEvent,
            WorkflowTrigger::EventCancelled,
        ] {
            assert_eq!(scheduled_date(*trigger, None, None, START, END, NOW), Some(NOW));
        }
    }

    #[test]
    fn missing_offset_yields_none() {
        assert_eq!(
            scheduled_date(WorkflowTrigger::BeforeEvent, None, Some(TimeUnit::Minute), START, END, NOW),
            None
        );
        assert_eq!(
            scheduled_date(WorkflowTrigger::BeforeEvent, Some(30), None, START, END, NOW),
            None
        );
        assert_eq!(
            scheduled_date(WorkflowTrigger::AfterEvent, None, None, START, END, NOW),
            None
        );
    }

    #[test]
    fn unsupported_triggers_yield_none() {
        assert_eq!(
            scheduled_date(WorkflowTrigger::BookingRequested, Some(1), Some(TimeUnit::Hour), START, END, NOW),
            None
        );
        assert_eq!(
            scheduled_date(WorkflowTrigger::BookingRejected, None, None, START, END, NOW),
            None
        );
    }

    #[test]
    fn negative_offsets_flip_the_direction() {
        let res = scheduled_date(
            WorkflowTrigger::BeforeEvent,
            Some(-15),
            Some(TimeUnit::Minute),
            START,
            END,
            NOW,
        );
        assert_eq!(res, Some(START + 15 * 60 * 1000));
    }
}
