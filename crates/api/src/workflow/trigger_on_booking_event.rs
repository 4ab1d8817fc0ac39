use super::cancel_booking_reminders::CancelBookingRemindersUseCase;
use super::schedule_all::ScheduleAllWorkflowRemindersUseCase;
use crate::shared::usecase::{execute, UseCase};
use bookwell_workflows_domain::{
    triggers_for, BookingLifecycle, CalendarEvent, ScheduleReport, WorkflowOwner,
};
use bookwell_workflows_infra::Context;

/// Entry point for the booking lifecycle handlers: selects which of the
/// owner's workflows apply to the lifecycle state and dispatches their
/// steps. A reminder failure never fails the booking operation itself, the
/// returned report is for observability only.
#[derive(Debug)]
pub struct TriggerWorkflowsOnBookingEventUseCase {
    pub owner: WorkflowOwner,
    pub lifecycle: BookingLifecycle,
    pub event: CalendarEvent,
    pub dry_run: bool,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for TriggerWorkflowsOnBookingEventUseCase {
    type Response = ScheduleReport;

    type Error = UseCaseError;

    const NAME: &'static str = "TriggerWorkflowsOnBookingEvent";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if self.lifecycle == BookingLifecycle::Cancelled {
            // Reminders of a booking that no longer exists must not fire.
            // Sideeffect, ignore result
            let cancel = CancelBookingRemindersUseCase {
                booking_uid: self.event.booking_uid.clone(),
            };
            let _ = execute(cancel, ctx).await;
        }

        let triggers = triggers_for(self.lifecycle);
        if triggers.is_empty() {
            return Ok(ScheduleReport::default());
        }

        let workflows = match &self.owner {
            WorkflowOwner::User(user_id) => ctx.repos.workflows.find_by_user(user_id).await,
            WorkflowOwner::Team(team_id) => ctx.repos.workflows.find_by_team(team_id).await,
        };
        let applicable = workflows
            .into_iter()
            .filter(|w| triggers.contains(&w.trigger))
            .collect::<Vec<_>>();

        let schedule = ScheduleAllWorkflowRemindersUseCase {
            workflows: applicable,
            event: self.event.clone(),
            dry_run: self.dry_run,
        };
        match execute(schedule, ctx).await {
            Ok(report) => Ok(report),
            Err(e) => match e {},
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::workflow::test_helpers::*;
    use bookwell_workflows_domain::{
        ReminderMethod, ReminderRecord, TimeUnit, WorkflowAction, WorkflowTrigger,
    };

    async fn insert_workflow(
        ctx: &bookwell_workflows_infra::Context,
        owner: &WorkflowOwner,
        trigger: WorkflowTrigger,
        time: Option<i64>,
        time_unit: Option<TimeUnit>,
    ) {
        let mut workflow = workflow_factory(trigger, time, time_unit);
        workflow.owner = owner.clone();
        workflow.steps = vec![step_factory(&workflow.id, WorkflowAction::EmailHost)];
        ctx.repos.workflows.insert(&workflow).await.unwrap();
    }

    #[tokio::test]
    async fn unconfirmed_bookings_trigger_nothing() {
        let (ctx, delivery) = test_context(STATIC_NOW);
        let owner = WorkflowOwner::User(Default::default());
        insert_workflow(&ctx, &owner, WorkflowTrigger::NewEvent, None, None).await;

        let usecase = TriggerWorkflowsOnBookingEventUseCase {
            owner,
            lifecycle: BookingLifecycle::NewUnconfirmed,
            event: event_factory(),
            dry_run: false,
        };
        let report = execute(usecase, &ctx).await.unwrap();

        assert_eq!(report.results.len(), 0);
        assert!(delivery.created_tasks().is_empty());
    }

    #[tokio::test]
    async fn confirmed_first_booking_fires_new_event_workflows() {
        let (ctx, _) = test_context(STATIC_NOW);
        let owner = WorkflowOwner::User(Default::default());
        insert_workflow(&ctx, &owner, WorkflowTrigger::NewEvent, None, None).await;

        let usecase = TriggerWorkflowsOnBookingEventUseCase {
            owner,
            lifecycle: BookingLifecycle::NewConfirmed {
                first_in_series: true,
            },
            event: event_factory(),
            dry_run: false,
        };
        let report = execute(usecase, &ctx).await.unwrap();
        assert_eq!(report.scheduled, 1);
    }

    #[tokio::test]
    async fn later_recurring_slots_get_no_duplicate_new_event_notification() {
        let (ctx, _) = test_context(STATIC_NOW);
        let owner = WorkflowOwner::User(Default::default());
        insert_workflow(&ctx, &owner, WorkflowTrigger::NewEvent, None, None).await;
        insert_workflow(
            &ctx,
            &owner,
            WorkflowTrigger::BeforeEvent,
            Some(30),
            Some(TimeUnit::Minute),
        )
        .await;

        let usecase = TriggerWorkflowsOnBookingEventUseCase {
            owner,
            lifecycle: BookingLifecycle::NewConfirmed {
                first_in_series: false,
            },
            event: event_factory(),
            dry_run: false,
        };
        let report = execute(usecase, &ctx).await.unwrap();

        // Only the timed reminder fired
        assert_eq!(report.scheduled, 1);
        assert_eq!(report.results.len(), 1);
    }

    #[tokio::test]
    async fn reschedules_fire_reschedule_and_timed_workflows() {
        let (ctx, _) = test_context(STATIC_NOW);
        let owner = WorkflowOwner::Team(Default::default());
        insert_workflow(&ctx, &owner, WorkflowTrigger::RescheduleEvent, None, None).await;
        insert_workflow(
            &ctx,
            &owner,
            WorkflowTrigger::AfterEvent,
            Some(1),
            Some(TimeUnit::Hour),
        )
        .await;
        insert_workflow(&ctx, &owner, WorkflowTrigger::NewEvent, None, None).await;

        let usecase = TriggerWorkflowsOnBookingEventUseCase {
            owner,
            lifecycle: BookingLifecycle::Rescheduled,
            event: event_factory(),
            dry_run: false,
        };
        let report = execute(usecase, &ctx).await.unwrap();
        assert_eq!(report.scheduled, 2);
    }

    #[tokio::test]
    async fn cancellation_cancels_existing_reminders_then_fires_cancellation_workflows() {
        let (ctx, delivery) = test_context(STATIC_NOW);
        let owner = WorkflowOwner::User(Default::default());
        insert_workflow(&ctx, &owner, WorkflowTrigger::EventCancelled, None, None).await;

        let event = event_factory();
        ctx.repos
            .reminders
            .insert(&ReminderRecord {
                id: Default::default(),
                workflow_step_id: Some(Default::default()),
                booking_uid: event.booking_uid.clone(),
                method: ReminderMethod::Email,
                remind_at: event.start_ts - 1000 * 60 * 30,
                scheduled: true,
                cancelled: false,
                task_uid: Some("pending-task".into()),
                seat_reference: None,
            })
            .await
            .unwrap();

        let usecase = TriggerWorkflowsOnBookingEventUseCase {
            owner,
            lifecycle: BookingLifecycle::Cancelled,
            event: event.clone(),
            dry_run: false,
        };
        let report = execute(usecase, &ctx).await.unwrap();

        assert_eq!(report.scheduled, 1);
        assert_eq!(delivery.cancelled_references(), vec!["pending-task"]);

        // The only active reminder left is the freshly scheduled one
        let active = ctx
            .repos
            .reminders
            .find_active_by_booking(&event.booking_uid, ReminderMethod::Email)
            .await;
        assert_eq!(active.len(), 1);
        assert_ne!(active[0].task_uid.as_deref(), Some("pending-task"));
    }
}
