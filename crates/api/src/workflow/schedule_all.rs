use super::dispatch::{email, sms};
use crate::shared::usecase::UseCase;
use bookwell_workflows_domain::{
    CalendarEvent, ScheduleOutcome, ScheduleReport, SkipReason, StepReport, Workflow,
};
use bookwell_workflows_infra::Context;

/// Fans a booking snapshot out over every step of the given workflows and
/// aggregates the per-step outcomes. Steps are dispatched strictly in
/// workflow order then step order; one failing step never affects the next.
#[derive(Debug)]
pub struct ScheduleAllWorkflowRemindersUseCase {
    pub workflows: Vec<Workflow>,
    pub event: CalendarEvent,
    pub dry_run: bool,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleAllWorkflowRemindersUseCase {
    type Response = ScheduleReport;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleAllWorkflowReminders";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut report = ScheduleReport::default();

        for workflow in &self.workflows {
            for step in &workflow.steps {
                let outcome = if self.dry_run {
                    ScheduleOutcome::Skipped {
                        reason: SkipReason::DryRun,
                    }
                } else if !workflow.trigger.is_supported() {
                    ScheduleOutcome::Skipped {
                        reason: SkipReason::UnsupportedTrigger,
                    }
                } else if !step.action.is_supported() {
                    ScheduleOutcome::Skipped {
                        reason: SkipReason::UnsupportedAction,
                    }
                } else if step.action.is_email_action() {
                    email::schedule_reminder(workflow, step, &self.event, ctx).await
                } else {
                    sms::schedule_reminder(workflow, step, &self.event, ctx).await
                };

                report.add(StepReport {
                    workflow_id: workflow.id.clone(),
                    step_id: step.id.clone(),
                    outcome,
                });
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use crate::workflow::test_helpers::*;
    use bookwell_workflows_domain::{
        ReminderMethod, TimeUnit, WorkflowAction, WorkflowTrigger,
    };

    #[tokio::test]
    async fn new_event_email_host_is_scheduled_immediately() {
        let (ctx, delivery) = test_context(STATIC_NOW);
        let mut workflow = workflow_factory(WorkflowTrigger::NewEvent, None, None);
        workflow.steps = vec![step_factory(&workflow.id, WorkflowAction::EmailHost)];
        let event = event_factory();

        let usecase = ScheduleAllWorkflowRemindersUseCase {
            workflows: vec![workflow],
            event: event.clone(),
            dry_run: false,
        };
        let report = execute(usecase, &ctx).await.unwrap();

        assert_eq!(report.scheduled, 1);
        assert_eq!(report.failed, 0);
        assert_eq!(report.skipped, 0);

        let records = ctx
            .repos
            .reminders
            .find_active_by_booking(&event.booking_uid, ReminderMethod::Email)
            .await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].remind_at, STATIC_NOW);
        assert_eq!(delivery.created_tasks().len(), 1);
    }

    #[tokio::test]
    async fn pending_sms_verification_is_reported_as_failed() {
        let (ctx, _) = test_context(STATIC_NOW);
        let mut workflow = workflow_factory(
            WorkflowTrigger::BeforeEvent,
            Some(24),
            Some(TimeUnit::Hour),
        );
        let mut step = step_factory(&workflow.id, WorkflowAction::SmsAttendee);
        step.number_verification_pending = true;
        workflow.steps = vec![step];

        let usecase = ScheduleAllWorkflowRemindersUseCase {
            workflows: vec![workflow],
            event: event_factory(),
            dry_run: false,
        };
        let report = execute(usecase, &ctx).await.unwrap();

        assert_eq!(report.scheduled, 0);
        assert_eq!(report.failed, 1);
        assert_eq!(report.skipped, 0);
    }

    #[tokio::test]
    async fn unsupported_steps_are_skipped_not_failed() {
        let (ctx, delivery) = test_context(STATIC_NOW);
        let mut workflow = workflow_factory(WorkflowTrigger::NewEvent, None, None);
        workflow.steps = vec![
            step_factory(&workflow.id, WorkflowAction::WhatsappAttendee),
            step_factory(&workflow.id, WorkflowAction::EmailHost),
        ];

        let usecase = ScheduleAllWorkflowRemindersUseCase {
            workflows: vec![workflow],
            event: event_factory(),
            dry_run: false,
        };
        let report = execute(usecase, &ctx).await.unwrap();

        assert_eq!(report.scheduled, 1);
        assert_eq!(report.failed, 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(delivery.created_tasks().len(), 1);
    }

    #[tokio::test]
    async fn unsupported_triggers_skip_every_step() {
        let (ctx, delivery) = test_context(STATIC_NOW);
        let mut workflow = workflow_factory(WorkflowTrigger::BookingRequested, None, None);
        workflow.steps = vec![step_factory(&workflow.id, WorkflowAction::EmailHost)];

        let usecase = ScheduleAllWorkflowRemindersUseCase {
            workflows: vec![workflow],
            event: event_factory(),
            dry_run: false,
        };
        let report = execute(usecase, &ctx).await.unwrap();

        assert_eq!(report.scheduled, 0);
        assert_eq!(report.failed, 0);
        assert_eq!(report.skipped, 1);
        assert!(delivery.created_tasks().is_empty());
    }

    #[tokio::test]
    async fn dry_run_touches_nothing() {
        let (ctx, delivery) = test_context(STATIC_NOW);
        let mut workflow = workflow_factory(WorkflowTrigger::NewEvent, None, None);
        workflow.steps = vec![step_factory(&workflow.id, WorkflowAction::EmailHost)];
        let event = event_factory();

        let usecase = ScheduleAllWorkflowRemindersUseCase {
            workflows: vec![workflow],
            event: event.clone(),
            dry_run: true,
        };
        let report = execute(usecase, &ctx).await.unwrap();

        assert_eq!(report.scheduled, 0);
        assert_eq!(report.skipped, 1);
        assert!(delivery.created_tasks().is_empty());
        assert!(ctx
            .repos
            .reminders
            .find_active_by_booking(&event.booking_uid, ReminderMethod::Email)
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn one_failing_step_does_not_affect_the_next() {
        let (ctx, _) = test_context(STATIC_NOW);
        let mut workflow = workflow_factory(WorkflowTrigger::NewEvent, None, None);
        let mut broken = step_factory(&workflow.id, WorkflowAction::EmailAddress);
        broken.step_number = 1;
        let mut fine = step_factory(&workflow.id, WorkflowAction::EmailHost);
        fine.step_number = 2;
        workflow.steps = vec![broken, fine];

        let usecase = ScheduleAllWorkflowRemindersUseCase {
            workflows: vec![workflow],
            event: event_factory(),
            dry_run: false,
        };
        let report = execute(usecase, &ctx).await.unwrap();

        assert_eq!(report.failed, 1);
        assert_eq!(report.scheduled, 1);
        assert_eq!(report.results.len(), 2);
    }
}
