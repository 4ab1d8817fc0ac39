use crate::shared::usecase::UseCase;
use bookwell_workflows_domain::{Workflow, ID};
use bookwell_workflows_infra::Context;
use tracing::warn;

/// Deletes a workflow with its steps and reminders. Pending delivery tasks
/// of the reminders are cancelled best-effort before the rows go away.
#[derive(Debug)]
pub struct DeleteWorkflowUseCase {
    pub workflow_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteWorkflowUseCase {
    type Response = Workflow;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteWorkflow";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let workflow = ctx
            .repos
            .workflows
            .find(&self.workflow_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.workflow_id.clone()))?;

        let step_ids = workflow
            .steps
            .iter()
            .map(|s| s.id.clone())
            .collect::<Vec<_>>();

        for reminder in ctx.repos.reminders.find_by_steps(&step_ids).await {
            if reminder.cancelled || !reminder.scheduled {
                continue;
            }
            if let Some(reference_uid) = &reminder.task_uid {
                if let Err(e) = ctx.delivery.cancel(reference_uid).await {
                    warn!(
                        "Unable to cancel delivery task {} for deleted workflow: {}. Err: {:?}",
                        reference_uid, workflow.id, e
                    );
                }
            }
        }

        ctx.repos
            .reminders
            .delete_by_steps(&step_ids)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        ctx.repos
            .workflows
            .delete(&workflow.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(workflow)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use crate::workflow::test_helpers::*;
    use bookwell_workflows_domain::{
        ReminderMethod, ReminderRecord, WorkflowAction, WorkflowTrigger,
    };

    #[tokio::test]
    async fn deletes_workflow_reminders_and_pending_tasks() {
        let (ctx, delivery) = test_context(STATIC_NOW);
        let mut workflow = workflow_factory(WorkflowTrigger::NewEvent, None, None);
        workflow.steps = vec![step_factory(&workflow.id, WorkflowAction::EmailHost)];
        ctx.repos.workflows.insert(&workflow).await.unwrap();

        ctx.repos
            .reminders
            .insert(&ReminderRecord {
                id: Default::default(),
                workflow_step_id: Some(workflow.steps[0].id.clone()),
                booking_uid: "bkng_del".into(),
                method: ReminderMethod::Email,
                remind_at: STATIC_NOW + 1000,
                scheduled: true,
                cancelled: false,
                task_uid: Some("task-del".into()),
                seat_reference: None,
            })
            .await
            .unwrap();

        let deleted = execute(
            DeleteWorkflowUseCase {
                workflow_id: workflow.id.clone(),
            },
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(deleted.id, workflow.id);
        assert!(ctx.repos.workflows.find(&workflow.id).await.is_none());
        assert!(ctx
            .repos
            .reminders
            .find_by_steps(&[workflow.steps[0].id.clone()])
            .await
            .is_empty());
        assert_eq!(delivery.cancelled_references(), vec!["task-del"]);
    }

    #[tokio::test]
    async fn deleting_an_unknown_workflow_is_an_error() {
        let (ctx, _) = test_context(STATIC_NOW);
        let res = execute(
            DeleteWorkflowUseCase {
                workflow_id: ID::new(),
            },
            &ctx,
        )
        .await;
        assert!(matches!(res, Err(UseCaseError::NotFound(_))));
    }
}
