use crate::shared::usecase::UseCase;
use bookwell_workflows_domain::ID;
use bookwell_workflows_infra::{Context, DeleteResult};
use tracing::info;

/// Cascade cleanup when a team is removed: every reminder whose step
/// belongs to one of the team's workflows is deleted in bulk. Pending
/// delivery tasks are left to expire against the deleted records.
#[derive(Debug)]
pub struct PurgeTeamWorkflowRemindersUseCase {
    pub team_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for PurgeTeamWorkflowRemindersUseCase {
    type Response = DeleteResult;

    type Error = UseCaseError;

    const NAME: &'static str = "PurgeTeamWorkflowReminders";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let workflows = ctx.repos.workflows.find_by_team(&self.team_id).await;
        let step_ids = workflows
            .iter()
            .flat_map(|w| w.steps.iter().map(|s| s.id.clone()))
            .collect::<Vec<_>>();

        let res = ctx
            .repos
            .reminders
            .delete_by_steps(&step_ids)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        info!(
            "Deleted {} reminders for team: {}",
            res.deleted_count, self.team_id
        );
        Ok(res)
    }
}
