use crate::shared::usecase::UseCase;
use bookwell_workflows_domain::{Workflow, WorkflowOwner};
use bookwell_workflows_infra::Context;

#[derive(Debug)]
pub struct ListWorkflowsUseCase {
    pub owner: WorkflowOwner,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for ListWorkflowsUseCase {
    type Response = Vec<Workflow>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListWorkflows";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let workflows = match &self.owner {
            WorkflowOwner::User(user_id) => ctx.repos.workflows.find_by_user(user_id).await,
            WorkflowOwner::Team(team_id) => ctx.repos.workflows.find_by_team(team_id).await,
        };
        Ok(workflows)
    }
}
