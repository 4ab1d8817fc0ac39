use crate::shared::usecase::UseCase;
use bookwell_workflows_domain::{Workflow, ID};
use bookwell_workflows_infra::Context;

#[derive(Debug)]
pub struct GetWorkflowUseCase {
    pub workflow_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetWorkflowUseCase {
    type Response = Workflow;

    type Error = UseCaseError;

    const NAME: &'static str = "GetWorkflow";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .workflows
            .find(&self.workflow_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.workflow_id.clone()))
    }
}
