mod inmemory;
mod postgres;

use bookwell_workflows_domain::{Workflow, ID};
pub use inmemory::InMemoryWorkflowRepo;
pub use postgres::PostgresWorkflowRepo;

#[async_trait::async_trait]
pub trait IWorkflowRepo: Send + Sync {
    async fn insert(&self, workflow: &Workflow) -> anyhow::Result<()>;
    async fn save(&self, workflow: &Workflow) -> anyhow::Result<()>;
    async fn find(&self, workflow_id: &ID) -> Option<Workflow>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<Workflow>;
    async fn find_by_team(&self, team_id: &ID) -> Vec<Workflow>;
    /// Deletes the workflow and its steps
    async fn delete(&self, workflow_id: &ID) -> anyhow::Result<()>;
}
