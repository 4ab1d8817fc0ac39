use super::IWorkflowRepo;
use crate::repos::shared::inmemory_repo::*;
use bookwell_workflows_domain::{Workflow, WorkflowOwner, ID};
use std::sync::Mutex;

pub struct InMemoryWorkflowRepo {
    workflows: Mutex<Vec<Workflow>>,
}

impl InMemoryWorkflowRepo {
    pub fn new() -> Self {
        Self {
            workflows: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IWorkflowRepo for InMemoryWorkflowRepo {
    async fn insert(&self, workflow: &Workflow) -> anyhow::Result<()> {
        insert(workflow, &self.workflows);
        Ok(())
    }

    async fn save(&self, workflow: &Workflow) -> anyhow::Result<()> {
        save(workflow, &self.workflows);
        Ok(())
    }

    async fn find(&self, workflow_id: &ID) -> Option<Workflow> {
        find(workflow_id, &self.workflows)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Workflow> {
        find_by(&self.workflows, |w| {
            w.owner == WorkflowOwner::User(user_id.clone())
        })
    }

    async fn find_by_team(&self, team_id: &ID) -> Vec<Workflow> {
        find_by(&self.workflows, |w| {
            w.owner == WorkflowOwner::Team(team_id.clone())
        })
    }

    async fn delete(&self, workflow_id: &ID) -> anyhow::Result<()> {
        delete_by(&self.workflows, |w| w.id == *workflow_id);
        Ok(())
    }
}
