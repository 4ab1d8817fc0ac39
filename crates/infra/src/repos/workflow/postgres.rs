use super::IWorkflowRepo;
use bookwell_workflows_domain::{Workflow, WorkflowOwner, WorkflowStep, ID};
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

pub struct PostgresWorkflowRepo {
    pool: PgPool,
}

impl PostgresWorkflowRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_steps(&self, workflow_uid: Uuid) -> anyhow::Result<Vec<WorkflowStep>> {
        let steps: Vec<WorkflowStepRaw> = sqlx::query_as::<_, WorkflowStepRaw>(
            r#"
            SELECT * FROM workflow_steps
            WHERE workflow_uid = $1
            ORDER BY step_number ASC
            "#,
        )
        .bind(workflow_uid)
        .fetch_all(&self.pool)
        .await?;

        steps.into_iter().map(|s| s.into_domain()).collect()
    }

    async fn assemble(&self, raw: WorkflowRaw) -> anyhow::Result<Workflow> {
        let steps = self.find_steps(raw.workflow_uid).await?;
        raw.into_domain(steps)
    }

    async fn insert_step(&self, step: &WorkflowStep) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO workflow_steps
            (step_uid, workflow_uid, step_number, action, send_to, email_subject,
             reminder_body, sender, number_verification_pending, number_required)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(*step.id.inner_ref())
        .bind(*step.workflow_id.inner_ref())
        .bind(step.step_number)
        .bind(step.action.as_str())
        .bind(step.send_to.as_deref())
        .bind(step.email_subject.as_deref())
        .bind(step.reminder_body.as_deref())
        .bind(step.sender.as_deref())
        .bind(step.number_verification_pending)
        .bind(step.number_required)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct WorkflowRaw {
    workflow_uid: Uuid,
    name: String,
    user_uid: Option<Uuid>,
    team_uid: Option<Uuid>,
    trigger: String,
    time: Option<i64>,
    time_unit: Option<String>,
}

impl WorkflowRaw {
    fn into_domain(self, steps: Vec<WorkflowStep>) -> anyhow::Result<Workflow> {
        let owner = match (self.user_uid, self.team_uid) {
            (Some(user_uid), None) => WorkflowOwner::User(user_uid.into()),
            (None, Some(team_uid)) => WorkflowOwner::Team(team_uid.into()),
            _ => anyhow::bail!(
                "Workflow {} must be owned by exactly one user or team",
                self.workflow_uid
            ),
        };
        Ok(Workflow {
            id: self.workflow_uid.into(),
            name: self.name,
            owner,
            trigger: self.trigger.parse()?,
            time: self.time,
            time_unit: self.time_unit.as_deref().map(str::parse).transpose()?,
            steps,
        })
    }
}

#[derive(Debug, FromRow)]
struct WorkflowStepRaw {
    step_uid: Uuid,
    workflow_uid: Uuid,
    step_number: i64,
    action: String,
    send_to: Option<String>,
    email_subject: Option<String>,
    reminder_body: Option<String>,
    sender: Option<String>,
    number_verification_pending: bool,
    number_required: bool,
}

impl WorkflowStepRaw {
    fn into_domain(self) -> anyhow::Result<WorkflowStep> {
        Ok(WorkflowStep {
            id: self.step_uid.into(),
            workflow_id: self.workflow_uid.into(),
            step_number: self.step_number,
            action: self.action.parse()?,
            send_to: self.send_to,
            email_subject: self.email_subject,
            reminder_body: self.reminder_body,
            sender: self.sender,
            number_verification_pending: self.number_verification_pending,
            number_required: self.number_required,
        })
    }
}

fn owner_columns(owner: &WorkflowOwner) -> (Option<Uuid>, Option<Uuid>) {
    match owner {
        WorkflowOwner::User(user_id) => (Some(*user_id.inner_ref()), None),
        WorkflowOwner::Team(team_id) => (None, Some(*team_id.inner_ref())),
    }
}

#[async_trait::async_trait]
impl IWorkflowRepo for PostgresWorkflowRepo {
    async fn insert(&self, workflow: &Workflow) -> anyhow::Result<()> {
        let (user_uid, team_uid) = owner_columns(&workflow.owner);
        sqlx::query(
            r#"
            INSERT INTO workflows
            (workflow_uid, name, user_uid, team_uid, trigger, time, time_unit)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(*workflow.id.inner_ref())
        .bind(&workflow.name)
        .bind(user_uid)
        .bind(team_uid)
        .bind(workflow.trigger.as_str())
        .bind(workflow.time)
        .bind(workflow.time_unit.map(|u| u.as_str()))
        .execute(&self.pool)
        .await?;

        for step in &workflow.steps {
            self.insert_step(step).await?;
        }
        Ok(())
    }

    async fn save(&self, workflow: &Workflow) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE workflows
            SET name = $2,
            trigger = $3,
            time = $4,
            time_unit = $5
            WHERE workflow_uid = $1
            "#,
        )
        .bind(*workflow.id.inner_ref())
        .bind(&workflow.name)
        .bind(workflow.trigger.as_str())
        .bind(workflow.time)
        .bind(workflow.time_unit.map(|u| u.as_str()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to update workflow: {:?}", e);
            e
        })?;

        // Steps are replaced wholesale, their ordering is part of the update
        sqlx::query("DELETE FROM workflow_steps WHERE workflow_uid = $1")
            .bind(*workflow.id.inner_ref())
            .execute(&self.pool)
            .await?;
        for step in &workflow.steps {
            self.insert_step(step).await?;
        }
        Ok(())
    }

    async fn find(&self, workflow_id: &ID) -> Option<Workflow> {
        let raw: WorkflowRaw =
            sqlx::query_as::<_, WorkflowRaw>("SELECT * FROM workflows WHERE workflow_uid = $1")
                .bind(*workflow_id.inner_ref())
                .fetch_one(&self.pool)
                .await
                .ok()?;

        match self.assemble(raw).await {
            Ok(workflow) => Some(workflow),
            Err(e) => {
                error!("Unable to assemble workflow {}: {:?}", workflow_id, e);
                None
            }
        }
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Workflow> {
        let raws: Vec<WorkflowRaw> =
            sqlx::query_as::<_, WorkflowRaw>("SELECT * FROM workflows WHERE user_uid = $1")
                .bind(*user_id.inner_ref())
                .fetch_all(&self.pool)
                .await
                .unwrap_or_default();

        let mut workflows = Vec::with_capacity(raws.len());
        for raw in raws {
            match self.assemble(raw).await {
                Ok(workflow) => workflows.push(workflow),
                Err(e) => error!("Unable to assemble workflow for user {}: {:?}", user_id, e),
            }
        }
        workflows
    }

    async fn find_by_team(&self, team_id: &ID) -> Vec<Workflow> {
        let raws: Vec<WorkflowRaw> =
            sqlx::query_as::<_, WorkflowRaw>("SELECT * FROM workflows WHERE team_uid = $1")
                .bind(*team_id.inner_ref())
                .fetch_all(&self.pool)
                .await
                .unwrap_or_default();

        let mut workflows = Vec::with_capacity(raws.len());
        for raw in raws {
            match self.assemble(raw).await {
                Ok(workflow) => workflows.push(workflow),
                Err(e) => error!("Unable to assemble workflow for team {}: {:?}", team_id, e),
            }
        }
        workflows
    }

    async fn delete(&self, workflow_id: &ID) -> anyhow::Result<()> {
        // workflow_steps rows cascade
        sqlx::query("DELETE FROM workflows WHERE workflow_uid = $1")
            .bind(*workflow_id.inner_ref())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
