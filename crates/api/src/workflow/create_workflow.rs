use crate::shared::usecase::UseCase;
use bookwell_workflows_domain::{
    TimeUnit, Workflow, WorkflowAction, WorkflowOwner, WorkflowStep, WorkflowTrigger,
};
use bookwell_workflows_infra::Context;

#[derive(Debug)]
pub struct CreateWorkflowUseCase {
    pub name: String,
    pub owner: WorkflowOwner,
    pub trigger: WorkflowTrigger,
    pub time: Option<i64>,
    pub time_unit: Option<TimeUnit>,
    pub steps: Vec<NewWorkflowStep>,
}

#[derive(Debug, Clone)]
pub struct NewWorkflowStep {
    pub action: WorkflowAction,
    pub send_to: Option<String>,
    pub email_subject: Option<String>,
    pub reminder_body: Option<String>,
    pub sender: Option<String>,
    pub number_verification_pending: bool,
    pub number_required: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    UnsupportedTrigger(WorkflowTrigger),
    UnsupportedAction(WorkflowAction),
    InvalidTimeConfiguration,
    MissingCustomRecipient { step_number: i64 },
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateWorkflowUseCase {
    type Response = Workflow;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateWorkflow";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if !self.trigger.is_supported() {
            return Err(UseCaseError::UnsupportedTrigger(self.trigger));
        }

        let mut workflow = Workflow {
            id: Default::default(),
            name: self.name.clone(),
            owner: self.owner.clone(),
            trigger: self.trigger,
            time: self.time,
            time_unit: self.time_unit,
            steps: Vec::new(),
        };

        if !workflow.has_valid_time_offset() {
            return Err(UseCaseError::InvalidTimeConfiguration);
        }

        for (index, step) in self.steps.iter().enumerate() {
            let step_number = index as i64 + 1;
            if !step.action.is_supported() {
                return Err(UseCaseError::UnsupportedAction(step.action));
            }
            let has_send_to = step
                .send_to
                .as_deref()
                .map(|s| !s.is_empty())
                .unwrap_or(false);
            if step.action.requires_custom_recipient() && !has_send_to {
                return Err(UseCaseError::MissingCustomRecipient { step_number });
            }
            workflow.steps.push(WorkflowStep {
                id: Default::default(),
                workflow_id: workflow.id.clone(),
                step_number,
                action: step.action,
                send_to: step.send_to.clone(),
                email_subject: step.email_subject.clone(),
                reminder_body: step.reminder_body.clone(),
                sender: step.sender.clone(),
                number_verification_pending: step.number_verification_pending,
                number_required: step.number_required,
            });
        }

        ctx.repos
            .workflows
            .insert(&workflow)
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

    fn step_input(action: WorkflowAction) -> NewWorkflowStep {
        NewWorkflowStep {
            action,
            send_to: None,
            email_subject: None,
            reminder_body: None,
            sender: None,
            number_verification_pending: false,
            number_required: false,
        }
    }

    fn usecase_factory() -> CreateWorkflowUseCase {
        CreateWorkflowUseCase {
            name: "24h reminder".into(),
            owner: WorkflowOwner::User(Default::default()),
            trigger: WorkflowTrigger::BeforeEvent,
            time: Some(24),
            time_unit: Some(TimeUnit::Hour),
            steps: vec![step_input(WorkflowAction::EmailAttendee)],
        }
    }

    #[tokio::test]
    async fn creates_and_persists_a_workflow() {
        let (ctx, _) = test_context(STATIC_NOW);
        let workflow = execute(usecase_factory(), &ctx).await.unwrap();

        let found = ctx.repos.workflows.find(&workflow.id).await.unwrap();
        assert_eq!(found.name, "24h reminder");
        assert_eq!(found.steps.len(), 1);
        assert_eq!(found.steps[0].step_number, 1);
    }

    #[tokio::test]
    async fn rejects_a_lone_time_offset_field() {
        let (ctx, _) = test_context(STATIC_NOW);
        let mut usecase = usecase_factory();
        usecase.time_unit = None;

        let res = execute(usecase, &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::InvalidTimeConfiguration);
    }

    #[tokio::test]
    async fn rejects_timed_triggers_without_an_offset() {
        let (ctx, _) = test_context(STATIC_NOW);
        let mut usecase = usecase_factory();
        usecase.time = None;
        usecase.time_unit = None;

        let res = execute(usecase, &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::InvalidTimeConfiguration);
    }

    #[tokio::test]
    async fn rejects_address_actions_without_a_recipient() {
        let (ctx, _) = test_context(STATIC_NOW);
        let mut usecase = usecase_factory();
        usecase.steps = vec![step_input(WorkflowAction::EmailAddress)];

        let res = execute(usecase, &ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::MissingCustomRecipient { step_number: 1 }
        );
    }

    #[tokio::test]
    async fn rejects_unsupported_triggers_and_actions() {
        let (ctx, _) = test_context(STATIC_NOW);
        let mut usecase = usecase_factory();
        usecase.trigger = WorkflowTrigger::BookingRequested;
        usecase.time = None;
        usecase.time_unit = None;
        let res = execute(usecase, &ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::UnsupportedTrigger(WorkflowTrigger::BookingRequested)
        );

        let mut usecase = usecase_factory();
        usecase.steps = vec![step_input(WorkflowAction::WhatsappAttendee)];
        let res = execute(usecase, &ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::UnsupportedAction(WorkflowAction::WhatsappAttendee)
        );
    }
}
