mod shared;
mod workflow;

pub use shared::usecase::{execute, UseCase};
pub use workflow::{
    dispatch, CancelBookingRemindersUseCase, CancelledBookingReminders, CreateWorkflowUseCase,
    DeleteWorkflowUseCase, GetWorkflowUseCase, ListWorkflowsUseCase, NewWorkflowStep,
    PurgeTeamWorkflowRemindersUseCase, ScheduleAllWorkflowRemindersUseCase,
    TriggerWorkflowsOnBookingEventUseCase,
};
