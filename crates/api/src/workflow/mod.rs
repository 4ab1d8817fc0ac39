mod cancel_booking_reminders;
mod create_workflow;
mod delete_workflow;
pub mod dispatch;
mod get_workflow;
mod list_workflows;
mod purge_team_reminders;
mod schedule_all;
#[cfg(test)]
pub(crate) mod test_helpers;
mod trigger_on_booking_event;

pub use cancel_booking_reminders::{CancelBookingRemindersUseCase, CancelledBookingReminders};
pub use create_workflow::{CreateWorkflowUseCase, NewWorkflowStep};
pub use delete_workflow::DeleteWorkflowUseCase;
pub use get_workflow::GetWorkflowUseCase;
pub use list_workflows::ListWorkflowsUseCase;
pub use purge_team_reminders::PurgeTeamWorkflowRemindersUseCase;
pub use schedule_all::ScheduleAllWorkflowRemindersUseCase;
pub use trigger_on_booking_event::TriggerWorkflowsOnBookingEventUseCase;
