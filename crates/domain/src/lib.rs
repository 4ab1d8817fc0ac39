mod event;
mod lifecycle;
mod reminder;
mod scheduled_date;
mod scheduling;
mod shared;
pub mod templates;
mod workflow;

pub use event::{Attendee, CalendarEvent, Organizer};
pub use lifecycle::{triggers_for, BookingLifecycle};
pub use reminder::{ReminderMethod, ReminderRecord};
pub use scheduled_date::scheduled_date;
pub use scheduling::{ScheduleOutcome, ScheduleReport, SkipReason, StepReport};
pub use shared::entity::{Entity, ID};
pub use workflow::{
    InvalidEnumValueError, TimeUnit, Workflow, WorkflowAction, WorkflowOwner, WorkflowStep,
    WorkflowTrigger,
};
