mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
use bookwell_workflows_domain::{ReminderMethod, ReminderRecord, ID};
pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &ReminderRecord) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<ReminderRecord>;
    /// All reminders for a booking and delivery method that are still
    /// scheduled and not cancelled
    async fn find_active_by_booking(
        &self,
        booking_uid: &str,
        method: ReminderMethod,
    ) -> Vec<ReminderRecord>;
    async fn find_by_steps(&self, step_ids: &[ID]) -> Vec<ReminderRecord>;
    async fn mark_cancelled(&self, reminder_id: &ID) -> anyhow::Result<()>;
    /// Removes every reminder belonging to one of the given steps. Used
    /// when a workflow or a whole team is deleted.
    async fn delete_by_steps(&self, step_ids: &[ID]) -> anyhow::Result<DeleteResult>;
}
