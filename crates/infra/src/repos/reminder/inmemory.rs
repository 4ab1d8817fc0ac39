use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use bookwell_workflows_domain::{ReminderMethod, ReminderRecord, ID};
use std::sync::Mutex;

pub struct InMemoryReminderRepo {
    reminders: Mutex<Vec<ReminderRecord>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &ReminderRecord) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<ReminderRecord> {
        find(reminder_id, &self.reminders)
    }

    async fn find_active_by_booking(
        &self,
        booking_uid: &str,
        method: ReminderMethod,
    ) -> Vec<ReminderRecord> {
        find_by(&self.reminders, |r| {
            r.booking_uid == booking_uid && r.method == method && r.scheduled && !r.cancelled
        })
    }

    async fn find_by_steps(&self, step_ids: &[ID]) -> Vec<ReminderRecord> {
        find_by(&self.reminders, |r| match &r.workflow_step_id {
            Some(step_id) => step_ids.contains(step_id),
            None => false,
        })
    }

    async fn mark_cancelled(&self, reminder_id: &ID) -> anyhow::Result<()> {
        update_many(
            &self.reminders,
            |r| r.id == *reminder_id,
            |r| r.cancelled = true,
        );
        Ok(())
    }

    async fn delete_by_steps(&self, step_ids: &[ID]) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.reminders, |r| match &r.workflow_step_id {
            Some(step_id) => step_ids.contains(step_id),
            None => false,
        }))
    }
}
