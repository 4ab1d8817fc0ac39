use super::{DeliveryTask, IDeliveryTaskClient};
use std::sync::Mutex;

/// Records every call instead of talking to a task runner. Used in tests to
/// assert on created and cancelled tasks.
pub struct InMemoryDeliveryTaskClient {
    created: Mutex<Vec<DeliveryTask>>,
    cancelled: Mutex<Vec<String>>,
}

impl InMemoryDeliveryTaskClient {
    pub fn new() -> Self {
        Self {
            created: Mutex::new(Vec::new()),
            cancelled: Mutex::new(Vec::new()),
        }
    }

    pub fn created_tasks(&self) -> Vec<DeliveryTask> {
        self.created.lock().unwrap().clone()
    }

    pub fn cancelled_references(&self) -> Vec<String> {
        self.cancelled.lock().unwrap().clone()
    }
}

impl Default for InMemoryDeliveryTaskClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IDeliveryTaskClient for InMemoryDeliveryTaskClient {
    async fn create(&self, task: &DeliveryTask) -> anyhow::Result<()> {
        self.created.lock().unwrap().push(task.clone());
        Ok(())
    }

    async fn cancel(&self, reference_uid: &str) -> anyhow::Result<()> {
        self.cancelled.lock().unwrap().push(reference_uid.to_string());
        Ok(())
    }
}
