use super::{DeliveryTask, IDeliveryTaskClient};
use reqwest::Client;
use tracing::warn;

/// Task runner client speaking the runner's small HTTP api
pub struct HttpDeliveryTaskClient {
    base_url: String,
    client: Client,
}

impl HttpDeliveryTaskClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl IDeliveryTaskClient for HttpDeliveryTaskClient {
    async fn create(&self, task: &DeliveryTask) -> anyhow::Result<()> {
        let res = self
            .client
            .post(&format!("{}/tasks", self.base_url))
            .json(task)
            .send()
            .await?;

        if !res.status().is_success() {
            warn!(
                "Task runner rejected task for reminder {} with status: {}",
                task.reminder_id,
                res.status()
            );
            anyhow::bail!("Task runner responded with status: {}", res.status());
        }
        Ok(())
    }

    async fn cancel(&self, reference_uid: &str) -> anyhow::Result<()> {
        let res = self
            .client
            .delete(&format!("{}/tasks/{}", self.base_url, reference_uid))
            .send()
            .await?;

        // A task that already ran or was never created is fine to "cancel"
        if !res.status().is_success() && res.status() != reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("Task runner responded with status: {}", res.status());
        }
        Ok(())
    }
}
