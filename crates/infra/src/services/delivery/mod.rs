mod http;
mod inmemory;

use bookwell_workflows_domain::ID;
pub use http::HttpDeliveryTaskClient;
pub use inmemory::InMemoryDeliveryTaskClient;
use serde::{Deserialize, Serialize};

/// A deferred delivery handed to the external task runner. The runner
/// re-loads the `ReminderRecord` at `scheduled_at`, checks that it has not
/// been cancelled and performs the actual send; this subsystem never talks
/// to an email or SMS provider directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryTask {
    pub reminder_id: ID,
    pub payload: DeliveryPayload,
    /// Target delivery time in UTC epoch millis
    pub scheduled_at: i64,
    /// Correlation id used to cancel the pending task
    pub reference_uid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DeliveryPayload {
    #[serde(rename_all = "camelCase")]
    SendEmailReminder {
        recipient: String,
        subject: String,
        body: String,
    },
    #[serde(rename_all = "camelCase")]
    SendSmsReminder {
        recipient: String,
        message: String,
        sender: Option<String>,
    },
}

#[async_trait::async_trait]
pub trait IDeliveryTaskClient: Send + Sync {
    async fn create(&self, task: &DeliveryTask) -> anyhow::Result<()>;
    /// Best-effort cancellation of a pending task
    async fn cancel(&self, reference_uid: &str) -> anyhow::Result<()>;
}
