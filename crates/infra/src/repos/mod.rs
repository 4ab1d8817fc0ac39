mod reminder;
mod shared;
mod workflow;

pub use reminder::{IReminderRepo, InMemoryReminderRepo, PostgresReminderRepo};
pub use shared::repo::DeleteResult;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
pub use workflow::{IWorkflowRepo, InMemoryWorkflowRepo, PostgresWorkflowRepo};

#[derive(Clone)]
pub struct Repos {
    pub workflows: Arc<dyn IWorkflowRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            workflows: Arc::new(PostgresWorkflowRepo::new(pool.clone())),
            reminders: Arc::new(PostgresReminderRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            workflows: Arc::new(InMemoryWorkflowRepo::new()),
            reminders: Arc::new(InMemoryReminderRepo::new()),
        }
    }
}
