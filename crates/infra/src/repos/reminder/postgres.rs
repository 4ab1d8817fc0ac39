use super::IReminderRepo;
use crate::repos::shared::repo::DeleteResult;
use bookwell_workflows_domain::{ReminderMethod, ReminderRecord, ID};
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    step_uid: Option<Uuid>,
    booking_uid: String,
    method: String,
    remind_at: i64,
    scheduled: bool,
    cancelled: bool,
    task_uid: Option<String>,
    seat_reference: Option<String>,
}

impl ReminderRaw {
    fn into_domain(self) -> anyhow::Result<ReminderRecord> {
        Ok(ReminderRecord {
            id: self.reminder_uid.into(),
            workflow_step_id: self.step_uid.map(|uid| uid.into()),
            booking_uid: self.booking_uid,
            method: self.method.parse()?,
            remind_at: self.remind_at,
            scheduled: self.scheduled,
            cancelled: self.cancelled,
            task_uid: self.task_uid,
            seat_reference: self.seat_reference,
        })
    }
}

fn into_domain_list(raws: Vec<ReminderRaw>) -> Vec<ReminderRecord> {
    raws.into_iter()
        .filter_map(|raw| match raw.into_domain() {
            Ok(reminder) => Some(reminder),
            Err(e) => {
                error!("Unable to read reminder row: {:?}", e);
                None
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &ReminderRecord) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO workflow_reminders
            (reminder_uid, step_uid, booking_uid, method, remind_at, scheduled,
             cancelled, task_uid, seat_reference)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(*reminder.id.inner_ref())
        .bind(reminder.workflow_step_id.as_ref().map(|id| *id.inner_ref()))
        .bind(&reminder.booking_uid)
        .bind(reminder.method.as_str())
        .bind(reminder.remind_at)
        .bind(reminder.scheduled)
        .bind(reminder.cancelled)
        .bind(reminder.task_uid.as_deref())
        .bind(reminder.seat_reference.as_deref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<ReminderRecord> {
        let raw: ReminderRaw = sqlx::query_as::<_, ReminderRaw>(
            "SELECT * FROM workflow_reminders WHERE reminder_uid = $1",
        )
        .bind(*reminder_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        .ok()?;

        match raw.into_domain() {
            Ok(reminder) => Some(reminder),
            Err(e) => {
                error!("Unable to read reminder {}: {:?}", reminder_id, e);
                None
            }
        }
    }

    async fn find_active_by_booking(
        &self,
        booking_uid: &str,
        method: ReminderMethod,
    ) -> Vec<ReminderRecord> {
        let raws: Vec<ReminderRaw> = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM workflow_reminders
            WHERE booking_uid = $1 AND method = $2
                AND scheduled = TRUE AND cancelled = FALSE
            "#,
        )
        .bind(booking_uid)
        .bind(method.as_str())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        into_domain_list(raws)
    }

    async fn find_by_steps(&self, step_ids: &[ID]) -> Vec<ReminderRecord> {
        let step_uids: Vec<Uuid> = step_ids.iter().map(|id| *id.inner_ref()).collect();
        let raws: Vec<ReminderRaw> = sqlx::query_as::<_, ReminderRaw>(
            "SELECT * FROM workflow_reminders WHERE step_uid = ANY($1)",
        )
        .bind(step_uids)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        into_domain_list(raws)
    }

    async fn mark_cancelled(&self, reminder_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE workflow_reminders
            SET cancelled = TRUE
            WHERE reminder_uid = $1
            "#,
        )
        .bind(*reminder_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_by_steps(&self, step_ids: &[ID]) -> anyhow::Result<DeleteResult> {
        let step_uids: Vec<Uuid> = step_ids.iter().map(|id| *id.inner_ref()).collect();
        let res = sqlx::query("DELETE FROM workflow_reminders WHERE step_uid = ANY($1)")
            .bind(step_uids)
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
