use super::dispatch::{email, sms};
use crate::shared::usecase::UseCase;
use bookwell_workflows_infra::Context;
use tracing::error;

/// Cancels every active reminder of a booking across both channels. The two
/// channel cancellations run concurrently and both always run to
/// completion; an error from either surfaces only afterwards.
#[derive(Debug)]
pub struct CancelBookingRemindersUseCase {
    pub booking_uid: String,
}

#[derive(Debug, PartialEq)]
pub struct CancelledBookingReminders {
    pub email: usize,
    pub sms: usize,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CancelBookingRemindersUseCase {
    type Response = CancelledBookingReminders;

    type Error = UseCaseError;

    const NAME: &'static str = "CancelBookingReminders";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let (email_res, sms_res) = futures::join!(
            email::cancel_reminders_for_booking(&self.booking_uid, ctx),
            sms::cancel_reminders_for_booking(&self.booking_uid, ctx),
        );

        match (email_res, sms_res) {
            (Ok(email), Ok(sms)) => Ok(CancelledBookingReminders { email, sms }),
            (email_res, sms_res) => {
                if let Err(e) = email_res {
                    error!(
                        "Unable to cancel email reminders for booking: {}. Err: {:?}",
                        self.booking_uid, e
                    );
                }
                if let Err(e) = sms_res {
                    error!(
                        "Unable to cancel SMS reminders for booking: {}. Err: {:?}",
                        self.booking_uid, e
                    );
                }
                Err(UseCaseError::StorageError)
            }
        }
    }
}
