use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base url of the task runner that performs the actual message
    /// delivery at the scheduled time
    pub delivery_task_url: String,
}

impl Config {
    pub fn new() -> Self {
        let delivery_task_url = match std::env::var("DELIVERY_TASK_URL") {
            Ok(url) => url,
            Err(_) => {
                let default_url = "http://localhost:9090/api/v1";
                info!(
                    "Did not find DELIVERY_TASK_URL environment variable. Using default: {}",
                    default_url
                );
                default_url.to_string()
            }
        };
        Self { delivery_task_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Credentials for the SMS provider. All three must be present for SMS
/// dispatch to be attempted at all.
#[derive(Debug, Clone)]
pub struct SmsCredentials {
    pub account_sid: String,
    pub auth_token: String,
    pub messaging_service_sid: String,
}

impl SmsCredentials {
    /// Looked up from the environment on every dispatch call, not cached at
    /// startup. A missing credential makes the individual dispatch fail, it
    /// never prevents the process from booting.
    pub fn from_env() -> Option<Self> {
        let account_sid = non_empty_var("TWILIO_ACCOUNT_SID")?;
        let auth_token = non_empty_var("TWILIO_AUTH_TOKEN")?;
        let messaging_service_sid = non_empty_var("TWILIO_MESSAGING_SERVICE_SID")?;
        Some(Self {
            account_sid,
            auth_token,
            messaging_service_sid,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
