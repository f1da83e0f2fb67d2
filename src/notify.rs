//! Run outcome notifications.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use schedsync_fingerprint::ChangeStatus;

use crate::stage::StageError;

const TELEGRAM_API: &str = "https://api.telegram.org";

/// Delivers a short text message to the people following the schedule.
pub trait Notifier {
    /// Sends `text`.
    fn send(&self, text: &str) -> Result<()>;
}

/// Sends `text`, logging instead of failing when delivery breaks.
pub fn deliver(notifier: &dyn Notifier, text: &str) {
    if let Err(e) = notifier.send(text) {
        warn!(error = %format!("{e:#}"), "notification delivery failed");
    }
}

/// Writes messages to the log only.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, text: &str) -> Result<()> {
        info!(message = text, "notification");
        Ok(())
    }
}

/// Telegram Bot API `sendMessage` client.
pub struct TelegramNotifier {
    token: String,
    chat_id: String,
    api_base: String,
    client: reqwest::blocking::Client,
}

impl TelegramNotifier {
    /// Builds a notifier from a bot token and chat id.
    ///
    /// Returns `Ok(None)` if either is missing or blank.
    pub fn from_credentials(
        token: Option<String>,
        chat_id: Option<String>,
        timeout: Duration,
    ) -> Result<Option<Self>> {
        let (Some(token), Some(chat_id)) = (non_blank(token), non_blank(chat_id)) else {
            return Ok(None);
        };
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Some(Self {
            token,
            chat_id,
            api_base: TELEGRAM_API.to_string(),
            client,
        }))
    }

    /// Points the client at another Bot API server.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }
}

impl Notifier for TelegramNotifier {
    fn send(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let body = serde_json::json!({ "chat_id": self.chat_id, "text": text });
        // The URL embeds the token; keep it out of error messages.
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| anyhow::anyhow!("telegram request failed: {}", e.without_url()))?;
        let status = response.status();
        if !status.is_success() {
            bail!("telegram returned HTTP {}", status.as_u16());
        }
        debug!(chat_id = %self.chat_id, "telegram message sent");
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Chooses the notifier for this run.
///
/// Telegram credentials come from `TELEGRAM_BOT_TOKEN` and
/// `TELEGRAM_CHAT_ID`; without them, or when disabled, messages are only
/// logged.
pub fn build(enabled: bool, timeout: Duration) -> Box<dyn Notifier> {
    if !enabled {
        debug!("notifications disabled");
        return Box::new(LogNotifier);
    }
    let token = std::env::var("TELEGRAM_BOT_TOKEN").ok();
    let chat_id = std::env::var("TELEGRAM_CHAT_ID").ok();
    match TelegramNotifier::from_credentials(token, chat_id, timeout) {
        Ok(Some(telegram)) => Box::new(telegram),
        Ok(None) => {
            debug!("telegram credentials absent; logging notifications");
            Box::new(LogNotifier)
        }
        Err(e) => {
            warn!(error = %format!("{e:#}"), "telegram notifier unavailable; logging notifications");
            Box::new(LogNotifier)
        }
    }
}

/// Message announcing a new or changed schedule.
pub fn success_message(group: &str, n_entries: usize, source: &str, status: ChangeStatus) -> String {
    let headline = match status {
        ChangeStatus::FirstRun => "Расписание загружено!",
        ChangeStatus::Changed | ChangeStatus::Unchanged => "Расписание обновлено!",
    };
    format!("{headline} Группа: {group}\nЗанятий: {n_entries}\nИсточник: {source}")
}

/// Message reporting a failed run.
pub fn failure_message(group: &str, err: &StageError) -> String {
    format!("Ошибка обновления расписания ({group})\n{err}")
}
