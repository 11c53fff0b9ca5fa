// src/config/options.rs
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// POST to the webhook from `WEBHOOK_URL`.
    Webhook,
    /// Print the payload JSON to stdout.
    DryRun,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub region: String,
    pub delivery: Delivery,
    pub help: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            region: s!(DEFAULT_REGION),
            delivery: Delivery::Webhook,
            help: false,
        }
    }
}

impl RunOptions {
    pub fn dry_run(&self) -> bool {
        self.delivery == Delivery::DryRun
    }

    /// Alert text for the match case, with the optional mention from the environment.
    pub fn alert_content(&self) -> String {
        alert_with_mention(std::env::var(MENTION_ENV).ok().as_deref())
    }
}

pub fn alert_with_mention(mention: Option<&str>) -> String {
    match mention.map(str::trim).filter(|m| !m.is_empty()) {
        Some(m) => join!(m, " ", ALERT_CONTENT),
        None => s!(ALERT_CONTENT),
    }
}
