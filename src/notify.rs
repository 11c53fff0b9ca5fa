// src/notify.rs
//! Discord webhook message for a finished run.

use serde::Serialize;

use crate::config::consts::{EMBED_TITLE, NONE_FOUND_CONTENT, WEBHOOK_ENV};
use crate::core::net::post_json;
use crate::error::{Error, Result};
use crate::quest::WorldQuest;

/// Webhook message payload. `embeds` is left out entirely when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscordMessage {
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<DiscordEmbed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscordEmbed {
    pub title: String,
    pub fields: Vec<DiscordField>,
}

/// Key-value field for Discord embeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscordField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl DiscordField {
    fn inline(name: &str, value: String) -> Self {
        Self { name: s!(name), value, inline: true }
    }
}

/// Name, Zones, Until for one quest.
pub fn quest_fields(q: &WorldQuest) -> [DiscordField; 3] {
    [
        DiscordField::inline("Name", format!("[{}](<{}>)", q.name(), q.link())),
        DiscordField::inline("Zones", q.zones_joined()),
        DiscordField::inline("Until", q.relative_until()),
    ]
}

/// One embed listing every match, or the "nothing found" text with no embeds.
pub fn build_message(matches: &[WorldQuest], alert: &str) -> DiscordMessage {
    if matches.is_empty() {
        return DiscordMessage { content: s!(NONE_FOUND_CONTENT), embeds: Vec::new() };
    }

    let fields = matches.iter().flat_map(quest_fields).collect();
    DiscordMessage {
        content: s!(alert),
        embeds: vec![DiscordEmbed { title: s!(EMBED_TITLE), fields }],
    }
}

#[derive(Clone)]
pub struct Webhook {
    url: String,
}

impl Webhook {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(Error::MissingWebhook(WEBHOOK_ENV));
        }
        Ok(Self { url })
    }

    /// From the `WEBHOOK_URL` value, if any; unset or blank is an error,
    /// never a silent skip.
    pub fn from_var(value: Option<&str>) -> Result<Self> {
        Self::new(value.unwrap_or_default())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

// Token lives in the URL path; keep it out of logs.
impl std::fmt::Debug for Webhook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Webhook")
            .field("origin", &crate::core::net::origin(&self.url))
            .finish()
    }
}

/// POST once; no retry. Returns the HTTP status.
pub fn send(agent: &ureq::Agent, webhook: &Webhook, message: &DiscordMessage) -> Result<u16> {
    let status = post_json(agent, webhook.url(), message)?;
    logf!("Webhook delivered ({} embed(s)) -> {}", message.embeds.len(), status);
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::{QuestMetadata, merge, MetadataMap};

    fn quest(id: u32, zones: &str) -> WorldQuest {
        serde_json::from_str(&format!(
            r#"{{"id":{id},"ending":"2025-01-01T00:00:00Z","zones":[{zones}]}}"#
        ))
        .unwrap()
    }

    #[test]
    fn empty_run_sends_none_found_without_embeds() {
        let msg = build_message(&[], "ALERT");
        assert_eq!(msg.content, NONE_FOUND_CONTENT);
        assert!(msg.embeds.is_empty());

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({ "content": NONE_FOUND_CONTENT }));
    }

    #[test]
    fn each_match_contributes_name_zones_until() {
        let mut meta = MetadataMap::new();
        meta.insert(100, QuestMetadata { name: Some(s!("Test")), ..Default::default() });
        let matches = merge(vec![quest(100, "8567, 9042"), quest(999, "")], &meta);

        let msg = build_message(&matches, "ALERT");
        assert_eq!(msg.content, "ALERT");
        assert_eq!(msg.embeds.len(), 1);
        assert_eq!(msg.embeds[0].title, "World Quests");

        let fields = &msg.embeds[0].fields;
        assert_eq!(fields.len(), 6);
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Name", "Zones", "Until", "Name", "Zones", "Until"]);
        assert!(fields.iter().all(|f| f.inline));

        assert_eq!(fields[0].value, "[Test](<https://www.wowhead.com/quest=100>)");
        assert_eq!(fields[1].value, "8567, 9042");
        assert_eq!(fields[2].value, "<t:1735689600:R>");
        assert_eq!(fields[3].value, "[WQ(999)](<https://www.wowhead.com/quest=999>)");
        assert_eq!(fields[4].value, "");
    }

    #[test]
    fn payload_json_shape() {
        let msg = build_message(&[quest(1, "")], "hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["content"], "hi");
        assert_eq!(json["embeds"][0]["fields"][1]["name"], "Zones");
        assert_eq!(json["embeds"][0]["fields"][1]["inline"], true);
    }

    #[test]
    fn blank_webhook_is_rejected() {
        assert!(matches!(Webhook::new("  "), Err(Error::MissingWebhook(_))));
        assert!(matches!(Webhook::from_var(None), Err(Error::MissingWebhook(WEBHOOK_ENV))));
        let hook = Webhook::new("https://discord.com/api/webhooks/1/secret").unwrap();
        assert!(!format!("{hook:?}").contains("secret"));
    }
}
