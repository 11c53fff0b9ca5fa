// src/config/consts.rs

// Net config
pub const HOST: &str = "www.wowhead.com";
pub const WORLD_QUESTS_PREFIX: &str = "/world-quests/";
pub const QUEST_PREFIX: &str = "/quest=";
pub const DEFAULT_REGION: &str = "eu";
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const MAX_PAGE_BYTES: u64 = 16 * 1024 * 1024; // pages run ~1-2 MB
pub const USER_AGENT: &str = concat!("wq_watch/", env!("CARGO_PKG_VERSION"));

// Page markers
pub const GATHERER_MARKER: &str = "WH.Gatherer.addData(5, 1";
pub const LISTVIEW_MARKER: &str = "new Listview({";
pub const LISTVIEW_DATA_KEY: &str = "\"data\":";

// Environment
pub const WEBHOOK_ENV: &str = "WEBHOOK_URL";
pub const MENTION_ENV: &str = "WQ_MENTION";

// Discord message
pub const ALERT_CONTENT: &str = "!!! Tracked world quests are up";
pub const NONE_FOUND_CONTENT: &str = "No Interesting World Quests found.";
pub const EMBED_TITLE: &str = "World Quests";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "wq_watch=info";
