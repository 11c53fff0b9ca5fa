// src/specs/world_quests.rs
//! Scraping *spec* for the world-quests page.
//!
//! The page carries two independent inline-script payloads:
//! - a gatherer registration line, `WH.Gatherer.addData(5, 1, {...});`, whose
//!   object maps quest id (as a string) to display metadata;
//! - a list widget line, `new Listview({... "data":[...]});`, whose `data`
//!   array lists the currently active quest instances.
//!
//! Either may be missing on a page with no active quests.

use crate::config::consts::{
    GATHERER_MARKER, LISTVIEW_DATA_KEY, LISTVIEW_MARKER, WORLD_QUESTS_PREFIX,
};
use crate::core::net::{http_get, site_url};
use crate::core::script::{
    excerpt, first_line_containing, first_line_starting_with, slice_gatherer_object,
    slice_listview_data,
};
use crate::error::{Error, Result};
use crate::quest::{MetadataMap, QuestMetadata, WorldQuest, merge};

const METADATA: &str = "quest metadata";
const QUEST_LIST: &str = "quest list";

/// `https://www.wowhead.com/world-quests/<expansion>/<region>`
pub fn page_url(expansion: &str, region: &str) -> Result<String> {
    if expansion.trim().is_empty() {
        return Err(Error::EmptyExpansion);
    }
    Ok(site_url(&join!(WORLD_QUESTS_PREFIX, expansion, "/", region)))
}

/// Download the raw page for one expansion/region.
pub fn fetch(agent: &ureq::Agent, expansion: &str, region: &str) -> Result<String> {
    let url = page_url(expansion, region)?;
    let doc = http_get(agent, &url)?;
    logf!("Fetched {} ({} bytes)", url, doc.len());
    Ok(doc)
}

/// Extract and merge both payloads into quest records, in list order.
pub fn parse_page(doc: &str) -> Result<Vec<WorldQuest>> {
    let metadata = parse_metadata(doc)?;
    let quests = parse_quest_list(doc)?;
    logd!("Parsed {} quests, {} metadata entries", quests.len(), metadata.len());
    Ok(merge(quests, &metadata))
}

/// Gatherer metadata map. Empty when the page has no gatherer line.
pub fn parse_metadata(doc: &str) -> Result<MetadataMap> {
    let Some(line) = first_line_starting_with(doc, GATHERER_MARKER) else {
        logd!("No gatherer line on page");
        return Ok(MetadataMap::new());
    };

    let json = slice_gatherer_object(line)
        .ok_or_else(|| Error::Framing { what: METADATA, line: excerpt(line) })?;

    let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
        .map_err(|source| Error::Payload { what: METADATA, source })?;

    let mut out = MetadataMap::with_capacity(raw.len());
    for (key, value) in raw {
        let id = key
            .trim()
            .parse::<u32>()
            .map_err(|source| Error::QuestKey { key: key.clone(), source })?;
        let meta: QuestMetadata = serde_json::from_value(value)
            .map_err(|source| Error::Payload { what: METADATA, source })?;
        out.insert(id, meta);
    }
    Ok(out)
}

/// Active quest instances. Empty when the page has no list widget line.
/// One malformed element rejects the whole list.
pub fn parse_quest_list(doc: &str) -> Result<Vec<WorldQuest>> {
    let Some(line) = first_line_containing(doc, LISTVIEW_MARKER) else {
        logd!("No list widget line on page");
        return Ok(Vec::new());
    };

    let json = slice_listview_data(line, LISTVIEW_DATA_KEY)
        .ok_or_else(|| Error::Framing { what: QUEST_LIST, line: excerpt(line) })?;

    serde_json::from_str(json).map_err(|source| Error::Payload { what: QUEST_LIST, source })
}
