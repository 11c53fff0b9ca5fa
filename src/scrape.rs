// src/scrape.rs
use std::collections::BTreeSet;

use crate::{
    config::watchlist::WatchList,
    error::Result,
    progress::Progress,
    quest::WorldQuest,
    specs::world_quests,
};

/// Where world-quest pages come from. `Wowhead` in production; tests plug in
/// canned pages.
pub trait PageSource {
    fn load(&mut self, expansion: &str, region: &str) -> Result<String>;
}

/// Live pages over HTTP.
pub struct Wowhead {
    agent: ureq::Agent,
}

impl Wowhead {
    pub fn new(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl PageSource for Wowhead {
    fn load(&mut self, expansion: &str, region: &str) -> Result<String> {
        world_quests::fetch(&self.agent, expansion, region)
    }
}

/// Active quests of one page that are on the allow-list, in page order.
pub fn filter_tracked(quests: Vec<WorldQuest>, tracked: &BTreeSet<u32>) -> Vec<WorldQuest> {
    quests.into_iter().filter(|q| tracked.contains(&q.id)).collect()
}

/// Fetch every expansion in watch-list order and keep only tracked quests.
///
/// Expansions with an empty id set are still fetched. The first fetch or
/// extraction error aborts the whole run.
pub fn collect_matches(
    watch: &WatchList,
    region: &str,
    source: &mut dyn PageSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<WorldQuest>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(watch.len());
    }

    let mut matches: Vec<WorldQuest> = Vec::new();

    for (expansion, ids) in watch.iter() {
        if ids.is_empty() {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("{expansion}: nothing tracked, checking anyway"));
            }
        }
        let doc = source.load(expansion, region).inspect_err(|e| {
            loge!("{}: fetch failed: {}", expansion, e);
        })?;
        let active = world_quests::parse_page(&doc).inspect_err(|e| {
            loge!("{}: extraction failed: {}", expansion, e);
        })?;
        let total = active.len();

        let kept = filter_tracked(active, ids);
        logd!("{}: {} active, {} tracked, {} matched", expansion, total, ids.len(), kept.len());

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(expansion, kept.len());
        }
        matches.extend(kept);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(matches)
}
