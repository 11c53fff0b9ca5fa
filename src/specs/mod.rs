// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec focuses on a single page
//! and encodes *where the ground truth lives in the page* and *how to extract
//! it*.
//!
//! ## What lives here
//! - **Pure text extraction** for remote pages (`/world-quests/<expansion>/<region>`).
//! - **Marker choice**: which inline-script line carries which JSON literal.
//! - **Light shaping** of results into typed records (`quest::WorldQuest`,
//!   `quest::QuestMetadata`).
//!
//! ## What does **not** live here
//! - **Filtering against the watch list** – that's `scrape::collect_matches`.
//! - **Message formatting / delivery** – that's `notify`.
//! - **Caching/persistence** – none; every run starts from a fresh page.
//!
//! ## Typical call chain
//! ```text
//! cli::run → scrape::collect_matches → PageSource::load → specs::world_quests::parse_page
//!                                  ↘  filter by WatchList
//!          → notify::build_message → notify::send
//! ```
//!
//! ## Conventions & invariants
//! - A missing marker line means "no quests on this page", never an error.
//! - A marker line that is present but can't be framed or parsed is fatal:
//!   the page format changed and guessing would drop real quests.
//! - Only the **first** matching line is used per marker.
//!
//! ## Testing notes
//! - Specs are testable **offline** against saved pages (`tests/fixtures/`).
pub mod world_quests;
