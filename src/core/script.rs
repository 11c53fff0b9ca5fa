// src/core/script.rs
//! Line scanning and JSON framing for data embedded in inline `<script>` code.
//!
//! The page is not parsed as HTML or JS. We find one anchor line by a fixed
//! marker and cut the JSON literal out of it. Each framing rule lives in its
//! own function so that a change in the site's markup shows up as a failing
//! test here rather than as silently missing quests.

use serde::de::IgnoredAny;

/// First line whose text (ignoring leading whitespace) starts with `marker`.
pub fn first_line_starting_with<'a>(doc: &'a str, marker: &str) -> Option<&'a str> {
    doc.lines().find(|line| line.trim_start().starts_with(marker))
}

/// First line containing `marker` anywhere.
pub fn first_line_containing<'a>(doc: &'a str, marker: &str) -> Option<&'a str> {
    doc.lines().find(|line| line.contains(marker))
}

/// Object literal from a gatherer registration line.
///
/// Expected framing:
///
/// ```text
/// WH.Gatherer.addData(5, 1, {"72029":{"name_enus":"Fishing Frenzy!",...}});
/// ```
///
/// Assumptions: the object starts at the first `{` on the line (the leading
/// call arguments are plain numbers) and the line ends with the object,
/// followed only by `)`, `;` and whitespace. Returns `None` if the line has
/// no `{`.
pub fn slice_gatherer_object(line: &str) -> Option<&str> {
    let open = line.find('{')?;
    let tail = line[open..].trim_end_matches(|c: char| c == ')' || c == ';' || c.is_whitespace());
    Some(tail)
}

/// Array literal following `data_key` inside a list-widget constructor line.
///
/// Expected framing:
///
/// ```text
/// new Listview({"parent":"list","id":"lv-world-quests","template":"worldquests","data":[...]});
/// ```
///
/// The end of the value is found by reading exactly one JSON value from just
/// after `data_key`, so `;`, `)` or `}` inside quest strings and extra keys
/// after `data` do not matter. Returns `None` when the key is absent or no
/// complete JSON value follows it.
pub fn slice_listview_data<'a>(line: &'a str, data_key: &str) -> Option<&'a str> {
    let at = line.find(data_key)?;
    let rest = line[at + data_key.len()..].trim_start();

    let mut values = serde_json::Deserializer::from_str(rest).into_iter::<IgnoredAny>();
    match values.next() {
        Some(Ok(_)) => Some(&rest[..values.byte_offset()]),
        _ => None,
    }
}

/// Short, char-boundary-safe prefix of `line` for error messages.
pub fn excerpt(line: &str) -> String {
    const MAX: usize = 160;
    let line = line.trim();
    match line.char_indices().nth(MAX) {
        Some((cut, _)) => join!(&line[..cut], "…"),
        None => s!(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::{GATHERER_MARKER, LISTVIEW_DATA_KEY, LISTVIEW_MARKER};

    #[test]
    fn finds_marker_lines() {
        let doc = "<html>\n  WH.Gatherer.addData(5, 1, {});\nvar x = new Listview({\"data\":[]});\n";
        assert!(first_line_starting_with(doc, GATHERER_MARKER).is_some());
        assert!(first_line_containing(doc, LISTVIEW_MARKER).is_some());
        assert!(first_line_starting_with("foo WH.Gatherer.addData(5, 1, {})", GATHERER_MARKER).is_none());
    }

    #[test]
    fn first_match_wins() {
        let doc = "new Listview({\"data\":[1]});\nnew Listview({\"data\":[2]});";
        let line = first_line_containing(doc, LISTVIEW_MARKER).unwrap();
        assert_eq!(slice_listview_data(line, LISTVIEW_DATA_KEY), Some("[1]"));
    }

    #[test]
    fn gatherer_object_strips_call_tail() {
        let line = r#"WH.Gatherer.addData(5, 1, {"100":{"name_enus":"Test"}});"#;
        assert_eq!(slice_gatherer_object(line), Some(r#"{"100":{"name_enus":"Test"}}"#));

        let spaced = "WH.Gatherer.addData(5, 1, {\"1\":{}}) ;  \r";
        assert_eq!(slice_gatherer_object(spaced), Some(r#"{"1":{}}"#));

        assert_eq!(slice_gatherer_object("WH.Gatherer.addData(5, 1, [])"), None);
    }

    #[test]
    fn listview_data_stops_at_array_end() {
        let line = r#"new Listview({"parent":"list","id":"x","template":"worldquests","data":[{"id":100,"ending":"2025-01-01T00:00:00Z"}]});"#;
        assert_eq!(
            slice_listview_data(line, LISTVIEW_DATA_KEY),
            Some(r#"[{"id":100,"ending":"2025-01-01T00:00:00Z"}]"#)
        );
    }

    #[test]
    fn listview_data_ignores_terminators_inside_strings_and_trailing_keys() {
        let line = r#"new Listview({"data":[{"note":"a; b})"}], "extraCols":[1]});"#;
        assert_eq!(
            slice_listview_data(line, LISTVIEW_DATA_KEY),
            Some(r#"[{"note":"a; b})"}]"#)
        );
    }

    #[test]
    fn listview_data_unframeable() {
        assert_eq!(slice_listview_data(r#"new Listview({"id":"x"});"#, LISTVIEW_DATA_KEY), None);
        assert_eq!(slice_listview_data(r#"new Listview({"data":[{"id":1,});"#, LISTVIEW_DATA_KEY), None);
    }

    #[test]
    fn excerpt_truncates_long_lines() {
        let long = "x".repeat(500);
        let e = excerpt(&long);
        assert!(e.ends_with('…'));
        assert_eq!(e.chars().count(), 161);
        assert_eq!(excerpt("  short  "), "short");
    }
}
