// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Host-facing configuration.
//!
//! [`TimelineSettings`] is the host application's stored plugin
//! configuration; [`TimelineArgs`] is the per-timeline argument set parsed
//! out of a code block. Both arrive as already-parsed data and deserialize
//! with the host's camelCase key convention.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::date::build_timeline_date;

/// Default digit-precision limit for year components in normalized dates.
pub const DEFAULT_MAX_DIGITS: u32 = 4;

const MS_PER_DAY: u64 = 1000 * 60 * 60 * 24;
const DEFAULT_TIMEFRAME_MS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventElement {
    Div,
    Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrontMatterKeys {
    pub start_date_key: Vec<String>,
    pub end_date_key: Vec<String>,
    pub title_key: Vec<String>,
}

impl Default for FrontMatterKeys {
    fn default() -> Self {
        Self {
            start_date_key: vec!["start-date".to_owned()],
            end_date_key: vec!["end-date".to_owned()],
            title_key: vec!["title".to_owned()],
        }
    }
}

/// Stored plugin settings, as handed over by the host.
///
/// `timeline_tag` and `event_element` only matter to the ingestion stage;
/// they are carried here so one settings object serves both stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineSettings {
    pub timeline_tag: String,
    pub event_element: EventElement,
    pub front_matter_keys: FrontMatterKeys,
    pub note_preview_on_hover: bool,
    pub show_event_counter: bool,
    pub sort_direction: bool,
    pub max_digits: u32,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            timeline_tag: "timeline".to_owned(),
            event_element: EventElement::Div,
            front_matter_keys: FrontMatterKeys::default(),
            note_preview_on_hover: true,
            show_event_counter: false,
            sort_direction: true,
            max_digits: DEFAULT_MAX_DIGITS,
        }
    }
}

/// Per-timeline arguments from the code block.
///
/// `group_order` is the caller-supplied priority list of group labels; an
/// empty list means "sort groups by their ordering value".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineArgs {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub min_date: NaiveDateTime,
    pub max_date: NaiveDateTime,
    pub div_height: u32,
    pub zoom_in_limit: u64,
    pub zoom_out_limit: u64,
    pub group_order: Vec<String>,
}

impl Default for TimelineArgs {
    fn default() -> Self {
        let axis_date = |normalized: &str| {
            build_timeline_date(normalized, DEFAULT_MAX_DIGITS).expect("default axis date")
        };
        Self {
            start_date: axis_date("-1000"),
            end_date: axis_date("3000"),
            min_date: axis_date("-3000"),
            max_date: axis_date("3000"),
            div_height: 400,
            zoom_in_limit: 10,
            // one more than the widget's default max so that min actually works
            zoom_out_limit: 315_360_000_000_001,
            group_order: Vec::new(),
        }
    }
}

/// Converts a zoom-preset timeframe string to milliseconds.
///
/// Numeric entries pass through unchanged. Unknown words log an error and
/// fall back to the default.
pub fn parse_timeframe(timeframe: &str) -> u64 {
    let trimmed = timeframe.trim();
    if let Ok(ms) = trimmed.parse::<u64>() {
        // the user knows exactly what they want
        return ms;
    }

    match trimmed {
        // shows hours
        "day" => MS_PER_DAY,
        // shows days, about a week at a time
        "week" => MS_PER_DAY * 7,
        // shows days, about a month at a time
        "month-detail" => MS_PER_DAY * 31,
        // shows months, about a month at a time
        "month-vague" => MS_PER_DAY * 32,
        // shows months, about a year at a time
        "year" => MS_PER_DAY * 31 * 12,
        other => {
            log::error!("invalid timeframe: {other}");
            DEFAULT_TIMEFRAME_MS
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use rstest::rstest;

    use super::{parse_timeframe, TimelineArgs, TimelineSettings};

    #[test]
    fn default_args_match_the_stock_axis() {
        let args = TimelineArgs::default();
        assert_eq!(args.start_date.year(), -1000);
        assert_eq!(args.end_date.year(), 3000);
        assert_eq!(args.min_date.year(), -3000);
        assert_eq!(args.max_date.year(), 3000);
        assert_eq!(args.div_height, 400);
        assert_eq!(args.zoom_in_limit, 10);
        assert_eq!(args.zoom_out_limit, 315_360_000_000_001);
        assert!(args.group_order.is_empty());
    }

    #[rstest]
    #[case("86400000", 86_400_000)]
    #[case("day", 86_400_000)]
    #[case("week", 604_800_000)]
    #[case("month-detail", 2_678_400_000)]
    #[case("month-vague", 2_764_800_000)]
    #[case("year", 32_140_800_000)]
    fn converts_known_timeframes(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_timeframe(input), expected);
    }

    #[test]
    fn unknown_timeframes_fall_back_to_the_default() {
        assert_eq!(parse_timeframe("fortnight"), 10);
    }

    #[test]
    fn settings_deserialize_with_host_keys() {
        let settings: TimelineSettings = serde_json::from_str(
            r#"{
                "timelineTag": "history",
                "notePreviewOnHover": false,
                "maxDigits": 6
            }"#,
        )
        .expect("settings json");
        assert_eq!(settings.timeline_tag, "history");
        assert!(!settings.note_preview_on_hover);
        assert_eq!(settings.max_digits, 6);
        assert!(settings.sort_direction);
    }

    #[test]
    fn args_deserialize_with_host_keys() {
        let args: TimelineArgs = serde_json::from_str(
            r#"{
                "divHeight": 250,
                "groupOrder": ["B", "A"]
            }"#,
        )
        .expect("args json");
        assert_eq!(args.div_height, 250);
        assert_eq!(args.group_order, vec!["B".to_owned(), "A".to_owned()]);
        assert_eq!(args.zoom_in_limit, TimelineArgs::default().zoom_in_limit);
    }
}
