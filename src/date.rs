// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Calendar date construction from normalized date strings.
//!
//! The ingestion layer normalizes whatever it finds in a note into a
//! `[-]year[-month[-day[-hour]]]` string. This module turns that string into
//! a calendar value, or signals invalid input by returning `None`; the
//! caller decides drop semantics.

use chrono::{NaiveDate, NaiveDateTime};

/// Builds a calendar date from a normalized date string.
///
/// `max_digits` bounds the year's digit count (sign excluded); month, day
/// and hour are bounded at two digits by the normalized format. A month or
/// day of 0 is invalid. Missing month/day default to 1, a missing hour to 0.
/// Negative years are BCE dates.
pub fn build_timeline_date(normalized: &str, max_digits: u32) -> Option<NaiveDateTime> {
    let trimmed = normalized.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if unsigned.is_empty() {
        return None;
    }

    let mut parts = unsigned.split('-');
    let year_digits = parts.next()?;
    if !is_digits(year_digits) || year_digits.len() as u32 > max_digits.max(1) {
        return None;
    }
    let mut year: i32 = year_digits.parse().ok()?;
    if negative {
        year = -year;
    }

    let month = component(parts.next(), 1)?;
    let day = component(parts.next(), 1)?;
    let hour = component(parts.next(), 0)?;
    if parts.next().is_some() {
        return None;
    }

    // from_ymd_opt rejects the zero-month/zero-day normalization artifacts
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, 0, 0)
}

fn component(part: Option<&str>, default: u32) -> Option<u32> {
    let Some(part) = part else {
        return Some(default);
    };
    if !is_digits(part) || part.len() > 2 {
        return None;
    }
    part.parse().ok()
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}
