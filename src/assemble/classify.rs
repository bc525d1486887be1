// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDateTime;

use crate::date::build_timeline_date;
use crate::model::{ItemKind, NoteRecord};

/// A record's classified dates and resolved rendering kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedDates {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub kind: ItemKind,
}

/// Classifies one record's dates.
///
/// `None` means the record is dropped: its start date did not parse, or an
/// end date was present but did not parse. A record without an end date
/// survives but cannot render as anything other than a point, overriding
/// its own kind hint.
pub fn classify(record: &NoteRecord, max_digits: u32) -> Option<ClassifiedDates> {
    let Some(start) = build_timeline_date(&record.start_date, max_digits) else {
        log::warn!(
            "dropping event {path}: invalid start date {start:?}, check for month/day values that are 0",
            path = record.path,
            start = record.start_date,
        );
        return None;
    };

    if record.end_date.is_empty() {
        return Some(ClassifiedDates { start, end: None, kind: ItemKind::Point });
    }

    let Some(end) = build_timeline_date(&record.end_date, max_digits) else {
        log::warn!(
            "dropping event {path}: invalid end date {end:?}, check for month/day values that are 0",
            path = record.path,
            end = record.end_date,
        );
        return None;
    };

    Some(ClassifiedDates { start, end: Some(end), kind: record.kind })
}
