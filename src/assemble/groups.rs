// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Two-phase group resolution.
//!
//! Phase one folds over the surviving records and extends the group table;
//! phase two is a pure record → group-id lookup. Splitting the phases keeps
//! id assignment a function of first-occurrence order alone.

use crate::model::{GroupId, GroupTable, NoteRecord};

/// Phase one: seeds the table with the default group, then discovers a
/// group per distinct non-empty label, in first-occurrence order.
pub fn discover_groups<'a, I>(records: I) -> GroupTable
where
    I: IntoIterator<Item = &'a NoteRecord>,
{
    let mut table = GroupTable::seeded();
    for record in records {
        table.ensure_group(&record.group);
    }
    table
}

/// Phase two: pure lookup. Empty labels resolve to the default group, and a
/// label that matches nothing falls back to the default group id.
pub fn resolve_group(record: &NoteRecord, table: &GroupTable) -> GroupId {
    if record.group.is_empty() {
        return table.default_group_id();
    }
    table
        .find_by_content(&record.group)
        .map(|group| group.id())
        .unwrap_or_else(|| table.default_group_id())
}
