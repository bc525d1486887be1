// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use super::classify::ClassifiedDates;
use crate::model::{GroupId, ItemId, NoteRecord, TimelineItem};

/// Palette colors that double as style classes. Anything else (a hex value,
/// a theme variable) is styled by the excluded card renderer instead.
const PALETTE_CLASSES: [&str; 9] =
    ["blue", "green", "gray", "orange", "pink", "purple", "red", "white", "yellow"];

pub fn color_is_class(color: &str) -> bool {
    PALETTE_CLASSES.contains(&color)
}

/// The class contributed by the record itself: its palette color, or an
/// id-derived fallback the stylesheet can target.
fn initial_class(record: &NoteRecord) -> String {
    if !record.color.is_empty() && color_is_class(&record.color) {
        record.color.clone()
    } else {
        format!("nid-{}", record.id)
    }
}

/// A fresh item's full class string, also used to restore after hover.
pub(crate) fn base_class_name(record: &NoteRecord) -> String {
    format!("{} {}", initial_class(record), record.classes)
}

/// Builds the renderable item for one classified record. Pure construction;
/// card/DOM concerns belong to the rendering layer.
pub fn build_item(
    record: &Arc<NoteRecord>,
    dates: &ClassifiedDates,
    group: GroupId,
    id: ItemId,
) -> TimelineItem {
    TimelineItem::new(
        id,
        record.title.clone(),
        base_class_name(record),
        dates.start,
        dates.end,
        group,
        record.subgroup.clone(),
        record.path.clone(),
        dates.kind,
        Arc::clone(record),
    )
}
