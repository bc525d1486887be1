// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Timeline assembly.
//!
//! One synchronous pass from raw note records to the renderable data set
//! the widget consumes. Malformed records drop out individually with a
//! diagnostic; only an empty date set aborts the whole assembly.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use crate::config::{TimelineArgs, TimelineSettings};
use crate::model::{Arrow, GroupTable, ItemSet, NoteRecord};
use crate::order::GroupOrdering;
use crate::state::VisibilityState;
use crate::widget::TimelineOptions;

pub mod arrows;
pub mod classify;
pub mod groups;
pub mod items;

pub use arrows::build_arrows;
pub use classify::{classify, ClassifiedDates};
pub use groups::{discover_groups, resolve_group};
pub use items::build_item;


/// Records keyed by the ingestion layer's date key, in the order the
/// caller's `dates` list dictates.
pub type NoteMap = BTreeMap<String, Vec<Arc<NoteRecord>>>;

/// Everything the rendering widget consumes, plus the fresh visibility
/// state behind the interactive controls.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineData {
    pub items: ItemSet,
    pub groups: GroupTable,
    pub arrows: Vec<Arrow>,
    pub group_ordering: GroupOrdering,
    pub options: TimelineOptions,
    pub visibility: VisibilityState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    /// Nothing was discovered upstream; there is nothing to render.
    NoDates,
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDates => f.write_str("no dates found for the timeline"),
        }
    }
}

impl std::error::Error for AssembleError {}

/// Assembles the full timeline data set.
///
/// Iterates the caller's date keys in order, classifies every record under
/// each key, discovers groups over the survivors, assembles items with
/// sequential ids, filters the group table down to referenced groups, and
/// derives the arrow overlay.
pub fn assemble_timeline(
    dates: &[String],
    notes: &NoteMap,
    settings: &TimelineSettings,
    args: &TimelineArgs,
) -> Result<TimelineData, AssembleError> {
    if dates.is_empty() {
        log::warn!("no dates found for the timeline");
        return Err(AssembleError::NoDates);
    }

    // drop-filter first: dropped records never consume ids or groups
    let mut classified: Vec<(Arc<NoteRecord>, ClassifiedDates)> = Vec::new();
    for date in dates {
        for record in notes.get(date).into_iter().flatten() {
            if let Some(classified_dates) = classify(record, settings.max_digits) {
                classified.push((Arc::clone(record), classified_dates));
            }
        }
    }

    let mut groups = discover_groups(classified.iter().map(|(record, _)| record.as_ref()));

    let mut item_set = ItemSet::default();
    for (record, classified_dates) in &classified {
        let group = resolve_group(record, &groups);
        let item = build_item(record, classified_dates, group, item_set.next_id());
        item_set.insert(item);
    }

    let used = item_set.iter().map(|item| item.group()).collect::<BTreeSet<_>>();
    groups.retain_referenced(&used);

    let arrow_list = build_arrows(&item_set);
    let visibility = VisibilityState::for_groups(&groups);

    Ok(TimelineData {
        items: item_set,
        groups,
        arrows: arrow_list,
        group_ordering: GroupOrdering::new(args.group_order.clone()),
        options: TimelineOptions::from_args(args, settings),
        visibility,
    })
}
