// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Arrow, ArrowId, ItemSet};

/// Derives the arrow overlay from item cross-references.
///
/// An item whose record points to another item's path yields one arrow.
/// Unresolved targets are skipped silently; the referenced note may simply
/// carry no timeline-visible event. Duplicates are not suppressed: two
/// items pointing at the same target yield two arrows.
pub fn build_arrows(items: &ItemSet) -> Vec<Arrow> {
    let mut arrows = Vec::new();
    for item in items {
        let target_path = item.source().points_to.as_str();
        if target_path.is_empty() {
            continue;
        }

        let target = items
            .iter()
            .find(|other| other.id() != item.id() && other.path() == target_path);
        let Some(target) = target else {
            continue;
        };

        arrows.push(Arrow::new(ArrowId::for_next(arrows.len()), item.id(), target.id()));
    }
    arrows
}
