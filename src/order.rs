// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Ordering strategies consumed by the rendering widget.
//!
//! Group rows sort under a strict three-tier comparator; items inside one
//! group stack under a locale-ish subgroup comparator. Both are pure values
//! constructed once per assembly.

use std::cmp::Ordering;

use crate::model::{GroupId, GroupTable, TimelineGroup};

/// What an item without a subgroup key compares as.
///
/// The widget coerces subgroup keys to text, so a missing key reads as the
/// literal word "undefined" and sorts among real keys under the same rule.
const MISSING_SUBGROUP_KEY: &str = "undefined";

/// Three-tier group comparator: the empty-content default group first, then
/// the caller's priority list, then ascending value. Each tier
/// short-circuits the next.
///
/// Labels absent from a non-empty priority list sort after all listed
/// labels and compare equal among themselves; callers must use a stable
/// sort to keep their original relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupOrdering {
    priority: Vec<String>,
}

impl GroupOrdering {
    pub fn new(priority: Vec<String>) -> Self {
        Self { priority }
    }

    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    pub fn compare(&self, a: &TimelineGroup, b: &TimelineGroup) -> Ordering {
        let empty_a = a.content().is_empty();
        let empty_b = b.content().is_empty();
        if empty_a && !empty_b {
            return Ordering::Less;
        }
        if empty_b && !empty_a {
            return Ordering::Greater;
        }

        if !self.priority.is_empty() {
            return self.position(a.content()).cmp(&self.position(b.content()));
        }

        a.value().cmp(&b.value())
    }

    /// Stable-sorts a group row slice under this ordering.
    pub fn sort(&self, groups: &mut [TimelineGroup]) {
        groups.sort_by(|a, b| self.compare(a, b));
    }

    fn position(&self, content: &str) -> usize {
        self.priority
            .iter()
            .position(|label| label == content)
            .unwrap_or(self.priority.len())
    }
}

/// Ascending comparison of subgroup keys within one group. Missing keys
/// compare as the literal text `undefined`.
pub fn compare_subgroups(a: Option<&str>, b: Option<&str>) -> Ordering {
    locale_cmp(subgroup_key(a), subgroup_key(b))
}

/// The text a subgroup key is coerced to for comparison.
pub fn subgroup_key(subgroup: Option<&str>) -> &str {
    subgroup.unwrap_or(MISSING_SUBGROUP_KEY)
}

// Case-insensitive first, code-point order as the tiebreak. A portable
// stand-in for the host locale's collation.
fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    match folded {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

/// Exchanges the ordering values of two group rows (drag-reorder support).
/// Ids and content labels are untouched. Returns false when either id does
/// not resolve.
pub fn swap_group_values(groups: &mut GroupTable, a: GroupId, b: GroupId) -> bool {
    let (Some(value_a), Some(value_b)) =
        (groups.get(a).map(TimelineGroup::value), groups.get(b).map(TimelineGroup::value))
    else {
        return false;
    };

    groups.set_value(a, value_b) && groups.set_value(b, value_a)
}
