// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Runtime visibility state.
//!
//! Three independent toggles over the assembled data: subgroup stacking,
//! per-group visibility, and whole-grouping on/off. Transitions are pure;
//! [`apply_toggle`] never touches the widget. [`sync_widget`] applies a
//! state diff to the widget as a separate step, so the transition logic
//! stays independently testable.

use std::collections::BTreeMap;

use crate::model::{GroupId, GroupTable};
use crate::widget::TimelineWidget;

/// The runtime toggle state. Initialized all-visible/stacking-on/grouping-on
/// at assembly time and rebuilt fresh on every re-assembly; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityState {
    group_visible: BTreeMap<GroupId, bool>,
    stack_subgroups: bool,
    grouping_enabled: bool,
}

impl VisibilityState {
    pub fn for_groups(groups: &GroupTable) -> Self {
        Self {
            group_visible: groups.iter().map(|group| (group.id(), true)).collect(),
            stack_subgroups: true,
            grouping_enabled: true,
        }
    }

    /// Unknown ids read as visible; the widget only ever asks about
    /// assembled groups.
    pub fn is_group_visible(&self, id: GroupId) -> bool {
        self.group_visible.get(&id).copied().unwrap_or(true)
    }

    pub fn group_flags(&self) -> &BTreeMap<GroupId, bool> {
        &self.group_visible
    }

    pub fn stack_subgroups(&self) -> bool {
        self.stack_subgroups
    }

    pub fn grouping_enabled(&self) -> bool {
        self.grouping_enabled
    }
}

/// One user toggle. Set-style payloads keep every event idempotent and
/// reversible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleEvent {
    SetSubgroupStacking(bool),
    SetGroupVisible(GroupId, bool),
    SetGroupingEnabled(bool),
}

/// Pure state transition. Disabling grouping leaves the per-group flags and
/// the stacking flag untouched, so re-enabling restores the exact
/// pre-disable state.
pub fn apply_toggle(state: &VisibilityState, event: ToggleEvent) -> VisibilityState {
    let mut next = state.clone();
    match event {
        ToggleEvent::SetSubgroupStacking(stack) => {
            next.stack_subgroups = stack;
        }
        ToggleEvent::SetGroupVisible(id, visible) => {
            // toggles reconcile against the assembled collection: ids that
            // were filtered out of it are ignored, not inserted
            if let Some(flag) = next.group_visible.get_mut(&id) {
                *flag = visible;
            }
        }
        ToggleEvent::SetGroupingEnabled(enabled) => {
            next.grouping_enabled = enabled;
        }
    }
    next
}

/// Applies the `prev` → `next` diff to the group table and the widget.
///
/// The group table's `visible` flags mirror the state so a grouping
/// re-attach hands the widget current flags, not defaults.
pub fn sync_widget(
    prev: &VisibilityState,
    next: &VisibilityState,
    groups: &mut GroupTable,
    widget: &mut dyn TimelineWidget,
) {
    for (id, visible) in next.group_flags() {
        if prev.is_group_visible(*id) != *visible {
            groups.set_visible(*id, *visible);
            if next.grouping_enabled {
                widget.set_group_visible(*id, *visible);
            }
        }
    }

    if prev.stack_subgroups() != next.stack_subgroups() && next.grouping_enabled() {
        widget.set_stack_subgroups(next.stack_subgroups());
    }

    if prev.grouping_enabled() != next.grouping_enabled() {
        if next.grouping_enabled() {
            widget.attach_groups(groups);
            widget.set_stack_subgroups(next.stack_subgroups());
        } else {
            widget.detach_groups();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_toggle, sync_widget, ToggleEvent, VisibilityState};
    use crate::model::fixtures::{RecordingWidget, WidgetCall};
    use crate::model::GroupTable;

    fn two_group_table() -> GroupTable {
        let mut table = GroupTable::seeded();
        table.ensure_group("A");
        table
    }

    #[test]
    fn starts_all_visible_with_stacking_and_grouping_on() {
        let table = two_group_table();
        let state = VisibilityState::for_groups(&table);
        assert!(state.stack_subgroups());
        assert!(state.grouping_enabled());
        assert!(state.group_flags().values().all(|visible| *visible));
        assert_eq!(state.group_flags().len(), 2);
    }

    #[test]
    fn toggles_are_idempotent() {
        let table = two_group_table();
        let state = VisibilityState::for_groups(&table);
        let id = table.default_group_id();

        let once = apply_toggle(&state, ToggleEvent::SetGroupVisible(id, false));
        let twice = apply_toggle(&once, ToggleEvent::SetGroupVisible(id, false));
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_group_ids_are_ignored() {
        let table = two_group_table();
        let state = VisibilityState::for_groups(&table);

        let ghost = crate::model::GroupId::for_next(41);
        let next = apply_toggle(&state, ToggleEvent::SetGroupVisible(ghost, false));
        assert_eq!(next, state);
    }

    #[test]
    fn disabling_and_reenabling_grouping_restores_the_exact_state() {
        let table = two_group_table();
        let group_a = table.find_by_content("A").expect("group A").id();

        let mut state = VisibilityState::for_groups(&table);
        state = apply_toggle(&state, ToggleEvent::SetGroupVisible(group_a, false));
        state = apply_toggle(&state, ToggleEvent::SetSubgroupStacking(false));
        let before_disable = state.clone();

        state = apply_toggle(&state, ToggleEvent::SetGroupingEnabled(false));
        assert!(!state.grouping_enabled());

        state = apply_toggle(&state, ToggleEvent::SetGroupingEnabled(true));
        assert_eq!(state, before_disable);
        assert!(!state.is_group_visible(group_a));
        assert!(!state.stack_subgroups());
    }

    #[test]
    fn sync_updates_group_table_and_widget() {
        let mut table = two_group_table();
        let group_a = table.find_by_content("A").expect("group A").id();

        let prev = VisibilityState::for_groups(&table);
        let next = apply_toggle(&prev, ToggleEvent::SetGroupVisible(group_a, false));

        let mut widget = RecordingWidget::default();
        sync_widget(&prev, &next, &mut table, &mut widget);

        assert!(!table.get(group_a).expect("group A").visible());
        assert_eq!(widget.calls, vec![WidgetCall::GroupVisible(group_a.get(), false)]);
    }

    #[test]
    fn reattach_hands_the_widget_current_flags_and_stacking() {
        let mut table = two_group_table();
        let group_a = table.find_by_content("A").expect("group A").id();

        let mut state = VisibilityState::for_groups(&table);
        let mut widget = RecordingWidget::default();

        for event in [
            ToggleEvent::SetGroupVisible(group_a, false),
            ToggleEvent::SetSubgroupStacking(false),
            ToggleEvent::SetGroupingEnabled(false),
            ToggleEvent::SetGroupingEnabled(true),
        ] {
            let next = apply_toggle(&state, event);
            sync_widget(&state, &next, &mut table, &mut widget);
            state = next;
        }

        assert_eq!(
            widget.calls,
            vec![
                WidgetCall::GroupVisible(group_a.get(), false),
                WidgetCall::StackSubgroups(false),
                WidgetCall::DetachGroups,
                WidgetCall::AttachGroups(vec![(1, true), (group_a.get(), false)]),
                WidgetCall::StackSubgroups(false),
            ]
        );
    }
}
