// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interactive surface for the host UI.
//!
//! [`TimelineControls`] owns the toggle affordances (subgroup stacking,
//! per-group visibility checklist behind a menu button, grouping on/off)
//! for one timeline instance. It is mounted against an injected
//! [`ControlSurface`] rather than a global document, so independent
//! instances never collide; the outside-click capture is subscribed only
//! while the menu is open and released on unmount.
//!
//! Hover handlers live here too: they patch only the affected item's class
//! string and read original color/classes from the item's record
//! back-reference.

use crate::model::{GroupId, GroupTable, ItemId, ItemSet};
use crate::state::{apply_toggle, sync_widget, ToggleEvent, VisibilityState};
use crate::widget::TimelineWidget;

const HOVER_CLASS: &str = "runtime-hover";
const DEFAULT_HIGHLIGHT_COLOR: &str = "white";

/// The host-side rendering of the control strip, injected per instance.
pub trait ControlSurface {
    fn set_menu_visible(&mut self, visible: bool);

    /// Shows/hides the per-group checklist and subgroup toggle (hidden
    /// while grouping is disabled).
    fn set_group_controls_visible(&mut self, visible: bool);

    /// Subscribes/unsubscribes the outside-click observer that dismisses
    /// the open menu.
    fn capture_outside_clicks(&mut self, capture: bool);
}

/// One user interaction on the control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    SubgroupButton,
    GroupMenuButton,
    OutsideClick,
    GroupCheckbox(GroupId, bool),
    GroupingButton,
}

/// Controller for one timeline's interactive controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineControls {
    state: VisibilityState,
    menu_open: bool,
    mounted: bool,
}

impl TimelineControls {
    pub fn new(state: VisibilityState) -> Self {
        Self { state, menu_open: false, mounted: false }
    }

    pub fn state(&self) -> &VisibilityState {
        &self.state
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount(&mut self, surface: &mut dyn ControlSurface) {
        self.mounted = true;
        self.menu_open = false;
        surface.set_menu_visible(false);
        surface.set_group_controls_visible(self.state.grouping_enabled());
    }

    pub fn unmount(&mut self, surface: &mut dyn ControlSurface) {
        if self.menu_open {
            self.menu_open = false;
            surface.set_menu_visible(false);
        }
        // always release the capture; the surface outlives this controller
        surface.capture_outside_clicks(false);
        self.mounted = false;
    }

    /// Handles one control event: menu state stays local, toggle events go
    /// through the pure state machine and are then synced to the widget.
    pub fn handle(
        &mut self,
        event: ControlEvent,
        groups: &mut GroupTable,
        widget: &mut dyn TimelineWidget,
        surface: &mut dyn ControlSurface,
    ) {
        match event {
            ControlEvent::GroupMenuButton => {
                self.set_menu_open(!self.menu_open, surface);
            }
            ControlEvent::OutsideClick => {
                if self.menu_open {
                    self.set_menu_open(false, surface);
                }
            }
            ControlEvent::SubgroupButton => {
                let stack = !self.state.stack_subgroups();
                self.transition(ToggleEvent::SetSubgroupStacking(stack), groups, widget);
            }
            ControlEvent::GroupCheckbox(id, checked) => {
                self.transition(ToggleEvent::SetGroupVisible(id, checked), groups, widget);
            }
            ControlEvent::GroupingButton => {
                let enabled = !self.state.grouping_enabled();
                self.transition(ToggleEvent::SetGroupingEnabled(enabled), groups, widget);
                surface.set_group_controls_visible(enabled);
                if !enabled && self.menu_open {
                    self.set_menu_open(false, surface);
                }
            }
        }
    }

    fn set_menu_open(&mut self, open: bool, surface: &mut dyn ControlSurface) {
        self.menu_open = open;
        surface.set_menu_visible(open);
        surface.capture_outside_clicks(open);
    }

    fn transition(
        &mut self,
        event: ToggleEvent,
        groups: &mut GroupTable,
        widget: &mut dyn TimelineWidget,
    ) {
        let next = apply_toggle(&self.state, event);
        sync_widget(&self.state, &next, groups, widget);
        self.state = next;
    }
}

/// Hover-in: appends the highlight class to the affected item and pushes
/// the record's own color to the host surface. Idempotent under repeated
/// hover-in events.
pub fn item_over(items: &mut ItemSet, id: ItemId, widget: &mut dyn TimelineWidget) {
    let Some(item) = items.get(id) else {
        return;
    };

    let color = item.source().color.as_str();
    let highlight = if color.is_empty() { DEFAULT_HIGHLIGHT_COLOR } else { color };
    widget.set_highlight_color(highlight);

    if item.class_name().ends_with(HOVER_CLASS) {
        return;
    }
    let patched = format!("{} {HOVER_CLASS}", item.class_name());
    items.patch_class_name(id, patched.clone());
    widget.patch_item_class(id, &patched);
}

/// Hover-out: restores the class string from the originating record, never
/// from the patched copy.
pub fn item_out(items: &mut ItemSet, id: ItemId, widget: &mut dyn TimelineWidget) {
    let Some(item) = items.get(id) else {
        return;
    };

    let restored = crate::assemble::items::base_class_name(item.source());
    items.patch_class_name(id, restored.clone());
    widget.patch_item_class(id, &restored);
}
