// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Contract between the assembly engine and the timeline-rendering widget.
//!
//! The widget performs pixel layout, virtualization and drawing; this crate
//! hands it data and drives runtime changes through [`TimelineWidget`].

use chrono::NaiveDateTime;

use crate::config::{TimelineArgs, TimelineSettings};
use crate::model::{GroupId, GroupTable, ItemId};

/// How the widget renders an item's content element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTemplate {
    /// A navigable link to the originating note.
    Link,
    /// Plain text.
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupHeightMode {
    Auto,
    Fixed,
    FitItems,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Top,
    Bottom,
    Both,
}

/// The options bundle handed to the widget alongside items and groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineOptions {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub min: NaiveDateTime,
    pub max: NaiveDateTime,
    pub min_height: u32,
    pub zoom_min: u64,
    pub zoom_max: u64,
    pub show_current_time: bool,
    pub show_tooltips: bool,
    pub group_editable_order: bool,
    pub group_height_mode: GroupHeightMode,
    pub axis_orientation: AxisOrientation,
    pub stack: bool,
    pub stack_subgroups: bool,
    pub item_horizontal_margin: u32,
    pub template: ItemTemplate,
}

impl TimelineOptions {
    pub fn from_args(args: &TimelineArgs, settings: &TimelineSettings) -> Self {
        Self {
            start: args.start_date,
            end: args.end_date,
            min: args.min_date,
            max: args.max_date,
            min_height: args.div_height,
            zoom_min: args.zoom_in_limit,
            zoom_max: args.zoom_out_limit,
            show_current_time: false,
            show_tooltips: false,
            group_editable_order: true,
            group_height_mode: GroupHeightMode::FitItems,
            axis_orientation: AxisOrientation::Both,
            stack: true,
            stack_subgroups: true,
            item_horizontal_margin: 0,
            template: if settings.note_preview_on_hover {
                ItemTemplate::Link
            } else {
                ItemTemplate::Text
            },
        }
    }
}

/// The seam the engine drives at runtime. The widget applies each call to
/// its own virtualized view; none of these change assembled identity data.
pub trait TimelineWidget {
    /// Patches the subgroup-stacking layout flag.
    fn set_stack_subgroups(&mut self, stack: bool);

    /// Updates one group's visible flag in the widget's group view.
    fn set_group_visible(&mut self, group: GroupId, visible: bool);

    /// Detaches the whole group collection; items render ungrouped.
    fn detach_groups(&mut self);

    /// Reattaches a group collection, visibility flags included.
    fn attach_groups(&mut self, groups: &GroupTable);

    /// Patches one item's class string in the widget's item view.
    fn patch_item_class(&mut self, item: ItemId, class_name: &str);

    /// Pushes the hover highlight color to the host surface.
    fn set_highlight_color(&mut self, color: &str);
}
