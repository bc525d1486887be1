// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared test fixtures: record builders and recording doubles for the
//! widget and control-surface seams.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::assemble::NoteMap;
use crate::controls::ControlSurface;
use crate::model::{GroupId, GroupTable, ItemId, NoteRecord};
use crate::widget::TimelineWidget;

/// A minimal valid record: titled, pathed, no end date, default group.
pub(crate) fn record(id: &str, start_date: &str) -> NoteRecord {
    NoteRecord {
        id: id.to_owned(),
        title: format!("Note {id}"),
        path: format!("notes/{id}.md"),
        start_date: start_date.to_owned(),
        ..NoteRecord::default()
    }
}

/// Buckets records under their start-date key, keeping first-seen key
/// order, the shape the ingestion layer hands over.
pub(crate) fn note_map(records: Vec<NoteRecord>) -> (Vec<String>, NoteMap) {
    let mut dates: Vec<String> = Vec::new();
    let mut notes: NoteMap = BTreeMap::new();
    for record in records {
        let key = record.start_date.clone();
        if !dates.contains(&key) {
            dates.push(key.clone());
        }
        notes.entry(key).or_default().push(Arc::new(record));
    }
    (dates, notes)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WidgetCall {
    StackSubgroups(bool),
    GroupVisible(u32, bool),
    DetachGroups,
    AttachGroups(Vec<(u32, bool)>),
    PatchItemClass(u32, String),
    HighlightColor(String),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingWidget {
    pub(crate) calls: Vec<WidgetCall>,
}

impl TimelineWidget for RecordingWidget {
    fn set_stack_subgroups(&mut self, stack: bool) {
        self.calls.push(WidgetCall::StackSubgroups(stack));
    }

    fn set_group_visible(&mut self, group: GroupId, visible: bool) {
        self.calls.push(WidgetCall::GroupVisible(group.get(), visible));
    }

    fn detach_groups(&mut self) {
        self.calls.push(WidgetCall::DetachGroups);
    }

    fn attach_groups(&mut self, groups: &GroupTable) {
        let flags = groups.iter().map(|group| (group.id().get(), group.visible())).collect();
        self.calls.push(WidgetCall::AttachGroups(flags));
    }

    fn patch_item_class(&mut self, item: ItemId, class_name: &str) {
        self.calls.push(WidgetCall::PatchItemClass(item.get(), class_name.to_owned()));
    }

    fn set_highlight_color(&mut self, color: &str) {
        self.calls.push(WidgetCall::HighlightColor(color.to_owned()));
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) menu_visible: bool,
    pub(crate) group_controls_visible: bool,
    pub(crate) capturing_outside_clicks: bool,
}

impl ControlSurface for RecordingSurface {
    fn set_menu_visible(&mut self, visible: bool) {
        self.menu_visible = visible;
    }

    fn set_group_controls_visible(&mut self, visible: bool) {
        self.group_controls_visible = visible;
    }

    fn capture_outside_clicks(&mut self, capture: bool) {
        self.capturing_outside_clicks = capture;
    }
}
