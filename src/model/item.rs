// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::slice;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ids::{GroupId, ItemId};
use super::record::NoteRecord;

/// How an item spans the axis: a single instant or a start–end range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Range,
    Point,
}

/// One record's final renderable form.
///
/// Identity data (everything except the class string) is fixed at assembly
/// time. The class string is the one field interaction handlers may patch,
/// and only through [`ItemSet::patch_class_name`].
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItem {
    id: ItemId,
    content: String,
    class_name: String,
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
    group: GroupId,
    subgroup: Option<String>,
    path: String,
    kind: ItemKind,
    source: Arc<NoteRecord>,
}

impl TimelineItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ItemId,
        content: impl Into<String>,
        class_name: impl Into<String>,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
        group: GroupId,
        subgroup: Option<String>,
        path: impl Into<String>,
        kind: ItemKind,
        source: Arc<NoteRecord>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            class_name: class_name.into(),
            start,
            end,
            group,
            subgroup,
            path: path.into(),
            kind,
            source,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    pub fn subgroup(&self) -> Option<&str> {
        self.subgroup.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// The originating record, for read-only interaction use.
    pub fn source(&self) -> &Arc<NoteRecord> {
        &self.source
    }

    fn set_class_name(&mut self, class_name: String) {
        self.class_name = class_name;
    }
}

/// The renderable item collection. The assembler is the sole writer of item
/// identity; post-assembly mutation is limited to class-string patches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSet {
    items: Vec<TimelineItem>,
}

impl ItemSet {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, TimelineItem> {
        self.items.iter()
    }

    pub fn get(&self, id: ItemId) -> Option<&TimelineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// The id the next inserted item will carry.
    pub fn next_id(&self) -> ItemId {
        ItemId::for_next(self.items.len())
    }

    pub(crate) fn insert(&mut self, item: TimelineItem) {
        debug_assert_eq!(item.id(), self.next_id(), "items are inserted in id order");
        self.items.push(item);
    }

    /// Patches the class string of one item. Returns false when the id does
    /// not resolve.
    pub(crate) fn patch_class_name(&mut self, id: ItemId, class_name: String) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.set_class_name(class_name);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a TimelineItem;
    type IntoIter = slice::Iter<'a, TimelineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::{ItemKind, ItemSet, TimelineItem};
    use crate::model::{GroupId, NoteRecord};

    fn item(set: &ItemSet, content: &str) -> TimelineItem {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1)
            .expect("date")
            .and_hms_opt(0, 0, 0)
            .expect("time");
        TimelineItem::new(
            set.next_id(),
            content,
            "nid-1 ",
            start,
            None,
            GroupId::for_next(0),
            None,
            "notes/a.md",
            ItemKind::Point,
            Arc::new(NoteRecord::default()),
        )
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let mut set = ItemSet::default();
        let first = item(&set, "a");
        set.insert(first);
        let second = item(&set, "b");
        set.insert(second);

        let ids = set.iter().map(|item| item.id().get()).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn patches_only_the_class_string() {
        let mut set = ItemSet::default();
        let built = item(&set, "a");
        set.insert(built);
        let id = set.iter().next().expect("item").id();

        assert!(set.patch_class_name(id, "nid-1  runtime-hover".to_owned()));
        let patched = set.get(id).expect("item");
        assert_eq!(patched.class_name(), "nid-1  runtime-hover");
        assert_eq!(patched.content(), "a");
    }

    #[test]
    fn patching_an_unknown_id_is_a_no_op() {
        let mut set = ItemSet::default();
        assert!(!set.patch_class_name(set.next_id(), "x".to_owned()));
    }
}
