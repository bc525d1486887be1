// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::item::ItemKind;

/// One note-derived event record, as produced by the ingestion stage.
///
/// Records are immutable once handed over; the assembly keeps a shared
/// reference to the originating record on every item it produces so that
/// interaction handlers can read the original color and classes.
///
/// Date strings are in the ingestion layer's normalized
/// `[-]year[-month[-day[-hour]]]` form; an empty `end_date` means the event
/// has no end. An empty `group` label resolves to the default group, and an
/// empty `points_to` means the record references no other note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoteRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    pub classes: String,
    pub color: String,
    pub era: String,
    pub group: String,
    pub subgroup: Option<String>,
    pub img: String,
    pub path: String,
    pub points_to: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}
