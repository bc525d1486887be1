// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Raw note records flow in, assembled items/groups/arrows flow out to the
//! rendering widget.

pub mod arrow;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod group;
pub mod ids;
pub mod item;
pub mod record;

pub use arrow::Arrow;
pub use group::{GroupTable, SubgroupOrder, TimelineGroup};
pub use ids::{ArrowId, GroupId, Id, IdError, ItemId};
pub use item::{ItemKind, ItemSet, TimelineItem};
pub use record::NoteRecord;
