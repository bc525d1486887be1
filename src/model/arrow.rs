// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{ArrowId, ItemId};

/// A directed connector between two items, drawn as an overlay by the
/// widget's arrow layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrow {
    id: ArrowId,
    from_item: ItemId,
    to_item: ItemId,
    label: Option<String>,
}

impl Arrow {
    pub fn new(id: ArrowId, from_item: ItemId, to_item: ItemId) -> Self {
        Self { id, from_item, to_item, label: None }
    }

    pub fn new_with(
        id: ArrowId,
        from_item: ItemId,
        to_item: ItemId,
        label: Option<String>,
    ) -> Self {
        Self { id, from_item, to_item, label }
    }

    pub fn id(&self) -> ArrowId {
        self.id
    }

    pub fn from_item(&self) -> ItemId {
        self.from_item
    }

    pub fn to_item(&self) -> ItemId {
        self.to_item
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
