// SPDX-License-Identifier: MPL-2.0
//! Action menu port definition.
//!
//! The viewer decides *when* a save/share menu is shown (long press on an
//! image page); the host decides what it contains.

use crate::domain::media::MediaImage;

/// Role of a menu entry, used by hosts to style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionRole {
    #[default]
    Default,
    Destructive,
    Cancel,
}

/// One entry of an action menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuAction {
    /// Host-defined identifier reported back when the entry is picked.
    pub id: String,
    /// Display label.
    pub label: String,
    pub role: ActionRole,
}

impl MenuAction {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            role: ActionRole::Default,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: ActionRole) -> Self {
        self.role = role;
        self
    }
}

/// A menu to present for one image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuDescriptor {
    pub title: Option<String>,
    pub actions: Vec<MenuAction>,
}

impl MenuDescriptor {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Builds the share/save menu for an image.
pub trait ActionMenuBuilder {
    fn build_actions(&self, image: &MediaImage) -> MenuDescriptor;
}
