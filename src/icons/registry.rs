use crate::prelude::HashMap;
use crate::{IconError, Result};

use super::icon::{Icon, IconId};

/// Append-only, insertion-ordered set of icons keyed by identity
#[derive(Debug, Default)]
pub struct IconRegistry {
    icons: Vec<Icon>,
    index: HashMap<IconId, usize>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `icon` unless its identity is already present.
    ///
    /// Returns `Ok(true)` on first insertion. A repeat registration returns
    /// `Ok(false)` when the pixels are unchanged and
    /// [`IconError::IconContentChanged`] when they are not.
    pub fn add(&mut self, icon: Icon) -> Result<bool> {
        if let Some(&slot) = self.index.get(icon.id()) {
            validate_unchanged(&self.icons[slot], &icon)?;
            return Ok(false);
        }

        self.index.insert(icon.id().clone(), self.icons.len());
        self.icons.push(icon);
        Ok(true)
    }

    pub fn contains(&self, icon: &Icon) -> bool {
        self.index.contains_key(icon.id())
    }

    pub fn get(&self, id: &IconId) -> Option<&Icon> {
        self.index.get(id).map(|&slot| &self.icons[slot])
    }

    /// All icons in insertion order
    pub fn all(&self) -> &[Icon] {
        &self.icons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Icon> {
        self.icons.iter()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Fails when `incoming` shares an identity with `existing` but not its pixels
pub fn validate_unchanged(existing: &Icon, incoming: &Icon) -> Result<()> {
    if existing.bitmap().same_as(incoming.bitmap()) {
        return Ok(());
    }
    log::error!(
        "icon {} changed its bitmap after registration ({}x{} -> {}x{})",
        existing.id(),
        existing.width(),
        existing.height(),
        incoming.width(),
        incoming.height()
    );
    Err(IconError::IconContentChanged {
        id: existing.id().clone(),
    })
}
