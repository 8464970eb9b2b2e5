// ABOUTME: In-memory preferences store for default calculation parameters
// ABOUTME: Injectable trait object owned by the server, decoupled from the calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

//! Preferences store
//!
//! Holds the user's default calculation parameters in memory only; everything
//! resets on process restart. The value is overwritten wholesale on save and
//! reset, last writer wins. The store never participates in the calculation
//! itself, it only supplies values a caller may later feed into it.

use std::sync::{PoisonError, RwLock};

use crate::models::Preferences;

/// Storage abstraction for default calculation parameters
pub trait PreferencesStore: Send + Sync {
    /// Current preferences, or the system defaults if none were saved
    fn get(&self) -> Preferences;

    /// Replace the stored preferences wholesale
    fn save(&self, preferences: Preferences);

    /// Restore the system defaults
    fn reset(&self);
}

/// In-memory implementation backed by an `RwLock`
#[derive(Debug, Default)]
pub struct MemoryPreferencesStore {
    inner: RwLock<Preferences>,
}

impl MemoryPreferencesStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferencesStore for MemoryPreferencesStore {
    fn get(&self) -> Preferences {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, preferences: Preferences) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = preferences;
    }

    fn reset(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Preferences::default();
    }
}
