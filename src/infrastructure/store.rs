//! Note persistence layer.
//!
//! The whole collection lives as one JSON array under a single key of a
//! [`KeyValueBackend`]. Every mutation is a full read-modify-write: load the
//! array, change it in memory, write it back with one `set`.
//!
//! Mutations on one `NoteStore` are serialized by an internal lock, so threads
//! sharing a store never interleave their read-modify-write cycles. Separate
//! processes (or separate stores over the same backend) are not coordinated and
//! the last writer wins.

use crate::domain::note::{normalize_content, normalize_title};
use crate::domain::{timestamp, Clock, Note, SystemClock, DEFAULT_TITLE};
use crate::error::{NotepadError, Result};
use crate::infrastructure::backend::KeyValueBackend;
use chrono::{DateTime, Duration, Utc};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "sideway_notepad_notes";

/// CRUD access to the note collection
pub struct NoteStore<B: KeyValueBackend, C: Clock = SystemClock> {
    backend: B,
    clock: C,
    key: String,
    default_title: String,
    write_lock: Mutex<()>,
}

impl<B: KeyValueBackend> NoteStore<B> {
    /// Store over `backend` with the default key, title and wall clock
    pub fn new(backend: B) -> Self {
        NoteStore::with_clock(backend, SystemClock)
    }
}

impl<B: KeyValueBackend, C: Clock> NoteStore<B, C> {
    pub fn with_clock(backend: B, clock: C) -> Self {
        NoteStore {
            backend,
            clock,
            key: DEFAULT_STORAGE_KEY.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Title substituted for blank ones; a blank value keeps the built-in default
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.default_title = if title.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title.trim().to_string()
        };
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn default_title(&self) -> &str {
        &self.default_title
    }

    /// Load every note, newest-created first.
    ///
    /// Fail-soft: a read or parse failure is logged and yields an empty list,
    /// so an empty result may also mean the load failed. Use
    /// [`NoteStore::try_load_all`] to tell the two apart.
    pub fn load_all(&self) -> Vec<Note> {
        match self.try_load_all() {
            Ok(notes) => notes,
            Err(e) => {
                log::error!("Error loading notes: {}", e);
                Vec::new()
            }
        }
    }

    /// Load every note, reporting read and parse failures as `LoadFailed`.
    pub fn try_load_all(&self) -> Result<Vec<Note>> {
        let raw = self
            .backend
            .get(&self.key)
            .map_err(|e| NotepadError::LoadFailed(e.to_string()))?;

        match raw {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| NotepadError::LoadFailed(format!("invalid stored notes: {}", e))),
        }
    }

    /// Look up one note by id
    pub fn get(&self, id: &str) -> Option<Note> {
        self.load_all().into_iter().find(|note| note.id == id)
    }

    /// Overwrite the stored collection with `notes` in a single write.
    pub fn save_all(&self, notes: &[Note]) -> Result<()> {
        let serialized = serde_json::to_string(notes)?;
        self.backend.set(&self.key, &serialized).map_err(|e| {
            log::error!("Error saving notes: {}", e);
            match e {
                NotepadError::Storage(_) => e,
                other => NotepadError::Storage(other.to_string()),
            }
        })
    }

    /// Create a note and place it first in the collection.
    pub fn add(&self, title: &str, content: &str) -> Result<Note> {
        let _guard = self.lock();

        let now = self.now();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: normalize_title(title, &self.default_title),
            content: normalize_content(content),
            created_at: now,
            updated_at: now,
        };

        let mut notes = self.load_all();
        notes.insert(0, note.clone());
        self.save_all(&notes)?;

        log::debug!("added note {}", note.id);
        Ok(note)
    }

    /// Replace title and content of the note with `id`, keeping its position.
    ///
    /// Returns `Ok(None)` without writing when no such note exists.
    pub fn update(&self, id: &str, title: &str, content: &str) -> Result<Option<Note>> {
        let _guard = self.lock();

        let mut notes = self.load_all();
        let Some(index) = notes.iter().position(|note| note.id == id) else {
            log::debug!("update skipped, note {} not found", id);
            return Ok(None);
        };

        let updated_at = self.next_update_time(notes[index].updated_at);
        let note = &mut notes[index];
        note.title = normalize_title(title, &self.default_title);
        note.content = normalize_content(content);
        note.updated_at = updated_at;
        let updated = note.clone();

        self.save_all(&notes)?;

        log::debug!("updated note {}", id);
        Ok(Some(updated))
    }

    /// Remove the note with `id`. Returns `Ok(false)` without writing when absent.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let _guard = self.lock();

        let notes = self.load_all();
        let before = notes.len();
        let remaining: Vec<Note> = notes.into_iter().filter(|note| note.id != id).collect();

        if remaining.len() == before {
            log::debug!("delete skipped, note {} not found", id);
            return Ok(false);
        }

        self.save_all(&remaining)?;

        log::debug!("deleted note {}", id);
        Ok(true)
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guarded value is (), so a poisoned lock carries no broken state.
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn now(&self) -> DateTime<Utc> {
        timestamp::truncate(self.clock.now())
    }

    /// `now`, bumped past `previous` when the clock has not advanced.
    /// Stays at `previous` when that is already the latest representable time.
    fn next_update_time(&self, previous: DateTime<Utc>) -> DateTime<Utc> {
        let now = self.now();
        if now > previous {
            now
        } else {
            previous
                .checked_add_signed(Duration::milliseconds(1))
                .unwrap_or(previous)
        }
    }
}
