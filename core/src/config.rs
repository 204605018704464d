//! # CONFIGURATION STORE
//!
//! **PURPOSE**: Flat dotted-key settings map shared by every collaborator.
//! **GUARANTEE**: Defaults merged with user overrides at construction; last write wins.

use serde_json::{json, Value};
use std::collections::HashMap;

/// Flat mapping of setting names to values.
///
/// Keys are dotted strings (`database.name`); values are arbitrary JSON
/// scalars or structures. Unknown keys read as `None`.
#[derive(Debug, Clone)]
pub struct Settings {
    entries: HashMap<String, Value>,
}

impl Settings {
    /// Default settings table applied to every application instance.
    pub fn defaults() -> Self {
        let entries = [
            ("debug.queries", json!(false)),
            ("auth.table", json!("users")),
            ("auth.username", json!("email")),
            ("auth.password", json!("password")),
            ("sessions.folder", json!("storage/sessions/")),
            ("sessions.ttl", json!(3600)),
            ("sessions.cookie", json!("token")),
            ("reminders.folder", json!("storage/reminders/")),
            ("reminders.ttl", json!(3600)),
            ("reminders.suffix", json!("reminders_")),
            ("lang.folder", json!("static/languages/")),
            ("request.emulate", json!(true)),
            ("database.type", json!("mysql")),
            ("database.server", json!("localhost")),
            ("database.name", json!("test")),
            ("database.username", json!("root")),
            ("database.password", json!("root")),
            ("public.url", json!("localhost")),
            ("templates.path", json!("templates")),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();

        Self { entries }
    }

    /// Defaults merged with user overrides, overrides winning.
    pub fn with_overrides<I, K>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut settings = Self::defaults();
        settings.merge(overrides);
        settings
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.entries.get(name).cloned()
    }

    /// Sets `name` to `value` and returns the written value.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Value {
        let value = value.into();
        self.entries.insert(name.to_string(), value.clone());
        value
    }

    /// Applies every pair in iteration order; later duplicates overwrite
    /// earlier ones.
    pub fn merge<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        for (key, value) in entries {
            self.entries.insert(key.into(), value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::defaults()
    }
}
