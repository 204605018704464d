use crate::app::App;
use serde_json::Value;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Connection settings derived from `database.*` configuration.
///
/// Registered as its own shared service so hosts can hand the rendered DSN
/// to whatever driver they pair the framework with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dsn {
    pub driver: String,
    pub server: String,
    pub name: String,
    pub username: String,
    pub password: String,
}

impl Dsn {
    pub fn from_config(app: &App) -> Self {
        Self {
            driver: config_string(app, "database.type", "mysql"),
            server: config_string(app, "database.server", "localhost"),
            name: config_string(app, "database.name", ""),
            username: config_string(app, "database.username", ""),
            password: config_string(app, "database.password", ""),
        }
    }

    pub fn url(&self) -> String {
        format!("{}:dbname={};host={}", self.driver, self.name, self.server)
    }
}

fn config_string(app: &App, key: &str, fallback: &str) -> String {
    app.config(key)
        .and_then(|value| value.as_str().map(String::from))
        .unwrap_or_else(|| fallback.to_string())
}

/// Database access collaborator.
///
/// Builds plain SQL statements (equality conditions only) and keeps a query
/// trace: the most recent statement is always available through
/// [`Database::last_query`]; the full log is retained only when the
/// `debug.queries` setting is enabled.
pub struct Database {
    dsn: Dsn,
    keep_log: bool,
    log: Mutex<Vec<String>>,
}

impl Database {
    pub fn new(app: &App) -> Self {
        Self {
            dsn: Dsn::from_config(app),
            keep_log: matches!(app.config("debug.queries"), Some(Value::Bool(true))),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn dsn(&self) -> &Dsn {
        &self.dsn
    }

    pub fn select(&self, table: &str, columns: &[&str], conditions: &[(&str, Value)]) -> String {
        let columns = if columns.is_empty() {
            "*".to_string()
        } else {
            columns.join(", ")
        };
        let sql = format!(
            "SELECT {columns} FROM {table}{}",
            where_clause(conditions)
        );
        self.record(sql)
    }

    pub fn insert(&self, table: &str, fields: &[(&str, Value)]) -> String {
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        let values: Vec<String> = fields.iter().map(|(_, value)| literal(value)).collect();
        let sql = format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            names.join(", "),
            values.join(", ")
        );
        self.record(sql)
    }

    pub fn delete(&self, table: &str, conditions: &[(&str, Value)]) -> String {
        let sql = format!("DELETE FROM {table}{}", where_clause(conditions));
        self.record(sql)
    }

    pub fn last_query(&self) -> Option<String> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Retained statements; empty unless `debug.queries` is enabled.
    pub fn queries(&self) -> Vec<String> {
        if !self.keep_log {
            return Vec::new();
        }
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, sql: String) -> String {
        debug!(query = %sql, "statement built");
        let mut log = self.log.lock().unwrap_or_else(PoisonError::into_inner);
        if !self.keep_log {
            log.clear();
        }
        log.push(sql.clone());
        sql
    }
}

fn where_clause(conditions: &[(&str, Value)]) -> String {
    if conditions.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = conditions
        .iter()
        .map(|(name, value)| format!("{name} = {}", literal(value)))
        .collect();
    format!(" WHERE {}", parts.join(" AND "))
}

fn literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s.replace('\'', "''")),
        other => format!("'{}'", other.to_string().replace('\'', "''")),
    }
}
