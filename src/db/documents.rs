//! Minimal document store: (collection, key) -> JSON document.

use std::cell::RefCell;
use std::collections::BTreeMap;

use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;

use crate::errors::AppResult;

pub trait DocumentStore {
    fn get(&self, collection: &str, key: &str) -> AppResult<Option<Value>>;
    fn put(&self, collection: &str, key: &str, doc: &Value) -> AppResult<()>;
    fn keys(&self, collection: &str) -> AppResult<Vec<String>>;
}

/// Store backed by the `documents` table.
pub struct SqliteDocumentStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteDocumentStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl DocumentStore for SqliteDocumentStore<'_> {
    fn get(&self, collection: &str, key: &str) -> AppResult<Option<Value>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM documents WHERE collection = ?1 AND key = ?2",
                params![collection, key],
                |row| row.get(0),
            )
            .optional()?;

        match body {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    fn put(&self, collection: &str, key: &str, doc: &Value) -> AppResult<()> {
        let body = serde_json::to_string(doc)?;
        self.conn.execute(
            r#"
            INSERT INTO documents (collection, key, body, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(collection, key) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at
            "#,
            params![collection, key, body, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn keys(&self, collection: &str) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT key FROM documents WHERE collection = ?1 ORDER BY key ASC")?;
        let rows = stmt.query_map([collection], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

/// In-memory store for tests and dry runs.
#[derive(Default)]
pub struct MemoryDocumentStore {
    docs: RefCell<BTreeMap<(String, String), Value>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn get(&self, collection: &str, key: &str) -> AppResult<Option<Value>> {
        Ok(self
            .docs
            .borrow()
            .get(&(collection.to_string(), key.to_string()))
            .cloned())
    }

    fn put(&self, collection: &str, key: &str, doc: &Value) -> AppResult<()> {
        self.docs
            .borrow_mut()
            .insert((collection.to_string(), key.to_string()), doc.clone());
        Ok(())
    }

    fn keys(&self, collection: &str) -> AppResult<Vec<String>> {
        Ok(self
            .docs
            .borrow()
            .keys()
            .filter(|(c, _)| c == collection)
            .map(|(_, k)| k.clone())
            .collect())
    }
}
