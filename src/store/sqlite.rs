use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::{params, Connection, OptionalExtension};

use super::keystore::{KeyStore, StoreError, StoredValue};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".hymnes-widget";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "widget_prefs.sqlite";

/// Ensure the preference database exists, run lazy migrations, and return a
/// live connection. A single `prefs` table keyed by `(namespace, key)` holds
/// every namespace, mirroring how each platform keeps its preference files
/// side by side; an `INSERT OR REPLACE` on that primary key gives us the
/// per-key write atomicity the readers rely on.
pub fn ensure_schema() -> Result<Connection> {
    let db_path = db_path()?;

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(&db_path).context("failed to open SQLite database")?;
    apply_schema(&conn)?;
    Ok(conn)
}

/// Schema creation split out so tests can run against an in-memory
/// connection without touching the home directory.
pub fn apply_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS prefs (
            namespace TEXT NOT NULL,
            key TEXT NOT NULL,
            int_value INTEGER,
            text_value TEXT,
            PRIMARY KEY (namespace, key)
        )",
        [],
    )
    .context("failed to create prefs table")?;
    Ok(())
}

/// Resolve the absolute path to the SQLite database inside the user's home.
fn db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}

/// One namespace of the durable shared store. Several `SqliteStore`s share a
/// single connection through `Rc` — the widget surface is single-threaded by
/// design (the host invokes refreshes serially), so no locking is needed.
pub struct SqliteStore {
    conn: Rc<Connection>,
    namespace: String,
}

impl SqliteStore {
    pub fn new(conn: Rc<Connection>, namespace: &str) -> Self {
        Self {
            conn,
            namespace: namespace.to_string(),
        }
    }
}

impl KeyStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT int_value, text_value FROM prefs WHERE namespace = ?1 AND key = ?2",
                params![self.namespace, key],
                |row| {
                    let int_value: Option<i64> = row.get(0)?;
                    let text_value: Option<String> = row.get(1)?;
                    Ok((int_value, text_value))
                },
            )
            .optional()?;

        // A row with both columns NULL should not exist, but if one does it
        // reads as unset rather than as an error.
        Ok(row.and_then(|(int_value, text_value)| match (int_value, text_value) {
            (Some(value), _) => Some(StoredValue::Int(value)),
            (None, Some(value)) => Some(StoredValue::Text(value)),
            (None, None) => None,
        }))
    }

    fn put(&self, key: &str, value: StoredValue) -> Result<(), StoreError> {
        let (int_value, text_value) = match value {
            StoredValue::Int(value) => (Some(value), None),
            StoredValue::Text(value) => (None, Some(value)),
        };
        self.conn.execute(
            "INSERT OR REPLACE INTO prefs (namespace, key, int_value, text_value)
             VALUES (?1, ?2, ?3, ?4)",
            params![self.namespace, key, int_value, text_value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "DELETE FROM prefs WHERE namespace = ?1 AND key = ?2",
            params![self.namespace, key],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_memory_conn() -> Rc<Connection> {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        apply_schema(&conn).expect("apply schema");
        Rc::new(conn)
    }

    #[test]
    fn namespaces_are_isolated() {
        let conn = in_memory_conn();
        let bridge = SqliteStore::new(Rc::clone(&conn), "bridge");
        let native = SqliteStore::new(Rc::clone(&conn), "native");

        bridge.put("hymns_count", StoredValue::Int(150)).unwrap();

        assert_eq!(
            bridge.get("hymns_count").unwrap(),
            Some(StoredValue::Int(150))
        );
        assert_eq!(native.get("hymns_count").unwrap(), None);
    }

    #[test]
    fn put_replaces_existing_value_and_type() {
        let conn = in_memory_conn();
        let store = SqliteStore::new(conn, "native");

        store.put("featured_hymn_number", StoredValue::Int(1)).unwrap();
        store
            .put("featured_hymn_number", StoredValue::Text("1".to_string()))
            .unwrap();

        assert_eq!(
            store.get("featured_hymn_number").unwrap(),
            Some(StoredValue::Text("1".to_string()))
        );
    }

    #[test]
    fn remove_unsets_the_key() {
        let conn = in_memory_conn();
        let store = SqliteStore::new(conn, "native");

        store
            .put("featured_hymn_title", StoredValue::Text("x".to_string()))
            .unwrap();
        store.remove("featured_hymn_title").unwrap();

        assert_eq!(store.get("featured_hymn_title").unwrap(), None);
    }
}
