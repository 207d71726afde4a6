use std::rc::Rc;

use anyhow::{Context, Result};

use crate::models::{UpdateMessage, WidgetSnapshot};

use super::keystore::{KeyStore, StoredValue};
use super::layered::{Layer, LayeredKeyStore};
use super::memory::MemoryStore;
use super::snapshot::{
    read_snapshot, KEY_FAVORITES_COUNT, KEY_FEATURED_HYMN_LYRICS, KEY_FEATURED_HYMN_NUMBER,
    KEY_FEATURED_HYMN_TITLE, KEY_HYMNS_COUNT,
};
use super::sqlite::{ensure_schema, SqliteStore};

/// Marker the cross-platform bridge prepends to every key it writes. The
/// value is fixed by the bridge package and must match it byte for byte.
pub const BRIDGE_KEY_PREFIX: &str = "flutter.";
/// Namespace the bridge writes into (prefixed keys live here).
pub const BRIDGE_NAMESPACE: &str = "FlutterSharedPreferences";
/// Namespace owned by the native widget code (bare keys).
pub const NATIVE_NAMESPACE: &str = "hymnes_widget_prefs";

/// The two coexisting namespaces of the shared preference store, bound
/// together behind one read/write surface. Reads layer bridge-first over
/// native; explicit pushes from the main application land in the native
/// namespace only, because the bridge namespace belongs to the bridge.
pub struct SharedStore {
    bridge: Box<dyn KeyStore>,
    native: Box<dyn KeyStore>,
}

impl SharedStore {
    /// Open the durable store under the user's home directory.
    pub fn open() -> Result<Self> {
        let conn = Rc::new(ensure_schema().context("failed to open shared store")?);
        Ok(Self::from_stores(
            Box::new(SqliteStore::new(Rc::clone(&conn), BRIDGE_NAMESPACE)),
            Box::new(SqliteStore::new(conn, NATIVE_NAMESPACE)),
        ))
    }

    /// Volatile store for tests and the preview's no-home fallback.
    pub fn in_memory() -> Self {
        Self::from_stores(Box::new(MemoryStore::new()), Box::new(MemoryStore::new()))
    }

    /// Wire arbitrary backends together; the injection seam the design
    /// notes call for.
    pub fn from_stores(bridge: Box<dyn KeyStore>, native: Box<dyn KeyStore>) -> Self {
        Self { bridge, native }
    }

    /// Resolve the current snapshot, bridge namespace first. Infallible by
    /// contract; see `snapshot::read_snapshot`.
    pub fn read(&self) -> WidgetSnapshot {
        let layered = LayeredKeyStore::new(vec![
            Layer::new(BRIDGE_KEY_PREFIX, self.bridge.as_ref()),
            Layer::new("", self.native.as_ref()),
        ]);
        read_snapshot(&layered)
    }

    /// Persist a push payload into the native namespace, overwriting any
    /// stale values. An absent featured field removes its key outright —
    /// leaving a stale title behind would let a later partial write
    /// resurrect a hymn the app already cleared.
    pub fn apply_update(&self, message: &UpdateMessage) -> Result<()> {
        self.native
            .put(KEY_HYMNS_COUNT, StoredValue::Int(message.hymns_count))
            .context("failed to store hymns count")?;
        self.native
            .put(
                KEY_FAVORITES_COUNT,
                StoredValue::Int(message.favorites_count),
            )
            .context("failed to store favorites count")?;

        self.put_or_remove(KEY_FEATURED_HYMN_NUMBER, &message.featured_hymn_number)?;
        self.put_or_remove(KEY_FEATURED_HYMN_TITLE, &message.featured_hymn_title)?;
        self.put_or_remove(KEY_FEATURED_HYMN_LYRICS, &message.featured_hymn_lyrics)?;
        Ok(())
    }

    fn put_or_remove(&self, key: &str, value: &Option<String>) -> Result<()> {
        match value {
            Some(text) => self
                .native
                .put(key, StoredValue::Text(text.clone()))
                .with_context(|| format!("failed to store {key}")),
            None => self
                .native
                .remove(key)
                .with_context(|| format!("failed to clear {key}")),
        }
    }
}
