//! Shared preference store split across logical submodules.

mod keystore;
mod layered;
mod memory;
mod shared;
mod snapshot;
mod sqlite;

pub use keystore::{KeyStore, StoreError, StoredValue};
pub use layered::{Layer, LayeredKeyStore};
pub use memory::MemoryStore;
pub use shared::{SharedStore, BRIDGE_KEY_PREFIX, BRIDGE_NAMESPACE, NATIVE_NAMESPACE};
pub use snapshot::{
    read_snapshot, KEY_FAVORITES_COUNT, KEY_FEATURED_HYMN_LYRICS, KEY_FEATURED_HYMN_NUMBER,
    KEY_FEATURED_HYMN_TITLE, KEY_HYMNS_COUNT,
};
pub use sqlite::{apply_schema, ensure_schema, SqliteStore};
