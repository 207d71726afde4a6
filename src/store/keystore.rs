use thiserror::Error;

/// A value held by the shared store. Counts live as integers, featured-hymn
/// fields as text; the split mirrors the typed getters the platform
/// preference stores expose, so a key written as one type never silently
/// reads back as the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredValue {
    Int(i64),
    Text(String),
}

impl StoredValue {
    /// Narrow to an integer. Text under an integer key is malformed and
    /// resolves to `None`, which the snapshot layer turns into the default.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            StoredValue::Int(value) => Some(*value),
            StoredValue::Text(_) => None,
        }
    }

    /// Narrow to text, rejecting integer values the same way.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoredValue::Text(value) => Some(value),
            StoredValue::Int(_) => None,
        }
    }
}

/// Failures from a key-value backend. Only the durable SQLite store can
/// actually fail; the in-memory fake never constructs one of these. The
/// snapshot read path swallows these by contract (absence over failure), but
/// write paths propagate them so the caller can surface the problem.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("shared store query failed")]
    Backend(#[from] rusqlite::Error),
}

/// Minimal key-value surface shared by the durable store and the in-memory
/// fake. The trait is the injection seam: the host and accessor never know
/// which backend they are talking to, so tests swap in `MemoryStore` freely.
pub trait KeyStore {
    /// Resolve a key to its stored value, `None` when unset.
    fn get(&self, key: &str) -> Result<Option<StoredValue>, StoreError>;

    /// Write a single key. Each call is atomic on its own; no cross-key
    /// consistency is promised, which is why the snapshot layer tolerates
    /// partial featured-hymn triples.
    fn put(&self, key: &str, value: StoredValue) -> Result<(), StoreError>;

    /// Remove a key so subsequent reads see it as unset. Removing an absent
    /// key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
