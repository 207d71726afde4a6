use super::keystore::{KeyStore, StoredValue};

/// One layer of a layered lookup: a backing store plus the prefix its writer
/// attaches to every key. The cross-platform bridge prefixes its keys with a
/// fixed marker; native fallback code writes bare keys. Layers keep that
/// convention out of the callers.
pub struct Layer<'a> {
    prefix: &'a str,
    store: &'a dyn KeyStore,
}

impl<'a> Layer<'a> {
    pub fn new(prefix: &'a str, store: &'a dyn KeyStore) -> Self {
        Self { prefix, store }
    }
}

/// Ordered read-through view over any number of backing stores. `get`
/// resolves a logical key against each layer in turn (applying the layer's
/// prefix) and returns the first defined value. The two-namespace lookup the
/// widget surface needs is just a two-layer instance of this, but nothing
/// here limits it to two — the main application and the widget surface ship
/// independently, so either namespace may hold the authoritative value.
pub struct LayeredKeyStore<'a> {
    layers: Vec<Layer<'a>>,
}

impl<'a> LayeredKeyStore<'a> {
    pub fn new(layers: Vec<Layer<'a>>) -> Self {
        Self { layers }
    }

    /// First defined value for `key` across the layers, in order. A backend
    /// failure in one layer counts as unset there and the search continues;
    /// the snapshot contract trades failures for defaults.
    pub fn get(&self, key: &str) -> Option<StoredValue> {
        self.layers.iter().find_map(|layer| {
            let prefixed = format!("{}{}", layer.prefix, key);
            layer.store.get(&prefixed).ok().flatten()
        })
    }

    /// Integer view of `get`; wrong-typed values count as unset in that
    /// layer but do NOT fall through to the next one — the layer defined the
    /// key, it just holds garbage, and garbage reads as the default.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|value| value.as_int())
    }

    /// Text view of `get`, with the same malformed-value rule as `get_int`.
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.get(key)
            .and_then(|value| value.as_text().map(str::to_string))
    }
}
