use crate::models::{FeaturedHymn, WidgetSnapshot};

use super::layered::LayeredKeyStore;

/// Logical key names shared with the main application. These are the wire
/// contract of the whole subsystem; the bridge layer prefixes them, native
/// code writes them bare.
pub const KEY_HYMNS_COUNT: &str = "hymns_count";
pub const KEY_FAVORITES_COUNT: &str = "favorites_count";
pub const KEY_FEATURED_HYMN_NUMBER: &str = "featured_hymn_number";
pub const KEY_FEATURED_HYMN_TITLE: &str = "featured_hymn_title";
pub const KEY_FEATURED_HYMN_LYRICS: &str = "featured_hymn_lyrics";

/// Resolve the current snapshot from the layered store. Never fails: a
/// missing, malformed, or unreadable key resolves to that field's default
/// (zero for counts, absent for the featured hymn). Each field applies the
/// layer order independently, so the counts may come from the bridge
/// namespace while the featured hymn still lives in the native one.
pub fn read_snapshot(store: &LayeredKeyStore<'_>) -> WidgetSnapshot {
    WidgetSnapshot {
        hymns_count: read_count(store, KEY_HYMNS_COUNT),
        favorites_count: read_count(store, KEY_FAVORITES_COUNT),
        featured_hymn: read_featured_hymn(store),
    }
}

/// Counts are non-negative by contract; a negative stored value is malformed
/// and clamps to zero like any other garbage.
fn read_count(store: &LayeredKeyStore<'_>, key: &str) -> i64 {
    store.get_int(key).unwrap_or(0).max(0)
}

/// All-or-nothing rule for the featured triple. The main application writes
/// the three keys one at a time with no cross-key atomicity, so a reader may
/// catch the store mid-replacement; any missing field forces the whole
/// record to absent rather than displaying a torn hymn.
fn read_featured_hymn(store: &LayeredKeyStore<'_>) -> Option<FeaturedHymn> {
    let number = store.get_text(KEY_FEATURED_HYMN_NUMBER)?;
    let title = store.get_text(KEY_FEATURED_HYMN_TITLE)?;
    let lyrics = store.get_text(KEY_FEATURED_HYMN_LYRICS)?;
    Some(FeaturedHymn {
        number,
        title,
        lyrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Layer, MemoryStore, BRIDGE_KEY_PREFIX};

    fn layered<'a>(
        primary: &'a MemoryStore,
        secondary: &'a MemoryStore,
    ) -> LayeredKeyStore<'a> {
        LayeredKeyStore::new(vec![
            Layer::new(BRIDGE_KEY_PREFIX, primary),
            Layer::new("", secondary),
        ])
    }

    #[test]
    fn empty_stores_resolve_to_defaults() {
        let primary = MemoryStore::new();
        let secondary = MemoryStore::new();

        let snapshot = read_snapshot(&layered(&primary, &secondary));

        assert_eq!(snapshot, WidgetSnapshot::default());
    }

    #[test]
    fn bridge_namespace_counts_resolve_without_fallback_values() {
        // Scenario from the data contract: primary holds the two counts under
        // prefixed keys, nothing else is set anywhere.
        let primary = MemoryStore::new()
            .with_int("flutter.hymns_count", 150)
            .with_int("flutter.favorites_count", 12);
        let secondary = MemoryStore::new();

        let snapshot = read_snapshot(&layered(&primary, &secondary));

        assert_eq!(snapshot.hymns_count, 150);
        assert_eq!(snapshot.favorites_count, 12);
        assert!(snapshot.featured_hymn.is_none());
    }

    #[test]
    fn secondary_namespace_serves_as_fallback() {
        let primary = MemoryStore::new();
        let secondary = MemoryStore::new()
            .with_int(KEY_HYMNS_COUNT, 150)
            .with_int(KEY_FAVORITES_COUNT, 12)
            .with_text(KEY_FEATURED_HYMN_NUMBER, "1")
            .with_text(KEY_FEATURED_HYMN_TITLE, "Vous qui sur la terre !")
            .with_text(KEY_FEATURED_HYMN_LYRICS, "Vous qui...");

        let snapshot = read_snapshot(&layered(&primary, &secondary));

        assert_eq!(snapshot.hymns_count, 150);
        assert_eq!(snapshot.favorites_count, 12);
        let hymn = snapshot.featured_hymn.expect("featured hymn present");
        assert_eq!(hymn.number, "1");
        assert_eq!(hymn.title, "Vous qui sur la terre !");
        assert_eq!(hymn.lyrics, "Vous qui...");
    }

    #[test]
    fn primary_value_is_preferred_over_secondary() {
        let primary = MemoryStore::new().with_int("flutter.hymns_count", 151);
        let secondary = MemoryStore::new().with_int(KEY_HYMNS_COUNT, 150);

        let snapshot = read_snapshot(&layered(&primary, &secondary));

        assert_eq!(snapshot.hymns_count, 151);
    }

    #[test]
    fn partial_featured_triple_reads_as_absent() {
        for missing in [
            KEY_FEATURED_HYMN_NUMBER,
            KEY_FEATURED_HYMN_TITLE,
            KEY_FEATURED_HYMN_LYRICS,
        ] {
            let primary = MemoryStore::new();
            let mut secondary = MemoryStore::new();
            for key in [
                KEY_FEATURED_HYMN_NUMBER,
                KEY_FEATURED_HYMN_TITLE,
                KEY_FEATURED_HYMN_LYRICS,
            ] {
                if key != missing {
                    secondary = secondary.with_text(key, "present");
                }
            }

            let snapshot = read_snapshot(&layered(&primary, &secondary));
            assert!(
                snapshot.featured_hymn.is_none(),
                "triple with {missing} missing should read as absent"
            );
        }
    }

    #[test]
    fn featured_fields_resolve_across_namespaces() {
        // Two fields in the bridge namespace, one in the native one: the
        // per-key layer rule still yields a complete record.
        let primary = MemoryStore::new()
            .with_text("flutter.featured_hymn_number", "24")
            .with_text("flutter.featured_hymn_title", "Torrents d'amour");
        let secondary = MemoryStore::new().with_text(KEY_FEATURED_HYMN_LYRICS, "Torrents...");

        let snapshot = read_snapshot(&layered(&primary, &secondary));

        let hymn = snapshot.featured_hymn.expect("featured hymn present");
        assert_eq!(hymn.number, "24");
        assert_eq!(hymn.lyrics, "Torrents...");
    }

    #[test]
    fn negative_count_clamps_to_zero() {
        let primary = MemoryStore::new().with_int("flutter.hymns_count", -5);
        let secondary = MemoryStore::new();

        let snapshot = read_snapshot(&layered(&primary, &secondary));

        assert_eq!(snapshot.hymns_count, 0);
    }

    #[test]
    fn read_is_idempotent_without_writes() {
        let primary = MemoryStore::new().with_int("flutter.hymns_count", 150);
        let secondary = MemoryStore::new().with_int(KEY_FAVORITES_COUNT, 12);
        let layered = layered(&primary, &secondary);

        assert_eq!(read_snapshot(&layered), read_snapshot(&layered));
    }
}
