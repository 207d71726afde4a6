//! Domain models exchanged between the main application and the widget
//! surface. The types stay light-weight data holders so the store and host
//! layers can focus on resolution and refresh logic. Keeping the commentary
//! here means later refactors can reconstruct the assumptions even if other
//! context is lost.

use std::fmt;

/// The complete set of values needed to render a widget at a point in time.
/// The main application computes one of these whenever hymn or favorite state
/// changes and writes it into the shared store; the widget surface only ever
/// reads it back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetSnapshot {
    /// Total number of hymns known to the app. Never negative; a malformed
    /// stored value reads back as zero.
    pub hymns_count: i64,
    /// Number of hymns the user has marked favorite. Same zero floor as
    /// `hymns_count`.
    pub favorites_count: i64,
    /// The hymn currently highlighted on the widget, if one was selected.
    /// Either fully populated or absent; partial triples in the store are
    /// treated as absent.
    pub featured_hymn: Option<FeaturedHymn>,
}

/// A featured hymn as shown on the widget. All three fields must resolve from
/// the store for the record to exist at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedHymn {
    /// Hymn identifier kept as raw text. The hymnal uses plain numbers today
    /// but supplements use suffixed forms, so we never parse it.
    pub number: String,
    /// Display title.
    pub title: String,
    /// Lyrics excerpt; the renderer clamps it to a size-dependent line limit.
    pub lyrics: String,
}

impl FeaturedHymn {
    /// Compose the `#<number>` label every layout uses. Centralized so the
    /// prefix never drifts between sizes.
    pub fn number_label(&self) -> String {
        format!("#{}", self.number)
    }
}

impl fmt::Display for FeaturedHymn {
    /// Write the `#<number> <title>` form used in footer status messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number_label(), self.title)
    }
}

/// The explicit "data changed" push the main application addresses to the
/// widget surface. Carries the same five fields as the store keys; the
/// featured fields are individually optional so a push can also clear the
/// featured hymn by sending all three as `None`.
#[derive(Debug, Clone, Default)]
pub struct UpdateMessage {
    pub hymns_count: i64,
    pub favorites_count: i64,
    pub featured_hymn_number: Option<String>,
    pub featured_hymn_title: Option<String>,
    pub featured_hymn_lyrics: Option<String>,
}

impl UpdateMessage {
    /// Build a push payload straight from a snapshot, the form the main
    /// application actually sends.
    pub fn from_snapshot(snapshot: &WidgetSnapshot) -> Self {
        Self {
            hymns_count: snapshot.hymns_count,
            favorites_count: snapshot.favorites_count,
            featured_hymn_number: snapshot
                .featured_hymn
                .as_ref()
                .map(|hymn| hymn.number.clone()),
            featured_hymn_title: snapshot
                .featured_hymn
                .as_ref()
                .map(|hymn| hymn.title.clone()),
            featured_hymn_lyrics: snapshot
                .featured_hymn
                .as_ref()
                .map(|hymn| hymn.lyrics.clone()),
        }
    }
}
