//! Snapshot renderer data contract. `build_view` is a pure function from a
//! snapshot plus a target size to the view model the surface draws; exact
//! layout, colors, and iconography live with whichever host renders it.

use crate::models::WidgetSnapshot;

/// Title never exceeds two display lines in any layout.
pub const TITLE_LINE_LIMIT: usize = 2;

/// The three fixed widget layouts a host can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetSize {
    Compact,
    Medium,
    Expanded,
}

impl WidgetSize {
    pub const ALL: [WidgetSize; 3] = [
        WidgetSize::Compact,
        WidgetSize::Medium,
        WidgetSize::Expanded,
    ];

    /// How many display lines of lyrics each layout affords.
    pub fn lyrics_line_limit(self) -> usize {
        match self {
            WidgetSize::Compact => 2,
            WidgetSize::Medium => 3,
            WidgetSize::Expanded => 4,
        }
    }

    /// Host-facing name, also shown as the preview panel title.
    pub fn label(self) -> &'static str {
        match self {
            WidgetSize::Compact => "Compact",
            WidgetSize::Medium => "Medium",
            WidgetSize::Expanded => "Expanded",
        }
    }
}

/// Featured-hymn section of the view model. Line limits travel with the
/// strings so the drawing layer never has to know which size produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedView {
    /// `#`-prefixed hymn number.
    pub number_label: String,
    pub title: String,
    pub lyrics: String,
    pub title_line_limit: usize,
    pub lyrics_line_limit: usize,
}

/// Everything a surface needs to draw one widget instance. Counts render as
/// plain decimal integers in every layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub size: WidgetSize,
    pub hymns_count: i64,
    pub favorites_count: i64,
    /// App name shown in the medium and expanded headers.
    pub header: &'static str,
    /// Subtitle shown only by the expanded layout.
    pub subtitle: Option<&'static str>,
    pub featured: Option<FeaturedView>,
}

impl WidgetView {
    /// Compact and medium layouts fill the featured slot with stat summaries
    /// when no hymn is featured; the expanded layout already shows stats
    /// separately and simply drops the section.
    pub fn shows_stat_fallback(&self) -> bool {
        self.featured.is_none() && self.size != WidgetSize::Expanded
    }

    /// Stat labels, sized to the layout's available room.
    pub fn hymns_stat_label(&self) -> &'static str {
        match self.size {
            WidgetSize::Expanded => "Total Hymns",
            _ => "Hymns",
        }
    }

    pub fn favorites_stat_label(&self) -> &'static str {
        "Favorites"
    }
}

/// Map a resolved snapshot onto one of the fixed layouts.
pub fn build_view(snapshot: &WidgetSnapshot, size: WidgetSize) -> WidgetView {
    let featured = snapshot.featured_hymn.as_ref().map(|hymn| FeaturedView {
        number_label: hymn.number_label(),
        title: hymn.title.clone(),
        lyrics: hymn.lyrics.clone(),
        title_line_limit: TITLE_LINE_LIMIT,
        lyrics_line_limit: size.lyrics_line_limit(),
    });

    WidgetView {
        size,
        hymns_count: snapshot.hymns_count,
        favorites_count: snapshot.favorites_count,
        header: "Hymnes",
        subtitle: match size {
            WidgetSize::Expanded => Some("French Adventist Hymns"),
            _ => None,
        },
        featured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeaturedHymn;

    fn snapshot_with_featured() -> WidgetSnapshot {
        WidgetSnapshot {
            hymns_count: 150,
            favorites_count: 12,
            featured_hymn: Some(FeaturedHymn {
                number: "1".to_string(),
                title: "Vous qui sur la terre !".to_string(),
                lyrics: "Vous qui sur la terre habitez".to_string(),
            }),
        }
    }

    #[test]
    fn lyrics_limits_follow_the_layout() {
        let snapshot = snapshot_with_featured();
        let limits: Vec<usize> = WidgetSize::ALL
            .iter()
            .map(|size| {
                build_view(&snapshot, *size)
                    .featured
                    .expect("featured present")
                    .lyrics_line_limit
            })
            .collect();
        assert_eq!(limits, vec![2, 3, 4]);
    }

    #[test]
    fn title_limit_is_two_lines_everywhere() {
        let snapshot = snapshot_with_featured();
        for size in WidgetSize::ALL {
            let view = build_view(&snapshot, size);
            assert_eq!(view.featured.expect("featured").title_line_limit, 2);
        }
    }

    #[test]
    fn featured_number_carries_hash_prefix() {
        let view = build_view(&snapshot_with_featured(), WidgetSize::Medium);
        assert_eq!(view.featured.expect("featured").number_label, "#1");
    }

    #[test]
    fn stat_fallback_replaces_absent_featured_on_small_layouts() {
        let snapshot = WidgetSnapshot {
            hymns_count: 3,
            favorites_count: 1,
            featured_hymn: None,
        };
        assert!(build_view(&snapshot, WidgetSize::Compact).shows_stat_fallback());
        assert!(build_view(&snapshot, WidgetSize::Medium).shows_stat_fallback());
        assert!(!build_view(&snapshot, WidgetSize::Expanded).shows_stat_fallback());
    }

    #[test]
    fn no_fallback_when_featured_is_present() {
        let view = build_view(&snapshot_with_featured(), WidgetSize::Compact);
        assert!(!view.shows_stat_fallback());
    }

    #[test]
    fn only_expanded_carries_the_subtitle() {
        let snapshot = snapshot_with_featured();
        assert!(build_view(&snapshot, WidgetSize::Compact).subtitle.is_none());
        assert!(build_view(&snapshot, WidgetSize::Medium).subtitle.is_none());
        assert_eq!(
            build_view(&snapshot, WidgetSize::Expanded).subtitle,
            Some("French Adventist Hymns")
        );
    }
}
