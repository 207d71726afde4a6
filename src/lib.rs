//! Core library surface for the Hymnes home-widget data bridge.
//!
//! The main application writes a small snapshot (hymn count, favorites
//! count, optional featured hymn) into a shared key-value store; the widget
//! surface reads it back through a layered, dual-namespace lookup and maps
//! it onto fixed-size view models. The public modules exposed here provide
//! an intentionally small API so the preview binary as well as potential
//! external tooling can reuse the same pieces.
pub mod host;
pub mod models;
pub mod store;
pub mod ui;
pub mod view;

/// The persistence layer: dual-namespace shared store plus the layered
/// lookup that resolves it.
pub use store::{KeyStore, LayeredKeyStore, MemoryStore, SharedStore, SqliteStore};

/// The domain types other layers manipulate.
pub use models::{FeaturedHymn, UpdateMessage, WidgetSnapshot};

/// Trigger handling and the renderer data contract.
pub use host::{InstanceId, WidgetHost};
pub use view::{build_view, WidgetSize, WidgetView};

/// The interactive preview entry point and state container.
pub use ui::{run_app, App};
