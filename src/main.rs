//! Binary entry point that glues the shared preference store to the widget
//! preview. Summarizing the bootstrapping pipeline here keeps the intent
//! obvious when revisiting the code: we open the durable store, register one
//! widget instance per size, and drive the Ratatui preview loop until the
//! user exits.
use hymnes_widget::{run_app, App, SharedStore};

/// Open persistence and launch the preview loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for
/// example an unwritable home directory) to the terminal instead of crashing
/// silently.
fn main() -> anyhow::Result<()> {
    let store = SharedStore::open()?;
    let mut app = App::new(store);
    run_app(&mut app)
}
