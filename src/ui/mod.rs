//! Terminal preview of the widget surface. Renders the three layout sizes
//! side by side from the live shared store, with keys to simulate the two
//! update triggers. The layout here is illustrative only; the behavioral
//! contract lives in `view`.

mod app;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
