//! Pages
//!
//! Top-level views; each owns its state and fetches its own data.

mod dashboard;
mod favorites;
mod sources;

pub use dashboard::DashboardPage;
pub use favorites::FavoritesPage;
pub use sources::SourcesPage;
