// Repo showcase: hand-curated catalog merged with live GitHub metadata.
// Live fetches fan out in parallel and fail independently; the catalog order
// is the render order no matter what settles.

pub mod catalog;
pub mod handlers;
pub mod merge;
pub mod models;
