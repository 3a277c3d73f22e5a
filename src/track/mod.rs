//! Converting a finished grid into placement commands and realizing them in a scene

/// Lazy loop traversal with straight-corner-straight merging
pub mod walker;
/// Drainable queue of placement commands
pub mod stream;
/// Generation session driving a host scene
pub mod session;

pub use session::TrackSession;
pub use stream::PlacementStream;
pub use walker::{AssetKind, PlacementCommand, TrackWalker};
