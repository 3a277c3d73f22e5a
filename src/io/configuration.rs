//! Generation constants and runtime configuration defaults

// Grid construction
/// Side length of the seed ring template
pub const SEED_TEMPLATE_SIZE: usize = 3;
/// Row and column index duplicated during growth
pub const GROWTH_INDEX: usize = 1;
/// Largest patch side searched exhaustively
pub const MAX_PATCH_SIZE: usize = 4;

// Safety limit to keep reallocating growth bounded
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 256;

/// Upper bound (inclusive) of rows and columns added by random growth
pub const MAX_RANDOM_INSERTIONS: usize = 3;

// Default values for configurable parameters
/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 3;
/// Default number of grid columns
pub const DEFAULT_COLUMNS: usize = 3;
/// Default patch side length
pub const DEFAULT_PATCH_SIZE: usize = 2;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Placement
/// World distance between neighbouring cell centres
pub const GRID_SPACING: f32 = 10.0;
/// Cells inspected when merging straight-corner-straight runs
pub const MERGE_LOOKAHEAD: usize = 3;

// Collider welding
/// Squared distance under which two vertices are merged
pub const WELD_DISTANCE_SQUARED: f32 = 0.001;
/// Normal angle, in degrees, under which two vertices are merged
pub const WELD_ANGLE_DEGREES: f32 = 0.1;

// Preview output
/// Pixel size of one grid cell in exported images
pub const PREVIEW_CELL_PIXELS: u32 = 16;
/// Delay between rollout animation frames
pub const ROLLOUT_FRAME_DELAY_MS: u32 = 80;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
