//! Fixed palette for the loading skeleton.
//!
//! There is no theming layer here: the skeleton always draws with the same
//! two greys, matching the console chrome it stands in for.

/// Base fill for skeleton shapes.
pub const SKELETON_BASE: &str = "#f3f3f3";

/// Highlight fill the pulse animation sweeps toward.
pub const SKELETON_HIGHLIGHT: &str = "#ecebeb";
