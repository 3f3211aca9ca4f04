// Standalone components (no internal state)
pub mod dropdown;
pub mod view_info_list_skeleton;

// Stateful widgets built on the standalone ones
pub mod user_menu;

// Re-exports for convenience
pub use dropdown::*;
pub use user_menu::*;
pub use view_info_list_skeleton::*;
