//! UI components grouped by feature domain.
pub mod pages;

mod dock_anchor;
mod floating_overlay;
mod media_surface;
mod status_bar;
mod title_bar;

pub use dock_anchor::DockAnchor;
pub use floating_overlay::FloatingOverlay;
pub use media_surface::MediaSurface;
pub use pages::PageView;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
