//! UI Components for the archive site.
//!
//! Page-wide pieces: the splash loader, navigation bar, modals and toast.
//! The views themselves live in `pages`.

mod costume_modal;
mod image_modal;
mod nav_header;
mod splash_screen;
mod toast;

pub use costume_modal::CostumeModal;
pub use image_modal::ImageModal;
pub use nav_header::NavHeader;
pub use splash_screen::SplashScreen;
pub use toast::ToastNotice;
