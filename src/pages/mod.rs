//! Top-level views of the archive page.

mod gallery;
mod landing;
mod messages;
mod profiles;
mod story;

pub use gallery::GalleryView;
pub use landing::LandingMenu;
pub use messages::MessagesView;
pub use profiles::ProfilesView;
pub use story::StoryView;
