//! Gallery index, filtering and modal navigation
//!
//! [`GalleryState`] replaces the page-wide "current image", "current filter"
//! and "gallery generated" globals. The front end renders from it and routes
//! clicks and arrow keys into it.

mod catalog;

pub use catalog::{
    build_index, costume_images, curated_images, featured_images, generated_images, Category,
    ImageDescriptor, GENERATED_IMAGE_COUNT,
};

use std::fmt;
use std::str::FromStr;

use crate::error::ArchiveError;

/// Which grid items are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Buttons in display order.
    pub const BUTTONS: [Filter; 4] = [
        Filter::All,
        Filter::Only(Category::Character),
        Filter::Only(Category::Scene),
        Filter::Only(Category::Costume),
    ];

    pub fn matches(&self, image: &ImageDescriptor) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => image.category == *category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(category) => category.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "全部",
            Filter::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

/// What the image modal is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    /// Showing `src`. `position` is its index in the gallery, or `None` for
    /// images outside the index (costume sub-gallery shots).
    Open { src: String, position: Option<usize> },
}

impl Modal {
    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open { .. })
    }

    pub fn src(&self) -> Option<&str> {
        match self {
            Modal::Open { src, .. } => Some(src),
            Modal::Closed => None,
        }
    }
}

/// Gallery view state.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    index: Vec<ImageDescriptor>,
    built: bool,
    filter: Filter,
    /// Navigation cursor. Starts on the first image; `None` while a detached
    /// image is shown, which arrow navigation treats as one before the start.
    position: Option<usize>,
    modal: Modal,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            index: Vec::new(),
            built: false,
            filter: Filter::default(),
            position: Some(0),
            modal: Modal::default(),
        }
    }
}

impl GalleryState {
    /// An unbuilt gallery. Call [`ensure_built`](Self::ensure_built) before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// A gallery over a custom index (already built).
    pub fn from_index(index: Vec<ImageDescriptor>) -> Self {
        Self {
            index,
            built: true,
            ..Self::default()
        }
    }

    /// Build the index the first time; later calls do nothing.
    ///
    /// Returns whether this call built it.
    pub fn ensure_built(&mut self) -> bool {
        if self.built {
            return false;
        }
        self.index = build_index();
        self.built = true;
        tracing::debug!(images = self.index.len(), "Gallery index built");
        true
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn index(&self) -> &[ImageDescriptor] {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Featured tiles (the leading part of the index), with their positions.
    pub fn featured(&self) -> impl Iterator<Item = (usize, &ImageDescriptor)> {
        let featured = featured_images().len().min(self.index.len());
        self.index[..featured].iter().enumerate()
    }

    /// Grid tiles after the featured ones that pass the current filter, with
    /// their positions in the index.
    pub fn grid(&self) -> impl Iterator<Item = (usize, &ImageDescriptor)> {
        let featured = featured_images().len().min(self.index.len());
        let filter = self.filter;
        self.index
            .iter()
            .enumerate()
            .skip(featured)
            .filter(move |(_, image)| filter.matches(image))
    }

    /// Positions in the whole index selected by `filter`.
    pub fn select(&self, filter: Filter) -> Vec<usize> {
        self.index
            .iter()
            .enumerate()
            .filter(|(_, image)| filter.matches(image))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Change the grid filter. The index itself is untouched.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Current navigation position in the index. `None` while a detached
    /// image is shown or the index is empty.
    pub fn position(&self) -> Option<usize> {
        self.position.filter(|&i| i < self.index.len())
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Image at the current position.
    pub fn current(&self) -> Option<&ImageDescriptor> {
        self.position.and_then(|i| self.index.get(i))
    }

    /// Open the modal on the image at `index`. Out of range is a no-op.
    pub fn open_at(&mut self, index: usize) -> Option<&ImageDescriptor> {
        if index >= self.index.len() {
            tracing::debug!(index, len = self.index.len(), "Ignoring out-of-range open");
            return None;
        }
        self.show(index, true)
    }

    /// Open the modal on any image path.
    ///
    /// If `src` is in the index this behaves like [`open_at`](Self::open_at);
    /// otherwise the image is shown detached and the next arrow step lands on
    /// the first image (forward) or the second to last (back).
    pub fn open_src(&mut self, src: &str) {
        match self.index.iter().position(|image| image.src == src) {
            Some(index) => {
                self.show(index, true);
            }
            None => {
                self.position = None;
                self.modal = Modal::Open {
                    src: src.to_string(),
                    position: None,
                };
            }
        }
    }

    /// Move to the next image, wrapping at the end. No-op on an empty index.
    pub fn next(&mut self) -> Option<&ImageDescriptor> {
        let len = self.index.len();
        if len == 0 {
            return None;
        }
        let target = match self.position {
            Some(position) => (position + 1) % len,
            None => 0,
        };
        self.show(target, false)
    }

    /// Move to the previous image, wrapping at the start. No-op on an empty
    /// index.
    pub fn prev(&mut self) -> Option<&ImageDescriptor> {
        let len = self.index.len();
        if len == 0 {
            return None;
        }
        let target = match self.position {
            Some(position) => (position + len - 1) % len,
            // Detached counts as one before the first image
            None => (2 * len - 2) % len,
        };
        self.show(target, false)
    }

    /// Hide the modal. The position is kept.
    pub fn close(&mut self) {
        self.modal = Modal::Closed;
    }

    fn show(&mut self, index: usize, open: bool) -> Option<&ImageDescriptor> {
        let src = self.index.get(index)?.src.clone();
        // Arrow keys move the position even while the modal is hidden
        if open || self.modal.is_open() {
            self.modal = Modal::Open {
                src,
                position: Some(index),
            };
        }
        self.position = Some(index);
        self.index.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built() -> GalleryState {
        let mut gallery = GalleryState::new();
        gallery.ensure_built();
        gallery
    }

    #[test]
    fn test_ensure_built_is_idempotent() {
        let mut gallery = GalleryState::new();
        assert!(!gallery.is_built());
        assert!(gallery.ensure_built());
        let first = gallery.index().to_vec();

        assert!(!gallery.ensure_built());
        assert_eq!(gallery.index(), first.as_slice());
    }

    #[test]
    fn test_open_at_bounds() {
        let mut gallery = built();
        assert!(gallery.open_at(4).is_some());
        assert_eq!(gallery.position(), Some(4));

        let len = gallery.len();
        assert!(gallery.open_at(len).is_none());
        assert!(gallery.open_at(usize::MAX).is_none());
        assert_eq!(gallery.position(), Some(4));
    }

    #[test]
    fn test_open_shows_modal() {
        let mut gallery = built();
        gallery.modal = Modal::Closed;
        gallery.open_at(0);
        assert_eq!(gallery.modal().src(), Some("hero.jpg"));
        gallery.close();
        assert!(!gallery.modal().is_open());
        assert_eq!(gallery.position(), Some(0));
    }

    #[test]
    fn test_wraparound() {
        let mut gallery = built();
        let last = gallery.len() - 1;

        gallery.open_at(last);
        assert_eq!(gallery.next().unwrap().src, "hero.jpg");
        assert_eq!(gallery.position(), Some(0));

        assert_eq!(gallery.prev().unwrap().src, "costume_gc_casual.jpg");
        assert_eq!(gallery.position(), Some(last));
    }

    #[test]
    fn test_navigation_updates_open_modal() {
        let mut gallery = built();
        gallery.open_at(0);
        gallery.next();
        assert_eq!(
            gallery.modal(),
            &Modal::Open {
                src: "profile_gc.jpg".to_string(),
                position: Some(1)
            }
        );
    }

    #[test]
    fn test_navigation_on_empty_index_is_noop() {
        let mut gallery = GalleryState::from_index(Vec::new());
        assert!(gallery.open_at(0).is_none());
        assert!(gallery.next().is_none());
        assert!(gallery.prev().is_none());
        assert_eq!(gallery.position(), None);
        assert!(!gallery.modal().is_open());
    }

    #[test]
    fn test_navigation_before_any_open() {
        let mut gallery = built();
        assert_eq!(gallery.position(), Some(0));

        assert_eq!(gallery.next().unwrap().src, "profile_gc.jpg");
        assert_eq!(gallery.position(), Some(1));
        assert!(!gallery.modal().is_open());

        let mut gallery = built();
        assert_eq!(gallery.prev().unwrap().src, "costume_gc_casual.jpg");
        assert_eq!(gallery.position(), Some(gallery.len() - 1));
    }

    #[test]
    fn test_open_src_in_index() {
        let mut gallery = built();
        gallery.open_src("g1.jpg");
        assert_eq!(gallery.position(), Some(6));
        assert_eq!(gallery.modal().src(), Some("g1.jpg"));
    }

    #[test]
    fn test_open_src_detached() {
        let mut gallery = built();
        gallery.open_at(2);
        gallery.open_src("costume_gq_uniform_1.jpg");

        assert_eq!(gallery.position(), None);
        assert_eq!(gallery.modal().src(), Some("costume_gq_uniform_1.jpg"));

        assert_eq!(gallery.next().unwrap().src, "hero.jpg");
        assert_eq!(gallery.position(), Some(0));
        assert_eq!(gallery.modal().src(), Some("hero.jpg"));
    }

    #[test]
    fn test_prev_from_detached_lands_second_to_last() {
        let mut gallery = built();
        gallery.open_src("costume_gq_uniform_1.jpg");

        let len = gallery.len();
        gallery.prev();
        assert_eq!(gallery.position(), Some(len - 2));
        assert_eq!(gallery.modal().src(), Some(gallery.index()[len - 2].src.as_str()));

        let mut single = GalleryState::from_index(vec![ImageDescriptor::new(
            "only.jpg",
            "only",
            Category::Scene,
        )]);
        single.open_src("elsewhere.jpg");
        assert_eq!(single.prev().unwrap().src, "only.jpg");
    }

    #[test]
    fn test_filter_selection() {
        let gallery = built();
        assert_eq!(gallery.select(Filter::All).len(), gallery.len());

        let costume = gallery.select(Filter::Only(Category::Costume));
        assert_eq!(costume.len(), 35 + 5);
        // Generated g16 sits at position 6 + 15
        assert_eq!(costume[0], 21);
        assert_eq!(*costume.last().unwrap(), gallery.len() - 1);
    }

    #[test]
    fn test_grid_skips_featured_and_filters() {
        let mut gallery = built();
        assert_eq!(gallery.featured().count(), 3);
        assert_eq!(gallery.grid().count(), gallery.len() - 3);

        gallery.set_filter(Filter::Only(Category::Character));
        let grid: Vec<_> = gallery.grid().map(|(i, _)| i).collect();
        assert_eq!(grid, vec![6, 7, 8, 9, 10]);
        // Filtering never touches the index
        assert_eq!(gallery.len(), 61);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!(
            "scene".parse::<Filter>().unwrap(),
            Filter::Only(Category::Scene)
        );
        assert!("everything".parse::<Filter>().is_err());
        assert_eq!(Filter::Only(Category::Costume).to_string(), "costume");
    }
}
