//! Static image catalog
//!
//! The gallery is assembled from four lists, in this order:
//!
//! | list      | entries | category                                 |
//! |-----------|---------|------------------------------------------|
//! | featured  | 3       | as listed                                |
//! | curated   | 3       | scene                                    |
//! | generated | 50      | `g1..g5` character, `g6..g15` scene, rest costume |
//! | costume   | 5       | costume                                  |
//!
//! Position in the merged list is the modal's addressing scheme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArchiveError;

/// Number of `g<N>.jpg` images appended to the curated list
pub const GENERATED_IMAGE_COUNT: usize = 50;

/// Image category used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Scene,
    Character,
    Costume,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Scene,
        Category::Character,
        Category::Costume,
        Category::Other,
    ];

    /// Lowercase name used in filter buttons and CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Scene => "scene",
            Category::Character => "character",
            Category::Costume => "costume",
            Category::Other => "other",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Scene => "场景",
            Category::Character => "人物",
            Category::Costume => "服装",
            Category::Other => "其他",
        }
    }

    /// Category of the generated image `g<number>.jpg` (1-based).
    pub fn for_generated(number: usize) -> Self {
        match number {
            0..=5 => Category::Character,
            6..=15 => Category::Scene,
            _ => Category::Costume,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ArchiveError::UnknownCategory(s.to_string()))
    }
}

/// One gallery image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Image path, unique within the index
    pub src: String,
    pub alt: String,
    pub category: Category,
    /// Caption shown on featured tiles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl ImageDescriptor {
    pub fn new(src: impl Into<String>, alt: impl Into<String>, category: Category) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            category,
            desc: None,
        }
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }
}

/// Core archive images, shown large above the grid.
pub fn featured_images() -> Vec<ImageDescriptor> {
    vec![
        ImageDescriptor::new("hero.jpg", "主视觉", Category::Scene).with_desc("囚城与雀"),
        ImageDescriptor::new("profile_gc.jpg", "高城档案照", Category::Character)
            .with_desc("FILE NO. 8008-C"),
        ImageDescriptor::new("profile_gq.jpg", "高雀档案照", Category::Character)
            .with_desc("FILE NO. 8308-Q"),
    ]
}

/// Hand-picked scenes that open the grid.
pub fn curated_images() -> Vec<ImageDescriptor> {
    vec![
        ImageDescriptor::new("img1.jpg", "童年影像", Category::Scene),
        ImageDescriptor::new("img2.jpg", "青春岁月", Category::Scene),
        ImageDescriptor::new("img_xueshe.jpg", "血舌", Category::Scene),
    ]
}

/// `g1.jpg` through `g50.jpg`.
pub fn generated_images() -> Vec<ImageDescriptor> {
    (1..=GENERATED_IMAGE_COUNT)
        .map(|i| {
            ImageDescriptor::new(
                format!("g{}.jpg", i),
                format!("画廊图片 {}", i),
                Category::for_generated(i),
            )
        })
        .collect()
}

/// Outfit photos appended after the generated range.
pub fn costume_images() -> Vec<ImageDescriptor> {
    vec![
        ImageDescriptor::new("costume_gq_uniform.jpg", "高雀-常服", Category::Costume),
        ImageDescriptor::new("costume_gq_dress.jpg", "高雀-便装", Category::Costume),
        ImageDescriptor::new("costume_gq_performance.jpg", "高雀-演出服", Category::Costume),
        ImageDescriptor::new("costume_gc_uniform.jpg", "高城-军装", Category::Costume),
        ImageDescriptor::new("costume_gc_casual.jpg", "高城-便装", Category::Costume),
    ]
}

/// The merged, ordered gallery index.
pub fn build_index() -> Vec<ImageDescriptor> {
    let mut index = featured_images();
    index.extend(curated_images());
    index.extend(generated_images());
    index.extend(costume_images());
    index
}
