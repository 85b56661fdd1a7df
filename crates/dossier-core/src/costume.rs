//! Costume sub-gallery data (profile page outfit pop-ups)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ArchiveError;

/// Character whose wardrobe is catalogued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Character {
    /// 高雀
    Gq,
    /// 高城
    Gc,
}

impl Character {
    pub fn as_str(&self) -> &'static str {
        match self {
            Character::Gq => "gq",
            Character::Gc => "gc",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Character::Gq => "高雀",
            Character::Gc => "高城",
        }
    }

    /// Outfit keys in display order.
    pub fn outfits(&self) -> &'static [&'static str] {
        match self {
            Character::Gq => &["uniform", "dress", "performance"],
            Character::Gc => &["uniform", "casual", "formal"],
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Character {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gq" => Ok(Character::Gq),
            "gc" => Ok(Character::Gc),
            other => Err(ArchiveError::UnknownCharacter(other.to_string())),
        }
    }
}

/// One outfit pop-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostumeEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub images: &'static [&'static str],
}

const GQ_UNIFORM: CostumeEntry = CostumeEntry {
    title: "常服",
    description: "标准07式军装，佩戴上尉军衔。高雀在特种连服役期间的日常着装，简洁利落，衬托出她的飒爽英姿。",
    images: &[
        "costume_gq_uniform_1.jpg",
        "costume_gq_uniform_2.jpg",
        "costume_gq_uniform_3.jpg",
    ],
};

const GQ_DRESS: CostumeEntry = CostumeEntry {
    title: "便装",
    description: "偏爱简约风格，黑色与深蓝居多。退役后更偏爱带有一点叛逆感的穿搭——夸张的耳环、蓝色眼影。",
    images: &["costume_gq_dress_1.jpg", "costume_gq_dress_2.jpg"],
};

const GQ_PERFORMANCE: CostumeEntry = CostumeEntry {
    title: "演出服",
    description: "文工团时期的舞台服装。红色与金色交织，华丽却透着一丝不甘。",
    images: &["costume_gq_performance_1.jpg", "costume_gq_performance_2.jpg"],
};

const GC_UNIFORM: CostumeEntry = CostumeEntry {
    title: "军装",
    description: "从上尉到中校，军装见证了他的成长。永远笔挺、一丝不苟，如同他的性格。",
    images: &[
        "costume_gc_uniform_1.jpg",
        "costume_gc_uniform_2.jpg",
        "costume_gc_uniform_3.jpg",
    ],
};

const GC_CASUAL: CostumeEntry = CostumeEntry {
    title: "便装",
    description: "难得的休闲时刻。简单的T恤和牛仔裤，却藏不住军人的气质。",
    images: &["costume_gc_casual_1.jpg", "costume_gc_casual_2.jpg"],
};

const GC_FORMAL: CostumeEntry = CostumeEntry {
    title: "正装",
    description: "出席正式场合的西装。政治联姻后，这样的场合多了起来。",
    images: &["costume_gc_formal_1.jpg"],
};

/// Look up an outfit. Unknown outfits return `None`.
pub fn lookup(character: Character, outfit: &str) -> Option<&'static CostumeEntry> {
    match (character, outfit) {
        (Character::Gq, "uniform") => Some(&GQ_UNIFORM),
        (Character::Gq, "dress") => Some(&GQ_DRESS),
        (Character::Gq, "performance") => Some(&GQ_PERFORMANCE),
        (Character::Gc, "uniform") => Some(&GC_UNIFORM),
        (Character::Gc, "casual") => Some(&GC_CASUAL),
        (Character::Gc, "formal") => Some(&GC_FORMAL),
        _ => None,
    }
}

/// Which outfit pop-up is open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostumeViewer {
    open: Option<(Character, &'static str)>,
}

impl CostumeViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the pop-up for an outfit. Unknown outfits leave the viewer as is.
    pub fn open(&mut self, character: Character, outfit: &str) -> Option<&'static CostumeEntry> {
        let entry = lookup(character, outfit)?;
        let key = character
            .outfits()
            .iter()
            .copied()
            .find(|o| *o == outfit)?;
        self.open = Some((character, key));
        Some(entry)
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// The outfit currently shown.
    pub fn current(&self) -> Option<&'static CostumeEntry> {
        self.open.and_then(|(character, outfit)| lookup(character, outfit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_outfit_resolves() {
        for character in [Character::Gq, Character::Gc] {
            for outfit in character.outfits() {
                let entry = lookup(character, outfit).unwrap();
                assert!(!entry.images.is_empty(), "{}/{}", character, outfit);
            }
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup(Character::Gc, "performance").is_none());
        assert!(lookup(Character::Gq, "").is_none());
    }

    #[test]
    fn test_lookup_contents() {
        let entry = lookup(Character::Gc, "formal").unwrap();
        assert_eq!(entry.title, "正装");
        assert_eq!(entry.images, &["costume_gc_formal_1.jpg"]);
    }

    #[test]
    fn test_character_parse() {
        assert_eq!("gq".parse::<Character>().unwrap(), Character::Gq);
        assert!("gx".parse::<Character>().is_err());
        assert_eq!(Character::Gc.name(), "高城");
    }

    #[test]
    fn test_viewer_open_close() {
        let mut viewer = CostumeViewer::new();
        assert!(viewer.open(Character::Gq, "dress").is_some());
        assert!(viewer.is_open());
        assert_eq!(viewer.current().unwrap().title, "便装");

        // Unknown outfit keeps the current pop-up
        assert!(viewer.open(Character::Gq, "armor").is_none());
        assert_eq!(viewer.current().unwrap().images.len(), 2);

        viewer.close();
        assert!(viewer.current().is_none());
    }
}
