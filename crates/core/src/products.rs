//! Products

use std::{fmt, str::FromStr};

use serde::Deserialize;
use smallvec::SmallVec;
use thiserror::Error;

use crate::i18n::Language;

/// Catalog product identifier.
///
/// Identifiers are assigned in the order products were added to the range,
/// so a higher id is treated as a newer product when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Wrap a raw identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A category name did not match any known bag category.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Bag category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Category {
    /// Tote bag
    Tote,

    /// Clutch
    Clutch,

    /// Crossbody bag
    Crossbody,

    /// Satchel
    Satchel,

    /// Shoulder bag
    Shoulder,

    /// Backpack
    Backpack,

    /// Hobo bag
    Hobo,

    /// Mini bag
    Mini,

    /// Bucket bag
    Bucket,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 9] = [
        Category::Tote,
        Category::Clutch,
        Category::Crossbody,
        Category::Satchel,
        Category::Shoulder,
        Category::Backpack,
        Category::Hobo,
        Category::Mini,
        Category::Bucket,
    ];

    /// The category tag as stored in the catalog.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Tote => "Tote",
            Category::Clutch => "Clutch",
            Category::Crossbody => "Crossbody",
            Category::Satchel => "Satchel",
            Category::Shoulder => "Shoulder",
            Category::Backpack => "Backpack",
            Category::Hobo => "Hobo",
            Category::Mini => "Mini",
            Category::Bucket => "Bucket",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Exact, case-sensitive match against the catalog tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Text available in every storefront language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Localized {
    /// English text
    pub en: String,

    /// Arabic text
    pub ar: String,
}

impl Localized {
    /// Returns the text for the given language.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: Localized,

    /// Product description
    pub description: Localized,

    /// Product price, in whole units of the catalog currency
    pub price: u64,

    /// Product category
    pub category: Category,

    /// Primary image URL
    pub image: String,

    /// Gallery image URLs; may be empty
    pub images: Vec<String>,

    /// Available colors, in swatch display order
    pub colors: SmallVec<[String; 4]>,
}

impl Product {
    /// Images to show on the detail page.
    ///
    /// Falls back to the primary image when the product has no gallery.
    pub fn gallery(&self) -> &[String] {
        if self.images.is_empty() {
            std::slice::from_ref(&self.image)
        } else {
            &self.images
        }
    }

    /// The color pre-selected on the detail page.
    pub fn default_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }
}
