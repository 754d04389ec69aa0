//! Localization
//!
//! Storefront copy lives in typed tables that are validated when they are
//! loaded: a missing key, an unknown key, a blank value, or a category
//! without a display name fails the load instead of rendering an empty
//! string later.

use std::{fmt, ops::Deref, str::FromStr};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{fixtures::TRANSLATIONS_YAML, products::Category};

/// Placeholder substituted with a formatted amount in shipping messages.
const AMOUNT_PLACEHOLDER: &str = "{amount}";

/// Storefront language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,

    /// Arabic
    Ar,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// BCP 47 language code.
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Text direction for the language.
    pub const fn direction(self) -> Direction {
        match self {
            Language::En => Direction::Ltr,
            Language::Ar => Direction::Rtl,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A language code that the storefront does not support.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right
    Ltr,

    /// Right to left
    Rtl,
}

impl Direction {
    /// Value for the document `dir` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Translation loading errors.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The YAML was malformed, a key was missing or unknown, or a value was blank.
    #[error("Failed to parse translations: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A category has no display name.
    #[error("Missing {language} display name for category {category}")]
    MissingCategoryName {
        /// Language of the incomplete table
        language: Language,

        /// Category without a name
        category: Category,
    },

    /// A templated message is missing its placeholder.
    #[error("Translation {language}.{key} must contain {{amount}}")]
    MissingPlaceholder {
        /// Language of the incomplete table
        language: Language,

        /// Offending key
        key: &'static str,
    },
}

/// Non-blank translated text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Text(String);

impl TryFrom<String> for Text {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            Err("translated text cannot be blank")
        } else {
            Ok(Self(value))
        }
    }
}

impl Text {
    /// Returns the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Navigation labels.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavText {
    /// Home link
    pub home: Text,
    /// Shop link
    pub shop: Text,
    /// About link
    pub about: Text,
    /// Contact link
    pub contact: Text,
    /// Cart link
    pub cart: Text,
}

/// Home page hero copy.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroText {
    /// Headline
    pub title: Text,
    /// Sub-headline
    pub subtitle: Text,
    /// Call to action
    pub cta: Text,
}

/// Shop listing copy.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShopText {
    /// Page title
    pub title: Text,
    /// Filter panel heading
    pub filter: Text,
    /// Add to cart button
    pub add_to_cart: Text,
    /// Price label
    pub price: Text,
    /// Label for the "All" category
    pub all_categories: Text,
    /// Active filter chips heading
    pub active_filters: Text,
    /// Reset filters button
    pub clear_all: Text,
    /// Price ceiling chip prefix
    pub max_price: Text,
    /// Empty result message
    pub no_results: Text,
}

/// Product detail copy.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductText {
    /// Details heading
    pub details: Text,
    /// Related products heading
    pub related: Text,
    /// Stylist prompt
    pub ask_stylist: Text,
    /// Color picker label
    pub color: Text,
    /// Quantity picker label
    pub quantity: Text,
    /// Add to cart button
    pub add_to_cart: Text,
    /// Description tab
    pub description: Text,
    /// Unknown product message
    pub not_found: Text,
}

/// Cart copy.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartText {
    /// Cart title
    pub title: Text,
    /// Empty cart message
    pub empty: Text,
    /// Total label
    pub total: Text,
    /// Checkout button
    pub checkout: Text,
    /// Remove line button
    pub remove: Text,
    /// Shipping progress message, with an `{amount}` placeholder
    pub free_shipping_remaining: Text,
    /// Shipping unlocked message
    pub free_shipping_unlocked: Text,
}

/// Stylist chat copy.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StylistText {
    /// Window title
    pub title: Text,
    /// Input placeholder
    pub placeholder: Text,
    /// Send button
    pub send: Text,
    /// Pending reply indicator
    pub thinking: Text,
    /// Launcher button
    pub suggest: Text,
    /// Empty conversation greeting
    pub greeting: Text,
}

/// Every string the storefront shows, for one language.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Translations {
    /// Navigation labels
    pub nav: NavText,

    /// Hero copy
    pub hero: HeroText,

    /// Shop listing copy
    pub shop: ShopText,

    /// Product detail copy
    pub product: ProductText,

    /// Cart copy
    pub cart: CartText,

    /// Stylist copy
    pub ai: StylistText,

    categories: FxHashMap<Category, Text>,

    #[serde(default)]
    colors: FxHashMap<String, Text>,
}

impl Translations {
    /// Display name for a category.
    pub fn category(&self, category: Category) -> &str {
        self.categories
            .get(&category)
            .map_or(category.as_str(), Text::as_str)
    }

    /// Display name for a color, or the color itself when untranslated.
    pub fn color<'a>(&'a self, color: &'a str) -> &'a str {
        self.colors.get(color).map_or(color, Text::as_str)
    }

    /// Shipping progress message for the remaining amount.
    pub fn free_shipping_remaining(&self, amount: &str) -> String {
        self.cart
            .free_shipping_remaining
            .replace(AMOUNT_PLACEHOLDER, amount)
    }

    fn validate(&self, language: Language) -> Result<(), TranslationError> {
        if let Some(category) = Category::ALL
            .into_iter()
            .find(|category| !self.categories.contains_key(category))
        {
            return Err(TranslationError::MissingCategoryName { language, category });
        }

        if !self.cart.free_shipping_remaining.contains(AMOUNT_PLACEHOLDER) {
            return Err(TranslationError::MissingPlaceholder {
                language,
                key: "cart.free_shipping_remaining",
            });
        }

        Ok(())
    }
}

/// Translation tables for every supported language.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslationSet {
    en: Translations,
    ar: Translations,
}

impl TranslationSet {
    /// Load the tables bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns a `TranslationError` if the bundled tables are incomplete.
    pub fn bundled() -> Result<Self, TranslationError> {
        Self::from_yaml(TRANSLATIONS_YAML)
    }

    /// Parse and validate translation tables.
    ///
    /// # Errors
    ///
    /// Returns a `TranslationError` when a key is missing, unknown or blank,
    /// a category has no display name, or a template lacks its placeholder.
    pub fn from_yaml(yaml: &str) -> Result<Self, TranslationError> {
        let set: TranslationSet = serde_norway::from_str(yaml)?;

        for language in Language::ALL {
            set.get(language).validate(language)?;
        }

        Ok(set)
    }

    /// Returns the table for a language.
    pub fn get(&self, language: Language) -> &Translations {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}
