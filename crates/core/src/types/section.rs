//! Page sections of the storefront.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string names no known [`Section`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct SectionParseError(pub String);

/// The panel currently shown to the visitor.
///
/// The storefront is one page with a fixed set of panels. Each panel has a
/// stable slug used in URLs and a Russian navigation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Home,
    Catalog,
    Delivery,
    Payment,
    Warranty,
    Contacts,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Catalog,
        Self::Delivery,
        Self::Payment,
        Self::Warranty,
        Self::Contacts,
    ];

    /// Stable identifier used in URLs and templates.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Catalog => "catalog",
            Self::Delivery => "delivery",
            Self::Payment => "payment",
            Self::Warranty => "warranty",
            Self::Contacts => "contacts",
        }
    }

    /// URL path that renders this section.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Catalog => "/catalog",
            Self::Delivery => "/delivery",
            Self::Payment => "/payment",
            Self::Warranty => "/warranty",
            Self::Contacts => "/contacts",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Главная",
            Self::Catalog => "Каталог",
            Self::Delivery => "Доставка",
            Self::Payment => "Оплата",
            Self::Warranty => "Гарантии",
            Self::Contacts => "Контакты",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| SectionParseError(s.to_owned()))
    }
}
