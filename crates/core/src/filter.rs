//! Article search and category tabs over the catalog.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Error returned when a string names no known [`CatalogTab`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown catalog tab: {0}")]
pub struct CatalogTabParseError(pub String);

/// Category tab above the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CatalogTab {
    #[default]
    All,
    Engine,
    Suspension,
    Brakes,
}

impl CatalogTab {
    /// All tabs in display order.
    pub const ALL: [Self; 4] = [Self::All, Self::Engine, Self::Suspension, Self::Brakes];

    /// Tab key used in query strings.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Engine => "engine",
            Self::Suspension => "suspension",
            Self::Brakes => "brakes",
        }
    }

    /// Tab caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Все товары",
            Self::Engine => "Двигатель",
            Self::Suspension => "Подвеска",
            Self::Brakes => "Тормоза",
        }
    }

    /// The tab a product category belongs to.
    ///
    /// Categories without a dedicated tab are only listed under [`CatalogTab::All`].
    #[must_use]
    pub fn for_category(category: &str) -> Option<Self> {
        match category {
            "Двигатель" => Some(Self::Engine),
            "Подвеска" => Some(Self::Suspension),
            "Тормозная система" => Some(Self::Brakes),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CatalogTab {
    type Err = CatalogTabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.key() == s)
            .ok_or_else(|| CatalogTabParseError(s.to_owned()))
    }
}

/// Criteria for narrowing the product grid.
///
/// The default filter (empty query, [`CatalogTab::All`]) matches every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    query: String,
    tab: CatalogTab,
}

impl CatalogFilter {
    /// Create a filter. The query is trimmed and compared case-insensitively.
    #[must_use]
    pub fn new(query: &str, tab: CatalogTab) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            tab,
        }
    }

    /// The normalized article query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The selected tab.
    #[must_use]
    pub const fn tab(&self) -> CatalogTab {
        self.tab
    }

    /// Returns `true` if `product` passes both the article search and the tab.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let article_ok =
            self.query.is_empty() || product.article.to_lowercase().contains(&self.query);
        let tab_ok = self.tab == CatalogTab::All
            || CatalogTab::for_category(&product.category) == Some(self.tab);
        article_ok && tab_ok
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(catalog: &Catalog, filter: &CatalogFilter) -> Vec<i32> {
        catalog.filter(filter).map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_article_search_is_case_insensitive() {
        let catalog = Catalog::default();
        assert_eq!(ids(&catalog, &CatalogFilter::new("flt", CatalogTab::All)), vec![2]);
        assert_eq!(ids(&catalog, &CatalogFilter::new("  FLT-2024 ", CatalogTab::All)), vec![2]);
    }

    #[test]
    fn test_shared_article_fragment_matches_all() {
        let catalog = Catalog::default();
        let filter = CatalogFilter::new("2024", CatalogTab::All);
        assert_eq!(ids(&catalog, &filter).len(), catalog.len());
    }

    #[test]
    fn test_tab_filters_by_mapped_category() {
        let catalog = Catalog::default();
        assert_eq!(ids(&catalog, &CatalogFilter::new("", CatalogTab::Brakes)), vec![1]);
        assert_eq!(ids(&catalog, &CatalogFilter::new("", CatalogTab::Suspension)), vec![4]);
        assert_eq!(ids(&catalog, &CatalogFilter::new("", CatalogTab::Engine)), vec![6]);
    }

    #[test]
    fn test_query_and_tab_combine() {
        let catalog = Catalog::default();
        let filter = CatalogFilter::new("brk", CatalogTab::Engine);
        assert!(ids(&catalog, &filter).is_empty());
    }

    #[test]
    fn test_unmapped_categories_only_under_all() {
        assert_eq!(CatalogTab::for_category("Фильтры"), None);
        assert_eq!(CatalogTab::for_category("Электрика"), None);
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("brakes".parse::<CatalogTab>().unwrap(), CatalogTab::Brakes);
        assert!("wheels".parse::<CatalogTab>().is_err());
    }
}
