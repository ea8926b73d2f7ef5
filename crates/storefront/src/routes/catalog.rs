//! Catalog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use autoparts_core::{Catalog, CatalogFilter, CatalogTab, Product, ProductId, Section};

use crate::filters;
use crate::routes::layout::Layout;
use crate::state::AppState;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub article: String,
    pub category: String,
    pub image: String,
    pub in_stock: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.to_string(),
            article: product.article.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            in_stock: product.in_stock,
        }
    }
}

/// Category tab display data for templates.
#[derive(Clone)]
pub struct TabView {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Catalog search query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Article search text.
    pub q: Option<String>,
    /// Tab key; unknown keys fall back to all products.
    pub tab: Option<String>,
}

impl CatalogQuery {
    /// Build the catalog filter from the raw query.
    #[must_use]
    pub fn to_filter(&self) -> CatalogFilter {
        let tab = self.tab.as_deref().map_or(CatalogTab::All, |key| {
            key.parse().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Ignoring catalog tab");
                CatalogTab::All
            })
        });
        CatalogFilter::new(self.q.as_deref().unwrap_or_default(), tab)
    }
}

/// Product grid fragment template (for HTMX live search).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductCardView>,
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub layout: Layout,
    /// Search text as typed.
    pub query: String,
    pub tab: &'static str,
    pub tabs: Vec<TabView>,
    pub products: Vec<ProductCardView>,
}

fn product_cards(catalog: &Catalog, filter: &CatalogFilter) -> Vec<ProductCardView> {
    catalog.filter(filter).map(ProductCardView::from).collect()
}

/// Display the catalog page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> CatalogTemplate {
    let filter = query.to_filter();
    let selected = filter.tab();

    CatalogTemplate {
        layout: Layout::titled(Section::Catalog, "Каталог запчастей"),
        query: query.q.clone().unwrap_or_default(),
        tab: selected.key(),
        tabs: CatalogTab::ALL
            .into_iter()
            .map(|tab| TabView {
                key: tab.key(),
                label: tab.label(),
                active: tab == selected,
            })
            .collect(),
        products: product_cards(state.catalog(), &filter),
    }
}

/// Render only the product grid (HTMX).
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> ProductGridTemplate {
    let filter = query.to_filter();
    ProductGridTemplate {
        products: product_cards(state.catalog(), &filter),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn query(q: Option<&str>, tab: Option<&str>) -> CatalogQuery {
        CatalogQuery {
            q: q.map(String::from),
            tab: tab.map(String::from),
        }
    }

    #[test]
    fn test_empty_query_is_default_filter() {
        assert_eq!(CatalogQuery::default().to_filter(), CatalogFilter::default());
    }

    #[test]
    fn test_unknown_tab_falls_back_to_all() {
        let filter = query(None, Some("wheels")).to_filter();
        assert_eq!(filter.tab(), CatalogTab::All);
    }

    #[test]
    fn test_product_cards_follow_filter() {
        let catalog = Catalog::default();
        let cards = product_cards(&catalog, &query(Some("bat"), None).to_filter());
        assert_eq!(cards.len(), 1);
        let battery = cards.first().unwrap();
        assert_eq!(battery.name, "Аккумулятор 60Ah");
        assert_eq!(battery.price, "5 500 ₽");
    }

    #[test]
    fn test_grid_marks_out_of_stock() {
        let catalog = Catalog::default();
        let html = ProductGridTemplate {
            products: product_cards(&catalog, &query(None, Some("suspension")).to_filter()),
        }
        .render()
        .unwrap();
        assert!(html.contains("Нет в наличии"));
        assert!(html.contains("disabled"));
        assert!(html.contains("Артикул: SUS-2024-04"));
    }

    #[test]
    fn test_grid_empty_state() {
        let html = ProductGridTemplate { products: vec![] }.render().unwrap();
        assert!(html.contains("Ничего не найдено"));
    }
}
