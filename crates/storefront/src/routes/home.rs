//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use autoparts_core::{Section, VIN_LENGTH};

use crate::filters;
use crate::routes::layout::Layout;

/// A feature tile below the hero.
#[derive(Clone)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// The four store features shown on the home page.
pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "shield",
        title: "Гарантия качества",
        text: "Только оригинальные запчасти",
    },
    Feature {
        icon: "truck",
        title: "Быстрая доставка",
        text: "По всей России за 1-3 дня",
    },
    Feature {
        icon: "credit-card",
        title: "Удобная оплата",
        text: "Наличными или картой",
    },
    Feature {
        icon: "headphones",
        title: "Поддержка 24/7",
        text: "Всегда на связи",
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub features: Vec<Feature>,
    /// Maximum length of the VIN input.
    pub vin_length: usize,
}

/// Display the home page.
#[instrument]
pub async fn home() -> HomeTemplate {
    HomeTemplate {
        layout: Layout::titled(Section::Home, "Оригинальные запчасти"),
        features: FEATURES.to_vec(),
        vin_length: VIN_LENGTH,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_home_renders_hero_and_features() {
        let html = home().await.render().unwrap();
        assert!(html.contains("Оригинальные запчасти для вашего автомобиля"));
        assert!(html.contains("VIN-декодер"));
        assert!(html.contains("maxlength=\"17\""));
        for feature in &FEATURES {
            assert!(html.contains(feature.title));
        }
    }

    #[tokio::test]
    async fn test_home_highlights_home_link() {
        let html = home().await.render().unwrap();
        assert!(html.contains("aria-current=\"page\">Главная<"));
    }
}
