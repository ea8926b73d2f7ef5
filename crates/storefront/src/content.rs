//! Markdown-authored information panels (delivery, payment, warranty).
//!
//! Panels live in `content/sections/<slug>.md`. The YAML frontmatter carries
//! the panel title, the layout and a list of cards; each card body is
//! markdown. The text after the frontmatter is an optional lead paragraph.
//!
//! ```markdown
//! ---
//! title: Доставка
//! layout: stack
//! cards:
//!   - title: Курьерская доставка
//!     icon: truck
//!     body: |
//!       **Москва и МО:** 1-2 дня, от 300 ₽
//! ---
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use autoparts_core::Section;
use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use serde::Deserialize;

/// How the cards of a panel are arranged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelLayout {
    /// Cards stacked vertically.
    #[default]
    Stack,
    /// Cards in a two-column grid.
    Grid,
}

impl PanelLayout {
    /// CSS class for the card container.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Grid => "grid two",
        }
    }
}

/// Frontmatter of a card.
#[derive(Debug, Clone, Deserialize)]
pub struct CardMeta {
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub body: String,
}

/// Frontmatter of a panel.
#[derive(Debug, Clone, Deserialize)]
pub struct PanelMeta {
    pub title: String,
    #[serde(default)]
    pub layout: PanelLayout,
    #[serde(default)]
    pub cards: Vec<CardMeta>,
}

/// A card with its body rendered to HTML.
#[derive(Debug, Clone)]
pub struct Card {
    pub title: String,
    pub icon: Option<String>,
    pub body_html: String,
}

/// A rendered information panel.
#[derive(Debug, Clone)]
pub struct Panel {
    pub section: Section,
    pub title: String,
    pub layout: PanelLayout,
    pub lead_html: Option<String>,
    pub cards: Vec<Card>,
}

/// Information panels held in memory, keyed by section.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    panels: Arc<HashMap<Section, Panel>>,
}

impl ContentStore {
    /// Load all panels from `<content_dir>/sections`.
    ///
    /// Files whose stem is not a section slug are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or a panel fails to
    /// parse.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let dir = content_dir.join("sections");
        let mut panels = HashMap::new();

        if !dir.exists() {
            tracing::warn!("Sections directory does not exist: {:?}", dir);
            return Ok(Self::default());
        }

        let entries = std::fs::read_dir(&dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "md") {
                continue;
            }

            let panel = load_panel(&path)?;
            tracing::info!(section = %panel.section, cards = panel.cards.len(), "Loaded panel");
            panels.insert(panel.section, panel);
        }

        Ok(Self {
            panels: Arc::new(panels),
        })
    }

    /// Get the panel for a section.
    #[must_use]
    pub fn panel(&self, section: Section) -> Option<&Panel> {
        self.panels.get(&section)
    }

    /// Number of loaded panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Returns `true` if no panels were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

/// Load a single panel from a markdown file.
fn load_panel(path: &Path) -> Result<Panel, ContentError> {
    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))?;
    let section = slug
        .parse::<Section>()
        .map_err(|e| ContentError::Parse(format!("{}: {e}", path.display())))?;

    let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;
    parse_panel(section, &content)
}

/// Parse panel source text.
fn parse_panel(section: Section, source: &str) -> Result<Panel, ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed: ParsedEntity<PanelMeta> = matter
        .parse(source)
        .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
    let meta = parsed
        .data
        .ok_or_else(|| ContentError::Parse(format!("Missing frontmatter for {section}")))?;

    let lead = parsed.content.trim();
    let lead_html = (!lead.is_empty()).then(|| render_markdown(lead));

    let cards = meta
        .cards
        .into_iter()
        .map(|card| Card {
            title: card.title,
            icon: card.icon,
            body_html: render_markdown(&card.body),
        })
        .collect();

    Ok(Panel {
        section,
        title: meta.title,
        layout: meta.layout,
        lead_html,
        cards,
    })
}

/// Render markdown to HTML.
///
/// Raw HTML in the source is escaped; panels are plain prose.
fn render_markdown(content: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;

    markdown_to_html(content, &options)
}

/// Content loading errors
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PAYMENT: &str = "---
title: Оплата
layout: grid
cards:
  - title: Онлайн оплата
    icon: credit-card
    body: Банковские карты Visa, MasterCard, МИР
  - title: При получении
    body: Наличными или картой **курьеру**
---
";

    #[test]
    fn test_parse_panel_cards() {
        let panel = parse_panel(Section::Payment, PAYMENT).unwrap();
        assert_eq!(panel.title, "Оплата");
        assert_eq!(panel.layout, PanelLayout::Grid);
        assert_eq!(panel.cards.len(), 2);
        assert_eq!(panel.cards[0].icon.as_deref(), Some("credit-card"));
        assert!(panel.cards[1].icon.is_none());
        assert!(panel.cards[1].body_html.contains("<strong>курьеру</strong>"));
        assert!(panel.lead_html.is_none());
    }

    #[test]
    fn test_parse_panel_lead_paragraph() {
        let source = "---\ntitle: Гарантии\n---\nВсе запчасти оригинальные.\n";
        let panel = parse_panel(Section::Warranty, source).unwrap();
        assert_eq!(panel.layout, PanelLayout::Stack);
        assert!(panel.cards.is_empty());
        assert!(panel.lead_html.unwrap().contains("Все запчасти оригинальные."));
    }

    #[test]
    fn test_parse_panel_without_frontmatter_fails() {
        let result = parse_panel(Section::Delivery, "just text");
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_raw_html_is_not_passed_through() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_bundled_panels_load() {
        let store = ContentStore::load(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/content")))
            .unwrap();
        assert_eq!(store.len(), 3);
        for section in [Section::Delivery, Section::Payment, Section::Warranty] {
            assert!(store.panel(section).is_some(), "missing panel {section}");
        }
    }

    #[test]
    fn test_missing_directory_is_empty_store() {
        let store = ContentStore::load(Path::new("/nonexistent/autoparts")).unwrap();
        assert!(store.is_empty());
    }
}
