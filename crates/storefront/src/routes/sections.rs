//! Information panel handlers (delivery, payment, warranty).

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use autoparts_core::Section;

use crate::content::Panel;
use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::layout::Layout;
use crate::state::AppState;

/// Information panel template.
#[derive(Template, WebTemplate)]
#[template(path = "sections/panel.html")]
pub struct PanelTemplate {
    pub layout: Layout,
    pub panel: Panel,
}

fn panel_page(state: &AppState, section: Section) -> Result<PanelTemplate> {
    let panel = state
        .content()
        .panel(section)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("panel {section}")))?;

    Ok(PanelTemplate {
        layout: Layout::titled(section, &panel.title),
        panel,
    })
}

/// Display the delivery panel.
///
/// # Errors
///
/// Returns 404 if no delivery content was loaded.
#[instrument(skip(state))]
pub async fn delivery(State(state): State<AppState>) -> Result<PanelTemplate> {
    panel_page(&state, Section::Delivery)
}

/// Display the payment panel.
///
/// # Errors
///
/// Returns 404 if no payment content was loaded.
#[instrument(skip(state))]
pub async fn payment(State(state): State<AppState>) -> Result<PanelTemplate> {
    panel_page(&state, Section::Payment)
}

/// Display the warranty panel.
///
/// # Errors
///
/// Returns 404 if no warranty content was loaded.
#[instrument(skip(state))]
pub async fn warranty(State(state): State<AppState>) -> Result<PanelTemplate> {
    panel_page(&state, Section::Warranty)
}
