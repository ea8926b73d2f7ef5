//! VIN lookup route handlers.
//!
//! The lookup only validates the length of the code. No decoding happens: a
//! valid VIN gets a placeholder acknowledgement, an invalid one a message
//! asking for 17 characters. Both are rendered as HTMX fragments with status
//! 200 so they are swapped into the hero card.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use serde::Deserialize;
use tracing::instrument;

use autoparts_core::{validate, vin_progress};

/// VIN form data.
#[derive(Debug, Deserialize)]
pub struct VinForm {
    #[serde(default)]
    pub vin: String,
}

/// Outcome of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VinOutcome {
    pub ok: bool,
    pub message: String,
}

impl VinOutcome {
    /// Validate `input` and build the message shown to the visitor.
    #[must_use]
    pub fn for_input(input: &str) -> Self {
        match validate(input) {
            Ok(vin) => Self {
                ok: true,
                message: format!(
                    "VIN-код {vin} декодирован! Подбираем запчасти для вашего автомобиля..."
                ),
            },
            Err(err) => Self {
                ok: false,
                message: err.to_string(),
            },
        }
    }
}

/// VIN lookup result fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/vin_result.html")]
pub struct VinResultTemplate {
    pub outcome: VinOutcome,
}

/// Characters typed so far out of the required number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VinProgress {
    pub entered: usize,
    pub required: usize,
}

/// Typing progress fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/vin_hint.html")]
pub struct VinHintTemplate {
    /// Present while the code is non-empty and incomplete.
    pub progress: Option<VinProgress>,
}

/// Look up a VIN (HTMX).
#[instrument]
pub async fn lookup(Form(form): Form<VinForm>) -> VinResultTemplate {
    let outcome = VinOutcome::for_input(&form.vin);
    if outcome.ok {
        // Length check only; the code is not decoded.
        tracing::info!(vin = %form.vin.to_uppercase(), decoded = false, "VIN accepted");
    } else {
        tracing::debug!(length = form.vin.chars().count(), "VIN rejected");
    }
    VinResultTemplate { outcome }
}

/// Show how many characters have been typed (HTMX).
#[instrument]
pub async fn hint(Form(form): Form<VinForm>) -> VinHintTemplate {
    VinHintTemplate {
        progress: vin_progress(&form.vin)
            .map(|(entered, required)| VinProgress { entered, required }),
    }
}
