//! Contacts page and contact form handlers.
//!
//! Messages are validated and logged, never stored or forwarded.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use serde::Deserialize;
use tracing::instrument;

use autoparts_core::Section;

use crate::filters;
use crate::routes::layout::Layout;

/// A way to reach the store.
#[derive(Clone)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

/// Phone, email and address cards.
pub const CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        icon: "phone",
        title: "Телефон",
        value: "+7 (495) 123-45-67",
        note: "Ежедневно 9:00 - 21:00",
    },
    ContactChannel {
        icon: "mail",
        title: "Email",
        value: "info@autoparts.ru",
        note: "Ответим в течение часа",
    },
    ContactChannel {
        icon: "map-pin",
        title: "Адрес",
        value: "г. Москва, ул. Автомобильная, д. 1",
        note: "Пн-Сб: 9:00 - 20:00",
    },
];

/// Contact form data.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl ContactForm {
    /// Check the required fields, returning the message to show on failure.
    ///
    /// # Errors
    ///
    /// Returns a visitor-facing message if the name is blank or the email is
    /// not plausible.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Укажите ваше имя");
        }
        if !is_valid_email(self.email.trim()) {
            return Err("Укажите корректный email");
        }
        Ok(())
    }
}

/// Contacts page template.
#[derive(Template, WebTemplate)]
#[template(path = "sections/contacts.html")]
pub struct ContactsTemplate {
    pub layout: Layout,
    pub channels: Vec<ContactChannel>,
}

/// Contact form result fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/contact_result.html")]
pub struct ContactResultTemplate {
    pub ok: bool,
    pub message: String,
}

/// Display the contacts page.
#[instrument]
pub async fn contacts() -> ContactsTemplate {
    ContactsTemplate {
        layout: Layout::for_section(Section::Contacts),
        channels: CHANNELS.to_vec(),
    }
}

/// Accept a contact form submission (HTMX).
///
/// Validation failures are rendered as a fragment so HTMX swaps them in.
#[instrument(skip(form), fields(email = %form.email.trim()))]
pub async fn message(Form(form): Form<ContactForm>) -> ContactResultTemplate {
    match form.validate() {
        Ok(()) => {
            tracing::info!(
                name = %form.name.trim(),
                email = %form.email.trim().to_lowercase(),
                phone = %form.phone.trim(),
                "Contact request received"
            );
            ContactResultTemplate {
                ok: true,
                message: format!(
                    "Спасибо, {}! Мы свяжемся с вами в ближайшее время.",
                    form.name.trim()
                ),
            }
        }
        Err(reason) => {
            tracing::debug!(reason, "Contact request rejected");
            ContactResultTemplate {
                ok: false,
                message: reason.to_string(),
            }
        }
    }
}

/// Basic structural email check.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: String::new(),
        }
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("info@autoparts.ru"));
        assert!(!is_valid_email("info.autoparts.ru"));
        assert!(!is_valid_email("@autoparts.ru"));
        assert!(!is_valid_email("info@autoparts"));
        assert!(!is_valid_email("info@@autoparts.ru"));
        assert!(!is_valid_email("in fo@autoparts.ru"));
    }

    #[test]
    fn test_validate_requires_name() {
        assert_eq!(form("  ", "a@b.ru").validate(), Err("Укажите ваше имя"));
        assert_eq!(form("Иван", "nope").validate(), Err("Укажите корректный email"));
        assert_eq!(form("Иван", " a@b.ru ").validate(), Ok(()));
    }

    #[tokio::test]
    async fn test_message_acknowledges_valid_form() {
        let result = message(Form(form("Иван", "ivan@example.ru"))).await;
        assert!(result.ok);
        assert!(result.message.contains("Иван"));
    }

    #[tokio::test]
    async fn test_contacts_page_lists_channels() {
        let html = contacts().await.render().unwrap();
        assert!(html.contains("+7 (495) 123-45-67"));
        assert!(html.contains("info@autoparts.ru"));
        assert!(html.contains("г. Москва, ул. Автомобильная, д. 1"));
    }
}
