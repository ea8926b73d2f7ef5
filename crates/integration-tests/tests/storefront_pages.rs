//! Integration tests for pages, fragments and the middleware stack.

use autoparts_core::{Section, VIN_LENGTH};
use autoparts_integration_tests::TestClient;
use axum::http::StatusCode;

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_every_section_renders_with_active_link() {
    let mut client = TestClient::new();

    for section in Section::ALL {
        let page = client.get(section.path()).await;
        assert_eq!(page.status, StatusCode::OK, "section {section}");
        assert!(
            page.body
                .contains(&format!("aria-current=\"page\">{}<", section.label())),
            "section {section} not highlighted"
        );
        assert_eq!(
            page.body.matches("aria-current").count(),
            1,
            "section {section}"
        );
        assert!(page.body.contains("Все права защищены."));
    }
}

#[tokio::test]
async fn test_home_has_vin_decoder_and_features() {
    let mut client = TestClient::new();
    let page = client.get("/").await;

    assert!(page.body.contains("VIN-декодер"));
    assert!(page.body.contains(&format!("maxlength=\"{VIN_LENGTH}\"")));
    assert!(page.body.contains("Поддержка 24/7"));
}

#[tokio::test]
async fn test_information_panels_render_markdown() {
    let mut client = TestClient::new();

    let delivery = client.get("/delivery").await;
    assert!(delivery.body.contains("Курьерская доставка"));

    let payment = client.get("/payment").await;
    assert!(payment.body.contains("Онлайн оплата"));

    let warranty = client.get("/warranty").await;
    assert!(warranty.body.contains("Гарантия качества"));
}

#[tokio::test]
async fn test_contacts_page() {
    let mut client = TestClient::new();
    let page = client.get("/contacts").await;

    assert!(page.body.contains("+7 (495) 123-45-67"));
    assert!(page.body.contains("Пн-Сб: 9:00 - 20:00"));
    assert!(page.body.contains("hx-post=\"/contacts/message\""));
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_catalog_lists_every_product() {
    let mut client = TestClient::new();
    let page = client.get("/catalog").await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body.matches("Артикул:").count(), 6);
    assert!(page.body.contains("Нет в наличии"));
}

#[tokio::test]
async fn test_catalog_search_by_article() {
    let mut client = TestClient::new();
    let page = client.get("/catalog?q=flt").await;

    assert_eq!(page.body.matches("Артикул:").count(), 1);
    assert!(page.body.contains("FLT-2024-02"));
}

#[tokio::test]
async fn test_catalog_tab_filters_by_category() {
    let mut client = TestClient::new();
    let page = client.get("/catalog?tab=brakes").await;

    assert_eq!(page.body.matches("Артикул:").count(), 1);
    assert!(page.body.contains("BRK-2024-01"));
    assert!(page.body.contains("value=\"brakes\" class=\"active\""));
}

#[tokio::test]
async fn test_catalog_unknown_tab_shows_everything() {
    let mut client = TestClient::new();
    let page = client.get("/catalog?tab=wheels").await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body.matches("Артикул:").count(), 6);
}

#[tokio::test]
async fn test_catalog_grid_is_a_fragment() {
    let mut client = TestClient::new();
    let grid = client.get("/catalog/grid?q=zzz").await;

    assert_eq!(grid.status, StatusCode::OK);
    assert!(!grid.body.contains("<html"));
    assert!(grid.body.contains("Ничего не найдено"));
}

// =============================================================================
// VIN
// =============================================================================

#[tokio::test]
async fn test_vin_lookup_valid() {
    let mut client = TestClient::new();
    let result = client.post_form("/vin", "vin=wvwzzz1kzaw000001").await;

    assert_eq!(result.status, StatusCode::OK);
    assert!(result.body.contains("VIN-код WVWZZZ1KZAW000001 декодирован!"));
}

#[tokio::test]
async fn test_vin_lookup_wrong_length() {
    let mut client = TestClient::new();

    for form in ["vin=", "vin=WVWZZZ1KZAW00000", "vin=WVWZZZ1KZAW0000012"] {
        let result = client.post_form("/vin", form).await;
        assert_eq!(result.status, StatusCode::OK);
        assert!(result.body.contains("VIN-код должен содержать 17 символов"));
    }
}

#[tokio::test]
async fn test_vin_hint_counts_characters() {
    let mut client = TestClient::new();

    let hint = client.post_form("/vin/hint", "vin=WVWZZ").await;
    assert!(hint.body.contains("Введено символов: 5 из 17"));

    let hint = client.post_form("/vin/hint", "vin=").await;
    assert!(hint.body.trim().is_empty());
}

// =============================================================================
// Contact form
// =============================================================================

#[tokio::test]
async fn test_contact_message_accepted() {
    let mut client = TestClient::new();
    let result = client
        .post_form(
            "/contacts/message",
            "name=Ivan&email=ivan%40example.ru&phone=%2B79990000000",
        )
        .await;

    assert_eq!(result.status, StatusCode::OK);
    assert!(result.body.contains("Спасибо, Ivan!"));
}

#[tokio::test]
async fn test_contact_message_requires_valid_email() {
    let mut client = TestClient::new();
    let result = client
        .post_form("/contacts/message", "name=Ivan&email=ivan")
        .await;

    assert_eq!(result.status, StatusCode::OK);
    assert!(result.body.contains("notice error"));
}

// =============================================================================
// Middleware
// =============================================================================

#[tokio::test]
async fn test_security_headers_and_request_id() {
    let mut client = TestClient::new();
    let page = client.get("/").await;

    assert_eq!(page.header("x-frame-options"), Some("DENY"));
    assert_eq!(page.header("x-content-type-options"), Some("nosniff"));
    assert!(page.header("content-security-policy").is_some());
    assert!(page.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_static_assets_served() {
    let mut client = TestClient::new();
    let css = client.get("/static/css/main.css").await;
    assert_eq!(css.status, StatusCode::OK);
    assert!(css.body.contains(".cart-sheet"));
}

#[tokio::test]
async fn test_health() {
    let mut client = TestClient::new();
    let health = client.get("/health").await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body, "ok");
}
