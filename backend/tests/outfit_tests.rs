//! Outfit advisor tests
//!
//! The threshold map is pure and total; the AI half is exercised against a
//! stubbed text-generation provider, including its never-throw contract.

use proptest::prelude::*;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared::{simple_suggestion, OutfitAdvice, WeatherReading, COLD_OUTFIT, LIGHT_OUTFIT, WARM_OUTFIT};
use stylist_backend::external::CohereClient;
use stylist_backend::services::OutfitService;

fn reading(temp_c: f64) -> WeatherReading {
    WeatherReading {
        city: "Lisbon".to_string(),
        temperature_c: temp_c,
        feels_like_c: temp_c,
        condition: "clear sky".to_string(),
        humidity_pct: 40,
        wind_speed_mps: 3.0,
    }
}

// ============================================================================
// Threshold Tests
// ============================================================================

#[test]
fn boundary_at_25_suggests_the_light_layer() {
    assert_eq!(simple_suggestion(25.0), LIGHT_OUTFIT);
}

#[test]
fn boundary_at_15_suggests_the_cold_outfit() {
    assert_eq!(simple_suggestion(15.0), COLD_OUTFIT);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_warm_band(temp in 25.001f64..60.0) {
        prop_assert_eq!(simple_suggestion(temp), WARM_OUTFIT);
    }

    #[test]
    fn prop_light_band(temp in 15.001f64..25.0) {
        prop_assert_eq!(simple_suggestion(temp), LIGHT_OUTFIT);
    }

    #[test]
    fn prop_cold_band(temp in -60.0f64..15.0) {
        prop_assert_eq!(simple_suggestion(temp), COLD_OUTFIT);
    }

    /// Every finite temperature lands in exactly one band
    #[test]
    fn prop_suggestion_is_total(temp in -90.0f64..60.0) {
        let suggestion = simple_suggestion(temp);
        prop_assert!([WARM_OUTFIT, LIGHT_OUTFIT, COLD_OUTFIT].contains(&suggestion));
    }
}

// ============================================================================
// AI Advisor Tests
// ============================================================================

#[tokio::test]
async fn ai_suggestion_returns_trimmed_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/generate"))
        .and(body_string_contains("Current weather: clear sky, 28"))
        .and(body_string_contains("What about shoes?"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "generations": [{ "text": "  Try a linen shirt. \n" }]
        })))
        .mount(&server)
        .await;

    let client = CohereClient::with_base_url(
        "test-key".to_string(),
        "command-light".to_string(),
        100,
        server.uri(),
    );
    let service = OutfitService::new(client);

    let advice = service.ai_suggestion(&reading(28.0), "What about shoes?").await;
    assert_eq!(
        advice,
        OutfitAdvice::Suggestion("Try a linen shirt.".to_string())
    );
}

#[tokio::test]
async fn ai_suggestion_degrades_to_a_warning_on_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = CohereClient::with_base_url(
        "test-key".to_string(),
        "command-light".to_string(),
        100,
        server.uri(),
    );
    let service = OutfitService::new(client);

    let advice = service.ai_suggestion(&reading(8.0), "Scarf?").await;
    assert!(advice.is_warning());
    match advice {
        OutfitAdvice::Warning(message) => assert!(message.starts_with("AI error:")),
        OutfitAdvice::Suggestion(_) => panic!("expected a warning"),
    }
}

#[tokio::test]
async fn ai_suggestion_warns_on_empty_generations() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "generations": [] })),
        )
        .mount(&server)
        .await;

    let client = CohereClient::with_base_url(
        "test-key".to_string(),
        "command-light".to_string(),
        100,
        server.uri(),
    );
    let service = OutfitService::new(client);

    let advice = service.ai_suggestion(&reading(20.0), "Hat?").await;
    assert!(advice.is_warning());
}
