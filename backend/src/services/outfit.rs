//! Outfit advisor service
//!
//! The deterministic threshold half lives in `shared::outfit`; this service
//! adds the AI half, which forwards the cached reading plus the user's
//! question to the text-generation provider.

use shared::{OutfitAdvice, WeatherReading};

use crate::external::CohereClient;

/// AI outfit advisor
#[derive(Clone)]
pub struct OutfitService {
    generator: CohereClient,
}

impl OutfitService {
    /// Create a new OutfitService instance
    pub fn new(generator: CohereClient) -> Self {
        Self { generator }
    }

    /// Ask the provider for outfit ideas for the given reading and question.
    ///
    /// Never fails the caller: a provider error comes back as
    /// [`OutfitAdvice::Warning`] so the presentation layer always has
    /// something to render.
    pub async fn ai_suggestion(&self, reading: &WeatherReading, question: &str) -> OutfitAdvice {
        let prompt = format!(
            "Current weather: {}, {}°C. Suggest outfits.\n\nUser question: {}",
            reading.condition, reading.temperature_c, question
        );

        match self.generator.generate(&prompt).await {
            Ok(text) => OutfitAdvice::Suggestion(text),
            Err(err) => {
                tracing::warn!("Outfit generation failed: {}", err);
                OutfitAdvice::Warning(format!("AI error: {}", err))
            }
        }
    }
}
