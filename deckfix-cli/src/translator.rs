//! Papago-backed translation collaborator.
//!
//! One blocking HTTP call per `translate`; retry and backoff are not
//! attempted here since the pipeline already treats failures as non-fatal
//! and spaces calls with its own delay.

use std::time::Duration;

use deckfix::{Error, Translator};
use serde::Deserialize;
use uuid::Uuid;

const PAPAGO_URL: &str = "https://papago.naver.com/apis/n2mt/translate";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub struct PapagoTranslator {
    client: reqwest::blocking::Client,
    source: String,
    target: String,
    device_id: String,
}

#[derive(Debug, Deserialize)]
struct PapagoResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl PapagoTranslator {
    pub fn new(source: &str, target: &str) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::translation_error(format!("HTTP client init failed: {e}")))?;
        Ok(PapagoTranslator {
            client,
            source: source.to_string(),
            target: target.to_string(),
            device_id: Uuid::new_v4().to_string(),
        })
    }
}

impl Translator for PapagoTranslator {
    fn translate(&self, text: &str) -> Result<String, Error> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let params = [
            ("source", self.source.as_str()),
            ("target", self.target.as_str()),
            ("text", text),
            ("deviceId", self.device_id.as_str()),
        ];

        let response = self
            .client
            .post(PAPAGO_URL)
            .header("User-Agent", USER_AGENT)
            .header("x-apigw-partnerid", "papago")
            .form(&params)
            .send()
            .map_err(|e| Error::translation_error(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::translation_error(e.to_string()))?;

        let body: PapagoResponse = response
            .json()
            .map_err(|e| Error::translation_error(e.to_string()))?;
        Ok(body.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_short_circuits_without_network() {
        let translator = PapagoTranslator::new("en", "ko").unwrap();
        assert_eq!(translator.translate("   ").unwrap(), "   ");
        assert_eq!(translator.translate("").unwrap(), "");
    }
}
