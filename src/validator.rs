/*!
 * API credential validation.
 *
 * Probes a candidate API key with one minimal translation request. Any
 * failure, whether the key is invalid, the quota is exhausted, or the
 * network is down, collapses to `false`; the distinction is logged but
 * not surfaced. Note that a successful probe consumes translation quota.
 */

use log::{error, info};

use crate::config::TranslatorConfig;
use crate::providers::{DeepL, TranslateOptions, TranslationApi};

/// Fixed probe sentence, translated EN -> JA
const PROBE_TEXT: &str = "This is a test.";

/// Check whether an API key is accepted by the DeepL API
pub async fn validate_api_key(api_key: &str) -> bool {
    let config = match TranslatorConfig::new(api_key) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return false;
        }
    };
    validate_with_config(&config).await
}

/// Check a credential using a full configuration (endpoint override, timeout)
pub async fn validate_with_config(config: &TranslatorConfig) -> bool {
    let client = DeepL::new(config);
    match client
        .translate_text(PROBE_TEXT, "EN", "JA", None, &TranslateOptions::new())
        .await
    {
        Ok(_) => {
            info!("Given API key is valid.");
            true
        }
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}
