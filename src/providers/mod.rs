/*!
 * Provider client for the translation service.
 *
 * This module contains the client implementation for the DeepL v2 API and
 * the `TranslationApi` trait it implements. The trait is the seam between
 * the glossary registry logic and the HTTP client, allowing tests to swap
 * in a mock that never touches the network.
 */

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;

use crate::errors::ProviderError;

pub mod deepl;

pub use deepl::{
    DeepL, Formality, GlossaryHandle, Language, LanguagePair, SplitSentences, TagHandling,
    TranslateOptions, Translation,
};

/// Remote operations the translator delegates to the provider
///
/// Every method is a direct counterpart of one DeepL API endpoint; no
/// retries or local fallback behavior is layered on top.
#[async_trait]
pub trait TranslationApi: Send + Sync + Debug {
    /// Translate one text, optionally biased by a glossary
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `source_lang` - Source language code, e.g. "EN"
    /// * `target_lang` - Target language code, e.g. "JA"
    /// * `glossary_id` - Provider-assigned glossary identifier to attach
    /// * `options` - Optional translation parameters, forwarded verbatim
    ///
    /// # Returns
    /// * `Result<Translation, ProviderError>` - The translation or an error
    async fn translate_text(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        glossary_id: Option<&str>,
        options: &TranslateOptions,
    ) -> Result<Translation, ProviderError>;

    /// Create a glossary from term pairs
    async fn create_glossary(
        &self,
        name: &str,
        source_lang: &str,
        target_lang: &str,
        entries: &HashMap<String, String>,
    ) -> Result<GlossaryHandle, ProviderError>;

    /// Create a glossary from raw CSV text, forwarded without local parsing
    async fn create_glossary_from_csv(
        &self,
        name: &str,
        source_lang: &str,
        target_lang: &str,
        csv_data: &str,
    ) -> Result<GlossaryHandle, ProviderError>;

    /// Fetch the current entries of a glossary
    async fn glossary_entries(
        &self,
        glossary: &GlossaryHandle,
    ) -> Result<HashMap<String, String>, ProviderError>;

    /// Delete a glossary on the provider side
    async fn delete_glossary(&self, glossary: &GlossaryHandle) -> Result<(), ProviderError>;

    /// Languages the provider can translate from
    async fn source_languages(&self) -> Result<Vec<Language>, ProviderError>;

    /// Languages the provider can translate into
    async fn target_languages(&self) -> Result<Vec<Language>, ProviderError>;

    /// Language pairs glossaries are supported for
    async fn glossary_language_pairs(&self) -> Result<Vec<LanguagePair>, ProviderError>;
}
