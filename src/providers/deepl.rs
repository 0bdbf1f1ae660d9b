use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::TranslatorConfig;
use crate::errors::ProviderError;
use crate::providers::TranslationApi;

/// DeepL client for interacting with the DeepL v2 API
#[derive(Debug)]
pub struct DeepL {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Base URL requests are sent to
    server_url: String,
}

/// How the input text is split into sentences before translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitSentences {
    /// No splitting; treat the whole input as one sentence
    Off,
    /// Split on punctuation and newlines (the API default)
    All,
    /// Split on punctuation only, ignoring newlines
    NoNewlines,
}

impl SplitSentences {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "0",
            Self::All => "1",
            Self::NoNewlines => "nonewlines",
        }
    }
}

/// Formality register of the translation, supported for some target languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formality {
    /// Formal register
    More,
    /// Informal register
    Less,
    /// Formal if the target language supports it, default otherwise
    PreferMore,
    /// Informal if the target language supports it, default otherwise
    PreferLess,
}

impl Formality {
    fn as_str(&self) -> &'static str {
        match self {
            Self::More => "more",
            Self::Less => "less",
            Self::PreferMore => "prefer_more",
            Self::PreferLess => "prefer_less",
        }
    }
}

/// Markup handling mode for the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagHandling {
    /// Treat the input as XML
    Xml,
    /// Treat the input as HTML
    Html,
}

impl TagHandling {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Html => "html",
        }
    }
}

/// Optional translation parameters, forwarded verbatim to the API
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// Sentence splitting mode
    pub split_sentences: Option<SplitSentences>,
    /// Whether to keep the original formatting instead of auto-correcting it
    pub preserve_formatting: Option<bool>,
    /// Formality register
    pub formality: Option<Formality>,
    /// Markup handling mode
    pub tag_handling: Option<TagHandling>,
    /// Additional context that influences but is not part of the translation
    pub context: Option<String>,
}

impl TranslateOptions {
    /// Create an empty options set; every unset field uses the API default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sentence splitting mode
    pub fn split_sentences(mut self, mode: SplitSentences) -> Self {
        self.split_sentences = Some(mode);
        self
    }

    /// Set whether original formatting is preserved
    pub fn preserve_formatting(mut self, preserve: bool) -> Self {
        self.preserve_formatting = Some(preserve);
        self
    }

    /// Set the formality register
    pub fn formality(mut self, formality: Formality) -> Self {
        self.formality = Some(formality);
        self
    }

    /// Set the markup handling mode
    pub fn tag_handling(mut self, mode: TagHandling) -> Self {
        self.tag_handling = Some(mode);
        self
    }

    /// Set the translation context
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Translation request body for the /v2/translate endpoint
#[derive(Debug, Serialize)]
struct TranslationRequest<'a> {
    /// Texts to translate
    text: Vec<&'a str>,

    /// Source language code
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<&'a str>,

    /// Target language code
    target_lang: &'a str,

    /// Sentence splitting mode
    #[serde(skip_serializing_if = "Option::is_none")]
    split_sentences: Option<&'static str>,

    /// Formatting preservation flag
    #[serde(skip_serializing_if = "Option::is_none")]
    preserve_formatting: Option<bool>,

    /// Formality register
    #[serde(skip_serializing_if = "Option::is_none")]
    formality: Option<&'static str>,

    /// Markup handling mode
    #[serde(skip_serializing_if = "Option::is_none")]
    tag_handling: Option<&'static str>,

    /// Additional context string
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,

    /// Glossary to bias the translation with
    #[serde(skip_serializing_if = "Option::is_none")]
    glossary_id: Option<&'a str>,
}

/// Translation response from the /v2/translate endpoint
#[derive(Debug, Deserialize)]
struct TranslationResponse {
    /// One entry per input text
    translations: Vec<Translation>,
}

/// A single translated text
#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    /// Language the API detected the input to be in
    #[serde(default)]
    pub detected_source_language: Option<String>,

    /// The translated text
    pub text: String,
}

/// A language supported by the API
#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    /// Language code, e.g. "EN" or "JA"
    pub language: String,

    /// Human-readable language name
    pub name: String,

    /// Whether the formality option is supported; only set for target languages
    #[serde(default)]
    pub supports_formality: Option<bool>,
}

/// A source/target pair glossaries can be created for
#[derive(Debug, Clone, Deserialize)]
pub struct LanguagePair {
    /// Source language code
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
}

/// Response from the /v2/glossary-language-pairs endpoint
#[derive(Debug, Deserialize)]
struct LanguagePairsResponse {
    supported_languages: Vec<LanguagePair>,
}

/// Glossary creation request body for the /v2/glossaries endpoint
#[derive(Debug, Serialize)]
struct CreateGlossaryRequest<'a> {
    name: &'a str,
    source_lang: &'a str,
    target_lang: &'a str,
    entries: &'a str,
    entries_format: &'static str,
}

/// Provider-assigned glossary metadata
///
/// Returned by the API on glossary creation. The fields are informational;
/// only `glossary_id` is ever sent back to the API.
#[derive(Debug, Clone, Deserialize)]
pub struct GlossaryHandle {
    /// Provider-assigned glossary identifier
    pub glossary_id: String,

    /// Name the glossary was created under
    pub name: String,

    /// Whether the glossary can already be used in translations
    #[serde(default)]
    pub ready: bool,

    /// Source language code
    pub source_lang: String,

    /// Target language code
    pub target_lang: String,

    /// Creation timestamp as reported by the API
    #[serde(default)]
    pub creation_time: Option<String>,

    /// Number of entries in the glossary
    #[serde(default)]
    pub entry_count: u64,
}

/// Serialize term pairs into the tab-separated entry format
///
/// One `source<TAB>target` line per pair. DeepL rejects terms containing
/// tabs or newlines, so no escaping is applied here.
pub fn entries_to_tsv(entries: &HashMap<String, String>) -> String {
    let mut tsv = String::new();
    for (source, target) in entries {
        tsv.push_str(source);
        tsv.push('\t');
        tsv.push_str(target);
        tsv.push('\n');
    }
    tsv
}

/// Parse the tab-separated entry format into term pairs
///
/// Lines without a tab separator are skipped; the API does not produce them.
pub fn entries_from_tsv(tsv: &str) -> HashMap<String, String> {
    tsv.lines()
        .filter_map(|line| {
            line.split_once('\t')
                .map(|(source, target)| (source.to_string(), target.to_string()))
        })
        .collect()
}

impl DeepL {
    /// Create a new DeepL client from a configuration
    pub fn new(config: &TranslatorConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: config.api_key.clone(),
            server_url: config.server_url().to_string(),
        }
    }

    /// Full URL for an API path like "glossaries"
    fn url(&self, path: &str) -> String {
        format!("{}/v2/{}", self.server_url, path)
    }

    /// Authorization header value
    fn auth_header(&self) -> String {
        format!("DeepL-Auth-Key {}", self.api_key)
    }

    /// Turn a non-success response into the matching provider error
    async fn error_from_response(response: reqwest::Response) -> ProviderError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to get error response text".to_string());
        error!("DeepL API error ({}): {}", status, body);
        match status.as_u16() {
            401 | 403 => ProviderError::AuthenticationError(body),
            429 => ProviderError::RateLimitExceeded(body),
            456 => ProviderError::QuotaExceeded(body),
            code => ProviderError::ApiError {
                status_code: code,
                message: body,
            },
        }
    }

    /// POST a glossary creation request and parse the returned handle
    async fn post_glossary(
        &self,
        request: &CreateGlossaryRequest<'_>,
    ) -> Result<GlossaryHandle, ProviderError> {
        let response = self
            .client
            .post(self.url("glossaries"))
            .header("Authorization", self.auth_header())
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<GlossaryHandle>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }

    /// GET a list of supported languages of the given type ("source"/"target")
    async fn languages(&self, lang_type: &str) -> Result<Vec<Language>, ProviderError> {
        let response = self
            .client
            .get(self.url("languages"))
            .header("Authorization", self.auth_header())
            .query(&[("type", lang_type)])
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<Vec<Language>>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl TranslationApi for DeepL {
    async fn translate_text(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        glossary_id: Option<&str>,
        options: &TranslateOptions,
    ) -> Result<Translation, ProviderError> {
        let request = TranslationRequest {
            text: vec![text],
            source_lang: if source_lang.is_empty() {
                None
            } else {
                Some(source_lang)
            },
            target_lang,
            split_sentences: options.split_sentences.map(|m| m.as_str()),
            preserve_formatting: options.preserve_formatting,
            formality: options.formality.map(|f| f.as_str()),
            tag_handling: options.tag_handling.map(|t| t.as_str()),
            context: options.context.as_deref(),
            glossary_id,
        };

        let response = self
            .client
            .post(self.url("translate"))
            .header("Authorization", self.auth_header())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let translated = response
            .json::<TranslationResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        translated
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ParseError("Response contained no translation".to_string()))
    }

    async fn create_glossary(
        &self,
        name: &str,
        source_lang: &str,
        target_lang: &str,
        entries: &HashMap<String, String>,
    ) -> Result<GlossaryHandle, ProviderError> {
        let tsv = entries_to_tsv(entries);
        let request = CreateGlossaryRequest {
            name,
            source_lang,
            target_lang,
            entries: &tsv,
            entries_format: "tsv",
        };
        self.post_glossary(&request).await
    }

    async fn create_glossary_from_csv(
        &self,
        name: &str,
        source_lang: &str,
        target_lang: &str,
        csv_data: &str,
    ) -> Result<GlossaryHandle, ProviderError> {
        let request = CreateGlossaryRequest {
            name,
            source_lang,
            target_lang,
            entries: csv_data,
            entries_format: "csv",
        };
        self.post_glossary(&request).await
    }

    async fn glossary_entries(
        &self,
        glossary: &GlossaryHandle,
    ) -> Result<HashMap<String, String>, ProviderError> {
        let response = self
            .client
            .get(self.url(&format!("glossaries/{}/entries", glossary.glossary_id)))
            .header("Authorization", self.auth_header())
            .header("Accept", "text/tab-separated-values")
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let tsv = response
            .text()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;
        Ok(entries_from_tsv(&tsv))
    }

    async fn delete_glossary(&self, glossary: &GlossaryHandle) -> Result<(), ProviderError> {
        let response = self
            .client
            .delete(self.url(&format!("glossaries/{}", glossary.glossary_id)))
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }

    async fn source_languages(&self) -> Result<Vec<Language>, ProviderError> {
        self.languages("source").await
    }

    async fn target_languages(&self) -> Result<Vec<Language>, ProviderError> {
        self.languages("target").await
    }

    async fn glossary_language_pairs(&self) -> Result<Vec<LanguagePair>, ProviderError> {
        let response = self
            .client
            .get(self.url("glossary-language-pairs"))
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let pairs = response
            .json::<LanguagePairsResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;
        Ok(pairs.supported_languages)
    }
}
