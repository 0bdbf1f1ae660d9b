/*!
 * Mock provider implementation for testing
 *
 * This module provides a mock implementation of the `TranslationApi` trait
 * to avoid external API calls in tests. Glossaries created through the mock
 * are held in memory so entry listing and deletion behave like the real
 * service, and a call tracker records every request for assertions.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use deepl_glossary::errors::ProviderError;
use deepl_glossary::providers::{
    GlossaryHandle, Language, LanguagePair, TranslateOptions, Translation, TranslationApi,
};

/// Tracks API calls to ensure no unexpected requests are made
#[derive(Debug, Default)]
pub struct ApiCallTracker {
    /// Count of mock API calls made
    pub call_count: usize,
    /// Glossary id attached to the last translate call, if any
    pub last_glossary_id: Option<String>,
    /// Should the next call fail
    pub should_fail: bool,
    /// Error to return if failing
    pub error_type: MockErrorType,
}

/// Type of error to simulate
#[derive(Debug, Clone, Copy, Default)]
pub enum MockErrorType {
    /// Authentication error (invalid API key)
    #[default]
    Auth,
    /// Connection error
    Connection,
    /// Rate limit error
    RateLimit,
    /// Quota exhausted error
    Quota,
    /// API error
    Api,
}

/// Mock implementation of the DeepL API
#[derive(Debug)]
pub struct MockApi {
    tracker: Arc<Mutex<ApiCallTracker>>,
    /// Remote-side glossary store: glossary id -> entries
    store: Arc<Mutex<HashMap<String, HashMap<String, String>>>>,
    /// Monotonic id counter
    next_id: Arc<Mutex<usize>>,
}

impl MockApi {
    /// Create a new mock API
    pub fn new() -> Self {
        MockApi {
            tracker: Arc::new(Mutex::new(ApiCallTracker::default())),
            store: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(0)),
        }
    }

    /// Get the API call tracker
    pub fn tracker(&self) -> Arc<Mutex<ApiCallTracker>> {
        self.tracker.clone()
    }

    /// Configure the mock to fail on the next call
    pub fn fail_next_call(&self, error_type: MockErrorType) {
        let mut tracker = self.tracker.lock().unwrap();
        tracker.should_fail = true;
        tracker.error_type = error_type;
    }

    /// Record a call and return the scripted error if one is pending
    fn track_call(&self) -> Result<(), ProviderError> {
        let mut tracker = self.tracker.lock().unwrap();
        tracker.call_count += 1;

        if tracker.should_fail {
            tracker.should_fail = false; // Reset for next call
            return match tracker.error_type {
                MockErrorType::Auth => {
                    Err(ProviderError::AuthenticationError("Invalid API key".into()))
                }
                MockErrorType::Connection => {
                    Err(ProviderError::RequestFailed("Connection failed".into()))
                }
                MockErrorType::RateLimit => {
                    Err(ProviderError::RateLimitExceeded("Rate limit exceeded".into()))
                }
                MockErrorType::Quota => {
                    Err(ProviderError::QuotaExceeded("Quota exceeded".into()))
                }
                MockErrorType::Api => Err(ProviderError::ApiError {
                    status_code: 400,
                    message: "Bad request".into(),
                }),
            };
        }
        Ok(())
    }

    /// Store entries under a fresh id and build the matching handle
    fn store_glossary(
        &self,
        name: &str,
        source_lang: &str,
        target_lang: &str,
        entries: HashMap<String, String>,
    ) -> GlossaryHandle {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let glossary_id = format!("mock-glossary-{}", *next_id);

        let handle = GlossaryHandle {
            glossary_id: glossary_id.clone(),
            name: name.to_string(),
            ready: true,
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            creation_time: None,
            entry_count: entries.len() as u64,
        };
        self.store.lock().unwrap().insert(glossary_id, entries);
        handle
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationApi for MockApi {
    async fn translate_text(
        &self,
        text: &str,
        _source_lang: &str,
        _target_lang: &str,
        glossary_id: Option<&str>,
        _options: &TranslateOptions,
    ) -> Result<Translation, ProviderError> {
        self.track_call()?;
        self.tracker.lock().unwrap().last_glossary_id = glossary_id.map(str::to_string);

        Ok(Translation {
            detected_source_language: Some("EN".to_string()),
            text: format!("translated: {}", text),
        })
    }

    async fn create_glossary(
        &self,
        name: &str,
        source_lang: &str,
        target_lang: &str,
        entries: &HashMap<String, String>,
    ) -> Result<GlossaryHandle, ProviderError> {
        self.track_call()?;
        Ok(self.store_glossary(name, source_lang, target_lang, entries.clone()))
    }

    async fn create_glossary_from_csv(
        &self,
        name: &str,
        source_lang: &str,
        target_lang: &str,
        csv_data: &str,
    ) -> Result<GlossaryHandle, ProviderError> {
        self.track_call()?;

        // The real service parses the CSV; the mock does the same so that
        // entry listing works after a file-based create.
        let entries: HashMap<String, String> = csv_data
            .lines()
            .filter_map(|line| {
                line.split_once(',')
                    .map(|(source, target)| (source.to_string(), target.to_string()))
            })
            .collect();
        Ok(self.store_glossary(name, source_lang, target_lang, entries))
    }

    async fn glossary_entries(
        &self,
        glossary: &GlossaryHandle,
    ) -> Result<HashMap<String, String>, ProviderError> {
        self.track_call()?;
        self.store
            .lock()
            .unwrap()
            .get(&glossary.glossary_id)
            .cloned()
            .ok_or_else(|| ProviderError::ApiError {
                status_code: 404,
                message: format!("Glossary {} not found", glossary.glossary_id),
            })
    }

    async fn delete_glossary(&self, glossary: &GlossaryHandle) -> Result<(), ProviderError> {
        self.track_call()?;
        match self.store.lock().unwrap().remove(&glossary.glossary_id) {
            Some(_) => Ok(()),
            None => Err(ProviderError::ApiError {
                status_code: 404,
                message: format!("Glossary {} not found", glossary.glossary_id),
            }),
        }
    }

    async fn source_languages(&self) -> Result<Vec<Language>, ProviderError> {
        self.track_call()?;
        Ok(vec![
            Language {
                language: "EN".to_string(),
                name: "English".to_string(),
                supports_formality: None,
            },
            Language {
                language: "JA".to_string(),
                name: "Japanese".to_string(),
                supports_formality: None,
            },
        ])
    }

    async fn target_languages(&self) -> Result<Vec<Language>, ProviderError> {
        self.track_call()?;
        Ok(vec![
            Language {
                language: "EN-US".to_string(),
                name: "English (American)".to_string(),
                supports_formality: Some(false),
            },
            Language {
                language: "JA".to_string(),
                name: "Japanese".to_string(),
                supports_formality: Some(true),
            },
        ])
    }

    async fn glossary_language_pairs(&self) -> Result<Vec<LanguagePair>, ProviderError> {
        self.track_call()?;
        Ok(vec![
            LanguagePair {
                source_lang: "en".to_string(),
                target_lang: "ja".to_string(),
            },
            LanguagePair {
                source_lang: "ja".to_string(),
                target_lang: "en".to_string(),
            },
        ])
    }
}
