/*!
 * Glossary-backed translation service.
 *
 * `GlossaryTranslator` owns one provider client and a registry mapping
 * caller-chosen glossary names to the handles DeepL assigns on creation.
 * Every operation references glossaries by that local name; the handle
 * itself stays opaque and is only forwarded back to the provider.
 */

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::config::TranslatorConfig;
use crate::errors::{Result, TranslatorError};
use crate::providers::{
    DeepL, GlossaryHandle, Language, LanguagePair, TranslateOptions, TranslationApi,
};

/// Translation service with named glossary management
///
/// The registry is owned by this instance and mutated through `&mut self`,
/// so concurrent create/delete races are ruled out at compile time. Wrap
/// the translator in a mutex if it has to be shared across tasks.
#[derive(Debug)]
pub struct GlossaryTranslator<A: TranslationApi> {
    /// Provider client bound to one credential
    api: A,
    /// Local registry: glossary name -> provider-assigned handle
    glossaries: HashMap<String, GlossaryHandle>,
}

impl GlossaryTranslator<DeepL> {
    /// Create a translator backed by the DeepL API
    pub fn new(config: &TranslatorConfig) -> Self {
        Self::with_api(DeepL::new(config))
    }
}

impl<A: TranslationApi> GlossaryTranslator<A> {
    /// Create a translator over any provider implementation
    pub fn with_api(api: A) -> Self {
        Self {
            api,
            glossaries: HashMap::new(),
        }
    }

    /// Names currently registered, in no particular order
    pub fn glossary_names(&self) -> Vec<&str> {
        self.glossaries.keys().map(String::as_str).collect()
    }

    /// Look up a registered handle or fail with `GlossaryNotFound`
    fn registered(&self, name: &str) -> Result<&GlossaryHandle> {
        self.glossaries
            .get(name)
            .ok_or_else(|| TranslatorError::GlossaryNotFound(name.to_string()))
    }

    /// Store a freshly created handle and log its metadata
    ///
    /// Re-creating an existing name rebinds it to the new handle without
    /// deleting the old remote glossary; the caller owns that cleanup.
    fn register(&mut self, name: &str, glossary: GlossaryHandle) {
        info!(
            "Created: \"{}\" ({}) {} -> {} containing {} entries",
            glossary.name,
            glossary.glossary_id,
            glossary.source_lang,
            glossary.target_lang,
            glossary.entry_count
        );
        self.glossaries.insert(name.to_string(), glossary);
    }

    /// Create a glossary from term pairs and register it under `name`
    pub async fn create_glossary_from_entries(
        &mut self,
        name: &str,
        entries: &HashMap<String, String>,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<()> {
        let glossary = self
            .api
            .create_glossary(name, source_lang, target_lang, entries)
            .await?;
        self.register(name, glossary);
        Ok(())
    }

    /// Create a glossary from a CSV file and register it under `name`
    ///
    /// The file is read fully as UTF-8 and forwarded verbatim; the provider
    /// does the parsing and rejects malformed content.
    pub async fn create_glossary_from_file<P: AsRef<Path>>(
        &mut self,
        name: &str,
        path: P,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<()> {
        let csv_data = fs::read_to_string(path)?;
        let glossary = self
            .api
            .create_glossary_from_csv(name, source_lang, target_lang, &csv_data)
            .await?;
        self.register(name, glossary);
        Ok(())
    }

    /// Fetch the current entries of the glossary registered under `name`
    pub async fn glossary_entries(&self, name: &str) -> Result<HashMap<String, String>> {
        let glossary = self.registered(name)?;
        let entries = self.api.glossary_entries(glossary).await?;
        for (source, target) in &entries {
            info!("{} -> {}", source, target);
        }
        Ok(entries)
    }

    /// Delete the glossary registered under `name`
    ///
    /// The local entry is removed only after the remote delete succeeds;
    /// on failure it stays registered so the delete can be retried.
    pub async fn delete_glossary(&mut self, name: &str) -> Result<()> {
        let glossary = self.registered(name)?;
        self.api.delete_glossary(glossary).await?;
        self.glossaries.remove(name);
        info!("Deleted glossary \"{}\"", name);
        Ok(())
    }

    /// Delete every registered glossary, best effort
    ///
    /// All registered glossaries are attempted even if some deletions fail.
    /// Successful ones are unregistered; the first error encountered is
    /// returned after the full sweep, with the failed names still registered.
    pub async fn delete_all_glossaries(&mut self) -> Result<()> {
        let names: Vec<String> = self.glossaries.keys().cloned().collect();
        let mut first_error = None;
        for name in names {
            if let Err(e) = self.delete_glossary(&name).await {
                debug!("Failed to delete glossary \"{}\": {}", name, e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Translate `text`, optionally biased by a registered glossary
    ///
    /// An unregistered `glossary_name` fails before any request is made.
    /// Only the translated text is returned; response metadata is logged
    /// at debug level and discarded.
    pub async fn translate(
        &self,
        text: &str,
        glossary_name: Option<&str>,
        source_lang: &str,
        target_lang: &str,
        options: &TranslateOptions,
    ) -> Result<String> {
        let glossary_id = match glossary_name {
            Some(name) => Some(self.registered(name)?.glossary_id.as_str()),
            None => None,
        };

        let translation = self
            .api
            .translate_text(text, source_lang, target_lang, glossary_id, options)
            .await?;

        if let Some(detected) = &translation.detected_source_language {
            debug!("Detected source language: {}", detected);
        }
        Ok(translation.text)
    }

    /// Languages the provider can translate from
    pub async fn source_languages(&self) -> Result<Vec<Language>> {
        let languages = self.api.source_languages().await?;
        for language in &languages {
            info!("{}: {}", language.name, language.language);
        }
        Ok(languages)
    }

    /// Languages the provider can translate into
    ///
    /// Logs whether each language supports the formality option.
    pub async fn target_languages(&self) -> Result<Vec<Language>> {
        let languages = self.api.target_languages().await?;
        for language in &languages {
            if language.supports_formality.unwrap_or(false) {
                info!("{}: {} supports formality", language.name, language.language);
            } else {
                info!("{}: {} not supports formality", language.name, language.language);
            }
        }
        Ok(languages)
    }

    /// Language pairs glossaries can be created for
    pub async fn glossary_language_pairs(&self) -> Result<Vec<LanguagePair>> {
        let pairs = self.api.glossary_language_pairs().await?;
        for pair in &pairs {
            info!("from {} to {}", pair.source_lang, pair.target_lang);
        }
        Ok(pairs)
    }
}
