/*!
 * # deepl-glossary
 *
 * A Rust client for the DeepL v2 API with named glossary management.
 *
 * ## Features
 *
 * - Translate text with optional sentence-splitting, formality,
 *   tag-handling, and context parameters
 * - Create glossaries from in-memory term pairs or CSV files and reference
 *   them by a caller-chosen name instead of the provider-assigned id
 * - List, delete, and bulk-delete registered glossaries
 * - Enumerate supported source/target languages and glossary language pairs
 * - Validate an API key with a single probe request
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `config`: Client configuration and API key handling
 * - `providers`: DeepL API client and the `TranslationApi` trait
 * - `translator`: Glossary registry and translation operations
 * - `validator`: API credential validation
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Public modules
pub mod config;
pub mod errors;
pub mod providers;
pub mod translator;
pub mod validator;

// Re-export main types for easier usage
pub use config::TranslatorConfig;
pub use errors::{ProviderError, Result, TranslatorError};
pub use providers::{
    DeepL, Formality, GlossaryHandle, Language, LanguagePair, SplitSentences, TagHandling,
    TranslateOptions, Translation, TranslationApi,
};
pub use translator::GlossaryTranslator;
pub use validator::{validate_api_key, validate_with_config};
