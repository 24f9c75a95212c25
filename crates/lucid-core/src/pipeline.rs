//! The request pipeline.

use parking_lot::Mutex;
use tracing::debug;

use lucid_config::SettingsCache;
use lucid_protocols::{Language, ModelId, RequestError, Settings};
use lucid_provider_gemini::{GeminiClient, GenerateContentRequest, TextStream};

use crate::cache::{CacheKey, ResultCache, DEFAULT_CAPACITY};
use crate::prompt::{build_prompt, PromptInput};

/// Per-call options.
#[derive(Debug, Clone, Default)]
pub struct SimplifyOptions {
    /// Model override; the cached settings' model otherwise.
    pub model: Option<ModelId>,
    /// Language override; the cached settings' language otherwise.
    pub language: Option<Language>,
    /// Also return the prompt that was sent.
    pub return_prompt: bool,
}

impl SimplifyOptions {
    pub fn with_model(mut self, model: ModelId) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_return_prompt(mut self) -> Self {
        self.return_prompt = true;
        self
    }
}

/// A completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifyResult {
    /// The rewritten text, trimmed.
    pub text: String,
    /// The prompt that produced it, when requested.
    pub prompt: Option<String>,
}

/// The request pipeline: settings resolution, prompt construction, the
/// provider call, and result memoization.
///
/// One pipeline instance is shared for the session. Each call runs its
/// steps strictly in order and issues at most one provider request; there
/// is no internal retry and no cancellation, the caller simply drops the
/// future if the user moved on.
pub struct Simplifier {
    settings: SettingsCache,
    client: GeminiClient,
    default_api_key: Option<String>,
    cache: Mutex<ResultCache>,
}

impl Simplifier {
    pub fn new(settings: SettingsCache) -> Self {
        Self {
            settings,
            client: GeminiClient::new(),
            default_api_key: None,
            cache: Mutex::new(ResultCache::new(DEFAULT_CAPACITY)),
        }
    }

    /// Swap the provider client, mainly for tests.
    pub fn with_client(mut self, client: GeminiClient) -> Self {
        self.client = client;
        self
    }

    /// Shared credential used when the user has not supplied a key.
    pub fn with_default_api_key(mut self, key: impl Into<String>) -> Self {
        self.default_api_key = Some(key.into());
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = Mutex::new(ResultCache::new(capacity));
        self
    }

    /// The settings cache backing this pipeline, for `update`/`invalidate`
    /// calls from the settings surface.
    pub fn settings(&self) -> &SettingsCache {
        &self.settings
    }

    /// Rewrite `input` in plain language. Memoized per (model, language,
    /// prompt) for the lifetime of the pipeline.
    pub async fn simplify(
        &self,
        input: &PromptInput,
        options: &SimplifyOptions,
    ) -> Result<SimplifyResult, RequestError> {
        let settings = self.settings.get();
        let api_key = self.resolve_credential(&settings)?;
        let model = options.model.unwrap_or(settings.model);
        let language = options.language.unwrap_or(settings.language);
        let prompt = build_prompt(input, language, &settings.extra_instructions);

        let key = CacheKey {
            model,
            language,
            prompt: prompt.clone(),
        };
        if let Some(text) = self.cache.lock().get(&key) {
            debug!("result cache hit: model={}", model);
            return Ok(SimplifyResult {
                text,
                prompt: options.return_prompt.then_some(prompt),
            });
        }

        let request = GenerateContentRequest::from_prompt(prompt.clone());
        let response = self.client.generate(&api_key, model, request).await?;
        let text = response
            .first_text()
            .ok_or(RequestError::EmptyResponse)?
            .trim()
            .to_string();

        self.cache.lock().insert(key, text.clone());

        Ok(SimplifyResult {
            text,
            prompt: options.return_prompt.then_some(prompt),
        })
    }

    /// Streaming variant: resolves settings and builds the prompt the same
    /// way, then yields text chunks as the provider delivers them.
    ///
    /// Chunk boundaries are not deterministic, so streamed output is never
    /// memoized.
    pub async fn simplify_stream(
        &self,
        input: &PromptInput,
        options: &SimplifyOptions,
    ) -> Result<TextStream, RequestError> {
        let settings = self.settings.get();
        let api_key = self.resolve_credential(&settings)?;
        let model = options.model.unwrap_or(settings.model);
        let language = options.language.unwrap_or(settings.language);
        let prompt = build_prompt(input, language, &settings.extra_instructions);

        let request = GenerateContentRequest::from_prompt(prompt);
        self.client.stream_generate(&api_key, model, request).await
    }

    /// The user's own key wins; the shared default fills in behind it.
    fn resolve_credential(&self, settings: &Settings) -> Result<String, RequestError> {
        let user_key = settings.api_key.trim();
        if !user_key.is_empty() {
            return Ok(user_key.to_string());
        }

        match self.default_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key.to_string()),
            _ => Err(RequestError::MissingCredential),
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
