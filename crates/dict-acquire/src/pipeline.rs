use crate::error::DictError;
use crate::fetch::{request_url, Fetch, HttpFetcher, Timeouts};
use crate::proxy::{self, ProxySettings};
use dict_model::{ConfigError, LanguagePair, ProxyConfig, Translation};

/// Everything one lookup needs, validated once up front.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    query: String,
    languages: LanguagePair,
    proxy: Option<ProxyConfig>,
    timeouts: Timeouts,
}

impl TranslationRequest {
    /// Join `terms` into the query phrase and validate the proxy options.
    pub fn new(
        terms: &[String],
        languages: LanguagePair,
        proxy: ProxySettings,
    ) -> Result<Self, ConfigError> {
        let query = terms.join(" ");
        if query.trim().is_empty() {
            return Err(ConfigError::EmptyQuery);
        }
        Ok(Self {
            query,
            languages,
            proxy: proxy.into_config()?,
            timeouts: Timeouts::default(),
        })
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn languages(&self) -> LanguagePair {
        self.languages
    }

    /// The explicitly configured proxy; `HTTPS_PROXY` is not consulted here.
    pub fn proxy(&self) -> Option<&ProxyConfig> {
        self.proxy.as_ref()
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }
}

/// Look up a phrase on dict.cc.
///
/// Resolves the proxy (explicit settings, then `HTTPS_PROXY`), performs a
/// single GET and extracts the word lists. A page without results is an
/// `Ok` translation that is not found; an empty response body is an error.
pub async fn translate(request: TranslationRequest) -> Result<Translation, DictError> {
    let proxy = proxy::resolve_from_env(request.proxy.clone())?;
    match &proxy {
        Some(p) => tracing::info!(proxy = %p, "Routing through proxy"),
        None => tracing::debug!("Direct connection"),
    }

    let fetcher = HttpFetcher::new(proxy.as_ref(), request.timeouts)?;
    translate_with(&request, &fetcher).await
}

/// [`translate`] with a caller-supplied fetcher; proxy resolution is the
/// fetcher's business.
pub async fn translate_with<F: Fetch>(
    request: &TranslationRequest,
    fetcher: &F,
) -> Result<Translation, DictError> {
    let url = request_url(&request.query, request.languages);
    let response = fetcher.fetch(&url).await?;

    let body = response.body.ok_or(DictError::EmptyBody {
        status: response.status,
    })?;

    let extraction = dict_parse::extract_report(&request.query, &body);
    if extraction.is_degraded() {
        tracing::warn!(
            malformed = extraction.malformed.len(),
            "Some result lines could not be parsed"
        );
    }

    let translation = extraction.translation;
    tracing::info!(
        query = %translation.query(),
        languages = %request.languages,
        destination = translation.destination().len(),
        source = translation.source().len(),
        found = translation.is_found(),
        "Extracted translation"
    );
    Ok(translation)
}
