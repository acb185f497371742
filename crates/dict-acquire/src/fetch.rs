use crate::error::DictError;
use dict_model::{ConfigError, LanguagePair, ProxyConfig};
use std::future::Future;
use std::time::Duration;
use url::Url;

/// dict.cc serves reduced markup to clients it does not recognize, so this
/// exact value has to be sent.
pub const USER_AGENT: &str = "Mozilla/6.0";

const BASE_DOMAIN: &str = "dict.cc";
const MAX_REDIRECTS: usize = 10;

/// Build the lookup URL: `https://{src}{dst}.dict.cc/?s={query}`.
pub fn request_url(query: &str, languages: LanguagePair) -> Url {
    let mut url = Url::parse(&format!("https://{}.{BASE_DOMAIN}/", languages.subdomain()))
        .expect("valid dict.cc URL");
    url.query_pairs_mut().append_pair("s", query);
    url
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Upper bound for the whole request, body included.
    pub request: Duration,
    pub connect: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(10),
            connect: Duration::from_secs(5),
        }
    }
}

/// Raw outcome of a lookup request. `body` is `None` when the server sent
/// no content at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Option<String>,
}

/// Something that can GET a URL and hand back status and body.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<FetchResponse, DictError>> + Send;
}

/// [`Fetch`] over a real HTTP client, optionally routed through a proxy.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(proxy: Option<&ProxyConfig>, timeouts: Timeouts) -> Result<Self, DictError> {
        let builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .http1_only()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(timeouts.request)
            .connect_timeout(timeouts.connect);

        // Proxy selection is ours alone; never let the client read the
        // environment on its own.
        let builder = match proxy {
            Some(proxy) => builder.proxy(client_proxy(proxy)?),
            None => builder.no_proxy(),
        };

        let client = builder.build().map_err(DictError::Client)?;
        Ok(Self { client })
    }
}

fn client_proxy(proxy: &ProxyConfig) -> Result<reqwest::Proxy, ConfigError> {
    let url = proxy.url();
    let client_proxy =
        reqwest::Proxy::all(&url).map_err(|e| ConfigError::InvalidProxyUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

    Ok(match &proxy.credentials {
        Some(creds) => client_proxy.basic_auth(&creds.username, &creds.password),
        None => client_proxy,
    })
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, DictError> {
        let upstream = |source| DictError::Upstream {
            url: url.to_string(),
            source,
        };

        tracing::info!(url = %url, "Fetching from dict.cc");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(upstream)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "Unexpected HTTP status");
        }

        let text = response.text().await.map_err(upstream)?;
        tracing::info!(status = status.as_u16(), bytes = text.len(), "Received HTML");

        Ok(FetchResponse {
            status: status.as_u16(),
            body: Some(text).filter(|t| !t.is_empty()),
        })
    }
}
