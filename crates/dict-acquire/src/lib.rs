pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod proxy;

pub use error::DictError;
pub use fetch::{Fetch, FetchResponse, HttpFetcher, Timeouts};
pub use pipeline::{translate, translate_with, TranslationRequest};
pub use proxy::ProxySettings;
