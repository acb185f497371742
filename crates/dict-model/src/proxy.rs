use crate::error::ConfigError;
use std::fmt;

/// An outbound HTTP proxy, optionally with basic-auth credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
    pub credentials: Option<Credentials>,
}

/// Basic-auth credentials for the proxy. The password never shows up in
/// `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Credentials {
    /// Pair up an optional username and password.
    ///
    /// Both absent is fine (`Ok(None)`); exactly one present is an error.
    pub fn from_parts(
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Option<Self>, ConfigError> {
        match (username, password) {
            (Some(username), Some(password)) => Ok(Some(Self { username, password })),
            (None, None) => Ok(None),
            _ => Err(ConfigError::IncompleteProxyCredentials),
        }
    }
}

impl ProxyConfig {
    /// Build a proxy from individually supplied parts.
    ///
    /// Host and port must come together, as must username and password.
    /// Returns `Ok(None)` when no address was given at all.
    pub fn from_parts(
        host: Option<String>,
        port: Option<u16>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Option<Self>, ConfigError> {
        let credentials = Credentials::from_parts(username, password)?;
        match (host, port) {
            (Some(host), Some(port)) => Ok(Some(Self {
                host,
                port,
                credentials,
            })),
            (None, None) => Ok(None),
            _ => Err(ConfigError::IncompleteProxyAddress),
        }
    }

    /// Proxy URL suitable for the HTTP client, without credentials.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl fmt::Display for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.credentials {
            Some(c) => write!(f, "{}@{}:{}", c.username, self.host, self.port),
            None => write!(f, "{}:{}", self.host, self.port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_proxy() {
        let proxy = ProxyConfig::from_parts(
            Some("proxy.muc".into()),
            Some(8080),
            Some("bob".into()),
            Some("secret".into()),
        )
        .unwrap()
        .unwrap();
        assert_eq!(proxy.url(), "http://proxy.muc:8080");
        assert_eq!(proxy.credentials.as_ref().unwrap().username, "bob");
        assert_eq!(proxy.to_string(), "bob@proxy.muc:8080");
    }

    #[test]
    fn test_no_proxy() {
        assert_eq!(ProxyConfig::from_parts(None, None, None, None), Ok(None));
    }

    #[test]
    fn test_host_without_port() {
        assert_eq!(
            ProxyConfig::from_parts(Some("proxy.muc".into()), None, None, None),
            Err(ConfigError::IncompleteProxyAddress)
        );
        assert_eq!(
            ProxyConfig::from_parts(None, Some(8080), None, None),
            Err(ConfigError::IncompleteProxyAddress)
        );
    }

    #[test]
    fn test_user_without_pass() {
        assert_eq!(
            ProxyConfig::from_parts(
                Some("proxy.muc".into()),
                Some(8080),
                Some("bob".into()),
                None
            ),
            Err(ConfigError::IncompleteProxyCredentials)
        );
        assert_eq!(
            Credentials::from_parts(None, Some("secret".into())),
            Err(ConfigError::IncompleteProxyCredentials)
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials {
            username: "bob".into(),
            password: "secret".into(),
        };
        let shown = format!("{creds:?}");
        assert!(shown.contains("bob"));
        assert!(!shown.contains("secret"));
    }
}
