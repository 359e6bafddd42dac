//! Client configuration, assembled once per invocation.
//!
//! The library never reads the environment itself: the binary resolves the
//! recognised variables (via clap's `env` support) into one [`ClientConfig`]
//! value, and every stage receives that value by reference. Mid-pipeline
//! lookups are impossible by construction.

/// Default upstream root; the national PDPJ services portal.
pub const BASE_URL_PADRAO: &str = "https://portaldeservicos.pdpj.jus.br";

/// Read-only inputs for one invocation.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Primary bearer credential (`PDPJ_TOKEN`).
    pub token: Option<String>,
    /// Legacy credential (`TRIBUNAL_API_KEY`), used when no primary is set.
    pub token_legado: Option<String>,
    /// Upstream root, trailing slash tolerated.
    pub base_url: String,
    /// `Accept-Language` override (`PDPJ_ACCEPT_LANGUAGE`).
    pub idioma: Option<String>,
    /// `User-Agent` override (`PDPJ_USER_AGENT`).
    pub user_agent: Option<String>,
    /// `Referer` header (`PDPJ_REFERER`).
    pub referer: Option<String>,
    /// `Origin` header (`PDPJ_ORIGIN`).
    pub origin: Option<String>,
    /// Full cookie string (`PDPJ_COOKIE`).
    pub cookie: Option<String>,
    /// Bare session id (`PDPJ_JSESSIONID`); wrapped into a `JSESSIONID=`
    /// cookie when no full cookie string is given.
    pub sessao: Option<String>,
    /// Extra headers as a serialised JSON object (`PDPJ_EXTRA_HEADERS`).
    pub extra_headers: Option<String>,
    /// Verbose diagnostics (`PDPJ_DEBUG`). Affects logging only.
    pub debug: bool,
}

impl ClientConfig {
    /// Config pointing at the default PDPJ portal with no credential.
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL_PADRAO.to_string(),
            ..Default::default()
        }
    }

    /// Resolve the credential: primary source first, then the legacy one.
    ///
    /// Empty strings count as unset; whitespace is not a token.
    pub fn credencial(&self) -> Option<&str> {
        [self.token.as_deref(), self.token_legado.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|t| !t.is_empty())
    }

    /// Upstream root with any trailing slash removed.
    pub fn base(&self) -> &str {
        let base = if self.base_url.is_empty() {
            BASE_URL_PADRAO
        } else {
            &self.base_url
        };
        base.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_credential_wins() {
        let cfg = ClientConfig {
            token: Some("primario".into()),
            token_legado: Some("legado".into()),
            ..ClientConfig::new()
        };
        assert_eq!(cfg.credencial(), Some("primario"));
    }

    #[test]
    fn legacy_credential_fallback() {
        let cfg = ClientConfig {
            token_legado: Some("legado".into()),
            ..ClientConfig::new()
        };
        assert_eq!(cfg.credencial(), Some("legado"));
    }

    #[test]
    fn blank_primary_falls_through() {
        let cfg = ClientConfig {
            token: Some("   ".into()),
            token_legado: Some("legado".into()),
            ..ClientConfig::new()
        };
        assert_eq!(cfg.credencial(), Some("legado"));
    }

    #[test]
    fn no_credential() {
        assert_eq!(ClientConfig::new().credencial(), None);
    }

    #[test]
    fn base_trims_trailing_slash() {
        let cfg = ClientConfig {
            base_url: "https://tribunal.example/".into(),
            ..ClientConfig::new()
        };
        assert_eq!(cfg.base(), "https://tribunal.example");
    }

    #[test]
    fn empty_base_uses_default() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.base(), BASE_URL_PADRAO);
    }
}
