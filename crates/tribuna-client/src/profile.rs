//! Outbound request profile.
//!
//! The PDPJ portal fronts its API with the same stack that serves the
//! browser UI, and rejects clients that do not look like one: missing
//! language headers, a default library user-agent, or headers that change
//! between the search and detail calls all trigger opaque 4xx responses.
//! The profile is therefore built once per invocation, browser-shaped by
//! default, and reused verbatim by every call.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;

const ACCEPT_PADRAO: &str = "application/json, text/plain, */*";
const IDIOMA_PADRAO: &str = "pt-BR,pt;q=0.9,en;q=0.8";
const USER_AGENT_PADRAO: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Immutable header set (plus optional cookie) shared by every outbound
/// call of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestProfile {
    headers: BTreeMap<String, String>,
    cookie: Option<String>,
}

impl RequestProfile {
    /// Assemble the profile from the invocation config.
    ///
    /// Fails with [`ClientError::MissingCredential`] when neither credential
    /// source yields a usable token. Overlay values replace their defaults
    /// only when non-empty; a malformed extra-headers JSON object is logged
    /// and ignored.
    pub fn montar(cfg: &ClientConfig) -> Result<Self, ClientError> {
        let token = cfg.credencial().ok_or(ClientError::MissingCredential)?;
        debug!(prefixo = %prefixo_credencial(token), "credential resolved");

        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), ACCEPT_PADRAO.to_string());
        headers.insert(
            "Accept-Language".to_string(),
            valor_ou(cfg.idioma.as_deref(), IDIOMA_PADRAO),
        );
        headers.insert(
            "User-Agent".to_string(),
            valor_ou(cfg.user_agent.as_deref(), USER_AGENT_PADRAO),
        );
        headers.insert("Authorization".to_string(), format!("Bearer {token}"));

        if let Some(referer) = nao_vazio(cfg.referer.as_deref()) {
            headers.insert("Referer".to_string(), referer.to_string());
        }
        if let Some(origin) = nao_vazio(cfg.origin.as_deref()) {
            headers.insert("Origin".to_string(), origin.to_string());
        }

        if let Some(extras) = nao_vazio(cfg.extra_headers.as_deref()) {
            aplicar_extras(&mut headers, extras);
        }

        let cookie = match (
            nao_vazio(cfg.cookie.as_deref()),
            nao_vazio(cfg.sessao.as_deref()),
        ) {
            (Some(cookie), _) => Some(cookie.to_string()),
            (None, Some(sessao)) => Some(format!("JSESSIONID={sessao}")),
            (None, None) => None,
        };

        Ok(Self { headers, cookie })
    }

    /// Header pairs in deterministic order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Cookie string, when one was configured.
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    /// Look up a single header value.
    pub fn header(&self, nome: &str) -> Option<&str> {
        self.headers.get(nome).map(String::as_str)
    }
}

/// Merge an extra-headers JSON object into the header map.
///
/// Only string values are taken; anything else in the object, or a payload
/// that is not an object at all, is reported and skipped.
fn aplicar_extras(headers: &mut BTreeMap<String, String>, extras: &str) {
    let parsed: serde_json::Value = match serde_json::from_str(extras) {
        Ok(v) => v,
        Err(e) => {
            warn!(erro = %e, "ignoring malformed extra headers overlay");
            return;
        }
    };
    let Some(objeto) = parsed.as_object() else {
        warn!("extra headers overlay is not a JSON object, ignoring");
        return;
    };
    for (nome, valor) in objeto {
        match valor.as_str() {
            Some(v) if !v.is_empty() => {
                headers.insert(nome.clone(), v.to_string());
            }
            _ => warn!(header = %nome, "extra header value is not a string, skipping"),
        }
    }
}

fn valor_ou(valor: Option<&str>, padrao: &str) -> String {
    nao_vazio(valor).unwrap_or(padrao).to_string()
}

fn nao_vazio(valor: Option<&str>) -> Option<&str> {
    valor.map(str::trim).filter(|v| !v.is_empty())
}

/// First characters of the credential, for diagnostics without leaking it.
fn prefixo_credencial(token: &str) -> String {
    let prefixo: String = token.chars().take(6).collect();
    format!("{prefixo}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg_com_token() -> ClientConfig {
        ClientConfig {
            token: Some("tok-123456789".into()),
            ..ClientConfig::new()
        }
    }

    #[test]
    fn defaults_are_browser_shaped() {
        let perfil = RequestProfile::montar(&cfg_com_token()).unwrap();
        assert_eq!(perfil.header("Accept"), Some(ACCEPT_PADRAO));
        assert_eq!(perfil.header("Accept-Language"), Some(IDIOMA_PADRAO));
        assert_eq!(perfil.header("User-Agent"), Some(USER_AGENT_PADRAO));
        assert_eq!(
            perfil.header("Authorization"),
            Some("Bearer tok-123456789")
        );
        assert_eq!(perfil.cookie(), None);
    }

    #[test]
    fn missing_credential_fails() {
        let erro = RequestProfile::montar(&ClientConfig::new()).unwrap_err();
        assert!(matches!(erro, ClientError::MissingCredential));
    }

    #[test]
    fn legacy_credential_accepted() {
        let cfg = ClientConfig {
            token_legado: Some("legado-1".into()),
            ..ClientConfig::new()
        };
        let perfil = RequestProfile::montar(&cfg).unwrap();
        assert_eq!(perfil.header("Authorization"), Some("Bearer legado-1"));
    }

    #[test]
    fn overlays_replace_defaults() {
        let cfg = ClientConfig {
            idioma: Some("pt-BR".into()),
            user_agent: Some("Outro/1.0".into()),
            referer: Some("https://portal.example/consulta".into()),
            origin: Some("https://portal.example".into()),
            ..cfg_com_token()
        };
        let perfil = RequestProfile::montar(&cfg).unwrap();
        assert_eq!(perfil.header("Accept-Language"), Some("pt-BR"));
        assert_eq!(perfil.header("User-Agent"), Some("Outro/1.0"));
        assert_eq!(
            perfil.header("Referer"),
            Some("https://portal.example/consulta")
        );
        assert_eq!(perfil.header("Origin"), Some("https://portal.example"));
    }

    #[test]
    fn empty_overlay_keeps_default() {
        let cfg = ClientConfig {
            idioma: Some("   ".into()),
            ..cfg_com_token()
        };
        let perfil = RequestProfile::montar(&cfg).unwrap();
        assert_eq!(perfil.header("Accept-Language"), Some(IDIOMA_PADRAO));
    }

    #[test]
    fn extra_headers_merge() {
        let cfg = ClientConfig {
            extra_headers: Some(r#"{"X-Tribunal":"TJSP","Accept":"application/json"}"#.into()),
            ..cfg_com_token()
        };
        let perfil = RequestProfile::montar(&cfg).unwrap();
        assert_eq!(perfil.header("X-Tribunal"), Some("TJSP"));
        // Extras may override a default.
        assert_eq!(perfil.header("Accept"), Some("application/json"));
    }

    #[test]
    fn malformed_extra_headers_ignored() {
        let cfg = ClientConfig {
            extra_headers: Some("{not json".into()),
            ..cfg_com_token()
        };
        let perfil = RequestProfile::montar(&cfg).unwrap();
        assert_eq!(perfil.header("Accept"), Some(ACCEPT_PADRAO));
    }

    #[test]
    fn non_string_extra_value_skipped() {
        let cfg = ClientConfig {
            extra_headers: Some(r#"{"X-Retry":3,"X-Ok":"sim"}"#.into()),
            ..cfg_com_token()
        };
        let perfil = RequestProfile::montar(&cfg).unwrap();
        assert_eq!(perfil.header("X-Retry"), None);
        assert_eq!(perfil.header("X-Ok"), Some("sim"));
    }

    #[test]
    fn cookie_passthrough() {
        let cfg = ClientConfig {
            cookie: Some("JSESSIONID=abc; outro=1".into()),
            sessao: Some("ignorada".into()),
            ..cfg_com_token()
        };
        let perfil = RequestProfile::montar(&cfg).unwrap();
        assert_eq!(perfil.cookie(), Some("JSESSIONID=abc; outro=1"));
    }

    #[test]
    fn session_id_becomes_cookie() {
        let cfg = ClientConfig {
            sessao: Some("abc123".into()),
            ..cfg_com_token()
        };
        let perfil = RequestProfile::montar(&cfg).unwrap();
        assert_eq!(perfil.cookie(), Some("JSESSIONID=abc123"));
    }

    #[test]
    fn profile_is_deterministic() {
        let cfg = cfg_com_token();
        assert_eq!(
            RequestProfile::montar(&cfg).unwrap(),
            RequestProfile::montar(&cfg).unwrap()
        );
    }
}
