//! Two-stage process lookup.
//!
//! The pipeline is strictly linear: validate the identifier, resolve it
//! against the search endpoint, fetch the detail record, normalise. Any
//! fatal failure falls straight through to the caller; there is no retry
//! and no branching back. An empty or ambiguous search result is NOT
//! fatal: the stage falls back to the identifier it was given, because
//! several tribunals return nothing from search for numbers they happily
//! serve details for.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use tribuna_core::{formatar_cnj, somente_digitos, Processo};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::fieldmap::{FieldMap, PDPJ};
use crate::normalize::{normalizar_processo, primeira_lista, primeiro_texto};
use crate::profile::RequestProfile;
use crate::transport::{HttpTransport, Transporte};

/// Successful lookup: the canonical record plus both raw upstream payloads
/// for audit.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessoEncontrado {
    pub processo: Processo,
    /// Raw search-stage payload, untouched.
    pub busca: Value,
    /// Raw detail-stage payload, untouched.
    pub detalhe: Value,
}

/// Client for one tribunal upstream.
///
/// Holds the request profile built once from the invocation config; every
/// call this client makes reuses it verbatim.
pub struct TribunalClient {
    pub(crate) transporte: Box<dyn Transporte>,
    pub(crate) base_url: String,
    pub(crate) perfil: RequestProfile,
    mapa: &'static FieldMap,
}

impl TribunalClient {
    /// Build a client over the real HTTP transport.
    pub fn new(cfg: &ClientConfig) -> Result<Self, ClientError> {
        Self::com_transporte(cfg, Box::new(HttpTransport::new()?))
    }

    /// Build a client over a caller-supplied transport.
    pub fn com_transporte(
        cfg: &ClientConfig,
        transporte: Box<dyn Transporte>,
    ) -> Result<Self, ClientError> {
        let perfil = RequestProfile::montar(cfg)?;
        Ok(Self {
            transporte,
            base_url: cfg.base().to_string(),
            perfil,
            mapa: &PDPJ,
        })
    }

    /// Look up a process: resolve the identifier, fetch the detail record,
    /// normalise it.
    ///
    /// `tribunal` is a display-only label carried into the record.
    pub async fn buscar_processo(
        &self,
        numero_bruto: &str,
        tribunal: &str,
    ) -> Result<ProcessoEncontrado, ClientError> {
        let numero = somente_digitos(numero_bruto);
        if numero.is_empty() {
            return Err(ClientError::InvalidIdentifier(numero_bruto.to_string()));
        }
        info!(numero = %formatar_cnj(&numero), tribunal = %tribunal, "looking up process");

        let (numero_resolvido, busca) = self.resolver_numero(&numero).await?;
        let detalhe = self.detalhar(&numero_resolvido).await?;
        let processo =
            normalizar_processo(&detalhe, &numero_resolvido, tribunal, Utc::now(), self.mapa);

        info!(numero = %processo.numero, partes = processo.partes.len(), "process found");
        Ok(ProcessoEncontrado {
            processo,
            busca,
            detalhe,
        })
    }

    /// Resolution stage: search for the identifier and pick the canonical
    /// number out of whichever envelope shape comes back.
    async fn resolver_numero(&self, numero: &str) -> Result<(String, Value), ClientError> {
        let url = format!("{}/processos?numeroProcesso={}", self.base_url, numero);
        let payload = self.transporte.get_json(&url, &self.perfil).await?;

        let resolvido = match candidato_numero(&payload, self.mapa) {
            Some(candidato) => {
                debug!(candidato = %candidato, "search resolved a canonical number");
                candidato
            }
            None => {
                debug!("search gave no usable candidate, keeping the input number");
                numero.to_string()
            }
        };
        Ok((resolvido, payload))
    }

    /// Detail stage: fetch the full record for a canonical number.
    async fn detalhar(&self, numero: &str) -> Result<Value, ClientError> {
        let url = format!("{}/processos/{}", self.base_url, numero);
        self.transporte.get_json(&url, &self.perfil).await
    }
}

/// Extract a canonical number from a search response.
///
/// Accepted shapes, in precedence order: a bare array of summaries, an
/// envelope with an items-like sequence, a single summary object. `None`
/// when the shape carries no usable number.
fn candidato_numero(payload: &Value, mapa: &FieldMap) -> Option<String> {
    if let Some(itens) = payload.as_array() {
        return itens
            .first()
            .and_then(|item| primeiro_texto(item, mapa.numero))
            .map(str::to_string);
    }
    if let Some(itens) = primeira_lista(payload, mapa.resultados_busca) {
        return itens
            .first()
            .and_then(|item| primeiro_texto(item, mapa.numero))
            .map(str::to_string);
    }
    primeiro_texto(payload, mapa.numero).map(str::to_string)
}
