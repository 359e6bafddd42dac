//! Court-notice (intimação) queries against the communications endpoint.

use serde_json::Value;
use tracing::info;

use tribuna_core::{somente_digitos, ConsultaIntimacoes, Intimacao};

use crate::error::ClientError;
use crate::lookup::TribunalClient;

/// Query filter for the communications endpoint.
///
/// `numero_oab` is the only required field; the upstream expects every
/// parameter to be present in the query string, empty when unused.
#[derive(Debug, Clone, Default)]
pub struct FiltroIntimacoes {
    pub numero_oab: String,
    /// Bar-association state; the upstream defaults to RS when unset.
    pub uf_oab: Option<String>,
    pub numero_processo: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
}

impl FiltroIntimacoes {
    pub fn para_oab(numero_oab: impl Into<String>) -> Self {
        Self {
            numero_oab: numero_oab.into(),
            ..Default::default()
        }
    }
}

impl TribunalClient {
    /// List the intimações visible to one lawyer registration.
    ///
    /// A payload that is not an array maps to an empty result, mirroring
    /// how the upstream signals "nothing for this filter".
    pub async fn consultar_intimacoes(
        &self,
        filtro: &FiltroIntimacoes,
    ) -> Result<ConsultaIntimacoes, ClientError> {
        if filtro.numero_oab.trim().is_empty() {
            return Err(ClientError::Other("numeroOab is required".into()));
        }

        let numero_processo = filtro
            .numero_processo
            .as_deref()
            .map(somente_digitos)
            .unwrap_or_default();
        let url = format!(
            "{}/api/v1/comunicacao?numeroProcesso={}&ufOab={}&numeroOab={}&dataDisponibilizacaoInicio={}&dataDisponibilizacaoFim={}",
            self.base_url,
            numero_processo,
            filtro.uf_oab.as_deref().unwrap_or("RS"),
            filtro.numero_oab.trim(),
            filtro.data_inicio.as_deref().unwrap_or(""),
            filtro.data_fim.as_deref().unwrap_or(""),
        );

        let payload = self.transporte.get_json(&url, &self.perfil).await?;
        let intimacoes: Vec<Intimacao> = match payload {
            Value::Array(_) => serde_json::from_value(payload)?,
            _ => Vec::new(),
        };

        info!(total = intimacoes.len(), "intimações fetched");
        let total = intimacoes.len();
        Ok(ConsultaIntimacoes { intimacoes, total })
    }
}
