//! Lawyer extraction for a party of a process.

use serde::Deserialize;
use tracing::info;

use tribuna_core::{somente_digitos, Advogado};

use crate::error::ClientError;
use crate::lookup::TribunalClient;

/// Detail endpoint answer for the lawyers of one party.
#[derive(Deserialize)]
struct RespostaAdvogados {
    #[serde(default)]
    advogados: Vec<Advogado>,
}

impl TribunalClient {
    /// Fetch the lawyers registered for one party of a process.
    ///
    /// An empty list is reported as a failure, not as an empty success:
    /// callers use this to decide whether service of notice is possible,
    /// and "nobody to serve" is the answer they need surfaced.
    pub async fn extrair_advogados(
        &self,
        numero_bruto: &str,
        parte: &str,
    ) -> Result<Vec<Advogado>, ClientError> {
        let numero = somente_digitos(numero_bruto);
        if numero.is_empty() {
            return Err(ClientError::InvalidIdentifier(numero_bruto.to_string()));
        }

        let url = format!(
            "{}/processos/{}/partes/{}/advogados",
            self.base_url, numero, parte
        );
        let payload = self.transporte.get_json(&url, &self.perfil).await?;
        let resposta: RespostaAdvogados = serde_json::from_value(payload)?;

        if resposta.advogados.is_empty() {
            return Err(ClientError::Other(format!(
                "no lawyer found for party {parte:?}"
            )));
        }
        info!(quantidade = resposta.advogados.len(), "lawyers found");
        Ok(resposta.advogados)
    }
}
