//! Petition submission.
//!
//! A single POST against the petitions endpoint of a process. Shares the
//! invocation's request profile with the lookup stages; no multi-stage
//! resolution is involved.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tracing::info;

use tribuna_core::{somente_digitos, NovaPeticao, ResultadoPeticao};

use crate::error::ClientError;
use crate::lookup::TribunalClient;
use crate::normalize::{normalizar_data, primeiro_texto};

impl TribunalClient {
    /// Submit a petition to a process.
    ///
    /// The upstream answers with a protocol number and date; when it omits
    /// either, a generated protocol (`PROT-<millis>`) and the submission
    /// instant stand in, as downstream consumers require both fields.
    pub async fn protocolar_peticao(
        &self,
        numero_bruto: &str,
        tipo: &str,
        conteudo: &str,
    ) -> Result<ResultadoPeticao, ClientError> {
        let numero = somente_digitos(numero_bruto);
        if numero.is_empty() {
            return Err(ClientError::InvalidIdentifier(numero_bruto.to_string()));
        }

        let agora = Utc::now();
        let peticao = NovaPeticao {
            numero_processo: numero.clone(),
            tipo: tipo.to_string(),
            conteudo: conteudo.to_string(),
            data_envio: agora.to_rfc3339_opts(SecondsFormat::Secs, true),
        };

        info!(numero = %numero, tipo = %tipo, "submitting petition");
        let url = format!("{}/processos/{}/peticoes", self.base_url, numero);
        let corpo = serde_json::to_value(&peticao)?;
        let resposta = self.transporte.post_json(&url, &self.perfil, &corpo).await?;

        let protocolo = primeiro_texto(&resposta, &["protocolo"])
            .map(str::to_string)
            .unwrap_or_else(|| format!("PROT-{}", agora.timestamp_millis()));
        let data_protocolo = protocolo_data(&resposta)
            .unwrap_or_else(|| agora.to_rfc3339_opts(SecondsFormat::Secs, true));

        info!(protocolo = %protocolo, "petition accepted");
        Ok(ResultadoPeticao {
            sucesso: true,
            protocolo,
            data_protocolo,
        })
    }
}

fn protocolo_data(resposta: &Value) -> Option<String> {
    primeiro_texto(resposta, &["dataProtocolo"]).and_then(normalizar_data)
}
