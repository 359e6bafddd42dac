//! Canonical record types shared between the client and the CLI.
//!
//! These are the shapes downstream consumers see. Serialized field names
//! follow the upstream camelCase convention so the envelope stays wire
//! compatible with existing integrations. Dates travel as ISO 8601 strings;
//! parsing and defaulting happen in the client's normaliser, not here.

use serde::{Deserialize, Serialize};

/// Processing status of a judicial case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusProcesso {
    #[default]
    Ativo,
    Suspenso,
    Arquivado,
    Baixado,
}

impl StatusProcesso {
    /// Map an upstream status string onto the closed set.
    ///
    /// Unknown or empty values fall back to [`StatusProcesso::Ativo`], the
    /// sentinel the upstream itself omits for live cases.
    pub fn do_upstream(valor: &str) -> Self {
        match valor.trim().to_lowercase().as_str() {
            "suspenso" => Self::Suspenso,
            "arquivado" => Self::Arquivado,
            "baixado" => Self::Baixado,
            _ => Self::Ativo,
        }
    }
}

/// Role of a party in a process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoParte {
    Autor,
    Reu,
    /// Third parties and any role the upstream names that we do not model.
    #[default]
    Terceiro,
}

impl TipoParte {
    /// Map an upstream role string onto the closed set.
    ///
    /// Some backends tag parties by role (`autor`/`reu`), others by pole
    /// (`ativo`/`passivo`, abbreviated `AT`/`PA`); both spellings land on
    /// the same tag.
    pub fn do_upstream(valor: &str) -> Self {
        match valor.trim().to_lowercase().as_str() {
            "autor" | "ativo" | "at" => Self::Autor,
            "reu" | "réu" | "passivo" | "pa" => Self::Reu,
            _ => Self::Terceiro,
        }
    }
}

/// A party to a process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parte {
    pub tipo: TipoParte,
    pub nome: String,
    pub documento: String,
    /// Lawyer references (names or registry ids); empty when none listed.
    #[serde(default)]
    pub advogados: Vec<String>,
}

/// A docket event within a process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movimentacao {
    /// ISO 8601 timestamp string.
    pub data: String,
    pub descricao: String,
    pub tipo: String,
    /// Attached document references; empty when none listed.
    #[serde(default)]
    pub documentos: Vec<String>,
}

/// The canonical judicial process record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Processo {
    pub numero: String,
    pub tribunal: String,
    pub vara: String,
    pub classe: String,
    pub assunto: String,
    /// ISO 8601 timestamp string.
    pub data_distribuicao: String,
    pub valor_causa: f64,
    pub status: StatusProcesso,
    pub partes: Vec<Parte>,
    pub movimentacoes: Vec<Movimentacao>,
}

/// A lawyer attached to a party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advogado {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub oab: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub especialidades: Vec<String>,
}

/// A court notice (intimação) addressed to a lawyer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intimacao {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub numero_processo: String,
    /// ISO 8601 timestamp string.
    #[serde(default)]
    pub data_disponibilizacao: String,
    #[serde(default)]
    pub tipo: String,
    #[serde(default)]
    pub assunto: String,
    #[serde(default)]
    pub conteudo: String,
    #[serde(default)]
    pub lida: bool,
}

/// Result page of an intimação query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultaIntimacoes {
    pub intimacoes: Vec<Intimacao>,
    pub total: usize,
}

/// Outbound petition payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovaPeticao {
    pub numero_processo: String,
    pub tipo: String,
    pub conteudo: String,
    /// ISO 8601 timestamp string.
    pub data_envio: String,
}

/// Outcome of a petition submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultadoPeticao {
    pub sucesso: bool,
    pub protocolo: String,
    /// ISO 8601 timestamp string.
    pub data_protocolo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processo_serialises_camel_case() {
        let processo = Processo {
            numero: "999".into(),
            tribunal: "TJSP".into(),
            vara: "1ª Vara Cível".into(),
            classe: "Procedimento Comum".into(),
            assunto: "Indenização por Danos Morais".into(),
            data_distribuicao: "2024-01-15T00:00:00+00:00".into(),
            valor_causa: 50000.0,
            status: StatusProcesso::Ativo,
            partes: vec![],
            movimentacoes: vec![],
        };

        let json = serde_json::to_value(&processo).unwrap();
        assert_eq!(json["numero"], "999");
        assert_eq!(json["dataDistribuicao"], "2024-01-15T00:00:00+00:00");
        assert_eq!(json["valorCausa"], 50000.0);
        assert_eq!(json["status"], "ativo");
        assert!(json["partes"].as_array().unwrap().is_empty());
    }

    #[test]
    fn parte_json_roundtrip() {
        let parte = Parte {
            tipo: TipoParte::Autor,
            nome: "Maria da Silva".into(),
            documento: "123.456.789-00".into(),
            advogados: vec!["OAB/SP 12345".into()],
        };
        let json = serde_json::to_string(&parte).unwrap();
        let parsed: Parte = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, parte);
    }

    #[test]
    fn parte_missing_advogados_defaults_empty() {
        let parsed: Parte = serde_json::from_str(
            r#"{"tipo":"reu","nome":"Empresa XYZ","documento":"00.000.000/0001-00"}"#,
        )
        .unwrap();
        assert_eq!(parsed.tipo, TipoParte::Reu);
        assert!(parsed.advogados.is_empty());
    }

    #[test]
    fn status_upstream_mapping() {
        assert_eq!(StatusProcesso::do_upstream("ativo"), StatusProcesso::Ativo);
        assert_eq!(
            StatusProcesso::do_upstream("ARQUIVADO"),
            StatusProcesso::Arquivado
        );
        assert_eq!(
            StatusProcesso::do_upstream("  suspenso "),
            StatusProcesso::Suspenso
        );
        // Unknown and empty fall back to the active sentinel.
        assert_eq!(
            StatusProcesso::do_upstream("em segredo"),
            StatusProcesso::Ativo
        );
        assert_eq!(StatusProcesso::do_upstream(""), StatusProcesso::Ativo);
    }

    #[test]
    fn tipo_parte_upstream_mapping() {
        assert_eq!(TipoParte::do_upstream("autor"), TipoParte::Autor);
        assert_eq!(TipoParte::do_upstream("réu"), TipoParte::Reu);
        assert_eq!(TipoParte::do_upstream("REU"), TipoParte::Reu);
        assert_eq!(TipoParte::do_upstream("perito"), TipoParte::Terceiro);
        assert_eq!(TipoParte::do_upstream(""), TipoParte::Terceiro);
    }

    #[test]
    fn tipo_parte_pole_spelling() {
        assert_eq!(TipoParte::do_upstream("ATIVO"), TipoParte::Autor);
        assert_eq!(TipoParte::do_upstream("AT"), TipoParte::Autor);
        assert_eq!(TipoParte::do_upstream("passivo"), TipoParte::Reu);
        assert_eq!(TipoParte::do_upstream("PA"), TipoParte::Reu);
    }

    #[test]
    fn intimacao_defaults_apply() {
        let parsed: Intimacao = serde_json::from_str(r#"{"id":"42"}"#).unwrap();
        assert_eq!(parsed.id, "42");
        assert_eq!(parsed.numero_processo, "");
        assert!(!parsed.lida);
    }

    #[test]
    fn advogado_optional_contacts() {
        let parsed: Advogado = serde_json::from_str(
            r#"{"id":"1","nome":"João","oab":"12345","estado":"SP"}"#,
        )
        .unwrap();
        assert_eq!(parsed.nome, "João");
        assert!(parsed.email.is_none());
        assert!(parsed.especialidades.is_empty());
    }
}
