//! Detail-payload normalisation.
//!
//! A deterministic, pure mapping from whatever the detail endpoint
//! returned to the canonical [`Processo`]. Every field walks its
//! candidate-key list from the [`FieldMap`] and lands on a literal default
//! when no source carries a value, so the record is always fully
//! populated. The reference instant used for date defaults is an explicit
//! argument: same payload, same instant, same record.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde_json::Value;

use tribuna_core::{Movimentacao, Parte, Processo, StatusProcesso, TipoParte};

use crate::fieldmap::FieldMap;

/// Literal defaults applied when every candidate source is absent.
const VARA_PADRAO: &str = "1ª Vara Cível";
const CLASSE_PADRAO: &str = "Procedimento Comum";
const ASSUNTO_PADRAO: &str = "Indenização por Danos Morais";
const VALOR_CAUSA_PADRAO: f64 = 50000.0;

/// Map a raw detail payload onto the canonical record.
///
/// `numero` is the resolved process number from the earlier stages and
/// `tribunal` the display-only label supplied by the caller; both are used
/// when the payload itself omits them.
pub fn normalizar_processo(
    detalhe: &Value,
    numero: &str,
    tribunal: &str,
    agora: DateTime<Utc>,
    mapa: &FieldMap,
) -> Processo {
    Processo {
        numero: texto_ou(detalhe, mapa.numero, numero),
        tribunal: tribunal.to_string(),
        vara: texto_ou(detalhe, mapa.vara, VARA_PADRAO),
        classe: texto_ou(detalhe, mapa.classe, CLASSE_PADRAO),
        assunto: texto_ou(detalhe, mapa.assunto, ASSUNTO_PADRAO),
        data_distribuicao: data_ou(detalhe, mapa.data_distribuicao, agora),
        valor_causa: primeiro_f64(detalhe, mapa.valor_causa).unwrap_or(VALOR_CAUSA_PADRAO),
        status: primeiro_texto(detalhe, mapa.status)
            .map(StatusProcesso::do_upstream)
            .unwrap_or_default(),
        partes: primeira_lista(detalhe, mapa.partes)
            .map(|itens| itens.iter().map(|p| normalizar_parte(p, mapa)).collect())
            .unwrap_or_default(),
        movimentacoes: primeira_lista(detalhe, mapa.movimentacoes)
            .map(|itens| {
                itens
                    .iter()
                    .map(|m| normalizar_movimentacao(m, agora, mapa))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn normalizar_parte(bruto: &Value, mapa: &FieldMap) -> Parte {
    Parte {
        tipo: primeiro_texto(bruto, mapa.parte_tipo)
            .map(TipoParte::do_upstream)
            .unwrap_or_default(),
        nome: texto_ou(bruto, mapa.parte_nome, ""),
        documento: texto_ou(bruto, mapa.parte_documento, ""),
        advogados: referencias(bruto, mapa.parte_advogados, &["nome", "name", "id"]),
    }
}

fn normalizar_movimentacao(bruto: &Value, agora: DateTime<Utc>, mapa: &FieldMap) -> Movimentacao {
    Movimentacao {
        data: data_ou(bruto, mapa.mov_data, agora),
        descricao: texto_ou(bruto, mapa.mov_descricao, ""),
        tipo: texto_ou(bruto, mapa.mov_tipo, ""),
        documentos: referencias(bruto, mapa.mov_documentos, &["id", "documento", "nome"]),
    }
}

// ── Candidate-key extraction helpers ──

/// First candidate key holding a non-empty string.
pub(crate) fn primeiro_texto<'a>(obj: &'a Value, chaves: &[&str]) -> Option<&'a str> {
    chaves
        .iter()
        .filter_map(|chave| obj.get(chave))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|v| !v.is_empty())
}

/// First candidate key holding a number, or a string that parses as one.
fn primeiro_f64(obj: &Value, chaves: &[&str]) -> Option<f64> {
    chaves.iter().filter_map(|chave| obj.get(chave)).find_map(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// First candidate key holding an array.
pub(crate) fn primeira_lista<'a>(obj: &'a Value, chaves: &[&str]) -> Option<&'a Vec<Value>> {
    chaves
        .iter()
        .filter_map(|chave| obj.get(chave))
        .find_map(Value::as_array)
}

fn texto_ou(obj: &Value, chaves: &[&str], padrao: &str) -> String {
    primeiro_texto(obj, chaves).unwrap_or(padrao).to_string()
}

/// First candidate date that parses, normalised to RFC 3339; the reference
/// instant otherwise.
fn data_ou(obj: &Value, chaves: &[&str], agora: DateTime<Utc>) -> String {
    chaves
        .iter()
        .filter_map(|chave| obj.get(chave))
        .filter_map(Value::as_str)
        .find_map(normalizar_data)
        .unwrap_or_else(|| agora.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Parse the date spellings tribunals actually emit into RFC 3339 UTC.
pub(crate) fn normalizar_data(valor: &str) -> Option<String> {
    let valor = valor.trim();
    if valor.is_empty() {
        return None;
    }

    if let Ok(data) = DateTime::parse_from_rfc3339(valor) {
        return Some(
            data.with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        );
    }
    if let Ok(data) = NaiveDateTime::parse_from_str(valor, "%Y-%m-%dT%H:%M:%S") {
        return Some(
            Utc.from_utc_datetime(&data)
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        );
    }
    for formato in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(dia) = NaiveDate::parse_from_str(valor, formato) {
            let inicio = dia.and_hms_opt(0, 0, 0)?;
            return Some(
                Utc.from_utc_datetime(&inicio)
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
            );
        }
    }
    None
}

/// Flatten a reference list (lawyers, attached documents) into strings.
///
/// Elements arrive either as plain strings or as objects; for objects the
/// first non-empty key from `chaves_nome` is taken. Unusable elements are
/// dropped rather than invented.
fn referencias(obj: &Value, chaves_lista: &[&str], chaves_nome: &[&str]) -> Vec<String> {
    let Some(itens) = primeira_lista(obj, chaves_lista) else {
        return Vec::new();
    };
    itens
        .iter()
        .filter_map(|item| match item {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Object(_) => primeiro_texto(item, chaves_nome).map(str::to_string),
            _ => None,
        })
        .collect()
}
