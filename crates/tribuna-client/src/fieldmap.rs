//! Candidate source keys per canonical field.
//!
//! Tribunals disagree on field names for the same semantic value: the
//! court division arrives as `vara` from some providers and `orgaoJulgador`
//! from others, docket events as `movimentacoes` or `movimentos`, and so
//! on. Each canonical field therefore carries an ordered key list, tried
//! first to last. Supporting a new upstream shape means writing a new
//! [`FieldMap`] value, not new control flow.

/// Ordered candidate keys for every canonical field.
#[derive(Debug, Clone, Copy)]
pub struct FieldMap {
    /// Collection key of search results inside a response envelope.
    pub resultados_busca: &'static [&'static str],
    pub numero: &'static [&'static str],
    pub vara: &'static [&'static str],
    pub classe: &'static [&'static str],
    pub assunto: &'static [&'static str],
    pub data_distribuicao: &'static [&'static str],
    pub valor_causa: &'static [&'static str],
    pub status: &'static [&'static str],
    pub partes: &'static [&'static str],
    pub movimentacoes: &'static [&'static str],

    pub parte_tipo: &'static [&'static str],
    pub parte_nome: &'static [&'static str],
    pub parte_documento: &'static [&'static str],
    pub parte_advogados: &'static [&'static str],

    pub mov_data: &'static [&'static str],
    pub mov_descricao: &'static [&'static str],
    pub mov_tipo: &'static [&'static str],
    pub mov_documentos: &'static [&'static str],
}

/// Key map for the PDPJ portal and the tribunal backends it proxies.
pub const PDPJ: FieldMap = FieldMap {
    resultados_busca: &["items", "content", "resultados"],
    numero: &["numero", "numeroProcesso"],
    vara: &["vara", "orgaoJulgador"],
    classe: &["classe", "classeProcessual"],
    assunto: &["assunto", "assuntoPrincipal"],
    data_distribuicao: &["dataDistribuicao", "dataAjuizamento"],
    valor_causa: &["valorCausa", "valorAcao"],
    status: &["status", "situacao"],
    partes: &["partes", "partesProcesso"],
    movimentacoes: &["movimentacoes", "movimentos"],

    parte_tipo: &["tipo", "polo"],
    parte_nome: &["nome"],
    parte_documento: &["documento", "cpfCnpj"],
    parte_advogados: &["advogados"],

    mov_data: &["data", "dataHora"],
    mov_descricao: &["descricao", "complemento"],
    mov_tipo: &["tipo", "codigo"],
    mov_documentos: &["documentos"],
};
