pub mod envelope;
pub mod numero;
pub mod processo;

pub use envelope::Resultado;
pub use numero::{formatar_cnj, somente_digitos};
pub use processo::{
    Advogado, ConsultaIntimacoes, Intimacao, Movimentacao, NovaPeticao, Parte, Processo,
    ResultadoPeticao, StatusProcesso, TipoParte,
};
