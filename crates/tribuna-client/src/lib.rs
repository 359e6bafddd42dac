//! Tribunal lookup client: two-stage resolution against a PDPJ-style
//! upstream, browser-like request profile, and defensive normalisation of
//! the payload shapes different tribunals actually return.

pub mod advogado;
pub mod config;
pub mod error;
pub mod fieldmap;
pub mod intimacao;
pub mod lookup;
pub mod normalize;
pub mod peticao;
pub mod profile;
pub mod transport;

pub use config::ClientConfig;
pub use error::ClientError;
pub use fieldmap::FieldMap;
pub use intimacao::FiltroIntimacoes;
pub use lookup::{ProcessoEncontrado, TribunalClient};
pub use profile::RequestProfile;
pub use transport::{HttpTransport, Transporte};
