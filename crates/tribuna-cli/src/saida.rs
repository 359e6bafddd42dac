//! Envelope rendering on stdout.

use serde::Serialize;
use tracing::error;

use tribuna_client::ClientError;
use tribuna_core::Resultado;

/// Convert an operation outcome into the result envelope and print it.
///
/// Failures are reported through the envelope; the process still exits 0
/// so scripted callers read the envelope, not the exit code.
pub fn reportar<T: Serialize>(
    resultado: Result<T, ClientError>,
    pretty: bool,
) -> anyhow::Result<()> {
    let envelope = match resultado {
        Ok(data) => Resultado::ok(data),
        Err(erro) => {
            error!(erro = %erro, "operation failed");
            Resultado::err(erro.to_string())
        }
    };
    imprimir(&envelope, pretty)
}

fn imprimir<T: Serialize>(envelope: &Resultado<T>, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(envelope)?
    } else {
        serde_json::to_string(envelope)?
    };
    println!("{json}");
    Ok(())
}
