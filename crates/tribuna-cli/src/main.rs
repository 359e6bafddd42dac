//! Tribuna CLI: tribunal process lookup and filing from the command line.
//!
//! Every command prints exactly one JSON result envelope on stdout;
//! diagnostics go to stderr. A failed lookup is a reported envelope, not a
//! non-zero exit: the envelope is the machine contract.

mod saida;

use clap::{Args, Parser, Subcommand};

use tribuna_client::config::BASE_URL_PADRAO;
use tribuna_client::{ClientConfig, FiltroIntimacoes, TribunalClient};

/// Tribunal process lookup and filing client.
#[derive(Parser)]
#[command(name = "tribuna")]
#[command(about = "Consulta e peticionamento em tribunais via portal PDPJ")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Pretty-print the JSON envelope.
    #[arg(long, global = true)]
    pretty: bool,

    /// Verbose diagnostics on stderr.
    #[arg(long, env = "PDPJ_DEBUG", global = true)]
    debug: bool,

    #[command(subcommand)]
    comando: Comando,
}

/// Upstream configuration, resolved once per invocation.
#[derive(Args)]
struct ConfigArgs {
    /// Bearer token for the PDPJ portal.
    #[arg(long, env = "PDPJ_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Legacy tribunal API key, used when no token is set.
    #[arg(long, env = "TRIBUNAL_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Upstream root URL.
    #[arg(long, env = "PDPJ_BASE_URL", default_value = BASE_URL_PADRAO, global = true)]
    base_url: String,

    /// Accept-Language override.
    #[arg(long, env = "PDPJ_ACCEPT_LANGUAGE", global = true)]
    idioma: Option<String>,

    /// User-Agent override.
    #[arg(long, env = "PDPJ_USER_AGENT", global = true)]
    user_agent: Option<String>,

    /// Referer header.
    #[arg(long, env = "PDPJ_REFERER", global = true)]
    referer: Option<String>,

    /// Origin header.
    #[arg(long, env = "PDPJ_ORIGIN", global = true)]
    origin: Option<String>,

    /// Full cookie string.
    #[arg(long, env = "PDPJ_COOKIE", hide_env_values = true, global = true)]
    cookie: Option<String>,

    /// Bare session id, wrapped into a JSESSIONID cookie.
    #[arg(long, env = "PDPJ_JSESSIONID", hide_env_values = true, global = true)]
    sessao: Option<String>,

    /// Extra headers as a JSON object string.
    #[arg(long, env = "PDPJ_EXTRA_HEADERS", global = true)]
    extra_headers: Option<String>,
}

#[derive(Subcommand)]
enum Comando {
    /// Look up a process and print the canonical record.
    Buscar {
        /// Raw process number; CNJ formatting accepted.
        numero_processo: String,

        /// Display-only tribunal label.
        #[arg(long, default_value = "TJSP")]
        tribunal: String,
    },

    /// Submit a petition to a process.
    Peticionar {
        /// Raw process number; CNJ formatting accepted.
        numero_processo: String,

        /// Petition type.
        #[arg(long)]
        tipo: String,

        /// Petition body.
        #[arg(long)]
        conteudo: String,
    },

    /// List the lawyers registered for one party of a process.
    Advogados {
        /// Raw process number; CNJ formatting accepted.
        numero_processo: String,

        /// Party identifier (autor, reu, ...).
        #[arg(long)]
        parte: String,
    },

    /// List intimações visible to a lawyer registration.
    Intimacoes {
        /// OAB registration number.
        #[arg(long)]
        numero_oab: String,

        /// OAB state.
        #[arg(long, default_value = "RS")]
        uf_oab: String,

        /// Restrict to one process.
        #[arg(long)]
        numero_processo: Option<String>,

        /// Availability window start (YYYY-MM-DD).
        #[arg(long)]
        data_inicio: Option<String>,

        /// Availability window end (YYYY-MM-DD).
        #[arg(long)]
        data_fim: Option<String>,
    },
}

impl ConfigArgs {
    fn em_config(self, debug: bool) -> ClientConfig {
        ClientConfig {
            token: self.token,
            token_legado: self.api_key,
            base_url: self.base_url,
            idioma: self.idioma,
            user_agent: self.user_agent,
            referer: self.referer,
            origin: self.origin,
            cookie: self.cookie,
            sessao: self.sessao,
            extra_headers: self.extra_headers,
            debug,
        }
    }
}

fn iniciar_tracing(debug: bool) {
    let nivel = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(nivel)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    iniciar_tracing(cli.debug);

    let cfg = cli.config.em_config(cli.debug);
    let pretty = cli.pretty;

    match cli.comando {
        Comando::Buscar {
            numero_processo,
            tribunal,
        } => {
            saida::reportar(
                executar(&cfg, |cliente| async move {
                    cliente.buscar_processo(&numero_processo, &tribunal).await
                })
                .await,
                pretty,
            )
        }
        Comando::Peticionar {
            numero_processo,
            tipo,
            conteudo,
        } => {
            saida::reportar(
                executar(&cfg, |cliente| async move {
                    cliente
                        .protocolar_peticao(&numero_processo, &tipo, &conteudo)
                        .await
                })
                .await,
                pretty,
            )
        }
        Comando::Advogados {
            numero_processo,
            parte,
        } => {
            saida::reportar(
                executar(&cfg, |cliente| async move {
                    cliente.extrair_advogados(&numero_processo, &parte).await
                })
                .await,
                pretty,
            )
        }
        Comando::Intimacoes {
            numero_oab,
            uf_oab,
            numero_processo,
            data_inicio,
            data_fim,
        } => {
            let filtro = FiltroIntimacoes {
                numero_oab,
                uf_oab: Some(uf_oab),
                numero_processo,
                data_inicio,
                data_fim,
            };
            saida::reportar(
                executar(&cfg, |cliente| async move {
                    cliente.consultar_intimacoes(&filtro).await
                })
                .await,
                pretty,
            )
        }
    }
}

/// Build the client and run one operation against it.
async fn executar<T, F, Fut>(
    cfg: &ClientConfig,
    operacao: F,
) -> Result<T, tribuna_client::ClientError>
where
    F: FnOnce(TribunalClient) -> Fut,
    Fut: Future<Output = Result<T, tribuna_client::ClientError>>,
{
    let cliente = TribunalClient::new(cfg)?;
    operacao(cliente).await
}
