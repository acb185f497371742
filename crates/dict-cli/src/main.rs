use anyhow::Result;
use clap::Parser;
use dict_acquire::{DictError, ProxySettings, Timeouts, TranslationRequest};
use dict_format::OutputFormat;
use dict_model::{ConfigError, Language, LanguagePair};
use std::process::ExitCode;
use std::time::Duration;

const EXIT_CODE_FAILURE: u8 = 1;
const EXIT_CODE_CONFIG: u8 = 2;
const EXIT_CODE_NO_INPUT: u8 = 120;
const EXIT_CODE_EMPTY_BODY: u8 = 123;

#[derive(Parser)]
#[command(name = "dict")]
#[command(about = "Quick command-line translations via dict.cc")]
#[command(long_about = "Quick command-line translations via dict.cc, usable from the \
    Alfred launcher through the alfred output format.\n\n\
    Translates German -> English by default. Put two language codes in front of the \
    phrase to pick another pair, e.g. `dict en fr good morning` (supported: de, en, es, fr, it).\n\n\
    HTTPS_PROXY is honoured, including user:pass credentials; the --proxy-* options \
    take precedence over it.")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Phrase to translate
    terms: Vec<String>,

    /// Output format; repeat to print several
    #[arg(short, long, value_enum, default_value = "raw")]
    output: Vec<OutputArg>,

    /// Source language (overrides a leading language pair)
    #[arg(short, long)]
    from: Option<Language>,

    /// Destination language (overrides a leading language pair)
    #[arg(short, long)]
    to: Option<Language>,

    /// Proxy host (e.g. proxy.muc)
    #[arg(long)]
    proxy_host: Option<String>,

    /// Proxy port (e.g. 8080)
    #[arg(long)]
    proxy_port: Option<u16>,

    /// Username for proxy authentication
    #[arg(long)]
    proxy_user: Option<String>,

    /// Password for proxy authentication
    #[arg(long)]
    proxy_pass: Option<String>,

    /// Request timeout in seconds (at least 1)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputArg {
    /// Aligned plain-text columns
    Raw,
    /// JSON object with query, destination and source
    Json,
    /// Alfred script-filter XML
    Alfred,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Raw => OutputFormat::Raw,
            OutputArg::Json => OutputFormat::Json,
            OutputArg::Alfred => OutputFormat::Alfred,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.utc);

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = ?err, "Lookup failed");
            eprintln!("dict: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn init_tracing(log_level: &LogLevel, utc: bool) {
    let level = match log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,hyper_util=info,rustls=info",
        LogLevel::Trace => "trace,hyper_util=info,rustls=info",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    // stdout carries the rendered result only
    if utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    if cli.terms.is_empty() {
        eprintln!("dict: nothing to translate (try `dict --help`)");
        return Ok(ExitCode::from(EXIT_CODE_NO_INPUT));
    }

    let (languages, terms) = select_languages(cli.from, cli.to, &cli.terms);
    let proxy = ProxySettings {
        host: cli.proxy_host,
        port: cli.proxy_port,
        username: cli.proxy_user,
        password: cli.proxy_pass,
    };
    let timeouts = Timeouts {
        request: Duration::from_secs(cli.timeout),
        ..Timeouts::default()
    };

    let request = TranslationRequest::new(terms, languages, proxy)
        .map_err(DictError::from)?
        .with_timeouts(timeouts);
    tracing::info!(query = %request.query(), languages = %languages, "Translating");

    let translation = dict_acquire::translate(request).await?;

    for format in dedup(&cli.output) {
        println!("{}", OutputFormat::from(format).render(&translation)?);
    }

    Ok(ExitCode::SUCCESS)
}

/// Explicit `--from`/`--to` win; otherwise a leading pair of language codes
/// in the terms is used (and dropped from the phrase).
fn select_languages(
    from: Option<Language>,
    to: Option<Language>,
    terms: &[String],
) -> (LanguagePair, &[String]) {
    if from.is_none() && to.is_none() {
        return LanguagePair::split_leading(terms);
    }
    let default = LanguagePair::default();
    let languages = LanguagePair::new(
        from.unwrap_or(default.source),
        to.unwrap_or(default.destination),
    );
    (languages, terms)
}

/// Selected formats in order, each once.
fn dedup(formats: &[OutputArg]) -> Vec<OutputArg> {
    let mut seen = Vec::new();
    for f in formats {
        if !seen.contains(f) {
            seen.push(*f);
        }
    }
    seen
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<DictError>() {
        Some(DictError::EmptyBody { .. }) => EXIT_CODE_EMPTY_BODY,
        Some(DictError::Config(_)) => EXIT_CODE_CONFIG,
        Some(_) => EXIT_CODE_FAILURE,
        None if err.downcast_ref::<ConfigError>().is_some() => EXIT_CODE_CONFIG,
        None => EXIT_CODE_FAILURE,
    }
}
