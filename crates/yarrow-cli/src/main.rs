//! CLI frontend for yarrow divination sessions.

mod commands;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use yarrow_core::{Language, Method};
use yarrow_interpret::LlmConfig;

#[derive(Parser)]
#[command(
    name = "yarrow",
    about = "yarrow: liuyao and tarot readings with LLM interpretation",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

/// LLM endpoint settings, shared by commands that interpret.
#[derive(Args)]
struct LlmArgs {
    /// Chat-completions URL
    #[arg(long, env = "LLM_API_URL")]
    api_url: Option<String>,

    /// API key; without one every reading uses the templated fallback
    #[arg(long, env = "LLM_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model name
    #[arg(long, env = "LLM_MODEL")]
    model: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "LLM_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Sampling temperature
    #[arg(long, env = "LLM_TEMPERATURE")]
    temperature: Option<f32>,
}

impl LlmArgs {
    fn into_config(self) -> LlmConfig {
        let mut config = LlmConfig::default();
        if let Some(url) = self.api_url {
            config = config.with_api_url(url);
        }
        if let Some(key) = self.api_key.filter(|k| !k.trim().is_empty()) {
            config = config.with_api_key(key);
        }
        if let Some(model) = self.model {
            config = config.with_model(model);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(t) = self.temperature {
            config = config.with_temperature(t);
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a reading from a seed and interpret it
    Cast {
        /// Divination method: liuyao or tarot
        method: Method,

        /// The question to ask
        #[arg(short, long)]
        question: String,

        /// Seed for reproducible casts (default: freshly generated)
        #[arg(short, long)]
        seed: Option<String>,

        /// Language: zh, en or ja
        #[arg(short, long, default_value = "zh", value_parser = parse_language)]
        lang: Language,

        /// Print the session as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        llm: LlmArgs,
    },

    /// Cast by hand, one toss or draw per line of input
    Manual {
        /// Divination method: liuyao or tarot
        method: Method,

        /// The question to ask
        #[arg(short, long)]
        question: String,

        /// Language: zh, en or ja
        #[arg(short, long, default_value = "zh", value_parser = parse_language)]
        lang: Language,

        /// Print the session as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        llm: LlmArgs,
    },

    /// List the hexagram or tarot table
    Table {
        /// Which table: hexagrams or tarot
        which: String,

        /// Language: zh, en or ja
        #[arg(short, long, default_value = "zh", value_parser = parse_language)]
        lang: Language,
    },
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::parse(s).ok_or_else(|| format!("unknown language '{s}', expected zh, en or ja"))
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("warning: logging not initialised: {e}");
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Cast {
            method,
            question,
            seed,
            lang,
            json,
            llm,
        } => commands::cast::run(method, &question, seed, lang, json, llm.into_config()).await,
        Commands::Manual {
            method,
            question,
            lang,
            json,
            llm,
        } => commands::manual::run(method, &question, lang, json, llm.into_config()).await,
        Commands::Table { which, lang } => commands::table::run(&which, lang),
    }
}
