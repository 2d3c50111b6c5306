use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use senryu::{
    BotConfig, LexiconSource, Message, MorphologicalSource, ReplyToMessage, VibratoSource,
};
use tracing_subscriber::EnvFilter;

/// Find 5-7-5 senryu hidden in Japanese text.
///
/// Reads one message per line from stdin unless --text is given.
#[derive(Parser, Debug)]
#[command(name = "senryu", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Compiled vibrato dictionary (.dic or .dic.zst); overrides the config
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// Lexicon TSV for the built-in analyzer (surface, reading, pos)
    #[arg(short, long)]
    lexicon: Option<PathBuf>,

    /// Check this text instead of reading stdin
    #[arg(short, long)]
    text: Option<String>,

    /// Channel id the messages are attributed to
    #[arg(long, default_value_t = 0)]
    channel: u64,

    /// Print the diagnostics report as JSON instead of a reply
    #[arg(long)]
    json: bool,

    /// Log candidates and scores to stderr
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let default = if debug {
        "senryu=debug,senryu_core=debug"
    } else {
        "warn,senryu::diagnostics=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_source(config: &BotConfig) -> Result<Box<dyn MorphologicalSource>> {
    if let Some(path) = &config.dictionary {
        let source = VibratoSource::open(path, config.feature_layout())
            .with_context(|| format!("loading dictionary {}", path.display()))?;
        return Ok(Box::new(source));
    }
    if let Some(path) = &config.lexicon {
        let source = LexiconSource::load(path)
            .with_context(|| format!("loading lexicon {}", path.display()))?;
        tracing::info!(entries = source.len(), "loaded lexicon");
        return Ok(Box::new(source));
    }
    tracing::info!("no dictionary configured, using built-in demo lexicon");
    Ok(Box::new(LexiconSource::demo()))
}

fn run_line(
    bot: &ReplyToMessage<Box<dyn MorphologicalSource>>,
    cli: &Cli,
    line: &str,
) -> Result<()> {
    if cli.json {
        let report = bot.extractor().diagnose(line)?;
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }
    let message = Message::new(cli.channel, line);
    match bot.execute(&message)? {
        Some(reply) => println!("{reply}\n"),
        None => println!("  → (no senryu)\n"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut config = match &cli.config {
        Some(path) => BotConfig::load_toml(path)
            .map_err(|e| anyhow::anyhow!("loading config {}: {e}", path.display()))?,
        None => BotConfig::default(),
    };
    if cli.dict.is_some() {
        config.dictionary = cli.dict.clone();
    }
    if cli.lexicon.is_some() {
        config.lexicon = cli.lexicon.clone();
    }
    config.base.diagnostics |= cli.debug;

    let source = build_source(&config)?;
    let bot = ReplyToMessage::new(source, config);

    if let Some(text) = &cli.text {
        return run_line(&bot, &cli, text);
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        run_line(&bot, &cli, &line)?;
    }
    Ok(())
}
