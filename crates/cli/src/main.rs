use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use kaizen_code_chunker::{Chunker, ChunkerConfig, CollisionPolicy, Language, ParsedBody};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

mod display_path;

#[derive(Parser)]
#[command(name = "kaizen-chunk")]
#[command(about = "Split a source file into imports, functions, classes and leftover blocks", long_about = None)]
#[command(version)]
struct Cli {
    /// Source file to chunk (`-` reads stdin)
    path: PathBuf,

    /// Language name (python, javascript, typescript, tsx, rust); detected from the extension if omitted
    #[arg(short, long)]
    language: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print a category summary to stderr
    #[arg(long)]
    stats: bool,

    /// Fail on duplicate names instead of keeping the last one
    #[arg(long)]
    strict: bool,

    /// TOML file with chunker configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let body = run(&cli)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&body)?
    } else {
        serde_json::to_string(&body)?
    };
    println!("{json}");
    Ok(())
}

fn run(cli: &Cli) -> Result<ParsedBody> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ChunkerConfig::default(),
    };
    if cli.strict {
        config.collision_policy = CollisionPolicy::Error;
    }
    let chunker = Chunker::try_new(config)?;

    let language = resolve_language(cli)?;
    let content = read_source(&cli.path)?;
    let shown = display_path::clean(&cli.path);

    log::info!("Chunking {shown} as {language}");
    let body = chunker
        .chunk_with_language(&content, language)
        .with_context(|| format!("Failed to chunk {shown}"))?;

    if cli.stats {
        eprintln!("{shown}: {}", body.stats());
    }
    Ok(body)
}

fn resolve_language(cli: &Cli) -> Result<Language> {
    if let Some(name) = &cli.language {
        return Ok(name.parse()?);
    }
    if is_stdin(&cli.path) {
        anyhow::bail!("--language is required when reading from stdin");
    }
    let language = Language::from_path(&cli.path);
    if language == Language::Unknown {
        anyhow::bail!(
            "Cannot detect language of {}; pass --language",
            cli.path.display()
        );
    }
    Ok(language)
}

fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read source from stdin")?;
        return Ok(buffer);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_config(path: &Path) -> Result<ChunkerConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Invalid config {}", path.display()))
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}
