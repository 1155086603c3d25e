use std::{
    fs::File,
    io::{BufReader, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordcloud_url::{
    BuildOptions, Settings, TextOptions, UrlBuilder, WordEntry, parse_params, parse_url,
};

#[derive(Parser, Debug)]
#[command(name = "wordcloud-url", version, about = "Build and read word cloud links")]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a link from a JSON document `{ "words": [...], "settings": {...} }`.
    Build(BuildArgs),
    /// Print the words and settings carried by a link as JSON.
    Parse(ParseArgs),
    /// Count the words of a text and build a link from them.
    Text(TextArgs),
}

#[derive(Parser, Debug)]
struct EndpointArgs {
    /// Origin the link points at [default: $WORDCLOUD_BASE_URL or http://localhost:3000].
    #[arg(long)]
    base_url: Option<String>,

    /// Path of the render page.
    #[arg(long, default_value = "/r")]
    render_path: String,
}

impl EndpointArgs {
    fn builder(&self) -> UrlBuilder {
        let mut options = BuildOptions::from_env().with_render_path(&self.render_path);
        if let Some(base_url) = &self.base_url {
            options = options.with_base_url(base_url);
        }
        tracing::debug!(endpoint = %options.endpoint(), "link endpoint");
        UrlBuilder::new(options)
    }
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input JSON; stdin when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Never condense the link.
    #[arg(long)]
    verbose_only: bool,

    #[command(flatten)]
    endpoint: EndpointArgs,
}

#[derive(Parser, Debug)]
struct ParseArgs {
    /// A full link or a bare query string.
    link: String,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct TextArgs {
    /// Input text; stdin when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Keep common words such as "the" and "and".
    #[arg(long)]
    keep_stopwords: bool,

    /// Extra word to leave out (repeatable).
    #[arg(long = "block")]
    blocked_words: Vec<String>,

    /// Read `word weight word weight ...` instead of counting free text.
    #[arg(long)]
    manual: bool,

    /// Never condense the link.
    #[arg(long)]
    verbose_only: bool,

    #[command(flatten)]
    endpoint: EndpointArgs,
}

#[derive(Deserialize, Debug)]
struct Document {
    #[serde(default)]
    words: Vec<WordEntry>,
    #[serde(default)]
    settings: Settings,
}

#[derive(Serialize, Debug)]
struct ParsedDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<Vec<WordEntry>>,
    settings: Settings,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Parse(args) => cmd_parse(args),
        Command::Text(args) => cmd_text(args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "wordcloud_url=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    let mut buf = String::new();
    match path {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("open input '{}'", path.display()))?;
            BufReader::new(f)
                .read_to_string(&mut buf)
                .with_context(|| format!("read input '{}'", path.display()))?;
        }
        None => {
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
        }
    }
    Ok(buf)
}

fn emit_link(
    builder: &UrlBuilder,
    words: &[WordEntry],
    settings: &Settings,
    verbose_only: bool,
) -> anyhow::Result<()> {
    let url = if verbose_only {
        builder.verbose_url(words, settings)
    } else {
        builder
            .condensed_url(words, settings)
            .context("condense link")?
    };
    println!("{url}");
    Ok(())
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let input = read_input(args.in_path.as_deref())?;
    let doc: Document = serde_json::from_str(&input).context("parse input JSON")?;

    // conflicts are resolved and logged at `warn` by the builder
    emit_link(
        &args.endpoint.builder(),
        &doc.words,
        &doc.settings,
        args.verbose_only,
    )
}

fn cmd_parse(args: ParseArgs) -> anyhow::Result<()> {
    let link = args.link.trim();
    let params = if link.contains("://") {
        parse_url(link)
    } else {
        parse_params(link)
    };

    let doc = ParsedDocument {
        words: params.words,
        settings: params.settings,
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    }
    .context("serialize parameters")?;
    println!("{json}");
    Ok(())
}

fn cmd_text(args: TextArgs) -> anyhow::Result<()> {
    let input = read_input(args.in_path.as_deref())?;
    let builder = args.endpoint.builder();
    let settings = Settings::default();

    if args.manual {
        let words = wordcloud_url::util::parse_manual_entry(&input);
        anyhow::ensure!(!words.is_empty(), "no words in input");
        return emit_link(&builder, &words, &settings, args.verbose_only);
    }

    let options = TextOptions {
        remove_stopwords: !args.keep_stopwords,
        blocked_words: args.blocked_words,
        ..TextOptions::default()
    };
    let words = wordcloud_url::util::normalize_weights(
        &wordcloud_url::util::frequencies_from_text(&input, &options),
        1.0,
        10.0,
    );
    anyhow::ensure!(!words.is_empty(), "no words left after filtering");

    tracing::debug!(count = words.len(), "counted words");
    emit_link(&builder, &words, &settings, args.verbose_only)
}
