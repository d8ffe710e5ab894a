use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use log::{debug, info};
use uwscr_highlight::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    Dialect, LanguageDefinition, LexerOptions, LexerRegistry, LineTracker, Token,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Classify UWSCR source into highlighting spans.
#[derive(Debug, Parser)]
#[command(name = "uwscr-highlight", version)]
struct Cli {
    /// Source file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Language alias; defaults to the lexer matching the file name, then `uwscr`
    #[arg(short, long)]
    language: Option<String>,

    /// Use the 2022 documentation rule table
    #[arg(long)]
    legacy: bool,

    /// Emit skipped characters as Error tokens
    #[arg(long)]
    emit_unmatched: bool,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log lexer state changes
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let source = read_source(cli.file.as_ref())?;
    let registry = build_registry(cli.legacy)?;
    let language = select_language(&registry, cli)?;

    info!("highlighting {} bytes as {}", source.len(), language.name);

    let options = LexerOptions {
        emit_unmatched: cli.emit_unmatched,
    };
    let tokens: Vec<Token> = language.tokenize(&source, options).collect();
    debug!("{} tokens", tokens.len());

    let rendered = match cli.format {
        Format::Text => render_text(&source, &tokens),
        Format::Json => serde_json::to_string_pretty(&tokens).map_err(|err| {
            Error::new(ErrorImpl::Io {
                path: String::from("<stdout>"),
                reason: err.to_string(),
            })
        })? + "\n",
    };

    io::stdout().write_all(rendered.as_bytes()).map_err(|err| {
        Error::new(ErrorImpl::Io {
            path: String::from("<stdout>"),
            reason: err.to_string(),
        })
    })
}

fn read_source(file: Option<&PathBuf>) -> Result<String, Error> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|err| {
            Error::new(ErrorImpl::Io {
                path: path.to_string_lossy().into_owned(),
                reason: err.to_string(),
            })
        }),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(|err| {
                Error::new(ErrorImpl::Io {
                    path: String::from("<stdin>"),
                    reason: err.to_string(),
                })
            })?;
            Ok(buffer)
        }
    }
}

fn build_registry(legacy: bool) -> Result<LexerRegistry, Error> {
    if !legacy {
        return LexerRegistry::with_defaults();
    }

    let mut registry = LexerRegistry::new();
    registry.register(LanguageDefinition::uwscr(Dialect::Legacy)?)?;
    Ok(registry)
}

fn select_language<'a>(registry: &'a LexerRegistry, cli: &Cli) -> Result<&'a LanguageDefinition, Error> {
    let file = cli.file.as_ref().map(|path| path.to_string_lossy());
    registry.resolve(cli.language.as_deref(), file.as_deref())
}

fn render_text(source: &str, tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut tracker = LineTracker::new(source);

    for token in tokens {
        let (line, column) = tracker.locate(token.span.start);
        out.push_str(&format!(
            "{}:{}\t{}\t{}\t{:?}\n",
            line,
            column,
            token.kind,
            token.kind.css_class(),
            token.value
        ));
    }

    out
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} ({})", error.get_error_name(), error);
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
}
