// SPDX-License-Identifier: PMPL-1.0-or-later

//! morse-kit: encode, decode, chart and play Morse code from the command line.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use morse_kit::diagnostics::{self, TABLES_ENV};
use morse_kit::logging::{errors_reach_log, init_logging};
use morse_kit::playback::{play, stop_on_interrupt, PlaybackOptions, PlaybackOutcome, TerminalPlayer};
use morse_kit::{decode, encode, render_chart, ChartOptions, CodecOptions, Language, MorseError, TableStore};
use std::borrow::Cow;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "morse-kit")]
#[command(version)]
#[command(about = "Easily encode, decode, chart and play Morse code")]
#[command(long_about = None)]
struct Cli {
    /// Table document to use instead of the built-in tables (JSON, or YAML by extension)
    #[arg(long, global = true, value_name = "PATH")]
    tables: Option<PathBuf>,

    /// Show debug diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text into Morse code
    Encode {
        /// Text to encode
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,

        /// Language for encoding
        #[arg(value_name = "LANGUAGE")]
        language: String,

        #[command(flatten)]
        codec: CodecArgs,
    },

    /// Decode Morse code into text
    Decode {
        /// Morse code to decode
        #[arg(value_name = "CODE", allow_hyphen_values = true)]
        code: String,

        /// Language for decoding
        #[arg(value_name = "LANGUAGE")]
        language: String,

        #[command(flatten)]
        codec: CodecArgs,
    },

    /// Print out the code chart
    Chart {
        /// Symbol for dots
        #[arg(long, default_value = "·")]
        dot: String,

        /// Symbol for dashes
        #[arg(long, default_value = "-")]
        dash: String,
    },

    /// List of supported languages
    Languages,

    /// Play Morse code on the terminal; press Ctrl-C to stop
    Play {
        /// Morse code to play
        #[arg(value_name = "CODE", allow_hyphen_values = true)]
        code: String,

        /// Base delay in seconds (a dash lasts one delay, a dot half)
        #[arg(long, default_value_t = 0.5)]
        delay: f64,

        /// Volume between 0.0 (exclusive) and 1.0
        #[arg(long, default_value_t = 1.0)]
        volume: f64,

        /// Symbol for dots
        #[arg(long, default_value = ".")]
        dot: String,

        /// Symbol for dashes
        #[arg(long, default_value = "-")]
        dash: String,

        /// Symbol for separator between words
        #[arg(long, default_value = "/")]
        separator: String,

        /// Ring the terminal bell on every tone
        #[arg(long)]
        bell: bool,
    },

    /// Check the symbol tables for problems
    Doctor,
}

#[derive(Args)]
struct CodecArgs {
    /// Symbol for dots
    #[arg(long, default_value = ".")]
    dot: String,

    /// Symbol for dashes
    #[arg(long, default_value = "-")]
    dash: String,

    /// Symbol for separator between words
    #[arg(long, default_value = "/")]
    separator: String,

    /// Symbol for characters or codes that are not supported
    #[arg(long, default_value = "*")]
    error: String,

    /// Show the source of every letter in brackets
    #[arg(long)]
    markup: bool,
}

impl From<CodecArgs> for CodecOptions {
    fn from(args: CodecArgs) -> Self {
        CodecOptions {
            dot: args.dot,
            dash: args.dash,
            separator: args.separator,
            error: args.error,
            markup: args.markup,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        // Library errors are already on stderr unless the log filter hides them.
        if err.downcast_ref::<MorseError>().is_none() || !errors_reach_log() {
            eprintln!("{} {:#}", "error:".red().bold(), err);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let table_path = cli
        .tables
        .or_else(|| env::var_os(TABLES_ENV).map(PathBuf::from));

    match cli.command {
        Commands::Encode {
            text,
            language,
            codec,
        } => {
            let tables = load_tables(table_path.as_deref())?;
            println!("{}", encode(&tables, &text, &language, &codec.into())?);
        }

        Commands::Decode {
            code,
            language,
            codec,
        } => {
            let tables = load_tables(table_path.as_deref())?;
            println!("{}", decode(&tables, &code, &language, &codec.into())?);
        }

        Commands::Chart { dot, dash } => {
            let tables = load_tables(table_path.as_deref())?;
            print!("{}", render_chart(&tables, &ChartOptions { dot, dash })?);
        }

        Commands::Languages => {
            println!("{}", "Supported languages for encoding and decoding".bold());
            for lang in Language::all() {
                println!("  - {:<10} ({})", lang.title(), lang.key().cyan());
            }
        }

        Commands::Play {
            code,
            delay,
            volume,
            dot,
            dash,
            separator,
            bell,
        } => {
            let options = PlaybackOptions {
                delay,
                volume,
                dot,
                dash,
                separator,
            };
            let stop = Arc::new(AtomicBool::new(false));
            stop_on_interrupt(stop.clone())?;
            eprintln!("{}", "Playing, press Ctrl-C to stop.".dimmed());

            let mut player = TerminalPlayer::new(io::stdout()).with_bell(bell);
            let outcome = play(&code, &options, &mut player, &stop)?;
            println!();
            if outcome == PlaybackOutcome::Interrupted {
                eprintln!("{}", "Playback stopped.".yellow());
            }
        }

        Commands::Doctor => {
            let tables = load_tables(table_path.as_deref());
            diagnostics::run_self_diagnostics(tables.as_deref().map_err(Clone::clone))?;
        }
    }

    Ok(())
}

fn load_tables(path: Option<&Path>) -> morse_kit::Result<Cow<'static, TableStore>> {
    match path {
        Some(path) => TableStore::from_path(path).map(Cow::Owned),
        None => TableStore::builtin().map(Cow::Borrowed),
    }
}
