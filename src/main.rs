//! `parse_passage` - parse a pasted Scripture passage and print it as JSON.
//!
//! Usage: parse_passage [--file PATH | --clipboard] [--book ABBR --chapter N
//!        [--verse N] [--end-chapter N] [--end-verse N]]
//!
//! Reads stdin when neither `--file` nor `--clipboard` is given.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use passage_parser::config::Config;
use passage_parser::constants::format_help::SUPPORTED_FORMATS;
use passage_parser::error::Error;
use passage_parser::{try_parse_custom_bible_text, validate_passage_match, ExpectedPassage};
use tracing_subscriber::EnvFilter;

/// Where the pasted text comes from.
enum Source {
    Stdin,
    File(PathBuf),
    Clipboard,
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn number_flag(args: &[String], flag: &str) -> anyhow::Result<Option<u32>> {
    flag_value(args, flag)
        .map(|v| v.parse().with_context(|| format!("{flag} expects a number, got {v:?}")))
        .transpose()
}

fn source_from_args(args: &[String]) -> Source {
    if let Some(path) = flag_value(args, "--file") {
        Source::File(PathBuf::from(path))
    } else if args.iter().any(|a| a == "--clipboard") {
        Source::Clipboard
    } else {
        Source::Stdin
    }
}

/// Expected passage from `--book`/`--chapter`; missing verse bounds default
/// to the start of the chapter.
fn expected_from_args(args: &[String]) -> anyhow::Result<Option<ExpectedPassage>> {
    let Some(book) = flag_value(args, "--book") else {
        return Ok(None);
    };
    let chapter = number_flag(args, "--chapter")?.context("--book requires --chapter")?;
    let verse = number_flag(args, "--verse")?.unwrap_or(1);
    let end_chapter = number_flag(args, "--end-chapter")?.unwrap_or(chapter);
    let end_verse = number_flag(args, "--end-verse")?.unwrap_or(verse);
    Ok(Some(ExpectedPassage::new(book, chapter, verse, end_chapter, end_verse)))
}

fn read_input(source: &Source) -> passage_parser::Result<String> {
    match source {
        Source::Stdin => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Source::File(path) => fs_err::read_to_string(path).map_err(|e| Error::io(e, path.clone())),
        Source::Clipboard => {
            let mut clipboard = arboard::Clipboard::new()?;
            Ok(clipboard.get_text()?)
        }
    }
}

fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    init_tracing(&config);
    tracing::debug!("{} {}", config.app_name(), config.app_version());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let expected = expected_from_args(&args)?;
    let text = read_input(&source_from_args(&args))?;

    let passage = match try_parse_custom_bible_text(&text) {
        Ok(passage) => passage,
        Err(failure) => {
            eprintln!("{}", failure.hint());
            eprintln!("Supported formats:");
            for example in SUPPORTED_FORMATS {
                eprintln!("  {example}");
            }
            return Err(Error::from(failure).into());
        }
    };

    for line in passage.preview(config.preview_verses) {
        tracing::info!("{line}");
    }

    let validation = expected.map(|expected| validate_passage_match(&passage, &expected));
    if let Some(message) = validation.as_ref().and_then(|v| v.message.as_deref()) {
        tracing::warn!("{message}");
    }

    let output = serde_json::json!({
        "passage": passage,
        "reference": passage.reference(),
        "validation": validation,
    });
    let rendered = if config.pretty_json {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}
