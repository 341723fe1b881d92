// Command-line front end for the septik resolver.
//
// Declines names given as arguments, or one per line on stdin when no
// arguments are given. Prints plain text by default, or JSON with
// `--format json`.
//
// Usage:
//   septik [--case CASE] [--all] [--format text|json] [WORDS]...
//
// CASE is a code 1..=6 or a case name in English or Kazakh ("dative",
// "барыс"). Without `--case` the instrumental (6) is used. Set RUST_LOG=debug
// to see which words no rule covered.

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use qazaq_septik::{Declined, Paradigm, Septik, decline_batch, paradigm};

/// Attach Kazakh case suffixes to names.
#[derive(Parser, Debug)]
#[command(name = "septik", version, about)]
struct Args {
    /// Case code (1..=6) or name, English or Kazakh.
    #[arg(short, long, default_value = "6")]
    case: Septik,

    /// Print all six cases for each word instead of one.
    #[arg(short, long)]
    all: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Words to decline. Read from stdin, one per line, when omitted.
    words: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let words = if args.words.is_empty() {
        read_words(io::stdin().lock()).context("reading words from stdin")?
    } else {
        args.words
    };
    log::debug!("declining {} word(s)", words.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.all {
        let paradigms: Vec<Paradigm> = words.iter().map(|w| paradigm(w)).collect();
        write_paradigms(&mut out, &paradigms, args.format)?;
    } else {
        let forms = decline_batch(&words, args.case);
        write_forms(&mut out, &forms, args.format)?;
    }

    out.flush().context("flushing stdout")?;
    Ok(())
}

/// Non-empty, trimmed lines.
fn read_words(input: impl BufRead) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in input.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

fn write_forms(out: &mut impl Write, forms: &[Declined], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for form in forms {
                writeln!(out, "{}", form.text).context("writing output")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, forms).context("writing JSON")?;
            writeln!(out).context("writing output")?;
        }
    }
    Ok(())
}

fn write_paradigms(out: &mut impl Write, paradigms: &[Paradigm], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for p in paradigms {
                writeln!(out, "{}", p.word).context("writing output")?;
                for form in &p.forms {
                    writeln!(out, "  {}: {}", form.septik.kazakh_name(), form.text)
                        .context("writing output")?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, paradigms).context("writing JSON")?;
            writeln!(out).context("writing output")?;
        }
    }
    Ok(())
}
