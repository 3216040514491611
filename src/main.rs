// SPDX-License-Identifier: MIT
//
// cotfilter: stdin-to-stdout text filters for editor selection pipes.
//
// The host editor runs one filter per invocation, hands it the selection
// (or the whole document) on stdin, and pastes stdout back:
//
//   stdin → read_input → execute(filter) → stdout
//
// Crates:
//
//   cot-text    → line and buffer transforms (prefixes, fences, replace, ...)
//   cot-convert → JSON / YAML / CSV conversion
//
// Every filter is a pure function of its input. This file owns the I/O,
// the logger, and the exit status.

mod cli;
mod logging;
mod mode;
mod registry;

use std::io::{self, Read, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use cot_convert::Conversion;
use cot_text::number::NumberOptions;
use cot_text::{case, fence, number, prefix, random, replace, stats, wrap};

use crate::cli::{Cli, Command, FilterCommand};
use crate::registry::Filter;

// ─── Filter dispatch ────────────────────────────────────────────────────────

/// Run one filter over `input`.
fn execute(command: &FilterCommand, input: &str) -> Result<String> {
    Ok(match command {
        FilterCommand::MarkdownHeaders => prefix::markdown_headers(input),
        FilterCommand::MarkdownList => prefix::markdown_list(input),
        FilterCommand::MarkdownNumberedList => prefix::markdown_numbered_list(input),
        FilterCommand::MarkdownCodeBlock => fence::markdown_code_block(input),
        FilterCommand::AddHashComments => prefix::add_hash_comments(input),
        FilterCommand::RemoveHashComments => prefix::remove_hash_comments(input),
        FilterCommand::AddSlashComments => prefix::add_slash_comments(input),
        FilterCommand::RemoveSlashComments => prefix::remove_slash_comments(input),
        FilterCommand::RemoveLeadingChars => prefix::remove_leading_chars(input),
        FilterCommand::WrapCurlyBraces => wrap::wrap_curly_braces(input),
        FilterCommand::MultiReplace => replace::multi_replace(input)?,
        FilterCommand::RandomString { length } => random::random_string(&mut rand::rng(), *length),
        FilterCommand::LineNumbers(args) => number::line_numbers(
            input,
            &NumberOptions {
                separator: args.separator.clone(),
                start: args.start,
                step: args.step,
            },
        )?,
        FilterCommand::TextStats => stats::text_stats(input),
        FilterCommand::TransformCase { case: target } => case::transform_case(input, (*target).into()),
        FilterCommand::JsonToYaml => Conversion::JsonToYaml.run(input),
        FilterCommand::YamlToJson => Conversion::YamlToJson.run(input),
        FilterCommand::CsvToJson => Conversion::CsvToJson.run(input),
        FilterCommand::JsonToCsv => Conversion::JsonToCsv.run(input),
    })
}

// ─── I/O ────────────────────────────────────────────────────────────────────

fn read_input(filter: Filter) -> Result<String> {
    let info = filter.info();
    if !info.input.reads_stdin() {
        return Ok(String::new());
    }
    let mut input = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut input)
        .context("failed to read standard input")?;
    Ok(input)
}

fn write_output(output: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write standard output")
}

/// A shell wrapper the host can install as a script for `filter`.
fn wrapper_script(filter: Filter) -> String {
    let info = filter.info();
    format!(
        "#!/bin/sh\n{}\n# {}\nexec cotfilter {} \"$@\"\n",
        mode::header_lines(info.input, info.output),
        info.summary,
        info.name
    )
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn run(cli: &Cli) -> Result<()> {
    logging::init(cli.verbosity).context("failed to initialize logging")?;

    match &cli.command {
        Command::List => write_output(&registry::listing()),
        Command::Script { filter } => write_output(&wrapper_script(*filter)),
        Command::Filter(command) => {
            let filter = command.filter();
            let info = filter.info();
            let input = read_input(filter)?;
            log::debug!(
                "{}: {} bytes in ({} → {})",
                info.name,
                input.len(),
                info.input,
                info.output
            );
            let output = execute(command, &input)?;
            log::debug!("{}: {} bytes out", info.name, output.len());
            write_output(&output)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("cotfilter: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
