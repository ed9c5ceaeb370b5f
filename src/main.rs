// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Portal text command line.
//!
//! Runs the portal formatters from the shell, mostly for scripting exports
//! and for checking how a value will be displayed.
//!
//! Each command takes its value as an argument. Without one it reads standard
//! input and handles every line in turn, so whole columns can be piped
//! through:
//!
//! ```sh
//! cut -d, -f3 personel.csv | portal-text phone --mask
//! ```
//!
//! Diagnostics go to standard error and are controlled with `RUST_LOG`.

use std::{
    io::{self, BufRead, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use portal_text::{
    DateFormatter,
    config::{self, AppConfig},
    format_file_size, format_phone, format_phone_as_typed, mask_email, mask_phone,
    notice::{FormAction, FormReply, Notice},
    slugify,
    upload::{FileKind, FilePreview},
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Configuration file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive an uppercase code from a display name.
    Slug {
        text: Option<String>,

        /// Code prefix, overrides the configured one.
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Format a phone number for display.
    Phone {
        raw: Option<String>,

        /// Apply the as-you-type grouping instead.
        #[arg(long, conflicts_with = "mask")]
        typed: bool,

        /// Mask all but the last four digits.
        #[arg(long)]
        mask: bool,
    },

    /// Mask the local part of an email address.
    MaskEmail { email: Option<String> },

    /// Format a date value.
    Date {
        value: Option<String>,

        /// Display pattern, overrides the configured one.
        #[arg(long)]
        format: Option<String>,

        /// Date formatter (`locale` or `manual`), overrides the configured one.
        #[arg(long)]
        formatter: Option<DateFormatter>,
    },

    /// Format a byte count.
    FileSize { bytes: Option<String> },

    /// Classify a MIME type.
    FileKind { mime: Option<String> },

    /// Print the upload preview of a file as JSON.
    FilePreview { name: String, size: u64, mime: String },

    /// Read a form reply envelope from standard input and print its notice as
    /// JSON.
    Notice {
        /// The form was a delete confirmation.
        #[arg(long)]
        delete: bool,
    },
}

/// The entry point of the application.
///
/// Sets up logging, loads the configuration and dispatches the command,
/// returning an error if any part of the execution fails.
fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => config::load_config(),
    };

    run(args.command, &config)
}

/// Installs the `tracing` subscriber.
///
/// Logs are written to standard error so that command output stays clean.
/// The filter comes from `RUST_LOG` and defaults to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Executes a single command against the loaded configuration.
fn run(command: Command, config: &AppConfig) -> Result<()> {
    match command {
        Command::Slug { text, prefix } => {
            let prefix = prefix.unwrap_or_else(|| config.slug_prefix.clone());
            for_each_value(text, |text| Ok(slugify(text, &prefix)))
        }
        Command::Phone { raw, typed, mask } => for_each_value(raw, |raw| {
            Ok(if mask {
                mask_phone(raw)
            } else if typed {
                format_phone_as_typed(raw)
            } else {
                format_phone(raw)
            })
        }),
        Command::MaskEmail { email } => for_each_value(email, |email| Ok(mask_email(email))),
        Command::Date {
            value,
            format,
            formatter,
        } => {
            let pattern = format.unwrap_or_else(|| config.date_format.clone());
            let formatter = formatter.unwrap_or(config.date_formatter);
            for_each_value(value, |value| Ok(formatter.format_date(value, &pattern)))
        }
        Command::FileSize { bytes } => for_each_value(bytes, |bytes| {
            let bytes = bytes
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid byte count: {bytes}"))?;
            Ok(format_file_size(bytes))
        }),
        Command::FileKind { mime } => for_each_value(mime, |mime| {
            let kind = FileKind::from_mime(mime);
            Ok(format!("{kind}\t{}", kind.icon_class()))
        }),
        Command::FilePreview { name, size, mime } => {
            let preview = FilePreview::new(&name, size, &mime);
            print_json(&preview)
        }
        Command::Notice { delete } => {
            let action = if delete {
                FormAction::Delete
            } else {
                FormAction::Save
            };

            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read form reply")?;

            // An unreadable reply is shown to users as a network failure.
            let notice = match FormReply::from_json(&body) {
                Ok(reply) => reply.notice(action),
                Err(e) => {
                    warn!(error = %e, "Discarding form reply");
                    Notice::network_failure()
                }
            };
            print_json(&notice)
        }
    }
}

/// Applies `f` to the given value, or to every line of standard input when
/// no value was given, printing each result on its own line.
fn for_each_value<F>(value: Option<String>, f: F) -> Result<()>
where
    F: Fn(&str) -> Result<String>,
{
    let mut out = io::stdout().lock();

    match value {
        Some(value) => writeln!(out, "{}", f(&value)?)?,
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read standard input")?;
                writeln!(out, "{}", f(&line)?)?;
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{json}");
    Ok(())
}
