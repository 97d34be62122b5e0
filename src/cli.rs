use anyhow::Result;
use chat_analytics::{ConversationStats, ReportGenerator};
use chat_core::config::AppConfig;
use chat_core::parser::parse_file;
use chat_core::types::Transcript;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: chat-summarizer <chat_log_file>";

const NO_MESSAGES: &str = "No messages found or error reading file.";

/// The only accepted argument is the log path, so anything starting with a
/// dash (including `--help`) is a path too.
#[derive(Parser, Debug)]
#[command(
    name = "chat-summarizer",
    about = "Summarize a User/AI chat transcript",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Path to the chat log file
    #[arg(allow_hyphen_values = true)]
    chat_log_file: PathBuf,
}

/// Run the summarizer for `args` (program name first), writing all
/// user-facing output to `out`.
///
/// Bad arguments and unreadable input are reported on `out` and still
/// return `Ok`.
pub fn run<I, T, W>(args: I, config: &AppConfig, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            tracing::debug!("Argument error: {:?}", e.kind());
            writeln!(out, "{}", USAGE)?;
            return Ok(());
        }
    };

    let transcript = match parse_file(&cli.chat_log_file) {
        Ok(transcript) => transcript,
        Err(e) => {
            tracing::warn!(
                "Could not read {}: {:?}",
                cli.chat_log_file.display(),
                e
            );
            writeln!(out, "{}", e)?;
            Transcript::default()
        }
    };

    if transcript.is_empty() {
        writeln!(out, "{}", NO_MESSAGES)?;
        return Ok(());
    }

    let stats = ConversationStats::from_transcript(&transcript, config.keywords.top_n);
    let report = ReportGenerator::render(&stats, config.report.format)?;
    writeln!(out, "{}", report)?;
    Ok(())
}
