//! Report rendering for conversation statistics.
//!
//! The plain-text layout is a fixed presentation contract; markdown and
//! JSON are alternative renderings of the same stats.

use crate::aggregations::{ConversationStats, DEFAULT_TOP_KEYWORDS};
use chat_core::config::ReportFormat;

/// Report generator for conversation summaries.
pub struct ReportGenerator;

impl ReportGenerator {
    /// Render `stats` in the requested format.
    pub fn render(stats: &ConversationStats, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Text => Ok(Self::text_summary(stats)),
            ReportFormat::Markdown => Ok(Self::markdown_report(stats)),
            ReportFormat::Json => Self::json_report(stats),
        }
    }

    /// Plain-text summary printed by the CLI.
    pub fn text_summary(stats: &ConversationStats) -> String {
        let keyword_str = stats.keyword_list();
        let mut report = String::new();

        report.push_str("=== Chat Summary ===\n");
        report.push_str(&format!("Total messages: {}\n", stats.total_messages));
        report.push_str(&format!("User messages: {}\n", stats.user_message_count));
        report.push_str(&format!("AI messages: {}\n", stats.ai_message_count));
        report.push_str(&format!("Total exchanges: {}\n", stats.exchanges));

        if !stats.keywords.is_empty() {
            report.push_str(&format!("\nMost common keywords: {}\n", keyword_str));
        }

        report.push_str("\nSummary:\n");
        report.push_str(&format!(
            "- The conversation had {} exchanges.\n",
            stats.exchanges
        ));
        report.push_str(&format!("- {}\n", stats.nature));
        report.push_str(&format!("- Most common keywords: {}.\n", keyword_str));

        report
    }

    /// Markdown document with keyword counts.
    pub fn markdown_report(stats: &ConversationStats) -> String {
        let mut report = String::new();

        report.push_str("# Chat Summary\n\n");

        report.push_str("## Overview\n\n");
        report.push_str(&format!("- **Total Messages:** {}\n", stats.total_messages));
        report.push_str(&format!("- **User Messages:** {}\n", stats.user_message_count));
        report.push_str(&format!("- **AI Messages:** {}\n", stats.ai_message_count));
        report.push_str(&format!("- **Exchanges:** {}\n\n", stats.exchanges));

        if !stats.keywords.is_empty() {
            report.push_str("## Top Keywords\n\n");
            for (i, keyword) in stats.keywords.iter().enumerate() {
                report.push_str(&format!(
                    "{}. `{}` - {} mentions\n",
                    i + 1,
                    keyword.word,
                    keyword.count
                ));
            }
            report.push('\n');
        }

        report.push_str("## Summary\n\n");
        report.push_str(&format!(
            "The conversation had {} exchanges. {}\n",
            stats.exchanges, stats.nature
        ));

        report
    }

    /// Pretty-printed JSON of the full stats.
    pub fn json_report(stats: &ConversationStats) -> serde_json::Result<String> {
        serde_json::to_string_pretty(stats)
    }
}

/// Summarize two per-speaker message lists as the plain-text report.
pub fn summarize<S: AsRef<str>>(user_messages: &[S], ai_messages: &[S]) -> String {
    let stats = ConversationStats::from_texts(user_messages, ai_messages, DEFAULT_TOP_KEYWORDS);
    ReportGenerator::text_summary(&stats)
}
