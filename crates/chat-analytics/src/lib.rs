//! Keyword extraction, conversation statistics, and report rendering for
//! parsed chat transcripts.

pub mod aggregations;
pub mod keywords;
pub mod reports;

pub use aggregations::{describe_nature, exchange_count, ConversationStats};
pub use keywords::{extract_keywords, Keyword};
pub use reports::{summarize, ReportGenerator};
