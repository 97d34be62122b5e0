pub mod config;
pub mod error;
pub mod parser;
pub mod types;

pub use config::AppConfig;
pub use error::ChatError;
pub use parser::{parse_file, parse_lines};
pub use types::{Message, Speaker, Transcript};
