mod answer;
mod errors;
mod logging;
mod root;
mod server;

pub use answer::AnswerConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::{ServerConfig, MAX_UDP_PAYLOAD, STANDARD_UDP_PAYLOAD};
