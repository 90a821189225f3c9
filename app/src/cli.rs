//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use todoapp_core::config::DEFAULT_API_BASE_URL;
use todoapp_core::Config;

use crate::output::Output;

#[derive(Debug, Parser)]
#[command(name = "todoapp", version, about = "Fetch and render a user's todo list")]
pub struct Cli {
    /// Base URL of the todo API.
    #[arg(long, env = "TODOAPP_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// Numeric id of the user whose todos are shown. Zero counts as unset.
    #[arg(long, env = "TODOAPP_USER_ID")]
    pub user_id: Option<u64>,

    /// How long an error banner stays up, in milliseconds.
    #[arg(long, env = "TODOAPP_DISMISS_AFTER_MS", default_value_t = 3000)]
    pub dismiss_after_ms: u64,

    /// Write the rendered page here instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(self.api_url.clone(), self.user_id)
            .with_dismiss_after(Duration::from_millis(self.dismiss_after_ms))
    }

    pub fn output(&self) -> Output {
        match &self.out {
            Some(path) => Output::File(path.clone()),
            None => Output::Stdout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "todoapp",
            "--api-url",
            "http://example.test/",
            "--user-id",
            "12",
            "--dismiss-after-ms",
            "250",
            "--out",
            "page.html",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.api_base_url, "http://example.test/");
        assert_eq!(config.configured_user(), Some(12));
        assert_eq!(config.dismiss_after, Duration::from_millis(250));
        assert_eq!(cli.output(), Output::File(PathBuf::from("page.html")));
    }

    #[test]
    fn rejects_non_numeric_user_id() {
        assert!(Cli::try_parse_from(["todoapp", "--user-id", "alice"]).is_err());
    }
}
