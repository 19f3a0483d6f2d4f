use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use teletraffic_core::DEFAULT_MAX_CHANNEL_SEARCH;

use crate::prompt::DEFAULT_CANCEL_TOKEN;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CalculatorConfig {
    /// Upper bound on channel counts tried while sizing a trunk group.
    pub max_channel_search: u32,
    /// Print the silence suppression note ahead of bandwidth results.
    pub show_silence_disclaimer: bool,
    /// Menu entry that backs out of the current prompt.
    pub cancel_token: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_channel_search: DEFAULT_MAX_CHANNEL_SEARCH,
            show_silence_disclaimer: true,
            cancel_token: DEFAULT_CANCEL_TOKEN.to_string(),
        }
    }
}

impl CalculatorConfig {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("max_channel_search", i64::from(defaults.max_channel_search))?
            .set_default("show_silence_disclaimer", defaults.show_silence_disclaimer)?
            .set_default("cancel_token", defaults.cancel_token)?;

        if let Some(path) = config_path {
            if path.extension().and_then(|ext| ext.to_str()) == Some("env") {
                // .env files feed the TELETRAFFIC_ environment source below.
                match dotenvy::from_path(&path) {
                    Ok(_) => tracing::info!("loaded environment from {}", path.display()),
                    Err(err) => {
                        tracing::warn!("failed to load .env from {}: {}", path.display(), err)
                    }
                }
            } else {
                builder = builder.add_source(File::from(path));
            }
        }

        builder = builder.add_source(Environment::with_prefix("TELETRAFFIC").try_parsing(true));

        let config: Self = builder.build()?.try_deserialize()?;
        if config.cancel_token.trim().is_empty() {
            return Err(ConfigError::Message(
                "cancel_token must not be empty".to_string(),
            ));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<F>(vars: &[(&str, &str)], test: F)
    where
        F: FnOnce(),
    {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut old = Vec::new();
        for (k, v) in vars {
            old.push((k.to_string(), env::var(k).ok()));
            env::set_var(k, v);
        }

        test();

        for (k, maybe_old) in old {
            match maybe_old {
                Some(val) => env::set_var(k, val),
                None => env::remove_var(k),
            }
        }
    }

    #[test]
    fn defaults_are_applied() {
        with_env(&[], || {
            let cfg = CalculatorConfig::new(None).expect("failed to build config");
            assert_eq!(cfg, CalculatorConfig::default());
            assert_eq!(cfg.max_channel_search, 100_000);
            assert!(cfg.show_silence_disclaimer);
            assert_eq!(cfg.cancel_token, "Q");
        });
    }

    #[test]
    fn env_vars_override_defaults() {
        with_env(
            &[
                ("TELETRAFFIC_MAX_CHANNEL_SEARCH", "250"),
                ("TELETRAFFIC_SHOW_SILENCE_DISCLAIMER", "false"),
            ],
            || {
                let cfg = CalculatorConfig::new(None).expect("failed to build config");
                assert_eq!(cfg.max_channel_search, 250);
                assert!(!cfg.show_silence_disclaimer);
            },
        );
    }

    #[test]
    fn env_overrides_file_and_file_overrides_defaults() {
        use std::io::Write;

        let mut tmp = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            tmp,
            r#"
max_channel_search = 5000
cancel_token = "X"
show_silence_disclaimer = false
"#
        )
        .expect("write to temp file");

        with_env(&[("TELETRAFFIC_MAX_CHANNEL_SEARCH", "42")], || {
            let cfg = CalculatorConfig::new(Some(PathBuf::from(tmp.path()))).expect("load config");
            assert_eq!(cfg.max_channel_search, 42);
            assert_eq!(cfg.cancel_token, "X");
            assert!(!cfg.show_silence_disclaimer);
        });
    }

    #[test]
    fn dotenv_file_feeds_environment_source() {
        use std::io::Write;

        let mut tmp = tempfile::Builder::new()
            .suffix(".env")
            .tempfile()
            .expect("temp file");
        writeln!(tmp, "TELETRAFFIC_CANCEL_TOKEN=exit").expect("write to temp file");

        with_env(&[], || {
            env::remove_var("TELETRAFFIC_CANCEL_TOKEN");
            let cfg = CalculatorConfig::new(Some(PathBuf::from(tmp.path()))).expect("load config");
            assert_eq!(cfg.cancel_token, "exit");
            env::remove_var("TELETRAFFIC_CANCEL_TOKEN");
        });
    }

    #[test]
    fn empty_cancel_token_is_rejected() {
        with_env(&[("TELETRAFFIC_CANCEL_TOKEN", " ")], || {
            assert!(CalculatorConfig::new(None).is_err());
        });
    }
}
