use std::env;

pub const ENV_LOG_LEVEL: &str = "SIGPROV_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "SIGPROV_LOG_FORMAT";
pub const ENV_LOG_TIMESTAMPS: &str = "SIGPROV_LOG_TIMESTAMPS";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Level {
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }

    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            4 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    Text = 0,
    Json = 1,
}

impl Format {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LogConfig {
    pub level: Level,
    pub format: Format,
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            format: Format::Text,
            timestamps: true,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(level) = lookup(ENV_LOG_LEVEL).as_deref().and_then(Level::parse) {
            config.level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT).as_deref().and_then(Format::parse) {
            config.format = format;
        }
        if let Some(timestamps) = lookup(ENV_LOG_TIMESTAMPS).as_deref().and_then(parse_bool) {
            config.timestamps = timestamps;
        }
        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn parse_level() {
        assert_eq!(Level::parse("info"), Some(Level::Info));
        assert_eq!(Level::parse("WARN"), Some(Level::Warn));
        assert_eq!(Level::parse("warning"), Some(Level::Warn));
        assert_eq!(Level::parse(" trace "), Some(Level::Trace));
        assert_eq!(Level::parse("nope"), None);
    }

    #[test]
    fn parse_format() {
        assert_eq!(Format::parse("text"), Some(Format::Text));
        assert_eq!(Format::parse("JSON"), Some(Format::Json));
        assert_eq!(Format::parse("nope"), None);
    }

    #[test]
    fn level_roundtrips_through_u8() {
        for level in [
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Trace,
        ] {
            assert_eq!(Level::from_u8(level as u8), level);
        }
    }

    #[test]
    fn config_from_lookup_applies_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_LOG_LEVEL, "debug"),
            (ENV_LOG_FORMAT, "json"),
            (ENV_LOG_TIMESTAMPS, "off"),
        ]
        .into_iter()
        .collect();
        let config = LogConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(
            config,
            LogConfig {
                level: Level::Debug,
                format: Format::Json,
                timestamps: false,
            }
        );
    }

    #[test]
    fn config_from_lookup_ignores_garbage() {
        let config = LogConfig::from_lookup(|name| match name {
            ENV_LOG_LEVEL => Some("loud".to_string()),
            ENV_LOG_TIMESTAMPS => Some("maybe".to_string()),
            _ => None,
        });
        assert_eq!(config, LogConfig::default());
    }
}
