use crate::{Error, MISSING_API_URL, SUBWAY_LINES_URL};
use std::time::Duration;

pub const API_URL_VAR: &str = "SUBWAY_ART_API_URL";
pub const LINES_URL_VAR: &str = "SUBWAY_ART_LINES_URL";
pub const TIMEOUT_VAR: &str = "SUBWAY_ART_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub subway_lines_url: String,
    pub show_subway_lines: bool,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(api_url: impl Into<String>) -> Result<Config, Error> {
        let api_url = api_url.into();
        if api_url.trim().is_empty() {
            return Err(Error::Configuration(MISSING_API_URL.to_owned()));
        }

        Ok(Config {
            api_url,
            subway_lines_url: SUBWAY_LINES_URL.to_owned(),
            show_subway_lines: true,
            timeout: None,
        })
    }

    pub fn from_env() -> Result<Config, Error> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_VAR).unwrap_or_default();
        let mut config = Config::new(api_url)?;

        if let Some(url) = lookup(LINES_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.subway_lines_url = url;
        }

        if let Some(secs) = lookup(TIMEOUT_VAR) {
            config.timeout = Some(parse_timeout(&secs)?);
        }

        Ok(config)
    }
}

pub fn parse_timeout(secs: &str) -> Result<Duration, Error> {
    match secs.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(Error::Configuration(format!(
            "Invalid timeout \"{}\", expected a positive number of seconds.",
            secs
        ))),
    }
}
