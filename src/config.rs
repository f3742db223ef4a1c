use crate::source::{DataSource, HttpSource, SampleSource};
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const EXPENSES_PATH: &str = "/api/expenses";

/// Where the demo chart gets its numbers from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DemoData {
    #[default]
    Live,
    Sample,
}

impl DemoData {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Some(Self::Live),
            "sample" | "mock" => Some(Self::Sample),
            _ => None,
        }
    }
}

/// Build-time configuration. Values are baked in with `option_env!` since a
/// wasm bundle has no process environment to read at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub demo_data: DemoData,
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            demo_data: DemoData::default(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_vars(
            option_env!("OLLIE_API_URL"),
            option_env!("OLLIE_DEMO_DATA"),
            option_env!("OLLIE_FETCH_TIMEOUT_MS"),
        )
    }

    pub fn from_vars(api_url: Option<&str>, demo_data: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(url) = api_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.api_url = url.trim_end_matches('/').to_string();
        }

        if let Some(mode) = demo_data {
            match DemoData::parse(mode) {
                Some(mode) => config.demo_data = mode,
                None => warn!(mode, "unknown OLLIE_DEMO_DATA, using live data"),
            }
        }

        if let Some(ms) = timeout_ms {
            match ms.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.fetch_timeout = Duration::from_millis(ms),
                _ => warn!(ms, "invalid OLLIE_FETCH_TIMEOUT_MS, using default"),
            }
        }

        config
    }

    pub fn expenses_url(&self) -> String {
        format!("{}{}", self.api_url, EXPENSES_PATH)
    }

    pub fn source(&self) -> DataSource {
        match self.demo_data {
            DemoData::Live => DataSource::Live(HttpSource::new(self.expenses_url(), self.fetch_timeout)),
            DemoData::Sample => DataSource::Sample(SampleSource),
        }
    }
}
