use crate::expense::sample_records;
use crate::load::FetchError;
use futures::future::{select, Either};
use gloo::net::http::Request;
use gloo::timers::future::TimeoutFuture;
use serde_json::Value;
use std::time::Duration;

/// Something the demo chart can pull expense records from.
#[allow(async_fn_in_trait)]
pub trait ExpenseSource {
    async fn fetch(&self) -> Result<Value, FetchError>;

    fn describe(&self) -> String;
}

/// `GET {base}/api/expenses` against the configured backend.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self { url, timeout }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self) -> Result<Value, FetchError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Http(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl ExpenseSource for HttpSource {
    async fn fetch(&self) -> Result<Value, FetchError> {
        let millis = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        let request = Box::pin(self.request());
        let timeout = Box::pin(TimeoutFuture::new(millis));

        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(FetchError::Timeout(self.timeout)),
        }
    }

    fn describe(&self) -> String {
        self.url().to_string()
    }
}

/// The built-in sample table, for when no backend is wired up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSource;

impl ExpenseSource for SampleSource {
    async fn fetch(&self) -> Result<Value, FetchError> {
        serde_json::to_value(sample_records()).map_err(|e| FetchError::Decode(e.to_string()))
    }

    fn describe(&self) -> String {
        "sample data".to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Live(HttpSource),
    Sample(SampleSource),
}

impl ExpenseSource for DataSource {
    async fn fetch(&self) -> Result<Value, FetchError> {
        match self {
            Self::Live(http) => http.fetch().await,
            Self::Sample(sample) => sample.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Live(http) => http.describe(),
            Self::Sample(sample) => sample.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::{records_from_payload, ExpenseRecord};
    use futures::executor::block_on;

    #[test]
    fn sample_source_serves_the_table() {
        let payload = block_on(SampleSource.fetch()).unwrap();
        let records = records_from_payload(&payload);
        assert_eq!(records, sample_records());
        assert_eq!(records[3], ExpenseRecord::new("Uni Supplies", 36.));
    }

    #[test]
    fn data_source_dispatches() {
        let source = DataSource::Sample(SampleSource);
        assert_eq!(source.describe(), "sample data");
        assert!(block_on(source.fetch()).unwrap().is_array());

        let http = HttpSource::new("http://127.0.0.1:8000/api/expenses".into(), Duration::from_secs(1));
        assert_eq!(DataSource::Live(http.clone()).describe(), http.url());
    }
}
