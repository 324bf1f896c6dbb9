use crate::error::Error;
use crawl_dumper::{RequestData, ResponseData, Signals};
use reqwest::blocking::Client as ReqwestClient;

/// Builder used to build a Crawler instance
#[derive(Debug, Default)]
pub struct CrawlerBuilder {
    http_client: Option<ReqwestClient>,
    signals: Option<Signals>,
}

impl CrawlerBuilder {
    pub fn new() -> Self {
        Self {
            http_client: None,
            signals: None,
        }
    }

    /// Use the given blocking reqwest client for fetching.
    pub fn with_http_client(mut self, client: ReqwestClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Emit lifecycle events on the given bus.
    pub fn with_signals(mut self, signals: Signals) -> Self {
        self.signals = Some(signals);
        self
    }

    pub fn build(mut self) -> Crawler {
        Crawler {
            http: self.http_client.take().unwrap_or_default(),
            signals: self.signals.take().unwrap_or_default(),
        }
    }
}

/// A sequential GET-only crawler that reports every request and response on its bus.
#[derive(Debug)]
pub struct Crawler {
    http: ReqwestClient,
    signals: Signals,
}

impl Crawler {
    /// Fetches `url`. Fetch failures are logged and don't stop the caller.
    pub fn crawl(&self, url: &str) {
        let request = RequestData::new("GET", url);
        self.signals.send_request_scheduled(&request);

        match self.fetch(&request) {
            Ok(response) => {
                tracing::info!("Crawled {} ({})", response.url, response.status_code);
                self.signals.send_response_received(&response, &request);
            }
            Err(e) => tracing::warn!("Could not fetch {}: {}", url, e),
        }
    }

    fn fetch(&self, request: &RequestData) -> Result<ResponseData, Error> {
        let response = self
            .http
            .get(&request.url)
            .headers(request.headers.clone())
            .send()?;

        let url = response.url().to_string();
        let status_code = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes()?;

        Ok(ResponseData {
            url,
            status_code,
            headers,
            body,
        })
    }
}
