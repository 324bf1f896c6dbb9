use crate::data::{RequestData, ResponseData};
use std::{fmt::Debug, sync::Arc};

/// Receives the crawl lifecycle events a host emits.
///
/// Implementations must not fail: whatever goes wrong inside a callback stays there.
pub trait CrawlObserver: Debug {
    fn on_request_scheduled(&self, request: &RequestData);
    fn on_response_received(&self, response: &ResponseData, request: &RequestData);
}

/// Host-side event bus. Observers are called synchronously, in connection order.
#[derive(Debug, Default)]
pub struct Signals {
    observers: Vec<Arc<dyn CrawlObserver + Send + Sync>>,
}

impl Signals {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub fn connect(&mut self, observer: Arc<dyn CrawlObserver + Send + Sync>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn send_request_scheduled(&self, request: &RequestData) {
        for observer in &self.observers {
            observer.on_request_scheduled(request);
        }
    }

    pub fn send_response_received(&self, response: &ResponseData, request: &RequestData) {
        for observer in &self.observers {
            observer.on_response_received(response, request);
        }
    }
}
