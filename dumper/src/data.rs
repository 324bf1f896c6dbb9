use hyper::{body::Bytes, HeaderMap, Request, Response};
use std::fmt::{self, Display};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MessageKind {
    Request,
    Response,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Request => "REQUEST",
            MessageKind::Response => "RESPONSE",
        }
    }
}

impl Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RequestData {
    pub url: String,
    pub method: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RequestData {
    pub fn new<S1: Into<String>, S2: Into<String>>(method: S1, url: S2) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn from_hyper(request: &Request<Bytes>) -> Self {
        Self {
            url: request.uri().to_string(),
            method: request.method().to_string(),
            headers: request.headers().clone(),
            body: request.body().clone(),
        }
    }
}

impl Display for RequestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", self.method, self.url)
    }
}

#[derive(Debug, Clone)]
pub struct ResponseData {
    pub url: String,
    pub status_code: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ResponseData {
    pub fn new<S: Into<String>>(status_code: u16, url: S) -> Self {
        Self {
            url: url.into(),
            status_code,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// `hyper::Response` doesn't carry the URL it was fetched from, so the caller supplies it.
    pub fn from_hyper<S: Into<String>>(url: S, response: &Response<Bytes>) -> Self {
        Self {
            url: url.into(),
            status_code: response.status().as_u16(),
            headers: response.headers().clone(),
            body: response.body().clone(),
        }
    }
}

impl Display for ResponseData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", self.status_code, self.url)
    }
}
