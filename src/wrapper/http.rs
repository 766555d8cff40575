use async_trait::async_trait;
use reqwest::Url;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HeaderKey {
    Authorization,
    ContentType,
    UserAgent,
}

impl HeaderKey {
    fn as_str(&self) -> &str {
        match self {
            HeaderKey::Authorization => "Authorization",
            HeaderKey::ContentType => "Content-Type",
            HeaderKey::UserAgent => "User-Agent",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Header {
    key: HeaderKey,
    value: String,
}

impl Header {
    pub fn new(key: HeaderKey, value: String) -> Self {
        Self { key, value }
    }
}

/// A fully built request, ready to be handed to an [`HttpSend`].
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<Header>,
    pub body: Option<String>,
}

impl Request {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: vec![],
            body: None,
        }
    }

    pub fn with_json(mut self, body: String) -> Self {
        self.headers.push(Header::new(
            HeaderKey::ContentType,
            "application/json".to_string(),
        ));
        self.body = Some(body);
        self
    }

    pub fn header(&self, key: &HeaderKey) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|h| &h.key == key)
            .map(|h| h.value.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    /// Anything below 400 counts as success.
    pub fn into_body(self) -> Result<Vec<u8>> {
        if self.status < 400 {
            Ok(self.body)
        } else {
            Err(Error::ApiError {
                status: self.status,
                body: String::from_utf8_lossy(&self.body).into_owned(),
            })
        }
    }
}

/// One HTTP round trip. Implementations report a missing response as
/// `Error::TransportError` and otherwise hand back whatever status they got.
#[async_trait]
pub trait HttpSend: Send + Sync {
    async fn send(&self, req: Request) -> Result<Response>;
}

pub struct Client {
    cli: reqwest::Client,
    dft_headers: Vec<Header>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    pub fn new() -> Self {
        Self {
            cli: reqwest::Client::new(),
            dft_headers: vec![Header::new(
                HeaderKey::UserAgent,
                format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            )],
        }
    }

    fn add_headers(
        &self,
        mut builder: reqwest::RequestBuilder,
        headers: Vec<Header>,
    ) -> reqwest::RequestBuilder {
        let mut hdrs = self.dft_headers.clone();
        hdrs.extend(headers);

        for header in hdrs {
            builder = builder.header(header.key.as_str(), header.value.as_str());
        }

        builder
    }
}

#[async_trait]
impl HttpSend for Client {
    async fn send(&self, req: Request) -> Result<Response> {
        let Request {
            method,
            url,
            headers,
            body,
        } = req;

        let mut builder = self.cli.request(method.into(), url);
        builder = self.add_headers(builder, headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(Response { status, body })
    }
}
