//! JSON client for the campaign API.
//!
//! Every request carries `Content-Type: application/json` and, once the user
//! has signed in, `Authorization: Bearer <token>` read from local storage.
//! A request that has not completed within
//! [`REQUEST_TIMEOUT_MS`](crate::config::REQUEST_TIMEOUT_MS) is dropped.

use futures::future::{self, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::{de::DeserializeOwned, Serialize};

use crate::{auth, config, logger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

pub struct HttpClient {
    base_url: &'static str,
    timeout_ms: u32,
}

/// Shared client configured from the build environment.
pub static HTTP: HttpClient = HttpClient::new(config::API_BASE, config::REQUEST_TIMEOUT_MS);

impl HttpClient {
    pub const fn new(base_url: &'static str, timeout_ms: u32) -> Self {
        Self {
            base_url,
            timeout_ms,
        }
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    fn builder(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
        .header("Content-Type", "application/json");

        match auth::get_auth_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<Response, String> {
        let url = self.url(path);
        let result = self.dispatch(method, &url, body).await;
        if let Err(err) = &result {
            logger::error(&format!("{} request failed for {url}: {err}", method.as_str()));
        }
        result
    }

    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<Response, String> {
        let builder = self.builder(method, url);
        let request = match body {
            Some(json) => builder.body(json),
            None => builder.build(),
        }
        .map_err(|e| format!("Failed to build request: {:?}", e))?;

        let sent = Box::pin(request.send());
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));
        let response = match future::select(sent, timeout).await {
            Either::Left((result, _)) => {
                result.map_err(|e| format!("{} ({:?})", config::error_messages::NETWORK_ERROR, e))?
            },
            Either::Right(_) => {
                return Err(format!("Request timed out after {} ms", self.timeout_ms));
            },
        };

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }
        Ok(response)
    }

    async fn parse<T: DeserializeOwned>(method: Method, url: &str, response: Response) -> Result<T, String> {
        response.json::<T>().await.map_err(|e| {
            let err = format!("Parse error: {:?}", e);
            logger::error(&format!("{} request failed for {url}: {err}", method.as_str()));
            err
        })
    }

    fn encode<B: Serialize>(body: &B) -> Result<String, String> {
        serde_json::to_string(body).map_err(|e| format!("Serialize error: {}", e))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self.send(Method::Get, path, None).await?;
        Self::parse(Method::Get, &self.url(path), response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, String> {
        let response = self.send(Method::Post, path, Some(Self::encode(body)?)).await?;
        Self::parse(Method::Post, &self.url(path), response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, String> {
        let response = self.send(Method::Put, path, Some(Self::encode(body)?)).await?;
        Self::parse(Method::Put, &self.url(path), response).await
    }

    /// Deletes a resource; the response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), String> {
        self.send(Method::Delete, path, None).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = HttpClient::new("https://api.example.com/", 1_000);
        assert_eq!(client.url("/api/campaigns"), "https://api.example.com/api/campaigns");
        assert_eq!(client.url("api/auth"), "https://api.example.com/api/auth");
    }

    #[test]
    fn empty_base_keeps_requests_same_origin() {
        let client = HttpClient::new("", 1_000);
        assert_eq!(client.url("/api/analytics/Facebook"), "/api/analytics/Facebook");
    }
}
