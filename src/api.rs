use std::{future::Future, time::Duration};

use http::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    config::SiteConfig,
    data::{self, DataError},
    models::{Blog, BlogDraft, Lecture, Project},
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchFailure {
    #[error("host unreachable: {0}")]
    Unreachable(String),
    #[error("request timed out")]
    Timeout,
    #[error("server error ({status})")]
    Server { status: u16 },
    #[error("no response received: {0}")]
    NoResponse(String),
    #[error("request blocked by cross-origin policy: {0}")]
    CrossOrigin(String),
    #[error("not found")]
    NotFound,
    #[error("{message}")]
    Client { status: u16, message: String },
    #[error("{0}")]
    Api(String),
    #[error("couldn't decode response: {0}")]
    Decode(String),
    #[error(transparent)]
    Fallback(#[from] DataError),
}

/// What to do with a failed read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    SubstituteFallback,
    Propagate,
}

impl FetchFailure {
    /// Infrastructure failures degrade to bundled data; request and payload
    /// failures reach the view.
    pub fn recovery(&self) -> Recovery {
        match self {
            FetchFailure::Unreachable(_)
            | FetchFailure::Timeout
            | FetchFailure::Server { .. }
            | FetchFailure::NoResponse(_)
            | FetchFailure::CrossOrigin(_) => Recovery::SubstituteFallback,
            FetchFailure::NotFound
            | FetchFailure::Client { .. }
            | FetchFailure::Api(_)
            | FetchFailure::Decode(_)
            | FetchFailure::Fallback(_) => Recovery::Propagate,
        }
    }

    fn from_transport(message: String, timed_out: bool, connect: bool) -> Self {
        if timed_out {
            FetchFailure::Timeout
        } else if message.contains("CORS") || message.contains("Access-Control-Allow-Origin") {
            FetchFailure::CrossOrigin(message)
        } else if connect {
            FetchFailure::Unreachable(message)
        } else {
            FetchFailure::NoResponse(message)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_connect(e: &reqwest::Error) -> bool {
    e.is_connect()
}

// the browser's fetch does not distinguish connection failures
#[cfg(target_arch = "wasm32")]
fn is_connect(_: &reqwest::Error) -> bool {
    false
}

impl From<reqwest::Error> for FetchFailure {
    fn from(e: reqwest::Error) -> Self {
        Self::from_transport(e.to_string(), e.is_timeout(), is_connect(&e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    #[default]
    Remote,
    Fallback,
}

/// Data tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub origin: Origin,
}

impl<T> Sourced<T> {
    pub fn remote(data: T) -> Self {
        Self {
            data,
            origin: Origin::Remote,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            data,
            origin: Origin::Fallback,
        }
    }
}

/// Applies the recovery policy to a collection read.
pub fn resolve<T>(
    result: Result<T, FetchFailure>,
    fallback: impl FnOnce() -> Result<T, DataError>,
) -> Result<Sourced<T>, FetchFailure> {
    match result {
        Ok(data) => Ok(Sourced::remote(data)),
        Err(e) => match e.recovery() {
            Recovery::SubstituteFallback => {
                log::warn!("API request failed ({e}), using fallback data");
                Ok(Sourced::fallback(fallback()?))
            }
            Recovery::Propagate => Err(e),
        },
    }
}

/// Applies the recovery policy to a single-item read. An empty remote answer
/// or a network failure both fall back to looking the id up in the bundled
/// list.
pub fn resolve_one<T>(
    result: Result<Option<T>, FetchFailure>,
    fallback: impl FnOnce() -> Result<Vec<T>, DataError>,
    is_wanted: impl Fn(&T) -> bool,
) -> Result<Sourced<T>, FetchFailure> {
    let lookup = move || -> Result<Sourced<T>, FetchFailure> {
        fallback()?
            .into_iter()
            .find(|item| is_wanted(item))
            .map(Sourced::fallback)
            .ok_or(FetchFailure::NotFound)
    };
    match result {
        Ok(Some(item)) => Ok(Sourced::remote(item)),
        Ok(None) => lookup(),
        Err(e) if e.recovery() == Recovery::SubstituteFallback => {
            log::warn!("API request failed ({e}), looking up fallback data");
            lookup()
        }
        Err(e) => Err(e),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            bearer: None,
            body: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

fn api_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

impl ApiResponse {
    /// The body of a successful response, or the failure its status stands for.
    pub fn into_body(self) -> Result<String, FetchFailure> {
        let status = StatusCode::from_u16(self.status)
            .map_err(|_| FetchFailure::NoResponse(format!("invalid status {}", self.status)))?;
        if status.is_success() {
            Ok(self.body)
        } else if status.is_server_error() {
            Err(FetchFailure::Server {
                status: self.status,
            })
        } else if status == StatusCode::NOT_FOUND {
            Err(FetchFailure::NotFound)
        } else {
            let message = api_message(&self.body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
            Err(FetchFailure::Client {
                status: self.status,
                message,
            })
        }
    }
}

fn decode<D: DeserializeOwned>(body: &str) -> Result<D, FetchFailure> {
    serde_json::from_str(body).map_err(|e| match api_message(body) {
        Some(message) => FetchFailure::Api(message),
        None => FetchFailure::Decode(e.to_string()),
    })
}

/// Sends requests to the portfolio API.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, FetchFailure>>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchFailure> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self
            .client
            .request(method, &request.url)
            .timeout(self.timeout)
            .header(http::header::CONTENT_TYPE, "application/json");
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}

/// Data providers for projects, blogs and lectures.
pub struct Api<T> {
    transport: T,
    config: SiteConfig,
}

impl Api<HttpTransport> {
    pub fn http(config: &SiteConfig) -> Self {
        Self::new(HttpTransport::new(config.request_timeout), config.clone())
    }
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T, config: SiteConfig) -> Self {
        Self { transport, config }
    }

    async fn fetch<D: DeserializeOwned>(&self, request: ApiRequest) -> Result<D, FetchFailure> {
        let body = self.transport.send(request).await?.into_body()?;
        decode(&body)
    }

    fn write_request(
        method: Method,
        url: String,
        token: &str,
        draft: Option<&BlogDraft>,
    ) -> Result<ApiRequest, FetchFailure> {
        let body = draft
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| FetchFailure::Decode(e.to_string()))?;
        Ok(ApiRequest {
            method,
            url,
            bearer: Some(token.to_string()),
            body,
        })
    }

    pub async fn projects(&self) -> Result<Sourced<Vec<Project>>, FetchFailure> {
        log::info!("Fetching projects from API...");
        let res = self
            .fetch(ApiRequest::get(&self.config.projects_url))
            .await;
        let projects = resolve(res, data::projects)?;
        log::info!("Fetched {} projects", projects.data.len());
        Ok(projects)
    }

    pub async fn project(&self, id: u32) -> Result<Sourced<Project>, FetchFailure> {
        log::info!("Fetching project with ID: {id}");
        let res = self.fetch(ApiRequest::get(self.config.project_url(id))).await;
        resolve_one(res, data::projects, |p: &Project| p.id == id)
    }

    pub async fn projects_in_category(
        &self,
        category: &str,
    ) -> Result<Sourced<Vec<Project>>, FetchFailure> {
        log::info!("Fetching projects for category: {category}");
        let res = self
            .fetch(ApiRequest::get(self.config.category_url(category)))
            .await;
        let wanted = category.to_uppercase();
        resolve(res, || {
            Ok(data::projects()?
                .into_iter()
                .filter(|p| p.category.as_str() == wanted)
                .collect())
        })
    }

    pub async fn blogs(&self) -> Result<Sourced<Vec<Blog>>, FetchFailure> {
        log::info!("Fetching blogs from API...");
        let res = self.fetch(ApiRequest::get(&self.config.blogs_url)).await;
        let blogs = resolve(res, data::blogs)?;
        log::info!("Fetched {} blogs", blogs.data.len());
        Ok(blogs)
    }

    pub async fn blog(&self, id: u32) -> Result<Sourced<Blog>, FetchFailure> {
        log::info!("Fetching blog with ID: {id}");
        let res = self.fetch(ApiRequest::get(self.config.blog_url(id))).await;
        resolve_one(res, data::blogs, |b: &Blog| b.id == id)
    }

    pub async fn lectures(&self) -> Result<Sourced<Vec<Lecture>>, FetchFailure> {
        log::info!("Fetching lectures from API...");
        let res = self.fetch(ApiRequest::get(&self.config.lectures_url)).await;
        resolve(res, data::lectures)
    }

    pub async fn create_blog(&self, token: &str, draft: &BlogDraft) -> Result<Blog, FetchFailure> {
        let request = Self::write_request(
            Method::Post,
            self.config.blogs_url.clone(),
            token,
            Some(draft),
        )?;
        let blog: Blog = self.fetch(request).await.inspect_err(|e| {
            log::warn!("Failed to create blog: {e}");
        })?;
        log::info!("Blog created successfully: {}", blog.id);
        Ok(blog)
    }

    pub async fn edit_blog(
        &self,
        id: u32,
        token: &str,
        draft: &BlogDraft,
    ) -> Result<Blog, FetchFailure> {
        let request = Self::write_request(Method::Put, self.config.blog_url(id), token, Some(draft))?;
        let blog: Blog = self.fetch(request).await.inspect_err(|e| {
            log::warn!("Failed to edit blog {id}: {e}");
        })?;
        log::info!("Blog updated successfully: {id}");
        Ok(blog)
    }

    pub async fn delete_blog(&self, token: &str, id: u32) -> Result<u32, FetchFailure> {
        let request = Self::write_request(Method::Delete, self.config.blog_url(id), token, None)?;
        // the response body is not used
        self.transport
            .send(request)
            .await?
            .into_body()
            .inspect_err(|e| log::warn!("Failed to delete blog {id}: {e}"))?;
        log::info!("Blog deleted successfully: {id}");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    struct MockTransport {
        response: Result<ApiResponse, FetchFailure>,
        sent: RefCell<Vec<ApiRequest>>,
    }

    impl MockTransport {
        fn ok(body: &str) -> Self {
            Self::status(200, body)
        }

        fn status(status: u16, body: &str) -> Self {
            Self {
                response: Ok(ApiResponse {
                    status,
                    body: body.to_string(),
                }),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn failing(failure: FetchFailure) -> Self {
            Self {
                response: Err(failure),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for MockTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchFailure> {
            self.sent.borrow_mut().push(request);
            self.response.clone()
        }
    }

    fn api(transport: MockTransport) -> Api<MockTransport> {
        let config = SiteConfig {
            projects_url: "https://api.test/projects".to_string(),
            blogs_url: "https://api.test/blogs".to_string(),
            lectures_url: "https://api.test/lectures".to_string(),
            ..SiteConfig::default()
        };
        Api::new(transport, config)
    }

    const REMOTE_LECTURES: &str =
        r#"[{"id": 42, "title": "Remote", "url": "https://video.test/42"}]"#;

    #[test]
    fn test_recovery_policy() {
        let substitute = [
            FetchFailure::Unreachable("dns".to_string()),
            FetchFailure::Timeout,
            FetchFailure::Server { status: 503 },
            FetchFailure::NoResponse("reset".to_string()),
            FetchFailure::CrossOrigin("CORS".to_string()),
        ];
        for f in substitute {
            assert_eq!(f.recovery(), Recovery::SubstituteFallback, "{f:?}");
        }
        let propagate = [
            FetchFailure::NotFound,
            FetchFailure::Client {
                status: 401,
                message: "Unauthorized".to_string(),
            },
            FetchFailure::Api("bad".to_string()),
            FetchFailure::Decode("eof".to_string()),
        ];
        for f in propagate {
            assert_eq!(f.recovery(), Recovery::Propagate, "{f:?}");
        }
    }

    #[test]
    fn test_transport_classification() {
        assert_eq!(
            FetchFailure::from_transport("anything".to_string(), true, true),
            FetchFailure::Timeout
        );
        assert!(matches!(
            FetchFailure::from_transport("No 'Access-Control-Allow-Origin' header".to_string(), false, false),
            FetchFailure::CrossOrigin(_)
        ));
        assert!(matches!(
            FetchFailure::from_transport("dns error".to_string(), false, true),
            FetchFailure::Unreachable(_)
        ));
        assert!(matches!(
            FetchFailure::from_transport("Failed to fetch".to_string(), false, false),
            FetchFailure::NoResponse(_)
        ));
    }

    #[test]
    fn test_status_classification() {
        let resp = |status: u16, body: &str| ApiResponse {
            status,
            body: body.to_string(),
        };
        assert_eq!(resp(200, "[]").into_body(), Ok("[]".to_string()));
        assert_eq!(
            resp(502, "").into_body(),
            Err(FetchFailure::Server { status: 502 })
        );
        assert_eq!(resp(404, "").into_body(), Err(FetchFailure::NotFound));
        assert_eq!(
            resp(401, r#"{"message": "Token expired"}"#).into_body(),
            Err(FetchFailure::Client {
                status: 401,
                message: "Token expired".to_string()
            })
        );
        assert_eq!(
            resp(403, "nope").into_body(),
            Err(FetchFailure::Client {
                status: 403,
                message: "Forbidden".to_string()
            })
        );
    }

    #[test]
    fn test_remote_collection() {
        let api = api(MockTransport::ok(REMOTE_LECTURES));
        let lectures = block_on(api.lectures()).unwrap();
        assert_eq!(lectures.origin, Origin::Remote);
        assert_eq!(lectures.data.len(), 1);
        assert_eq!(lectures.data[0].id, 42);

        let sent = api.transport.sent.borrow();
        assert_eq!(sent[0], ApiRequest::get("https://api.test/lectures"));
    }

    #[test]
    fn test_network_failure_uses_fallback() {
        let api = api(MockTransport::failing(FetchFailure::Timeout));
        let projects = block_on(api.projects()).unwrap();
        assert_eq!(projects.origin, Origin::Fallback);
        assert_eq!(projects.data, data::projects().unwrap());

        let api = self::api(MockTransport::status(500, "oops"));
        let blogs = block_on(api.blogs()).unwrap();
        assert_eq!(blogs.origin, Origin::Fallback);
        assert_eq!(blogs.data, data::blogs().unwrap());
    }

    #[test]
    fn test_client_failure_propagates() {
        let api = api(MockTransport::status(400, r#"{"message": "Bad filter"}"#));
        assert_eq!(
            block_on(api.projects()),
            Err(FetchFailure::Client {
                status: 400,
                message: "Bad filter".to_string()
            })
        );
    }

    #[test]
    fn test_api_error_payload_propagates() {
        let api = api(MockTransport::ok(r#"{"error": "maintenance mode"}"#));
        assert_eq!(
            block_on(api.lectures()),
            Err(FetchFailure::Api("maintenance mode".to_string()))
        );
        let api = self::api(MockTransport::ok("<html>"));
        assert!(matches!(block_on(api.lectures()), Err(FetchFailure::Decode(_))));
    }

    #[test]
    fn test_single_item_fallback_lookup() {
        let known = data::projects().unwrap()[0].clone();
        let api = api(MockTransport::failing(FetchFailure::Unreachable(
            "dns".to_string(),
        )));
        let found = block_on(api.project(known.id)).unwrap();
        assert_eq!(found, Sourced::fallback(known));

        assert_eq!(block_on(api.project(9999)), Err(FetchFailure::NotFound));
    }

    #[test]
    fn test_single_item_null_body() {
        let known = data::blogs().unwrap()[1].clone();
        let api = api(MockTransport::ok("null"));
        assert_eq!(block_on(api.blog(known.id)), Ok(Sourced::fallback(known)));
        assert_eq!(block_on(api.blog(9999)), Err(FetchFailure::NotFound));
    }

    #[test]
    fn test_single_item_not_found_status() {
        let api = api(MockTransport::status(404, ""));
        assert_eq!(block_on(api.blog(1)), Err(FetchFailure::NotFound));
    }

    #[test]
    fn test_category_fallback_filters() {
        let api = api(MockTransport::failing(FetchFailure::Server { status: 503 }));
        let backend = block_on(api.projects_in_category("backend")).unwrap();
        assert_eq!(backend.origin, Origin::Fallback);
        assert!(!backend.data.is_empty());
        assert!(backend.data.iter().all(|p| p.category.as_str() == "BACKEND"));
        assert_eq!(
            api.transport.sent.borrow()[0].url,
            "https://api.test/projects?category=backend"
        );
    }

    #[test]
    fn test_create_blog_sends_token() {
        let body = r#"{"id": 9, "title": "New", "message": "Hi...there",
            "createdAt": "2024-01-01", "updatedAt": "2024-01-01"}"#;
        let api = api(MockTransport::ok(body));
        let draft = BlogDraft {
            title: "New".to_string(),
            message: "Hi...there".to_string(),
            image: None,
        };
        let blog = block_on(api.create_blog("mock-token", &draft)).unwrap();
        assert_eq!(blog.id, 9);

        let sent = api.transport.sent.borrow();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].bearer.as_deref(), Some("mock-token"));
        let payload: serde_json::Value =
            serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(payload["title"], "New");
    }

    #[test]
    fn test_writes_never_fall_back() {
        let api = api(MockTransport::failing(FetchFailure::Timeout));
        let draft = BlogDraft::default();
        assert_eq!(
            block_on(api.edit_blog(1, "t", &draft)),
            Err(FetchFailure::Timeout)
        );
        assert_eq!(block_on(api.delete_blog("t", 1)), Err(FetchFailure::Timeout));
        // one attempt per call, no retries
        assert_eq!(api.transport.sent.borrow().len(), 2);
    }

    #[test]
    fn test_delete_blog() {
        let api = api(MockTransport::status(204, ""));
        assert_eq!(block_on(api.delete_blog("t", 3)), Ok(3));
        let sent = api.transport.sent.borrow();
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].url, "https://api.test/blogs/3");
        assert_eq!(sent[0].body, None);
    }
}
