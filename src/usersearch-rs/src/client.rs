use crate::{ClientError, Result};
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use usersearch_core::config::{default_max_page_size, default_timeout_ms};
use usersearch_core::models::DEFAULT_ORDER_FIELD;
use usersearch_core::{ClientConfig, ErrorResponse, SearchRequest, SearchResponse, User};

/// Header the access token travels in
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Blocking client for the user search endpoint.
///
/// Holds no per-call state, so one instance can be shared across threads.
pub struct SearchClient {
    access_token: String,
    url: String,
    max_page_size: usize,
    client: HttpClient,
}

#[derive(Serialize)]
struct SearchQuery<'a> {
    query: &'a str,
    order_field: &'a str,
    order_by: i32,
    limit: usize,
    offset: i64,
}

impl SearchClient {
    /// Create a client with the default timeout and page size cap
    pub fn new(access_token: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        Self::build(
            access_token.into(),
            url.into(),
            Duration::from_millis(default_timeout_ms()),
            default_max_page_size(),
        )
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::build(
            config.access_token.clone(),
            config.url.clone(),
            Duration::from_millis(config.timeout_ms),
            config.max_page_size,
        )
    }

    fn build(
        access_token: String,
        url: String,
        timeout: Duration,
        max_page_size: i64,
    ) -> Result<Self> {
        let max_page_size = usize::try_from(max_page_size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| ClientError::InvalidParams("max_page_size must be > 0".to_string()))?;

        let client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            access_token,
            url,
            max_page_size,
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch one page of users.
    ///
    /// Asks the server for one user more than the page holds; getting it
    /// back is what sets `next_page`.
    #[tracing::instrument(skip(self, req), fields(limit = req.limit, offset = req.offset))]
    pub fn find_users(&self, req: &SearchRequest) -> Result<SearchResponse> {
        let limit = self.effective_limit(req)?;
        let order_field = if req.order_field.is_empty() {
            DEFAULT_ORDER_FIELD
        } else {
            req.order_field.as_str()
        };

        let params = SearchQuery {
            query: &req.query,
            order_field,
            order_by: req.order_by.as_i32(),
            limit: limit + 1,
            offset: req.offset,
        };

        let request = self
            .client
            .get(&self.url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .query(&params)
            .build()
            .map_err(ClientError::Request)?;
        let query_string = request.url().query().unwrap_or_default().to_string();

        tracing::debug!(query = %query_string, "Sending search request");

        let response = self
            .client
            .execute(request)
            .map_err(|e| transport_error(e, &query_string))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Search response received");

        match status {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED => return Err(ClientError::Unauthorized),
            StatusCode::INTERNAL_SERVER_ERROR => return Err(ClientError::ServerFault),
            StatusCode::BAD_REQUEST => {
                let body = read_body(response, &query_string)?;
                let err: ErrorResponse =
                    serde_json::from_slice(&body).map_err(ClientError::ErrorBody)?;
                return Err(ClientError::InvalidParams(err.error));
            }
            other => return Err(ClientError::UnexpectedStatus(other.as_u16())),
        }

        let body = read_body(response, &query_string)?;
        let users: Vec<User> = serde_json::from_slice(&body).map_err(ClientError::ResultBody)?;

        let page = paginate(users, limit);
        tracing::debug!(
            returned = page.users.len(),
            next_page = page.next_page,
            "Search page decoded"
        );
        Ok(page)
    }

    /// Validate limit and offset, returning the clamped page size
    fn effective_limit(&self, req: &SearchRequest) -> Result<usize> {
        let limit = usize::try_from(req.limit)
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or_else(|| ClientError::InvalidParams("limit must be > 0".to_string()))?
            .min(self.max_page_size);

        if req.offset < 0 {
            return Err(ClientError::InvalidParams("offset must be > 0".to_string()));
        }

        Ok(limit)
    }
}

fn read_body(response: Response, query_string: &str) -> Result<Vec<u8>> {
    response
        .bytes()
        .map(|b| b.to_vec())
        .map_err(|e| transport_error(e, query_string))
}

fn transport_error(err: reqwest::Error, query_string: &str) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout(query_string.to_string())
    } else {
        ClientError::Request(err)
    }
}

/// Trim an over-fetched result down to `limit`
fn paginate(mut users: Vec<User>, limit: usize) -> SearchResponse {
    if users.len() > limit {
        users.truncate(limit);
        SearchResponse {
            users,
            next_page: true,
        }
    } else {
        SearchResponse {
            users,
            next_page: false,
        }
    }
}
