use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use usersearch_core::config::ServerConfig;
use usersearch_core::dataset::{Dataset, DatasetQuery};
use usersearch_core::models::{ErrorResponse, SearchParams};

/// Header the access token is expected in
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Shared application state
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(dataset: Dataset, config: ServerConfig) -> Self {
        Self {
            dataset: Arc::new(dataset),
            config: Arc::new(config),
        }
    }

    fn is_authorized(&self, http_req: &HttpRequest) -> bool {
        match &self.config.access_token {
            None => true,
            Some(expected) => http_req
                .headers()
                .get(ACCESS_TOKEN_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(|token| token == expected)
                .unwrap_or(false),
        }
    }
}

/// Search users
/// GET /?query=&order_field=&order_by=&limit=&offset=
#[tracing::instrument(skip(params, state, http_req))]
pub async fn search_users(
    params: web::Query<SearchParams>,
    state: web::Data<AppState>,
    http_req: HttpRequest,
) -> ActixResult<HttpResponse> {
    if !state.is_authorized(&http_req) {
        tracing::warn!("Rejected search with bad access token");
        return Ok(HttpResponse::Unauthorized().json(ErrorResponse {
            error: "Bad AccessToken".to_string(),
        }));
    }

    let params = params.into_inner();
    let query = match DatasetQuery::parse(
        &params.query,
        &params.order_field,
        params.order_by.as_deref(),
        params.limit.as_deref(),
        params.offset.as_deref(),
    ) {
        Ok(q) => q,
        Err(e) => {
            tracing::debug!(error = %e, "Invalid search parameters");
            return Ok(HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            }));
        }
    };

    tracing::debug!(
        query_len = query.query.len(),
        order_field = %query.order_field,
        order_by = query.order_by.as_i32(),
        limit = query.limit,
        offset = query.offset,
        "Searching users"
    );

    let users = state.dataset.search(&query);
    Ok(HttpResponse::Ok().json(users))
}

/// Health check
/// GET /health
pub async fn health(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "users": state.dataset.len(),
    })))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(search_users))
        .route("/search", web::get().to(search_users))
        .route("/health", web::get().to(health));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use usersearch_core::{User, UserRecord};

    fn create_test_state(access_token: Option<&str>) -> web::Data<AppState> {
        let rows = (0..5)
            .map(|i| UserRecord {
                id: i,
                is_active: true,
                first_name: format!("First{}", i),
                last_name: "Last".to_string(),
                about: format!("about {}", i),
                age: 30 - i,
                gender: "male".to_string(),
            })
            .collect();
        let config = ServerConfig {
            access_token: access_token.map(str::to_string),
            ..Default::default()
        };
        web::Data::new(AppState::new(Dataset::new(rows), config))
    }

    #[actix_web::test]
    async fn test_search_returns_user_array() {
        let app = test::init_service(
            App::new()
                .app_data(create_test_state(None))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/?order_field=Age&order_by=-1&limit=3&offset=0")
            .to_request();
        let users: Vec<User> = test::call_and_read_body_json(&app, req).await;

        let ages: Vec<i64> = users.iter().map(|u| u.age).collect();
        assert_eq!(ages, vec![26, 27, 28]);
    }

    #[actix_web::test]
    async fn test_search_bad_order_field_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(create_test_state(None))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/search?order_field=Gender&order_by=0&limit=1&offset=0")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "OrderField Gender invalid");
    }

    #[actix_web::test]
    async fn test_search_requires_configured_token() {
        let app = test::init_service(
            App::new()
                .app_data(create_test_state(Some("secret")))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/?order_by=0&limit=1&offset=0")
            .insert_header((ACCESS_TOKEN_HEADER, "wrong"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/?order_by=0&limit=1&offset=0")
            .insert_header((ACCESS_TOKEN_HEADER, "secret"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_health_reports_row_count() {
        let app = test::init_service(
            App::new()
                .app_data(create_test_state(None))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["users"], 5);
    }
}
