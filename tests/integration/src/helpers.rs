//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and creating members in a given approval state.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use reqwest::{header, redirect, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;
use wiruda_api::{create_app, create_app_state};
use wiruda_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, JwtConfig, RateLimitConfig,
    ServerConfig, SiteConfig, StorageConfig,
};
use wiruda_core::entities::{MemberRole, ProfileStatus};
use wiruda_core::ProfileRepository;
use wiruda_db::{PgPool, PgProfileRepository};

use crate::fixtures::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Signed-in member used by a test
#[derive(Debug, Clone)]
pub struct Member {
    pub id: Uuid,
    pub token: String,
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pool: PgPool,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let pool = state.pool().clone();
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Browsers send Origin on writes; the route gate requires it
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ORIGIN, format!("http://{addr}").parse()?);

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .redirect(redirect::Policy::none())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            addr,
            client,
            pool,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).bearer_auth(token).send().await?)
    }

    /// Make a GET request carrying the session cookie instead of a bearer token
    pub async fn get_with_cookie(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .header(header::COOKIE, format!("wiruda_session={token}"))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).bearer_auth(token).send().await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self.client.patch(self.url(path)).json(body).bearer_auth(token).send().await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self.client.put(self.url(path)).json(body).bearer_auth(token).send().await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).bearer_auth(token).send().await?)
    }

    /// Register a member, move it to `status`/`role` directly in the
    /// database and log in
    pub async fn member(&self, status: ProfileStatus, role: MemberRole) -> Result<Member> {
        let register = RegisterRequest::unique();
        let response = self.post("/api/v1/auth/register", &register).await?;
        let registered: RegisterResponse = assert_json(response, StatusCode::CREATED).await?;
        let id = registered.profile.id;

        self.set_status(id, status).await?;
        PgProfileRepository::new(self.pool.clone())
            .update_role(id, role)
            .await?;

        let login = LoginRequest::from_register(&register);
        let response = self.post("/api/v1/auth/login", &login).await?;
        let session: LoginResponse = assert_json(response, StatusCode::OK).await?;

        Ok(Member {
            id,
            token: session.access_token,
        })
    }

    /// Change a member's status behind the API, as an admin would
    pub async fn set_status(&self, id: Uuid, status: ProfileStatus) -> Result<()> {
        let approved_at = (status == ProfileStatus::Approved).then(Utc::now);
        PgProfileRepository::new(self.pool.clone())
            .update_status(id, status, approved_at)
            .await?;
        Ok(())
    }

    pub async fn approved_member(&self) -> Result<Member> {
        self.member(ProfileStatus::Approved, MemberRole::Member).await
    }

    pub async fn admin(&self) -> Result<Member> {
        self.member(ProfileStatus::Approved, MemberRole::Admin).await
    }
}

/// Create a test configuration from `DATABASE_URL`
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let url = std::env::var("DATABASE_URL")?;

    Ok(AppConfig {
        app: AppSettings {
            name: "wiruda-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret-with-some-length".to_string(),
            access_token_expiry: 900,
            refresh_token_expiry: 604_800,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
        site: SiteConfig {
            site_url: Some("https://wiruda.app".to_string()),
            deployment_url: None,
            dev_origins: Vec::new(),
        },
        storage: StorageConfig {
            url: None,
            service_key: None,
            bucket: "content-images".to_string(),
        },
    })
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
