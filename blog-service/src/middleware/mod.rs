/// HTTP middleware for the blog service.
///
/// Token issuance lives in the identity system; this middleware only
/// validates a bearer token when one is supplied and attaches the caller's
/// identity to the request. Requests without a token proceed anonymously,
/// since listings are public. Mutations enforce identity through the
/// `AuthenticatedUser` extractor, which redirects anonymous callers to the
/// configured login page with a `next` parameter.
use crate::config::Config;
use crate::error::AppError;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use std::rc::Rc;
use uuid::Uuid;

/// Bearer token claims. `sub` is the caller's user id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Extracted user identifier stored in request extensions after auth.
#[derive(Debug, Clone)]
pub struct UserId(pub Uuid);

/// Actix middleware that validates a Bearer token when present.
pub struct BearerAuth {
    key: Rc<DecodingKey>,
}

impl BearerAuth {
    pub fn new(secret: &str) -> Self {
        Self {
            key: Rc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthService {
            service: Rc::new(service),
            key: self.key.clone(),
        }))
    }
}

pub struct BearerAuthService<S> {
    service: Rc<S>,
    key: Rc<DecodingKey>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let key = self.key.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok());

            if let Some(header) = auth_header {
                let token = header
                    .strip_prefix("Bearer ")
                    .ok_or(AppError::InvalidToken)?;

                let claims = decode::<Claims>(token, &key, &Validation::new(Algorithm::HS256))
                    .map_err(|_| AppError::InvalidToken)?;

                let user_id = Uuid::parse_str(&claims.claims.sub)
                    .map_err(|_| AppError::InvalidToken)?;

                req.extensions_mut().insert(UserId(user_id));
            }

            service.call(req).await
        })
    }
}

/// Extractor for handlers that require an authenticated caller. An anonymous
/// request is answered with a redirect to the login page carrying the
/// original path in `next`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        if let Some(user) = req.extensions().get::<UserId>() {
            return ready(Ok(AuthenticatedUser { id: user.0 }));
        }

        let login_url = req
            .app_data::<web::Data<Config>>()
            .map(|cfg| cfg.auth.login_url.clone())
            .unwrap_or_else(|| "/auth/login".to_string());
        let location = format!("{}?next={}", login_url, urlencoding::encode(req.path()));

        ready(Err(AppError::LoginRequired { location }.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, AuthConfig, Config, CorsConfig, DatabaseConfig, PostsConfig};
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App, HttpResponse};
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn test_config() -> Config {
        Config {
            app: AppConfig {
                env: "development".to_string(),
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            cors: CorsConfig {
                allowed_origins: "http://localhost:3000".to_string(),
            },
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 1,
            },
            auth: AuthConfig {
                jwt_secret: SECRET.to_string(),
                login_url: "/auth/login".to_string(),
            },
            posts: PostsConfig { page_size: 10 },
        }
    }

    fn token_for(user_id: Uuid) -> String {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.id.to_string())
    }

    #[actix_web::test]
    async fn valid_token_reaches_the_handler() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config()))
                .wrap(BearerAuth::new(SECRET))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let user_id = Uuid::new_v4();
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token_for(user_id))))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, user_id.to_string().as_bytes());
    }

    #[actix_web::test]
    async fn anonymous_request_redirects_to_login_with_next() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config()))
                .wrap(BearerAuth::new(SECRET))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/auth/login?next=%2Fwhoami"
        );
    }

    #[actix_web::test]
    async fn garbage_token_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config()))
                .wrap(BearerAuth::new(SECRET))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
            .to_request();

        // Middleware rejections surface as service errors; the dispatcher
        // renders them through ResponseError at runtime.
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::UNAUTHORIZED
        );
    }
}
