//! Bearer-token gate for the `/api` surface.
//!
//! Wraps the whole app; paths outside `/api` and the `/api/auth/` routes
//! pass through untouched. Everything else must present a verifiable
//! `Authorization: Bearer` token or the route never runs.

use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, HttpMessage, HttpRequest, ResponseError};
use futures_util::future::{LocalBoxFuture, Ready, ready};

use crate::domain::Identity;
use crate::domain::ports::TokenService;
use crate::models::{ApiResponse, Rejection};

/// Middleware factory holding the token verifier.
#[derive(Clone)]
pub struct BearerAuth {
    tokens: Arc<dyn TokenService>,
}

impl BearerAuth {
    /// Build the gate around a token verifier.
    pub fn new(tokens: Arc<dyn TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = BearerAuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service,
            tokens: Arc::clone(&self.tokens),
        }))
    }
}

/// The wrapped service produced by [`BearerAuth`].
pub struct BearerAuthMiddleware<S> {
    service: S,
    tokens: Arc<dyn TokenService>,
}

fn bearer_token(request: &HttpRequest) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn is_exempt(path: &str) -> bool {
    !path.starts_with("/api") || path.starts_with("/api/auth/")
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !is_exempt(req.path()) {
            let claims = bearer_token(req.request())
                .and_then(|token| self.tokens.verify(token).ok());
            match claims {
                Some(claims) => {
                    req.extensions_mut().insert(Identity {
                        username: claims.sub,
                        role: claims.role,
                    });
                }
                None => {
                    let (request, _payload) = req.into_parts();
                    let response = Rejection(ApiResponse::unauthorized("Invalid token"))
                        .error_response()
                        .map_into_right_body();
                    return Box::pin(async move { Ok(ServiceResponse::new(request, response)) });
                }
            }
        }
        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, HttpResponse, get, test};
    use chrono::Utc;

    use super::*;
    use crate::domain::Claims;
    use crate::models::Role;
    use crate::outbound::JwtTokens;

    const SECRET: &[u8] = b"gate-test-secret";

    #[get("/api/whoami")]
    async fn whoami(identity: Result<Identity, Rejection>) -> Result<HttpResponse, Rejection> {
        let identity = identity?;
        Ok(HttpResponse::Ok().json(serde_json::json!({ "username": identity.username })))
    }

    #[get("/api/auth/ping")]
    async fn auth_ping() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[get("/outside")]
    async fn outside() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn harness() -> impl Service<
        actix_http::Request,
        Response = ServiceResponse<EitherBody<actix_web::body::BoxBody>>,
        Error = Error,
    > {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokens::new(SECRET));
        test::init_service(
            App::new()
                .wrap(BearerAuth::new(tokens))
                .service(whoami)
                .service(auth_ping)
                .service(outside),
        )
        .await
    }

    fn token(offset_secs: i64) -> String {
        JwtTokens::new(SECRET)
            .sign(&Claims {
                sub: "a@b.es".into(),
                role: Role::User,
                exp: Utc::now().timestamp() + offset_secs,
            })
            .expect("signs")
    }

    #[actix_rt::test]
    async fn missing_token_is_rejected_with_the_envelope() {
        let app = harness().await;
        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/whoami").to_request(),
        )
        .await;
        assert_eq!(response.status(), 401);
        let body: ApiResponse = test::read_body_json(response).await;
        assert_eq!(body.message, "Invalid token");
        assert_eq!(body.data, serde_json::Value::Null);
    }

    #[actix_rt::test]
    async fn expired_token_is_rejected() {
        let app = harness().await;
        let request = test::TestRequest::get()
            .uri("/api/whoami")
            .insert_header((AUTHORIZATION, format!("Bearer {}", token(-3600))))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 401);
    }

    #[actix_rt::test]
    async fn wrong_scheme_is_rejected() {
        let app = harness().await;
        let request = test::TestRequest::get()
            .uri("/api/whoami")
            .insert_header((AUTHORIZATION, format!("Basic {}", token(3600))))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 401);
    }

    #[actix_rt::test]
    async fn valid_token_reaches_the_route_with_identity() {
        let app = harness().await;
        let request = test::TestRequest::get()
            .uri("/api/whoami")
            .insert_header((AUTHORIZATION, format!("Bearer {}", token(3600))))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 200);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["username"], "a@b.es");
    }

    #[actix_rt::test]
    async fn auth_routes_and_non_api_paths_are_exempt() {
        let app = harness().await;
        for uri in ["/api/auth/ping", "/outside"] {
            let response =
                test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(response.status(), 200, "{uri} should bypass the gate");
        }
    }
}
