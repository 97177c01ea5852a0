//! Liveness and readiness probes. These sit outside `/api` and are never
//! token-gated.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, Scope, get, web};
use serde_json::json;

/// Readiness flag flipped once the server has finished wiring.
#[derive(Debug, Default)]
pub struct Readiness(AtomicBool);

impl Readiness {
    /// Mark the process ready to serve traffic.
    pub fn mark_ready(&self) {
        self.0.store(true, Ordering::Release);
    }

    fn is_ready(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[get("/live")]
async fn live() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "live" }))
}

#[get("/ready")]
async fn ready(readiness: web::Data<Readiness>) -> HttpResponse {
    if readiness.is_ready() {
        HttpResponse::Ok().json(json!({ "status": "ready" }))
    } else {
        HttpResponse::ServiceUnavailable().json(json!({ "status": "starting" }))
    }
}

/// Routes under `/health`.
pub fn scope() -> Scope {
    web::scope("/health").service(live).service(ready)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};

    use super::*;

    #[actix_rt::test]
    async fn ready_tracks_the_flag() {
        let readiness = web::Data::new(Readiness::default());
        let app = test::init_service(
            App::new().app_data(readiness.clone()).service(scope()),
        )
        .await;

        let starting = test::call_service(&app, test::TestRequest::get().uri("/health/ready").to_request()).await;
        assert_eq!(starting.status(), 503);

        readiness.mark_ready();
        let ready_response = test::call_service(&app, test::TestRequest::get().uri("/health/ready").to_request()).await;
        assert_eq!(ready_response.status(), 200);
    }

    #[actix_rt::test]
    async fn live_is_always_ok() {
        let app = test::init_service(App::new().service(scope())).await;
        let response = test::call_service(&app, test::TestRequest::get().uri("/health/live").to_request()).await;
        assert_eq!(response.status(), 200);
    }
}
