use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};

/// Emits one `tracing` event per handled request.
pub struct RequestLog;

#[rocket::async_trait]
impl Fairing for RequestLog {
    fn info(&self) -> Info {
        Info {
            name: "Log requests with tracing",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let status = response.status();
        let route = request.route().and_then(|route| route.name.as_deref()).unwrap_or("-");

        if status.code >= 500 {
            tracing::error!(method = %request.method(), uri = %request.uri(), status = status.code, route, "request failed");
        } else {
            tracing::info!(method = %request.method(), uri = %request.uri(), status = status.code, route, "request handled");
        }
    }
}
