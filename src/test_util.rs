// src/test_util.rs
//! Helpers shared by the unit test modules.

use tokio::runtime::Runtime;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use url::Url;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const PAGE_PATH: &str = "/timezone.htm";

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .finish();
    // already set by another test in this binary
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Mock server answering `GET /timezone.htm`.
///
/// The runtime only drives setup; the server itself runs on wiremock's own
/// thread, so the blocking client can be called straight from the test.
pub struct PageServer {
    server: MockServer,
    _rt: Runtime,
}

impl PageServer {
    pub fn start(response: ResponseTemplate) -> Self {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path(PAGE_PATH))
                .respond_with(response)
                .mount(&server)
                .await;
            server
        });
        Self { server, _rt: rt }
    }

    pub fn url(&self) -> Url {
        Url::parse(&format!("{}{}", self.server.uri(), PAGE_PATH)).unwrap()
    }
}

pub fn html_response(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.to_owned(), "text/html; charset=utf-8")
}
