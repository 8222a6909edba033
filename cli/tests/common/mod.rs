#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use axum::body::to_bytes;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{header::CONTENT_TYPE, StatusCode};
use axum::Router;
use std::net::SocketAddr;
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

/// One part of a multipart body as the service received it
#[derive(Clone, Debug)]
pub struct Part {
    pub name: String,
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// A request as the service received it
#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub parts: Vec<Part>,
    pub body: Vec<u8>,
}

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: String,
    delay: Duration,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// Stand-in for the control service
///
/// Answers every request with the same status and body and records what it got.
pub struct MockService {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockService {
    pub fn start(status: u16, body: &str) -> Self {
        Self::start_delayed(status, body, Duration::ZERO)
    }

    pub fn start_delayed(status: u16, body: &str, delay: Duration) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));

        let reply = Reply {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            delay,
            requests: requests.clone(),
        };

        let (sender, receiver) = mpsc::channel::<SocketAddr>();

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .unwrap();

            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                sender.send(listener.local_addr().unwrap()).unwrap();

                let app = Router::new().fallback(record).with_state(reply);
                axum::serve(listener, app).await.unwrap();
            });
        });

        let address = receiver.recv().unwrap();

        MockService {
            url: format!("http://{address}"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record(State(reply): State<Reply>, request: Request) -> (StatusCode, String) {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"));

    let mut parts = Vec::new();
    let mut body = Vec::new();

    if is_multipart {
        let mut multipart = Multipart::from_request(request, &()).await.unwrap();

        while let Some(field) = multipart.next_field().await.unwrap() {
            parts.push(Part {
                name: field.name().unwrap_or_default().to_string(),
                file_name: field.file_name().map(str::to_string),
                bytes: field.bytes().await.unwrap().to_vec(),
            });
        }
    } else {
        body = to_bytes(request.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
    }

    reply.requests.lock().unwrap().push(Recorded {
        method,
        path,
        parts,
        body,
    });

    tokio::time::sleep(reply.delay).await;
    (reply.status, reply.body)
}

/// The binary with a clean environment
pub fn zeta() -> Command {
    let mut command = cargo_bin_cmd!("zeta");
    command
        .env_remove("ZETA_API_URL")
        .env_remove("ZETA_TIMEOUT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    command
}

/// The binary pointed at a service
pub fn zeta_at(url: &str) -> Command {
    let mut command = zeta();
    command.args(["--url", url]);
    command
}

/// A base URL nothing listens on
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{address}")
}
