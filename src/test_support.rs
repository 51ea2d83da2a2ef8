// In-process HTTP responder for network tests.
// Serves canned responses by path; unknown paths get a 404.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::cache::Clock;
use crate::config::Config;
use crate::github::GitHubClient;
use crate::session::PortfolioSession;

#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

impl Route {
    pub fn json(path: &'static str, body: impl Into<String>) -> Self {
        Self {
            path,
            status: 200,
            headers: vec![("content-type", "application/json")],
            body: body.into(),
        }
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }
}

pub struct TestServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl TestServer {
    /// Requests served so far, 404s included.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub async fn serve(routes: Vec<Route>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let routes = Arc::new(routes);

    let counter = hits.clone();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let routes = routes.clone();
            let counter = counter.clone();

            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let head = String::from_utf8_lossy(&buf[..n]);
                let path = head
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();
                counter.fetch_add(1, Ordering::SeqCst);

                let route = routes.iter().find(|r| r.path == path);
                let (status, headers, body) = match route {
                    Some(r) => (r.status, r.headers.clone(), r.body.clone()),
                    None => (404, Vec::new(), r#"{"message":"Not Found"}"#.to_string()),
                };

                let mut response = format!("HTTP/1.1 {} STATUS\r\n", status);
                for (name, value) in headers {
                    response.push_str(&format!("{}: {}\r\n", name, value));
                }
                response.push_str(&format!(
                    "content-length: {}\r\nconnection: close\r\n\r\n{}",
                    body.len(),
                    body
                ));
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    TestServer {
        base_url: format!("http://{}", addr),
        hits,
    }
}

/// reqwest client that never routes loopback traffic through an env proxy.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

pub fn local_client(server: &TestServer) -> GitHubClient {
    GitHubClient::with_http_client(&server.base_url, http_client(), Duration::from_secs(5))
}

/// Session against `server`, reading time from `clock`.
pub fn local_session(server: &TestServer, config: Config, clock: Arc<dyn Clock>) -> PortfolioSession {
    let config = Config {
        api_base: server.base_url.clone(),
        ..config
    };
    PortfolioSession::with_client(config, local_client(server), clock)
}
