//! Integration tests for the HTTP page source
//!
//! A throwaway HTTP/1.1 server on 127.0.0.1 stands in for the nutrition
//! site, so these tests check what actually goes over the wire.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use health_tracker::app::{
    lookup_product, ClientConfig, LookupConfig, LookupOutcome, NutritionClient, PageFetcher,
};
use health_tracker::errors::FetchError;

/// How the fake site answers a request for one page
#[derive(Clone)]
enum Reply {
    /// 200 with the given body, declared as windows-1251 but sent as UTF-8
    Page(String),
    /// Non-success status with a body
    Status(u16, String),
    /// Close the connection without answering
    Drop,
    /// Keep the connection open without answering
    Hang,
}

struct FakeSite {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeSite {
    async fn start<F>(respond: F) -> Self
    where
        F: Fn(u32) -> Reply + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let respond = Arc::new(respond);

        let seen = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let seen = Arc::clone(&seen);
                let respond = Arc::clone(&respond);
                tokio::spawn(async move {
                    serve(stream, seen, respond.as_ref()).await;
                });
            }
        });

        Self { addr, requests }
    }

    fn base_url(&self) -> String {
        format!("http://{}/tablytsya-yizhyi", self.addr)
    }

    fn config(&self) -> LookupConfig {
        LookupConfig {
            base_url: self.base_url(),
            ..Default::default()
        }
    }

    /// Raw request heads in arrival order
    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Page numbers requested, in arrival order
    fn pages(&self) -> Vec<u32> {
        self.requests()
            .iter()
            .filter_map(|head| page_of(head))
            .collect()
    }
}

async fn serve<F>(mut stream: TcpStream, seen: Arc<Mutex<Vec<String>>>, respond: &F)
where
    F: Fn(u32) -> Reply,
{
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buffer.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&buffer).into_owned();
    let page = page_of(&head).unwrap_or(0);
    seen.lock().unwrap().push(head);

    let (status, body) = match respond(page) {
        Reply::Page(body) => (200, body),
        Reply::Status(status, body) => (status, body),
        Reply::Drop => return,
        Reply::Hang => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            return;
        }
    };

    let response = format!(
        "HTTP/1.1 {} Status\r\nContent-Type: text/html; charset=windows-1251\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Extracts the `page` query parameter from a request head
fn page_of(head: &str) -> Option<u32> {
    let target = head.lines().next()?.split_whitespace().nth(1)?;
    let url = url::Url::parse(&format!("http://localhost{}", target)).ok()?;
    let page = url
        .query_pairs()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.into_owned())?;
    page.parse().ok()
}

fn table(rows: &[&[&str]]) -> String {
    let body: String = rows
        .iter()
        .map(|cells| {
            let tds: String = cells.iter().map(|c| format!("<td>{}</td>", c)).collect();
            format!("<tr>{}</tr>", tds)
        })
        .collect();
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"windows-1251\"></head><body><table><tbody>{}</tbody></table></body></html>",
        body
    )
}

#[tokio::test]
async fn test_fetch_sends_page_param_and_user_agent() {
    let site = FakeSite::start(|_| Reply::Page(table(&[]))).await;
    let client = NutritionClient::new(&site.config()).unwrap();

    client.fetch(7).await.unwrap();

    let requests = site.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("GET /tablytsya-yizhyi?page=7 HTTP/1.1"));
    assert!(requests[0]
        .to_lowercase()
        .contains("user-agent: mozilla/5.0 (windows nt 10.0; win64; x64)"));
}

#[tokio::test]
async fn test_fetch_decodes_utf8_despite_declared_charset() {
    let site = FakeSite::start(|_| Reply::Page(table(&[&["Хліб житній", "210"]]))).await;
    let client = NutritionClient::new(&site.config()).unwrap();

    let body = client.fetch(1).await.unwrap();
    assert!(body.contains("Хліб житній"));
}

#[tokio::test]
async fn test_fetch_returns_body_of_error_status() {
    let site = FakeSite::start(|_| Reply::Status(503, "<p>Технічні роботи</p>".to_string())).await;
    let client = NutritionClient::new(&site.config()).unwrap();

    let body = client.fetch(1).await.unwrap();
    assert!(body.contains("Технічні роботи"));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = LookupConfig {
        base_url: format!("http://{}/table", addr),
        ..Default::default()
    };
    let client = NutritionClient::new(&config).unwrap();

    assert!(matches!(client.fetch(1).await, Err(FetchError::Http(_))));
}

#[tokio::test]
async fn test_lookup_over_http_walks_pages_in_order() {
    let site = FakeSite::start(|page| match page {
        1 => Reply::Page(table(&[&["Молоко", "42", "3.4", "4.7", "3.6"]])),
        2 => Reply::Page(table(&[
            &["Яйце", "155"],
            &["Хліб житній", "210", "7", "40", "2", "6"],
            &["Хліб", "265"],
        ])),
        _ => Reply::Page(table(&[])),
    })
    .await;

    let outcome = lookup_product(&site.config(), "Хліб").await.unwrap();

    match outcome {
        LookupOutcome::Found(record) => {
            assert_eq!(record.name, "Хліб житній");
            assert_eq!(record.calories_per_100g, "210");
            assert_eq!(record.fiber_g, "6");
        }
        other => panic!("Expected Found, got {:?}", other),
    }
    assert_eq!(site.pages(), vec![1, 2]);
}

#[tokio::test]
async fn test_lookup_over_http_not_found() {
    let site = FakeSite::start(|page| match page {
        1 => Reply::Page(table(&[&["Молоко", "42"]])),
        _ => Reply::Page(table(&[])),
    })
    .await;

    let outcome = lookup_product(&site.config(), "ананас").await.unwrap();
    assert_eq!(outcome, LookupOutcome::NotFound);
    assert_eq!(site.pages(), vec![1, 2]);
}

#[tokio::test]
async fn test_lookup_over_http_stops_at_dropped_connection() {
    let site = FakeSite::start(|page| match page {
        1 | 2 => Reply::Page(table(&[&["Молоко", "42"]])),
        3 => Reply::Drop,
        _ => Reply::Page(table(&[&["Ананас", "52"]])),
    })
    .await;

    let outcome = lookup_product(&site.config(), "ананас").await.unwrap();
    assert!(matches!(outcome, LookupOutcome::TransportError(_)));
    assert_eq!(site.pages(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_lookup_over_http_times_out() {
    let site = FakeSite::start(|_| Reply::Hang).await;
    let config = LookupConfig {
        client: ClientConfig {
            request_timeout: Duration::from_millis(300),
            ..Default::default()
        },
        ..site.config()
    };

    let outcome = lookup_product(&config, "хліб").await.unwrap();
    match outcome {
        LookupOutcome::TransportError(message) => assert!(!message.is_empty()),
        other => panic!("Expected TransportError, got {:?}", other),
    }
    assert_eq!(site.pages(), vec![1]);
}

#[tokio::test]
async fn test_lookup_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = LookupConfig {
        base_url: format!("http://{}/table", addr),
        ..Default::default()
    };

    let outcome = lookup_product(&config, "хліб").await.unwrap();
    assert!(matches!(outcome, LookupOutcome::TransportError(_)));
}

#[tokio::test]
async fn test_lookup_rejects_non_http_base_url() {
    let config = LookupConfig {
        base_url: "ftp://example.com/table".to_string(),
        ..Default::default()
    };

    assert!(lookup_product(&config, "хліб").await.is_err());
}
