//! Local HTTP/1.1 server answering canned JSON, for exercising the API
//! clients without the network.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// One request as received by the server.
#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    target: String,
    headers: Vec<(String, String)>,
}

impl Recorded {
    fn parse(head: &str) -> Self {
        let mut lines = head.split("\r\n");
        let target = lines
            .next()
            .and_then(|line| line.split(' ').nth(1))
            .unwrap_or_default()
            .to_string();
        let headers = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
            .collect();
        Self { target, headers }
    }

    /// Path without the query string.
    pub(crate) fn path(&self) -> &str {
        self.target
            .split_once('?')
            .map_or(self.target.as_str(), |(path, _)| path)
    }

    /// Raw (still percent-encoded) value of a query parameter.
    pub(crate) fn query_value(&self, key: &str) -> Option<&str> {
        let (_, query) = self.target.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    /// Header value, matched case-insensitively.
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(header, _)| *header == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Requests received so far, in arrival order.
pub(crate) type Requests = Arc<Mutex<Vec<Recorded>>>;

/// Starts a server on an ephemeral loopback port and returns its base URL.
///
/// `respond` maps each request to a JSON body; `None` answers 404.
pub(crate) async fn serve<F>(respond: F) -> (String, Requests)
where
    F: Fn(&Recorded) -> Option<String> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let requests = Requests::default();

    let recorded = Arc::clone(&requests);
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let Some(request) = read_request(&mut stream).await else {
                continue;
            };
            let body = respond(&request);
            recorded.lock().unwrap().push(request);
            write_response(&mut stream, body).await;
        }
    });

    (base_url, requests)
}

async fn read_request(stream: &mut TcpStream) -> Option<Recorded> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..read]);
        if let Some(end) = buf.windows(4).position(|window| window == b"\r\n\r\n") {
            return Some(Recorded::parse(&String::from_utf8_lossy(&buf[..end])));
        }
    }
}

async fn write_response(stream: &mut TcpStream, body: Option<String>) {
    let (status, body) = match body {
        Some(body) => ("200 OK", body),
        None => ("404 Not Found", r#"{"error": "not found"}"#.to_string()),
    };
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

#[test]
fn test_recorded_parsing() {
    let request = Recorded::parse(
        "GET /vacancies/?keyword=Go&page=1 HTTP/1.1\r\nhost: 127.0.0.1\r\nX-Api-App-Id: key",
    );
    assert_eq!(request.path(), "/vacancies/");
    assert_eq!(request.query_value("page"), Some("1"));
    assert_eq!(request.query_value("town"), None);
    assert_eq!(request.header("x-api-app-id"), Some("key"));
}
