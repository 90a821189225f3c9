//! Executes the core's `HttpRequest`s over the network.
//!
//! # Design
//! The core never performs I/O; a `Transport` turns its plain-data request
//! into a plain-data response. Status codes are returned as data so the core
//! decides what counts as a failure. Calls block, so the runtime moves them
//! onto the blocking pool.

use thiserror::Error;
use todoapp_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[source] ureq::Error),

    #[error("reading response body failed: {0}")]
    Body(#[source] ureq::Error),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Blocking HTTP round-trip.
pub trait Transport: Send + Sync + 'static {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
{
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self(request)
    }
}

/// `Transport` backed by a shared ureq agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut response = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&request.path);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
        }
        .map_err(TransportError::Request)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(TransportError::Body)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todoapp_core::TodoClient;

    fn spawn_server(store: mock_server::Store) -> std::net::SocketAddr {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run_with(listener, store).await
            })
            .unwrap();
        });
        addr
    }

    #[test]
    fn ureq_transport_returns_status_as_data() {
        let addr = spawn_server(mock_server::Store::failing());
        let client = TodoClient::new(&format!("http://{addr}"));

        let response = UreqTransport::new()
            .execute(client.build_list_todos(1))
            .unwrap();
        assert_eq!(response.status, 500);
    }

    #[test]
    fn ureq_transport_fetches_json() {
        let addr = spawn_server(mock_server::Store::demo());
        let client = TodoClient::new(&format!("http://{addr}"));

        let response = UreqTransport::new()
            .execute(client.build_list_todos(2))
            .unwrap();
        assert_eq!(response.status, 200);
        assert!(response
            .headers
            .iter()
            .any(|(name, value)| name == "content-type" && value.starts_with("application/json")));
        let todos = client.parse_list_todos(response).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].user_id, 2);
    }

    #[test]
    fn closures_are_transports() {
        let transport = |_req: HttpRequest| -> Result<HttpResponse, TransportError> {
            Ok(HttpResponse::new(200, "[]"))
        };
        let response = transport
            .execute(TodoClient::new("http://x").build_list_todos(1))
            .unwrap();
        assert_eq!(response.body, "[]");
    }

    #[test]
    fn transport_errors_become_load_failures() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: ApiError = TransportError::Request(ureq::Error::Io(io)).into();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
