use std::{
    collections::HashMap,
    io,
    net::{IpAddr, Ipv4Addr},
};

use axum::{
    body::{Body, to_bytes},
    http::{Request, Response},
};
use tower::ServiceExt;
use whoami_service::{AppState, HostResolver, ResolveError};

pub const HOSTNAME: &str = "cell-7.dc1.example.com";
pub const IP: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 255, 3, 17));

pub struct FixedResolver;

impl HostResolver for FixedResolver {
    fn ip(&self) -> Result<IpAddr, ResolveError> {
        Ok(IP)
    }

    fn canonical_hostname(&self) -> Result<String, ResolveError> {
        Ok(HOSTNAME.to_string())
    }
}

pub struct BrokenResolver;

impl HostResolver for BrokenResolver {
    fn ip(&self) -> Result<IpAddr, ResolveError> {
        Err(ResolveError::Lookup {
            hostname: "cell-7".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "Name or service not known"),
        })
    }

    fn canonical_hostname(&self) -> Result<String, ResolveError> {
        self.ip().map(|ip| ip.to_string())
    }
}

pub fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

pub struct TestClient {
    state: AppState,
}

impl TestClient {
    pub fn new(vars: &[(&str, &str)]) -> Self {
        Self::with_resolver(vars, FixedResolver)
    }

    pub fn with_resolver(vars: &[(&str, &str)], resolver: impl HostResolver) -> Self {
        Self {
            state: AppState::new("whoami", env(vars), resolver),
        }
    }

    pub async fn get(&self, uri: &str) -> Asserter {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        let response = whoami_service::server(self.state.clone())
            .oneshot(request)
            .await
            .unwrap(/* Infallible */);
        Asserter::from(response)
    }
}

pub struct Asserter {
    response: Response<Body>,
}

impl Asserter {
    pub fn status(self, expected: u16) -> Self {
        assert_eq!(
            self.response.status().as_u16(),
            expected,
            "expected status {}, got {}",
            expected,
            self.response.status()
        );
        self
    }

    pub fn is_server_error(self) -> Self {
        assert!(
            self.response.status().is_server_error(),
            "expected 5xx status, got {}",
            self.response.status()
        );
        self
    }

    pub fn header(self, name: &str) -> Self {
        assert!(
            self.response.headers().contains_key(name),
            "expected header `{}` in {:?}",
            name,
            self.response.headers()
        );
        self
    }

    pub async fn text(self) -> String {
        let bytes = to_bytes(self.response.into_body(), usize::MAX)
            .await
            .expect("unable to read response body");
        String::from_utf8(bytes.to_vec()).expect("response body is not utf-8")
    }

    pub async fn json(self) -> serde_json::Value {
        let bytes = to_bytes(self.response.into_body(), usize::MAX)
            .await
            .expect("unable to read response body");
        serde_json::from_slice(&bytes).expect("response body is not json")
    }
}

impl From<Response<Body>> for Asserter {
    fn from(response: Response<Body>) -> Self {
        Self { response }
    }
}
