use axum::{
    body::{Body, to_bytes},
    http::{Request, Response},
};
use tower::ServiceExt;

pub async fn get(uri: &str) -> Asserter {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let response = time_service::server()
        .oneshot(request)
        .await
        .unwrap(/* Infallible */);
    Asserter::from(response)
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

    #[allow(dead_code)]
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
}

impl From<Response<Body>> for Asserter {
    fn from(response: Response<Body>) -> Self {
        Self { response }
    }
}
