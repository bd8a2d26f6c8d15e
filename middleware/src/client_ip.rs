use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, Response, header::FORWARDED},
    middleware::Next,
};
use forwarded_header_value::{ForwardedHeaderValue, Identifier};

/// Stores the caller's address as an `Option<IpAddr>` request extension.
///
/// The remotest `Forwarded: for=` stanza wins over the socket peer so that
/// requests routed through the platform's load balancer are attributed to
/// the real client.
pub async fn mw_client_ip(mut request: Request<Body>, next: Next) -> Response<Body> {
    let ip = client_ip(&request);
    request.extensions_mut().insert(ip);
    next.run(request).await
}

fn client_ip<B>(request: &Request<B>) -> Option<IpAddr> {
    request
        .headers()
        .get(FORWARDED)
        .and_then(|val| val.to_str().ok())
        .and_then(|val| ForwardedHeaderValue::from_str(val).ok())
        .map(|forwarded| forwarded.into_remotest())
        .and_then(|stanza| stanza.forwarded_for)
        .and_then(|identifier| match identifier {
            Identifier::SocketAddr(socket_addr) => Some(socket_addr.ip()),
            Identifier::IpAddr(ip_addr) => Some(ip_addr),
            _ => None,
        })
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|connect_info| connect_info.0.ip())
        })
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, SocketAddr};

    use axum::{body::Body, extract::ConnectInfo, http::Request};

    use super::client_ip;

    #[test]
    fn prefers_forwarded_header() {
        let mut request = Request::builder()
            .header("forwarded", "for=203.0.113.7;proto=https")
            .body(Body::empty())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([10, 0, 0, 1], 51000))));

        assert_eq!(
            client_ip(&request),
            Some(Ipv4Addr::new(203, 0, 113, 7).into())
        );
    }

    #[test]
    fn falls_back_to_peer_address() {
        let mut request = Request::builder().body(Body::empty()).unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([10, 0, 0, 1], 51000))));

        assert_eq!(client_ip(&request), Some(Ipv4Addr::new(10, 0, 0, 1).into()));
    }

    #[test]
    fn unknown_without_header_or_peer() {
        let request = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(client_ip(&request), None);
    }
}
