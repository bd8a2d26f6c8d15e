use std::{
    io,
    net::{IpAddr, ToSocketAddrs},
    sync::Arc,
};

use error::Context;

use crate::WhoamiError;

#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    #[error("cannot read local hostname :: {0}")]
    Hostname(#[source] io::Error),

    #[error("local hostname is not valid unicode :: {0:?}")]
    NotUnicode(std::ffi::OsString),

    #[error("cannot resolve local hostname `{hostname}` :: {source}")]
    Lookup {
        hostname: String,
        #[source]
        source: io::Error,
    },

    #[error("local hostname `{0}` resolves to no address")]
    NoAddress(String),
}

/// Name resolution for the local host.
///
/// Implementations may block; callers on the async runtime go through
/// [`local_ip`] and [`canonical_hostname`].
pub trait HostResolver: Send + Sync + 'static {
    /// First address the local hostname resolves to.
    fn ip(&self) -> Result<IpAddr, ResolveError>;

    /// Fully qualified name of [`HostResolver::ip`].
    fn canonical_hostname(&self) -> Result<String, ResolveError>;
}

/// Resolves through the operating system's resolver (`getaddrinfo`/`getnameinfo`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn ip(&self) -> Result<IpAddr, ResolveError> {
        let hostname = hostname::get()
            .map_err(ResolveError::Hostname)?
            .into_string()
            .map_err(ResolveError::NotUnicode)?;

        let mut addrs = (hostname.as_str(), 0)
            .to_socket_addrs()
            .map_err(|source| ResolveError::Lookup {
                hostname: hostname.clone(),
                source,
            })?;

        match addrs.next() {
            Some(addr) => Ok(addr.ip()),
            None => Err(ResolveError::NoAddress(hostname)),
        }
    }

    fn canonical_hostname(&self) -> Result<String, ResolveError> {
        let ip = self.ip()?;

        // without a reverse mapping the address itself is the best name available
        match dns_lookup::lookup_addr(&ip) {
            Ok(name) => Ok(name),
            Err(e) => {
                tracing::debug!("reverse lookup of {} failed :: {:?}", ip, e);
                Ok(ip.to_string())
            }
        }
    }
}

pub async fn local_ip(resolver: &Arc<dyn HostResolver>) -> Result<IpAddr, WhoamiError> {
    let resolver = Arc::clone(resolver);
    let ip = tokio::task::spawn_blocking(move || resolver.ip())
        .await
        .context("join resolve local ip")??;
    Ok(ip)
}

pub async fn canonical_hostname(resolver: &Arc<dyn HostResolver>) -> Result<String, WhoamiError> {
    let resolver = Arc::clone(resolver);
    let hostname = tokio::task::spawn_blocking(move || resolver.canonical_hostname())
        .await
        .context("join resolve canonical hostname")??;
    Ok(hostname)
}
