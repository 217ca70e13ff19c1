// crates/countries-core/src/connectivity.rs
//! Concrete [`ConnectivityProbe`] implementations.

use crate::traits::ConnectivityProbe;
use std::net::{IpAddr, SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(1500);

/// Probes by opening (and immediately dropping) a TCP connection.
///
/// Resolution failures, refused connections and timeouts all read as
/// "offline". The timeout is one budget for the whole check: name
/// resolution and every connect attempt draw from the same deadline.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds a probe aimed at the host of `url` (`http`/`https` only).
    ///
    /// Returns `None` when no host can be extracted.
    ///
    /// ```rust
    /// use countries_core::connectivity::TcpProbe;
    ///
    /// let probe = TcpProbe::for_url("https://restcountries.com/v3.1").unwrap();
    /// assert_eq!(probe.target(), ("restcountries.com", 443));
    /// assert!(TcpProbe::for_url("not a url").is_none());
    /// ```
    pub fn for_url(url: &str) -> Option<Self> {
        let (scheme, rest) = url.split_once("://")?;
        let default_port = match scheme.to_ascii_lowercase().as_str() {
            "https" => 443,
            "http" => 80,
            _ => return None,
        };
        let authority = rest.split(['/', '?', '#']).next()?;
        let authority = authority.rsplit('@').next()?;
        if authority.is_empty() {
            return None;
        }
        let (host, port) = if let Some(bracketed) = authority.strip_prefix('[') {
            let (h, after) = bracketed.split_once(']')?;
            match after.strip_prefix(':') {
                Some(p) => (h, p.parse::<u16>().ok()?),
                None if after.is_empty() => (h, default_port),
                None => return None,
            }
        } else {
            match authority.rsplit_once(':') {
                Some((h, p)) => (h, p.parse::<u16>().ok()?),
                None => (authority, default_port),
            }
        };
        if host.is_empty() {
            return None;
        }
        Some(Self::new(host, port))
    }

    pub fn target(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
}

impl ConnectivityProbe for TcpProbe {
    fn check_connection(&self) -> bool {
        let deadline = Instant::now() + self.timeout;
        let addrs = match resolve_within(&self.host, self.port, self.timeout) {
            Some(addrs) => addrs,
            None => return false,
        };
        if connect_before(&addrs, deadline) {
            return true;
        }
        tracing::debug!(host = %self.host, port = self.port, "connectivity: no reachable address");
        false
    }
}

/// Resolves `host:port`, giving up after `budget`. IP literals skip the
/// resolver.
fn resolve_within(host: &str, port: u16, budget: Duration) -> Option<Vec<SocketAddr>> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Some(vec![SocketAddr::new(ip, port)]);
    }

    // getaddrinfo has no timeout of its own. A lookup that outlives the
    // budget finishes on its thread and its answer is discarded.
    let (tx, rx) = mpsc::channel();
    let target = (host.to_string(), port);
    let spawned = thread::Builder::new()
        .name("connectivity-resolve".into())
        .spawn(move || {
            let _ = tx.send(target.to_socket_addrs().map(|a| a.collect::<Vec<_>>()));
        });
    if let Err(e) = spawned {
        tracing::debug!(host, error = %e, "connectivity: resolver thread not started");
        return None;
    }

    match rx.recv_timeout(budget) {
        Ok(Ok(addrs)) => Some(addrs),
        Ok(Err(e)) => {
            tracing::debug!(host, error = %e, "connectivity: resolve failed");
            None
        }
        Err(_) => {
            tracing::debug!(host, ?budget, "connectivity: resolve timed out");
            None
        }
    }
}

/// Tries each address in turn, each attempt limited to the time left before
/// `deadline`.
fn connect_before(addrs: &[SocketAddr], deadline: Instant) -> bool {
    addrs.iter().any(|addr| {
        let left = deadline.saturating_duration_since(Instant::now());
        !left.is_zero() && TcpStream::connect_timeout(addr, left).is_ok()
    })
}

/// A probe whose answer is set by the caller, e.g. an `--offline` switch.
#[derive(Debug)]
pub struct FixedConnectivity {
    online: AtomicBool,
}

impl FixedConnectivity {
    pub fn new(online: bool) -> Self {
        Self {
            online: AtomicBool::new(online),
        }
    }

    pub fn online() -> Self {
        Self::new(true)
    }

    pub fn offline() -> Self {
        Self::new(false)
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }
}

impl ConnectivityProbe for FixedConnectivity {
    fn check_connection(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}
