use std::fmt::{Display, Formatter};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use anyhow::{bail, Result};
use mydig::PolicyKind;
use crate::config::Config;
use crate::duration;

pub const DEFAULT_SERVER: &str = "8.8.8.8";
pub const DEFAULT_PORT: u16 = 53;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);
pub const DEFAULT_RETRIES: u32 = 1;

/// Settings for one lookup, with every default filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    pub server: SocketAddr,
    pub timeout: Duration,
    pub retries: u32,
    pub recursion_desired: bool,
    pub policy: PolicyKind,
}

impl TryFrom<Config> for Context {
    type Error = anyhow::Error;

    fn try_from(cfg: Config) -> Result<Self> {
        let port = cfg.resolver.port.unwrap_or(DEFAULT_PORT);
        let server = to_socket_addr(cfg.resolver.server.as_deref().unwrap_or(DEFAULT_SERVER), port)?;

        let timeout = match cfg.resolver.timeout {
            Some(timeout) => duration::parse(&timeout)?,
            None => DEFAULT_TIMEOUT,
        };
        if timeout.is_zero() {
            bail!("timeout must be greater than zero");
        }

        Ok(Self {
            server,
            timeout,
            retries: cfg.resolver.retries.unwrap_or(DEFAULT_RETRIES),
            recursion_desired: cfg.query.recursion_desired.unwrap_or(true),
            policy: cfg.validation.policy.unwrap_or_default(),
        })
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "udp://{} (timeout {:?}, retries {}, rd {}, {} validation)",
            self.server, self.timeout, self.retries, self.recursion_desired as u8, self.policy
        )
    }
}

// an explicit port in `addr` beats `default_port`
fn to_socket_addr(addr: &str, default_port: u16) -> Result<SocketAddr> {
    if let Ok(addr) = SocketAddr::from_str(addr) {
        return Ok(addr);
    }

    match IpAddr::from_str(addr) {
        Ok(ip_addr) => Ok(SocketAddr::new(ip_addr, default_port)),
        Err(_e) => bail!("{} is not a valid address", addr),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{QueryConfig, ResolverConfig, ValidationConfig};

    #[test]
    fn defaults() {
        let ctx = Context::try_from(Config::default()).unwrap();

        assert_eq!(ctx.server, SocketAddr::from(([8, 8, 8, 8], 53)));
        assert_eq!(ctx.timeout, DEFAULT_TIMEOUT);
        assert_eq!(ctx.retries, 1);
        assert!(ctx.recursion_desired);
        assert_eq!(ctx.policy, PolicyKind::Strict);
    }

    #[test]
    fn resolves_values() {
        let cfg = Config {
            resolver: ResolverConfig {
                server: Some("::1".to_string()),
                port: Some(5353),
                timeout: Some("250ms".to_string()),
                retries: Some(0),
            },
            query: QueryConfig { recursion_desired: Some(false) },
            validation: ValidationConfig { policy: Some(PolicyKind::Lenient) },
        };
        let ctx = Context::try_from(cfg).unwrap();

        assert_eq!(ctx.server, "[::1]:5353".parse().unwrap());
        assert_eq!(ctx.timeout, Duration::from_millis(250));
        assert_eq!(ctx.retries, 0);
        assert!(!ctx.recursion_desired);
        assert_eq!(ctx.policy, PolicyKind::Lenient);
    }

    #[test]
    fn addresses() {
        assert_eq!(to_socket_addr("1.1.1.1:5300", 53).unwrap(), SocketAddr::from(([1, 1, 1, 1], 5300)));
        assert_eq!(to_socket_addr("1.1.1.1", 53).unwrap(), SocketAddr::from(([1, 1, 1, 1], 53)));
        assert!(to_socket_addr("dns.google", 53).is_err());
    }

    #[test]
    fn rejects_bad_timeouts() {
        let mut cfg = Config::default();
        cfg.resolver.timeout = Some("0s".to_string());
        assert!(Context::try_from(cfg).is_err());

        let mut cfg = Config::default();
        cfg.resolver.timeout = Some("soon".to_string());
        assert!(Context::try_from(cfg).is_err());
    }
}
