//! Forward DNS resolution for the cluster pipeline.

use std::net::{IpAddr, ToSocketAddrs};

use serde::Serialize;

use crate::error::AppError;

/// A resolved hostname/IP pair.
///
/// Entries keep the order the hostnames were supplied in; no uniqueness is
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostEntry {
    pub name: String,
    pub ip: IpAddr,
}

/// Abstraction over the forward lookup so tests can substitute a fake.
pub trait HostLookup {
    fn lookup(&self, hostname: &str) -> Result<IpAddr, AppError>;
}

/// Production lookup backed by the operating system resolver.
pub struct SystemLookup;

impl HostLookup for SystemLookup {
    fn lookup(&self, hostname: &str) -> Result<IpAddr, AppError> {
        let addrs: Vec<IpAddr> = (hostname, 0)
            .to_socket_addrs()
            .map_err(|err| AppError::HostResolution {
                host: hostname.to_string(),
                reason: err.to_string(),
            })?
            .map(|addr| addr.ip())
            .collect();

        // Prefer IPv4 when both families resolve.
        addrs
            .iter()
            .copied()
            .find(IpAddr::is_ipv4)
            .or_else(|| addrs.first().copied())
            .ok_or_else(|| AppError::HostResolution {
                host: hostname.to_string(),
                reason: "no addresses returned".to_string(),
            })
    }
}

/// Resolve a comma-separated hostname list into ordered host entries.
///
/// An unresolvable hostname aborts the whole run; there is no partial result
/// and no retry.
pub fn resolve_hosts<L: HostLookup>(lookup: &L, hosts: &str) -> Result<Vec<HostEntry>, AppError> {
    let mut entries = Vec::new();
    for raw in hosts.split(',') {
        let name = raw.trim();
        if name.is_empty() {
            return Err(AppError::config_error(format!("Empty hostname in list '{hosts}'")));
        }
        let ip = lookup.lookup(name)?;
        entries.push(HostEntry { name: name.to_string(), ip });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    struct FakeLookup;

    impl HostLookup for FakeLookup {
        fn lookup(&self, hostname: &str) -> Result<IpAddr, AppError> {
            match hostname {
                "alpha" => Ok(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))),
                "beta" => Ok(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2))),
                "gamma" => Ok(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 3))),
                other => Err(AppError::HostResolution {
                    host: other.to_string(),
                    reason: "unknown host".to_string(),
                }),
            }
        }
    }

    #[test]
    fn output_matches_input_length_and_order() {
        let entries = resolve_hosts(&FakeLookup, "beta,alpha,gamma").unwrap();

        assert_eq!(entries.len(), 3);
        let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["beta", "alpha", "gamma"]);
        assert_eq!(entries[0].ip, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)));
    }

    #[test]
    fn duplicate_hostnames_are_kept() {
        let entries = resolve_hosts(&FakeLookup, "alpha,alpha").unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
    }

    #[test]
    fn whitespace_around_hostnames_is_trimmed() {
        let entries = resolve_hosts(&FakeLookup, " alpha , beta ").unwrap();

        assert_eq!(entries[0].name, "alpha");
        assert_eq!(entries[1].name, "beta");
    }

    #[test]
    fn unresolvable_hostname_aborts_the_run() {
        let result = resolve_hosts(&FakeLookup, "alpha,nonexistent,beta");

        assert!(matches!(result, Err(AppError::HostResolution { host, .. }) if host == "nonexistent"));
    }

    #[test]
    fn empty_segment_is_a_configuration_error() {
        let result = resolve_hosts(&FakeLookup, "alpha,,beta");

        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn system_lookup_resolves_localhost() {
        let ip = SystemLookup.lookup("localhost").unwrap();

        assert!(ip.is_loopback());
    }
}
