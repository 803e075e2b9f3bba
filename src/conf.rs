//! Configuration of a service discovery.
//!
//! Discovery needs very little configuration: the name of the DNS service
//! to look up and the port to use if the SRV records don’t provide one.
//! Both are collected in [`DiscoveryConf`]. The crate never reads
//! configuration from files or the environment itself, so the value is
//! always supplied by whoever embeds the resolver.

use domain::base::name::{FromStrError, Name};
use std::str::FromStr;
use std::{fmt, ops};

//------------ Module Configuration ------------------------------------------

/// The port used when an SRV record doesn’t announce one.
///
/// This is the standard member port of Hazelcast clusters.
pub const DEFAULT_PORT: u16 = 5701;

//------------ ServiceName ---------------------------------------------------

/// The name of the DNS service whose SRV records describe the endpoints.
///
/// A value keeps the name exactly as configured. It is only turned into
/// a domain name when it is needed for a query via [`to_name`]. The name
/// is always treated as absolute, whether it ends in a dot or not.
///
/// [`to_name`]: Self::to_name
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn new(name: impl Into<String>) -> Self {
        ServiceName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the service name into an absolute domain name.
    ///
    /// This fails if the name isn’t in valid representation format, e.g.,
    /// if it contains empty labels or labels that are too long. A
    /// configuration layer can use this to reject bad names early.
    pub fn to_name(&self) -> Result<Name<Vec<u8>>, FromStrError> {
        Name::from_str(&self.0)
    }
}

//--- From

impl From<String> for ServiceName {
    fn from(name: String) -> Self {
        ServiceName(name)
    }
}

impl<'a> From<&'a str> for ServiceName {
    fn from(name: &'a str) -> Self {
        ServiceName(name.into())
    }
}

//--- Deref and AsRef

impl ops::Deref for ServiceName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//--- Display

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//------------ DiscoveryConf -------------------------------------------------

/// Configuration for a [`ServiceDnsResolver`].
///
/// When deserialized, the keys are `service-dns` and `default-port`. The
/// former is required. The latter may be missing in which case
/// [`DEFAULT_PORT`] is used.
///
/// [`ServiceDnsResolver`]: crate::resolver::ServiceDnsResolver
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub struct DiscoveryConf {
    /// The DNS name of the service to look up SRV records for.
    pub service_dns: String,

    /// The port to use if the representative SRV record has port zero.
    #[cfg_attr(feature = "serde", serde(default = "default_port"))]
    pub default_port: u16,
}

#[cfg(feature = "serde")]
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl DiscoveryConf {
    /// Creates a new configuration for the given service name.
    pub fn new(service_dns: impl Into<String>) -> Self {
        DiscoveryConf {
            service_dns: service_dns.into(),
            default_port: DEFAULT_PORT,
        }
    }

    /// Returns the configured service name.
    pub fn service_name(&self) -> ServiceName {
        ServiceName::new(self.service_dns.clone())
    }
}

impl Default for DiscoveryConf {
    fn default() -> Self {
        Self::new(String::new())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn service_name_to_name() {
        let name = ServiceName::from("svc.example").to_name().unwrap();
        let dotted = ServiceName::from("svc.example.").to_name().unwrap();
        assert_eq!(name, dotted);
        assert_eq!(name.to_string(), dotted.to_string());
    }

    #[test]
    fn bad_service_names() {
        assert!(ServiceName::from("svc..example").to_name().is_err());
        let long_label = format!("{}.example", "a".repeat(64));
        assert!(ServiceName::new(long_label).to_name().is_err());
    }

    #[test]
    fn conf_defaults() {
        let conf = DiscoveryConf::new("hazelcast.default.svc.cluster.local");
        assert_eq!(conf.default_port, DEFAULT_PORT);
        assert_eq!(
            conf.service_name().as_str(),
            "hazelcast.default.svc.cluster.local"
        );
        assert_eq!(DiscoveryConf::default().default_port, 5701);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn conf_from_json() {
        let conf: DiscoveryConf = serde_json::from_str(
            r#"{"service-dns": "svc.example", "default-port": 5702}"#,
        )
        .unwrap();
        assert_eq!(conf.service_dns, "svc.example");
        assert_eq!(conf.default_port, 5702);

        let conf: DiscoveryConf =
            serde_json::from_str(r#"{"service-dns": "svc.example"}"#)
                .unwrap();
        assert_eq!(conf.default_port, DEFAULT_PORT);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn conf_requires_service_dns() {
        assert!(
            serde_json::from_str::<DiscoveryConf>(r#"{"default-port": 5702}"#)
                .is_err()
        );
        assert!(serde_json::from_str::<DiscoveryConf>("{}").is_err());
    }
}
