//! Access to the DNS.
//!
//! Resolution needs exactly two things from the DNS: the SRV records of a
//! service name and the addresses of a host name. The [`DnsLookup`] trait
//! describes a type that can provide both. With the `stub` feature, the
//! trait is implemented for the stub resolver of the domain crate.

use crate::error::SrvLookupError;
use domain::base::name::{Name, ToName};
use domain::rdata::Srv;
use std::future::Future;
use std::net::IpAddr;
use std::pin::Pin;
use std::sync::Arc;
use std::{fmt, io};

//------------ LookupFuture --------------------------------------------------

/// The future returned by lookups.
pub type LookupFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

//------------ DnsLookup -----------------------------------------------------

/// A type that can look up SRV records and host addresses.
///
/// Both methods perform exactly one lookup and don’t cache or retry.
/// Timeouts are whatever the implementation uses by default.
pub trait DnsLookup {
    /// Looks up the SRV records for `name`.
    ///
    /// A lookup that completes with a response code other than NOERROR is
    /// returned as an error, as is a lookup that didn’t produce a response
    /// at all. A successful lookup may well return no records.
    fn lookup_srv<'a>(
        &'a self,
        name: &'a Name<Vec<u8>>,
    ) -> LookupFuture<'a, Result<Vec<SrvRecord>, SrvLookupError>>;

    /// Looks up all IPv4 and IPv6 addresses for the host `name`.
    ///
    /// The addresses are returned in the order they have been received.
    fn lookup_host<'a>(
        &'a self,
        name: &'a Name<Vec<u8>>,
    ) -> LookupFuture<'a, Result<Vec<IpAddr>, io::Error>>;
}

impl<'s, T: DnsLookup + ?Sized> DnsLookup for &'s T {
    fn lookup_srv<'a>(
        &'a self,
        name: &'a Name<Vec<u8>>,
    ) -> LookupFuture<'a, Result<Vec<SrvRecord>, SrvLookupError>> {
        (**self).lookup_srv(name)
    }

    fn lookup_host<'a>(
        &'a self,
        name: &'a Name<Vec<u8>>,
    ) -> LookupFuture<'a, Result<Vec<IpAddr>, io::Error>> {
        (**self).lookup_host(name)
    }
}

impl<T: DnsLookup + ?Sized> DnsLookup for Arc<T> {
    fn lookup_srv<'a>(
        &'a self,
        name: &'a Name<Vec<u8>>,
    ) -> LookupFuture<'a, Result<Vec<SrvRecord>, SrvLookupError>> {
        (**self).lookup_srv(name)
    }

    fn lookup_host<'a>(
        &'a self,
        name: &'a Name<Vec<u8>>,
    ) -> LookupFuture<'a, Result<Vec<IpAddr>, io::Error>> {
        (**self).lookup_host(name)
    }
}

//------------ SrvRecord -----------------------------------------------------

/// The data of a single SRV record.
///
/// This is the record data of [RFC 2782] with the target converted into
/// an owned absolute domain name.
///
/// [RFC 2782]: https://tools.ietf.org/html/rfc2782
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SrvRecord {
    priority: u16,
    weight: u16,
    port: u16,
    target: Name<Vec<u8>>,
}

impl SrvRecord {
    pub fn new(
        priority: u16,
        weight: u16,
        port: u16,
        target: Name<Vec<u8>>,
    ) -> Self {
        SrvRecord {
            priority,
            weight,
            port,
            target,
        }
    }

    pub fn priority(&self) -> u16 {
        self.priority
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn target(&self) -> &Name<Vec<u8>> {
        &self.target
    }

    /// Returns whether both records lead to the same endpoints.
    ///
    /// This is the case if target and port are equal. Target names are
    /// compared case insensitively.
    pub fn same_endpoints(&self, other: &Self) -> bool {
        self.port == other.port && self.target == other.target
    }
}

impl<'a, N: ToName> From<&'a Srv<N>> for SrvRecord {
    fn from(srv: &'a Srv<N>) -> Self {
        SrvRecord::new(
            srv.priority(),
            srv.weight(),
            srv.port(),
            srv.target().to_vec(),
        )
    }
}

impl fmt::Display for SrvRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}.",
            self.priority, self.weight, self.port, self.target
        )
    }
}

//------------ canonicalize --------------------------------------------------

/// Returns the canonical form of a domain name.
///
/// The canonical form is an owned, uncompressed, absolute name with all
/// ASCII letters in lower case.
pub fn canonicalize(name: &impl ToName) -> Name<Vec<u8>> {
    let name = name.to_vec();
    let mut octets = name.as_slice().to_vec();

    // Label length octets are at most 63 and thus never ASCII letters.
    octets.make_ascii_lowercase();
    Name::from_octets(octets).unwrap_or(name)
}

//============ Testing =======================================================
