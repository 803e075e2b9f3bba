//! Resolved endpoints.

use std::net::{IpAddr, SocketAddr};
use std::{fmt, slice, vec};

//------------ Endpoint ------------------------------------------------------

/// A single reachable instance of a service.
///
/// An endpoint is the pairing of an IP address the SRV target resolved to
/// with the port taken from the SRV record or the configured default.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoint {
    addr: IpAddr,
    port: u16,
}

impl Endpoint {
    pub fn new(addr: IpAddr, port: u16) -> Self {
        Endpoint { addr, port }
    }

    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}

//--- From

impl From<SocketAddr> for Endpoint {
    fn from(addr: SocketAddr) -> Self {
        Endpoint::new(addr.ip(), addr.port())
    }
}

impl From<Endpoint> for SocketAddr {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.socket_addr()
    }
}

//--- Display

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.socket_addr().fmt(f)
    }
}

//------------ FoundEndpoints ------------------------------------------------

/// The endpoints found by a single resolution.
///
/// The endpoints are kept in the order the addresses were returned by the
/// forward lookup of the SRV target. An empty value is a valid result: it
/// means that the service currently has no instances.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FoundEndpoints {
    endpoints: Vec<Endpoint>,
}

impl FoundEndpoints {
    /// Creates an empty value.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Endpoint> {
        self.endpoints.iter()
    }

    /// Returns an iterator over the endpoints as socket addresses.
    pub fn socket_addrs(
        &self,
    ) -> impl Iterator<Item = SocketAddr> + '_ {
        self.endpoints.iter().map(Endpoint::socket_addr)
    }

    pub fn as_slice(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn into_vec(self) -> Vec<Endpoint> {
        self.endpoints
    }
}

//--- From and FromIterator

impl From<Vec<Endpoint>> for FoundEndpoints {
    fn from(endpoints: Vec<Endpoint>) -> Self {
        FoundEndpoints { endpoints }
    }
}

impl FromIterator<Endpoint> for FoundEndpoints {
    fn from_iter<I: IntoIterator<Item = Endpoint>>(iter: I) -> Self {
        FoundEndpoints {
            endpoints: iter.into_iter().collect(),
        }
    }
}

//--- IntoIterator

impl IntoIterator for FoundEndpoints {
    type Item = Endpoint;
    type IntoIter = vec::IntoIter<Endpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.endpoints.into_iter()
    }
}

impl<'a> IntoIterator for &'a FoundEndpoints {
    type Item = &'a Endpoint;
    type IntoIter = slice::Iter<'a, Endpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.endpoints.iter()
    }
}

//============ Testing =======================================================
