//! An in-memory DNS and a recording diagnostics sink.

#![allow(dead_code)]

use domain::base::iana::Rcode;
use domain::base::name::Name;
use domain_discovery::{
    Diagnostics, DnsLookup, Event, LookupFuture, SrvLookupError, SrvRecord,
};
use std::future::ready;
use std::io;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tracing::Level;

pub fn name(s: &str) -> Name<Vec<u8>> {
    Name::from_str(s).unwrap()
}

pub fn srv(port: u16, target: &str) -> SrvRecord {
    SrvRecord::new(0, 0, port, name(target))
}

pub fn addrs(addrs: &[&str]) -> Vec<IpAddr> {
    addrs.iter().map(|addr| addr.parse().unwrap()).collect()
}

//------------ MockDns -------------------------------------------------------

pub enum SrvReply {
    Records(Vec<SrvRecord>),
    Rcode(Rcode),
    Timeout,
}

pub enum HostReply {
    Addrs(Vec<IpAddr>),
    Timeout,
}

/// A DNS with canned answers that records what was asked.
///
/// Unknown SRV names are answered with NXDOMAIN, unknown hosts with no
/// addresses.
#[derive(Default)]
pub struct MockDns {
    srv: Vec<(Name<Vec<u8>>, SrvReply)>,
    hosts: Vec<(Name<Vec<u8>>, HostReply)>,
    srv_queries: AtomicUsize,
    host_queries: Mutex<Vec<Name<Vec<u8>>>>,
}

impl MockDns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn srv(mut self, service: &str, reply: SrvReply) -> Self {
        self.srv.push((name(service), reply));
        self
    }

    pub fn records(self, service: &str, records: Vec<SrvRecord>) -> Self {
        self.srv(service, SrvReply::Records(records))
    }

    pub fn host(mut self, host: &str, reply: HostReply) -> Self {
        self.hosts.push((name(host), reply));
        self
    }

    pub fn addrs(self, host: &str, list: &[&str]) -> Self {
        self.host(host, HostReply::Addrs(addrs(list)))
    }

    pub fn srv_queries(&self) -> usize {
        self.srv_queries.load(Ordering::SeqCst)
    }

    pub fn host_queries(&self) -> Vec<Name<Vec<u8>>> {
        self.host_queries.lock().unwrap().clone()
    }
}

impl DnsLookup for MockDns {
    fn lookup_srv<'a>(
        &'a self,
        name: &'a Name<Vec<u8>>,
    ) -> LookupFuture<'a, Result<Vec<SrvRecord>, SrvLookupError>> {
        self.srv_queries.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .srv
            .iter()
            .find(|(owner, _)| owner == name)
            .map(|(_, reply)| reply);
        let res = match reply {
            Some(SrvReply::Records(records)) => Ok(records.clone()),
            Some(SrvReply::Rcode(rcode)) => {
                Err(SrvLookupError::Rcode(*rcode))
            }
            Some(SrvReply::Timeout) => Err(timeout().into()),
            None => Err(SrvLookupError::Rcode(Rcode::NXDOMAIN)),
        };
        Box::pin(ready(res))
    }

    fn lookup_host<'a>(
        &'a self,
        name: &'a Name<Vec<u8>>,
    ) -> LookupFuture<'a, Result<Vec<IpAddr>, io::Error>> {
        self.host_queries.lock().unwrap().push(name.clone());
        let reply = self
            .hosts
            .iter()
            .find(|(owner, _)| owner == name)
            .map(|(_, reply)| reply);
        let res = match reply {
            Some(HostReply::Addrs(addrs)) => Ok(addrs.clone()),
            Some(HostReply::Timeout) => Err(timeout()),
            None => Ok(Vec::new()),
        };
        Box::pin(ready(res))
    }
}

fn timeout() -> io::Error {
    io::Error::new(io::ErrorKind::TimedOut, "all timed out")
}

//------------ Recorder ------------------------------------------------------

/// A diagnostics sink that keeps all events.
#[derive(Default)]
pub struct Recorder(Mutex<Vec<(Level, String)>>);

impl Recorder {
    pub fn events(&self) -> Vec<(Level, String)> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, level: Level) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(item, _)| *item == level)
            .count()
    }
}

impl Diagnostics for Recorder {
    fn emit(&self, event: Event<'_>) {
        self.0
            .lock()
            .unwrap()
            .push((event.level(), event.to_string()));
    }
}
