//! Lookups via the stub resolver.

use crate::error::SrvLookupError;
use crate::lookup::{DnsLookup, LookupFuture, SrvRecord};
use bytes::Bytes;
use domain::base::iana::{Rcode, Rtype};
use domain::base::name::{Name, ParsedName};
use domain::rdata::Srv;
use domain::resolv::StubResolver;
use std::io;
use std::net::IpAddr;

//------------ DnsLookup for StubResolver ------------------------------------

impl DnsLookup for StubResolver {
    fn lookup_srv<'a>(
        &'a self,
        name: &'a Name<Vec<u8>>,
    ) -> LookupFuture<'a, Result<Vec<SrvRecord>, SrvLookupError>> {
        Box::pin(lookup_srv(self, name))
    }

    fn lookup_host<'a>(
        &'a self,
        name: &'a Name<Vec<u8>>,
    ) -> LookupFuture<'a, Result<Vec<IpAddr>, io::Error>> {
        Box::pin(lookup_host(self, name))
    }
}

//------------ Helper Functions ----------------------------------------------

async fn lookup_srv(
    resolver: &StubResolver,
    name: &Name<Vec<u8>>,
) -> Result<Vec<SrvRecord>, SrvLookupError> {
    let answer = resolver.query((name, Rtype::SRV)).await?;
    let rcode = answer.header().rcode();
    if rcode != Rcode::NOERROR {
        return Err(rcode.into());
    }
    let section = answer
        .answer()
        .map_err(|_| SrvLookupError::MalformedAnswer)?;

    // Records we can’t parse are skipped rather than failing the whole
    // lookup.
    Ok(section
        .limit_to::<Srv<ParsedName<Bytes>>>()
        .filter_map(Result::ok)
        .map(|record| SrvRecord::from(record.data()))
        .collect())
}

async fn lookup_host(
    resolver: &StubResolver,
    name: &Name<Vec<u8>>,
) -> Result<Vec<IpAddr>, io::Error> {
    let found = StubResolver::lookup_host(resolver, name).await?;
    Ok(found.iter().collect())
}
