//! Resolving a DNS service into endpoints.
//!
//! The [`ServiceDnsResolver`] looks up the SRV records of a service name
//! and turns them into a list of [`Endpoint`]s. It implements
//! [`EndpointResolver`], the capability a discovery orchestrator uses to
//! get the current endpoints of a service without caring how they are
//! found.
//!
//! A resolution goes like this:
//!
//! 1. Query the SRV records of the service name. If that fails or there
//!    are no records, the result is empty.
//! 2. Take the first SRV record. All records of a service are expected to
//!    point at the same target which in turn resolves to one address per
//!    instance. Records pointing elsewhere are ignored.
//! 3. Use the record’s port or, if that is zero, the default port.
//! 4. Look up all addresses of the canonical target name. If that fails
//!    or yields no addresses, DNS is misconfigured and an error is
//!    returned.
//! 5. Create one endpoint per address, keeping the order of the
//!    addresses.
//!
//! Nothing is cached or retried. Each resolution is independent.

use crate::conf::{DiscoveryConf, ServiceName, DEFAULT_PORT};
use crate::diag::{Diagnostics, Event, TracingDiagnostics};
use crate::endpoint::{Endpoint, FoundEndpoints};
use crate::error::Error;
use crate::lookup::{canonicalize, DnsLookup, LookupFuture};
#[cfg(feature = "sync")]
use tokio::runtime;

//------------ EndpointResolver ----------------------------------------------

/// A type that can produce the current endpoints of a service on demand.
///
/// The trait is object safe so that an orchestrator can hold resolvers of
/// different strategies side by side.
pub trait EndpointResolver {
    /// Resolves the current endpoints.
    fn resolve_endpoints(
        &self,
    ) -> LookupFuture<'_, Result<FoundEndpoints, Error>>;
}

//------------ ServiceDnsResolver --------------------------------------------

/// Resolves the endpoints of a service via its DNS SRV records.
///
/// The resolver is created with the service name and a [`DnsLookup`] to
/// perform the lookups through. Optionally, a different default port and
/// a [`Diagnostics`] sink can be given. Without the latter, diagnostics
/// are logged via `tracing`.
///
/// A resolver keeps no state between resolutions and can be used from
/// multiple tasks at the same time if its lookup and sink allow that.
#[derive(Clone, Debug)]
pub struct ServiceDnsResolver<L, D = TracingDiagnostics> {
    /// The service whose SRV records to look up.
    service: ServiceName,

    /// The port to use if the SRV record doesn’t have one.
    default_port: u16,

    /// The lookups are done through this.
    lookup: L,

    /// Where to report events to.
    diagnostics: D,
}

impl<L> ServiceDnsResolver<L> {
    /// Creates a new resolver for `service`.
    ///
    /// The name isn’t checked here. If it isn’t a valid domain name, every
    /// resolution will fail with [`Error::ServiceName`].
    pub fn new(service: impl Into<ServiceName>, lookup: L) -> Self {
        ServiceDnsResolver {
            service: service.into(),
            default_port: DEFAULT_PORT,
            lookup,
            diagnostics: TracingDiagnostics,
        }
    }

    /// Creates a new resolver from a configuration.
    pub fn from_conf(conf: DiscoveryConf, lookup: L) -> Self {
        ServiceDnsResolver {
            service: conf.service_dns.into(),
            default_port: conf.default_port,
            lookup,
            diagnostics: TracingDiagnostics,
        }
    }
}

impl<L, D> ServiceDnsResolver<L, D> {
    /// Replaces the diagnostics sink.
    pub fn with_diagnostics<E>(
        self,
        diagnostics: E,
    ) -> ServiceDnsResolver<L, E> {
        ServiceDnsResolver {
            service: self.service,
            default_port: self.default_port,
            lookup: self.lookup,
            diagnostics,
        }
    }

    /// Sets the port to use for SRV records with port zero.
    pub fn with_default_port(mut self, port: u16) -> Self {
        self.default_port = port;
        self
    }

    pub fn service(&self) -> &ServiceName {
        &self.service
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Returns the port to use for an SRV record’s port.
    fn effective_port(&self, port: u16) -> u16 {
        if port > 0 {
            port
        } else {
            self.default_port
        }
    }
}

impl<L: DnsLookup, D: Diagnostics> ServiceDnsResolver<L, D> {
    /// Resolves the current endpoints of the service.
    ///
    /// Returns an empty value if the SRV lookup failed or had no records.
    /// Returns an error if the service name is not a valid domain name or
    /// if the target of the SRV records cannot be resolved. See the
    /// [module documentation][self] for the details.
    pub async fn resolve(&self) -> Result<FoundEndpoints, Error> {
        let qname = self.service.to_name().map_err(|err| {
            Error::ServiceName(self.service.to_string(), err)
        })?;

        let records = match self.lookup.lookup_srv(&qname).await {
            Ok(records) => records,
            Err(reason) => {
                self.diagnostics.emit(Event::SrvLookupFailed {
                    service: self.service.as_str(),
                    reason: &reason,
                });
                return Ok(FoundEndpoints::empty());
            }
        };
        let (srv, others) = match records.split_first() {
            Some(some) => some,
            None => {
                self.diagnostics.emit(Event::NoSrvRecords {
                    service: self.service.as_str(),
                });
                return Ok(FoundEndpoints::empty());
            }
        };

        let target = canonicalize(srv.target());
        let ignored = others
            .iter()
            .filter(|other| !srv.same_endpoints(other))
            .count();
        if ignored > 0 {
            self.diagnostics.emit(Event::IgnoredSrvRecords {
                service: self.service.as_str(),
                target: &target,
                count: ignored,
            });
        }

        let port = self.effective_port(srv.port());
        let addrs = match self.lookup.lookup_host(&target).await {
            Ok(addrs) if !addrs.is_empty() => addrs,
            Ok(_) => {
                return Err(self.target_error(Error::NoTargetAddress(
                    target.clone(),
                )))
            }
            Err(err) => {
                return Err(self.target_error(Error::TargetLookup(
                    target.clone(),
                    err,
                )))
            }
        };

        Ok(addrs
            .into_iter()
            .map(|addr| {
                let endpoint = Endpoint::new(addr, port);
                self.diagnostics.emit(Event::EndpointFound {
                    endpoint: &endpoint,
                });
                endpoint
            })
            .collect())
    }

    /// Reports a failed target lookup and returns the error.
    fn target_error(&self, error: Error) -> Error {
        if let Some(target) = error.target() {
            self.diagnostics.emit(Event::TargetUnresolvable {
                target,
                error: &error,
            });
        }
        error
    }

    /// Resolves the current endpoints, blocking the current thread.
    ///
    /// This runs [`resolve`][Self::resolve] on a new single-threaded
    /// runtime. It must not be called from within an asynchronous
    /// runtime.
    #[cfg(feature = "sync")]
    #[cfg_attr(docsrs, doc(cfg(feature = "sync")))]
    pub fn resolve_blocking(&self) -> Result<FoundEndpoints, Error> {
        let runtime = runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::Runtime)?;
        runtime.block_on(self.resolve())
    }
}

//--- EndpointResolver

impl<L, D> EndpointResolver for ServiceDnsResolver<L, D>
where
    L: DnsLookup + Sync,
    D: Diagnostics + Sync,
{
    fn resolve_endpoints(
        &self,
    ) -> LookupFuture<'_, Result<FoundEndpoints, Error>> {
        Box::pin(self.resolve())
    }
}

//============ Testing =======================================================
