//! Cluster member discovery through DNS SRV records.
//!
//! This crate turns the name of a DNS service, typically the name of a
//! Kubernetes headless service such as
//! `hazelcast.default.svc.cluster.local`, into the list of network
//! endpoints currently backing that service. It is meant to be called
//! periodically by a discovery subsystem that takes care of everything
//! else: scheduling, retries, and turning endpoints into cluster members.
//!
//! The main type is [`ServiceDnsResolver`]. Each call to its
//! [`resolve`][ServiceDnsResolver::resolve] method performs one SRV query
//! for the service name, picks the first SRV record as representative,
//! forward-resolves that record’s target, and pairs every address found
//! with the record’s port. If the record carries no port, a default port
//! is used instead.
//!
//! A resolution has three possible outcomes:
//!
//! * a non-empty [`FoundEndpoints`] if everything went fine,
//! * an empty [`FoundEndpoints`] if the SRV query failed or had no
//!   records, which is a perfectly normal state for a cluster that is
//!   still starting up, and
//! * an [`Error`] if the setup is broken, i.e., the service name isn’t a
//!   valid domain name or the SRV target cannot be resolved.
//!
//! The DNS itself is accessed through the [`DnsLookup`] trait. With the
//! `stub` feature, which is enabled by default, it is implemented for the
//! stub resolver of the [domain] crate. What happens during a resolution
//! is reported to a [`Diagnostics`] sink which by default forwards
//! everything to [tracing].
//!
//! [domain]: https://docs.rs/domain
//! [tracing]: https://docs.rs/tracing
//!
//! # Reference of Feature Flags
//!
//! * `serde`: derives serialization for [`DiscoveryConf`] and
//!   [`Endpoint`].
//! * `stub`: implements [`DnsLookup`] for the stub resolver of the
//!   domain crate. This feature is enabled by default.
//! * `sync`: adds
//!   [`ServiceDnsResolver::resolve_blocking`] which runs a resolution on
//!   a private runtime. Implies `stub`.

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::conf::{DiscoveryConf, ServiceName, DEFAULT_PORT};
pub use self::diag::{Diagnostics, Event, TracingDiagnostics};
pub use self::endpoint::{Endpoint, FoundEndpoints};
pub use self::error::{Error, SrvLookupError};
pub use self::lookup::{canonicalize, DnsLookup, LookupFuture, SrvRecord};
pub use self::resolver::{EndpointResolver, ServiceDnsResolver};

pub mod conf;
pub mod diag;
pub mod endpoint;
pub mod error;
pub mod lookup;
pub mod resolver;
#[cfg(feature = "stub")]
mod stub;
