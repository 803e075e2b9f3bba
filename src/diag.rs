//! Reporting what happens during resolution.
//!
//! A resolver reports noteworthy events to a [`Diagnostics`] sink it is
//! given upon creation. None of these events influence the outcome of a
//! resolution. The default sink, [`TracingDiagnostics`], logs them via
//! the `tracing` crate.

use crate::endpoint::Endpoint;
use crate::error::{Error, SrvLookupError};
use domain::base::name::Name;
use std::fmt;
use std::sync::Arc;
use tracing::Level;

//------------ Event ---------------------------------------------------------

/// Something noteworthy that happened during a resolution.
#[derive(Clone, Copy, Debug)]
pub enum Event<'a> {
    /// The SRV query for the service failed.
    SrvLookupFailed {
        service: &'a str,
        reason: &'a SrvLookupError,
    },

    /// The SRV query for the service succeeded but had no records.
    NoSrvRecords { service: &'a str },

    /// SRV records leading elsewhere than the first record were ignored.
    IgnoredSrvRecords {
        service: &'a str,
        target: &'a Name<Vec<u8>>,
        count: usize,
    },

    /// The target of the representative SRV record cannot be resolved.
    TargetUnresolvable {
        target: &'a Name<Vec<u8>>,
        error: &'a Error,
    },

    /// An endpoint was found.
    EndpointFound { endpoint: &'a Endpoint },
}

impl<'a> Event<'a> {
    /// Returns the level the event should be logged at.
    pub fn level(&self) -> Level {
        match self {
            Event::SrvLookupFailed { .. } => Level::WARN,
            Event::NoSrvRecords { .. } => Level::WARN,
            Event::IgnoredSrvRecords { .. } => Level::DEBUG,
            Event::TargetUnresolvable { .. } => Level::ERROR,
            Event::EndpointFound { .. } => Level::TRACE,
        }
    }
}

impl<'a> fmt::Display for Event<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Event::SrvLookupFailed { service, reason } => write!(
                f,
                "DNS lookup for service '{}' failed: {}",
                service, reason
            ),
            Event::NoSrvRecords { service } => {
                write!(f, "no SRV records found for service '{}'", service)
            }
            Event::IgnoredSrvRecords {
                service,
                target,
                count,
            } => write!(
                f,
                "ignoring {} SRV records for service '{}' not leading to {}",
                count, service, target
            ),
            Event::TargetUnresolvable { target, error } => write!(
                f,
                "resolving SRV target {} failed: {}",
                target, error
            ),
            Event::EndpointFound { endpoint } => {
                write!(f, "found endpoint {}", endpoint)
            }
        }
    }
}

//------------ Diagnostics ---------------------------------------------------

/// A sink for resolution events.
pub trait Diagnostics {
    /// Receives an event.
    fn emit(&self, event: Event<'_>);
}

impl<'s, T: Diagnostics + ?Sized> Diagnostics for &'s T {
    fn emit(&self, event: Event<'_>) {
        (**self).emit(event)
    }
}

impl<T: Diagnostics + ?Sized> Diagnostics for Arc<T> {
    fn emit(&self, event: Event<'_>) {
        (**self).emit(event)
    }
}

//------------ TracingDiagnostics --------------------------------------------

/// A diagnostics sink that logs events via `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, event: Event<'_>) {
        match event {
            Event::SrvLookupFailed { service, reason } => {
                tracing::warn!(
                    service,
                    %reason,
                    "DNS lookup for service failed"
                );
            }
            Event::NoSrvRecords { service } => {
                tracing::warn!(service, "no SRV records found for service");
            }
            Event::IgnoredSrvRecords {
                service,
                target,
                count,
            } => {
                tracing::debug!(
                    service,
                    %target,
                    count,
                    "ignoring SRV records with a different target"
                );
            }
            Event::TargetUnresolvable { target, error } => {
                tracing::error!(
                    %target,
                    %error,
                    "resolving SRV target failed"
                );
            }
            Event::EndpointFound { endpoint } => {
                tracing::trace!(%endpoint, "found endpoint");
            }
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collect(Mutex<Vec<(Level, String)>>);

    impl Diagnostics for Collect {
        fn emit(&self, event: Event<'_>) {
            self.0
                .lock()
                .unwrap()
                .push((event.level(), event.to_string()));
        }
    }

    fn emit_to(diagnostics: impl Diagnostics, event: Event<'_>) {
        diagnostics.emit(event)
    }

    #[test]
    fn forwarding() {
        let endpoint = Endpoint::new([10, 0, 0, 1].into(), 5701);
        let collect = Arc::new(Collect::default());

        emit_to(
            &*collect,
            Event::EndpointFound {
                endpoint: &endpoint,
            },
        );
        emit_to(
            collect.clone(),
            Event::NoSrvRecords {
                service: "svc.example",
            },
        );
        emit_to(
            TracingDiagnostics,
            Event::NoSrvRecords {
                service: "svc.example",
            },
        );

        let events = collect.0.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                (Level::TRACE, "found endpoint 10.0.0.1:5701".into()),
                (
                    Level::WARN,
                    "no SRV records found for service 'svc.example'".into()
                ),
            ]
        );
    }
}
