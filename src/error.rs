//! Errors that can happen while resolving endpoints.
//!
//! There are two kinds of errors. An [`Error`] means that the setup is
//! broken and resolution cannot complete at all. It is returned to the
//! caller. A [`SrvLookupError`] describes why an SRV query didn’t produce
//! records. This is an expected, transient state and is only ever reported
//! as a diagnostic while the resolution itself produces an empty result.

use domain::base::iana::Rcode;
use domain::base::name::{FromStrError, Name};
use std::{error, fmt, io};

//------------ Error ---------------------------------------------------------

/// Resolving the endpoints of a service could not complete.
#[derive(Debug)]
pub enum Error {
    /// The service name is not a valid domain name.
    ServiceName(String, FromStrError),

    /// Looking up the addresses of the SRV target failed.
    TargetLookup(Name<Vec<u8>>, io::Error),

    /// The SRV target exists but doesn’t have any addresses.
    NoTargetAddress(Name<Vec<u8>>),

    /// The runtime for a blocking resolution could not be created.
    #[cfg(feature = "sync")]
    Runtime(io::Error),
}

impl Error {
    /// Returns the SRV target the error is about, if there is one.
    pub fn target(&self) -> Option<&Name<Vec<u8>>> {
        match self {
            Error::TargetLookup(target, _) => Some(target),
            Error::NoTargetAddress(target) => Some(target),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("could not resolve services via DNS: ")?;
        match self {
            Error::ServiceName(name, err) => {
                write!(f, "invalid service name '{}': {}", name, err)
            }
            Error::TargetLookup(target, err) => {
                write!(f, "looking up target {} failed: {}", target, err)
            }
            Error::NoTargetAddress(target) => {
                write!(f, "target {} has no addresses", target)
            }
            #[cfg(feature = "sync")]
            Error::Runtime(err) => {
                write!(f, "failed to create runtime: {}", err)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::ServiceName(_, err) => Some(err),
            Error::TargetLookup(_, err) => Some(err),
            Error::NoTargetAddress(_) => None,
            #[cfg(feature = "sync")]
            Error::Runtime(err) => Some(err),
        }
    }
}

//------------ SrvLookupError ------------------------------------------------

/// The reason an SRV query didn’t produce any records.
#[derive(Debug)]
pub enum SrvLookupError {
    /// The server answered with a response code other than NOERROR.
    Rcode(Rcode),

    /// No answer could be received.
    Io(io::Error),

    /// The answer section of the response could not be parsed.
    MalformedAnswer,
}

impl From<io::Error> for SrvLookupError {
    fn from(err: io::Error) -> Self {
        SrvLookupError::Io(err)
    }
}

impl From<Rcode> for SrvLookupError {
    fn from(rcode: Rcode) -> Self {
        SrvLookupError::Rcode(rcode)
    }
}

impl fmt::Display for SrvLookupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SrvLookupError::Rcode(rcode) => {
                write!(f, "server responded with {}", rcode)
            }
            SrvLookupError::Io(err) => write!(f, "no response: {}", err),
            SrvLookupError::MalformedAnswer => {
                f.write_str("malformed answer section")
            }
        }
    }
}

impl error::Error for SrvLookupError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SrvLookupError::Io(err) => Some(err),
            _ => None,
        }
    }
}

//============ Testing =======================================================
