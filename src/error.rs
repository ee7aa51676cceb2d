// Copyright 2026 Instance Power Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error and Result implementations.

use std::fmt;

/// Kind of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Observed or requested state is not a known lifecycle state.
    ///
    /// Also used when the provider does not return exactly one record
    /// for the instance, or when waiting for a transitional state.
    InvalidState,

    /// The target state cannot be reached by passively waiting.
    NotReachable,

    /// Start requested while the instance is pending or running.
    AlreadyRunning,

    /// Stop requested while the instance is stopping or stopped.
    AlreadyStopped,

    /// Operation has reached the specified time out.
    OperationTimedOut,

    /// Invalid value passed to one of parameters.
    InvalidInput,

    /// Failure reported by the cloud provider or the transport.
    ProviderError,
}

/// Error from an instance operation.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<Box<dyn ::std::error::Error + Send + Sync>>,
}

/// Result of an instance operation.
pub type Result<T> = ::std::result::Result<T, Error>;

impl Error {
    /// Create an error with a kind and a message.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Error {
        Error {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Create an error that keeps its underlying cause.
    pub(crate) fn with_source<S, E>(kind: ErrorKind, message: S, source: E) -> Error
    where
        S: Into<String>,
        E: Into<Box<dyn ::std::error::Error + Send + Sync>>,
    {
        Error {
            kind,
            message: Some(message.into()),
            source: Some(source.into()),
        }
    }

    /// Error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Error message (if any).
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl ErrorKind {
    /// Short description of the error kind.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::InvalidState => "Invalid instance state",
            ErrorKind::NotReachable => "Target state cannot be reached",
            ErrorKind::AlreadyRunning => "Instance is already pending or running",
            ErrorKind::AlreadyStopped => "Instance is already stopping or stopped",
            ErrorKind::OperationTimedOut => "Time out reached while waiting for the operation",
            ErrorKind::InvalidInput => "Input value(s) are invalid or missing",
            ErrorKind::ProviderError => "Cloud provider request failed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(ref msg) = self.message {
            write!(f, ": {}", msg)
        } else if let Some(ref source) = self.source {
            write!(f, ": {}", source)
        } else {
            Ok(())
        }
    }
}

impl ::std::error::Error for Error {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        match self.source {
            Some(ref err) => Some(&**err),
            None => None,
        }
    }
}

impl From<osauth::Error> for Error {
    fn from(value: osauth::Error) -> Error {
        Error {
            kind: ErrorKind::ProviderError,
            message: None,
            source: Some(Box::new(value)),
        }
    }
}
