use thiserror::Error;

/// Convenient result alias for the SkyRoute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Only build-phase mutations of the network return errors. Queries signal
/// absence through empty collections, `None`, or zero sentinels instead,
/// because a miss is an expected answer rather than a fault.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when inserting an airport whose code is already present.
    #[error("airport {code} is already present in the network")]
    DuplicateAirport { code: String },

    /// Raised when an operation names an airport code the network does not contain.
    #[error("unknown airport code: {code}")]
    UnknownAirport { code: String },

    /// Raised when removing a direct route that does not exist.
    #[error("no direct route from {from} to {to}")]
    RouteNotFound { from: String, to: String },
}
