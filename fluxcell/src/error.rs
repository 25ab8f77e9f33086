//! Error types and error handling utilities.

/// A result type returning fluxcell errors.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error type for cell construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter value outside the domain the cell can be built for.
    ///
    /// Raised by validation before any geometry is constructed; a failing
    /// build never returns partial output.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// The name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },
}
