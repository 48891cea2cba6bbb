//! Result type alias for the bootstrapper

use super::errors::BootstrapError;

/// Result type alias using `BootstrapError` as the error type.
///
/// # Examples
///
/// ```
/// use cosmos_bootstrap::domain::result::Result;
/// use cosmos_bootstrap::domain::errors::BootstrapError;
///
/// fn failing_function() -> Result<()> {
///     Err(BootstrapError::Validation("Invalid input".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, BootstrapError>;
