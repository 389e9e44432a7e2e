//! Error types for component contract violations.

use thiserror::Error;

/// Misuse of the overlay components by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// An overlay part was rendered without an enclosing `OverlayRoot`.
    #[error("{component} must be rendered inside an OverlayRoot")]
    OutsideRoot {
        /// Name of the component that looked up the overlay context.
        component: &'static str,
    },
}

impl OverlayError {
    /// Component that triggered the error.
    #[must_use]
    pub const fn component(&self) -> &'static str {
        match self {
            Self::OutsideRoot { component } => component,
        }
    }
}

/// Result wrapper for overlay context lookups.
pub type OverlayResult<T> = Result<T, OverlayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_root_names_the_component() {
        let err = OverlayError::OutsideRoot {
            component: "CloseControl",
        };

        assert_eq!(err.component(), "CloseControl");
        assert_eq!(
            err.to_string(),
            "CloseControl must be rendered inside an OverlayRoot"
        );
    }
}
