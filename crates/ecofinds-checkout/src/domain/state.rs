//! Checkout state machine.

use ecofinds_core::error::DomainError;

/// States of a single checkout invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    /// No checkout in progress.
    Idle,
    /// Order submitted, awaiting processing.
    Processing,
    /// Purchase durably recorded.
    Committed,
    /// Processing or persistence failed; cart and history untouched.
    Failed,
}

/// A one-shot checkout transition: `Idle → Processing → Committed`, with
/// `Failed` as the terminal state for processing or persistence errors.
#[derive(Debug)]
pub struct CheckoutTransition {
    state: CheckoutState,
}

impl CheckoutTransition {
    /// Creates a transition in the `Idle` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CheckoutState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Enters `Processing`. Refuses to start when the cart is empty,
    /// leaving the state at `Idle`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCart` for an empty cart and
    /// `DomainError::Validation` if invoked outside `Idle`.
    pub fn start(&mut self, cart_is_empty: bool) -> Result<(), DomainError> {
        if self.state != CheckoutState::Idle {
            return Err(DomainError::Validation(format!(
                "checkout cannot start from {:?}",
                self.state
            )));
        }
        if cart_is_empty {
            return Err(DomainError::EmptyCart);
        }
        self.state = CheckoutState::Processing;
        Ok(())
    }

    /// Marks the purchase durably recorded.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if invoked outside `Processing`.
    pub fn commit(&mut self) -> Result<(), DomainError> {
        if self.state != CheckoutState::Processing {
            return Err(DomainError::Validation(format!(
                "checkout cannot commit from {:?}",
                self.state
            )));
        }
        self.state = CheckoutState::Committed;
        Ok(())
    }

    /// Marks the checkout failed. Legal only from `Processing`; `Failed` is
    /// terminal.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if invoked outside `Processing`.
    pub fn fail(&mut self) -> Result<(), DomainError> {
        if self.state != CheckoutState::Processing {
            return Err(DomainError::Validation(format!(
                "checkout cannot fail from {:?}",
                self.state
            )));
        }
        self.state = CheckoutState::Failed;
        Ok(())
    }
}

impl Default for CheckoutTransition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_idle_processing_committed() {
        // Arrange
        let mut transition = CheckoutTransition::new();
        assert_eq!(transition.state(), CheckoutState::Idle);

        // Act & Assert
        transition.start(false).unwrap();
        assert_eq!(transition.state(), CheckoutState::Processing);
        transition.commit().unwrap();
        assert_eq!(transition.state(), CheckoutState::Committed);
    }

    #[test]
    fn test_start_refuses_empty_cart_without_state_change() {
        // Arrange
        let mut transition = CheckoutTransition::new();

        // Act
        let result = transition.start(true);

        // Assert
        assert!(matches!(result.unwrap_err(), DomainError::EmptyCart));
        assert_eq!(transition.state(), CheckoutState::Idle);
    }

    #[test]
    fn test_failure_from_processing_is_terminal() {
        // Arrange
        let mut transition = CheckoutTransition::new();
        transition.start(false).unwrap();

        // Act
        transition.fail().unwrap();

        // Assert — no escape from Failed.
        assert_eq!(transition.state(), CheckoutState::Failed);
        assert!(transition.commit().is_err());
        assert!(transition.start(false).is_err());
        assert!(transition.fail().is_err());
    }

    #[test]
    fn test_commit_requires_processing() {
        // Arrange
        let mut transition = CheckoutTransition::new();

        // Act
        let result = transition.commit();

        // Assert
        assert!(matches!(result.unwrap_err(), DomainError::Validation(_)));
    }

    #[test]
    fn test_start_is_one_shot() {
        // Arrange
        let mut transition = CheckoutTransition::new();
        transition.start(false).unwrap();
        transition.commit().unwrap();

        // Act
        let result = transition.start(false);

        // Assert
        assert!(matches!(result.unwrap_err(), DomainError::Validation(_)));
        assert_eq!(transition.state(), CheckoutState::Committed);
    }
}
