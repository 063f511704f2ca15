//! Commands for the Checkout context.

use ecofinds_core::command::Command;
use uuid::Uuid;

/// Command to run the checkout transition for the current cart.
#[derive(Debug, Clone)]
pub struct Checkout {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for Checkout {
    fn command_type(&self) -> &'static str {
        "checkout.checkout"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
