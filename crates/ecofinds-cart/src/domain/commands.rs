//! Commands for the Cart context.

use ecofinds_core::command::Command;
use ecofinds_core::product::ProductSnapshot;
use uuid::Uuid;

/// Command to add a product to the cart.
#[derive(Debug, Clone)]
pub struct AddToCart {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The product snapshot to add.
    pub product: ProductSnapshot,
}

impl Command for AddToCart {
    fn command_type(&self) -> &'static str {
        "cart.add_to_cart"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to remove a product's line item from the cart.
#[derive(Debug, Clone)]
pub struct RemoveFromCart {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The product identifier.
    pub product_id: String,
}

impl Command for RemoveFromCart {
    fn command_type(&self) -> &'static str {
        "cart.remove_from_cart"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to replace a line item's quantity. Zero means removal.
#[derive(Debug, Clone)]
pub struct SetQuantity {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The product identifier.
    pub product_id: String,
    /// The replacement quantity.
    pub quantity: u32,
}

impl Command for SetQuantity {
    fn command_type(&self) -> &'static str {
        "cart.set_quantity"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to empty the cart.
#[derive(Debug, Clone)]
pub struct ClearCart {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ClearCart {
    fn command_type(&self) -> &'static str {
        "cart.clear_cart"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
