//! Order fulfillment status and its transition rules.

use serde::{Deserialize, Serialize};

/// Delivery status of an order.
///
/// Statuses advance along `OrderPlaced -> Shipped -> OutForDelivery ->
/// Delivered`; an order may be cancelled from any non-terminal state.
/// `Delivered` and `Cancelled` are terminal. Transition legality is enforced
/// server-side via [`OrderStatus::can_transition_to`].
///
/// Stored as TEXT (with a matching CHECK constraint); the wire and storage
/// strings are the `snake_case` names below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order created at checkout; not yet handed to a carrier.
    #[default]
    OrderPlaced,
    /// Handed to a carrier.
    Shipped,
    /// On a vehicle for final delivery.
    OutForDelivery,
    /// Received by the customer. Terminal.
    Delivered,
    /// Cancelled before delivery. Terminal.
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in fulfillment order.
    pub const ALL: [Self; 5] = [
        Self::OrderPlaced,
        Self::Shipped,
        Self::OutForDelivery,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Whether no further transitions are allowed from this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// The next status along the fulfillment path, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::OrderPlaced => Some(Self::Shipped),
            Self::Shipped => Some(Self::OutForDelivery),
            Self::OutForDelivery => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled => None,
        }
    }

    /// Whether a transition from `self` to `target` is legal.
    ///
    /// Legal transitions are the single forward step along the fulfillment
    /// path, plus cancellation from any non-terminal status. Self-transitions
    /// are rejected.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        if target == Self::Cancelled {
            return !self.is_terminal();
        }

        self.next() == Some(target)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OrderPlaced => write!(f, "order_placed"),
            Self::Shipped => write!(f, "shipped"),
            Self::OutForDelivery => write!(f, "out_for_delivery"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "order_placed" => Ok(Self::OrderPlaced),
            "shipped" => Ok(Self::Shipped),
            "out_for_delivery" => Ok(Self::OutForDelivery),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_path() {
        assert!(OrderStatus::OrderPlaced.can_transition_to(OrderStatus::Shipped));
        assert!(OrderStatus::Shipped.can_transition_to(OrderStatus::OutForDelivery));
        assert!(OrderStatus::OutForDelivery.can_transition_to(OrderStatus::Delivered));
    }

    #[test]
    fn test_no_skipping_or_backward() {
        assert!(!OrderStatus::OrderPlaced.can_transition_to(OrderStatus::OutForDelivery));
        assert!(!OrderStatus::OrderPlaced.can_transition_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Shipped.can_transition_to(OrderStatus::OrderPlaced));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::OutForDelivery));
    }

    #[test]
    fn test_no_self_transition() {
        for status in OrderStatus::ALL {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn test_cancel_from_non_terminal() {
        assert!(OrderStatus::OrderPlaced.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Shipped.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::OutForDelivery.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::OrderPlaced.is_terminal());
    }

    #[test]
    fn test_display_from_str_roundtrip() {
        for status in OrderStatus::ALL {
            let s = status.to_string();
            assert_eq!(s.parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("pending".parse::<OrderStatus>().is_err());
        assert!("ORDER_PLACED".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_serde_wire_format() {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"out_for_delivery\"");

        let parsed: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, OrderStatus::Cancelled);
    }
}
