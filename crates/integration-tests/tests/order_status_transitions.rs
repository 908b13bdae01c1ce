//! Tests for the order-status state machine.
//!
//! Both binaries rely on `OrderStatus::can_transition_to` being the single
//! authority on legal moves; these tests pin the full transition table.

use clove_core::OrderStatus;

// =============================================================================
// Transition Table
// =============================================================================

/// The complete set of legal transitions. Everything else is illegal.
const LEGAL: &[(OrderStatus, OrderStatus)] = &[
    (OrderStatus::OrderPlaced, OrderStatus::Shipped),
    (OrderStatus::OrderPlaced, OrderStatus::Cancelled),
    (OrderStatus::Shipped, OrderStatus::OutForDelivery),
    (OrderStatus::Shipped, OrderStatus::Cancelled),
    (OrderStatus::OutForDelivery, OrderStatus::Delivered),
    (OrderStatus::OutForDelivery, OrderStatus::Cancelled),
];

#[test]
fn test_exact_transition_table() {
    for from in OrderStatus::ALL {
        for to in OrderStatus::ALL {
            let expected = LEGAL.contains(&(from, to));
            assert_eq!(
                from.can_transition_to(to),
                expected,
                "transition {from} -> {to} should be {}",
                if expected { "legal" } else { "illegal" }
            );
        }
    }
}

#[test]
fn test_terminal_states_allow_nothing() {
    for to in OrderStatus::ALL {
        assert!(!OrderStatus::Delivered.can_transition_to(to));
        assert!(!OrderStatus::Cancelled.can_transition_to(to));
    }
}

#[test]
fn test_every_non_terminal_can_cancel() {
    for from in OrderStatus::ALL {
        if !from.is_terminal() {
            assert!(from.can_transition_to(OrderStatus::Cancelled));
        }
    }
}

#[test]
fn test_forward_chain_reaches_delivered() {
    // Walking next() from order_placed must land on delivered.
    let mut status = OrderStatus::OrderPlaced;
    let mut hops = 0;
    while let Some(next) = status.next() {
        assert!(status.can_transition_to(next));
        status = next;
        hops += 1;
    }
    assert_eq!(status, OrderStatus::Delivered);
    assert_eq!(hops, 3);
}

// =============================================================================
// Wire Format
// =============================================================================

#[test]
fn test_status_strings_match_wire_contract() {
    let expected = [
        "order_placed",
        "shipped",
        "out_for_delivery",
        "delivered",
        "cancelled",
    ];

    for (status, s) in OrderStatus::ALL.iter().zip(expected) {
        assert_eq!(status.to_string(), s);
        assert_eq!(s.parse::<OrderStatus>().as_ref(), Ok(status));
    }
}

#[test]
fn test_unknown_status_string_is_rejected() {
    // The admin PUT handler turns this parse failure into a 400.
    assert!("processing".parse::<OrderStatus>().is_err());
    assert!("".parse::<OrderStatus>().is_err());
    assert!("Delivered".parse::<OrderStatus>().is_err());
}
