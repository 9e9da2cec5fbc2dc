//! Concrete payment variants: simulated gateways and displays that write
//! their messages to whatever output they are handed.

pub mod credit_card;
pub mod paypal;
