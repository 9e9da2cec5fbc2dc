//! Payment data model and the ports the payment variants plug into.

pub mod amount;
pub mod payment_info;
pub mod ports;
