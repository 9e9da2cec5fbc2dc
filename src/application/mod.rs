//! Application layer wiring gateways and displays together.
//!
//! `PaymentProcessor` receives its gateway by injection and
//! `PaymentApplication` pairs a processor with a display, always processing
//! before displaying.

pub mod payment_app;
pub mod processor;
