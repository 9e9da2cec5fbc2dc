use super::amount::Amount;
use crate::error::Result;
use std::io::Write;

/// Submits a (simulated) charge for one payment variant.
///
/// `I` is the details type the variant needs, so a gateway can never be
/// handed the wrong kind of payment details.
pub trait PaymentGateway<I>: Send + Sync {
    fn process_payment(&self, amount: Amount, info: &I, out: &mut dyn Write) -> Result<()>;
}

/// Presents stored payment details for one payment variant.
pub trait DisplayablePayment<I>: Send + Sync {
    fn display_payment(&self, info: &I, out: &mut dyn Write) -> Result<()>;
}

pub type PaymentGatewayBox<I> = Box<dyn PaymentGateway<I>>;
pub type DisplayablePaymentBox<I> = Box<dyn DisplayablePayment<I>>;
