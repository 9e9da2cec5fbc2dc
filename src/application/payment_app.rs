use super::processor::PaymentProcessor;
use crate::domain::amount::Amount;
use crate::domain::ports::DisplayablePaymentBox;
use crate::error::Result;
use std::io::Write;
use tracing::debug;

/// Runs a complete payment for one variant: the charge first, then the
/// summary of the payment method that was used.
///
/// Both collaborators are injected, so a processor and display built for the
/// same details type `I` are the only valid pairing.
pub struct PaymentApplication<I> {
    processor: PaymentProcessor<I>,
    display: DisplayablePaymentBox<I>,
}

impl<I> PaymentApplication<I> {
    /// Creates a new `PaymentApplication`.
    ///
    /// # Arguments
    ///
    /// * `processor` - Submits the charge.
    /// * `display` - Presents the payment details afterwards.
    pub fn new(processor: PaymentProcessor<I>, display: DisplayablePaymentBox<I>) -> Self {
        Self { processor, display }
    }

    /// Processes `amount` with `info`, then displays `info`.
    ///
    /// Display is skipped if processing fails.
    pub fn complete_payment(&self, amount: Amount, info: &I, out: &mut dyn Write) -> Result<()> {
        debug!(%amount, "processing payment");
        self.processor.process_payment(amount, info, out)?;
        self.display.display_payment(info, out)?;
        out.flush()?;
        Ok(())
    }
}
