use crate::domain::amount::Amount;
use crate::domain::ports::PaymentGatewayBox;
use crate::error::Result;
use std::io::Write;

/// Forwards payments to whichever gateway it was constructed with.
pub struct PaymentProcessor<I> {
    gateway: PaymentGatewayBox<I>,
}

impl<I> PaymentProcessor<I> {
    pub fn new(gateway: PaymentGatewayBox<I>) -> Self {
        Self { gateway }
    }

    pub fn process_payment(&self, amount: Amount, info: &I, out: &mut dyn Write) -> Result<()> {
        self.gateway.process_payment(amount, info, out)
    }
}
