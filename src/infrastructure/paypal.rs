use crate::domain::amount::Amount;
use crate::domain::payment_info::PayPalInfo;
use crate::domain::ports::{DisplayablePayment, PaymentGateway};
use crate::error::Result;
use std::io::Write;

#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalPaymentGateway;

impl PaymentGateway<PayPalInfo> for PayPalPaymentGateway {
    fn process_payment(
        &self,
        amount: Amount,
        info: &PayPalInfo,
        out: &mut dyn Write,
    ) -> Result<()> {
        writeln!(
            out,
            "Processing PayPal payment of ${} using account {}",
            amount,
            info.email()
        )?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalPayment;

impl DisplayablePayment<PayPalInfo> for PayPalPayment {
    fn display_payment(&self, info: &PayPalInfo, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "PayPal account: {}", info.email())?;
        Ok(())
    }
}
