use crate::domain::amount::Amount;
use crate::domain::payment_info::CreditCardInfo;
use crate::domain::ports::{DisplayablePayment, PaymentGateway};
use crate::error::Result;
use std::io::Write;

/// Simulated card processor. Only the last four digits ever leave it.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardPaymentGateway;

impl PaymentGateway<CreditCardInfo> for CreditCardPaymentGateway {
    fn process_payment(
        &self,
        amount: Amount,
        info: &CreditCardInfo,
        out: &mut dyn Write,
    ) -> Result<()> {
        writeln!(
            out,
            "Processing credit card payment of ${} using card ending in {}",
            amount,
            info.last_four()
        )?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardPayment;

impl DisplayablePayment<CreditCardInfo> for CreditCardPayment {
    fn display_payment(&self, info: &CreditCardInfo, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Card ending in {}, Expiry: {}",
            info.last_four(),
            info.expiration_date()
        )?;
        Ok(())
    }
}
