use super::menu::{MenuChoice, print_menu};
use super::prompt::ask;
use crate::application::payment_app::PaymentApplication;
use crate::application::processor::PaymentProcessor;
use crate::domain::amount::Amount;
use crate::domain::payment_info::{CreditCardInfo, PayPalInfo};
use crate::domain::ports::{DisplayablePaymentBox, PaymentGatewayBox};
use crate::error::Result;
use crate::infrastructure::credit_card::{CreditCardPayment, CreditCardPaymentGateway};
use crate::infrastructure::paypal::{PayPalPayment, PayPalPaymentGateway};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// The interactive payment menu.
///
/// Each iteration prints the menu, reads a choice and, for a payment choice,
/// collects the details, builds the matching gateway and display pair and
/// completes the payment. Nothing carries over between iterations. The loop
/// ends only when the user picks Exit; a malformed amount or closed input
/// ends it with an error instead.
pub struct MenuSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            print_menu(&mut self.output)?;
            let response = self.ask("Choose an option: ")?;
            debug!(choice = %response, "menu choice received");

            match MenuChoice::parse(&response) {
                MenuChoice::CreditCard => self.pay_with_credit_card()?,
                MenuChoice::PayPal => self.pay_with_paypal()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting... Thank you!")?;
                    self.output.flush()?;
                    return Ok(());
                }
                MenuChoice::Invalid => {
                    debug!(choice = %response, "unrecognized menu option");
                    writeln!(self.output, "Invalid option. Please try again.")?;
                }
            }
        }
    }

    #[cfg(test)]
    fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        ask(&mut self.input, &mut self.output, prompt)
    }

    fn read_amount(&mut self) -> Result<Amount> {
        self.ask("Enter payment amount: ")?.parse()
    }

    fn pay_with_credit_card(&mut self) -> Result<()> {
        let amount = self.read_amount()?;
        let card_number = self.ask("Enter credit card number: ")?;
        let expiration = self.ask("Enter expiration date (MM/YY): ")?;
        let cvv = self.ask("Enter CVV: ")?;
        let info = CreditCardInfo::new(card_number, expiration, cvv);

        let gateway: PaymentGatewayBox<CreditCardInfo> = Box::new(CreditCardPaymentGateway);
        let display: DisplayablePaymentBox<CreditCardInfo> = Box::new(CreditCardPayment);
        let app = PaymentApplication::new(PaymentProcessor::new(gateway), display);
        app.complete_payment(amount, &info, &mut self.output)?;

        info!(method = "credit_card", %amount, last_four = info.last_four(), "payment completed");
        Ok(())
    }

    fn pay_with_paypal(&mut self) -> Result<()> {
        let amount = self.read_amount()?;
        let email = self.ask("Enter PayPal email: ")?;
        let info = PayPalInfo::new(email);

        let gateway: PaymentGatewayBox<PayPalInfo> = Box::new(PayPalPaymentGateway);
        let display: DisplayablePaymentBox<PayPalInfo> = Box::new(PayPalPayment);
        let app = PaymentApplication::new(PaymentProcessor::new(gateway), display);
        app.complete_payment(amount, &info, &mut self.output)?;

        info!(method = "paypal", %amount, email = info.email(), "payment completed");
        Ok(())
    }
}
