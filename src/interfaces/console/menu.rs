use std::io::Write;

pub const MENU_TITLE: &str = "=== Payment Menu ===";

/// One entry of the payment menu, parsed from the user's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreditCard,
    PayPal,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Matches the response exactly; `" 1"` or `"01"` are not options.
    pub fn parse(response: &str) -> Self {
        match response {
            "1" => Self::CreditCard,
            "2" => Self::PayPal,
            "3" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

/// Prints the menu, preceded by a blank line.
pub fn print_menu(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{MENU_TITLE}")?;
    writeln!(out, "1. Pay with Credit Card")?;
    writeln!(out, "2. Pay with PayPal")?;
    writeln!(out, "3. Exit")
}
