use crate::error::{PaymentError, Result};
use std::io::{BufRead, Write};

/// Writes `prompt` (no newline), flushes, and reads one line of response.
///
/// Only the line terminator is removed; everything else the user typed is
/// kept. End of input yields `PaymentError::InputClosed`.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PaymentError::InputClosed);
    }
    strip_line_ending(&mut line);
    Ok(line)
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_writes_prompt_and_reads_line() {
        let mut input = Cursor::new("4111111111111111\nnext\n");
        let mut output = Vec::new();

        let response = ask(&mut input, &mut output, "Enter credit card number: ").unwrap();

        assert_eq!(response, "4111111111111111");
        assert_eq!(output, b"Enter credit card number: ");
    }

    #[test]
    fn test_ask_strips_crlf_only() {
        let mut input = Cursor::new("  padded value \r\n");
        let mut output = Vec::new();

        let response = ask(&mut input, &mut output, "> ").unwrap();
        assert_eq!(response, "  padded value ");
    }

    #[test]
    fn test_ask_last_line_without_newline() {
        let mut input = Cursor::new("3");
        let mut output = Vec::new();

        assert_eq!(ask(&mut input, &mut output, "> ").unwrap(), "3");
    }

    #[test]
    fn test_ask_empty_line_is_a_response() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();

        assert_eq!(ask(&mut input, &mut output, "> ").unwrap(), "");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let result = ask(&mut input, &mut output, "Choose an option: ");
        assert!(matches!(result, Err(PaymentError::InputClosed)));
    }
}
