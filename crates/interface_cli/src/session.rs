//! Interactive session loop
//!
//! Orchestrates admit/view/bill/pay operations against the registry and the
//! billing engine. Input-handling policy, per operation:
//!
//! - Unknown menu choices redisplay the menu
//! - Unknown variant/strategy selections fall back to General/Standard
//! - Malformed numbers are re-prompted, not fatal
//! - Out-of-range patient selections no-op with a message

use std::io::{BufRead, Write};

use domain_billing::{BillingEngine, BillingStrategy};
use domain_patient::{AdmissionRegistry, PatientVariant};

use crate::error::CliError;

/// Parses a numeric prompt answer
///
/// # Errors
///
/// Returns [`CliError::Parse`] for non-numeric input; callers re-prompt.
pub fn parse_count(input: &str) -> Result<u32, CliError> {
    Ok(input.trim().parse()?)
}

/// Maps a strategy menu answer to a billing strategy
///
/// Unrecognized answers fall back to `Standard`, matching the safe-fallback
/// selection policy.
pub fn select_strategy(input: &str) -> BillingStrategy {
    match input.trim() {
        "2" => BillingStrategy::Insurance,
        "3" => BillingStrategy::Senior,
        _ => BillingStrategy::Standard,
    }
}

/// An interactive operator session over the billing core
///
/// Generic over its I/O handles; production runs over stdin/stdout, tests
/// over in-memory buffers.
pub struct Session<R: BufRead, W: Write> {
    registry: AdmissionRegistry,
    engine: BillingEngine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given core components and I/O handles
    pub fn new(registry: AdmissionRegistry, engine: BillingEngine, input: R, output: W) -> Self {
        Self {
            registry,
            engine,
            input,
            output,
        }
    }

    /// Returns the session's registry
    pub fn registry(&self) -> &AdmissionRegistry {
        &self.registry
    }

    /// Runs the menu loop until the operator exits or input ends
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            writeln!(self.output, "\n1.Admit 2.View 3.Bill 4.Exit")?;
            let choice = match self.prompt("Choice: ")? {
                Some(choice) => choice,
                None => return Ok(()),
            };

            match choice.as_str() {
                "1" => self.admit()?,
                "2" => self.view()?,
                "3" => self.bill()?,
                "4" => return Ok(()),
                _ => {}
            }
        }
    }

    /// Admits a new patient
    fn admit(&mut self) -> Result<(), CliError> {
        let name = match self.prompt("Name: ")? {
            Some(name) => name,
            None => return Ok(()),
        };

        let selection = match self.prompt("Type (1.General 2.Emergency 3.ICU): ")? {
            Some(selection) => selection,
            None => return Ok(()),
        };
        let variant = match selection.as_str() {
            "2" => PatientVariant::Emergency,
            "3" => match self.prompt_number("Days: ")? {
                Some(days) => PatientVariant::Icu { days },
                None => return Ok(()),
            },
            _ => PatientVariant::General,
        };

        let id = self.registry.admit(name, variant);
        writeln!(self.output, "Admitted! ID: {id}")?;
        Ok(())
    }

    /// Lists admitted patients with their display positions
    fn view(&mut self) -> Result<(), CliError> {
        for entry in self.registry.roster() {
            writeln!(
                self.output,
                "{}. {} (ID: {})",
                entry.position, entry.name, entry.id
            )?;
        }
        Ok(())
    }

    /// Bills a selected patient and optionally records the payment
    fn bill(&mut self) -> Result<(), CliError> {
        if self.registry.is_empty() {
            writeln!(self.output, "No patients admitted.")?;
            return Ok(());
        }

        self.view()?;
        let selection = match self.prompt_number("Select: ")? {
            Some(selection) => selection,
            None => return Ok(()),
        };

        // Roster positions are 1-based; 0 has no patient
        let patient = match (selection as usize)
            .checked_sub(1)
            .and_then(|index| self.registry.get(index).ok())
        {
            Some(patient) => patient.clone(),
            None => {
                writeln!(self.output, "No patient at position {selection}.")?;
                return Ok(());
            }
        };

        let strategy = match self.prompt("Billing (1.Standard 2.Insurance 3.Senior): ")? {
            Some(selection) => select_strategy(&selection),
            None => return Ok(()),
        };

        let bill = self.engine.calculate_bill(&patient, strategy);
        writeln!(
            self.output,
            "\nPatient: {}\nBase: {}\nFinal: {}",
            patient.name,
            patient.base_cost(),
            bill
        )?;

        if let Some(answer) = self.prompt("Pay now? (y/n): ")? {
            if answer == "y" {
                self.engine.process_payment(&patient, bill);
            }
        }
        Ok(())
    }

    /// Writes a prompt and reads the trimmed answer; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts for a number, re-prompting until one parses
    fn prompt_number(&mut self, text: &str) -> Result<Option<u32>, CliError> {
        loop {
            let line = match self.prompt(text)? {
                Some(line) => line,
                None => return Ok(None),
            };
            match parse_count(&line) {
                Ok(n) => return Ok(Some(n)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_accepts_padded_digits() {
        assert_eq!(parse_count(" 3 ").unwrap(), 3);
    }

    #[test]
    fn test_parse_count_rejects_text() {
        let err = parse_count("three").unwrap_err();
        assert!(matches!(err, CliError::Parse(_)));
        assert!(err.to_string().starts_with("Not a number"));
    }

    #[test]
    fn test_select_strategy_fallback() {
        assert_eq!(select_strategy("1"), BillingStrategy::Standard);
        assert_eq!(select_strategy("2"), BillingStrategy::Insurance);
        assert_eq!(select_strategy("3"), BillingStrategy::Senior);
        // Anything else falls back to Standard
        assert_eq!(select_strategy("9"), BillingStrategy::Standard);
        assert_eq!(select_strategy(""), BillingStrategy::Standard);
    }
}
