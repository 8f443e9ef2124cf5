//! The interactive operator console.
//!
//! A line-based menu loop over any `BufRead`/`Write` pair: stdin/stdout in
//! production, in-memory cursors in tests. The console only relays operator
//! text to the [`Ledger`] and renders the structured results; every engine
//! error is recovered here and turned into an operator-facing line.
use std::io::{BufRead, Write};

use engine::{EngineError, Ledger, MoneyCents};

use crate::error::{AppError, Result};

const FEE_ATTEMPTS: usize = 3;

/// Resolve one fee parameter.
///
/// A configured value (file, environment or flag) is parsed as-is; a missing
/// one is prompted for, with up to [`FEE_ATTEMPTS`] tries before startup
/// fails.
pub fn resolve_fee<R, W>(
    configured: Option<&str>,
    label: &str,
    input: &mut R,
    output: &mut W,
) -> Result<MoneyCents>
where
    R: BufRead,
    W: Write,
{
    if let Some(raw) = configured {
        return Ok(raw.parse::<MoneyCents>()?);
    }

    for _ in 0..FEE_ATTEMPTS {
        write!(output, "Enter the {label} (e.g. 5.00): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(AppError::Startup(format!(
                "end of input while reading the {label}"
            )));
        }

        match line.trim().parse::<MoneyCents>() {
            Ok(fee) if !fee.is_negative() => return Ok(fee),
            Ok(_) => writeln!(output, "The {label} must not be negative.")?,
            Err(_) => writeln!(output, "Use a plain decimal amount, like 5.00.")?,
        }
    }

    Err(AppError::Startup(format!(
        "too many attempts reading the {label}"
    )))
}

pub struct Repl<R, W> {
    ledger: Ledger,
    input: R,
    output: W,
}

impl<R, W> Repl<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(ledger: Ledger, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
        }
    }

    /// Run the menu loop until the operator quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the parking system!")?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Choose an option:")?;
            writeln!(self.output, "1 - Park a vehicle")?;
            writeln!(self.output, "2 - Release a vehicle")?;
            writeln!(self.output, "3 - List parked vehicles")?;
            writeln!(self.output, "4 - Quit")?;

            let Some(choice) = self.read_line("Option: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.park()?,
                "2" => self.release()?,
                "3" => self.list()?,
                "4" => break,
                _ => writeln!(self.output, "Unknown option, try again.")?,
            }
        }

        writeln!(self.output, "Session closed.")?;
        Ok(())
    }

    fn park(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Park Vehicle ---")?;
        let Some(raw_plate) = self.read_line("Plate to park: ")? else {
            return Ok(());
        };

        let admitted = self.ledger.admit(&raw_plate).map(|plate| plate.to_string());
        match admitted {
            Ok(plate) => {
                tracing::info!("parked {plate}");
                writeln!(self.output, "Vehicle '{plate}' parked successfully!")?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Release Vehicle ---")?;
        let Some(raw_plate) = self.read_line("Plate to release: ")? else {
            return Ok(());
        };

        // Ask for hours only once the vehicle is known to be here.
        match self.ledger.contains(&raw_plate) {
            Ok(true) => {}
            Ok(false) => {
                self.report(&EngineError::PlateNotFound(raw_plate))?;
                return Ok(());
            }
            Err(err) => {
                self.report(&err)?;
                return Ok(());
            }
        }

        let Some(raw_hours) = self.read_line("Hours parked: ")? else {
            return Ok(());
        };

        match self.ledger.release(&raw_plate, &raw_hours) {
            Ok(receipt) => {
                tracing::info!(
                    "released {} after {} hours, due {}",
                    receipt.plate,
                    receipt.hours,
                    receipt.amount_due
                );
                writeln!(
                    self.output,
                    "Vehicle '{}' released. Total due: {}.",
                    receipt.plate, receipt.amount_due
                )?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Parked Vehicles ---")?;
        if self.ledger.is_empty() {
            writeln!(self.output, "No vehicles parked.")?;
            return Ok(());
        }

        writeln!(self.output, "The parked vehicles are:")?;
        for (slot, plate) in self.ledger.parked() {
            writeln!(self.output, "Slot {slot}: {plate}")?;
        }
        Ok(())
    }

    fn report(&mut self, err: &EngineError) -> Result<()> {
        tracing::debug!("rejected operator input: {err}");
        let line = match err {
            EngineError::InvalidPlate(_) => "Invalid plate. Please enter a plate.".to_string(),
            EngineError::PlateAlreadyParked(plate) => {
                format!("Vehicle '{plate}' is already parked.")
            }
            EngineError::PlateNotFound(_) => {
                "Sorry, that vehicle is not parked here. Check the plate and try again.".to_string()
            }
            EngineError::InvalidHours(_) => {
                "Invalid hours. Please enter a whole number.".to_string()
            }
            EngineError::InvalidAmount(_) => err.to_string(),
        };
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Prompt and read one trimmed line; `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use engine::{Ledger, MoneyCents};

    use super::*;

    fn lot() -> Ledger {
        Ledger::builder()
            .entry_fee(MoneyCents::new(500))
            .hourly_fee(MoneyCents::new(200))
            .build()
            .unwrap()
    }

    fn run_script(script: &str) -> String {
        let mut repl = Repl::new(lot(), Cursor::new(script.to_string()), Vec::new());
        repl.run().unwrap();
        String::from_utf8(repl.output).unwrap()
    }

    #[test]
    fn park_then_list_shows_slot_one() {
        let out = run_script("1\nabc123\n3\n4\n");

        assert!(out.contains("Vehicle 'ABC123' parked successfully!"));
        assert!(out.contains("Slot 1: ABC123"));
    }

    #[test]
    fn release_prints_two_decimal_total() {
        let out = run_script("1\nxyz0001\n2\nXYZ0001\n3\n3\n4\n");

        assert!(out.contains("Vehicle 'XYZ0001' released. Total due: 11.00."));
        assert!(out.contains("No vehicles parked."));
    }

    #[test]
    fn invalid_hours_keeps_the_vehicle_listed() {
        let out = run_script("1\nabc123\n2\nabc123\nabc\n3\n4\n");

        assert!(out.contains("Invalid hours. Please enter a whole number."));
        assert!(out.contains("Slot 1: ABC123"));
    }

    #[test]
    fn unknown_vehicle_is_not_asked_for_hours() {
        let out = run_script("2\nGHOST\n4\n");

        assert!(out.contains("Sorry, that vehicle is not parked here."));
        assert!(!out.contains("Hours parked:"));
    }

    #[test]
    fn duplicate_plate_is_reported() {
        let out = run_script("1\nabc123\n1\nABC123\n4\n");

        assert!(out.contains("Vehicle 'ABC123' is already parked."));
    }

    #[test]
    fn blank_plate_is_reported() {
        let out = run_script("1\n\n4\n");

        assert!(out.contains("Invalid plate. Please enter a plate."));
    }

    #[test]
    fn empty_lot_has_its_own_message() {
        let out = run_script("3\n4\n");

        assert!(out.contains("No vehicles parked."));
    }

    #[test]
    fn unknown_option_reprompts() {
        let out = run_script("9\n4\n");

        assert!(out.contains("Unknown option, try again."));
        assert!(out.contains("Session closed."));
    }

    #[test]
    fn end_of_input_closes_the_session() {
        let out = run_script("");

        assert!(out.contains("Session closed."));
    }

    #[test]
    fn resolve_fee_uses_configured_value() {
        let mut input = Cursor::new(String::new());
        let mut output = Vec::new();

        let fee = resolve_fee(Some("5.00"), "flat entry fee", &mut input, &mut output).unwrap();

        assert_eq!(fee, MoneyCents::new(500));
        assert!(output.is_empty());
    }

    #[test]
    fn resolve_fee_prompts_when_missing() {
        let mut input = Cursor::new("2.50\n".to_string());
        let mut output = Vec::new();

        let fee = resolve_fee(None, "hourly fee", &mut input, &mut output).unwrap();

        assert_eq!(fee, MoneyCents::new(250));
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Enter the hourly fee"));
    }

    #[test]
    fn resolve_fee_gives_up_after_three_bad_attempts() {
        let mut input = Cursor::new("abc\n-1\nnope\n".to_string());
        let mut output = Vec::new();

        let err = resolve_fee(None, "hourly fee", &mut input, &mut output).unwrap_err();

        assert!(matches!(err, AppError::Startup(_)));
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("must not be negative"));
        assert!(out.contains("plain decimal amount"));
    }
}
