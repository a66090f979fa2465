//! Interactive menu loop.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use smartpark_core::{Error, Facility, SlotId};
use smartpark_pricing::TimeBand;
use tracing::debug;

/// One line of user input, interpreted.
enum Input<T> {
    Value(T),
    Invalid(String),
    Eof,
}

/// The console session: a facility plus its input and output streams.
pub struct Shell<R, W> {
    facility: Facility,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a session.
    pub fn new(facility: Facility, input: R, output: W) -> Self {
        Self {
            facility,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let choice = match self.read::<u32>()? {
                Input::Value(choice) => choice,
                Input::Invalid(raw) => {
                    debug!(input = %raw, "Non-numeric menu choice");
                    writeln!(self.output, "Invalid choice! Please try again.")?;
                    continue;
                }
                Input::Eof => break,
            };

            let keep_going = match choice {
                1 => self.view_slots().map(|_| true)?,
                2 => self.park()?,
                3 => self.free()?,
                4 => self.nearest()?,
                0 => {
                    writeln!(self.output, "Exiting system.")?;
                    return self.output.flush();
                }
                _ => {
                    writeln!(self.output, "Invalid choice! Please try again.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        writeln!(self.output)?;
        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Smart Parking System with Costing")?;
        writeln!(self.output, "1. View Parking Slot Availability")?;
        writeln!(self.output, "2. Park a Vehicle")?;
        writeln!(self.output, "3. Free a Parking Slot")?;
        writeln!(self.output, "4. Find Nearest Available Parking Slot")?;
        writeln!(self.output, "0. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    fn view_slots(&mut self) -> io::Result<()> {
        let bands: Vec<String> = TimeBand::ALL
            .iter()
            .map(|band| match band {
                TimeBand::OffPeak => format!("{}: {:.1}x", band, band.multiplier()),
                _ => format!("{} ({}): {:.1}x", band, band.window(), band.multiplier()),
            })
            .collect();

        writeln!(
            self.output,
            "Time-based multipliers apply depending on current hours:"
        )?;
        writeln!(self.output, "{}", bands.join(" | "))?;
        writeln!(self.output, "Current band: {}", self.facility.time_band())?;

        let currency = self.facility.currency().to_string();
        for slot in self.facility.slots() {
            writeln!(
                self.output,
                "Slot {}: {}, Cost per hour: {}{:.2}",
                slot.id(),
                if slot.is_available() { "Available" } else { "Occupied" },
                currency,
                slot.base_rate()
            )?;
        }
        Ok(())
    }

    fn park(&mut self) -> io::Result<bool> {
        let prompt = format!("Enter parking slot number to park (1-{}): ", self.facility.len());
        let slot = match self.prompt::<usize>(&prompt)? {
            Input::Value(raw) => SlotId::new(raw),
            Input::Invalid(_) => return self.invalid_number(),
            Input::Eof => return Ok(false),
        };
        let duration = match self.prompt::<f64>("Enter parking duration (hours): ")? {
            Input::Value(hours) => hours,
            Input::Invalid(_) => return self.invalid_number(),
            Input::Eof => return Ok(false),
        };

        match self.facility.park(slot, duration) {
            Ok(receipt) => {
                let total = receipt.quote.format_total(self.facility.currency());
                writeln!(
                    self.output,
                    "Vehicle parked in slot {}. Total cost: {}",
                    receipt.slot, total
                )?;
                writeln!(
                    self.output,
                    "(Cost includes a time multiplier of {} for extended hours.)",
                    receipt.quote.multiplier
                )?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(true)
    }

    fn free(&mut self) -> io::Result<bool> {
        let prompt = format!("Enter parking slot number to free (1-{}): ", self.facility.len());
        let slot = match self.prompt::<usize>(&prompt)? {
            Input::Value(raw) => SlotId::new(raw),
            Input::Invalid(_) => return self.invalid_number(),
            Input::Eof => return Ok(false),
        };

        match self.facility.release(slot) {
            Ok(()) => writeln!(self.output, "Slot {} is now available.", slot)?,
            Err(err) => self.report(&err)?,
        }
        Ok(true)
    }

    fn nearest(&mut self) -> io::Result<bool> {
        let prompt = format!("Enter your current location slot (1-{}): ", self.facility.len());
        let origin = match self.prompt::<usize>(&prompt)? {
            Input::Value(raw) => SlotId::new(raw),
            Input::Invalid(_) => return self.invalid_number(),
            Input::Eof => return Ok(false),
        };

        match self.facility.find_nearest(origin) {
            Ok(allocation) => writeln!(
                self.output,
                "Nearest parking slot for your location is Slot {}",
                allocation.slot
            )?,
            Err(err) => self.report(&err)?,
        }
        Ok(true)
    }

    fn report(&mut self, err: &Error) -> io::Result<()> {
        match err {
            Error::NotFound(_) => writeln!(self.output, "No available parking slots."),
            Error::SlotUnavailable(_) => writeln!(self.output, "Slot is unavailable or invalid."),
            Error::SlotAlreadyFree(_) => writeln!(self.output, "Slot is already free or invalid."),
            Error::InvalidSlot(id) => writeln!(
                self.output,
                "Slot {} is invalid. Choose a slot from 1 to {}.",
                id,
                self.facility.len()
            ),
            other => writeln!(self.output, "Error: {}", other),
        }
    }

    fn invalid_number(&mut self) -> io::Result<bool> {
        writeln!(self.output, "Invalid input! Please enter a number.")?;
        Ok(true)
    }

    fn prompt<T: FromStr>(&mut self, message: &str) -> io::Result<Input<T>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read()
    }

    fn read<T: FromStr>(&mut self) -> io::Result<Input<T>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Input::Eof);
        }
        let trimmed = line.trim();
        Ok(match trimmed.parse() {
            Ok(value) => Input::Value(value),
            Err(_) => Input::Invalid(trimmed.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartpark_core::FacilityConfig;
    use smartpark_pricing::FixedClock;
    use std::io::Cursor;

    fn session(script: &str, hour: u32) -> (String, Facility) {
        let facility = Facility::from_config(&FacilityConfig::default())
            .unwrap()
            .with_clock(FixedClock(hour));
        let mut output = Vec::new();
        let facility = {
            let mut shell = Shell::new(facility, Cursor::new(script.to_string()), &mut output);
            shell.run().unwrap();
            shell.facility
        };
        (String::from_utf8(output).unwrap(), facility)
    }

    #[test]
    fn exit_immediately() {
        let (out, _) = session("0\n", 12);
        assert!(out.contains("Smart Parking System with Costing"));
        assert!(out.ends_with("Exiting system.\n"));
    }

    #[test]
    fn eof_ends_session() {
        let (out, _) = session("", 12);
        assert!(out.contains("Enter your choice: "));
        assert!(!out.contains("Exiting system."));
    }

    #[test]
    fn view_lists_every_slot() {
        let (out, _) = session("1\n0\n", 20);
        assert!(out.contains(
            "Peak (8 AM - 6 PM): 1.5x | Evening (7 PM - 10 PM): 1.2x | Off-Peak: 1.0x"
        ));
        assert!(out.contains("Current band: Evening"));
        assert!(out.contains("Slot 1: Available, Cost per hour: ₹100.00"));
        assert!(out.contains("Slot 10: Available, Cost per hour: ₹10.00"));
    }

    #[test]
    fn park_then_view() {
        let (out, facility) = session("2\n1\n1.5\n1\n0\n", 10);
        assert!(out.contains("Vehicle parked in slot 1. Total cost: ₹225.00"));
        assert!(out.contains("(Cost includes a time multiplier of 1.5 for extended hours.)"));
        assert!(out.contains("Slot 1: Occupied"));
        assert!(!facility.is_available(SlotId::new(1)).unwrap());
    }

    #[test]
    fn park_twice_and_invalid_slot() {
        let (out, _) = session("2\n3\n1\n2\n3\n1\n2\n42\n1\n0\n", 10);
        assert!(out.contains("Vehicle parked in slot 3. Total cost: ₹80.00"));
        assert!(out.contains("Slot is unavailable or invalid."));
        assert!(out.contains("Slot 42 is invalid. Choose a slot from 1 to 10."));
        assert!(!out.contains("Error:"));
    }

    #[test]
    fn free_flow() {
        let (out, facility) = session("3\n4\n2\n4\n1\n3\n4\n3\n4\n0\n", 2);
        assert!(out.contains("Slot is already free or invalid."));
        assert!(out.contains("Slot 4 is now available."));
        assert!(facility.is_available(SlotId::new(4)).unwrap());
    }

    #[test]
    fn out_of_range_slots_in_every_menu() {
        // Free slot 0, nearest from 11, park in 99.
        let (out, facility) = session("3\n0\n4\n11\n2\n99\n1\n0\n", 12);
        assert!(out.contains("Slot 0 is invalid. Choose a slot from 1 to 10."));
        assert!(out.contains("Slot 11 is invalid. Choose a slot from 1 to 10."));
        assert!(out.contains("Slot 99 is invalid. Choose a slot from 1 to 10."));
        assert_eq!(facility.registry().occupied_count(), 0);
        assert!(out.ends_with("Exiting system.\n"));
    }

    #[test]
    fn nearest_excludes_occupied() {
        // Park in 1 and 4, then ask from 1: 7 is next in slot order at 1.5.
        let (out, _) = session("2\n1\n1\n2\n4\n1\n4\n1\n0\n", 12);
        assert!(out.contains("Nearest parking slot for your location is Slot 7"));
    }

    #[test]
    fn nearest_none_available() {
        let script = "2\n1\n1\n2\n4\n1\n2\n7\n1\n2\n10\n1\n4\n1\n0\n";
        let (out, _) = session(script, 12);
        assert!(out.contains("No available parking slots."));
    }

    #[test]
    fn bad_input_recovers() {
        let (out, _) = session("abc\n9\n2\nx\n4\nfoo\n0\n", 12);
        assert_eq!(out.matches("Invalid choice! Please try again.").count(), 2);
        assert_eq!(out.matches("Invalid input! Please enter a number.").count(), 2);
        assert!(out.ends_with("Exiting system.\n"));
    }

    #[test]
    fn negative_duration_reported() {
        let (out, facility) = session("2\n5\n-1\n0\n", 12);
        assert!(out.contains("Error: Pricing error: invalid parking duration: -1 hours"));
        assert!(facility.is_available(SlotId::new(5)).unwrap());
    }
}
