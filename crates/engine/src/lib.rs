//! In-memory ledger for a single parking lot.
//!
//! The engine tracks currently parked vehicles by canonical license plate,
//! computes the fee owed when a vehicle leaves, and enumerates occupants in
//! insertion order. It performs no I/O; callers (the operator console, a
//! test driver) pass raw user text in and render the structured results.
pub use error::EngineError;
pub use money::MoneyCents;
pub use plate::Plate;

mod error;
mod money;
mod plate;
mod util;

type ResultEngine<T> = Result<T, EngineError>;

/// The outcome of releasing a vehicle: who left and what they owe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub plate: Plate,
    pub hours: u32,
    pub amount_due: MoneyCents,
}

/// The parking lot ledger.
///
/// Holds the two fee parameters and the ordered sequence of parked plates.
/// Fees are fixed at construction; the plate sequence changes only through
/// [`admit`] and [`release`], and only on their success paths.
///
/// Each plate is either absent or parked, nothing in between. Uniqueness is
/// case-insensitive: plates are stored canonically uppercase and compared in
/// that form.
///
/// [`admit`]: Ledger::admit
/// [`release`]: Ledger::release
#[derive(Debug)]
pub struct Ledger {
    entry_fee: MoneyCents,
    hourly_fee: MoneyCents,
    parked: Vec<Plate>,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    /// Flat fee charged once per release.
    #[must_use]
    pub fn entry_fee(&self) -> MoneyCents {
        self.entry_fee
    }

    /// Fee charged per whole parked hour.
    #[must_use]
    pub fn hourly_fee(&self) -> MoneyCents {
        self.hourly_fee
    }

    /// Admits a vehicle into the lot.
    ///
    /// The raw plate is validated and canonicalized; a case-insensitive
    /// duplicate of an already-parked plate is rejected. On success the
    /// canonical plate is appended at the end of the listing order.
    pub fn admit(&mut self, raw_plate: &str) -> ResultEngine<&Plate> {
        let plate = Plate::parse(raw_plate)?;
        if self.position(&plate).is_some() {
            return Err(EngineError::PlateAlreadyParked(plate.to_string()));
        }

        self.parked.push(plate);
        Ok(&self.parked[self.parked.len() - 1])
    }

    /// Releases a vehicle and computes the amount due.
    ///
    /// `amount_due = entry_fee + hourly_fee * hours`, with overflow-checked
    /// arithmetic. The hours text is parsed only after the plate is found,
    /// and the vehicle stays parked on every failure path; the sequence is
    /// mutated only once a receipt is certain.
    pub fn release(&mut self, raw_plate: &str, raw_hours: &str) -> ResultEngine<Receipt> {
        let plate = Plate::parse(raw_plate)?;
        let index = self
            .position(&plate)
            .ok_or_else(|| EngineError::PlateNotFound(plate.to_string()))?;

        let hours = util::parse_hours(raw_hours)?;
        let amount_due = self
            .hourly_fee
            .checked_mul_hours(hours)
            .and_then(|hourly| self.entry_fee.checked_add(hourly))
            .ok_or_else(|| {
                EngineError::InvalidHours(format!("fee for {hours} hours is too large"))
            })?;

        let plate = self.parked.remove(index);
        Ok(Receipt {
            plate,
            hours,
            amount_due,
        })
    }

    /// Returns whether a vehicle with this plate is currently parked.
    ///
    /// The raw plate goes through the same validation as [`admit`], so blank
    /// input is an error rather than a `false`.
    ///
    /// [`admit`]: Ledger::admit
    pub fn contains(&self, raw_plate: &str) -> ResultEngine<bool> {
        let plate = Plate::parse(raw_plate)?;
        Ok(self.position(&plate).is_some())
    }

    /// Enumerates parked vehicles as `(slot, plate)` pairs.
    ///
    /// Slots are 1-based positions in insertion order. The iterator borrows
    /// the ledger; re-querying after a mutation reflects the current state.
    pub fn parked(&self) -> impl Iterator<Item = (usize, &Plate)> {
        self.parked.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    /// Returns `true` when no vehicle is parked.
    ///
    /// Callers presenting the listing should branch on this rather than
    /// iterate zero times, so an empty lot gets its own message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parked.is_empty()
    }

    /// Number of currently parked vehicles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parked.len()
    }

    // Linear scan is enough for a single lot; both sides are canonical.
    fn position(&self, plate: &Plate) -> Option<usize> {
        self.parked.iter().position(|parked| parked == plate)
    }
}

/// The builder for `Ledger`
#[derive(Default)]
pub struct LedgerBuilder {
    entry_fee: MoneyCents,
    hourly_fee: MoneyCents,
}

impl LedgerBuilder {
    /// Pass the flat fee charged on every exit.
    pub fn entry_fee(mut self, fee: MoneyCents) -> LedgerBuilder {
        self.entry_fee = fee;
        self
    }

    /// Pass the fee charged per whole parked hour.
    pub fn hourly_fee(mut self, fee: MoneyCents) -> LedgerBuilder {
        self.hourly_fee = fee;
        self
    }

    /// Construct `Ledger`, validating the fee parameters.
    pub fn build(self) -> ResultEngine<Ledger> {
        util::validate_fee(self.entry_fee, "entry fee")?;
        util::validate_fee(self.hourly_fee, "hourly fee")?;

        Ok(Ledger {
            entry_fee: self.entry_fee,
            hourly_fee: self.hourly_fee,
            parked: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> Ledger {
        Ledger::builder()
            .entry_fee(MoneyCents::new(500))
            .hourly_fee(MoneyCents::new(200))
            .build()
            .unwrap()
    }

    #[test]
    fn admit_stores_canonical_plate() {
        let mut lot = ledger();
        let plate = lot.admit("abc123").unwrap();

        assert_eq!(plate.as_str(), "ABC123");
        assert_eq!(lot.len(), 1);
    }

    #[test]
    fn release_computes_fee_and_frees_slot() {
        let mut lot = ledger();
        lot.admit("xyz0001").unwrap();

        let receipt = lot.release("XYZ0001", "3").unwrap();

        assert_eq!(receipt.plate.as_str(), "XYZ0001");
        assert_eq!(receipt.hours, 3);
        assert_eq!(receipt.amount_due, MoneyCents::new(1100));
        assert!(lot.is_empty());
    }

    #[test]
    fn bad_hours_leaves_vehicle_parked() {
        let mut lot = ledger();
        lot.admit("AAA1111").unwrap();

        let err = lot.release("AAA1111", "abc").unwrap_err();

        assert!(matches!(err, EngineError::InvalidHours(_)));
        assert_eq!(lot.len(), 1);
    }

    #[test]
    #[should_panic(expected = "PlateAlreadyParked")]
    fn fail_admit_twice() {
        let mut lot = ledger();
        lot.admit("abc123").unwrap();
        lot.admit("ABC123").unwrap();
    }

    #[test]
    #[should_panic(expected = "PlateNotFound")]
    fn fail_release_unknown() {
        let mut lot = ledger();
        lot.release("GHOST", "1").unwrap();
    }

    #[test]
    fn builder_rejects_negative_fee() {
        let err = Ledger::builder()
            .entry_fee(MoneyCents::new(-500))
            .hourly_fee(MoneyCents::new(200))
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            EngineError::InvalidAmount("entry fee must not be negative".to_string())
        );
    }
}
