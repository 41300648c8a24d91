//! The register file.
//!
//! Four signed integer slots, all zero on creation. Slot 0 doubles as the
//! instruction pointer mirror; the execution loop copies the pointer into
//! it at the start of each cycle and reads it back after write-back.

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Number of registers.
pub const REGISTER_COUNT: usize = 4;

/// Index of the register aliased to the instruction pointer.
pub const IP_REGISTER: usize = 0;

/// The register file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registers {
    slots: [i32; REGISTER_COUNT],
}

impl Registers {
    /// Create a new register file with all values zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all registers to zero.
    pub fn reset(&mut self) {
        self.slots = [0; REGISTER_COUNT];
    }

    /// Read register `index`.
    ///
    /// Returns [`RegisterError::IndexOutOfRange`] if `index` is not in `0..4`.
    pub fn get(&self, index: i32) -> Result<i32, RegisterError> {
        Self::slot(index).map(|i| self.slots[i])
    }

    /// Write register `index`.
    pub fn set(&mut self, index: i32, value: i32) -> Result<(), RegisterError> {
        let i = Self::slot(index)?;
        self.slots[i] = value;
        Ok(())
    }

    /// Value of the instruction pointer mirror.
    pub fn ip(&self) -> i32 {
        self.slots[IP_REGISTER]
    }

    /// Store the instruction pointer into its mirror register.
    pub fn sync_ip(&mut self, ip: i32) {
        self.slots[IP_REGISTER] = ip;
    }

    /// Snapshot of all four registers.
    pub fn values(&self) -> [i32; REGISTER_COUNT] {
        self.slots
    }

    fn slot(index: i32) -> Result<usize, RegisterError> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < REGISTER_COUNT)
            .ok_or(RegisterError::IndexOutOfRange { index })
    }
}

impl From<[i32; REGISTER_COUNT]> for Registers {
    fn from(slots: [i32; REGISTER_COUNT]) -> Self {
        Self { slots }
    }
}

impl std::fmt::Display for Registers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r0, r1, r2, r3] = self.slots;
        write!(f, "{} {} {} {}", r0, r1, r2, r3)
    }
}

/// Errors raised by register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("register index {index} out of range (0 to 3)")]
    IndexOutOfRange { index: i32 },
}
