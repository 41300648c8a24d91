//! Instruction decoder for the four-register machine.
//!
//! Every instruction is four integers `(opcode, A, B, C)`. The opcode picks
//! one of twelve mnemonics, and each mnemonic maps to a fixed pair of
//! logical operation and addressing mode.

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Operand addressing mode.
///
/// Decides which of the A and B fields are register indices and which are
/// literal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddrMode {
    /// Both A and B name registers.
    RegReg,
    /// A names a register, B is a literal.
    RegImm,
    /// A is a literal, B names a register.
    ImmReg,
}

/// Logical operation performed on the resolved operand pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Mul,
    /// Yields the second resolved value.
    Copy,
    GreaterThan,
    Equal,
}

impl Operation {
    /// Compute the result scalar for a resolved `(v1, v2)` pair.
    ///
    /// Arithmetic wraps at 32 bits. Comparisons always yield 0 or 1.
    pub fn apply(self, v1: i32, v2: i32) -> i32 {
        match self {
            Operation::Add => v1.wrapping_add(v2),
            Operation::Mul => v1.wrapping_mul(v2),
            Operation::Copy => v2,
            Operation::GreaterThan => i32::from(v1 > v2),
            Operation::Equal => i32::from(v1 == v2),
        }
    }
}

/// The twelve instruction mnemonics, in ordinal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    Addr,
    Addi,
    Mulr,
    Muli,
    Setr,
    Seti,
    Gtir,
    Gtri,
    Gtrr,
    Eqir,
    Eqri,
    Eqrr,
}

/// Decode table indexed by opcode ordinal.
const DECODE_TABLE: [(Opcode, Operation, AddrMode); 12] = [
    (Opcode::Addr, Operation::Add, AddrMode::RegReg),
    (Opcode::Addi, Operation::Add, AddrMode::RegImm),
    (Opcode::Mulr, Operation::Mul, AddrMode::RegReg),
    (Opcode::Muli, Operation::Mul, AddrMode::RegImm),
    // setr/seti copy the second resolved value, so setr takes the raw B
    // field and seti reads register B.
    (Opcode::Setr, Operation::Copy, AddrMode::RegImm),
    (Opcode::Seti, Operation::Copy, AddrMode::ImmReg),
    (Opcode::Gtir, Operation::GreaterThan, AddrMode::ImmReg),
    (Opcode::Gtri, Operation::GreaterThan, AddrMode::RegImm),
    (Opcode::Gtrr, Operation::GreaterThan, AddrMode::RegReg),
    (Opcode::Eqir, Operation::Equal, AddrMode::ImmReg),
    (Opcode::Eqri, Operation::Equal, AddrMode::RegImm),
    (Opcode::Eqrr, Operation::Equal, AddrMode::RegReg),
];

impl Opcode {
    /// All opcodes in ordinal order.
    pub const ALL: [Opcode; 12] = [
        Opcode::Addr, Opcode::Addi, Opcode::Mulr, Opcode::Muli,
        Opcode::Setr, Opcode::Seti, Opcode::Gtir, Opcode::Gtri,
        Opcode::Gtrr, Opcode::Eqir, Opcode::Eqri, Opcode::Eqrr,
    ];

    /// Look up an opcode by its ordinal.
    pub fn from_ordinal(ordinal: i32) -> Result<Self, DecodeError> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| DECODE_TABLE.get(i))
            .map(|&(op, _, _)| op)
            .ok_or(DecodeError::UnknownOpcode(ordinal))
    }

    /// Ordinal of this opcode.
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// Lowercase mnemonic, e.g. `addi`.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Addr => "addr",
            Opcode::Addi => "addi",
            Opcode::Mulr => "mulr",
            Opcode::Muli => "muli",
            Opcode::Setr => "setr",
            Opcode::Seti => "seti",
            Opcode::Gtir => "gtir",
            Opcode::Gtri => "gtri",
            Opcode::Gtrr => "gtrr",
            Opcode::Eqir => "eqir",
            Opcode::Eqri => "eqri",
            Opcode::Eqrr => "eqrr",
        }
    }

    /// Parse a mnemonic, ignoring case.
    pub fn from_mnemonic(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s))
    }

    /// Operation and addressing mode for this opcode.
    pub fn semantics(self) -> (Operation, AddrMode) {
        let (_, operation, mode) = DECODE_TABLE[self as usize];
        (operation, mode)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A raw instruction: `(opcode, A, B, C)`.
///
/// The opcode is kept as a raw ordinal so that programs may carry ordinals
/// outside the table; those are resolved at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: i32,
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl Instruction {
    pub const fn new(opcode: i32, a: i32, b: i32, c: i32) -> Self {
        Self { opcode, a, b, c }
    }
}

impl From<[i32; 4]> for Instruction {
    fn from([opcode, a, b, c]: [i32; 4]) -> Self {
        Self::new(opcode, a, b, c)
    }
}

/// Map an opcode ordinal to its `(operation, mode)` pair.
pub fn decode(ordinal: i32) -> Result<(Operation, AddrMode), DecodeError> {
    Opcode::from_ordinal(ordinal).map(Opcode::semantics)
}

/// Errors that can occur during instruction decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown opcode: {0}")]
    UnknownOpcode(i32),
}
