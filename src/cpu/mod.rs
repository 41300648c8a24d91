//! The four-register machine.
//!
//! - 4 signed integer registers, register 0 mirrors the instruction pointer
//! - 12 instructions, each a fixed (operation, addressing mode) pair
//! - Execution runs until the pointer leaves the program or a register
//!   reference is out of range

pub mod registers;
pub mod decode;
pub mod program;
pub mod execute;

pub use registers::{Registers, RegisterError};
pub use decode::{Instruction, Opcode, Operation, AddrMode, DecodeError};
pub use program::Program;
pub use execute::{Cpu, CpuError, CpuState};
