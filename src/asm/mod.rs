//! Program text handling.
//!
//! This module provides:
//! - A line-oriented program reader (text → [`Program`](crate::cpu::Program))
//! - A disassembler (instructions → readable text)

pub mod loader;
pub mod disasm;

pub use loader::{read_program, parse_program, load_program, ProgramError};
pub use disasm::disassemble;
