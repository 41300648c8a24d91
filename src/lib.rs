//! # quadreg
//!
//! An interpreter for a tiny register machine: four integer registers,
//! twelve instructions, and an instruction pointer that programs can read
//! and rewrite through register 0.

pub mod cpu;
pub mod asm;
pub mod report;

// Re-export commonly used types
pub use cpu::{Cpu, CpuState, CpuError, Registers, RegisterError, Instruction, Opcode, Program};
pub use asm::{read_program, parse_program, load_program, disassemble, ProgramError};
pub use report::{RunReport, run_to_report};
