//! Text program reader.
//!
//! The program format is line oriented:
//! - One instruction per line: `opcode A B C`, whitespace separated
//! - The opcode is a decimal ordinal or a mnemonic such as `addi`
//! - A line reading `run` ends the program; end of input does too
//! - Blank lines and lines starting with `;` are ignored

use crate::cpu::{Instruction, Opcode, Program};
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;

/// Line that terminates program ingestion.
pub const RUN_SENTINEL: &str = "run";

/// Read a program from any buffered reader.
pub fn read_program<R: BufRead>(reader: R) -> Result<Program, ProgramError> {
    let mut instructions = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| ProgramError::Io(e.to_string()))?;
        let trimmed = line.trim();

        if trimmed == RUN_SENTINEL {
            break;
        }

        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }

        instructions.push(parse_instruction(trimmed, line_num + 1)?);
    }

    Ok(Program::new(instructions))
}

/// Parse program text held in memory.
pub fn parse_program(source: &str) -> Result<Program, ProgramError> {
    read_program(source.as_bytes())
}

/// Load a program file from disk.
pub fn load_program<P: AsRef<Path>>(path: P) -> Result<Program, ProgramError> {
    let file = std::fs::File::open(path.as_ref())
        .map_err(|e| ProgramError::Io(e.to_string()))?;
    read_program(std::io::BufReader::new(file))
}

/// Parse a single `opcode A B C` line.
pub fn parse_instruction(line: &str, line_num: usize) -> Result<Instruction, ProgramError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let &[opcode, a, b, c] = fields.as_slice() else {
        return Err(ProgramError::Parse {
            line: line_num,
            message: format!("expected 4 fields, found {}", fields.len()),
        });
    };

    let opcode = match Opcode::from_mnemonic(opcode) {
        Some(op) => op.ordinal(),
        None => parse_field(opcode, "opcode", line_num)?,
    };

    Ok(Instruction::new(
        opcode,
        parse_field(a, "A", line_num)?,
        parse_field(b, "B", line_num)?,
        parse_field(c, "C", line_num)?,
    ))
}

fn parse_field(field: &str, name: &str, line_num: usize) -> Result<i32, ProgramError> {
    field.parse::<i32>().map_err(|_| ProgramError::Parse {
        line: line_num,
        message: format!("invalid {} field: {:?}", name, field),
    })
}

/// Errors that can occur while reading a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}
