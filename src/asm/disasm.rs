//! Disassembler.
//!
//! Renders instructions with their mnemonics and operand roles, e.g.
//! `addi r0 5 -> r1`.

use crate::cpu::{AddrMode, Instruction, Opcode, Program};

/// Disassemble a single instruction to text.
pub fn disassemble_instruction(instr: &Instruction) -> String {
    let Ok(opcode) = Opcode::from_ordinal(instr.opcode) else {
        return format!("??? {} {} {} {}", instr.opcode, instr.a, instr.b, instr.c);
    };

    let (_, mode) = opcode.semantics();
    let (a, b) = match mode {
        AddrMode::RegReg => (format!("r{}", instr.a), format!("r{}", instr.b)),
        AddrMode::RegImm => (format!("r{}", instr.a), instr.b.to_string()),
        AddrMode::ImmReg => (instr.a.to_string(), format!("r{}", instr.b)),
    };

    format!("{} {} {} -> r{}", opcode, a, b, instr.c)
}

/// Disassemble a whole program, one numbered line per instruction.
pub fn disassemble(program: &Program) -> String {
    let mut output = String::new();

    for (addr, instr) in program.instructions().iter().enumerate() {
        output.push_str(&format!("{:03}: {}\n", addr, disassemble_instruction(instr)));
    }

    output
}
