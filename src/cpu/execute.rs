//! CPU execution engine.
//!
//! Implements operand resolution and the fetch-decode-execute cycle.

use crate::cpu::{Program, Registers, RegisterError};
use crate::cpu::decode::{self, AddrMode, DecodeError, Instruction};
use log::{debug, trace, warn};
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// CPU execution state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuState {
    /// CPU is running normally.
    Running,
    /// The instruction pointer left the program.
    Halted,
    /// A register reference was out of range.
    Faulted,
}

/// Resolve the operand pair for `mode` from the A and B fields.
pub fn resolve(regs: &Registers, mode: AddrMode, a: i32, b: i32) -> Result<(i32, i32), RegisterError> {
    match mode {
        AddrMode::RegReg => Ok((regs.get(a)?, regs.get(b)?)),
        AddrMode::RegImm => Ok((regs.get(a)?, b)),
        AddrMode::ImmReg => Ok((a, regs.get(b)?)),
    }
}

/// The interpreter: a register file, a program and an instruction pointer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cpu {
    /// CPU registers.
    pub regs: Registers,
    program: Program,
    ip: i32,
    state: CpuState,
    cycles: u64,
}

impl Cpu {
    /// Create a CPU with an empty program.
    pub fn new() -> Self {
        Self::with_program(Program::default())
    }

    /// Create a CPU ready to run `program`.
    pub fn with_program(program: Program) -> Self {
        Self {
            regs: Registers::new(),
            program,
            ip: 0,
            state: CpuState::Running,
            cycles: 0,
        }
    }

    /// Reset the CPU to its initial state, keeping the program.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.ip = 0;
        self.state = CpuState::Running;
        self.cycles = 0;
    }

    /// Execute a single cycle.
    ///
    /// Returns the executed instruction, or `None` if the pointer was outside
    /// the program and the CPU halted instead. On a register fault the CPU
    /// moves to [`CpuState::Faulted`] and keeps the registers as they were
    /// before the faulting write.
    pub fn step(&mut self) -> Result<Option<Instruction>, CpuError> {
        if self.state != CpuState::Running {
            return Err(CpuError::NotRunning(self.state));
        }

        // Fetch
        let Some(&instr) = self.program.fetch(self.ip) else {
            debug!("halted: ip {} outside 0..{} after {} cycles", self.ip, self.program.len(), self.cycles);
            self.state = CpuState::Halted;
            return Ok(None);
        };

        self.regs.sync_ip(self.ip);
        trace!("ip={} {:?} regs=[{}]", self.ip, instr, self.regs);

        if let Err(e) = self.execute(instr) {
            debug!("faulted at ip {}: {}", self.ip, e);
            self.state = CpuState::Faulted;
            return Err(e);
        }

        // The instruction may have written register 0 directly.
        self.ip = self.regs.ip().wrapping_add(1);
        self.cycles += 1;

        Ok(Some(instr))
    }

    /// Run until the CPU halts or faults.
    ///
    /// Returns the number of instructions executed.
    pub fn run(&mut self) -> Result<u64, CpuError> {
        let start_cycles = self.cycles;
        debug!("running {} instructions", self.program.len());

        while self.state == CpuState::Running {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Decode, resolve, apply and write back one instruction.
    fn execute(&mut self, instr: Instruction) -> Result<(), CpuError> {
        let (operation, mode) = match decode::decode(instr.opcode) {
            Ok(pair) => pair,
            Err(DecodeError::UnknownOpcode(op)) => {
                warn!("unknown opcode {} at ip {}, skipping", op, self.ip);
                return Ok(());
            }
        };

        let (v1, v2) = resolve(&self.regs, mode, instr.a, instr.b)?;
        self.regs.set(instr.c, operation.apply(v1, v2))?;

        Ok(())
    }

    /// Current instruction pointer.
    pub fn ip(&self) -> i32 {
        self.ip
    }

    /// Current execution state.
    pub fn state(&self) -> CpuState {
        self.state
    }

    /// Instructions executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Snapshot of the register values.
    pub fn registers(&self) -> [i32; 4] {
        self.regs.values()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Check if the CPU is running.
    pub fn is_running(&self) -> bool {
        self.state == CpuState::Running
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpuError {
    #[error("CPU not running: {0:?}")]
    NotRunning(CpuState),

    #[error(transparent)]
    Register(#[from] RegisterError),
}
