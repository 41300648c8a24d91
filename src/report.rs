//! Final register report.
//!
//! Formats the outcome of a run either as the plain text dump or as JSON.

use crate::cpu::{Cpu, CpuError, CpuState};
use serde::{Serialize, Deserialize};

/// Separator line printed before the halt notice and the register dump.
pub const SEPARATOR: &str = "-------------------------";

/// Notice printed when a run ends in a fault.
pub const HALT_NOTICE: &str = "Program halted: Instruction pointer out of bounds";

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub state: CpuState,
    pub cycles: u64,
    pub registers: [i32; 4],
    /// Fault message, if the run faulted.
    pub fault: Option<String>,
}

impl RunReport {
    /// Capture the state of a CPU after a run.
    ///
    /// Returns `None` when the CPU holds no instructions; an empty program
    /// produces no report at all.
    pub fn capture(cpu: &Cpu, result: &Result<u64, CpuError>) -> Option<Self> {
        if cpu.program().is_empty() {
            return None;
        }

        Some(Self {
            state: cpu.state(),
            cycles: cpu.cycles(),
            registers: cpu.registers(),
            fault: result.as_ref().err().map(|e| e.to_string()),
        })
    }

    pub fn is_fault(&self) -> bool {
        self.fault.is_some()
    }

    /// Plain text rendering, one line per entry.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        if self.is_fault() {
            out.push_str(SEPARATOR);
            out.push('\n');
            out.push_str(HALT_NOTICE);
            out.push('\n');
        }

        let [r0, r1, r2, r3] = self.registers;
        out.push_str(&format!("{}\n{} {} {} {}\n", SEPARATOR, r0, r1, r2, r3));
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Run `cpu` to completion and capture the outcome.
///
/// An empty program is not run and yields `None`.
pub fn run_to_report(cpu: &mut Cpu) -> Option<RunReport> {
    if cpu.program().is_empty() {
        return None;
    }

    let result = cpu.run();
    RunReport::capture(cpu, &result)
}
