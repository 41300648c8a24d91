//! Program storage.
//!
//! A program is an immutable sequence of instructions indexed by the
//! instruction pointer.

use crate::cpu::decode::Instruction;
use serde::{Serialize, Deserialize};

/// An immutable, ordered list of instructions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Create a program from a list of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Fetch the instruction at `ip`, or `None` if the pointer lies outside
    /// the program.
    pub fn fetch(&self, ip: i32) -> Option<&Instruction> {
        usize::try_from(ip).ok().and_then(|i| self.instructions.get(i))
    }

    /// Get the number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions)
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_bounds() {
        let program: Program = [[1, 0, 5, 1], [0, 1, 1, 2]]
            .into_iter()
            .map(Instruction::from)
            .collect();

        assert_eq!(program.len(), 2);
        assert_eq!(program.fetch(1), Some(&Instruction::new(0, 1, 1, 2)));
        assert_eq!(program.fetch(2), None);
        assert_eq!(program.fetch(-1), None);
    }

    #[test]
    fn test_empty_program() {
        let program = Program::default();
        assert!(program.is_empty());
        assert_eq!(program.fetch(0), None);
    }
}
