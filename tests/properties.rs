//! Property tests for the interpreter.

use proptest::prelude::*;
use quadreg::cpu::decode::{decode, AddrMode, Operation};
use quadreg::cpu::execute::resolve;
use quadreg::{Cpu, CpuState, Instruction, Program, Registers};

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Mul),
        Just(Operation::Copy),
        Just(Operation::GreaterThan),
        Just(Operation::Equal),
    ]
}

/// Instructions that never write register 0, so the pointer only moves forward.
fn forward_instruction() -> impl Strategy<Value = Instruction> {
    (-1i32..14, -1i32..6, -1i32..6, 1i32..4)
        .prop_map(|(opcode, a, b, c)| Instruction::new(opcode, a, b, c))
}

/// Any instruction, including writes to register 0 that move the pointer.
fn jumping_instruction() -> impl Strategy<Value = Instruction> {
    (-1i32..14, -3i32..6, -3i32..6, 0i32..4)
        .prop_map(|(opcode, a, b, c)| Instruction::new(opcode, a, b, c))
}

/// Cycle cap for programs that may loop forever.
const MAX_STEPS: usize = 256;

proptest! {
    #[test]
    fn comparisons_are_boolean(v1 in any::<i32>(), v2 in any::<i32>()) {
        prop_assert!(matches!(Operation::GreaterThan.apply(v1, v2), 0 | 1));
        prop_assert!(matches!(Operation::Equal.apply(v1, v2), 0 | 1));
    }

    #[test]
    fn copy_yields_second_value(v1 in any::<i32>(), v2 in any::<i32>()) {
        prop_assert_eq!(Operation::Copy.apply(v1, v2), v2);
    }

    #[test]
    fn arithmetic_never_panics(op in operation(), v1 in any::<i32>(), v2 in any::<i32>()) {
        let _ = op.apply(v1, v2);
    }

    #[test]
    fn resolve_follows_mode(
        regs in any::<[i32; 4]>(),
        opcode in 0i32..12,
        a in 0i32..4,
        b in 0i32..4,
    ) {
        let regs = Registers::from(regs);
        let (_, mode) = decode(opcode).unwrap();
        let (v1, v2) = resolve(&regs, mode, a, b).unwrap();

        let (e1, e2) = match mode {
            AddrMode::RegReg => (regs.get(a).unwrap(), regs.get(b).unwrap()),
            AddrMode::RegImm => (regs.get(a).unwrap(), b),
            AddrMode::ImmReg => (a, regs.get(b).unwrap()),
        };
        prop_assert_eq!((v1, v2), (e1, e2));
    }

    #[test]
    fn register_zero_tracks_pointer(instrs in prop::collection::vec(forward_instruction(), 0..16)) {
        let mut cpu = Cpu::with_program(Program::new(instrs));

        while cpu.is_running() {
            let ip = cpu.ip();
            match cpu.step() {
                Ok(Some(_)) => prop_assert_eq!(cpu.registers()[0].wrapping_add(1), cpu.ip()),
                Ok(None) => prop_assert_eq!(cpu.state(), CpuState::Halted),
                Err(_) => {
                    prop_assert_eq!(cpu.state(), CpuState::Faulted);
                    prop_assert_eq!(cpu.registers()[0], ip);
                }
            }
        }
    }

    #[test]
    fn register_zero_tracks_pointer_through_jumps(
        instrs in prop::collection::vec(jumping_instruction(), 1..12),
    ) {
        let mut cpu = Cpu::with_program(Program::new(instrs));

        for _ in 0..MAX_STEPS {
            if !cpu.is_running() {
                break;
            }

            let ip = cpu.ip();
            match cpu.step() {
                Ok(Some(instr)) => {
                    // Unless the instruction targeted register 0, it still
                    // holds the pointer the cycle started with.
                    if instr.c != 0 || decode(instr.opcode).is_err() {
                        prop_assert_eq!(cpu.registers()[0], ip);
                    }
                    prop_assert_eq!(cpu.registers()[0].wrapping_add(1), cpu.ip());
                }
                Ok(None) => {
                    prop_assert_eq!(cpu.state(), CpuState::Halted);
                    prop_assert!(ip < 0 || ip as usize >= cpu.program().len());
                }
                Err(_) => {
                    prop_assert_eq!(cpu.state(), CpuState::Faulted);
                    prop_assert_eq!(cpu.registers()[0], ip);
                }
            }
        }
    }

    #[test]
    fn runs_are_deterministic(instrs in prop::collection::vec(forward_instruction(), 0..16)) {
        let program = Program::new(instrs);

        let mut first = Cpu::with_program(program.clone());
        let first_result = first.run();
        let mut second = Cpu::with_program(program);
        let second_result = second.run();

        prop_assert_eq!(first_result, second_result);
        prop_assert_eq!(first.registers(), second.registers());
        prop_assert_eq!(first.state(), second.state());
    }
}
