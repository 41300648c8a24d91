//! End-to-end runs: program text in, register report out.

use quadreg::{parse_program, run_to_report, Cpu, CpuState};

fn run_text(source: &str) -> String {
    let program = parse_program(source).unwrap();
    run_to_report(&mut Cpu::with_program(program))
        .map(|report| report.to_text())
        .unwrap_or_default()
}

#[test]
fn test_empty_program_prints_nothing() {
    assert_eq!(run_text(""), "");
    assert_eq!(run_text("run\n"), "");
    assert_eq!(run_text("; comment only\nrun\n1 0 5 1\n"), "");
}

#[test]
fn test_single_addi() {
    assert_eq!(run_text("1 0 5 1\nrun\n"), "-------------------------\n0 5 0 0\n");
}

#[test]
fn test_fault_still_dumps_registers() {
    let output = run_text("0 0 5 1\nrun\n");

    assert_eq!(
        output,
        "-------------------------\n\
         Program halted: Instruction pointer out of bounds\n\
         -------------------------\n\
         0 0 0 0\n"
    );
}

#[test]
fn test_counting_loop() {
    // r1 counts up to 5, looping back by rewriting the pointer.
    let source = r#"
        addi 1 1 1
        eqri 1 5 2
        addr 2 0 0
        setr 0 -1 0
        run
    "#;
    let program = parse_program(source).unwrap();
    let mut cpu = Cpu::with_program(program);

    let report = run_to_report(&mut cpu).unwrap();

    assert_eq!(cpu.state(), CpuState::Halted);
    assert_eq!(report.registers, [3, 5, 1, 0]);
    assert_eq!(report.cycles, 19);
}

#[test]
fn test_trailing_lines_after_run_are_ignored() {
    let output = run_text("addi 0 3 2\nrun\n0 0 9 9\n");
    assert_eq!(output, "-------------------------\n0 0 3 0\n");
}
