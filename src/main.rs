//! quadreg - CLI Entry Point
//!
//! Commands:
//! - `quadreg [run] [program]` - Read a program (file or stdin) and run it
//! - `quadreg disasm [program]` - Print a program with mnemonics

use clap::{Parser, Subcommand};
use quadreg::{Cpu, CpuError, Program, ProgramError, RunReport};
use quadreg::asm::disasm::disassemble_instruction;

#[derive(Parser)]
#[command(name = "quadreg")]
#[command(version)]
#[command(about = "Interpreter for a four-register machine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a program until it halts
    Run {
        /// Path to the program file (reads stdin if omitted)
        program: Option<String>,
        /// Print each executed instruction to stderr
        #[arg(short, long)]
        trace: bool,
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Disassemble a program to readable text
    Disasm {
        /// Path to the program file (reads stdin if omitted)
        program: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { program, trace, json }) => {
            run_program(program.as_deref(), trace, json);
        }
        Some(Commands::Disasm { program }) => {
            disassemble_file(program.as_deref());
        }
        None => {
            run_program(None, false, false);
        }
    }
}

fn read_input(path: Option<&str>) -> Result<Program, ProgramError> {
    match path {
        Some(path) => quadreg::load_program(path),
        None => quadreg::read_program(std::io::stdin().lock()),
    }
}

fn load_or_exit(path: Option<&str>) -> Program {
    match read_input(path) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Failed to read program: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_program(path: Option<&str>, trace: bool, json: bool) {
    let mut cpu = Cpu::with_program(load_or_exit(path));

    let report = if trace {
        let result = run_traced(&mut cpu);
        RunReport::capture(&cpu, &result)
    } else {
        quadreg::run_to_report(&mut cpu)
    };

    // Nothing was read, so nothing is reported.
    let Some(report) = report else {
        return;
    };

    if json {
        match report.to_json() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Failed to encode report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", report.to_text());
    }
}

fn run_traced(cpu: &mut Cpu) -> Result<u64, CpuError> {
    let mut cycles = 0u64;

    while cpu.is_running() {
        let ip = cpu.ip();
        if let Some(instr) = cpu.step()? {
            eprintln!("{:03}: {:<24} regs={:?}", ip, disassemble_instruction(&instr), cpu.registers());
            cycles += 1;
        }
    }

    Ok(cycles)
}

fn disassemble_file(path: Option<&str>) {
    let program = load_or_exit(path);
    print!("{}", quadreg::disassemble(&program));
}
