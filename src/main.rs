/*
 * Command line frontend: load a binary image, run it until it halts then
 * print the screen and the registers.
 */
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use ansi_term::Colour;
use anyhow::Context;
use clap::Parser;

use softz8::{
    disassemble, read_image, AppResult, Config, Emulator, NullRenderer, Renderer, Step,
    TerminalRenderer,
};

/// 8 bits Z80 flavoured CPU interpreter
/// Runs a raw binary loaded at address 0 until it reaches HALT, displaying
/// a memory mapped text screen along the way.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CommandLineArguments {
    /// Binary image to execute
    binary: PathBuf,

    /// Configuration file (RamSize, VideoStart, ScreenWidth, ScreenHeight)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every executed instruction on standard error
    #[arg(short, long)]
    trace: bool,

    /// Print a listing of the binary instead of running it
    #[arg(short, long)]
    disassemble: bool,

    /// Only display the screen once the program halts
    #[arg(long)]
    no_render: bool,
}

// `-config` is the historical spelling of the option.
fn normalise_arguments<I: IntoIterator<Item = OsString>>(arguments: I) -> Vec<OsString> {
    arguments
        .into_iter()
        .map(|argument| {
            if argument == "-config" {
                OsString::from("--config")
            } else {
                argument
            }
        })
        .collect()
}

fn report_step(step: &Step, trace: bool) {
    match step {
        Step::Executed(log_line) if trace => eprintln!("{}", log_line),
        Step::Executed(_) => {}
        Step::Skipped { address, opcode } => eprintln!(
            "{}",
            Colour::Yellow.paint(format!("Error>> Unknown opcode {:02X} at {:04X}", opcode, address))
        ),
    }
}

fn execute(arguments: CommandLineArguments) -> AppResult<()> {
    let config = match &arguments.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let mut emulator = Emulator::new(&config).context("could not set up the machine")?;
    let image = read_image(&arguments.binary)?;
    let loaded = emulator.load(&image);
    if loaded < image.len() {
        eprintln!(
            "{}",
            Colour::Yellow.paint(format!(
                "Warning>> image truncated to {} bytes out of {}",
                loaded,
                image.len()
            ))
        );
    }

    if arguments.disassemble {
        for line in disassemble(0x0000, loaded, &emulator.memory)? {
            println!("{}", line);
        }
        return Ok(());
    }

    let trace = arguments.trace;
    let mut terminal = TerminalRenderer::new(io::stdout());
    if arguments.no_render {
        emulator.run(&mut NullRenderer, |step| report_step(step, trace))?;
        terminal.render(&emulator.video()?)?;
    } else {
        emulator.run(&mut terminal, |step| report_step(step, trace))?;
    }

    println!("> Exit registers");
    println!("{}", emulator.registers.format_exit_registers());

    Ok(())
}

fn main() -> ExitCode {
    let arguments = CommandLineArguments::parse_from(normalise_arguments(std::env::args_os()));

    match execute(arguments) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", Colour::Red.paint(format!("Error>> {:#}", e)));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(arguments: &[&str]) -> CommandLineArguments {
        CommandLineArguments::parse_from(normalise_arguments(arguments.iter().map(OsString::from)))
    }

    #[test]
    fn test_legacy_config_option() {
        let arguments = parse(&["softz8", "prog.bin", "-config", "machine.cfg"]);
        assert_eq!(PathBuf::from("prog.bin"), arguments.binary);
        assert_eq!(Some(PathBuf::from("machine.cfg")), arguments.config);
    }

    #[test]
    fn test_options() {
        let arguments = parse(&["softz8", "-c", "machine.cfg", "--trace", "--no-render", "prog.bin"]);
        assert_eq!(Some(PathBuf::from("machine.cfg")), arguments.config);
        assert!(arguments.trace);
        assert!(arguments.no_render);
        assert!(!arguments.disassemble);
    }

    #[test]
    fn test_no_config() {
        let arguments = parse(&["softz8", "prog.bin"]);
        assert_eq!(None, arguments.config);
    }
}
