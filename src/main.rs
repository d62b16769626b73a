use std::{
    fs,
    io::{self, BufRead},
};

use clap::Parser;
use lineal::{interpreter::evaluator::core::Environment, run_line};

/// lineal is a line-oriented calculator for scalar numbers and 2-dimensional
/// vectors, with named variables that persist for a session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lineal to read statements from a file instead of the command
    /// line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// A statement to evaluate, or a path to a script when --file is given.
    /// When absent, lineal starts an interactive session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut env = Environment::new();

    let Some(contents) = args.contents else {
        run_interactive(&mut env);
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    run_script(&script, &mut env);
}

/// Reads statements from standard input until an empty line or the end of
/// the stream. Results go to standard output; an error is printed to
/// standard error and the session continues with its bindings intact.
fn run_interactive(env: &mut Environment) {
    println!("Enter an expression to evaluate, or an empty line to quit.");

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            break;
        }

        match run_line(&line, env) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}

/// Runs every non-blank line of a script against one environment, printing
/// each result on its own line. A failing line is reported to standard
/// error and does not stop the lines after it.
fn run_script(script: &str, env: &mut Environment) {
    for line in script.lines() {
        if line.trim().is_empty() {
            continue;
        }

        match run_line(line, env) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
