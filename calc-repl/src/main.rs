mod args;

use calc_compute::{evaluate_with, numerical::ctxt::Ctxt};
use calc_error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}, process::ExitCode};

/// Reports the error to stderr. If the report cannot be written, falls back to the one-line message.
fn report(err: &Error, input: &str) {
    if let Err(io_err) = err.report_to_stderr("input", input) {
        eprintln!("{}: {}", err, io_err);
    }
}

/// Evaluates the given input string, printing the result or reporting the error to stderr.
///
/// Returns true if the evaluation succeeded.
fn read_eval(input: &str, ctxt: &Ctxt) -> bool {
    match evaluate_with(input, ctxt) {
        Ok(value) => {
            println!("{}", value);
            true
        },
        Err(err) => {
            report(&err, input);
            false
        },
    }
}

/// Evaluates every non-empty line of the input. Returns true if every line succeeded.
fn eval_lines(input: &str, ctxt: &Ctxt) -> bool {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .fold(true, |ok, line| read_eval(line, ctxt) && ok)
}

/// Runs the interactive mode until the user exits.
fn repl(ctxt: &Ctxt) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;
        read_eval(&input, ctxt);
    }
}

fn main() -> ExitCode {
    let args = match args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("usage: calc-repl [--strict | --legacy] [--radians | --degrees] [FILE]");
            return ExitCode::from(2);
        },
    };

    let result = if let Some(filename) = &args.file {
        // evaluate each line of a source file
        fs::read_to_string(filename).map(|input| eval_lines(&input, &args.ctxt))
    } else if !io::stdin().is_terminal() {
        // evaluate each line of piped input
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).map(|_| eval_lines(&input, &args.ctxt))
    } else {
        // run the repl / interactive mode
        repl(&args.ctxt).map(|_| true).map_err(|err| io::Error::new(io::ErrorKind::Other, err))
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}
