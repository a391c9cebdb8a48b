//! Scalex CLI
//!
//! Exit status: 0 clean, 1 lexical errors, 2 usage or I/O errors.

use scalexc::{dispatch, parse_args, tracing_setup, CliError, USAGE};

fn main() {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    // Unlocked handles: worker threads may log to stderr while we run.
    let result = parse_args(&args).and_then(|invocation| {
        dispatch(&invocation, &mut std::io::stdout(), &mut std::io::stderr())
    });

    let code = match result {
        Ok(status) => status.code(),
        Err(error) => {
            report(&error);
            2
        }
    };
    std::process::exit(code);
}

fn report(error: &CliError) {
    eprintln!("error: {error}");
    if error.is_usage() {
        eprintln!();
        eprint!("{USAGE}");
    }
}
