//! Print column statistics for a numeric CSV dataset.

use std::process::ExitCode;

use tablestat::{describe, io, report, Parallelism};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => {
            eprintln!("usage: describe <file.csv>");
            return ExitCode::FAILURE;
        }
    };

    let raw = match io::read_csv(&path) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let table = describe(&raw, Parallelism::from_threads(0));
    print!("{}", report::render(&table));
    ExitCode::SUCCESS
}
