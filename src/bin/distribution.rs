//! Print per-group bucket frequencies for every feature column.

use std::process::ExitCode;

use tablestat::{group_distribution, io, GROUP_COLUMN};

const DEFAULT_BUCKETS: usize = 10;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: distribution <file.csv> [buckets]");
        return ExitCode::FAILURE;
    };
    let buckets = match args.next() {
        None => DEFAULT_BUCKETS,
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                eprintln!("buckets must be a positive integer, got {arg}");
                return ExitCode::FAILURE;
            }
        },
    };

    let raw = match io::read_csv(&path) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let dist = group_distribution(&raw, GROUP_COLUMN, buckets);
    for (feature, name) in dist.feature_names().iter().enumerate() {
        println!("{name}");
        for group in dist.group_names() {
            let frequencies = dist.frequencies(group, feature).unwrap_or(&[]);
            let cells: Vec<String> = frequencies.iter().map(|f| format!("{f:>6.0}")).collect();
            println!("  {:<12}{}", group, cells.join(" "));
        }
        println!();
    }
    ExitCode::SUCCESS
}
