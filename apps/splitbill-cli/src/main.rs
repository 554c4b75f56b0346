//! SplitBill CLI - split a restaurant bill fairly

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = splitbill_cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
