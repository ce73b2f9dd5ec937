use std::process::ExitCode;

use testname_counter::cli;

fn main() -> ExitCode {
    cli::run()
}
