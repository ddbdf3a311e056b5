use std::process::ExitCode;

fn main() -> ExitCode {
    kat_harness::cli::main_entry()
}
