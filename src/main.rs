use std::process::ExitCode;

fn main() -> ExitCode {
    codesketch::cli::run()
}
