//! HelloAI demo server binary.
//! Run with: cargo run --bin helloai-server

use std::process::ExitCode;

use helloai::start_helloai;

fn main() -> ExitCode {
    start_helloai::run()
}
