//! Common utilities for integration tests

use assert_cmd::Command;

pub fn monopack_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_monopack"))
}
