use std::process::Command;

/// Create a new sesame CLI command
///
/// `RUST_LOG` and `SESAME_SERVER` are cleared so the host environment does not leak into tests.
pub fn sesame() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_sesame"));
    command.env_remove("RUST_LOG").env_remove("SESAME_SERVER");
    command
}
