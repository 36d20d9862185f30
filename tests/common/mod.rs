use assert_cmd::Command;

pub fn journali_cmd() -> Command {
    let mut cmd = Command::cargo_bin("journali").unwrap();
    cmd.env_remove("JOURNALI_CONFIG_DIR");
    cmd.env_remove("RUST_LOG");
    cmd
}
