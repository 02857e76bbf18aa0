use assert_cmd::Command;

pub fn moodrise_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodrise").unwrap();
    cmd.env_remove("MOODRISE_ROOT");
    cmd
}
