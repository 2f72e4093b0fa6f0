//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Write the completion script for `cmd` under its own binary name.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut cmd = Command::new("phonegen").arg(clap::Arg::new("ddd").long("ddd"));
        let mut buf = Vec::new();
        generate_completion(&mut cmd, shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_script_uses_command_name() {
        let bash = script(Shell::Bash);
        assert!(bash.contains("phonegen"));
        assert!(bash.contains("--ddd"));
    }

    #[test]
    fn name_follows_the_command() {
        let mut cmd = Command::new("numgen");
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Fish, &mut buf);
        let fish = String::from_utf8(buf).unwrap();
        assert!(fish.contains("numgen"));
        assert!(!fish.contains("phonegen"));
    }
}
