//! `wheelhouse completions <shell>`.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

pub fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "wheelhouse", &mut std::io::stdout());
}
