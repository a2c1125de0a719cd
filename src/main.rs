use std::io;

use anyhow::Context as _;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    bikeshare_explorer::session::run_session(&mut stdin.lock(), &mut stdout.lock(), ".")
        .context("bikeshare session failed")
}
