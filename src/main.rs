//! C0lorNote bundler - packages the C0lorNote app for desktop and Android.
//!
//! This binary runs PyInstaller or Buildozer per target and collects the
//! produced executables, app bundles and APKs into stable output folders.

use colornote_bundler::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Run CLI and get exit code; logging is set up once arguments are parsed
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            cli::EXIT_FAILURE
        }
    };

    process::exit(exit_code);
}
