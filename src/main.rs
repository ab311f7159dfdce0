//! renview - A terminal folder navigator with live-preview batch renaming

use std::io;
use std::path::Path;
use std::process::ExitCode;

use renview::action::LocalFs;
use renview::app::{
    exit_code, print_help, run_batch, run_browser, BatchIo, Command, Config, Settings,
    TuiFrontend,
};
use renview::core::BrowseSession;
use renview::render::Theme;
use renview::rename::RenameRequest;
use renview::tree::FsLister;

fn main() -> ExitCode {
    // Before the config so config file problems are logged
    let _log_guard = renview::app::logging::init_default();

    // Argument errors exit with INVALID
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    match &config.command {
        Command::Help => {
            print_help();
            return ExitCode::from(exit_code::SUCCESS as u8);
        }
        Command::Version => {
            println!("rv {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::from(exit_code::SUCCESS as u8);
        }
        _ => {}
    }

    let code = match config.command {
        Command::Rename {
            ref path,
            ref pattern,
            ref replacement,
            mode,
            assume_yes,
        } => {
            let request = RenameRequest::new(pattern.as_str(), replacement.as_str(), mode);
            run_rename_command(path, &request, assume_yes, &config.settings)
        }
        Command::Browse { ref root } => run_interactive(root, &config),
        Command::Help | Command::Version => Ok(exit_code::SUCCESS),
    };

    match code {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

/// Run the non-interactive `rename` command
fn run_rename_command(
    path: &Path,
    request: &RenameRequest,
    assume_yes: bool,
    settings: &Settings,
) -> anyhow::Result<i32> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let stdin = io::stdin();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let mut input = stdin.lock();
    run_batch(
        path,
        request,
        assume_yes,
        &FsLister::new(settings.show_hidden),
        &LocalFs,
        BatchIo {
            out: &mut out,
            err: &mut err,
            input: &mut input,
        },
    )
}

/// Run the interactive browser rooted at `root`
fn run_interactive(root: &Path, config: &Config) -> anyhow::Result<i32> {
    let session = BrowseSession::new(root)?;
    let lister = FsLister::new(config.settings.show_hidden);

    let mut frontend = TuiFrontend::new(Theme::from_colors(&config.theme))?;
    let result = run_browser(&mut frontend, session, &lister, &LocalFs, &config.settings);
    frontend.restore()?;

    let session = result?;
    let renamed: usize = session.renamed.iter().map(|o| o.successful).sum();
    let failed: usize = session.renamed.iter().map(|o| o.failed).sum();
    tracing::info!(renamed, failed, "session finished");
    if !session.renamed.is_empty() {
        println!("Renamed {} folders ({} failed)", renamed, failed);
    }

    Ok(exit_code::SUCCESS)
}
