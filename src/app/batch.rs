//! Non-interactive `rename` command

use std::io::{BufRead, Write};
use std::path::Path;

use super::exit_code;
use crate::action::FsMutator;
use crate::rename::{
    apply_renames, generate_preview, Matcher, PreviewSummary, RenamePreview, RenameRequest,
};
use crate::tree::DirectoryLister;

/// Output and input streams of the command
pub struct BatchIo<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    pub input: &'a mut dyn BufRead,
}

/// One diff line: marker, old name and new name
///
/// `!` conflict, `-` empty result (skipped), `=` unchanged.
pub fn diff_line(preview: &RenamePreview) -> String {
    if preview.is_empty_result() {
        format!("- {} -> (empty name, skipped)", preview.original_name)
    } else if !preview.will_change() {
        format!("= {}", preview.original_name)
    } else if preview.has_conflict {
        format!(
            "! {} -> {} (target exists)",
            preview.original_name, preview.new_name
        )
    } else {
        format!("  {} -> {}", preview.original_name, preview.new_name)
    }
}

/// Preview, confirm and apply a rename of the child folders of `dir`
///
/// Returns the process exit code.
pub fn run_batch(
    dir: &Path,
    request: &RenameRequest,
    assume_yes: bool,
    lister: &impl DirectoryLister,
    fs: &impl FsMutator,
    io: BatchIo<'_>,
) -> anyhow::Result<i32> {
    if !dir.is_dir() {
        writeln!(io.err, "Error: Not a directory: {}", dir.display())?;
        return Ok(exit_code::FAILURE);
    }

    // An invalid pattern still previews (everything unchanged)
    let matcher = Matcher::compile(&request.pattern, &request.replacement, request.mode);
    if let Some(error) = matcher.error() {
        writeln!(io.err, "Invalid pattern: {}", error)?;
    }

    let previews = generate_preview(lister, fs, dir, request);
    for preview in &previews {
        writeln!(io.out, "{}", diff_line(preview))?;
    }

    let summary = PreviewSummary::of(&previews);
    if summary.changing == 0 {
        writeln!(io.out, "Nothing to rename")?;
        return Ok(exit_code::SUCCESS);
    }

    if !assume_yes {
        write!(io.out, "Apply {} renames? [y/N] ", summary.changing)?;
        io.out.flush()?;
        let mut answer = String::new();
        io.input.read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            writeln!(io.out, "Aborted")?;
            return Ok(exit_code::SUCCESS);
        }
    }

    let outcome = apply_renames(fs, &previews);
    tracing::info!(
        dir = %dir.display(),
        successful = outcome.successful,
        failed = outcome.failed,
        skipped = outcome.skipped,
        "batch rename finished"
    );
    writeln!(
        io.out,
        "Renamed {}, failed {}, skipped {}",
        outcome.successful, outcome.failed, outcome.skipped
    )?;
    for error in &outcome.errors {
        writeln!(io.err, "  {}", error)?;
    }

    Ok(if outcome.has_errors() {
        exit_code::FAILURE
    } else {
        exit_code::SUCCESS
    })
}
