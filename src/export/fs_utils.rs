use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check whether `path` may be created or overwritten.
///
/// Existing files need `force` or an explicit "y" on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "existing file not overwritten (use --force)".into(),
        ))
    }
}
