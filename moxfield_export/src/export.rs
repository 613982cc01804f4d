//! Writing Moxfield deck lists.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{ExportError, Result};
use crate::formatters::format_deck_list;
use crate::io::read_inventory;
use crate::models::CardRecord;

/// Writes the deck list to `path` and echoes the same text to `console`.
///
/// The text is written to a temporary file next to `path` and renamed over it
/// once complete, so a failed write never leaves a truncated deck list behind.
/// An existing file keeps its permissions and a symlinked `path` keeps
/// pointing at the updated file.
pub fn write_deck_list<W: Write>(
    path: &Path,
    cards: &[CardRecord],
    console: &mut W,
) -> Result<()> {
    let deck_list = format_deck_list(cards);
    let write_err = |source: std::io::Error| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_output_target(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".moxfield");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Masked by the process umask, same as a plain file create.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(write_err)?;
    if let Ok(existing) = fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }

    debug!("Staging deck list in {}", tmp.path().display());
    tmp.write_all(deck_list.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(&target).map_err(|e| write_err(e.error))?;

    info!(
        "Copy the following text to Moxfield or import {}",
        path.display()
    );
    console
        .write_all(deck_list.as_bytes())
        .and_then(|()| console.flush())
        .map_err(ExportError::Console)?;

    Ok(())
}

/// Follows a symlinked output path to the file it points at, including a
/// dangling link whose target does not exist yet.
fn resolve_output_target(path: &Path) -> PathBuf {
    if let Ok(real) = fs::canonicalize(path) {
        return real;
    }
    match fs::read_link(path) {
        Ok(link) if link.is_relative() => match path.parent() {
            Some(parent) => parent.join(link),
            None => link,
        },
        Ok(link) => link,
        Err(_) => path.to_path_buf(),
    }
}

/// Converts a scanner export into a Moxfield deck list.
///
/// The input is read and validated completely before the output is touched.
/// Returns the number of deck list lines written.
pub fn convert<W: Write>(input: &Path, output: &Path, console: &mut W) -> Result<usize> {
    let cards = read_inventory(input)?;
    write_deck_list(output, &cards, console)?;
    info!("Wrote {} cards to {}", cards.len(), output.display());
    Ok(cards.len())
}
