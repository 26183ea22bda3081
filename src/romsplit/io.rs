use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::error::RomSplitError;
use super::paths::OutputPlan;
use super::size::{RomImage, SizeError, SizeSet};
use super::transcode::Transcoded;
use crate::common::io::{open_noatime, read_to_vec};
use crate::common::io_error_msg;

/// Read a whole ROM dump into memory and check its size.
///
/// Regular files are size-checked from metadata before the body is read, so
/// an oversized dump is rejected without loading it. The byte count actually
/// read is checked again before the image is handed out.
pub fn load(path: &Path, set: SizeSet) -> Result<RomImage, RomSplitError> {
    let open_err = |source: io::Error| RomSplitError::Open {
        path: path.to_path_buf(),
        source,
    };
    let read_err = |source: io::Error| RomSplitError::Read {
        path: path.to_path_buf(),
        source,
    };
    let size_err = |source: SizeError| RomSplitError::Size {
        path: path.to_path_buf(),
        source,
    };

    let file = open_noatime(path).map_err(open_err)?;
    let metadata = file.metadata().map_err(read_err)?;

    if metadata.is_dir() {
        return Err(open_err(io::ErrorKind::IsADirectory.into()));
    }

    let hint = if metadata.is_file() {
        set.validate(metadata.len()).map_err(size_err)?;
        metadata.len() as usize
    } else {
        0
    };

    // One byte past the largest accepted size is enough to reject a stream.
    let mut reader = (&file).take(set.max() as u64 + 1);
    let data = read_to_vec(&mut reader, hint).map_err(read_err)?;

    RomImage::new(data, set).map_err(size_err)
}

/// Pair every output path with the stream that goes there.
fn assignments<'a>(plan: &'a OutputPlan, out: &'a Transcoded) -> Vec<(&'a Path, &'a [u8])> {
    match (plan, out) {
        (OutputPlan::Single(path), Transcoded::Merged(bytes)) => {
            vec![(path.as_path(), &bytes[..])]
        }
        (OutputPlan::Pair { low, high }, Transcoded::Split { low: lo, high: hi }) => {
            vec![(low.as_path(), &lo[..]), (high.as_path(), &hi[..])]
        }
        _ => unreachable!("output plan and transcoded streams disagree on mode"),
    }
}

/// Write `bytes` to a temporary file next to `path`.
fn stage(path: &Path, bytes: &[u8]) -> Result<NamedTempFile, RomSplitError> {
    let write_err = |source: io::Error| RomSplitError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".romsplit-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }

    let mut tmp = builder.tempfile_in(dir).map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    Ok(tmp)
}

/// Write every stream of `out` to its path in `plan`, all or nothing.
///
/// All outputs are staged first; only when every one of them was written
/// in full are they renamed into place. If a rename fails, outputs already
/// renamed in this call are removed again, so a failed Split run never
/// leaves one plane behind.
pub fn write_outputs(
    plan: &OutputPlan,
    out: &Transcoded,
    verbose: bool,
) -> Result<(), RomSplitError> {
    let mut staged = Vec::new();
    for (path, bytes) in assignments(plan, out) {
        if verbose {
            eprintln!("creating file '{}'", path.display());
        }
        staged.push((path, stage(path, bytes)?));
    }

    let mut committed: Vec<PathBuf> = Vec::new();
    for (path, tmp) in staged {
        if let Err(e) = tmp.persist(path) {
            for done in &committed {
                if let Err(rm) = std::fs::remove_file(done) {
                    eprintln!("cannot remove '{}': {}", done.display(), io_error_msg(&rm));
                }
            }
            return Err(RomSplitError::Write {
                path: path.to_path_buf(),
                source: e.error,
            });
        }
        committed.push(path.to_path_buf());
    }

    Ok(())
}
