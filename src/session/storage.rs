use super::document::BoardDocument;
use super::error::BoardFileError;
use fs2::FileExt;
use log::{debug, info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Summary information about a board file, for CLI reporting.
#[derive(Debug, Clone)]
pub struct BoardInspection {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub modified: Option<SystemTime>,
    pub notes: usize,
    pub lines: usize,
}

/// Writes the document to `path`, replacing any existing file.
///
/// Writers serialize on an exclusive lock of the board's sibling lock file.
/// The payload goes to a temporary sibling and is renamed into place only once
/// fully written, so a failed save never leaves a truncated board behind.
pub fn save_board(path: &Path, document: &BoardDocument) -> Result<(), BoardFileError> {
    let json_bytes = document.to_json_pretty()?;
    let write_err = |source| BoardFileError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let lock_path = lock_file_path(path);
    let lock_file = open_lock_file(&lock_path).map_err(write_err)?;
    lock_file.lock_exclusive().map_err(write_err)?;

    let result = save_board_inner(path, &json_bytes);

    release_lock(&lock_file, &lock_path);
    result.map_err(write_err)?;

    info!(
        "Board saved to {} ({} notes, {} lines, {} bytes)",
        path.display(),
        document.notes.len(),
        document.lines.len(),
        json_bytes.len()
    );
    Ok(())
}

fn save_board_inner(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp_path = temp_path(path);
    let result = write_synced(&tmp_path, bytes).and_then(|()| fs::rename(&tmp_path, path));
    if result.is_err() && tmp_path.exists() {
        fs::remove_file(&tmp_path).unwrap_or_else(|rm_err| {
            warn!(
                "failed to remove temporary board file {}: {}",
                tmp_path.display(),
                rm_err
            )
        });
    }
    result
}

/// Reads and parses the board stored at `path`.
pub fn load_board(path: &Path) -> Result<BoardDocument, BoardFileError> {
    let bytes = read_locked(path).map_err(|source| BoardFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document =
        BoardDocument::from_json_slice(&bytes).map_err(|source| BoardFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "Parsed board {} ({} notes, {} lines)",
        path.display(),
        document.notes.len(),
        document.lines.len()
    );
    Ok(document)
}

/// Loads a board file and reports what it contains.
pub fn inspect_board(path: &Path) -> Result<BoardInspection, BoardFileError> {
    let metadata = fs::metadata(path).map_err(|source| BoardFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = load_board(path)?;

    Ok(BoardInspection {
        path: path.to_path_buf(),
        size_bytes: metadata.len(),
        modified: metadata.modified().ok(),
        notes: document.notes.len(),
        lines: document.lines.len(),
    })
}

/// Lock file guarding a board: `.<name>.lock` next to it.
pub(crate) fn lock_file_path(target: &Path) -> PathBuf {
    target.with_file_name(format!(".{}.lock", board_file_name(target)))
}

fn open_lock_file(lock_path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)
}

fn release_lock(lock_file: &File, lock_path: &Path) {
    FileExt::unlock(lock_file).unwrap_or_else(|err| {
        warn!("failed to unlock board file {}: {}", lock_path.display(), err)
    });
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Reads a board under a shared lock so a concurrent save is never observed
/// half-way. Boards in read-only directories are read without the lock.
fn read_locked(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path)?;

    let lock_path = lock_file_path(path);
    let lock_file = match open_lock_file(&lock_path) {
        Ok(lock_file) => {
            FileExt::lock_shared(&lock_file)?;
            Some(lock_file)
        }
        Err(err) => {
            debug!(
                "reading {} without lock ({}): {}",
                path.display(),
                lock_path.display(),
                err
            );
            None
        }
    };

    let mut bytes = Vec::new();
    let result = file.read_to_end(&mut bytes);

    if let Some(lock_file) = &lock_file {
        release_lock(lock_file, &lock_path);
    }
    result.map(|_| bytes)
}

fn board_file_name(target: &Path) -> String {
    target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "board".to_string())
}

fn temp_path(target: &Path) -> PathBuf {
    let file_name = board_file_name(target);
    let mut candidate = target.with_file_name(format!(".{file_name}.tmp"));
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_file_name(format!(".{file_name}.tmp{counter}"));
    }
    candidate
}
