use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoContext, ManagerError};

/// Unpacks `archive_path` into `extract_dir`, picking the format from the
/// file extension.
pub fn extract_archive(archive_path: &Path, extract_dir: &Path) -> Result<(), ManagerError> {
    let archive_str = archive_path.to_string_lossy();

    if archive_str.ends_with(".tar.gz") || archive_str.ends_with(".tgz") {
        extract_tar_gz(archive_path, extract_dir)
    } else if archive_str.ends_with(".zip") {
        extract_zip(archive_path, extract_dir)
    } else {
        Err(ManagerError::extract(format!(
            "unsupported archive format: {}",
            archive_path.display()
        )))
    }
}

fn extract_tar_gz(archive_path: &Path, extract_dir: &Path) -> Result<(), ManagerError> {
    let file = fs::File::open(archive_path).at(archive_path)?;
    let decompressed = flate2::read::GzDecoder::new(file);
    let mut archive = tar::Archive::new(decompressed);

    archive.unpack(extract_dir).map_err(ManagerError::extract)
}

fn extract_zip(archive_path: &Path, extract_dir: &Path) -> Result<(), ManagerError> {
    let file = fs::File::open(archive_path).at(archive_path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(ManagerError::extract)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(ManagerError::extract)?;
        let relative = match entry.enclosed_name() {
            Some(path) => path.to_path_buf(),
            None => {
                return Err(ManagerError::extract(format!(
                    "entry escapes the archive root: {}",
                    entry.name()
                )))
            }
        };
        let outpath = extract_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&outpath).at(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent).at(parent)?;
            }
            let mut outfile = fs::File::create(&outpath).at(&outpath)?;
            std::io::copy(&mut entry, &mut outfile).at(&outpath)?;

            #[cfg(unix)]
            if let Some(mode) = entry.unix_mode() {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&outpath, fs::Permissions::from_mode(mode)).at(&outpath)?;
            }
        }
    }

    Ok(())
}

/// Release archives wrap everything in a single `node-vX-os-arch/`
/// directory. Moves its contents up into `dir` and removes the wrapper.
pub fn flatten_single_root(dir: &Path) -> Result<(), ManagerError> {
    let entries: Vec<PathBuf> = fs::read_dir(dir)
        .at(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .at(dir)?;

    let wrapper = match entries.as_slice() {
        [only] if only.is_dir() => only.clone(),
        _ => {
            return Err(ManagerError::extract(format!(
                "expected exactly one top-level directory, found {} entries",
                entries.len()
            )))
        }
    };

    debug!("Flattening {} into {}", wrapper.display(), dir.display());

    for entry in fs::read_dir(&wrapper).at(&wrapper)? {
        let entry = entry.at(&wrapper)?;
        let target = dir.join(entry.file_name());
        fs::rename(entry.path(), &target).at(&target)?;
    }

    fs::remove_dir(&wrapper).at(&wrapper)
}
