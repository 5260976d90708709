use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use crate::ancestor::is_under_script_folder;
use crate::signatures::{
    DEVWEB_MAIN_FILE, DEVWEB_RTS_FILE, SCRIPT_EXTENSIONS, SELENIUM_CONTENT_MARKER,
    SELENIUM_EXTENSION, XML_EXTENSION, YAML_EXTENSIONS,
};

fn lowercase_file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
}

fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

fn has_script_extension(lowercase_name: &str) -> bool {
    SCRIPT_EXTENSIONS
        .iter()
        .any(|ext| lowercase_name.ends_with(ext))
}

/// Recognizes a script from its file name only, without touching the filesystem.
///
/// This is the shape used for deleted files, which can no longer be inspected.
#[must_use]
pub fn is_script_by_extension(path: &Path) -> bool {
    lowercase_file_name(path).is_some_and(|name| has_script_extension(&name))
}

/// Returns `true` if `path` is a regular file recognized as a performance test script.
///
/// Unreadable files and directories count as not matching.
#[must_use]
pub fn is_script(path: &Path) -> bool {
    if !is_regular_file(path) {
        return false;
    }

    let Some(name) = lowercase_file_name(path) else {
        return false;
    };

    if has_script_extension(&name) {
        return true;
    }

    if name == DEVWEB_MAIN_FILE {
        return has_runtime_settings_sibling(path);
    }

    if name.ends_with(SELENIUM_EXTENSION) {
        return contains_selenium_reference(path);
    }

    false
}

fn has_runtime_settings_sibling(path: &Path) -> bool {
    let Some(dir) = path.parent() else {
        return false;
    };

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("cannot list '{}': {e}", dir.display());
            return false;
        }
    };

    entries.filter_map(std::result::Result::ok).any(|entry| {
        entry
            .file_name()
            .to_string_lossy()
            .eq_ignore_ascii_case(DEVWEB_RTS_FILE)
            && entry.path().is_file()
    })
}

/// Bytes read from a candidate Selenium file per step.
const CONTENT_CHUNK_SIZE: usize = 8 * 1024;

/// Scans `path` in fixed-size chunks for the Selenium marker, ASCII case-insensitively.
///
/// The tail of each chunk is carried over so a marker split across two reads is still
/// found, and memory stays bounded however long a line is.
fn contains_selenium_reference(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("cannot open '{}': {e}", path.display());
            return false;
        }
    };

    let marker = SELENIUM_CONTENT_MARKER.as_bytes();
    let mut chunk = vec![0u8; CONTENT_CHUNK_SIZE];
    let mut window = Vec::with_capacity(CONTENT_CHUNK_SIZE + marker.len());

    loop {
        let read = match file.read(&mut chunk) {
            Ok(0) => return false,
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!("cannot read '{}': {e}", path.display());
                return false;
            }
        };

        window.extend_from_slice(&chunk[..read]);
        window.make_ascii_lowercase();

        if window.windows(marker.len()).any(|candidate| candidate == marker) {
            return true;
        }

        let carry = marker.len() - 1;
        if window.len() > carry {
            window.drain(..window.len() - carry);
        }
    }
}

/// Returns `true` if any entry directly inside `dir` is a script.
///
/// A directory that cannot be listed holds no script.
#[must_use]
pub fn contains_script(dir: &Path) -> bool {
    match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(std::result::Result::ok)
            .any(|entry| is_script(&entry.path())),
        Err(e) => {
            debug!("cannot list '{}': {e}", dir.display());
            false
        }
    }
}

fn has_test_extension(path: &Path, consider_xml_as_test: bool) -> bool {
    let Some(ext) = path.extension() else {
        return false;
    };
    let ext = ext.to_string_lossy().to_lowercase();

    YAML_EXTENSIONS.contains(&ext.as_str()) || (consider_xml_as_test && ext == XML_EXTENSION)
}

/// `path` is strictly below the workspace and not one of its direct children.
pub(crate) fn is_nested_under_workspace(path: &Path, workspace: &Path) -> bool {
    path.parent()
        .is_some_and(|parent| parent != workspace && parent.starts_with(workspace))
}

/// Returns `true` if `path` is a test definition.
///
/// Tests are YAML files (or XML when `consider_xml_as_test` is set) that are neither
/// direct children of the workspace root nor inside a folder that holds a script.
#[must_use]
pub fn is_test(path: &Path, workspace: &Path, consider_xml_as_test: bool) -> bool {
    is_regular_file(path)
        && has_test_extension(path, consider_xml_as_test)
        && is_nested_under_workspace(path, workspace)
        && !is_under_script_folder(path, workspace)
}
