// Standard library
use std::fs;
use std::io;
use std::net::IpAddr;
use std::path::Path;

// 3rd party crates
use thiserror::Error;
use tracing::debug;

/// Errors for the last-known-IP marker file. Read-side variants are
/// recoverable for the caller; a write failure after a successful provider
/// update is logged but never rolled back.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("No previous IP recorded at '{0}'")]
    NotFound(String),

    #[error("Failed to read IP file '{path}': {source}")]
    ReadFailed { path: String, source: io::Error },

    #[error("IP file '{path}' does not contain a valid IP address: '{content}'")]
    Malformed { path: String, content: String },

    #[error("Failed to write IP file '{path}': {source}")]
    WriteFailed { path: String, source: io::Error },
}

/// Reads the last successfully-applied IP address from the marker file.
/// A missing file is `NotFound`, distinguished from a present but
/// unreadable or unparseable one.
pub fn read_last_ip(path: &Path) -> Result<IpAddr, StateError> {
    let content: String = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            StateError::NotFound(path.display().to_string())
        } else {
            StateError::ReadFailed {
                path: path.display().to_string(),
                source: e,
            }
        }
    })?;

    content.trim().parse().map_err(|_| StateError::Malformed {
        path: path.display().to_string(),
        content: content.trim().to_string(),
    })
}

/// Overwrites the marker file with `ip`. Whole-file overwrite, no atomic
/// rename; an interrupted write can leave the marker briefly inconsistent
/// and the next run re-resolves from there.
pub fn write_last_ip(path: &Path, ip: &IpAddr) -> Result<(), StateError> {
    fs::write(path, ip.to_string()).map_err(|e| StateError::WriteFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    debug!(path = %path.display(), "IP marker written");
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("current_ip.txt");
        let ip: IpAddr = "203.0.113.7".parse().unwrap();

        write_last_ip(&path, &ip).expect("write must succeed");
        assert_eq!(read_last_ip(&path).expect("read must succeed"), ip);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "203.0.113.7",
            "marker is plain text without framing"
        );
    }

    #[test]
    fn test_write_overwrites_previous_marker() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("current_ip.txt");

        write_last_ip(&path, &"198.51.100.1".parse().unwrap()).unwrap();
        write_last_ip(&path, &"203.0.113.7".parse().unwrap()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "203.0.113.7");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("current_ip.txt");

        assert!(matches!(read_last_ip(&path), Err(StateError::NotFound(_))));
    }

    #[test]
    fn test_garbage_content_is_malformed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("current_ip.txt");
        fs::write(&path, "not an ip").unwrap();

        match read_last_ip(&path) {
            Err(StateError::Malformed { content, .. }) => assert_eq!(content, "not an ip"),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_file_is_distinguished_from_missing() {
        let dir = tempfile::tempdir().expect("tempdir");

        // A directory in place of the marker file cannot be read as text.
        assert!(matches!(
            read_last_ip(dir.path()),
            Err(StateError::ReadFailed { .. })
        ));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("no-such-dir").join("current_ip.txt");

        assert!(matches!(
            write_last_ip(&path, &"203.0.113.7".parse().unwrap()),
            Err(StateError::WriteFailed { .. })
        ));
    }
}
