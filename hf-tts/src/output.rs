use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use hf_tts_client::AudioPayload;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write audio to {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Create or truncate `path` and fill it with the payload bytes.
///
/// The file is flushed and synced before returning; the handle is closed on
/// every exit path.
pub fn write_audio(path: &Path, payload: &AudioPayload) -> Result<(), OutputError> {
    let write_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
    writer.write_all(payload.as_bytes()).map_err(write_error)?;
    let file = writer
        .into_inner()
        .map_err(|err| write_error(err.into_error()))?;
    file.sync_all().map_err(write_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn writes_payload_bytes_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.wav");
        let payload = AudioPayload::new(&b"RIFF\0\0\0\0WAVE"[..], Some("audio/wav".into()));

        write_audio(&path, &payload).unwrap();

        assert_eq!(fs::read(&path).unwrap(), payload.as_bytes());
    }

    #[test]
    fn replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.wav");
        fs::write(&path, vec![0xAA; 4096]).unwrap();
        let payload = AudioPayload::new(&b"short"[..], None);

        write_audio(&path, &payload).unwrap();
        write_audio(&path, &payload).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"short");
    }

    #[test]
    fn missing_parent_directory_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("output.wav");
        let payload = AudioPayload::new(&b"data"[..], None);

        let err = write_audio(&path, &payload).unwrap_err();

        let OutputError::Write { path: failed, .. } = &err;
        assert_eq!(failed, &path);
        assert!(err.to_string().contains(&path.display().to_string()));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn read_only_directory_names_the_path() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // root ignores directory permissions
        if fs::write(locked.join("access-check"), b"").is_ok() {
            return;
        }

        let path = locked.join("output.wav");
        let err = write_audio(&path, &AudioPayload::new(&b"data"[..], None)).unwrap_err();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(err.to_string().contains(&path.display().to_string()));
        assert!(!path.exists());
    }

    #[test]
    fn directory_is_not_a_valid_destination() {
        let dir = tempfile::tempdir().unwrap();
        let payload = AudioPayload::new(&b"data"[..], None);
        assert!(write_audio(dir.path(), &payload).is_err());
    }
}
