//! Generated audio storage
//!
//! Artifacts are plain files in a single output directory, addressed by
//! their filename only. Names follow `audio_<emotion>_<YYYYMMDD_HHMMSS>.<ext>`,
//! where the extension follows the audio format (`mp3` for MPEG); a numeric
//! suffix is added when two artifacts for the same emotion land in the same
//! second.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod name;
mod sweep;

use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use tokio::io::AsyncWriteExt;

pub use error::{ArtifactError, Result};
pub use name::extension_for;
use name::{content_type_for, is_safe_name};
pub use sweep::spawn_sweeper;

/// Prefix shared by every generated artifact
pub const ARTIFACT_PREFIX: &str = "audio_";

/// Extension of MPEG artifacts
pub const ARTIFACT_EXTENSION: &str = "mp3";

/// Upper bound on collision suffixes tried for one name
const MAX_COLLISION_SUFFIX: u32 = 1000;

/// A stored artifact read back for serving
#[derive(Debug)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Output directory holding generated audio
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Open the store, creating the directory if absent
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;

        tracing::debug!(dir = %dir.display(), "artifact store ready");

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a byte stream to a new artifact and return its filename
    ///
    /// The stamp is taken from the local clock at allocation time. A stream
    /// error removes the partially written file.
    pub async fn write_stream<S, E>(&self, emotion: &str, extension: &str, stream: S) -> Result<String>
    where
        S: Stream<Item = std::result::Result<Bytes, E>> + Send,
        E: std::error::Error + Send + Sync + 'static,
    {
        let stamp = jiff::Zoned::now().strftime("%Y%m%d_%H%M%S").to_string();
        let (filename, mut file) = self.allocate(emotion, &stamp, extension).await?;
        let path = self.dir.join(&filename);

        let result = copy_stream(&mut file, stream).await;

        match result {
            Ok(written) => {
                tracing::debug!(%filename, bytes = written, "artifact written");
                Ok(filename)
            }
            Err(e) => {
                drop(file);
                if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                    tracing::warn!(%filename, error = %remove_err, "failed to remove partial artifact");
                }
                Err(e)
            }
        }
    }

    /// Read an artifact by filename
    ///
    /// Names that could escape the output directory are reported as
    /// [`ArtifactError::NotFound`] without touching the filesystem.
    pub async fn read(&self, filename: &str) -> Result<Artifact> {
        if !is_safe_name(filename) {
            return Err(ArtifactError::NotFound(filename.to_string()));
        }

        let path = self.dir.join(filename);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if matches!(e.kind(), std::io::ErrorKind::NotFound | std::io::ErrorKind::IsADirectory) => {
                return Err(ArtifactError::NotFound(filename.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Artifact {
            bytes,
            content_type: content_type_for(filename),
        })
    }

    /// Claim a fresh filename for `emotion` at `stamp`
    async fn allocate(&self, emotion: &str, stamp: &str, extension: &str) -> Result<(String, tokio::fs::File)> {
        let stem = name::stem(emotion, stamp);

        for attempt in 0..MAX_COLLISION_SUFFIX {
            let filename = if attempt == 0 {
                format!("{stem}.{extension}")
            } else {
                format!("{stem}_{attempt}.{extension}")
            };

            let opened = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.dir.join(&filename))
                .await;

            match opened {
                Ok(file) => return Ok((filename, file)),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
                Err(e) => return Err(e.into()),
            }
        }

        Err(ArtifactError::Exhausted(stem))
    }
}

async fn copy_stream<S, E>(file: &mut tokio::fs::File, stream: S) -> Result<usize>
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Send,
    E: std::error::Error + Send + Sync + 'static,
{
    let mut stream = std::pin::pin!(stream);
    let mut written = 0usize;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| ArtifactError::Stream(Box::new(e)))?;
        file.write_all(&chunk).await?;
        written += chunk.len();
    }

    file.flush().await?;

    if written == 0 {
        return Err(ArtifactError::EmptyStream);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(parts: &[&'static [u8]]) -> impl Stream<Item = std::result::Result<Bytes, std::io::Error>> + Send {
        let items: Vec<_> = parts.iter().map(|&p| Ok::<_, std::io::Error>(Bytes::from_static(p))).collect();
        futures::stream::iter(items)
    }

    #[tokio::test]
    async fn open_creates_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("outputs");

        let store = ArtifactStore::open(&dir).await.unwrap();

        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir);
    }

    #[tokio::test]
    async fn write_then_read() {
        let root = tempfile::tempdir().unwrap();
        let store = ArtifactStore::open(root.path()).await.unwrap();

        let filename = store.write_stream("joy", ARTIFACT_EXTENSION, chunks(&[b"ID3", b"\x01\x02"])).await.unwrap();

        assert!(filename.starts_with("audio_joy_"));
        assert!(filename.ends_with(".mp3"));
        // audio_joy_YYYYMMDD_HHMMSS.mp3
        assert_eq!(filename.len(), "audio_joy_".len() + 15 + ".mp3".len());

        let artifact = store.read(&filename).await.unwrap();
        assert_eq!(artifact.bytes, b"ID3\x01\x02");
        assert_eq!(artifact.content_type, "audio/mpeg");
    }

    #[tokio::test]
    async fn collisions_get_suffixes() {
        let root = tempfile::tempdir().unwrap();
        let store = ArtifactStore::open(root.path()).await.unwrap();

        let (first, _) = store.allocate("anger", "20260101_120000", "mp3").await.unwrap();
        let (second, _) = store.allocate("anger", "20260101_120000", "mp3").await.unwrap();
        let (third, _) = store.allocate("anger", "20260101_120000", "mp3").await.unwrap();
        let (other, _) = store.allocate("fear", "20260101_120000", "mp3").await.unwrap();

        assert_eq!(first, "audio_anger_20260101_120000.mp3");
        assert_eq!(second, "audio_anger_20260101_120000_1.mp3");
        assert_eq!(third, "audio_anger_20260101_120000_2.mp3");
        assert_eq!(other, "audio_fear_20260101_120000.mp3");
    }

    #[tokio::test]
    async fn extension_is_kept_and_served() {
        let root = tempfile::tempdir().unwrap();
        let store = ArtifactStore::open(root.path()).await.unwrap();

        let filename = store.write_stream("fear", "wav", chunks(&[b"RIFF"])).await.unwrap();

        assert!(filename.starts_with("audio_fear_"));
        assert!(filename.ends_with(".wav"));
        assert_eq!(store.read(&filename).await.unwrap().content_type, "audio/wav");
    }

    #[tokio::test]
    async fn failed_stream_removes_partial_file() {
        let root = tempfile::tempdir().unwrap();
        let store = ArtifactStore::open(root.path()).await.unwrap();

        let stream = futures::stream::iter(vec![
            Ok(Bytes::from_static(b"partial")),
            Err(std::io::Error::other("connection reset")),
        ]);

        let err = store.write_stream("sadness", ARTIFACT_EXTENSION, stream).await.unwrap_err();
        assert!(matches!(err, ArtifactError::Stream(_)));

        let leftovers = std::fs::read_dir(root.path()).unwrap().count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn empty_stream_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let store = ArtifactStore::open(root.path()).await.unwrap();

        let err = store.write_stream("joy", ARTIFACT_EXTENSION, chunks(&[])).await.unwrap_err();
        assert!(matches!(err, ArtifactError::EmptyStream));
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn read_missing_file_is_not_found() {
        let root = tempfile::tempdir().unwrap();
        let store = ArtifactStore::open(root.path()).await.unwrap();

        let err = store.read("doesnotexist.mp3").await.unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound(_)));
    }

    #[tokio::test]
    async fn read_rejects_traversal() {
        let root = tempfile::tempdir().unwrap();
        let outputs = root.path().join("outputs");
        std::fs::write(root.path().join("secret.txt"), b"nope").unwrap();
        let store = ArtifactStore::open(&outputs).await.unwrap();

        for name in ["../secret.txt", "..", ".hidden", "a/b.mp3", "a\\b.mp3", ""] {
            let err = store.read(name).await.unwrap_err();
            assert!(matches!(err, ArtifactError::NotFound(_)), "{name} should be rejected");
        }
    }
}
