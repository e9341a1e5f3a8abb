use std::time::{Duration, SystemTime};

use crate::{ARTIFACT_PREFIX, ArtifactStore, Result};

impl ArtifactStore {
    /// Delete generated artifacts older than `retention`
    ///
    /// Only files carrying the artifact prefix are considered. Returns the
    /// number of files removed.
    pub async fn sweep(&self, retention: Duration) -> Result<usize> {
        let now = SystemTime::now();
        let mut removed = 0;
        let mut entries = tokio::fs::read_dir(self.dir()).await?;

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !name.starts_with(ARTIFACT_PREFIX) {
                continue;
            }

            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }

            let age = metadata
                .modified()
                .ok()
                .and_then(|modified| now.duration_since(modified).ok())
                .unwrap_or_default();

            if age <= retention {
                continue;
            }

            match tokio::fs::remove_file(entry.path()).await {
                Ok(()) => {
                    tracing::debug!(filename = name, age_secs = age.as_secs(), "expired artifact removed");
                    removed += 1;
                }
                // Raced with another sweeper or a manual cleanup
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }

        Ok(removed)
    }
}

/// Run [`ArtifactStore::sweep`] every `interval` in a background task
///
/// The first sweep happens immediately. `on_removed` is called with the
/// count of every successful sweep. Failures are logged and the loop keeps
/// going; abort the returned handle to stop it.
pub fn spawn_sweeper<F>(
    store: ArtifactStore,
    retention: Duration,
    interval: Duration,
    on_removed: F,
) -> tokio::task::JoinHandle<()>
where
    F: Fn(usize) + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            match store.sweep(retention).await {
                Ok(removed) => {
                    if removed > 0 {
                        tracing::info!(removed, dir = %store.dir().display(), "swept expired artifacts");
                    }
                    on_removed(removed);
                }
                Err(e) => tracing::warn!(error = %e, "artifact sweep failed"),
            }
        }
    })
}
