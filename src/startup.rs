// Startup orchestration - local load followed by a one-shot remote refresh
//
// Flow: load_initial (local file -> parse -> refresh) runs first so queries work
// immediately; spawn_remote_refresh then fetches in the background and posts the
// new snapshot through the same LookupService::refresh entry point.

use crate::dictionary::{parse, DictionarySource, LookupService, SourceError};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// User-facing informational messages raised during startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// No local dictionary yet; `downloading` says whether a remote fetch follows
    LocalMissing { downloading: bool },
    /// Local dictionary exists but could not be read
    LocalUnreadable(String),
    /// Remote dictionary was fetched, persisted and applied
    Updated { entries: usize },
    /// Server rejected the download (carries the status reason phrase)
    DownloadFailed(String),
    /// Transport or persistence failure during the download
    DownloadError(String),
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::LocalMissing { downloading: true } => {
                write!(f, "Local dictionary file not found. Downloading from server.")
            }
            Notice::LocalMissing { downloading: false } => {
                write!(f, "Local dictionary file not found. Starting with an empty dictionary.")
            }
            Notice::LocalUnreadable(msg) => write!(f, "Failed to read local dictionary: {}", msg),
            Notice::Updated { .. } => write!(f, "Dictionary updated successfully."),
            Notice::DownloadFailed(reason) => {
                write!(f, "Failed to download dictionary: {}", reason)
            }
            Notice::DownloadError(msg) => {
                write!(f, "Error downloading the Katakana dictionary: {}", msg)
            }
        }
    }
}

/// Trait for surfacing notices to the user (allows mocking in tests)
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Load the local dictionary into `lookup`
///
/// Never fails: a missing or unreadable file is reported and the snapshot stays
/// as it was (empty on first run). `remote_refresh` only shapes the notice text.
/// Returns the number of entries loaded.
pub fn load_initial(
    source: &DictionarySource,
    lookup: &LookupService,
    notifier: &dyn Notifier,
    remote_refresh: bool,
) -> usize {
    match source.load_local() {
        Ok(Some(text)) => {
            let dictionary = parse(&text);
            let entries = dictionary.len();
            lookup.refresh(Arc::new(dictionary));
            crate::info!("Loaded {} entries from {:?}", entries, source.path());
            entries
        }
        Ok(None) => {
            crate::info!("Local dictionary not found at {:?}", source.path());
            notifier.notify(Notice::LocalMissing {
                downloading: remote_refresh,
            });
            0
        }
        Err(e) => {
            crate::warn!("Failed to read local dictionary: {}", e);
            notifier.notify(Notice::LocalUnreadable(e.to_string()));
            0
        }
    }
}

/// Fetch the remote dictionary and apply it
///
/// The fetched text is parsed directly; persistence happens inside
/// `fetch_remote`. On failure the active snapshot is left untouched.
pub async fn refresh_from_remote(
    source: &DictionarySource,
    lookup: &LookupService,
    notifier: &dyn Notifier,
) -> Result<usize, SourceError> {
    match source.fetch_remote().await {
        Ok(text) => {
            let dictionary = parse(&text);
            let entries = dictionary.len();
            lookup.refresh(Arc::new(dictionary));
            notifier.notify(Notice::Updated { entries });
            Ok(entries)
        }
        Err(e) => {
            if e.is_network() {
                crate::warn!("Remote dictionary refresh failed: {}", e);
            } else {
                crate::error!("Remote dictionary could not be saved: {}", e);
            }
            let notice = match &e {
                SourceError::Status { reason, .. } => Notice::DownloadFailed(reason.clone()),
                SourceError::Network(msg) => Notice::DownloadError(msg.clone()),
                other => Notice::DownloadError(other.to_string()),
            };
            notifier.notify(notice);
            Err(e)
        }
    }
}

/// Run the remote refresh once in the background
///
/// There is no retry and no cancellation; if the runtime shuts down first the
/// task is simply abandoned.
pub fn spawn_remote_refresh(
    source: DictionarySource,
    lookup: LookupService,
    notifier: Arc<dyn Notifier>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let _ = refresh_from_remote(&source, &lookup, notifier.as_ref()).await;
    })
}

/// Load locally, then kick off the remote refresh if enabled
///
/// The local snapshot is applied before the task is spawned, so the remote
/// snapshot (if any) always lands after it.
pub fn start(
    source: DictionarySource,
    lookup: LookupService,
    notifier: Arc<dyn Notifier>,
    remote_refresh: bool,
) -> Option<JoinHandle<()>> {
    load_initial(&source, &lookup, notifier.as_ref(), remote_refresh);

    if remote_refresh {
        Some(spawn_remote_refresh(source, lookup, notifier))
    } else {
        crate::debug!("Remote refresh disabled");
        None
    }
}

#[cfg(test)]
#[path = "startup_test.rs"]
mod tests;
