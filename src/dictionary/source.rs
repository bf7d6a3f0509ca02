// Dictionary source - resolves CSV text from the local file or the remote endpoint
// The remote fetch persists via temp file + rename so a concurrent local read never
// sees a truncated dictionary.

use std::path::{Path, PathBuf};
use std::time::Duration;
use uuid::Uuid;

/// Default request timeout for the remote fetch
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Error types for dictionary source operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    /// Transport failure while fetching (connect, timeout, truncated body)
    #[error("Network error: {0}")]
    Network(String),
    /// Server answered with a non-success status
    #[error("Network error: {reason} ({code})")]
    Status { code: u16, reason: String },
    /// Failed to read an existing local dictionary
    #[error("I/O error: {0}")]
    Io(String),
    /// Fetched data could not be written to the local file
    #[error("Failed to persist dictionary: {0}")]
    Persist(String),
}

impl SourceError {
    /// Whether the fetch itself failed, as opposed to local file I/O
    pub fn is_network(&self) -> bool {
        matches!(self, SourceError::Network(_) | SourceError::Status { .. })
    }
}

/// Local file and remote URL backing the dictionary
#[derive(Debug, Clone)]
pub struct DictionarySource {
    /// Path of the persisted CSV file
    path: PathBuf,
    /// Remote CSV endpoint
    url: String,
    /// Request timeout for the remote fetch
    timeout: Duration,
    /// Whether to honor HTTP(S)_PROXY from the environment
    use_system_proxy: bool,
}

impl DictionarySource {
    /// Create a source for the given local path and remote URL
    pub fn new(path: PathBuf, url: impl Into<String>) -> Self {
        Self {
            path,
            url: url.into(),
            timeout: DEFAULT_HTTP_TIMEOUT,
            use_system_proxy: true,
        }
    }

    /// Override the remote request timeout (builder pattern)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Connect directly, ignoring proxy environment variables
    pub fn without_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Read the persisted dictionary text
    ///
    /// Returns `Ok(None)` when no local copy exists yet. Invalid UTF-8 is replaced
    /// rather than rejected, matching how fetched data is decoded.
    pub fn load_local(&self) -> Result<Option<String>, SourceError> {
        crate::debug!("Loading local dictionary from {:?}", self.path);

        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                crate::debug!("No local dictionary at {:?}", self.path);
                Ok(None)
            }
            Err(e) => Err(SourceError::Io(format!("{}: {}", self.path.display(), e))),
        }
    }

    /// Download the dictionary, persist it locally and return its text
    ///
    /// On any network failure the local copy is left untouched.
    pub async fn fetch_remote(&self) -> Result<String, SourceError> {
        use futures_util::StreamExt;

        crate::info!("Fetching dictionary from {}", self.url);

        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if !self.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let response = client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown status").to_string(),
            });
        }

        let mut data: Vec<u8> = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                SourceError::Network(format!(
                    "Download failed after {} bytes: {}",
                    data.len(),
                    e
                ))
            })?;
            data.extend_from_slice(&chunk);
        }

        crate::debug!("Downloaded {} bytes", data.len());

        self.persist(&data).await?;

        Ok(String::from_utf8_lossy(&data).into_owned())
    }

    /// Replace the local file with `data` using atomic temp file + rename
    pub async fn persist(&self, data: &[u8]) -> Result<(), SourceError> {
        use tokio::io::AsyncWriteExt;

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&parent)
            .await
            .map_err(|e| SourceError::Persist(format!("Failed to create directory: {}", e)))?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dictionary.csv".to_string());
        let temp_path = parent.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

        let write_result = async {
            let mut file = tokio::fs::File::create(&temp_path)
                .await
                .map_err(|e| format!("Failed to create temp file: {}", e))?;
            file.write_all(data)
                .await
                .map_err(|e| format!("Failed to write: {}", e))?;
            file.sync_all()
                .await
                .map_err(|e| format!("Failed to sync: {}", e))?;
            Ok::<(), String>(())
        }
        .await;

        if let Err(msg) = write_result {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(SourceError::Persist(msg));
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            // Clean up temp file on error
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(SourceError::Persist(format!("Failed to rename: {}", e)));
        }

        crate::debug!("Dictionary persisted to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
