use super::{decode_image, AssetError};
use crate::graphics::Image;
use std::io::{self, Read};
use std::time::Duration;
use tracing::debug;

/// Default bound on a single image request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(6);

/// Largest response body accepted for an image
pub const MAX_IMAGE_BYTES: u64 = 8 * 1024 * 1024;

/// Source of remote images for media rows
pub trait ImageFetcher {
    /// Fetch and decode the image at `url`. Exactly one attempt is made.
    fn fetch(&self, url: &str) -> Result<Image, AssetError>;
}

/// Blocking HTTP fetcher
pub struct HttpImageFetcher {
    agent: ureq::Agent,
    max_bytes: u64,
}

impl HttpImageFetcher {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            max_bytes: MAX_IMAGE_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    fn download(&self, url: &str) -> Result<Vec<u8>, AssetError> {
        let response = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => AssetError::Network {
                url: url.to_string(),
                reason: format!("HTTP status {code}"),
            },
            ureq::Error::Transport(transport) if is_timeout(&transport) => AssetError::Timeout {
                url: url.to_string(),
            },
            ureq::Error::Transport(transport) => AssetError::Network {
                url: url.to_string(),
                reason: transport.to_string(),
            },
        })?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(self.max_bytes + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| match e.kind() {
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => AssetError::Timeout {
                    url: url.to_string(),
                },
                _ => AssetError::Network {
                    url: url.to_string(),
                    reason: e.to_string(),
                },
            })?;

        if bytes.len() as u64 > self.max_bytes {
            return Err(AssetError::Network {
                url: url.to_string(),
                reason: format!("response larger than {} bytes", self.max_bytes),
            });
        }
        Ok(bytes)
    }
}

impl Default for HttpImageFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch(&self, url: &str) -> Result<Image, AssetError> {
        let bytes = self.download(url)?;
        debug!(url, bytes = bytes.len(), "downloaded image");
        decode_image(url, &bytes)
    }
}

fn is_timeout(transport: &ureq::Transport) -> bool {
    std::error::Error::source(transport)
        .and_then(|source| source.downcast_ref::<io::Error>())
        .is_some_and(|e| matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock))
}

/// Fetcher for builds without network access; every request fails
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineFetcher;

impl ImageFetcher for OfflineFetcher {
    fn fetch(&self, url: &str) -> Result<Image, AssetError> {
        Err(AssetError::Offline {
            url: url.to_string(),
        })
    }
}
