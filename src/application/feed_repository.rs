// Repository trait for the two GeoJSON feeds
use crate::domain::earthquake::{EarthquakeEvent, FaultLineSegment};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Earthquakes,
    FaultLines,
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::Earthquakes => write!(f, "earthquake feed"),
            FeedKind::FaultLines => write!(f, "fault-line feed"),
        }
    }
}

/// Both variants abort the pipeline before the map is assembled.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to fetch {feed} from {url}: {reason}")]
    Fetch {
        feed: FeedKind,
        url: String,
        reason: String,
    },

    #[error("malformed feature #{index} in {feed}: {reason}")]
    MalformedFeature {
        feed: FeedKind,
        index: usize,
        reason: String,
    },
}

#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Fetch and parse the real-time earthquake feed
    async fn fetch_earthquakes(&self) -> Result<Vec<EarthquakeEvent>, FeedError>;

    /// Fetch and parse the plate boundary feed
    async fn fetch_fault_lines(&self) -> Result<Vec<FaultLineSegment>, FeedError>;
}
