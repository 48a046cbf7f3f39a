// HTTP feed repository implementation
use crate::application::feed_repository::{FeedError, FeedKind, FeedRepository};
use crate::domain::earthquake::{EarthquakeEvent, FaultLineSegment};
use crate::infrastructure::config::FeedsConfig;
use crate::infrastructure::geojson_mapper::{
    earthquakes_from_collection, fault_lines_from_collection, parse_collection,
};
use async_trait::async_trait;
use geojson::FeatureCollection;

#[derive(Debug, Clone)]
pub struct HttpFeedRepository {
    client: reqwest::Client,
    earthquakes_url: String,
    fault_lines_url: String,
}

impl HttpFeedRepository {
    pub fn new(feeds: FeedsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            earthquakes_url: feeds.earthquakes_url,
            fault_lines_url: feeds.fault_lines_url,
        }
    }

    async fn fetch_collection(&self, feed: FeedKind, url: &str) -> Result<FeatureCollection, FeedError> {
        let fetch_error = |reason: String| FeedError::Fetch {
            feed,
            url: url.to_string(),
            reason,
        };

        tracing::debug!("Fetching {} from {}", feed, url);
        let response = self
            .client
            .get(url)
            .header("Accept", "application/geo+json, application/json")
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(fetch_error(format!("unexpected status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| fetch_error(format!("failed to read body: {}", e)))?;
        tracing::debug!("Received {} bytes for {}", body.len(), feed);

        parse_collection(feed, url, &body)
    }
}

#[async_trait]
impl FeedRepository for HttpFeedRepository {
    async fn fetch_earthquakes(&self) -> Result<Vec<EarthquakeEvent>, FeedError> {
        let collection = self
            .fetch_collection(FeedKind::Earthquakes, &self.earthquakes_url)
            .await?;
        earthquakes_from_collection(&collection)
    }

    async fn fetch_fault_lines(&self) -> Result<Vec<FaultLineSegment>, FeedError> {
        let collection = self
            .fetch_collection(FeedKind::FaultLines, &self.fault_lines_url)
            .await?;
        fault_lines_from_collection(&collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let repository = HttpFeedRepository::new(FeedsConfig {
            earthquakes_url: "http://127.0.0.1:1/quakes.geojson".to_string(),
            fault_lines_url: "http://127.0.0.1:1/faults.json".to_string(),
        });

        let err = repository.fetch_earthquakes().await.unwrap_err();

        match err {
            FeedError::Fetch { feed, url, .. } => {
                assert_eq!(feed, FeedKind::Earthquakes);
                assert_eq!(url, "http://127.0.0.1:1/quakes.geojson");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
