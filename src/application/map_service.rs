// Map service - Sequential fetch, compose and assemble pipeline
use crate::application::feed_repository::{FeedError, FeedRepository};
use crate::application::layer_composer::compose_layers;
use crate::application::map_assembler::{AssemblyError, MapAssembler};
use crate::domain::map_view::MapView;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

#[derive(Clone)]
pub struct MapService {
    repository: Arc<dyn FeedRepository>,
    assembler: MapAssembler,
}

impl MapService {
    pub fn new(repository: Arc<dyn FeedRepository>, assembler: MapAssembler) -> Self {
        Self {
            repository,
            assembler,
        }
    }

    /// The fault-line feed is only requested once the earthquake feed has
    /// loaded. Any failure stops the pipeline before assembly.
    pub async fn build_map(&self) -> Result<MapView, PipelineError> {
        let start_time = Instant::now();

        let events = self.repository.fetch_earthquakes().await?;
        tracing::debug!("Loaded {} earthquakes", events.len());

        let segments = self.repository.fetch_fault_lines().await?;
        tracing::debug!("Loaded {} fault-line segments", segments.len());

        let layers = compose_layers(&events, &segments);
        let view = self.assembler.assemble(layers)?;

        tracing::info!(
            "Built map with {} earthquakes and {} fault lines in {}ms",
            events.len(),
            segments.len(),
            start_time.elapsed().as_millis()
        );

        Ok(view)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::application::feed_repository::FeedKind;
    use crate::domain::earthquake::{EarthquakeEvent, FaultLineSegment};
    use crate::infrastructure::config::{MapSettings, TilesConfig};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory feeds that record the order they were requested in.
    pub(crate) struct StubFeeds {
        pub earthquakes: Result<Vec<EarthquakeEvent>, String>,
        pub fault_lines: Result<Vec<FaultLineSegment>, String>,
        pub calls: Mutex<Vec<FeedKind>>,
    }

    impl StubFeeds {
        pub(crate) fn ok() -> Self {
            Self {
                earthquakes: Ok(vec![
                    EarthquakeEvent::new(-122.4, 37.8, 2.5, "Bay Area".to_string(), 1000),
                    EarthquakeEvent::new(142.3, 38.1, 5.6, "Honshu".to_string(), 2000),
                ]),
                fault_lines: Ok(vec![FaultLineSegment::new(vec![(0.0, 0.0), (1.0, 1.0)])]),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn fetch_error(feed: FeedKind, reason: &str) -> FeedError {
            FeedError::Fetch {
                feed,
                url: "http://feeds.test".to_string(),
                reason: reason.to_string(),
            }
        }
    }

    #[async_trait]
    impl FeedRepository for StubFeeds {
        async fn fetch_earthquakes(&self) -> Result<Vec<EarthquakeEvent>, FeedError> {
            self.calls.lock().unwrap().push(FeedKind::Earthquakes);
            self.earthquakes
                .clone()
                .map_err(|reason| Self::fetch_error(FeedKind::Earthquakes, &reason))
        }

        async fn fetch_fault_lines(&self) -> Result<Vec<FaultLineSegment>, FeedError> {
            self.calls.lock().unwrap().push(FeedKind::FaultLines);
            self.fault_lines
                .clone()
                .map_err(|reason| Self::fetch_error(FeedKind::FaultLines, &reason))
        }
    }

    pub(crate) fn service(feeds: Arc<StubFeeds>) -> MapService {
        MapService::new(
            feeds,
            MapAssembler::new(TilesConfig::default(), MapSettings::default()),
        )
    }

    #[tokio::test]
    async fn test_build_map_end_to_end() {
        let feeds = Arc::new(StubFeeds::ok());
        let view = service(feeds.clone()).build_map().await.unwrap();

        assert_eq!(view.layers.earthquakes.markers.len(), 2);
        assert_eq!(view.layers.timeline.markers.len(), 2);
        assert_eq!(view.layers.fault_lines.lines.len(), 1);
        assert_eq!(
            *feeds.calls.lock().unwrap(),
            vec![FeedKind::Earthquakes, FeedKind::FaultLines]
        );
    }

    #[tokio::test]
    async fn test_earthquake_failure_skips_fault_lines() {
        let feeds = Arc::new(StubFeeds {
            earthquakes: Err("connection refused".to_string()),
            ..StubFeeds::ok()
        });
        let err = service(feeds.clone()).build_map().await.unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Feed(FeedError::Fetch { feed: FeedKind::Earthquakes, .. })
        ));
        assert_eq!(*feeds.calls.lock().unwrap(), vec![FeedKind::Earthquakes]);
    }

    #[tokio::test]
    async fn test_fault_line_failure_is_reported() {
        let feeds = Arc::new(StubFeeds {
            fault_lines: Err("404 Not Found".to_string()),
            ..StubFeeds::ok()
        });
        let err = service(feeds).build_map().await.unwrap_err();

        assert!(err.to_string().contains("fault-line feed"));
        assert!(err.to_string().contains("404 Not Found"));
    }
}
