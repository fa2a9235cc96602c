use std::sync::Arc;

use engine_logging::{engine_info, engine_warn, item_scope};
use rewriter_core::RewriteReport;
use tokio::runtime::Runtime;

use crate::config::EngineConfig;
use crate::error::{EngineError, PipelineError};
use crate::fetch::{ProgressSink, ReqwestFetcher};
use crate::generator::OpenAiGenerator;
use crate::image_search::PexelsImageFinder;
use crate::pipeline::RewritePipeline;
use crate::ItemId;

/// Blocking front end: each call runs one item to completion on a
/// current-thread runtime.
pub struct Engine {
    runtime: Runtime,
    pipeline: RewritePipeline,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch)?);
        let generator = Arc::new(OpenAiGenerator::new(config.completion)?);
        let mut pipeline = RewritePipeline::new(fetcher, generator);
        if config.suggest_images {
            match PexelsImageFinder::from_settings(&config.image_search) {
                Some(finder) => pipeline = pipeline.with_image_finder(Arc::new(finder)),
                None => engine_warn!("image suggestions requested but no image search key is set"),
            }
        }
        Self::with_pipeline(pipeline)
    }

    pub fn with_pipeline(pipeline: RewritePipeline) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { runtime, pipeline })
    }

    pub fn process(
        &self,
        item_id: ItemId,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<RewriteReport, PipelineError> {
        let _scope = item_scope(item_id);
        engine_info!("processing {}", url);
        self.runtime
            .block_on(self.pipeline.process(item_id, url, sink))
    }
}
