use std::collections::VecDeque;
use std::sync::mpsc;

use chrono::Local;
use engine_logging::{engine_debug, engine_info, engine_warn};
use rewriter_core::{
    update, AppState, AppViewModel, Effect, ItemId, ItemOutcome, Msg, RewriteReport, Stage,
};
use rewriter_engine::{ChannelProgressSink, Engine, EngineEvent, PipelineError, ProgressSink};

use crate::persistence::HistoryStore;

/// Runs one URL to a report. [`Engine`] in production.
pub(crate) trait ItemProcessor {
    fn process(
        &self,
        item_id: ItemId,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<RewriteReport, PipelineError>;
}

impl ItemProcessor for Engine {
    fn process(
        &self,
        item_id: ItemId,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<RewriteReport, PipelineError> {
        Engine::process(self, item_id, url, sink)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum BatchError {
    #[error("블로그 URL을 입력해주세요.")]
    EmptyBatch,
}

/// Feeds `urls` through the state machine and executes its effects one at a
/// time. A failed item is recorded and the batch moves on.
///
/// `on_view` sees every view that changed.
pub(crate) fn run_batch<P>(
    processor: &P,
    history: &mut HistoryStore,
    urls: &[String],
    on_view: &mut dyn FnMut(&AppViewModel),
) -> Result<AppViewModel, BatchError>
where
    P: ItemProcessor + ?Sized,
{
    let mut driver = Driver {
        state: AppState::new(),
        pending: VecDeque::new(),
        on_view,
    };
    driver.dispatch(Msg::InputChanged(urls.join("\n")));
    driver.dispatch(Msg::UrlsSubmitted);

    while let Some(effect) = driver.pending.pop_front() {
        match effect {
            Effect::RejectEmptyBatch => return Err(BatchError::EmptyBatch),
            Effect::RecordHistory { urls } => {
                history.record(urls, Local::now().to_rfc3339());
            }
            Effect::ProcessUrl { item_id, url } => {
                let outcome = process_item(processor, item_id, &url, &mut driver);
                driver.dispatch(Msg::ItemDone { item_id, outcome });
            }
            Effect::BatchFinished => {
                let view = driver.state.view();
                engine_info!(
                    "Batch finished: {} items, {} failed",
                    view.item_count,
                    view.failed_count
                );
            }
        }
    }

    Ok(driver.state.view())
}

struct Driver<'v> {
    state: AppState,
    pending: VecDeque<Effect>,
    on_view: &'v mut dyn FnMut(&AppViewModel),
}

impl Driver<'_> {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.pending.extend(effects);
        if state.consume_dirty() {
            (self.on_view)(&state.view());
        }
        self.state = state;
    }
}

fn process_item<P>(
    processor: &P,
    item_id: ItemId,
    url: &str,
    driver: &mut Driver<'_>,
) -> ItemOutcome
where
    P: ItemProcessor + ?Sized,
{
    let (tx, rx) = mpsc::channel();
    let result = {
        let sink = ChannelProgressSink::new(tx);
        processor.process(item_id, url, &sink)
    };

    for event in rx.try_iter() {
        match event {
            EngineEvent::Progress(progress) => {
                if let Some(stage) = map_stage(progress.stage) {
                    driver.dispatch(Msg::ItemProgress {
                        item_id: progress.item_id,
                        stage,
                    });
                }
            }
        }
    }

    match result {
        Ok(report) => {
            engine_debug!("Item {} rewritten: {:?}", item_id, report.result.title);
            ItemOutcome::Rewritten(Box::new(report))
        }
        Err(err) => {
            engine_warn!("Item {} failed: {}", item_id, err);
            ItemOutcome::Failed {
                message: err.to_string(),
            }
        }
    }
}

/// The core tracks coarser stages than the engine reports. `Done` is left
/// to the item outcome.
fn map_stage(stage: rewriter_engine::Stage) -> Option<Stage> {
    match stage {
        rewriter_engine::Stage::Normalizing | rewriter_engine::Stage::Downloading => {
            Some(Stage::Fetching)
        }
        rewriter_engine::Stage::Extracting => Some(Stage::Extracting),
        rewriter_engine::Stage::Rewriting => Some(Stage::Rewriting),
        rewriter_engine::Stage::Reconciling | rewriter_engine::Stage::SearchingImages => {
            Some(Stage::Reconciling)
        }
        rewriter_engine::Stage::Done => None,
    }
}
