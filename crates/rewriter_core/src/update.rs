use crate::{AppState, Effect, Msg, SessionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(raw) => {
            state.set_input(raw);
            Vec::new()
        }
        Msg::UrlsSubmitted => {
            // One batch at a time: a submission while running is ignored.
            if state.session() == SessionState::Running {
                return (state, Vec::new());
            }
            let urls = parse_urls(state.input());
            if urls.is_empty() {
                state.reject_empty();
                return (state, vec![Effect::RejectEmptyBatch]);
            }

            state.start_session();
            let enqueued = state.enqueue_items(urls.clone());
            let mut effects = Vec::with_capacity(enqueued.len() + 1);
            effects.push(Effect::RecordHistory { urls });
            for (item_id, url) in enqueued {
                effects.push(Effect::ProcessUrl { item_id, url });
            }
            effects
        }
        Msg::ItemProgress { item_id, stage } => {
            state.apply_progress(item_id, stage);
            Vec::new()
        }
        Msg::ItemDone { item_id, outcome } => {
            if state.apply_done(item_id, outcome) {
                vec![Effect::BatchFinished]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}

fn parse_urls(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
