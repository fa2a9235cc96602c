use rewriter_core::{update, AppState, Effect, ItemOutcome, Msg, Stage};

fn submit_urls(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::UrlsSubmitted)
}

#[test]
fn progress_moves_item_through_stages() {
    let (mut state, _) = submit_urls(AppState::new(), "a.com\nb.com\n");
    assert!(state.consume_dirty());

    let (mut state, _) = update(
        state,
        Msg::ItemProgress {
            item_id: 1,
            stage: Stage::Rewriting,
        },
    );
    let row = state.view().items[0].clone();
    assert_eq!(row.stage, Stage::Rewriting);
    assert_eq!(row.outcome, None);
    assert!(state.consume_dirty());

    // Same stage again is not a change.
    let (mut state, _) = update(
        state,
        Msg::ItemProgress {
            item_id: 1,
            stage: Stage::Rewriting,
        },
    );
    assert!(!state.consume_dirty());
}

#[test]
fn items_are_ordered_by_submission() {
    let (state, _) = submit_urls(AppState::new(), "b.com\na.com\n");
    let urls: Vec<_> = state.view().items.iter().map(|row| row.url.clone()).collect();
    assert_eq!(urls, vec!["b.com", "a.com"]);
    let ids: Vec<_> = state.view().items.iter().map(|row| row.item_id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn progress_after_done_is_ignored() {
    let (state, _) = submit_urls(AppState::new(), "a.com\n");
    let (state, _) = update(
        state,
        Msg::ItemDone {
            item_id: 1,
            outcome: ItemOutcome::Failed {
                message: "boom".to_string(),
            },
        },
    );
    let (mut state, _) = update(
        state,
        Msg::ItemProgress {
            item_id: 1,
            stage: Stage::Fetching,
        },
    );
    state.consume_dirty();
    assert_eq!(state.view().items[0].stage, Stage::Done);
}

#[test]
fn unknown_item_messages_are_ignored() {
    let (state, _) = submit_urls(AppState::new(), "a.com\n");
    let before = state.clone();
    let (state, effects) = update(
        state,
        Msg::ItemDone {
            item_id: 42,
            outcome: ItemOutcome::Failed {
                message: "?".to_string(),
            },
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state, before);
}
