use story_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new("React");
    for msg in [Msg::NoOp, Msg::Tick] {
        let (next, effects) = update(state.clone(), msg);

        assert_eq!(state, next);
        assert!(effects.is_empty());
    }
}
