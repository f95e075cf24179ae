// SPDX-License-Identifier: MPL-2.0
use newsdeck::config::{self, Config, FeedConfig, GestureConfig};
use newsdeck::deck::{Deck, DeckUpdate, Key};
use newsdeck::domain::gesture::{Axis, Intent};
use newsdeck::domain::news::{ItemId, NewsItem, ReactionKind};
use newsdeck::error::{Error, FeedError};
use newsdeck::gesture::{GestureEvent, GestureSample, GestureSignal};
use newsdeck::reactions::ReactionLedger;
use tempfile::tempdir;

fn feed(ids: &[&str]) -> Vec<NewsItem> {
    ids.iter().map(|id| NewsItem::new(*id, *id)).collect()
}

fn start(x: f32, y: f32) -> GestureEvent {
    GestureEvent::Start {
        sample: GestureSample::at_millis(x, y, 0),
        contacts: 1,
    }
}

fn moved(x: f32, y: f32, ms: u64) -> GestureEvent {
    GestureEvent::Move {
        sample: GestureSample::at_millis(x, y, ms),
        contacts: 1,
    }
}

fn end(x: f32, y: f32, ms: u64) -> GestureEvent {
    GestureEvent::release(GestureSample::at_millis(x, y, ms))
}

fn current_id(deck: &Deck) -> Option<&str> {
    deck.current().map(|item| item.id.as_str())
}

#[test]
fn thresholds_from_settings_file_drive_the_deck() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        gesture: GestureConfig {
            threshold_px: Some(120.0),
            ..GestureConfig::default()
        },
        feed: FeedConfig::default(),
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");

    let mut deck = Deck::new(loaded.gesture_settings(), ReactionLedger::new());
    deck.apply_fetch(Ok(feed(&["a", "b"])))
        .expect("fetch applies");

    // 100 px clears the default threshold but not the configured one.
    deck.on_gesture_event(start(50.0, 400.0));
    let (signal, update) = deck.on_gesture_event(end(50.0, 300.0, 150));
    assert_eq!(signal, GestureSignal::Finished(Intent::None));
    assert_eq!(update, DeckUpdate::Unchanged);

    deck.on_gesture_event(start(50.0, 400.0));
    let (signal, _) = deck.on_gesture_event(end(50.0, 250.0, 150));
    assert_eq!(signal, GestureSignal::Finished(Intent::Next));
    assert_eq!(current_id(&deck), Some("b"));
}

#[test]
fn full_drag_locks_then_navigates() {
    let mut deck = Deck::default();
    deck.apply_fetch(Ok(feed(&["a", "b", "c"])))
        .expect("fetch applies");

    assert_eq!(deck.on_gesture_event(start(100.0, 500.0)).0, GestureSignal::Tracking);
    assert_eq!(
        deck.on_gesture_event(moved(101.0, 480.0, 40)).0,
        GestureSignal::Locked(Axis::Vertical)
    );
    assert!(deck.tracker().is_scroll_suppressed());
    assert_eq!(
        deck.on_gesture_event(moved(102.0, 420.0, 80)).0,
        GestureSignal::Tracking
    );

    let (signal, update) = deck.on_gesture_event(end(102.0, 380.0, 140));
    assert_eq!(signal, GestureSignal::Finished(Intent::Next));
    assert!(update.is_changed());
    assert_eq!(current_id(&deck), Some("b"));
    assert!(!deck.tracker().is_tracking());
}

#[test]
fn horizontal_drag_never_navigates() {
    let mut deck = Deck::default();
    deck.apply_fetch(Ok(feed(&["a", "b"])))
        .expect("fetch applies");

    deck.on_gesture_event(start(100.0, 500.0));
    assert_eq!(
        deck.on_gesture_event(moved(140.0, 498.0, 30)).0,
        GestureSignal::Locked(Axis::Horizontal)
    );
    // Later vertical travel cannot override the horizontal lock.
    deck.on_gesture_event(moved(145.0, 300.0, 90));
    let (signal, update) = deck.on_gesture_event(end(145.0, 250.0, 150));
    assert_eq!(signal, GestureSignal::Finished(Intent::None));
    assert_eq!(update, DeckUpdate::Unchanged);
    assert_eq!(current_id(&deck), Some("a"));
}

#[test]
fn pinch_is_ignored() {
    let mut deck = Deck::default();
    deck.apply_fetch(Ok(feed(&["a", "b"])))
        .expect("fetch applies");

    let pinch = GestureEvent::Start {
        sample: GestureSample::at_millis(100.0, 500.0, 0),
        contacts: 2,
    };
    assert_eq!(deck.on_gesture_event(pinch).0, GestureSignal::Ignored);
    assert_eq!(
        deck.on_gesture_event(end(100.0, 300.0, 100)).0,
        GestureSignal::Ignored
    );
    assert_eq!(current_id(&deck), Some("a"));

    // Second finger lands while the first is already dragging.
    deck.on_gesture_event(start(100.0, 400.0));
    let second_finger = GestureEvent::Start {
        sample: GestureSample::at_millis(160.0, 380.0, 20),
        contacts: 2,
    };
    assert_eq!(deck.on_gesture_event(second_finger).0, GestureSignal::Ignored);
    let (signal, update) = deck.on_gesture_event(end(100.0, 250.0, 150));
    assert_eq!(signal, GestureSignal::Ignored);
    assert_eq!(update, DeckUpdate::Unchanged);
    assert_eq!(current_id(&deck), Some("a"));
}

#[test]
fn keys_buttons_and_swipes_share_boundaries() {
    let mut deck = Deck::default();
    deck.apply_fetch(Ok(feed(&["a", "b", "c"])))
        .expect("fetch applies");

    deck.on_key(Key::ArrowUp);
    deck.next();
    deck.on_gesture_event(start(0.0, 300.0));
    deck.on_gesture_event(end(0.0, 200.0, 150));
    assert_eq!(current_id(&deck), Some("c"));
    assert!(deck.info().has_previous);
    assert!(!deck.info().has_next);

    deck.prev();
    deck.prev();
    deck.on_key(Key::ArrowDown);
    assert_eq!(current_id(&deck), Some("a"));
    assert_eq!(deck.info().current_index, Some(0));
}

#[test]
fn failed_refresh_keeps_reading_position() {
    let mut deck = Deck::default();
    deck.apply_fetch(Ok(feed(&["a", "b", "c"])))
        .expect("fetch applies");
    deck.next();

    let result = deck.apply_fetch(Err(Error::Feed(FeedError::Request(
        "connection refused".into(),
    ))));
    assert!(result.is_err());
    assert_eq!(current_id(&deck), Some("b"));
    assert_eq!(deck.info().total_count, 3);
}

#[test]
fn reactions_persist_between_sessions() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let data_dir = dir.path().to_path_buf();

    let mut deck = Deck::default();
    deck.apply_fetch(Ok(feed(&["a", "b"])))
        .expect("fetch applies");
    deck.next();
    assert!(deck.react(ReactionKind::Like).is_some());
    assert!(deck.ledger().save_to(Some(data_dir.clone())).is_none());

    let (ledger, warning) = ReactionLedger::load_from(Some(data_dir));
    assert!(warning.is_none());
    assert_eq!(ledger.get(&ItemId::from("b")), Some(ReactionKind::Like));

    let mut next_session = Deck::new(Default::default(), ledger);
    next_session
        .apply_fetch(Ok(feed(&["b", "c"])))
        .expect("fetch applies");
    assert_eq!(next_session.my_reaction(), Some(ReactionKind::Like));
    assert!(next_session.react(ReactionKind::Like).is_none());
}
