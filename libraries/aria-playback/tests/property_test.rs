//! Property-based tests for the playback engine
//!
//! Uses proptest to verify the store invariants across randomized command
//! sequences: queue/index consistency, shuffle reversibility, and the
//! permutation contract of the shuffle utility.

use aria_core::{Track, TrackId};
use aria_playback::{shuffled, PlayerStore};
use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

// ===== Helpers =====

fn make_track(id: usize, duration_secs: u64) -> Track {
    let mut t = Track::new(format!("Track {id}"), "Artist", "Album")
        .with_duration(Duration::from_secs(duration_secs))
        .with_audio_url(format!("/audio/{id}.mp3"));
    t.id = TrackId::new(format!("t{id}"));
    t
}

fn arbitrary_tracks() -> impl Strategy<Value = Vec<Track>> {
    prop::collection::vec(1u64..600, 1..30).prop_map(|durations| {
        durations
            .into_iter()
            .enumerate()
            .map(|(i, d)| make_track(i, d))
            .collect()
    })
}

fn multiset(ids: impl Iterator<Item = String>) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for id in ids {
        *counts.entry(id).or_insert(0) += 1;
    }
    counts
}

/// The invariants of §3, checked after every command
fn assert_invariants(store: &PlayerStore) {
    let state = store.state();

    // queue_index is valid and points at the current track
    match (state.queue_index, &state.current_track) {
        (Some(idx), Some(current)) => {
            assert!(idx < state.queue.len(), "index {idx} out of bounds");
            assert_eq!(state.queue[idx].id, current.id, "index points at wrong track");
        }
        (Some(_), None) => panic!("index set with no current track"),
        _ => {}
    }

    // queue and original_queue are permutations of each other
    assert_eq!(
        multiset(state.queue.iter().map(|t| t.id.to_string())),
        multiset(state.original_queue.iter().map(|t| t.id.to_string())),
    );

    // unshuffled queue equals the original exactly
    if !state.is_shuffled {
        assert_eq!(state.queue, state.original_queue);
    }

    // duration mirrors the current track
    match &state.current_track {
        Some(track) => assert_eq!(state.duration, track.duration),
        None => assert_eq!(state.duration, Duration::ZERO),
    }

    // volume stays clamped
    let level = state.volume.level();
    assert!((0.0..=1.0).contains(&level));
}

// ===== Shuffle utility =====

proptest! {
    /// Shuffle output is a permutation of the input, input untouched
    #[test]
    fn shuffle_is_a_permutation(items in prop::collection::vec(0u32..1000, 0..100)) {
        let before = items.clone();
        let out = shuffled(&items);

        prop_assert_eq!(&items, &before, "input was modified");
        prop_assert_eq!(out.len(), items.len());

        let mut sorted_in = items;
        let mut sorted_out = out;
        sorted_in.sort_unstable();
        sorted_out.sort_unstable();
        prop_assert_eq!(sorted_in, sorted_out);
    }

    /// Length 0 and 1 inputs come back exactly as given
    #[test]
    fn shuffle_identity_on_trivial_input(item in any::<u32>()) {
        prop_assert_eq!(shuffled::<u32>(&[]), Vec::<u32>::new());
        prop_assert_eq!(shuffled(&[item]), vec![item]);
    }
}

// ===== Store invariants =====

proptest! {
    /// Invariants hold after any sequence of commands
    #[test]
    fn invariants_survive_random_commands(
        tracks in arbitrary_tracks(),
        start in 0usize..40,
        ops in prop::collection::vec(0u8..11, 1..60)
    ) {
        let mut store = PlayerStore::default();
        store.set_queue(tracks.clone(), start % (tracks.len() + 1));
        assert_invariants(&store);

        for op in ops {
            match op {
                0 => store.play(),
                1 => store.pause(),
                2 => store.toggle_play(),
                3 => store.next_track(),
                4 => store.previous_track(),
                5 => store.toggle_shuffle(),
                6 => store.toggle_repeat(),
                7 => store.set_progress(Duration::from_secs(5)),
                8 => store.seek(-1.5),
                9 => store.seek(f64::INFINITY),
                _ => store.stop(),
            }
            assert_invariants(&store);
        }
    }

    /// Toggling shuffle on then off restores the exact original order,
    /// with the index still pointing at the same track
    #[test]
    fn shuffle_round_trip_restores_order(
        tracks in arbitrary_tracks(),
        start in 0usize..40,
    ) {
        let start = start % tracks.len();
        let mut store = PlayerStore::default();
        store.set_queue(tracks.clone(), start);
        let before = store.state().current_track.clone().unwrap();

        store.toggle_shuffle();
        assert_invariants(&store);
        store.toggle_shuffle();
        assert_invariants(&store);

        let state = store.state();
        prop_assert_eq!(&state.queue, &tracks);
        prop_assert_eq!(
            &state.current_track.as_ref().unwrap().id,
            &before.id
        );
        prop_assert_eq!(state.queue_index, Some(start));
    }

    /// Repeat-one never changes the current track, only resets progress
    #[test]
    fn repeat_one_is_sticky(
        tracks in arbitrary_tracks(),
        presses in 1usize..20,
    ) {
        let mut store = PlayerStore::default();
        store.set_queue(tracks, 0);
        store.toggle_repeat();
        store.toggle_repeat(); // off -> all -> one

        let before = store.state().current_track.clone().unwrap();
        for _ in 0..presses {
            store.set_progress(Duration::from_secs(10));
            store.next_track();
            let state = store.state();
            prop_assert_eq!(&state.current_track.as_ref().unwrap().id, &before.id);
            prop_assert_eq!(state.progress, Duration::ZERO);
        }
    }

    /// Volume always lands clamped, mute derived from the clamped value,
    /// even for non-finite input
    #[test]
    fn volume_clamp_and_mute(
        level in prop_oneof![
            8 => -2.0f32..3.0,
            1 => Just(f32::NAN),
            1 => Just(f32::INFINITY),
            1 => Just(f32::NEG_INFINITY),
        ]
    ) {
        let mut store = PlayerStore::default();
        store.set_volume(level);

        let volume = store.state().volume;
        prop_assert!(volume.level().is_finite());
        prop_assert!((0.0..=1.0).contains(&volume.level()));
        prop_assert_eq!(volume.is_muted(), volume.level() == 0.0);
    }
}
