//! Property tests for the schedule and cursor laws.

use std::sync::Arc;

use proptest::prelude::*;

use feltclock_core::clock::ManualClock;
use feltclock_core::cursor::Cursor;
use feltclock_core::schedule::Schedule;

fn arb_schedule() -> impl Strategy<Value = Schedule> {
    // Random interleavings of levels and breaks, including zero-minute
    // blocks from the fault-tolerant coercion.
    prop::collection::vec((0i64..180, any::<bool>()), 1..40).prop_map(|entries| {
        let mut s = Schedule::new("Generated");
        for (i, (minutes, is_break)) in entries.into_iter().enumerate() {
            if is_break {
                s.add_break(format!("Break {i}"), minutes);
            } else {
                s.add_level(format!("Level {i}"), minutes);
            }
        }
        s
    })
}

proptest! {
    #[test]
    fn blocks_tile_the_timeline(schedule in arb_schedule()) {
        let mut expected_start = 0;
        for block in schedule.blocks() {
            prop_assert_eq!(block.start, expected_start);
            expected_start = block.end();
        }
        prop_assert_eq!(schedule.total_duration(), expected_start);
    }

    #[test]
    fn pause_then_play_preserves_elapsed(
        schedule in arb_schedule(),
        run_secs in 0i64..5_000,
        gap_secs in 0i64..5_000,
    ) {
        let clock = ManualClock::new();
        let mut cursor = Cursor::new(Arc::new(schedule), clock.clone());
        cursor.play();
        clock.advance_secs(run_secs);
        cursor.pause();
        let frozen = cursor.elapsed_seconds();
        clock.advance_secs(gap_secs);
        cursor.play();
        prop_assert_eq!(cursor.elapsed_seconds(), frozen);
    }

    #[test]
    fn goto_elapsed_reads_back_exactly(schedule in arb_schedule(), offset in 0u64..50_000) {
        let clock = ManualClock::new();
        let mut cursor = Cursor::new(Arc::new(schedule), clock);
        let seconds = offset as f64;
        cursor.goto_elapsed(seconds);
        prop_assert_eq!(cursor.elapsed_seconds(), seconds);
    }

    #[test]
    fn goto_elapsed_resolves_the_containing_block(
        schedule in arb_schedule(),
        offset in 0u64..50_000,
    ) {
        let clock = ManualClock::new();
        let mut cursor = Cursor::new(Arc::new(schedule), clock);
        cursor.goto_elapsed(offset as f64);
        let schedule = cursor.schedule();
        let block = &schedule.blocks()[cursor.block_index()];
        if offset < schedule.total_duration() {
            // Inside the schedule: the block's range contains the offset,
            // except that zero-duration blocks can never contain anything.
            prop_assert!(block.start <= offset && (offset < block.end() || block.duration == 0));
        } else {
            prop_assert_eq!(cursor.block_index(), schedule.len() - 1);
        }
    }

    #[test]
    fn tick_is_monotone_and_single_step(
        schedule in arb_schedule(),
        advances in prop::collection::vec(0i64..600, 1..60),
    ) {
        let clock = ManualClock::new();
        let mut cursor = Cursor::new(Arc::new(schedule), clock.clone());
        cursor.play();
        for step in advances {
            clock.advance_secs(step);
            let before = cursor.block_index();
            cursor.tick();
            let after = cursor.block_index();
            prop_assert!(after >= before);
            prop_assert!(after - before <= 1);
        }
    }
}
