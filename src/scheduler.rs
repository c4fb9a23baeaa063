//! Phase scheduler: what runs on each of the 27 ticks of a tock.
//!
//! Every tick first refreshes the display, then runs at most one slice of
//! pattern or protocol work.  The table is fixed at compile time.
//!
//! ```text
//! ┌───────┬──────────────────────────────────────────────────────┐
//! │ phase │ work after the display refresh                       │
//! ├───────┼──────────────────────────────────────────────────────┤
//! │ 0 3 6 │ chase countdown, pixel 0 / 1 / 2                     │
//! │ 1 4 7 │ chase advance (step or jump) on expiry               │
//! │ 2 5 8 │ chase reload on expiry                               │
//! │ 9..19 │ odd: xorshift step                                   │
//! │ 10..20│ even: draw into pending slot 0 1 2 0 1 2             │
//! │ 21    │ colour countdown                                     │
//! │ 22    │ colour wheel advance on expiry                       │
//! │ 23..25│ apply wheel colour to pixel 0 / 1 / 2                │
//! │ 26    │ tock boundary: presence watchdog                     │
//! └───────┴──────────────────────────────────────────────────────┘
//! ```

use crate::timebase::TICKS_PER_TOCK;

// ═══════════════════════════════════════════════════════════════
//  Task identity
// ═══════════════════════════════════════════════════════════════

/// One unit of per-tick work.  Pixel and slot arguments are `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickTask {
    /// Refresh the charlieplex lines for this phase.
    Display,
    ChaseCountdown(u8),
    ChaseAdvance(u8),
    ChaseReload(u8),
    RandomStep,
    RandomAccept(u8),
    ColorCountdown,
    ColorAdvance,
    ColorApply(u8),
    /// Last phase of the tock: presence watchdog and status lines.
    TockBoundary,
}

/// Ordered tasks for one phase.
pub type PhaseTasks = [Option<TickTask>; 2];

// ═══════════════════════════════════════════════════════════════
//  Table
// ═══════════════════════════════════════════════════════════════

pub static PHASE_TABLE: [PhaseTasks; TICKS_PER_TOCK as usize] = build_phase_table();

const fn spread_task(phase: u8) -> TickTask {
    match phase {
        0..=8 => {
            let pixel = phase / 3;
            match phase % 3 {
                0 => TickTask::ChaseCountdown(pixel),
                1 => TickTask::ChaseAdvance(pixel),
                _ => TickTask::ChaseReload(pixel),
            }
        }
        9..=20 => {
            if phase % 2 == 1 {
                TickTask::RandomStep
            } else {
                TickTask::RandomAccept(((phase - 10) / 2) % 3)
            }
        }
        21 => TickTask::ColorCountdown,
        22 => TickTask::ColorAdvance,
        23..=25 => TickTask::ColorApply(phase - 23),
        _ => TickTask::TockBoundary,
    }
}

const fn build_phase_table() -> [PhaseTasks; TICKS_PER_TOCK as usize] {
    let mut table = [[None; 2]; TICKS_PER_TOCK as usize];
    let mut phase = 0;
    while phase < TICKS_PER_TOCK {
        table[phase as usize] = [Some(TickTask::Display), Some(spread_task(phase))];
        phase += 1;
    }
    table
}

/// Tasks for `phase`; out-of-range phases get nothing.
pub fn tasks_for(phase: u8) -> impl Iterator<Item = TickTask> {
    PHASE_TABLE
        .get(phase as usize)
        .into_iter()
        .flatten()
        .copied()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_always_runs_first() {
        for phase in 0..TICKS_PER_TOCK {
            assert_eq!(tasks_for(phase).next(), Some(TickTask::Display), "phase {phase}");
        }
    }

    #[test]
    fn slot_layout() {
        let second = |p: u8| tasks_for(p).nth(1);
        assert_eq!(second(0), Some(TickTask::ChaseCountdown(0)));
        assert_eq!(second(4), Some(TickTask::ChaseAdvance(1)));
        assert_eq!(second(8), Some(TickTask::ChaseReload(2)));
        assert_eq!(second(9), Some(TickTask::RandomStep));
        assert_eq!(second(10), Some(TickTask::RandomAccept(0)));
        assert_eq!(second(14), Some(TickTask::RandomAccept(2)));
        assert_eq!(second(16), Some(TickTask::RandomAccept(0)));
        assert_eq!(second(20), Some(TickTask::RandomAccept(2)));
        assert_eq!(second(21), Some(TickTask::ColorCountdown));
        assert_eq!(second(22), Some(TickTask::ColorAdvance));
        assert_eq!(second(25), Some(TickTask::ColorApply(2)));
        assert_eq!(second(26), Some(TickTask::TockBoundary));
    }

    #[test]
    fn six_rng_steps_and_draws_per_tock() {
        let all: Vec<TickTask> = (0..TICKS_PER_TOCK).flat_map(tasks_for).collect();
        assert_eq!(all.iter().filter(|t| **t == TickTask::RandomStep).count(), 6);
        assert_eq!(
            all.iter()
                .filter(|t| matches!(t, TickTask::RandomAccept(_)))
                .count(),
            6
        );
        assert_eq!(all.iter().filter(|t| **t == TickTask::TockBoundary).count(), 1);
    }

    #[test]
    fn out_of_range_phase_is_empty() {
        assert_eq!(tasks_for(27).count(), 0);
    }
}
