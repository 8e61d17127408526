//! Times the phases of a small compute pipeline and prints per-iteration figures.

use std::hint::black_box;

use phase_timer::{PhaseTimer, Result};

const GENERATE: usize = 0;
const SORT: usize = 1;
const REDUCE: usize = 2;

const ELEMENTS: usize = 0;

const ITERATIONS: u32 = 20;

fn main() -> Result<()> {
    let mut timer = PhaseTimer::builder()
        .timers(3)
        .counters(1)
        .title("Sort pipeline")
        .build();

    timer.set_timer_name(GENERATE, "generate")?;
    timer.set_timer_name(SORT, "sort")?;
    timer.set_timer_name(REDUCE, "reduce")?;
    timer.set_counter_name(ELEMENTS, "elements")?;

    for seed in 0..ITERATIONS {
        timer.start(GENERATE)?;
        let mut values: Vec<u64> = (0..10_000_u64)
            .map(|i| i.wrapping_mul(2_654_435_761).wrapping_add(u64::from(seed)) % 1_000)
            .collect();
        timer.stop(GENERATE)?;

        {
            let _span = timer.measure(SORT)?;
            values.sort_unstable();
        }

        timer.start(REDUCE)?;
        let sum: u64 = values.iter().sum();
        timer.stop(REDUCE)?;

        timer.add(ELEMENTS, u64::try_from(values.len()).unwrap_or(u64::MAX))?;
        black_box(sum);
    }

    timer.print_to_stdout(f64::from(ITERATIONS));

    Ok(())
}
