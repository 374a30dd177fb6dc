//! Moving average over a fixed window of sensor samples.
//!
//! Run with `cargo run --example sample_window -- 8 3 5 9 1 4 7`.

use anyhow::{bail, Context, Result};
use fixed_deque::{Deque, Queue};

const WINDOW: usize = 4;

fn main() -> Result<()> {
    let samples = std::env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<i64>()
                .with_context(|| format!("sample {arg:?} is not an integer"))
        })
        .collect::<Result<Vec<_>>>()?;
    if samples.is_empty() {
        bail!("usage: sample_window <sample>...");
    }

    let mut window: Deque<i64, WINDOW> = Deque::new();
    let mut sum = 0i64;
    for &sample in &samples {
        if window.is_full() {
            sum -= window.try_pop_front().unwrap_or_default();
        }
        window.push_back(sample);
        sum += sample;
        println!("{sample:>6} -> window {window:?}, mean {:.2}", sum as f64 / window.len() as f64);
    }

    // Replay the last window as a FIFO of alerts above the final mean.
    let mean = sum / window.len() as i64;
    let mut alerts: Queue<i64, WINDOW> = Queue::new();
    alerts.extend(window.iter().copied().filter(|&s| s > mean));
    while let Some(alert) = alerts.try_pop() {
        println!("above mean {mean}: {alert}");
    }

    Ok(())
}
