use std::io::{self, Write};
use std::time::Instant;

use crate::sweep::SweepStep;

// Console progress line for a sweep. Repaints over itself with a carriage
// return after every observed step:
//   Rendering 42% |****      | 107/255 [1min 10.2s remaining, 2.13 iter/s]
pub struct ConsoleProgress {
    desc: String,
    bar_length: usize,
    start: Instant,
    last: Instant,
}

impl ConsoleProgress {
    pub fn new(desc: &str) -> ConsoleProgress {
        let now = Instant::now();
        ConsoleProgress {
            desc: desc.to_owned(),
            bar_length: 10,
            start: now,
            last: now,
        }
    }

    pub fn observe(&mut self, step: &SweepStep) {
        let now = Instant::now();
        let rate = 1. / now.duration_since(self.last).as_secs_f32().max(1e-6);
        self.last = now;

        let progress = (step.pixel + 1) as f32 / step.total as f32;
        let elapsed = now.duration_since(self.start).as_secs_f32();
        let remaining = elapsed / progress - elapsed;

        let prefix = if self.desc.is_empty() {
            String::new()
        } else {
            format!("{} ", self.desc)
        };

        print!(
            "\r{}{} {}/{} [{} remaining, {:.2} iter/s]",
            prefix,
            render_bar(self.bar_length, progress),
            step.pixel + 1,
            step.total,
            format_duration(remaining),
            rate
        );
        let _ = io::stdout().flush();

        // Leave the finished bar on its own line.
        if step.pixel + 1 == step.total {
            println!();
        }
    }
}

// Bar with a leading percentage: `42% |****      |`.
pub fn render_bar(length: usize, progress: f32) -> String {
    let filled = ((progress * length as f32).floor() as usize).min(length);

    format!(
        "{}% |{}{}|",
        (progress * 100.) as u32,
        "*".repeat(filled),
        " ".repeat(length - filled)
    )
}

// Renders seconds as `d h min s`, hiding leading units that are zero.
// In-between zeroes stay visible: 1d 0h 0min 12s.
pub fn format_duration(seconds: f32) -> String {
    let seconds = seconds.max(0.);
    let days = (seconds / 86400.).floor();
    let mut remaining = seconds % 86400.;
    let hours = (remaining / 3600.).floor();
    remaining %= 3600.;
    let minutes = (remaining / 60.).floor();
    remaining %= 60.;

    let mut out = String::new();
    if days >= 1. {
        out += &format!("{}d ", days as u64);
    }
    if hours >= 1. || !out.is_empty() {
        out += &format!("{}h ", hours as u64);
    }
    if minutes >= 1. || !out.is_empty() {
        out += &format!("{}min ", minutes as u64);
    }
    out += &format!("{}s", (remaining * 100.).round() / 100.);

    out
}
