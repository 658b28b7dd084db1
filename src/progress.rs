//! Percentage progress messages for long-running stages.

/// Prints `<label>: <pct>% (<i>/<total>)` every `interval` items.
#[derive(Debug, Clone)]
pub struct Progress {
    label: &'static str,
    total: usize,
    interval: usize,
    enabled: bool,
}

impl Progress {
    /// Create a reporter for `total` items, sampling every `interval` items
    pub fn new(label: &'static str, total: usize, interval: usize, enabled: bool) -> Self {
        Self {
            label,
            total,
            interval: interval.max(1),
            enabled,
        }
    }

    /// Report item `index` if it falls on the sampling interval
    pub fn tick(&self, index: usize) {
        if self.enabled && index % self.interval == 0 {
            println!("{}", self.message(index));
        }
    }

    /// Report completion
    pub fn finish(&self) {
        if self.enabled {
            println!("{}", self.message(self.total));
        }
    }

    /// Render the message for item `index`
    pub fn message(&self, index: usize) -> String {
        format!(
            "{}: {:.1}% ({}/{})",
            self.label,
            percent(index, self.total),
            index,
            self.total
        )
    }
}

#[allow(clippy::cast_precision_loss)]
fn percent(done: usize, total: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        done as f64 / total as f64 * 100.0
    }
}
