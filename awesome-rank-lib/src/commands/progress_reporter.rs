use crate::facts::Progress;
use core::time::Duration;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Instant;

const TICK_INTERVAL_MS: u64 = 100;

const DETERMINATE_TEMPLATE: &str = "{prefix:>12.bold.cyan} [{bar:25}] {pos}/{len} {msg}";
const DETERMINATE_TEMPLATE_NO_COLOR: &str = "{prefix:>12} [{bar:25}] {pos}/{len} {msg}";
const INDETERMINATE_TEMPLATE: &str = "{prefix:>12.bold.cyan} {spinner} {elapsed}";
const INDETERMINATE_TEMPLATE_NO_COLOR: &str = "{prefix:>12} {spinner} {elapsed}";

/// A progress bar on stderr that stays hidden until the run has lasted longer than a delay.
///
/// A disabled reporter never draws anything, which is what the commands use when logging is on.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    bar: ProgressBar,
    visible_after: Option<Instant>,
    use_colors: bool,
}

impl ProgressReporter {
    #[must_use]
    pub fn new(enabled: bool, delay: Duration, use_colors: bool) -> Self {
        let bar = ProgressBar::hidden();
        let visible_after = enabled.then(|| Instant::now() + delay);

        let reporter = Self {
            bar,
            visible_after,
            use_colors,
        };
        reporter.set_spinner_style();
        reporter
    }

    /// Start drawing once the delay has passed.
    fn reveal_if_due(&self) {
        if let Some(visible_after) = self.visible_after
            && self.bar.is_hidden()
            && Instant::now() >= visible_after
        {
            self.bar.set_draw_target(ProgressDrawTarget::stderr_with_hz(10));
        }
    }

    fn set_spinner_style(&self) {
        let template = if self.use_colors { INDETERMINATE_TEMPLATE } else { INDETERMINATE_TEMPLATE_NO_COLOR };
        if let Ok(style) = ProgressStyle::default_spinner().template(template) {
            self.bar.set_style(style);
        }
        if self.ticks() {
            self.bar.enable_steady_tick(Duration::from_millis(TICK_INTERVAL_MS));
        }
    }

    /// Only a reporter that can become visible animates its spinner.
    const fn ticks(&self) -> bool {
        self.visible_after.is_some()
    }

    fn set_bar_style(&self) {
        self.bar.disable_steady_tick();
        let template = if self.use_colors { DETERMINATE_TEMPLATE } else { DETERMINATE_TEMPLATE_NO_COLOR };
        if let Ok(style) = ProgressStyle::default_bar().template(template) {
            self.bar.set_style(style.progress_chars("=> "));
        }
    }
}

impl Progress for ProgressReporter {
    fn set_phase(&self, phase: &str) {
        self.bar.set_prefix(phase.to_string());
        self.reveal_if_due();
    }

    fn set_total(&self, total: u64) {
        self.set_bar_style();
        self.bar.set_length(total);
        self.bar.set_position(0);
        self.reveal_if_due();
    }

    fn advance(&self, completed: u64, current: &str) {
        self.bar.set_position(completed);
        self.bar.set_message(current.to_string());
        self.reveal_if_due();
    }

    fn done(&self) {
        self.bar.finish_and_clear();
    }
}
