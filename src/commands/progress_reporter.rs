use crate::approval::Progress;
use core::time::Duration;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Refresh rate for progress updates (10 Hz).
const REFRESH_INTERVAL_MS: u64 = 100;

const DETERMINATE_TEMPLATE: &str = "{prefix:>12.bold.cyan} [{bar:25}] {pos}/{len} versions";
const DETERMINATE_TEMPLATE_NO_COLOR: &str = "{prefix:>12} [{bar:25}] {pos}/{len} versions";
const INDETERMINATE_TEMPLATE: &str = "{prefix:>12.bold.cyan} {spinner} {elapsed}";
const INDETERMINATE_TEMPLATE_NO_COLOR: &str = "{prefix:>12} {spinner} {elapsed}";

/// Progress of the approval scan, drawn on stderr.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    bar: ProgressBar,
    use_colors: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter.
    ///
    /// When `visible` is false nothing is drawn. When `use_colors` is false, progress bar chrome is
    /// rendered without ANSI styling.
    #[must_use]
    pub fn new(visible: bool, use_colors: bool) -> Self {
        let bar = if visible {
            ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr_with_hz(10))
        } else {
            ProgressBar::hidden()
        };

        let reporter = Self { bar, use_colors };
        reporter.apply_template(INDETERMINATE_TEMPLATE, INDETERMINATE_TEMPLATE_NO_COLOR);
        reporter.bar.enable_steady_tick(Duration::from_millis(REFRESH_INTERVAL_MS));
        reporter
    }

    fn apply_template(&self, colored: &str, plain: &str) {
        let template = if self.use_colors { colored } else { plain };
        match ProgressStyle::with_template(template) {
            Ok(style) => self.bar.set_style(style.progress_chars("=> ")),
            Err(e) => log::debug!(target: "  progress", "Invalid progress template '{template}': {e}"),
        }
    }
}

impl Progress for ProgressReporter {
    fn set_phase(&self, phase: &str) {
        self.bar.set_prefix(phase.to_string());
    }

    fn set_total(&self, total: u64) {
        self.bar.disable_steady_tick();
        self.apply_template(DETERMINATE_TEMPLATE, DETERMINATE_TEMPLATE_NO_COLOR);
        self.bar.set_length(total);
        self.bar.set_position(0);
    }

    fn advance(&self) {
        self.bar.inc(1);
    }

    fn done(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_reporter_tracks_position() {
        let reporter = ProgressReporter::new(false, false);
        reporter.set_phase("Scanning");
        reporter.set_total(3);
        reporter.advance();
        reporter.advance();
        assert_eq!(reporter.bar.position(), 2);
        assert_eq!(reporter.bar.length(), Some(3));
        assert_eq!(reporter.bar.prefix(), "Scanning");
        reporter.done();
        assert!(reporter.bar.is_finished());
    }
}
