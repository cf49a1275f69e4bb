use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::TICK_INTERVAL;
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str = "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}";

pub struct ProgressReporter {
    term: Term,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_bar: None,
        }
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn building_graph(&self, edge_count: usize) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Building graph from {} edge triples...",
            style("🕸").cyan(),
            style(edge_count).yellow()
        );
    }

    pub fn start_layout(&mut self, iterations: usize) {
        let pb = self.create_progress_bar(iterations as u64, "Settling spring layout");
        self.current_bar = Some(pb);
    }

    pub fn update_layout_progress(&self, iteration: usize, movement: f64) {
        if let Some(ref pb) = self.current_bar {
            pb.set_position(iteration as u64);
            pb.set_message(format!("Settling spring layout (movement {movement:.5})"));
        }
    }

    pub fn finish_layout(&mut self, iterations: usize, converged: bool) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        if converged {
            eprintln!(
                "{} Layout settled after {} {}",
                style("✓").green(),
                style(iterations).yellow().bold(),
                pluralize("iteration", iterations)
            );
        } else {
            eprintln!(
                "{} Layout stopped at the iteration budget ({})",
                style("ℹ").blue(),
                style(iterations).yellow().bold()
            );
        }
    }
}
