use super::evolution_engine::GenerationReport;

pub trait GenerationObserver: Send {
    fn on_generation_complete(&mut self, report: &GenerationReport);
}

/// Logs progress every `every` generations
pub struct LogObserver {
    every: u64,
}

impl LogObserver {
    pub fn new(every: u64) -> Self {
        Self { every: every.max(1) }
    }
}

impl GenerationObserver for LogObserver {
    fn on_generation_complete(&mut self, report: &GenerationReport) {
        if report.generation % self.every == 0 {
            log::info!(
                "Generation {} complete. Best fitness: {:.4}, population: {}",
                report.generation,
                report.best_fitness,
                report.population_size
            );
        }
    }
}

// For forwarding reports to another thread (e.g. a renderer)
pub struct ChannelObserver {
    sender: std::sync::mpsc::Sender<GenerationReport>,
}

impl ChannelObserver {
    pub fn new(sender: std::sync::mpsc::Sender<GenerationReport>) -> Self {
        Self { sender }
    }
}

impl GenerationObserver for ChannelObserver {
    fn on_generation_complete(&mut self, report: &GenerationReport) {
        if self.sender.send(report.clone()).is_err() {
            log::debug!(
                "Dropping report for generation {}: receiver disconnected",
                report.generation
            );
        }
    }
}
