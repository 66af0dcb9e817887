use anyhow::Context;
use chromablob::config::ConfigManager;
use chromablob::engines::generation::LogObserver;
use chromablob::services::GenerationRunner;
use chromablob::types::{grid_cell, Member};
use std::time::Instant;

const GRID_COLUMNS: usize = 10;
const CELL_SIZE: f64 = 40.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    match std::env::args().nth(1) {
        Some(path) => manager
            .load_from_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => manager.load_from_env().context("loading config from environment")?,
    }
    let config = manager.get()?;

    let mut runner = GenerationRunner::from_config(&config, Instant::now())?
        .with_observer(Box::new(LogObserver::new(config.driver.report_every)));

    log::info!(
        "Running with capacity {}, fitness {}, alpha {} (-{} per generation)",
        config.evolution.capacity,
        runner.fitness_name(),
        config.driver.alpha_start,
        config.driver.alpha_decay
    );

    let poll = config.driver.tick_interval() / 4;
    loop {
        if let Some(limit) = config.driver.generation_limit() {
            if runner.engine().generation() >= limit {
                break;
            }
        }
        if runner.tick(Instant::now())?.is_none() {
            std::thread::sleep(poll);
        }
    }

    print_grid(runner.snapshot());
    Ok(())
}

fn print_grid(members: &[Member]) {
    let mut row = Vec::with_capacity(GRID_COLUMNS);
    let mut current_y = 0.0;

    for (i, member) in members.iter().enumerate() {
        let (_, y, _, _) = grid_cell(i, GRID_COLUMNS, CELL_SIZE);
        if y != current_y {
            println!("{}", row.join(" "));
            row.clear();
            current_y = y;
        }
        row.push(member.hex());
    }

    if !row.is_empty() {
        println!("{}", row.join(" "));
    }
}
