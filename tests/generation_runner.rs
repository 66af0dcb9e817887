use chromablob::config::AppConfig;
use chromablob::engines::fitness::SumPlusSpread;
use chromablob::engines::generation::{ChannelObserver, Mutation, PopulationEngine};
use chromablob::services::{AlphaSchedule, GenerationRunner};
use chromablob::BlobError;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

fn runner(started: Instant) -> GenerationRunner {
    let mut engine = PopulationEngine::new(100, Mutation::Decaying, Some(77));
    engine.seed_zeroed(2);
    GenerationRunner::new(
        engine,
        Box::new(SumPlusSpread),
        AlphaSchedule::new(0.3, 0.001),
        Duration::from_millis(100),
        started,
    )
}

#[test]
fn test_tick_waits_for_interval() {
    let start = Instant::now();
    let mut runner = runner(start);

    assert!(runner.tick(start + Duration::from_millis(50)).unwrap().is_none());
    // exactly the interval is not enough
    assert!(runner.tick(start + Duration::from_millis(100)).unwrap().is_none());
    assert_eq!(runner.engine().generation(), 0);

    let report = runner.tick(start + Duration::from_millis(101)).unwrap();
    assert_eq!(report.map(|r| r.generation), Some(1));

    // timer restarted from the last tick
    assert!(runner.tick(start + Duration::from_millis(150)).unwrap().is_none());
    assert!(runner.tick(start + Duration::from_millis(202)).unwrap().is_some());
    assert_eq!(runner.engine().generation(), 2);
}

#[test]
fn test_trigger_advances_immediately_and_decays_alpha() {
    let start = Instant::now();
    let mut runner = runner(start);

    runner.trigger().unwrap();
    runner.trigger().unwrap();
    runner.trigger().unwrap();

    assert_eq!(runner.engine().generation(), 3);
    assert_eq!(runner.snapshot().len(), 5);
    assert!((runner.alpha() - 0.297).abs() < 1e-12);
}

#[test]
fn test_observer_receives_reports() {
    let (tx, rx) = channel();
    let mut runner = runner(Instant::now()).with_observer(Box::new(ChannelObserver::new(tx)));

    for _ in 0..4 {
        runner.trigger().unwrap();
    }

    let generations: Vec<u64> = rx.try_iter().map(|r| r.generation).collect();
    assert_eq!(generations, vec![1, 2, 3, 4]);
}

#[test]
fn test_exhausted_alpha_keeps_running() {
    let mut engine = PopulationEngine::new(10, Mutation::Decaying, Some(1));
    engine.seed_zeroed(2);
    let mut runner = GenerationRunner::new(
        engine,
        Box::new(SumPlusSpread),
        AlphaSchedule::new(0.0, 0.01),
        Duration::from_millis(100),
        Instant::now(),
    );

    for _ in 0..20 {
        runner.trigger().unwrap();
    }
    assert!(runner.alpha() < 0.0);
    // zeroed seed and no mutation: nothing ever leaves black
    assert!(runner.snapshot().iter().all(|m| m.channels() == [0.0, 0.0, 0.0]));
}

#[test]
fn test_from_config() {
    let mut config = AppConfig::default();
    config.evolution.capacity = 5;
    config.evolution.seed = Some(3);

    let mut runner = GenerationRunner::from_config(&config, Instant::now()).unwrap();
    assert_eq!(runner.snapshot().len(), 2);
    assert_eq!(runner.fitness_name(), "sum_plus_spread");

    for _ in 0..10 {
        runner.trigger().unwrap();
    }
    assert_eq!(runner.snapshot().len(), 5);
}

#[test]
fn test_from_invalid_config() {
    let mut config = AppConfig::default();
    config.driver.tick_interval_ms = 0;

    let result = GenerationRunner::from_config(&config, Instant::now());
    assert!(matches!(result, Err(BlobError::Configuration(_))));
}

#[test]
fn test_disconnected_observer_does_not_stop_runner() {
    let (tx, rx) = channel();
    let mut runner = runner(Instant::now()).with_observer(Box::new(ChannelObserver::new(tx)));
    drop(rx);

    for _ in 0..3 {
        runner.trigger().unwrap();
    }
    assert_eq!(runner.engine().generation(), 3);
}
