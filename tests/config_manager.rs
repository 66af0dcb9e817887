use chromablob::config::{AppConfig, ConfigManager};
use chromablob::engines::fitness::FitnessKind;
use chromablob::engines::generation::Mutation;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("chromablob_{}_{}.toml", name, std::process::id()))
}

#[test]
fn test_defaults() {
    let config = ConfigManager::new().get().unwrap();
    assert_eq!(config.evolution.capacity, 100);
    assert_eq!(config.evolution.initial_population, 2);
    assert_eq!(config.evolution.mutation, Mutation::Decaying);
    assert_eq!(config.driver.alpha_start, 0.3);
    assert_eq!(config.driver.alpha_decay, 0.001);
    assert_eq!(config.driver.tick_interval_ms, 100);
    assert!(config.validate().is_ok());
}

#[test]
fn test_save_and_load() {
    let path = temp_path("roundtrip");
    let manager = ConfigManager::new();
    manager
        .update(|c| {
            c.evolution.capacity = 42;
            c.evolution.fitness = FitnessKind::PopulationHsl;
            c.evolution.mutation = Mutation::Symmetric;
            c.evolution.seed = Some(9);
            c.driver.max_generations = 0;
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let loaded = ConfigManager::new();
    loaded.load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let config = loaded.get().unwrap();
    assert_eq!(config, manager.get().unwrap());
    assert_eq!(config.driver.generation_limit(), None);
}

#[test]
fn test_partial_file_uses_defaults() {
    let path = temp_path("partial");
    std::fs::write(
        &path,
        "[evolution]\ncapacity = 12\nfitness = \"channel_spread\"\n",
    )
    .unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let config = manager.get().unwrap();
    assert_eq!(config.evolution.capacity, 12);
    assert_eq!(config.evolution.fitness, FitnessKind::ChannelSpread);
    assert_eq!(config.evolution.initial_population, 2);
    assert_eq!(config.driver, AppConfig::default().driver);
}

#[test]
fn test_invalid_file_rejected_and_previous_kept() {
    let path = temp_path("invalid");
    std::fs::write(&path, "[evolution]\ncapacity = 1\ninitial_population = 2\n").unwrap();

    let manager = ConfigManager::new();
    let result = manager.load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    let err = result.unwrap_err().to_string();
    assert!(err.contains("[evolution]"), "{}", err);
    assert_eq!(manager.get().unwrap(), AppConfig::default());
}

#[test]
fn test_missing_file_is_error() {
    let manager = ConfigManager::new();
    assert!(manager.load_from_file(temp_path("does_not_exist")).is_err());
}

#[test]
fn test_update_rolls_back_on_invalid() {
    let manager = ConfigManager::new();
    let result = manager.update(|c| c.evolution.capacity = 0);

    assert!(result.is_err());
    assert_eq!(manager.get().unwrap().evolution.capacity, 100);
}
