pub mod traits;
pub mod evolution;
pub mod driver;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use driver::DriverConfig;
pub use traits::ConfigSection;
