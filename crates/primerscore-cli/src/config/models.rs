use primerscore::engine::config::ScoringConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub output_path: PathBuf,
    pub core_config: ScoringConfig,
}
