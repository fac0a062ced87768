pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::IconConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_sizes, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "webext-kit")]
#[command(about = "Generates browser-extension icon assets")]
pub struct CliConfig {
    /// Directory the icon files are written into
    #[arg(long, default_value = "./public/icons")]
    pub output_path: String,

    /// Pixel sizes to render, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [16u32, 48, 128])]
    pub sizes: Vec<u32>,

    /// File name prefix; files are named <prefix><size>.png
    #[arg(long, default_value = "icon")]
    pub name_prefix: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process statistics per stage")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl IconConfig for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    fn name_prefix(&self) -> &str {
        &self.name_prefix
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("name_prefix", &self.name_prefix)?;
        validate_sizes("sizes", &self.sizes)
    }
}
