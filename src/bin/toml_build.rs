use clap::Parser;
use webext_kit::config::toml_config::TomlConfig;
use webext_kit::core::Job;
use webext_kit::utils::{logger, validation::Validate};
use webext_kit::{ArchiveJob, IconJob, JobEngine, LocalStorage};

#[derive(Parser)]
#[command(name = "toml-build")]
#[command(about = "Runs icon generation and packaging from a TOML build file")]
struct Args {
    /// Path to the TOML build file
    #[arg(short, long, default_value = "webext-build.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show what would be produced without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-driven build");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        perform_dry_run(&config).await?;
        return Ok(());
    }

    if let Some(icons) = config.icons.clone() {
        let storage = LocalStorage::new(icons.output_path.clone());
        let engine = JobEngine::new_with_monitoring(IconJob::new(storage, icons), monitor_enabled);
        engine.run().await?;
    }

    if let Some(package) = config.package.as_ref() {
        let package = package.resolved();
        let storage = LocalStorage::new(package.output_path.clone());
        let engine =
            JobEngine::new_with_monitoring(ArchiveJob::new(storage, package), monitor_enabled);
        engine.run().await?;
    }

    tracing::info!("✅ Build completed");
    println!("✅ Build completed successfully!");

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    tracing::info!("📋 Project: {}", config.project.name);
    if let Some(version) = &config.project.version {
        tracing::info!("📋 Version: {}", version);
    }

    if let Some(icons) = &config.icons {
        tracing::info!(
            "🎨 Icons: sizes {:?} -> {}",
            icons.sizes,
            icons.output_path
        );
    }
    if let Some(package) = &config.package {
        tracing::info!(
            "📦 Package: {} -> {}/{}",
            package.source_dir,
            package.output_path,
            package.archive_name
        );
    }

    if args.verbose {
        match serde_json::to_string_pretty(config) {
            Ok(json) => tracing::debug!("Full configuration:\n{}", json),
            Err(e) => tracing::debug!("Could not serialize configuration: {}", e),
        }
    }
}

/// Plans both jobs without building or publishing anything.
async fn perform_dry_run(config: &TomlConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(icons) = config.icons.clone() {
        let output_path = icons.output_path.clone();
        let job = IconJob::new(LocalStorage::new(output_path.clone()), icons);
        let specs = job.plan().await?;
        println!("Would render {} icons into {}:", specs.len(), output_path);
        for spec in specs {
            println!("  {} ({}x{})", spec.file_name, spec.size, spec.size);
        }
    }

    if let Some(package) = config.package.as_ref() {
        let package = package.resolved();
        let location = format!("{}/{}", package.output_path, package.archive_name);
        let job = ArchiveJob::new(LocalStorage::new(package.output_path.clone()), package);
        let entries = job.plan().await?;
        println!("Would package {} files into {}:", entries.len(), location);
        for entry in entries {
            println!("  {}", entry.name);
        }
    }

    Ok(())
}
