use clap::Parser;
use webext_kit::core::PackageConfig;
use webext_kit::utils::error::ErrorSeverity;
use webext_kit::utils::logger;
use webext_kit::utils::validation::{validate_file_extension, validate_path, Validate};
use webext_kit::{ArchiveJob, JobEngine, LocalStorage};

#[derive(Parser, Debug, Clone)]
#[command(name = "pack-ext")]
#[command(about = "Packages an extension build directory into a ZIP archive")]
struct Args {
    /// Directory whose contents are packaged
    #[arg(long, default_value = "./dist")]
    source_dir: String,

    /// Directory the archive is written into
    #[arg(long, default_value = ".")]
    output_path: String,

    /// Archive file name
    #[arg(long, default_value = "extension.zip")]
    archive_name: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Log process statistics per stage
    #[arg(long)]
    monitor: bool,
}

impl PackageConfig for Args {
    fn source_dir(&self) -> &str {
        &self.source_dir
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn archive_name(&self) -> &str {
        &self.archive_name
    }
}

impl Validate for Args {
    fn validate(&self) -> webext_kit::Result<()> {
        validate_path("source_dir", &self.source_dir)?;
        validate_path("output_path", &self.output_path)?;
        validate_file_extension("archive_name", &self.archive_name, &["zip"])
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting pack-ext");
    tracing::info!("📦 Packaging content from: {}", args.source_dir);

    if let Err(e) = args.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let monitor_enabled = args.monitor;
    let storage = LocalStorage::new(args.output_path.clone());
    let job = ArchiveJob::new(storage, args);

    let engine = JobEngine::new_with_monitoring(job, monitor_enabled);

    match engine.run().await {
        Ok(location) => {
            tracing::info!("✅ Archive created: {}", location);
            println!("✅ Success! Archive created: {}", location);
        }
        Err(e) => {
            tracing::error!(
                "❌ Packaging failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
