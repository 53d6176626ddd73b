//! Kolam Analyzer CLI
//!
//! Thin wrapper around kolam-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Upload, wait for the analysis and print it
//! kolam analyze pulli.png --download ./out
//!
//! # Upload only
//! kolam upload pulli.png
//!
//! # Check on an analysis
//! kolam status <id>
//!
//! # Full result, or selected fields
//! kolam results <id> --json
//! kolam fetch <id> cultural equations
//!
//! # Save the analysis image
//! kolam download <id> --output pulli-analysis.png
//!
//! # Run the whole lifecycle offline
//! kolam demo
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use kolam_core::demo::render_sample_image;
use kolam_core::{
    AnalysisController, AnalysisId, AnalysisResult, AnalysisSession, ClientConfig, DemoBackend,
    KolamApi, KolamImage, PollPolicy, ResultField,
};

/// Kolam Analyzer - cultural and mathematical analysis of kolam patterns
#[derive(Parser)]
#[command(name = "kolam")]
#[command(version)]
#[command(about = "Kolam Analyzer - cultural and mathematical analysis of kolam patterns")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Analysis backend base URL (overrides KOLAM_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Seconds between status checks
    #[arg(long, global = true)]
    poll_interval: Option<u64>,

    /// Status checks before giving up
    #[arg(long, global = true)]
    max_attempts: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image, wait for the analysis and print it
    Analyze {
        image: PathBuf,
        /// Also save the analysis image into this directory
        #[arg(short, long)]
        download: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Upload an image and print the analysis id
    Upload { image: PathBuf },

    /// Print the backend status of an analysis
    Status { id: String },

    /// Print the full result of an analysis
    Results {
        id: String,
        #[arg(long)]
        json: bool,
    },

    /// Fetch selected result fields (cultural, math, image, equations, generated)
    Fetch {
        id: String,
        #[arg(required = true)]
        fields: Vec<ResultField>,
        #[arg(long)]
        json: bool,
    },

    /// Save the analysis image
    Download {
        id: String,
        /// File or directory to write to
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Run the full lifecycle against the built-in demo backend
    Demo {
        /// Also save the rendered sample image into this directory
        #[arg(short, long)]
        download: Option<PathBuf>,
    },
}

/// Status checks the demo backend answers with "processing"
const DEMO_PROCESSING_CHECKS: u32 = 2;
const DEMO_POLL_INTERVAL: Duration = Duration::from_millis(200);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    kolam_core::logging::init(cli.verbose);

    let config = ClientConfig::from_env()?.with_overrides(
        cli.api_url.as_deref(),
        cli.poll_interval,
        cli.max_attempts,
    )?;

    match cli.command {
        Commands::Analyze { image, download, json } => {
            let image = load_image(&image)?;
            let controller = AnalysisController::with_api(config)?;
            println!("Uploading {} ({})...", image.file_name, image.size_mb());

            let result = controller.run(image).await?;
            let session = controller.session();
            print_completion(&session);
            print_result(&result, json)?;

            if let Some(dir) = download {
                let path = controller.download_image_into(&dir).await?;
                println!();
                println!("Analysis image saved to {}", path.display());
            }
        }

        Commands::Upload { image } => {
            let image = load_image(&image)?;
            let api = KolamApi::new(config)?;
            let response = api.upload_kolam(&image).await?;
            let id = kolam_core::session::accept_upload(response)?;
            println!("Upload accepted.");
            println!("  ID: {}", id);
        }

        Commands::Status { id } => {
            let api = KolamApi::new(config)?;
            let status = api.analysis_status(&AnalysisId::new(id)).await?;
            println!("{}", status);
        }

        Commands::Results { id, json } => {
            let api = KolamApi::new(config)?;
            let result = api.analysis_results(&AnalysisId::new(id)).await?;
            print_result(&result, json)?;
        }

        Commands::Fetch { id, fields, json } => {
            let api = KolamApi::new(config)?;
            let id = AnalysisId::new(id);
            let mut merged = AnalysisResult::default();
            for field in fields {
                merged.merge(api.fetch_field(field, &id).await?);
            }
            print_result(&merged, json)?;
        }

        Commands::Download { id, output } => {
            let controller = AnalysisController::with_api(config)?;
            controller.set_analysis_id(AnalysisId::new(id));
            let path = controller.download_image(&output).await?;
            println!("Analysis image saved to {}", path.display());
        }

        Commands::Demo { download } => {
            let policy = PollPolicy::new(DEMO_POLL_INTERVAL, config.poll.max_attempts)?;
            let controller =
                AnalysisController::new(Arc::new(DemoBackend::new(DEMO_PROCESSING_CHECKS)), policy);
            let image = KolamImage::new("demo-kolam.png", "image/png", render_sample_image(256)?);
            println!("Running demo analysis of {} ({})...", image.file_name, image.size_mb());

            let result = controller.run(image).await?;
            print_completion(&controller.session());
            print_result(&result, false)?;

            if let Some(dir) = download {
                let path = controller.download_image_into(&dir).await?;
                println!();
                println!("Analysis image saved to {}", path.display());
            }
        }
    }

    Ok(())
}

/// Read an image file, rejecting anything that isn't an image before any
/// network call.
fn load_image(path: &Path) -> Result<KolamImage> {
    let image = KolamImage::from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if !image.is_image() {
        bail!(
            "Invalid file type: {} is {}, please upload an image file",
            path.display(),
            image.mime_type
        );
    }
    Ok(image)
}

fn print_completion(session: &AnalysisSession) {
    let elapsed = session
        .started_at
        .map(|start| (chrono::Utc::now() - start).num_seconds())
        .unwrap_or_default();
    if let Some(id) = &session.analysis_id {
        println!("Analysis {} complete.", id);
    }
    println!("  Status checks: {}", session.status_checks);
    println!("  Elapsed: {}s", elapsed);
    println!();
}

fn print_result(result: &AnalysisResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    if result.is_empty() {
        println!("(no result fields returned)");
        return Ok(());
    }

    print_section("Cultural & Spiritual Significance", result.cultural_description.as_deref());
    print_section("Mathematical Analysis", result.mathematical_analysis.as_deref());
    let image = result.analysis_image_url.as_deref().map(image_reference);
    print_section("Analysis Image", image.as_deref());
    print_section("Parametric Equations", result.equations.as_deref());
    print_section("Desmos", result.desmos_url.as_deref());

    let generated = result.generated();
    if !generated.is_empty() {
        println!("Generated Kolams ({}):", generated.len());
        for url in generated {
            println!("  - {}", url);
        }
        println!();
    }
    Ok(())
}

/// Embedded images are summarised instead of dumping their base64 payload.
fn image_reference(url: &str) -> String {
    match url.split_once(";base64,") {
        Some((mime, payload)) if mime.starts_with("data:") => {
            format!("(embedded {}, {} base64 chars)", &mime["data:".len()..], payload.len())
        }
        _ => url.to_string(),
    }
}

fn print_section(title: &str, body: Option<&str>) {
    let Some(body) = body else {
        return;
    };
    println!("{}:", title);
    for line in body.lines() {
        println!("  {}", line);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_reference_summarises_data_uri() {
        assert_eq!(
            image_reference("data:image/png;base64,AQID"),
            "(embedded image/png, 4 base64 chars)"
        );
        assert_eq!(
            image_reference("https://cdn.example.com/an-1.png"),
            "https://cdn.example.com/an-1.png"
        );
    }
}
