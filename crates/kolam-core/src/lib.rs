//! Kolam Analyzer Core Library
//!
//! Client side of the kolam analysis service: upload an image of a kolam,
//! poll the backend until the analysis is ready, and hand the cultural and
//! mathematical analysis to a view.
//!
//! ## Overview
//!
//! - [`api`]: REST client, one method per backend endpoint
//! - [`lifecycle`]: the upload → poll → fetch controller, cancellable
//! - [`session`]: session state and transition rules
//! - [`upload`]: image selection and MIME checks
//! - [`demo`]: placeholder data and an offline backend
//!
//! ## Quick Start
//!
//! ```ignore
//! use kolam_core::{AnalysisController, ClientConfig, KolamImage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let controller = AnalysisController::with_api(ClientConfig::from_env()?)?;
//!
//!     let image = KolamImage::from_path("kolam.jpg".as_ref())?;
//!     let result = controller.run(image).await?;
//!
//!     if let Some(text) = result.cultural_description {
//!         println!("{}", text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod demo;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod notice;
pub mod session;
pub mod types;
pub mod upload;

// Re-exports
pub use api::{AnalysisBackend, KolamApi};
pub use config::{ClientConfig, PollPolicy};
pub use demo::DemoBackend;
pub use error::{KolamError, KolamResult};
pub use lifecycle::{download_file_name, AnalysisController};
pub use notice::{Notice, NoticeLevel};
pub use session::{AnalysisSession, Lifecycle};
pub use types::*;
pub use upload::{KolamImage, UploadSelection};
