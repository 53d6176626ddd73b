//! UI Components for the Kolam Analyzer.
//!
//! Application-level components built on the `kolam-ui` primitives.

mod generated_kolams;
mod kolam_results;
mod kolam_upload;
mod toast;

pub use generated_kolams::GeneratedKolams;
pub use kolam_results::KolamResults;
pub use kolam_upload::KolamUpload;
pub use toast::ToastStack;
