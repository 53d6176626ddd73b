//! Placeholder analysis data and an offline backend.
//!
//! Used when no analysis backend is reachable (`--demo`) and as the content
//! the results view falls back to when it has nothing real to show.

use std::f64::consts::PI;
use std::io::Cursor;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use base64::Engine;
use bytes::Bytes;
use image::{ImageFormat, Rgb, RgbImage};
use rand::Rng;
use ulid::Ulid;

use crate::api::AnalysisBackend;
use crate::error::KolamResult;
use crate::types::{AnalysisId, AnalysisResult, AnalysisStatus, UploadResponse};
use crate::upload::KolamImage;

pub const SAMPLE_DESMOS_URL: &str = "https://www.desmos.com/calculator";

/// Edge length of the image the demo backend serves as its analysis image
const DEMO_IMAGE_SIZE: u32 = 512;

const CULTURAL_DESCRIPTION: &str = "This beautiful kolam showcases the traditional \"Pulli Kolam\" pattern, \
characterized by intricate dot-based designs that represent cosmic order and divine geometry. \
The symmetrical patterns reflect the Tamil cultural belief in harmony between the material and \
spiritual worlds. The circular motifs symbolize the eternal cycle of life, while the interconnected \
lines represent the unity of all existence. Such kolams are traditionally drawn during festivals \
like Pongal and serve as a spiritual practice that connects the drawer with ancient wisdom.";

const MATHEMATICAL_ANALYSIS: &str = "Mathematical Analysis Results:

• Pattern Recognition: 8-fold rotational symmetry detected
• Geometric Classification: Hypocyclic pattern with radial distribution
• Complexity Index: 0.847 (High complexity)
• Fractal Dimension: 1.73
• Total Pattern Elements: 156 dots, 89 connecting lines
• Symmetry Groups: D8 (dihedral group of order 8)
• Topological Properties: Genus 0, Euler characteristic: 2
• Lattice Structure: Triangular base with hexagonal subdivisions";

const EQUATIONS: &str = "Parametric Equations:

Primary Curve:
x(t) = 5cos(t) + 2cos(5t/2)
y(t) = 5sin(t) - 2sin(5t/2)

Secondary Pattern:
x₂(t) = 3cos(3t) + cos(9t)
y₂(t) = 3sin(3t) - sin(9t)

Radial Components:
r(θ) = 4 + 2cos(8θ)
θ ∈ [0, 2π]

Transform Matrix:
[cos(2πk/8)  -sin(2πk/8)]
[sin(2πk/8)   cos(2πk/8)]

Where k = 0,1,2,...,7 for 8-fold symmetry";

/// Sample result shown in place of real analysis data.
pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        cultural_description: Some(CULTURAL_DESCRIPTION.to_string()),
        mathematical_analysis: Some(MATHEMATICAL_ANALYSIS.to_string()),
        analysis_image_url: None,
        equations: Some(EQUATIONS.to_string()),
        desmos_url: Some(SAMPLE_DESMOS_URL.to_string()),
        generated_kolams: None,
    }
}

/// Sample result with the rendered analysis image embedded as a PNG data URI,
/// so a demo session can display and download it.
pub fn sample_result_with_image() -> KolamResult<AnalysisResult> {
    let png = render_sample_image(DEMO_IMAGE_SIZE)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
    Ok(AnalysisResult {
        analysis_image_url: Some(format!("data:image/png;base64,{}", encoded)),
        ..sample_result()
    })
}

/// One tile of the generated-pattern gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedKolam {
    pub id: u32,
    pub title: String,
    pub pattern: String,
    /// 1..=5
    pub complexity: u8,
    pub image_url: Option<String>,
}

pub const MAX_COMPLEXITY: u8 = 5;

/// Placeholder tiles with random complexity.
pub fn placeholder_gallery(count: u32) -> Vec<GeneratedKolam> {
    let mut rng = rand::rng();
    (1..=count)
        .map(|i| GeneratedKolam {
            id: i,
            title: format!("Generated Kolam {}", i),
            pattern: format!("Pattern Type {}", i),
            complexity: rng.random_range(1..=MAX_COMPLEXITY),
            image_url: None,
        })
        .collect()
}

/// Gallery tiles for the backend's generated-pattern references.
pub fn gallery_from_result(result: &AnalysisResult) -> Vec<GeneratedKolam> {
    result
        .generated()
        .iter()
        .zip(1u32..)
        .map(|(url, i)| GeneratedKolam {
            id: i,
            title: format!("Generated Kolam {}", i),
            pattern: "From your kolam".to_string(),
            complexity: MAX_COMPLEXITY,
            image_url: Some(url.clone()),
        })
        .collect()
}

/// Draw a dot grid with an 8-petal rose `r(θ) = 4 + 2cos(8θ)` over it and
/// encode it as PNG.
pub fn render_sample_image(size: u32) -> KolamResult<Bytes> {
    let background = Rgb([10, 10, 10]);
    let dot = Rgb([212, 175, 55]);
    let line = Rgb([0, 212, 170]);

    let mut img = RgbImage::from_pixel(size, size, background);
    let center = size as f64 / 2.0;

    // 7x7 pulli grid
    let spacing = size as f64 / 8.0;
    for gx in 1..=7 {
        for gy in 1..=7 {
            let (cx, cy) = (gx as f64 * spacing, gy as f64 * spacing);
            for dx in -2i32..=2 {
                for dy in -2i32..=2 {
                    if dx * dx + dy * dy <= 4 {
                        put(&mut img, cx + dx as f64, cy + dy as f64, dot);
                    }
                }
            }
        }
    }

    let scale = size as f64 / 14.0;
    let steps = 4096;
    for step in 0..steps {
        let theta = 2.0 * PI * step as f64 / steps as f64;
        let r = (4.0 + 2.0 * (8.0 * theta).cos()) * scale;
        put(&mut img, center + r * theta.cos(), center + r * theta.sin(), line);
    }

    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(Bytes::from(buffer))
}

fn put(img: &mut RgbImage, x: f64, y: f64, color: Rgb<u8>) {
    if x >= 0.0 && y >= 0.0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Offline backend that answers every upload with the sample result.
///
/// Reports `processing` for the first `processing_checks` status checks of
/// each analysis, then `completed`.
pub struct DemoBackend {
    processing_checks: u32,
    checks: AtomicU32,
}

impl DemoBackend {
    pub fn new(processing_checks: u32) -> Self {
        Self {
            processing_checks,
            checks: AtomicU32::new(0),
        }
    }
}

impl Default for DemoBackend {
    fn default() -> Self {
        Self::new(0)
    }
}

#[async_trait]
impl AnalysisBackend for DemoBackend {
    async fn upload(&self, image: &KolamImage) -> KolamResult<UploadResponse> {
        self.checks.store(0, Ordering::SeqCst);
        tracing::debug!(file = %image.file_name, "demo backend accepted upload");
        Ok(UploadResponse {
            success: true,
            analysis_id: format!("demo-{}", Ulid::new().to_string().to_lowercase()),
            message: "Demo analysis started".to_string(),
        })
    }

    async fn status(&self, _id: &AnalysisId) -> KolamResult<AnalysisStatus> {
        let seen = self.checks.fetch_add(1, Ordering::SeqCst);
        if seen < self.processing_checks {
            Ok(AnalysisStatus::Processing)
        } else {
            Ok(AnalysisStatus::Completed)
        }
    }

    async fn results(&self, _id: &AnalysisId) -> KolamResult<AnalysisResult> {
        sample_result_with_image()
    }

    async fn download_image(&self, _id: &AnalysisId) -> KolamResult<Bytes> {
        render_sample_image(DEMO_IMAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_result_has_display_fields() {
        let result = sample_result();
        assert!(result.cultural_description.unwrap().contains("Pulli Kolam"));
        assert!(result.mathematical_analysis.unwrap().contains("D8"));
        assert_eq!(result.desmos_url.as_deref(), Some(SAMPLE_DESMOS_URL));
    }

    #[test]
    fn test_sample_result_with_image_embeds_png() {
        let result = sample_result_with_image().unwrap();
        let url = result.analysis_image_url.unwrap();
        let encoded = url.strip_prefix("data:image/png;base64,").unwrap();
        let png = base64::engine::general_purpose::STANDARD.decode(encoded).unwrap();
        assert_eq!(image::guess_format(&png).unwrap(), ImageFormat::Png);
        assert_eq!(result.desmos_url.as_deref(), Some(SAMPLE_DESMOS_URL));
    }

    #[test]
    fn test_placeholder_gallery() {
        let gallery = placeholder_gallery(6);
        assert_eq!(gallery.len(), 6);
        assert_eq!(gallery[0].title, "Generated Kolam 1");
        assert_eq!(gallery[5].pattern, "Pattern Type 6");
        assert!(gallery
            .iter()
            .all(|k| (1..=MAX_COMPLEXITY).contains(&k.complexity)));
    }

    #[test]
    fn test_gallery_from_result() {
        let result = AnalysisResult {
            generated_kolams: Some(vec![
                "https://cdn.example.com/g1.png".to_string(),
                "https://cdn.example.com/g2.png".to_string(),
            ]),
            ..Default::default()
        };
        let gallery = gallery_from_result(&result);
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery[1].id, 2);
        assert_eq!(gallery[1].image_url.as_deref(), Some("https://cdn.example.com/g2.png"));
    }

    #[test]
    fn test_sample_image_is_png() {
        let bytes = render_sample_image(64).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[tokio::test]
    async fn test_demo_backend_completes_after_processing() {
        let backend = DemoBackend::new(2);
        let image = KolamImage::new("kolam.png", "image/png", vec![0]);
        let upload = backend.upload(&image).await.unwrap();
        assert!(upload.success);
        assert!(upload.analysis_id.starts_with("demo-"));

        let id = AnalysisId::new(upload.analysis_id);
        assert_eq!(backend.status(&id).await.unwrap(), AnalysisStatus::Processing);
        assert_eq!(backend.status(&id).await.unwrap(), AnalysisStatus::Processing);
        assert_eq!(backend.status(&id).await.unwrap(), AnalysisStatus::Completed);
    }
}
