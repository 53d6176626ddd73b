//! Kolam Dot Grid Background
//!
//! Renders a pulli kolam as an ambient background: a square lattice of
//! dots with a single looping curve woven around them.

use dioxus::prelude::*;

/// Centres of an `n` x `n` dot lattice inside a 200 x 200 view box.
pub fn grid_points(n: u32) -> Vec<(f32, f32)> {
    if n == 0 {
        return Vec::new();
    }
    let step = 200.0 / (n as f32 + 1.0);
    (1..=n)
        .flat_map(|row| (1..=n).map(move |col| (col as f32 * step, row as f32 * step)))
        .collect()
}

/// SVG path for the rose curve r = a + b cos(kθ) centred in the view box.
pub fn rose_path(petals: u32, samples: u32) -> String {
    let samples = samples.max(8);
    let mut path = String::new();
    for i in 0..=samples {
        let theta = i as f32 / samples as f32 * std::f32::consts::TAU;
        let r = 55.0 + 30.0 * (petals as f32 * theta).cos();
        let x = 100.0 + r * theta.cos();
        let y = 100.0 + r * theta.sin();
        let cmd = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{cmd}{x:.2},{y:.2} "));
    }
    path.push('Z');
    path
}

#[derive(Clone, PartialEq, Props)]
pub struct KolamGridProps {
    /// Size of the SVG in pixels (default: 600)
    #[props(default = 600)]
    pub size: u32,
    /// Dots per side (default: 7)
    #[props(default = 7)]
    pub dots: u32,
    #[props(default = 0.12)]
    pub opacity: f32,
    /// Dot colour (default: saffron)
    #[props(default = "#e8a33d".to_string())]
    pub dot_color: String,
    /// Curve colour (default: neon teal)
    #[props(default = "#00d4aa".to_string())]
    pub line_color: String,
}

/// Background kolam pattern
///
/// ```rust,ignore
/// rsx! {
///     div { class: "relative",
///         KolamGrid { size: 520, opacity: 0.1 }
///     }
/// }
/// ```
#[component]
pub fn KolamGrid(props: KolamGridProps) -> Element {
    let points = grid_points(props.dots);
    let path = rose_path(8, 240);

    rsx! {
        div {
            class: "kolam-grid-container",
            style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; pointer-events: none; overflow: hidden;",
            svg {
                view_box: "0 0 200 200",
                width: "{props.size}",
                height: "{props.size}",
                style: "opacity: {props.opacity};",
                "aria-hidden": "true",
                g { fill: "{props.dot_color}",
                    for (i, (x, y)) in points.into_iter().enumerate() {
                        circle { key: "{i}", cx: "{x}", cy: "{y}", r: "2" }
                    }
                }
                path {
                    d: "{path}",
                    fill: "none",
                    stroke: "{props.line_color}",
                    stroke_width: "1",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_n_squared_points_inside_view_box() {
        let points = grid_points(7);
        assert_eq!(points.len(), 49);
        assert!(points
            .iter()
            .all(|(x, y)| *x > 0.0 && *x < 200.0 && *y > 0.0 && *y < 200.0));
        assert!(grid_points(0).is_empty());
    }

    #[test]
    fn rose_path_is_closed() {
        let path = rose_path(8, 16);
        assert!(path.starts_with('M'));
        assert!(path.ends_with('Z'));
        assert_eq!(path.matches('L').count(), 16);
    }
}
