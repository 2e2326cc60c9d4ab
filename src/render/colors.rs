/// Color representation handed to the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl AppColor {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// CSS rgb() form for DOM-based renderers.
    pub fn to_css(self) -> String {
        format!(
            "rgb({},{},{})",
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8
        )
    }
}

/// Neutral fill behind branch interiors.
pub const BRANCH_FILL: AppColor = AppColor::new(0.969, 0.969, 0.969);

/// Diverging leaf fill from the node's secondary metric (percent change):
/// positive values bias toward green, negative toward red, magnitude
/// saturating at ±100. Absent or non-finite values read as 0 (neutral
/// gray).
pub fn value_color(value: Option<f64>) -> AppColor {
    const BASE: f32 = 200.0 / 255.0;
    let pct = value.filter(|v| v.is_finite()).unwrap_or(0.0);
    if pct >= 0.0 {
        let t = (pct / 100.0).min(1.0) as f32;
        AppColor::new(BASE * (1.0 - t), BASE, BASE * (1.0 - t))
    } else {
        let t = (-pct / 100.0).min(1.0) as f32;
        AppColor::new(BASE, BASE * (1.0 - t), BASE * (1.0 - t))
    }
}
