
/// Milliseconds between headline phrase rotations.
pub const PHRASE_ROTATION_MS: u32 = 6_000;

/// Vertical scroll offset (px) past which the header shrinks.
pub const HEADER_SHRINK_OFFSET: f64 = 60.0;

pub const LOGO_PATH: &str = "nuralis-logo.png";

pub const LEAD_ACKNOWLEDGEMENT: &str = "Thank you! Our team will reach out shortly.";

#[cfg(debug_assertions)]
pub fn speed_insights_script_src() -> &'static str {
    "https://va.vercel-scripts.com/v1/speed-insights/script.debug.js"  // Debug collector, logs instead of reporting
}

#[cfg(not(debug_assertions))]
pub fn speed_insights_script_src() -> &'static str {
    "/_vercel/speed-insights/script.js"  // Served by the hosting edge in production
}
