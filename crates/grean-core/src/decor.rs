//! # Decorative Assets
//!
//! Static parameters for the looping SVG decorations: the energy lines on the
//! loading overlay, the pulsing energy points on the hero, and the pattern
//! tiles behind them.
//!
//! These are declarative values only. The browser runs the animations; the
//! tests here check that the numbers are the intended ones.
//!
//! Line endpoints are computed in billionths of a percent from a table of
//! cosines at 30° steps, so no floating point is involved.

use serde::Serialize;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Energy lines radiating from the overlay centre, one every 30°.
pub const ENERGY_LINE_COUNT: usize = 12;

/// Length of each energy line as a percentage of the overlay.
pub const ENERGY_LINE_RADIUS_PERCENT: i64 = 45;

/// One draw/erase cycle of an energy line.
pub const ENERGY_LINE_DURATION_MS: u64 = 4_000;

/// Phase offset between consecutive energy lines.
pub const ENERGY_LINE_STAGGER_MS: u64 = 300;

/// Pulsing points on the energy overlay.
pub const ENERGY_POINT_COUNT: usize = 8;

/// One pulse cycle of an energy point.
pub const ENERGY_POINT_DURATION_MS: u64 = 4_000;

/// Phase offset between consecutive energy points.
pub const ENERGY_POINT_STAGGER_MS: u64 = 400;

/// Radius of an energy point, in SVG user units.
pub const ENERGY_POINT_RADIUS: u32 = 15;

/// cos(k·30°) in billionths, k = 0..12.
const COS_BILLIONTHS: [i64; ENERGY_LINE_COUNT] = [
    1_000_000_000,
    866_025_404,
    500_000_000,
    0,
    -500_000_000,
    -866_025_404,
    -1_000_000_000,
    -866_025_404,
    -500_000_000,
    0,
    500_000_000,
    866_025_404,
];

const CENTRE_BILLIONTHS: i64 = 50_000_000_000;

// =============================================================================
// PATTERN TILES
// =============================================================================

/// A repeating SVG pattern tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternTile {
    pub id: &'static str,
    pub width: u32,
    pub height: u32,
    pub rotation_deg: u32,
}

/// Square grid behind the loading overlay.
pub const GRID_PATTERN: PatternTile = PatternTile {
    id: "grid-pattern",
    width: 40,
    height: 40,
    rotation_deg: 0,
};

/// Hexagon overlay on the loading screen.
pub const HEX_PATTERN: PatternTile = PatternTile {
    id: "hex-pattern",
    width: 60,
    height: 60,
    rotation_deg: 30,
};

/// Circuit traces on the hero energy overlay.
pub const CIRCUIT_PATTERN: PatternTile = PatternTile {
    id: "green-circuit-pattern",
    width: 50,
    height: 50,
    rotation_deg: 45,
};

/// Dashed wave on the hero energy overlay.
pub const WAVE_PATTERN: PatternTile = PatternTile {
    id: "green-wave-pattern",
    width: 100,
    height: 50,
    rotation_deg: 0,
};

// =============================================================================
// ANIMATED ELEMENTS
// =============================================================================

/// One energy line from the centre to a point on a circle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyLine {
    pub index: usize,
    /// End point as CSS percentages with six decimals.
    pub x2: String,
    pub y2: String,
    pub delay_ms: u64,
    pub duration_ms: u64,
}

/// One pulsing energy point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyPoint {
    pub index: usize,
    pub cx_percent: u32,
    pub cy_percent: u32,
    pub radius: u32,
    pub delay_ms: u64,
    pub duration_ms: u64,
}

/// Every decorative parameter used on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecorConfig {
    pub lines: Vec<EnergyLine>,
    pub points: Vec<EnergyPoint>,
    pub patterns: [PatternTile; 4],
}

impl DecorConfig {
    /// The decoration set used by the landing page.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            lines: energy_lines(),
            points: energy_points(),
            patterns: [GRID_PATTERN, HEX_PATTERN, CIRCUIT_PATTERN, WAVE_PATTERN],
        }
    }
}

/// The twelve overlay energy lines.
#[must_use]
pub fn energy_lines() -> Vec<EnergyLine> {
    (0..ENERGY_LINE_COUNT)
        .map(|i| {
            let cos = COS_BILLIONTHS[i];
            // sin(θ) = cos(θ − 90°), three table steps back.
            let sin = COS_BILLIONTHS[(i + ENERGY_LINE_COUNT - 3) % ENERGY_LINE_COUNT];
            EnergyLine {
                index: i,
                x2: format_percent(CENTRE_BILLIONTHS + ENERGY_LINE_RADIUS_PERCENT * cos),
                y2: format_percent(CENTRE_BILLIONTHS + ENERGY_LINE_RADIUS_PERCENT * sin),
                delay_ms: ENERGY_LINE_STAGGER_MS * i as u64,
                duration_ms: ENERGY_LINE_DURATION_MS,
            }
        })
        .collect()
}

/// The eight energy points, alternating between two rows.
#[must_use]
pub fn energy_points() -> Vec<EnergyPoint> {
    (0..ENERGY_POINT_COUNT)
        .map(|i| EnergyPoint {
            index: i,
            cx_percent: 15 + 70 * i as u32,
            cy_percent: 30 + 40 * (i as u32 % 2),
            radius: ENERGY_POINT_RADIUS,
            delay_ms: ENERGY_POINT_STAGGER_MS * i as u64,
            duration_ms: ENERGY_POINT_DURATION_MS,
        })
        .collect()
}

/// Round billionths of a percent to six decimals, e.g. `"88.971143%"`.
fn format_percent(billionths: i64) -> String {
    let micros = (billionths + 500) / 1_000;
    format!("{}.{:06}%", micros / 1_000_000, micros % 1_000_000)
}

// =============================================================================
// TESTS
// =============================================================================
