use serde::Serialize;

use crate::control::physics_engine::SweepPoint;

const BAR_WIDTH: usize = 40;

/// Materialized sweep plus the summary shown under the table.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub points: Vec<SweepPoint>,
    max_delta_v: f64,
    min_delta_v: f64,
    sentinel_points: usize,
}

impl SweepReport {
    pub fn new<I>(series: I) -> Self
    where
        I: IntoIterator<Item = SweepPoint>,
    {
        let points: Vec<SweepPoint> = series.into_iter().collect();

        let mut max_delta_v = 0.0_f64;
        let mut min_delta_v = if points.is_empty() { 0.0 } else { f64::MAX };
        let mut sentinel_points = 0;
        for point in &points {
            max_delta_v = max_delta_v.max(point.delta_v);
            min_delta_v = min_delta_v.min(point.delta_v);
            if point.delta_v == 0.0 {
                sentinel_points += 1;
            }
        }

        SweepReport {
            points,
            max_delta_v,
            min_delta_v,
            sentinel_points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_delta_v(&self) -> f64 {
        self.max_delta_v
    }

    pub fn min_delta_v(&self) -> f64 {
        self.min_delta_v
    }

    /// Samples whose Δv was replaced by the zero placeholder.
    pub fn sentinel_points(&self) -> usize {
        self.sentinel_points
    }

    fn format_bar(&self, delta_v: f64) -> String {
        if self.max_delta_v <= 0.0 {
            return String::new();
        }
        let filled = ((delta_v / self.max_delta_v) * BAR_WIDTH as f64).round() as usize;
        "#".repeat(filled.min(BAR_WIDTH))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("--- Delta-V vs Fuel Mass ---\n");
        out.push_str(&format!("{:>12} | {:>12} |\n", "Fuel (kg)", "Δv (m/s)"));
        for point in &self.points {
            out.push_str(&format!(
                "{:>12.2} | {:>12.2} | {}\n",
                point.fuel_mass,
                point.delta_v,
                self.format_bar(point.delta_v)
            ));
        }
        out.push_str("--- Summary ---\n");
        out.push_str(&format!("Samples: {}\n", self.len()));
        out.push_str(&format!("Min Δv: {:.2} m/s\n", self.min_delta_v));
        out.push_str(&format!("Max Δv: {:.2} m/s\n", self.max_delta_v));
        if self.sentinel_points > 0 {
            out.push_str(&format!(
                "Zero placeholders: {}\n",
                self.sentinel_points
            ));
        }
        out
    }
}
