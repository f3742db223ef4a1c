//! Turns expense records into something a donut chart can draw.

use crate::expense::ExpenseRecord;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;
use std::sync::Once;
use tracing::{debug, warn};

/// Brand palette, handed out to slices by position.
pub const PALETTE: [&str; 5] = [
    "#402D8B", // indigo
    "#0AEBFF", // blue
    "#040404", // black
    "#EBEBEB", // gray
    "#9CA3AF", // neutral gray
];

pub const FALLBACK_COLOR: &str = "#EBEBEB";

const CHART_CSS: &str = r#"
.ollie-donut path {
    transition: transform 0.2s ease-out, opacity 0.2s ease-out;
    transform-origin: center;
    transform-box: view-box;
}
.ollie-donut path.active {
    transform: scale(1.03);
}
.ollie-donut svg {
    animation: ollie-donut-in 1.2s cubic-bezier(0.25, 1, 0.5, 1);
}
.ollie-legend-dot {
    display: inline-block;
    width: 8px;
    height: 8px;
    border-radius: 9999px;
    margin-right: 8px;
}
@keyframes ollie-donut-in {
    from { transform: rotate(-90deg) scale(0.6); opacity: 0; }
    to { transform: rotate(0) scale(1); opacity: 1; }
}
"#;

static REGISTER: Once = Once::new();

/// Installs the chart stylesheet. Only the first call does anything.
pub fn register() {
    register_with(&REGISTER, install_stylesheet);
}

fn register_with(once: &Once, install: impl FnOnce()) {
    once.call_once(install);
}

fn install_stylesheet() {
    let document = gloo_utils::document();
    let style = match document.create_element("style") {
        Ok(style) => style,
        Err(err) => {
            warn!(?err, "could not create chart stylesheet");
            return;
        }
    };

    style.set_id("ollie-chart");
    style.set_text_content(Some(CHART_CSS));

    match gloo_utils::head().append_child(&style) {
        Ok(_) => debug!("chart stylesheet installed"),
        Err(err) => warn!(?err, "could not install chart stylesheet"),
    }
}

/// What the chart renders: labels, values and colors line up by index.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
    pub total: f64,
}

pub struct Slice<'a> {
    pub label: &'a str,
    pub value: f64,
    pub color: &'static str,
}

impl ChartData {
    pub fn from_records(records: &[ExpenseRecord]) -> Self {
        if records.is_empty() {
            return Self::placeholder();
        }

        let labels = records.iter().map(|r| r.category.clone()).collect();
        let values: Vec<f64> = records.iter().map(|r| finite_or_zero(r.amount)).collect();
        let colors = (0..records.len()).map(|i| PALETTE[i % PALETTE.len()]).collect();
        let total = values.iter().sum();

        Self {
            labels,
            values,
            colors,
            total,
        }
    }

    /// A single gray ring, so there is always something to draw.
    pub fn placeholder() -> Self {
        Self {
            labels: vec![],
            values: vec![1.],
            colors: vec![FALLBACK_COLOR],
            total: 0.,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn slices(&self) -> Vec<Slice<'_>> {
        self.labels
            .iter()
            .zip(&self.values)
            .zip(&self.colors)
            .map(|((label, value), color)| Slice {
                label,
                value: *value,
                color: *color,
            })
            .collect()
    }

    pub fn tooltip(&self, idx: usize) -> Option<String> {
        let label = self.labels.get(idx)?;
        let value = self.values.get(idx)?;
        Some(tooltip_label(label, *value))
    }
}

fn finite_or_zero(f: f64) -> f64 {
    if f.is_finite() {
        f
    } else {
        0.
    }
}

pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn tooltip_label(label: &str, value: f64) -> String {
    format!("{}: {}", label, format_currency(value))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutGeometry {
    pub size: f64,
    /// Inner radius as a fraction of the outer one.
    pub cutout: f64,
    /// Room left around the ring for the hovered slice to grow into.
    pub padding: f64,
}

impl Default for DonutGeometry {
    fn default() -> Self {
        Self {
            size: 200.,
            cutout: 0.6,
            padding: 6.,
        }
    }
}

impl DonutGeometry {
    fn center(&self) -> f64 {
        self.size / 2.
    }

    fn outer(&self) -> f64 {
        self.center() - self.padding
    }

    fn inner(&self) -> f64 {
        self.outer() * self.cutout
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.size, self.size)
    }
}

/// One drawable ring segment. `index` points back into the chart data, and is
/// `None` for the placeholder ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub index: Option<usize>,
    pub path: String,
    pub color: &'static str,
}

pub fn donut_arcs(data: &ChartData, geometry: DonutGeometry) -> Vec<Arc> {
    if data.is_placeholder() {
        let color = data.colors.first().copied().unwrap_or(FALLBACK_COLOR);
        return vec![Arc {
            index: None,
            path: ring_path(geometry),
            color,
        }];
    }

    let drawn: f64 = data.values.iter().map(|v| v.max(0.)).sum();
    if drawn <= 0. {
        return vec![Arc {
            index: None,
            path: ring_path(geometry),
            color: FALLBACK_COLOR,
        }];
    }

    let mut arcs = vec![];
    let mut start = -FRAC_PI_2;

    for (idx, value) in data.values.iter().enumerate() {
        let value = value.max(0.);
        if value == 0. {
            continue;
        }

        let sweep = value / drawn * TAU;
        let path = if sweep >= TAU - 1e-9 {
            ring_path(geometry)
        } else {
            sector_path(geometry, start, start + sweep)
        };

        arcs.push(Arc {
            index: Some(idx),
            path,
            color: data.colors[idx],
        });
        start += sweep;
    }

    arcs
}

fn point(geometry: DonutGeometry, radius: f64, angle: f64) -> (f64, f64) {
    let c = geometry.center();
    (c + radius * angle.cos(), c + radius * angle.sin())
}

fn sector_path(geometry: DonutGeometry, start: f64, end: f64) -> String {
    let (outer, inner) = (geometry.outer(), geometry.inner());
    let large = if end - start > std::f64::consts::PI { 1 } else { 0 };

    let (x0, y0) = point(geometry, outer, start);
    let (x1, y1) = point(geometry, outer, end);
    let (x2, y2) = point(geometry, inner, end);
    let (x3, y3) = point(geometry, inner, start);

    let mut d = String::new();
    let _ = write!(d, "M {x0:.3} {y0:.3} ");
    let _ = write!(d, "A {outer:.3} {outer:.3} 0 {large} 1 {x1:.3} {y1:.3} ");
    let _ = write!(d, "L {x2:.3} {y2:.3} ");
    let _ = write!(d, "A {inner:.3} {inner:.3} 0 {large} 0 {x3:.3} {y3:.3} Z");
    d
}

/// Full ring as two circles, drawn with `fill-rule: evenodd`.
fn ring_path(geometry: DonutGeometry) -> String {
    let c = geometry.center();
    let mut d = String::new();

    for r in [geometry.outer(), geometry.inner()] {
        let (top, bottom) = (c - r, c + r);
        let _ = write!(
            d,
            "M {c:.3} {top:.3} A {r:.3} {r:.3} 0 1 1 {c:.3} {bottom:.3} A {r:.3} {r:.3} 0 1 1 {c:.3} {top:.3} Z "
        );
    }

    d.trim_end().to_string()
}
