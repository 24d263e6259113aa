//! Styling structures for drawn map entities and the default style sheet.

use crate::paint::{area, line, outline, place, Fill, Filter, Painter};

/// RGB color triple.
pub type Color = [u8; 3];

/// Available drawing styles for a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineType {
    /// Continuous solid line.
    Solid,
    /// Dashed line style.
    Dashed,
    /// Dotted line style.
    Dotted,
}

/// Represents the weight of a line in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineWeight(pub f32);

impl Default for LineWeight {
    fn default() -> Self {
        Self(0.25)
    }
}

/// Stroke definition for polylines and polygon outlines.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineStyle {
    pub line_type: LineType,
    pub color: Color,
    pub weight: LineWeight,
}

impl LineStyle {
    pub fn new(line_type: LineType, color: Color, weight: LineWeight) -> Self {
        Self {
            line_type,
            color,
            weight,
        }
    }

    /// Solid stroke with default weight.
    pub fn solid(color: Color) -> Self {
        Self::new(LineType::Solid, color, LineWeight::default())
    }
}

/// Text style definition.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    pub font: String,
    pub height: f64,
}

impl TextStyle {
    pub fn new(font: &str, height: f64) -> Self {
        Self {
            font: font.to_string(),
            height,
        }
    }
}

/// Style definition for place labels.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LabelStyle {
    pub text: TextStyle,
    pub color: Color,
}

impl LabelStyle {
    pub fn new(text: TextStyle, color: Color) -> Self {
        Self { text, color }
    }
}

/// Builds the default map style sheet.
///
/// Called once by the renderer at startup; composition order is bottom-up, so
/// land cover sits under water, water under buildings, then roads, rails and
/// finally place labels on top. Roads and rails are layered so bridges and
/// tunnels respect their `layer` attribute.
pub fn default_painter() -> impl Painter {
    let land = area(Fill::Solid([205, 235, 176])).when(Filter::tagged("landuse"));
    let nature = area(Fill::Hatch {
        fore: [160, 210, 150],
        back: [205, 235, 176],
    })
    .when(Filter::tagged_any("natural", &["wood", "scrub", "heath"]));
    let water = area(Fill::Solid([170, 211, 223]))
        .when(Filter::tagged_any("natural", &["water", "bay"]));
    let buildings = area(Fill::Solid([216, 208, 201])).when(Filter::tagged("building"));
    let footprints = outline(LineStyle::solid([180, 170, 160])).when(Filter::tagged("building"));
    let waterways = line(LineStyle::solid([170, 211, 223])).when(Filter::tagged("waterway"));
    let roads = line(LineStyle::solid([255, 255, 255]))
        .when(Filter::tagged("highway"))
        .layered();
    let rails = line(LineStyle::new(
        LineType::Dashed,
        [90, 90, 90],
        LineWeight(0.5),
    ))
    .when(Filter::tagged("railway"))
    .layered();
    let labels = place(LabelStyle::new(TextStyle::new("sans", 10.0), [40, 40, 40]));

    labels.above(
        rails.above(roads.above(waterways.above(footprints.above(
            buildings.above(water.above(nature.above(land))),
        )))),
    )
}
