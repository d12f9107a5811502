//! Random shape generation and the canonical starting board.

use crate::color::{ShapeColor, random_color};
use crate::shapes::{Circle, Line, Rectangle, Shape, ShapeError, ShapeKind, Triangle, check_dimension};
use kurbo::{Point, Size};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Kinds drawn from when nothing else is configured.
pub const DEFAULT_KINDS: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Triangle];

/// Dimensions of randomly added shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeSizes {
    /// Rectangle width, also the length of a random line.
    pub rect_width: f64,
    pub rect_height: f64,
    pub circle_radius: f64,
    /// Distance from the click point to the apex and to the base.
    pub triangle_extent: f64,
}

impl Default for ShapeSizes {
    fn default() -> Self {
        Self {
            rect_width: 100.0,
            rect_height: 50.0,
            circle_radius: 30.0,
            triangle_extent: 30.0,
        }
    }
}

impl ShapeSizes {
    /// Check that every dimension is finite and non-negative.
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_dimension(ShapeKind::Rectangle, "width", self.rect_width)?;
        check_dimension(ShapeKind::Rectangle, "height", self.rect_height)?;
        check_dimension(ShapeKind::Circle, "radius", self.circle_radius)?;
        check_dimension(ShapeKind::Triangle, "extent", self.triangle_extent)
    }
}

/// Parameters for randomly generated shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Kind names to choose from. Unknown names are ignored.
    pub kinds: Vec<String>,
    pub sizes: ShapeSizes,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kinds: DEFAULT_KINDS.iter().map(|kind| kind.name().to_string()).collect(),
            sizes: ShapeSizes::default(),
        }
    }
}

/// Produces shapes of a random kind and color centered on a point.
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    kinds: Vec<ShapeKind>,
    config: GeneratorConfig,
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

impl ShapeGenerator {
    pub fn new(config: &GeneratorConfig) -> Self {
        let mut kinds = Vec::new();
        for name in &config.kinds {
            match name.parse::<ShapeKind>() {
                Ok(kind) if !kinds.contains(&kind) => kinds.push(kind),
                Ok(_) => {}
                Err(err) => log::debug!("Ignoring generator kind: {}", err),
            }
        }
        if kinds.is_empty() {
            kinds = DEFAULT_KINDS.to_vec();
        }
        let mut config = config.clone();
        if let Err(err) = config.sizes.validate() {
            log::warn!("Using default shape sizes: {}", err);
            config.sizes = ShapeSizes::default();
        }
        Self { kinds, config }
    }

    /// Kinds this generator draws from, never empty.
    pub fn kinds(&self) -> &[ShapeKind] {
        &self.kinds
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build a shape of a uniformly chosen kind centered on `center`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, center: Point) -> Shape {
        let kind = self.kinds[rng.gen_range(0..self.kinds.len())];
        let color = random_color(rng);
        self.build(kind, center, color)
    }

    /// Build a shape of a specific kind centered on `center`.
    pub fn build(&self, kind: ShapeKind, center: Point, color: ShapeColor) -> Shape {
        let sizes = &self.config.sizes;
        match kind {
            ShapeKind::Rectangle => Rectangle::centered(center, sizes.rect_width, sizes.rect_height, color).into(),
            ShapeKind::Circle => Circle::new(center, sizes.circle_radius, color).into(),
            ShapeKind::Triangle => Triangle::around(center, sizes.triangle_extent, color).into(),
            ShapeKind::Line => {
                let half = sizes.rect_width / 2.0;
                Line::new(
                    Point::new(center.x - half, center.y),
                    Point::new(center.x + half, center.y),
                    color,
                )
                .into()
            }
        }
    }
}

/// The four shapes a fresh board starts with, bottom to top.
///
/// The line runs corner to corner, so it depends on the surface size.
pub fn initial_shapes(surface_size: Size) -> Vec<Shape> {
    vec![
        Rectangle::new(Point::new(50.0, 50.0), 150.0, 100.0, ShapeColor::BLUE).into(),
        Circle::new(Point::new(300.0, 100.0), 50.0, ShapeColor::RED).into(),
        Triangle::new(
            Point::new(200.0, 200.0),
            Point::new(250.0, 300.0),
            Point::new(150.0, 300.0),
            ShapeColor::GREEN,
        )
        .into(),
        Line::new(
            Point::ZERO,
            Point::new(surface_size.width, surface_size.height),
            ShapeColor::YELLOW,
        )
        .into(),
    ]
}
