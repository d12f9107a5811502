//! Shape store and canvas state management.

use crate::dispatch::{ClickAction, ClickDispatcher, ClickOutcome};
use crate::generator::{GeneratorConfig, ShapeGenerator, initial_shapes};
use crate::shapes::{HitTolerance, Shape, ShapeError, ShapeId};
use kurbo::{Point, Rect, Size};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Ordered store of shapes, back to front.
///
/// Later entries render on top of earlier ones and are hit-tested first.
/// The only mutations are append, removal by index and clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasDocument {
    shapes: Vec<Shape>,
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document holding the four canonical shapes for a surface.
    pub fn with_initial_shapes(surface_size: Size) -> Self {
        Self {
            shapes: initial_shapes(surface_size),
        }
    }

    /// Append a shape on top of the others, returning its index.
    pub fn add_shape(&mut self, shape: Shape) -> Result<usize, ShapeError> {
        shape.validate()?;
        self.shapes.push(shape);
        Ok(self.shapes.len() - 1)
    }

    /// Remove the shape at an index. Out of range indices are a no-op.
    pub fn remove_shape(&mut self, index: usize) -> Option<Shape> {
        (index < self.shapes.len()).then(|| self.shapes.remove(index))
    }

    /// Remove the shape at an index, failing if there is none.
    pub fn take_shape(&mut self, index: usize) -> Result<Shape, ShapeError> {
        let len = self.shapes.len();
        self.remove_shape(index).ok_or(ShapeError::MissingShape { index, len })
    }

    /// Remove a shape by ID.
    pub fn remove_shape_by_id(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.index_of(id)?;
        self.remove_shape(index)
    }

    /// Clear all shapes from the document.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Get a shape by index.
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Find the index of a shape.
    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|shape| shape.id() == id)
    }

    /// Get shapes in insertion order (back to front).
    pub fn shapes_ordered(&self) -> impl DoubleEndedIterator<Item = &Shape> + ExactSizeIterator {
        self.shapes.iter()
    }

    /// Index of the topmost shape containing a point.
    pub fn shape_at(&self, point: Point, tolerance: &HitTolerance) -> Option<usize> {
        self.shapes
            .iter()
            .rposition(|shape| shape.hit_test_with(point, tolerance))
    }

    /// Indices of every shape containing a point, front to back.
    pub fn shapes_at_point(&self, point: Point, tolerance: &HitTolerance) -> Vec<usize> {
        self.shapes
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, shape)| shape.hit_test_with(point, tolerance))
            .map(|(index, _)| index)
            .collect()
    }

    /// Get the bounding box of all shapes.
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .map(Shape::bounds)
            .reduce(|acc, bounds| acc.union(bounds))
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}

/// Settings used to build a [`Canvas`].
#[derive(Debug, Clone)]
pub struct CanvasSettings {
    /// Logical size of the drawing surface.
    pub surface_size: Size,
    /// Hit tolerances for clicks.
    pub tolerance: HitTolerance,
    /// Random shape parameters.
    pub generator: GeneratorConfig,
    /// Fixed seed for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            surface_size: Size::new(800.0, 600.0),
            tolerance: HitTolerance::default(),
            generator: GeneratorConfig::default(),
            seed: None,
        }
    }
}

/// The drawing board: the shape store plus everything a click needs.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// The shapes on the board.
    pub document: CanvasDocument,
    /// Hit tolerances for clicks.
    pub tolerance: HitTolerance,
    generator: ShapeGenerator,
    rng: StdRng,
    surface_size: Size,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasSettings::default())
    }
}

impl Canvas {
    /// Create a canvas populated with the canonical shapes.
    pub fn new(settings: CanvasSettings) -> Self {
        let document = CanvasDocument::with_initial_shapes(settings.surface_size);
        Self::with_document(document, settings)
    }

    /// Create a canvas with an existing document.
    pub fn with_document(document: CanvasDocument, settings: CanvasSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            document,
            tolerance: settings.tolerance,
            generator: ShapeGenerator::new(&settings.generator),
            rng,
            surface_size: settings.surface_size,
        }
    }

    /// Logical size of the drawing surface.
    pub fn surface_size(&self) -> Size {
        self.surface_size
    }

    /// Set the surface size. Existing shapes keep their coordinates.
    pub fn set_surface_size(&mut self, width: f64, height: f64) {
        self.surface_size = Size::new(width, height);
    }

    /// Handle a click at a surface point: remove the topmost hit shape, or
    /// add a random one centered on the point.
    pub fn handle_click(&mut self, point: Point) -> Result<ClickOutcome, ShapeError> {
        let outcome = match ClickDispatcher::resolve(&self.document, point, &self.tolerance) {
            ClickAction::RemoveShape { index } => {
                let shape = self.document.take_shape(index)?;
                ClickOutcome::Removed { index, shape }
            }
            ClickAction::AddShape { position } => {
                let (index, id) = self.add_random_shape(position)?;
                ClickOutcome::Added { index, id }
            }
        };
        log::debug!("Click at ({:.1}, {:.1}): {}", point.x, point.y, outcome);
        Ok(outcome)
    }

    /// Append a randomly generated shape centered on a point, returning its
    /// index and ID.
    pub fn add_random_shape(&mut self, center: Point) -> Result<(usize, ShapeId), ShapeError> {
        let shape = self.generator.generate(&mut self.rng, center);
        let id = shape.id();
        let index = self.document.add_shape(shape)?;
        Ok((index, id))
    }

    /// Remove every shape.
    pub fn clear(&mut self) {
        let removed = self.document.len();
        self.document.clear();
        log::info!("Cleared {} shapes", removed);
    }

    /// Replace the board with the canonical shapes for the current surface.
    pub fn reset(&mut self) {
        self.document = CanvasDocument::with_initial_shapes(self.surface_size);
    }
}
