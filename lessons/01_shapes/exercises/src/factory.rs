use crate::{Shape, ShapeError, ShapeKind};

/// Builds shapes of a given kind and size.
pub struct ShapeFactory;

impl ShapeFactory {
    pub fn create(kind: ShapeKind, size: f64) -> Result<Shape, ShapeError> {
        if !size.is_finite() || size < 0.0 {
            return Err(ShapeError::InvalidSize(size));
        }
        log::debug!("creating a {kind} of size {size}");
        let shape = match kind {
            ShapeKind::Circle => Shape::Circle { radius: size },
            ShapeKind::Triangle => Shape::Triangle { side: size },
            ShapeKind::Square => Shape::Square { side: size },
        };
        Ok(shape)
    }

    /// Parses `tag` into a [`ShapeKind`] and creates the shape.
    pub fn create_from_tag(tag: &str, size: f64) -> Result<Shape, ShapeError> {
        Self::create(tag.parse()?, size)
    }
}
