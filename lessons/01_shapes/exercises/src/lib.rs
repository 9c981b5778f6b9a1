//! Shape factory
//!
//! A factory builds shapes from a kind and a size. Every shape can compute its area and "draw"
//! itself. The set of shapes is closed, so a shape is a plain enum and every behaviour is a
//! `match` over its variants.
//!
//! Raw string tags are parsed into a [`ShapeKind`] exactly once; an unknown tag is reported as
//! [`ShapeError::UnknownKind`] at that point instead of deep inside the factory.
//!
//! ```
//! use shape_factory::{ShapeFactory, ShapeKind};
//!
//! let square = ShapeFactory::create(ShapeKind::Square, 5.0)?;
//! assert_eq!(square.area(), 25.0);
//! assert_eq!(square.draw(), "Drawing a square...");
//!
//! let circle = ShapeFactory::create_from_tag("circle", 10.0)?;
//! assert_eq!(circle.describe(), "This is a circle 10cm in size");
//! # Ok::<(), shape_factory::ShapeError>(())
//! ```

mod error;
mod factory;
mod shape;

pub use error::ShapeError;
pub use factory::ShapeFactory;
pub use shape::{Shape, ShapeKind};
