use std::{f64::consts::PI, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ShapeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Triangle,
    Square,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Triangle, ShapeKind::Square];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Square => "square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Case-insensitive, surrounding whitespace is ignored.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let normalized = tag.trim().to_ascii_lowercase();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| ShapeError::UnknownKind(tag.to_owned()))
    }
}

/// A shape together with its single dimension, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle { radius: f64 },
    /// Equilateral triangle.
    Triangle { side: f64 },
    Square { side: f64 },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Triangle { .. } => ShapeKind::Triangle,
            Shape::Square { .. } => ShapeKind::Square,
        }
    }

    pub fn size(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => radius,
            Shape::Triangle { side } | Shape::Square { side } => side,
        }
    }

    /// Area in square centimetres.
    pub fn area(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Triangle { side } => 3f64.sqrt() * side * side / 4.0,
            Shape::Square { side } => side * side,
        }
    }

    pub fn draw(&self) -> String {
        format!("Drawing a {}...", self.kind())
    }

    pub fn describe(&self) -> String {
        format!("This is a {} {}cm in size", self.kind(), self.size())
    }

    /// Description, drawing and area, one per line.
    pub fn report(&self) -> String {
        format!(
            "{}\n{}\nArea = {:.2} cm\u{b2}",
            self.describe(),
            self.draw(),
            self.area()
        )
    }
}
