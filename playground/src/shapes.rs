use std::io::Write;

use anyhow::Context;
use shape_factory::{ShapeFactory, ShapeKind};

use crate::writer::ReportWriter;

pub fn show_shape<W: Write>(
    out: &mut ReportWriter<W>,
    tag: &str,
    size: f64,
    json: bool,
) -> anyhow::Result<()> {
    let shape = ShapeFactory::create_from_tag(tag, size)
        .with_context(|| format!("Cannot create shape `{tag}` of size {size}"))?;
    if json {
        out.json(&shape)
    } else {
        out.line(&shape.report())
    }
}

pub fn run_demo<W: Write>(out: &mut ReportWriter<W>) -> anyhow::Result<()> {
    let demos = [
        (ShapeKind::Circle, 10.0),
        (ShapeKind::Triangle, 20.0),
        (ShapeKind::Square, 5.0),
    ];
    for (kind, size) in demos {
        let shape = ShapeFactory::create(kind, size)?;
        out.line("")?;
        out.line(&shape.report())?;
    }
    Ok(())
}
