//! Solid geometry kernel interface
//!
//! A kernel evaluates a [`SolidProgram`] into the planar boundary polygons of
//! the resulting solid, wound counter-clockwise when seen from outside.

use super::SolidProgram;
use nalgebra::Point3;
use osdesigner_core::{Error, Result};

/// A planar convex polygon on the boundary of a solid
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon3 {
    pub vertices: Vec<Point3<f64>>,
}

impl Polygon3 {
    pub fn new(vertices: Vec<Point3<f64>>) -> Self {
        Self { vertices }
    }
}

/// Boolean solid engine
pub trait SolidKernel: Send + Sync {
    /// Engine name for logging
    fn name(&self) -> &'static str;

    /// Run every operation in `program` and return the boundary polygons
    fn evaluate(&self, program: &SolidProgram) -> Result<Vec<Polygon3>>;
}

/// The kernel compiled into this build.
///
/// Fails with [`Error::DependencyUnavailable`] when built without the `csg`
/// feature.
pub fn default_kernel() -> Result<Box<dyn SolidKernel>> {
    #[cfg(feature = "csg")]
    {
        Ok(Box::new(super::csg::CsgKernel::new()))
    }

    #[cfg(not(feature = "csg"))]
    {
        Err(Error::DependencyUnavailable {
            capability: "Solid geometry engine (build with the `csg` feature)".to_string(),
        })
    }
}

/// Kernel used when no boolean engine is available; every call fails
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableKernel;

impl SolidKernel for UnavailableKernel {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn evaluate(&self, _program: &SolidProgram) -> Result<Vec<Polygon3>> {
        Err(Error::DependencyUnavailable {
            capability: "Solid geometry engine".to_string(),
        })
    }
}
