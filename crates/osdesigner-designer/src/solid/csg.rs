//! BSP-tree boolean kernel backed by `csgrs`

use super::{Cuboid, Cylinder, Polygon3, SolidKernel, SolidProgram};
use csgrs::mesh::Mesh;
use csgrs::traits::CSG;
use nalgebra::Point3;
use osdesigner_core::Result;
use tracing::trace;

/// Kernel evaluating programs with `csgrs` meshes
#[derive(Debug, Default, Clone, Copy)]
pub struct CsgKernel;

impl CsgKernel {
    pub fn new() -> Self {
        Self
    }

    fn cuboid(cuboid: &Cuboid) -> Mesh<()> {
        Mesh::cuboid(cuboid.size.x, cuboid.size.y, cuboid.size.z, None).translate(
            cuboid.min.x,
            cuboid.min.y,
            cuboid.min.z,
        )
    }

    fn cylinder(cylinder: &Cylinder) -> Mesh<()> {
        Mesh::cylinder(cylinder.radius, cylinder.height, cylinder.segments, None).translate(
            cylinder.base.x,
            cylinder.base.y,
            cylinder.base.z,
        )
    }
}

impl SolidKernel for CsgKernel {
    fn name(&self) -> &'static str {
        "csgrs"
    }

    fn evaluate(&self, program: &SolidProgram) -> Result<Vec<Polygon3>> {
        let mut solid = Self::cuboid(&program.body);

        if let Some(cutout) = &program.cutout {
            solid = solid.difference(&Self::cuboid(cutout));
        }

        for (i, hole) in program.holes.iter().enumerate() {
            trace!("Subtracting hole {} at ({}, {})", i, hole.base.x, hole.base.y);
            solid = solid.difference(&Self::cylinder(hole));
        }

        let polygons = solid
            .polygons
            .iter()
            .filter(|p| p.vertices.len() >= 3)
            .map(|p| {
                Polygon3::new(
                    p.vertices
                        .iter()
                        .map(|v| Point3::new(v.pos.x, v.pos.y, v.pos.z))
                        .collect(),
                )
            })
            .collect();

        Ok(polygons)
    }
}
