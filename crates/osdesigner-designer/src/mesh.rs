//! # Triangle Mesh
//!
//! Converts the boundary polygons of an evaluated solid into a triangle mesh
//! suitable for STL output.
//!
//! ## Processing
//! - Vertices closer than the weld tolerance are merged
//! - Convex polygons are fan-triangulated
//! - Triangles that collapse after welding are dropped
//! - Face normals follow the winding, so outward faces stay outward
//!
//! ## Output
//! - Binary STL (via `stl_io`)
//! - ASCII STL

use crate::solid::Polygon3;
use nalgebra::{Point3, Vector3};
use std::collections::HashMap;
use std::io::{self, Write};
use tracing::debug;

/// A 3D triangle made up of three vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle3D {
    pub vertices: [Point3<f32>; 3],
    pub normal: Vector3<f32>,
}

impl Triangle3D {
    pub fn new(v1: Point3<f32>, v2: Point3<f32>, v3: Point3<f32>) -> Self {
        let edge1 = v2 - v1;
        let edge2 = v3 - v1;
        let normal = edge1
            .cross(&edge2)
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(Vector3::zeros);

        Self {
            vertices: [v1, v2, v3],
            normal,
        }
    }

    /// Twice the triangle area
    fn doubled_area(&self) -> f32 {
        let edge1 = self.vertices[1] - self.vertices[0];
        let edge2 = self.vertices[2] - self.vertices[0];
        edge1.cross(&edge2).norm()
    }

    fn to_stl(&self) -> stl_io::Triangle {
        let vertex = |p: &Point3<f32>| stl_io::Vertex::new([p.x, p.y, p.z]);
        stl_io::Triangle {
            normal: stl_io::Normal::new([self.normal.x, self.normal.y, self.normal.z]),
            vertices: [
                vertex(&self.vertices[0]),
                vertex(&self.vertices[1]),
                vertex(&self.vertices[2]),
            ],
        }
    }
}

/// Merges points that fall in the same tolerance cell
struct VertexWelder {
    tolerance: f64,
    index: HashMap<(i64, i64, i64), usize>,
    vertices: Vec<Point3<f64>>,
}

impl VertexWelder {
    fn new(tolerance: f64) -> Self {
        Self {
            tolerance: if tolerance > 0.0 { tolerance } else { f64::EPSILON },
            index: HashMap::new(),
            vertices: Vec::new(),
        }
    }

    fn weld(&mut self, p: &Point3<f64>) -> usize {
        let key = (
            (p.x / self.tolerance).round() as i64,
            (p.y / self.tolerance).round() as i64,
            (p.z / self.tolerance).round() as i64,
        );
        let next = self.vertices.len();
        let vertices = &mut self.vertices;
        *self.index.entry(key).or_insert_with(|| {
            vertices.push(*p);
            next
        })
    }
}

/// A triangulated boundary mesh
#[derive(Debug, Clone)]
pub struct Mesh3D {
    pub triangles: Vec<Triangle3D>,
    pub bounds_min: Point3<f32>,
    pub bounds_max: Point3<f32>,
}

impl Mesh3D {
    pub fn new(triangles: Vec<Triangle3D>) -> Self {
        let mut mesh = Self {
            triangles,
            bounds_min: Point3::new(0.0, 0.0, 0.0),
            bounds_max: Point3::new(0.0, 0.0, 0.0),
        };
        mesh.calculate_bounds();
        mesh
    }

    /// Triangulate convex boundary polygons, welding vertices within
    /// `tolerance` millimetres
    pub fn from_polygons(polygons: &[Polygon3], tolerance: f64) -> Self {
        let mut welder = VertexWelder::new(tolerance);
        let mut faces: Vec<[usize; 3]> = Vec::new();

        for polygon in polygons {
            let mut indices: Vec<usize> = polygon.vertices.iter().map(|p| welder.weld(p)).collect();
            indices.dedup();
            if indices.len() > 1 && indices.first() == indices.last() {
                indices.pop();
            }
            if indices.len() < 3 {
                continue;
            }
            for i in 1..indices.len() - 1 {
                let face = [indices[0], indices[i], indices[i + 1]];
                if face[0] != face[1] && face[1] != face[2] && face[0] != face[2] {
                    faces.push(face);
                }
            }
        }

        let point = |i: usize| {
            let p = welder.vertices[i];
            Point3::new(p.x as f32, p.y as f32, p.z as f32)
        };
        let triangles: Vec<Triangle3D> = faces
            .iter()
            .map(|f| Triangle3D::new(point(f[0]), point(f[1]), point(f[2])))
            .filter(|t| t.doubled_area() > f32::EPSILON)
            .collect();

        debug!(
            "Triangulated {} polygons into {} triangles over {} vertices",
            polygons.len(),
            triangles.len(),
            welder.vertices.len()
        );

        Self::new(triangles)
    }

    fn calculate_bounds(&mut self) {
        let mut points = self.triangles.iter().flat_map(|t| t.vertices.iter());
        let Some(first) = points.next() else {
            return;
        };
        let mut min = *first;
        let mut max = *first;
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }
        self.bounds_min = min;
        self.bounds_max = max;
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Bounding box size
    pub fn size(&self) -> Vector3<f32> {
        self.bounds_max - self.bounds_min
    }

    /// Signed volume; positive when faces are wound outward
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|t| {
                let [a, b, c] = t.vertices.map(|p| Vector3::new(p.x as f64, p.y as f64, p.z as f64));
                a.dot(&b.cross(&c)) / 6.0
            })
            .sum()
    }

    /// Write little-endian binary STL
    pub fn write_binary_stl<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let triangles: Vec<stl_io::Triangle> = self.triangles.iter().map(Triangle3D::to_stl).collect();
        stl_io::write_stl(writer, triangles.iter())
    }

    /// Write ASCII STL with solid name `name`
    pub fn write_ascii_stl<W: Write>(&self, writer: &mut W, name: &str) -> io::Result<()> {
        writeln!(writer, "solid {}", name)?;
        for t in &self.triangles {
            writeln!(
                writer,
                "  facet normal {} {} {}",
                t.normal.x, t.normal.y, t.normal.z
            )?;
            writeln!(writer, "    outer loop")?;
            for v in &t.vertices {
                writeln!(writer, "      vertex {} {} {}", v.x, v.y, v.z)?;
            }
            writeln!(writer, "    endloop")?;
            writeln!(writer, "  endfacet")?;
        }
        writeln!(writer, "endsolid {}", name)
    }
}
