use nalgebra::{Point3, Rotation3, Vector3};

/// The placement of a cylinder connecting two atom positions.
///
/// Computed on demand per bond and never stored; the renderer centers a
/// canonical Y-axis-aligned cylinder of the given length on `midpoint` and
/// applies `rotation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondPlacement {
    /// Distance between the two endpoints. Never negative.
    pub length: f32,
    /// Center of the segment from `a` to `b`.
    pub midpoint: Point3<f32>,
    /// Rotation aligning the canonical +Y axis with the vector from `a`
    /// toward `b`. Identity when the endpoints coincide.
    pub rotation: Rotation3<f32>,
}

/// Computes the placement of a cylinder connecting `a` to `b`.
///
/// No side effects; callable concurrently and repeatedly without shared
/// state. Both degenerate directions are handled without producing NaN:
/// coincident endpoints yield the identity rotation, and an exactly
/// antiparallel direction (straight down the canonical axis) yields a half
/// turn about +X.
pub fn bond_placement(a: &Point3<f32>, b: &Point3<f32>) -> BondPlacement {
    let axis = b - a;
    // Distance is mathematically non-negative; the abs guards against any
    // upstream floating-point sign artifact.
    let length = axis.norm().abs();
    let midpoint = Point3::from((a.coords + b.coords) * 0.5);

    let rotation = if length == 0.0 {
        Rotation3::identity()
    } else {
        Rotation3::rotation_between(&Vector3::y(), &axis).unwrap_or_else(|| {
            Rotation3::from_axis_angle(&Vector3::x_axis(), std::f32::consts::PI)
        })
    };

    BondPlacement {
        length,
        midpoint,
        rotation,
    }
}
