//! CSV placement tables, the concrete hand-off format for external renderers.

use super::MoleculeLayout;
use crate::core::palette::Palette;
use nalgebra::UnitQuaternion;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlacementExportError {
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct SphereRow<'a> {
    serial: u32,
    x: f32,
    y: f32,
    z: f32,
    radius: f32,
    category: &'a str,
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Debug, Serialize)]
struct CylinderRow {
    from: u32,
    to: u32,
    length: f32,
    mid_x: f32,
    mid_y: f32,
    mid_z: f32,
    quat_w: f32,
    quat_x: f32,
    quat_y: f32,
    quat_z: f32,
    radius: f32,
    segments: u32,
}

/// Writes one row per sphere instance, with the category resolved to RGB
/// through the given palette.
pub fn write_sphere_table(
    layout: &MoleculeLayout,
    palette: &Palette,
    writer: impl Write,
) -> Result<(), PlacementExportError> {
    let mut table = csv::Writer::from_writer(writer);
    for sphere in &layout.spheres {
        let [r, g, b] = palette.rgb(sphere.category);
        table.serialize(SphereRow {
            serial: sphere.serial,
            x: sphere.center.x,
            y: sphere.center.y,
            z: sphere.center.z,
            radius: sphere.radius,
            category: sphere.category.name(),
            r,
            g,
            b,
        })?;
    }
    table.flush()?;
    Ok(())
}

/// Writes one row per cylinder instance, with the orientation encoded as a
/// unit quaternion.
pub fn write_cylinder_table(
    layout: &MoleculeLayout,
    writer: impl Write,
) -> Result<(), PlacementExportError> {
    let mut table = csv::Writer::from_writer(writer);
    for cylinder in &layout.cylinders {
        let quat = UnitQuaternion::from_rotation_matrix(&cylinder.placement.rotation);
        table.serialize(CylinderRow {
            from: cylinder.from,
            to: cylinder.to,
            length: cylinder.placement.length,
            mid_x: cylinder.placement.midpoint.x,
            mid_y: cylinder.placement.midpoint.y,
            mid_z: cylinder.placement.midpoint.z,
            quat_w: quat.w,
            quat_x: quat.i,
            quat_y: quat.j,
            quat_z: quat.k,
            radius: cylinder.radius,
            segments: cylinder.segments,
        })?;
    }
    table.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::builder::MoleculeBuilder;
    use crate::layout::{LayoutOptions, layout_molecule};
    use nalgebra::Point3;

    fn sample_layout() -> MoleculeLayout {
        let mut builder = MoleculeBuilder::new();
        builder.add_atom(Atom::new(1, "C1", 'A', Point3::new(0.0, 0.0, 0.0), " C"));
        builder.add_atom(Atom::new(2, "O1", 'A', Point3::new(1.0, 0.0, 0.0), " O"));
        builder.link(1, 2);
        builder.link(2, 1);
        layout_molecule(&builder.build(), &LayoutOptions::default())
    }

    #[test]
    fn sphere_table_has_header_and_one_row_per_sphere() {
        let layout = sample_layout();
        let mut buffer = Vec::new();
        write_sphere_table(&layout, &Palette::default(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "serial,x,y,z,radius,category,r,g,b"
        );
        assert!(lines[1].starts_with("1,"));
        assert!(lines[1].contains("black"));
        assert!(lines[2].starts_with("2,"));
        assert!(lines[2].contains("red"));
    }

    #[test]
    fn cylinder_table_has_header_and_one_row_per_cylinder() {
        let layout = sample_layout();
        let mut buffer = Vec::new();
        write_cylinder_table(&layout, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "from,to,length,mid_x,mid_y,mid_z,quat_w,quat_x,quat_y,quat_z,radius,segments"
        );
        assert!(lines[1].starts_with("1,2,1.0,"));
        assert!(lines[2].starts_with("2,1,1.0,"));
    }

    #[test]
    fn cylinder_table_quaternions_are_finite() {
        let layout = sample_layout();
        let mut buffer = Vec::new();
        write_cylinder_table(&layout, &mut buffer).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let headers = reader.headers().unwrap().clone();
        for record in reader.records() {
            let record = record.unwrap();
            for field in &["quat_w", "quat_x", "quat_y", "quat_z"] {
                let index = headers.iter().position(|h| h == *field).unwrap();
                let value: f32 = record[index].parse().unwrap();
                assert!(value.is_finite());
            }
        }
    }

    #[test]
    fn empty_layout_writes_header_only_or_nothing() {
        let layout = MoleculeLayout::default();
        let mut buffer = Vec::new();
        write_cylinder_table(&layout, &mut buffer).unwrap();
        // csv only emits the header once a row is serialized.
        assert!(buffer.is_empty());
    }
}
