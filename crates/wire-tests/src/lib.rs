//! Integration tests for wire-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between different wire-rs crates.

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    /// Test the full render pipeline: project -> draw -> save -> load
    #[test]
    fn test_render_pipeline_png() {
        use wire_camera::Camera;
        use wire_core::{Canvas, Rgb};
        use wire_math::Vec3;
        use wire_raster::Tri3;

        let dir = tempdir().unwrap();
        let path = dir.path().join("triangle.png");

        let mut canvas = Canvas::new(100, 100).unwrap();
        let camera = Camera::default();
        let transform = camera.world_to_screen(canvas.width(), canvas.height());

        let tri = Tri3::new(
            Vec3::new(-1.0, 0.0, -3.0),
            Vec3::new(0.0, 1.0, -3.0),
            Vec3::new(1.0, 0.0, -3.0),
        );
        tri.project(&transform).draw(&mut canvas, Rgb::GREEN);

        // Each edge includes its endpoints, so the projected corners are lit.
        assert_eq!(canvas.get(33, 50), Some(Rgb::GREEN));
        assert_eq!(canvas.get(50, 33), Some(Rgb::GREEN));
        assert_eq!(canvas.get(67, 50), Some(Rgb::GREEN));

        wire_io::write(&path, &canvas).expect("Failed to write PNG");
        let loaded = wire_io::read(&path).expect("Failed to read PNG");

        // PNG is lossless, so the rendered frame survives bit-exact.
        assert_eq!(loaded, canvas);
    }

    #[test]
    fn test_io_roundtrip_jpeg() {
        use wire_core::{Canvas, Rgb};

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.jpg");

        let canvas = Canvas::filled(32, 32, Rgb::new(90, 120, 180)).unwrap();

        wire_io::write(&path, &canvas).expect("Failed to write JPEG");
        let loaded = wire_io::read(&path).expect("Failed to read JPEG");

        assert_eq!(loaded.dimensions(), (32, 32));

        // JPEG is lossy, but a flat field survives nearly unchanged.
        let got = loaded.get(16, 16).unwrap();
        assert!((got.r as i32 - 90).abs() <= 8);
        assert!((got.g as i32 - 120).abs() <= 8);
        assert!((got.b as i32 - 180).abs() <= 8);
    }

    #[test]
    fn test_convert_pipeline() {
        use wire_core::{Canvas, Rgb};

        let dir = tempdir().unwrap();
        let input_path = dir.path().join("input.png");
        let output_path = dir.path().join("output.jpg");

        let width = 16u32;
        let height = 16u32;
        let mut canvas = Canvas::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                let v = ((x + y) * 8) as u8;
                canvas.set(x as i32, y as i32, Rgb::new(v, v, v));
            }
        }

        wire_io::write(&input_path, &canvas).unwrap();
        let loaded = wire_io::read(&input_path).unwrap();
        assert_eq!(loaded, canvas);

        wire_io::write(&output_path, &loaded).unwrap();
        let converted = wire_io::read(&output_path).unwrap();
        assert_eq!(converted.dimensions(), (width, height));
    }

    #[test]
    fn test_projection_pipeline() {
        use wire_camera::Camera;
        use wire_math::{Vec3, Vec4};

        let camera = Camera::default();
        let transform = camera.world_to_screen(100, 100);

        // The point (2, 1, -2) seen through the default camera lands on
        // pixel (100, 25) of a 100x100 canvas.
        let clip = transform.transform(Vec4::from_point(Vec3::new(2.0, 1.0, -2.0)));
        assert!((clip.w - 2.0).abs() < 1e-9);

        let ndc = clip.homogeneous_divide();
        assert!((ndc.x - 100.0).abs() < 1e-9);
        assert!((ndc.y - 25.0).abs() < 1e-9);

        let (px, py) = wire_raster::project_point(&transform, Vec3::new(2.0, 1.0, -2.0));
        assert_eq!((px, py), (100, 25));
    }

    #[test]
    fn test_format_detection() {
        use wire_io::Format;
        use std::path::Path;

        assert_eq!(Format::from_extension(Path::new("test.png")), Format::Png);
        assert_eq!(Format::from_extension(Path::new("test.jpg")), Format::Jpeg);
        assert_eq!(Format::from_extension(Path::new("test.jpeg")), Format::Jpeg);
        assert_eq!(Format::from_extension(Path::new("test.bmp")), Format::Unknown);
    }

    #[test]
    fn test_math_utilities() {
        use wire_math::{round_half_up, Mat4, Vec3, Vec4};

        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(4.0, 5.0, 6.0);
        assert!((v1.dot(v2) - 32.0).abs() < 1e-12);

        let c = Vec3::new(2.0, 3.0, 4.0).cross(Vec3::new(5.0, 6.0, 7.0));
        assert_eq!((c.x, c.y, c.z), (-3.0, 6.0, -3.0));

        let moved = Mat4::translation(Vec3::new(1.0, -1.0, 0.0))
            .transform(Vec4::from_point(v1));
        assert_eq!((moved.x, moved.y, moved.z, moved.w), (2.0, 1.0, 3.0, 1.0));

        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(123.4999999), 123);
    }

    #[test]
    fn test_canvas_operations() {
        use wire_core::{Canvas, Rgb};

        let mut canvas = Canvas::new(8, 4).unwrap();
        assert_eq!(canvas.dimensions(), (8, 4));
        assert!((canvas.aspect_ratio() - 2.0).abs() < 1e-12);

        canvas.fill(Rgb::RED);
        assert_eq!(canvas.get(7, 3), Some(Rgb::RED));

        canvas.set(2, 1, Rgb::BLUE);
        assert_eq!(canvas.get(2, 1), Some(Rgb::BLUE));

        // Off-canvas writes are dropped, off-canvas reads return None.
        canvas.set(-1, 0, Rgb::WHITE);
        canvas.set(8, 0, Rgb::WHITE);
        assert_eq!(canvas.get(8, 0), None);

        canvas.clear();
        assert_eq!(canvas.get(2, 1), Some(Rgb::BLACK));

        canvas.resize(3, 3).unwrap();
        assert_eq!(canvas.dimensions(), (3, 3));
        assert_eq!(canvas.get(2, 2), Some(Rgb::BLACK));
    }
}
