use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One icon rendering request: a pixel size and the file it lands in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconSpec {
    pub size: u32,
    pub file_name: String,
}

impl IconSpec {
    pub fn new(size: u32, prefix: &str) -> Self {
        Self {
            size,
            file_name: format!("{}{}.png", prefix, size),
        }
    }
}

/// Axis-aligned rectangle. Both corner pixels belong to the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    pub fn width(&self) -> i32 {
        (self.x1 - self.x0 + 1).max(0)
    }

    pub fn height(&self) -> i32 {
        (self.y1 - self.y0 + 1).max(0)
    }
}

/// Proportional briefcase measurements for one canvas size.
///
/// All values are derived from the size by fixed ratios: padding is an eighth
/// of the canvas, the body keeps a 0.8 aspect ratio and sits slightly below
/// center, the handle is a third of the body in both directions and straddles
/// the body's top edge. The handle cutout is open at its bottom edge so the
/// body outline closes the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub size: u32,
    pub padding: i32,
    pub body_width: i32,
    pub body_height: i32,
    pub body: Rect,
    pub handle: Rect,
    pub handle_cut: Rect,
    pub corner_radius: i32,
    pub stroke_width: i32,
    pub flap_height: i32,
}

impl IconGeometry {
    pub fn for_size(size: u32) -> Self {
        let s = size as i32;
        let padding = s / 8;
        let body_width = s - 2 * padding;
        let body_height = (body_width as f32 * 0.8) as i32;

        let x_center = s / 2;
        let y_center = s / 2;

        // Shifted down to leave room for the handle above.
        let body_y0 = y_center - body_height / 2 + s / 10;
        let body = Rect::new(padding, body_y0, s - padding, body_y0 + body_height);

        let handle_w = body_width / 3;
        let handle_h = body_height / 3;
        let handle = Rect::new(
            x_center - handle_w / 2,
            body_y0 - handle_h / 2,
            x_center + handle_w / 2,
            body_y0 + handle_h / 2,
        );

        // Below roughly 12 px the inset meets half the handle width and the
        // visible loop collapses to nothing. Observed behavior, kept as is.
        let inset = (s / 16).max(1);
        let handle_cut = Rect::new(
            handle.x0 + inset,
            handle.y0 + inset,
            handle.x1 - inset,
            handle.y1,
        );

        Self {
            size,
            padding,
            body_width,
            body_height,
            body,
            handle,
            handle_cut,
            corner_radius: s / 10,
            stroke_width: (s / 32).max(1),
            flap_height: body_height / 3,
        }
    }

    /// Bottom vertex of the flap triangle; the other two are the body's top corners.
    pub fn flap_apex(&self) -> (i32, i32) {
        (self.size as i32 / 2, self.body.y0 + self.flap_height)
    }
}

/// Finished icon: file name plus encoded PNG bytes.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// One file scheduled for archiving: where it lives and what it is called
/// inside the archive (`/`-separated, relative to the source root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: PathBuf,
    pub name: String,
}

/// Assembled archive bytes plus the number of entries written into them.
#[derive(Debug, Clone)]
pub struct ArchiveBundle {
    pub data: Vec<u8>,
    pub entry_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_spec_file_name() {
        let spec = IconSpec::new(48, "icon");
        assert_eq!(spec.file_name, "icon48.png");
        assert_eq!(spec.size, 48);

        let spec = IconSpec::new(16, "toolbar-");
        assert_eq!(spec.file_name, "toolbar-16.png");
    }

    #[test]
    fn test_geometry_stays_inside_canvas() {
        for size in [16u32, 48, 128] {
            let geo = IconGeometry::for_size(size);
            let s = size as i32;
            assert!(geo.body.x0 >= 0 && geo.body.x1 < s);
            assert!(geo.body.y0 >= 0 && geo.body.y1 < s);
            assert!(geo.handle.y0 >= 0);
        }
    }

    #[test]
    fn test_handle_straddles_body_top() {
        let geo = IconGeometry::for_size(128);
        assert!(geo.handle.y0 < geo.body.y0);
        assert!(geo.handle.y1 > geo.body.y0);
        // Centered horizontally on the body.
        let handle_center = (geo.handle.x0 + geo.handle.x1) / 2;
        assert_eq!(handle_center, 128 / 2);
    }

    #[test]
    fn test_doubling_size_doubles_linear_measurements() {
        // Exact for sizes divisible by 16: every derived ratio divides evenly.
        for (small, large) in [(16u32, 32u32), (32, 64), (64, 128)] {
            let a = IconGeometry::for_size(small);
            let b = IconGeometry::for_size(large);
            assert_eq!(b.padding, 2 * a.padding);
            assert_eq!(b.body_width, 2 * a.body_width);
            assert_eq!(b.handle.width(), 2 * a.handle.width() - 1);
        }
    }

    #[test]
    fn test_tiny_size_produces_degenerate_cutout() {
        // The inset swallows the opening; the cut rectangle inverts. The
        // renderer treats an inverted rectangle as a no-op.
        let geo = IconGeometry::for_size(4);
        assert!(geo.handle_cut.is_empty() || geo.handle_cut.width() <= 1);
    }

    #[test]
    fn test_empty_rect() {
        assert!(Rect::new(5, 5, 4, 8).is_empty());
        assert!(!Rect::new(5, 5, 5, 5).is_empty());
        assert_eq!(Rect::new(2, 0, 4, 0).width(), 3);
    }
}
