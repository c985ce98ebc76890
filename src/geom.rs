#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Pseudo-3D tilt of the whole widget, in degrees per axis.
/// The neutral (flat) tilt is the default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rot_x_deg: f64,
    pub rot_y_deg: f64,
}

impl Tilt {
    pub fn new(rot_x_deg: f64, rot_y_deg: f64) -> Self {
        Self { rot_x_deg, rot_y_deg }
    }
}
