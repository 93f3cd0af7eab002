use ggez::graphics::Rect;
use ggez::mint::Point2;

/// A more convenient version of mint::Point2<f32>
#[derive(Copy, Clone, Debug, PartialEq, Add, Sub)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Point2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2 { x, y }
    }
}

impl Point {
    /// Equal x and y
    pub fn square(side: f32) -> Self {
        Self { x: side, y: side }
    }

    /// Rectangle with its top-left corner at self
    pub fn rect(self, size: Point) -> Rect {
        Rect::new(self.x, self.y, size.x, size.y)
    }
}
