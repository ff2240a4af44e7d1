/// A pixel position on a surface. Signed so drag rectangles that leave the
/// surface still map onto the plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
