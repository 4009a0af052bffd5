/// Describes the strategy of updating the field at its boundary.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoundaryMode {
    /// Bounds of the field are stitched together.
    Torus,
    /// Field keeps its size; growth past the bounds is truncated.
    Cropped,
    /// Field is unbounded and can grow infinitely.
    Open,
    /// Bounded field advancing `side / 2` generations per step. Growth
    /// that escapes the padded box is truncated, so this mode is not
    /// suited to patterns with unbounded growth.
    Warp,
}
