mod grid_life;
mod mode;
mod node_life;

pub use grid_life::GridLife;
pub use mode::BoundaryMode;
pub use node_life::NodeLife;

/// Capability set shared by every Life implementation.
///
/// The validator and the benchmark helper consume implementations solely
/// through this trait, so a flat-array oracle and the quadtree engines are
/// interchangeable from their point of view.
pub trait Life {
    fn name(&self) -> &'static str;

    /// Side length of the square field.
    fn side(&self) -> u64;

    /// Number of generations a single `step` advances.
    fn generation_step(&self) -> u64;

    /// Advances the field by `generation_step()` generations.
    fn step(&mut self);

    /// The current field as a row-major grid of cell states.
    fn get_cells(&self) -> Vec<Vec<bool>>;

    /// Coordinates of live cells, sorted in (row, column) order.
    fn alive_coords(&self) -> Vec<(u64, u64)>;

    /// Number of live cells.
    fn alive_count(&mut self) -> u64;

    /// Translation-normalized canonical form of the live cells; equal
    /// configurations produce equal signatures regardless of field size.
    fn signature(&self) -> String {
        signature_of(&self.alive_coords())
    }

    /// Multiline string reporting engine stats.
    fn extra_info(&mut self) -> String {
        String::new()
    }
}

/// Canonical string over a set of live coordinates: translated so the
/// minimum row and column are zero, formatted as `"r:c"` tokens, sorted
/// lexicographically as strings and joined with commas. An empty
/// configuration maps to the empty string.
pub fn signature_of(coords: &[(u64, u64)]) -> String {
    if coords.is_empty() {
        return String::new();
    }
    let min_row = coords.iter().map(|&(r, _)| r).min().unwrap_or(0);
    let min_col = coords.iter().map(|&(_, c)| c).min().unwrap_or(0);
    let mut tokens: Vec<String> = coords
        .iter()
        .map(|&(r, c)| format!("{}:{}", r - min_row, c - min_col))
        .collect();
    tokens.sort_unstable();
    tokens.join(",")
}
