use warplife::{measure, validate, BoundaryMode, GridLife, Life, NodeLife};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.5;

fn grid_with(side: usize, cells: &[(usize, usize)]) -> Vec<Vec<bool>> {
    let mut grid = vec![vec![false; side]; side];
    for &(y, x) in cells {
        grid[y][x] = true;
    }
    grid
}

fn glider(side: usize, top: usize, left: usize) -> Vec<Vec<bool>> {
    let cells: Vec<(usize, usize)> = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        .iter()
        .map(|&(y, x)| (top + y, left + x))
        .collect();
    grid_with(side, &cells)
}

fn r_pentomino(side: usize) -> Vec<Vec<bool>> {
    let (top, left) = (side / 2 - 1, side / 2 - 1);
    let cells: Vec<(usize, usize)> = [(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)]
        .iter()
        .map(|&(y, x)| (top + y, left + x))
        .collect();
    grid_with(side, &cells)
}

#[test]
fn test_blinker_on_torus() {
    let grid = grid_with(16, &[(7, 6), (7, 7), (7, 8)]);
    let mut life = NodeLife::from_grid(&grid, BoundaryMode::Torus).unwrap();
    assert_eq!(life.signature(), "0:0,0:1,0:2");

    life.step();
    assert_eq!(life.alive_coords(), vec![(6, 7), (7, 7), (8, 7)]);
    assert_eq!(life.signature(), "0:0,1:0,2:0");

    life.step();
    assert_eq!(life.alive_coords(), vec![(7, 6), (7, 7), (7, 8)]);
    assert_eq!(life.signature(), "0:0,0:1,0:2");
}

#[test]
fn test_glider_crosses_torus() {
    let grid = glider(32, 0, 0);
    let mut life = NodeLife::from_grid(&grid, BoundaryMode::Torus).unwrap();
    let start = life.alive_coords();
    let sig = life.signature();

    // a glider travels one cell diagonally every 4 generations, so it is
    // back at its exact starting cells after 4 * 32 generations
    for _ in 0..128 {
        life.step();
    }
    assert_eq!(life.alive_coords(), start);
    assert_eq!(life.signature(), sig);
}

#[test]
fn test_torus_matches_oracle() {
    use rand::{Rng, SeedableRng};

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    let grid: Vec<Vec<bool>> = (0..32)
        .map(|_| (0..32).map(|_| rng.gen_bool(FILL_RATE)).collect())
        .collect();

    let mut hashlife = NodeLife::from_grid(&grid, BoundaryMode::Torus).unwrap();
    let mut naive = GridLife::from_grid(&grid).unwrap();
    for generation in 0..=64 {
        assert_eq!(
            hashlife.signature(),
            naive.signature(),
            "diverged at generation {generation}"
        );
        hashlife.step();
        naive.step();
    }
    assert_eq!(hashlife.get_cells(), naive.get_cells());
    assert_eq!(hashlife.alive_count(), naive.alive_count());
}

#[test]
fn test_random_constructors_agree() {
    let mut hashlife = NodeLife::random(5, BoundaryMode::Torus, Some(SEED), FILL_RATE);
    let mut naive = GridLife::random(5, Some(SEED), FILL_RATE);
    assert_eq!(hashlife.signature(), naive.signature());
    assert_eq!(hashlife.alive_count(), naive.alive_count());
}

#[test]
fn test_empty_universe() {
    let grid = vec![vec![false; 16]; 16];
    let modes = [
        BoundaryMode::Torus,
        BoundaryMode::Cropped,
        BoundaryMode::Open,
        BoundaryMode::Warp,
    ];
    for mode in modes {
        let mut life = NodeLife::from_grid(&grid, mode).unwrap();
        for _ in 0..4 {
            assert_eq!(life.signature(), "");
            assert_eq!(life.alive_count(), 0);
            life.step();
        }
        match mode {
            // open mode prunes an empty field down to the smallest square
            BoundaryMode::Open => assert_eq!(life.side(), 4),
            _ => assert_eq!(life.side(), 16),
        }
    }
}

#[test]
fn test_open_matches_warp_hyper_step() {
    let grid = r_pentomino(32);
    let mut open = NodeLife::from_grid(&grid, BoundaryMode::Open).unwrap();
    let mut warp = NodeLife::with_min_level(&grid, BoundaryMode::Warp, 7).unwrap();
    assert_eq!(warp.side(), 128);
    assert_eq!(warp.generation_step(), 64);

    warp.step();
    for _ in 0..64 {
        open.step();
    }
    assert_eq!(open.signature(), warp.signature());
}

#[test]
fn test_open_mode_grows_and_prunes() {
    let mut life = NodeLife::from_grid(&r_pentomino(8), BoundaryMode::Open).unwrap();
    assert_eq!(life.side(), 8);
    for _ in 0..16 {
        life.step();
    }
    assert!(life.side() > 8, "the pattern outgrew its starting box");
}

#[test]
fn test_cropped_diverges_from_open() {
    let grid = r_pentomino(8);
    let mut cropped = NodeLife::from_grid(&grid, BoundaryMode::Cropped).unwrap();
    let mut open = NodeLife::from_grid(&grid, BoundaryMode::Open).unwrap();
    let mut diverged = false;
    for _ in 0..64 {
        cropped.step();
        open.step();
        if cropped.signature() != open.signature() {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "growth past the box must be truncated in cropped mode");
}

#[test]
fn test_validator_torus_oracle() {
    let mut hashlife = NodeLife::random(5, BoundaryMode::Torus, Some(SEED), FILL_RATE);
    let mut naive = GridLife::random(5, Some(SEED), FILL_RATE);
    assert!(validate(&mut hashlife, &mut naive, 0.1, 64));
}

#[test]
fn test_validator_aligns_warp_steps() {
    let grid = r_pentomino(32);
    let mut warp = NodeLife::with_min_level(&grid, BoundaryMode::Warp, 7).unwrap();
    let mut open = NodeLife::from_grid(&grid, BoundaryMode::Open).unwrap();
    assert!(validate(&mut warp, &mut open, 0.0, 64));
}

#[test]
fn test_validator_detects_divergence() {
    // the same glider wraps on the torus but escapes in open mode
    let grid = glider(8, 0, 0);
    let mut torus = NodeLife::from_grid(&grid, BoundaryMode::Torus).unwrap();
    let mut open = NodeLife::from_grid(&grid, BoundaryMode::Open).unwrap();
    assert!(!validate(&mut torus, &mut open, 0.0, 1000));
}

#[test]
fn test_validator_rejects_different_fields() {
    let mut a = NodeLife::from_grid(&glider(16, 0, 0), BoundaryMode::Torus).unwrap();
    let mut b = NodeLife::from_grid(&r_pentomino(16), BoundaryMode::Torus).unwrap();
    assert!(!validate(&mut a, &mut b, 0.0, 0));
}

#[test]
fn test_r_pentomino_stabilizes_in_open_mode() {
    let mut life = NodeLife::from_grid(&r_pentomino(32), BoundaryMode::Open).unwrap();
    for _ in 0..1103 {
        life.step();
    }
    assert_eq!(life.alive_count(), 116);
    // escaped gliders keep the population constant from here on
    for _ in 0..8 {
        life.step();
        assert_eq!(life.alive_count(), 116);
    }
}

#[test]
fn test_signature_is_translation_invariant() {
    let a = NodeLife::from_grid(&glider(32, 3, 4), BoundaryMode::Open).unwrap();
    let b = NodeLife::from_grid(&glider(32, 17, 9), BoundaryMode::Open).unwrap();
    assert_eq!(a.signature(), b.signature());
}

#[test]
fn test_gc_preserves_state() {
    let mut life = NodeLife::random(5, BoundaryMode::Torus, Some(SEED), FILL_RATE);
    let mut witness = NodeLife::random(5, BoundaryMode::Torus, Some(SEED), FILL_RATE);
    for _ in 0..8 {
        life.step();
        witness.step();
    }
    life.run_gc();
    assert_eq!(life.signature(), witness.signature());
    for _ in 0..8 {
        life.step();
        witness.step();
    }
    assert_eq!(life.signature(), witness.signature());
}

#[test]
fn test_set_cell_round_trip() {
    let grid = vec![vec![false; 16]; 16];
    let mut life = NodeLife::from_grid(&grid, BoundaryMode::Torus).unwrap();
    life.set_cell(7, 6, true);
    life.set_cell(7, 7, true);
    life.set_cell(7, 8, true);
    assert!(life.get_cell(7, 7));
    assert!(!life.get_cell(6, 7));

    life.step();
    assert_eq!(life.alive_coords(), vec![(6, 7), (7, 7), (8, 7)]);

    life.set_cell(7, 7, false);
    assert_eq!(life.alive_coords(), vec![(6, 7), (8, 7)]);
}

#[test]
fn test_non_square_grid_is_rejected() {
    let mut grid = vec![vec![false; 8]; 8];
    grid[3].push(true);
    assert!(NodeLife::from_grid(&grid, BoundaryMode::Torus).is_err());
    assert!(GridLife::from_grid(&grid).is_err());
}

#[test]
fn test_measure_reports_throughput() {
    let mut life = NodeLife::random(4, BoundaryMode::Torus, Some(SEED), FILL_RATE);
    let report = measure(&mut life, 0.05);
    assert!(report.contains("hashlife-torus"));
    assert!(report.contains("generations"));
}
