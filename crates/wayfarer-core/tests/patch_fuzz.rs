use rand::SeedableRng;
use rand::rngs::StdRng;

use wayfarer_core::mapgen::{DEFAULT_LAYOUT, PatchSpec};
use wayfarer_core::tile;
use wayfarer_core::{GameMap, Point, Range};

#[test]
fn water_patch_never_escapes_the_grid() {
    let interior = Range::new(1, 1, 29, 14);
    for seed in 0..1000 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut map = GameMap::blank(30, 15);
        let n = map.generate_patch(&tile::WATER, PatchSpec::new(1, 3, 10), true, &mut rng);
        assert!(n > 0, "seed {seed} stamped nothing");
        for (p, t) in map.terrain().iter() {
            if t.is(&tile::WATER) {
                assert!(interior.contains(p), "seed {seed}: water at {p}");
            }
        }
    }
}

#[test]
fn full_layout_keeps_the_border() {
    for seed in 0..1000 {
        let mut rng = StdRng::seed_from_u64(seed);
        let map = GameMap::generate(30, 15, &mut rng);
        let interior = map.bounds().inset(1);
        for (p, t) in map.terrain().iter() {
            if !interior.contains(p) {
                assert!(t.is(&tile::PLAINS), "seed {seed}: {t} at {p}");
            }
        }
    }
}

#[test]
fn odd_sizes_do_not_panic() {
    for (w, h) in [(3, 3), (4, 30), (30, 4), (5, 5), (100, 3), (1, 1), (0, 0)] {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut map = GameMap::generate(w, h, &mut rng);
            for (t, spec) in DEFAULT_LAYOUT {
                map.generate_patch(t, spec, false, &mut rng);
            }
            map.update(Point::ZERO, &tile::PLAYER_MARKER);
        }
    }
}
