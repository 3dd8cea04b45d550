use sheet_packer_core::config::{GrowthPolicy, PackerConfig, Strategy};
use sheet_packer_core::error::SheetPackerError;
use sheet_packer_core::pack_layout;

#[test]
fn empty_input_yields_zero_atlas() {
    let inputs: Vec<(String, u32, u32)> = vec![];
    let atlas = pack_layout(inputs, PackerConfig::default()).expect("empty set is not an error");
    assert_eq!(atlas.width, 0);
    assert_eq!(atlas.height, 0);
    assert!(atlas.frames.is_empty());
}

#[test]
fn single_non_square_sprite_returns_immediately() {
    // A lone 10x30 sprite can never satisfy width >= height; the driver must
    // not spin growing the limit.
    let atlas = pack_layout(vec![("tall", 10, 30)], PackerConfig::default()).unwrap();
    assert_eq!((atlas.width, atlas.height), (10, 30));
    assert_eq!(atlas.frames.len(), 1);
    assert_eq!(atlas.frames[0].frame.x, 0);
    assert_eq!(atlas.frames[0].frame.y, 0);
}

#[test]
fn two_identical_squares_pack_side_by_side() {
    let atlas = pack_layout(vec![("a", 50, 50), ("b", 50, 50)], PackerConfig::default()).unwrap();
    // Squareness forces width >= height, so (100, 50) is the only valid shape.
    assert_eq!((atlas.width, atlas.height), (100, 50));
    assert!(!atlas.frames[0].frame.overlaps(&atlas.frames[1].frame));
}

#[test]
fn three_sprites_sorted_tall_first() {
    let inputs = vec![("b", 20, 20), ("a", 40, 40), ("c", 20, 20)];
    let atlas = pack_layout(inputs, PackerConfig::default()).unwrap();
    let keys: Vec<&str> = atlas.frames.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, ["a", "b", "c"]);
    // Tallest sprite anchors the first row.
    assert_eq!(atlas.frames[0].frame.x, 0);
    assert_eq!(atlas.frames[0].frame.y, 0);
    for i in 0..atlas.frames.len() {
        for j in i + 1..atlas.frames.len() {
            assert!(!atlas.frames[i].frame.overlaps(&atlas.frames[j].frame));
        }
    }
    assert!(atlas.width >= atlas.height);
}

#[test]
fn zero_sized_sprite_fails_fast() {
    let result = pack_layout(vec![("ok", 10, 10), ("bad", 0, 5)], PackerConfig::default());
    match result {
        Err(SheetPackerError::InvalidSpriteSize { key, width, height }) => {
            assert_eq!(key, "bad");
            assert_eq!((width, height), (0, 5));
        }
        other => panic!("expected InvalidSpriteSize, got {:?}", other.map(|a| a.stats())),
    }
}

#[test]
fn zero_width_limit_is_rejected() {
    let cfg = PackerConfig {
        initial_width_limit: 0,
        ..Default::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(SheetPackerError::InvalidConfig(_))
    ));
}

#[test]
fn zero_attempts_is_rejected() {
    let cfg = PackerConfig {
        max_attempts: 0,
        ..Default::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(SheetPackerError::InvalidConfig(_))
    ));
}

#[test]
fn add_fixed_zero_growth_is_rejected() {
    let cfg = PackerConfig {
        growth: GrowthPolicy::AddFixed(0),
        ..Default::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(SheetPackerError::InvalidConfig(_))
    ));
}

#[test]
fn retry_cap_reports_non_convergence() {
    // Five 60x60 squares need a 256 limit to come out wider than tall; one
    // attempt at 128 is rejected and the cap trips.
    let cfg = PackerConfig {
        initial_width_limit: 128,
        max_attempts: 1,
        ..Default::default()
    };
    let inputs: Vec<(String, u32, u32)> =
        (0..5).map(|i| (format!("s{i}"), 60, 60)).collect();
    match pack_layout(inputs, cfg) {
        Err(SheetPackerError::NonConvergence { attempts, .. }) => assert_eq!(attempts, 1),
        other => panic!("expected NonConvergence, got {:?}", other.map(|a| a.stats())),
    }
}

#[test]
fn unreachable_squareness_exhausts_attempts() {
    // One 1x100 strip plus a 1x1: every layout is a single column of width 2
    // at most, so width >= height never holds and the cap is the way out.
    let cfg = PackerConfig {
        strategy: Strategy::ShelfOnly,
        ..Default::default()
    };
    let result = pack_layout(vec![("strip", 1, 100), ("dot", 1, 1)], cfg);
    assert!(matches!(
        result,
        Err(SheetPackerError::NonConvergence { .. })
    ));
}
