//! Grid tests - construction, validated access and mutation

use proptest::prelude::*;

use tui_chart::core::{AxisConfig, Grid, GridConfig, GridError, PlainDecorator, Point, VisualPoint};
use tui_chart::types::BLANK;

fn symmetric(extent: i64) -> Grid {
    Grid::new(GridConfig::new(
        AxisConfig::symmetric(extent, 1, 10, true),
        AxisConfig::symmetric(extent, 1, 10, true),
    ))
    .unwrap()
}

#[test]
fn test_grid_dimensions_follow_sign_policy() {
    let both = symmetric(3);
    assert_eq!((both.width(), both.height()), (7, 7));
    assert_eq!(both.origin_index(), (3, 3));
    assert_eq!(both.origin_index(), (both.width() / 2, both.height() / 2));

    let positive = Grid::new(GridConfig::new(
        AxisConfig::symmetric(3, 1, 10, false),
        AxisConfig::symmetric(2, 1, 10, false),
    ))
    .unwrap();
    assert_eq!((positive.width(), positive.height()), (4, 3));
    assert_eq!(positive.origin_index(), (0, 0));
}

#[test]
fn test_grid_asymmetric_extents() {
    let mut grid = Grid::new(GridConfig::new(
        AxisConfig::new(4, 1, 1, 10, true),
        AxisConfig::new(1, 2, 1, 10, true),
    ))
    .unwrap();
    assert_eq!((grid.width(), grid.height()), (6, 4));
    assert_eq!(grid.origin_index(), (1, 2));

    assert!(grid.set(&Point::new(4, 1), "a").is_ok());
    assert!(grid.set(&Point::new(-1, -2), "b").is_ok());
    assert!(grid.get(&Point::new(-2, 0)).unwrap_err().is_out_of_range());
    assert!(grid.get(&Point::new(0, 2)).unwrap_err().is_out_of_range());

    assert_eq!(grid.render(), vec![" 1   a", "101234", " 1    ", "b2    "]);
}

#[test]
fn test_grid_axis_labels() {
    let grid = Grid::new(GridConfig::new(
        AxisConfig::symmetric(4, 3, 10, true),
        AxisConfig::symmetric(2, 5, 10, false),
    ))
    .unwrap();

    assert_eq!(grid.get(&Point::new(0, 0)), Ok("0"));
    // 3, 6, 9, 12 % 10
    assert_eq!(grid.get(&Point::new(4, 0)), Ok("2"));
    assert_eq!(grid.get(&Point::new(-3, 0)), Ok("9"));
    // 5, 10 % 10
    assert_eq!(grid.get(&Point::new(0, 1)), Ok("5"));
    assert_eq!(grid.get(&Point::new(0, 2)), Ok("0"));
    // nothing else written
    assert_eq!(grid.get(&Point::new(1, 1)), Ok(BLANK));
}

#[test]
fn test_grid_negative_labels_mirror_magnitude() {
    let grid = Grid::new(GridConfig::new(
        AxisConfig::symmetric(3, -2, 10, true),
        AxisConfig::positive(0),
    ))
    .unwrap();
    // -2, -4, -6 floor-mod 10
    assert_eq!(grid.render(), vec!["4680864"]);
}

#[test]
fn test_grid_rejects_zero_normalizer() {
    let err = Grid::new(GridConfig::new(
        AxisConfig::symmetric(2, 1, 0, true),
        AxisConfig::positive(2),
    ))
    .unwrap_err();
    assert!(matches!(err, GridError::InvalidConfiguration { .. }));
}

#[test]
fn test_grid_rejects_overflowing_dimensions() {
    let err = Grid::new(GridConfig::new(
        AxisConfig::positive(i64::MAX),
        AxisConfig::positive(0),
    ))
    .unwrap_err();
    assert!(matches!(err, GridError::InvalidConfiguration { .. }));

    let err = Grid::new(GridConfig::new(
        AxisConfig::new(0, i64::MAX, 1, 10, true),
        AxisConfig::positive(0),
    ))
    .unwrap_err();
    assert!(matches!(err, GridError::InvalidConfiguration { .. }));

    let big = u32::MAX as i64;
    let err = Grid::new(GridConfig::new(
        AxisConfig::positive(big),
        AxisConfig::positive(big),
    ))
    .unwrap_err();
    assert!(matches!(err, GridError::InvalidConfiguration { .. }));
}

#[test]
fn test_grid_set_rejects_newline() {
    let mut grid = symmetric(1);
    let before = grid.render();

    assert!(matches!(
        grid.set(&Point::new(1, 1), "\n"),
        Err(GridError::InvalidToken { .. })
    ));
    assert_eq!(grid.render(), before);
    assert_eq!(grid.render().len(), grid.height());
}

#[test]
fn test_grid_rejects_negative_extent() {
    let err = Grid::new(GridConfig::new(
        AxisConfig::positive(2),
        AxisConfig::new(-1, 0, 1, 10, false),
    ))
    .unwrap_err();
    assert!(matches!(err, GridError::InvalidConfiguration { .. }));
}

#[test]
fn test_grid_zero_extents_hold_only_origin() {
    let grid = Grid::new(GridConfig::new(
        AxisConfig::symmetric(0, 1, 10, true),
        AxisConfig::symmetric(0, 1, 10, false),
    ))
    .unwrap();
    assert_eq!(grid.render(), vec!["0"]);
    assert!(grid.get(&Point::new(-1, 0)).is_err());
}

#[test]
fn test_grid_sign_policy_errors() {
    let mut grid = Grid::new(GridConfig::new(
        AxisConfig::symmetric(5, 1, 10, false),
        AxisConfig::symmetric(5, 1, 10, true),
    ))
    .unwrap();

    assert_eq!(
        grid.set(&Point::new(-1, 0), "x"),
        Err(GridError::OutOfRange {
            x: -1,
            y: 0,
            reason: "negative x not allowed"
        })
    );
    assert!(grid.get(&Point::new(0, -5)).is_ok());
    assert_eq!(
        grid.delete(&Point::new(0, -6)),
        Err(GridError::OutOfRange {
            x: 0,
            y: -6,
            reason: "y beyond extent"
        })
    );
}

#[test]
fn test_grid_failed_calls_do_not_mutate() {
    let mut grid = symmetric(2);
    let before = grid.render();

    assert!(grid.set(&Point::new(3, 0), "x").is_err());
    assert!(grid.delete(&Point::new(0, -3)).is_err());
    assert!(grid.set(&Point::new(1, 1), "xy").is_err());

    assert_eq!(grid.render(), before);
}

#[test]
fn test_grid_delete_is_idempotent() {
    let mut grid = symmetric(2);
    let p = Point::new(1, -1);
    grid.set(&p, "*").unwrap();

    grid.delete(&p).unwrap();
    let once = grid.clone();
    grid.delete(&p).unwrap();

    assert_eq!(grid.get(&p), Ok(BLANK));
    assert_eq!(grid, once);
}

#[test]
fn test_grid_delete_clears_axis_label() {
    let mut grid = symmetric(2);
    grid.delete(&Point::new(0, 0)).unwrap();
    assert_eq!(grid.get(&Point::new(0, 0)), Ok(BLANK));
}

#[test]
fn test_grid_set_is_idempotent() {
    let mut once = symmetric(2);
    let mut twice = symmetric(2);
    let p = Point::new(-2, 2);

    once.set(&p, "c").unwrap();
    twice.set(&p, "c").unwrap();
    twice.set(&p, "c").unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_grid_initial_points_last_write_wins() {
    let points = [
        VisualPoint::new(1, 1, 'a').unwrap(),
        VisualPoint::new(-1, 1, 'z').unwrap(),
        VisualPoint::new(1, 1, 'b').unwrap(),
    ];
    let grid = Grid::with_points(
        GridConfig::new(
            AxisConfig::symmetric(2, 1, 10, true),
            AxisConfig::symmetric(2, 1, 10, true),
        ),
        &points,
        &PlainDecorator,
    )
    .unwrap();

    assert_eq!(grid.get(&Point::new(1, 1)), Ok("b"));
    assert_eq!(grid.get(&Point::new(-1, 1)), Ok("z"));
}

#[test]
fn test_grid_initial_point_out_of_range_fails() {
    let points = [VisualPoint::new(-1, 0, 'a').unwrap()];
    let err = Grid::with_points(
        GridConfig::new(AxisConfig::positive(2), AxisConfig::positive(2)),
        &points,
        &PlainDecorator,
    )
    .unwrap_err();
    assert!(err.is_out_of_range());
}

#[test]
fn test_grid_round_trip_every_cell() {
    let extent = 3;
    let mut grid = symmetric(extent);
    let tokens = ['a', 'b', 'c', 'd', 'e', 'f', 'g'];

    for y in -extent..=extent {
        for x in -extent..=extent {
            let token = tokens[(x + y).rem_euclid(7) as usize].to_string();
            grid.set(&Point::new(x, y), &token).unwrap();
        }
    }
    for y in -extent..=extent {
        for x in -extent..=extent {
            let token = tokens[(x + y).rem_euclid(7) as usize].to_string();
            assert_eq!(grid.get(&Point::new(x, y)), Ok(token.as_str()));
        }
    }

    for (x, y) in [(4, 0), (0, 4), (-4, 0), (0, -4), (4, 4)] {
        assert!(grid.get(&Point::new(x, y)).unwrap_err().is_out_of_range());
    }
}

fn axis() -> impl Strategy<Value = AxisConfig> {
    (0i64..4, 0i64..4, any::<bool>())
        .prop_map(|(pos, neg, allow)| AxisConfig::new(pos, neg, 1, 10, allow))
}

fn token_at(x: i64, y: i64) -> String {
    char::from(b'a' + (x + 3 * y).rem_euclid(26) as u8).to_string()
}

proptest! {
    #[test]
    fn grid_round_trip_over_extents(x in axis(), y in axis()) {
        let mut grid = Grid::new(GridConfig::new(x, y)).unwrap();
        let xs = -x.effective_neg()..=x.extent_pos;
        let ys = -y.effective_neg()..=y.extent_pos;

        for py in ys.clone() {
            for px in xs.clone() {
                grid.set(&Point::new(px, py), &token_at(px, py)).unwrap();
            }
        }
        for py in ys.clone() {
            for px in xs.clone() {
                let expected = token_at(px, py);
                prop_assert_eq!(grid.get(&Point::new(px, py)), Ok(expected.as_str()));
            }
        }

        // one step past each bound; on a positive-only axis that step is negative
        let outside = [
            (x.extent_pos + 1, 0),
            (-x.effective_neg() - 1, 0),
            (0, y.extent_pos + 1),
            (0, -y.effective_neg() - 1),
        ];
        for (px, py) in outside {
            prop_assert!(grid.get(&Point::new(px, py)).unwrap_err().is_out_of_range());
        }
        if !x.allow_negative {
            prop_assert!(grid.get(&Point::new(-1, 0)).unwrap_err().is_out_of_range());
        }
        if !y.allow_negative {
            prop_assert!(grid.get(&Point::new(0, -1)).unwrap_err().is_out_of_range());
        }
    }
}
