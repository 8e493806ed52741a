use gameoflife::Grid;
use gameoflife::Simulation;
use gameoflife::step;

#[test]
fn blinker_5x3() -> anyhow::Result<()> {
    let mut sim = Simulation::new(5, 3)?;
    for (row, column) in [(0, 1), (1, 0), (1, 1), (1, 2)] {
        sim.add_life(row, column)?;
    }

    sim.advance_day();
    insta::assert_snapshot!(sim.render(), @r"
    XXX
    XXX
    OXO
    OOO
    OOO
    ");

    sim.advance_day();
    insta::assert_snapshot!(sim.render(), @r"
    XOX
    OOO
    XXX
    OOO
    OOO
    ");

    // Same thing, straight from text
    let grid: Grid = "OXO\nXXX\nOOO\nOOO\nOOO\n".parse()?;
    assert_eq!(step(&step(&grid)), *sim.grid());

    Ok(())
}

#[test]
fn single_cell_2x2() -> anyhow::Result<()> {
    let mut sim = Simulation::new(2, 2)?;
    sim.add_life(1, 1)?;

    assert_eq!(sim.render(), "OO\nOX\n");
    assert!(sim.has_life());

    sim.advance_day();

    assert!(!sim.has_life());
    assert_eq!(sim.render(), "OO\nOO\n");

    Ok(())
}

#[test]
fn glider_hits_the_corner() -> anyhow::Result<()> {
    let mut grid: Grid = "OXOOO\nOOXOO\nXXXOO\nOOOOO\nOOOOO\n".parse()?;

    // After 4 days a glider is the same shape, one cell down and to the right
    for _ in 0..4 {
        grid = step(&grid);
    }
    insta::assert_snapshot!(grid.render(), @r"
    OOOOO
    OOXOO
    OOOXO
    OXXXO
    OOOOO
    ");

    // Without wraparound it ends up stuck as a block in the corner
    for _ in 0..8 {
        grid = step(&grid);
    }
    insta::assert_snapshot!(grid.render(), @r"
    OOOOO
    OOOOO
    OOOOO
    OOOXX
    OOOXX
    ");

    Ok(())
}

mod properties {
    use gameoflife::Grid;
    use gameoflife::step;
    use proptest::prelude::*;

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (0usize..12, 0usize..12)
            .prop_flat_map(|(rows, columns)| {
                (
                    Just(rows),
                    Just(columns),
                    proptest::collection::vec(any::<bool>(), rows * columns),
                )
            })
            .prop_map(|(rows, columns, cells)| {
                let mut grid = Grid::new(rows, columns, false).unwrap();
                for (i, alive) in cells.into_iter().enumerate() {
                    grid.set_life(i / columns, i % columns, alive).unwrap();
                }
                grid
            })
    }

    proptest! {
        #[test]
        fn new_dead_grid_has_no_life(rows in 0usize..64, columns in 0usize..64) {
            let grid = Grid::new(rows, columns, false).unwrap();

            prop_assert!(!grid.has_life());
        }

        #[test]
        fn set_then_get(grid in arb_grid(), r in any::<usize>(), c in any::<usize>(), alive in any::<bool>()) {
            prop_assume!(!grid.cells().is_empty());
            let (r, c) = (r % grid.rows(), c % grid.columns());

            let mut changed = grid.clone();
            changed.set_life(r, c, alive).unwrap();

            for row in 0..grid.rows() {
                for column in 0..grid.columns() {
                    let expected = if (row, column) == (r, c) {
                        alive
                    } else {
                        grid.get_life(row, column).unwrap()
                    };

                    prop_assert_eq!(changed.get_life(row, column).unwrap(), expected);
                }
            }
        }

        #[test]
        fn out_of_range_is_rejected(grid in arb_grid(), r in 0usize..24, c in 0usize..24) {
            prop_assume!(r >= grid.rows() || c >= grid.columns());

            let mut changed = grid.clone();

            prop_assert!(changed.get_life(r, c).is_err());
            prop_assert!(changed.set_life(r, c, true).is_err());
            prop_assert_eq!(changed, grid);
        }

        #[test]
        fn clone_is_independent(grid in arb_grid()) {
            prop_assume!(grid.rows() > 0 && grid.columns() > 0);

            let mut clone = grid.clone();
            prop_assert_eq!(&clone, &grid);

            let alive = clone.get_life(0, 0).unwrap();
            clone.set_life(0, 0, !alive).unwrap();

            prop_assert_eq!(grid.get_life(0, 0).unwrap(), alive);
        }

        #[test]
        fn dead_grid_stays_dead(rows in 0usize..32, columns in 0usize..32) {
            let grid = Grid::new(rows, columns, false).unwrap();

            prop_assert_eq!(step(&grid), grid);
        }

        #[test]
        fn isolated_cell_dies(rows in 1usize..32, columns in 1usize..32, r in 0usize..32, c in 0usize..32) {
            let (r, c) = (r % rows, c % columns);

            let mut grid = Grid::new(rows, columns, false).unwrap();
            grid.set_life(r, c, true).unwrap();

            prop_assert!(!step(&grid).has_life());
        }

        #[test]
        fn step_keeps_dimensions(grid in arb_grid()) {
            let next = step(&grid);

            prop_assert_eq!((next.rows(), next.columns()), (grid.rows(), grid.columns()));
        }

        #[test]
        fn rendered_grid_parses_back(grid in arb_grid()) {
            // With no rows there's no text to recover the column count from
            prop_assume!(grid.rows() > 0 || grid.columns() == 0);

            let parsed: Grid = grid.render().parse().unwrap();

            prop_assert_eq!(parsed, grid);
        }
    }
}
