use steppe_core::{Automaton, LifeCell, LifeConfig, LifeRule};

fn empty_world(width: u16, height: u16) -> Automaton<LifeRule> {
    Automaton::new(
        width,
        height,
        LifeRule::new(LifeConfig { soup_density: 0.0 }),
        Some(0),
    )
}

fn alive_cells(world: &Automaton<LifeRule>) -> Vec<(u16, u16)> {
    world
        .grid
        .coords()
        .filter(|&(x, y)| world.grid.get(x, y).is_alive())
        .collect()
}

#[test]
fn test_glider_translates_diagonally() {
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let mut world = empty_world(10, 10);
    for (x, y) in glider {
        world.grid.set(x, y, LifeCell::Alive);
    }

    for _ in 0..4 {
        world.step();
    }

    // A glider repeats its shape every 4 generations, one cell down-right.
    let expected: Vec<(u16, u16)> = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    let mut actual = alive_cells(&world);
    actual.sort_unstable();
    let mut expected = expected;
    expected.sort_unstable();
    assert_eq!(actual, expected);
}

#[test]
fn test_no_spontaneous_generation() {
    let mut world = empty_world(16, 12);
    for _ in 0..5 {
        world.step();
        assert!(alive_cells(&world).is_empty());
    }
}

#[test]
fn test_overpopulation_kills() {
    // A 3x3 square: the center has 8 neighbors and must die.
    let mut world = empty_world(5, 5);
    for y in 1..=3 {
        for x in 1..=3 {
            world.grid.set(x, y, LifeCell::Alive);
        }
    }
    world.step();
    assert!(!world.grid.get(2, 2).is_alive());
    // Edge midpoints have 5 neighbors and die too; corners have 3 and live.
    assert!(!world.grid.get(2, 1).is_alive());
    assert!(world.grid.get(1, 1).is_alive());
}
