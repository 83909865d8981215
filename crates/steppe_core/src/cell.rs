use rand::Rng;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Rendering surface of a cell: one glyph, one color.
pub trait CellView {
    fn symbol(&self) -> char;
    fn color(&self) -> Color;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

/// Per-individual state carried by Sheep and Wolf cells. `sex` is assigned
/// at creation and never read by the rules.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animal {
    pub age: u32,
    pub hunger: u32,
    pub sex: Sex,
}

impl Animal {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            age: 0,
            hunger: 0,
            sex: if rng.gen::<bool>() { Sex::Male } else { Sex::Female },
        }
    }
}

/// One cell of the ecosystem variant.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EcoCell {
    #[default]
    Empty,
    Grass,
    Mineral,
    Sheep(Animal),
    Wolf(Animal),
}

impl EcoCell {
    pub fn is_animal(&self) -> bool {
        matches!(self, EcoCell::Sheep(_) | EcoCell::Wolf(_))
    }
}

impl CellView for EcoCell {
    fn symbol(&self) -> char {
        match self {
            EcoCell::Empty => ' ',
            EcoCell::Grass => '#',
            EcoCell::Mineral => '.',
            EcoCell::Sheep(_) => 'S',
            EcoCell::Wolf(_) => 'W',
        }
    }

    fn color(&self) -> Color {
        match self {
            EcoCell::Empty => Color::Reset,
            EcoCell::Grass => Color::Green,
            EcoCell::Mineral => Color::DarkGray,
            EcoCell::Sheep(_) => Color::White,
            EcoCell::Wolf(_) => Color::Red,
        }
    }
}

/// One cell of the Game of Life variant.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifeCell {
    #[default]
    Empty,
    Alive,
}

impl LifeCell {
    pub fn is_alive(&self) -> bool {
        matches!(self, LifeCell::Alive)
    }
}

impl CellView for LifeCell {
    fn symbol(&self) -> char {
        match self {
            LifeCell::Empty => ' ',
            LifeCell::Alive => '█',
        }
    }

    fn color(&self) -> Color {
        match self {
            LifeCell::Empty => Color::Reset,
            LifeCell::Alive => Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_symbols() {
        assert_eq!(EcoCell::Grass.symbol(), '#');
        assert_eq!(EcoCell::Mineral.symbol(), '.');
        assert_eq!(EcoCell::Empty.symbol(), ' ');
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(EcoCell::Sheep(Animal::spawn(&mut rng)).symbol(), 'S');
        assert_eq!(EcoCell::Wolf(Animal::spawn(&mut rng)).symbol(), 'W');
    }

    #[test]
    fn test_spawn_starts_fresh() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let a = Animal::spawn(&mut rng);
        assert_eq!(a.age, 0);
        assert_eq!(a.hunger, 0);
    }

    #[test]
    fn test_animal_tag() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert!(EcoCell::Sheep(Animal::spawn(&mut rng)).is_animal());
        assert!(EcoCell::Wolf(Animal::spawn(&mut rng)).is_animal());
        assert!(!EcoCell::Grass.is_animal());
        assert!(!EcoCell::Mineral.is_animal());
        assert!(!EcoCell::Empty.is_animal());
    }
}
