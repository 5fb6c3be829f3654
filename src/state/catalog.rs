// Static plant catalog.
// Theme collections and garden plants shown on the home screen.

/// A plant or collection with its image file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantEntity {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

impl PlantEntity {
    const fn new(name: &'static str, image: &'static str) -> Self {
        Self {
            name,
            image,
            description: "This is a description",
        }
    }
}

pub static THEMES: [PlantEntity; 5] = [
    PlantEntity::new("Desert chic", "desert_chic.jpg"),
    PlantEntity::new("Tiny terrariums", "tiny_terrariums.jpg"),
    PlantEntity::new("Jungle vibes", "jungle_vibes.jpg"),
    PlantEntity::new("Easy care", "easy_care.jpg"),
    PlantEntity::new("Statements", "statements.jpg"),
];

pub static GARDEN: [PlantEntity; 6] = [
    PlantEntity::new("Monstera", "monstera.jpg"),
    PlantEntity::new("Aglaonema", "aglaonema.jpg"),
    PlantEntity::new("Peace lily", "peace_lily.jpg"),
    PlantEntity::new("Fiddle leaf tree", "fiddle_leaf_tree.jpg"),
    PlantEntity::new("Snake plant", "snake_plant.jpg"),
    PlantEntity::new("Pothos", "pothos.jpg"),
];

/// Indexes into [`GARDEN`] whose names contain `query`, ignoring case.
pub fn filter_garden(query: &str) -> Vec<usize> {
    let query = query.trim().to_lowercase();
    GARDEN
        .iter()
        .enumerate()
        .filter(|(_, plant)| query.is_empty() || plant.name.to_lowercase().contains(&query))
        .map(|(i, _)| i)
        .collect()
}
