//! Flora template tables and deterministic scattering over a chunk.

use glam::{Vec2, Vec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use glade_chunk::{CHUNK_SIZE, FloraCategory, FloraInstance, HeightField};

/// How many decorative objects one chunk attempts to place: `[30, 50)`.
const OBJECT_COUNT_RANGE: std::ops::Range<u32> = 30..50;

/// Uniform scale range applied to trees only.
const TREE_SCALE_RANGE: std::ops::Range<f32> = 1.1..2.0;

/// A single instantiable flora template (e.g. one tree model).
///
/// The core only needs an identifying name; asset lookup, interaction, and
/// scoring data live with external systems.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloraTemplate {
    /// Asset/display name, unique within its category table.
    pub name: String,
}

impl FloraTemplate {
    /// Creates a template with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Six ordered template tables, one per [`FloraCategory`].
///
/// An empty table disables its category: rolls that land in the band fall
/// through to the next category instead of failing the placement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FloraLibrary {
    /// Tree templates. Trees also receive a random scale multiplier.
    pub trees: Vec<FloraTemplate>,
    /// Bush templates.
    pub bushes: Vec<FloraTemplate>,
    /// Mushroom templates.
    pub mushrooms: Vec<FloraTemplate>,
    /// Rock templates.
    pub rocks: Vec<FloraTemplate>,
    /// Flower templates.
    pub flowers: Vec<FloraTemplate>,
    /// Stump templates.
    pub stumps: Vec<FloraTemplate>,
}

impl FloraLibrary {
    /// The template table for a category.
    pub fn table(&self, category: FloraCategory) -> &[FloraTemplate] {
        match category {
            FloraCategory::Tree => &self.trees,
            FloraCategory::Bush => &self.bushes,
            FloraCategory::Mushroom => &self.mushrooms,
            FloraCategory::Rock => &self.rocks,
            FloraCategory::Flower => &self.flowers,
            FloraCategory::Stump => &self.stumps,
        }
    }

    /// True when every category table is empty (nothing can be placed).
    pub fn is_empty(&self) -> bool {
        FloraCategory::ALL.iter().all(|&c| self.table(c).is_empty())
    }

    /// Classifies a uniform roll in `[0, 1)` into a category.
    ///
    /// Walks the bands in order; a band whose table is empty is skipped and
    /// the roll falls through to the next band. Returns `None` only when no
    /// band at or past the roll has templates.
    pub fn classify(&self, roll: f64) -> Option<FloraCategory> {
        FloraCategory::ALL
            .into_iter()
            .find(|&c| roll < c.band_edge() && !self.table(c).is_empty())
    }
}

/// Scatters decorative objects over a chunk's ground surface.
///
/// Every random value comes from `rng` (the chunk-local stream) in a fixed
/// order: the object count first, then per object its local x, local z,
/// classification roll, template index, yaw, and for trees a scale. The
/// height probe reads the height-field at the drawn position; a non-finite
/// result skips that single placement without consuming further draws.
pub fn scatter_flora(
    rng: &mut ChaCha8Rng,
    library: &FloraLibrary,
    field: &HeightField,
    world_origin: Vec2,
) -> Vec<FloraInstance> {
    let count = rng.random_range(OBJECT_COUNT_RANGE);
    let mut placed = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let local_x = rng.random::<f32>() * CHUNK_SIZE as f32;
        let local_z = rng.random::<f32>() * CHUNK_SIZE as f32;

        let height = field.height_at(local_x, local_z);
        if !height.is_finite() {
            continue;
        }

        let roll = rng.random::<f64>();
        let Some(category) = library.classify(roll) else {
            continue;
        };

        let table = library.table(category);
        let template = rng.random_range(0..table.len());
        let yaw_degrees = rng.random_range(0.0..360.0_f32);
        let scale = if category == FloraCategory::Tree {
            rng.random_range(TREE_SCALE_RANGE)
        } else {
            1.0
        };

        placed.push(FloraInstance {
            category,
            template,
            position: Vec3::new(world_origin.x + local_x, height, world_origin.y + local_z),
            yaw_degrees,
            scale,
        });
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn full_library() -> FloraLibrary {
        FloraLibrary {
            trees: vec![FloraTemplate::new("oak"), FloraTemplate::new("pine")],
            bushes: vec![FloraTemplate::new("bramble")],
            mushrooms: vec![FloraTemplate::new("chanterelle")],
            rocks: vec![FloraTemplate::new("boulder")],
            flowers: vec![FloraTemplate::new("daisy")],
            stumps: vec![FloraTemplate::new("stump")],
        }
    }

    fn flat_field() -> HeightField {
        HeightField::from_fn(|_, _| 1.0)
    }

    #[test]
    fn test_classify_band_boundaries() {
        let lib = full_library();
        assert_eq!(lib.classify(0.0), Some(FloraCategory::Tree));
        assert_eq!(lib.classify(0.399), Some(FloraCategory::Tree));
        assert_eq!(lib.classify(0.40), Some(FloraCategory::Bush));
        assert_eq!(lib.classify(0.55), Some(FloraCategory::Mushroom));
        assert_eq!(lib.classify(0.70), Some(FloraCategory::Rock));
        assert_eq!(lib.classify(0.85), Some(FloraCategory::Flower));
        assert_eq!(lib.classify(0.95), Some(FloraCategory::Stump));
        assert_eq!(lib.classify(0.999_999), Some(FloraCategory::Stump));
    }

    #[test]
    fn test_empty_table_falls_through_to_next_band() {
        let mut lib = full_library();
        lib.trees.clear();
        // A roll in the tree band now lands on bushes.
        assert_eq!(lib.classify(0.1), Some(FloraCategory::Bush));

        lib.bushes.clear();
        assert_eq!(lib.classify(0.1), Some(FloraCategory::Mushroom));
    }

    #[test]
    fn test_classify_returns_none_when_everything_is_disabled() {
        let lib = FloraLibrary::default();
        assert!(lib.is_empty());
        for roll in [0.0, 0.3, 0.6, 0.99] {
            assert_eq!(lib.classify(roll), None);
        }
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let lib = full_library();
        let field = flat_field();
        let origin = Vec2::new(32.0, -16.0);

        let mut rng_a = ChaCha8Rng::seed_from_u64(77);
        let mut rng_b = ChaCha8Rng::seed_from_u64(77);
        let a = scatter_flora(&mut rng_a, &lib, &field, origin);
        let b = scatter_flora(&mut rng_b, &lib, &field, origin);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scatter_count_and_bounds() {
        let lib = full_library();
        let field = flat_field();
        let origin = Vec2::new(160.0, 160.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let placed = scatter_flora(&mut rng, &lib, &field, origin);
        assert!(
            (30..50).contains(&placed.len()),
            "placed {} objects",
            placed.len()
        );
        let size = CHUNK_SIZE as f32;
        for obj in &placed {
            assert!(obj.position.x >= origin.x && obj.position.x < origin.x + size);
            assert!(obj.position.z >= origin.y && obj.position.z < origin.y + size);
            assert_eq!(obj.position.y, 1.0, "flat field pins everything to y=1");
            assert!(obj.yaw_degrees >= 0.0 && obj.yaw_degrees < 360.0);
        }
    }

    #[test]
    fn test_only_trees_are_scaled() {
        let lib = full_library();
        let field = flat_field();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let placed = scatter_flora(&mut rng, &lib, &field, Vec2::ZERO);
        let mut saw_tree = false;
        for obj in &placed {
            if obj.category == FloraCategory::Tree {
                saw_tree = true;
                assert!(
                    (1.1..2.0).contains(&obj.scale),
                    "tree scale {} outside [1.1, 2.0)",
                    obj.scale
                );
            } else {
                assert_eq!(obj.scale, 1.0);
            }
        }
        assert!(saw_tree, "40% tree band should produce at least one tree");
    }

    #[test]
    fn test_empty_library_places_nothing_without_failing() {
        let lib = FloraLibrary::default();
        let field = flat_field();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(scatter_flora(&mut rng, &lib, &field, Vec2::ZERO).is_empty());
    }

    #[test]
    fn test_template_indices_stay_in_table() {
        let lib = full_library();
        let field = flat_field();
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for obj in scatter_flora(&mut rng, &lib, &field, Vec2::ZERO) {
                assert!(obj.template < lib.table(obj.category).len());
            }
        }
    }

    #[test]
    fn test_band_distribution_converges() {
        let lib = full_library();
        let mut rng = ChaCha8Rng::seed_from_u64(123);
        let rolls = 100_000;
        let mut counts = std::collections::HashMap::new();
        for _ in 0..rolls {
            let roll = rng.random::<f64>();
            let category = lib.classify(roll).expect("full library always classifies");
            *counts.entry(category).or_insert(0u32) += 1;
        }
        let expected = [
            (FloraCategory::Tree, 0.40),
            (FloraCategory::Bush, 0.15),
            (FloraCategory::Mushroom, 0.15),
            (FloraCategory::Rock, 0.15),
            (FloraCategory::Flower, 0.10),
            (FloraCategory::Stump, 0.05),
        ];
        for (category, p) in expected {
            let observed = counts[&category] as f64 / rolls as f64;
            assert!(
                (observed - p).abs() < 0.01,
                "{category:?}: observed {observed}, expected {p}"
            );
        }
    }
}
