//! Flora categories and placed-instance records.
//!
//! Categories carry no behavior here: interaction, scoring, and rendering
//! all live outside the streaming core and dispatch on [`FloraCategory`].

use glam::Vec3;

/// Decorative object categories, in classification-band order.
///
/// A uniform roll in `[0, 1)` is classified by the first band whose upper
/// edge exceeds it (see [`FloraCategory::band_edge`]); categories with an
/// empty template table are skipped and the roll falls through to the next
/// band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloraCategory {
    Tree,
    Bush,
    Mushroom,
    Rock,
    Flower,
    Stump,
}

impl FloraCategory {
    /// All categories in classification order.
    pub const ALL: [FloraCategory; 6] = [
        FloraCategory::Tree,
        FloraCategory::Bush,
        FloraCategory::Mushroom,
        FloraCategory::Rock,
        FloraCategory::Flower,
        FloraCategory::Stump,
    ];

    /// Upper edge of this category's cumulative probability band.
    ///
    /// Band widths are 0.40 / 0.15 / 0.15 / 0.15 / 0.10 / 0.05.
    pub fn band_edge(self) -> f64 {
        match self {
            FloraCategory::Tree => 0.40,
            FloraCategory::Bush => 0.55,
            FloraCategory::Mushroom => 0.70,
            FloraCategory::Rock => 0.85,
            FloraCategory::Flower => 0.95,
            FloraCategory::Stump => 1.0,
        }
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            FloraCategory::Tree => "tree",
            FloraCategory::Bush => "bush",
            FloraCategory::Mushroom => "mushroom",
            FloraCategory::Rock => "rock",
            FloraCategory::Flower => "flower",
            FloraCategory::Stump => "stump",
        }
    }
}

/// A single decorative object placed on a chunk's ground surface.
///
/// The streaming core only records placement; what a category *does* (e.g.
/// mushrooms being collectible) is external logic keyed off `category`.
#[derive(Clone, Debug, PartialEq)]
pub struct FloraInstance {
    /// Which category this object belongs to.
    pub category: FloraCategory,
    /// Index into the category's template table.
    pub template: usize,
    /// World-space position of the anchor point (object base).
    pub position: Vec3,
    /// Yaw rotation around +Y, in degrees `[0, 360)`.
    pub yaw_degrees: f32,
    /// Uniform scale multiplier. 1.0 for everything except trees, which
    /// draw from `[1.1, 2.0)`.
    pub scale: f32,
}
