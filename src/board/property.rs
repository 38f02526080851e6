//! Property squares: ownership, development and the cost/rent tables.
//!
//! All money values are integers. Multipliers are applied in floating point
//! and the product is truncated toward zero.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::{GameError, Result};

/// Thematic category of a property. Determines the maximum development
/// level and the cost/rent tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Waste management.
    Waste,
    /// Marine renewable energy.
    Marine,
    /// Land based renewable energy.
    Land,
    /// Eco city.
    Eco,
}

impl Category {
    /// Highest development level a property of this category can reach.
    #[must_use]
    pub const fn max_level(self) -> u8 {
        match self {
            Category::Waste | Category::Eco => 2,
            Category::Marine | Category::Land => 3,
        }
    }

    /// Themed names per development level.
    const fn development_names(self) -> &'static [&'static str] {
        match self {
            Category::Waste => &[
                "Composting Plant",
                "Incineration Plant",
                "Advanced Waste Management",
            ],
            Category::Marine => &[
                "Tidal Wave Plant",
                "Offshore Wind Farm",
                "Wave Power System",
                "Integrated Marine Energy Hub",
            ],
            Category::Land => &[
                "Solar Farm",
                "Biomass Energy Plant",
                "Nuclear Power Plant",
                "Smart Grid System",
            ],
            Category::Eco => &[
                "Eco Housing",
                "Sustainable Transport Network",
                "Fully Integrated Smart City",
            ],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Waste => "Waste Management",
            Category::Marine => "Marine Energy",
            Category::Land => "Land Energy",
            Category::Eco => "Eco City",
        };
        f.write_str(name)
    }
}

/// Mutable state of a purchasable square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    base_cost: i64,
    category: Category,
    owner: Option<PlayerId>,
    development_level: u8,
    total_investment: i64,
}

impl Property {
    /// Create an unowned, undeveloped property.
    ///
    /// # Panics
    ///
    /// Panics if `base_cost` is not positive.
    #[must_use]
    pub fn new(base_cost: i64, category: Category) -> Self {
        assert!(base_cost > 0, "base cost must be positive");
        Self {
            base_cost,
            category,
            owner: None,
            development_level: 0,
            total_investment: 0,
        }
    }

    /// Purchase price.
    #[must_use]
    pub fn base_cost(&self) -> i64 {
        self.base_cost
    }

    /// Category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Current owner, if any.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Whether `player` owns this property.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// Current development level.
    #[must_use]
    pub fn development_level(&self) -> u8 {
        self.development_level
    }

    /// Purchase price plus every development paid so far.
    #[must_use]
    pub fn total_investment(&self) -> i64 {
        self.total_investment
    }

    /// Take ownership. The buyer has already paid `base_cost`.
    pub fn acquire(&mut self, player: PlayerId) -> Result<()> {
        if let Some(owner) = self.owner {
            return Err(GameError::illegal(format!(
                "property already owned by {owner}"
            )));
        }
        self.owner = Some(player);
        self.total_investment += self.base_cost;
        Ok(())
    }

    /// Whether another development level is available.
    #[must_use]
    pub fn can_develop(&self) -> bool {
        self.development_level < self.category.max_level()
    }

    /// Cost of the next development level.
    #[must_use]
    pub fn development_cost(&self) -> i64 {
        let multiplier = match self.development_level {
            0 => 1.5,
            1 => 2.0,
            2 if self.category == Category::Marine => 2.5,
            2 => 3.0,
            _ => 1.0,
        };
        scale(self.base_cost, multiplier)
    }

    /// Advance one level. The owner has already paid `development_cost()`.
    pub fn develop(&mut self) -> Result<()> {
        if !self.can_develop() {
            return Err(GameError::illegal(format!(
                "{} property is already at max level {}",
                self.category, self.development_level
            )));
        }
        let cost = self.development_cost();
        self.development_level += 1;
        self.total_investment += cost;
        Ok(())
    }

    /// Rent owed by a visitor.
    #[must_use]
    pub fn rent(&self) -> i64 {
        if self.category == Category::Eco && self.development_level == 2 {
            return scale(self.base_cost, 2.0);
        }

        let multiplier = match self.development_level {
            0 => 0.2,
            1 => 0.5,
            2 => 1.0,
            3 => 1.5,
            _ => 0.1,
        };
        scale(self.base_cost, multiplier)
    }

    /// Themed name of the current development, or `base_name` past the table.
    #[must_use]
    pub fn development_name<'a>(&self, base_name: &'a str) -> &'a str {
        match self
            .category
            .development_names()
            .get(usize::from(self.development_level))
        {
            Some(name) => *name,
            None => base_name,
        }
    }
}

/// `value * multiplier`, truncated toward zero.
fn scale(value: i64, multiplier: f64) -> i64 {
    (value as f64 * multiplier) as i64
}
