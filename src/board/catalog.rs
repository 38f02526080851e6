//! The board catalog: the fixed ring of squares and ownership queries.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::property::{Category, Property};
use super::square::{Square, SpecialKind};
use crate::core::PlayerId;
use crate::error::{GameError, Result};

/// Board positions of a player's properties. The standard board has four
/// properties, so this never spills to the heap.
pub type PropertyPositions = SmallVec<[usize; 4]>;

/// Ordered ring of squares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// The standard six-square board.
    ///
    /// ```
    /// use save_our_planet::board::Board;
    ///
    /// let board = Board::standard();
    /// assert_eq!(board.len(), 6);
    /// assert_eq!(board.square(3).unwrap().name, "Wasteland");
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self::from_squares(vec![
            Square::special(0, "Sustainability Grant", SpecialKind::Start),
            Square::property(1, "Waste Management Plant", Property::new(200, Category::Waste)),
            Square::property(
                2,
                "Marine Renewable Energy Plant",
                Property::new(300, Category::Marine),
            ),
            Square::special(3, "Wasteland", SpecialKind::PenaltyZone),
            Square::property(
                4,
                "Land Based Renewable Energy Plant",
                Property::new(350, Category::Land),
            ),
            Square::property(5, "Eco City", Property::new(400, Category::Eco)),
        ])
    }

    /// Build a board from squares. Positions are reassigned to the index.
    ///
    /// # Panics
    ///
    /// Panics if `squares` is empty.
    #[must_use]
    pub fn from_squares(mut squares: Vec<Square>) -> Self {
        assert!(!squares.is_empty(), "board needs at least one square");
        for (i, square) in squares.iter_mut().enumerate() {
            square.position = i;
        }
        Self { squares }
    }

    /// Number of squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// A board is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Square at `index`.
    pub fn square(&self, index: usize) -> Result<&Square> {
        self.squares.get(index).ok_or(GameError::OutOfRange {
            index,
            len: self.squares.len(),
        })
    }

    /// Property at `index`.
    pub fn property(&self, index: usize) -> Result<&Property> {
        let square = self.square(index)?;
        square
            .as_property()
            .ok_or_else(|| GameError::illegal(format!("{} is not a property", square.name)))
    }

    /// Mutable property at `index`.
    pub fn property_mut(&mut self, index: usize) -> Result<&mut Property> {
        let len = self.squares.len();
        let square = self
            .squares
            .get_mut(index)
            .ok_or(GameError::OutOfRange { index, len })?;
        let name = square.name.clone();
        square
            .as_property_mut()
            .ok_or_else(|| GameError::illegal(format!("{name} is not a property")))
    }

    /// All squares in board order.
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Properties owned by `player`, in board order.
    pub fn properties_owned_by(
        &self,
        player: PlayerId,
    ) -> impl Iterator<Item = (&Square, &Property)> {
        self.squares.iter().filter_map(move |square| {
            square
                .as_property()
                .filter(|property| property.is_owned_by(player))
                .map(|property| (square, property))
        })
    }

    /// Positions of `player`'s properties that can still be developed.
    #[must_use]
    pub fn developable_properties(&self, player: PlayerId) -> PropertyPositions {
        self.properties_owned_by(player)
            .filter(|(_, property)| property.can_develop())
            .map(|(square, _)| square.position)
            .collect()
    }

    /// Sum of total investment over `player`'s properties.
    #[must_use]
    pub fn investment_of(&self, player: PlayerId) -> i64 {
        self.properties_owned_by(player)
            .map(|(_, property)| property.total_investment())
            .sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SquareKind;
    use crate::core::config::BOARD_SIZE;

    #[test]
    fn test_standard_layout() {
        let board = Board::standard();

        assert_eq!(board.len(), BOARD_SIZE);
        assert_eq!(
            board.square(0).unwrap().kind,
            SquareKind::Special(SpecialKind::Start)
        );
        assert_eq!(
            board.square(3).unwrap().kind,
            SquareKind::Special(SpecialKind::PenaltyZone)
        );

        let categories: Vec<_> = board
            .squares()
            .iter()
            .filter_map(|s| s.as_property().map(|p| (s.position, p.category(), p.base_cost())))
            .collect();
        assert_eq!(
            categories,
            vec![
                (1, Category::Waste, 200),
                (2, Category::Marine, 300),
                (4, Category::Land, 350),
                (5, Category::Eco, 400),
            ]
        );
    }

    #[test]
    fn test_square_out_of_range() {
        let board = Board::standard();
        let err = board.square(6).unwrap_err();
        assert!(matches!(err, GameError::OutOfRange { index: 6, len: 6 }));
    }

    #[test]
    fn test_property_on_special_square() {
        let mut board = Board::standard();
        assert!(matches!(board.property(0), Err(GameError::IllegalState(_))));
        assert!(matches!(board.property_mut(3), Err(GameError::IllegalState(_))));
        assert!(matches!(board.property_mut(10), Err(GameError::OutOfRange { .. })));
    }

    #[test]
    fn test_properties_owned_by() {
        let mut board = Board::standard();
        let owner = PlayerId::new(1);
        board.property_mut(5).unwrap().acquire(owner).unwrap();
        board.property_mut(2).unwrap().acquire(owner).unwrap();
        board.property_mut(1).unwrap().acquire(PlayerId::new(0)).unwrap();

        let owned: Vec<_> = board
            .properties_owned_by(owner)
            .map(|(square, _)| square.position)
            .collect();
        assert_eq!(owned, vec![2, 5]);
        assert_eq!(board.investment_of(owner), 700);
        assert_eq!(board.investment_of(PlayerId::new(2)), 0);
    }

    #[test]
    fn test_developable_properties() {
        let mut board = Board::standard();
        let owner = PlayerId::new(0);
        board.property_mut(1).unwrap().acquire(owner).unwrap();
        board.property_mut(4).unwrap().acquire(owner).unwrap();

        assert_eq!(board.developable_properties(owner).as_slice(), &[1, 4]);

        let waste = board.property_mut(1).unwrap();
        waste.develop().unwrap();
        waste.develop().unwrap();

        assert_eq!(board.developable_properties(owner).as_slice(), &[4]);
    }
}
