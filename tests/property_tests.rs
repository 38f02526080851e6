//! Property-based tests for the economy and the turn engine.

use proptest::prelude::*;

use save_our_planet::board::{Board, Category, Property};
use save_our_planet::core::{
    Dice, GameConfig, GameRng, Player, PlayerId, PlayerRegistry, TurnAction,
};
use save_our_planet::rules::{efficiency, TurnEngine};
use save_our_planet::ui::ScriptedPort;

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Waste),
        Just(Category::Marine),
        Just(Category::Land),
        Just(Category::Eco),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every die shows a face in 1..=6 for any seed.
    #[test]
    fn prop_dice_in_range(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        for _ in 0..50 {
            let roll = rng.roll();
            prop_assert!((1..=6).contains(&roll.first));
            prop_assert!((1..=6).contains(&roll.second));
            prop_assert!((2..=12).contains(&roll.total()));
        }
    }

    /// Efficiency is a percentage.
    #[test]
    fn prop_efficiency_bounded(
        resources in 0i64..100_000,
        spent in 0i64..100_000,
        owns_marine in any::<bool>()
    ) {
        let mut player = Player::with_resources(PlayerId::new(0), "Ada", resources);
        player.spend(spent);
        let mut board = Board::standard();
        if owns_marine {
            board.property_mut(2).unwrap().acquire(player.id).unwrap();
        }

        let score = efficiency(&player, &board);
        prop_assert!((0..=100).contains(&score));
        if spent == 0 {
            prop_assert_eq!(score, 0);
        }
    }

    /// Redistribution conserves resources apart from the unpaid remainder.
    #[test]
    fn prop_distribution_conserves(
        balances in prop::collection::vec(0i64..50_000, 2..=4),
        from in 0usize..4
    ) {
        let from = PlayerId::new((from % balances.len()) as u8);
        let players = balances
            .iter()
            .enumerate()
            .map(|(i, &r)| Player::with_resources(PlayerId::new(i as u8), format!("P{i}"), r))
            .collect();
        let mut registry = PlayerRegistry::from_players(players);
        let before: i64 = registry.iter().map(Player::resources).sum();

        let distribution = registry.distribute(from).unwrap();
        let after: i64 = registry.iter().map(Player::resources).sum();

        prop_assert_eq!(before, after + distribution.lost);
        prop_assert!(distribution.lost < balances.len() as i64 - 1);
        prop_assert_eq!(registry.get(from).total_spent(), distribution.amount);
    }

    /// Each development level costs more than the last and raises the rent.
    #[test]
    fn prop_development_costs_increase(base in 10i64..5_000, category in category()) {
        let mut property = Property::new(base, category);
        property.acquire(PlayerId::new(0)).unwrap();

        let mut last_cost = 0;
        let mut last_rent = property.rent();
        while property.can_develop() {
            let cost = property.development_cost();
            prop_assert!(cost > last_cost);
            last_cost = cost;

            property.develop().unwrap();
            prop_assert!(property.rent() > last_rent);
            last_rent = property.rent();
        }
        prop_assert_eq!(property.development_level(), category.max_level());
    }

    /// Random games keep balances non-negative, tokens on the board, and
    /// end exactly when a player quits or at most one player is solvent.
    #[test]
    fn prop_game_invariants(
        seed in any::<u64>(),
        players in 2usize..=4,
        default_choice in 1usize..=2
    ) {
        let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
        let config = GameConfig::new(names).unwrap().with_seed(seed);
        let mut engine = TurnEngine::new(&config);
        let mut port = ScriptedPort::new().with_default_choice(default_choice);

        for _ in 0..60 {
            if engine.state().phase.is_over() {
                break;
            }
            let record = engine.play_turn(&mut port).unwrap();
            let state = engine.state();

            for player in state.players.iter() {
                prop_assert!(player.resources() >= 0);
                prop_assert!(player.position < state.board.len());
            }
            for property in state.board.squares().iter().filter_map(|s| s.as_property()) {
                if property.owner().is_some() {
                    prop_assert!(property.total_investment() >= property.base_cost());
                }
            }

            let solvent = state.players.players_with_resources();
            if state.phase.is_over() {
                prop_assert!(record.action == TurnAction::Quit || solvent <= 1);
            } else {
                prop_assert!(solvent >= 2);
            }
        }
    }
}
