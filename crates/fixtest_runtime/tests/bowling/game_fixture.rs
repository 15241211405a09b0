use fixtest_runtime::{Fixture, should};

use crate::game::Game;

pub struct BowlingGameFixture {
    game: Game,
}

impl BowlingGameFixture {
    pub fn setup(fx: &mut Fixture) -> Self {
        fx.log("new game");
        Self { game: Game::new() }
    }

    pub fn teardown(&mut self, fx: &mut Fixture) {
        fx.logf(format_args!("final score {}", self.game.score()));
    }

    fn roll_many(&mut self, times: usize, pins: u32) {
        for _ in 0..times {
            self.game.roll(pins);
        }
    }

    pub fn test_gutter_game(&mut self, fx: &mut Fixture) {
        self.roll_many(20, 0);
        fx.so(&self.game.score(), should::equal, &0);
    }

    pub fn test_all_ones(&mut self, fx: &mut Fixture) {
        self.roll_many(20, 1);
        fx.so(&self.game.score(), should::equal, &20);
    }

    pub fn test_spare(&mut self, fx: &mut Fixture) {
        self.game.roll(5);
        self.game.roll(5);
        self.game.roll(3);
        self.roll_many(17, 0);
        fx.so(&self.game.score(), should::equal, &16);
    }

    pub fn test_strike(&mut self, fx: &mut Fixture) {
        self.game.roll(10);
        self.game.roll(3);
        self.game.roll(4);
        self.roll_many(16, 0);
        fx.so(&self.game.score(), should::equal, &24);
    }

    pub fn skip_test_split_bonus(&mut self, fx: &mut Fixture) {
        fx.error("split bonuses are not scored yet");
    }

    pub fn long_test_perfect_game(&mut self, fx: &mut Fixture) {
        self.roll_many(12, 10);
        fx.so(&self.game.score(), should::equal, &300);
    }
}
