/// Ten-pin score keeper.
#[derive(Debug, Default)]
pub struct Game {
    rolls: Vec<u32>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roll(&mut self, pins: u32) {
        self.rolls.push(pins);
    }

    pub fn score(&self) -> u32 {
        let mut score = 0;
        let mut i = 0;
        for _ in 0..10 {
            if self.pins(i) == 10 {
                score += 10 + self.pins(i + 1) + self.pins(i + 2);
                i += 1;
            } else if self.pins(i) + self.pins(i + 1) == 10 {
                score += 10 + self.pins(i + 2);
                i += 2;
            } else {
                score += self.pins(i) + self.pins(i + 1);
                i += 2;
            }
        }
        score
    }

    fn pins(&self, roll: usize) -> u32 {
        self.rolls.get(roll).copied().unwrap_or(0)
    }
}
