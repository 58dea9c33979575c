/// Which of the two players is to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// A named token holder. Name and token are display attributes only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    token: char,
}

impl Player {
    pub fn new(name: impl Into<String>, token: char) -> Self {
        Player {
            name: name.into(),
            token,
        }
    }

    /// The default pair for a match: "Player One" (X) and "Player Two" (O).
    pub fn default_pair() -> [Player; 2] {
        [Player::new("Player One", 'X'), Player::new("Player Two", 'O')]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> char {
        self.token
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_token(&mut self, token: char) {
        self.token = token;
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::new("Regular Joe", '@')
    }
}
