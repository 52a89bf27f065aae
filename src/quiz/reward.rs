//! Score to planet reward mapping
//!
//! Deterministic: the same final score always earns the same planet.
//! Scores that fall between listed bands (e.g. 1-9 or 31-39) earn the
//! shooting star.

use serde::{Deserialize, Serialize};

/// Cosmetic planet shown on the results screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    WhiteStar,
    Earth,
    FullMoon,
    Saturn,
    RocketWhite,
    Sun,
    /// Catch-all for scores between bands
    YellowShootingStar,
}

impl Planet {
    /// Asset identifier
    pub fn id(&self) -> &'static str {
        match self {
            Planet::WhiteStar => "WhiteStar",
            Planet::Earth => "Earth",
            Planet::FullMoon => "FullMoon",
            Planet::Saturn => "Saturn",
            Planet::RocketWhite => "RocketWhite",
            Planet::Sun => "Sun",
            Planet::YellowShootingStar => "YellowShootingStar",
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Planet::WhiteStar => 1,
            Planet::Earth => 2,
            Planet::FullMoon => 3,
            Planet::Saturn => 4,
            Planet::RocketWhite => 5,
            Planet::Sun => 6,
            Planet::YellowShootingStar => 0,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Planet::WhiteStar => "Star Baby",
            Planet::Earth => "Earth Human",
            Planet::FullMoon => "Moon Walker",
            Planet::Saturn => "Space Cowboy",
            Planet::RocketWhite => "Rocket Emperor",
            Planet::Sun => "Sun Demigod",
            Planet::YellowShootingStar => "Infinite",
        }
    }

    /// Caption such as `"level 3: Moon Walker"`
    pub fn level_label(&self) -> String {
        format!("level {}: {}", self.level(), self.title())
    }
}

/// Planet and caption earned for a finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub planet: Planet,
    pub level_label: String,
}

impl Reward {
    pub fn new(planet: Planet) -> Self {
        Self {
            planet,
            level_label: planet.level_label(),
        }
    }
}

/// Map a final score to its planet reward
pub fn compute_reward(score: i64) -> Reward {
    let planet = match score {
        ..=0 => Planet::WhiteStar,
        10..=30 => Planet::Earth,
        40..=60 => Planet::FullMoon,
        70..=100 => Planet::Saturn,
        110..=150 => Planet::RocketWhite,
        160.. => Planet::Sun,
        _ => Planet::YellowShootingStar,
    };
    Reward::new(planet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet_for(score: i64) -> Planet {
        compute_reward(score).planet
    }

    #[test]
    fn test_reward_documented_points() {
        assert_eq!(
            compute_reward(0),
            Reward {
                planet: Planet::WhiteStar,
                level_label: "level 1: Star Baby".to_string()
            }
        );
        assert_eq!(compute_reward(50).planet, Planet::FullMoon);
        assert_eq!(compute_reward(50).level_label, "level 3: Moon Walker");
        assert_eq!(compute_reward(200).planet, Planet::Sun);
        assert_eq!(compute_reward(200).level_label, "level 6: Sun Demigod");
        assert_eq!(compute_reward(5).planet, Planet::YellowShootingStar);
        assert_eq!(compute_reward(5).level_label, "level 0: Infinite");
    }

    #[test]
    fn test_reward_band_edges() {
        assert_eq!(planet_for(-200), Planet::WhiteStar);
        assert_eq!(planet_for(10), Planet::Earth);
        assert_eq!(planet_for(30), Planet::Earth);
        assert_eq!(planet_for(40), Planet::FullMoon);
        assert_eq!(planet_for(60), Planet::FullMoon);
        assert_eq!(planet_for(70), Planet::Saturn);
        assert_eq!(planet_for(100), Planet::Saturn);
        assert_eq!(planet_for(110), Planet::RocketWhite);
        assert_eq!(planet_for(150), Planet::RocketWhite);
        assert_eq!(planet_for(160), Planet::Sun);
    }

    #[test]
    fn test_reward_gaps() {
        for score in [1, 9, 31, 39, 61, 69, 101, 109, 151, 159] {
            assert_eq!(planet_for(score), Planet::YellowShootingStar, "score {}", score);
        }
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(Planet::Earth.level_label(), "level 2: Earth Human");
        assert_eq!(Planet::Saturn.level_label(), "level 4: Space Cowboy");
        assert_eq!(Planet::RocketWhite.level_label(), "level 5: Rocket Emperor");
        assert_eq!(Planet::RocketWhite.id(), "RocketWhite");
    }
}
