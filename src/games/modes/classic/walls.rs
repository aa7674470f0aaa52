//! Walls stats.

use crate::calculate::ratio3;
use crate::config::StaticConfig;
use crate::models::Stats;
use crate::profile::RawProfile;

pub fn get_stats(profile: &RawProfile, _config: &StaticConfig) -> Stats {
    let walls = profile.game("Walls");
    let mut stats = Stats::new();

    for stat in ["wins", "losses", "coins", "kills", "deaths"] {
        stats.set(stat, walls.int(stat));
    }

    stats.set("win_loss", ratio3(stats.num("wins"), stats.num("losses")));
    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn profile(walls: Value) -> RawProfile {
        RawProfile::from_value(json!({
            "player": {"stats": {"Walls": walls}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_section() {
        let stats = get_stats(&profile(json!({})), &StaticConfig::default());
        assert_eq!(stats.int("wins"), 0);
        assert_eq!(stats.num("win_loss"), 0.0);
    }

    #[test]
    fn test_ratios() {
        let stats = get_stats(
            &profile(json!({"wins": 9, "losses": 3, "kills": 40, "deaths": 16})),
            &StaticConfig::default(),
        );
        assert_eq!(stats.num("win_loss"), 3.0);
        assert_eq!(stats.num("kill_death"), 2.5);
    }
}
