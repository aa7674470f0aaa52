//! Paintball stats.

use crate::calculate::ratio3;
use crate::config::StaticConfig;
use crate::models::Stats;
use crate::profile::RawProfile;

pub fn get_stats(profile: &RawProfile, _config: &StaticConfig) -> Stats {
    let paintball = profile.game("Paintball");
    let mut stats = Stats::new();

    for stat in [
        "wins",
        "killstreaks",
        "forcefieldTime",
        "kills",
        "deaths",
        "coins",
        "shots_fired",
    ] {
        stats.set(stat, paintball.int(stat));
    }

    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));
    stats.set("shot_kill", ratio3(stats.num("shots_fired"), stats.num("kills")));

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn profile(paintball: Value) -> RawProfile {
        RawProfile::from_value(json!({
            "player": {"stats": {"Paintball": paintball}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_section() {
        let stats = get_stats(&profile(json!({})), &StaticConfig::default());
        assert_eq!(stats.int("wins"), 0);
        assert_eq!(stats.num("shot_kill"), 0.0);
    }

    #[test]
    fn test_ratios() {
        let stats = get_stats(
            &profile(json!({"kills": 50, "deaths": 20, "shots_fired": 600})),
            &StaticConfig::default(),
        );
        assert_eq!(stats.num("kill_death"), 2.5);
        assert_eq!(stats.num("shot_kill"), 12.0);
    }
}
