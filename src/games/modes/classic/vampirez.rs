//! VampireZ stats.

use crate::calculate::ratio3;
use crate::config::StaticConfig;
use crate::models::Stats;
use crate::profile::RawProfile;

pub fn get_stats(profile: &RawProfile, _config: &StaticConfig) -> Stats {
    let vampirez = profile.game("VampireZ");
    let mut stats = Stats::new();

    for stat in [
        "coins",
        "zombie_kills",
        "human_wins",
        "vampire_kills",
        "human_deaths",
        "vampire_wins",
        "human_kills",
        "vampire_deaths",
    ] {
        stats.set(stat, vampirez.int(stat));
    }

    stats.set("wins", stats.int("human_wins") + stats.int("vampire_wins"));
    // Human K/D counts vampires slain while human, and vice versa.
    stats.set(
        "human_kill_death",
        ratio3(stats.num("vampire_kills"), stats.num("human_deaths")),
    );
    stats.set(
        "vampire_kill_death",
        ratio3(stats.num("human_kills"), stats.num("vampire_deaths")),
    );

    stats
}
