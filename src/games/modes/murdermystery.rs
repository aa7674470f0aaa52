//! Murder Mystery stats: per-mode table (with a legacy divider) and the
//! Infection block.

use serde_json::json;

use crate::calculate::ratio3;
use crate::config::StaticConfig;
use crate::models::{Stats, Table};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 10] = [
    "wins",
    "games",
    "kills",
    "deaths",
    "coins_pickedup",
    "quickest_detective_win_time_seconds",
    "quickest_murderer_win_time_seconds",
    "coins",
    "detective_chance",
    "murderer_chance",
];

const MODES: [(&str, &str); 6] = [
    ("", "Overall"),
    ("_MURDER_CLASSIC", "Classic"),
    ("_MURDER_ASSASSINS", "Assassins"),
    ("_MURDER_DOUBLE_UP", "Double Up"),
    ("_MURDER_HARDCORE", "Hardcore"),
    ("_MURDER_SHOWDOWN", "Showdown"),
];

const INFECTION_STATS: [&str; 9] = [
    "wins",
    "survivor_wins",
    "games",
    "kills",
    "deaths",
    "kills_as_infected",
    "kills_as_survivor",
    "coins_pickedup",
    "total_time_survived_seconds",
];

pub fn get_stats(profile: &RawProfile, _config: &StaticConfig) -> Stats {
    let murdermystery = profile.game("MurderMystery");
    let mut stats = Stats::new();

    for stat in STATS_NEEDED {
        stats.set(stat, murdermystery.int(stat));
    }

    stats.set("losses", stats.int("games") - stats.int("wins"));
    stats.set("win_loss", ratio3(stats.num("wins"), stats.num("losses")));
    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));

    // Table
    let mut rows = Vec::new();
    for (suffix, label) in MODES {
        let wins = murdermystery.int(&format!("wins{suffix}"));
        let games = murdermystery.int(&format!("games{suffix}"));
        let kills = murdermystery.int(&format!("kills{suffix}"));
        let deaths = murdermystery.int(&format!("deaths{suffix}"));
        let losses = games - wins;

        rows.push(vec![
            json!(label),
            json!(wins),
            json!(losses),
            json!(ratio3(wins as f64, losses as f64)),
            json!(kills),
            json!(deaths),
            json!(ratio3(kills as f64, deaths as f64)),
            json!(murdermystery.int(&format!("bow_kills{suffix}"))),
            json!(murdermystery.int(&format!("knife_kills{suffix}"))),
            json!(murdermystery.int(&format!("thrown_knife_kills{suffix}"))),
            json!(murdermystery.int(&format!("coins_pickedup{suffix}"))),
        ]);
    }

    stats.set_table(
        "table",
        Table::new(
            "tableMM",
            &[
                "Mode",
                "Wins",
                "Losses",
                "W/L",
                "Kills",
                "Deaths",
                "K/D",
                "Bow Kills",
                "Knife Kills",
                "Thrown Knife Kills",
                "Gold Collected",
            ],
        )
        .rows(rows)
        .bold_rows(&[1])
        .percent(&[3])
        .decimal(&[6])
        .divider(5, "Legacy")
        .buttons(&[
            ("W/L", &[0, 1, 2, 3]),
            ("K/D", &[0, 4, 5, 6]),
            ("Kill Type", &[0, 7, 8, 9]),
            ("Gold", &[0, 10]),
        ]),
    );

    // Infection V2
    for stat in INFECTION_STATS {
        stats.set(
            format!("{stat}_infected"),
            murdermystery.int(&format!("{stat}_MURDER_INFECTION")),
        );
    }
    stats.set(
        "kill_death_infected",
        ratio3(stats.num("kills_infected"), stats.num("deaths_infected")),
    );

    stats
}
