//! SkyClash stats.

use serde_json::json;

use crate::calculate::{percentage2, ratio3, title_case};
use crate::config::StaticConfig;
use crate::models::{Stats, Table};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 9] = [
    "wins",
    "losses",
    "kills",
    "deaths",
    "assists",
    "void_kills",
    "enderchests_opened",
    "bow_shots",
    "bow_hits",
];

const MODES: [&str; 4] = ["solo", "doubles", "team_war", "mega"];

pub fn get_stats(profile: &RawProfile, _config: &StaticConfig) -> Stats {
    let skyclash = profile.game("SkyClash");
    let mut stats = Stats::new();

    for stat in STATS_NEEDED {
        stats.set(stat, skyclash.int(stat));
    }

    stats.set("win_loss", ratio3(stats.num("wins"), stats.num("losses")));
    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));
    stats.set(
        "bow_hit_accuracy",
        percentage2(stats.num("bow_hits"), stats.num("bow_shots")),
    );

    // Table
    let mut rows = Vec::new();
    for mode in MODES {
        let wins = skyclash.int(&format!("wins_{mode}"));
        let losses = skyclash.int(&format!("losses_{mode}"));
        let kills = skyclash.int(&format!("kills_{mode}"));
        let deaths = skyclash.int(&format!("deaths_{mode}"));

        rows.push(vec![
            json!(title_case(&mode.replace('_', ""))),
            json!(wins),
            json!(losses),
            json!(ratio3(wins as f64, losses as f64)),
            json!(kills),
            json!(deaths),
            json!(ratio3(kills as f64, deaths as f64)),
        ]);
    }

    rows.insert(
        0,
        vec![
            json!("Overall"),
            json!(stats.int("wins")),
            json!(stats.int("losses")),
            json!(stats.num("win_loss")),
            json!(stats.int("kills")),
            json!(stats.int("deaths")),
            json!(stats.num("kill_death")),
        ],
    );

    stats.set_table(
        "table",
        Table::new(
            "tableSkyClash",
            &["Mode", "Wins", "Losses", "W/L", "Kills", "Deaths", "K/D"],
        )
        .rows(rows)
        .bold_rows(&[1])
        .percent(&[3])
        .decimal(&[6])
        .buttons(&[("W/L", &[0, 1, 2, 3]), ("K/D", &[0, 4, 5, 6])]),
    );

    stats
}
