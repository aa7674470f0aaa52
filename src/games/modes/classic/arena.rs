//! Arena Brawl stats.

use serde_json::json;

use crate::calculate::ratio3;
use crate::config::StaticConfig;
use crate::models::{Stats, Table};
use crate::profile::RawProfile;

const COLS: [&str; 7] = [
    "wins",
    "losses",
    "kills",
    "deaths",
    "win_streaks",
    "damage",
    "healed",
];

pub fn get_stats(profile: &RawProfile, _config: &StaticConfig) -> Stats {
    let arena = profile.game("Arena");
    let mut stats = Stats::new();

    for stat in ["coins", "keys"] {
        stats.set(stat, arena.int(stat));
    }

    let mut totals = [0i64; 7];
    let mut rows = Vec::new();
    for mode in ["1v1", "2v2", "4v4"] {
        let mut values = [0i64; 7];
        for (value, col) in values.iter_mut().zip(COLS) {
            *value = arena.int(&format!("{col}_{mode}"));
        }
        for (total, value) in totals.iter_mut().zip(values) {
            *total += value;
        }

        let [wins, losses, kills, deaths, win_streaks, _, _] = values;
        rows.push(vec![
            json!(mode),
            json!(wins),
            json!(losses),
            json!(ratio3(wins as f64, losses as f64)),
            json!(kills),
            json!(deaths),
            json!(ratio3(kills as f64, deaths as f64)),
            json!(win_streaks),
        ]);
    }

    for (col, total) in COLS.iter().zip(totals) {
        stats.set(*col, total);
    }

    let [wins, losses, kills, deaths, win_streaks, _, _] = totals;
    rows.insert(
        0,
        vec![
            json!("Overall"),
            json!(wins),
            json!(losses),
            json!(ratio3(wins as f64, losses as f64)),
            json!(kills),
            json!(deaths),
            json!(ratio3(kills as f64, deaths as f64)),
            json!(win_streaks),
        ],
    );

    stats.set_table(
        "table",
        Table::new(
            "tableArena",
            &[
                "Mode",
                "Wins",
                "Losses",
                "W/L",
                "Kills",
                "Deaths",
                "K/D",
                "Winstreaks",
            ],
        )
        .rows(rows)
        .bold_rows(&[1])
        .percent(&[3])
        .decimal(&[6])
        .buttons(&[
            ("W/L", &[0, 1, 2, 3]),
            ("K/D", &[0, 4, 5, 6]),
            ("Winstreaks", &[0, 7]),
        ]),
    );

    stats.set("win_loss", ratio3(stats.num("wins"), stats.num("losses")));
    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));
    stats.set("damage_healed", ratio3(stats.num("damage"), stats.num("healed")));

    stats
}
