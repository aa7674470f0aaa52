//! Quakecraft stats.

use serde_json::{json, Value};

use crate::calculate::{percentage2, ratio3};
use crate::config::StaticConfig;
use crate::models::{Stats, Table};
use crate::profile::RawProfile;

const COLS: [&str; 6] = [
    "wins",
    "kills",
    "deaths",
    "headshots",
    "killstreaks",
    "shots_fired",
];

fn table_row(label: &str, values: &[i64; 6]) -> Vec<Value> {
    let [wins, kills, deaths, headshots, killstreaks, shots_fired] = *values;
    vec![
        json!(label),
        json!(wins),
        json!(kills),
        json!(deaths),
        json!(ratio3(kills as f64, deaths as f64)),
        json!(killstreaks),
        json!(shots_fired),
        json!(ratio3(shots_fired as f64, kills as f64)),
        json!(headshots),
        json!(format!("{:.2}%", percentage2(headshots as f64, kills as f64))),
    ]
}

pub fn get_stats(profile: &RawProfile, _config: &StaticConfig) -> Stats {
    let quakecraft = profile.game("Quake");
    let mut stats = Stats::new();

    stats.set("dash_power", quakecraft.int("dash_power") + 1);
    stats.set("dash_cooldown", quakecraft.int("dash_cooldown") + 1);
    stats.set(
        "godlikes",
        profile.player().sub("achievements").int("quake_godlikes"),
    );

    for stat in ["coins", "highest_killstreak"] {
        stats.set(stat, quakecraft.int(stat));
    }

    // Table
    let mut totals = [0i64; 6];
    let mut rows = Vec::new();
    for (suffix, label) in [("", "Solo"), ("_teams", "Teams")] {
        let mut values = [0i64; 6];
        for (value, col) in values.iter_mut().zip(COLS) {
            *value = quakecraft.int(&format!("{col}{suffix}"));
        }
        for (total, value) in totals.iter_mut().zip(values) {
            *total += value;
        }
        rows.push(table_row(label, &values));
    }

    rows.insert(0, table_row("Overall", &totals));

    for (col, total) in COLS.iter().zip(totals) {
        stats.set(*col, total);
    }

    stats.set_table(
        "table",
        Table::new(
            "tableQuake",
            &[
                "Mode",
                "Wins",
                "Kills",
                "Deaths",
                "K/D",
                "Killstreaks",
                "Shots",
                "Shots/Kill",
                "Headshots",
                "Headshot %",
            ],
        )
        .rows(rows)
        .bold_rows(&[1])
        .decimal(&[4])
        .buttons(&[
            ("Wins", &[0, 1]),
            ("K/D", &[0, 2, 3, 4]),
            ("Killstreaks", &[0, 5]),
            ("Shots", &[0, 6, 7]),
            ("Headshots", &[0, 8, 9]),
        ]),
    );

    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));

    stats
}
