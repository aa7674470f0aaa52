//! UHC stats: score-gated title ladder and the summed mode table.

use serde_json::{json, Value};

use crate::calculate::ratio3;
use crate::config::StaticConfig;
use crate::models::{ProgressBar, Stats, Table};
use crate::profile::RawProfile;

const COLS: [&str; 6] = [
    "wins",
    "kills",
    "deaths",
    "heads_eaten",
    "ultimates_crafted",
    "extra_ultimates_crafted",
];

const MODES: [(&str, &str); 4] = [
    ("_solo", "Solo"),
    ("", "Team"),
    ("_brawl", "Brawl"),
    ("_duo_brawl", "Duo Brawl"),
];

fn table_row(label: &str, values: &[i64; 6]) -> Vec<Value> {
    let [wins, kills, deaths, heads_eaten, ultimates, extra_ultimates] = *values;
    vec![
        json!(label),
        json!(wins),
        json!(kills),
        json!(deaths),
        json!(ratio3(kills as f64, deaths as f64)),
        json!(ratio3(kills as f64, wins as f64)),
        json!(heads_eaten),
        json!(ultimates),
        json!(extra_ultimates),
    ]
}

pub fn get_stats(profile: &RawProfile, config: &StaticConfig) -> Stats {
    let uhc = profile.game("UHC");
    let mut stats = Stats::new();

    stats.set("score", uhc.int("score"));
    stats.set("coins", uhc.int("coins"));

    // Progress Bar
    let score = stats.num("score");
    if let Some((current, next)) = config.modes.uhc.window(score) {
        stats.set("title", current.name.clone());
        stats.set("title_color", current.color.clone());
        stats.set("next_title", next.name.clone());
        stats.set("next_title_color", next.color.clone());

        let progress = if next.name == "N/A" {
            ProgressBar::new(current.value as i64, current.value as i64)
                .text(current.name.clone())
                .complete()
        } else {
            ProgressBar::new((score - current.value) as i64, next.value as i64)
                .text(next.name.clone())
        };
        stats.set_struct("title_progress", &progress);
    }

    // Table and overall stats
    let mut totals = [0i64; 6];
    let mut rows = Vec::new();
    for (suffix, label) in MODES {
        let mut values = [0i64; 6];
        for (value, col) in values.iter_mut().zip(COLS) {
            *value = uhc.int(&format!("{col}{suffix}"));
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
            "tableUHC",
            &[
                "Mode",
                "Wins",
                "Kills",
                "Deaths",
                "K/D",
                "Kill/Win",
                "Heads Eaten",
                "Ultimates Crafted",
                "Extra Ultimates Crafted",
            ],
        )
        .rows(rows)
        .bold_rows(&[1])
        .decimal(&[4, 5])
        .buttons(&[
            ("Wins", &[0, 1]),
            ("K/D", &[0, 2, 3, 4]),
            ("Kill/Win", &[0, 5]),
            ("Heads", &[0, 6]),
            ("Ultimates", &[0, 7, 8]),
        ]),
    );

    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));
    stats.set("kill_win", ratio3(stats.num("kills"), stats.num("wins")));

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(uhc: Value) -> RawProfile {
        RawProfile::from_value(json!({
            "player": {"stats": {"UHC": uhc}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_section() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({})), &config);

        assert_eq!(stats.get("title"), Some(&json!("Recruit")));
        assert_eq!(stats.int("kills"), 0);
    }

    #[test]
    fn test_title_progress() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({"score": 100})), &config);

        assert_eq!(stats.get("title"), Some(&json!("Soldier")));
        assert_eq!(stats.get("next_title"), Some(&json!("Sergeant")));
        let progress = stats.get("title_progress").unwrap();
        assert_eq!(progress["current"]["progress"], 40);
        assert_eq!(progress["next"]["needed"], 210);
    }

    #[test]
    fn test_overall_sums_modes() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "kills_solo": 30,
                "kills": 50,
                "kills_brawl": 20,
                "deaths_solo": 10,
                "deaths": 25,
                "wins_solo": 5
            })),
            &config,
        );

        assert_eq!(stats.int("kills"), 100);
        assert_eq!(stats.int("deaths"), 35);

        let table = stats.get("table").unwrap();
        let rows = table["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0][0], "Overall");
        assert_eq!(rows[0][2], 100);
        assert_eq!(rows[1][0], "Solo");
        assert_eq!(rows[1][2], 30);
        assert_eq!(rows[2][0], "Team");
        assert_eq!(rows[2][2], 50);
    }
}
