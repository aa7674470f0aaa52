//! Mega Walls stats: mode table with a counter-derived overall row, and
//! the per-class table with prestige and enderchest data.

use serde_json::json;

use crate::calculate::{ratio3, romanize, title_case};
use crate::config::StaticConfig;
use crate::models::{Stats, Table};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 11] = [
    "wins",
    "losses",
    "kills",
    "deaths",
    "assists",
    "final_assists",
    "final_kills",
    "final_deaths",
    "defender_kills",
    "wither_damage",
    "coins",
];

const HEAD: [&str; 10] = [
    "Mode",
    "Wins",
    "Losses",
    "W/L",
    "Final Kills",
    "Final Deaths",
    "Final K/D",
    "Kills",
    "Deaths",
    "K/D",
];

pub fn get_stats(profile: &RawProfile, config: &StaticConfig) -> Stats {
    let megawalls = profile.game("Walls3");
    let mut stats = Stats::new();

    for stat in STATS_NEEDED {
        stats.set(stat, megawalls.int(stat));
    }

    stats.set("win_loss", ratio3(stats.num("wins"), stats.num("losses")));
    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));
    stats.set(
        "final_kill_death",
        ratio3(stats.num("final_kills"), stats.num("final_deaths")),
    );

    // Modes Table
    let combat_cells = |wins: i64, losses: i64, final_kills: i64, final_deaths: i64, kills: i64, deaths: i64| {
        vec![
            json!(wins),
            json!(losses),
            json!(ratio3(wins as f64, losses as f64)),
            json!(final_kills),
            json!(final_deaths),
            json!(ratio3(final_kills as f64, final_deaths as f64)),
            json!(kills),
            json!(deaths),
            json!(ratio3(kills as f64, deaths as f64)),
        ]
    };

    let mut rows = Vec::new();
    for (mode, label) in [
        ("standard", "Normal"),
        ("face_off", "Faceoff"),
        ("gvg", "Casual Brawl"),
    ] {
        let mut row = vec![json!(label)];
        row.extend(combat_cells(
            megawalls.int(&format!("wins_{mode}")),
            megawalls.int(&format!("losses_{mode}")),
            megawalls.int(&format!("final_kills_{mode}")),
            megawalls.int(&format!("final_deaths_{mode}")),
            megawalls.int(&format!("kills_{mode}")),
            megawalls.int(&format!("deaths_{mode}")),
        ));
        rows.push(row);
    }

    // The overall row comes from the top-level counters, not a sum.
    rows.insert(
        0,
        vec![
            json!("Overall"),
            json!(stats.int("wins")),
            json!(stats.int("losses")),
            json!(stats.num("win_loss")),
            json!(stats.int("final_kills")),
            json!(stats.int("final_deaths")),
            json!(stats.num("final_kill_death")),
            json!(stats.int("kills")),
            json!(stats.int("deaths")),
            json!(stats.num("kill_death")),
        ],
    );

    stats.set_table(
        "table_modes",
        Table::new("tableModesMW", &HEAD)
            .rows(rows)
            .bold_rows(&[1])
            .percent(&[3])
            .decimal(&[6, 9])
            .buttons(&[
                ("W/L", &[0, 1, 2, 3]),
                ("FK/D", &[0, 4, 5, 6]),
                ("K/D", &[0, 7, 8, 9]),
            ]),
    );

    // Classes Table
    let mut class_head: Vec<&str> = HEAD.to_vec();
    class_head.push("Prestige");
    class_head.push("Enderchest");

    let class_progress = megawalls.sub("classes");
    let mut rows = Vec::new();
    for class in &config.modes.mega_walls.classes {
        let name = &class.name;
        let progress = class_progress.sub(name);

        let mut row = vec![json!(title_case(name))];
        row.extend(combat_cells(
            megawalls.int(&format!("{name}_wins")),
            megawalls.int(&format!("{name}_losses")),
            megawalls.int(&format!("{name}_final_kills")),
            megawalls.int(&format!("{name}_final_deaths")),
            megawalls.int(&format!("{name}_kills")),
            megawalls.int(&format!("{name}_deaths")),
        ));
        row.push(json!(romanize(progress.int("prestige"))));
        row.push(json!(progress.int("enderchest_rows")));
        rows.push(row);
    }

    stats.set_table(
        "table_classes",
        Table::new("tableClassesMW", &class_head)
            .rows(rows)
            .bold_cols(&[0])
            .percent(&[3])
            .decimal(&[6, 9])
            .buttons(&[
                ("W/L", &[0, 1, 2, 3]),
                ("FK/D", &[0, 4, 5, 6]),
                ("K/D", &[0, 7, 8, 9]),
                ("Prestige", &[0, 10]),
                ("Enderchest", &[0, 11]),
            ]),
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn profile(megawalls: Value) -> RawProfile {
        RawProfile::from_value(json!({
            "player": {"stats": {"Walls3": megawalls}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_section() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({})), &config);

        assert_eq!(stats.int("final_kills"), 0);
        assert_eq!(stats.num("final_kill_death"), 0.0);

        let classes = stats.get("table_classes").unwrap();
        assert_eq!(
            classes["rows"].as_array().unwrap().len(),
            config.modes.mega_walls.classes.len()
        );
    }

    #[test]
    fn test_overall_row_uses_counters() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "wins": 50,
                "losses": 25,
                "wins_standard": 1
            })),
            &config,
        );

        let table = stats.get("table_modes").unwrap();
        let rows = table["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0][0], "Overall");
        assert_eq!(rows[0][1], 50);
        assert_eq!(rows[0][3], 2.0);
        assert_eq!(rows[1][0], "Normal");
        assert_eq!(rows[1][1], 1);
    }

    #[test]
    fn test_class_prestige_and_enderchest() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "herobrine_final_kills": 100,
                "classes": {"herobrine": {"prestige": 3, "enderchest_rows": 5}}
            })),
            &config,
        );

        let classes = stats.get("table_classes").unwrap();
        let herobrine = classes["rows"]
            .as_array()
            .unwrap()
            .iter()
            .find(|row| row[0] == "Herobrine")
            .unwrap();
        assert_eq!(herobrine[4], 100);
        assert_eq!(herobrine[10], "III");
        assert_eq!(herobrine[11], 5);
    }
}
