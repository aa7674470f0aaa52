//! Smash Heroes stats: modes table and the per-hero table with levels and
//! prestige marks.

use serde_json::json;

use crate::calculate::ratio3;
use crate::config::StaticConfig;
use crate::models::{Stats, Table};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 7] = [
    "wins",
    "losses",
    "kills",
    "deaths",
    "coins",
    "smashLevel",
    "damage_dealt",
];

const MODES: [(&str, &str); 4] = [
    ("", "Overall"),
    ("_normal", "1v1v1v1"),
    ("_2v2", "2v2"),
    ("_teams", "2v2v2v2"),
];

pub fn get_stats(profile: &RawProfile, config: &StaticConfig) -> Stats {
    let smash = profile.game("SuperSmash");
    let mut stats = Stats::new();

    for stat in STATS_NEEDED {
        stats.set(stat, smash.int(stat));
    }

    stats.set("win_loss", ratio3(stats.num("wins"), stats.num("losses")));
    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));

    // Modes Table
    let mut rows = Vec::new();
    for (suffix, label) in MODES {
        let wins = smash.int(&format!("wins{suffix}"));
        let losses = smash.int(&format!("losses{suffix}"));
        let kills = smash.int(&format!("kills{suffix}"));
        let deaths = smash.int(&format!("deaths{suffix}"));

        rows.push(vec![
            json!(label),
            json!(wins),
            json!(losses),
            json!(ratio3(wins as f64, losses as f64)),
            json!(kills),
            json!(deaths),
            json!(ratio3(kills as f64, deaths as f64)),
        ]);
    }

    stats.set_table(
        "table_modes",
        Table::new(
            "tableSmashHeroesModes",
            &["Mode", "Wins", "Losses", "W/L", "Kills", "Deaths", "K/D"],
        )
        .rows(rows)
        .bold_rows(&[1])
        .percent(&[3])
        .decimal(&[6])
        .buttons(&[("W/L", &[0, 1, 2, 3]), ("K/D", &[0, 4, 5, 6])]),
    );

    // Heroes Table
    let class_stats = smash.sub("class_stats");
    let mut rows = Vec::new();
    for hero in &config.modes.smash_heroes.heroes {
        let hero_stats = class_stats.sub(&hero.key);
        let wins = hero_stats.int("wins");
        let losses = hero_stats.int("losses");
        let kills = hero_stats.int("kills");
        let deaths = hero_stats.int("deaths");

        let level = smash.int(&format!("lastLevel_{}", hero.key));
        let prestige = smash.int(&format!("pg_{}", hero.key));

        let mut label = format!("{} Lv{}", hero.name, level);
        if prestige > 0 {
            label.push_str(&format!(" [{prestige}]"));
        }

        rows.push(vec![
            json!(label),
            json!(wins),
            json!(losses),
            json!(ratio3(wins as f64, losses as f64)),
            json!(kills),
            json!(deaths),
            json!(ratio3(kills as f64, deaths as f64)),
        ]);
    }

    stats.set_table(
        "table_heroes",
        Table::new(
            "tableSmashHeroesHeroes",
            &["Hero", "Wins", "Losses", "W/L", "Kills", "Deaths", "K/D"],
        )
        .rows(rows)
        .bold_cols(&[0])
        .percent(&[3])
        .decimal(&[6])
        .buttons(&[("W/L", &[0, 1, 2, 3]), ("K/D", &[0, 4, 5, 6])]),
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn profile(smash: Value) -> RawProfile {
        RawProfile::from_value(json!({
            "player": {"stats": {"SuperSmash": smash}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_section() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({})), &config);

        assert_eq!(stats.int("smashLevel"), 0);
        let heroes = stats.get("table_heroes").unwrap();
        assert_eq!(
            heroes["rows"].as_array().unwrap().len(),
            config.modes.smash_heroes.heroes.len()
        );
    }

    #[test]
    fn test_mode_rows() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({"wins_2v2": 6, "losses_2v2": 3})),
            &config,
        );

        let table = stats.get("table_modes").unwrap();
        let row = &table["rows"][2];
        assert_eq!(row[0], "2v2");
        assert_eq!(row[3], 2.0);
    }

    #[test]
    fn test_hero_label_with_prestige() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "class_stats": {"THE_BULK": {"wins": 11, "kills": 40, "deaths": 10}},
                "lastLevel_THE_BULK": 17,
                "pg_THE_BULK": 2
            })),
            &config,
        );

        let heroes = stats.get("table_heroes").unwrap();
        let bulk = heroes["rows"]
            .as_array()
            .unwrap()
            .iter()
            .find(|row| row[0].as_str().unwrap().starts_with("The Bulk"))
            .unwrap();
        assert_eq!(bulk[0], "The Bulk Lv17 [2]");
        assert_eq!(bulk[1], 11);
        assert_eq!(bulk[6], 4.0);
    }
}
