//! Blitz Survival Games stats and the per-kit table.

use serde_json::{json, Value};

use crate::calculate::{ratio3, romanize, title_case};
use crate::config::StaticConfig;
use crate::models::{Stats, Table};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 14] = [
    "wins",
    "wins_teams",
    "kills",
    "deaths",
    "time_played",
    "coins",
    "damage",
    "damage_taken",
    "arrows_fired",
    "arrows_hit",
    "mobs_spawned",
    "chests_opened",
    "potions_drunk",
    "potions_thrown",
];

// Raw kit keys; a few carry trailing spaces in the source data.
const KITS: [&str; 39] = [
    "arachnologist",
    "archer",
    "armorer",
    "astronaut",
    "baker",
    "blaze",
    "creepertamer",
    "diver",
    "donkeytamer",
    "farmer",
    "florist",
    "golem",
    "guardian",
    "horsetamer",
    "hunter",
    "hype train",
    "jockey",
    "knight",
    "meatmaster",
    "necromancer",
    "paladin",
    "phoenix",
    "pigman",
    "ranger",
    "reaper",
    "reddragon",
    "rogue",
    "scout",
    "shadow knight",
    "slimeyslime",
    "snowman",
    "speleologist ",
    "tim ",
    "toxicologist",
    "troll",
    "viking",
    "warlock",
    "warrior",
    "wolftamer",
];

/// Kit level from accumulated kit XP, for profiles that predate the level
/// field.
fn kit_level_from_exp(exp: i64) -> i64 {
    let mut level = 0;
    for req in [0, 100, 250, 500, 1000, 1500, 2000, 2500, 5000, 10000] {
        if exp > req {
            level += 1;
        } else {
            break;
        }
    }
    level
}

pub fn get_stats(profile: &RawProfile, _config: &StaticConfig) -> Stats {
    let bsg = profile.game("HungerGames");
    let mut stats = Stats::new();

    for stat in STATS_NEEDED {
        stats.set(stat, bsg.int(stat));
    }

    stats.set("wins", stats.int("wins") + stats.int("wins_teams"));
    stats.set("games_played", stats.int("wins") + stats.int("deaths"));

    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));
    stats.set("kill_game", ratio3(stats.num("kills"), stats.num("games_played")));
    stats.set(
        "arrow_hit_miss",
        ratio3(
            stats.num("arrows_hit"),
            stats.num("arrows_fired") - stats.num("arrows_hit"),
        ),
    );
    stats.set(
        "damage_dealt_taken",
        ratio3(stats.num("damage"), stats.num("damage_taken")),
    );

    // Per-kit rows, only for kits the player has actually loaded.
    let mut rows = Vec::new();
    for kit in KITS {
        if !bsg.has(&format!("time_played_{kit}")) {
            continue;
        }

        let exp = bsg.int(&format!("exp_{kit}"));
        let wins = bsg.int(&format!("wins_{kit}")) + bsg.int(&format!("wins_teams_{kit}"));
        let games_played = bsg.int(&format!("games_played_{kit}"));
        let kills = bsg.int(&format!("kills_{kit}"));
        let time_played = bsg.int(&format!("time_played_{kit}"));

        // Level from the API when given, otherwise from the XP curve.
        let level = match bsg.get(kit).and_then(Value::as_i64) {
            Some(level) => level,
            None => kit_level_from_exp(exp) - 1,
        } + 1;

        let prestige = bsg.int(&format!("p{kit}"));
        let losses = games_played - wins;

        rows.push(vec![
            json!(format!("{} {}", title_case(kit), romanize(level))),
            json!(wins),
            json!(losses),
            json!(ratio3(wins as f64, losses as f64)),
            json!(kills),
            json!(exp),
            json!(if prestige > 0 {
                romanize(prestige)
            } else {
                "None".to_string()
            }),
            json!(time_played),
        ]);
    }

    if !rows.is_empty() {
        stats.set("played_kits", "Yes"); // Table is shown
        rows.sort_by_key(|row| std::cmp::Reverse(row[1].as_i64().unwrap_or(0)));
    }

    stats.set_table(
        "table",
        Table::new(
            "tableBSG",
            &["Kit", "Wins", "Losses", "W/L", "Kills", "EXP", "Prestige", "Playtime"],
        )
        .rows(rows)
        .bold_cols(&[0])
        .percent(&[3])
        .duration(&[7])
        .buttons(&[
            ("W/L", &[0, 1, 2, 3]),
            ("Kills", &[0, 4]),
            ("EXP/Prestige", &[0, 5, 6]),
            ("Playtime", &[0, 7]),
        ]),
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(bsg: Value) -> RawProfile {
        RawProfile::from_value(json!({
            "player": {"stats": {"HungerGames": bsg}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_section() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({})), &config);

        assert_eq!(stats.int("wins"), 0);
        assert!(stats.get("played_kits").is_none());
        let table = stats.get("table").unwrap();
        assert!(table["rows"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_wins_include_team_wins() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({"wins": 10, "wins_teams": 5, "deaths": 15})),
            &config,
        );

        assert_eq!(stats.int("wins"), 15);
        assert_eq!(stats.int("games_played"), 30);
    }

    #[test]
    fn test_kit_level_curve() {
        assert_eq!(kit_level_from_exp(0), 0);
        assert_eq!(kit_level_from_exp(50), 1);
        assert_eq!(kit_level_from_exp(150), 2);
        assert_eq!(kit_level_from_exp(20000), 10);
    }

    #[test]
    fn test_kit_rows_sorted_by_wins() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "time_played_archer": 360,
                "wins_archer": 2,
                "exp_archer": 150,
                "time_played_knight": 720,
                "wins_knight": 9,
                "knight": 4,
                "pknight": 2
            })),
            &config,
        );

        assert_eq!(stats.get("played_kits"), Some(&json!("Yes")));
        let table = stats.get("table").unwrap();
        let rows = table["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        // Knight has more wins and uses the API level field (4 + 1 = V).
        assert_eq!(rows[0][0], "Knight V");
        assert_eq!(rows[0][6], "II");
        // Archer's level comes from the XP curve (150 XP → level 2).
        assert_eq!(rows[1][0], "Archer II");
        assert_eq!(rows[1][6], "None");
    }

    #[test]
    fn test_present_zero_playtime_counts_as_played() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({"time_played_baker": 0})), &config);
        let table = stats.get("table").unwrap();
        assert_eq!(table["rows"].as_array().unwrap().len(), 1);
    }
}
