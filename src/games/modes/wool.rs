//! Wool Games stats: the prestige ladder over the wool level curve, plus
//! the Wool Wars, Sheep Wars and Capture the Wool blocks.

use serde_json::{json, Value};

use crate::calculate::leveling::{wool_xp_to_level, WOOL_XP_PER_PRESTIGE};
use crate::calculate::ratio3;
use crate::config::StaticConfig;
use crate::models::{ProgressBar, Stats, Table};
use crate::profile::RawProfile;

const WW_COLS: [&str; 8] = [
    "wins",
    "games_played",
    "kills",
    "deaths",
    "assists",
    "wool_placed",
    "blocks_broken",
    "powerups_gotten",
];

const WW_CLASSES: [(&str, &str); 7] = [
    ("", "Overall"),
    ("archer", "Archer"),
    ("assault", "Assault"),
    ("engineer", "Engineer"),
    ("golem", "Golem"),
    ("swordsman", "Swordsman"),
    ("tank", "Tank"),
];

const SHEEP_WARS_STATS: [&str; 10] = [
    "wins",
    "losses",
    "kills",
    "deaths",
    "sheep_thrown",
    "magic_wool_hit",
    "damage_dealt",
    "kills_melee",
    "kills_void",
    "kills_explosive",
];

const CTW_STATS: [&str; 17] = [
    "experienced_wins",
    "experienced_losses",
    "participated_wins",
    "kills",
    "deaths",
    "kills_with_wool",
    "kills_on_woolholder",
    "assists",
    "wools_captured",
    "wools_stolen",
    "gold_earned",
    "gold_spent",
    "fastest_wool_capture",
    "fastest_win",
    "longest_game",
    "most_gold_earned",
    "most_kills_and_assists",
];

pub fn get_stats(profile: &RawProfile, config: &StaticConfig) -> Stats {
    let wool = profile.game("WoolGames");
    let mut stats = Stats::new();

    // Main Stats
    let progression = wool.sub("progression");
    stats.set("experience", progression.int("experience"));
    stats.set("layers", progression.int("available_layers"));
    stats.set("coins", wool.int("coins"));
    stats.set("playtime", wool.int("playtime"));
    stats.set("icon", wool.text("wool_wars_prestige_icon", "HEART"));

    let wg_config = &config.modes.wool_games;
    let level = wool_xp_to_level(stats.num("experience"));
    stats.set("level", level);

    let icon = wg_config.icon(
        stats
            .get("icon")
            .and_then(Value::as_str)
            .unwrap_or("HEART"),
    );

    // Progress Bar
    if let Some((current, next)) = wg_config.window(level) {
        stats.set("prestige", current.name.clone());
        stats.set("prestige_color", current.color.clone());
        stats.set("formatted_prestige", format!("[{}{}]", level as i64, icon));
        stats.set("next_prestige", next.name.clone());

        let per_prestige = WOOL_XP_PER_PRESTIGE as i64;
        let progress = if next.name == "N/A" {
            ProgressBar::new(per_prestige, per_prestige)
                .text(current.name.clone())
                .next_color(current.color.clone())
                .complete()
        } else {
            ProgressBar::new(
                (stats.num("experience") % WOOL_XP_PER_PRESTIGE) as i64,
                per_prestige,
            )
            .text(next.name.clone())
            .current_color(current.color.clone())
            .next_color(next.color.clone())
        };
        stats.set_struct("prestige_progress", &progress);
    }

    // Wool Wars
    let ww = wool.sub("wool_wars").sub("stats");
    let ww_classes = ww.sub("classes");

    let mut rows = Vec::new();
    for (class_key, label) in WW_CLASSES {
        let mut values = [0i64; 8];
        for (value, col) in values.iter_mut().zip(WW_COLS) {
            if class_key.is_empty() {
                *value = ww.int(col);
                stats.set(format!("{col}_ww"), *value);
            } else {
                *value = ww_classes.sub(class_key).int(col);
            }
        }

        let [_, _, kills, deaths, assists, wool_placed, blocks_broken, powerups] = values;
        rows.push(vec![
            json!(label),
            json!(kills),
            json!(deaths),
            json!(ratio3(kills as f64, deaths as f64)),
            json!(assists),
            json!(wool_placed),
            json!(blocks_broken),
            json!(powerups),
        ]);
    }

    stats.set_table(
        "table_classes",
        Table::new(
            "tableWGClasses",
            &[
                "Class",
                "Kills",
                "Deaths",
                "K/D",
                "Assists",
                "Wool Placed",
                "Blocks Broken",
                "Powerups",
            ],
        )
        .rows(rows)
        .bold_rows(&[1])
        .decimal(&[3])
        .buttons(&[
            ("K/D", &[0, 1, 2, 3]),
            ("Assists", &[0, 4]),
            ("Blocks", &[0, 5, 6]),
            ("Powerups", &[0, 7]),
        ]),
    );

    stats.set("losses_ww", stats.int("games_played_ww") - stats.int("wins_ww"));
    stats.set("win_loss_ww", ratio3(stats.num("wins_ww"), stats.num("losses_ww")));
    stats.set("kill_death_ww", ratio3(stats.num("kills_ww"), stats.num("deaths_ww")));

    // Sheep Wars
    let sheep_wars = wool.sub("sheep_wars").sub("stats");
    for stat in SHEEP_WARS_STATS {
        stats.set(format!("{stat}_sw"), sheep_wars.int(stat));
    }
    stats.set("win_loss_sw", ratio3(stats.num("wins_sw"), stats.num("losses_sw")));
    stats.set("kill_death_sw", ratio3(stats.num("kills_sw"), stats.num("deaths_sw")));

    // Capture the Wool
    let ctw = wool.sub("capture_the_wool").sub("stats");
    for stat in CTW_STATS {
        stats.set(format!("{stat}_ctw"), ctw.int(stat));
    }
    stats.set(
        "win_loss_ctw",
        ratio3(
            stats.num("experienced_wins_ctw"),
            stats.num("experienced_losses_ctw"),
        ),
    );
    stats.set(
        "carries_ctw",
        stats.int("experienced_wins_ctw") - stats.int("participated_wins_ctw"),
    );
    stats.set(
        "kill_death_ctw",
        ratio3(stats.num("kills_ctw"), stats.num("deaths_ctw")),
    );
    stats.set("gold_spent_ctw", stats.int("gold_spent_ctw").abs());

    // Total Stats
    stats.set(
        "total_wins",
        stats.int("wins_ww") + stats.int("wins_sw") + stats.int("experienced_wins_ctw"),
    );
    stats.set(
        "total_kills",
        stats.int("kills_ww") + stats.int("kills_sw") + stats.int("kills_ctw"),
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(wool: Value) -> RawProfile {
        RawProfile::from_value(json!({
            "player": {"stats": {"WoolGames": wool}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_section() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({})), &config);

        assert_eq!(stats.num("level"), 1.0);
        assert_eq!(stats.get("prestige"), Some(&json!("Stone")));
        assert_eq!(stats.get("next_prestige"), Some(&json!("Iron")));
        assert_eq!(stats.int("total_wins"), 0);
    }

    #[test]
    fn test_prestige_progress() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "progression": {"experience": 500_000},
                "wool_wars_prestige_icon": "STAR"
            })),
            &config,
        );

        // 500000 XP is one full prestige (490000) plus 10000 in.
        assert_eq!(stats.num("level"), 105.0);
        assert_eq!(stats.get("prestige"), Some(&json!("Iron")));
        assert_eq!(stats.get("formatted_prestige"), Some(&json!("[105✰]")));

        let progress = stats.get("prestige_progress").unwrap();
        assert_eq!(progress["text"], "Gold");
        assert_eq!(progress["current"]["progress"], 10_000);
        assert_eq!(progress["next"]["needed"], 490_000);
    }

    #[test]
    fn test_wool_wars_overall_and_classes() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "wool_wars": {"stats": {
                    "wins": 10,
                    "games_played": 25,
                    "kills": 80,
                    "deaths": 40,
                    "classes": {
                        "tank": {"kills": 12, "deaths": 4, "assists": 6}
                    }
                }}
            })),
            &config,
        );

        assert_eq!(stats.int("losses_ww"), 15);
        assert_eq!(stats.num("win_loss_ww"), ratio3(10.0, 15.0));
        assert_eq!(stats.num("kill_death_ww"), 2.0);

        let table = stats.get("table_classes").unwrap();
        let rows = table["rows"].as_array().unwrap();
        assert_eq!(rows[0][0], "Overall");
        assert_eq!(rows[0][1], 80);
        let tank = rows.iter().find(|row| row[0] == "Tank").unwrap();
        assert_eq!(tank[1], 12);
        assert_eq!(tank[3], 3.0);
        assert_eq!(tank[4], 6);
    }

    #[test]
    fn test_ctw_carries_and_gold() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "capture_the_wool": {"stats": {
                    "experienced_wins": 20,
                    "participated_wins": 14,
                    "gold_spent": -12000
                }}
            })),
            &config,
        );

        assert_eq!(stats.int("carries_ctw"), 6);
        assert_eq!(stats.int("gold_spent_ctw"), 12000);
        assert_eq!(stats.int("total_wins"), 20);
    }
}
