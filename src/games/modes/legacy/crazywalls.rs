//! Crazy Walls stats.

use serde_json::json;

use crate::calculate::{percentage2, ratio3};
use crate::config::StaticConfig;
use crate::models::{Stats, Table};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 10] = [
    "coins",
    "gold_dust",
    "wins",
    "losses",
    "kills",
    "deaths",
    "survived_players",
    "items_enchanted",
    "arrows_shot",
    "arrows_hit",
];

const MODES: [(&str, &str); 4] = [
    ("solo", "Solo"),
    ("solo_chaos", "Solo Lucky"),
    ("team", "Team"),
    ("team_chaos", "Team Lucky"),
];

pub fn get_stats(profile: &RawProfile, _config: &StaticConfig) -> Stats {
    let crazywalls = profile.game("TrueCombat");
    let mut stats = Stats::new();

    for stat in STATS_NEEDED {
        stats.set(stat, crazywalls.int(stat));
    }

    stats.set("win_loss", ratio3(stats.num("wins"), stats.num("losses")));
    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));
    stats.set(
        "arrow_hit_accuracy",
        percentage2(stats.num("arrows_hit"), stats.num("arrows_shot")),
    );

    // Table
    let mut rows = Vec::new();
    for (mode, label) in MODES {
        let wins = crazywalls.int(&format!("crazywalls_wins_{mode}"));
        let losses = crazywalls.int(&format!("crazywalls_losses_{mode}"));
        let kills = crazywalls.int(&format!("crazywalls_kills_{mode}"));
        let deaths = crazywalls.int(&format!("crazywalls_deaths_{mode}"));

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
            "tableCrazyWalls",
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn profile(crazywalls: Value) -> RawProfile {
        RawProfile::from_value(json!({
            "player": {"stats": {"TrueCombat": crazywalls}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_section() {
        let stats = get_stats(&profile(json!({})), &StaticConfig::default());
        assert_eq!(stats.int("gold_dust"), 0);
        assert_eq!(stats.num("arrow_hit_accuracy"), 0.0);
    }

    #[test]
    fn test_mode_rows_use_prefixed_fields() {
        let stats = get_stats(
            &profile(json!({
                "wins": 12,
                "crazywalls_wins_solo_chaos": 5,
                "crazywalls_losses_solo_chaos": 2
            })),
            &StaticConfig::default(),
        );

        let table = stats.get("table").unwrap();
        let rows = table["rows"].as_array().unwrap();
        assert_eq!(rows[0][0], "Overall");
        assert_eq!(rows[0][1], 12);
        assert_eq!(rows[2][0], "Solo Lucky");
        assert_eq!(rows[2][1], 5);
        assert_eq!(rows[2][3], 2.5);
    }

    #[test]
    fn test_arrow_accuracy() {
        let stats = get_stats(
            &profile(json!({"arrows_shot": 200, "arrows_hit": 90})),
            &StaticConfig::default(),
        );
        assert_eq!(stats.num("arrow_hit_accuracy"), 45.0);
    }
}
