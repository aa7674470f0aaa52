//! Speed UHC stats: the score-gated title ladder plus mode and mastery
//! tables.

use serde_json::{json, Value};

use crate::calculate::ratio3;
use crate::config::StaticConfig;
use crate::models::{ProgressBar, Stats, Table};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 9] = [
    "score",
    "coins",
    "wins",
    "losses",
    "kills",
    "deaths",
    "assists",
    "blocks_broken",
    "items_enchanted",
];

const HEAD: [&str; 7] = ["Mode", "Wins", "Losses", "W/L", "Kills", "Deaths", "K/D"];

const MODES: [(&str, &str); 5] = [
    ("", "Overall"),
    ("_solo_normal", "Solo Normal"),
    ("_solo_insane", "Solo Insane"),
    ("_team_normal", "Team Normal"),
    ("_team_insane", "Team Insane"),
];

const MASTERIES: [&str; 9] = [
    "berserk",
    "fortune",
    "guardian",
    "huntsman",
    "invigorate",
    "master_baker",
    "sniper",
    "vampirism",
    "wild_specialist",
];

fn combat_row(label: &str, wins: i64, losses: i64, kills: i64, deaths: i64) -> Vec<Value> {
    vec![
        json!(label),
        json!(wins),
        json!(losses),
        json!(ratio3(wins as f64, losses as f64)),
        json!(kills),
        json!(deaths),
        json!(ratio3(kills as f64, deaths as f64)),
    ]
}

pub fn get_stats(profile: &RawProfile, config: &StaticConfig) -> Stats {
    let speeduhc = profile.game("SpeedUHC");
    let mut stats = Stats::new();

    for stat in STATS_NEEDED {
        stats.set(stat, speeduhc.int(stat));
    }

    stats.set("win_loss", ratio3(stats.num("wins"), stats.num("losses")));
    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));

    let score = stats.num("score");
    if let Some((current, next)) = config.modes.speed_uhc.window(score) {
        stats.set("title", current.name.clone());
        stats.set("next_title", next.name.clone());

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

    // Modes Table
    let mut rows = Vec::new();
    for (suffix, label) in MODES {
        rows.push(combat_row(
            label,
            speeduhc.int(&format!("wins{suffix}")),
            speeduhc.int(&format!("losses{suffix}")),
            speeduhc.int(&format!("kills{suffix}")),
            speeduhc.int(&format!("deaths{suffix}")),
        ));
    }

    stats.set_table(
        "table_modes",
        Table::new("tableSUHCModes", &HEAD)
            .rows(rows)
            .bold_rows(&[1])
            .percent(&[3])
            .decimal(&[6])
            .buttons(&[("W/L", &[0, 1, 2, 3]), ("K/D", &[0, 4, 5, 6])]),
    );

    // Masteries Table
    let mut rows = Vec::new();
    for mastery in MASTERIES {
        let label = crate::calculate::title_case(&mastery.replace('_', " "));
        rows.push(combat_row(
            &label,
            speeduhc.int(&format!("wins_mastery_{mastery}")),
            speeduhc.int(&format!("losses_mastery_{mastery}")),
            speeduhc.int(&format!("kills_mastery_{mastery}")),
            speeduhc.int(&format!("deaths_mastery_{mastery}")),
        ));
    }

    stats.set_table(
        "table_masteries",
        Table::new("tableSUHCMasteries", &HEAD)
            .rows(rows)
            .bold_cols(&[0])
            .percent(&[3])
            .decimal(&[6])
            .buttons(&[("W/L", &[0, 1, 2, 3]), ("K/D", &[0, 4, 5, 6])]),
    );

    stats
}
