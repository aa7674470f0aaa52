//! TNT Games stats: per-sub-game counters and ratios plus the wizards
//! table.

use serde_json::json;

use crate::calculate::{ratio3, title_case};
use crate::config::StaticConfig;
use crate::models::{Stats, Table};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 20] = [
    "coins",
    "wins_tntrun",
    "deaths_tntrun",
    "record_tntrun",
    "wins_pvprun",
    "kills_pvprun",
    "deaths_pvprun",
    "record_pvprun",
    "wins_tntag",
    "kills_tntag",
    "deaths_tntag",
    "wins_bowspleef",
    "deaths_bowspleef",
    "tags_bowspleef",
    "wins_capture",
    "kills_capture",
    "deaths_capture",
    "assists_capture",
    "points_capture",
    "air_time_capture",
];

const WIZARDS: [&str; 9] = [
    "ancient", "blood", "fire", "hydro", "ice", "kinetic", "storm", "toxic", "wither",
];

pub fn get_stats(profile: &RawProfile, _config: &StaticConfig) -> Stats {
    let tnt = profile.game("TNTGames");
    let mut stats = Stats::new();

    for stat in STATS_NEEDED {
        stats.set(stat, tnt.int(stat));
    }

    let total_wins: i64 = ["tntrun", "pvprun", "tntag", "bowspleef", "capture"]
        .iter()
        .map(|mode| stats.int(&format!("wins_{mode}")))
        .sum();
    stats.set("wins", total_wins);

    stats.set(
        "win_loss_tntrun",
        ratio3(stats.num("wins_tntrun"), stats.num("deaths_tntrun")),
    );
    stats.set(
        "win_loss_pvprun",
        ratio3(stats.num("wins_pvprun"), stats.num("deaths_pvprun")),
    );
    stats.set(
        "kill_death_pvprun",
        ratio3(stats.num("kills_pvprun"), stats.num("deaths_pvprun")),
    );
    stats.set(
        "win_loss_tntag",
        ratio3(stats.num("wins_tntag"), stats.num("deaths_tntag")),
    );
    stats.set(
        "kill_death_tntag",
        ratio3(stats.num("kills_tntag"), stats.num("deaths_tntag")),
    );
    stats.set(
        "win_loss_bowspleef",
        ratio3(stats.num("wins_bowspleef"), stats.num("deaths_bowspleef")),
    );
    stats.set(
        "tags_win_bowspleef",
        ratio3(stats.num("tags_bowspleef"), stats.num("wins_bowspleef")) as i64,
    );
    stats.set(
        "tags_game_bowspleef",
        ratio3(
            stats.num("tags_bowspleef"),
            stats.num("wins_bowspleef") + stats.num("deaths_bowspleef"),
        ) as i64,
    );
    stats.set(
        "kill_death_capture",
        ratio3(stats.num("kills_capture"), stats.num("deaths_capture")),
    );

    // Wizards Table
    let mut rows = Vec::new();
    for wizard in WIZARDS {
        let kills = tnt.int(&format!("new_{wizard}wizard_kills"));
        let deaths = tnt.int(&format!("new_{wizard}wizard_deaths"));
        let assists = tnt.int(&format!("new_{wizard}wizard_assists"));

        rows.push(vec![
            json!(title_case(wizard)),
            json!(kills),
            json!(deaths),
            json!(ratio3(kills as f64, deaths as f64)),
            json!(assists),
        ]);
    }

    stats.set_table(
        "table_capture",
        Table::new(
            "tableTNTCapture",
            &["Wizard", "Kills", "Deaths", "K/D", "Assists"],
        )
        .rows(rows)
        .bold_cols(&[0])
        .decimal(&[3])
        .buttons(&[("K/D", &[0, 1, 2, 3]), ("Assists", &[0, 4])]),
    );

    stats
}
