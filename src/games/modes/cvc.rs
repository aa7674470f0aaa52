//! Cops and Crims stats: defusal/deathmatch counters merged into overall
//! values, plus the weapon upgrade matrix.

use serde_json::json;

use crate::calculate::{percentage2, ratio3};
use crate::config::StaticConfig;
use crate::models::{Stats, Table};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 6] = [
    "coins",
    "round_wins",
    "shots_fired",
    "headshot_kills",
    "bombs_planted",
    "bombs_defused",
];

const MODE_STATS: [&str; 6] = [
    "game_wins",
    "kills",
    "deaths",
    "assists",
    "cop_kills",
    "criminal_kills",
];

pub fn get_stats(profile: &RawProfile, config: &StaticConfig) -> Stats {
    let cvc = profile.game("MCGO");
    let mut stats = Stats::new();

    for stat in STATS_NEEDED {
        stats.set(stat, cvc.int(stat));
    }

    // Defusal and deathmatch counters are tracked separately; the headline
    // numbers combine both.
    for stat in MODE_STATS {
        stats.set(
            stat,
            cvc.int(stat) + cvc.int(&format!("{stat}_deathmatch")),
        );
    }

    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));
    stats.set(
        "headshot_accuracy",
        percentage2(stats.num("headshot_kills"), stats.num("shots_fired")),
    );

    // Table
    let mut rows = Vec::new();
    for (suffix, label) in [("", "Defusal"), ("_deathmatch", "Team Deathmatch")] {
        let kills = cvc.int(&format!("kills{suffix}"));
        let deaths = cvc.int(&format!("deaths{suffix}"));

        rows.push(vec![
            json!(label),
            json!(cvc.int(&format!("game_wins{suffix}"))),
            json!(kills),
            json!(deaths),
            json!(ratio3(kills as f64, deaths as f64)),
            json!(cvc.int(&format!("cop_kills{suffix}"))),
            json!(cvc.int(&format!("criminal_kills{suffix}"))),
        ]);
    }

    rows.insert(
        0,
        vec![
            json!("Overall"),
            json!(stats.int("game_wins")),
            json!(stats.int("kills")),
            json!(stats.int("deaths")),
            json!(stats.num("kill_death")),
            json!(stats.int("cop_kills")),
            json!(stats.int("criminal_kills")),
        ],
    );

    stats.set_table(
        "table",
        Table::new(
            "tableCVC",
            &["Mode", "Wins", "Kills", "Deaths", "K/D", "Cop Kills", "Criminal Kills"],
        )
        .rows(rows)
        .bold_rows(&[1])
        .buttons(&[
            ("Wins", &[0, 1]),
            ("K/D", &[0, 2, 3, 4]),
            ("Kill Type", &[0, 5, 6]),
        ]),
    );

    // Weapons
    for weapon in &config.modes.cvc.weapons {
        for upgrade in &weapon.upgrades {
            let key = format!("{}_{}", weapon.weapon, upgrade);
            stats.set(key.clone(), cvc.int(&key));
        }
    }

    stats
}
