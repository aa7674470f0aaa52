//! Duels stats: the win-gated division ladder, per-mode breakdown,
//! division titles, bridge block and doubles carries.

use serde_json::{json, Value};

use crate::calculate::{percentage2, ratio3};
use crate::config::{DivisionTier, StaticConfig};
use crate::models::{Stats, Table};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 21] = [
    // Main
    "wins",
    "losses",
    "kills",
    "deaths",
    "coins",
    "duels_chests",
    // More
    "melee_swings",
    "melee_hits",
    "bow_shots",
    "bow_hits",
    "damage_dealt",
    "health_regenerated",
    "games_played_duels",
    "rounds_played",
    "blocks_placed",
    "golden_apples_eaten",
    "Duels_openedChests",
    "Duels_openedCommons",
    "Duels_openedRares",
    "Duels_openedEpics",
    "Duels_openedLegendaries",
];

/// The mode groups of the main table. Win requirements are halved for every
/// group other than Overall.
const MODE_GROUPS: [(&str, &[(&str, &str)]); 16] = [
    ("Overall", &[("", "Overall")]),
    (
        "UHC",
        &[
            ("uhc_duel_", "UHC 1v1"),
            ("uhc_doubles_", "UHC 2v2"),
            ("uhc_four_", "UHC 4v4"),
            ("uhc_meetup_", "UHC Deathmatch"),
        ],
    ),
    ("OP", &[("op_duel_", "OP 1v1"), ("op_doubles_", "OP 2v2")]),
    (
        "SkyWars",
        &[("sw_duel_", "SkyWars 1v1"), ("sw_doubles_", "SkyWars 2v2")],
    ),
    (
        "MegaWalls",
        &[("mw_duel_", "MegaWalls 1v1"), ("mw_doubles_", "MegaWalls 2v2")],
    ),
    ("Bow", &[("bow_duel_", "Bow 1v1")]),
    ("Blitz", &[("blitz_duel_", "Blitz 1v1")]),
    ("Sumo", &[("sumo_duel_", "Sumo 1v1")]),
    ("Bowspleef", &[("bowspleef_duel_", "Bowspleef 1v1")]),
    ("Classic", &[("classic_duel_", "Classic 1v1")]),
    ("NoDebuff", &[("potion_duel_", "NoDebuff 1v1")]),
    ("Combo", &[("combo_duel_", "Combo 1v1")]),
    ("Boxing", &[("boxing_duel_", "Boxing 1v1")]),
    ("Parkour", &[("parkour_eight_", "Parkour")]),
    ("Duel Arena", &[("duel_arena_", "Duel Arena")]),
    (
        "Tournament",
        &[
            ("uhc_tournament_", "UHC Tournament"),
            ("sw_tournament_", "SkyWars Tournament"),
            ("sumo_tournament_", "Sumo Tournament"),
        ],
    ),
];

const BRIDGE_MODES: [(&str, &str); 8] = [
    ("bridge_duel_", "1v1"),
    ("bridge_doubles_", "2v2"),
    ("bridge_threes_", "3v3"),
    ("bridge_four_", "4v4"),
    ("bridge_2v2v2v2_", "2v2v2v2"),
    ("bridge_3v3v3v3_", "3v3v3v3"),
    ("capture_threes_", "Capture 3v3"),
    ("bridge_tournament_", "Tournament"),
];

/// The `(current, next, next requirement)` window around `wins`. Mode-
/// specific ladders halve every requirement. Wins beyond the terminal tier
/// clamp to it.
fn division_window(
    divisions: &[DivisionTier],
    wins: i64,
    halved: bool,
) -> Option<(&DivisionTier, &DivisionTier, i64)> {
    let first = divisions.first()?;
    let requirement = |tier: &DivisionTier| {
        if halved {
            tier.win_req / 2
        } else {
            tier.win_req
        }
    };

    let mut prev: (&DivisionTier, i64) = (first, 0);
    for tier in divisions {
        let req = requirement(tier);
        if wins >= prev.1 && wins < req {
            return Some((prev.0, tier, req));
        }
        prev = (tier, req);
    }

    let last = divisions.last()?;
    Some((last, last, requirement(last)))
}

fn division_display(divisions: &[DivisionTier], wins: i64, halved: bool) -> String {
    division_window(divisions, wins, halved)
        .map(|(current, _, _)| current.display())
        .unwrap_or_else(|| "None".to_string())
}

pub fn get_stats(profile: &RawProfile, config: &StaticConfig) -> Stats {
    let duels = profile.game("Duels");
    let divisions = &config.duels.divisions;
    let mut stats = Stats::new();

    // ==================================================================
    // GENERAL
    // ==================================================================

    for stat in STATS_NEEDED {
        stats.set(stat, duels.int(stat));
    }

    stats.set(
        "melee_misses",
        stats.int("melee_swings") - stats.int("melee_hits"),
    );
    stats.set("bow_misses", stats.int("bow_shots") - stats.int("bow_hits"));
    stats.set("draws", (stats.int("losses") - stats.int("deaths")).abs());
    stats.set(
        "division",
        division_display(divisions, stats.int("wins"), false),
    );

    stats.add_ratios(&[
        ("win_loss", "wins", "losses"),
        ("kill_death", "kills", "deaths"),
        ("melee_hit_miss", "melee_hits", "melee_misses"),
        ("bow_hit_miss", "bow_hits", "bow_misses"),
    ]);

    // ==================================================================
    // TABLE
    // ==================================================================

    let mut rows = Vec::new();
    for (group_name, group) in MODE_GROUPS {
        let tournament = group_name == "Tournament";

        let division_wins: i64 = group
            .iter()
            .map(|(prefix, _)| duels.int(&format!("{prefix}wins")))
            .sum();

        for (prefix, label) in group {
            let wins = duels.int(&format!("{prefix}wins"));
            let losses = duels.int(&format!("{prefix}losses"));
            let kills = duels.int(&format!("{prefix}kills"));
            let deaths = duels.int(&format!("{prefix}deaths"));
            let melee_swings = duels.int(&format!("{prefix}melee_swings"));
            let melee_hits = duels.int(&format!("{prefix}melee_hits"));
            let bow_shots = duels.int(&format!("{prefix}bow_shots"));
            let bow_hits = duels.int(&format!("{prefix}bow_hits"));

            let division: Value = if tournament {
                json!("N/A")
            } else {
                json!(division_display(divisions, division_wins, !prefix.is_empty()))
            };

            rows.push(vec![
                json!(label),
                division,
                json!(wins),
                json!(losses),
                json!(ratio3(wins as f64, losses as f64)),
                json!(kills),
                json!(deaths),
                json!(ratio3(kills as f64, deaths as f64)),
                json!(ratio3(melee_hits as f64, (melee_swings - melee_hits) as f64)),
                json!(ratio3(bow_hits as f64, (bow_shots - bow_hits) as f64)),
            ]);
        }
    }

    stats.set_table(
        "table",
        Table::new(
            "tableDuels",
            &[
                "Mode",
                "Division",
                "Wins",
                "Losses",
                "W/L",
                "Kills",
                "Deaths",
                "K/D",
                "Melee H/M",
                "Arrow H/M",
            ],
        )
        .rows(rows)
        .green(&[(4, 10.0), (7, 10.0)])
        .bold_rows(&[1])
        .percent(&[4])
        .decimal(&[7, 8, 9])
        .buttons(&[
            ("Division", &[0, 1]),
            ("W/L", &[0, 2, 3, 4]),
            ("K/D", &[0, 5, 6, 7]),
            ("H/M", &[0, 8, 9]),
        ]),
    );

    // ==================================================================
    // TITLES
    // ==================================================================

    let mut division_titles = Vec::new();
    let title_groups = MODE_GROUPS
        .iter()
        .map(|(name, group)| (*name, *group))
        .chain(std::iter::once(("Bridge", BRIDGE_MODES.as_slice())));

    for (group_name, group) in title_groups {
        // Tournaments do not have divisions
        if group_name == "Tournament" {
            continue;
        }
        let halved = group_name != "Overall";

        let division_wins: i64 = group
            .iter()
            .map(|(prefix, _)| duels.int(&format!("{prefix}wins")))
            .sum();

        if let Some((current, next, next_req)) = division_window(divisions, division_wins, halved) {
            division_titles.push(json!({
                "mode": group_name,
                "division_current": current.display(),
                "progress_current": division_wins,
                "division_next": next.display(),
                "progress_next": next_req,
                "wins_needed": next_req - division_wins + 1,
            }));
        }
    }
    stats.set("division_titles", division_titles);

    stats.set(
        "custom_titles",
        duels.get("custom_titles").cloned().unwrap_or(json!([])),
    );
    stats.set(
        "current_custom_title",
        duels
            .get("equipped_custom_titles")
            .cloned()
            .unwrap_or(json!("None")),
    );

    // ==================================================================
    // BRIDGE
    // ==================================================================

    const BRIDGE_COLS: [&str; 10] = [
        "wins",
        "losses",
        "kills",
        "deaths",
        "melee_swings",
        "melee_hits",
        "bow_shots",
        "bow_hits",
        "rounds_played",
        "goals",
    ];

    let bridge_row = |values: &dyn Fn(&str) -> i64, label: &str| {
        let wins = values("wins");
        let losses = values("losses");
        let kills = values("kills");
        let deaths = values("deaths");
        let melee_swings = values("melee_swings");
        let melee_hits = values("melee_hits");
        let bow_shots = values("bow_shots");
        let bow_hits = values("bow_hits");
        vec![
            json!(label),
            json!(wins),
            json!(losses),
            json!(ratio3(wins as f64, losses as f64)),
            json!(kills),
            json!(deaths),
            json!(ratio3(kills as f64, deaths as f64)),
            json!(ratio3(melee_hits as f64, (melee_swings - melee_hits) as f64)),
            json!(ratio3(bow_hits as f64, (bow_shots - bow_hits) as f64)),
            json!(values("goals")),
        ]
    };

    let mut overall: std::collections::BTreeMap<&str, i64> =
        BRIDGE_COLS.iter().map(|col| (*col, 0)).collect();
    let mut rows = Vec::new();
    for (prefix, label) in BRIDGE_MODES {
        let mut row: std::collections::BTreeMap<&str, i64> = Default::default();
        for col in BRIDGE_COLS {
            // Bridge kills and deaths live under a dedicated infix.
            let value = if col == "kills" || col == "deaths" {
                duels.int(&format!("{prefix}bridge_{col}"))
            } else {
                duels.int(&format!("{prefix}{col}"))
            };
            row.insert(col, value);
            if let Some(total) = overall.get_mut(col) {
                *total += value;
            }
        }
        rows.push(bridge_row(&|col: &str| row[col], label));
    }

    rows.insert(0, bridge_row(&|col: &str| overall[col], "Overall"));

    stats.set_table(
        "table_bridge",
        Table::new(
            "tableBridgeDuels",
            &[
                "Mode",
                "Wins",
                "Losses",
                "W/L",
                "Kills",
                "Deaths",
                "K/D",
                "Melee H/M",
                "Arrow H/M",
                "Goals",
            ],
        )
        .rows(rows)
        .green(&[(3, 10.0), (6, 10.0)])
        .bold_rows(&[1])
        .percent(&[3])
        .decimal(&[6, 7, 8])
        .buttons(&[
            ("W/L", &[0, 1, 2, 3]),
            ("K/D", &[0, 4, 5, 6]),
            ("H/M", &[0, 7, 8]),
            ("Goals", &[0, 9]),
        ]),
    );

    stats.set(
        "division_bridge",
        division_display(divisions, overall["wins"], true),
    );

    // ==================================================================
    // CARRIES
    // ==================================================================

    const CARRY_MODES: [(&str, &str); 5] = [
        ("uhc_doubles_", "UHC 2v2"),
        ("uhc_four_", "UHC 4v4"),
        ("op_doubles_", "OP 2v2"),
        ("sw_doubles_", "SkyWars 2v2"),
        ("mw_doubles_", "MegaWalls 2v2"),
    ];

    let mut rows = Vec::new();
    for (prefix, label) in CARRY_MODES {
        let wins = duels.int(&format!("{prefix}wins"));
        let losses = duels.int(&format!("{prefix}losses"));
        let deaths = duels.int(&format!("{prefix}deaths"));
        let carries = (deaths - losses).abs();

        rows.push(vec![
            json!(label),
            json!(carries),
            json!(wins),
            json!(format!("{}%", percentage2(carries as f64, wins as f64))),
        ]);
    }

    let total_carries: i64 = rows.iter().map(|row| row[1].as_i64().unwrap_or(0)).sum();
    rows.insert(
        0,
        vec![
            json!("Overall"),
            json!(total_carries),
            json!(stats.int("wins")),
            json!(format!(
                "{}%",
                percentage2(total_carries as f64, stats.num("wins"))
            )),
        ],
    );

    stats.set_table(
        "table_carries",
        Table::new("tableCarriesDuels", &["Mode", "Carries", "Wins", "% of Wins"])
            .rows(rows)
            .bold_rows(&[1])
            .width(520),
    );

    stats.set("carries", total_carries);

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(duels: Value) -> RawProfile {
        RawProfile::from_value(json!({
            "player": {"stats": {"Duels": duels}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_section() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({})), &config);

        assert_eq!(stats.int("wins"), 0);
        assert_eq!(stats.get("division"), Some(&json!("None")));
        assert_eq!(stats.int("carries"), 0);
    }

    #[test]
    fn test_division_ladder() {
        let config = StaticConfig::default();
        let divisions = &config.duels.divisions;

        assert_eq!(division_display(divisions, 0, false), "None");
        assert_eq!(division_display(divisions, 49, false), "None");
        assert_eq!(division_display(divisions, 50, false), "Rookie I");
        assert_eq!(division_display(divisions, 120, false), "Iron I");
        // Halved requirements for specific modes.
        assert_eq!(division_display(divisions, 25, true), "Rookie I");
        // Beyond the terminal tier clamps.
        assert_eq!(division_display(divisions, 10_000_000, false), "Ascended V");
    }

    #[test]
    fn test_draws_and_misses() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "losses": 10,
                "deaths": 14,
                "melee_swings": 100,
                "melee_hits": 60,
                "bow_shots": 50,
                "bow_hits": 25
            })),
            &config,
        );

        assert_eq!(stats.int("draws"), 4);
        assert_eq!(stats.int("melee_misses"), 40);
        assert_eq!(stats.num("melee_hit_miss"), 1.5);
        assert_eq!(stats.num("bow_hit_miss"), 1.0);
    }

    #[test]
    fn test_main_table_division_column() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "wins": 300,
                "uhc_duel_wins": 20,
                "uhc_doubles_wins": 10
            })),
            &config,
        );

        let table = stats.get("table").unwrap();
        let rows = table["rows"].as_array().unwrap();
        // 21 modes across all groups.
        assert_eq!(rows.len(), 21);
        assert_eq!(rows[0][0], "Overall");
        // 300 wins reaches the Gold II requirement exactly.
        assert_eq!(rows[0][1], "Gold II");
        // UHC rows share the group total of 30 wins against halved reqs.
        assert_eq!(rows[1][0], "UHC 1v1");
        assert_eq!(rows[1][1], "Rookie II");
        // Tournament rows have no division.
        assert_eq!(rows[20][1], "N/A");
    }

    #[test]
    fn test_division_titles() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({"wins": 55})), &config);

        let titles = stats.get("division_titles").unwrap().as_array().unwrap();
        // Every group except Tournament, plus Bridge.
        assert_eq!(titles.len(), 16);
        let overall = &titles[0];
        assert_eq!(overall["mode"], "Overall");
        assert_eq!(overall["division_current"], "Rookie I");
        assert_eq!(overall["division_next"], "Rookie II");
        assert_eq!(overall["progress_next"], 60);
        assert_eq!(overall["wins_needed"], 6);
    }

    #[test]
    fn test_bridge_overall_and_kill_infix() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "bridge_duel_wins": 5,
                "bridge_duel_bridge_kills": 12,
                "bridge_doubles_wins": 3,
                "bridge_doubles_bridge_kills": 6,
                "bridge_duel_goals": 9
            })),
            &config,
        );

        let table = stats.get("table_bridge").unwrap();
        let rows = table["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0][0], "Overall");
        assert_eq!(rows[0][1], 8);
        assert_eq!(rows[0][4], 18);
        assert_eq!(rows[1][9], 9);
    }

    #[test]
    fn test_carries() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "wins": 40,
                "uhc_doubles_losses": 4,
                "uhc_doubles_deaths": 10,
                "sw_doubles_losses": 2,
                "sw_doubles_deaths": 1
            })),
            &config,
        );

        // |10-4| + |1-2| = 7
        assert_eq!(stats.int("carries"), 7);
        let table = stats.get("table_carries").unwrap();
        assert_eq!(table["rows"][0][1], 7);
        assert_eq!(table["rows"][0][2], 40);
    }
}
