//! Built-in static tables.
//!
//! The complete default data set: prestige ladders, title thresholds,
//! class/hero/kit lists and weapon scoring curves. Any of these can be
//! overridden by a loaded config document; the defaults keep the crate
//! usable without one.

use std::collections::BTreeMap;

use super::{
    BedwarsConfig, ClassColor, CvcConfig, DescentItem, DescentKind, DivisionTier, DuelsConfig,
    EmblemTier, GeneralConfig, HeadTier, HeadValue, KitEntry, KitGroup, MegaWallsConfig, PitConfig,
    PitLevelBand, PitPrestige, PrestigeTier, RankedConfig, RewardGroup, ScorePrefix,
    SkywarsConfig, SkywarsPrestige, SmashHero, SmashHeroesConfig, Title, TitleLadder,
    WarlordsConfig, WeaponScoreLadder, WeaponUpgrades, WoolGamesConfig, WoolPrestige,
};
use crate::calculate::leveling::skywars_level_to_xp;
use crate::calculate::romanize;

/// Sentinel threshold for terminal ladder entries.
const TERMINAL: f64 = 1e12;

pub(super) fn general() -> GeneralConfig {
    GeneralConfig {
        pet_levels: (0..100).map(|i| 100.0 + (i * 50) as f64).collect(),
    }
}

pub(super) fn bedwars() -> BedwarsConfig {
    fn tier(level: i64, name: &str, color: &str) -> PrestigeTier {
        PrestigeTier {
            level,
            name: name.to_string(),
            color: color.to_string(),
            scheme: None,
        }
    }

    let mut prestiges = vec![
        tier(0, "Stone", "gray"),
        tier(100, "Iron", "white"),
        tier(200, "Gold", "gold"),
        tier(300, "Diamond", "aqua"),
        tier(400, "Emerald", "darkGreen"),
        tier(500, "Sapphire", "darkAqua"),
        tier(600, "Ruby", "darkRed"),
        tier(700, "Crystal", "lightPurple"),
        tier(800, "Opal", "blue"),
        tier(900, "Amethyst", "darkPurple"),
        PrestigeTier {
            level: 1000,
            name: "Rainbow".to_string(),
            color: "gold".to_string(),
            scheme: Some(
                ["red", "gold", "yellow", "green", "aqua", "lightPurple", "darkPurple"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
        },
        tier(1100, "Iron Prime", "white"),
        tier(1200, "Gold Prime", "gold"),
        tier(1300, "Diamond Prime", "aqua"),
        tier(1400, "Emerald Prime", "darkGreen"),
        tier(1500, "Sapphire Prime", "darkAqua"),
        tier(1600, "Ruby Prime", "darkRed"),
        tier(1700, "Crystal Prime", "lightPurple"),
        tier(1800, "Opal Prime", "blue"),
        tier(1900, "Amethyst Prime", "darkPurple"),
    ];
    prestiges.push(tier(2000, "Mirror", "gray"));

    BedwarsConfig {
        prestiges,
        emblems: vec![
            EmblemTier {
                level: 0,
                symbol: "✫".to_string(),
            },
            EmblemTier {
                level: 1000,
                symbol: "✪".to_string(),
            },
            EmblemTier {
                level: 2000,
                symbol: "⚝".to_string(),
            },
        ],
    }
}

pub(super) fn skywars() -> SkywarsConfig {
    const NAMED: [(&str, &str); 11] = [
        ("Default", "gray"),
        ("Iron", "white"),
        ("Gold", "gold"),
        ("Diamond", "aqua"),
        ("Emerald", "darkGreen"),
        ("Sapphire", "darkAqua"),
        ("Ruby", "darkRed"),
        ("Crystal", "lightPurple"),
        ("Opal", "blue"),
        ("Amethyst", "darkPurple"),
        ("Rainbow", "gold"),
    ];
    const CYCLE: [&str; 8] = [
        "white", "gold", "aqua", "darkGreen", "darkAqua", "darkRed", "lightPurple", "blue",
    ];

    // One band per 10 levels up to 500, then the single terminal band.
    let mut band_levels: Vec<i64> = (0..=500).step_by(10).collect();
    band_levels.push(1000);

    let mut prestiges = Vec::with_capacity(band_levels.len());
    for (i, &level) in band_levels.iter().enumerate() {
        let (name, color) = if level == 500 {
            ("Mythic".to_string(), "lightPurple".to_string())
        } else if level == 1000 {
            ("Celestial".to_string(), "aqua".to_string())
        } else if let Some((name, color)) = NAMED.get((level / 10) as usize) {
            (name.to_string(), color.to_string())
        } else {
            (
                format!("Tier {}", romanize(level / 10)),
                CYCLE[((level / 10) as usize) % CYCLE.len()].to_string(),
            )
        };

        let start_xp = skywars_level_to_xp(level.max(1));
        let end_xp = match band_levels.get(i + 1) {
            Some(&next) => skywars_level_to_xp(next) - 1.0,
            None => skywars_level_to_xp(2000) - 1.0,
        };

        prestiges.push(SkywarsPrestige {
            level,
            name,
            color,
            start_xp: if level == 0 { 0.0 } else { start_xp },
            end_xp,
        });
    }

    let emblems: BTreeMap<String, String> = [
        ("default", "⋆"),
        ("angel", "☯"),
        ("omega", "Ω"),
        ("reaper", "☠"),
        ("heart", "❤"),
        ("lightning", "⚡"),
        ("paw", "♞"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let schemes: BTreeMap<String, String> = [
        ("default", "gray"),
        ("iron_prestige", "white"),
        ("gold_prestige", "gold"),
        ("diamond_prestige", "aqua"),
        ("emerald_prestige", "darkGreen"),
        ("sapphire_prestige", "darkAqua"),
        ("ruby_prestige", "darkRed"),
        ("crystal_prestige", "lightPurple"),
        ("opal_prestige", "blue"),
        ("amethyst_prestige", "darkPurple"),
        ("rainbow_prestige", "rainbow"),
        ("mythic_prestige", "lightPurple"),
        ("demigod", "red"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    fn kits(key: &str, entries: &[(&str, &str)]) -> KitGroup {
        KitGroup {
            key: key.to_string(),
            kits: entries
                .iter()
                .map(|(key, name)| KitEntry {
                    key: key.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    let kit_names = vec![
        kits(
            "solo",
            &[
                ("kit_basic_solo_default", "Default"),
                ("kit_basic_solo_ecologist", "Ecologist"),
                ("kit_basic_solo_frog", "Frog"),
                ("kit_basic_solo_princess", "Princess"),
                ("kit_advanced_solo_armorer", "Armorer"),
                ("kit_advanced_solo_cannoneer", "Cannoneer"),
                ("kit_advanced_solo_enchanter", "Enchanter"),
                ("kit_advanced_solo_farmer", "Farmer"),
            ],
        ),
        kits(
            "team",
            &[
                ("kit_attacking_team_scout", "Scout"),
                ("kit_attacking_team_knight", "Knight"),
                ("kit_attacking_team_energix", "Energix"),
                ("kit_attacking_team_hunter", "Hunter"),
                ("kit_defending_team_armorer", "Armorer"),
                ("kit_defending_team_baseball-player", "Baseball Player"),
                ("kit_supporting_team_healer", "Healer"),
                ("kit_supporting_team_pyromancer", "Pyromancer"),
            ],
        ),
        kits(
            "mega",
            &[
                ("kit_mega_mega_default", "Default"),
                ("kit_mega_mega_armorer", "Armorer"),
                ("kit_mega_mega_cannoneer", "Cannoneer"),
                ("kit_mega_mega_knight", "Knight"),
                ("kit_mega_mega_shadow-knight", "Shadow Knight"),
            ],
        ),
    ];

    fn heads(color: &str, entries: &[(&str, i64)]) -> HeadTier {
        HeadTier {
            color: color.to_string(),
            heads: entries
                .iter()
                .map(|(name, xp)| HeadValue {
                    name: name.to_string(),
                    xp: *xp,
                })
                .collect(),
        }
    }

    let head_tiers = vec![
        heads("gray", &[("eww", 1), ("yucky", 2), ("meh", 3)]),
        heads("gold", &[("decent", 5), ("salty", 10), ("tasty", 20)]),
        heads(
            "aqua",
            &[("succulent", 50), ("sweet", 100), ("heavenly", 200)],
        ),
    ];

    fn descent(key: &str, kind: DescentKind, cost: i64, tiers: i64) -> DescentItem {
        DescentItem {
            key: key.to_string(),
            kind,
            cost,
            tiers,
        }
    }

    let descent_info = vec![
        descent("angels_offering", DescentKind::Stat, 5, 1),
        descent("favor_of_the_angel", DescentKind::Package, 10, 1),
        descent("dove_of_peace", DescentKind::Package, 20, 1),
        descent("revenge_of_the_fallen", DescentKind::Stat, 2, 5),
        descent("guardian_angel", DescentKind::Stat, 4, 3),
        descent("sacrificial_souls", DescentKind::Stat, 6, 5),
        descent("angelic_halo", DescentKind::Vanity, 15, 1),
        descent("seraphs_blessing", DescentKind::Vanity, 25, 1),
    ];

    let ranked = RankedConfig {
        seasons: [
            "_5_20", "_6_20", "_7_20", "_8_20", "_9_20", "_10_20", "_11_20", "_12_20", "_1_21",
            "_2_21", "_3_21", "_4_21",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        first_season_number: 24,
        rewards: vec![
            RewardGroup {
                division: "gold".to_string(),
                rewards: vec![
                    "skywars_ranked_gold_kit".to_string(),
                    "skywars_ranked_gold_cage".to_string(),
                ],
            },
            RewardGroup {
                division: "diamond".to_string(),
                rewards: vec![
                    "skywars_ranked_diamond_kit".to_string(),
                    "skywars_ranked_diamond_cage".to_string(),
                    "skywars_ranked_diamond_trail".to_string(),
                ],
            },
            RewardGroup {
                division: "masters".to_string(),
                rewards: vec![
                    "skywars_ranked_masters_kit".to_string(),
                    "skywars_ranked_masters_cage".to_string(),
                    "skywars_ranked_masters_trail".to_string(),
                    "skywars_ranked_masters_scheme".to_string(),
                ],
            },
        ],
    };

    SkywarsConfig {
        prestiges,
        emblems,
        schemes,
        kit_names,
        heads: head_tiers,
        descent_info,
        ranked,
    }
}

pub(super) fn duels() -> DuelsConfig {
    const DIVISIONS: [(&str, &str, [i64; 5]); 11] = [
        ("Rookie", "gray", [50, 60, 70, 80, 90]),
        ("Iron", "white", [100, 130, 160, 190, 220]),
        ("Gold", "gold", [250, 300, 350, 400, 450]),
        ("Diamond", "aqua", [500, 600, 700, 800, 900]),
        ("Master", "darkGreen", [1000, 1200, 1400, 1600, 1800]),
        ("Legend", "darkRed", [2000, 2600, 3200, 3800, 4400]),
        ("Grandmaster", "yellow", [5000, 6000, 7000, 8000, 9000]),
        ("Godlike", "darkPurple", [10000, 12000, 14000, 16000, 18000]),
        ("Celestial", "aqua", [25000, 30000, 35000, 40000, 45000]),
        ("Divine", "lightPurple", [50000, 60000, 70000, 80000, 90000]),
        ("Ascended", "red", [100000, 120000, 140000, 160000, 180000]),
    ];

    let mut divisions = vec![DivisionTier {
        win_req: 0,
        name: "None".to_string(),
        value: String::new(),
        color: "gray".to_string(),
    }];

    for (name, color, reqs) in DIVISIONS {
        for (tier, req) in reqs.iter().enumerate() {
            divisions.push(DivisionTier {
                win_req: *req,
                name: name.to_string(),
                value: romanize(tier as i64 + 1),
                color: color.to_string(),
            });
        }
    }

    DuelsConfig { divisions }
}

fn ladder(entries: &[(&str, f64, &str)]) -> TitleLadder {
    TitleLadder {
        titles: entries
            .iter()
            .map(|(name, value, color)| Title {
                name: name.to_string(),
                value: *value,
                color: color.to_string(),
            })
            .collect(),
    }
}

pub(super) fn uhc_titles() -> TitleLadder {
    ladder(&[
        ("Recruit", 0.0, "gray"),
        ("Initiate", 10.0, "white"),
        ("Soldier", 60.0, "yellow"),
        ("Sergeant", 210.0, "gold"),
        ("Knight", 460.0, "aqua"),
        ("Captain", 960.0, "green"),
        ("Centurion", 1710.0, "darkGreen"),
        ("Gladiator", 2710.0, "blue"),
        ("Warlord", 5210.0, "darkPurple"),
        ("Champion", 10210.0, "gold"),
        ("Bloodlust", 13210.0, "darkRed"),
        ("Titan", 16210.0, "red"),
        ("N/A", TERMINAL, "gray"),
    ])
}

pub(super) fn speed_uhc_titles() -> TitleLadder {
    ladder(&[
        ("Hiker", 0.0, "gray"),
        ("Jogger", 50.0, "white"),
        ("Runner", 300.0, "yellow"),
        ("Sprinter", 1050.0, "gold"),
        ("Turbo", 2560.0, "aqua"),
        ("Sanic", 5550.0, "green"),
        ("Hot Rod", 15550.0, "blue"),
        ("Bolt", 30550.0, "darkPurple"),
        ("Zoom", 55550.0, "darkRed"),
        ("God Speed", 85550.0, "red"),
        ("N/A", TERMINAL, "gray"),
    ])
}

pub(super) fn build_battle_titles() -> TitleLadder {
    ladder(&[
        ("Rookie", 0.0, "white"),
        ("Untrained", 100.0, "gray"),
        ("Amateur", 250.0, "yellow"),
        ("Apprentice", 500.0, "green"),
        ("Experienced", 1000.0, "aqua"),
        ("Seasoned", 2000.0, "blue"),
        ("Trained", 3500.0, "darkGreen"),
        ("Skilled", 7500.0, "darkAqua"),
        ("Talented", 10000.0, "lightPurple"),
        ("Professional", 20000.0, "gold"),
        ("Expert", 30000.0, "darkRed"),
        ("Master", 50000.0, "red"),
        ("N/A", TERMINAL, "gray"),
    ])
}

pub(super) fn wool_games() -> WoolGamesConfig {
    const PRESTIGES: [(&str, f64, &str); 11] = [
        ("Stone", 0.0, "gray"),
        ("Iron", 100.0, "white"),
        ("Gold", 200.0, "gold"),
        ("Diamond", 300.0, "aqua"),
        ("Emerald", 400.0, "darkGreen"),
        ("Sapphire", 500.0, "darkAqua"),
        ("Ruby", 600.0, "darkRed"),
        ("Crystal", 700.0, "lightPurple"),
        ("Opal", 800.0, "blue"),
        ("Amethyst", 900.0, "darkPurple"),
        ("Rainbow", 1000.0, "gold"),
    ];

    let mut prestiges: Vec<WoolPrestige> = PRESTIGES
        .iter()
        .map(|(name, level, color)| WoolPrestige {
            level: *level,
            name: name.to_string(),
            color: color.to_string(),
        })
        .collect();
    prestiges.push(WoolPrestige {
        level: TERMINAL,
        name: "N/A".to_string(),
        color: "gray".to_string(),
    });

    WoolGamesConfig {
        prestiges,
        icons: [
            ("HEART", "❤"),
            ("PLUS", "✙"),
            ("STAR", "✰"),
            ("CROWN", "♕"),
            ("SHIELD", "⛨"),
            ("BLOSSOM", "✿"),
            ("MOON", "☽"),
            ("SUN", "☀"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
    }
}

pub(super) fn pit() -> PitConfig {
    const MULTIPLIERS: [f64; 31] = [
        1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.75, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0,
        12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 28.0, 32.0, 36.0, 40.0, 45.0, 50.0, 75.0, 100.0,
    ];
    const BAND_XP: [f64; 12] = [
        15.0, 30.0, 50.0, 75.0, 125.0, 300.0, 600.0, 800.0, 900.0, 1000.0, 1200.0, 1500.0,
    ];
    const BAND_COLORS: [&str; 12] = [
        "gray",
        "blue",
        "darkAqua",
        "darkGreen",
        "green",
        "yellow",
        "gold",
        "red",
        "darkRed",
        "darkPurple",
        "lightPurple",
        "aqua",
    ];

    fn prestige_color(index: usize) -> &'static str {
        match index {
            0 => "gray",
            1..=4 => "blue",
            5..=9 => "yellow",
            10..=14 => "gold",
            15..=19 => "red",
            20..=24 => "darkPurple",
            25..=29 => "darkRed",
            _ => "darkAqua",
        }
    }

    let band_total: f64 = BAND_XP.iter().map(|xp| xp * 10.0).sum();

    let mut prestiges = Vec::with_capacity(MULTIPLIERS.len());
    let mut running = 0.0;
    for (i, multiplier) in MULTIPLIERS.iter().enumerate() {
        let xp = band_total * multiplier;
        running += xp;
        prestiges.push(PitPrestige {
            color: prestige_color(i).to_string(),
            multiplier: *multiplier,
            xp,
            xp_total: running,
            gold_req: 10_000 * (i as i64 + 1),
        });
    }

    PitConfig {
        prestiges,
        levels: BAND_XP
            .iter()
            .zip(BAND_COLORS.iter())
            .map(|(xp, color)| PitLevelBand {
                xp: *xp,
                color: color.to_string(),
            })
            .collect(),
    }
}

pub(super) fn mega_walls() -> MegaWallsConfig {
    const CLASSES: [(&str, &str); 23] = [
        ("arcanist", "lightPurple"),
        ("assassin", "red"),
        ("blaze", "gold"),
        ("cow", "white"),
        ("creeper", "darkGreen"),
        ("dreadlord", "darkPurple"),
        ("enderman", "darkPurple"),
        ("golem", "gray"),
        ("herobrine", "gold"),
        ("hunter", "green"),
        ("moleman", "gold"),
        ("phoenix", "red"),
        ("pigman", "lightPurple"),
        ("pirate", "aqua"),
        ("renegade", "darkRed"),
        ("shaman", "darkGreen"),
        ("shark", "blue"),
        ("skeleton", "white"),
        ("snowman", "white"),
        ("spider", "darkRed"),
        ("squid", "blue"),
        ("werewolf", "gray"),
        ("zombie", "green"),
    ];

    MegaWallsConfig {
        classes: CLASSES
            .iter()
            .map(|(name, color)| ClassColor {
                name: name.to_string(),
                color: color.to_string(),
            })
            .collect(),
    }
}

pub(super) fn smash_heroes() -> SmashHeroesConfig {
    const HEROES: [(&str, &str, &str); 15] = [
        ("THE_BULK", "The Bulk", "darkGreen"),
        ("BOTMUN", "Botmun", "gray"),
        ("CAKE_MONSTER", "Cake Monster", "lightPurple"),
        ("DUSK_CRAWLER", "Void Crawler", "darkPurple"),
        ("FROSTY", "Frosty", "aqua"),
        ("GENERAL_CLUCK", "General Cluck", "gold"),
        ("GOKU", "Karakot", "yellow"),
        ("GREEN_HOOD", "Green Hood", "green"),
        ("MARAUDER", "Marauder", "darkPurple"),
        ("PUG", "Pug", "white"),
        ("SANIC", "Sanic", "blue"),
        ("SERGEANT_SHIELD", "Sgt. Shield", "gray"),
        ("SHOOP_DA_WHOOP", "Shoop", "red"),
        ("SKULLFIRE", "Skullfire", "darkRed"),
        ("SPODERMAN", "Spooderman", "red"),
    ];

    SmashHeroesConfig {
        heroes: HEROES
            .iter()
            .map(|(key, name, color)| SmashHero {
                key: key.to_string(),
                name: name.to_string(),
                color: color.to_string(),
            })
            .collect(),
    }
}

pub(super) fn cvc() -> CvcConfig {
    const GUN_UPGRADES: [&str; 4] = [
        "cost_reduction",
        "damage_increase",
        "recoil_reduction",
        "reload_speed_reduction",
    ];

    let mut weapons: Vec<WeaponUpgrades> = ["pistol", "magnum", "ak_47", "rifle", "shotgun", "smg", "sniper"]
        .iter()
        .map(|weapon| WeaponUpgrades {
            weapon: weapon.to_string(),
            upgrades: GUN_UPGRADES.iter().map(|u| u.to_string()).collect(),
        })
        .collect();
    weapons.push(WeaponUpgrades {
        weapon: "knife".to_string(),
        upgrades: vec![
            "damage_increase".to_string(),
            "attack_delay_reduction".to_string(),
        ],
    });

    CvcConfig { weapons }
}

pub(super) fn warlords() -> WarlordsConfig {
    fn scores(category: &str, entries: &[(f64, &str)]) -> WeaponScoreLadder {
        WeaponScoreLadder {
            category: category.to_string(),
            prefixes: entries
                .iter()
                .map(|(score, prefix)| ScorePrefix {
                    score: *score,
                    prefix: prefix.to_string(),
                })
                .collect(),
        }
    }

    WarlordsConfig {
        weapon_scores: vec![
            scores(
                "COMMON",
                &[
                    (0.0, "Cracked"),
                    (50.0, "Sturdy"),
                    (100.0, "Balanced"),
                    (150.0, "Honed"),
                    (200.0, "Keen"),
                ],
            ),
            scores(
                "RARE",
                &[
                    (0.0, "Plain"),
                    (80.0, "Polished"),
                    (160.0, "Gleaming"),
                    (240.0, "Radiant"),
                ],
            ),
            scores(
                "EPIC",
                &[
                    (0.0, "Tempered"),
                    (120.0, "Charged"),
                    (240.0, "Infused"),
                    (360.0, "Transcendent"),
                ],
            ),
            scores(
                "LEGENDARY",
                &[
                    (0.0, "Dormant"),
                    (160.0, "Awakened"),
                    (320.0, "Ascendant"),
                    (480.0, "Mythical"),
                ],
            ),
        ],
    }
}
