//! XP and level curves.
//!
//! Every game ships its own piecewise progression formula. All functions
//! here are pure: the same XP and config always produce the same level.
//! Inputs are assumed non-negative; lookups that walk a config table clamp
//! at the terminal tier instead of running off the end.

use serde::Serialize;

use super::round_dp;
use crate::config::{PitLevelBand, PitPrestige};

// ======================================================================
// NETWORK
// ======================================================================

/// Convert network XP to network level, rounded to 2 decimal places.
pub fn network_xp_to_level(xp: f64) -> f64 {
    round_dp(((2.0 * xp + 30625.0).sqrt() / 50.0) - 2.5, 2)
}

/// Convert network level to network XP.
pub fn network_level_to_xp(level: f64) -> f64 {
    (((level + 2.5) * 50.0).powi(2) - 30625.0) / 2.0
}

// ======================================================================
// PETS
// ======================================================================

/// Convert pet XP to level by walking the per-level requirement table.
///
/// Clamps at level 100 once the table is exhausted.
pub fn pet_xp_to_level(xp: f64, requirements: &[f64]) -> f64 {
    let mut xp = xp;
    let mut level: u32 = 0;
    for &req in requirements {
        if level == 100 {
            return 100.0;
        }
        if xp - req >= 0.0 {
            xp -= req;
            level += 1;
        } else {
            return round_dp(f64::from(level) + xp / req, 2);
        }
    }
    f64::from(level.min(100))
}

// ======================================================================
// BEDWARS
// ======================================================================

pub const BEDWARS_EASY_LEVELS: i64 = 4;
pub const BEDWARS_EASY_LEVELS_XP: i64 = 7000;
pub const BEDWARS_XP_PER_PRESTIGE: i64 = 96 * 5000 + BEDWARS_EASY_LEVELS_XP;
pub const BEDWARS_LEVELS_PER_PRESTIGE: i64 = 100;
pub const BEDWARS_HIGHEST_PRESTIGE: i64 = 10;

/// XP required to reach the given BedWars level from the one below it.
pub fn bedwars_xp_per_level(level: i64) -> i64 {
    if level == 0 {
        return 0;
    }

    let respected = if level > BEDWARS_HIGHEST_PRESTIGE * BEDWARS_LEVELS_PER_PRESTIGE {
        level - BEDWARS_HIGHEST_PRESTIGE * BEDWARS_LEVELS_PER_PRESTIGE
    } else {
        level % BEDWARS_LEVELS_PER_PRESTIGE
    };

    match respected {
        r if r > BEDWARS_EASY_LEVELS => 5000,
        1 => 500,
        2 => 1000,
        3 => 2000,
        4 => 3500,
        _ => 5000,
    }
}

/// Convert BedWars XP to a fractional level, rounded to 4 decimal places.
///
/// The first four levels of each 100-level prestige cycle are cheap
/// (500/1000/2000/3500); the rest cost a flat 5000. XP exactly equal to a
/// level boundary rolls over to the next whole level.
pub fn bedwars_xp_to_level(xp: f64) -> f64 {
    let prestiges = (xp / BEDWARS_XP_PER_PRESTIGE as f64).floor();
    let mut level = prestiges * BEDWARS_LEVELS_PER_PRESTIGE as f64;
    let mut remaining = xp - prestiges * BEDWARS_XP_PER_PRESTIGE as f64;

    for easy in 1..=BEDWARS_EASY_LEVELS {
        let cost = bedwars_xp_per_level(easy) as f64;
        if remaining < cost {
            break;
        }
        level += 1.0;
        remaining -= cost;
    }

    round_dp(level + remaining / 5000.0, 4)
}

/// Starting level of the next BedWars prestige.
pub fn bedwars_next_prestige(level: i64) -> i64 {
    level + 100 - (level % 100)
}

/// Starting level of the current BedWars prestige.
pub fn bedwars_prev_prestige(level: i64) -> i64 {
    level - (level % 100)
}

// ======================================================================
// SKYWARS
// ======================================================================

const SKYWARS_LEVEL_TOTALS: [f64; 19] = [
    0.0, 10.0, 35.0, 85.0, 160.0, 260.0, 510.0, 1010.0, 1760.0, 2760.0, 4010.0, 5510.0, 7260.0,
    9260.0, 11760.0, 14760.0, 18260.0, 22260.0, 26760.0,
];
const SKYWARS_LEVEL_AMOUNTS: [f64; 19] = [
    10.0, 25.0, 50.0, 75.0, 100.0, 250.0, 500.0, 750.0, 1000.0, 1250.0, 1500.0, 1750.0, 2000.0,
    2500.0, 3000.0, 3500.0, 4000.0, 4500.0, 5000.0,
];

const SKYWARS_OLD_LEVEL_TOTALS: [f64; 12] = [
    0.0, 20.0, 70.0, 150.0, 250.0, 500.0, 1000.0, 2000.0, 3500.0, 6000.0, 10000.0, 15000.0,
];
const SKYWARS_OLD_LEVEL_AMOUNTS: [f64; 12] = [
    20.0, 50.0, 80.0, 100.0, 250.0, 500.0, 1000.0, 1500.0, 2500.0, 4000.0, 5000.0, 10000.0,
];

/// Convert SkyWars XP to level (current curve), rounded to 4 decimal places.
///
/// Below 26760 XP the level is read from the breakpoint tables; at or above
/// it, levels cost a flat 5000 XP.
pub fn skywars_xp_to_level(xp: f64) -> f64 {
    if xp >= 26760.0 {
        return round_dp((xp - 26760.0) / 5000.0 + 19.0, 4);
    }
    for (count, &total) in SKYWARS_LEVEL_TOTALS.iter().enumerate() {
        if xp < total {
            let level = count as f64 + 1.0 + (xp - total) / SKYWARS_LEVEL_AMOUNTS[count - 1];
            return round_dp(level, 4);
        }
    }
    round_dp(19.0, 4)
}

/// Convert SkyWars XP to level under the legacy curve, rounded to 1 decimal
/// place. The flat-rate branch starts at 15000 XP and costs 10000 per level.
pub fn skywars_xp_to_level_old(xp: f64) -> f64 {
    if xp >= 15000.0 {
        return round_dp((xp - 15000.0) / 10000.0 + 12.0, 1);
    }
    for (count, &total) in SKYWARS_OLD_LEVEL_TOTALS.iter().enumerate() {
        if xp < total {
            let level = count as f64 + 1.0 + (xp - total) / SKYWARS_OLD_LEVEL_AMOUNTS[count - 1];
            return round_dp(level, 1);
        }
    }
    round_dp(12.0, 1)
}

/// XP at which an integer SkyWars level starts (inverse of the current
/// curve).
pub fn skywars_level_to_xp(level: i64) -> f64 {
    if level <= 1 {
        0.0
    } else if level <= 19 {
        SKYWARS_LEVEL_TOTALS[(level - 1) as usize]
    } else {
        26760.0 + (level - 19) as f64 * 5000.0
    }
}

/// Starting level of the next SkyWars prestige.
///
/// Prestiges are 10 levels wide up to level 500; the only band after that
/// starts at 1000.
pub fn skywars_next_prestige(level: i64) -> i64 {
    if level >= 500 {
        1000
    } else {
        (level / 10) * 10 + 10
    }
}

/// Starting level of the current SkyWars prestige.
pub fn skywars_prev_prestige(level: i64) -> i64 {
    if level >= 1000 {
        1000
    } else if level >= 500 {
        500
    } else {
        (level / 10) * 10
    }
}

// ======================================================================
// WOOL GAMES
// ======================================================================

pub const WOOL_EASY_LEVELS: [f64; 4] = [1000.0, 2000.0, 3000.0, 4000.0];
pub const WOOL_NORMAL_LEVEL_XP: f64 = 5000.0;
/// Sum of the four easy levels plus 96 normal levels.
pub const WOOL_XP_PER_PRESTIGE: f64 = 10000.0 + 96.0 * WOOL_NORMAL_LEVEL_XP;

/// Convert Wool Games XP to a fractional level. Levels are 1-based: 0 XP is
/// level 1, and completing the four easy levels lands exactly on level 5.
pub fn wool_xp_to_level(xp: f64) -> f64 {
    let easy_total: f64 = WOOL_EASY_LEVELS.iter().sum();
    let prestige_levels = (xp / WOOL_XP_PER_PRESTIGE).floor() * 100.0;
    let xp_over = xp % WOOL_XP_PER_PRESTIGE;

    if xp_over > easy_total {
        return prestige_levels
            + (xp_over - easy_total) / WOOL_NORMAL_LEVEL_XP
            + WOOL_EASY_LEVELS.len() as f64
            + 1.0;
    }

    let mut total = 0.0;
    for (i, &cost) in WOOL_EASY_LEVELS.iter().enumerate() {
        total += cost;
        if xp_over < total {
            let progress = (xp_over - (total - cost)) / cost;
            return prestige_levels + i as f64 + progress + 1.0;
        }
    }
    prestige_levels + WOOL_EASY_LEVELS.len() as f64 + 1.0
}

// ======================================================================
// PIT
// ======================================================================

/// A resolved Pit position: prestige index plus level within it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitLevel {
    pub prestige: usize,
    pub prestige_color: String,
    pub level: i64,
    pub level_color: String,
}

/// Resolve Pit XP against the prestige and level-band tables.
///
/// The prestige is the first whose XP ceiling covers the player's total;
/// within it, levels come in bands of 10, each level costing the band XP
/// scaled by the prestige multiplier. XP beyond the last ceiling clamps to
/// the final prestige at level 120.
pub fn pit_xp_to_level(xp: f64, prestiges: &[PitPrestige], bands: &[PitLevelBand]) -> PitLevel {
    for (count, prestige) in prestiges.iter().enumerate() {
        if xp <= prestige.xp_total {
            let xp_over = xp - (prestige.xp_total - prestige.xp);

            if xp_over == prestige.xp {
                return PitLevel {
                    prestige: count,
                    prestige_color: prestige.color.clone(),
                    level: 120,
                    level_color: "aqua".to_string(),
                };
            }

            let mut level_xp_total = 0.0;
            let mut level_count: i64 = 0;
            for band in bands {
                for _ in 0..10 {
                    level_xp_total += band.xp * prestige.multiplier;
                    if level_xp_total <= xp_over {
                        level_count += 1;
                    } else {
                        return PitLevel {
                            prestige: count,
                            prestige_color: prestige.color.clone(),
                            level: level_count,
                            level_color: band.color.clone(),
                        };
                    }
                }
            }

            return PitLevel {
                prestige: count,
                prestige_color: prestige.color.clone(),
                level: 120,
                level_color: "aqua".to_string(),
            };
        }
    }

    // Beyond the final prestige ceiling.
    let last = prestiges.len().saturating_sub(1);
    PitLevel {
        prestige: last,
        prestige_color: prestiges
            .last()
            .map(|p| p.color.clone())
            .unwrap_or_default(),
        level: 120,
        level_color: "aqua".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticConfig;

    #[test]
    fn test_network_level_roundtrip() {
        for level in [0.0, 1.0, 25.0, 100.0, 250.0, 1000.0] {
            let xp = network_level_to_xp(level);
            assert!((network_xp_to_level(xp) - level).abs() < 0.01);
        }
    }

    #[test]
    fn test_network_level_at_zero_xp() {
        assert_eq!(network_xp_to_level(0.0), 1.0);
    }

    #[test]
    fn test_bedwars_level_zero() {
        assert_eq!(bedwars_xp_to_level(0.0), 0.0);
    }

    #[test]
    fn test_bedwars_easy_level_boundary() {
        // 500 + 1000 + 2000 + 3500 completes the easy levels exactly.
        assert_eq!(bedwars_xp_to_level(7000.0), 4.0);
        assert_eq!(bedwars_xp_to_level(500.0), 1.0);
        assert_eq!(bedwars_xp_to_level(499.0), round_dp(499.0 / 5000.0, 4));
    }

    #[test]
    fn test_bedwars_prestige_rollover() {
        let xp = BEDWARS_XP_PER_PRESTIGE as f64;
        assert_eq!(bedwars_xp_to_level(xp), 100.0);
        assert_eq!(bedwars_xp_to_level(xp + 500.0), 101.0);
    }

    #[test]
    fn test_bedwars_xp_per_level() {
        assert_eq!(bedwars_xp_per_level(0), 0);
        assert_eq!(bedwars_xp_per_level(1), 500);
        assert_eq!(bedwars_xp_per_level(4), 3500);
        assert_eq!(bedwars_xp_per_level(5), 5000);
        assert_eq!(bedwars_xp_per_level(101), 500);
        assert_eq!(bedwars_xp_per_level(100), 5000);
    }

    #[test]
    fn test_bedwars_prestige_bounds() {
        assert_eq!(bedwars_prev_prestige(0), 0);
        assert_eq!(bedwars_prev_prestige(523), 500);
        assert_eq!(bedwars_next_prestige(523), 600);
        assert_eq!(bedwars_next_prestige(500), 600);
    }

    #[test]
    fn test_skywars_flat_rate_transition() {
        // Both sides of the 26760 XP breakpoint.
        assert_eq!(skywars_xp_to_level(26760.0), 19.0);
        assert_eq!(skywars_xp_to_level(26759.0), round_dp(19.0 - 1.0 / 4500.0, 4));
        assert_eq!(skywars_xp_to_level(31760.0), 20.0);
    }

    #[test]
    fn test_skywars_low_levels() {
        assert_eq!(skywars_xp_to_level(0.0), 1.0);
        assert_eq!(skywars_xp_to_level(5.0), 1.5);
        assert_eq!(skywars_xp_to_level(10.0), 2.0);
    }

    #[test]
    fn test_skywars_old_curve() {
        assert_eq!(skywars_xp_to_level_old(0.0), 1.0);
        assert_eq!(skywars_xp_to_level_old(15000.0), 12.0);
        assert_eq!(skywars_xp_to_level_old(25000.0), 13.0);
    }

    #[test]
    fn test_skywars_prestige_bounds() {
        assert_eq!(skywars_prev_prestige(37), 30);
        assert_eq!(skywars_next_prestige(37), 40);
        assert_eq!(skywars_prev_prestige(512), 500);
        assert_eq!(skywars_next_prestige(512), 1000);
        assert_eq!(skywars_prev_prestige(1200), 1000);
    }

    #[test]
    fn test_pet_levels() {
        let reqs: Vec<f64> = (0..100).map(|i| 100.0 + i as f64 * 50.0).collect();
        assert_eq!(pet_xp_to_level(0.0, &reqs), 0.0);
        assert_eq!(pet_xp_to_level(50.0, &reqs), 0.5);
        assert_eq!(pet_xp_to_level(100.0, &reqs), round_dp(1.0, 2));
        // Beyond the whole table clamps at 100.
        let total: f64 = reqs.iter().sum();
        assert_eq!(pet_xp_to_level(total + 999.0, &reqs), 100.0);
    }

    #[test]
    fn test_wool_levels() {
        assert_eq!(wool_xp_to_level(0.0), 1.0);
        assert_eq!(wool_xp_to_level(500.0), 1.5);
        assert_eq!(wool_xp_to_level(10000.0), 5.0);
        assert_eq!(wool_xp_to_level(15000.0), 6.0);
        // The prestige offset applies on the easy-level path too.
        assert_eq!(wool_xp_to_level(WOOL_XP_PER_PRESTIGE + 500.0), 101.5);
    }

    #[test]
    fn test_pit_level_first_prestige() {
        let config = StaticConfig::default();
        let pit = &config.modes.pit;

        let at_zero = pit_xp_to_level(0.0, &pit.prestiges, &pit.levels);
        assert_eq!(at_zero.prestige, 0);
        assert_eq!(at_zero.level, 0);

        // 15 XP per level in the first band at multiplier 1.
        let two_levels = pit_xp_to_level(30.0, &pit.prestiges, &pit.levels);
        assert_eq!(two_levels.level, 2);
    }

    #[test]
    fn test_pit_level_ceiling_and_clamp() {
        let config = StaticConfig::default();
        let pit = &config.modes.pit;
        let first = &pit.prestiges[0];

        let capped = pit_xp_to_level(first.xp_total, &pit.prestiges, &pit.levels);
        assert_eq!(capped.prestige, 0);
        assert_eq!(capped.level, 120);

        let last = pit.prestiges.last().unwrap();
        let beyond = pit_xp_to_level(last.xp_total + 1.0, &pit.prestiges, &pit.levels);
        assert_eq!(beyond.prestige, pit.prestiges.len() - 1);
        assert_eq!(beyond.level, 120);
    }
}
