//! Static configuration tables.
//!
//! Prestige ladders, title thresholds, class/hero lists, weapon scoring
//! curves and emblem maps. Loaded once per process (or request) and passed
//! explicitly into every extractor; never mutated. A complete built-in
//! default ships with the crate, and any table can be overridden from a
//! JSON document.

mod defaults;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// ======================================================================
// GENERAL
// ======================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Per-level pet XP requirements, level 1 through 100.
    #[serde(rename = "petLevels")]
    pub pet_levels: Vec<f64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        defaults::general()
    }
}

// ======================================================================
// BEDWARS
// ======================================================================

/// A named prestige band with its starting level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrestigeTier {
    pub level: i64,
    pub name: String,
    pub color: String,
    /// Per-character color classes for multi-color bands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<Vec<String>>,
}

/// A level-gated emblem symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmblemTier {
    pub level: i64,
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedwarsConfig {
    pub prestiges: Vec<PrestigeTier>,
    pub emblems: Vec<EmblemTier>,
}

impl BedwarsConfig {
    /// Highest prestige whose starting level is at or below `level`.
    pub fn prestige_for(&self, level: i64) -> Option<&PrestigeTier> {
        self.prestiges
            .iter()
            .rev()
            .find(|p| p.level <= level)
            .or_else(|| self.prestiges.first())
    }

    /// Highest emblem unlocked at `level`.
    pub fn emblem_for(&self, level: i64) -> &str {
        self.emblems
            .iter()
            .rev()
            .find(|e| e.level <= level)
            .or_else(|| self.emblems.first())
            .map(|e| e.symbol.as_str())
            .unwrap_or("")
    }
}

impl Default for BedwarsConfig {
    fn default() -> Self {
        defaults::bedwars()
    }
}

// ======================================================================
// SKYWARS
// ======================================================================

/// A prestige band with its XP window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkywarsPrestige {
    pub level: i64,
    pub name: String,
    pub color: String,
    #[serde(rename = "startXP")]
    pub start_xp: f64,
    #[serde(rename = "endXP")]
    pub end_xp: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitEntry {
    /// Raw stat suffix, e.g. `kit_basic_solo_default`.
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitGroup {
    pub key: String,
    pub kits: Vec<KitEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadValue {
    pub name: String,
    pub xp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadTier {
    pub color: String,
    pub heads: Vec<HeadValue>,
}

/// How an Angel's Descent perk is detected in the raw profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescentKind {
    /// Counter field in the SkyWars section.
    Stat,
    /// Membership of the SkyWars `packages` list.
    Package,
    /// Membership of the profile-wide vanity package list.
    Vanity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescentItem {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: DescentKind,
    pub cost: i64,
    pub tiers: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardGroup {
    pub division: String,
    /// Package keys granted at this division.
    pub rewards: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedConfig {
    /// Raw rating-field season keys, oldest first.
    pub seasons: Vec<String>,
    /// Season number of the first entry in `seasons`.
    #[serde(rename = "firstSeasonNumber")]
    pub first_season_number: i64,
    pub rewards: Vec<RewardGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkywarsConfig {
    pub prestiges: Vec<SkywarsPrestige>,
    pub emblems: BTreeMap<String, String>,
    pub schemes: BTreeMap<String, String>,
    #[serde(rename = "kitNames")]
    pub kit_names: Vec<KitGroup>,
    pub heads: Vec<HeadTier>,
    #[serde(rename = "descentInfo")]
    pub descent_info: Vec<DescentItem>,
    pub ranked: RankedConfig,
}

impl SkywarsConfig {
    /// Highest prestige whose starting level is at or below `level`.
    pub fn prestige_for(&self, level: i64) -> Option<&SkywarsPrestige> {
        self.prestiges
            .iter()
            .rev()
            .find(|p| p.level <= level)
            .or_else(|| self.prestiges.first())
    }

    /// Emblem symbol for a raw `active_emblem` key (minus its prefix).
    pub fn emblem(&self, key: &str) -> &str {
        self.emblems
            .get(key)
            .or_else(|| self.emblems.get("default"))
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl Default for SkywarsConfig {
    fn default() -> Self {
        defaults::skywars()
    }
}

// ======================================================================
// DUELS
// ======================================================================

/// A competitive division gated by total wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionTier {
    #[serde(rename = "winReq")]
    pub win_req: i64,
    pub name: String,
    /// Tier numeral within the division, e.g. `II`.
    pub value: String,
    pub color: String,
}

impl DivisionTier {
    /// Plain display form, e.g. `Gold II`.
    pub fn display(&self) -> String {
        if self.value.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.value)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelsConfig {
    pub divisions: Vec<DivisionTier>,
}

impl Default for DuelsConfig {
    fn default() -> Self {
        defaults::duels()
    }
}

// ======================================================================
// MODE TABLES
// ======================================================================

/// A threshold-gated display title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Title {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleLadder {
    pub titles: Vec<Title>,
}

impl TitleLadder {
    /// The `(current, next)` pair around `score`. The ladder's terminal
    /// `N/A` sentinel keeps every score inside a window.
    pub fn window(&self, score: f64) -> Option<(&Title, &Title)> {
        match self.titles.iter().position(|t| score < t.value) {
            Some(0) => self.titles.first().map(|t| (t, t)),
            Some(i) => Some((&self.titles[i - 1], &self.titles[i])),
            None => self.titles.last().map(|t| (t, t)),
        }
    }
}

/// A wool prestige band, gated by level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WoolPrestige {
    pub level: f64,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WoolGamesConfig {
    pub prestiges: Vec<WoolPrestige>,
    pub icons: BTreeMap<String, String>,
}

impl WoolGamesConfig {
    /// The `(current, next)` prestige pair around `level`.
    pub fn window(&self, level: f64) -> Option<(&WoolPrestige, &WoolPrestige)> {
        match self.prestiges.iter().position(|p| level < p.level) {
            Some(0) => self.prestiges.first().map(|p| (p, p)),
            Some(i) => Some((&self.prestiges[i - 1], &self.prestiges[i])),
            None => self.prestiges.last().map(|p| (p, p)),
        }
    }

    pub fn icon(&self, key: &str) -> &str {
        self.icons
            .get(key)
            .or_else(|| self.icons.get("HEART"))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// One Pit prestige: XP and gold requirements plus the level-cost
/// multiplier applied within it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitPrestige {
    pub color: String,
    pub multiplier: f64,
    /// XP spanned by this prestige alone.
    pub xp: f64,
    /// Cumulative XP at the end of this prestige.
    #[serde(rename = "xpTotal")]
    pub xp_total: f64,
    #[serde(rename = "goldReq")]
    pub gold_req: i64,
}

/// A band of ten Pit levels sharing one base XP cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitLevelBand {
    pub xp: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitConfig {
    pub prestiges: Vec<PitPrestige>,
    pub levels: Vec<PitLevelBand>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassColor {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MegaWallsConfig {
    pub classes: Vec<ClassColor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmashHero {
    /// Raw stat key, e.g. `THE_BULK`.
    pub key: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmashHeroesConfig {
    pub heroes: Vec<SmashHero>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponUpgrades {
    pub weapon: String,
    pub upgrades: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvcConfig {
    pub weapons: Vec<WeaponUpgrades>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePrefix {
    pub score: f64,
    pub prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponScoreLadder {
    pub category: String,
    pub prefixes: Vec<ScorePrefix>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarlordsConfig {
    #[serde(rename = "weaponScores")]
    pub weapon_scores: Vec<WeaponScoreLadder>,
}

impl WarlordsConfig {
    pub fn prefixes_for(&self, category: &str) -> Option<&[ScorePrefix]> {
        self.weapon_scores
            .iter()
            .find(|l| l.category == category)
            .map(|l| l.prefixes.as_slice())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModesConfig {
    #[serde(rename = "UHC", default = "defaults::uhc_titles")]
    pub uhc: TitleLadder,
    #[serde(rename = "speedUHC", default = "defaults::speed_uhc_titles")]
    pub speed_uhc: TitleLadder,
    #[serde(rename = "buildBattle", default = "defaults::build_battle_titles")]
    pub build_battle: TitleLadder,
    #[serde(rename = "woolGames", default = "defaults::wool_games")]
    pub wool_games: WoolGamesConfig,
    #[serde(default = "defaults::pit")]
    pub pit: PitConfig,
    #[serde(rename = "megaWalls", default = "defaults::mega_walls")]
    pub mega_walls: MegaWallsConfig,
    #[serde(rename = "smashHeroes", default = "defaults::smash_heroes")]
    pub smash_heroes: SmashHeroesConfig,
    #[serde(default = "defaults::cvc")]
    pub cvc: CvcConfig,
    #[serde(default = "defaults::warlords")]
    pub warlords: WarlordsConfig,
}

impl Default for ModesConfig {
    fn default() -> Self {
        ModesConfig {
            uhc: defaults::uhc_titles(),
            speed_uhc: defaults::speed_uhc_titles(),
            build_battle: defaults::build_battle_titles(),
            wool_games: defaults::wool_games(),
            pit: defaults::pit(),
            mega_walls: defaults::mega_walls(),
            smash_heroes: defaults::smash_heroes(),
            cvc: defaults::cvc(),
            warlords: defaults::warlords(),
        }
    }
}

// ======================================================================
// ROOT
// ======================================================================

/// All static tables, loaded once and shared read-only by every extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub bedwars: BedwarsConfig,
    #[serde(default)]
    pub skywars: SkywarsConfig,
    #[serde(default)]
    pub duels: DuelsConfig,
    #[serde(default)]
    pub modes: ModesConfig,
}

impl StaticConfig {
    /// Parse a config document from JSON text. Sections absent from the
    /// document fall back to the built-in tables.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: StaticConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config document from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Validate table invariants the extractors rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn sorted_by<T, K: PartialOrd>(items: &[T], key: impl Fn(&T) -> K) -> bool {
            items.windows(2).all(|w| key(&w[0]) <= key(&w[1]))
        }

        if self.bedwars.prestiges.is_empty() {
            return Err(ConfigError::ValidationError(
                "bedwars prestige table is empty".to_string(),
            ));
        }
        if !sorted_by(&self.bedwars.prestiges, |p| p.level) {
            return Err(ConfigError::ValidationError(
                "bedwars prestiges must ascend by level".to_string(),
            ));
        }
        if !sorted_by(&self.skywars.prestiges, |p| p.level) {
            return Err(ConfigError::ValidationError(
                "skywars prestiges must ascend by level".to_string(),
            ));
        }
        if !sorted_by(&self.duels.divisions, |d| d.win_req) {
            return Err(ConfigError::ValidationError(
                "duels divisions must ascend by win requirement".to_string(),
            ));
        }
        for (name, ladder) in [
            ("UHC", &self.modes.uhc),
            ("speedUHC", &self.modes.speed_uhc),
            ("buildBattle", &self.modes.build_battle),
        ] {
            if ladder.titles.len() < 2 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} title ladder needs at least a base and a terminal entry"
                )));
            }
            if !sorted_by(&ladder.titles, |t| t.value) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} titles must ascend by value"
                )));
            }
        }
        if !sorted_by(&self.modes.pit.prestiges, |p| p.xp_total) {
            return Err(ConfigError::ValidationError(
                "pit prestiges must ascend by cumulative XP".to_string(),
            ));
        }
        if self.modes.pit.levels.len() != 12 {
            return Err(ConfigError::ValidationError(
                "pit level table must hold 12 ten-level bands".to_string(),
            ));
        }

        Ok(())
    }
}
