use crate::error::{CfResult, CueForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub power: PowerParams,
    #[command(flatten)]
    pub fallback: FallbackParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    #[arg(long, default_value_t = 0.0)]
    pub base_offset: f64,

    // === CLEARANCE ===
    // These dominate everything below: an open long shot beats a blocked short one.
    #[arg(long, default_value_t = 1600.0)]
    pub bonus_cue_clear: f64,
    #[arg(long, default_value_t = 1200.0)]
    pub penalty_cue_blocked: f64,
    #[arg(long, default_value_t = 2200.0)]
    pub bonus_target_clear: f64,
    #[arg(long, default_value_t = 1800.0)]
    pub penalty_target_blocked: f64,

    // === ALIGNMENT ===
    #[arg(long, default_value_t = 320.0)]
    pub weight_alignment: f64,
    #[arg(long, default_value_t = 0.35)]
    pub thin_cut_threshold: f64,
    #[arg(long, default_value_t = 700.0)]
    pub penalty_thin_cut: f64,

    // === DISTANCE ===
    #[arg(long, default_value_t = 4.6)]
    pub weight_cue_distance: f64,
    #[arg(long, default_value_t = 2.8)]
    pub weight_target_distance: f64,
    #[arg(long, default_value_t = 130.0)]
    pub long_shot_threshold: f64,
    #[arg(long, default_value_t = 3.5)]
    pub penalty_long_shot: f64,

    // === RISK ===
    #[arg(long, default_value_t = 450.0)]
    pub penalty_bank_rail: f64,
    #[arg(long, default_value_t = 250.0)]
    pub penalty_decisive: f64,

    // === BANK SHOTS ===
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub bank_shots: bool,
    // Keeps the rail contact out of the pocket jaws
    #[arg(long, default_value_t = 6.0)]
    pub bank_rail_margin: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_offset: 0.0,
            bonus_cue_clear: 1600.0,
            penalty_cue_blocked: 1200.0,
            bonus_target_clear: 2200.0,
            penalty_target_blocked: 1800.0,
            weight_alignment: 320.0,
            thin_cut_threshold: 0.35,
            penalty_thin_cut: 700.0,
            weight_cue_distance: 4.6,
            weight_target_distance: 2.8,
            long_shot_threshold: 130.0,
            penalty_long_shot: 3.5,
            penalty_bank_rail: 450.0,
            penalty_decisive: 250.0,
            bank_shots: true,
            bank_rail_margin: 6.0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerParams {
    #[arg(long, default_value_t = 28.0)]
    pub power_base: f64,
    #[arg(long, default_value_t = 0.72)]
    pub power_per_cue_distance: f64,
    #[arg(long, default_value_t = 0.42)]
    pub power_per_target_distance: f64,
    #[arg(long, default_value_t = 24.0)]
    pub power_min: f64,
    #[arg(long, default_value_t = 100.0)]
    pub power_max: f64,

    // Alignment above this counts as a straight hit and gets no cut boost
    #[arg(long, default_value_t = 0.9)]
    pub straight_threshold: f64,
    #[arg(long, default_value_t = 20.0)]
    pub cut_power_gain: f64,
    #[arg(long, default_value_t = 6.0)]
    pub bank_power_boost: f64,
    #[arg(long, default_value_t = 80.0)]
    pub blocked_power_cap: f64,
}

impl Default for PowerParams {
    fn default() -> Self {
        Self {
            power_base: 28.0,
            power_per_cue_distance: 0.72,
            power_per_target_distance: 0.42,
            power_min: 24.0,
            power_max: 100.0,
            straight_threshold: 0.9,
            cut_power_gain: 20.0,
            bank_power_boost: 6.0,
            blocked_power_cap: 80.0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackParams {
    #[arg(long, default_value_t = 0.92)]
    pub fallback_power_per_distance: f64,
    #[arg(long, default_value_t = 30.0)]
    pub fallback_power_min: f64,
    #[arg(long, default_value_t = 90.0)]
    pub fallback_power_max: f64,
    #[arg(long, default_value_t = 35.0)]
    pub center_power: f64,
    #[arg(long, default_value_t = 0.0)]
    pub default_angle: f64,
    #[arg(long, default_value_t = 50.0)]
    pub default_power: f64,
}

impl Default for FallbackParams {
    fn default() -> Self {
        Self {
            fallback_power_per_distance: 0.92,
            fallback_power_min: 30.0,
            fallback_power_max: 90.0,
            center_power: 35.0,
            default_angle: 0.0,
            default_power: 50.0,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CfResult<()> {
        let p = &self.power;
        let f = &self.fallback;

        if !(p.power_min <= p.power_max) {
            return Err(CueForgeError::Config(format!(
                "power_min ({}) exceeds power_max ({})",
                p.power_min, p.power_max
            )));
        }
        if !(f.fallback_power_min <= f.fallback_power_max) {
            return Err(CueForgeError::Config(format!(
                "fallback_power_min ({}) exceeds fallback_power_max ({})",
                f.fallback_power_min, f.fallback_power_max
            )));
        }
        for (name, v) in [
            ("fallback_power_min", f.fallback_power_min),
            ("fallback_power_max", f.fallback_power_max),
            ("center_power", f.center_power),
            ("default_power", f.default_power),
            ("blocked_power_cap", p.blocked_power_cap),
        ] {
            if !(p.power_min <= v && v <= p.power_max) {
                return Err(CueForgeError::Config(format!(
                    "{} ({}) must lie within [{}, {}]",
                    name, v, p.power_min, p.power_max
                )));
            }
        }
        if !(0.0..360.0).contains(&f.default_angle) {
            return Err(CueForgeError::Config(format!(
                "default_angle ({}) must lie within [0, 360)",
                f.default_angle
            )));
        }
        if self.weights.bank_rail_margin < 0.0 {
            return Err(CueForgeError::Config(
                "bank_rail_margin must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// Overwrites fields with values the user explicitly typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(weights, base_offset);
        update_if_present!(weights, bonus_cue_clear);
        update_if_present!(weights, penalty_cue_blocked);
        update_if_present!(weights, bonus_target_clear);
        update_if_present!(weights, penalty_target_blocked);
        update_if_present!(weights, weight_alignment);
        update_if_present!(weights, thin_cut_threshold);
        update_if_present!(weights, penalty_thin_cut);
        update_if_present!(weights, weight_cue_distance);
        update_if_present!(weights, weight_target_distance);
        update_if_present!(weights, long_shot_threshold);
        update_if_present!(weights, penalty_long_shot);
        update_if_present!(weights, penalty_bank_rail);
        update_if_present!(weights, penalty_decisive);
        update_if_present!(weights, bank_shots);
        update_if_present!(weights, bank_rail_margin);

        update_if_present!(power, power_base);
        update_if_present!(power, power_per_cue_distance);
        update_if_present!(power, power_per_target_distance);
        update_if_present!(power, power_min);
        update_if_present!(power, power_max);
        update_if_present!(power, straight_threshold);
        update_if_present!(power, cut_power_gain);
        update_if_present!(power, bank_power_boost);
        update_if_present!(power, blocked_power_cap);

        update_if_present!(fallback, fallback_power_per_distance);
        update_if_present!(fallback, fallback_power_min);
        update_if_present!(fallback, fallback_power_max);
        update_if_present!(fallback, center_power);
        update_if_present!(fallback, default_angle);
        update_if_present!(fallback, default_power);
    }
}
