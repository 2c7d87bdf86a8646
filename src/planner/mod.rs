pub mod aim;
pub mod engine;
pub mod occlusion;
pub mod power;
pub mod scoring;
pub mod types;

pub use self::scoring::{CuePath, Leg, ShotMetrics};
pub use self::types::{CandidateShot, ShotDecision, ShotKind, ShotPlan};
use crate::config::Config;
use crate::layout::{Layout, RuleSet, TurnOrder};

/// Per-call planning context, owned and updated by the caller between cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanContext {
    pub order: TurnOrder,
    /// Forces a rule set; by default it is inferred from the layout size.
    pub rules: Option<RuleSet>,
}

impl PlanContext {
    pub fn new(order: TurnOrder) -> Self {
        Self { order, rules: None }
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn rules_for(&self, layout: &Layout) -> RuleSet {
        self.rules.unwrap_or_else(|| RuleSet::for_layout(layout))
    }
}

/// Stateless shot planner: every call is a pure function of
/// (layout, context) under a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    pub config: Config,
}

impl Planner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// All viable pot candidates, unsorted, in enumeration order.
    pub fn candidates(&self, layout: &Layout, ctx: &PlanContext) -> Vec<CandidateShot> {
        let own = ctx.rules_for(layout).own_targets(ctx.order, layout);
        engine::enumerate_candidates(layout, &own, &self.config)
    }

    pub fn best_candidate(&self, layout: &Layout, ctx: &PlanContext) -> Option<CandidateShot> {
        engine::select_best(self.candidates(layout, ctx))
    }

    pub fn decide(&self, layout: &Layout, ctx: &PlanContext) -> ShotDecision {
        let cfg = &self.config;
        let Some(cue) = layout.cue() else {
            return engine::safe_default(cfg);
        };

        let own = ctx.rules_for(layout).own_targets(ctx.order, layout);
        let decision = match engine::select_best(engine::enumerate_candidates(layout, &own, cfg)) {
            Some(best) => engine::pot(cue, best, cfg),
            None => engine::fallback(cue, layout, &own, cfg),
        };
        engine::finalize(decision, cfg)
    }
}
