//! 지붕 빗물 집수 타당성 평가 엔진 모음.

pub mod category;
pub mod economics;
pub mod feasibility;
pub mod household;
pub mod purification;
pub mod quick;
pub mod recharge_safety;
pub mod runoff;
pub mod site;
pub mod structures;

pub use category::{classify, Category, CategoryInfo, CategoryInput};
pub use economics::{estimate_cost_and_payback, CostAnalysis, StructureKind};
pub use feasibility::{
    assess, assess_with, EngineSettings, FeasibilityResult, FeasibilityStatus,
};
pub use household::HouseholdInput;
pub use purification::{plan_purification, PurificationPlan, UseClass};
pub use quick::{quick_assess, QuickRequest};
pub use recharge_safety::{validate_recharge, SafetyVerdict};
pub use runoff::{estimate_runoff, RunoffEstimate};
pub use site::{SiteConditions, SiteDefaults};
pub use structures::{size_structures, PitSizing, StructureDimensions};
