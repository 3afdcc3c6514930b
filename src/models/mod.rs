//! Core data models shared by the calculators.

mod eligibility;
mod money;
mod schedule;

pub use eligibility::{
    EligibilityProfile, Gender, MAX_PROFILE_AGE, MatchResult, MatchedScheme, Occupation,
    SENIOR_CITIZEN_AGE, SocialCategory,
};
pub use money::{format_inr, round_rupee};
pub use schedule::{AmortizationRow, YearlyBreakdown};
