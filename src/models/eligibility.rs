//! Eligibility profile submitted to the scheme-matching service, and the
//! shape of the match result it returns.
//!
//! The matching itself happens in an external backend; this module only owns
//! the data model and the checks applied before a profile is sent.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Oldest age accepted in a profile.
pub const MAX_PROFILE_AGE: u32 = 120;

/// Age from which a citizen counts as a senior citizen.
pub const SENIOR_CITIZEN_AGE: u32 = 60;

/// Gender as recorded in scheme eligibility criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Transgender or other.
    Other,
}

/// Social category used for reservation-based schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialCategory {
    /// General category.
    General,
    /// Other Backward Classes.
    Obc,
    /// Scheduled Castes.
    Sc,
    /// Scheduled Tribes.
    St,
    /// Economically Weaker Section.
    Ews,
}

/// Broad occupation groups used by scheme criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    /// Salaried employee.
    Salaried,
    /// Self-employed or business owner.
    SelfEmployed,
    /// Farmer or agricultural worker.
    Farmer,
    /// Student.
    Student,
    /// Daily-wage or unorganised-sector worker.
    DailyWage,
    /// Homemaker.
    Homemaker,
    /// Unemployed.
    Unemployed,
    /// Retired.
    Retired,
}

/// A citizen profile as posted to the eligibility service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityProfile {
    /// Age in completed years.
    pub age: u32,
    /// Gender.
    pub gender: Gender,
    /// State or union territory of residence.
    pub state: String,
    /// Annual household income in rupees.
    pub annual_income: Decimal,
    /// Occupation group.
    pub occupation: Occupation,
    /// Social category.
    pub category: SocialCategory,
    /// Whether the citizen has a disability certificate.
    #[serde(default)]
    pub is_disabled: bool,
    /// Whether the household holds a below-poverty-line card.
    #[serde(default)]
    pub is_bpl: bool,
    /// Whether the citizen is a widow.
    #[serde(default)]
    pub is_widow: bool,
    /// Whether the citizen belongs to a minority community.
    #[serde(default)]
    pub is_minority: bool,
}

impl EligibilityProfile {
    /// Checks the profile before it is submitted.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidProfile`] when the age is above
    /// [`MAX_PROFILE_AGE`], the income is negative or the state is blank.
    pub fn validate(&self) -> EngineResult<()> {
        if self.age > MAX_PROFILE_AGE {
            return Err(EngineError::InvalidProfile {
                field: "age".to_string(),
                message: format!("must be at most {}", MAX_PROFILE_AGE),
            });
        }

        if self.annual_income.is_sign_negative() && !self.annual_income.is_zero() {
            return Err(EngineError::InvalidProfile {
                field: "annual_income".to_string(),
                message: "cannot be negative".to_string(),
            });
        }

        if self.state.trim().is_empty() {
            return Err(EngineError::InvalidProfile {
                field: "state".to_string(),
                message: "is required".to_string(),
            });
        }

        Ok(())
    }

    /// Returns true if the citizen is a senior citizen.
    pub fn is_senior_citizen(&self) -> bool {
        self.age >= SENIOR_CITIZEN_AGE
    }
}

/// A scheme the eligibility service matched the profile against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedScheme {
    /// Scheme identifier.
    pub id: String,
    /// Scheme name.
    pub name: String,
    /// Scheme category (e.g. "education", "health").
    pub category: String,
    /// Estimated annual benefit in rupees, when the scheme has a monetary value.
    #[serde(default)]
    pub benefit_amount: Option<Decimal>,
}

/// The service's response for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Schemes the profile qualifies for.
    pub schemes: Vec<MatchedScheme>,
    /// Sum of the monetary benefits of all matched schemes.
    pub total_benefit: Decimal,
}

impl MatchResult {
    /// Groups the matched schemes by category, categories in name order.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&MatchedScheme>> {
        let mut grouped: BTreeMap<&str, Vec<&MatchedScheme>> = BTreeMap::new();
        for scheme in &self.schemes {
            grouped.entry(scheme.category.as_str()).or_default().push(scheme);
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_test_profile() -> EligibilityProfile {
        EligibilityProfile {
            age: 34,
            gender: Gender::Female,
            state: "Maharashtra".to_string(),
            annual_income: dec!(240000),
            occupation: Occupation::Farmer,
            category: SocialCategory::Obc,
            is_disabled: false,
            is_bpl: true,
            is_widow: false,
            is_minority: false,
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(create_test_profile().validate().is_ok());
    }

    #[test]
    fn test_age_above_limit_is_rejected() {
        let mut profile = create_test_profile();
        profile.age = 121;

        match profile.validate() {
            Err(EngineError::InvalidProfile { field, .. }) => assert_eq!(field, "age"),
            other => panic!("Expected InvalidProfile, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_income_is_rejected() {
        let mut profile = create_test_profile();
        profile.annual_income = dec!(-1);

        match profile.validate() {
            Err(EngineError::InvalidProfile { field, .. }) => assert_eq!(field, "annual_income"),
            other => panic!("Expected InvalidProfile, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_state_is_rejected() {
        let mut profile = create_test_profile();
        profile.state = "  ".to_string();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_senior_citizen_threshold() {
        let mut profile = create_test_profile();
        profile.age = 59;
        assert!(!profile.is_senior_citizen());
        profile.age = 60;
        assert!(profile.is_senior_citizen());
    }

    #[test]
    fn test_profile_deserializes_with_default_flags() {
        let json = r#"{
            "age": 45,
            "gender": "male",
            "state": "Bihar",
            "annual_income": 120000,
            "occupation": "daily_wage",
            "category": "sc"
        }"#;
        let profile: EligibilityProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.occupation, Occupation::DailyWage);
        assert_eq!(profile.category, SocialCategory::Sc);
        assert!(!profile.is_bpl);
    }

    #[test]
    fn test_match_result_groups_by_category() {
        let json = r#"{
            "schemes": [
                {"id": "pm-kisan", "name": "PM-KISAN", "category": "agriculture", "benefit_amount": "6000"},
                {"id": "pmjay", "name": "Ayushman Bharat", "category": "health", "benefit_amount": "500000"},
                {"id": "kcc", "name": "Kisan Credit Card", "category": "agriculture"}
            ],
            "total_benefit": "506000"
        }"#;
        let result: MatchResult = serde_json::from_str(json).unwrap();
        let grouped = result.by_category();

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["agriculture"].len(), 2);
        assert_eq!(grouped["health"][0].id, "pmjay");
        assert_eq!(result.total_benefit, dec!(506000));
    }
}
