//! Rule-based risk scoring, coverage selection and premium estimation.
//!
//! Everything here is a pure function of the [`UserProfile`]. Inputs are not
//! validated: a negative age still lands in the youngest bracket, and the
//! arithmetic is floating point throughout so no count can overflow.

use serde_json::Number;

use crate::types::{
    Coverage, PremiumEstimate, ProfileSummary, Recommendation, RiskAssessment, RiskLevel,
    UserProfile,
};

/// Predicate on a numeric profile field.
#[derive(Debug, Clone, Copy)]
enum Bound {
    Below(f64),
    Above(f64),
}

impl Bound {
    fn matches(self, value: f64) -> bool {
        match self {
            Bound::Below(limit) => value < limit,
            Bound::Above(limit) => value > limit,
        }
    }
}

/// One bracket of a first-match rule table.
#[derive(Debug, Clone, Copy)]
struct Bracket {
    when: Bound,
    points: f64,
}

/// Evaluated top-down; only the first matching bracket scores.
const AGE_BRACKETS: &[Bracket] = &[
    Bracket { when: Bound::Below(25.0), points: 3.0 },
    Bracket { when: Bound::Below(35.0), points: 1.0 },
    Bracket { when: Bound::Above(70.0), points: 2.0 },
];

/// Evaluated top-down; only the first matching bracket scores.
const EXPERIENCE_BRACKETS: &[Bracket] = &[
    Bracket { when: Bound::Below(2.0), points: 2.0 },
    Bracket { when: Bound::Below(5.0), points: 1.0 },
];

/// Mileage above this adds a risk point and a premium surcharge.
const HIGH_MILEAGE_KM: f64 = 30_000.0;
/// Mileage above this adds breakdown assistance.
const BREAKDOWN_MILEAGE_KM: f64 = 20_000.0;
const POINTS_PER_ACCIDENT: f64 = 2.0;
const HIGH_MILEAGE_POINTS: f64 = 1.0;

const LOW_RISK_MAX: f64 = 2.0;
const MEDIUM_RISK_MAX: f64 = 4.0;
const EXTRA_COVERAGE_MIN_SCORE: f64 = 4.0;
const PREMIUM_VEHICLE_VALUE: f64 = 20_000.0;
const HIGHWAY_HABIT: &str = "highway";

const BASE_PREMIUM: f64 = 80.0;
const PREMIUM_PER_RISK_POINT: f64 = 15.0;
const HIGH_MILEAGE_SURCHARGE: f64 = 20.0;

/// Monthly caps keyed by the exact budget label.
const BUDGET_CAPS: &[(&str, f64)] = &[("€50-100", 100.0), ("€100-150", 150.0)];

const NEXT_STEPS: [&str; 4] = [
    "Request a personalized quote from an RGF advisor",
    "Review the policy terms and conditions for each recommended coverage",
    "Prepare your driving license and vehicle registration documents",
    "Compare the estimated premium with your current insurance",
];

fn as_f64(value: &Option<Number>) -> Option<f64> {
    value.as_ref().and_then(Number::as_f64)
}

fn first_match(brackets: &[Bracket], value: &Option<Number>) -> f64 {
    as_f64(value)
        .and_then(|v| brackets.iter().find(|b| b.when.matches(v)))
        .map_or(0.0, |b| b.points)
}

fn exceeds(value: &Option<Number>, limit: f64) -> bool {
    as_f64(value).is_some_and(|v| v > limit)
}

/// Sum of the age, experience, accident and mileage terms.
pub fn risk_score(profile: &UserProfile) -> f64 {
    let mut score = 0.0;

    score += first_match(AGE_BRACKETS, &profile.age);
    score += first_match(EXPERIENCE_BRACKETS, &profile.driving_experience);

    if profile.has_accidents == Some(true) {
        // A missing or zero count counts as one accident.
        let count = match as_f64(&profile.accident_count) {
            Some(n) if n != 0.0 && !n.is_nan() => n,
            _ => 1.0,
        };
        score += POINTS_PER_ACCIDENT * count;
    }

    if exceeds(&profile.annual_mileage, HIGH_MILEAGE_KM) {
        score += HIGH_MILEAGE_POINTS;
    }

    score
}

pub fn risk_level(score: f64) -> RiskLevel {
    if score <= LOW_RISK_MAX {
        RiskLevel::Low
    } else if score <= MEDIUM_RISK_MAX {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

pub fn assess_risk(profile: &UserProfile) -> RiskAssessment {
    let risk_score = risk_score(profile);
    RiskAssessment {
        risk_score,
        risk_level: risk_level(risk_score),
    }
}

fn coverage(name: &str, description: &str, required: bool) -> Coverage {
    Coverage {
        name: name.to_string(),
        description: description.to_string(),
        required,
    }
}

/// Coverages in recommendation order, mandatory liability first.
pub fn select_coverages(profile: &UserProfile, risk_score: f64) -> Vec<Coverage> {
    let mut coverages = vec![coverage(
        "Third-Party Liability",
        "Mandatory coverage for damage and injury caused to others",
        true,
    )];

    if risk_score >= EXTRA_COVERAGE_MIN_SCORE {
        coverages.push(coverage(
            "Comprehensive Coverage",
            "Protection against theft, fire, vandalism and natural events",
            false,
        ));
        coverages.push(coverage(
            "Collision Coverage",
            "Repairs to your own vehicle after an accident, regardless of fault",
            false,
        ));
    }

    if exceeds(&profile.vehicle_value, PREMIUM_VEHICLE_VALUE) {
        coverages.push(coverage(
            "Full Coverage Package",
            "Complete protection recommended for high-value vehicles",
            false,
        ));
        coverages.push(coverage(
            "Roadside Assistance",
            "24/7 towing, jump starts and on-site help",
            false,
        ));
    }

    if exceeds(&profile.annual_mileage, BREAKDOWN_MILEAGE_KM) {
        coverages.push(coverage(
            "Breakdown Assistance",
            "Mechanical breakdown support for high-mileage drivers",
            false,
        ));
    }

    // Exact, case-sensitive match: questionnaire labels such as
    // "Highway (long distances)" do not qualify.
    if profile.driving_habits.as_deref() == Some(HIGHWAY_HABIT) {
        coverages.push(coverage(
            "Extended Coverage",
            "Additional protection for long-distance highway driving",
            false,
        ));
        coverages.push(coverage(
            "Legal Assistance",
            "Legal defense and claims support after road incidents",
            false,
        ));
    }

    coverages
}

/// Uncapped monthly base premium. Absent vehicle value adds nothing.
fn base_premium(profile: &UserProfile, risk_score: f64) -> f64 {
    let mut base = BASE_PREMIUM;
    base += PREMIUM_PER_RISK_POINT * risk_score;
    base += as_f64(&profile.vehicle_value).unwrap_or(0.0) / 1000.0;
    if exceeds(&profile.annual_mileage, HIGH_MILEAGE_KM) {
        base += HIGH_MILEAGE_SURCHARGE;
    }
    base
}

fn apply_budget_cap(base: f64, budget_range: Option<&str>) -> f64 {
    let cap = budget_range.and_then(|label| {
        BUDGET_CAPS
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, cap)| *cap)
    });

    match cap {
        Some(cap) => base.min(cap),
        None => base,
    }
}

/// Round half toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Whole euros, no fractional part. Non-finite amounts print as `Infinity`.
fn format_euros(amount: f64) -> String {
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        format!("{sign}Infinity")
    } else {
        format!("{amount}")
    }
}

/// Monthly and annual premium from the same capped base.
pub fn estimate_premium(profile: &UserProfile, risk_score: f64) -> PremiumEstimate {
    let base = apply_budget_cap(
        base_premium(profile, risk_score),
        profile.budget_range.as_deref(),
    );

    let monthly = round_half_up(base);
    let annual = round_half_up(base * 12.0);

    PremiumEstimate {
        monthly: format!("€{}/month", format_euros(monthly)),
        annual: format!("€{}/year", format_euros(annual)),
    }
}

fn highlights(profile: &UserProfile, risk: &RiskAssessment) -> Vec<String> {
    let vehicle = profile.vehicle_type.as_deref().unwrap_or("your vehicle");
    let habits = profile.driving_habits.as_deref().unwrap_or("your usual");

    vec![
        format!("Coverage tailored for {vehicle}"),
        format!("Optimized for {habits} driving"),
        format!("Risk level assessed as {}", risk.risk_level),
        "Flexible payment options and 24/7 claims support".to_string(),
    ]
}

/// Build the full recommendation for a profile.
pub fn recommend(profile: &UserProfile) -> Recommendation {
    let risk = assess_risk(profile);

    tracing::debug!(
        "Risk assessment: score {} ({})",
        risk.risk_score,
        risk.risk_level
    );

    Recommendation {
        profile_summary: ProfileSummary {
            age: profile.age.clone(),
            driving_experience: profile.driving_experience.clone(),
            vehicle_type: profile.vehicle_type.clone(),
            annual_mileage: profile.annual_mileage.clone(),
            driving_habits: profile.driving_habits.clone(),
            risk_level: risk.risk_level,
            risk_score: risk.risk_score,
        },
        recommended_coverages: select_coverages(profile, risk.risk_score),
        estimated_premium: estimate_premium(profile, risk.risk_score),
        highlights: highlights(profile, &risk),
        next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn profile(answers: Value) -> UserProfile {
        serde_json::from_value(answers).unwrap()
    }

    fn coverage_names(profile: &UserProfile) -> Vec<String> {
        recommend(profile)
            .recommended_coverages
            .into_iter()
            .map(|c| c.name)
            .collect()
    }

    #[test]
    fn test_age_brackets_are_exclusive() {
        let score = |age: f64| risk_score(&profile(json!({ "age": age })));
        assert_eq!(score(24.0), 3.0);
        assert_eq!(score(25.0), 1.0);
        assert_eq!(score(34.0), 1.0);
        assert_eq!(score(35.0), 0.0);
        assert_eq!(score(70.0), 0.0);
        assert_eq!(score(71.0), 2.0);
        assert_eq!(score(-5.0), 3.0);
    }

    #[test]
    fn test_experience_brackets() {
        let score = |years: f64| risk_score(&profile(json!({ "driving_experience": years })));
        assert_eq!(score(0.0), 2.0);
        assert_eq!(score(1.5), 2.0);
        assert_eq!(score(2.0), 1.0);
        assert_eq!(score(4.0), 1.0);
        assert_eq!(score(5.0), 0.0);
    }

    #[test]
    fn test_zero_accident_count_counts_as_one() {
        let p = profile(json!({ "has_accidents": true, "accident_count": 0 }));
        assert_eq!(risk_score(&p), 2.0);
        let p = profile(json!({ "has_accidents": true, "accident_count": 0.0 }));
        assert_eq!(risk_score(&p), 2.0);
    }

    #[test]
    fn test_accident_terms() {
        let with = |answers: Value| risk_score(&profile(answers));
        assert_eq!(with(json!({ "has_accidents": true })), 2.0);
        assert_eq!(with(json!({ "has_accidents": true, "accident_count": 3 })), 6.0);
        assert_eq!(with(json!({ "has_accidents": false, "accident_count": 3 })), 0.0);
        assert_eq!(with(json!({ "accident_count": 3 })), 0.0);
    }

    #[test]
    fn test_float_accident_count_scores() {
        let p = profile(json!({ "has_accidents": true, "accident_count": 2.0 }));
        assert_eq!(risk_score(&p), 4.0);
        let p = profile(json!({ "has_accidents": true, "accident_count": 1.5 }));
        assert_eq!(risk_score(&p), 3.0);
    }

    #[test]
    fn test_huge_accident_count_does_not_overflow() {
        let p = profile(json!({
            "has_accidents": true,
            "accident_count": 5_000_000_000_000_000_000u64
        }));
        let rec = recommend(&p);
        assert_eq!(rec.profile_summary.risk_score, 1e19);
        assert_eq!(rec.profile_summary.risk_level, RiskLevel::High);
        assert!(coverage_names(&p).contains(&"Collision Coverage".to_string()));
        assert!(rec.estimated_premium.monthly.starts_with('€'));
    }

    #[test]
    fn test_mileage_term_strictly_above_threshold() {
        let score = |km: f64| risk_score(&profile(json!({ "annual_mileage": km })));
        assert_eq!(score(30_000.0), 0.0);
        assert_eq!(score(30_001.0), 1.0);
    }

    #[test]
    fn test_empty_profile() {
        let rec = recommend(&UserProfile::default());
        assert_eq!(rec.profile_summary.risk_score, 0.0);
        assert_eq!(rec.profile_summary.risk_level, RiskLevel::Low);
        assert_eq!(rec.recommended_coverages.len(), 1);
        assert!(rec.recommended_coverages[0].required);
        assert_eq!(rec.estimated_premium.monthly, "€80/month");
        assert_eq!(rec.estimated_premium.annual, "€960/year");
        assert_eq!(rec.highlights[0], "Coverage tailored for your vehicle");
        assert_eq!(rec.highlights[1], "Optimized for your usual driving");
        assert_eq!(rec.next_steps.len(), 4);
    }

    #[test]
    fn test_risk_levels() {
        assert_eq!(risk_level(0.0), RiskLevel::Low);
        assert_eq!(risk_level(2.0), RiskLevel::Low);
        assert_eq!(risk_level(3.0), RiskLevel::Medium);
        assert_eq!(risk_level(4.0), RiskLevel::Medium);
        assert_eq!(risk_level(4.5), RiskLevel::High);
        assert_eq!(risk_level(5.0), RiskLevel::High);
    }

    #[test]
    fn test_highway_match_is_exact() {
        let habits = |h: &str| profile(json!({ "driving_habits": h }));
        let names = coverage_names(&habits("highway"));
        assert!(names.contains(&"Extended Coverage".to_string()));
        assert!(names.contains(&"Legal Assistance".to_string()));

        for label in ["Highway", "Highway (long distances)", "highway "] {
            let names = coverage_names(&habits(label));
            assert!(!names.contains(&"Extended Coverage".to_string()), "{label}");
            assert!(!names.contains(&"Legal Assistance".to_string()), "{label}");
        }
    }

    #[test]
    fn test_coverage_order_and_thresholds() {
        let p = profile(json!({
            "age": 22,
            "driving_experience": 1,
            "vehicle_value": 25_000,
            "annual_mileage": 25_000,
            "driving_habits": "highway"
        }));
        assert_eq!(
            coverage_names(&p),
            vec![
                "Third-Party Liability",
                "Comprehensive Coverage",
                "Collision Coverage",
                "Full Coverage Package",
                "Roadside Assistance",
                "Breakdown Assistance",
                "Extended Coverage",
                "Legal Assistance",
            ]
        );
    }

    #[test]
    fn test_breakdown_threshold_differs_from_risk_threshold() {
        let p = profile(json!({ "annual_mileage": 25_000 }));
        assert_eq!(risk_score(&p), 0.0);
        assert!(coverage_names(&p).contains(&"Breakdown Assistance".to_string()));
    }

    #[test]
    fn test_budget_cap_applies() {
        // Score 3 + 2 = 5: base = 80 + 75 + 30 = 185.
        let with_budget = |label: &str| {
            profile(json!({
                "age": 24,
                "driving_experience": 1,
                "vehicle_value": 30_000,
                "budget_range": label
            }))
        };
        let premium = recommend(&with_budget("€50-100")).estimated_premium;
        assert_eq!(premium.monthly, "€100/month");
        assert_eq!(premium.annual, "€1200/year");

        assert_eq!(
            recommend(&with_budget("€100-150")).estimated_premium.monthly,
            "€150/month"
        );

        for label in ["€150-200", "€200+", "cheap"] {
            assert_eq!(
                recommend(&with_budget(label)).estimated_premium.monthly,
                "€185/month"
            );
        }
    }

    #[test]
    fn test_cap_does_not_raise_low_premium() {
        let p = profile(json!({ "budget_range": "€100-150" }));
        assert_eq!(recommend(&p).estimated_premium.monthly, "€80/month");
    }

    #[test]
    fn test_annual_uses_unrounded_base() {
        // base = 80 + 5.5 = 85.5 -> monthly 86, annual round(1026) = 1026
        let premium = recommend(&profile(json!({ "vehicle_value": 5_500 }))).estimated_premium;
        assert_eq!(premium.monthly, "€86/month");
        assert_eq!(premium.annual, "€1026/year");

        // base = 80.4 -> monthly 80, annual round(964.8) = 965
        let premium = recommend(&profile(json!({ "vehicle_value": 400 }))).estimated_premium;
        assert_eq!(premium.monthly, "€80/month");
        assert_eq!(premium.annual, "€965/year");
    }

    #[test]
    fn test_high_mileage_surcharge() {
        let p = profile(json!({ "annual_mileage": 40_000 }));
        // 80 + 15 * 1 + 20
        assert_eq!(recommend(&p).estimated_premium.monthly, "€115/month");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn test_format_euros() {
        assert_eq!(format_euros(115.0), "115");
        assert_eq!(format_euros(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_summary_passes_fields_through() {
        let p = profile(json!({
            "age": 40,
            "vehicle_type": "SUV",
            "budget_range": "€200+"
        }));
        let rec = recommend(&p);
        let json = serde_json::to_value(&rec.profile_summary).unwrap();
        assert_eq!(json["age"], 40);
        assert_eq!(json["vehicleType"], "SUV");
        assert!(json.get("drivingExperience").is_none());
        assert!(json.get("budgetRange").is_none());
        assert_eq!(json["riskLevel"], "Low");
        assert_eq!(rec.highlights[0], "Coverage tailored for SUV");
    }

    #[test]
    fn test_summary_keeps_number_representation() {
        let p = profile(json!({ "age": 30, "annual_mileage": 12000, "driving_experience": 7.5 }));
        let text = serde_json::to_string_pretty(&recommend(&p).profile_summary).unwrap();
        assert!(text.contains("\"age\": 30,"), "{text}");
        assert!(text.contains("\"annualMileage\": 12000,"), "{text}");
        assert!(text.contains("\"drivingExperience\": 7.5,"), "{text}");
        assert!(text.contains("\"riskScore\": 1\n"), "{text}");
    }
}
