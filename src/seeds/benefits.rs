//! Employee benefit seeding and cost calculators
//!
//! Monthly cost = base cost for the benefit type × coverage multiplier, except
//! for retirement (a share of monthly salary), life and disability, which are
//! priced per employee. The employer pays a fixed percentage per benefit type
//! and the employee pays the remainder, so the two shares always add up to
//! the monthly cost.

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use rand::seq::SliceRandom;
use sea_orm::{EntityTrait, Set};

use super::sampling::{self, WeightedTable};
use super::{
    SeedContext, SeedOutcome, Seeder, already_seeded, insert_batched, missing_prerequisite,
    table_is_empty,
};
use crate::error::SeedResult;
use crate::models::employee::Entity as Employee;
use crate::models::employee_benefit::{self, Entity as EmployeeBenefit};

/// Retirement contribution as a percentage of monthly salary
const RETIREMENT_SALARY_PERCENT: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenefitType {
    Health,
    Dental,
    Vision,
    Life,
    Retirement,
    Disability,
}

impl BenefitType {
    pub const ALL: [BenefitType; 6] = [
        BenefitType::Health,
        BenefitType::Dental,
        BenefitType::Vision,
        BenefitType::Life,
        BenefitType::Retirement,
        BenefitType::Disability,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BenefitType::Health => "health",
            BenefitType::Dental => "dental",
            BenefitType::Vision => "vision",
            BenefitType::Life => "life",
            BenefitType::Retirement => "retirement",
            BenefitType::Disability => "disability",
        }
    }

    /// Monthly cost in cents for employee-only coverage
    fn base_monthly_cents(self) -> i64 {
        match self {
            BenefitType::Health => 45_000,
            BenefitType::Dental => 4_500,
            BenefitType::Vision => 1_500,
            BenefitType::Life => 2_500,
            BenefitType::Retirement => 0,
            BenefitType::Disability => 3_500,
        }
    }

    /// Share of the monthly cost paid by the employer
    pub fn employer_percent(self) -> i64 {
        match self {
            BenefitType::Health => 80,
            BenefitType::Dental => 70,
            BenefitType::Vision => 60,
            BenefitType::Life => 100,
            BenefitType::Retirement => 50,
            BenefitType::Disability => 100,
        }
    }

    /// Whether dependants change the price
    pub fn uses_coverage_multiplier(self) -> bool {
        matches!(
            self,
            BenefitType::Health | BenefitType::Dental | BenefitType::Vision
        )
    }

    fn providers(self) -> &'static [&'static str] {
        match self {
            BenefitType::Health => &["BlueCross BlueShield", "Aetna", "UnitedHealthcare"],
            BenefitType::Dental => &["Delta Dental", "MetLife Dental"],
            BenefitType::Vision => &["VSP", "EyeMed"],
            BenefitType::Life => &["MetLife", "Prudential"],
            BenefitType::Retirement => &["Fidelity", "Vanguard"],
            BenefitType::Disability => &["Guardian", "Unum"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverageLevel {
    EmployeeOnly,
    EmployeeSpouse,
    EmployeeChildren,
    Family,
}

impl CoverageLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            CoverageLevel::EmployeeOnly => "employee_only",
            CoverageLevel::EmployeeSpouse => "employee_spouse",
            CoverageLevel::EmployeeChildren => "employee_children",
            CoverageLevel::Family => "family",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            CoverageLevel::EmployeeOnly => 1.0,
            CoverageLevel::EmployeeSpouse => 2.0,
            CoverageLevel::EmployeeChildren => 1.8,
            CoverageLevel::Family => 2.8,
        }
    }
}

pub const COVERAGE_WEIGHTS: &[(CoverageLevel, u32)] = &[
    (CoverageLevel::EmployeeOnly, 40),
    (CoverageLevel::EmployeeSpouse, 20),
    (CoverageLevel::EmployeeChildren, 15),
    (CoverageLevel::Family, 25),
];

pub const BENEFIT_STATUS_WEIGHTS: &[(&str, u32)] = &[
    ("active", 75),
    ("pending", 10),
    ("suspended", 5),
    ("terminated", 10),
];

/// A monthly benefit cost and how it is shared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenefitCost {
    pub monthly_cost_cents: i64,
    pub employer_contribution_cents: i64,
    pub employee_contribution_cents: i64,
}

/// Monthly cost in cents of `benefit` at `coverage` for an employee earning
/// `annual_salary_cents`.
pub fn monthly_cost_cents(
    benefit: BenefitType,
    coverage: CoverageLevel,
    annual_salary_cents: i64,
) -> i64 {
    if benefit == BenefitType::Retirement {
        return annual_salary_cents / 12 * RETIREMENT_SALARY_PERCENT / 100;
    }
    let base = benefit.base_monthly_cents();
    if benefit.uses_coverage_multiplier() {
        (base as f64 * coverage.multiplier()).round() as i64
    } else {
        base
    }
}

/// Splits a monthly cost between employer and employee.
pub fn split_cost(benefit: BenefitType, monthly_cost_cents: i64) -> BenefitCost {
    let employer = monthly_cost_cents * benefit.employer_percent() / 100;
    BenefitCost {
        monthly_cost_cents,
        employer_contribution_cents: employer,
        employee_contribution_cents: monthly_cost_cents - employer,
    }
}

pub fn calculate_cost(
    benefit: BenefitType,
    coverage: CoverageLevel,
    annual_salary_cents: i64,
) -> BenefitCost {
    split_cost(
        benefit,
        monthly_cost_cents(benefit, coverage, annual_salary_cents),
    )
}

pub struct EmployeeBenefitSeeder;

#[async_trait]
impl Seeder for EmployeeBenefitSeeder {
    fn name(&self) -> &'static str {
        "employee-benefits"
    }

    fn prerequisites(&self) -> &'static [&'static str] {
        &["employees"]
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        let employees = Employee::find().all(&*ctx.db).await?;
        if employees.is_empty() {
            return Ok(missing_prerequisite("employees"));
        }
        if !table_is_empty::<EmployeeBenefit>(&ctx.db).await? {
            return Ok(already_seeded("employee benefits"));
        }

        let coverage_levels = WeightedTable::new("coverage levels", COVERAGE_WEIGHTS)?;
        let statuses = WeightedTable::new("benefit statuses", BENEFIT_STATUS_WEIGHTS)?;
        let today = Utc::now().date_naive();

        let rows: Vec<employee_benefit::ActiveModel> = ctx.with_rng(|rng| {
            let mut rows = Vec::new();
            for employee in &employees {
                let enrolled = rng.gen_range(2..=4);
                for benefit in BenefitType::ALL.choose_multiple(rng, enrolled) {
                    let benefit = *benefit;
                    let coverage = if benefit.uses_coverage_multiplier() {
                        *coverage_levels.pick(rng)
                    } else {
                        CoverageLevel::EmployeeOnly
                    };
                    let cost = calculate_cost(benefit, coverage, employee.salary_cents);
                    let status = *statuses.pick(rng);
                    let starts_on = sampling::random_date_between(rng, employee.hired_on, today);
                    let ends_on = (status == "terminated")
                        .then(|| sampling::random_date_between(rng, starts_on, today));

                    rows.push(employee_benefit::ActiveModel {
                        employee_id: Set(employee.id),
                        benefit_type: Set(benefit.as_str().to_string()),
                        provider_name: Set(sampling::pick(rng, benefit.providers())
                            .unwrap_or(&"Unassigned")
                            .to_string()),
                        coverage_level: Set(coverage.as_str().to_string()),
                        status: Set(status.to_string()),
                        monthly_cost_cents: Set(cost.monthly_cost_cents),
                        employer_contribution_cents: Set(cost.employer_contribution_cents),
                        employee_contribution_cents: Set(cost.employee_contribution_cents),
                        starts_on: Set(starts_on),
                        ends_on: Set(ends_on),
                        ..Default::default()
                    });
                }
            }
            rows
        });

        let inserted = insert_batched(&*ctx.db, rows).await?;
        Ok(SeedOutcome::seeded(inserted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn shares_always_sum_to_the_monthly_cost() {
        for benefit in BenefitType::ALL {
            for (coverage, _) in COVERAGE_WEIGHTS {
                for salary in [0, 1_850_000, 5_250_099, 14_000_000] {
                    let cost = calculate_cost(benefit, *coverage, salary);
                    assert_eq!(
                        cost.employer_contribution_cents + cost.employee_contribution_cents,
                        cost.monthly_cost_cents,
                        "{benefit:?} {coverage:?} {salary}"
                    );
                    assert!(cost.employee_contribution_cents >= 0);
                }
            }
        }
    }

    #[test]
    fn coverage_multiplier_applies_to_medical_benefits_only() {
        assert_eq!(
            monthly_cost_cents(BenefitType::Health, CoverageLevel::Family, 0),
            126_000
        );
        assert_eq!(
            monthly_cost_cents(BenefitType::Vision, CoverageLevel::EmployeeChildren, 0),
            2_700
        );
        assert_eq!(
            monthly_cost_cents(BenefitType::Life, CoverageLevel::Family, 0),
            2_500
        );
    }

    #[test]
    fn retirement_is_a_share_of_salary() {
        // 60,000.00 a year is 5,000.00 a month; 5% of that is 250.00
        assert_eq!(
            monthly_cost_cents(BenefitType::Retirement, CoverageLevel::Family, 6_000_000),
            25_000
        );
        let cost = split_cost(BenefitType::Retirement, 25_000);
        assert_eq!(cost.employer_contribution_cents, 12_500);
    }

    #[test]
    fn random_coverage_levels_follow_weights() {
        let table = WeightedTable::new("coverage", COVERAGE_WEIGHTS).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let samples = 50_000;

        let mut counts: HashMap<CoverageLevel, u32> = HashMap::new();
        for _ in 0..samples {
            *counts.entry(*table.pick(&mut rng)).or_default() += 1;
        }

        for (level, weight) in COVERAGE_WEIGHTS {
            let expected = *weight as f64 / 100.0;
            let observed = counts[level] as f64 / samples as f64;
            assert!((observed - expected).abs() < 0.015, "{level:?}: {observed:.3}");
        }
    }

    #[test]
    fn random_statuses_follow_weights() {
        let table = WeightedTable::new("statuses", BENEFIT_STATUS_WEIGHTS).unwrap();
        let mut rng = StdRng::seed_from_u64(77);
        let samples = 50_000;

        let active = (0..samples)
            .filter(|_| *table.pick(&mut rng) == "active")
            .count();
        let observed = active as f64 / samples as f64;
        assert!((observed - 0.75).abs() < 0.015, "{observed:.3}");
    }
}
