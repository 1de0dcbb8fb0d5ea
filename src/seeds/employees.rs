//! Employee and employee note seeding

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::fixtures::{
    DEPARTMENT_WEIGHTS, DEPARTMENTS, EMPLOYEE_STATUS_WEIGHTS, EMPLOYMENT_TYPE_WEIGHTS,
    FIRST_NAMES, LAST_NAMES, NOTE_TEMPLATES, NOTE_TYPE_WEIGHTS,
};
use super::permissions::STAFF;
use super::sampling::{self, WeightedTable};
use super::{
    SeedContext, SeedOutcome, Seeder, already_seeded, insert_batched, missing_prerequisite,
    table_is_empty,
};
use crate::error::SeedResult;
use crate::models::employee::{self, Entity as Employee};
use crate::models::employee_note::{self, Entity as EmployeeNote};
use crate::models::user::{self, Entity as User};
use crate::repositories::RoleRepository;

/// Hire dates fall within this many years
const HIRE_WINDOW_YEARS: i64 = 8;

/// Annual salary range in whole currency units per employment type
fn salary_range(employment_type: &str) -> (i64, i64) {
    match employment_type {
        "full-time" => (45_000, 120_000),
        "part-time" => (20_000, 45_000),
        "contractor" => (50_000, 140_000),
        "intern" => (18_000, 30_000),
        _ => (30_000, 60_000),
    }
}

fn positions(department: &str) -> &'static [&'static str] {
    DEPARTMENTS
        .iter()
        .find(|(name, _)| *name == department)
        .map(|(_, positions)| *positions)
        .unwrap_or(&["Associate"])
}

/// Splits a display name into first and last name
fn split_name(name: &str) -> (String, String) {
    match name.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (name.to_string(), String::new()),
    }
}

struct EmployeeTables<'a> {
    departments: WeightedTable<'a, &'static str>,
    employment_types: WeightedTable<'a, &'static str>,
    statuses: WeightedTable<'a, &'static str>,
}

impl EmployeeTables<'static> {
    fn load() -> SeedResult<Self> {
        Ok(Self {
            departments: WeightedTable::new("departments", DEPARTMENT_WEIGHTS)?,
            employment_types: WeightedTable::new("employment types", EMPLOYMENT_TYPE_WEIGHTS)?,
            statuses: WeightedTable::new("employee statuses", EMPLOYEE_STATUS_WEIGHTS)?,
        })
    }

    fn employee(
        &self,
        rng: &mut impl Rng,
        number: u32,
        first_name: String,
        last_name: String,
        email: String,
        user_id: Option<i32>,
    ) -> employee::ActiveModel {
        let today = Utc::now().date_naive();
        let department = *self.departments.pick(rng);
        let position = sampling::pick(rng, positions(department)).unwrap_or(&"Associate");
        let employment_type = *self.employment_types.pick(rng);
        let (min, max) = salary_range(employment_type);
        // Linked back-office accounts belong to people who currently work here.
        let status = if user_id.is_some() {
            "active"
        } else {
            *self.statuses.pick(rng)
        };

        employee::ActiveModel {
            user_id: Set(user_id),
            employee_number: Set(format!("EMP-{number:05}")),
            first_name: Set(first_name),
            last_name: Set(last_name),
            email: Set(email),
            department: Set(department.to_string()),
            position: Set(position.to_string()),
            employment_type: Set(employment_type.to_string()),
            hired_on: Set(sampling::random_date_between(
                rng,
                today - Duration::days(HIRE_WINDOW_YEARS * 365),
                today,
            )),
            salary_cents: Set(rng.gen_range(min..=max) * 100),
            status: Set(status.to_string()),
            ..Default::default()
        }
    }
}

pub struct EmployeeSeeder;

#[async_trait]
impl Seeder for EmployeeSeeder {
    fn name(&self) -> &'static str {
        "employees"
    }

    fn prerequisites(&self) -> &'static [&'static str] {
        &["users"]
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        if !table_is_empty::<Employee>(&ctx.db).await? {
            return Ok(already_seeded("employees"));
        }

        let roles = RoleRepository::new(ctx.db.clone());
        let staff_users = match roles.find_by_name(STAFF).await? {
            Some(role) => {
                let ids = roles.user_ids_with_role(role.id).await?;
                User::find()
                    .filter(user::Column::Id.is_in(ids))
                    .order_by_asc(user::Column::Id)
                    .all(&*ctx.db)
                    .await?
            }
            None => {
                log::warn!(
                    "Role '{}' not found, no users will be linked to employees",
                    STAFF
                );
                Vec::new()
            }
        };

        let tables = EmployeeTables::load()?;
        let extra = ctx.config.employees;

        let rows: Vec<employee::ActiveModel> = ctx.with_rng(|rng| {
            let mut rows = Vec::with_capacity(staff_users.len() + extra as usize);
            let mut number = 0;

            for user in &staff_users {
                number += 1;
                let (first, last) = split_name(&user.name);
                rows.push(tables.employee(
                    rng,
                    number,
                    first,
                    last,
                    user.email.clone(),
                    Some(user.id),
                ));
            }

            for _ in 0..extra {
                number += 1;
                let first = sampling::pick(rng, FIRST_NAMES).unwrap_or(&"Sam");
                let last = sampling::pick(rng, LAST_NAMES).unwrap_or(&"Lee");
                let email = format!(
                    "{}.{}.{}@storefront.test",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    number
                );
                rows.push(tables.employee(
                    rng,
                    number,
                    first.to_string(),
                    last.to_string(),
                    email,
                    None,
                ));
            }
            rows
        });

        log::info!("Linking {} staff users to employee records", staff_users.len());
        let inserted = insert_batched(&*ctx.db, rows).await?;
        Ok(SeedOutcome::seeded(inserted))
    }
}

/// Note body for `note_type` with the employee's first name filled in
fn note_body(rng: &mut impl Rng, note_type: &str, first_name: &str) -> String {
    let templates = NOTE_TEMPLATES
        .iter()
        .find(|(kind, _)| *kind == note_type)
        .map(|(_, templates)| *templates)
        .unwrap_or(&["Note recorded for {name}."]);
    sampling::pick(rng, templates)
        .unwrap_or(&"Note recorded for {name}.")
        .replace("{name}", first_name)
}

pub struct EmployeeNoteSeeder;

#[async_trait]
impl Seeder for EmployeeNoteSeeder {
    fn name(&self) -> &'static str {
        "employee-notes"
    }

    fn prerequisites(&self) -> &'static [&'static str] {
        &["employees"]
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        let employees = Employee::find().all(&*ctx.db).await?;
        if employees.is_empty() {
            return Ok(missing_prerequisite("employees"));
        }
        if !table_is_empty::<EmployeeNote>(&ctx.db).await? {
            return Ok(already_seeded("employee notes"));
        }

        let authors: Vec<i32> = User::find()
            .all(&*ctx.db)
            .await?
            .into_iter()
            .map(|user| user.id)
            .collect();
        let note_types = WeightedTable::new("note types", NOTE_TYPE_WEIGHTS)?;
        let max_notes = ctx.config.notes_per_employee;
        let now = Utc::now();

        let rows: Vec<employee_note::ActiveModel> = ctx.with_rng(|rng| {
            let mut rows = Vec::new();
            if max_notes == 0 {
                return rows;
            }
            for employee in &employees {
                for _ in 0..rng.gen_range(1..=max_notes) {
                    let note_type = *note_types.pick(rng);
                    let is_private = note_type == "disciplinary" || rng.gen_bool(0.2);
                    rows.push(employee_note::ActiveModel {
                        employee_id: Set(employee.id),
                        author_id: Set(sampling::pick(rng, &authors).copied()),
                        note_type: Set(note_type.to_string()),
                        body: Set(note_body(rng, note_type, &employee.first_name)),
                        is_private: Set(is_private),
                        created_at: Set(
                            sampling::random_timestamp_within_days(rng, now, 365).into(),
                        ),
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

    #[test]
    fn weighted_departments_have_positions() {
        for (department, _) in DEPARTMENT_WEIGHTS {
            assert_ne!(positions(department), &["Associate"], "{department}");
        }
    }

    #[test]
    fn split_name_handles_single_word() {
        assert_eq!(split_name("Grace Kim"), ("Grace".into(), "Kim".into()));
        assert_eq!(split_name("Cher"), ("Cher".into(), String::new()));
    }

    #[test]
    fn note_body_fills_in_the_name() {
        let mut rng = StdRng::seed_from_u64(5);
        let body = note_body(&mut rng, "training", "Priya");
        assert!(body.contains("Priya"));
        assert!(!body.contains("{name}"));
    }

    #[test]
    fn linked_users_are_active_with_salary_in_range() {
        let tables = EmployeeTables::load().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let row = tables.employee(
            &mut rng,
            1,
            "Grace".into(),
            "Kim".into(),
            "grace.kim@storefront.test".into(),
            Some(3),
        );

        assert_eq!(row.status.clone().unwrap(), "active");
        assert_eq!(row.employee_number.clone().unwrap(), "EMP-00001");
        let (min, max) = salary_range(&row.employment_type.clone().unwrap());
        let salary = row.salary_cents.clone().unwrap();
        assert!((min * 100..=max * 100).contains(&salary));
    }
}
