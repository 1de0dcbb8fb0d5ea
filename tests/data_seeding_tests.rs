//! Tests for the sample-data seeders: prerequisite handling, full runs,
//! idempotence and the invariants the generated rows must satisfy.

use std::collections::HashMap;

use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};
use seeders::error::SeedError;
use seeders::models::{
    Address, Customer, CustomerPreference, Employee, EmployeeBenefit, EmployeeNote, Order,
    OrderItem, Product, Provider, ProviderContract, User, UserRole, address, employee,
    provider_contract, user,
};
use seeders::repositories::RoleRepository;
use seeders::seeds::benefits::{EmployeeBenefitSeeder, calculate_cost};
use seeders::seeds::customers::AddressSeeder;
use seeders::seeds::employees::EmployeeNoteSeeder;
use seeders::seeds::orders::{OrderSeeder, tax_cents};
use seeders::seeds::preferences::CustomerPreferenceSeeder;
use seeders::seeds::providers::{
    ProviderContractSeeder, ProviderSeeder, insert_contracts_atomically,
};
use seeders::seeds::roles::RoleSeeder;
use seeders::seeds::users::UserSeeder;
use seeders::seeds::{Seeder, default_seeders, run_seeders, select_seeders};

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::{count, insert_customer, setup_test_context, test_seed_config};

#[tokio::test]
async fn dependents_skip_when_prerequisites_are_empty() -> Result<()> {
    let ctx = setup_test_context().await?;

    let dependents: Vec<Box<dyn Seeder>> = vec![
        Box::new(AddressSeeder),
        Box::new(CustomerPreferenceSeeder),
        Box::new(ProviderContractSeeder),
        Box::new(EmployeeNoteSeeder),
        Box::new(EmployeeBenefitSeeder),
        Box::new(OrderSeeder),
    ];
    let report = run_seeders(&ctx, &dependents).await?;

    assert_eq!(report.entries.len(), dependents.len());
    assert!(report.entries.iter().all(|entry| entry.outcome.is_skipped()));
    assert_eq!(report.total_inserted(), 0);
    assert_eq!(count::<Address>(&ctx.db).await?, 0);
    assert_eq!(count::<Order>(&ctx.db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn full_run_populates_every_table() -> Result<()> {
    let ctx = setup_test_context().await?;
    let config = test_seed_config();

    let report = run_seeders(&ctx, &default_seeders()).await?;
    assert!(report.skipped().next().is_none());

    assert_eq!(count::<Customer>(&ctx.db).await?, u64::from(config.customers));
    assert_eq!(count::<Product>(&ctx.db).await?, u64::from(config.products));
    assert_eq!(count::<Order>(&ctx.db).await?, u64::from(config.orders));
    assert!(count::<OrderItem>(&ctx.db).await? >= u64::from(config.orders));
    assert!(count::<ProviderContract>(&ctx.db).await? >= count::<Provider>(&ctx.db).await?);
    assert!(count::<EmployeeNote>(&ctx.db).await? >= count::<Employee>(&ctx.db).await?);
    assert!(count::<EmployeeBenefit>(&ctx.db).await? >= 2 * count::<Employee>(&ctx.db).await?);
    assert!(count::<CustomerPreference>(&ctx.db).await? > 0);

    // Staff users are linked to employee records on top of the generated ones
    let linked = Employee::find()
        .filter(employee::Column::UserId.is_not_null())
        .all(&*ctx.db)
        .await?;
    assert_eq!(linked.len(), 4);
    assert!(linked.iter().all(|e| e.status == "active"));
    assert_eq!(
        count::<Employee>(&ctx.db).await?,
        u64::from(config.employees) + 4
    );
    Ok(())
}

#[tokio::test]
async fn second_run_inserts_nothing() -> Result<()> {
    let ctx = setup_test_context().await?;
    run_seeders(&ctx, &default_seeders()).await?;

    let users = count::<User>(&ctx.db).await?;
    let orders = count::<Order>(&ctx.db).await?;
    let contracts = count::<ProviderContract>(&ctx.db).await?;

    let report = run_seeders(&ctx, &default_seeders()).await?;
    assert_eq!(report.total_inserted(), 0);
    assert!(
        report
            .outcome("orders")
            .is_some_and(|outcome| outcome.is_skipped())
    );
    assert_eq!(count::<User>(&ctx.db).await?, users);
    assert_eq!(count::<Order>(&ctx.db).await?, orders);
    assert_eq!(count::<ProviderContract>(&ctx.db).await?, contracts);
    Ok(())
}

#[tokio::test]
async fn order_totals_match_their_items() -> Result<()> {
    let ctx = setup_test_context().await?;
    let only: Vec<String> = ["categories", "brands", "products", "customers", "orders"]
        .iter()
        .map(|name| name.to_string())
        .collect();
    run_seeders(&ctx, &select_seeders(&only)?).await?;

    let mut items_by_order: HashMap<i32, Vec<_>> = HashMap::new();
    for item in OrderItem::find().all(&*ctx.db).await? {
        items_by_order.entry(item.order_id).or_default().push(item);
    }

    let max_items = test_seed_config().max_items_per_order as usize;
    for order in Order::find().all(&*ctx.db).await? {
        let items = items_by_order
            .get(&order.id)
            .unwrap_or_else(|| panic!("{} has no items", order.order_number));
        assert!((1..=max_items).contains(&items.len()));

        let subtotal: i64 = items.iter().map(|item| item.line_total_cents).sum();
        for item in items {
            assert_eq!(
                item.line_total_cents,
                item.unit_price_cents * i64::from(item.quantity)
            );
        }
        assert_eq!(order.subtotal_cents, subtotal);
        assert_eq!(order.tax_cents, tax_cents(subtotal));
        assert_eq!(order.total_cents, order.subtotal_cents + order.tax_cents);
        assert!(order.order_number.starts_with("ORD-"));
    }
    Ok(())
}

#[tokio::test]
async fn every_customer_gets_exactly_one_default_address() -> Result<()> {
    let ctx = setup_test_context().await?;
    for n in 0..5 {
        insert_customer(&ctx.db, &format!("customer{n}@example.test")).await?;
    }
    AddressSeeder.run(&ctx).await?;

    let defaults = Address::find()
        .filter(address::Column::IsDefault.eq(true))
        .all(&*ctx.db)
        .await?;
    let mut per_customer: HashMap<i32, usize> = HashMap::new();
    for address in &defaults {
        *per_customer.entry(address.customer_id).or_default() += 1;
        assert_eq!(address.kind, "shipping");
    }
    assert_eq!(per_customer.len(), 5);
    assert!(per_customer.values().all(|&n| n == 1));
    Ok(())
}

#[tokio::test]
async fn benefit_contributions_add_up() -> Result<()> {
    let ctx = setup_test_context().await?;
    let only = vec!["users".to_string(), "employees".to_string(), "employee-benefits".to_string()];
    run_seeders(&ctx, &select_seeders(&only)?).await?;

    let benefits = EmployeeBenefit::find().all(&*ctx.db).await?;
    assert!(!benefits.is_empty());
    for benefit in benefits {
        assert_eq!(
            benefit.employer_contribution_cents + benefit.employee_contribution_cents,
            benefit.monthly_cost_cents
        );
        if benefit.status == "terminated" {
            assert!(benefit.ends_on.is_some());
        }
    }

    // Calculator is the single source of the stored figures
    let cost = calculate_cost(
        seeders::seeds::benefits::BenefitType::Health,
        seeders::seeds::benefits::CoverageLevel::EmployeeOnly,
        0,
    );
    assert_eq!(cost.monthly_cost_cents, 45_000);
    Ok(())
}

#[tokio::test]
async fn contract_batch_is_all_or_nothing() -> Result<()> {
    let ctx = setup_test_context().await?;
    ProviderSeeder.run(&ctx).await?;
    let provider = Provider::find().one(&*ctx.db).await?.expect("provider seeded");

    let today = Utc::now().date_naive();
    let contract = |number: String| provider_contract::ActiveModel {
        provider_id: Set(provider.id),
        contract_number: Set(number),
        starts_on: Set(today),
        ends_on: Set(today + Duration::days(365)),
        value_cents: Set(1_000_000),
        payment_terms: Set("net-30".to_string()),
        status: Set("active".to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    // The duplicate lands in the second batch, after the first was written
    let mut rows: Vec<_> = (0..150)
        .map(|n| contract(format!("PC-TEST-{n:04}")))
        .collect();
    rows.push(contract("PC-TEST-0001".to_string()));

    let result = insert_contracts_atomically(&ctx.db, rows).await;
    assert!(matches!(result, Err(SeedError::Database(_))));
    assert_eq!(count::<ProviderContract>(&ctx.db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn contract_status_matches_dates() -> Result<()> {
    let ctx = setup_test_context().await?;
    ProviderSeeder.run(&ctx).await?;
    ProviderContractSeeder.run(&ctx).await?;

    let today = Utc::now().date_naive();
    let contracts = ProviderContract::find().all(&*ctx.db).await?;
    assert!(!contracts.is_empty());
    for contract in contracts {
        assert!(contract.ends_on > contract.starts_on);
        let expected = if today < contract.starts_on {
            "pending"
        } else if today > contract.ends_on {
            "expired"
        } else {
            "active"
        };
        assert_eq!(contract.status, expected, "{}", contract.contract_number);
        assert!(contract.starts_on >= NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }
    Ok(())
}

#[tokio::test]
async fn users_without_roles_are_created_unassigned() -> Result<()> {
    let ctx = setup_test_context().await?;

    let outcome = UserSeeder.run(&ctx).await?;
    assert_eq!(outcome.inserted(), 6);
    assert_eq!(count::<User>(&ctx.db).await?, 6);
    assert_eq!(count::<UserRole>(&ctx.db).await?, 0);

    RoleSeeder.run(&ctx).await?;
    let outcome = UserSeeder.run(&ctx).await?;
    // Users already exist; only the six role assignments are new
    assert_eq!(outcome.inserted(), 6);
    assert_eq!(count::<User>(&ctx.db).await?, 6);
    assert_eq!(count::<UserRole>(&ctx.db).await?, 6);

    let roles = RoleRepository::new(ctx.db.clone());
    let owner = User::find()
        .filter(user::Column::Email.eq("owner@storefront.test"))
        .one(&*ctx.db)
        .await?
        .expect("owner seeded");
    let owner_roles: Vec<String> = roles.role_names_for_user(owner.id).await?.into_iter().collect();
    assert_eq!(owner_roles, ["super-admin"]);

    let staff = roles.find_by_name("staff").await?.expect("staff role");
    assert_eq!(roles.user_ids_with_role(staff.id).await?.len(), 4);

    // A third pass assigns nothing twice
    assert_eq!(UserSeeder.run(&ctx).await?.inserted(), 0);
    assert_eq!(count::<UserRole>(&ctx.db).await?, 6);
    Ok(())
}
