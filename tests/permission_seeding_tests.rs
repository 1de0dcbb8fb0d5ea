//! Tests for the RBAC permission matrices: idempotence, sync versus give
//! semantics and handling of roles owned by the core role seeder.

use std::collections::{BTreeSet, HashMap};

use anyhow::Result;
use seeders::models::{Permission, Role, RolePermission};
use seeders::repositories::{PermissionRepository, RoleRepository};
use seeders::seeds::permissions::{
    ADMIN, Assignment, MATRICES, PermissionSeeder, SUPER_ADMIN, address,
};
use seeders::seeds::roles::RoleSeeder;
use seeders::seeds::{Seeder, run_seeders};

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::{count, insert_role, setup_test_context};

fn names(set: &[&str]) -> BTreeSet<String> {
    set.iter().map(|name| name.to_string()).collect()
}

#[tokio::test]
async fn address_matrix_creates_its_permissions_and_roles() -> Result<()> {
    let ctx = setup_test_context().await?;
    RoleSeeder.run(&ctx).await?;
    PermissionSeeder::new(&address::MATRIX).run(&ctx).await?;

    let permissions = PermissionRepository::new(ctx.db.clone());
    let stored = permissions.list_for_noun("address").await?;
    assert_eq!(stored.len(), 24);
    assert!(stored.iter().all(|p| p.guard_name == "web"));

    let roles = RoleRepository::new(ctx.db.clone());
    let manager = roles.find_by_name("address-manager").await?.expect("manager role");
    let granted = roles.permission_names(manager.id).await?;
    assert_eq!(granted.len(), 21);
    assert!(!granted.contains("address.force-delete"));
    assert!(!granted.contains("address.bulk-delete"));
    assert!(!granted.contains("address.merge"));

    let admin = roles.find_by_name(ADMIN).await?.expect("admin role");
    let admin_granted = roles.permission_names(admin.id).await?;
    assert_eq!(admin_granted.len(), 23);
    assert!(!admin_granted.contains("address.force-delete"));

    let super_admin = roles.find_by_name(SUPER_ADMIN).await?.expect("super-admin role");
    assert_eq!(roles.permission_names(super_admin.id).await?.len(), 24);
    Ok(())
}

#[tokio::test]
async fn rerunning_matrices_changes_nothing() -> Result<()> {
    let ctx = setup_test_context().await?;
    let mut seeders: Vec<Box<dyn Seeder>> = vec![Box::new(RoleSeeder)];
    seeders.extend(seeders::seeds::permissions::permission_seeders());

    run_seeders(&ctx, &seeders).await?;
    let permissions = count::<Permission>(&ctx.db).await?;
    let roles = count::<Role>(&ctx.db).await?;
    let links = count::<RolePermission>(&ctx.db).await?;

    let report = run_seeders(&ctx, &seeders).await?;
    assert_eq!(report.total_inserted(), 0);
    assert_eq!(count::<Permission>(&ctx.db).await?, permissions);
    assert_eq!(count::<Role>(&ctx.db).await?, roles);
    assert_eq!(count::<RolePermission>(&ctx.db).await?, links);

    let declared: usize = MATRICES.iter().map(|m| m.permissions.len()).sum();
    assert_eq!(permissions as usize, declared);

    let repo = RoleRepository::new(ctx.db.clone());
    let manager = repo.find_by_name("address-manager").await?.expect("manager role");
    assert_eq!(repo.permission_names(manager.id).await?.len(), 21);
    Ok(())
}

#[tokio::test]
async fn sync_replaces_hand_attached_permissions() -> Result<()> {
    let ctx = setup_test_context().await?;
    RoleSeeder.run(&ctx).await?;
    let matrix = PermissionSeeder::new(&address::MATRIX);
    matrix.run(&ctx).await?;

    let roles = RoleRepository::new(ctx.db.clone());
    let permissions = PermissionRepository::new(ctx.db.clone());
    let viewer = roles.find_by_name("address-viewer").await?.expect("viewer role");
    let manager = roles.find_by_name("address-manager").await?.expect("manager role");
    let (stray, _) = permissions.first_or_create("address.merge").await?;

    roles.give_permissions(viewer.id, &[stray.id]).await?;
    roles.give_permissions(manager.id, &[stray.id]).await?;
    assert!(roles.permission_names(viewer.id).await?.contains("address.merge"));

    matrix.run(&ctx).await?;

    // Synced role is back to exactly its declared subset
    let declared = address::MATRIX
        .roles
        .iter()
        .find(|grant| grant.role == "address-viewer")
        .map(|grant| address::MATRIX.permissions_for(grant))
        .expect("viewer grant");
    assert_eq!(roles.permission_names(viewer.id).await?, names(&declared));

    // Given role keeps what it was handed elsewhere
    let manager_granted = roles.permission_names(manager.id).await?;
    assert_eq!(manager_granted.len(), 22);
    assert!(manager_granted.contains("address.merge"));
    Ok(())
}

#[tokio::test]
async fn missing_super_admin_is_skipped_then_applied_once_present() -> Result<()> {
    let ctx = setup_test_context().await?;
    let summary = address::MATRIX.apply(&ctx).await?;

    assert!(summary.roles_skipped.contains(&SUPER_ADMIN));
    assert!(summary.roles_skipped.contains(&ADMIN));
    let roles = RoleRepository::new(ctx.db.clone());
    assert!(roles.find_by_name(SUPER_ADMIN).await?.is_none());
    assert!(roles.find_by_name("address-manager").await?.is_some());

    let super_admin = insert_role(&ctx.db, SUPER_ADMIN).await?;
    let summary = address::MATRIX.apply(&ctx).await?;
    assert!(!summary.roles_skipped.contains(&SUPER_ADMIN));
    assert_eq!(summary.permissions_created, 0);
    assert_eq!(roles.permission_names(super_admin.id).await?.len(), 24);
    Ok(())
}

#[test]
fn synced_roles_are_owned_by_a_single_matrix() {
    let mut owners: HashMap<&str, &str> = HashMap::new();
    for matrix in MATRICES {
        for role in matrix.synced_roles() {
            if let Some(previous) = owners.insert(role, matrix.noun) {
                panic!("{role} is synced by both {previous} and {}", matrix.noun);
            }
        }
    }
}

#[tokio::test]
async fn every_synced_role_ends_with_its_declared_set() -> Result<()> {
    let ctx = setup_test_context().await?;
    let mut seeders: Vec<Box<dyn Seeder>> = vec![Box::new(RoleSeeder)];
    seeders.extend(seeders::seeds::permissions::permission_seeders());
    run_seeders(&ctx, &seeders).await?;

    let roles = RoleRepository::new(ctx.db.clone());
    for matrix in MATRICES {
        for grant in matrix.roles {
            let role = roles
                .find_by_name(grant.role)
                .await?
                .unwrap_or_else(|| panic!("role {} missing", grant.role));
            let granted = roles.permission_names(role.id).await?;
            let declared = names(&matrix.permissions_for(grant));

            match grant.assignment {
                Assignment::Sync => assert_eq!(granted, declared, "{}", grant.role),
                Assignment::Give => assert!(
                    granted.is_superset(&declared),
                    "{} lacks part of its {} subset",
                    grant.role,
                    matrix.noun
                ),
            }
        }
    }
    Ok(())
}

#[tokio::test]
async fn sync_writes_only_the_difference() -> Result<()> {
    let ctx = setup_test_context().await?;
    let permissions = PermissionRepository::new(ctx.db.clone());
    let roles = RoleRepository::new(ctx.db.clone());

    let mut ids = Vec::new();
    for name in ["address.view", "address.view-any", "address.export"] {
        ids.push(permissions.first_or_create(name).await?.0.id);
    }
    let role = insert_role(&ctx.db, "address-auditor").await?;

    assert_eq!(roles.sync_permissions(role.id, &ids[..2]).await?, 2);
    assert_eq!(roles.sync_permissions(role.id, &ids[..2]).await?, 0);

    // Swapping one permission inserts one link and drops the stale one
    assert_eq!(roles.sync_permissions(role.id, &ids[1..]).await?, 1);
    assert_eq!(
        roles.permission_names(role.id).await?,
        names(&["address.view-any", "address.export"])
    );
    assert_eq!(count::<RolePermission>(&ctx.db).await?, 2);

    assert_eq!(roles.sync_permissions(role.id, &[]).await?, 0);
    assert!(roles.permission_names(role.id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn rerun_reports_zero_rows_per_matrix() -> Result<()> {
    let ctx = setup_test_context().await?;
    RoleSeeder.run(&ctx).await?;
    for matrix in MATRICES {
        matrix.apply(&ctx).await?;
    }

    for matrix in MATRICES {
        let summary = matrix.apply(&ctx).await?;
        assert_eq!(summary.inserted(), 0, "{} reported writes on rerun", matrix.noun);
    }
    Ok(())
}
