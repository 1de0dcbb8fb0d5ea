//! Supplier permissions

use super::{Grant, PermissionMatrix, RoleGrant, STAFF};

pub static MATRIX: PermissionMatrix = PermissionMatrix {
    seeder: "provider-permissions",
    noun: "provider",
    permissions: &[
        "provider.view-any",
        "provider.view",
        "provider.create",
        "provider.update",
        "provider.delete",
        "provider.restore",
        "provider.force-delete",
        "provider.export",
        "provider.import",
        "provider.rate",
        "provider.suspend",
        "provider.activate",
        "provider.view.contracts",
        "provider.manage.contacts",
    ],
    roles: &[
        RoleGrant::sync("provider-manager", Grant::AllExcept(&["provider.force-delete"])),
        RoleGrant::sync(
            "provider-viewer",
            Grant::Only(&["provider.view-any", "provider.view", "provider.view.contracts"]),
        ),
        RoleGrant::sync(
            "procurement-officer",
            Grant::Only(&[
                "provider.view-any",
                "provider.view",
                "provider.create",
                "provider.update",
                "provider.rate",
                "provider.view.contracts",
                "provider.manage.contacts",
            ]),
        ),
        RoleGrant::give(STAFF, Grant::Only(&["provider.view-any", "provider.view"])),
        RoleGrant::super_admin(),
        RoleGrant::admin(Grant::AllExcept(&["provider.force-delete"])),
    ],
};
