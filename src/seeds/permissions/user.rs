//! Back-office user account permissions

use super::{CUSTOMER, Grant, PermissionMatrix, RoleGrant, STAFF};

pub static MATRIX: PermissionMatrix = PermissionMatrix {
    seeder: "user-permissions",
    noun: "user",
    permissions: &[
        "user.view-any",
        "user.view",
        "user.create",
        "user.update",
        "user.delete",
        "user.restore",
        "user.force-delete",
        "user.view-own",
        "user.update-own",
        "user.assign-roles",
        "user.revoke-roles",
        "user.impersonate",
        "user.reset-password",
        "user.export",
    ],
    roles: &[
        RoleGrant::sync(
            "user-manager",
            Grant::AllExcept(&["user.force-delete", "user.impersonate"]),
        ),
        RoleGrant::sync("user-viewer", Grant::Only(&["user.view-any", "user.view"])),
        RoleGrant::give(CUSTOMER, Grant::Only(&["user.view-own", "user.update-own"])),
        RoleGrant::give(STAFF, Grant::Only(&["user.view-own", "user.update-own"])),
        RoleGrant::super_admin(),
        RoleGrant::admin(Grant::AllExcept(&["user.impersonate", "user.force-delete"])),
    ],
};
