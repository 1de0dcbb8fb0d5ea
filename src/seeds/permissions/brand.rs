//! Brand permissions

use super::{Grant, PermissionMatrix, RoleGrant, STAFF};

pub static MATRIX: PermissionMatrix = PermissionMatrix {
    seeder: "brand-permissions",
    noun: "brand",
    permissions: &[
        "brand.view-any",
        "brand.view",
        "brand.create",
        "brand.update",
        "brand.delete",
        "brand.restore",
        "brand.force-delete",
        "brand.export",
        "brand.import",
        "brand.feature",
        "brand.manage-logo",
        "brand.view-analytics",
    ],
    roles: &[
        RoleGrant::sync("brand-manager", Grant::AllExcept(&["brand.force-delete"])),
        RoleGrant::sync("brand-viewer", Grant::Only(&["brand.view-any", "brand.view"])),
        RoleGrant::sync(
            "brand-marketer",
            Grant::Only(&[
                "brand.view-any",
                "brand.view",
                "brand.feature",
                "brand.manage-logo",
                "brand.view-analytics",
            ]),
        ),
        RoleGrant::give(STAFF, Grant::Only(&["brand.view-any", "brand.view"])),
        RoleGrant::super_admin(),
        RoleGrant::admin(Grant::All),
    ],
};
