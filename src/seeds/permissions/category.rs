//! Category permissions

use super::{CUSTOMER, Grant, PermissionMatrix, RoleGrant};

pub static MATRIX: PermissionMatrix = PermissionMatrix {
    seeder: "category-permissions",
    noun: "category",
    permissions: &[
        "category.view-any",
        "category.view",
        "category.create",
        "category.update",
        "category.delete",
        "category.restore",
        "category.force-delete",
        "category.reorder",
        "category.move",
        "category.export",
        "category.import",
        "category.manage-attributes",
    ],
    roles: &[
        RoleGrant::sync("category-manager", Grant::AllExcept(&["category.force-delete"])),
        RoleGrant::sync(
            "category-viewer",
            Grant::Only(&["category.view-any", "category.view"]),
        ),
        RoleGrant::sync(
            "category-editor",
            Grant::Only(&[
                "category.view-any",
                "category.view",
                "category.create",
                "category.update",
                "category.reorder",
                "category.move",
                "category.manage-attributes",
            ]),
        ),
        RoleGrant::give(CUSTOMER, Grant::Only(&["category.view-any", "category.view"])),
        RoleGrant::super_admin(),
        RoleGrant::admin(Grant::All),
    ],
};
