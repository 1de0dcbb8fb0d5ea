//! Product catalog permissions

use super::{CUSTOMER, Grant, PermissionMatrix, RoleGrant};

pub static MATRIX: PermissionMatrix = PermissionMatrix {
    seeder: "product-permissions",
    noun: "product",
    permissions: &[
        "product.view-any",
        "product.view",
        "product.create",
        "product.update",
        "product.delete",
        "product.restore",
        "product.force-delete",
        "product.publish",
        "product.unpublish",
        "product.feature",
        "product.update-price",
        "product.update-stock",
        "product.export",
        "product.import",
        "product.manage-images",
        "product.manage-variants",
        "product.view.cost",
    ],
    roles: &[
        RoleGrant::sync("product-manager", Grant::AllExcept(&["product.force-delete"])),
        RoleGrant::sync(
            "product-editor",
            Grant::Only(&[
                "product.view-any",
                "product.view",
                "product.create",
                "product.update",
                "product.publish",
                "product.unpublish",
                "product.manage-images",
                "product.manage-variants",
            ]),
        ),
        RoleGrant::sync(
            "inventory-clerk",
            Grant::Only(&["product.view-any", "product.view", "product.update-stock"]),
        ),
        RoleGrant::give(CUSTOMER, Grant::Only(&["product.view-any", "product.view"])),
        RoleGrant::super_admin(),
        RoleGrant::admin(Grant::AllExcept(&["product.force-delete"])),
    ],
};
