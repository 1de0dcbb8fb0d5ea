//! Order line item permissions

use super::{CUSTOMER, Grant, PermissionMatrix, RoleGrant, STAFF};

pub static MATRIX: PermissionMatrix = PermissionMatrix {
    seeder: "order-item-permissions",
    noun: "order-item",
    permissions: &[
        "order-item.view-any",
        "order-item.view",
        "order-item.create",
        "order-item.update",
        "order-item.delete",
        "order-item.view-own",
        "order-item.adjust-quantity",
        "order-item.apply-discount",
        "order-item.refund",
        "order-item.export",
    ],
    roles: &[
        RoleGrant::sync("order-item-manager", Grant::AllExcept(&["order-item.view-own"])),
        RoleGrant::sync(
            "order-item-viewer",
            Grant::Only(&["order-item.view-any", "order-item.view"]),
        ),
        RoleGrant::give(CUSTOMER, Grant::Only(&["order-item.view-own"])),
        RoleGrant::give(
            STAFF,
            Grant::Only(&[
                "order-item.view-any",
                "order-item.view",
                "order-item.adjust-quantity",
            ]),
        ),
        RoleGrant::super_admin(),
        RoleGrant::admin(Grant::AllExcept(&["order-item.delete"])),
    ],
};
