//! Customer account permissions

use super::{CUSTOMER, Grant, PermissionMatrix, RoleGrant};

pub static MATRIX: PermissionMatrix = PermissionMatrix {
    seeder: "customer-permissions",
    noun: "customer",
    permissions: &[
        "customer.view-any",
        "customer.view",
        "customer.create",
        "customer.update",
        "customer.delete",
        "customer.restore",
        "customer.force-delete",
        "customer.view-own",
        "customer.update-own",
        "customer.delete-own",
        "customer.export",
        "customer.import",
        "customer.merge",
        "customer.suspend",
        "customer.activate",
        "customer.view-orders",
        "customer.view-addresses",
        "customer.manage-loyalty",
        "customer.view.sensitive",
        "customer.update.status",
    ],
    roles: &[
        RoleGrant::sync(
            "customer-manager",
            Grant::AllExcept(&[
                "customer.force-delete",
                "customer.merge",
                "customer.view-own",
                "customer.update-own",
                "customer.delete-own",
            ]),
        ),
        RoleGrant::sync(
            "customer-support",
            Grant::Only(&[
                "customer.view-any",
                "customer.view",
                "customer.update",
                "customer.view-orders",
                "customer.view-addresses",
                "customer.suspend",
                "customer.activate",
                "customer.update.status",
            ]),
        ),
        RoleGrant::sync(
            "customer-viewer",
            Grant::Only(&["customer.view-any", "customer.view"]),
        ),
        RoleGrant::give(
            CUSTOMER,
            Grant::Only(&[
                "customer.view-own",
                "customer.update-own",
                "customer.delete-own",
            ]),
        ),
        RoleGrant::super_admin(),
        RoleGrant::admin(Grant::AllExcept(&["customer.force-delete"])),
    ],
};
