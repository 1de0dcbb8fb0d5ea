//! Order permissions

use super::{CUSTOMER, Grant, PermissionMatrix, RoleGrant, STAFF};

pub static MATRIX: PermissionMatrix = PermissionMatrix {
    seeder: "order-permissions",
    noun: "order",
    permissions: &[
        "order.view-any",
        "order.view",
        "order.create",
        "order.update",
        "order.delete",
        "order.restore",
        "order.force-delete",
        "order.view-own",
        "order.create-own",
        "order.cancel-own",
        "order.cancel",
        "order.refund",
        "order.fulfill",
        "order.ship",
        "order.mark-delivered",
        "order.export",
        "order.import",
        "order.update.status",
        "order.view.payment",
        "order.apply-discount",
    ],
    roles: &[
        RoleGrant::sync(
            "order-manager",
            Grant::AllExcept(&[
                "order.force-delete",
                "order.view-own",
                "order.create-own",
                "order.cancel-own",
            ]),
        ),
        RoleGrant::sync(
            "order-fulfiller",
            Grant::Only(&[
                "order.view-any",
                "order.view",
                "order.fulfill",
                "order.ship",
                "order.mark-delivered",
                "order.update.status",
            ]),
        ),
        RoleGrant::give(
            CUSTOMER,
            Grant::Only(&["order.view-own", "order.create-own", "order.cancel-own"]),
        ),
        RoleGrant::give(
            STAFF,
            Grant::Only(&["order.view-any", "order.view", "order.update.status"]),
        ),
        RoleGrant::super_admin(),
        RoleGrant::admin(Grant::AllExcept(&["order.force-delete"])),
    ],
};
