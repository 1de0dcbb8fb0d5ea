//! Address permissions

use super::{CUSTOMER, Grant, PermissionMatrix, RoleGrant, STAFF};

pub static MATRIX: PermissionMatrix = PermissionMatrix {
    seeder: "address-permissions",
    noun: "address",
    permissions: &[
        "address.view-any",
        "address.view",
        "address.create",
        "address.update",
        "address.delete",
        "address.restore",
        "address.force-delete",
        "address.view-own",
        "address.create-own",
        "address.update-own",
        "address.delete-own",
        "address.set-default",
        "address.set-default-own",
        "address.validate",
        "address.geocode",
        "address.export",
        "address.import",
        "address.bulk-update",
        "address.bulk-delete",
        "address.merge",
        "address.view-history",
        "address.verify",
        "address.view.customer",
        "address.update.customer",
    ],
    roles: &[
        // Destructive and bulk-merge operations stay with admins.
        RoleGrant::give(
            "address-manager",
            Grant::AllExcept(&["address.force-delete", "address.bulk-delete", "address.merge"]),
        ),
        RoleGrant::sync(
            "address-viewer",
            Grant::Only(&["address.view-any", "address.view", "address.view-history"]),
        ),
        RoleGrant::give(
            CUSTOMER,
            Grant::Only(&[
                "address.view-own",
                "address.create-own",
                "address.update-own",
                "address.delete-own",
                "address.set-default-own",
            ]),
        ),
        RoleGrant::give(
            STAFF,
            Grant::Only(&[
                "address.view-any",
                "address.view",
                "address.create",
                "address.update",
                "address.validate",
                "address.view.customer",
                "address.update.customer",
            ]),
        ),
        RoleGrant::super_admin(),
        RoleGrant::admin(Grant::AllExcept(&["address.force-delete"])),
    ],
};
