//! Customer preference permissions

use super::{CUSTOMER, Grant, PermissionMatrix, RoleGrant};

pub static MATRIX: PermissionMatrix = PermissionMatrix {
    seeder: "customer-preference-permissions",
    noun: "customer-preference",
    permissions: &[
        "customer-preference.view-any",
        "customer-preference.view",
        "customer-preference.create",
        "customer-preference.update",
        "customer-preference.delete",
        "customer-preference.view-own",
        "customer-preference.update-own",
        "customer-preference.reset-own",
        "customer-preference.reset",
        "customer-preference.export",
        "customer-preference.manage-defaults",
    ],
    roles: &[
        RoleGrant::sync(
            "customer-preference-manager",
            Grant::AllExcept(&[
                "customer-preference.view-own",
                "customer-preference.update-own",
                "customer-preference.reset-own",
            ]),
        ),
        RoleGrant::sync(
            "customer-preference-viewer",
            Grant::Only(&["customer-preference.view-any", "customer-preference.view"]),
        ),
        RoleGrant::give(
            CUSTOMER,
            Grant::Only(&[
                "customer-preference.view-own",
                "customer-preference.update-own",
                "customer-preference.reset-own",
            ]),
        ),
        RoleGrant::super_admin(),
        RoleGrant::admin(Grant::Only(&[
            "customer-preference.view-any",
            "customer-preference.view",
            "customer-preference.update",
            "customer-preference.reset",
            "customer-preference.export",
            "customer-preference.manage-defaults",
        ])),
    ],
};
