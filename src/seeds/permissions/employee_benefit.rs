//! Employee benefit permissions

use super::{Grant, PermissionMatrix, RoleGrant, STAFF};

pub static MATRIX: PermissionMatrix = PermissionMatrix {
    seeder: "employee-benefit-permissions",
    noun: "employee-benefit",
    permissions: &[
        "employee-benefit.view-any",
        "employee-benefit.view",
        "employee-benefit.create",
        "employee-benefit.update",
        "employee-benefit.delete",
        "employee-benefit.view-own",
        "employee-benefit.enroll",
        "employee-benefit.cancel",
        "employee-benefit.approve",
        "employee-benefit.export",
        "employee-benefit.manage-providers",
        "employee-benefit.view-costs",
    ],
    roles: &[
        RoleGrant::sync(
            "employee-benefit-manager",
            Grant::AllExcept(&["employee-benefit.view-own"]),
        ),
        RoleGrant::sync(
            "employee-benefit-viewer",
            Grant::Only(&["employee-benefit.view-any", "employee-benefit.view"]),
        ),
        RoleGrant::sync(
            "benefits-administrator",
            Grant::Only(&[
                "employee-benefit.view-any",
                "employee-benefit.view",
                "employee-benefit.create",
                "employee-benefit.update",
                "employee-benefit.enroll",
                "employee-benefit.cancel",
                "employee-benefit.approve",
                "employee-benefit.view-costs",
            ]),
        ),
        RoleGrant::give(
            STAFF,
            Grant::Only(&["employee-benefit.view-own", "employee-benefit.enroll"]),
        ),
        RoleGrant::super_admin(),
        RoleGrant::admin(Grant::Only(&[
            "employee-benefit.view-any",
            "employee-benefit.view",
            "employee-benefit.approve",
            "employee-benefit.export",
            "employee-benefit.view-costs",
        ])),
    ],
};
