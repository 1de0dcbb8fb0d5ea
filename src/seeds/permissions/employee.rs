//! Employee record permissions

use super::{Grant, PermissionMatrix, RoleGrant, STAFF};

pub static MATRIX: PermissionMatrix = PermissionMatrix {
    seeder: "employee-permissions",
    noun: "employee",
    permissions: &[
        "employee.view-any",
        "employee.view",
        "employee.create",
        "employee.update",
        "employee.delete",
        "employee.restore",
        "employee.force-delete",
        "employee.view-own",
        "employee.update-own",
        "employee.export",
        "employee.import",
        "employee.terminate",
        "employee.rehire",
        "employee.view-salary",
        "employee.update-salary",
        "employee.assign-department",
        "employee.view.sensitive",
    ],
    roles: &[
        RoleGrant::sync(
            "employee-manager",
            Grant::AllExcept(&[
                "employee.force-delete",
                "employee.view.sensitive",
                "employee.update-salary",
            ]),
        ),
        RoleGrant::sync(
            "employee-viewer",
            Grant::Only(&["employee.view-any", "employee.view"]),
        ),
        RoleGrant::sync("hr-manager", Grant::AllExcept(&["employee.force-delete"])),
        RoleGrant::give(STAFF, Grant::Only(&["employee.view-own", "employee.update-own"])),
        RoleGrant::super_admin(),
        RoleGrant::admin(Grant::AllExcept(&[
            "employee.force-delete",
            "employee.view.sensitive",
        ])),
    ],
};
