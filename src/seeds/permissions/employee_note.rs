//! Employee note permissions

use super::{Grant, PermissionMatrix, RoleGrant, STAFF};

pub static MATRIX: PermissionMatrix = PermissionMatrix {
    seeder: "employee-note-permissions",
    noun: "employee-note",
    permissions: &[
        "employee-note.view-any",
        "employee-note.view",
        "employee-note.create",
        "employee-note.update",
        "employee-note.delete",
        "employee-note.view-private",
        "employee-note.create-private",
        "employee-note.view-own",
        "employee-note.export",
        "employee-note.pin",
    ],
    roles: &[
        RoleGrant::sync(
            "employee-note-manager",
            Grant::AllExcept(&["employee-note.view-own"]),
        ),
        RoleGrant::sync(
            "employee-note-viewer",
            Grant::Only(&["employee-note.view-any", "employee-note.view"]),
        ),
        RoleGrant::sync(
            "employee-note-author",
            Grant::Only(&[
                "employee-note.view-any",
                "employee-note.view",
                "employee-note.create",
                "employee-note.update",
                "employee-note.pin",
            ]),
        ),
        RoleGrant::give(STAFF, Grant::Only(&["employee-note.view-own"])),
        RoleGrant::super_admin(),
        RoleGrant::admin(Grant::AllExcept(&[
            "employee-note.view-private",
            "employee-note.create-private",
        ])),
    ],
};
