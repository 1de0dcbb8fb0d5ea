//! Supplier contract permissions

use super::{Grant, PermissionMatrix, RoleGrant};

pub static MATRIX: PermissionMatrix = PermissionMatrix {
    seeder: "provider-contract-permissions",
    noun: "provider-contract",
    permissions: &[
        "provider-contract.view-any",
        "provider-contract.view",
        "provider-contract.create",
        "provider-contract.update",
        "provider-contract.delete",
        "provider-contract.approve",
        "provider-contract.terminate",
        "provider-contract.renew",
        "provider-contract.export",
        "provider-contract.view.financials",
        "provider-contract.upload-document",
    ],
    roles: &[
        RoleGrant::sync(
            "provider-contract-manager",
            Grant::AllExcept(&["provider-contract.delete"]),
        ),
        RoleGrant::sync(
            "provider-contract-viewer",
            Grant::Only(&["provider-contract.view-any", "provider-contract.view"]),
        ),
        RoleGrant::sync(
            "contract-approver",
            Grant::Only(&[
                "provider-contract.view-any",
                "provider-contract.view",
                "provider-contract.approve",
                "provider-contract.terminate",
                "provider-contract.renew",
                "provider-contract.view.financials",
            ]),
        ),
        RoleGrant::super_admin(),
        RoleGrant::admin(Grant::AllExcept(&["provider-contract.delete"])),
    ],
};
