//! # Data Models
//!
//! SeaORM entities for every table the seeders write into.

pub mod address;
pub mod brand;
pub mod category;
pub mod customer;
pub mod customer_preference;
pub mod employee;
pub mod employee_benefit;
pub mod employee_note;
pub mod order;
pub mod order_item;
pub mod permission;
pub mod product;
pub mod provider;
pub mod provider_contract;
pub mod role;
pub mod role_permission;
pub mod user;
pub mod user_role;

pub use address::Entity as Address;
pub use brand::Entity as Brand;
pub use category::Entity as Category;
pub use customer::Entity as Customer;
pub use customer_preference::Entity as CustomerPreference;
pub use employee::Entity as Employee;
pub use employee_benefit::Entity as EmployeeBenefit;
pub use employee_note::Entity as EmployeeNote;
pub use order::Entity as Order;
pub use order_item::Entity as OrderItem;
pub use permission::Entity as Permission;
pub use product::Entity as Product;
pub use provider::Entity as Provider;
pub use provider_contract::Entity as ProviderContract;
pub use role::Entity as Role;
pub use role_permission::Entity as RolePermission;
pub use user::Entity as User;
pub use user_role::Entity as UserRole;
