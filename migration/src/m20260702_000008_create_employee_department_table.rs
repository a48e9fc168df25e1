use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260702_000006_create_department_table::Department,
    m20260702_000007_create_employee_table::Employee,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeDepartment::Table)
                    .if_not_exists()
                    .col(integer(EmployeeDepartment::EmployeeId))
                    .col(string(EmployeeDepartment::DepartmentCode))
                    .primary_key(
                        Index::create()
                            .col(EmployeeDepartment::EmployeeId)
                            .col(EmployeeDepartment::DepartmentCode),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_department_employee_id")
                            .from(EmployeeDepartment::Table, EmployeeDepartment::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_department_department_code")
                            .from(
                                EmployeeDepartment::Table,
                                EmployeeDepartment::DepartmentCode,
                            )
                            .to(Department::Table, Department::Code)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeDepartment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmployeeDepartment {
    Table,
    EmployeeId,
    DepartmentCode,
}
