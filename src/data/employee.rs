//! Employee data repository.
//!
//! Employee rows are created and reconciled by the roster synchronizer; the
//! API mutates badge numbers and status. Department memberships live in a
//! join table and are replaced wholesale on sync.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::employee::{
        Employee, EmployeeFilter, EmployeeStatus, PaginatedEmployees, RosterUpsertParam,
        UpdateEmployeeParam,
    },
};

/// Repository providing database operations for employee records.
pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts an employee from a roster snapshot entry.
    ///
    /// New members get a fresh record; existing members get their name and
    /// rank refreshed and are reactivated if previously marked inactive.
    /// Suspensions are an API-side state and survive the sync. Department
    /// memberships are replaced with the parsed set.
    pub async fn upsert_from_roster(
        &self,
        param: RosterUpsertParam,
    ) -> Result<Employee, AppError> {
        let existing = entity::prelude::Employee::find()
            .filter(entity::employee::Column::UserId.eq(param.user_id.to_string()))
            .one(self.db)
            .await?;

        let reactivate = existing
            .as_ref()
            .is_some_and(|e| e.status == EmployeeStatus::Inactive.as_str());

        let mut update_columns = vec![
            entity::employee::Column::Name,
            entity::employee::Column::RankLevel,
            entity::employee::Column::UpdatedAt,
        ];
        if reactivate {
            update_columns.push(entity::employee::Column::Status);
        }

        let now = Utc::now();
        let model = entity::prelude::Employee::insert(entity::employee::ActiveModel {
            user_id: ActiveValue::Set(param.user_id.to_string()),
            name: ActiveValue::Set(param.name),
            rank_level: ActiveValue::Set(param.rank_level),
            status: ActiveValue::Set(EmployeeStatus::Active.as_str().to_string()),
            hired_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::employee::Column::UserId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        self.set_departments(model.id, &param.departments).await?;

        Employee::from_entity(model, param.departments)
    }

    /// Finds an employee by record ID, with department memberships.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let Some(model) = entity::prelude::Employee::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let departments = self.get_departments(model.id).await?;
        Ok(Some(Employee::from_entity(model, departments)?))
    }

    /// Finds an employee by the backing Discord user ID.
    pub async fn find_by_user_id(&self, user_id: u64) -> Result<Option<Employee>, AppError> {
        let Some(model) = entity::prelude::Employee::find()
            .filter(entity::employee::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let departments = self.get_departments(model.id).await?;
        Ok(Some(Employee::from_entity(model, departments)?))
    }

    /// Gets employees matching the filter, ordered by rank descending then name.
    pub async fn get_paginated(
        &self,
        filter: EmployeeFilter,
    ) -> Result<PaginatedEmployees, AppError> {
        let mut query = entity::prelude::Employee::find()
            .order_by_desc(entity::employee::Column::RankLevel)
            .order_by_asc(entity::employee::Column::Name);

        if let Some(status) = filter.status {
            query = query.filter(entity::employee::Column::Status.eq(status.as_str()));
        }

        if let Some(department) = &filter.department {
            let member_ids: Vec<i32> = entity::prelude::EmployeeDepartment::find()
                .filter(
                    entity::employee_department::Column::DepartmentCode.eq(department.as_str()),
                )
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| m.employee_id)
                .collect();
            query = query.filter(entity::employee::Column::Id.is_in(member_ids));
        }

        let paginator = query.paginate(self.db, filter.per_page);
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(filter.page).await?;

        let mut employees = Vec::with_capacity(models.len());
        for model in models {
            let departments = self.get_departments(model.id).await?;
            employees.push(Employee::from_entity(model, departments)?);
        }

        let total_pages = total.div_ceil(filter.per_page.max(1));

        Ok(PaginatedEmployees {
            employees,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages,
        })
    }

    /// Gets all employees belonging to a department.
    pub async fn get_by_department(&self, code: &str) -> Result<Vec<Employee>, AppError> {
        let member_ids: Vec<i32> = entity::prelude::EmployeeDepartment::find()
            .filter(entity::employee_department::Column::DepartmentCode.eq(code))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| m.employee_id)
            .collect();

        let models = entity::prelude::Employee::find()
            .filter(entity::employee::Column::Id.is_in(member_ids))
            .order_by_desc(entity::employee::Column::RankLevel)
            .all(self.db)
            .await?;

        let mut employees = Vec::with_capacity(models.len());
        for model in models {
            let departments = self.get_departments(model.id).await?;
            employees.push(Employee::from_entity(model, departments)?);
        }

        Ok(employees)
    }

    /// Applies an API-side update (badge number, status) to an employee.
    ///
    /// Returns the updated employee, or None if no record matches.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateEmployeeParam,
    ) -> Result<Option<Employee>, AppError> {
        let Some(model) = entity::prelude::Employee::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::employee::ActiveModel = model.into();
        if let Some(badge_number) = param.badge_number {
            active.badge_number = ActiveValue::Set(Some(badge_number));
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let model = sea_orm::ActiveModelTrait::update(active, self.db).await?;
        let departments = self.get_departments(model.id).await?;
        Ok(Some(Employee::from_entity(model, departments)?))
    }

    /// Marks employees inactive whose Discord user is absent from the roster.
    ///
    /// `active_user_ids` is the set of members that still hold a rank role.
    /// Returns the number of employees deactivated.
    pub async fn mark_inactive_missing(&self, active_user_ids: &[u64]) -> Result<u64, AppError> {
        let ids: Vec<String> = active_user_ids.iter().map(|id| id.to_string()).collect();

        let result = entity::prelude::Employee::update_many()
            .filter(entity::employee::Column::UserId.is_not_in(ids))
            .filter(
                entity::employee::Column::Status.ne(EmployeeStatus::Inactive.as_str()),
            )
            .col_expr(
                entity::employee::Column::Status,
                sea_orm::sea_query::Expr::value(EmployeeStatus::Inactive.as_str()),
            )
            .col_expr(
                entity::employee::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Replaces an employee's department memberships.
    pub async fn set_departments(
        &self,
        employee_id: i32,
        codes: &[String],
    ) -> Result<(), AppError> {
        entity::prelude::EmployeeDepartment::delete_many()
            .filter(entity::employee_department::Column::EmployeeId.eq(employee_id))
            .exec(self.db)
            .await?;

        if codes.is_empty() {
            return Ok(());
        }

        let rows: Vec<entity::employee_department::ActiveModel> = codes
            .iter()
            .map(|code| entity::employee_department::ActiveModel {
                employee_id: ActiveValue::Set(employee_id),
                department_code: ActiveValue::Set(code.clone()),
            })
            .collect();

        entity::prelude::EmployeeDepartment::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the department codes an employee belongs to.
    pub async fn get_departments(&self, employee_id: i32) -> Result<Vec<String>, AppError> {
        let rows = entity::prelude::EmployeeDepartment::find()
            .filter(entity::employee_department::Column::EmployeeId.eq(employee_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|r| r.department_code).collect())
    }
}
