use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ActiveValue::{Set, Unchanged}, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use models::{customer, sales_person};

use super::SeaOrmRepository;
use crate::repository::{CustomerRepository, RepoResult, SalesPersonRepository};
use crate::resources::CustomerCreate;

/// Lowercased `%fragment%` with `%`, `_` and `\` escaped, so the fragment matches literally.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl CustomerRepository for SeaOrmRepository {
    async fn get_all(&self, email_filter: Option<&str>, limit: Option<u64>) -> RepoResult<Vec<customer::Model>> {
        let mut query = customer::Entity::find().order_by_asc(customer::Column::Email);
        if let Some(fragment) = email_filter {
            let pattern = LikeExpr::new(contains_pattern(fragment)).escape('\\');
            query = query.filter(Expr::expr(Func::lower(Expr::col(customer::Column::Email))).like(pattern));
        }
        if let Some(n) = limit {
            query = query.limit(n);
        }
        Ok(query.all(&self.db).await?)
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<customer::Model>> {
        Ok(customer::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn is_email_taken(&self, email: &str, exclude: Option<Uuid>) -> RepoResult<bool> {
        Ok(customer::is_email_taken(&self.db, email, exclude).await?)
    }

    async fn create(&self, input: &CustomerCreate) -> RepoResult<customer::Model> {
        let new = customer::NewCustomer {
            email: &input.email,
            phone_number: input.phone_number.as_deref(),
            first_name: &input.first_name,
            last_name: &input.last_name,
            address: input.address.as_deref(),
        };
        Ok(customer::create(&self.db, new).await?)
    }

    async fn update(&self, c: customer::Model) -> RepoResult<customer::Model> {
        let am = customer::ActiveModel {
            id: Unchanged(c.id),
            email: Set(c.email),
            phone_number: Set(c.phone_number),
            first_name: Set(c.first_name),
            last_name: Set(c.last_name),
            address: Set(c.address),
        };
        Ok(am.update(&self.db).await?)
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        customer::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl SalesPersonRepository for SeaOrmRepository {
    async fn get_all(&self) -> RepoResult<Vec<sales_person::Model>> {
        Ok(sales_person::Entity::find()
            .order_by_asc(sales_person::Column::LastName)
            .order_by_asc(sales_person::Column::FirstName)
            .all(&self.db)
            .await?)
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<sales_person::Model>> {
        Ok(sales_person::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn get_by_email(&self, email: &str) -> RepoResult<Option<sales_person::Model>> {
        Ok(sales_person::find_by_email(&self.db, email).await?)
    }

    async fn create(
        &self,
        email: &str,
        hashed_password: String,
        first_name: &str,
        last_name: &str,
    ) -> RepoResult<sales_person::Model> {
        Ok(sales_person::create(&self.db, email, hashed_password, first_name, last_name).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn email_fragment_is_lowercased_and_wrapped() {
        assert_eq!(contains_pattern("Kari@"), "%kari@%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn like_wildcards_in_fragment_are_escaped() {
        assert_eq!(contains_pattern("a_b"), r"%a\_b%");
        assert_eq!(contains_pattern("100%"), r"%100\%%");
        assert_eq!(contains_pattern(r"x\y"), r"%x\\y%");
    }
}
