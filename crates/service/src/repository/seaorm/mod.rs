//! PostgreSQL-backed repositories over the `models` entities.
use sea_orm::DatabaseConnection;

mod catalog;
mod people;
mod cars;

#[derive(Clone)]
pub struct SeaOrmRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::resources::{BrandCreate, CarCreate, CarFilter, ColorCreate, CustomerCreate, PurchaseCreate, SalesPersonCreate};
    use crate::test_support::{get_db, skip_db_tests};
    use crate::Services;

    #[tokio::test]
    async fn car_lifecycle_against_postgres() -> Result<(), anyhow::Error> {
        if skip_db_tests() { return Ok(()); }
        let db = get_db().await?;
        let svc = Services::seaorm(db.clone(), configs::AuthConfig::default());
        let tag = Uuid::new_v4().simple().to_string()[..10].to_string();

        let brand = svc.brands.create(BrandCreate { name: format!("brand_{tag}"), logo_url: "https://example.com/l.png".into() }).await?;
        let color = |name: String| ColorCreate { name, price: 1000.0, red_value: 1, green_value: 2, blue_value: 3 };
        let white = svc.colors.create(color(format!("white_{tag}"))).await?;
        let pink = svc.colors.create(color(format!("pink_{tag}"))).await?;
        let model = models::car_model::create(&db, &format!("model_{tag}"), 300_000.0, brand.id, &[white.id]).await?;
        let customer = svc.customers.create(CustomerCreate {
            email: format!("c_{tag}@example.com"),
            phone_number: None,
            first_name: "Db".into(),
            last_name: "Customer".into(),
            address: None,
        }).await?;
        let seller = svc.sales_people.create(SalesPersonCreate {
            email: format!("s_{tag}@example.com"),
            password: "Password123".into(),
            first_name: "Db".into(),
            last_name: "Seller".into(),
        }).await?;

        let input = |colors_id| CarCreate {
            models_id: model.id,
            colors_id,
            customers_id: customer.id,
            sales_people_id: seller.id,
            accessory_ids: vec![],
            insurance_ids: vec![],
            purchase_deadline: None,
        };
        assert!(svc.cars.create(input(pink.id)).await.is_err());
        let car = svc.cars.create(input(white.id)).await?;
        assert_eq!(car.total_price, 301_000.0);
        assert_eq!(car.model.colors.len(), 1);

        let bought = svc.purchases.create(PurchaseCreate { cars_id: car.id }).await?;
        assert_eq!(svc.purchases.get_by_id(bought.id).await?.date_of_purchase, Utc::now().date_naive());
        let purchased = svc.cars.get_all(&CarFilter { customer_id: Some(customer.id), is_purchased: Some(true), ..Default::default() }).await?;
        assert_eq!(purchased.len(), 1);
        assert!(purchased[0].is_purchased);
        Ok(())
    }
}
