use anyhow::Result;
use chrono::{Days, Utc};
use migration::MigratorTrait;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use crate::db::connect;
use crate::{accessory, brand, car, car_model, color, customer, insurance, sales_person};

use super::skip_db_tests;

struct Fixture {
    color: color::Model,
    model: car_model::Model,
    customer: customer::Model,
    seller: sales_person::Model,
}

async fn fixture(db: &sea_orm::DatabaseConnection) -> Result<Fixture> {
    let tag = Uuid::new_v4().simple().to_string();
    let b = brand::create(db, &format!("tx_brand_{}", &tag[..10]), "https://example.com/b.png").await?;
    let color = color::create(db, &format!("tx_color_{}", &tag[..10]), 100.0, (10, 20, 30)).await?;
    let model = car_model::create(db, &format!("tx_model_{}", &tag[..10]), 1000.0, b.id, &[color.id]).await?;
    let customer = customer::create(db, customer::NewCustomer {
        email: &format!("tx_{}@example.com", &tag[..10]),
        phone_number: None,
        first_name: "Tx",
        last_name: "Customer",
        address: None,
    })
    .await?;
    let seller = sales_person::create(db, &format!("tx_seller_{}@example.com", &tag[..10]), "hash".into(), "Tx", "Seller").await?;
    Ok(Fixture { color, model, customer, seller })
}

#[tokio::test]
async fn test_car_insert_links_associations() -> Result<()> {
    if skip_db_tests() {
        return Ok(());
    }
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    let f = fixture(&db).await?;
    let acc = accessory::create(&db, &format!("tx_acc_{}", Uuid::new_v4().simple()), 50.0).await?;
    let ins = insurance::create(&db, &format!("tx_ins_{}", &Uuid::new_v4().simple().to_string()[..20]), 25.0).await?;

    let new = car::NewCar {
        models_id: f.model.id,
        colors_id: f.color.id,
        customers_id: f.customer.id,
        sales_people_id: f.seller.id,
        accessory_ids: vec![acc.id],
        insurance_ids: vec![ins.id],
        purchase_deadline: Utc::now().date_naive() + Days::new(5),
        total_price: 1175.0,
    };
    let created = car::create(&db, &new).await?;
    let accessories = created.find_related(accessory::Entity).all(&db).await?;
    let insurances = created.find_related(insurance::Entity).all(&db).await?;
    assert_eq!(accessories.len(), 1);
    assert_eq!(insurances.len(), 1);

    car::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_car_insert_rolls_back_on_bad_association() -> Result<()> {
    if skip_db_tests() {
        return Ok(());
    }
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    let f = fixture(&db).await?;
    let before = car::Entity::find()
        .filter(car::Column::CustomersId.eq(f.customer.id))
        .count(&db)
        .await?;

    let new = car::NewCar {
        models_id: f.model.id,
        colors_id: f.color.id,
        customers_id: f.customer.id,
        sales_people_id: f.seller.id,
        // No such accessory: the FK on cars_has_accessories fails
        accessory_ids: vec![Uuid::new_v4()],
        insurance_ids: vec![],
        purchase_deadline: Utc::now().date_naive() + Days::new(5),
        total_price: 1100.0,
    };
    assert!(car::create(&db, &new).await.is_err());

    let after = car::Entity::find()
        .filter(car::Column::CustomersId.eq(f.customer.id))
        .count(&db)
        .await?;
    assert_eq!(before, after);
    Ok(())
}
