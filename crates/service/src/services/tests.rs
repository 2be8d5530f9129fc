use chrono::{Days, NaiveDate};
use uuid::Uuid;

use models::car::DAYS_TO_DEADLINE;

use crate::errors::ServiceError;
use crate::resources::{
    AccessoryCreate, AccessoryUpdate, BrandCreate, BrandUpdate, ColorCreate, CarCreate, CarFilter, CustomerCreate, CustomerFilter, CustomerUpdate,
    InsuranceCreate, PurchaseCreate, SalesPersonCreate, SalesPersonLogin,
};
use crate::test_support::{fixture, Fixture};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 10).unwrap()
}

fn car_input(f: &Fixture, color_id: Uuid) -> CarCreate {
    CarCreate {
        models_id: f.model_id,
        colors_id: color_id,
        customers_id: f.customer_id,
        sales_people_id: f.sales_person_id,
        accessory_ids: vec![],
        insurance_ids: vec![],
        purchase_deadline: None,
    }
}

#[tokio::test]
async fn car_with_offered_color_is_created_with_default_deadline() {
    let f = fixture().await;
    for color_id in [f.red_id, f.black_id] {
        let car = f.services.cars.create_on(car_input(&f, color_id), today()).await.unwrap();
        assert_eq!(car.color.id, color_id);
        assert_eq!(car.purchase_deadline, today() + Days::new(DAYS_TO_DEADLINE));
        assert!(!car.is_purchased);
        assert_eq!(car.model.brand.name, "Tesla");
    }
}

#[tokio::test]
async fn car_with_color_outside_model_is_rejected_naming_both() {
    let f = fixture().await;
    let err = f.services.cars.create_on(car_input(&f, f.green_id), today()).await.unwrap_err();
    match &err {
        ServiceError::ColorNotOfferedByModel { model, color, offered } => {
            assert_eq!(model, "Model 3");
            assert_eq!(color, "Green");
            assert_eq!(offered, &vec!["Black".to_string(), "Red".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("does not have the color: Green"));
}

#[tokio::test]
async fn unknown_references_fail_with_not_found() {
    let f = fixture().await;
    let missing = Uuid::new_v4();

    let cases: Vec<(&str, CarCreate)> = vec![
        ("Model", CarCreate { models_id: missing, ..car_input(&f, f.red_id) }),
        ("Color", CarCreate { colors_id: missing, ..car_input(&f, f.red_id) }),
        ("Customer", CarCreate { customers_id: missing, ..car_input(&f, f.red_id) }),
        ("Sales person", CarCreate { sales_people_id: missing, ..car_input(&f, f.red_id) }),
        ("Accessory", CarCreate { accessory_ids: vec![missing], ..car_input(&f, f.red_id) }),
        ("Insurance", CarCreate { insurance_ids: vec![missing], ..car_input(&f, f.red_id) }),
    ];
    for (entity, input) in cases {
        let err = f.services.cars.create_on(input, today()).await.unwrap_err();
        assert_eq!(err.to_string(), format!("{entity} with ID: {missing} does not exist."));
    }
}

#[tokio::test]
async fn customer_is_checked_before_model() {
    let f = fixture().await;
    let input = CarCreate { models_id: Uuid::new_v4(), customers_id: Uuid::new_v4(), ..car_input(&f, f.red_id) };
    let err = f.services.cars.create_on(input, today()).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "Customer", .. }));
}

#[tokio::test]
async fn deadline_window_boundaries() {
    let f = fixture().await;
    let with_deadline = |d: NaiveDate| CarCreate { purchase_deadline: Some(d), ..car_input(&f, f.red_id) };

    let err = f.services.cars.create_on(with_deadline(today()), today()).await.unwrap_err();
    assert!(err.to_string().contains("must be after the current date"));

    let last = today() + Days::new(DAYS_TO_DEADLINE);
    let car = f.services.cars.create_on(with_deadline(last), today()).await.unwrap();
    assert_eq!(car.purchase_deadline, last);

    let err = f.services.cars.create_on(with_deadline(last + Days::new(1)), today()).await.unwrap_err();
    assert!(err.to_string().contains("must be within 30 days from the current date"));
}

#[tokio::test]
async fn duplicate_accessory_ids_fail_before_lookup() {
    let f = fixture().await;
    let id = Uuid::new_v4();
    let input = CarCreate { accessory_ids: vec![id, id], ..car_input(&f, f.red_id) };
    let err = f.services.cars.create_on(input, today()).await.unwrap_err();
    assert!(matches!(&err, ServiceError::Validation(m) if m.contains("accessories must be unique.")));
}

#[tokio::test]
async fn total_price_sums_components() {
    let f = fixture().await;
    let mats = f.services.accessories.create(AccessoryCreate { name: "Floor mats".into(), price: 1_200.0 }).await.unwrap();
    let hook = f.services.accessories.create(AccessoryCreate { name: "Tow hook".into(), price: 3_800.0 }).await.unwrap();
    let theft = f.services.insurances.create(InsuranceCreate { name: "Theft".into(), price: 2_500.0 }).await.unwrap();
    let input = CarCreate {
        accessory_ids: vec![mats.id, hook.id],
        insurance_ids: vec![theft.id],
        ..car_input(&f, f.red_id)
    };
    let car = f.services.cars.create_on(input, today()).await.unwrap();
    assert_eq!(car.total_price, 400_000.0 + 5_000.0 + 1_200.0 + 3_800.0 + 2_500.0);
    assert_eq!(car.accessories.len(), 2);
    assert_eq!(car.insurances.len(), 1);
}

#[tokio::test]
async fn car_filters() {
    let f = fixture().await;
    let bought = f.services.cars.create_on(car_input(&f, f.red_id), today()).await.unwrap();
    let open = f.services.cars.create_on(car_input(&f, f.black_id), today()).await.unwrap();
    f.services.purchases.create_on(PurchaseCreate { cars_id: bought.id }, today()).await.unwrap();

    let purchased = f.services.cars
        .get_all_on(&CarFilter { is_purchased: Some(true), ..Default::default() }, today())
        .await
        .unwrap();
    assert_eq!(purchased.iter().map(|c| c.id).collect::<Vec<_>>(), vec![bought.id]);
    assert!(purchased[0].is_purchased);

    let later = today() + Days::new(DAYS_TO_DEADLINE + 1);
    let past = f.services.cars
        .get_all_on(&CarFilter { is_past_purchase_deadline: Some(true), is_purchased: Some(false), ..Default::default() }, later)
        .await
        .unwrap();
    assert_eq!(past.iter().map(|c| c.id).collect::<Vec<_>>(), vec![open.id]);

    let by_customer = f.services.cars
        .get_all_on(&CarFilter { customer_id: Some(f.customer_id), ..Default::default() }, today())
        .await
        .unwrap();
    assert_eq!(by_customer.len(), 2);

    let err = f.services.cars
        .get_all_on(&CarFilter { sales_person_id: Some(Uuid::new_v4()), ..Default::default() }, today())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "Sales person", .. }));
}

#[tokio::test]
async fn purchase_rules() {
    let f = fixture().await;
    let car = f.services.cars.create_on(car_input(&f, f.red_id), today()).await.unwrap();

    let p = f.services.purchases.create_on(PurchaseCreate { cars_id: car.id }, today()).await.unwrap();
    assert_eq!(p.date_of_purchase, today());
    assert!(f.services.cars.get_by_id(car.id).await.unwrap().is_purchased);

    let again = f.services.purchases.create_on(PurchaseCreate { cars_id: car.id }, today()).await.unwrap_err();
    assert!(matches!(again, ServiceError::AlreadyTaken { entity: "Purchase", .. }));

    let late = f.services.cars.create_on(car_input(&f, f.black_id), today()).await.unwrap();
    let after_deadline = late.purchase_deadline + Days::new(1);
    let err = f.services.purchases.create_on(PurchaseCreate { cars_id: late.id }, after_deadline).await.unwrap_err();
    assert!(matches!(err, ServiceError::PurchaseDeadlinePassed { .. }));

    f.repo.set_purchase_deadline(late.id, after_deadline).await.unwrap();
    assert!(f.services.purchases.create_on(PurchaseCreate { cars_id: late.id }, after_deadline).await.is_ok());

    let missing = Uuid::new_v4();
    let err = f.services.purchases.create_on(PurchaseCreate { cars_id: missing }, today()).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Car with ID: {missing} does not exist."));
}

#[tokio::test]
async fn customer_email_must_be_unique() {
    let f = fixture().await;
    let input = CustomerCreate {
        email: "kari@example.no".into(),
        phone_number: None,
        first_name: "Another".into(),
        last_name: "Kari".into(),
        address: None,
    };
    let err = f.services.customers.create(input).await.unwrap_err();
    assert_eq!(err.to_string(), "Customer with email: kari@example.no is already taken.");

    let other = f.services.customers.create(CustomerCreate {
        email: "per@example.no".into(),
        phone_number: Some("98765432".into()),
        first_name: "Per".into(),
        last_name: "Hansen".into(),
        address: None,
    })
    .await
    .unwrap();
    let err = f.services.customers
        .update(other.id, CustomerUpdate { email: Some("kari@example.no".into()), ..Default::default() })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::AlreadyTaken { field: "email", .. }));

    // Keeping your own email is not a conflict
    let same = f.services.customers
        .update(other.id, CustomerUpdate { email: Some("per@example.no".into()), last_name: Some("Olsen".into()), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(same.last_name, "Olsen");

    let found = f.services.customers
        .get_all(&CustomerFilter { email: Some("PER@".into()), limit: None })
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn customer_email_filter_matches_wildcards_literally() {
    let f = fixture().await;
    for email in ["axb@example.no", "a_b@example.no"] {
        f.services.customers
            .create(CustomerCreate {
                email: email.into(),
                phone_number: None,
                first_name: "Test".into(),
                last_name: "Person".into(),
                address: None,
            })
            .await
            .unwrap();
    }

    let found = f.services.customers
        .get_all(&CustomerFilter { email: Some("A_B".into()), limit: None })
        .await
        .unwrap();
    assert_eq!(found.iter().map(|c| c.email.as_str()).collect::<Vec<_>>(), vec!["a_b@example.no"]);

    let none = f.services.customers
        .get_all(&CustomerFilter { email: Some("%".into()), limit: None })
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn catalog_field_rules_reject_before_anything_is_stored() {
    let f = fixture().await;
    let brands_before = f.services.brands.get_all().await.unwrap().len();
    let err = f.services.brands
        .create(BrandCreate { name: "   ".into(), logo_url: "https://cdn.example.no/x.png".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(f.services.brands.get_all().await.unwrap().len(), brands_before);

    let color = |name: String, red_value: i32| ColorCreate { name, price: 0.0, red_value, green_value: 0, blue_value: 0 };
    let too_long = f.services.colors.create(color("x".repeat(46), 10)).await.unwrap_err();
    assert!(matches!(too_long, ServiceError::Validation(_)));
    let out_of_range = f.services.colors.create(color("Ultra".into(), 256)).await.unwrap_err();
    assert!(matches!(out_of_range, ServiceError::Validation(_)));
    assert_eq!(f.services.colors.create(color("x".repeat(45), 255)).await.unwrap().red_value, 255);
}

#[tokio::test]
async fn empty_update_returns_current_record() {
    let f = fixture().await;
    let brands = f.services.brands.get_all().await.unwrap();
    let current = brands[0].clone();
    let unchanged = f.services.brands.update(current.id, BrandUpdate::default()).await.unwrap();
    assert_eq!(unchanged, current);

    let a = f.services.accessories.create(AccessoryCreate { name: "Roof box".into(), price: 4_000.0 }).await.unwrap();
    let updated = f.services.accessories
        .update(a.id, AccessoryUpdate { name: None, price: Some(3_500.0) })
        .await
        .unwrap();
    assert_eq!(updated.price, 3_500.0);
    let deleted = f.services.accessories.delete(a.id).await.unwrap();
    assert_eq!(deleted.id, a.id);
    assert!(matches!(f.services.accessories.get_by_id(a.id).await, Err(ServiceError::NotFound { .. })));
}

#[tokio::test]
async fn login_checks_password() {
    let f = fixture().await;
    let created = f.services.sales_people
        .create(SalesPersonCreate {
            email: "lise@dealer.no".into(),
            password: "CorrectHorse1".into(),
            first_name: "Lise".into(),
            last_name: "Berg".into(),
        })
        .await
        .unwrap();

    let session = f.services.sales_people
        .login(SalesPersonLogin { email: "lise@dealer.no".into(), password: "CorrectHorse1".into() })
        .await
        .unwrap();
    assert_eq!(session.sales_person.id, created.id);
    // No JWT secret in the fixture config
    assert!(session.token.is_none());

    let wrong = f.services.sales_people
        .login(SalesPersonLogin { email: "lise@dealer.no".into(), password: "wrong-password".into() })
        .await
        .unwrap_err();
    assert!(matches!(wrong, ServiceError::Unauthorized));

    let unknown = f.services.sales_people
        .login(SalesPersonLogin { email: "nobody@dealer.no".into(), password: "CorrectHorse1".into() })
        .await
        .unwrap_err();
    assert!(matches!(unknown, ServiceError::Unauthorized));
}

#[tokio::test]
async fn models_filter_by_brand() {
    let f = fixture().await;
    let all = f.services.models.get_all(None).await.unwrap();
    assert_eq!(all.len(), 1);
    let brand_id = all[0].brand.id;
    assert_eq!(f.services.models.get_all(Some(brand_id)).await.unwrap().len(), 1);
    let err = f.services.models.get_all(Some(Uuid::new_v4())).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "Brand", .. }));
    let m = f.services.models.get_by_id(f.model_id).await.unwrap();
    assert_eq!(m.colors.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), vec!["Black", "Red"]);
}
