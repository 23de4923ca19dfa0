use model_framework::{data, DataMap, Model, ModelError, Value};
use model_sample::model::{Order, Product, User};

#[test]
fn test_create_returns_a_populated_user() {
    let user = User::create(&data! { "first_name": "John", "last_name": "Doe" });

    assert_eq!(user.get("first_name").unwrap(), "John");
    assert_eq!(user.get("last_name").unwrap(), "Doe");
}

#[test]
fn test_dynamic_getters_follow_dynamic_setters() {
    let mut user = User::create(&data! { "nickname": "johnny" });

    assert_eq!(user.call("getNickname", vec![]).unwrap(), "johnny");

    user.call("setNickname", vec![Value::from("jo")]).unwrap();
    assert_eq!(user.call("getNickname", vec![]).unwrap(), "jo");
}

#[test]
fn test_assign_populates_several_fields_at_once() {
    let mut user = User::default();
    user.assign(&data! {
        "first_name": "John",
        "last_name": "Doe",
        "nickname": "johnny",
    });

    assert_eq!(user.get("first_name").unwrap(), "John");
    assert_eq!(user.get("last_name").unwrap(), "Doe");
    assert_eq!(user.get("nickname").unwrap(), "johnny");
}

#[test]
fn test_assign_accepts_every_supported_key_spelling() {
    for key in ["first_name", "first-name", "firstName"] {
        let mut user = User::default();
        let mut payload = DataMap::new();
        payload.insert(key.to_string(), Value::from("John"));

        user.assign(&payload);

        assert_eq!(
            user.call("getFirstName", vec![]).unwrap(),
            "John",
            "key spelling {key} did not reach first_name",
        );
    }
}

#[test]
fn test_mixed_spellings_in_one_payload() {
    let mut user = User::default();
    user.assign(&data! { "firstName": "John", "last_name": "Doe" });

    assert_eq!(user.call("getFirstName", vec![]).unwrap(), "John");
    assert_eq!(user.call("getLastName", vec![]).unwrap(), "Doe");
}

#[test]
fn test_undefined_members_are_rejected_by_name() {
    let mut user = User::default();

    let error = user.call("getTestName", vec![]).unwrap_err();
    assert!(matches!(&error, ModelError::UnknownMember(name) if name == "getTestName"));
    assert!(error.to_string().contains("getTestName"));
}

#[test]
fn test_user_defined_accessors_shadow_the_fallback() {
    let mut user = User::default();

    // The hand-written setter folds case; the fallback would store as-is.
    user.call("setEmail", vec![Value::from("John.Doe@Example.COM")])
        .unwrap();
    assert_eq!(
        user.call("getEmail", vec![]).unwrap(),
        "john.doe@example.com"
    );

    // Bulk assignment dispatches through the same pair.
    user.assign(&data! { "email": "Root@Example.COM" });
    assert_eq!(user.get("email").unwrap(), "root@example.com");
}

#[test]
fn test_create_with_passes_constructor_args_positionally() {
    let customer = User::create(&data! { "nickname": "johnny" });

    let order = Order::create_with((customer,), &data! { "quantity": 5, "total": 127.50 });

    assert_eq!(order.customer().nickname.as_deref(), Some("johnny"));
    assert_eq!(order.get("quantity").unwrap(), 5);
    assert_eq!(order.get("total").unwrap(), 127.50);
    assert_eq!(order.get("status").unwrap(), "created");
}

#[test]
fn test_private_fields_are_never_exposed() {
    let mut user = User::default();

    assert!(matches!(
        user.call("getPasswordHash", vec![]),
        Err(ModelError::AccessDenied)
    ));
    assert!(matches!(
        user.set("password_hash", Value::from("hunter2")),
        Err(ModelError::AccessDenied)
    ));
    // Bulk assignment drops the key instead of erroring.
    user.assign(&data! { "password_hash": "hunter2" });
}

#[test]
fn test_static_entries_are_never_exposed() {
    let mut product = Product::default();

    let error = product.call("getTableName", vec![]).unwrap_err();
    assert!(matches!(error, ModelError::AccessDenied));
}

#[test]
fn test_assign_is_idempotent() {
    let payload = data! { "first_name": "John", "nickname": "johnny" };

    let mut once = User::default();
    once.assign(&payload);
    let mut twice = User::default();
    twice.assign(&payload);
    twice.assign(&payload);

    assert_eq!(once.get("first_name").unwrap(), twice.get("first_name").unwrap());
    assert_eq!(once.get("nickname").unwrap(), twice.get("nickname").unwrap());
}

#[test]
fn test_assign_skips_what_it_cannot_apply() {
    let product = Product::create(&data! {
        "name": "Super Widget",
        "price": 25.50,
        "quantity": "plenty",
        "warehouse": "unregistered",
    });

    assert_eq!(product.get("name").unwrap(), "Super Widget");
    assert_eq!(product.get("price").unwrap(), 25.50);
    assert_eq!(product.get("quantity").unwrap(), Value::Null);
}

#[test]
fn test_strict_surface_reports_unconvertible_values() {
    let mut product = Product::default();

    let result = product.set("price", Value::from("expensive"));
    assert!(matches!(
        result,
        Err(ModelError::InvalidValue { field: "price", .. })
    ));
}

#[test]
fn test_typed_and_dynamic_accessors_share_storage() {
    let mut user = User::default();

    user.set_first_name("John".to_string());
    assert_eq!(user.call("getFirstName", vec![]).unwrap(), "John");

    user.call("setFirstName", vec![Value::from("Jane")]).unwrap();
    assert_eq!(user.first_name().as_deref(), Some("Jane"));
}

#[test]
fn test_unset_fields_read_back_as_null() {
    let user = User::default();

    assert_eq!(user.get("first_name").unwrap(), Value::Null);
}
