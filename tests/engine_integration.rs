use claims::{assert_err, assert_ok};
use propguard::context::Site;
use propguard::decorator::generate_validation_decorator;
use propguard::intercept::accessor::GuardedField;
use propguard::intercept::parameters::guard_method;
use propguard::property::{MethodBody, PropertyDescriptor};
use propguard::registry::Registry;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// Helper predicates standing in for the external predicate provider.
mod predicates {
    use serde_json::Value;

    pub fn is_integer(v: &Value) -> bool {
        v.is_i64() || v.is_u64()
    }

    pub fn is_float(v: &Value) -> bool {
        v.as_f64().is_some()
    }

    pub fn integer_between(min: i64, max: i64) -> impl Fn(&Value) -> bool + Send + Sync {
        move |v: &Value| v.as_i64().is_some_and(|n| n >= min && n <= max)
    }
}

fn accessor_shape() -> PropertyDescriptor {
    PropertyDescriptor::accessor(Some(Box::new(|| json!(0))), Some(Box::new(|_| Ok(()))))
}

#[test]
fn integer_range_property_scenario() {
    let registry = Arc::new(Registry::new());
    let decorator = generate_validation_decorator(
        predicates::integer_between(10, 100),
        "%1 is not an integer between 10 and 100",
    )
    .expect("valid configuration")
    .with_registry(Arc::clone(&registry));

    let shape = accessor_shape();
    assert_ok!(decorator.apply(&Site::member("Sample", "value", &shape)));

    let mut value = GuardedField::new(registry, "Sample", "value", json!(10));

    assert_ok!(value.set(json!(33)));
    assert_eq!(value.get(), json!(33));

    let err = assert_err!(value.set(json!(5)));
    assert_eq!(err.message(), "5 is not an integer between 10 and 100");
    assert_eq!(value.get(), json!(33));
}

#[test]
fn scale_method_scenario() {
    static MULTIPLICATIONS: AtomicUsize = AtomicUsize::new(0);

    let registry = Arc::new(Registry::new());
    let value_rule = generate_validation_decorator(predicates::is_integer, "%1 is not an integer")
        .expect("valid configuration")
        .with_registry(Arc::clone(&registry));
    let factor_rule = generate_validation_decorator(predicates::is_float, "%1 is not a float")
        .expect("valid configuration")
        .with_registry(Arc::clone(&registry));

    assert_ok!(value_rule.apply(&Site::parameter("Calc", "scale", 0)));
    assert_ok!(factor_rule.apply(&Site::parameter("Calc", "scale", 1)));

    let body: MethodBody = Box::new(|args: &[Value]| {
        MULTIPLICATIONS.fetch_add(1, Ordering::SeqCst);
        let value = args[0].as_f64().unwrap_or_default();
        let factor = args[1].as_f64().unwrap_or_default();
        json!(value * factor)
    });
    let scale = guard_method(registry, "Calc", "scale", body);

    let result = assert_ok!(scale.invoke(&[json!(5), json!(0.5)]));
    assert_eq!(result, json!(2.5));
    assert_eq!(MULTIPLICATIONS.load(Ordering::SeqCst), 1);

    let err = assert_err!(scale.invoke(&[json!(5.5), json!(2)]));
    assert_eq!(err.message(), "5.5 is not an integer");
    // The body never ran for the rejected call.
    assert_eq!(MULTIPLICATIONS.load(Ordering::SeqCst), 1);
}

#[test]
fn first_declared_validator_wins_the_message() {
    let registry = Arc::new(Registry::new());
    let a = generate_validation_decorator(|_| false, "A rejected %1")
        .expect("valid configuration")
        .with_registry(Arc::clone(&registry));
    let b = generate_validation_decorator(|_| false, "B rejected %1")
        .expect("valid configuration")
        .with_registry(Arc::clone(&registry));

    let shape = accessor_shape();
    assert_ok!(a.apply(&Site::member("Sample", "value", &shape)));
    assert_ok!(b.apply(&Site::member("Sample", "value", &shape)));

    let mut value = GuardedField::new(registry, "Sample", "value", json!(0));
    let err = assert_err!(value.set(json!(1)));
    assert_eq!(err.message(), "A rejected 1");
}

#[test]
fn full_chain_passes_and_the_value_lands_exactly() {
    let registry = Arc::new(Registry::new());
    for i in 0..5 {
        let decorator = generate_validation_decorator(|_| true, format!("rule {i}: %1"))
            .expect("valid configuration")
            .with_registry(Arc::clone(&registry));
        let shape = accessor_shape();
        assert_ok!(decorator.apply(&Site::member("Sample", "value", &shape)));
    }

    let mut value = GuardedField::new(registry, "Sample", "value", json!(null));
    let supplied = json!({ "nested": [1, 2, 3], "label": "exact" });
    assert_ok!(value.set(supplied.clone()));
    assert_eq!(value.get(), supplied);
}

#[test]
fn getter_only_property_accepts_validators_without_protection() {
    let registry = Arc::new(Registry::new());
    let decorator = generate_validation_decorator(|_| false, "never valid: %1")
        .expect("valid configuration")
        .with_registry(Arc::clone(&registry));

    // Decorating a getter-only accessor is not a definition error.
    let shape = PropertyDescriptor::accessor(Some(Box::new(|| json!(7))), None);
    assert_ok!(decorator.apply(&Site::member("Sample", "readonly", &shape)));

    // The getter keeps working and writes are silent no-ops.
    let mut field = GuardedField::read_only(registry, "Sample", "readonly", json!(7));
    assert_eq!(field.get(), json!(7));
    assert_ok!(field.set(json!("ignored")));
    assert_eq!(field.get(), json!(7));
}
