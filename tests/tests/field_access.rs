use tests::prelude::*;

use pretty_assertions::assert_eq;
use strata::reflect::{get_field_value, set_field_value_from_string, set_record_field_from_string};

fn test_model_ref() -> Value {
    Value::reference(Value::record(TestModel::new(1, "one", 10)))
}

#[test]
fn get_field_value_from_record_or_reference() {
    let model = TestModel::new(7, "seven", -7);

    let value = Value::record(model.clone());
    assert_eq!(assert_ok!(get_field_value(&value, "str_val")), "seven");
    assert_eq!(assert_ok!(get_field_value(&value, "int_val")), -7i64);

    let value = Value::reference(Value::record(model));
    assert_eq!(assert_ok!(get_field_value(&value, "id")), 7u64);
    assert_eq!(assert_ok!(get_field_value(&value, "my_parent")), Value::Null);
}

#[test]
fn get_field_value_sees_through_embedding() {
    let parent = TestParent {
        base: TestModel::new(3, "base", 30),
        child_id: 4,
        ..TestParent::default()
    };
    let value = Value::record(parent);

    assert_eq!(assert_ok!(get_field_value(&value, "id")), 3u64);
    assert_eq!(assert_ok!(get_field_value(&value, "str_val")), "base");
    assert_eq!(assert_ok!(get_field_value(&value, "child_id")), 4u64);

    // The embedded record itself is still addressable
    let base = assert_ok!(get_field_value(&value, "base"));
    assert_eq!(base.downcast_ref::<TestModel>().unwrap().int_val, 30);
}

#[test]
fn outer_fields_shadow_embedded_ones() {
    let customer = Customer {
        address: Address {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            zip: 12345,
        },
        city: "Shelbyville".to_string(),
        ..Customer::default()
    };

    assert_eq!(customer.field("city").unwrap(), "Shelbyville");
    assert_eq!(customer.field("street").unwrap(), "1 Main St");
    assert_eq!(customer.field("zip").unwrap(), 12345u32);
    assert!(customer.field("missing").is_none());
}

#[test]
fn get_field_value_errors() {
    assert_err_code!(
        get_field_value(&test_model_ref(), "nope"),
        ErrorCode::FieldNotFound
    );
    assert_err_code!(
        get_field_value(&Value::Null, "id"),
        ErrorCode::PointerOrStructExpected
    );
    assert_err_code!(
        get_field_value(&Value::from("text"), "id"),
        ErrorCode::StructExpected
    );
}

#[test]
fn set_string_field_round_trips() {
    let mut value = test_model_ref();

    assert_ok!(set_field_value_from_string(&mut value, "str_val", "hello world"));
    assert_eq!(assert_ok!(get_field_value(&value, "str_val")), "hello world");

    assert_ok!(set_field_value_from_string(&mut value, "str_val", ""));
    assert_eq!(assert_ok!(get_field_value(&value, "str_val")), "");
}

#[test]
fn set_integer_fields_from_strings() {
    let mut value = test_model_ref();

    assert_ok!(set_field_value_from_string(&mut value, "int_val", "22"));
    assert_eq!(assert_ok!(get_field_value(&value, "int_val")), 22i64);

    assert_ok!(set_field_value_from_string(&mut value, "int_val", "-22"));
    assert_eq!(assert_ok!(get_field_value(&value, "int_val")), -22i64);

    assert_ok!(set_field_value_from_string(&mut value, "id", "22"));
    assert_eq!(assert_ok!(get_field_value(&value, "id")), 22u64);

    let model = value.downcast_ref::<TestModel>().unwrap();
    assert_eq!(model.id, 22);
    assert_eq!(model.int_val, -22);
}

#[test]
fn set_field_value_from_string_errors() {
    let mut value = test_model_ref();

    assert_err_code!(
        set_field_value_from_string(&mut value, "int_val", "twenty"),
        ErrorCode::ParseNumber
    );
    assert_err_code!(
        set_field_value_from_string(&mut value, "id", "-1"),
        ErrorCode::ParseNumber
    );
    assert_err_code!(
        set_field_value_from_string(&mut value, "nope", "1"),
        ErrorCode::UnknownField
    );

    let err = assert_err!(set_field_value_from_string(&mut value, "my_parent", "1"));
    assert_eq!(err.code(), ErrorCode::CannotConvertTo(Kind::Record));
    assert_eq!(err.code().to_string(), "cannot_convert_to_record");

    // A failed assignment leaves the field alone
    assert_eq!(assert_ok!(get_field_value(&value, "int_val")), 10i64);

    let mut by_value = Value::record(TestModel::default());
    assert_err_code!(
        set_field_value_from_string(&mut by_value, "str_val", "x"),
        ErrorCode::PointerExpected
    );

    let mut to_scalar = Value::reference(Value::from(1));
    assert_err_code!(
        set_field_value_from_string(&mut to_scalar, "str_val", "x"),
        ErrorCode::PointerToStructExpected
    );
}

#[test]
fn set_embedded_field_on_concrete_record() {
    let mut parent = TestParent::default();

    assert_ok!(set_record_field_from_string(&mut parent, "int_val", "5"));
    assert_ok!(set_record_field_from_string(&mut parent, "child_ptr_id", "6"));

    assert_eq!(parent.base.int_val, 5);
    assert_eq!(parent.child_ptr_id, 6);
}

#[test]
fn set_field_converts_between_integer_widths() {
    let mut model = TestModel::default();

    assert_ok!(model.set_field("int_val", Value::from(9u8)));
    assert_eq!(model.int_val, 9);

    assert_err_code!(
        model.set_field("id", Value::from(-1i32)),
        ErrorCode::ValueOutOfRange
    );
    assert_err_code!(
        model.set_field("str_val", Value::from(1)),
        ErrorCode::TypeMismatch
    );
}
