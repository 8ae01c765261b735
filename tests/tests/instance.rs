use tests::prelude::*;

use pretty_assertions::assert_eq;
use strata::reflect::{new_instance, new_sequence, Type};

#[test]
fn new_instance_from_record() {
    let sample = Value::record(TestModel::new(5, "five", 5));
    let instance = assert_ok!(new_instance(&sample));

    assert!(instance.is_ref());
    let model = instance.downcast_ref::<TestModel>().unwrap();
    assert_eq!(model.id, 0);
    assert_eq!(model.str_val, "");
}

#[test]
fn new_instance_from_reference_and_list() {
    let sample = Value::reference(Value::record(TestParent::default()));
    let instance = assert_ok!(new_instance(&sample));
    assert!(instance.downcast_ref::<TestParent>().is_some());

    let sample = Vec::<TestModel>::new().to_value();
    let instance = assert_ok!(new_instance(&sample));
    assert!(instance.downcast_ref::<TestModel>().is_some());

    let sample = Vec::<Box<TestModel>>::new().to_value();
    let instance = assert_ok!(new_instance(&sample));
    assert!(instance.downcast_ref::<TestModel>().is_some());
}

#[test]
fn new_instance_errors() {
    assert_err_code!(new_instance(&Value::from(1)), ErrorCode::StructExpected);
    assert_err_code!(new_instance(&Value::Null), ErrorCode::StructExpected);
    assert_err_code!(
        new_instance(&Vec::<String>::new().to_value()),
        ErrorCode::StructExpected
    );
}

#[test]
fn new_sequence_keeps_reference_shape() {
    let sequence = assert_ok!(new_sequence(&Value::record(TestModel::default())));
    let list = sequence.as_list().unwrap();
    assert!(list.is_empty());
    assert_eq!(list.ty, TestModel::ty());

    let sample = Value::reference(Value::record(TestModel::default()));
    let sequence = assert_ok!(new_sequence(&sample));
    assert_eq!(sequence.as_list().unwrap().ty, Type::reference(TestModel::ty()));

    let sequence = assert_ok!(new_sequence(&Value::from("text")));
    assert_eq!(sequence.as_list().unwrap().ty, Type::String);

    assert_err_code!(new_sequence(&Value::Null), ErrorCode::PointerOrStructExpected);
}

#[test]
fn model_identity() {
    let mut model = TestModel::new(42, "x", 0);

    assert_eq!(model.collection(), "test_models");
    assert_eq!(model.id(), 42u64);
    assert_eq!(model.str_id(), "42");

    assert_ok!(model.set_id(Value::from(7u64)));
    assert_eq!(model.id, 7);

    assert_ok!(model.set_str_id("99"));
    assert_eq!(model.id, 99);

    assert_err_code!(model.set_str_id("abc"), ErrorCode::ParseNumber);

    model.id = 0;
    assert_eq!(model.str_id(), "");
}

#[test]
fn model_identity_through_embedding() {
    let mut parent = TestParent::default();

    assert_eq!(parent.collection(), "test_parents");
    assert_ok!(parent.set_str_id("12"));
    assert_eq!(parent.base.id, 12);
    assert_eq!(parent.str_id(), "12");
}

#[test]
fn string_keyed_model_identity() {
    let mut customer = Customer::default();

    assert_eq!(customer.str_id(), "");
    assert_ok!(customer.set_str_id("C-001"));
    assert_eq!(customer.code, "C-001");
    assert_eq!(customer.id(), "C-001");
    assert_eq!(customer.str_id(), "C-001");
}

#[test]
fn models_through_trait_objects() {
    let value = Value::record(TestModel::new(3, "three", 0));

    let record = value.as_record().unwrap();
    assert_eq!(record.shape().name, "TestModel");
    assert_eq!(record.shape().collection, Some("test_models"));
    assert_eq!(record.as_model().unwrap().str_id(), "3");

    let address = Value::record(Address::default());
    assert!(address.as_record().unwrap().as_model().is_none());
    assert!(!Address::record_shape().is_model());
}

#[test]
fn zero_values() {
    assert!(Value::record(TestModel::default()).is_zero());
    assert!(!Value::record(TestModel::new(1, "", 0)).is_zero());
    assert!(Value::from(0u32).is_zero());
    assert!(Value::from("").is_zero());
    assert!(!Value::reference(Value::from(0)).is_zero());
    assert!(Value::Null.is_zero());
}
