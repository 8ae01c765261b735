use tests::prelude::*;

use pretty_assertions::assert_eq;
use strata::reflect::{
    coerce_to_record_sequence, model_field_values, set_collection_field, set_record_collection_field,
};

#[test]
fn coerce_list_of_models() {
    let models = vec![TestModel::new(1, "a", 0), TestModel::new(2, "b", 0)];

    let coerced = assert_ok!(coerce_to_record_sequence(models.to_value()));
    assert_eq!(coerced.len(), 2);
    assert_eq!(coerced[0].collection(), "test_models");
    assert_eq!(coerced[1].id(), 2u64);
    assert_eq!(coerced[1].str_id(), "2");
}

#[test]
fn coerce_reference_to_list_of_references() {
    let models = vec![Box::new(TestModel::new(9, "a", 0))];
    let value = Value::reference(models.to_value());

    let coerced = assert_ok!(coerce_to_record_sequence(value));
    assert_eq!(coerced.len(), 1);
    assert_eq!(coerced[0].id(), 9u64);

    let empty: Vec<TestParent> = vec![];
    assert!(assert_ok!(coerce_to_record_sequence(empty.to_value())).is_empty());
}

#[test]
fn coerce_errors() {
    assert_err_code!(
        coerce_to_record_sequence(Value::record(TestModel::default())),
        ErrorCode::SliceExpected
    );
    assert_err_code!(
        coerce_to_record_sequence(Value::reference(Value::from(1))),
        ErrorCode::SliceExpected
    );

    let addresses = vec![Address::default()];
    assert_err_code!(
        coerce_to_record_sequence(addresses.to_value()),
        ErrorCode::ElementsNotModel
    );

    let numbers = vec![1u64, 2];
    assert_err_code!(
        coerce_to_record_sequence(numbers.to_value()),
        ErrorCode::ElementsNotModel
    );
}

#[test]
fn field_values_across_models() {
    let models = vec![
        TestModel::new(1, "a", 10),
        TestModel::new(2, "b", 20),
        TestModel::new(3, "c", 30),
    ];
    let coerced = assert_ok!(coerce_to_record_sequence(models.to_value()));

    let ids = assert_ok!(model_field_values(&coerced, "id"));
    assert_eq!(ids, [Value::from(1u64), Value::from(2u64), Value::from(3u64)]);

    let ints = assert_ok!(model_field_values(&coerced, "int_val"));
    assert_eq!(ints, [Value::from(10i64), Value::from(20i64), Value::from(30i64)]);

    assert_err_code!(
        model_field_values(&coerced, "missing"),
        ErrorCode::FieldNotFound
    );
}

#[test]
fn set_list_field() {
    let mut value = Value::reference(Value::record(TestParent::default()));

    assert_ok!(set_collection_field(
        &mut value,
        "child_slice",
        vec![
            Value::record(TestModel::new(1, "a", 0)),
            Value::reference(Value::record(TestModel::new(2, "b", 0))),
        ],
    ));

    let parent = value.downcast_ref::<TestParent>().unwrap();
    let ids: Vec<u64> = parent.child_slice.iter().map(|child| child.id).collect();
    assert_eq!(ids, [1, 2]);
}

#[test]
fn set_list_of_references_field() {
    let mut parent = TestParent::default();

    assert_ok!(set_record_collection_field(
        &mut parent,
        "child_slice_ptr",
        vec![
            Value::record(TestModel::new(5, "five", 0)),
            Value::record(TestModel::new(6, "six", 0)),
        ],
    ));

    let names: Vec<&str> = parent
        .child_slice_ptr
        .iter()
        .map(|child| child.str_val.as_str())
        .collect();
    assert_eq!(names, ["five", "six"]);
}

#[test]
fn set_singular_fields() {
    let mut parent = TestParent::default();

    assert_ok!(set_record_collection_field(
        &mut parent,
        "child",
        vec![Value::record(TestModel::new(3, "three", 0))],
    ));
    assert_eq!(parent.child.id, 3);

    assert_ok!(set_record_collection_field(
        &mut parent,
        "child_ptr",
        vec![
            Value::record(TestModel::new(4, "four", 0)),
            Value::record(TestModel::new(5, "five", 0)),
        ],
    ));
    assert_eq!(parent.child_ptr.as_ref().unwrap().id, 4);

    // An empty set of values resets the field
    assert_ok!(set_record_collection_field(&mut parent, "child_ptr", vec![]));
    assert!(parent.child_ptr.is_none());

    assert_ok!(set_record_collection_field(&mut parent, "child", vec![]));
    assert_eq!(parent.child.id, 0);
}

#[test]
fn set_collection_field_errors() {
    let mut parent = TestParent::default();

    assert_err_code!(
        set_record_collection_field(&mut parent, "str_val", vec![Value::from("x")]),
        ErrorCode::UnsupportedFieldType
    );
    assert_err_code!(
        set_record_collection_field(&mut parent, "nope", vec![]),
        ErrorCode::UnknownField
    );
    assert_err_code!(
        set_record_collection_field(
            &mut parent,
            "child_slice",
            vec![Value::record(Address::default())]
        ),
        ErrorCode::TypeMismatch
    );
    assert_err_code!(
        set_record_collection_field(&mut parent, "child_slice", vec![Value::from(1)]),
        ErrorCode::TypeMismatch
    );
    assert!(parent.child_slice.is_empty());

    let mut by_value = Value::record(TestParent::default());
    assert_err_code!(
        set_collection_field(&mut by_value, "child_slice", vec![]),
        ErrorCode::PointerExpected
    );
}
