use tests::prelude::*;

use pretty_assertions::assert_eq;
use strata::schema::{Builder, ModelInfo};

#[test]
fn test_model_fields_and_primary_key() {
    init_logging();

    let info = assert_ok!(ModelInfo::of::<TestModel>());

    assert_eq!(info.name, "TestModel");
    assert_eq!(info.collection, "test_models");
    assert_eq!(info.pk_field, "id");
    assert_names!(
        info.fields.keys(),
        ["id", "test_parent_id", "my_parent", "my_parent_id", "str_val", "int_val"]
    );

    let id = info.field("id").unwrap();
    assert!(id.primary_key);
    assert_eq!(id.ty, u64::ty());

    let test_parent_id = info.field("test_parent_id").unwrap();
    assert!(test_parent_id.ignore_if_zero);
    assert!(!test_parent_id.primary_key);

    // Relation fields are not columns
    let my_parent = info.field("my_parent").unwrap();
    assert!(my_parent.targets_model());
    assert!(!my_parent.is_persisted());
    assert!(my_parent.relation.is_none(), "relations resolve on build");
}

#[test]
fn embedded_fields_are_flattened() {
    let info = assert_ok!(ModelInfo::of::<TestParent>());

    assert_eq!(info.collection, "test_parents");
    assert_eq!(info.pk_field, "id");
    assert_names!(
        info.fields.keys(),
        [
            "id",
            "test_parent_id",
            "my_parent",
            "my_parent_id",
            "str_val",
            "int_val",
            "child",
            "child_id",
            "child_ptr",
            "child_ptr_id",
            "child_slice",
            "child_slice2",
            "child_slice_ptr",
        ]
    );
    assert!(info.field("base").is_none());
}

#[test]
fn tag_options_map_onto_fields() {
    let info = assert_ok!(ModelInfo::of::<Customer>());

    assert_eq!(info.collection, "customers");
    assert_eq!(info.pk_field, "code");

    // The outer `city` shadows the embedded one
    assert_names!(
        info.fields.keys(),
        ["code", "street", "zip", "name", "city", "notes"]
    );

    let name = info.field("name").unwrap();
    assert_eq!(name.backend_name, "full_name");
    assert!(name.not_null);
    assert!(!name.unique);

    let city = info.field("city").unwrap();
    assert!(city.index);
    assert_eq!(city.backend_name, "city");

    let notes = info.field("notes").unwrap();
    assert!(notes.ignore);
    assert!(!notes.is_persisted());
}

#[test]
fn backend_names_map_back_to_fields() {
    let info = assert_ok!(ModelInfo::of::<Customer>());

    assert_eq!(info.map_backend_name("full_name"), Some("name"));
    assert_eq!(info.map_backend_name("street"), Some("street"));
    assert_eq!(info.map_backend_name("name"), None);
    assert_eq!(info.map_backend_name("notes"), None);
}

#[test]
fn field_named_id_in_any_case_is_the_primary_key() {
    #[derive(Debug, Default, Clone, strata::Model)]
    struct Upper {
        #[allow(non_snake_case)]
        ID: u64,
        label: String,
    }

    let info = assert_ok!(ModelInfo::of::<Upper>());
    assert_eq!(info.pk_field, "ID");
    assert_eq!(info.field("ID").unwrap().backend_name, "id");
}

#[test]
fn tagged_primary_key_wins_over_id() {
    #[derive(Debug, Default, Clone, strata::Model)]
    struct Keyed {
        id: u64,
        #[db("primary-key;name:key")]
        slug: String,
    }

    let info = assert_ok!(ModelInfo::of::<Keyed>());
    assert_eq!(info.pk_field, "slug");
    assert!(!info.field("id").unwrap().primary_key);
    assert_eq!(info.field("slug").unwrap().backend_name, "key");
}

#[test]
fn missing_primary_key() {
    #[derive(Debug, Default, Clone, strata::Model)]
    struct NoKey {
        name: String,
        #[db("-")]
        id: u64,
    }

    assert_err_code!(ModelInfo::of::<NoKey>(), ErrorCode::PrimaryKeyNotFound);
}

#[test]
fn multiple_primary_keys() {
    #[derive(Debug, Default, Clone, strata::Model)]
    struct TwoKeys {
        #[db("primary-key")]
        a: u64,
        #[db("primary-key")]
        b: u64,
    }

    let err = assert_err_code!(ModelInfo::of::<TwoKeys>(), ErrorCode::MultiplePrimaryKeys);
    assert!(err.to_string().contains("a, b"), "{err}");

    // Identity accessors resolve the key the same way
    let mut model = TwoKeys { a: 1, b: 2 };
    assert_eq!(model.id(), Value::Null);
    assert_eq!(model.str_id(), "");
    assert_err_code!(model.set_id(Value::from(3u64)), ErrorCode::MultiplePrimaryKeys);
    assert_err_code!(model.set_str_id("3"), ErrorCode::MultiplePrimaryKeys);
    assert_eq!((model.a, model.b), (1, 2));
}

#[test]
fn ignored_id_is_not_an_identity() {
    #[derive(Debug, Default, Clone, strata::Model)]
    struct Hidden {
        #[db("-")]
        id: u64,
    }

    let mut model = Hidden { id: 4 };
    assert_eq!(model.id(), Value::Null);
    assert_err_code!(model.set_str_id("5"), ErrorCode::PrimaryKeyNotFound);
    assert_eq!(model.id, 4);
}

#[test]
fn malformed_tag_fails_the_build() {
    #[derive(Debug, Default, Clone, strata::Model)]
    struct BadTag {
        id: u64,
        #[db("name")]
        label: String,
    }

    let err = assert_err_code!(ModelInfo::of::<BadTag>(), ErrorCode::BuildFieldInfoError);
    assert_eq!(err.root_cause().code(), ErrorCode::InvalidName);
    assert!(err.to_string().contains("BadTag"), "{err}");
}

#[test]
fn duplicate_backend_name() {
    #[derive(Debug, Default, Clone, strata::Model)]
    struct Clash {
        id: u64,
        #[db("name:label")]
        title: String,
        label: String,
    }

    assert_err_code!(ModelInfo::of::<Clash>(), ErrorCode::DuplicateBackendName);
}

#[test]
fn build_from_sample_value() {
    let sample = Value::reference(Value::record(TestParent::default()));
    let info = assert_ok!(ModelInfo::build(&sample));
    assert_eq!(info.name, "TestParent");

    let sample = Value::record(Customer::default());
    assert_eq!(assert_ok!(ModelInfo::build(&sample)).pk_field, "code");

    assert_err_code!(ModelInfo::build(&Value::from(1)), ErrorCode::StructExpected);
    assert_err_code!(ModelInfo::build(&Value::Null), ErrorCode::StructExpected);
}

#[test]
fn register_model_under_a_collection_name() {
    let mut builder = Builder::new();

    let info = assert_ok!(builder.register_model(
        "parents",
        &Value::reference(Value::record(TestParent::default()))
    ));
    assert_eq!(info.collection, "parents");

    assert_err_code!(
        builder.register_model("numbers", &Value::from(5u8)),
        ErrorCode::StructExpected
    );
}

#[test]
fn register_model_rejects_plain_records() {
    #[derive(Debug, Default, Clone, strata::Record)]
    struct Tally {
        id: u64,
        count: u32,
    }

    let mut builder = Builder::new();
    assert_err_code!(
        builder.register_model("tallies", &Value::record(Tally::default())),
        ErrorCode::ElementsNotModel
    );
    assert_err_code!(
        builder.register_model("addresses", &Value::record(Address::default())),
        ErrorCode::ElementsNotModel
    );

    // Nothing was registered
    assert_ok!(builder.register_model("tallies", &Value::record(Customer::default())));
    assert_eq!(assert_ok!(builder.build()).len(), 1);
}

#[test]
fn duplicate_registration() {
    let mut builder = models!(TestModel);

    assert_err_code!(builder.register::<TestModel>(), ErrorCode::DuplicateCollection);

    // Same type under another name
    assert_err_code!(
        builder.register_model("others", &Value::record(TestModel::default())),
        ErrorCode::DuplicateCollection
    );

    // Another type under the same name
    assert_err_code!(
        builder.register_model("test_models", &Value::record(Customer::default())),
        ErrorCode::DuplicateCollection
    );
}

#[test]
fn schema_lookup() {
    init_logging();

    let schema = assert_ok!(models!(TestModel, TestParent, Customer).build());

    assert_eq!(schema.len(), 3);
    assert_names!(
        schema.models().map(|model| &model.collection),
        ["test_models", "test_parents", "customers"]
    );
    assert_eq!(schema.model("customers").unwrap().name, "Customer");
    assert_eq!(schema.model_of::<TestParent>().unwrap().collection, "test_parents");
    assert!(schema.model("addresses").is_none());
    assert!(schema.model_of::<Address>().is_none());
}
