use tests::prelude::*;

use strata::schema::{descriptor_for, install, installed};

// The installed schema is process-wide, so everything that touches it
// lives in this one test.
#[test]
fn install_publishes_schema_once() {
    init_logging();

    assert!(installed().is_none());
    assert!(descriptor_for("test_models").is_none());

    let schema = assert_ok!(models!(TestModel, TestParent).build());
    let published = assert_ok!(install(schema.clone()));
    assert_eq!(*published, schema);

    let info = descriptor_for("test_parents").unwrap();
    assert_eq!(info.name, "TestParent");
    assert_eq!(
        info.field("child").unwrap().local_key_field(),
        Some("child_id")
    );
    assert!(descriptor_for("customers").is_none());

    let other = assert_ok!(models!(Customer).build());
    assert_err_code!(install(other), ErrorCode::SchemaAlreadyInstalled);

    // The first schema stays in place
    assert!(descriptor_for("customers").is_none());
    assert_eq!(installed().unwrap().len(), 2);
}
