//! Record types shared by the integration tests.
//!
//! `TestModel` and `TestParent` relate to each other in every supported
//! way: inferred and explicit has-one, inferred and explicit belongs-to,
//! and many-to-many.

#[derive(Debug, Default, Clone, strata::Model)]
pub struct TestModel {
    pub id: u64,

    #[db("ignore-zero")]
    pub test_parent_id: u64,

    #[db("has-one:my_parent_id:id")]
    pub my_parent: Option<Box<TestParent>>,

    #[db("ignore-zero")]
    pub my_parent_id: u64,

    pub str_val: String,
    pub int_val: i64,
}

#[derive(Debug, Default, Clone, strata::Model)]
#[collection = "test_parents"]
pub struct TestParent {
    #[embed]
    pub base: TestModel,

    pub child: TestModel,
    pub child_id: u64,

    pub child_ptr: Option<Box<TestModel>>,
    pub child_ptr_id: u64,

    pub child_slice: Vec<TestModel>,

    #[db("belongs-to:id:my_parent_id")]
    pub child_slice2: Vec<TestModel>,

    #[db("m2m")]
    pub child_slice_ptr: Vec<Box<TestModel>>,
}

/// A plain record: embeddable, but not a model.
#[derive(Debug, Default, Clone, PartialEq, strata::Record)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip: u32,
}

/// A model keyed by a string, with an embedded record whose `city` it
/// shadows.
#[derive(Debug, Default, Clone, strata::Model)]
pub struct Customer {
    #[db("primary-key")]
    pub code: String,

    #[embed]
    pub address: Address,

    #[db("name:full_name;not-null")]
    pub name: String,

    #[db("index")]
    pub city: String,

    #[db("-")]
    pub notes: String,
}

impl TestModel {
    pub fn new(id: u64, str_val: &str, int_val: i64) -> TestModel {
        TestModel {
            id,
            str_val: str_val.to_string(),
            int_val,
            ..TestModel::default()
        }
    }
}
