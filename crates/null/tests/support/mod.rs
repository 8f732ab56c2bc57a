//! Fixture models shared by the integration tests

#![allow(dead_code)]

use std::sync::Arc;

use elif_null::{Assignments, Body, Mimic, Registry, StaticModel};
use serde_json::Value;

/// Route stand-in logs to the test writer; `RUST_LOG=elif_null=debug` shows synthesis
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn business() -> StaticModel {
    StaticModel::new("Business").attributes(["id", "name"])
}

pub fn user() -> StaticModel {
    StaticModel::new("User")
        .attributes(["id", "name", "team_name", "business_id"])
        .belongs_to("business", "Business")
        .has_many("posts", "Post")
}

pub fn post() -> StaticModel {
    StaticModel::new("Post")
        .attributes(["id", "title", "description", "user_id"])
        .belongs_to("user", "User")
}

pub fn product() -> StaticModel {
    StaticModel::new("Product")
        .with_table_name("businesses")
        .attributes(["id", "name"])
}

pub fn comment() -> StaticModel {
    StaticModel::new("Comment")
        .with_table_name("posts")
        .attributes(["id", "title", "description", "user_id"])
}

/// Registry with Null classes for Business, User and Post and Void classes
/// for Product and Comment
pub fn app() -> Registry {
    init_tracing();
    let registry = Registry::new();
    define_app(&registry);
    registry
}

pub fn define_app(registry: &Registry) {
    registry
        .define_null(
            Arc::new(business()),
            Assignments::new(),
            Body::new().define("name", |_| Value::from("None")),
        )
        .unwrap();

    registry
        .define_null(
            Arc::new(user()),
            Assignments::new().assign(["team_name", "other"], "Unknown"),
            Body::new().define("name", |_| Value::from("None")),
        )
        .unwrap();

    registry
        .define_null(
            Arc::new(post()),
            Assignments::new().compute(["description"], |_| Value::from("From the callable!")),
            Body::new(),
        )
        .unwrap();

    registry
        .define_void(
            Arc::new(product()),
            Assignments::new().assign(["name"], "Unknown Product"),
            Body::new().define("display_name", |record| {
                Value::from(format!(
                    "Product: {}",
                    record.read("name").as_str().unwrap_or_default()
                ))
            }),
        )
        .unwrap();

    registry
        .define_void(Arc::new(comment()), Assignments::new(), Body::new())
        .unwrap();
}
