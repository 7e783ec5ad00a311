//! Behavior tests for validation through the DSL
//!
//! These tests cover every schema variant built through the DSL and shorthand
//! helpers, checked through the public entry points.

use conform_core::{
    is_valid, validate, validation_error, ErrorDetails, PathSegment, Schema, Value,
};
use conform_dsl::{schema, schema_with, shorthand, Dsl};

fn sym(name: &str) -> Value {
    Value::symbol(name)
}

#[cfg(test)]
mod scalars_and_sequences {
    use super::*;

    #[test]
    fn test_validates_scalars() {
        let schema = Schema::string();
        assert!(validate(&schema, &Value::from("Johnny")).is_ok());
        assert!(validate(&schema, &Value::from(5)).is_err());
    }

    #[test]
    fn test_validates_variable_length_arrays() {
        let schema = shorthand::sequence(vec![Schema::string()]);
        assert!(validate(&schema, &Value::array(["cat", "bat"])).is_ok());
        assert!(validate(&schema, &Value::array([Value::from(6), Value::from("bat")])).is_err());
        assert!(validate(&schema, &Value::from("hi")).is_err());
    }

    #[test]
    fn test_validates_fixed_length_arrays() {
        let schema = shorthand::sequence(vec![Schema::string(), Schema::integer()]);
        assert!(validate(&schema, &Value::array([Value::from("cat"), Value::from(5)])).is_ok());
        assert!(validate(&schema, &Value::array(["cat"])).is_err());
        assert!(validate(
            &schema,
            &Value::array([Value::from("cat"), Value::from(5), Value::from("horse")])
        )
        .is_err());
    }
}

#[cfg(test)]
mod hashes {
    use super::*;

    #[test]
    fn test_validates_required_keys() -> anyhow::Result<()> {
        let schema = shorthand::symbol_hash([("name", Schema::string()), ("age", Schema::integer())])?;

        let jimmy = |extra: Option<(Value, Value)>, name: Value| {
            let mut entries = vec![(sym("name"), name), (sym("age"), Value::from(25))];
            entries.extend(extra);
            Value::map(entries)
        };

        assert!(validate(&schema, &jimmy(None, Value::from("Jimmy"))).is_ok());
        assert!(validate(&schema, &jimmy(Some((sym("extra"), Value::from(true))), Value::from("Jimmy"))).is_err());
        assert!(validate(&schema, &jimmy(None, Value::from(5))).is_err());
        assert!(validate(&schema, &Value::map([(sym("age"), 25)])).is_err());
        Ok(())
    }

    #[test]
    fn test_validates_optional_keys() -> anyhow::Result<()> {
        let schema = schema(|s| {
            s.hash()
                .required_sym("required", s.string())
                .optional_sym("optional1", s.string())
                .optional_sym("optional2", s.string())
                .build()
        })?;

        assert!(validate(&schema, &Value::map([(sym("required"), "hello")])).is_ok());
        assert!(validate(
            &schema,
            &Value::map([(sym("required"), "hello"), (sym("optional1"), "world")])
        )
        .is_ok());
        assert!(validate(
            &schema,
            &Value::map([(sym("required"), "hello"), (sym("optional2"), "world")])
        )
        .is_ok());
        assert!(validate(&schema, &Value::map([(sym("optional"), "world")])).is_err());
        Ok(())
    }

    #[test]
    fn test_validates_generic_hashes() -> anyhow::Result<()> {
        let schema = schema(|s| Ok(s.hash_of(s.integer(), s.string())))?;
        assert!(validate(&schema, &Value::map([(1, "a"), (2, "b")])).is_ok());
        assert!(validate(
            &schema,
            &Value::map([(Value::from(1), Value::from("a")), (Value::from(2), Value::from(3))])
        )
        .is_err());
        assert!(validate(&schema, &Value::from("hi")).is_err());
        Ok(())
    }

    #[test]
    fn test_handles_arbitrary_nesting() -> anyhow::Result<()> {
        let item = shorthand::symbol_hash([
            ("item_id", Schema::integer()),
            ("item_name", Schema::string()),
        ])?;
        let schema = shorthand::symbol_hash([
            ("list_name", Schema::string()),
            ("list_items", shorthand::sequence(vec![item])),
        ])?;

        let entry = |id: i64, name: &str| {
            Value::map([(sym("item_id"), Value::from(id)), (sym("item_name"), Value::from(name))])
        };
        let good = Value::map([
            (sym("list_name"), Value::from("Blog Posts")),
            (
                sym("list_items"),
                Value::array([entry(1, "Hello world"), entry(3, "Hello moon"), entry(9, "Hello sun")]),
            ),
        ]);
        let bad = Value::map([
            (sym("list_name"), Value::from("Blog Posts")),
            (
                sym("list_items"),
                Value::array([
                    Value::array([Value::from(1), Value::from("Hello world")]),
                    Value::array([Value::from(3), Value::from("Hello moon")]),
                    Value::array([Value::from(9), Value::from("Hello sun")]),
                ]),
            ),
        ]);

        assert!(validate(&schema, &good).is_ok());
        assert!(validate(&schema, &bad).is_err());
        Ok(())
    }
}

#[cfg(test)]
mod combinators {
    use super::*;

    #[test]
    fn test_validates_generic_sets() -> anyhow::Result<()> {
        let schema = schema(|s| Ok(s.set_of(s.integer())))?;
        assert!(validate(&schema, &Value::set([1, 2, 3])).is_ok());
        assert!(validate(&schema, &Value::set(["hello"])).is_err());
        Ok(())
    }

    #[test]
    fn test_validates_with_predicates() -> anyhow::Result<()> {
        let schema = schema(|s| {
            Ok(s.named_predicate("is even", |v| v.as_i64().is_some_and(|n| n % 2 == 0)))
        })?;
        assert!(validate(&schema, &Value::from(4)).is_ok());
        assert!(validate(&schema, &Value::from(5)).is_err());
        Ok(())
    }

    #[test]
    fn test_validates_enums() -> anyhow::Result<()> {
        let members = || vec![sym("a"), sym("b"), sym("c")];
        let without_subschema = schema(|s| Ok(s.enumeration(members())))?;
        let with_subschema = schema(|s| Ok(s.enumeration_of(members(), s.symbol())))?;

        for schema in [without_subschema, with_subschema] {
            assert!(validate(&schema, &sym("a")).is_ok());
            assert!(validate(&schema, &sym("b")).is_ok());
            assert!(validate(&schema, &sym("c")).is_ok());
            assert!(validate(&schema, &sym("d")).is_err());
        }
        Ok(())
    }

    #[test]
    fn test_validates_booleans() -> anyhow::Result<()> {
        let schema = schema(|s| Ok(s.boolean()))?;
        assert!(validate(&schema, &Value::from(true)).is_ok());
        assert!(validate(&schema, &Value::from(false)).is_ok());
        assert!(validate(&schema, &Value::Null).is_err());
        assert!(validate(&schema, &Value::from(5)).is_err());
        Ok(())
    }

    #[test]
    fn test_validates_anything() -> anyhow::Result<()> {
        let schema = schema(|s| Ok(s.any()))?;
        assert!(validate(&schema, &Value::from(true)).is_ok());
        assert!(validate(&schema, &Value::from(false)).is_ok());
        assert!(validate(&schema, &Value::Null).is_ok());
        Ok(())
    }

    #[test]
    fn test_validates_eithers() -> anyhow::Result<()> {
        let schema = schema(|s| s.either(vec![s.string(), s.integer()]))?;
        assert!(validate(&schema, &Value::from("hi")).is_ok());
        assert!(validate(&schema, &Value::from(5555)).is_ok());
        assert!(validate(&schema, &Value::from(true)).is_err());

        assert!(conform_dsl::schema(|s| s.either(vec![s.string()])).is_err());
        Ok(())
    }

    #[test]
    fn test_validates_maybes() -> anyhow::Result<()> {
        let schema = schema(|s| Ok(s.maybe(s.integer())))?;
        assert!(validate(&schema, &Value::from(5)).is_ok());
        assert!(validate(&schema, &Value::Null).is_ok());
        assert!(validate(&schema, &Value::from("hello")).is_err());
        Ok(())
    }
}

#[cfg(test)]
mod custom_dsl {
    use super::*;

    struct TestDsl;

    impl Dsl for TestDsl {}

    impl TestDsl {
        fn even_integer(&self) -> Schema {
            self.predicate(|v| v.as_i64().is_some_and(|n| n % 2 == 0))
        }
    }

    #[test]
    fn test_can_use_a_custom_dsl() -> anyhow::Result<()> {
        let schema = schema_with(&TestDsl, |s| Ok(s.even_integer()))?;
        assert!(is_valid(&schema, &Value::from(6)));
        assert!(!is_valid(&schema, &Value::from(7)));
        Ok(())
    }

    #[derive(Debug)]
    struct NonEmptyText;

    impl conform_core::CustomSchema for NonEmptyText {
        fn validate(&self, value: &Value) -> Result<(), ErrorDetails> {
            match value.as_str() {
                Some(text) if !text.is_empty() => Ok(()),
                _ => Err(ErrorDetails::new(value.clone(), "is not non-empty text")),
            }
        }

        fn describe(&self) -> String {
            "non_empty_text".to_string()
        }
    }

    #[test]
    fn test_registers_custom_variants() -> anyhow::Result<()> {
        let schema = schema(|s| Ok(s.hash_of(s.symbol(), s.custom(NonEmptyText))))?;
        assert_eq!(schema.to_string(), "hash_of(Symbol => non_empty_text)");

        let value = Value::map([(sym("title"), "Hello"), (sym("body"), "")]);
        let details = validation_error(&schema, &value).expect("empty body should fail");
        assert_eq!(details.key_path(), &[PathSegment::Key(sym("body"))]);
        assert_eq!(details.to_string(), "The value at [:body] is not non-empty text: \"\"");
        Ok(())
    }
}

#[cfg(test)]
mod entry_points {
    use super::*;

    #[test]
    fn test_validation_error_returns_none_on_success() {
        assert!(validation_error(&Schema::float(), &Value::from(5.0)).is_none());
    }

    #[test]
    fn test_validation_error_returns_details() -> anyhow::Result<()> {
        let schema = shorthand::symbol_hash([("floats", shorthand::sequence(vec![Schema::float()]))])?;
        let value = Value::map([(
            sym("floats"),
            Value::array([Value::from(1.0), Value::from("wrong"), Value::from(3.0)]),
        )]);

        let error = validation_error(&schema, &value).expect("should fail");
        assert_eq!(error.failing_value(), &Value::from("wrong"));
        assert!(!error.reason().is_empty());
        assert_eq!(
            error.key_path(),
            &[PathSegment::Key(sym("floats")), PathSegment::Index(1)]
        );
        Ok(())
    }

    #[test]
    fn test_is_valid_returns_boolean() {
        assert!(is_valid(&Schema::float(), &Value::from(5.0)));
        assert!(!is_valid(&Schema::float(), &Value::from("hello")));
    }

    #[test]
    fn test_validate_error_carries_details() {
        let err = validate(&Schema::integer(), &Value::from("5")).unwrap_err();
        assert_eq!(err.details().failing_value(), &Value::from("5"));
        assert_eq!(err.to_string(), "The root value is not of type Integer: \"5\"");
    }
}
