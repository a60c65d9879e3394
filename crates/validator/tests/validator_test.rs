//! End-to-end validation of Rust records.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rstest::rstest;
use strata_validator::prelude::*;
use strata_validator::record;

fn rendered(errors: &ValidationErrors) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

// ============================================================================
// RECORDS
// ============================================================================

struct User {
    name: String,
    age: u32,
}

record!(User {
    name as "Name",
    age as "Age",
});

struct Order {
    items: Vec<Item>,
}

struct Item {
    qty: i64,
}

record!(Order { items as "Items" });
record!(Item { qty as "Qty" });

struct Account {
    premium: bool,
    premium_until: String,
}

record!(Account {
    premium as "Premium",
    premium_until as "PremiumUntil",
});

struct Profile {
    email: String,
    nickname: Option<String>,
}

record!(Profile {
    email as "Email" => "required,emial",
    nickname as "Nickname" => "length:3:12",
});

struct Address {
    city: String,
}

struct Customer {
    billing: Address,
    contacts: HashMap<String, Address>,
}

record!(Address { city as "City" });
record!(Customer {
    billing as "BillingAddr",
    contacts as "Contacts",
});

// ============================================================================
// CORE SCENARIOS
// ============================================================================

#[test]
fn errors_follow_field_declaration_order() {
    let validator = Validator::new()
        .rule("Age", range(18.0, 100.0))
        .rule("Name", required());

    let errors = validator.validate_all(&User {
        name: String::new(),
        age: 15,
    });

    assert_eq!(
        rendered(&errors),
        [
            "Name: value is required",
            "Age: value must be greater than or equal to 18",
        ]
    );
}

#[test]
fn wildcard_rule_reports_concrete_index() {
    let validator = Validator::new().rule("Items[].Qty", min(0.0));

    let errors = validator.validate_all(&Order {
        items: vec![Item { qty: -1 }],
    });

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].field(), "Items[0].Qty");
    assert_eq!(
        errors.to_string(),
        "Items[0].Qty: value must be greater than or equal to 0"
    );
}

#[rstest]
#[case::premium_off(false, "", 0)]
#[case::premium_on_empty(true, "", 1)]
#[case::premium_on_set(true, "2030-01-01", 0)]
fn conditional_rule_follows_sibling_flag(
    #[case] premium: bool,
    #[case] until: &str,
    #[case] expected: usize,
) {
    let validator = Validator::new().rule("PremiumUntil", if_field("Premium", required()));

    let errors = validator.validate_all(&Account {
        premium,
        premium_until: until.to_string(),
    });

    assert_eq!(errors.len(), expected);
    assert!(errors.iter().all(|e| e.field() == "PremiumUntil"));
}

#[test]
fn unknown_annotation_rule_is_a_configuration_error() {
    let validator = Validator::new();

    let errors = validator.validate_all(&Profile {
        email: "ana@example.com".to_string(),
        nickname: None,
    });

    assert_eq!(errors.len(), 1);
    let error = &errors.errors()[0];
    assert_eq!(error.field(), "Email");
    assert_eq!(error.kind(), ErrorKind::Configuration);
    assert_eq!(error.message(), "rule `emial` is not registered");
}

// ============================================================================
// AGGREGATION
// ============================================================================

#[test]
fn record_without_rules_is_valid() {
    let validator = Validator::from_registry(Registry::new());
    let order = Order {
        items: vec![Item { qty: -5 }, Item { qty: 0 }],
    };
    assert!(validator.validate(&order).is_ok());
}

#[test]
fn failing_rules_keep_registration_order() {
    let validator = Validator::new()
        .rule("Name", required())
        .rule("Name", min_length(3))
        .rule("Name", max_length(10))
        .rule("Name", with_message(required(), "name missing"));

    let errors = validator.validate_all(&User {
        name: String::new(),
        age: 30,
    });

    assert_eq!(
        rendered(&errors),
        [
            "Name: value is required",
            "Name: length must be at least 3",
            "Name: name missing",
        ]
    );
}

#[test]
fn path_index_is_stable() {
    let validator = Validator::new().rule("Items[].Qty", positive());

    for tail in 0..4 {
        let mut items = vec![Item { qty: 1 }, Item { qty: 0 }];
        items.extend((0..tail).map(|_| Item { qty: 2 }));

        let errors = validator.validate_all(&Order { items });
        assert_eq!(rendered(&errors), ["Items[1].Qty: value must be positive"]);
    }
}

#[test]
fn concrete_and_pattern_rules_both_apply() {
    let validator = Validator::new()
        .rule("Items[0].Qty", max(10.0))
        .rule("Items[].Qty", min(0.0));

    let errors = validator.validate_all(&Order {
        items: vec![Item { qty: 20 }, Item { qty: -1 }],
    });

    assert_eq!(
        rendered(&errors),
        [
            "Items[0].Qty: value must be less than or equal to 10",
            "Items[1].Qty: value must be greater than or equal to 0",
        ]
    );
}

#[test]
fn wildcards_can_be_disabled() {
    let validator = Validator::new()
        .with_config(ValidatorConfig::default().with_wildcard_paths(false))
        .rule("Items[].Qty", min(0.0));

    let errors = validator.validate_all(&Order {
        items: vec![Item { qty: -1 }],
    });
    assert!(errors.is_empty());
}

#[test]
fn sequence_elements_are_dispatched() {
    let validator = Validator::new().rule("Items[]", custom(|_| Err(RuleError::invalid("nope"))));

    let errors = validator.validate_all(&Order {
        items: vec![Item { qty: 1 }, Item { qty: 2 }],
    });

    assert_eq!(rendered(&errors), ["Items[0]: nope", "Items[1]: nope"]);
}

#[test]
fn each_reports_first_failing_element() {
    let validator = Validator::new().rule("Items", each(custom(|v| match v {
        Value::Record(r) if r.field("Qty") == Some(Value::Int(0)) => {
            Err(RuleError::invalid("empty line"))
        }
        _ => Ok(()),
    })));

    let errors = validator.validate_all(&Order {
        items: vec![Item { qty: 3 }, Item { qty: 0 }, Item { qty: 0 }],
    });

    assert_eq!(rendered(&errors), ["Items: item at index 1: empty line"]);
}

// ============================================================================
// NESTING
// ============================================================================

#[test]
fn nested_records_and_map_entries() {
    let validator = Validator::new()
        .rule("BillingAddr.City", required())
        .rule("Contacts[].City", required());

    let customer = Customer {
        billing: Address {
            city: String::new(),
        },
        contacts: HashMap::from([
            (
                "work".to_string(),
                Address {
                    city: String::new(),
                },
            ),
            (
                "home".to_string(),
                Address {
                    city: "Lisbon".to_string(),
                },
            ),
        ]),
    };

    let errors = validator.validate_all(&customer);
    assert_eq!(
        rendered(&errors),
        [
            "BillingAddr.City: value is required",
            "Contacts[work].City: value is required",
        ]
    );
}

// ============================================================================
// ANNOTATIONS
// ============================================================================

struct Signup {
    username: String,
    age: i32,
    role: String,
    tags: Vec<String>,
}

record!(Signup {
    username as "Username" => "required,length:3:16,pattern=^[a-z0-9_]+$",
    age as "Age" => "min=13",
    role as "Role" => "one_of:admin:member",
    tags as "Tags" => "unique",
});

#[test]
fn annotations_resolve_builtins_with_arguments() {
    let validator = Validator::new();

    let ok = Signup {
        username: "ana_b".to_string(),
        age: 30,
        role: "member".to_string(),
        tags: vec!["a".to_string(), "b".to_string()],
    };
    assert!(validator.validate(&ok).is_ok());

    let bad = Signup {
        username: "A".to_string(),
        age: 9,
        role: "owner".to_string(),
        tags: vec!["x".to_string(), "x".to_string()],
    };
    assert_eq!(
        rendered(&validator.validate_all(&bad)),
        [
            "Username: length must be at least 3",
            "Username: value does not match pattern ^[a-z0-9_]+$",
            "Age: value must be greater than or equal to 13",
            "Role: value must be one of: [admin member]",
            "Tags: duplicate value found: x",
        ]
    );
}

#[test]
fn annotations_can_be_disabled() {
    let validator =
        Validator::new().with_config(ValidatorConfig::default().with_annotations(false));

    let errors = validator.validate_all(&Profile {
        email: String::new(),
        nickname: Some("x".to_string()),
    });
    assert!(errors.is_empty());
}

#[test]
fn absent_optional_passes_format_rules() {
    let mut registry = Registry::with_builtins();
    registry.register_named("emial", custom(|_| Ok(())));
    let validator = Validator::from_registry(registry);

    let errors = validator.validate_all(&Profile {
        email: "ana@example.com".to_string(),
        nickname: None,
    });
    assert!(errors.is_empty());

    let errors = validator.validate_all(&Profile {
        email: "ana@example.com".to_string(),
        nickname: Some("ab".to_string()),
    });
    assert_eq!(rendered(&errors), ["Nickname: length must be at least 3"]);
}

#[test]
fn custom_annotation_rule_is_registered_by_name() {
    let mut validator = Validator::new();
    validator.register_named("emial", custom(|v| match v.as_str() {
        Some(s) if s.contains('@') => Ok(()),
        _ => Err(RuleError::invalid("value must be an email")),
    }));

    let errors = validator.validate_all(&Profile {
        email: "nope".to_string(),
        nickname: None,
    });
    assert_eq!(rendered(&errors), ["Email: value must be an email"]);
    assert!(!errors.has_configuration_errors());
}

// ============================================================================
// ROOT INPUT
// ============================================================================

#[rstest]
#[case::absent(None, "input: input must not be absent")]
#[case::scalar(Some(7), "input: input must be a record, got integer")]
fn non_record_roots_are_configuration_errors(#[case] input: Option<i64>, #[case] expected: &str) {
    let errors = Validator::new().validate_all(&input);
    assert_eq!(errors.to_string(), expected);
    assert!(errors.has_configuration_errors());
}

#[test]
fn errors_serialize_in_report_order() {
    let validator = Validator::new()
        .rule("Name", required())
        .rule("Age", range(18.0, 100.0));

    let errors = validator
        .validate(&User {
            name: String::new(),
            age: 15,
        })
        .unwrap_err();

    insta::assert_json_snapshot!(errors, @r#"
    [
      {
        "field": "Name",
        "message": "value is required",
        "kind": "validation"
      },
      {
        "field": "Age",
        "message": "value must be greater than or equal to 18",
        "kind": "validation"
      }
    ]
    "#);
}

// ============================================================================
// BUILT-IN NAMES AND FIELD PATHS
// ============================================================================

struct Listing {
    max: i64,
    min: i64,
    length: String,
    json: String,
    unique: String,
    positive: i32,
    pattern: String,
    one_of: String,
    range: i64,
    required: Option<String>,
    limit: i64,
}

record!(Listing {
    max,
    min,
    length,
    json,
    unique,
    positive,
    pattern,
    one_of,
    range,
    required,
    limit as "Limit" => "max=10",
});

fn listing(limit: i64) -> Listing {
    Listing {
        max: 10,
        min: -4,
        length: String::new(),
        json: "not json".to_string(),
        unique: "x".to_string(),
        positive: -1,
        pattern: "(".to_string(),
        one_of: String::new(),
        range: 0,
        required: None,
        limit,
    }
}

#[test]
fn fields_named_after_builtins_are_not_bound() {
    let validator = Validator::new();

    assert!(validator.validate(&listing(3)).is_ok());
    assert_eq!(
        rendered(&validator.validate_all(&listing(20))),
        ["Limit: value must be less than or equal to 10"]
    );
}

#[test]
fn named_rules_only_resolve_from_annotations() {
    let validator = Validator::new()
        .named_rule("emial", custom(|_| Err(RuleError::invalid("bad email"))))
        .rule("Email", min_length(3));

    let errors = validator.validate_all(&Profile {
        email: "ab".to_string(),
        nickname: None,
    });
    assert_eq!(
        rendered(&errors),
        ["Email: length must be at least 3", "Email: bad email"]
    );
    assert!(validator.registry().lookup("emial").is_empty());
}

// ============================================================================
// EMPTY COLLECTIONS
// ============================================================================

#[test]
fn empty_sequence_is_visited_without_elements() {
    let validator = Validator::new()
        .rule("Items", required())
        .rule("Items[]", custom(|_| Err(RuleError::invalid("element visited"))))
        .rule("Items[].Qty", required());

    let errors = validator.validate_all(&Order { items: vec![] });
    assert_eq!(rendered(&errors), ["Items: value is required"]);
}

#[test]
fn empty_map_is_visited_without_entries() {
    let validator = Validator::new()
        .rule("Contacts", required())
        .rule("Contacts[]", custom(|_| Err(RuleError::invalid("entry visited"))))
        .rule("Contacts[].City", required());

    let errors = validator.validate_all(&Customer {
        billing: Address {
            city: "Porto".to_string(),
        },
        contacts: HashMap::new(),
    });
    assert_eq!(rendered(&errors), ["Contacts: value is required"]);
    assert!(errors.iter().all(|e| !e.field().to_string().contains('[')));
}

#[test]
fn map_rules_check_keys_and_values() {
    let customer = Customer {
        billing: Address {
            city: "Porto".to_string(),
        },
        contacts: HashMap::from([
            ("home".to_string(), Address { city: "Lisbon".to_string() }),
            ("w".to_string(), Address { city: "Faro".to_string() }),
        ]),
    };

    let validator = Validator::new()
        .rule("Contacts", keys(min_length(2)))
        .rule("Contacts", map_of(one_of(["home", "work"]), required()));

    assert_eq!(
        rendered(&validator.validate_all(&customer)),
        [
            "Contacts: map key w failed validation: length must be at least 2",
            "Contacts: invalid map key: value must be one of: [home work]",
        ]
    );
}
