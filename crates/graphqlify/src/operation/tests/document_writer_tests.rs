use crate::Value;
use crate::operation::Fragment;
use crate::operation::InlineFragment;
use crate::operation::Operation;
use crate::operation::OperationBuilder;
use crate::operation::ScalarKind;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::SelectionSetBuilder;
use indexmap::IndexMap;
use std::sync::Arc;

fn id_and_name() -> SelectionSet {
    SelectionSetBuilder::new()
        .add_field("id", Selection::number())
        .unwrap()
        .add_field("name", Selection::string())
        .unwrap()
        .build()
        .unwrap()
}

fn query_of(root: SelectionSet) -> Operation {
    OperationBuilder::query()
        .set_selection_set(root)
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn named_query_with_nested_object() {
    let root = SelectionSetBuilder::new()
        .add_field("user", Selection::object(id_and_name()))
        .unwrap()
        .build()
        .unwrap();
    let operation = OperationBuilder::query()
        .set_name("getUser")
        .unwrap()
        .set_selection_set(root)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        operation.to_document(),
        "query getUser {\n  user {\n    id\n    name\n  }\n}",
    );
}

#[test]
fn anonymous_operation_renders_bare_keyword() {
    let root = SelectionSetBuilder::new()
        .add_field("ping", Selection::string())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(query_of(root).to_document(), "query {\n  ping\n}");
}

#[test]
fn mutation_and_subscription_keywords() {
    let root = || {
        SelectionSetBuilder::new()
            .add_field("ping", Selection::string())
            .unwrap()
            .build()
            .unwrap()
    };

    let mutation = OperationBuilder::mutation()
        .set_selection_set(root())
        .unwrap()
        .build()
        .unwrap();
    assert!(mutation.to_document().starts_with("mutation {"));

    let subscription = OperationBuilder::subscription()
        .set_selection_set(root())
        .unwrap()
        .build()
        .unwrap();
    assert!(subscription.to_document().starts_with("subscription {"));
}

#[test]
fn parameterized_field_over_array_body() {
    let root = SelectionSetBuilder::new()
        .add_field(
            "users",
            Selection::parameterized(
                IndexMap::from([(
                    "status".to_string(),
                    Value::String("active".to_string()),
                )]),
                Selection::list(Selection::object(id_and_name())),
            ),
        )
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        query_of(root).to_document(),
        "query {\n  users(status: \"active\") {\n    id\n    name\n  }\n}",
    );
}

#[test]
fn array_wrapping_is_transparent() {
    let plain = SelectionSetBuilder::new()
        .add_field("users", Selection::object(id_and_name()))
        .unwrap()
        .build()
        .unwrap();
    let wrapped = SelectionSetBuilder::new()
        .add_field("users", Selection::list(Selection::object(id_and_name())))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        query_of(plain).to_document(),
        query_of(wrapped).to_document(),
    );
}

#[test]
fn aliased_field() {
    let root = SelectionSetBuilder::new()
        .add_aliased_field("maleUser", "user", Selection::object(id_and_name()))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        query_of(root).to_document(),
        "query {\n  maleUser: user {\n    id\n    name\n  }\n}",
    );
}

#[test]
fn aliased_parameterized_field() {
    let root = SelectionSetBuilder::new()
        .add_aliased_field(
            "activeUsers",
            "users",
            Selection::parameterized(
                IndexMap::from([(
                    "status".to_string(),
                    Value::EnumToken("ACTIVE".to_string()),
                )]),
                Selection::list(Selection::object(id_and_name())),
            ),
        )
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        query_of(root).to_document(),
        "query {\n  activeUsers: users(status: ACTIVE) {\n    id\n    \
        name\n  }\n}",
    );
}

#[test]
fn parameterized_scalar_leaf_has_no_braces() {
    let root = SelectionSetBuilder::new()
        .add_field(
            "userCount",
            Selection::parameterized(
                IndexMap::from([(
                    "status".to_string(),
                    Value::EnumToken("ACTIVE".to_string()),
                )]),
                Selection::number(),
            ),
        )
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        query_of(root).to_document(),
        "query {\n  userCount(status: ACTIVE)\n}",
    );
}

#[test]
fn argument_insertion_order_preserved() {
    let root = SelectionSetBuilder::new()
        .add_field(
            "users",
            Selection::parameterized(
                IndexMap::from([
                    ("zeta".to_string(), Value::Int(1)),
                    ("alpha".to_string(), Value::Int(2)),
                    ("mid".to_string(), Value::Int(3)),
                ]),
                Selection::number(),
            ),
        )
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        query_of(root).to_document(),
        "query {\n  users(zeta: 1, alpha: 2, mid: 3)\n}",
    );
}

#[test]
fn variable_declarations_render_in_insertion_order() {
    let root = SelectionSetBuilder::new()
        .add_field(
            "users",
            Selection::parameterized(
                IndexMap::from([
                    (
                        "status".to_string(),
                        Value::VarRef("status".to_string()),
                    ),
                    ("first".to_string(), Value::VarRef("limit".to_string())),
                ]),
                Selection::list(Selection::object(id_and_name())),
            ),
        )
        .unwrap()
        .build()
        .unwrap();

    let operation = OperationBuilder::query()
        .set_name("getUsers")
        .unwrap()
        .add_variable("status", "Status!")
        .unwrap()
        .add_variable("limit", "Int")
        .unwrap()
        .set_selection_set(root)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        operation.to_document(),
        "query getUsers($status: Status!, $limit: Int) {\n  \
        users(status: $status, first: $limit) {\n    id\n    name\n  }\n}",
    );
}

#[test]
fn scalar_kinds_render_as_bare_keys() {
    let root = SelectionSetBuilder::new()
        .add_field("id", Selection::number())
        .unwrap()
        .add_field("admin", Selection::boolean())
        .unwrap()
        .add_field(
            "status",
            Selection::enumeration("Status", ["ACTIVE", "BANNED"]),
        )
        .unwrap()
        .add_field(
            "kind",
            Selection::constant(Value::String("User".to_string())),
        )
        .unwrap()
        .add_field("createdAt", Selection::custom("DateTime"))
        .unwrap()
        .add_field("nickname", Selection::optional(ScalarKind::String))
        .unwrap()
        .build()
        .unwrap();

    // Kinds carry no rendering effect; notably the constant's literal
    // value never appears in the document.
    assert_eq!(
        query_of(root).to_document(),
        "query {\n  id\n  admin\n  status\n  kind\n  createdAt\n  \
        nickname\n}",
    );
}

#[test]
fn inline_fragments_render_union_arms_in_order() {
    let human = SelectionSetBuilder::new()
        .add_field(
            "kind",
            Selection::constant(Value::String("Human".to_string())),
        )
        .unwrap()
        .add_field("homePlanet", Selection::string())
        .unwrap()
        .build()
        .unwrap();
    let droid = SelectionSetBuilder::new()
        .add_field(
            "kind",
            Selection::constant(Value::String("Droid".to_string())),
        )
        .unwrap()
        .add_field("primaryFunction", Selection::string())
        .unwrap()
        .build()
        .unwrap();

    let root = SelectionSetBuilder::new()
        .add_field(
            "hero",
            Selection::object(
                SelectionSetBuilder::new()
                    .add_inline_fragment(
                        InlineFragment::new("Human", human).unwrap(),
                    )
                    .unwrap()
                    .add_inline_fragment(
                        InlineFragment::new("Droid", droid).unwrap(),
                    )
                    .unwrap()
                    .build()
                    .unwrap(),
            ),
        )
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        query_of(root).to_document(),
        "query {\n  hero {\n    ... on Human {\n      kind\n      \
        homePlanet\n    }\n    ... on Droid {\n      kind\n      \
        primaryFunction\n    }\n  }\n}",
    );
}

#[test]
fn inline_fragment_coexists_with_plain_fields() {
    let droid = SelectionSetBuilder::new()
        .add_field("primaryFunction", Selection::string())
        .unwrap()
        .build()
        .unwrap();

    let root = SelectionSetBuilder::new()
        .add_field(
            "hero",
            Selection::object(
                SelectionSetBuilder::new()
                    .add_field("id", Selection::number())
                    .unwrap()
                    .add_inline_fragment(
                        InlineFragment::new("Droid", droid).unwrap(),
                    )
                    .unwrap()
                    .build()
                    .unwrap(),
            ),
        )
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        query_of(root).to_document(),
        "query {\n  hero {\n    id\n    ... on Droid {\n      \
        primaryFunction\n    }\n  }\n}",
    );
}

#[test]
fn fragment_spread_twice_renders_one_definition() {
    let fragment = Arc::new(
        Fragment::new("userFragment", "User", id_and_name()).unwrap(),
    );

    let spread_set = || {
        SelectionSetBuilder::new()
            .add_fragment_spread(&fragment)
            .unwrap()
            .build()
            .unwrap()
    };
    let root = SelectionSetBuilder::new()
        .add_field("friend", Selection::object(spread_set()))
        .unwrap()
        .add_field("mutualFriend", Selection::object(spread_set()))
        .unwrap()
        .build()
        .unwrap();

    let document = query_of(root).to_document();
    assert_eq!(
        document,
        "query {\n  friend {\n    ...userFragment\n  }\n  mutualFriend \
        {\n    ...userFragment\n  }\n}\n\n\
        fragment userFragment on User {\n  id\n  name\n}",
    );
    assert_eq!(
        document.matches("fragment userFragment on User").count(),
        1,
    );
}

#[test]
fn nested_fragment_definitions_hoisted_in_encounter_order() {
    let inner = Arc::new(
        Fragment::new("nameParts", "User", {
            SelectionSetBuilder::new()
                .add_field("firstName", Selection::string())
                .unwrap()
                .add_field("lastName", Selection::string())
                .unwrap()
                .build()
                .unwrap()
        })
        .unwrap(),
    );
    let outer = Arc::new(
        Fragment::new("userFields", "User", {
            SelectionSetBuilder::new()
                .add_field("id", Selection::number())
                .unwrap()
                .add_fragment_spread(&inner)
                .unwrap()
                .build()
                .unwrap()
        })
        .unwrap(),
    );

    let root = SelectionSetBuilder::new()
        .add_field(
            "user",
            Selection::object(
                SelectionSetBuilder::new()
                    .add_fragment_spread(&outer)
                    .unwrap()
                    .build()
                    .unwrap(),
            ),
        )
        .unwrap()
        .build()
        .unwrap();

    let document = query_of(root).to_document();
    assert_eq!(
        document,
        "query {\n  user {\n    ...userFields\n  }\n}\n\n\
        fragment userFields on User {\n  id\n  ...nameParts\n}\n\n\
        fragment nameParts on User {\n  firstName\n  lastName\n}",
    );
    assert_eq!(document.matches("fragment nameParts").count(), 1);
}

#[test]
fn diamond_fragment_reuse_renders_shared_definition_once() {
    let shared = Arc::new(
        Fragment::new("shared", "User", id_and_name()).unwrap(),
    );
    let arm = |name: &str| {
        let body = SelectionSetBuilder::new()
            .add_fragment_spread(&shared)
            .unwrap()
            .build()
            .unwrap();
        Arc::new(Fragment::new(name, "User", body).unwrap())
    };
    let left = arm("leftArm");
    let right = arm("rightArm");

    let root = SelectionSetBuilder::new()
        .add_field(
            "viewer",
            Selection::object(
                SelectionSetBuilder::new()
                    .add_fragment_spread(&left)
                    .unwrap()
                    .add_fragment_spread(&right)
                    .unwrap()
                    .build()
                    .unwrap(),
            ),
        )
        .unwrap()
        .build()
        .unwrap();

    let document = query_of(root).to_document();
    assert_eq!(document.matches("fragment shared on User").count(), 1);
    // First-registration order: the arms in spread order, then the
    // shared fragment they both reach.
    let left_at = document.find("fragment leftArm").unwrap();
    let right_at = document.find("fragment rightArm").unwrap();
    let shared_at = document.find("fragment shared").unwrap();
    assert!(left_at < right_at);
    assert!(right_at < shared_at);
}

#[test]
fn alias_does_not_change_body_rendering() {
    let aliased = SelectionSetBuilder::new()
        .add_aliased_field("friend", "user", Selection::object(id_and_name()))
        .unwrap()
        .build()
        .unwrap();
    let plain = SelectionSetBuilder::new()
        .add_field("user", Selection::object(id_and_name()))
        .unwrap()
        .build()
        .unwrap();

    let aliased_doc = query_of(aliased).to_document();
    let plain_doc = query_of(plain).to_document();
    assert_eq!(aliased_doc.replace("friend: user {", "user {"), plain_doc);
}

#[test]
fn rendering_is_deterministic() {
    let fragment = Arc::new(
        Fragment::new("userFragment", "User", id_and_name()).unwrap(),
    );
    let root = SelectionSetBuilder::new()
        .add_field(
            "users",
            Selection::parameterized(
                IndexMap::from([(
                    "status".to_string(),
                    Value::VarRef("status".to_string()),
                )]),
                Selection::list(Selection::object(
                    SelectionSetBuilder::new()
                        .add_fragment_spread(&fragment)
                        .unwrap()
                        .build()
                        .unwrap(),
                )),
            ),
        )
        .unwrap()
        .build()
        .unwrap();
    let operation = OperationBuilder::query()
        .add_variable("status", "Status!")
        .unwrap()
        .set_selection_set(root)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(operation.to_document(), operation.to_document());
}

#[test]
fn display_matches_to_document() {
    let root = SelectionSetBuilder::new()
        .add_field("ping", Selection::string())
        .unwrap()
        .build()
        .unwrap();
    let operation = query_of(root);
    assert_eq!(operation.to_string(), operation.to_document());
}

#[test]
fn deep_nesting_indents_by_two_spaces_per_level() {
    let level3 = SelectionSetBuilder::new()
        .add_field("leaf", Selection::string())
        .unwrap()
        .build()
        .unwrap();
    let level2 = SelectionSetBuilder::new()
        .add_field("inner", Selection::object(level3))
        .unwrap()
        .build()
        .unwrap();
    let level1 = SelectionSetBuilder::new()
        .add_field("outer", Selection::object(level2))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        query_of(level1).to_document(),
        "query {\n  outer {\n    inner {\n      leaf\n    }\n  }\n}",
    );
}
