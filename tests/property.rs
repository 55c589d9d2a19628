use proptest::prelude::*;
use token_cmp::{token, token_exact, Cmp, ComparisonOp, Func, Param, Value};

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn arb_columns() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_name(), 1..6)
}

fn arb_op() -> impl Strategy<Value = ComparisonOp> {
    prop::sample::select(ComparisonOp::ALL.to_vec())
}

fn token_of(columns: &[String]) -> String {
    format!("token({})", columns.join(","))
}

fn func_of(names: &[String]) -> Value {
    Value::Func(Func::new(
        "token",
        names.iter().map(|name| Param::new(name.as_str())),
    ))
}

proptest! {
    #[test]
    fn column_token_default_names_follow_columns(columns in arb_columns(), op in arb_op()) {
        let builder = token(columns.clone()).expect("non-empty columns");
        let cmp = builder.compare(op);
        prop_assert_eq!(cmp.op(), op);
        prop_assert_eq!(cmp.column(), token_of(&columns));
        prop_assert_eq!(cmp.value(), &func_of(&columns));
    }

    #[test]
    fn column_token_named_ignores_column_names(
        (columns, names) in arb_columns().prop_flat_map(|columns| {
            let len = columns.len();
            (Just(columns), prop::collection::vec(arb_name(), len))
        }),
        op in arb_op(),
    ) {
        let builder = token(columns.clone()).expect("non-empty columns");
        let cmp = builder.compare_named(op, names.clone()).expect("matching count");
        prop_assert_eq!(cmp.column(), token_of(&columns));
        prop_assert_eq!(cmp.value(), &func_of(&names));
    }

    #[test]
    fn column_token_rejects_any_other_count(
        columns in arb_columns(),
        extra in 1usize..4,
        op in arb_op(),
    ) {
        let builder = token(columns.clone()).expect("non-empty columns");
        let names = vec!["p".to_string(); columns.len() + extra];
        prop_assert!(builder.compare_named(op, names).is_err());
    }

    #[test]
    fn exact_token_renders_single_param(
        columns in arb_columns(),
        name in prop::option::of(arb_name()),
        op in arb_op(),
    ) {
        let builder = token_exact(columns.clone()).expect("non-empty columns");
        let cmp: Cmp = match &name {
            Some(name) => builder.compare_named(op, [name.as_str()]).expect("single name"),
            None => builder.compare(op),
        };
        let expected = name.unwrap_or_else(|| "token".to_string());
        prop_assert_eq!(cmp.column(), token_of(&columns));
        prop_assert_eq!(cmp.value(), &Value::Param(Param::new(expected.as_str())));

        let mut cql = String::new();
        cmp.write_cql(&mut cql);
        prop_assert_eq!(cql, format!("{}{}?", token_of(&columns), op));
    }

    #[test]
    fn building_twice_is_idempotent(columns in arb_columns(), op in arb_op()) {
        let column = token(columns.clone()).expect("non-empty columns");
        let exact = token_exact(columns).expect("non-empty columns");
        prop_assert_eq!(column.compare(op), column.compare(op));
        prop_assert_eq!(exact.compare(op), exact.compare(op));
    }
}
