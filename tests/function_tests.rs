use makexpr::parser::{Arity, FunctionRegistry, Parser, Value};

fn lit(text: &str) -> Value {
    Value::literal(text)
}

fn var(name: &str) -> Value {
    Value::var_ref(lit(name))
}

#[test]
fn test_fixed_arity_missing_arguments_are_empty() {
    let value = Parser::default()
        .parse(b"$(subst a)")
        .expect("Parsing failed");
    assert_eq!(
        value,
        Value::call("subst", vec![lit("a"), Value::empty(), Value::empty()])
    );
}

#[test]
fn test_fixed_arity_last_argument_absorbs_commas() {
    let value = Parser::default()
        .parse(b"$(word 2,a,b,c)")
        .expect("Parsing failed");
    assert_eq!(value, Value::call("word", vec![lit("2"), lit("a,b,c")]));
}

#[test]
fn test_single_argument_function_keeps_commas() {
    let value = Parser::default()
        .parse(b"$(info hello, world)")
        .expect("Parsing failed");
    assert_eq!(value, Value::call("info", vec![lit("hello, world")]));
}

#[test]
fn test_rest_arity_call() {
    let value = Parser::default()
        .parse(b"$(call reverse,$(a),b)")
        .expect("Parsing failed");
    assert_eq!(
        value,
        Value::call(
            "call",
            vec![Value::Sequence(vec![lit("reverse,"), var("a"), lit(",b")])]
        )
    );
}

#[test]
fn test_only_one_whitespace_byte_separates_name() {
    let value = Parser::default()
        .parse(b"$(strip   a b )")
        .expect("Parsing failed");
    assert_eq!(value, Value::call("strip", vec![lit("  a b ")]));

    let value = Parser::default()
        .parse(b"$(sort\tb a)")
        .expect("Parsing failed");
    assert_eq!(value, Value::call("sort", vec![lit("b a")]));
}

#[test]
fn test_foreach_with_nested_calls() {
    let value = Parser::default()
        .parse(b"$(foreach d,$(DIRS),$(wildcard $(d)/*.c))")
        .expect("Parsing failed");
    assert_eq!(
        value,
        Value::call(
            "foreach",
            vec![
                lit("d"),
                var("DIRS"),
                Value::call(
                    "wildcard",
                    vec![Value::Sequence(vec![var("d"), lit("/*.c")])]
                ),
            ]
        )
    );
}

#[test]
fn test_brace_call_splits_on_commas() {
    let value = Parser::default()
        .parse(b"${patsubst %.c,%.o,${SRCS}}")
        .expect("Parsing failed");
    assert_eq!(
        value,
        Value::call("patsubst", vec![lit("%.c"), lit("%.o"), var("SRCS")])
    );
}

#[test]
fn test_brace_call_trailing_dollar() {
    // The `}` after `$` closes the reference, leaving an empty name.
    let value = Parser::default()
        .parse(b"${if a,b,c$}")
        .expect("Parsing failed");
    assert_eq!(
        value,
        Value::call(
            "if",
            vec![lit("a"), lit("b"), Value::Sequence(vec![lit("c"), var("")])]
        )
    );
}

#[test]
fn test_custom_registry() {
    let registry = FunctionRegistry::new()
        .register("pair", Arity::Fixed(2))
        .register("raw", Arity::Rest);
    let parser = Parser::new(&registry);

    assert_eq!(
        parser.parse(b"$(pair x,y)").expect("Parsing failed"),
        Value::call("pair", vec![lit("x"), lit("y")])
    );
    assert_eq!(
        parser.parse(b"$(raw x,y)").expect("Parsing failed"),
        Value::call("raw", vec![lit("x,y")])
    );
    // Builtins are not known to this registry.
    assert_eq!(
        parser.parse(b"$(shell ls)").expect("Parsing failed"),
        var("shell ls")
    );
}

#[test]
fn test_empty_registry_parses_everything_as_variables() {
    let registry = FunctionRegistry::new();
    let parser = Parser::new(&registry);
    assert_eq!(
        parser.parse(b"$(subst a,b,c)").expect("Parsing failed"),
        var("subst a,b,c")
    );
}

#[test]
fn test_dollar_closer_balances_literal_paren() {
    let value = Parser::default()
        .parse(b"$(subst (a$),b,c)")
        .expect("Parsing failed");
    assert_eq!(
        value,
        Value::call(
            "subst",
            vec![Value::Sequence(vec![lit("(a"), var(")")]), lit("b"), lit("c")]
        )
    );
}

#[test]
fn test_dollar_closer_balances_literal_brace() {
    let value = Parser::default()
        .parse(b"${subst {a$},b,c}")
        .expect("Parsing failed");
    assert_eq!(
        value,
        Value::call(
            "subst",
            vec![Value::Sequence(vec![lit("{a"), var("}")]), lit("b"), lit("c")]
        )
    );
}

#[test]
fn test_dollar_closer_in_substitution_name() {
    let value = Parser::default()
        .parse(b"$(x(y$):c=d)")
        .expect("Parsing failed");
    assert_eq!(
        value,
        Value::subst_ref(
            Value::Sequence(vec![lit("x(y"), var(")")]),
            lit("c"),
            lit("d")
        )
    );

    let value = Parser::default()
        .parse(b"${x{y$}:c=d}")
        .expect("Parsing failed");
    assert_eq!(
        value,
        Value::subst_ref(
            Value::Sequence(vec![lit("x{y"), var("}")]),
            lit("c"),
            lit("d")
        )
    );
}

#[test]
fn test_dollar_closer_in_substitution_pattern() {
    let value = Parser::default()
        .parse(b"$(x:(a$)=b)")
        .expect("Parsing failed");
    assert_eq!(
        value,
        Value::subst_ref(
            lit("x"),
            Value::Sequence(vec![lit("(a"), var(")")]),
            lit("b")
        )
    );
}

#[test]
fn test_other_family_reference_closes_literal_bracket() {
    // The `)` in `${a)}` is part of the brace reference, yet it still closes
    // one of the literal parens around it.
    let value = Parser::default()
        .parse(b"$(subst ((${a)}),b,c)")
        .expect("Parsing failed");
    assert_eq!(
        value,
        Value::call(
            "subst",
            vec![
                Value::Sequence(vec![lit("(("), var("a)"), lit(")")]),
                lit("b"),
                lit("c"),
            ]
        )
    );

    let value = Parser::default()
        .parse(b"${subst {{$(a})},b,c}")
        .expect("Parsing failed");
    assert_eq!(
        value,
        Value::call(
            "subst",
            vec![
                Value::Sequence(vec![lit("{{"), var("a}"), lit("}")]),
                lit("b"),
                lit("c"),
            ]
        )
    );
}
