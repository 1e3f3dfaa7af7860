use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_null_and_bool() {
    assert_eq!(parse_value(""), Value::Null);
    assert_eq!(parse_value("   "), Value::Null);
    assert_eq!(parse_value("null"), Value::Null);
    assert_eq!(parse_value("true"), Value::Bool(true));
    assert_eq!(parse_value(" false "), Value::Bool(false));
}

#[test]
fn test_strings() {
    assert_eq!(parse_value("'hello'"), Value::string("hello"));
    assert_eq!(parse_value("\"hello\""), Value::string("hello"));
    assert_eq!(parse_value("''"), Value::string(""));
    assert_eq!(parse_value("\"it's\""), Value::string("it's"));
    assert_eq!(parse_value("'say \"hi\"'"), Value::string("say \"hi\""));
    assert_eq!(parse_value("\"null\""), Value::string("null"));
    assert_eq!(parse_value("\"1, 2\""), Value::string("1, 2"));
}

#[test]
fn test_mismatched_quotes_are_not_strings() {
    assert_eq!(parse_value("'abc\""), Value::Null);
    assert_eq!(parse_value("'"), Value::Null);
}

#[test]
fn test_lists() {
    assert_eq!(parse_value("[]"), Value::list(vec![]));
    assert_eq!(parse_value("[ ]"), Value::list(vec![]));
    assert_eq!(
        parse_value("[1, 'a,b', 2.5f]"),
        Value::list(vec![Value::Int(1), Value::string("a,b"), Value::Float(2.5)])
    );
    assert_eq!(
        parse_value("[[1,2],(1,2),[]]"),
        Value::list(vec![
            Value::list(vec![Value::Int(1), Value::Int(2)]),
            Value::Vec2([1.0, 2.0]),
            Value::list(vec![]),
        ])
    );
}

#[test]
fn test_colors() {
    assert_eq!(
        parse_value("#FF0000"),
        Value::Color(Color::rgba(255, 0, 0, 255))
    );
    assert_eq!(
        parse_value("#11223344"),
        Value::Color(Color::rgba(0x11, 0x22, 0x33, 0x44))
    );
    assert_eq!(parse_value("#nothex"), Value::Color(Color::TRANSPARENT));
}

#[test]
fn test_floats() {
    assert_eq!(parse_value("1.5f"), Value::Float(1.5));
    assert_eq!(parse_value("2f"), Value::Float(2.0));
    assert_eq!(parse_value("-0.25"), Value::Float(-0.25));
    assert_eq!(parse_value("1e3"), Value::Float(1000.0));
    assert_eq!(parse_value("abcf"), Value::Float(0.0));
}

#[test]
fn test_hex_integers() {
    assert_eq!(parse_value("0x1F"), Value::Int(31));
    assert_eq!(parse_value("0xFFFFFFFFFFFFFFFF"), Value::Int(-1));
    assert_eq!(parse_value("0xZZ"), Value::Int(0));
    // The float rule runs first.
    assert_eq!(parse_value("0xff"), Value::Float(0.0));
}

#[test]
fn test_vectors() {
    assert_eq!(parse_value("(1,2)"), Value::Vec2([1.0, 2.0]));
    assert_eq!(parse_value("(1f, 2.5f, -3)"), Value::Vec3([1.0, 2.5, -3.0]));
    assert_eq!(
        parse_value("(1,2,3,4)"),
        Value::Vec4([1.0, 2.0, 3.0, 4.0])
    );
    assert_eq!(parse_value("(1,x)"), Value::Vec2([1.0, 0.0]));
}

#[test]
fn test_vector_invalid_arity_is_null() {
    assert_eq!(parse_value("(1,2,3,4,5)"), Value::Null);
    assert_eq!(parse_value("(1)"), Value::Null);
    assert_eq!(parse_value("()"), Value::Null);
}

#[test]
fn test_keywords() {
    assert_eq!(parse_value("even"), Value::Keyword(Keyword::Even));
    assert_eq!(parse_value("symbolCount"), Value::Keyword(Keyword::SymbolCount));
    assert_eq!(parse_value("Even"), Value::Null);
}

#[test]
fn test_integers() {
    assert_eq!(parse_value("42"), Value::Int(42));
    assert_eq!(parse_value("-7"), Value::Int(-7));
    assert_eq!(parse_value("+7"), Value::Int(7));
    assert_eq!(parse_value("9223372036854775807"), Value::Int(i64::MAX));
}

#[test]
fn test_unrecognized_is_null() {
    assert_eq!(parse_value("hello"), Value::Null);
    assert_eq!(parse_value("1.2.3"), Value::Null);
}

#[test]
fn test_deeply_nested_list() {
    let depth = 30_000;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let value = parse_value(&text);
    let mut seen = 0;
    let mut cursor = Some(&value);
    while let Some(Value::List(items)) = cursor {
        seen += 1;
        cursor = items.first();
    }
    assert_eq!(seen, depth);
    assert!(value.clone() == value);
    drop(value);
}
