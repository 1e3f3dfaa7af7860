use super::*;
use cn_ir::{Color, Keyword};
use pretty_assertions::assert_eq;

use crate::test_helpers::Scaled;

const COMPARISONS: [Operator; 9] = [
    Operator::EqualTo,
    Operator::NotEqualTo,
    Operator::GreaterThan,
    Operator::GreaterThanOrEqualTo,
    Operator::LessThan,
    Operator::LessThanOrEqualTo,
    Operator::BitwiseAnd,
    Operator::BitwiseOr,
    Operator::BitwiseXor,
];

fn samples() -> Vec<Value> {
    vec![
        Value::Null,
        Value::Bool(true),
        Value::Bool(false),
        Value::Int(-1),
        Value::Int(0),
        Value::Int(4),
        Value::Float(4.0),
        Value::Float(-0.5),
        Value::string(""),
        Value::string("abc"),
        Value::string("abd"),
        Value::Color(Color::rgb(1, 2, 3)),
        Value::Vec2([1.0, 2.0]),
        Value::Vec4([1.0, 2.0, 3.0, 4.0]),
        Value::Keyword(Keyword::Even),
        Value::Keyword(Keyword::Odd),
        Value::list(vec![Value::Int(4), Value::string("abc")]),
        Value::calculated(Scaled(4)),
    ]
}

#[test]
fn test_cached_scalars() {
    let int = Value::Int(42);
    let yes = Value::Bool(true);
    let color = Value::Color(Color::rgb(1, 1, 1));
    assert_eq!(Operand::new(&int).cached(), 42);
    assert_eq!(Operand::new(&yes).cached(), 1);
    assert_eq!(Operand::new(&color).cached(), 0);
    assert_eq!(Operand::new(&color).tag(), TypeTag::Color);
    assert!(std::ptr::eq(Operand::new(&int).value(), &int));
}

#[test]
fn test_equal_strings_share_a_hash() {
    let a = Value::string("hello");
    let b = Value::string("hello");
    assert_eq!(Operand::new(&a).cached(), Operand::new(&b).cached());
}

#[test]
fn test_string_equality_confirms_content() {
    let a = Value::string("hello");
    let b = Value::string("world");
    let left = Operand::new(&a);
    let right = Operand::new(&b);
    // Same cached hash, different content.
    let forged = Operand {
        cached: left.cached(),
        ..right
    };
    assert!(!compare_tagged(&left, &forged, Operator::EqualTo));
    assert!(compare_tagged(&left, &forged, Operator::NotEqualTo));
}

#[test]
fn test_calculated_operand_defers_to_boxed() {
    let calculated = Value::calculated(Scaled(7));
    let seven = Value::Int(7);
    let left = Operand::new(&calculated);
    assert_eq!(left.tag(), TypeTag::Calculated);
    assert!(compare_tagged(&left, &Operand::new(&seven), Operator::EqualTo));
}

#[test]
fn test_operand_is_reusable() {
    let target = Value::Int(10);
    let operand = Operand::from(&target);
    let values: Vec<Value> = (0..20).map(Value::Int).collect();
    let greater = values
        .iter()
        .filter(|v| compare_tagged(&operand, &Operand::new(v), Operator::GreaterThan))
        .count();
    assert_eq!(greater, 10);
}

#[test]
fn test_agrees_with_boxed_engine() {
    let samples = samples();
    for left in &samples {
        for right in &samples {
            for op in COMPARISONS {
                assert_eq!(
                    compare_tagged(&Operand::new(left), &Operand::new(right), op),
                    compare(left, right, op),
                    "{left:?} {} {right:?}",
                    op.as_symbol()
                );
            }
        }
    }
}
