use super::*;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone)]
struct Counter(i64);

impl CalculatedValue for Counter {
    fn resolve(&self) -> Value {
        Value::Int(self.0)
    }

    fn clone_boxed(&self) -> Box<dyn CalculatedValue> {
        Box::new(self.clone())
    }

    fn negative_clone(&self) -> Box<dyn CalculatedValue> {
        Box::new(Counter(-self.0))
    }

    fn increment(&mut self, amount: &Value) {
        self.0 += amount.as_int().unwrap_or(0);
    }

    fn decrement(&mut self, amount: &Value) {
        self.0 -= amount.as_int().unwrap_or(0);
    }

    fn multiply(&mut self, factor: &Value) {
        self.0 *= factor.as_int().unwrap_or(1);
    }

    fn divide(&mut self, divisor: &Value) {
        if let Some(d) = divisor.as_int().filter(|d| *d != 0) {
            self.0 /= d;
        }
    }
}

/// Resolves to another calculated value.
#[derive(Debug)]
struct Indirect(Calculated);

impl CalculatedValue for Indirect {
    fn resolve(&self) -> Value {
        Value::Calculated(self.0.clone())
    }

    fn clone_boxed(&self) -> Box<dyn CalculatedValue> {
        Box::new(Indirect(self.0.clone()))
    }

    fn negative_clone(&self) -> Box<dyn CalculatedValue> {
        Box::new(Indirect(self.0.negative_clone()))
    }

    fn increment(&mut self, _: &Value) {}

    fn decrement(&mut self, _: &Value) {}

    fn multiply(&mut self, _: &Value) {}

    fn divide(&mut self, _: &Value) {}
}

#[test]
fn test_tags_and_type_names() {
    assert_eq!(Value::Null.tag(), TypeTag::Null);
    assert_eq!(Value::Int(1).tag(), TypeTag::Int);
    assert_eq!(Value::Vec3([0.0; 3]).tag(), TypeTag::Vec3);
    assert_eq!(Value::calculated(Counter(1)).tag(), TypeTag::Calculated);
    assert_eq!(Value::Color(Color::TRANSPARENT).type_name(), "color");
    assert_eq!(Value::Keyword(Keyword::Auto).type_name(), "keyword");
    assert!(TypeTag::Float.is_numeric());
    assert!(!TypeTag::Bool.is_numeric());
}

#[test]
fn test_truthiness_is_strictly_positive() {
    assert!(Value::Int(3).is_truthy());
    assert!(!Value::Int(0).is_truthy());
    assert!(!Value::Int(-3).is_truthy());
    assert!(Value::Float(0.5).is_truthy());
    assert!(!Value::Null.is_truthy());
    assert!(!Value::string("").is_truthy());
}

#[test]
fn test_zero_like() {
    assert_eq!(Value::Int(9).zero_like(), Value::Int(0));
    assert_eq!(Value::string("x").zero_like(), Value::string(""));
    assert_eq!(
        Value::Color(Color::rgb(1, 2, 3)).zero_like(),
        Value::Color(Color::TRANSPARENT)
    );
    assert_eq!(Value::Vec2([1.0, 2.0]).zero_like(), Value::Vec2([0.0, 0.0]));
    assert_eq!(
        Value::list(vec![Value::Int(1)]).zero_like(),
        Value::list(vec![])
    );
    assert_eq!(Value::Keyword(Keyword::Odd).zero_like(), Value::Null);
    assert_eq!(Value::calculated(Counter(5)).zero_like(), Value::Int(0));
}

#[test]
fn test_resolved_borrows_concrete_values() {
    let v = Value::Int(4);
    assert!(matches!(v.resolved(), Cow::Borrowed(_)));
    let calc = Value::calculated(Counter(7));
    assert_eq!(calc.resolved().into_owned(), Value::Int(7));
}

#[test]
fn test_nested_calculated_resolves_to_concrete() {
    let inner = Calculated::new(Counter(11));
    let outer = Value::calculated(Indirect(inner));
    assert_eq!(outer.resolved().into_owned(), Value::Int(11));
}

#[test]
fn test_clone_shares_calculated_handle() {
    let calc = Calculated::new(Counter(1));
    let a = Value::Calculated(calc.clone());
    let b = a.clone();
    calc.increment(&Value::Int(2));
    assert_eq!(a.resolved().into_owned(), Value::Int(3));
    assert_eq!(b.resolved().into_owned(), Value::Int(3));
    assert_eq!(a, b);
}

#[test]
fn test_deep_clone_detaches_calculated_handle() {
    let calc = Calculated::new(Counter(1));
    let original = Value::list(vec![Value::Calculated(calc.clone())]);
    let copy = original.deep_clone();
    calc.increment(&Value::Int(10));

    let Some(items) = copy.as_list() else {
        panic!("expected list");
    };
    assert_eq!(items[0].resolved().into_owned(), Value::Int(1));
    assert_ne!(original, copy);
}

#[test]
fn test_negative_clone() {
    let calc = Calculated::new(Counter(6));
    assert_eq!(calc.negative_clone().resolve(), Value::Int(-6));
    assert_eq!(calc.resolve(), Value::Int(6));
}

#[test]
fn test_float_equality_is_reflexive_for_nan() {
    assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    assert_eq!(Value::Float(0.0), Value::Float(-0.0));
    assert_ne!(Value::Float(1.0), Value::Int(1));
}

#[test]
fn test_color_hex_decoding() {
    assert_eq!(Color::from_hex_digits("FF0000"), Color::rgb(255, 0, 0));
    assert_eq!(
        Color::from_hex_digits("00FF0080"),
        Color::rgba(0, 255, 0, 0x80)
    );
    assert_eq!(Color::from_hex_digits("0A0B0C"), Color::rgb(10, 11, 12));
    assert_eq!(Color::from_hex_digits("abc"), Color::rgb(0, 0x0A, 0xBC));
    assert_eq!(Color::from_hex_digits("zz"), Color::TRANSPARENT);
    assert_eq!(Color::from_hex_digits(""), Color::TRANSPARENT);
    assert_eq!(Color::rgba(1, 2, 3, 4).to_hex(false), "#010203");
    assert_eq!(Color::rgba(1, 2, 3, 4).to_hex(true), "#01020304");
    assert_eq!(Color::rgb(1, 2, 3).to_hex(true), "#010203");
}

#[test]
fn test_seven_hex_digits_read_as_opaque_rgb() {
    let color = Color::from_hex_digits("1234567");
    assert_eq!(color, Color::rgb(0x23, 0x45, 0x67));
    assert!(color.is_opaque());
    assert_eq!(Color::from_hex_digits("123456789"), Color::TRANSPARENT);
}

#[test]
fn test_scalar_accessors() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Bool(false).as_bool(), Some(false));
    assert_eq!(Value::Int(1).as_bool(), None);
    assert_eq!(Value::Int(7).as_int(), Some(7));
    assert_eq!(Value::Int(7).as_float(), Some(7.0));
    assert_eq!(Value::string("s").as_str(), Some("s"));
    assert_eq!(Value::Null.as_list(), None);
}

fn nested_list(depth: usize) -> Value {
    let mut value = Value::list(vec![]);
    for _ in 1..depth {
        value = Value::list(vec![value]);
    }
    value
}

#[test]
fn test_deep_list_clone_compare_and_drop() {
    let value = nested_list(100_000);
    let copy = value.clone();
    assert!(value == copy);
    let detached = value.deep_clone();
    assert!(detached == value);
    drop(value);
    drop(copy);
    drop(detached);
}

#[test]
fn test_deep_list_debug() {
    let depth = 30_000;
    let text = format!("{:?}", nested_list(depth));
    assert_eq!(text.len(), depth * "List([])".len());
    assert!(text.starts_with("List([List(["));
}

#[test]
fn test_keyword_lookup_and_parity() {
    assert_eq!(Keyword::from_name("mapWidth"), Some(Keyword::MapWidth));
    assert_eq!(Keyword::from_name("MapWidth"), None);
    for k in Keyword::ALL {
        assert_eq!(Keyword::from_name(k.as_str()), Some(k));
    }
    assert_eq!(Keyword::Even.matches_parity(4), Some(true));
    assert_eq!(Keyword::Even.matches_parity(-3), Some(false));
    assert_eq!(Keyword::Odd.matches_parity(-3), Some(true));
    assert_eq!(Keyword::Auto.matches_parity(2), None);
}
