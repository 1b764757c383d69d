//! Property tests for boxed value text forms and equality/hash agreement

use dotrs_core::{box_str, box_value, Bool, Char, Double, Int, Long, Object, Primitive};
use proptest::prelude::*;

fn round_trips<T: Primitive>(value: T) -> bool {
    let text = value.format_value();
    T::parse_value(&text).map(|parsed| parsed == value).unwrap_or(false)
}

proptest! {
    #[test]
    fn int_text_round_trips(v in any::<i32>()) {
        prop_assert!(round_trips(v));
        let text = Object::to_string(&Int::new(v));
        prop_assert_eq!(Int::parse(&text).unwrap().value(), v);
    }

    #[test]
    fn long_text_round_trips(v in any::<i64>()) {
        prop_assert!(round_trips(v));
        prop_assert_eq!(Long::parse(&v.to_string()).unwrap().value(), v);
    }

    #[test]
    fn double_text_round_trips(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        prop_assert!(round_trips(v));
        let text = Object::to_string(&Double::new(v));
        prop_assert_eq!(Double::parse(&text).unwrap().value().to_bits(), v.to_bits());
    }

    #[test]
    fn char_text_round_trips(v in any::<char>()) {
        prop_assert!(round_trips(v));
        prop_assert_eq!(Char::parse(&u32::from(v).to_string()).unwrap().value(), v);
    }

    #[test]
    fn bool_text_round_trips(v in any::<bool>()) {
        prop_assert!(round_trips(v));
        prop_assert_eq!(Bool::parse(&Object::to_string(&Bool::new(v))).unwrap().value(), v);
    }
}

proptest! {
    #[test]
    fn equal_ints_hash_equally(a in any::<i32>(), b in any::<i32>()) {
        let x = box_value(a);
        let y = box_value(b);
        prop_assert_eq!(x.equals(&y), a == b);
        if x.equals(&y) {
            prop_assert_eq!(x.hash_code(), y.hash_code());
        }
    }

    #[test]
    fn equal_doubles_hash_equally(a in any::<f64>()) {
        let x = box_value(a);
        let y = box_value(a);
        prop_assert_eq!(x.equals(&y), !a.is_nan());
        if x.equals(&y) {
            prop_assert_eq!(x.hash_code(), y.hash_code());
        }
    }

    #[test]
    fn equal_strings_hash_equally(a in ".*", b in ".*") {
        let x = box_str(&a);
        let y = box_str(&b);
        prop_assert_eq!(x.equals(&y), a == b);
        prop_assert!(x.equals(&box_str(&a)));
        prop_assert_eq!(x.hash_code(), box_str(&a).hash_code());
    }

    #[test]
    fn equality_is_symmetric(a in any::<i64>(), b in any::<i64>()) {
        let x = box_value(a);
        let y = box_value(b);
        prop_assert_eq!(x.equals(&y), y.equals(&x));
    }

    #[test]
    fn padded_numbers_parse(v in any::<i32>(), pad in "[ \t]{0,3}") {
        let text = format!("{pad}{v}{pad}");
        prop_assert_eq!(Int::parse(&text).unwrap().value(), v);
    }
}
