//! Property-based tests for the container laws and the wire codec.

use proptest::prelude::*;

use sumflow::codec::{from_json_option, from_json_result};
use sumflow::{result_flow, Option, Result};

fn option_i32() -> impl Strategy<Value = Option<i32>> {
    prop_oneof![
        Just(Option::None),
        any::<i32>().prop_map(Option::Some),
    ]
}

fn result_i32() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Result::Ok),
        ".*".prop_map(Result::Err),
    ]
}

proptest! {
    // Functor laws

    #[test]
    fn prop_option_map_identity(o in option_i32()) {
        prop_assert_eq!(o.map(|v| v), o);
    }

    #[test]
    fn prop_option_map_composition(o in option_i32()) {
        let f = |v: i32| v.wrapping_add(1);
        let g = |v: i32| v.wrapping_mul(3);
        prop_assert_eq!(o.map(f).map(g), o.map(|v| g(f(v))));
    }

    #[test]
    fn prop_result_map_identity(r in result_i32()) {
        prop_assert_eq!(r.clone().map(|v| v), r);
    }

    #[test]
    fn prop_result_map_preserves_err(e in ".*") {
        let r: Result<i32, String> = Result::Err(e.clone());
        prop_assert_eq!(r.map(|v| v + 1), Result::Err(e));
    }

    // Monad laws

    #[test]
    fn prop_option_left_identity(v in any::<i32>()) {
        let h = |n: i32| if n % 2 == 0 { Option::Some(n / 2) } else { Option::None };
        prop_assert_eq!(Option::Some(v).and_then(h), h(v));
    }

    #[test]
    fn prop_option_right_identity(o in option_i32()) {
        prop_assert_eq!(o.and_then(Option::Some), o);
    }

    #[test]
    fn prop_option_associativity(o in option_i32()) {
        let f = |n: i32| if n > 0 { Option::Some(n) } else { Option::None };
        let g = |n: i32| Option::Some(n.wrapping_mul(2));
        prop_assert_eq!(
            o.and_then(f).and_then(g),
            o.and_then(|n| f(n).and_then(g))
        );
    }

    #[test]
    fn prop_result_left_identity(v in any::<i32>()) {
        let h = |n: i32| -> Result<i32, String> {
            if n >= 0 { Result::Ok(n) } else { Result::Err(String::from("negative")) }
        };
        prop_assert_eq!(Result::<i32, String>::Ok(v).and_then(h), h(v));
    }

    #[test]
    fn prop_result_right_identity(r in result_i32()) {
        prop_assert_eq!(r.clone().and_then(Result::Ok), r);
    }

    // Wrapping and bridges

    #[test]
    fn prop_flatten_undoes_wrapping(v in any::<i32>()) {
        let nested: Result<Result<i32, String>, String> = Result::Ok(Result::Ok(v));
        prop_assert_eq!(nested.flatten(), Result::Ok(v));

        let nested = Option::Some(Option::Some(v));
        prop_assert_eq!(nested.flatten(), Option::Some(v));
    }

    #[test]
    fn prop_to_result_bridge(o in option_i32()) {
        match o {
            Option::Some(v) => prop_assert_eq!(o.to_result("gone"), Result::Ok(v)),
            Option::None => prop_assert_eq!(o.to_result("gone"), Result::Err("gone")),
        }
    }

    #[test]
    fn prop_to_option_bridge(r in result_i32()) {
        match &r {
            Result::Ok(v) => prop_assert_eq!(r.clone().to_option(), Option::Some(*v)),
            Result::Err(_) => prop_assert_eq!(r.clone().to_option(), Option::None),
        }
    }

    #[test]
    fn prop_cloned_is_detached(v in ".*") {
        let original = Option::Some(v.clone());
        let mut copy = original.cloned();
        prop_assert_eq!(&copy, &original);
        copy.take();
        prop_assert_eq!(original, Option::Some(v));
    }

    // Codec round-trips

    #[test]
    fn prop_option_codec_roundtrip(o in option_i32()) {
        let decoded: Option<i32> = from_json_option(o.to_json().unwrap()).unwrap();
        prop_assert_eq!(decoded, o);
    }

    #[test]
    fn prop_result_codec_roundtrip(r in result_i32()) {
        let decoded: Result<i32, String> = from_json_result(r.to_json().unwrap()).unwrap();
        prop_assert_eq!(decoded, r);
    }

    #[test]
    fn prop_string_payload_roundtrip(s in ".*") {
        let original: Option<String> = Option::Some(s);
        let decoded: Option<String> = from_json_option(original.to_json().unwrap()).unwrap();
        prop_assert_eq!(decoded, original);
    }

    // Pipelines

    #[test]
    fn prop_flow_err_propagates_unchanged(e in ".*") {
        let out: Result<i32, String> = result_flow!(
            Result::Err(e.clone()),
            |n: i32| Result::Ok(n + 1),
            |n: i32| Result::Ok(n * 2),
        );
        prop_assert_eq!(out, Result::Err(e));
    }

    #[test]
    fn prop_flow_composes_like_and_then(v in any::<i32>()) {
        let double = |n: i32| -> Result<i32, String> { Result::Ok(n.wrapping_mul(2)) };
        let bump = |n: i32| -> Result<i32, String> { Result::Ok(n.wrapping_add(1)) };
        let flowed = result_flow!(Result::<i32, String>::Ok(v), double, bump);
        prop_assert_eq!(flowed, Result::Ok(v).and_then(double).and_then(bump));
    }
}
