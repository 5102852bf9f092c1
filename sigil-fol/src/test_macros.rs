/// Removes the whitespace that `stringify!` inserts between tokens.
pub fn strip(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[macro_export]
macro_rules! term {
    ($($t:tt)+) => {{
        let text = $crate::test_macros::strip(stringify!($($t)+));
        text.parse::<$crate::syntax::Term>().unwrap()
    }};
}

#[macro_export]
macro_rules! fof {
    ($($t:tt)+) => {{
        let text = $crate::test_macros::strip(stringify!($($t)+));
        text.parse::<$crate::syntax::Formula>().unwrap()
    }};
}

#[macro_export]
macro_rules! prop {
    ($($t:tt)+) => {{
        let text = $crate::test_macros::strip(stringify!($($t)+));
        text.parse::<$crate::prop::PropFormula>().unwrap()
    }};
}

#[macro_export]
macro_rules! v {
    ($v:ident) => {
        $crate::syntax::V::new(stringify!($v)).unwrap()
    };
}

#[macro_export]
macro_rules! assert_eq_sorted_vecs {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                let mut l = left_val.to_vec();
                let mut r = right_val.to_vec();
                l.sort();
                r.sort();
                assert_eq!(l, r)
            }
        }
    }};
    ($left:expr, $right:expr ,) => {
        $crate::assert_eq_sorted_vecs!($left, $right)
    };
}

#[macro_export]
macro_rules! assert_debug_string {
    ($expected:expr, $value:expr) => {{
        match (&$expected, &$value) {
            (expected_val, val) => assert_eq!(*expected_val, format!("{:?}", val)),
        }
    }};
    ($expected:expr, $value:expr ,) => {
        $crate::assert_debug_string!($expected, $value)
    };
}
