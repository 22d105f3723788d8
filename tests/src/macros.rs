/// A builder with the given models registered.
#[macro_export]
macro_rules! models {
    (
        $( $model:ty ),*
    ) => {{
        let mut builder = rowmap::Db::builder();
        $( builder.register::<$model>(); )*
        builder
    }};
}

/// Asserts that `$actual` holds the same elements as `$expect`, in any order.
#[macro_export]
macro_rules! assert_eq_unordered {
    ($actual:expr, $expect:expr) => {
        let mut vals = $actual.into_iter().collect::<Vec<_>>();

        for val in $expect {
            let Some(pos) = vals.iter().position(|v| *v == val) else {
                panic!("`{:#?}` missing", val);
            };
            vals.remove(pos);
        }

        assert!(vals.is_empty(), "unexpected: {:#?}", vals);
    };
}
