/// Unwraps the `Err` side of a result, panicking with the `Ok` value
/// otherwise. Extra arguments are appended to the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            Ok(actual) => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Err`; actual=Ok({:?})", actual);
                $(
                    msg.push_str(", ");
                    msg.push_str(&format!($($t)*));
                )?
                panic!("{}", msg);
            }
        }
    };
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(err) => panic!("expected `Ok`; actual=Err({:?})", err),
        }
    };
}

/// Asserts that an expression fails and that the error reports `code`.
///
/// Works with any error type exposing a `code()` method. Evaluates to the
/// error so callers can inspect it further.
#[macro_export]
macro_rules! assert_err_code {
    ($e:expr, $code:expr) => {{
        let err = $crate::assert_err!($e);
        assert_eq!(err.code(), $code, "unexpected error code; err={}", err);
        err
    }};
}
