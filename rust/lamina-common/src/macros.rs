/// Macro for the fallback arm of a closed-set dispatch.
///
/// Generated dispatch code places this in the arm that cannot be reached
/// while the variant set and the dispatch agree. Invoking it unconditionally
/// fails the enclosing function with
/// [`Error::unmatched_branch`](crate::error::Error::unmatched_branch); the
/// call site never observes a value.
///
/// The enclosing function *must* have a return type compatible with
/// `Result<_, Error>`.
#[macro_export]
macro_rules! unmatched_branch {
    () => {
        return Err($crate::error::Error::unmatched_branch().into())
    };
}
