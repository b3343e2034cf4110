/// Construct a [`Vector`](crate::vec::Vector) from a list of values, or from
/// a value repeated `n` times. A memory provider may be given with the
/// `in alloc;` prefix.
#[macro_export]
macro_rules! vector {
    (in $alloc:expr $(;)?) => (
        $crate::vec::Vector::new_in($alloc)
    );
    (in $alloc:expr; $elem:expr; $n:expr) => (
        $crate::vec::from_elem_in($elem, $n, $alloc)
    );
    (in $alloc:expr; $($x:expr),+ $(,)?) => (
        $crate::vec::from_array_in([$($x),+], $alloc)
    );
    () => (
        $crate::vec::Vector::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::vec::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::vec::from_array([$($x),+])
    );
}
