use core::alloc::Layout;

use crate::error::StorageError;

#[inline]
pub fn array_layout<T>(count: usize) -> Result<Layout, StorageError> {
    Layout::array::<T>(count).map_err(StorageError::LayoutError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_array_layout() {
        let layout = array_layout::<u32>(4).expect("layout");
        assert_eq!(layout.size(), 16);
        assert_eq!(layout.align(), 4);
        assert_eq!(array_layout::<()>(usize::MAX).map(|l| l.size()), Ok(0));
        assert!(matches!(
            array_layout::<u64>(usize::MAX),
            Err(StorageError::LayoutError(_))
        ));
    }
}
