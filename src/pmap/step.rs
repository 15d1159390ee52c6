/// Unit steps for priorities, used by [`Handle::increment`] and
/// [`Handle::decrement`].
///
/// Steps wrap on overflow in every build profile, so decrementing an
/// unsigned zero gives the type's `MAX`.
///
/// [`Handle::increment`]: super::Handle::increment
/// [`Handle::decrement`]: super::Handle::decrement
pub trait Step: Sized {
    fn succ(&self) -> Self;
    fn pred(&self) -> Self;
}

macro_rules! impl_step {
    ($($t:ty),*) => {$(
        impl Step for $t {
            #[inline]
            fn succ(&self) -> Self {
                self.wrapping_add(1)
            }

            #[inline]
            fn pred(&self) -> Self {
                self.wrapping_sub(1)
            }
        }
    )*};
}

impl_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod test {
    use super::Step;

    #[test]
    fn steps() {
        assert_eq!(0i32.succ(), 1);
        assert_eq!(0i32.pred(), -1);
        assert_eq!(7u8.pred(), 6);
        assert_eq!(0u32.pred(), u32::MAX);
        assert_eq!(i8::MAX.succ(), i8::MIN);
    }
}
