use quickcheck::{Arbitrary, Gen};
use num_traits::Num;
use alloc::boxed::Box;

use crate::Complex;

impl<T: Arbitrary + Num> Arbitrary for Complex<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        Complex::new(T::arbitrary(g), T::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // shrink the real part first, then the imaginary part
        let (re, im) = (self.re(), self.im());
        let shrink_re = {
            let im = im.clone();
            re.shrink().map(move |re| Complex::new(re, im.clone()))
        };
        let shrink_im = im.shrink().map(move |im| Complex::new(re.clone(), im));
        Box::new(shrink_re.chain(shrink_im))
    }
}

#[cfg(test)]
mod test {
    use crate::Complex;
    use quickcheck::Arbitrary;
    use std::vec::Vec;

    #[test]
    fn test_shrink_each_part() {
        let shrinks: Vec<_> = Complex::new(4i32, 6).shrink().collect();
        assert!(shrinks.contains(&Complex::new(0, 6)));
        assert!(shrinks.contains(&Complex::new(4, 0)));
        assert!(shrinks.iter().all(|z| z.re() == 4 || z.im() == 6));
    }

    #[test]
    fn test_shrink_origin() {
        assert_eq!(Complex::new(0i32, 0).shrink().count(), 0);
    }
}
