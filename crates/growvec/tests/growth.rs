use std::num::NonZeroUsize;

use growvec::{DynamicArray, Error, GROWTH_INCREMENT, Growth, Options, Result};

// ============================================================================
// Fixed increment (default)
// ============================================================================

mod fixed {
    use super::*;

    #[test]
    fn test_grows_by_fixed_increment() {
        let mut arr = DynamicArray::new();
        let mut capacities = vec![arr.capacity()];

        for i in 0..35 {
            arr.push(i);
            if *capacities.last().unwrap() != arr.capacity() {
                capacities.push(arr.capacity());
            }
        }

        assert_eq!(capacities, [10, 20, 30, 40]);
        assert_eq!(arr.len(), 35);
    }

    #[test]
    fn test_no_growth_until_full() {
        let mut arr = DynamicArray::with_capacity(4);
        for i in 0..4 {
            arr.push(i);
            assert_eq!(arr.capacity(), 4);
        }
        arr.push(4);
        assert_eq!(arr.capacity(), 4 + GROWTH_INCREMENT);
    }

    #[test]
    fn test_growth_keeps_elements() -> Result<()> {
        let mut arr = DynamicArray::with_capacity(2);
        arr.push('a');
        arr.push('b');
        arr.push('c');

        assert!(arr.capacity() >= 3);
        assert_eq!(*arr.get(0)?, 'a');
        assert_eq!(*arr.get(1)?, 'b');
        assert_eq!(*arr.get(2)?, 'c');
        Ok(())
    }

    #[test]
    fn test_growth_from_zero_capacity() -> Result<()> {
        let mut arr = DynamicArray::with_capacity(0);
        arr.push("only");
        assert_eq!(arr.capacity(), GROWTH_INCREMENT);
        assert_eq!(*arr.get(0)?, "only");
        Ok(())
    }

    #[test]
    fn test_growth_property_for_various_capacities() -> Result<()> {
        for capacity in [0_usize, 1, 2, 9, 10, 11, 64] {
            let mut arr = DynamicArray::with_capacity(capacity);
            for i in 0..=capacity {
                arr.push(i);
            }

            assert!(arr.capacity() > capacity);
            assert_eq!(arr.len(), capacity + 1);
            for i in 0..=capacity {
                assert_eq!(*arr.get(i)?, i);
            }
        }
        Ok(())
    }

    #[test]
    fn test_custom_increment() -> Result<()> {
        let options = Options::default().with_capacity(1).try_with_increment(3)?;
        let mut arr = DynamicArray::with_options(options);

        arr.extend(0..5);
        assert_eq!(arr.capacity(), 7);
        assert_eq!(arr.growth(), Growth::fixed(3)?);
        Ok(())
    }

    #[test]
    fn test_zero_increment_rejected() {
        assert_eq!(Growth::fixed(0), Err(Error::InvalidGrowth));
        assert_eq!(
            Options::default().try_with_increment(0),
            Err(Error::InvalidGrowth)
        );
    }
}

// ============================================================================
// Doubling
// ============================================================================

mod doubling {
    use super::*;

    #[test]
    fn test_next_capacity() {
        assert_eq!(Growth::Doubling.next_capacity(0), 1);
        assert_eq!(Growth::Doubling.next_capacity(1), 2);
        assert_eq!(Growth::Doubling.next_capacity(10), 20);
        assert_eq!(Growth::Doubling.next_capacity(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_doubling_array() -> Result<()> {
        let mut arr = DynamicArray::with_options((0_usize, Growth::Doubling).into());
        let mut capacities = vec![];

        for i in 0..9_u32 {
            arr.push(i);
            capacities.push(arr.capacity());
        }

        assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(*arr.get(8)?, 8);
        Ok(())
    }
}

// ============================================================================
// Options
// ============================================================================

mod options {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert_eq!(options.capacity, 10);
        assert_eq!(
            options.growth,
            Growth::Fixed(NonZeroUsize::new(10).unwrap())
        );
    }

    #[test]
    fn test_from_capacity() {
        let options = Options::from(42);
        assert_eq!(options.capacity, 42);
        assert_eq!(options.growth, Growth::default());
    }

    #[test]
    fn test_signed_capacity() -> Result<()> {
        assert_eq!(Options::default().try_with_capacity(5)?.capacity, 5);
        assert_eq!(
            Options::default().try_with_capacity(-10),
            Err(Error::InvalidArgument { capacity: -10 })
        );
        Ok(())
    }

    #[test]
    fn test_fixed_next_capacity_saturates() {
        let growth = Growth::default();
        assert_eq!(growth.next_capacity(0), 10);
        assert_eq!(growth.next_capacity(25), 35);
        assert_eq!(growth.next_capacity(usize::MAX - 1), usize::MAX);
        assert_eq!(growth.next_capacity(usize::MAX), usize::MAX);
        assert_eq!(Growth::fixed(1).map(|g| g.next_capacity(usize::MAX)), Ok(usize::MAX));
    }
}
