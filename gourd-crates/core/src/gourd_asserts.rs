//! Leveled assertions. Checks above [`GOURD_ASSERT_LEVEL_DEFINITION`] compile to nothing, which
//! lets the expensive consistency checks of the search be switched on when debugging a model.

pub(crate) const GOURD_ASSERT_LEVEL_DEFINITION: u8 = GOURD_ASSERT_SIMPLE;

pub(crate) const GOURD_ASSERT_SIMPLE: u8 = 1;
pub(crate) const GOURD_ASSERT_MODERATE: u8 = 2;
pub(crate) const GOURD_ASSERT_ADVANCED: u8 = 3;

macro_rules! gourd_assert_simple {
    ($($arg:tt)*) => {
        if $crate::gourd_asserts::GOURD_ASSERT_LEVEL_DEFINITION >= $crate::gourd_asserts::GOURD_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

macro_rules! gourd_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::gourd_asserts::GOURD_ASSERT_LEVEL_DEFINITION >= $crate::gourd_asserts::GOURD_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

macro_rules! gourd_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::gourd_asserts::GOURD_ASSERT_LEVEL_DEFINITION >= $crate::gourd_asserts::GOURD_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

macro_rules! gourd_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::gourd_asserts::GOURD_ASSERT_LEVEL_DEFINITION >= $crate::gourd_asserts::GOURD_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

pub(crate) use gourd_assert_advanced;
pub(crate) use gourd_assert_eq_simple;
pub(crate) use gourd_assert_moderate;
pub(crate) use gourd_assert_simple;
