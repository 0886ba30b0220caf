#![macro_use]

macro_rules! impl_matrix_binary_op {
    ($type: ty, $op: ident, $fn: ident, $checked: ident) => {
        impl std::ops::$op for &$type {
            type Output = $type;

            fn $fn(self, rhs: &$type) -> Self::Output {
                match self.$checked(rhs) {
                    Ok(result) => result,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl std::ops::$op<&$type> for $type {
            type Output = $type;

            fn $fn(self, rhs: &$type) -> Self::Output {
                (&self).$fn(rhs)
            }
        }

        impl std::ops::$op<$type> for &$type {
            type Output = $type;

            fn $fn(self, rhs: $type) -> Self::Output {
                self.$fn(&rhs)
            }
        }

        impl std::ops::$op for $type {
            type Output = $type;

            fn $fn(self, rhs: $type) -> Self::Output {
                (&self).$fn(&rhs)
            }
        }
    };
}

macro_rules! impl_matrix_binary_op_assign {
    ($type: ty, $op: ident, $fn: ident, $checked: ident) => {
        impl std::ops::$op<&$type> for $type {
            fn $fn(&mut self, rhs: &$type) {
                match self.$checked(rhs) {
                    Ok(result) => *self = result,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl std::ops::$op for $type {
            fn $fn(&mut self, rhs: $type) {
                self.$fn(&rhs)
            }
        }
    };
}
