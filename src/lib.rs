pub mod cli;
pub mod input;
pub mod matrix;
pub mod params;
pub mod report;

pub mod prelude {
    pub use crate::matrix::dense::DenseMatrix;
    pub use crate::matrix::normalize::{is_row_normalized, row_normalize};
    pub use crate::params::checks::{
        check_between, check_greater, check_if_not, check_in, check_int, check_positive,
    };
    pub use crate::params::{ParamError, ParamSet, ParamValue};
}
