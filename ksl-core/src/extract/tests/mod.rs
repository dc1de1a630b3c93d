mod conditions_test;
mod owners_test;
mod path_test;
mod quantity_test;

use rstest::*;

use super::*;
use crate::prelude::*;
