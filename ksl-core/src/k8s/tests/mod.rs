mod apiset_test;

use rstest::*;

use super::*;
