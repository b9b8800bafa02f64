use std::process;

use dynforest::naive::EmptyNaiveForest;
use dynforest_bench::driver::{self, ConnRunner};

fn main() {
	process::exit( driver::run::<ConnRunner<EmptyNaiveForest>>() )
}
