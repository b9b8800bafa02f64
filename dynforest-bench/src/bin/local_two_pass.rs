use std::process;

use dynforest::stt::LocalTwoPassForest;
use dynforest_bench::driver::{self, ConnRunner};

fn main() {
	process::exit( driver::run::<ConnRunner<LocalTwoPassForest>>() )
}
