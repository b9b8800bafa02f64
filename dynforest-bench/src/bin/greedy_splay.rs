use std::process;

use dynforest::stt::GreedySplayForest;
use dynforest_bench::driver::{self, ConnRunner};

fn main() {
	process::exit( driver::run::<ConnRunner<GreedySplayForest>>() )
}
