use std::process;

use dynforest::stt::MoveToRootForest;
use dynforest_bench::driver::{self, ConnRunner};

fn main() {
	process::exit( driver::run::<ConnRunner<MoveToRootForest>>() )
}
