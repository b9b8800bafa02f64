use std::process;

use dynforest::link_cut::EmptyLinkCutForest;
use dynforest_bench::driver::{self, RootedRunner};

fn main() {
	process::exit( driver::run::<RootedRunner<EmptyLinkCutForest>>() )
}
