//! Random workload equivalence: every engine must answer exactly like the naive reference.

use rand::rngs::StdRng;
use rand::SeedableRng;

use dynforest::link_cut::EmptyLinkCutForest;
use dynforest::pg::EmptyOracleForest;
use dynforest::stt::{GreedySplayForest, LocalTwoPassForest, MoveToRootForest};
use dynforest::verify::{check_connectivity_equivalence, random_connectivity_workload};

#[test]
fn test_random_workload_equivalence() {
	const NUM_VERTICES : usize = 100;
	const NUM_QUERIES : usize = 10_000;

	for seed in [0u64, 1, 7, 42, 1234] {
		let mut rng = StdRng::seed_from_u64( seed );
		let workload = random_connectivity_workload( NUM_VERTICES, NUM_QUERIES, 0.5, &mut rng );

		check_connectivity_equivalence::<GreedySplayForest>( &workload );
		check_connectivity_equivalence::<MoveToRootForest>( &workload );
		check_connectivity_equivalence::<LocalTwoPassForest>( &workload );
		check_connectivity_equivalence::<EmptyLinkCutForest>( &workload );
	}
}

#[test]
fn test_oracle_agrees_on_small_workloads() {
	let mut rng = StdRng::seed_from_u64( 0 );
	let workload = random_connectivity_workload( 30, 1_000, 0.5, &mut rng );
	check_connectivity_equivalence::<EmptyOracleForest>( &workload );
}
