//! Weighted and rooted behaviour of the link-cut engine.

use rand::rngs::StdRng;
use rand::SeedableRng;

use dynforest::RootedDynamicForest;
use dynforest::link_cut::{EmptyLinkCutForest, GroupLinkCutForest, MonoidLinkCutForest, RootedLinkCutForest};
use dynforest::verify::{check_path_weight_equivalence, check_rooted_equivalence};
use dynforest::weight::{CountWeight, I64SumWeight, U64MaxWeight, U64XorWeight};

use crate::util::OracleTestForest;

#[test]
fn test_group_weights_against_oracle() {
	const NUM_VERTICES : usize = 30;
	const NUM_STEPS : usize = 500;

	let mut rng = StdRng::seed_from_u64( 0 );
	let mut tf : OracleTestForest<GroupLinkCutForest<I64SumWeight>> =
		OracleTestForest::new( NUM_VERTICES );
	for _ in 0..NUM_STEPS {
		tf.random_step( NUM_VERTICES, &mut rng );
	}
}

#[test]
fn test_monoid_weights_against_oracle() {
	const NUM_VERTICES : usize = 30;
	const NUM_STEPS : usize = 500;

	let mut rng = StdRng::seed_from_u64( 0 );
	let mut tf : OracleTestForest<MonoidLinkCutForest<U64MaxWeight>> =
		OracleTestForest::new( NUM_VERTICES );
	for _ in 0..NUM_STEPS {
		tf.random_step( NUM_VERTICES, &mut rng );
	}
}

#[test]
fn test_xor_weights_against_reference() {
	let mut rng = StdRng::seed_from_u64( 3 );
	check_path_weight_equivalence::<GroupLinkCutForest<U64XorWeight>>( 50, 2_000, &mut rng );
}

#[test]
fn test_edge_counting_against_reference() {
	let mut rng = StdRng::seed_from_u64( 4 );
	check_path_weight_equivalence::<MonoidLinkCutForest<CountWeight>>( 50, 2_000, &mut rng );
}

#[test]
fn test_rooted_operations_against_reference() {
	for seed in [0u64, 5, 99] {
		let mut rng = StdRng::seed_from_u64( seed );
		check_rooted_equivalence::<EmptyLinkCutForest>( 50, 2_000, &mut rng );
	}
}

#[test]
fn test_rooted_forest_without_evert() {
	let mut f = RootedLinkCutForest::new( 7 );
	// Two trees:   0        5
	//             / \       |
	//            1   2      6
	//           / \
	//          3   4
	f.link( 1, 0 ).unwrap();
	f.link( 2, 0 ).unwrap();
	f.link( 3, 1 ).unwrap();
	f.link( 4, 1 ).unwrap();
	f.link( 6, 5 ).unwrap();

	assert_eq!( f.find_root( 4 ), Ok( 0 ) );
	assert_eq!( f.find_root( 6 ), Ok( 5 ) );
	assert_eq!( f.lowest_common_ancestor( 3, 4 ), Ok( Some( 1 ) ) );
	assert_eq!( f.lowest_common_ancestor( 4, 2 ), Ok( Some( 0 ) ) );
	assert_eq!( f.lowest_common_ancestor( 3, 6 ), Ok( None ) );

	// A non-root cannot be linked anywhere
	assert!( f.link( 1, 5 ).is_err() );
	// Linking within one tree is rejected
	assert!( f.link( 5, 6 ).is_err() );

	f.cut_from_parent( 1 ).unwrap();
	assert_eq!( f.find_root( 4 ), Ok( 1 ) );
	assert_eq!( f.lowest_common_ancestor( 4, 2 ), Ok( None ) );
}
