//! Structural tests for the search-tree-on-tree rotation kernel.

use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dynforest::NodeIdx;
use dynforest::verify::{random_stt, represented_edges};

#[test]
pub fn test_random_rotations() {
	const SIZE : usize = 100;
	const NUM_TESTS : usize = 5;
	const NUM_ROTATIONS : usize = 200;

	let mut rng = StdRng::seed_from_u64( 0 );
	for _ in 0..NUM_TESTS {
		let mut t = random_stt( SIZE, &mut rng );
		let original_edges = represented_edges( &t );

		let mut rot_counter = 0;
		for rot_idx in 0..NUM_ROTATIONS {
			let v = NodeIdx::new( rng.gen_range( 0..SIZE ) );
			if t.can_rotate( v ) {
				let reported = t.rotate( v );
				rot_counter += 1;
				assert_eq!( reported, t.sep_type( v ),
					"rotation #{rot_idx} reported the wrong separator type" );
			}

			assert!( t.is_valid(), "rotation #{rot_idx} produced an invalid tree:\n{}", t );
			assert_eq!( represented_edges( &t ), original_edges,
				"rotation #{rot_idx} changed the represented tree:\n{}", t );
		}
		assert!( rot_counter > 0 );

		let mut flat = t.clone();
		flat.make_one_cut();
		assert!( flat.nodes().all( |v| !flat.is_separator( v ) ), "not 1-cut:\n{}", flat );
	}
}

#[test]
pub fn test_specialized_rotations_match_general() {
	const SIZE : usize = 50;
	const NUM_ROTATIONS : usize = 500;

	let mut rng = StdRng::seed_from_u64( 1 );
	let mut t = random_stt( SIZE, &mut rng );
	let mut hinted = t.clone();

	for _ in 0..NUM_ROTATIONS {
		let v = NodeIdx::new( rng.gen_range( 0..SIZE ) );
		if !t.can_rotate( v ) {
			continue;
		}
		let v_type = t.sep_type( v );
		t.rotate( v );
		hinted.rotate_hinted( v, v_type );

		for x in t.nodes() {
			assert_eq!( t.parent( x ), hinted.parent( x ) );
			assert_eq!( t.dsep_child( x ), hinted.dsep_child( x ) );
			assert_eq!( t.isep_child( x ), hinted.isep_child( x ) );
		}
	}
}
