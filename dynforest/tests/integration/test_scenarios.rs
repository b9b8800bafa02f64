//! Fixed operation sequences with known answers, run against every engine.

use dynforest::DynamicForest;
use dynforest::link_cut::EmptyLinkCutForest;
use dynforest::naive::EmptyNaiveForest;
use dynforest::pg::EmptyOracleForest;
use dynforest::stt::{GreedySplayForest, LocalTwoPassForest, MoveToRootForest};

#[test]
fn test() {
	test_for::<GreedySplayForest>();
	test_for::<MoveToRootForest>();
	test_for::<LocalTwoPassForest>();
	test_for::<EmptyLinkCutForest>();
	test_for::<EmptyNaiveForest>();
	test_for::<EmptyOracleForest>();
}

fn test_for<TForest : DynamicForest>() {
	linking_two_components::<TForest>();
	cut_with_reversed_endpoints::<TForest>();
	cut_middle_edge::<TForest>();
	splitting_a_path::<TForest>();
	star::<TForest>();
	connected_is_reflexive_and_symmetric::<TForest>();
	link_then_cut_restores_connectivity::<TForest>();
	precondition_violations::<TForest>();
}

fn link( f : &mut impl DynamicForest, u : usize, v : usize ) {
	DynamicForest::link( f, u, v ).unwrap();
}

fn cut( f : &mut impl DynamicForest, u : usize, v : usize ) {
	DynamicForest::cut( f, u, v ).unwrap();
}

fn connected( f : &mut impl DynamicForest, u : usize, v : usize ) -> bool {
	DynamicForest::connected( f, u, v ).unwrap()
}

fn linking_two_components<TForest : DynamicForest>() {
	let mut f = TForest::new( 5 );
	link( &mut f, 0, 1 );
	link( &mut f, 1, 2 );
	link( &mut f, 3, 4 );
	assert!( connected( &mut f, 0, 2 ) );
	assert!( !connected( &mut f, 2, 4 ) );
	link( &mut f, 2, 3 );
	assert!( connected( &mut f, 0, 4 ) );
}

fn cut_with_reversed_endpoints<TForest : DynamicForest>() {
	let mut f = TForest::new( 3 );
	link( &mut f, 0, 1 );
	link( &mut f, 1, 2 );
	cut( &mut f, 1, 0 );
	assert!( !connected( &mut f, 0, 2 ) );
	assert!( connected( &mut f, 1, 2 ) );
}

fn cut_middle_edge<TForest : DynamicForest>() {
	let mut f = TForest::new( 4 );
	link( &mut f, 0, 1 );
	link( &mut f, 2, 3 );
	link( &mut f, 1, 2 );
	cut( &mut f, 1, 2 );
	assert!( !connected( &mut f, 0, 3 ) );
}

fn splitting_a_path<TForest : DynamicForest>() {
	let mut f = TForest::new( 6 );
	for v in 0..5 {
		link( &mut f, v, v + 1 );
	}
	cut( &mut f, 2, 3 );
	assert!( !connected( &mut f, 0, 5 ) );
	assert!( connected( &mut f, 0, 2 ) );
	assert!( connected( &mut f, 3, 5 ) );
}

fn star<TForest : DynamicForest>() {
	let mut f = TForest::new( 10 );
	for i in 1..10 {
		link( &mut f, 0, i );
	}
	for i in 1..10 {
		for j in ( i + 1 )..10 {
			assert!( connected( &mut f, i, j ) );
		}
	}
	cut( &mut f, 0, 5 );
	assert!( !connected( &mut f, 5, 7 ) );
	assert!( connected( &mut f, 1, 7 ) );
}

fn connected_is_reflexive_and_symmetric<TForest : DynamicForest>() {
	let mut f = TForest::new( 4 );
	link( &mut f, 0, 1 );
	link( &mut f, 2, 1 );
	for u in 0..4 {
		assert!( connected( &mut f, u, u ) );
		for v in 0..4 {
			assert_eq!( connected( &mut f, u, v ), connected( &mut f, v, u ) );
		}
	}
}

fn link_then_cut_restores_connectivity<TForest : DynamicForest>() {
	let mut f = TForest::new( 6 );
	link( &mut f, 0, 1 );
	link( &mut f, 1, 2 );
	link( &mut f, 4, 5 );

	let before : Vec<Vec<bool>> = (0..6)
		.map( |u| (0..6).map( |v| connected( &mut f, u, v ) ).collect() )
		.collect();

	link( &mut f, 2, 4 );
	assert!( connected( &mut f, 0, 5 ) );
	cut( &mut f, 2, 4 );

	for u in 0..6 {
		for v in 0..6 {
			assert_eq!( connected( &mut f, u, v ), before[u][v] );
		}
	}
}

fn precondition_violations<TForest : DynamicForest>() {
	let mut f = TForest::new( 4 );
	link( &mut f, 0, 1 );
	link( &mut f, 1, 2 );

	// Same tree
	assert!( DynamicForest::link( &mut f, 0, 2 ).is_err() );
	// Identical endpoints
	assert!( DynamicForest::link( &mut f, 3, 3 ).is_err() );
	// Out of range
	assert!( DynamicForest::link( &mut f, 0, 4 ).is_err() );
	// Non-edge: connected but not adjacent
	assert!( DynamicForest::cut( &mut f, 0, 2 ).is_err() );
	// Non-edge: different trees
	assert!( DynamicForest::cut( &mut f, 0, 3 ).is_err() );

	// The rejected operations must not have changed anything
	assert!( connected( &mut f, 0, 2 ) );
	assert!( !connected( &mut f, 0, 3 ) );
}
