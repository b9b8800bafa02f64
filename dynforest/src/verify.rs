/*!
Random workload generation and the lock-step equivalence tester.

The generators produce *valid* operation sequences by tracking the forest state in a naive
reference engine while generating. The checkers drive a subject engine and the naive reference
through the same sequence and compare every observable answer; a divergence panics with the
failing step. This module encodes the behavioural contract of the crate and is compiled only
with the `generate` feature.
*/

use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::{DynamicForest, EversibleRootedDynamicForest, NodeIdx, RootedDynamicForest, WeightedDynamicForest};
use crate::naive::{EmptyNaiveForest, NaiveForest, NaiveRootedForest};
use crate::stt::Stt;
use crate::weight::GeneratableWeight;
use crate::workload::{Query, Workload, WorkloadKind};


/// Generates a uniformly random pair of distinct vertices in `0..num_vertices`.
pub fn random_vertex_pair( num_vertices : usize, rng : &mut impl Rng ) -> (usize, usize) {
	let u = rng.gen_range( 0..num_vertices );
	let mut v = rng.gen_range( 0..num_vertices - 1 );
	if v >= u {
		v += 1;
	}
	( u, v )
}


/// Generates a random, valid connectivity workload.
///
/// Each round samples a vertex pair. Pairs in different trees are linked; pairs in the same tree
/// become a connectivity query with probability `query_prob` and otherwise delete a random
/// present edge. The result parses and executes against every engine without precondition
/// violations.
pub fn random_connectivity_workload( num_vertices : usize, num_queries : usize, query_prob : f64,
		rng : &mut impl Rng ) -> Workload
{
	let mut state = EmptyNaiveForest::new( num_vertices );
	let mut edges : Vec<(usize, usize)> = vec![];
	let mut queries : Vec<Query> = vec![];

	for _ in 0..num_queries {
		let ( u, v ) = random_vertex_pair( num_vertices, rng );
		if state.connected( u, v ).unwrap() {
			if rng.gen_bool( query_prob ) {
				queries.push( Query::Connected( u, v ) );
			}
			else {
				let idx = rng.gen_range( 0..edges.len() );
				let ( x, y ) = edges.swap_remove( idx );
				state.cut( x, y ).unwrap();
				queries.push( Query::Cut( x, y ) );
			}
		}
		else {
			state.link( u, v ).unwrap();
			edges.push( ( u, v ) );
			queries.push( Query::Link( u, v ) );
		}
	}

	Workload { kind : WorkloadKind::Connectivity, num_vertices, queries }
}


/// Runs `workload` on a fresh subject engine and on the naive reference in lock-step, comparing
/// the answer of every connectivity query.
///
/// Panics with the failing step on any divergence. The workload must contain only connectivity
/// operations.
pub fn check_connectivity_equivalence<TForest : DynamicForest>( workload : &Workload ) {
	let mut subject = TForest::new( workload.num_vertices );
	let mut reference = EmptyNaiveForest::new( workload.num_vertices );

	for ( step, query ) in workload.queries.iter().enumerate() {
		match *query {
			Query::Link( u, v ) => {
				subject.link( u, v )
					.unwrap_or_else( |e| panic!( "step {step}: subject rejected link({u},{v}): {e}" ) );
				reference.link( u, v ).unwrap();
			}
			Query::Cut( u, v ) => {
				subject.cut( u, v )
					.unwrap_or_else( |e| panic!( "step {step}: subject rejected cut({u},{v}): {e}" ) );
				reference.cut( u, v ).unwrap();
			}
			Query::Connected( u, v ) => {
				let expected = reference.connected( u, v ).unwrap();
				let actual = subject.connected( u, v ).unwrap();
				assert_eq!( actual, expected, "step {step}: connected({u},{v}) diverged" );
			}
			_ => panic!( "step {step}: connectivity workloads contain no rooted operations" )
		}
	}
}


/// Drives a weighted subject engine and the weighted naive reference through a random valid
/// operation sequence, comparing every path weight.
///
/// Panics with the failing step on any divergence.
pub fn check_path_weight_equivalence<TForest>( num_vertices : usize, num_steps : usize,
		rng : &mut impl Rng )
	where TForest : WeightedDynamicForest, TForest::Weight : GeneratableWeight
{
	let mut subject = TForest::new( num_vertices );
	let mut reference : NaiveForest<TForest::Weight> = DynamicForest::new( num_vertices );
	let mut edges : Vec<(usize, usize)> = vec![];

	for step in 0..num_steps {
		let ( u, v ) = random_vertex_pair( num_vertices, rng );
		if reference.connected( u, v ).unwrap() {
			if rng.gen_bool( 0.5 ) {
				let expected = reference.path_weight( u, v ).unwrap();
				let actual = subject.path_weight( u, v ).unwrap();
				assert_eq!( actual, expected, "step {step}: path_weight({u},{v}) diverged" );
			}
			else {
				let idx = rng.gen_range( 0..edges.len() );
				let ( x, y ) = edges.swap_remove( idx );
				subject.cut( x, y ).unwrap();
				reference.cut( x, y ).unwrap();
			}
		}
		else {
			let w = TForest::Weight::generate( rng );
			subject.link_weighted( u, v, w ).unwrap();
			reference.link_weighted( u, v, w ).unwrap();
			edges.push( ( u, v ) );
			// Disconnected pairs must agree as well
			assert_eq!( subject.path_weight( v, u ).unwrap(), reference.path_weight( v, u ).unwrap(),
				"step {step}: path_weight({v},{u}) diverged" );
		}
	}
}


/// Drives an eversible rooted subject engine and the naive rooted reference through a random
/// valid operation sequence, comparing roots and lowest common ancestors.
///
/// Panics with the failing step on any divergence.
pub fn check_rooted_equivalence<TForest : EversibleRootedDynamicForest>( num_vertices : usize,
		num_steps : usize, rng : &mut impl Rng )
{
	let mut subject = TForest::new( num_vertices );
	let mut reference = NaiveRootedForest::new( num_vertices );

	for step in 0..num_steps {
		let ( u, v ) = random_vertex_pair( num_vertices, rng );

		if reference.find_root( u ).unwrap() == u && reference.lowest_common_ancestor( u, v ).unwrap().is_none() {
			subject.link( u, v )
				.unwrap_or_else( |e| panic!( "step {step}: subject rejected link({u},{v}): {e}" ) );
			reference.link( u, v ).unwrap();
		}
		else {
			match rng.gen_range( 0..4 ) {
				0 => {
					if reference.find_root( u ).unwrap() != u {
						subject.cut_from_parent( u )
							.unwrap_or_else( |e| panic!( "step {step}: subject rejected cut_from_parent({u}): {e}" ) );
						reference.cut_from_parent( u ).unwrap();
					}
				}
				1 => {
					subject.evert( u ).unwrap();
					reference.evert( u ).unwrap();
				}
				_ => {} // Fall through to the observation checks below
			}
		}

		assert_eq!( subject.find_root( u ).unwrap(), reference.find_root( u ).unwrap(),
			"step {step}: find_root({u}) diverged" );
		assert_eq!( subject.lowest_common_ancestor( u, v ).unwrap(),
			reference.lowest_common_ancestor( u, v ).unwrap(),
			"step {step}: lowest_common_ancestor({u},{v}) diverged" );
	}
}


/// Generates a random 1-cut search tree forest forming a single tree on `num_vertices` nodes.
pub fn random_stt( num_vertices : usize, rng : &mut impl Rng ) -> Stt {
	let mut order : Vec<usize> = (0..num_vertices).collect();
	order.shuffle( rng );

	let mut t = Stt::new( num_vertices );
	for i in 1..num_vertices {
		let p = order[rng.gen_range( 0..i )];
		t.attach( NodeIdx::new( order[i] ), NodeIdx::new( p ) );
	}
	t
}


/// The represented edge set of a search tree forest, normalized for comparison.
pub fn represented_edges( t : &Stt ) -> Vec<(usize, usize)> {
	let mut t = t.clone();
	t.make_one_cut();
	t.edges()
		.map( |( u, v )| {
			let ( u, v ) = ( u.index(), v.index() );
			if u <= v { ( u, v ) } else { ( v, u ) }
		} )
		.sorted()
		.collect()
}
