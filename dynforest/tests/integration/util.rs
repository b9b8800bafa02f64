use rand::Rng;

use dynforest::{DynamicForest, WeightedDynamicForest};
use dynforest::pg::OracleForest;
use dynforest::verify::random_vertex_pair;
use dynforest::weight::GeneratableWeight;

/// Drives a weighted subject engine and the petgraph oracle in lock-step.
pub struct OracleTestForest<TForest : WeightedDynamicForest> {
	subject : TForest,
	oracle : OracleForest<TForest::Weight>,
	edges : Vec<(usize, usize)>
}

impl<TForest : WeightedDynamicForest> OracleTestForest<TForest>
	where TForest::Weight : GeneratableWeight
{
	pub fn new( num_vertices : usize ) -> Self {
		OracleTestForest {
			subject : TForest::new( num_vertices ),
			oracle : DynamicForest::new( num_vertices ),
			edges : vec![]
		}
	}

	pub fn check_path_weight( &mut self, u : usize, v : usize ) {
		assert_eq!( self.subject.path_weight( u, v ).unwrap(),
			self.oracle.path_weight( u, v ).unwrap(),
			"path_weight({u},{v}) diverged from the oracle" );
	}

	/// Performs one random step: links disconnected pairs, and for connected pairs either
	/// compares the path weight or cuts a random present edge.
	pub fn random_step( &mut self, num_vertices : usize, rng : &mut impl Rng ) {
		let ( u, v ) = random_vertex_pair( num_vertices, rng );
		if self.oracle.connected( u, v ).unwrap() {
			if rng.gen_bool( 0.5 ) {
				self.check_path_weight( u, v );
			}
			else {
				let idx = rng.gen_range( 0..self.edges.len() );
				let ( x, y ) = self.edges.swap_remove( idx );
				self.subject.cut( x, y ).unwrap();
				self.oracle.cut( x, y ).unwrap();
			}
		}
		else {
			let w = TForest::Weight::generate( rng );
			self.subject.link_weighted( u, v, w ).unwrap();
			self.oracle.link_weighted( u, v, w ).unwrap();
			self.edges.push( ( u, v ) );
		}
		assert_eq!( self.subject.connected( u, v ).unwrap(), self.oracle.connected( u, v ).unwrap() );
	}
}
