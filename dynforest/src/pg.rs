//! A petgraph-backed oracle forest.
//!
//! Answers every query from an explicit undirected graph. Very slow; only intended for
//! comparison and verification.

use petgraph::algo;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::{check_edge_vertices, check_vertex, DynamicForest, Error, WeightedDynamicForest};
use crate::weight::{MonoidWeight, NoWeight};


/// An unweighted oracle forest.
pub type EmptyOracleForest = OracleForest<NoWeight>;


fn conv_idx( v : usize ) -> NodeIndex {
	NodeIndex::new( v )
}


/// A straight-forward dynamic forest implementation backed by a petgraph graph.
pub struct OracleForest<TWeight : MonoidWeight> {
	g : UnGraph<(), TWeight>
}

impl<TWeight : MonoidWeight> DynamicForest for OracleForest<TWeight> {
	fn new( num_vertices : usize ) -> Self {
		let mut g = UnGraph::new_undirected();
		for i in 0..num_vertices {
			let v = g.add_node( () );
			assert_eq!( v.index(), i, "Unexpected petgraph index {}, expected {i}", v.index() );
		}
		OracleForest { g }
	}

	fn num_vertices( &self ) -> usize {
		self.g.node_count()
	}

	fn link( &mut self, u : usize, v : usize ) -> Result<(), Error> {
		self.link_weighted( u, v, TWeight::identity() )
	}

	fn cut( &mut self, u : usize, v : usize ) -> Result<(), Error> {
		check_edge_vertices( self.num_vertices(), u, v )?;
		match self.g.find_edge( conv_idx( u ), conv_idx( v ) ) {
			Some( e ) => {
				self.g.remove_edge( e );
				Ok( () )
			}
			None => Err( Error::PreconditionViolated( "cannot cut an edge that is not in the forest" ) )
		}
	}

	fn connected( &mut self, u : usize, v : usize ) -> Result<bool, Error> {
		check_vertex( self.num_vertices(), u )?;
		check_vertex( self.num_vertices(), v )?;
		Ok( algo::has_path_connecting( &self.g, conv_idx( u ), conv_idx( v ), None ) )
	}
}

impl<TWeight : MonoidWeight> WeightedDynamicForest for OracleForest<TWeight> {
	type Weight = TWeight;

	fn link_weighted( &mut self, u : usize, v : usize, weight : TWeight ) -> Result<(), Error> {
		check_edge_vertices( self.num_vertices(), u, v )?;
		if algo::has_path_connecting( &self.g, conv_idx( u ), conv_idx( v ), None ) {
			return Err( Error::PreconditionViolated( "cannot link two vertices in the same tree" ) );
		}
		self.g.add_edge( conv_idx( u ), conv_idx( v ), weight );
		Ok( () )
	}

	fn path_weight( &mut self, u : usize, v : usize ) -> Result<Option<TWeight>, Error> {
		check_vertex( self.num_vertices(), u )?;
		check_vertex( self.num_vertices(), v )?;
		if u == v {
			return Ok( Some( TWeight::identity() ) );
		}
		// There is at most one simple path in a forest
		let path : Option<Vec<NodeIndex>> = algo::all_simple_paths(
				&self.g, conv_idx( u ), conv_idx( v ), 0, None ).next();
		match path {
			Some( path ) => {
				let mut total = TWeight::identity();
				for i in 0..path.len() - 1 {
					let e = self.g.find_edge( path[i], path[i + 1] ).unwrap();
					total = total + *self.g.edge_weight( e ).unwrap();
				}
				Ok( Some( total ) )
			}
			None => Ok( None )
		}
	}
}
