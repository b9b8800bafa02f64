/*!
Naive reference engines.

Both engines here keep nothing but a parent pointer (plus a parent distance in the weighted
case) and answer every operation by walking. They take linear time per operation and exist to
encode the behavioural contract: the equivalence tester drives them in lock-step with the
self-adjusting engines and compares every answer.

Long paths are handled without recursion; everting reverses the parent chain in place.
*/

use crate::{check_edge_vertices, check_vertex, DynamicForest, Error, EversibleRootedDynamicForest, NodeIdx, RootedDynamicForest, WeightedDynamicForest};
use crate::weight::{MonoidWeight, NoWeight, WeightOrInfinity};
use crate::weight::WeightOrInfinity::{Finite, Infinite};


/// An unweighted naive forest.
pub type EmptyNaiveForest = NaiveForest<NoWeight>;


#[derive(Clone, Debug)]
struct NaiveNode<TWeight : MonoidWeight> {
	parent : Option<NodeIdx>,
	pdist : WeightOrInfinity<TWeight>
}

impl<TWeight : MonoidWeight> NaiveNode<TWeight> {
	fn new() -> Self {
		NaiveNode { parent : None, pdist : Infinite }
	}
}


/// A dynamic forest that maintains each tree as an explicit rooting of itself.
///
/// Every operation walks parent pointers, giving O(n) time per operation.
#[derive(Clone)]
pub struct NaiveForest<TWeight : MonoidWeight = NoWeight> {
	nodes : Vec<NaiveNode<TWeight>>
}

impl<TWeight : MonoidWeight> NaiveForest<TWeight> {
	fn node( &self, v : NodeIdx ) -> &NaiveNode<TWeight> {
		&self.nodes[v.index()]
	}

	fn node_mut( &mut self, v : NodeIdx ) -> &mut NaiveNode<TWeight> {
		&mut self.nodes[v.index()]
	}

	fn root_of( &self, v : NodeIdx ) -> NodeIdx {
		let mut x = v;
		while let Some( p ) = self.node( x ).parent {
			x = p;
		}
		x
	}

	/// Makes `v` the root of its tree by reversing the parent chain in place.
	fn evert_node( &mut self, v : NodeIdx ) {
		let mut child : Option<NodeIdx> = None;
		// The parent distance the current node inherits from its new parent.
		let mut carry : WeightOrInfinity<TWeight> = Infinite;
		let mut x_opt = Some( v );
		while let Some( x ) = x_opt {
			let next = self.node( x ).parent;
			let next_carry = self.node( x ).pdist;
			self.node_mut( x ).parent = child;
			self.node_mut( x ).pdist = carry;
			child = Some( x );
			carry = next_carry;
			x_opt = next;
		}
	}
}

impl<TWeight : MonoidWeight> DynamicForest for NaiveForest<TWeight> {
	fn new( num_vertices : usize ) -> Self {
		NaiveForest { nodes : (0..num_vertices).map( |_| NaiveNode::new() ).collect() }
	}

	fn num_vertices( &self ) -> usize {
		self.nodes.len()
	}

	fn link( &mut self, u : usize, v : usize ) -> Result<(), Error> {
		self.link_weighted( u, v, TWeight::identity() )
	}

	fn cut( &mut self, u : usize, v : usize ) -> Result<(), Error> {
		let ( u, v ) = check_edge_vertices( self.num_vertices(), u, v )?;
		if self.node( u ).parent == Some( v ) {
			self.node_mut( u ).parent = None;
			self.node_mut( u ).pdist = Infinite;
			Ok( () )
		}
		else if self.node( v ).parent == Some( u ) {
			self.node_mut( v ).parent = None;
			self.node_mut( v ).pdist = Infinite;
			Ok( () )
		}
		else {
			Err( Error::PreconditionViolated( "cannot cut an edge that is not in the forest" ) )
		}
	}

	fn connected( &mut self, u : usize, v : usize ) -> Result<bool, Error> {
		let u = check_vertex( self.num_vertices(), u )?;
		let v = check_vertex( self.num_vertices(), v )?;
		Ok( self.root_of( u ) == self.root_of( v ) )
	}
}

impl<TWeight : MonoidWeight> WeightedDynamicForest for NaiveForest<TWeight> {
	type Weight = TWeight;

	fn link_weighted( &mut self, u : usize, v : usize, weight : TWeight ) -> Result<(), Error> {
		let ( u, v ) = check_edge_vertices( self.num_vertices(), u, v )?;
		if self.root_of( u ) == self.root_of( v ) {
			return Err( Error::PreconditionViolated( "cannot link two vertices in the same tree" ) );
		}
		self.evert_node( u );
		self.node_mut( u ).parent = Some( v );
		self.node_mut( u ).pdist = Finite( weight );
		Ok( () )
	}

	fn path_weight( &mut self, u : usize, v : usize ) -> Result<Option<TWeight>, Error> {
		let u = check_vertex( self.num_vertices(), u )?;
		let v = check_vertex( self.num_vertices(), v )?;
		if u == v {
			return Ok( Some( TWeight::identity() ) );
		}
		self.evert_node( u );
		let mut w = TWeight::identity();
		let mut x = v;
		while let Some( p ) = self.node( x ).parent {
			w = w + self.node( x ).pdist.unwrap();
			x = p;
		}
		if x == u {
			Ok( Some( w ) )
		}
		else {
			Ok( None )
		}
	}
}


/// A naive forest of rooted trees.
#[derive(Clone)]
pub struct NaiveRootedForest {
	parents : Vec<Option<NodeIdx>>
}

impl NaiveRootedForest {
	fn root_of( &self, v : NodeIdx ) -> NodeIdx {
		let mut x = v;
		while let Some( p ) = self.parents[x.index()] {
			x = p;
		}
		x
	}

	fn depth_of( &self, v : NodeIdx ) -> usize {
		let mut depth = 0;
		let mut x = v;
		while let Some( p ) = self.parents[x.index()] {
			x = p;
			depth += 1;
		}
		depth
	}
}

impl RootedDynamicForest for NaiveRootedForest {
	fn new( num_vertices : usize ) -> Self {
		NaiveRootedForest { parents : vec![None; num_vertices] }
	}

	fn num_vertices( &self ) -> usize {
		self.parents.len()
	}

	fn link( &mut self, u : usize, v : usize ) -> Result<(), Error> {
		let ( u, v ) = check_edge_vertices( self.num_vertices(), u, v )?;
		if self.parents[u.index()].is_some() {
			return Err( Error::PreconditionViolated( "only a tree root can be linked below another vertex" ) );
		}
		if self.root_of( v ) == u {
			return Err( Error::PreconditionViolated( "cannot link two vertices in the same tree" ) );
		}
		self.parents[u.index()] = Some( v );
		Ok( () )
	}

	fn cut_from_parent( &mut self, v : usize ) -> Result<(), Error> {
		let v = check_vertex( self.num_vertices(), v )?;
		if self.parents[v.index()].is_none() {
			return Err( Error::PreconditionViolated( "cannot cut a tree root from its parent" ) );
		}
		self.parents[v.index()] = None;
		Ok( () )
	}

	fn find_root( &mut self, v : usize ) -> Result<usize, Error> {
		let v = check_vertex( self.num_vertices(), v )?;
		Ok( self.root_of( v ).index() )
	}

	fn lowest_common_ancestor( &mut self, u : usize, v : usize ) -> Result<Option<usize>, Error> {
		let u = check_vertex( self.num_vertices(), u )?;
		let v = check_vertex( self.num_vertices(), v )?;

		// Equalize depths, then climb in lock-step until the walks meet.
		let ( mut x, mut y ) = ( u, v );
		let mut depth_x = self.depth_of( x );
		let mut depth_y = self.depth_of( y );
		while depth_x > depth_y {
			x = self.parents[x.index()].unwrap();
			depth_x -= 1;
		}
		while depth_y > depth_x {
			y = self.parents[y.index()].unwrap();
			depth_y -= 1;
		}
		while x != y {
			match ( self.parents[x.index()], self.parents[y.index()] ) {
				( Some( px ), Some( py ) ) => {
					x = px;
					y = py;
				}
				_ => return Ok( None ) // Different trees
			}
		}
		Ok( Some( x.index() ) )
	}
}

impl EversibleRootedDynamicForest for NaiveRootedForest {
	fn evert( &mut self, v : usize ) -> Result<(), Error> {
		let v = check_vertex( self.num_vertices(), v )?;
		// Reverse the parent chain in place.
		let mut child : Option<NodeIdx> = None;
		let mut x_opt = Some( v );
		while let Some( x ) = x_opt {
			let next = self.parents[x.index()];
			self.parents[x.index()] = child;
			child = Some( x );
			x_opt = next;
		}
		Ok( () )
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use crate::weight::I64SumWeight;

	#[test]
	fn test_connectivity() {
		let mut f = EmptyNaiveForest::new( 4 );
		f.link( 0, 1 ).unwrap();
		f.link( 2, 3 ).unwrap();
		assert_eq!( f.connected( 0, 1 ), Ok( true ) );
		assert_eq!( f.connected( 1, 2 ), Ok( false ) );
		f.link( 1, 2 ).unwrap();
		assert_eq!( f.connected( 0, 3 ), Ok( true ) );
		assert!( f.link( 0, 3 ).is_err() );
		f.cut( 2, 1 ).unwrap();
		assert_eq!( f.connected( 0, 3 ), Ok( false ) );
	}

	#[test]
	fn test_path_weights() {
		let mut f : NaiveForest<I64SumWeight> = DynamicForest::new( 4 );
		f.link_weighted( 0, 1, I64SumWeight::new( 1 ) ).unwrap();
		f.link_weighted( 1, 2, I64SumWeight::new( 2 ) ).unwrap();
		f.link_weighted( 3, 1, I64SumWeight::new( 5 ) ).unwrap();
		assert_eq!( f.path_weight( 0, 2 ), Ok( Some( I64SumWeight::new( 3 ) ) ) );
		assert_eq!( f.path_weight( 0, 3 ), Ok( Some( I64SumWeight::new( 6 ) ) ) );
		assert_eq!( f.path_weight( 2, 2 ), Ok( Some( I64SumWeight::identity() ) ) );
	}

	#[test]
	fn test_rooted_walks() {
		let mut f = NaiveRootedForest::new( 5 );
		f.link( 1, 0 ).unwrap();
		f.link( 2, 0 ).unwrap();
		f.link( 3, 1 ).unwrap();
		assert_eq!( f.find_root( 3 ), Ok( 0 ) );
		assert_eq!( f.lowest_common_ancestor( 3, 2 ), Ok( Some( 0 ) ) );
		assert_eq!( f.lowest_common_ancestor( 3, 1 ), Ok( Some( 1 ) ) );
		assert_eq!( f.lowest_common_ancestor( 3, 4 ), Ok( None ) );
		f.evert( 3 ).unwrap();
		assert_eq!( f.find_root( 2 ), Ok( 3 ) );
		f.cut_from_parent( 0 ).unwrap();
		assert_eq!( f.lowest_common_ancestor( 0, 3 ), Ok( None ) );
		assert_eq!( f.find_root( 2 ), Ok( 0 ) );
	}
}
